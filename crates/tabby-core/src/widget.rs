// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Widget traits

use crate::WidgetId;
use crate::draw::Painter;
use crate::event::{Event, EventCx, Response};
use crate::geom::{Coord, Rect};
use std::any::Any;

/// The trait implemented by every wrapper
///
/// A wrapper owns a native control handle (see [`crate::toolkit`]) and
/// intercepts its low-level event function. Containers own their children as
/// `Box<dyn Widget>`; dropping a container drops its children.
pub trait Widget: Any {
    /// Identifier of the native control
    fn id(&self) -> WidgetId;

    /// Position and size of the native control
    fn rect(&self) -> Rect;

    /// Handle a low-level event
    ///
    /// Implementations must run native default handling before invoking any
    /// semantic callback for the same event, and return the native
    /// [`Response`] unless they claim the event.
    fn handle(&mut self, cx: &mut EventCx, event: Event) -> Response;

    /// Custom drawing, called by the toolkit's draw pass
    ///
    /// The default implementation does nothing: the native control draws
    /// itself.
    fn draw(&mut self, painter: &mut dyn Painter) {
        let _ = painter;
    }

    /// True if this widget is a native sub-window
    ///
    /// Events delivered to a sub-window carry coordinates relative to it.
    fn is_surface(&self) -> bool {
        false
    }
}

impl dyn Widget {
    /// Downcast to a concrete widget type
    #[inline]
    pub fn downcast_ref<T: Widget>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref()
    }

    /// Downcast to a concrete widget type
    #[inline]
    pub fn downcast_mut<T: Widget>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut()
    }
}

/// Extension trait over widgets
pub trait WidgetExt: Widget {
    /// True if this widget has identifier `id`
    #[inline]
    fn is(&self, id: WidgetId) -> bool {
        self.id() == id
    }

    /// True if `coord` lies inside this widget's rect
    #[inline]
    fn contains(&self, coord: Coord) -> bool {
        self.rect().contains(coord)
    }
}

impl<W: Widget + ?Sized> WidgetExt for W {}
