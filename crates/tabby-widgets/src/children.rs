// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Child dispatch

use tabby::draw::Painter;
use tabby::event::{Event, EventCx, Response};
use tabby::geom::Coord;
use tabby::{Widget, WidgetId};

/// The children of a container
///
/// Owns its widgets and dispatches events to them the way a native group
/// does:
///
/// -   [`Event::Show`] and [`Event::Hide`] are broadcast to all children
/// -   [`Event::Push`] goes to the topmost child under the pointer; a child
///     using it grabs [`Event::Drag`] and [`Event::Release`] until release
/// -   [`Event::Move`] and [`Event::Enter`] update the hovered child, sending
///     [`Event::Leave`] / [`Event::Enter`] as it changes; [`Event::Leave`]
///     clears it
/// -   other events are offered to each child in turn until one uses them
///
/// Children added later are on top. Children which are native sub-windows
/// (see [`Widget::is_surface`]) receive coordinates relative to themselves.
#[derive(Default)]
pub struct Children {
    widgets: Vec<Box<dyn Widget>>,
    grab: Option<usize>,
    hover: Option<usize>,
}

impl Children {
    /// Construct with no children
    #[inline]
    pub fn new() -> Self {
        Children::default()
    }

    /// Add a child, returning its index
    pub fn push(&mut self, widget: Box<dyn Widget>) -> usize {
        log::debug!("Children::push: {} at {:?}", widget.id(), widget.rect());
        self.widgets.push(widget);
        self.widgets.len() - 1
    }

    /// Number of children
    #[inline]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// True when there are no children
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Access child `index`
    #[inline]
    pub fn get(&self, index: usize) -> Option<&dyn Widget> {
        self.widgets.get(index).map(|w| &**w)
    }

    /// Access child `index` mutably
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Widget + 'static)> {
        self.widgets.get_mut(index).map(|w| &mut **w)
    }

    /// Access child `index` as a `W`
    pub fn child<W: Widget>(&self, index: usize) -> Option<&W> {
        self.widgets.get(index)?.downcast_ref()
    }

    /// Access child `index` as a `W`, mutably
    pub fn child_mut<W: Widget>(&mut self, index: usize) -> Option<&mut W> {
        self.widgets.get_mut(index)?.downcast_mut()
    }

    /// Find the index of the child with identifier `id`
    pub fn find(&self, id: WidgetId) -> Option<usize> {
        self.widgets.iter().position(|w| w.id() == id)
    }

    /// Index of the topmost child containing `coord`
    pub fn index_at(&self, coord: Coord) -> Option<usize> {
        self.widgets.iter().rposition(|w| w.rect().contains(coord))
    }

    /// True if `coord` lies inside any child
    #[inline]
    pub fn occludes(&self, coord: Coord) -> bool {
        self.index_at(coord).is_some()
    }

    fn send(&mut self, index: usize, cx: &mut EventCx, event: Event) -> Response {
        let child = &mut self.widgets[index];
        if child.is_surface() {
            let origin = child.rect().pos;
            cx.with_origin(origin, |cx| child.handle(cx, event))
        } else {
            child.handle(cx, event)
        }
    }

    fn set_hover(&mut self, hover: Option<usize>, cx: &mut EventCx) {
        if hover == self.hover {
            return;
        }
        if let Some(old) = self.hover {
            let _ = self.send(old, cx, Event::Leave);
        }
        if let Some(new) = hover {
            let _ = self.send(new, cx, Event::Enter);
        }
        self.hover = hover;
    }

    /// Dispatch `event` to children
    pub fn handle(&mut self, cx: &mut EventCx, event: Event) -> Response {
        match event {
            Event::Show | Event::Hide => {
                let mut response = Response::Unused;
                for index in 0..self.widgets.len() {
                    response |= self.send(index, cx, event);
                }
                response
            }
            Event::Push => {
                let Some(index) = self.index_at(cx.coord()) else {
                    return Response::Unused;
                };
                let response = self.send(index, cx, event);
                if response.is_used() {
                    log::trace!("Children::handle: grab by {}", self.widgets[index].id());
                    self.grab = Some(index);
                }
                response
            }
            Event::Drag | Event::Release => {
                let target = self.grab.or_else(|| self.index_at(cx.coord()));
                if event == Event::Release {
                    self.grab = None;
                }
                match target {
                    Some(index) => self.send(index, cx, event),
                    None => Response::Unused,
                }
            }
            Event::Enter | Event::Move => {
                self.set_hover(self.index_at(cx.coord()), cx);
                match (event, self.hover) {
                    (Event::Move, Some(index)) => self.send(index, cx, event),
                    _ => Response::Unused,
                }
            }
            Event::Leave => {
                self.set_hover(None, cx);
                Response::Unused
            }
            _ => {
                for index in 0..self.widgets.len() {
                    if self.send(index, cx, event).is_used() {
                        return Response::Used;
                    }
                }
                Response::Unused
            }
        }
    }

    /// Draw all children, bottom first
    pub fn draw(&mut self, painter: &mut dyn Painter) {
        for widget in &mut self.widgets {
            widget.draw(painter);
        }
    }
}

impl std::fmt::Debug for Children {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<_> = self.widgets.iter().map(|w| w.id()).collect();
        f.debug_struct("Children")
            .field("widgets", &ids)
            .field("grab", &self.grab)
            .field("hover", &self.hover)
            .finish()
    }
}
