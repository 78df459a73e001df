// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Event context

use crate::WidgetId;
use crate::geom::{Coord, Rect};

/// Event context
///
/// This holds the state the native toolkit associates with the event being
/// delivered: the pointer position, text typed by a key event and the current
/// keyboard focus. A toolkit constructs one per delivered event and keeps the
/// focus across events.
///
/// The pointer position is relative to the window (or nested surface)
/// receiving the event; see [`EventCx::with_origin`].
#[derive(Clone, Debug, Default)]
pub struct EventCx {
    coord: Coord,
    text: String,
    focus: Option<WidgetId>,
}

impl EventCx {
    /// Construct with pointer at the origin and no focus
    #[inline]
    pub fn new() -> Self {
        EventCx::default()
    }

    /// Construct with the pointer at `coord`
    #[inline]
    pub fn at(coord: impl Into<Coord>) -> Self {
        EventCx {
            coord: coord.into(),
            ..Default::default()
        }
    }

    /// Set the text associated with a key event (inline)
    #[inline]
    #[must_use]
    pub fn with_text(mut self, text: impl ToString) -> Self {
        self.text = text.to_string();
        self
    }

    /// Set the keyboard focus (inline)
    #[inline]
    #[must_use]
    pub fn with_focus(mut self, focus: Option<WidgetId>) -> Self {
        self.focus = focus;
        self
    }

    /// Pointer position of the current event
    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Set the pointer position
    #[inline]
    pub fn set_coord(&mut self, coord: impl Into<Coord>) {
        self.coord = coord.into();
    }

    /// Text typed by the current key event (may be empty)
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the text of the current key event
    #[inline]
    pub fn set_text(&mut self, text: impl ToString) {
        self.text = text.to_string();
    }

    /// The widget with keyboard focus, if any
    #[inline]
    pub fn focus(&self) -> Option<WidgetId> {
        self.focus
    }

    /// True if `id` has keyboard focus
    #[inline]
    pub fn has_focus(&self, id: WidgetId) -> bool {
        self.focus == Some(id)
    }

    /// Give keyboard focus to `id`
    pub fn set_focus(&mut self, id: WidgetId) {
        if self.focus != Some(id) {
            log::trace!("set_focus: {id}");
            self.focus = Some(id);
        }
    }

    /// Clear keyboard focus
    #[inline]
    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    /// True if the pointer lies within `rect`
    #[inline]
    pub fn event_inside(&self, rect: Rect) -> bool {
        rect.contains(self.coord)
    }

    /// Run `f` with pointer coordinates relative to `origin`
    ///
    /// Nested surfaces (which are native sub-windows) see pointer positions
    /// relative to their own top-left corner. Focus changes made by `f` are
    /// kept; the pointer position is restored afterwards.
    pub fn with_origin<R>(&mut self, origin: Coord, f: impl FnOnce(&mut Self) -> R) -> R {
        let coord = self.coord;
        self.coord = coord - origin;
        let result = f(self);
        self.coord = coord;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_origin_translates_and_restores() {
        let mut cx = EventCx::at((50, 40));
        let inner = cx.with_origin(Coord(10, 30), |cx| {
            cx.set_focus(WidgetId::new(7));
            cx.coord()
        });
        assert_eq!(inner, Coord(40, 10));
        assert_eq!(cx.coord(), Coord(50, 40));
        assert!(cx.has_focus(WidgetId::new(7)));
    }
}
