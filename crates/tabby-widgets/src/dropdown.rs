// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Drop-down choice

use tabby::class::HasString;
use tabby::draw::Align;
use tabby::event::{Callback, Event, EventCx, Response, When};
use tabby::geom::Rect;
use tabby::toolkit::{NativeChoice, NativeControl, Toolkit};

/// A drop-down list of text items with one selection
///
/// The first item added becomes selected. Programmatic selection changes
/// always notify the change handler, even when the selection does not
/// actually change.
pub struct Dropdown {
    native: Box<dyn NativeChoice>,
    caption: String,
    armed: bool,
    on_change: Callback<Dropdown>,
    on_enter: Callback<Dropdown>,
    on_leave: Callback<Dropdown>,
}

impl Dropdown {
    /// Construct with no items
    pub fn new(tk: &dyn Toolkit, rect: Rect, label: &str) -> Self {
        let mut native = tk.choice(rect, label);
        native.set_align(Align::TOP_LEFT);
        Dropdown {
            native,
            caption: label.to_string(),
            armed: false,
            on_change: Callback::new(),
            on_enter: Callback::new(),
            on_leave: Callback::new(),
        }
    }

    /// Set the handler called when the selection changes
    pub fn on_change(&mut self, f: impl Fn(&mut Self) + 'static) {
        self.on_change.set(move |w, ()| f(w));
        if !self.armed {
            self.native.arm_callback(When::Changed);
            self.armed = true;
        }
    }

    /// Append an item, returning its index
    ///
    /// Adding an existing item returns the index of that item.
    pub fn add(&mut self, item: &str) -> usize {
        let index = self.native.add(item);
        if index == 0 && self.native.value().is_none() {
            self.native.set_value(Some(0));
        }
        index
    }

    /// Number of items
    #[inline]
    pub fn len(&self) -> usize {
        self.native.len()
    }

    /// True when there are no items
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.native.is_empty()
    }

    /// Index of the selected item
    #[inline]
    pub fn value(&self) -> Option<usize> {
        self.native.value()
    }

    /// Select item `index`
    ///
    /// Out-of-range indices leave the selection unchanged.
    pub fn set_value(&mut self, index: usize) {
        self.native.set_value(Some(index));
        fire!(self.on_change);
    }

    /// Text of the selected item
    #[inline]
    pub fn text(&self) -> Option<String> {
        self.native.text()
    }

    /// Select the item with text `text`
    ///
    /// Clears the selection if there is no such item.
    pub fn set_text(&mut self, text: &str) {
        let index = self.native.find_index(text);
        self.native.set_value(index);
        fire!(self.on_change);
    }

    /// Remove item `index`; out-of-range indices are ignored
    pub fn remove(&mut self, index: usize) {
        self.native.remove(index);
    }

    /// Remove the item with text `text`, if any
    pub fn remove_text(&mut self, text: &str) {
        if let Some(index) = self.native.find_index(text) {
            self.native.remove(index);
        }
    }

    fn handle_event(&mut self, cx: &mut EventCx, event: Event) -> Response {
        let response = self.native.handle(cx, event);
        if self.native.take_activation() {
            fire!(self.on_change);
        }
        match event {
            Event::Enter => fire!(self.on_enter),
            Event::Leave => fire!(self.on_leave),
            _ => (),
        }
        response
    }
}

impl HasString for Dropdown {
    fn get_string(&self) -> String {
        self.text().unwrap_or_default()
    }

    fn set_str(&mut self, text: &str) {
        self.set_text(text);
    }
}

impl_native!(Dropdown: dyn NativeChoice);
impl_label!(Dropdown);
impl_label_style!(Dropdown);
impl_hover!(Dropdown);
impl_widget!(Dropdown);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tabby::Widget;
    use tabby::class::HasLabelStyle;
    use tabby_headless::Headless;

    fn colours(tk: &Headless) -> Dropdown {
        let mut dropdown = Dropdown::new(tk, Rect::xywh(0, 0, 100, 25), "Colour");
        for item in ["red", "green", "blue"] {
            dropdown.add(item);
        }
        dropdown
    }

    #[test]
    fn first_item_selected() {
        let tk = Headless::new();
        let dropdown = colours(&tk);
        assert_eq!(dropdown.align(), Align::TOP_LEFT);
        assert_eq!(dropdown.len(), 3);
        assert_eq!(dropdown.value(), Some(0));
        assert_eq!(dropdown.text().as_deref(), Some("red"));
    }

    #[test]
    fn set_text_and_remove() {
        let tk = Headless::new();
        let mut dropdown = colours(&tk);
        let changes = Rc::new(Cell::new(0));
        let c = changes.clone();
        dropdown.on_change(move |_| c.set(c.get() + 1));

        dropdown.set_text("blue");
        assert_eq!(dropdown.value(), Some(2));
        dropdown.set_value(2);
        assert_eq!(changes.get(), 2);

        dropdown.remove_text("purple");
        assert_eq!(dropdown.len(), 3);
        dropdown.remove_text("red");
        assert_eq!(dropdown.value(), Some(1));
        assert_eq!(dropdown.get_string(), "blue");

        dropdown.set_str("purple");
        assert_eq!(dropdown.value(), None);
        assert_eq!(changes.get(), 3);
    }

    #[test]
    fn user_pick_fires_change() {
        let tk = Headless::new();
        let mut dropdown = colours(&tk);
        let picked = Rc::new(Cell::new(None));
        let p = picked.clone();
        dropdown.on_change(move |w| p.set(w.value()));

        tk.push_popup(Some(1));
        let mut cx = EventCx::at((10, 10));
        assert_eq!(dropdown.handle(&mut cx, Event::Push), Response::Used);
        assert_eq!(picked.get(), Some(1));
    }
}
