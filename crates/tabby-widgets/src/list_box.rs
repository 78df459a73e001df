// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! List box

use tabby::draw::Align;
use tabby::event::{Callback, Event, EventCx, Response, When};
use tabby::geom::Rect;
use tabby::toolkit::{NativeBrowser, NativeControl, Toolkit};

/// A list of text lines holding at most one selection
///
/// Selecting a line with the pointer is a click. The change handler fires
/// when lines are added or the selected line is removed through this
/// wrapper.
pub struct ListBox {
    native: Box<dyn NativeBrowser>,
    caption: String,
    armed: bool,
    on_click: Callback<ListBox>,
    on_change: Callback<ListBox>,
    on_enter: Callback<ListBox>,
    on_leave: Callback<ListBox>,
}

impl ListBox {
    /// Construct with no lines
    pub fn new(tk: &dyn Toolkit, rect: Rect, label: &str) -> Self {
        let mut native = tk.browser(rect, label);
        native.set_align(Align::TOP_LEFT);
        ListBox {
            native,
            caption: label.to_string(),
            armed: false,
            on_click: Callback::new(),
            on_change: Callback::new(),
            on_enter: Callback::new(),
            on_leave: Callback::new(),
        }
    }

    /// Set the handler called when a line is selected with the pointer
    pub fn on_click(&mut self, f: impl Fn(&mut Self) + 'static) {
        self.on_click.set(move |w, ()| f(w));
        if !self.armed {
            self.native.arm_callback(When::Release);
            self.armed = true;
        }
    }

    /// Set the handler called when lines are added or removed
    pub fn on_change(&mut self, f: impl Fn(&mut Self) + 'static) {
        self.on_change.set(move |w, ()| f(w));
    }

    /// Append a line
    pub fn add(&mut self, text: &str) {
        self.native.add(text);
        fire!(self.on_change);
    }

    /// Text of the selected line, or an empty string
    pub fn selected(&self) -> String {
        self.native
            .selected()
            .and_then(|index| self.native.text(index))
            .unwrap_or_default()
    }

    /// Index of the selected line
    #[inline]
    pub fn selected_index(&self) -> Option<usize> {
        self.native.selected()
    }

    /// Text of line `index`
    #[inline]
    pub fn get(&self, index: usize) -> Option<String> {
        self.native.text(index)
    }

    /// Remove the selected line, if any
    pub fn remove_selected(&mut self) {
        if let Some(index) = self.native.selected() {
            self.native.remove(index);
            fire!(self.on_change);
        }
    }

    /// Number of lines
    #[inline]
    pub fn len(&self) -> usize {
        self.native.len()
    }

    /// True when there are no lines
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.native.is_empty()
    }

    fn handle_event(&mut self, cx: &mut EventCx, event: Event) -> Response {
        let response = self.native.handle(cx, event);
        if self.native.take_activation() {
            fire!(self.on_click);
        }
        match event {
            Event::Enter => fire!(self.on_enter),
            Event::Leave => fire!(self.on_leave),
            _ => (),
        }
        response
    }
}

impl_native!(ListBox: dyn NativeBrowser);
impl_label!(ListBox);
impl_label_style!(ListBox);
impl_hover!(ListBox);
impl_widget!(ListBox);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use tabby::Widget;
    use tabby_headless::Headless;

    #[test]
    fn add_select_remove() {
        let tk = Headless::new();
        let mut list = ListBox::new(&tk, Rect::xywh(0, 0, 100, 180), "Items");
        let changes = Rc::new(Cell::new(0));
        let c = changes.clone();
        list.on_change(move |_| c.set(c.get() + 1));
        let clicked = Rc::new(RefCell::new(String::new()));
        let s = clicked.clone();
        list.on_click(move |w| *s.borrow_mut() = w.selected());

        for item in ["apple", "pear", "plum"] {
            list.add(item);
        }
        assert_eq!(changes.get(), 3);
        assert_eq!(list.selected(), "");
        // nothing selected
        list.remove_selected();
        assert_eq!(changes.get(), 3);

        // the second line
        let mut cx = EventCx::at((10, 20));
        assert_eq!(list.handle(&mut cx, Event::Push), Response::Used);
        assert_eq!(*clicked.borrow(), "pear");

        list.remove_selected();
        assert_eq!(changes.get(), 4);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).as_deref(), Some("plum"));
        assert_eq!(list.get(2), None);
        assert_eq!(list.selected_index(), None);
    }
}
