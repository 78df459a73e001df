// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Toggle widgets

use tabby::class::HasBool;
use tabby::event::{Callback, Event, EventCx, Response, When};
use tabby::geom::Rect;
use tabby::toolkit::{ButtonKind, NativeButton, NativeControl, Toolkit};

/// Which handler the native callback is forwarded to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Activation {
    Click,
    Change,
}

/// A check box with a text label
///
/// The native control has a single callback: whichever of
/// [`CheckBox::on_click`] and [`CheckBox::on_change`] was set last receives
/// user toggles. Programmatic changes through [`CheckBox::check`] and
/// [`CheckBox::uncheck`] always notify the change handler.
pub struct CheckBox {
    native: Box<dyn NativeButton>,
    caption: String,
    activation: Option<Activation>,
    on_click: Callback<CheckBox>,
    on_change: Callback<CheckBox>,
    on_enter: Callback<CheckBox>,
    on_leave: Callback<CheckBox>,
}

impl CheckBox {
    /// Construct, initially unchecked
    pub fn new(tk: &dyn Toolkit, rect: Rect, label: &str) -> Self {
        CheckBox {
            native: tk.button(ButtonKind::Check, rect, label),
            caption: label.to_string(),
            activation: None,
            on_click: Callback::new(),
            on_change: Callback::new(),
            on_enter: Callback::new(),
            on_leave: Callback::new(),
        }
    }

    fn activate(&mut self, activation: Activation, when: When) {
        if self.activation != Some(activation) {
            self.native.arm_callback(when);
            self.activation = Some(activation);
        }
    }

    /// Set the handler called when the box is clicked
    pub fn on_click(&mut self, f: impl Fn(&mut Self) + 'static) {
        self.on_click.set(move |w, ()| f(w));
        self.activate(Activation::Click, When::Release);
    }

    /// Set the handler called when the checked state changes
    pub fn on_change(&mut self, f: impl Fn(&mut Self) + 'static) {
        self.on_change.set(move |w, ()| f(w));
        self.activate(Activation::Change, When::Changed);
    }

    /// Whether the box is checked
    #[inline]
    pub fn checked(&self) -> bool {
        self.native.value()
    }

    /// Check the box
    pub fn check(&mut self) {
        self.native.set_value(true);
        fire!(self.on_change);
    }

    /// Uncheck the box
    pub fn uncheck(&mut self) {
        self.native.set_value(false);
        fire!(self.on_change);
    }

    fn handle_event(&mut self, cx: &mut EventCx, event: Event) -> Response {
        let response = self.native.handle(cx, event);
        if self.native.take_activation() {
            match self.activation {
                Some(Activation::Click) => fire!(self.on_click),
                Some(Activation::Change) => fire!(self.on_change),
                None => (),
            }
        }
        match event {
            Event::Enter => fire!(self.on_enter),
            Event::Leave => fire!(self.on_leave),
            _ => (),
        }
        response
    }
}

impl HasBool for CheckBox {
    fn get_bool(&self) -> bool {
        self.checked()
    }

    fn set_bool(&mut self, state: bool) {
        if state {
            self.check();
        } else {
            self.uncheck();
        }
    }
}

impl_native!(CheckBox: dyn NativeButton);
impl_label!(CheckBox);
impl_label_style!(CheckBox);
impl_hover!(CheckBox);
impl_widget!(CheckBox);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tabby::Widget;
    use tabby_headless::Headless;

    fn toggle(check: &mut CheckBox) {
        let mut cx = EventCx::at((5, 5));
        let _ = check.handle(&mut cx, Event::Push);
        let _ = check.handle(&mut cx, Event::Release);
    }

    fn counter() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let c = Rc::new(Cell::new(0));
        (c.clone(), c)
    }

    #[test]
    fn programmatic_changes_notify() {
        let tk = Headless::new();
        let mut check = CheckBox::new(&tk, Rect::xywh(0, 0, 80, 20), "Bold");
        let (changes, c) = counter();
        check.on_change(move |w| {
            assert_eq!(w.checked(), w.get_bool());
            c.set(c.get() + 1);
        });

        check.check();
        assert!(check.checked());
        // no actual change, still notified
        check.check();
        check.set_bool(false);
        assert!(!check.checked());
        assert_eq!(changes.get(), 3);
    }

    #[test]
    fn user_toggle_goes_to_last_armed() {
        let tk = Headless::new();
        let mut check = CheckBox::new(&tk, Rect::xywh(0, 0, 80, 20), "Bold");
        let (clicks, c) = counter();
        check.on_click(move |_| c.set(c.get() + 1));
        let (changes, c) = counter();
        check.on_change(move |_| c.set(c.get() + 1));

        toggle(&mut check);
        assert!(check.checked());
        assert_eq!((clicks.get(), changes.get()), (0, 1));

        let c = clicks.clone();
        check.on_click(move |_| c.set(c.get() + 1));
        toggle(&mut check);
        assert!(!check.checked());
        assert_eq!((clicks.get(), changes.get()), (1, 1));
    }
}
