// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Text inputs

use std::num::{ParseFloatError, ParseIntError};
use tabby::class::HasString;
use tabby::draw::Align;
use tabby::event::{Callback, Event, EventCx, Response, When};
use tabby::geom::Rect;
use tabby::toolkit::{InputKind, NativeControl, NativeInput, Toolkit};

macro_rules! input {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        pub struct $name {
            native: Box<dyn NativeInput>,
            caption: String,
            armed: bool,
            on_click: Callback<$name>,
            on_change: Callback<$name>,
            on_enter: Callback<$name>,
            on_leave: Callback<$name>,
        }

        impl $name {
            /// Construct, initially empty
            pub fn new(tk: &dyn Toolkit, rect: Rect, label: &str) -> Self {
                let mut native = tk.input($kind, rect, label);
                native.set_align(Align::TOP_LEFT);
                $name {
                    native,
                    caption: label.to_string(),
                    armed: false,
                    on_click: Callback::new(),
                    on_change: Callback::new(),
                    on_enter: Callback::new(),
                    on_leave: Callback::new(),
                }
            }

            /// Set the handler called on release inside the focused input
            pub fn on_click(&mut self, f: impl Fn(&mut Self) + 'static) {
                self.on_click.set(move |w, ()| f(w));
            }

            /// Set the handler called when the text changes
            pub fn on_change(&mut self, f: impl Fn(&mut Self) + 'static) {
                self.on_change.set(move |w, ()| f(w));
                if !self.armed {
                    self.native.arm_callback(When::Changed);
                    self.armed = true;
                }
            }

            /// Clear the text
            pub fn clear(&mut self) {
                self.native.set_value("");
                fire!(self.on_change);
            }

            /// True when there is no text
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.native.value().is_empty()
            }

            fn set_text(&mut self, text: &str) {
                self.native.set_value(text);
                fire!(self.on_change);
            }

            fn handle_event(&mut self, cx: &mut EventCx, event: Event) -> Response {
                let response = self.native.handle(cx, event);
                if self.native.take_activation() {
                    fire!(self.on_change);
                }
                match event {
                    Event::Release
                        if cx.has_focus(self.native.id()) && cx.event_inside(self.native.rect()) =>
                    {
                        fire!(self.on_click)
                    }
                    Event::Enter => fire!(self.on_enter),
                    Event::Leave => fire!(self.on_leave),
                    _ => (),
                }
                response
            }
        }

        impl_native!($name: dyn NativeInput);
        impl_label!($name);
        impl_label_style!($name);
        impl_hover!($name);
        impl_widget!($name);
    };
}

input! {
    /// A single-line text input
    Input, InputKind::Normal
}

input! {
    /// A multi-line text input
    Memo, InputKind::Multiline
}

input! {
    /// A single-line input accepting floating-point numbers
    FloatInput, InputKind::Float
}

input! {
    /// A single-line input accepting integers
    IntInput, InputKind::Int
}

macro_rules! impl_text_value {
    ($($name:ident),*) => {$(
        impl $name {
            /// The current text
            #[inline]
            pub fn value(&self) -> String {
                self.native.value()
            }

            /// Replace the text
            pub fn set_value(&mut self, text: &str) {
                self.set_text(text);
            }
        }

        impl HasString for $name {
            fn get_string(&self) -> String {
                self.value()
            }

            fn set_str(&mut self, text: &str) {
                self.set_value(text);
            }
        }
    )*};
}

impl_text_value!(Input, Memo);

impl FloatInput {
    /// Parse the current text
    pub fn value(&self) -> Result<f32, ParseFloatError> {
        self.native.value().parse()
    }

    /// Replace the text with the formatted `value`
    pub fn set_value(&mut self, value: f32) {
        self.set_text(&value.to_string());
    }
}

impl IntInput {
    /// Parse the current text
    pub fn value(&self) -> Result<i32, ParseIntError> {
        self.native.value().parse()
    }

    /// Replace the text with the formatted `value`
    pub fn set_value(&mut self, value: i32) {
        self.set_text(&value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tabby::Widget;
    use tabby_headless::Headless;

    fn rect() -> Rect {
        Rect::xywh(0, 0, 120, 25)
    }

    #[test]
    fn float_round_trip() {
        let tk = Headless::new();
        let mut input = FloatInput::new(&tk, rect(), "x");
        assert_eq!(input.native().input_kind(), InputKind::Float);
        input.set_value(3.5);
        assert_eq!(input.value(), Ok(3.5));
        assert!(input.value().is_ok());

        input.native_mut().set_value("abc");
        assert!(input.value().is_err());
        input.clear();
        assert!(input.is_empty());
        assert!(input.value().is_err());
    }

    #[test]
    fn int_round_trip() {
        let tk = Headless::new();
        let mut input = IntInput::new(&tk, rect(), "n");
        input.set_value(0);
        assert_eq!(input.value(), Ok(0));
        input.set_value(-42);
        assert_eq!(input.native().value(), "-42");

        input.native_mut().set_value("4.2");
        assert!(input.value().is_err());
    }

    #[test]
    fn change_fires_on_set_and_typing() {
        let tk = Headless::new();
        let mut input = Input::new(&tk, rect(), "name");
        let changes = Rc::new(Cell::new(0));
        let c = changes.clone();
        input.on_change(move |_| c.set(c.get() + 1));

        input.set_value("ab");
        assert_eq!(input.get_string(), "ab");
        let mut cx = EventCx::new()
            .with_focus(Some(input.id()))
            .with_text("c");
        assert_eq!(input.handle(&mut cx, Event::KeyDown), Response::Used);
        assert_eq!(input.value(), "abc");
        input.clear();
        assert_eq!(changes.get(), 3);
    }

    #[test]
    fn click_requires_focus() {
        let tk = Headless::new();
        let mut memo = Memo::new(&tk, rect(), "notes");
        let clicks = Rc::new(Cell::new(0));
        let c = clicks.clone();
        memo.on_click(move |_| c.set(c.get() + 1));

        let mut cx = EventCx::at((10, 10));
        let _ = memo.handle(&mut cx, Event::Release);
        assert_eq!(clicks.get(), 0);

        let _ = memo.handle(&mut cx, Event::Push);
        assert!(cx.has_focus(memo.id()));
        let _ = memo.handle(&mut cx, Event::Release);
        assert_eq!(clicks.get(), 1);
    }
}
