// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Push-buttons

use tabby::event::{Callback, Event, EventCx, Response, When};
use tabby::geom::Rect;
use tabby::toolkit::{ButtonKind, NativeButton, NativeControl, Toolkit};

macro_rules! button {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        pub struct $name {
            native: Box<dyn NativeButton>,
            caption: String,
            armed: bool,
            on_click: Callback<$name>,
            on_enter: Callback<$name>,
            on_leave: Callback<$name>,
        }

        impl $name {
            /// Construct with the given geometry and caption
            pub fn new(tk: &dyn Toolkit, rect: Rect, label: &str) -> Self {
                $name {
                    native: tk.button($kind, rect, label),
                    caption: label.to_string(),
                    armed: false,
                    on_click: Callback::new(),
                    on_enter: Callback::new(),
                    on_leave: Callback::new(),
                }
            }

            /// Set the handler called when the button is activated
            ///
            /// This replaces any previous handler.
            pub fn on_click(&mut self, f: impl Fn(&mut Self) + 'static) {
                self.on_click.set(move |w, ()| f(w));
                if !self.armed {
                    self.native.arm_callback(When::Release);
                    self.armed = true;
                }
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

        impl_native!($name: dyn NativeButton);
        impl_label!($name);
        impl_label_style!($name);
        impl_hover!($name);
        impl_widget!($name);
    };
}

button! {
    /// A push-button with a text label
    ///
    /// The click handler fires when the button is released with the pointer
    /// inside it.
    Button, ButtonKind::Push
}

button! {
    /// A push-button also activated by the Return key
    ReturnButton, ButtonKind::Return
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tabby::Widget;
    use tabby::class::{HasLabel, HasLabelStyle};
    use tabby::draw::Align;
    use tabby::toolkit::NativeGroup;
    use tabby_headless::Headless;

    fn click(w: &mut dyn Widget) {
        let mut cx = EventCx::at(w.rect().pos);
        let _ = w.handle(&mut cx, Event::Push);
        let _ = w.handle(&mut cx, Event::Release);
    }

    #[test]
    fn label_round_trip() {
        let tk = Headless::new();
        let mut button = Button::new(&tk, Rect::xywh(0, 0, 80, 25), "Go");
        assert_eq!(button.label(), "Go");
        button.set_label("Stop");
        assert_eq!(button.label(), "Stop");
        assert_eq!(tk.label(button.id()).as_deref(), Some("Stop"));
        button.set_label("");
        assert_eq!(button.label(), "");
    }

    #[test]
    fn resubscribe_replaces() {
        let tk = Headless::new();
        let mut button = Button::new(&tk, Rect::xywh(0, 0, 80, 25), "Go");
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let f = first.clone();
        button.on_click(move |_| f.set(f.get() + 1));
        let s = second.clone();
        button.on_click(move |_| s.set(s.get() + 1));

        click(&mut button);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn release_outside_does_not_click() {
        let tk = Headless::new();
        let mut button = Button::new(&tk, Rect::xywh(10, 10, 80, 25), "Go");
        let clicks = Rc::new(Cell::new(0));
        let c = clicks.clone();
        button.on_click(move |_| c.set(c.get() + 1));

        let mut cx = EventCx::at((20, 20));
        assert_eq!(button.handle(&mut cx, Event::Push), Response::Used);
        cx.set_coord((200, 200));
        let _ = button.handle(&mut cx, Event::Release);
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn hover_handlers() {
        let tk = Headless::new();
        let mut button = ReturnButton::new(&tk, Rect::xywh(0, 0, 80, 25), "OK");
        let log = Rc::new(Cell::new(0));
        let l = log.clone();
        button.on_enter(move |_| l.set(l.get() + 1));
        let l = log.clone();
        button.on_leave(move |_| l.set(l.get() + 10));

        let mut cx = EventCx::new();
        let _ = button.handle(&mut cx, Event::Enter);
        let _ = button.handle(&mut cx, Event::Leave);
        assert_eq!(log.get(), 11);
    }

    #[test]
    fn return_key_clicks() {
        let tk = Headless::new();
        let mut button = ReturnButton::new(&tk, Rect::xywh(0, 0, 80, 25), "OK");
        let clicks = Rc::new(Cell::new(0));
        let c = clicks.clone();
        button.on_click(move |b| {
            c.set(c.get() + 1);
            b.set_label("done");
        });

        let mut cx = EventCx::new().with_text("\r");
        assert_eq!(button.handle(&mut cx, Event::KeyDown), Response::Used);
        assert_eq!(clicks.get(), 1);
        assert_eq!(button.label(), "done");
    }

    #[test]
    fn style_redraws_parent() {
        let tk = Headless::new();
        let mut group = tk.group(Rect::xywh(0, 0, 200, 200), "");
        let mut button = Button::new(&tk, Rect::xywh(0, 0, 80, 25), "Go");
        group.add_child(button.id());

        button.set_align(Align::LEFT | Align::INSIDE);
        button.set_label_size(20);
        assert_eq!(button.align(), Align::LEFT | Align::INSIDE);
        assert_eq!(button.label_size(), 20);
        assert_eq!(tk.redraws(group.id()), 2);
    }
}
