// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Static text

use tabby::class::HasLabelStyle;
use tabby::draw::{Align, Font, Rgb8};
use tabby::event::{Callback, Event, EventCx, Response};
use tabby::geom::Rect;
use tabby::toolkit::{NativeControl, Toolkit};

/// A box displaying a text label inside its bounds
///
/// A press on the box takes keyboard focus and is claimed; a subsequent
/// release inside the box is a click. Alignment is always within the box.
pub struct TextBox {
    native: Box<dyn NativeControl>,
    caption: String,
    on_click: Callback<TextBox>,
    on_enter: Callback<TextBox>,
    on_leave: Callback<TextBox>,
}

impl TextBox {
    /// Construct, with the text aligned left
    pub fn new(tk: &dyn Toolkit, rect: Rect, label: &str) -> Self {
        let mut native = tk.label_box(rect, label);
        native.set_align(Align::INSIDE | Align::LEFT);
        TextBox {
            native,
            caption: label.to_string(),
            on_click: Callback::new(),
            on_enter: Callback::new(),
            on_leave: Callback::new(),
        }
    }

    /// Set the handler called on release inside the focused box
    pub fn on_click(&mut self, f: impl Fn(&mut Self) + 'static) {
        self.on_click.set(move |w, ()| f(w));
    }

    fn handle_event(&mut self, cx: &mut EventCx, event: Event) -> Response {
        let response = self.native.handle(cx, event);
        let id = self.native.id();
        match event {
            Event::Push if cx.event_inside(self.native.rect()) => {
                cx.set_focus(id);
                return Response::Used;
            }
            Event::Release if cx.has_focus(id) && cx.event_inside(self.native.rect()) => {
                fire!(self.on_click)
            }
            Event::Enter => fire!(self.on_enter),
            Event::Leave => fire!(self.on_leave),
            _ => (),
        }
        response
    }
}

impl HasLabelStyle for TextBox {
    fn align(&self) -> Align {
        self.native.align()
    }

    /// Set alignment within the box
    ///
    /// [`Align::INSIDE`] is always added.
    fn set_align(&mut self, align: Align) {
        self.native.set_align(Align::INSIDE | align);
        self.native.redraw_label();
    }

    fn label_size(&self) -> i32 {
        self.native.label_size()
    }

    fn set_label_size(&mut self, size: i32) {
        self.native.set_label_size(size);
        self.native.redraw_label();
    }

    fn label_color(&self) -> Rgb8 {
        self.native.label_color()
    }

    fn set_label_color(&mut self, color: Rgb8) {
        self.native.set_label_color(color);
        self.native.redraw_label();
    }

    fn label_font(&self) -> Font {
        self.native.label_font()
    }

    fn set_label_font(&mut self, font: Font) {
        self.native.set_label_font(font);
        self.native.redraw_label();
    }
}

impl_native!(TextBox: dyn NativeControl);
impl_label!(TextBox);
impl_hover!(TextBox);
impl_widget!(TextBox);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tabby::Widget;
    use tabby::class::HasLabel;
    use tabby_headless::Headless;

    #[test]
    fn press_focuses_then_release_clicks() {
        let tk = Headless::new();
        let mut text = TextBox::new(&tk, Rect::xywh(0, 0, 200, 30), "Hello");
        let clicks = Rc::new(Cell::new(0));
        let c = clicks.clone();
        text.on_click(move |w| {
            c.set(c.get() + 1);
            w.set_label("clicked");
        });

        let mut cx = EventCx::at((5, 5));
        assert_eq!(text.handle(&mut cx, Event::Push), Response::Used);
        assert!(cx.has_focus(text.id()));
        let _ = text.handle(&mut cx, Event::Release);
        assert_eq!(clicks.get(), 1);
        assert_eq!(text.label(), "clicked");

        // pressing outside is not claimed
        cx.set_coord((500, 5));
        assert_eq!(text.handle(&mut cx, Event::Push), Response::Unused);
    }

    #[test]
    fn alignment_stays_inside() {
        let tk = Headless::new();
        let mut text = TextBox::new(&tk, Rect::xywh(0, 0, 200, 30), "Hello");
        assert_eq!(text.align(), Align::INSIDE | Align::LEFT);
        text.set_align(Align::RIGHT);
        assert_eq!(text.align(), Align::INSIDE | Align::RIGHT);
        text.set_label_size(18);
        assert_eq!(tk.label_redraws(text.id()), 2);
    }
}
