// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Hexagonal button

use std::f64::consts::PI;
use tabby::cast::ConvFloat;
use tabby::draw::Painter;
use tabby::event::{Callback, Event, EventCx, Response, When};
use tabby::geom::{Coord, Rect};
use tabby::toolkit::{ButtonKind, NativeButton, NativeControl, Toolkit};
use tabby::{Widget, WidgetId};

/// Offset of the label's baseline origin from the centre
const LABEL_OFFSET: Coord = Coord(-9, 9);

/// Label size, independent of the button's label style
const LABEL_SIZE: i32 = 28;

/// Vertices of the hexagon inscribed in `rect`
///
/// Vertex `k` lies at angle `k·60°` on the ellipse through the rect's edge
/// midpoints. The seventh vertex repeats the first.
fn hexagon(rect: Rect) -> [Coord; 7] {
    let (hw, hh) = (rect.size.0 / 2, rect.size.1 / 2);
    let (cx, cy) = (rect.pos.0 + hw, rect.pos.1 + hh);
    let mut vertices = [Coord::ZERO; 7];
    for (k, v) in vertices.iter_mut().enumerate().take(6) {
        let angle = PI / 3.0 * k as f64;
        *v = Coord(
            i32::conv_trunc(f64::from(cx) + f64::from(hw) * angle.cos()),
            i32::conv_trunc(f64::from(cy) + f64::from(hh) * angle.sin()),
        );
    }
    vertices[6] = vertices[0];
    vertices
}

/// A button drawn as a hexagon
///
/// The native button handles input; drawing is custom: the hexagon is filled
/// with the button's colour and outlined in its label colour, then the label
/// is drawn at size 28 near the
/// centre.
pub struct HexagonButton {
    native: Box<dyn NativeButton>,
    caption: String,
    armed: bool,
    on_click: Callback<HexagonButton>,
    on_enter: Callback<HexagonButton>,
    on_leave: Callback<HexagonButton>,
}

impl HexagonButton {
    /// Construct with the given geometry and caption
    pub fn new(tk: &dyn Toolkit, rect: Rect, label: &str) -> Self {
        HexagonButton {
            native: tk.button(ButtonKind::Push, rect, label),
            caption: label.to_string(),
            armed: false,
            on_click: Callback::new(),
            on_enter: Callback::new(),
            on_leave: Callback::new(),
        }
    }

    /// Set the handler called when the button is activated
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

impl_native!(HexagonButton: dyn NativeButton);
impl_label!(HexagonButton);
impl_label_style!(HexagonButton);
impl_hover!(HexagonButton);

impl Widget for HexagonButton {
    #[inline]
    fn id(&self) -> WidgetId {
        self.native.id()
    }

    #[inline]
    fn rect(&self) -> Rect {
        self.native.rect()
    }

    fn handle(&mut self, cx: &mut EventCx, event: Event) -> Response {
        self.handle_event(cx, event)
    }

    fn draw(&mut self, painter: &mut dyn Painter) {
        let rect = self.native.rect();
        let vertices = hexagon(rect);
        painter.set_color(self.native.color());
        painter.polygon(&vertices[..6]);
        painter.set_color(self.native.label_color());
        painter.polyline(&vertices);

        let centre = rect.pos + Coord(rect.size.0 / 2, rect.size.1 / 2);
        let font = self.native.label_font();
        painter.text(&self.caption, centre + LABEL_OFFSET, font, LABEL_SIZE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabby::class::HasLabelStyle;
    use tabby::draw::Rgb8;
    use tabby_headless::{Headless, PaintOp, RecordingPainter};

    #[test]
    fn vertices() {
        let v = hexagon(Rect::xywh(0, 0, 100, 60));
        assert_eq!(v[0], Coord(100, 30));
        assert_eq!(v[3], Coord(0, 30));
        assert_eq!(v[6], v[0]);
        // cos 60° = 0.5, sin 60° ≈ 0.866
        assert_eq!(v[1], Coord(75, 55));
    }

    #[test]
    fn draw_sequence() {
        let tk = Headless::new();
        let mut button = HexagonButton::new(&tk, Rect::xywh(10, 20, 100, 60), "Hex");
        let mut painter = RecordingPainter::default();
        button.draw(&mut painter);

        let ops = painter.ops();
        assert_eq!(ops.len(), 5);
        assert_eq!(ops[0], PaintOp::Color(button.native().color()));
        assert!(matches!(&ops[1], PaintOp::Polygon(v) if v.len() == 6));
        assert_eq!(ops[2], PaintOp::Color(button.native().label_color()));
        assert!(matches!(&ops[3], PaintOp::Polyline(v) if v.len() == 7 && v[6] == v[0]));
        assert!(matches!(&ops[4], PaintOp::Text { text, pos, size: 28, .. }
            if text == "Hex" && *pos == Coord(10 + 50 - 9, 20 + 30 + 9)));
    }

    #[test]
    fn outline_uses_label_color() {
        let tk = Headless::new();
        let mut button = HexagonButton::new(&tk, Rect::xywh(0, 0, 60, 60), "H");
        let red = Rgb8([255, 0, 0]);
        button.set_label_color(red);
        button.set_label_size(12);
        let mut painter = RecordingPainter::default();
        button.draw(&mut painter);

        let ops = painter.ops();
        let outline = ops.iter().position(|op| matches!(op, PaintOp::Polyline(_)));
        assert_eq!(outline.map(|i| &ops[i - 1]), Some(&PaintOp::Color(red)));
        assert!(matches!(ops.last(), Some(PaintOp::Text { size: 28, .. })));
    }
}
