// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Text input

use crate::control::Control;
use crate::state::Shared;
use tabby::event::{Event, EventCx, Response, When};
use tabby::geom::Rect;
use tabby::toolkit::{InputKind, NativeInput};
use unicode_segmentation::UnicodeSegmentation;

const BACKSPACE: &str = "\u{8}";
const RETURN: &str = "\r";

/// True if inputs of kind `kind` accept the character `c`
fn accepts(kind: InputKind, c: char) -> bool {
    match kind {
        InputKind::Normal => !c.is_control() || c == '\t',
        InputKind::Multiline => !c.is_control() || c == '\t' || c == '\n',
        InputKind::Float => c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'),
        InputKind::Int => c.is_ascii_digit() || matches!(c, '-' | '+'),
    }
}

/// A text input
///
/// Key events edit the text while the input has keyboard focus. Characters
/// not accepted by the input's [`InputKind`] are dropped.
///
/// Activation depends on the armed condition:
///
/// -   [`When::Changed`]: on each edit
/// -   [`When::EnterKey`]: on Return (single-line kinds only)
/// -   [`When::Release`]: on losing focus after an edit
#[derive(Debug)]
pub(crate) struct Input {
    control: Control,
    kind: InputKind,
    value: String,
    edited: bool,
}

impl Input {
    pub fn new(state: &Shared, kind: InputKind, rect: Rect, label: &str) -> Self {
        Input {
            control: Control::new(state, "Input", rect, label),
            kind,
            value: String::new(),
            edited: false,
        }
    }

    fn edit(&mut self, text: &str) -> Response {
        match text {
            BACKSPACE => match self.value.grapheme_indices(true).next_back() {
                Some((index, _)) => self.value.truncate(index),
                None => return Response::Used,
            },
            RETURN if self.kind != InputKind::Multiline => {
                self.control.activate_if(|when| when == When::EnterKey);
                return Response::Used;
            }
            RETURN => self.value.push('\n'),
            _ => {
                let kind = self.kind;
                let len = self.value.len();
                self.value.extend(text.chars().filter(|c| accepts(kind, *c)));
                if self.value.len() == len {
                    return Response::Unused;
                }
            }
        }

        self.edited = true;
        self.control.redraw();
        self.control.activate_if(|when| when == When::Changed);
        Response::Used
    }

    fn handle_event(&mut self, cx: &mut EventCx, event: Event) -> Response {
        let focused = cx.has_focus(self.control.id);
        match event {
            Event::Enter | Event::Leave => Response::Used,
            Event::Push if self.control.inside(cx) => {
                self.control.take_focus(cx);
                Response::Used
            }
            Event::Drag | Event::Release if focused => Response::Used,
            Event::Focus => Response::Used,
            Event::Unfocus => {
                if std::mem::take(&mut self.edited) && self.control.armed() == Some(When::Release) {
                    self.control.activate_if(|_| true);
                }
                Response::Used
            }
            Event::KeyDown | Event::Paste if focused => self.edit(cx.text()),
            _ => Response::Unused,
        }
    }
}

impl_native_control!(Input);

impl NativeInput for Input {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, text: &str) -> bool {
        if self.value == text {
            return false;
        }
        self.value = text.to_string();
        self.edited = false;
        self.control.redraw();
        true
    }

    fn input_kind(&self) -> InputKind {
        self.kind
    }

    fn set_input_kind(&mut self, kind: InputKind) {
        self.kind = kind;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabby::toolkit::NativeControl;

    fn input(kind: InputKind) -> Input {
        Input::new(&Shared::default(), kind, Rect::xywh(0, 0, 100, 20), "")
    }

    fn type_text(input: &mut Input, text: &str) -> Response {
        let mut cx = EventCx::new()
            .with_focus(Some(input.id()))
            .with_text(text);
        input.handle(&mut cx, Event::KeyDown)
    }

    #[test]
    fn float_filter() {
        let mut input = input(InputKind::Float);
        assert_eq!(type_text(&mut input, "x"), Response::Unused);
        type_text(&mut input, "-1.5e3y");
        assert_eq!(input.value(), "-1.5e3");
    }

    #[test]
    fn int_filter_and_backspace() {
        let mut input = input(InputKind::Int);
        type_text(&mut input, "12.5");
        assert_eq!(input.value(), "125");
        type_text(&mut input, BACKSPACE);
        assert_eq!(input.value(), "12");
    }

    #[test]
    fn changed_activation() {
        let mut input = input(InputKind::Normal);
        type_text(&mut input, "a");
        assert!(!input.take_activation());

        input.arm_callback(When::Changed);
        type_text(&mut input, "b");
        assert!(input.take_activation());
        assert!(!input.take_activation());
        type_text(&mut input, RETURN);
        assert!(!input.take_activation());
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn unfocused_ignores_keys() {
        let mut input = input(InputKind::Normal);
        let mut cx = EventCx::new().with_text("a");
        assert_eq!(input.handle(&mut cx, Event::KeyDown), Response::Unused);
        assert!(input.value().is_empty());
    }
}
