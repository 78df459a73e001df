// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Buttons and plain boxes

use crate::control::Control;
use crate::state::Shared;
use tabby::event::{Event, EventCx, Response};
use tabby::geom::Rect;
use tabby::toolkit::{ButtonKind, NativeButton};

/// A push, check or return button
///
/// The button activates on release inside its rect after a press. Check
/// buttons toggle their value first. Return buttons also activate on the
/// Return key, focused buttons on the space bar.
#[derive(Debug)]
pub(crate) struct Button {
    control: Control,
    kind: ButtonKind,
    value: bool,
    pressed: bool,
}

impl Button {
    pub fn new(state: &Shared, kind: ButtonKind, rect: Rect, label: &str) -> Self {
        Button {
            control: Control::new(state, "Button", rect, label),
            kind,
            value: false,
            pressed: false,
        }
    }

    fn fire(&mut self) {
        if self.kind == ButtonKind::Check {
            self.value = !self.value;
        }
        self.control.redraw();
        self.control.activate_if(|_| true);
    }

    fn handle_event(&mut self, cx: &mut EventCx, event: Event) -> Response {
        match event {
            Event::Enter | Event::Leave => Response::Used,
            Event::Push if self.control.inside(cx) => {
                self.pressed = true;
                self.control.redraw();
                Response::Used
            }
            Event::Drag if self.pressed => Response::Used,
            Event::Release if self.pressed => {
                self.pressed = false;
                if self.control.inside(cx) {
                    self.fire();
                } else {
                    self.control.redraw();
                }
                Response::Used
            }
            Event::KeyDown if self.kind == ButtonKind::Return && cx.text() == "\r" => {
                self.fire();
                Response::Used
            }
            Event::KeyDown if cx.has_focus(self.control.id) && cx.text() == " " => {
                self.fire();
                Response::Used
            }
            _ => Response::Unused,
        }
    }
}

impl_native_control!(Button);

impl NativeButton for Button {
    fn value(&self) -> bool {
        self.value
    }

    fn set_value(&mut self, value: bool) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.control.redraw();
        true
    }
}

/// A plain box with a label
///
/// Boxes take no input beyond pointer crossing.
#[derive(Debug)]
pub(crate) struct LabelBox {
    control: Control,
}

impl LabelBox {
    pub fn new(state: &Shared, rect: Rect, label: &str) -> Self {
        let mut control = Control::new(state, "Box", rect, label);
        control.focusable = false;
        LabelBox { control }
    }

    fn handle_event(&mut self, _: &mut EventCx, event: Event) -> Response {
        match event {
            Event::Enter | Event::Leave => Response::Used,
            _ => Response::Unused,
        }
    }
}

impl_native_control!(LabelBox);
