// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Item lists: drop-down choice and browser

use crate::control::Control;
use crate::state::Shared;
use tabby::cast::Cast;
use tabby::event::{Event, EventCx, Response, When};
use tabby::geom::Rect;
use tabby::toolkit::{NativeBrowser, NativeChoice};

/// Height of a browser line in pixels
const LINE_HEIGHT: i32 = 18;

/// Adjust `selection` for removal of item `index`
fn adjust_for_removal(selection: &mut Option<usize>, index: usize) {
    match *selection {
        Some(i) if i == index => *selection = None,
        Some(i) if i > index => *selection = Some(i - 1),
        _ => (),
    }
}

/// A drop-down choice
///
/// A press opens the popup; the pick is taken from the scripted popup queue
/// (see [`Headless::push_popup`](crate::Headless::push_popup)). Picking a
/// different item activates the callback unless armed with
/// [`When::EnterKey`].
#[derive(Debug)]
pub(crate) struct Choice {
    control: Control,
    items: Vec<String>,
    value: Option<usize>,
}

impl Choice {
    pub fn new(state: &Shared, rect: Rect, label: &str) -> Self {
        Choice {
            control: Control::new(state, "Choice", rect, label),
            items: vec![],
            value: None,
        }
    }

    fn handle_event(&mut self, cx: &mut EventCx, event: Event) -> Response {
        match event {
            Event::Enter | Event::Leave => Response::Used,
            Event::Push if self.control.inside(cx) => {
                let pick = self.control.state.borrow_mut().popups.pop_front();
                log::trace!("Choice::handle_event: popup pick {pick:?}");
                if let Some(Some(index)) = pick {
                    if self.set_value(Some(index)) {
                        self.control.activate_if(|when| when != When::EnterKey);
                    }
                }
                Response::Used
            }
            _ => Response::Unused,
        }
    }
}

impl_native_control!(Choice);

impl NativeChoice for Choice {
    fn add(&mut self, text: &str) -> usize {
        match self.find_index(text) {
            Some(index) => index,
            None => {
                self.items.push(text.to_string());
                self.items.len() - 1
            }
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn value(&self) -> Option<usize> {
        self.value
    }

    fn set_value(&mut self, index: Option<usize>) -> bool {
        if index.is_some_and(|i| i >= self.items.len()) || index == self.value {
            return false;
        }
        self.value = index;
        self.control.redraw();
        true
    }

    fn text(&self) -> Option<String> {
        self.value.map(|i| self.items[i].clone())
    }

    fn find_index(&self, text: &str) -> Option<usize> {
        self.items.iter().position(|item| item == text)
    }

    fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
            adjust_for_removal(&mut self.value, index);
            self.control.redraw();
        }
    }
}

/// A browser holding one selected line
///
/// A press inside selects the line under the pointer, activating the
/// callback when the selection changes.
#[derive(Debug)]
pub(crate) struct Browser {
    control: Control,
    lines: Vec<String>,
    selected: Option<usize>,
}

impl Browser {
    pub fn new(state: &Shared, rect: Rect, label: &str) -> Self {
        Browser {
            control: Control::new(state, "Browser", rect, label),
            lines: vec![],
            selected: None,
        }
    }

    fn handle_event(&mut self, cx: &mut EventCx, event: Event) -> Response {
        match event {
            Event::Enter | Event::Leave => Response::Used,
            Event::Push if self.control.inside(cx) => {
                self.control.take_focus(cx);
                let line: usize = ((cx.coord().1 - self.control.rect.pos.1) / LINE_HEIGHT).cast();
                if line < self.lines.len() && self.selected != Some(line) {
                    self.select(Some(line));
                    self.control.activate_if(|when| when != When::EnterKey);
                }
                Response::Used
            }
            Event::Drag | Event::Release if self.control.inside(cx) => Response::Used,
            _ => Response::Unused,
        }
    }
}

impl_native_control!(Browser);

impl NativeBrowser for Browser {
    fn add(&mut self, text: &str) {
        self.lines.push(text.to_string());
        self.control.redraw();
    }

    fn len(&self) -> usize {
        self.lines.len()
    }

    fn text(&self, index: usize) -> Option<String> {
        self.lines.get(index).cloned()
    }

    fn selected(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|i| *i < self.lines.len());
        self.control.redraw();
    }

    fn remove(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
            adjust_for_removal(&mut self.selected, index);
            self.control.redraw();
        }
    }
}
