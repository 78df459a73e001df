// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Groups, windows and GL surfaces

use crate::RecordingGl;
use crate::control::Control;
use crate::state::Shared;
use tabby::WidgetId;
use tabby::draw::Gl;
use tabby::event::{Event, EventCx, Response};
use tabby::geom::Rect;
use tabby::toolkit::{NativeGroup, NativeImage, NativeSurface, NativeWindow};

fn flush(control: &Control) {
    if let Some(record) = control.state.borrow_mut().record_mut(control.id) {
        record.flushes += 1;
    }
}

fn adopt(control: &Control, child: WidgetId) {
    let mut state = control.state.borrow_mut();
    if let Some(record) = state.record_mut(child) {
        log::debug!("add_child: {child} to {}", control.id);
        record.parent = Some(control.id);
    }
}

/// A group
///
/// Child dispatch is the wrapper's business: the native group only tracks
/// visibility.
#[derive(Debug)]
pub(crate) struct Group {
    control: Control,
}

impl Group {
    pub fn new(state: &Shared, rect: Rect, label: &str) -> Self {
        let mut control = Control::new(state, "Group", rect, label);
        control.focusable = false;
        Group { control }
    }

    fn handle_event(&mut self, _: &mut EventCx, event: Event) -> Response {
        match event {
            Event::Show => self.control.visible = true,
            Event::Hide => self.control.visible = false,
            _ => (),
        }
        Response::Unused
    }
}

impl_native_control!(Group);

impl NativeGroup for Group {
    fn add_child(&mut self, child: WidgetId) {
        adopt(&self.control, child);
    }

    fn flush(&mut self) {
        flush(&self.control);
    }
}

/// A window, optionally with a GL context
///
/// Windows start hidden. A close request activates the callback if armed,
/// otherwise hides the window.
#[derive(Debug)]
pub(crate) struct Window {
    control: Control,
    gl: Option<RecordingGl>,
}

impl Window {
    pub fn new(state: &Shared, rect: Rect, label: &str) -> Self {
        let mut control = Control::new(state, "Window", rect, label);
        control.visible = false;
        Window { control, gl: None }
    }

    pub fn with_gl(state: &Shared, rect: Rect, label: &str) -> Self {
        let mut control = Control::new(state, "GlWindow", rect, label);
        control.visible = false;
        Window {
            control,
            gl: Some(RecordingGl::default()),
        }
    }

    fn handle_event(&mut self, _: &mut EventCx, event: Event) -> Response {
        match event {
            Event::Show => {
                self.control.show();
                Response::Used
            }
            Event::Hide => {
                self.control.visible = false;
                Response::Used
            }
            Event::Close => {
                if self.control.armed().is_some() {
                    self.control.activate_if(|_| true);
                } else {
                    log::debug!("Window::handle_event: close {}", self.control.id);
                    self.control.visible = false;
                }
                Response::Used
            }
            _ => Response::Unused,
        }
    }
}

impl_native_control!(Window);

impl NativeGroup for Window {
    fn add_child(&mut self, child: WidgetId) {
        adopt(&self.control, child);
    }

    fn flush(&mut self) {
        flush(&self.control);
    }
}

impl NativeWindow for Window {
    fn wait_for_expose(&mut self) {
        if let Some(record) = self.control.state.borrow_mut().record_mut(self.control.id) {
            record.exposed = true;
        }
    }

    fn shown(&self) -> bool {
        self.control.shown
    }

    fn set_icon(&mut self, icon: &dyn NativeImage) {
        if let Some(record) = self.control.state.borrow_mut().record_mut(self.control.id) {
            record.icon = Some(icon.size());
        }
    }
}

impl NativeSurface for Window {
    fn gl(&mut self) -> &mut dyn Gl {
        self.gl.get_or_insert_with(RecordingGl::default)
    }

    /// Store the recorded frame
    fn swap_buffers(&mut self) {
        let frame = self.gl.as_mut().map(|gl| gl.take()).unwrap_or_default();
        if let Some(record) = self.control.state.borrow_mut().record_mut(self.control.id) {
            record.frames.push(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabby::event::When;
    use tabby::toolkit::NativeControl;

    #[test]
    fn close_hides_unless_armed() {
        let state = Shared::default();
        let mut cx = EventCx::new();

        let mut window = Window::new(&state, Rect::xywh(0, 0, 100, 100), "");
        window.show();
        assert_eq!(window.handle(&mut cx, Event::Close), Response::Used);
        assert!(!window.visible());

        window.show();
        window.arm_callback(When::Release);
        let _ = window.handle(&mut cx, Event::Close);
        assert!(window.visible());
        assert!(window.take_activation());
    }

    #[test]
    fn parent_redraw() {
        let state = Shared::default();
        let mut group = Group::new(&state, Rect::xywh(0, 0, 100, 100), "");
        let mut child = Group::new(&state, Rect::xywh(0, 0, 10, 10), "");
        group.add_child(child.id());
        child.redraw_parent();
        assert_eq!(state.borrow().record(group.id()).map(|r| r.redraws), Some(1));
    }
}
