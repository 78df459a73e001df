// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Common control data

use crate::state::Shared;
use tabby::WidgetId;
use tabby::draw::{Align, DEFAULT_LABEL_SIZE, Font, Rgb8};
use tabby::event::{EventCx, When};
use tabby::geom::{Rect, Size};
use tabby::toolkit::NativeImage;

/// Data common to all headless controls
///
/// Each control type embeds a `Control` and forwards
/// [`NativeControl`](tabby::toolkit::NativeControl) to it via
/// `impl_native_control!`, supplying only its own `handle_event`.
#[derive(Debug)]
pub(crate) struct Control {
    pub id: WidgetId,
    pub rect: Rect,
    pub state: Shared,
    pub align: Align,
    pub label_size: i32,
    pub label_color: Rgb8,
    pub label_font: Font,
    pub color: Rgb8,
    pub image: Option<Size>,
    pub focusable: bool,
    pub visible: bool,
    pub shown: bool,
    armed: Option<When>,
    pending: bool,
}

impl Control {
    pub fn new(state: &Shared, kind: &'static str, rect: Rect, label: &str) -> Self {
        let (id, palette) = {
            let mut state = state.borrow_mut();
            (state.register(kind, label), state.palette())
        };
        Control {
            id,
            rect,
            state: state.clone(),
            align: Align::CENTER,
            label_size: DEFAULT_LABEL_SIZE,
            label_color: palette.foreground,
            label_font: Font::HELVETICA,
            color: palette.background,
            image: None,
            focusable: true,
            visible: true,
            shown: false,
            armed: None,
            pending: false,
        }
    }

    /// The condition the native callback is armed with, if any
    #[inline]
    pub fn armed(&self) -> Option<When> {
        self.armed
    }

    pub fn arm_callback(&mut self, when: When) {
        log::trace!("arm_callback: {} {when:?}", self.id);
        self.armed = Some(when);
    }

    /// Queue an activation if the callback is armed with a condition
    /// satisfying `cond`
    ///
    /// [`When::Never`] never activates.
    pub fn activate_if(&mut self, cond: impl Fn(When) -> bool) {
        match self.armed {
            None | Some(When::Never) => (),
            Some(when) => {
                if cond(when) {
                    log::trace!("activate: {}", self.id);
                    self.pending = true;
                }
            }
        }
    }

    pub fn take_activation(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn set_label(&mut self, text: &str) {
        if let Some(r) = self.state.borrow_mut().record_mut(self.id) {
            r.label = text.to_string();
        }
    }

    pub fn set_image(&mut self, image: Option<&dyn NativeImage>) {
        self.image = image.filter(|img| img.is_valid()).map(|img| img.size());
    }

    pub fn redraw(&mut self) {
        self.state.borrow_mut().redraw(self.id);
    }

    pub fn redraw_label(&mut self) {
        if let Some(r) = self.state.borrow_mut().record_mut(self.id) {
            r.label_redraws += 1;
        }
    }

    pub fn redraw_parent(&mut self) {
        let mut state = self.state.borrow_mut();
        match state.parent(self.id) {
            Some(parent) => state.redraw(parent),
            None => log::trace!("redraw_parent: {} has no parent", self.id),
        }
    }

    /// Make visible, realizing the control on first use
    pub fn show(&mut self) {
        if !self.shown {
            log::debug!("show: realize {}", self.id);
            self.shown = true;
        }
        self.visible = true;
    }

    pub fn take_focus(&mut self, cx: &mut EventCx) -> bool {
        if self.focusable && self.visible {
            cx.set_focus(self.id);
            true
        } else {
            false
        }
    }

    /// True if the pointer of `cx` lies within this control
    #[inline]
    pub fn inside(&self, cx: &EventCx) -> bool {
        cx.event_inside(self.rect)
    }
}

/// Implement `NativeControl` for a type with field `control: Control` and
/// method `handle_event`
macro_rules! impl_native_control {
    ($ty:ty) => {
        impl tabby::toolkit::NativeControl for $ty {
            fn id(&self) -> tabby::WidgetId {
                self.control.id
            }
            fn rect(&self) -> tabby::geom::Rect {
                self.control.rect
            }
            fn set_rect(&mut self, rect: tabby::geom::Rect) {
                log::debug!("set_rect: {} {rect:?}", self.control.id);
                self.control.rect = rect;
            }
            fn set_label(&mut self, text: &str) {
                self.control.set_label(text);
            }
            fn align(&self) -> tabby::draw::Align {
                self.control.align
            }
            fn set_align(&mut self, align: tabby::draw::Align) {
                self.control.align = align;
            }
            fn label_size(&self) -> i32 {
                self.control.label_size
            }
            fn set_label_size(&mut self, size: i32) {
                self.control.label_size = size;
            }
            fn label_color(&self) -> tabby::draw::Rgb8 {
                self.control.label_color
            }
            fn set_label_color(&mut self, color: tabby::draw::Rgb8) {
                self.control.label_color = color;
            }
            fn label_font(&self) -> tabby::draw::Font {
                self.control.label_font
            }
            fn set_label_font(&mut self, font: tabby::draw::Font) {
                self.control.label_font = font;
            }
            fn color(&self) -> tabby::draw::Rgb8 {
                self.control.color
            }
            fn set_color(&mut self, color: tabby::draw::Rgb8) {
                self.control.color = color;
            }
            fn set_image(&mut self, image: Option<&dyn tabby::toolkit::NativeImage>) {
                self.control.set_image(image);
            }
            fn arm_callback(&mut self, when: tabby::event::When) {
                self.control.arm_callback(when);
            }
            fn take_activation(&mut self) -> bool {
                self.control.take_activation()
            }
            fn handle(
                &mut self,
                cx: &mut tabby::event::EventCx,
                event: tabby::event::Event,
            ) -> tabby::event::Response {
                self.handle_event(cx, event)
            }
            fn redraw(&mut self) {
                self.control.redraw();
            }
            fn redraw_label(&mut self) {
                self.control.redraw_label();
            }
            fn redraw_parent(&mut self) {
                self.control.redraw_parent();
            }
            fn take_focus(&mut self, cx: &mut tabby::event::EventCx) -> bool {
                self.control.take_focus(cx)
            }
            fn show(&mut self) {
                self.control.show();
            }
            fn hide(&mut self) {
                self.control.visible = false;
            }
            fn visible(&self) -> bool {
                self.control.visible
            }
        }
    };
}
