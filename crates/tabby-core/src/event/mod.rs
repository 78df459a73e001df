// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Event handling
//!
//! ## Event delivery
//!
//! The native toolkit delivers low-level events, identified by an integer
//! code (see [`Event::code`]), to the top-level window. Each wrapper's
//! [`Widget::handle`] method:
//!
//! 1.  runs the native default handling of its control, preserving focus
//!     changes, text editing and invalidation;
//! 2.  inspects the specific event and, if a matching [`Callback`] is set,
//!     invokes it with a typed payload;
//! 3.  returns the native [`Response`], unless the wrapper must claim the
//!     event.
//!
//! Containers forward events to their children before running their own
//! logic; see `tabby_widgets::Children` for the dispatch rules.
//!
//! ### Native callback
//!
//! Each native control owns a single callback slot which fires on
//! *activation* (a click, a value change or a window close request, depending
//! on the control and its [`When`] condition). Wrappers arm this slot once via
//! [`NativeControl::arm_callback`] and collect activations with
//! [`NativeControl::take_activation`] after native handling, forwarding them
//! to whichever semantic [`Callback`] is currently stored.
//!
//! [`Widget::handle`]: crate::Widget::handle
//! [`NativeControl::arm_callback`]: crate::toolkit::NativeControl::arm_callback
//! [`NativeControl::take_activation`]: crate::toolkit::NativeControl::take_activation

mod callback;
mod cx;
mod response;

pub use callback::Callback;
pub use cx::EventCx;
pub use response::Response;

/// A low-level native event
///
/// Discriminants match the codes used by the native toolkit; conversion is
/// available through [`Event::code`] and [`Event::from_code`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Event {
    /// No event (ignored)
    NoEvent = 0,
    /// A mouse button was pressed
    Push = 1,
    /// A mouse button was released
    Release = 2,
    /// The pointer entered the widget
    Enter = 3,
    /// The pointer left the widget
    Leave = 4,
    /// The pointer moved with a button held
    Drag = 5,
    /// The widget is offered keyboard focus
    Focus = 6,
    /// The widget lost keyboard focus
    Unfocus = 7,
    /// A key was pressed; text is available through [`EventCx::text`]
    KeyDown = 8,
    /// A key was released
    KeyUp = 9,
    /// The user requested that a window close
    Close = 10,
    /// The pointer moved without a button held
    Move = 11,
    /// A keyboard shortcut not consumed by the focus widget
    Shortcut = 12,
    /// The widget was deactivated
    Deactivate = 13,
    /// The widget was activated
    Activate = 14,
    /// The widget was hidden
    Hide = 15,
    /// The widget was shown
    Show = 16,
    /// Text was pasted
    Paste = 17,
    /// The mouse wheel moved
    MouseWheel = 19,
}

impl Event {
    /// The native event code
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Convert from a native event code
    ///
    /// Returns `None` for codes not represented here.
    pub fn from_code(code: i32) -> Option<Self> {
        use Event::*;
        Some(match code {
            0 => NoEvent,
            1 => Push,
            2 => Release,
            3 => Enter,
            4 => Leave,
            5 => Drag,
            6 => Focus,
            7 => Unfocus,
            8 => KeyDown,
            9 => KeyUp,
            10 => Close,
            11 => Move,
            12 => Shortcut,
            13 => Deactivate,
            14 => Activate,
            15 => Hide,
            16 => Show,
            17 => Paste,
            19 => MouseWheel,
            _ => return None,
        })
    }

    /// True for events carrying a meaningful pointer position
    #[inline]
    pub fn is_pointer(self) -> bool {
        matches!(
            self,
            Event::Push | Event::Release | Event::Drag | Event::Move | Event::MouseWheel
        )
    }

    /// True for lifecycle events which are broadcast to all children
    #[inline]
    pub fn is_lifecycle(self) -> bool {
        matches!(self, Event::Show | Event::Hide)
    }
}

/// Condition under which a control's native callback fires
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum When {
    /// Never fire
    Never,
    /// Fire on every change of the control's value
    Changed,
    /// Fire when the control is released (buttons) or, for text controls,
    /// when it loses focus after a change
    #[default]
    Release,
    /// Fire when the Return key is pressed
    EnterKey,
}
