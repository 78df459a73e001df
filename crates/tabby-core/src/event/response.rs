// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Event handling: Response type

/// Response type from [`Widget::handle`] and native handlers
///
/// Corresponds to the native toolkit's integer result: `0` for unused,
/// non-zero for used.
///
/// [`Widget::handle`]: crate::Widget::handle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[must_use]
pub enum Response {
    /// Event was unused
    ///
    /// Unused events may be offered to another widget by the parent.
    #[default]
    Unused,
    /// Event was used
    ///
    /// A widget returning `Used` for [`Event::Push`](super::Event::Push)
    /// receives the subsequent drag and release events.
    Used,
}

impl Response {
    /// True if variant is `Used`
    #[inline]
    pub fn is_used(self) -> bool {
        matches!(self, Response::Used)
    }

    /// True if variant is `Unused`
    #[inline]
    pub fn is_unused(self) -> bool {
        matches!(self, Response::Unused)
    }

    /// The native integer result
    #[inline]
    pub fn code(self) -> i32 {
        self.is_used() as i32
    }
}

impl From<bool> for Response {
    #[inline]
    fn from(used: bool) -> Self {
        if used { Response::Used } else { Response::Unused }
    }
}

impl std::ops::BitOr for Response {
    type Output = Self;

    /// `Used` if either operand is `Used`
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Response::from(self.is_used() || rhs.is_used())
    }
}

impl std::ops::BitOrAssign for Response {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}
