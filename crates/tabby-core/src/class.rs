// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Class-specific widget traits
//!
//! These traits provide generic ways to interact with common widget properties,
//! e.g. to read the caption of a `Button` or set the state of a `CheckBox`.

use crate::draw::{Align, Font, Rgb8};

/// Read / write a caption
///
/// The caption is mirrored by the wrapper: [`HasLabel::label`] returns exactly
/// the last value passed to [`HasLabel::set_label`], regardless of how the
/// native toolkit stores it.
pub trait HasLabel {
    /// Get the caption
    fn label(&self) -> &str;

    /// Set the caption, writing through to the native control
    fn set_label(&mut self, text: &str);
}

/// Read / write label presentation
///
/// Setters request a redraw where the native control would not.
pub trait HasLabelStyle {
    /// Label alignment
    fn align(&self) -> Align;

    /// Set label alignment
    fn set_align(&mut self, align: Align);

    /// Label font size in pixels
    fn label_size(&self) -> i32;

    /// Set label font size
    fn set_label_size(&mut self, size: i32);

    /// Label colour
    fn label_color(&self) -> Rgb8;

    /// Set label colour
    fn set_label_color(&mut self, color: Rgb8);

    /// Label font
    fn label_font(&self) -> Font;

    /// Set label font
    fn set_label_font(&mut self, font: Font);
}

/// Read / write a boolean value
///
/// The value `true` means *checked*.
pub trait HasBool {
    /// Get the widget's state
    fn get_bool(&self) -> bool;

    /// Set the widget's state
    fn set_bool(&mut self, state: bool);
}

/// Read / write an unformatted `String`
pub trait HasString {
    /// Get text as a `String`
    fn get_string(&self) -> String;

    /// Set text from a `&str`
    fn set_str(&mut self, text: &str);
}
