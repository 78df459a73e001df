// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Drawing APIs
//!
//! Tabby does not render widgets itself; the native toolkit does. This module
//! provides the label style types passed through to native controls plus the
//! two minimal immediate-mode interfaces needed by custom drawing:
//!
//! -   [`Gl`], the subset of OpenGL used by the canvas draw cycle
//! -   [`Painter`], the 2D primitives used by custom-drawn widgets

mod color;
mod gl;
mod painter;

pub use color::{ParseError, Rgb8, Rgba};
pub use gl::{BlendFactor, Capability, ClearMask, Gl, Primitive};
pub use painter::Painter;

bitflags::bitflags! {
    /// Label alignment flags
    ///
    /// Values match the native toolkit's encoding. [`Align::CENTER`] is the
    /// empty set.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Align: u32 {
        /// Align to the top edge
        const TOP = 0x0001;
        /// Align to the bottom edge
        const BOTTOM = 0x0002;
        /// Align to the left edge
        const LEFT = 0x0004;
        /// Align to the right edge
        const RIGHT = 0x0008;
        /// Draw the label inside the widget's box
        const INSIDE = 0x0010;
        /// Draw text over the image
        const TEXT_OVER_IMAGE = 0x0020;
        /// Clip the label to the widget's box
        const CLIP = 0x0040;
        /// Wrap the label text
        const WRAP = 0x0080;
        /// Place the image next to the text
        const IMAGE_NEXT_TO_TEXT = 0x0100;
        /// Use the image as a backdrop
        const IMAGE_BACKDROP = 0x0200;

        /// Top and left
        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        /// Bits which concern the image position
        const IMAGE_MASK = 0x0320;
    }
}

impl Align {
    /// Centred (no flags)
    pub const CENTER: Align = Align::empty();
}

/// A native font index
///
/// The toolkit provides a fixed table of fonts; the constants name the
/// standard entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font(pub i32);

impl Font {
    pub const HELVETICA: Font = Font(0);
    pub const HELVETICA_BOLD: Font = Font(1);
    pub const HELVETICA_ITALIC: Font = Font(2);
    pub const COURIER: Font = Font(4);
    pub const COURIER_BOLD: Font = Font(5);
    pub const TIMES: Font = Font(8);
    pub const TIMES_BOLD: Font = Font(9);
    pub const SYMBOL: Font = Font(12);
    pub const SCREEN: Font = Font(13);
    pub const SCREEN_BOLD: Font = Font(14);
    pub const ZAPF_DINGBATS: Font = Font(15);
}

/// Default label size in pixels
pub const DEFAULT_LABEL_SIZE: i32 = 14;
