// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Toolkit interface
//!
//! Tabby wraps the controls of a native toolkit rather than drawing its own.
//! This module is the narrow interface through which wrappers consume that
//! toolkit: a [`Toolkit`] constructs native controls, each returned as an
//! owned `Box<dyn Native…>` handle. Wrappers hold these handles by
//! composition; they never subclass a native type.
//!
//! A toolkit is assumed correct: construction does not fail (failed image
//! loads are reported through [`NativeImage::is_valid`]) and the methods here
//! do not return errors.

use crate::config::Config;
use crate::draw::{Align, Font, Gl, Painter, Rgb8};
use crate::event::{Event, EventCx, Response, When};
use crate::geom::{Rect, Size};
use std::fmt;
use std::path::Path;

/// Identifier of a native control
///
/// Assigned by the toolkit at construction; unique for the toolkit's
/// lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Construct from a raw value
    #[inline]
    pub const fn new(n: u64) -> Self {
        WidgetId(n)
    }

    /// The raw value
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Variety of push button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// A plain push button
    #[default]
    Push,
    /// A check button, toggling its value on release
    Check,
    /// A push button also activated by the Return key
    Return,
}

/// Variety of text input
///
/// The kind restricts which characters the native control accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Single-line, any text
    #[default]
    Normal,
    /// Single-line, floating-point numbers only
    Float,
    /// Single-line, integers only
    Int,
    /// Multi-line, any text
    Multiline,
}

bitflags::bitflags! {
    /// Menu item flags
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MenuFlags: u32 {
        /// The item is greyed out
        const INACTIVE = 0x01;
        /// The item is a check item
        const TOGGLE = 0x02;
        /// The check item is on
        const VALUE = 0x04;
        /// The item is a radio item
        const RADIO = 0x08;
        /// The item is hidden
        const INVISIBLE = 0x10;
        /// The item is a submenu header
        const SUBMENU = 0x40;
        /// Draw a divider line after the item
        const DIVIDER = 0x80;
    }
}

/// Receiver of events from [`Toolkit::run`]
///
/// Implemented by the application, which routes events to its windows.
pub trait EventSink {
    /// Deliver `event` to the window `window`
    fn handle(&mut self, window: WidgetId, cx: &mut EventCx, event: Event) -> crate::Result<Response>;

    /// Redraw the window `window`
    fn draw(&mut self, window: WidgetId, painter: &mut dyn Painter) -> crate::Result<()>;
}

/// A toolkit handles native control construction and the event loop
///
/// Any initialisation should be taken care of in the constructor, and
/// de-initialisation in a `Drop` implementation.
pub trait Toolkit {
    /// Apply theme configuration (scheme, palette, focus indicators)
    ///
    /// Called once by the application root, before any window is created.
    fn apply_config(&self, config: &Config);

    /// Construct a push button
    fn button(&self, kind: ButtonKind, rect: Rect, label: &str) -> Box<dyn NativeButton>;

    /// Construct a text input
    fn input(&self, kind: InputKind, rect: Rect, label: &str) -> Box<dyn NativeInput>;

    /// Construct a drop-down choice
    fn choice(&self, rect: Rect, label: &str) -> Box<dyn NativeChoice>;

    /// Construct a list browser holding one selection
    fn browser(&self, rect: Rect, label: &str) -> Box<dyn NativeBrowser>;

    /// Construct a plain labelled box
    fn label_box(&self, rect: Rect, label: &str) -> Box<dyn NativeControl>;

    /// Construct a menu bar
    fn menu_bar(&self, rect: Rect) -> Box<dyn NativeMenu>;

    /// Construct a group (a container without its own native window)
    fn group(&self, rect: Rect, label: &str) -> Box<dyn NativeGroup>;

    /// Construct a double-buffered top-level window
    fn window(&self, rect: Rect, label: &str) -> Box<dyn NativeWindow>;

    /// Construct an OpenGL surface (a native sub-window)
    fn gl_surface(&self, rect: Rect, label: &str) -> Box<dyn NativeSurface>;

    /// Decode a PNG image
    ///
    /// Failure is reported through [`NativeImage::is_valid`].
    fn load_png(&self, path: &Path) -> Box<dyn NativeImage>;

    /// Run the event loop
    ///
    /// Returns when the last window is hidden.
    fn run(&self, sink: &mut dyn EventSink) -> crate::Result<()>;
}

/// Common native control interface
pub trait NativeControl {
    /// Identifier
    fn id(&self) -> WidgetId;

    /// Position and size, relative to the enclosing window
    fn rect(&self) -> Rect;

    /// Set position and size
    fn set_rect(&mut self, rect: Rect);

    /// Copy `text` into native label storage
    ///
    /// The toolkit may truncate or escape the stored label; wrappers keep
    /// their own copy.
    fn set_label(&mut self, text: &str);

    /// Label alignment
    fn align(&self) -> Align;

    /// Set label alignment (does not trigger a redraw)
    fn set_align(&mut self, align: Align);

    /// Label font size in pixels
    fn label_size(&self) -> i32;

    /// Set label font size (does not trigger a redraw)
    fn set_label_size(&mut self, size: i32);

    /// Label colour
    fn label_color(&self) -> Rgb8;

    /// Set label colour (does not trigger a redraw)
    fn set_label_color(&mut self, color: Rgb8);

    /// Label font
    fn label_font(&self) -> Font;

    /// Set label font (does not trigger a redraw)
    fn set_label_font(&mut self, font: Font);

    /// Background colour
    fn color(&self) -> Rgb8;

    /// Set background colour
    fn set_color(&mut self, color: Rgb8);

    /// Attach an image (or none) drawn with the label
    fn set_image(&mut self, image: Option<&dyn NativeImage>);

    /// Arm the control's single native callback, to fire under `when`
    ///
    /// Arming again only updates the condition.
    fn arm_callback(&mut self, when: When);

    /// Collect a pending activation of the native callback
    ///
    /// Returns `true` at most once per activation. Activations only occur once
    /// the callback is armed.
    fn take_activation(&mut self) -> bool;

    /// Native default event handling
    fn handle(&mut self, cx: &mut EventCx, event: Event) -> Response;

    /// Schedule a redraw of this control
    fn redraw(&mut self);

    /// Schedule a redraw of this control's label
    fn redraw_label(&mut self);

    /// Schedule a redraw of the parent container, if any
    fn redraw_parent(&mut self);

    /// Try to take keyboard focus
    fn take_focus(&mut self, cx: &mut EventCx) -> bool;

    /// Make visible
    fn show(&mut self);

    /// Make invisible
    fn hide(&mut self);

    /// Whether the control is visible
    fn visible(&self) -> bool;
}

/// A push, check or return button
pub trait NativeButton: NativeControl {
    /// Button value (checked state for check buttons)
    fn value(&self) -> bool;

    /// Set the button value; returns true if it changed
    fn set_value(&mut self, value: bool) -> bool;
}

/// A text input
pub trait NativeInput: NativeControl {
    /// Current text
    fn value(&self) -> String;

    /// Replace the text; returns true if it changed
    fn set_value(&mut self, text: &str) -> bool;

    /// Input kind
    fn input_kind(&self) -> InputKind;

    /// Restrict accepted characters to `kind`
    fn set_input_kind(&mut self, kind: InputKind);
}

/// A drop-down choice
pub trait NativeChoice: NativeControl {
    /// Append an item, returning its index
    fn add(&mut self, text: &str) -> usize;

    /// Number of items
    fn len(&self) -> usize;

    /// True when there are no items
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the selected item
    fn value(&self) -> Option<usize>;

    /// Select an item; returns true if the selection changed
    fn set_value(&mut self, index: Option<usize>) -> bool;

    /// Text of the selected item
    fn text(&self) -> Option<String>;

    /// Index of the item with text `text`
    fn find_index(&self, text: &str) -> Option<usize>;

    /// Remove an item; out-of-range indices are ignored
    fn remove(&mut self, index: usize);
}

/// A list browser holding (at most) one selected line
///
/// Lines are indexed from zero.
pub trait NativeBrowser: NativeControl {
    /// Append a line
    fn add(&mut self, text: &str);

    /// Number of lines
    fn len(&self) -> usize;

    /// True when there are no lines
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Text of line `index`
    fn text(&self, index: usize) -> Option<String>;

    /// Index of the selected line
    fn selected(&self) -> Option<usize>;

    /// Select a line (or none)
    fn select(&mut self, index: Option<usize>);

    /// Remove a line; out-of-range indices are ignored
    fn remove(&mut self, index: usize);
}

/// A menu bar
///
/// Items are addressed by `/`-separated paths; each intermediate segment
/// names a submenu. Indices refer to the toolkit's flattened item table,
/// which includes submenu headers.
pub trait NativeMenu: NativeControl {
    /// Add an item at `path`, returning its index
    ///
    /// Adding an existing path updates that item and returns its index.
    fn add(&mut self, path: &str, flags: MenuFlags) -> usize;

    /// Index of the item last picked by the user
    fn value(&self) -> Option<usize>;

    /// Index of the item at `path`
    fn find_index(&self, path: &str) -> Option<usize>;

    /// Number of entries in the item table
    fn len(&self) -> usize;

    /// True when the item table is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A container of other controls
pub trait NativeGroup: NativeControl {
    /// Re-parent the control `child` into this container
    fn add_child(&mut self, child: WidgetId);

    /// Perform pending draw operations of the window holding this container
    fn flush(&mut self);
}

/// A native window
pub trait NativeWindow: NativeGroup {
    /// Block until the window is mapped by the windowing system
    fn wait_for_expose(&mut self);

    /// Whether the window has been realized
    fn shown(&self) -> bool;

    /// Set the window icon
    fn set_icon(&mut self, icon: &dyn NativeImage);
}

/// A native OpenGL sub-window
pub trait NativeSurface: NativeWindow {
    /// Make the surface's context current and lend its GL interface
    fn gl(&mut self) -> &mut dyn Gl;

    /// Present the back buffer
    fn swap_buffers(&mut self);
}

/// A decoded image
pub trait NativeImage {
    /// False if decoding failed
    fn is_valid(&self) -> bool;

    /// Pixel size (zero when invalid)
    fn size(&self) -> Size;

    /// Copy, resampled to `size`
    fn scaled(&self, size: Size) -> Box<dyn NativeImage>;
}
