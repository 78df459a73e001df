// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Prelude
//!
//! This module allows convenient importation of common unabiguous items:
//! ```
//! use tabby_core::prelude::*;
//! ```
//!
//! This prelude may be more useful when implementing widgets than when simply
//! using widgets in a GUI.

#[doc(no_inline)]
pub use crate::cast::{Cast, CastFloat, Conv, ConvFloat};
#[doc(no_inline)]
pub use crate::class::{HasBool, HasLabel, HasLabelStyle, HasString};
#[doc(no_inline)]
pub use crate::draw::{Align, Font, Painter, Rgb8, Rgba};
#[doc(no_inline)]
pub use crate::event::{Callback, Event, EventCx, Response, When};
#[doc(no_inline)]
pub use crate::geom::{Coord, Rect, Size, Vec2};
#[doc(no_inline)]
pub use crate::toolkit::{NativeControl, Toolkit};
#[doc(no_inline)]
pub use crate::{Widget, WidgetExt, WidgetId};
