// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! 2D drawing primitives

use super::{Font, Rgb8};
use crate::geom::Coord;

/// 2D drawing primitives for custom-drawn widgets
///
/// Coordinates are window pixels. A painter is lent by the toolkit for the
/// duration of a widget's draw call.
pub trait Painter {
    /// Set the current colour
    fn set_color(&mut self, color: Rgb8);

    /// Fill a polygon with the current colour
    fn polygon(&mut self, vertices: &[Coord]);

    /// Stroke a connected line through `vertices` with the current colour
    fn polyline(&mut self, vertices: &[Coord]);

    /// Draw `text` with its baseline starting at `pos`
    fn text(&mut self, text: &str, pos: Coord, font: Font, size: i32);
}
