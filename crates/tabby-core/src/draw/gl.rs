// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Immediate-mode GL interface

use super::Rgba;
use crate::geom::Vec2;

bitflags::bitflags! {
    /// Buffers to clear
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ClearMask: u32 {
        const DEPTH = 0x0000_0100;
        const STENCIL = 0x0000_0400;
        const COLOR = 0x0000_4000;
    }
}

/// Server-side capabilities
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    Blend,
    PointSmooth,
    LineSmooth,
    DepthTest,
}

/// Blend factors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    Zero,
    One,
    SrcAlpha,
    OneMinusSrcAlpha,
}

/// Primitive kinds for [`Gl::begin`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Points,
    Lines,
    LineStrip,
    LineLoop,
    Triangles,
    TriangleFan,
    Polygon,
}

/// The subset of OpenGL used by canvas drawing
///
/// Vertex coordinates are in the normalized `[-1, 1]` frame with `y` pointing
/// up, matching the coordinates reported to canvas pointer handlers.
///
/// Implementations operate on the current context of the surface being drawn.
pub trait Gl {
    /// Set the colour used by [`Gl::clear`]
    fn clear_color(&mut self, color: Rgba);

    /// Clear the given buffers
    fn clear(&mut self, mask: ClearMask);

    /// Enable a capability
    fn enable(&mut self, cap: Capability);

    /// Disable a capability
    fn disable(&mut self, cap: Capability);

    /// Set the blend function
    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor);

    /// Set the rasterized diameter of points
    fn point_size(&mut self, size: f32);

    /// Set the width of rasterized lines
    fn line_width(&mut self, width: f32);

    /// Set the current colour
    fn color(&mut self, color: Rgba);

    /// Begin a primitive
    fn begin(&mut self, mode: Primitive);

    /// Emit a vertex of the current primitive
    fn vertex(&mut self, v: Vec2);

    /// End the current primitive
    fn end(&mut self);
}

impl dyn Gl + '_ {
    /// Emit a complete primitive from `vertices`
    pub fn primitive(&mut self, mode: Primitive, vertices: &[Vec2]) {
        self.begin(mode);
        for v in vertices {
            self.vertex(*v);
        }
        self.end();
    }
}
