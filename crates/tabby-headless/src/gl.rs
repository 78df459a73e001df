// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Recording drawing interfaces

use tabby::draw::{BlendFactor, Capability, ClearMask, Font, Gl, Painter, Primitive, Rgb8, Rgba};
use tabby::geom::{Coord, Vec2};

/// A recorded [`Gl`] call
#[derive(Clone, Debug, PartialEq)]
pub enum GlCommand {
    ClearColor(Rgba),
    Clear(ClearMask),
    Enable(Capability),
    Disable(Capability),
    BlendFunc(BlendFactor, BlendFactor),
    PointSize(f32),
    LineWidth(f32),
    Color(Rgba),
    Begin(Primitive),
    Vertex(Vec2),
    End,
}

/// A [`Gl`] implementation which records calls
#[derive(Debug, Default)]
pub struct RecordingGl {
    commands: Vec<GlCommand>,
}

impl RecordingGl {
    /// Commands recorded since the last [`RecordingGl::take`]
    pub fn commands(&self) -> &[GlCommand] {
        &self.commands
    }

    /// Take recorded commands
    pub fn take(&mut self) -> Vec<GlCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Gl for RecordingGl {
    fn clear_color(&mut self, color: Rgba) {
        self.commands.push(GlCommand::ClearColor(color));
    }

    fn clear(&mut self, mask: ClearMask) {
        self.commands.push(GlCommand::Clear(mask));
    }

    fn enable(&mut self, cap: Capability) {
        self.commands.push(GlCommand::Enable(cap));
    }

    fn disable(&mut self, cap: Capability) {
        self.commands.push(GlCommand::Disable(cap));
    }

    fn blend_func(&mut self, src: BlendFactor, dst: BlendFactor) {
        self.commands.push(GlCommand::BlendFunc(src, dst));
    }

    fn point_size(&mut self, size: f32) {
        self.commands.push(GlCommand::PointSize(size));
    }

    fn line_width(&mut self, width: f32) {
        self.commands.push(GlCommand::LineWidth(width));
    }

    fn color(&mut self, color: Rgba) {
        self.commands.push(GlCommand::Color(color));
    }

    fn begin(&mut self, mode: Primitive) {
        self.commands.push(GlCommand::Begin(mode));
    }

    fn vertex(&mut self, v: Vec2) {
        self.commands.push(GlCommand::Vertex(v));
    }

    fn end(&mut self) {
        self.commands.push(GlCommand::End);
    }
}

/// A recorded [`Painter`] call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintOp {
    Color(Rgb8),
    Polygon(Vec<Coord>),
    Polyline(Vec<Coord>),
    Text {
        text: String,
        pos: Coord,
        font: Font,
        size: i32,
    },
}

/// A [`Painter`] implementation which records calls
#[derive(Debug, Default)]
pub struct RecordingPainter {
    ops: Vec<PaintOp>,
}

impl RecordingPainter {
    /// Recorded operations
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Take recorded operations
    pub fn take(&mut self) -> Vec<PaintOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Painter for RecordingPainter {
    fn set_color(&mut self, color: Rgb8) {
        self.ops.push(PaintOp::Color(color));
    }

    fn polygon(&mut self, vertices: &[Coord]) {
        self.ops.push(PaintOp::Polygon(vertices.to_vec()));
    }

    fn polyline(&mut self, vertices: &[Coord]) {
        self.ops.push(PaintOp::Polyline(vertices.to_vec()));
    }

    fn text(&mut self, text: &str, pos: Coord, font: Font, size: i32) {
        self.ops.push(PaintOp::Text {
            text: text.to_string(),
            pos,
            font,
            size,
        });
    }
}
