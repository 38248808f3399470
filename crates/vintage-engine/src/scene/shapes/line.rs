use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Straight segment with butt ends, centered on the `from`→`to` axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    /// Stroke width in logical pixels.
    pub thickness: f32,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, thickness: f32, color: Color) -> Self {
        Self { from, to, thickness, color }
    }
}

impl DrawList {
    /// Records a line draw command.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd::new(from, to, thickness, color)));
    }
}
