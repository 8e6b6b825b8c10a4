use crate::color::Color;
use crate::error::Result;
use crate::geom::Polygon;

#[cfg(feature = "ggez")]
pub use mesh_surface::MeshSurface;

#[cfg(feature = "ggez")]
mod mesh_surface;

/// Whatever figures paint onto
pub trait Surface {
    /// Drawing units per screen unit
    fn scale_factor(&self) -> f32 {
        1.
    }

    fn fill_polygon(&mut self, polygon: &Polygon, color: Color) -> Result;

    /// Width 0 asks for the thinnest line the surface can draw
    fn stroke_polygon(&mut self, polygon: &Polygon, width: f32, color: Color) -> Result;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Fill { polygon: Polygon, color: Color },
    Stroke { polygon: Polygon, width: f32, color: Color },
}

/// Keeps every draw call instead of painting it
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    scale_factor: f32,
    ops: Vec<DrawOp>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(1.)
    }
}

impl RecordingSurface {
    pub fn new(scale_factor: f32) -> Self {
        Self { scale_factor, ops: vec![] }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    fn fill_polygon(&mut self, polygon: &Polygon, color: Color) -> Result {
        self.ops.push(DrawOp::Fill { polygon: polygon.clone(), color });
        Ok(())
    }

    fn stroke_polygon(&mut self, polygon: &Polygon, width: f32, color: Color) -> Result {
        self.ops.push(DrawOp::Stroke { polygon: polygon.clone(), width, color });
        Ok(())
    }
}
