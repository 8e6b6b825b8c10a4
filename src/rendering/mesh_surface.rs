use ggez::graphics::{DrawMode, Mesh, MeshBuilder};
use ggez::Context;

use crate::color::Color;
use crate::error::{Error, ErrorConversion, Result};
use crate::geom::Polygon;
use crate::rendering::Surface;

/// Collects figure outlines into a single ggez mesh
pub struct MeshSurface {
    builder: MeshBuilder,
    scale_factor: f32,
    empty: bool,
}

impl MeshSurface {
    pub fn new(scale_factor: f32) -> Self {
        Self {
            builder: MeshBuilder::new(),
            scale_factor,
            empty: true,
        }
    }

    /// Nothing was added to the mesh yet
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// `None` when nothing was painted, ggez refuses empty meshes
    pub fn build(&self, ctx: &Context) -> Option<Mesh> {
        if self.empty {
            return None;
        }
        Some(Mesh::from_data(ctx, self.builder.build()))
    }
}

impl Surface for MeshSurface {
    fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    fn fill_polygon(&mut self, polygon: &Polygon, color: Color) -> Result {
        if polygon.len() < 3 {
            return Ok(());
        }
        self.builder
            .polygon(DrawMode::fill(), polygon.points(), color.into())
            .map_err(Error::from)
            .with_trace_step("MeshSurface::fill_polygon")?;
        self.empty = false;
        Ok(())
    }

    fn stroke_polygon(&mut self, polygon: &Polygon, width: f32, color: Color) -> Result {
        if polygon.len() < 3 || width < 0. {
            return Ok(());
        }
        // hairline: one screen unit
        let width = if width == 0. { self.scale_factor } else { width };
        self.builder
            .polygon(DrawMode::stroke(width), polygon.points(), color.into())
            .map_err(Error::from)
            .with_trace_step("MeshSurface::stroke_polygon")?;
        self.empty = false;
        Ok(())
    }
}

#[cfg(test)]
fn triangle() -> Polygon {
    use crate::basic::Point;

    vec![Point::new(0., 0.), Point::new(10., 0.), Point::new(5., 8.)].into()
}

#[test]
fn test_mesh_surface_empty_until_painted() {
    let mut surface = MeshSurface::new(1.);
    let line: Polygon = triangle().iter().copied().take(2).collect::<Vec<_>>().into();
    surface.fill_polygon(&line, Color::BLACK).unwrap();
    surface.stroke_polygon(&triangle(), -1., Color::BLACK).unwrap();
    assert!(surface.is_empty());

    surface.fill_polygon(&triangle(), Color::WHITE).unwrap();
    assert!(!surface.is_empty());
}

#[test]
fn test_mesh_surface_hairline() {
    let mut surface = MeshSurface::new(0.5);
    surface.stroke_polygon(&triangle(), 0., Color::BLACK).unwrap();
    assert!(!surface.is_empty());
}
