use std::fmt::Debug;

use crate::attributes::growth::stroke_total_width;
use crate::attributes::{Attributes, FILL_COLOR, STROKE_COLOR};
use crate::basic::{transform_point, Point, Rect, Transform};
use crate::error::{ErrorConversion, Result};
use crate::prefs::Prefs;
use crate::rendering::Surface;

pub use connector::{ChopTriangleConnector, Connector};
pub use handle::{Handle, HandleEdit, OrientationHandle, ResizeHandle};
pub use triangle::TriangleFigure;

mod connector;
mod handle;
mod triangle;

/// Geometry captured before an edit, restoring it undoes the edit
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeometrySnapshot(Rect);

/// Capabilities a drawing needs from each of its figures
pub trait Figure: Debug {
    fn attributes(&self) -> &Attributes;

    fn attributes_mut(&mut self) -> &mut Attributes;

    fn prefs(&self) -> &Prefs;

    fn bounds(&self) -> Rect;

    /// Normalizes two arbitrary corners into the new bounds
    fn set_bounds(&mut self, anchor: Point, lead: Point);

    fn start_point(&self) -> Point {
        self.bounds().min()
    }

    fn end_point(&self) -> Point {
        self.bounds().max()
    }

    /// Only the two defining corners are transformed, the figure stays
    /// axis-aligned
    fn transform(&mut self, tx: &Transform) {
        let anchor = transform_point(tx, self.start_point());
        let lead = transform_point(tx, self.end_point());
        tracing::debug!(?anchor, ?lead, "transform");
        self.set_bounds(anchor, lead);
    }

    /// Area to invalidate when the figure changes
    fn drawing_area(&self) -> Rect;

    fn contains(&self, p: Point, scale_denominator: f32) -> bool;

    /// Point on the outline where a connection toward `p` ends
    fn chop(&self, p: Point) -> Point;

    fn draw_fill(&self, surface: &mut dyn Surface) -> Result;

    fn draw_stroke(&self, surface: &mut dyn Surface) -> Result;

    /// A stroke of width 0 is drawn as a hairline
    fn draw(&self, surface: &mut dyn Surface) -> Result {
        let attributes = self.attributes();
        if attributes.get(FILL_COLOR).is_some() {
            self.draw_fill(surface).with_trace_step("Figure::draw")?;
        }
        if attributes.get(STROKE_COLOR).is_some()
            && stroke_total_width(attributes, surface.scale_factor()) >= 0.
        {
            self.draw_stroke(surface).with_trace_step("Figure::draw")?;
        }
        Ok(())
    }

    /// Detail level 0 is the finest
    fn create_handles(&self, _detail_level: i32) -> Vec<Handle> {
        ResizeHandle::all().map(Handle::Resize).collect()
    }

    fn find_connector(&self, p: Point) -> Box<dyn Connector + '_>;

    fn find_compatible_connector(
        &self,
        connector: &dyn Connector,
        is_start: bool,
    ) -> Box<dyn Connector + '_>;

    fn transform_restore_data(&self) -> GeometrySnapshot;

    fn restore_transform_to(&mut self, snapshot: &GeometrySnapshot);
}
