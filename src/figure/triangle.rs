use static_assertions::assert_impl_all;

use crate::attributes::growth::{
    draw_growth, fill_growth, hit_growth, miter_reach, paint_extent, stroke_total_width,
};
use crate::attributes::{Attributes, FILL_COLOR, ORIENTATION, STROKE_COLOR};
use crate::basic::{Orientation, Point, Rect};
use crate::error::{ErrorConversion, Result};
use crate::figure::{
    ChopTriangleConnector, Connector, Figure, GeometrySnapshot, Handle, OrientationHandle,
    ResizeHandle,
};
use crate::geom::{grow_outline, Polygon};
use crate::prefs::Prefs;
use crate::rendering::Surface;

/// A triangle inscribed in its bounds, the tip points in the direction
/// given by the `ORIENTATION` attribute.
///
/// Only the bounds are stored, the vertices are derived from the bounds and
/// the orientation on every query.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleFigure {
    rectangle: Rect,
    attributes: Attributes,
    prefs: Prefs,
}

assert_impl_all!(TriangleFigure: Clone, Send, Sync);

impl Default for TriangleFigure {
    fn default() -> Self {
        Self::new()
    }
}

impl TriangleFigure {
    pub fn new() -> Self {
        Self::from_rect_oriented(0., 0., 0., 0., Orientation::North)
    }

    pub fn with_orientation(orientation: Orientation) -> Self {
        Self::from_rect_oriented(0., 0., 0., 0., orientation)
    }

    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_rect_oriented(x, y, width, height, Orientation::North)
    }

    pub fn from_rect_oriented(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        orientation: Orientation,
    ) -> Self {
        Self {
            rectangle: Rect::new(x, y, width, height),
            attributes: Attributes::default().with(ORIENTATION, orientation),
            prefs: Prefs::default(),
        }
    }

    // builder
    #[must_use]
    pub fn with_prefs(mut self, prefs: Prefs) -> Self {
        self.prefs = prefs;
        self
    }

    /// Replaces every attribute, the orientation included
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.attributes.get(ORIENTATION)
    }

    /// Returns the previous orientation
    pub fn set_orientation(&mut self, orientation: Orientation) -> Orientation {
        self.attributes.set(ORIENTATION, orientation)
    }

    /// The closed outline of the triangle
    pub fn path(&self) -> Polygon {
        let rect = self.rectangle;
        let points = self.orientation().unit_points().map(|uv| rect.lerp(uv));
        tracing::trace!(?points, orientation = %self.orientation(), "triangle path");
        points.to_vec().into()
    }

    // the path grown by `growth`, unchanged when there is nothing to grow
    fn grown_path(&self, growth: f32) -> Polygon {
        let path = self.path();
        if growth == 0. {
            return path;
        }
        grow_outline(&path, growth, miter_reach(&self.attributes, growth))
    }
}

impl Figure for TriangleFigure {
    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn prefs(&self) -> &Prefs {
        &self.prefs
    }

    fn bounds(&self) -> Rect {
        self.rectangle
    }

    fn set_bounds(&mut self, anchor: Point, lead: Point) {
        self.rectangle = Rect::from_corners(anchor, lead, self.prefs.min_extent);
        tracing::trace!(rectangle = ?self.rectangle, "set bounds");
    }

    fn drawing_area(&self) -> Rect {
        let width = paint_extent(&self.attributes) + self.prefs.drawing_area_padding;
        self.rectangle.grow(width, width)
    }

    fn contains(&self, p: Point, scale_denominator: f32) -> bool {
        self.grown_path(hit_growth(&self.attributes, scale_denominator))
            .contains(p)
    }

    fn chop(&self, p: Point) -> Point {
        self.grown_path(hit_growth(&self.attributes, 1.)).chop(p)
    }

    fn draw_fill(&self, surface: &mut dyn Surface) -> Result {
        let Some(color) = self.attributes.get(FILL_COLOR) else {
            return Ok(());
        };
        let triangle = self.grown_path(fill_growth(&self.attributes, surface.scale_factor()));
        surface
            .fill_polygon(&triangle, color)
            .with_trace_step("TriangleFigure::draw_fill")
    }

    fn draw_stroke(&self, surface: &mut dyn Surface) -> Result {
        let Some(color) = self.attributes.get(STROKE_COLOR) else {
            return Ok(());
        };
        let scale_factor = surface.scale_factor();
        let triangle = self.grown_path(draw_growth(&self.attributes, scale_factor));
        let width = stroke_total_width(&self.attributes, scale_factor);
        surface
            .stroke_polygon(&triangle, width, color)
            .with_trace_step("TriangleFigure::draw_stroke")
    }

    fn create_handles(&self, detail_level: i32) -> Vec<Handle> {
        let mut handles: Vec<Handle> = ResizeHandle::all().map(Handle::Resize).collect();
        if detail_level == 0 {
            handles.push(Handle::Orientation(OrientationHandle));
        }
        handles
    }

    fn find_connector(&self, _p: Point) -> Box<dyn Connector + '_> {
        Box::new(ChopTriangleConnector::new(self))
    }

    fn find_compatible_connector(
        &self,
        _connector: &dyn Connector,
        _is_start: bool,
    ) -> Box<dyn Connector + '_> {
        Box::new(ChopTriangleConnector::new(self))
    }

    fn transform_restore_data(&self) -> GeometrySnapshot {
        GeometrySnapshot(self.rectangle)
    }

    fn restore_transform_to(&mut self, snapshot: &GeometrySnapshot) {
        let GeometrySnapshot(rectangle) = *snapshot;
        tracing::debug!(from = ?self.rectangle, to = ?rectangle, "restore geometry");
        self.rectangle = rectangle;
    }
}

#[cfg(test)]
use crate::basic::assert_close;

#[cfg(test)]
fn p(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

#[cfg(test)]
fn rect_10_20(orientation: Orientation) -> TriangleFigure {
    TriangleFigure::from_rect_oriented(0., 0., 10., 20., orientation)
}

#[test]
fn test_path_per_orientation() {
    use Orientation::*;

    #[rustfmt::skip]
    let expected = [
        (North, [p(5., 0.), p(10., 20.), p(0., 20.)]),
        (NorthEast, [p(0., 0.), p(10., 0.), p(10., 20.)]),
        (East, [p(0., 0.), p(10., 10.), p(0., 20.)]),
        (SouthEast, [p(10., 0.), p(10., 20.), p(0., 20.)]),
        (South, [p(5., 20.), p(0., 0.), p(10., 0.)]),
        (SouthWest, [p(10., 20.), p(0., 20.), p(0., 0.)]),
        (West, [p(0., 10.), p(10., 0.), p(10., 20.)]),
        (NorthWest, [p(0., 20.), p(0., 0.), p(10., 0.)]),
    ];

    for (orientation, points) in expected {
        assert_eq!(rect_10_20(orientation).path().points(), points, "{}", orientation);
    }
}

#[test]
fn test_path_follows_bounds() {
    let mut figure = rect_10_20(Orientation::East);
    figure.set_bounds(Point::new(4., 2.), Point::new(-2., 8.));
    assert_eq!(
        figure.path().points(),
        [Point::new(-2., 2.), Point::new(4., 5.), Point::new(-2., 8.)]
    );
}

#[test]
fn test_unknown_orientation_name() {
    let unknown = TriangleFigure::from_rect_oriented(
        0.,
        0.,
        10.,
        20.,
        Orientation::from_name_or_default("UPWARDS"),
    );
    assert_eq!(unknown.path(), rect_10_20(Orientation::North).path());
}

#[test]
fn test_set_bounds() {
    let mut figure = TriangleFigure::new();
    figure.set_bounds(Point::new(5., 5.), Point::new(1., 1.));
    assert_eq!(figure.bounds(), Rect::new(1., 1., 4., 4.));

    figure.set_bounds(Point::new(0., 0.), Point::new(0., 0.));
    assert_eq!(figure.bounds(), Rect::new(0., 0., 0.1, 0.1));

    let mut figure = TriangleFigure::new().with_prefs(Prefs::default().min_extent(2.));
    figure.set_bounds(Point::new(3., 3.), Point::new(4., 9.));
    assert_eq!(figure.bounds(), Rect::new(3., 3., 2., 6.));
}

#[test]
fn test_construction_does_not_clamp() {
    assert_eq!(TriangleFigure::new().bounds(), Rect::default());
    assert_eq!(TriangleFigure::new().orientation(), Orientation::North);
    assert_eq!(
        TriangleFigure::with_orientation(Orientation::West).orientation(),
        Orientation::West
    );
}

#[test]
fn test_contains_centroid_for_every_orientation() {
    for orientation in Orientation::iter() {
        let figure = rect_10_20(orientation);
        let centroid = figure.path().centroid().unwrap();
        assert!(figure.contains(centroid, 1.), "{}", orientation);

        let area = figure.drawing_area();
        for outside in [
            Point::new(area.x - 0.5, area.y - 0.5),
            Point::new(area.x + area.width + 0.5, centroid.y),
            Point::new(centroid.x, area.y + area.height + 0.5),
        ] {
            assert!(!figure.contains(outside, 1.), "{} {:?}", orientation, outside);
        }
    }
}

#[test]
fn test_contains_honors_hit_growth() {
    let figure = rect_10_20(Orientation::North);
    // half a stroke width outside the base edge
    assert!(figure.contains(Point::new(5., 20.4), 1.));
    assert!(!figure.contains(Point::new(5., 20.6), 1.));

    let mut unstroked = figure.clone();
    unstroked.attributes_mut().set(STROKE_COLOR, None);
    assert!(!unstroked.contains(Point::new(5., 20.4), 1.));
    assert!(unstroked.contains(Point::new(5., 19.9), 1.));
}

#[test]
fn test_drawing_area() {
    use crate::attributes::{
        StrokeJoin, StrokePlacement, STROKE_JOIN, STROKE_PLACEMENT, STROKE_WIDTH,
    };

    let mut figure = rect_10_20(Orientation::North);
    // center placement, miter join, miter limit 3, width 1
    assert_eq!(figure.drawing_area(), Rect::new(-2.5, -2.5, 15., 25.));

    figure.attributes_mut().set(STROKE_JOIN, StrokeJoin::Round);
    figure.attributes_mut().set(STROKE_WIDTH, 4.);
    assert_eq!(figure.drawing_area(), Rect::new(-3., -3., 16., 26.));

    figure.attributes_mut().set(STROKE_PLACEMENT, StrokePlacement::Outside);
    assert_eq!(figure.drawing_area(), Rect::new(-5., -5., 20., 30.));

    figure.attributes_mut().set(STROKE_PLACEMENT, StrokePlacement::Inside);
    assert_eq!(figure.drawing_area(), Rect::new(-1., -1., 12., 22.));

    figure.attributes_mut().set(STROKE_PLACEMENT, StrokePlacement::Outside);
    figure.attributes_mut().set(STROKE_COLOR, None);
    // the fill still grows half way under the missing stroke
    assert_eq!(figure.drawing_area(), Rect::new(-3., -3., 16., 26.));
}

#[test]
fn test_unstroked_full_fill_stays_in_drawing_area() {
    use crate::attributes::{
        FillUnderStroke, StrokePlacement, FILL_UNDER_STROKE, STROKE_PLACEMENT, STROKE_WIDTH,
    };

    let mut figure = rect_10_20(Orientation::North);
    figure.attributes_mut().set(STROKE_COLOR, None);
    figure.attributes_mut().set(STROKE_WIDTH, 4.);
    figure.attributes_mut().set(STROKE_PLACEMENT, StrokePlacement::Outside);
    figure.attributes_mut().set(FILL_UNDER_STROKE, FillUnderStroke::Full);

    let inside_fill = p(5., 23.);
    assert!(figure.contains(inside_fill, 1.));
    assert!(figure.drawing_area().contains(inside_fill));
    let grown = figure.grown_path(4.).bounding_box().unwrap();
    let area = figure.drawing_area();
    assert!(area.contains(grown.min()) && area.contains(grown.max()), "{:?}", grown);
}

#[test]
fn test_chop() {
    let figure = rect_10_20(Orientation::North);
    // straight down from the center of the hit outline through the base
    let chopped = figure.chop(Point::new(5., 100.));
    assert_close(chopped, Point::new(5., 20.5));

    // on the left edge (4x + y = 20) pushed out by half a stroke width
    let chopped = figure.chop(Point::new(-50., 20.));
    let grown_edge = 20. - 0.5 * 17f32.sqrt();
    assert!((4. * chopped.x + chopped.y - grown_edge).abs() < 1e-3, "{:?}", chopped);
    assert!(chopped.x > 1. && chopped.x < 2.5, "{:?}", chopped);
}

#[test]
fn test_far_from_origin() {
    use crate::attributes::{StrokePlacement, STROKE_PLACEMENT, STROKE_WIDTH};

    let far = TriangleFigure::from_rect(1e5, 1e5, 10., 20.);
    assert_eq!(far.path().signed_area(), 100.);
    assert!(far.contains(p(1e5 + 5., 1e5 + 20.4), 1.));
    assert!(!far.contains(p(1e5 + 5., 1e5 + 20.6), 1.));

    // the grown stroke outline keeps its shape when moved away
    let outside = |x: f32| {
        let mut figure = TriangleFigure::from_rect(x, x, 10., 20.);
        figure.attributes_mut().set(STROKE_PLACEMENT, StrokePlacement::Outside);
        figure.attributes_mut().set(STROKE_WIDTH, 4.);
        figure.grown_path(2.).bounding_box().unwrap()
    };
    let near = outside(0.);
    let moved = outside(1e4);
    assert!((near.y + near.height - 22.).abs() < 1e-4, "{:?}", near);
    assert!((moved.y + moved.height - 1e4 - 22.).abs() < 0.01, "{:?}", moved);
    assert!((moved.x - 1e4 - near.x).abs() < 0.01, "{:?} {:?}", moved, near);

    // connection lines still end on the mitered tip
    let east = TriangleFigure::from_rect_oriented(1e4, 1e4, 20., 20., Orientation::East);
    let chopped = east.chop(p(1e4 + 100., 1e4 + 10.));
    assert!((chopped.x - 1e4 - (20. + 0.5 * 5f32.sqrt())).abs() < 0.01, "{:?}", chopped);
    assert!((chopped.y - 1e4 - 10.).abs() < 0.01, "{:?}", chopped);
}

#[test]
fn test_snapshot_restore() {
    let mut figure = rect_10_20(Orientation::South);
    let snapshot = figure.transform_restore_data();
    figure.set_bounds(Point::new(-3., -3.), Point::new(30., 1.));
    assert_ne!(figure.bounds(), Rect::new(0., 0., 10., 20.));
    figure.restore_transform_to(&snapshot);
    assert_eq!(figure.bounds(), Rect::new(0., 0., 10., 20.));
}

#[test]
fn test_handles_by_detail_level() {
    let figure = rect_10_20(Orientation::North);
    let fine = figure.create_handles(0);
    assert_eq!(fine.len(), 9);
    assert!(fine.contains(&Handle::Orientation(OrientationHandle)));

    let coarse = figure.create_handles(1);
    assert_eq!(coarse.len(), 8);
    assert!(!coarse.contains(&Handle::Orientation(OrientationHandle)));
}
