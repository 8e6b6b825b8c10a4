use lyon_geom::{Line, Vector};

use crate::basic::Point;
use crate::geom::Polygon;

const EPSILON: f32 = 1e-6;

/// Offsets every edge of a closed polygon perpendicularly by `offset`,
/// outwards when positive and inwards when negative, and rebuilds the
/// vertices from the intersections of consecutive offset edges.
///
/// When growing, a vertex whose miter would reach further than
/// `miter_limit` from the original vertex is replaced by a bevel (two
/// points). Shrinking a polygon past the point where it collapses yields an
/// empty polygon.
pub fn grow_outline(polygon: &Polygon, offset: f32, miter_limit: f32) -> Polygon {
    let Some(&origin) = polygon.first() else {
        return Polygon::default();
    };
    if offset == 0. {
        return polygon.clone();
    }
    // offset around the first vertex, intersections of lines far from the
    // origin are too imprecise in f32
    let local = polygon.translated(Point::default() - origin);
    grow_local(&local, offset, miter_limit)
        .map(|grown| grown.translated(origin))
        .unwrap_or_else(|| polygon.clone())
}

// `None` when there is nothing to offset
fn grow_local(polygon: &Polygon, offset: f32, miter_limit: f32) -> Option<Polygon> {
    let area = polygon.signed_area();
    if area.abs() < EPSILON {
        return None;
    }

    let edges: Vec<OffsetEdge> = polygon
        .edges()
        .filter(|(a, b)| a.distance_squared(*b) > EPSILON * EPSILON)
        .map(|(a, b)| OffsetEdge::new(a, b, offset, area > 0.))
        .collect();
    if edges.len() < 3 {
        return None;
    }

    let mut points = Vec::with_capacity(edges.len() * 2);
    for (i, next) in edges.iter().enumerate() {
        let prev = &edges[(i + edges.len() - 1) % edges.len()];
        let corner = next.original_start;
        let prev_end = corner + prev.normal * offset;
        let next_start = corner + next.normal * offset;

        match prev.line().intersection(&next.line()).map(Point::from) {
            Some(miter) if offset < 0. || (miter - corner).magnitude() <= miter_limit => {
                points.push(miter)
            }
            Some(_) => {
                points.push(prev_end);
                points.push(next_start);
            }
            // collinear edges
            None => points.push(next_start),
        }
    }

    let grown = Polygon::from(points);
    if offset < 0. && collapsed(&grown, area) {
        tracing::trace!(offset, "outline collapsed while shrinking");
        return Some(Polygon::default());
    }
    Some(grown)
}

struct OffsetEdge {
    original_start: Point,
    start: Point,
    direction: Point,
    normal: Point,
}

impl OffsetEdge {
    fn new(a: Point, b: Point, offset: f32, clockwise: bool) -> Self {
        let direction = (b - a) / (b - a).magnitude();
        // outward normal, depends on the winding of the polygon
        let normal = if clockwise {
            Point { x: direction.y, y: -direction.x }
        } else {
            Point { x: -direction.y, y: direction.x }
        };
        Self {
            original_start: a,
            start: a + normal * offset,
            direction,
            normal,
        }
    }

    fn line(&self) -> Line<f32> {
        Line {
            point: self.start.into(),
            vector: Vector::from(self.direction),
        }
    }
}

// a shrunken outline that turned inside out has the opposite winding or no
// area left
fn collapsed(grown: &Polygon, original_area: f32) -> bool {
    let area = grown.signed_area();
    area.abs() < EPSILON
        || area.signum() != original_area.signum()
        || area.abs() > original_area.abs()
}

#[cfg(test)]
use crate::basic::assert_close;

#[cfg(test)]
fn square() -> Polygon {
    vec![
        Point::new(0., 0.),
        Point::new(10., 0.),
        Point::new(10., 10.),
        Point::new(0., 10.),
    ]
    .into()
}

#[test]
fn test_grow_square() {
    let grown = grow_outline(&square(), 2., 10.);
    assert_eq!(grown.len(), 4);
    let expected = [
        Point::new(-2., -2.),
        Point::new(12., -2.),
        Point::new(12., 12.),
        Point::new(-2., 12.),
    ];
    for (&actual, expected) in grown.iter().zip(expected) {
        assert_close(actual, expected);
    }
}

#[test]
fn test_grow_is_winding_independent() {
    let reversed: Polygon = square().iter().rev().copied().collect::<Vec<_>>().into();
    let bounds = grow_outline(&reversed, 1., 10.).bounding_box().unwrap();
    assert_close(bounds.min(), Point::new(-1., -1.));
    assert_close(bounds.max(), Point::new(11., 11.));
}

#[test]
fn test_shrink_square() {
    let bounds = grow_outline(&square(), -3., 10.).bounding_box().unwrap();
    assert_close(bounds.min(), Point::new(3., 3.));
    assert_close(bounds.max(), Point::new(7., 7.));
    assert!(grow_outline(&square(), -6., 10.).is_empty());
}

#[test]
fn test_bevel_beyond_miter_limit() {
    // square corners miter at sqrt(2) * offset
    let beveled = grow_outline(&square(), 2., 2.);
    assert_eq!(beveled.len(), 8);
    assert_close(beveled[0], Point::new(-2., 0.));
    assert_close(beveled[1], Point::new(0., -2.));
    assert!(beveled.contains(Point::new(-1., 5.)));
    assert!(!beveled.contains(Point::new(-1.9, -1.9)));
}

#[test]
fn test_zero_offset_and_degenerate() {
    assert_eq!(grow_outline(&square(), 0., 1.), square());
    let flat: Polygon = vec![Point::new(0., 0.), Point::new(5., 0.), Point::new(10., 0.)].into();
    assert_eq!(grow_outline(&flat, 1., 1.), flat);
}

#[test]
fn test_grow_far_from_origin() {
    let offset = Point::new(1e4, 1e4);
    let near = grow_outline(&square(), 2., 10.);
    let far = grow_outline(&square().translated(offset), 2., 10.);
    assert_eq!(far.len(), near.len());
    for (&far, &near) in far.iter().zip(near.iter()) {
        let diff = far - offset - near;
        assert!(diff.magnitude() < 0.01, "{:?} {:?}", far, near);
    }
}
