use std::ops::Deref;

use itertools::Itertools;
use lyon_geom::LineSegment;

use crate::basic::{Point, Rect};
use crate::support::partial_min_max::PartialMinMax;

pub use outline::grow_outline;

mod outline;

/// Closed polygonal path, the last point connects back to the first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(value: Polygon) -> Self {
        value.points
    }
}

impl Deref for Polygon {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl Polygon {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Every edge as (start, end), including the closing one
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.iter().copied().circular_tuple_windows()
    }

    pub fn bounding_box(&self) -> Option<Rect> {
        Rect::enclosing(&self.points)
    }

    /// Every point moved by `delta`
    pub fn translated(&self, delta: Point) -> Self {
        self.points.iter().map(|&p| p + delta).collect::<Vec<_>>().into()
    }

    /// Shoelace area, positive when the vertices turn clockwise on screen
    pub fn signed_area(&self) -> f32 {
        if self.points.len() < 3 {
            return 0.;
        }
        // relative to the first vertex, products of far away coordinates
        // lose the precision the area needs
        let origin = self.points[0];
        self.edges()
            .map(|(a, b)| (a - origin).cross(b - origin))
            .sum::<f32>()
            / 2.
    }

    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let sum = self.points.iter().fold(Point::default(), |acc, &p| acc + p);
        Some(sum / self.points.len() as f32)
    }

    /// Even-odd rule
    pub fn contains(&self, p: Point) -> bool {
        let crossings = self
            .edges()
            .filter(|&(a, b)| {
                (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x
            })
            .count();
        crossings % 2 == 1
    }

    /// Where the segment from the center of the bounding box to `p` leaves
    /// the outline; the crossing nearest to `p` wins. Falls back to the
    /// vertex nearest to `p` when no edge is crossed.
    pub fn chop(&self, p: Point) -> Point {
        let Some(bounds) = self.bounding_box() else {
            return p;
        };
        // intersect in coordinates local to the bounds
        let origin = bounds.min();
        let ray = LineSegment {
            from: (bounds.center() - origin).into(),
            to: (p - origin).into(),
        };

        let crossing = self
            .edges()
            .filter_map(|(a, b)| {
                LineSegment { from: (a - origin).into(), to: (b - origin).into() }
                    .intersection(&ray)
                    .map(|c| Point::from(c) + origin)
            })
            .partial_min_by_key(|c| c.distance_squared(p));

        crossing.unwrap_or_else(|| {
            tracing::debug!(x = p.x, y = p.y, "chop: no edge crossed, using nearest vertex");
            self.points
                .iter()
                .copied()
                .partial_min_by_key(|v| v.distance_squared(p))
                .unwrap_or(p)
        })
    }
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
fn test_contains() {
    let sq = square();
    assert!(sq.contains(Point::new(5., 5.)));
    assert!(sq.contains(Point::new(0.5, 9.5)));
    assert!(!sq.contains(Point::new(-0.5, 5.)));
    assert!(!sq.contains(Point::new(5., 10.5)));
    assert!(!Polygon::default().contains(Point::new(0., 0.)));
}

#[test]
fn test_signed_area_and_centroid() {
    let sq = square();
    assert_eq!(sq.signed_area(), 100.);
    let reversed: Polygon = sq.iter().rev().copied().collect::<Vec<_>>().into();
    assert_eq!(reversed.signed_area(), -100.);
    assert_eq!(sq.centroid(), Some(Point::new(5., 5.)));
}

#[test]
fn test_chop() {
    let sq = square();
    assert_close(sq.chop(Point::new(25., 5.)), Point::new(10., 5.));
    assert_close(sq.chop(Point::new(5., -40.)), Point::new(5., 0.));

    // center of the bounding box: nothing crossed, nearest vertex
    let chopped = sq.chop(Point::new(5., 5.));
    assert!(sq.contains(Point::new(5., 5.)));
    assert_eq!(chopped, Point::new(0., 0.));

    assert_eq!(Polygon::default().chop(Point::new(1., 2.)), Point::new(1., 2.));
}

#[test]
fn test_far_from_origin() {
    let offset = Point::new(1e5, -1e5);
    let far = square().translated(offset);
    assert_eq!(far.signed_area(), 100.);

    let chopped = far.chop(Point::new(25., 5.) + offset) - offset;
    assert!((chopped.x - 10.).abs() < 0.02 && (chopped.y - 5.).abs() < 0.02, "{:?}", chopped);
}
