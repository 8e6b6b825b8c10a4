use lyon_geom::euclid::default::{Point2D, Vector2D};
use std::marker::PhantomData;
use std::ops::{Div, Mul};

/// Drawing-space point, y grows downwards
#[derive(Copy, Clone, Debug, Default, PartialEq, Add, AddAssign, Sub, SubAssign)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[cfg(feature = "ggez")]
impl From<Point> for ggez::mint::Point2<f32> {
    fn from(Point { x, y }: Point) -> Self {
        ggez::mint::Point2 { x, y }
    }
}

#[cfg(feature = "ggez")]
impl From<ggez::mint::Point2<f32>> for Point {
    fn from(ggez::mint::Point2 { x, y }: ggez::mint::Point2<f32>) -> Self {
        Self { x, y }
    }
}

impl From<Point2D<f32>> for Point {
    fn from(Point2D { x, y, _unit }: Point2D<f32>) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Point2D<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Point2D { x, y, _unit: PhantomData }
    }
}

impl From<Point> for Vector2D<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Vector2D { x, y, _unit: PhantomData }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl Mul<f32> for Point {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl Mul<Point> for f32 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Point {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self { x: self.x / rhs, y: self.y / rhs }
    }
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn magnitude(self) -> f32 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    #[must_use]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }

    /// Angle from `self` to `other`, measured clockwise from the positive
    /// x axis (y grows downwards)
    #[must_use]
    pub fn angle_to(self, other: Self) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// z component of the cross product of the two vectors
    #[must_use]
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }
}

#[cfg(test)]
#[track_caller]
pub fn assert_close(actual: Point, expected: Point) {
    assert!(
        actual.distance_squared(expected) < 1e-6,
        "{:?} is not close to {:?}",
        actual,
        expected
    );
}

#[test]
fn test_point_ops() {
    let a = Point::new(1., 2.);
    let b = Point::new(4., 6.);
    assert_eq!(b - a, Point::new(3., 4.));
    assert_eq!((b - a).magnitude(), 5.);
    assert_eq!(a.distance_squared(b), 25.);
    assert_eq!(2. * a, Point::new(2., 4.));
    assert_eq!(b / 2., Point::new(2., 3.));
    assert_eq!(Point::new(1., 0.).cross(Point::new(0., 1.)), 1.);
}
