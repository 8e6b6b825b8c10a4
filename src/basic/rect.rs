use crate::basic::Point;

/// Axis-aligned rectangle given by its top-left corner and extent
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Normalizes two arbitrary corners, neither extent goes below `min_extent`
    pub fn from_corners(anchor: Point, lead: Point, min_extent: f32) -> Self {
        Self {
            x: anchor.x.min(lead.x),
            y: anchor.y.min(lead.y),
            width: (lead.x - anchor.x).abs().max(min_extent),
            height: (lead.y - anchor.y).abs().max(min_extent),
        }
    }

    pub fn min(self) -> Point {
        Point { x: self.x, y: self.y }
    }

    pub fn max(self) -> Point {
        Point {
            x: self.x + self.width,
            y: self.y + self.height,
        }
    }

    pub fn center(self) -> Point {
        Point {
            x: self.x + self.width / 2.,
            y: self.y + self.height / 2.,
        }
    }

    /// Maps fractional coordinates to a point inside the rectangle
    pub fn lerp(self, (u, v): (f32, f32)) -> Point {
        Point {
            x: self.x + u * self.width,
            y: self.y + v * self.height,
        }
    }

    /// Grows by `h` on the left and right and `v` on the top and bottom
    #[must_use]
    pub fn grow(self, h: f32, v: f32) -> Self {
        Self {
            x: self.x - h,
            y: self.y - v,
            width: self.width + 2. * h,
            height: self.height + 2. * v,
        }
    }

    pub fn contains(self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x <= self.x + self.width && p.y <= self.y + self.height
    }

    /// Smallest rectangle containing all the points
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        use crate::support::partial_min_max::PartialMinMax;

        let (min_x, max_x) = points.iter().map(|p| p.x).partial_minmax_copy()?;
        let (min_y, max_y) = points.iter().map(|p| p.y).partial_minmax_copy()?;
        Some(Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        })
    }
}

#[test]
fn test_from_corners() {
    let r = Rect::from_corners(Point::new(5., 5.), Point::new(1., 1.), 0.1);
    assert_eq!(r, Rect::new(1., 1., 4., 4.));

    let r = Rect::from_corners(Point::new(0., 0.), Point::new(0., 0.), 0.1);
    assert_eq!(r, Rect::new(0., 0., 0.1, 0.1));

    let r = Rect::from_corners(Point::new(2., 8.), Point::new(6., 3.), 0.1);
    assert_eq!(r, Rect::new(2., 3., 4., 5.));
}

#[test]
fn test_grow_and_contains() {
    let r = Rect::new(0., 0., 10., 20.).grow(2., 3.);
    assert_eq!(r, Rect::new(-2., -3., 14., 26.));
    assert!(r.contains(Point::new(-2., -3.)));
    assert!(r.contains(Point::new(5., 10.)));
    assert!(!r.contains(Point::new(12.5, 0.)));
}

#[test]
fn test_enclosing() {
    let points = [Point::new(3., -1.), Point::new(-2., 4.), Point::new(1., 1.)];
    assert_eq!(Rect::enclosing(&points), Some(Rect::new(-2., -1., 5., 5.)));
    assert_eq!(Rect::enclosing(&[]), None);
}
