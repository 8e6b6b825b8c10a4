use std::collections::HashMap;
use std::f32::consts::TAU;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign, Sub, SubAssign};

use Orientation::*;

// defined in clockwise order starting at North
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Orientation {
    #[default]
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

// fractional (u, v) coordinates of the three vertices inside the bounds,
// indexed by `Orientation as usize`
const UNIT_POINTS: [[(f32, f32); 3]; 8] = [
    [(0.5, 0.), (1., 1.), (0., 1.)], // North
    [(0., 0.), (1., 0.), (1., 1.)],  // NorthEast
    [(0., 0.), (1., 0.5), (0., 1.)], // East
    [(1., 0.), (1., 1.), (0., 1.)],  // SouthEast
    [(0.5, 1.), (0., 0.), (1., 0.)], // South
    [(1., 1.), (0., 1.), (0., 0.)],  // SouthWest
    [(0., 0.5), (1., 0.), (1., 1.)], // West
    [(0., 1.), (0., 0.), (1., 0.)],  // NorthWest
];

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, Orientation> =
        Orientation::iter().map(|o| (o.name(), o)).collect();
}

impl From<u8> for Orientation {
    fn from(num: u8) -> Self {
        match num % 8 {
            0 => North,
            1 => NorthEast,
            2 => East,
            3 => SouthEast,
            4 => South,
            5 => SouthWest,
            6 => West,
            _ => NorthWest,
        }
    }
}

impl Add<u8> for Orientation {
    type Output = Self;

    fn add(self, rhs: u8) -> Self::Output {
        Self::from(self as u8 + rhs % 8)
    }
}

impl AddAssign<u8> for Orientation {
    fn add_assign(&mut self, rhs: u8) {
        *self = *self + rhs;
    }
}

impl Sub<u8> for Orientation {
    type Output = Self;

    fn sub(self, rhs: u8) -> Self::Output {
        self + (8 - (rhs % 8))
    }
}

impl SubAssign<u8> for Orientation {
    fn sub_assign(&mut self, rhs: u8) {
        *self = *self - rhs;
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Orientation {
    // clockwise order starting from North
    pub fn iter() -> impl Iterator<Item = Self> {
        [North, NorthEast, East, SouthEast, South, SouthWest, West, NorthWest]
            .iter()
            .copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            North => "NORTH",
            NorthEast => "NORTH_EAST",
            East => "EAST",
            SouthEast => "SOUTH_EAST",
            South => "SOUTH",
            SouthWest => "SOUTH_WEST",
            West => "WEST",
            NorthWest => "NORTH_WEST",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        BY_NAME.get(name).copied()
    }

    /// Unknown names produce the same triangle as `North`
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    /// Vertex positions as fractions of the bounding box
    pub fn unit_points(self) -> [(f32, f32); 3] {
        UNIT_POINTS[self as usize]
    }

    /// Compass step the tip points along, y grows downwards
    pub fn tip_direction(self) -> (f32, f32) {
        match self {
            North => (0., -1.),
            NorthEast => (1., -1.),
            East => (1., 0.),
            SouthEast => (1., 1.),
            South => (0., 1.),
            SouthWest => (-1., 1.),
            West => (-1., 0.),
            NorthWest => (-1., -1.),
        }
    }

    /// The orientation whose 45° sector contains `angle`, where `angle` is
    /// measured clockwise from East in radians (y grows downwards)
    pub fn closest_to_angle(angle: f32) -> Self {
        // East is a quarter turn clockwise from North
        let steps = (angle.rem_euclid(TAU) / (TAU / 8.)).round() as u8;
        East + steps
    }
}

#[test]
fn test_orientation_math() {
    let test_plus = [
        (North, 1, NorthEast),
        (North, 2, East),
        (West, 3, NorthEast),
        (South, 8, South),
    ];

    for &(start, add, expect) in &test_plus {
        assert_eq!(start + add, expect);
    }

    let test_minus = [
        (North, 1, NorthWest),
        (North, 2, West),
        (East, 3, NorthWest),
        (South, 8, South),
    ];

    for &(start, sub, expect) in &test_minus {
        assert_eq!(start - sub, expect);
    }
}

#[test]
fn test_orientation_names() {
    for orientation in Orientation::iter() {
        assert_eq!(Orientation::from_name(orientation.name()), Some(orientation));
        assert_eq!(orientation.to_string(), orientation.name());
    }
    assert_eq!(Orientation::from_name("UP"), None);
    assert_eq!(Orientation::from_name_or_default("UP"), North);
    assert_eq!(Orientation::from_name_or_default("SOUTH_WEST"), SouthWest);
}

#[test]
fn test_closest_to_angle() {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};
    for (angle, expect) in [
        (0., East),
        (FRAC_PI_4, SouthEast),
        (FRAC_PI_2, South),
        (PI, West),
        (-FRAC_PI_2, North),
        (-FRAC_PI_4, NorthEast),
        (-3. * FRAC_PI_4, NorthWest),
        (3. * FRAC_PI_4, SouthWest),
        (0.3, East),
    ] {
        assert_eq!(Orientation::closest_to_angle(angle), expect, "{}", angle);
    }
}
