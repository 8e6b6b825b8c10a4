/// Straight-alpha RGBA color, components in `0.0..=1.0`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1., 1., 1., 1.);
    pub const BLACK: Self = Self::new(0., 0., 0., 1.);

    #[inline(always)]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline(always)]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255., g as f32 / 255., b as f32 / 255., 1.)
    }
}

#[cfg(feature = "ggez")]
impl From<Color> for ggez::graphics::Color {
    fn from(Color { r, g, b, a }: Color) -> Self {
        ggez::graphics::Color::new(r, g, b, a)
    }
}

#[test]
fn test_from_rgb() {
    assert_eq!(Color::from_rgb(255, 0, 255), Color::new(1., 0., 1., 1.));
    assert_eq!(Color::from_rgb(0, 0, 0), Color::BLACK);
}
