/// Editing constants shared by the figures of a drawing
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Prefs {
    /// Smallest width and height `set_bounds` produces
    pub min_extent: f32,
    /// Added on every side of the painted area when invalidating
    pub drawing_area_padding: f32,
    /// Side of the square a handle reacts to
    pub handle_size: f32,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            min_extent: 0.1,
            drawing_area_padding: 1.,
            handle_size: 7.,
        }
    }
}

// builder
impl Prefs {
    pub fn min_extent(mut self, min_extent: f32) -> Self {
        self.min_extent = min_extent;
        self
    }

    pub fn drawing_area_padding(mut self, padding: f32) -> Self {
        self.drawing_area_padding = padding;
        self
    }

    pub fn handle_size(mut self, handle_size: f32) -> Self {
        self.handle_size = handle_size;
        self
    }
}
