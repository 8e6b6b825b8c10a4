use crate::attributes::ORIENTATION;
use crate::basic::{Orientation, Point, Rect};
use crate::figure::{Figure, GeometrySnapshot};

/// What a handle changed, enough for the host to undo it
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HandleEdit {
    Bounds(GeometrySnapshot),
    Orientation(Orientation),
}

/// Moves one corner or edge of the bounds, identified by the compass
/// direction it sits in
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ResizeHandle(pub Orientation);

/// Turns the tip of a triangle toward the pointer
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct OrientationHandle;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Handle {
    Resize(ResizeHandle),
    Orientation(OrientationHandle),
}

// point of the bounds in the given compass direction from the center
fn compass_point(bounds: Rect, direction: Orientation) -> Point {
    let (dx, dy) = direction.tip_direction();
    let center = bounds.center();
    Point {
        x: center.x + dx * bounds.width / 2.,
        y: center.y + dy * bounds.height / 2.,
    }
}

impl ResizeHandle {
    pub fn all() -> impl Iterator<Item = Self> {
        Orientation::iter().map(Self)
    }

    pub fn location<F: Figure + ?Sized>(self, figure: &F) -> Point {
        compass_point(figure.bounds(), self.0)
    }

    pub fn track<F: Figure + ?Sized>(self, figure: &mut F, p: Point) -> HandleEdit {
        let before = figure.transform_restore_data();
        let (dx, dy) = self.0.tip_direction();
        let mut min = figure.start_point();
        let mut max = figure.end_point();
        if dx < 0. {
            min.x = p.x;
        } else if dx > 0. {
            max.x = p.x;
        }
        if dy < 0. {
            min.y = p.y;
        } else if dy > 0. {
            max.y = p.y;
        }
        figure.set_bounds(min, max);
        HandleEdit::Bounds(before)
    }
}

impl OrientationHandle {
    /// At the tip of the triangle
    pub fn location<F: Figure + ?Sized>(self, figure: &F) -> Point {
        compass_point(figure.bounds(), figure.attributes().get(ORIENTATION))
    }

    pub fn track<F: Figure + ?Sized>(self, figure: &mut F, p: Point) -> HandleEdit {
        let angle = figure.bounds().center().angle_to(p);
        let orientation = Orientation::closest_to_angle(angle);
        let previous = figure.attributes_mut().set(ORIENTATION, orientation);
        if previous != orientation {
            tracing::debug!(%previous, %orientation, "orientation changed");
        }
        HandleEdit::Orientation(previous)
    }
}

impl Handle {
    pub fn location<F: Figure + ?Sized>(self, figure: &F) -> Point {
        match self {
            Handle::Resize(handle) => handle.location(figure),
            Handle::Orientation(handle) => handle.location(figure),
        }
    }

    pub fn contains<F: Figure + ?Sized>(self, figure: &F, p: Point) -> bool {
        let size = figure.prefs().handle_size;
        let location = self.location(figure);
        Rect::new(location.x - size / 2., location.y - size / 2., size, size).contains(p)
    }

    pub fn track<F: Figure + ?Sized>(self, figure: &mut F, p: Point) -> HandleEdit {
        match self {
            Handle::Resize(handle) => handle.track(figure, p),
            Handle::Orientation(handle) => handle.track(figure, p),
        }
    }

    /// Reverts what `track` did
    pub fn undo<F: Figure + ?Sized>(figure: &mut F, edit: HandleEdit) {
        match edit {
            HandleEdit::Bounds(snapshot) => figure.restore_transform_to(&snapshot),
            HandleEdit::Orientation(orientation) => {
                figure.attributes_mut().set(ORIENTATION, orientation);
            }
        }
    }
}
