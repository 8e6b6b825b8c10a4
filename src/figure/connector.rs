use std::fmt::Debug;

use crate::basic::{Point, Rect};
use crate::figure::{Figure, TriangleFigure};

/// Attachment point of a connection line on a figure
pub trait Connector: Debug {
    fn owner(&self) -> &dyn Figure;

    /// Start of a connection whose other end lies toward `reference`
    fn find_start(&self, reference: Point) -> Point;

    /// End of a connection whose other end lies toward `reference`
    fn find_end(&self, reference: Point) -> Point;

    fn bounds(&self) -> Rect {
        self.owner().bounds()
    }
}

/// Ends connections on the outline of a triangle rather than on its bounds
#[derive(Copy, Clone, Debug)]
pub struct ChopTriangleConnector<'a> {
    owner: &'a TriangleFigure,
}

impl<'a> ChopTriangleConnector<'a> {
    pub fn new(owner: &'a TriangleFigure) -> Self {
        Self { owner }
    }
}

impl Connector for ChopTriangleConnector<'_> {
    fn owner(&self) -> &dyn Figure {
        self.owner
    }

    fn find_start(&self, reference: Point) -> Point {
        self.owner.chop(reference)
    }

    fn find_end(&self, reference: Point) -> Point {
        self.owner.chop(reference)
    }
}
