//! A directional triangle figure for vector drawing editors.
//!
//! The triangle is inscribed in its bounding box and its tip points toward
//! one of eight compass directions. Figures expose geometry queries
//! (outline, bounds, containment, connection chop points), rendering hooks
//! and editing handles through the [`figure::Figure`] trait.

#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate lazy_static;

pub mod attributes;
pub mod basic;
pub mod color;
pub mod error;
pub mod figure;
pub mod geom;
pub mod prefs;
pub mod rendering;
mod support;

pub use basic::{Orientation, Point, Rect, Transform};
pub use figure::{Figure, TriangleFigure};
