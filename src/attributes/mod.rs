//! Typed attribute storage for figures.
//!
//! Every attribute is identified by a zero-sized key (`STROKE_WIDTH`,
//! `ORIENTATION`, ...) whose value type is fixed at compile time:
//!
//! ```
//! use triangle_figure::attributes::{Attributes, ORIENTATION, STROKE_WIDTH};
//! use triangle_figure::basic::Orientation;
//!
//! let mut attributes = Attributes::default();
//! let previous = attributes.set(ORIENTATION, Orientation::West);
//! assert_eq!(previous, Orientation::North);
//! assert_eq!(attributes.get(STROKE_WIDTH), 1.);
//! ```

use std::fmt::Debug;
use std::mem;

use crate::basic::Orientation;
use crate::color::Color;

pub mod growth;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum StrokePlacement {
    Inside,
    #[default]
    Center,
    Outside,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum StrokeType {
    #[default]
    Basic,
    /// Two parallel lines separated by `STROKE_INNER_WIDTH_FACTOR` times the
    /// stroke width
    Double,
}

/// How much of the area under the stroke gets filled
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum FillUnderStroke {
    None,
    #[default]
    Center,
    Full,
}

pub trait AttributeKey: Copy + Debug {
    type Value: Clone + Debug + PartialEq;

    const ID: AttributeId;

    fn slot(attributes: &Attributes) -> &Self::Value;

    fn slot_mut(attributes: &mut Attributes) -> &mut Self::Value;
}

macro_rules! attribute_keys {
    ($(
        $(#[$doc:meta])*
        $konst:ident($key:ident, $id:ident) => $field:ident: $ty:ty = $default:expr;
    )*) => {
        /// Discriminant of every known attribute key
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
        pub enum AttributeId {
            $($id,)*
        }

        impl AttributeId {
            pub const ALL: &'static [AttributeId] = &[$(AttributeId::$id,)*];
        }

        #[derive(Clone, Debug, PartialEq)]
        pub struct Attributes {
            $($field: $ty,)*
        }

        impl Default for Attributes {
            fn default() -> Self {
                Self {
                    $($field: $default,)*
                }
            }
        }

        $(
            $(#[$doc])*
            #[derive(Clone, Copy, Debug)]
            pub struct $key;

            $(#[$doc])*
            pub const $konst: $key = $key;

            impl AttributeKey for $key {
                type Value = $ty;

                const ID: AttributeId = AttributeId::$id;

                fn slot(attributes: &Attributes) -> &Self::Value {
                    &attributes.$field
                }

                fn slot_mut(attributes: &mut Attributes) -> &mut Self::Value {
                    &mut attributes.$field
                }
            }
        )*
    };
}

attribute_keys! {
    /// Direction the tip of a triangle points to
    ORIENTATION(OrientationKey, Orientation) => orientation: Orientation = Orientation::North;
    /// `None` disables stroking
    STROKE_COLOR(StrokeColorKey, StrokeColor) => stroke_color: Option<Color> = Some(Color::BLACK);
    STROKE_WIDTH(StrokeWidthKey, StrokeWidth) => stroke_width: f32 = 1.;
    STROKE_PLACEMENT(StrokePlacementKey, StrokePlacement) => stroke_placement: StrokePlacement = StrokePlacement::Center;
    STROKE_JOIN(StrokeJoinKey, StrokeJoin) => stroke_join: StrokeJoin = StrokeJoin::Miter;
    STROKE_MITER_LIMIT(StrokeMiterLimitKey, StrokeMiterLimit) => stroke_miter_limit: f32 = 3.;
    STROKE_TYPE(StrokeTypeKey, StrokeType) => stroke_type: StrokeType = StrokeType::Basic;
    STROKE_INNER_WIDTH_FACTOR(StrokeInnerWidthFactorKey, StrokeInnerWidthFactor) => stroke_inner_width_factor: f32 = 2.;
    /// The stroke width is given in screen units and gets multiplied by
    /// the scale factor of the view
    STROKE_WIDTH_ON_SCREEN(StrokeWidthOnScreenKey, StrokeWidthOnScreen) => stroke_width_on_screen: bool = false;
    /// `None` disables filling
    FILL_COLOR(FillColorKey, FillColor) => fill_color: Option<Color> = Some(Color::WHITE);
    FILL_UNDER_STROKE(FillUnderStrokeKey, FillUnderStroke) => fill_under_stroke: FillUnderStroke = FillUnderStroke::Center;
}

impl Attributes {
    pub fn get<K: AttributeKey>(&self, _key: K) -> K::Value {
        K::slot(self).clone()
    }

    /// Returns the previous value
    pub fn set<K: AttributeKey>(&mut self, _key: K, value: K::Value) -> K::Value {
        tracing::trace!(key = ?K::ID, ?value, "set attribute");
        mem::replace(K::slot_mut(self), value)
    }

    // builder
    #[must_use]
    pub fn with<K: AttributeKey>(mut self, key: K, value: K::Value) -> Self {
        self.set(key, value);
        self
    }
}

#[test]
fn test_defaults() {
    let attributes = Attributes::default();
    assert_eq!(attributes.get(ORIENTATION), Orientation::North);
    assert_eq!(attributes.get(STROKE_COLOR), Some(Color::BLACK));
    assert_eq!(attributes.get(FILL_COLOR), Some(Color::WHITE));
    assert_eq!(attributes.get(STROKE_MITER_LIMIT), 3.);
    assert_eq!(attributes.get(STROKE_PLACEMENT), StrokePlacement::Center);
    assert_eq!(AttributeId::ALL.len(), 11);
}

#[test]
fn test_set_returns_previous() {
    let mut attributes = Attributes::default();
    assert_eq!(attributes.set(STROKE_WIDTH, 4.), 1.);
    assert_eq!(attributes.set(STROKE_WIDTH, 2.), 4.);
    assert_eq!(attributes.get(STROKE_WIDTH), 2.);

    let attributes = attributes.with(STROKE_COLOR, None).with(STROKE_JOIN, StrokeJoin::Bevel);
    assert_eq!(attributes.get(STROKE_COLOR), None);
    assert_eq!(attributes.get(STROKE_JOIN), StrokeJoin::Bevel);
    assert_eq!(StrokeJoinKey::ID, AttributeId::StrokeJoin);
}
