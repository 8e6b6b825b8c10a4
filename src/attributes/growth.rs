//! Perpendicular offsets between a figure's geometric outline and the
//! outlines used for filling, stroking and hit testing.
//!
//! `factor` converts screen units to drawing units and only matters for
//! figures whose stroke width is given on screen.

use crate::attributes::{
    Attributes, FillUnderStroke, StrokeJoin, StrokePlacement, StrokeType, FILL_UNDER_STROKE,
    STROKE_COLOR, STROKE_INNER_WIDTH_FACTOR, STROKE_JOIN, STROKE_MITER_LIMIT, STROKE_PLACEMENT,
    STROKE_TYPE, STROKE_WIDTH, STROKE_WIDTH_ON_SCREEN,
};

/// Width covered by the whole stroke, both lines of a double stroke included
pub fn stroke_total_width(attributes: &Attributes, factor: f32) -> f32 {
    let width = match attributes.get(STROKE_TYPE) {
        StrokeType::Basic => attributes.get(STROKE_WIDTH),
        StrokeType::Double => {
            attributes.get(STROKE_WIDTH) * (1. + attributes.get(STROKE_INNER_WIDTH_FACTOR))
        }
    };
    if attributes.get(STROKE_WIDTH_ON_SCREEN) {
        width * factor
    } else {
        width
    }
}

pub fn fill_growth(attributes: &Attributes, factor: f32) -> f32 {
    use FillUnderStroke as F;
    use StrokePlacement as P;

    let width = stroke_total_width(attributes, factor);
    match (attributes.get(FILL_UNDER_STROKE), attributes.get(STROKE_PLACEMENT)) {
        (F::Full, P::Inside) => 0.,
        (F::Full, P::Center) => width / 2.,
        (F::Full, P::Outside) => width,
        (F::None, P::Inside) => -width,
        (F::None, P::Center) => -width / 2.,
        (F::None, P::Outside) => 0.,
        (F::Center, P::Inside) => -width / 2.,
        (F::Center, P::Center) => 0.,
        (F::Center, P::Outside) => width / 2.,
    }
}

/// Offset of the center line of the stroke
pub fn draw_growth(attributes: &Attributes, factor: f32) -> f32 {
    let width = stroke_total_width(attributes, factor);
    match attributes.get(STROKE_PLACEMENT) {
        StrokePlacement::Inside => -width / 2.,
        StrokePlacement::Center => 0.,
        StrokePlacement::Outside => width / 2.,
    }
}

/// Offset of the outermost painted edge
pub fn hit_growth(attributes: &Attributes, factor: f32) -> f32 {
    if attributes.get(STROKE_COLOR).is_none() {
        fill_growth(attributes, factor)
    } else {
        draw_growth(attributes, factor) + stroke_total_width(attributes, factor) / 2.
    }
}

/// Distance a corner of an outline grown by `growth` may reach from the
/// original vertex before it gets beveled
pub fn miter_reach(attributes: &Attributes, growth: f32) -> f32 {
    match attributes.get(STROKE_JOIN) {
        StrokeJoin::Miter => growth.abs() * attributes.get(STROKE_MITER_LIMIT),
        StrokeJoin::Round | StrokeJoin::Bevel => growth.abs(),
    }
}

/// How far fill or stroke may extend past the bounds of the figure
pub fn paint_extent(attributes: &Attributes) -> f32 {
    let miter = match attributes.get(STROKE_JOIN) {
        StrokeJoin::Miter => attributes.get(STROKE_MITER_LIMIT),
        StrokeJoin::Round | StrokeJoin::Bevel => 1.,
    };
    // an unstroked fill still grows under the stroke it would have
    if attributes.get(STROKE_COLOR).is_none() {
        return fill_growth(attributes, 1.).max(0.) * miter;
    }
    let width = stroke_total_width(attributes, 1.);
    match attributes.get(STROKE_PLACEMENT) {
        StrokePlacement::Inside => 0.,
        StrokePlacement::Center => width / 2. * miter,
        StrokePlacement::Outside => width * miter,
    }
}

#[test]
fn test_stroke_total_width() {
    let attributes = Attributes::default().with(STROKE_WIDTH, 2.);
    assert_eq!(stroke_total_width(&attributes, 5.), 2.);

    let attributes = attributes.with(STROKE_TYPE, StrokeType::Double);
    assert_eq!(stroke_total_width(&attributes, 1.), 6.);

    let attributes = attributes.with(STROKE_WIDTH_ON_SCREEN, true);
    assert_eq!(stroke_total_width(&attributes, 0.5), 3.);
}

#[test]
fn test_fill_and_draw_growth() {
    let base = Attributes::default().with(STROKE_WIDTH, 4.);
    for (under, placement, fill, draw) in [
        (FillUnderStroke::Full, StrokePlacement::Inside, 0., -2.),
        (FillUnderStroke::Full, StrokePlacement::Center, 2., 0.),
        (FillUnderStroke::Full, StrokePlacement::Outside, 4., 2.),
        (FillUnderStroke::None, StrokePlacement::Inside, -4., -2.),
        (FillUnderStroke::None, StrokePlacement::Center, -2., 0.),
        (FillUnderStroke::None, StrokePlacement::Outside, 0., 2.),
        (FillUnderStroke::Center, StrokePlacement::Inside, -2., -2.),
        (FillUnderStroke::Center, StrokePlacement::Center, 0., 0.),
        (FillUnderStroke::Center, StrokePlacement::Outside, 2., 2.),
    ] {
        let attributes = base
            .clone()
            .with(FILL_UNDER_STROKE, under)
            .with(STROKE_PLACEMENT, placement);
        assert_eq!(fill_growth(&attributes, 1.), fill, "{:?} {:?}", under, placement);
        assert_eq!(draw_growth(&attributes, 1.), draw, "{:?} {:?}", under, placement);
    }
}

#[test]
fn test_hit_growth() {
    let attributes = Attributes::default()
        .with(STROKE_WIDTH, 4.)
        .with(STROKE_PLACEMENT, StrokePlacement::Outside);
    assert_eq!(hit_growth(&attributes, 1.), 4.);

    let unstroked = attributes.with(STROKE_COLOR, None);
    assert_eq!(hit_growth(&unstroked, 1.), 2.);
}

#[test]
fn test_miter_reach() {
    let attributes = Attributes::default();
    assert_eq!(miter_reach(&attributes, -2.), 6.);
    assert_eq!(miter_reach(&attributes.with(STROKE_JOIN, StrokeJoin::Bevel), 2.), 2.);
}

#[test]
fn test_paint_extent() {
    let attributes = Attributes::default().with(STROKE_WIDTH, 2.);
    assert_eq!(paint_extent(&attributes), 3.);

    let round = attributes.clone().with(STROKE_JOIN, StrokeJoin::Round);
    assert_eq!(paint_extent(&round), 1.);

    let outside = round.clone().with(STROKE_PLACEMENT, StrokePlacement::Outside);
    assert_eq!(paint_extent(&outside), 2.);

    let inside = attributes.clone().with(STROKE_PLACEMENT, StrokePlacement::Inside);
    assert_eq!(paint_extent(&inside), 0.);

    assert_eq!(paint_extent(&attributes.clone().with(STROKE_COLOR, None)), 0.);
}

#[test]
fn test_paint_extent_of_unstroked_fill() {
    let full_outside = Attributes::default()
        .with(STROKE_COLOR, None)
        .with(STROKE_WIDTH, 4.)
        .with(STROKE_PLACEMENT, StrokePlacement::Outside)
        .with(FILL_UNDER_STROKE, FillUnderStroke::Full);
    assert_eq!(paint_extent(&full_outside), 12.);
    assert_eq!(
        paint_extent(&full_outside.clone().with(STROKE_JOIN, StrokeJoin::Bevel)),
        4.
    );
    // shrunken fills stay inside the bounds
    let none_inside = full_outside
        .with(STROKE_PLACEMENT, StrokePlacement::Inside)
        .with(FILL_UNDER_STROKE, FillUnderStroke::None);
    assert_eq!(paint_extent(&none_inside), 0.);
}
