use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use triangle_figure::attributes::{
    StrokeJoin, StrokePlacement, FILL_COLOR, ORIENTATION, STROKE_COLOR, STROKE_JOIN,
    STROKE_PLACEMENT, STROKE_WIDTH, STROKE_WIDTH_ON_SCREEN,
};
use triangle_figure::color::Color;
use triangle_figure::figure::{Connector, Handle, HandleEdit, OrientationHandle, ResizeHandle};
use triangle_figure::rendering::{DrawOp, RecordingSurface};
use triangle_figure::{Figure, Orientation, Point, Rect, Transform, TriangleFigure};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn rect_close(a: Rect, b: Rect) -> bool {
    close(a.x, b.x) && close(a.y, b.y) && close(a.width, b.width) && close(a.height, b.height)
}

fn random_figure(rng: &mut StdRng) -> TriangleFigure {
    let orientation = Orientation::from(rng.gen_range(0..8u8));
    TriangleFigure::from_rect_oriented(
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
        rng.gen_range(5.0..80.0),
        rng.gen_range(5.0..80.0),
        orientation,
    )
}

#[test]
fn centroid_inside_and_drawing_area_outside() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let figure = random_figure(&mut rng);
        let centroid = figure.path().centroid().unwrap();
        assert!(figure.contains(centroid, 1.), "{:?}", figure);

        let area = figure.drawing_area();
        for _ in 0..20 {
            let outside = Point::new(
                area.x + area.width + rng.gen_range(0.01..50.0),
                area.y + rng.gen_range(-50.0..area.height + 50.),
            );
            assert!(!figure.contains(outside, 1.), "{:?} {:?}", figure, outside);
            let outside = Point::new(
                area.x + rng.gen_range(-50.0..area.width + 50.),
                area.y - rng.gen_range(0.01..50.0),
            );
            assert!(!figure.contains(outside, 1.), "{:?} {:?}", figure, outside);
        }
    }
}

#[test]
fn identity_transform_keeps_bounds() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let mut figure = random_figure(&mut rng);
        let before = figure.bounds();
        figure.transform(&Transform::identity());
        assert!(rect_close(figure.bounds(), before), "{:?} {:?}", figure.bounds(), before);
    }
}

#[test]
fn transform_maps_corners() {
    let mut figure = TriangleFigure::from_rect_oriented(1., 2., 3., 4., Orientation::East);
    figure.transform(&Transform::scale(2., 2.).then_translate(lyon_geom::vector(10., 0.)));
    assert!(rect_close(figure.bounds(), Rect::new(12., 4., 6., 8.)));

    // mirrored corners get normalized again
    figure.transform(&Transform::scale(-1., 1.));
    assert!(rect_close(figure.bounds(), Rect::new(-18., 4., 6., 8.)));
    assert_eq!(figure.orientation(), Orientation::East);
}

#[test]
fn rotation_keeps_figure_axis_aligned() {
    let mut figure = TriangleFigure::from_rect(0., 0., 10., 20.);
    figure.transform(&Transform::rotation(lyon_geom::Angle::degrees(90.)));
    let bounds = figure.bounds();
    assert!(rect_close(bounds, Rect::new(-20., 0., 20., 10.)), "{:?}", bounds);
}

#[test]
fn clone_is_deep() {
    let original = TriangleFigure::from_rect(0., 0., 10., 20.);
    let mut copy = original.clone();
    copy.set_bounds(Point::new(50., 50.), Point::new(60., 55.));
    copy.attributes_mut().set(ORIENTATION, Orientation::South);

    assert_eq!(original.bounds(), Rect::new(0., 0., 10., 20.));
    assert_eq!(original.orientation(), Orientation::North);
    assert_eq!(copy.bounds(), Rect::new(50., 50., 10., 5.));
}

#[test]
fn draw_fills_then_strokes() {
    let figure = TriangleFigure::from_rect(0., 0., 10., 20.);
    let mut surface = RecordingSurface::default();
    figure.draw(&mut surface).unwrap();

    match surface.ops() {
        [
            DrawOp::Fill { polygon: fill, color: fill_color },
            DrawOp::Stroke { polygon: stroke, width, color },
        ] => {
            // centered stroke: neither outline is grown
            assert_eq!(*fill, figure.path());
            assert_eq!(*stroke, figure.path());
            assert_eq!(*fill_color, Color::WHITE);
            assert_eq!(*color, Color::BLACK);
            assert_eq!(*width, 1.);
        }
        ops => panic!("unexpected draw calls {:?}", ops),
    }
}

#[test]
fn draw_grows_outlines_for_outside_stroke() {
    let mut figure = TriangleFigure::from_rect(0., 0., 10., 20.);
    figure.attributes_mut().set(STROKE_PLACEMENT, StrokePlacement::Outside);
    figure.attributes_mut().set(STROKE_WIDTH, 2.);
    figure.attributes_mut().set(STROKE_JOIN, StrokeJoin::Bevel);

    let mut surface = RecordingSurface::default();
    figure.draw(&mut surface).unwrap();
    let [DrawOp::Fill { polygon: fill, .. }, DrawOp::Stroke { polygon: stroke, .. }] = surface.ops()
    else {
        panic!("unexpected draw calls {:?}", surface.ops());
    };

    // fill reaches the middle of the stroke, the stroke runs one unit out
    let fill_bounds = fill.bounding_box().unwrap();
    let stroke_bounds = stroke.bounding_box().unwrap();
    assert!(close(fill_bounds.y + fill_bounds.height, 21.), "{:?}", fill_bounds);
    assert!(close(stroke_bounds.y + stroke_bounds.height, 21.), "{:?}", stroke_bounds);
    // bevel joins add a vertex per corner
    assert_eq!(fill.len(), 6);
}

#[test]
fn draw_skips_disabled_paints() {
    let mut figure = TriangleFigure::from_rect(0., 0., 10., 20.);
    figure.attributes_mut().set(FILL_COLOR, None);
    let mut surface = RecordingSurface::default();
    figure.draw(&mut surface).unwrap();
    assert!(matches!(surface.ops(), [DrawOp::Stroke { .. }]));

    figure.attributes_mut().set(STROKE_COLOR, None);
    surface.clear();
    figure.draw(&mut surface).unwrap();
    assert!(surface.ops().is_empty());

    let mut negative = TriangleFigure::from_rect(0., 0., 10., 20.);
    negative.attributes_mut().set(STROKE_WIDTH, -1.);
    negative.draw(&mut surface).unwrap();
    assert!(matches!(surface.ops(), [DrawOp::Fill { .. }]));
}

#[test]
fn draw_zero_width_stroke_as_hairline() {
    let mut figure = TriangleFigure::from_rect(0., 0., 10., 20.);
    figure.attributes_mut().set(STROKE_WIDTH, 0.);
    let mut surface = RecordingSurface::default();
    figure.draw(&mut surface).unwrap();
    match surface.ops() {
        [DrawOp::Fill { .. }, DrawOp::Stroke { polygon, width, .. }] => {
            assert_eq!(*width, 0.);
            assert_eq!(*polygon, figure.path());
        }
        ops => panic!("unexpected draw calls {:?}", ops),
    }
}

#[test]
fn stroke_width_on_screen_uses_scale_factor() {
    let mut figure = TriangleFigure::from_rect(0., 0., 10., 20.);
    figure.attributes_mut().set(STROKE_WIDTH_ON_SCREEN, true);
    figure.attributes_mut().set(STROKE_WIDTH, 4.);

    let mut surface = RecordingSurface::new(0.25);
    figure.draw_stroke(&mut surface).unwrap();
    assert!(matches!(surface.ops(), [DrawOp::Stroke { width, .. }] if *width == 1.));

    // hit tolerance shrinks as the view zooms in
    assert!(figure.contains(Point::new(5., 21.5), 1.));
    assert!(!figure.contains(Point::new(5., 21.5), 0.25));
}

#[test]
fn connectors_chop_on_outline() {
    let figure = TriangleFigure::from_rect_oriented(0., 0., 20., 20., Orientation::East);
    let connector = figure.find_connector(Point::new(100., 10.));
    let end = connector.find_end(Point::new(100., 10.));
    // mitered tip of the outline grown by half the stroke width
    assert!((end.x - (20. + 0.5 * 5f32.sqrt())).abs() < 1e-3, "{:?}", end);
    assert!((end.y - 10.).abs() < 1e-3, "{:?}", end);
    assert_eq!(connector.bounds(), figure.bounds());

    let compatible = figure.find_compatible_connector(connector.as_ref(), true);
    assert_eq!(compatible.find_start(Point::new(100., 10.)), end);
    assert!(std::ptr::eq(
        compatible.owner() as *const dyn Figure as *const u8,
        &figure as *const TriangleFigure as *const u8
    ));
}

#[test]
fn orientation_handle_follows_pointer() {
    let mut figure = TriangleFigure::from_rect(0., 0., 20., 20.);
    let handle = Handle::Orientation(OrientationHandle);
    assert_eq!(handle.location(&figure), Point::new(10., 0.));
    assert!(handle.contains(&figure, Point::new(12., 2.)));
    assert!(!handle.contains(&figure, Point::new(15., 2.)));

    let edit = handle.track(&mut figure, Point::new(30., 31.));
    assert_eq!(edit, HandleEdit::Orientation(Orientation::North));
    assert_eq!(figure.orientation(), Orientation::SouthEast);
    assert_eq!(handle.location(&figure), Point::new(20., 20.));

    handle.track(&mut figure, Point::new(-5., 10.));
    assert_eq!(figure.orientation(), Orientation::West);

    Handle::undo(&mut figure, edit);
    assert_eq!(figure.orientation(), Orientation::North);
}

#[test]
fn resize_handles_move_one_side() {
    let mut figure = TriangleFigure::from_rect(0., 0., 20., 20.);

    let east = Handle::Resize(ResizeHandle(Orientation::East));
    assert_eq!(east.location(&figure), Point::new(20., 10.));
    let edit = east.track(&mut figure, Point::new(35., 99.));
    assert_eq!(figure.bounds(), Rect::new(0., 0., 35., 20.));

    let north_west = Handle::Resize(ResizeHandle(Orientation::NorthWest));
    north_west.track(&mut figure, Point::new(40., -5.));
    assert_eq!(figure.bounds(), Rect::new(35., -5., 5., 25.));

    // dragging onto the opposite side clamps to the minimum extent
    let south = Handle::Resize(ResizeHandle(Orientation::South));
    south.track(&mut figure, Point::new(0., -5.));
    assert_eq!(figure.bounds().height, 0.1);

    Handle::undo(&mut figure, edit);
    assert_eq!(figure.bounds(), Rect::new(0., 0., 20., 20.));
}
