pub use orientation::Orientation;
pub use point::Point;
#[cfg(test)]
pub use point::assert_close;
pub use rect::Rect;

mod orientation;
mod point;
mod rect;

/// Affine transform applied to figures (row-vector convention, see
/// `lyon_geom::Transform`)
pub type Transform = lyon_geom::Transform<f32>;

pub fn transform_point(tx: &Transform, point: Point) -> Point {
    tx.transform_point(point.into()).into()
}

#[test]
fn test_transform_point() {
    let tx = Transform::scale(2., 3.).then_translate(lyon_geom::vector(1., -1.));
    assert_eq!(transform_point(&tx, Point::new(1., 1.)), Point::new(3., 2.));
    assert_eq!(transform_point(&Transform::identity(), Point::new(7., 9.)), Point::new(7., 9.));
}
