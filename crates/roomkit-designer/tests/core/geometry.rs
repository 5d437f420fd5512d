use roomkit_designer::geometry::{
    area, bounds, centroid, closest_point_on_segment, point_in_polygon, point_on_segment,
    segments_intersect, snap_to_grid,
};
use roomkit_designer::model::{Bounds, Point};

fn p(x: f64, z: f64) -> Point {
    Point::new(x, z)
}

#[test]
fn test_area_of_small_inputs_is_zero() {
    assert_eq!(area(&[]), 0.0);
    assert_eq!(area(&[p(1.0, 1.0)]), 0.0);
    assert_eq!(area(&[p(0.0, 0.0), p(3.0, 4.0)]), 0.0);
}

#[test]
fn test_area_of_rectangle() {
    let rect = [p(0.0, 0.0), p(4.0, 0.0), p(4.0, 3.0), p(0.0, 3.0)];
    assert_eq!(area(&rect), 12.0);
    assert_eq!(centroid(&rect), p(2.0, 1.5));
}

#[test]
fn test_area_ignores_explicit_closing_point() {
    let open = [p(3.0, 0.0), p(5.0, 0.0), p(5.0, 2.0)];
    let closed = [p(3.0, 0.0), p(5.0, 0.0), p(5.0, 2.0), p(3.0, 0.0)];
    assert_eq!(area(&open), 2.0);
    assert_eq!(area(&closed), 2.0);
}

#[test]
fn test_area_is_orientation_independent() {
    let cw = [p(0.0, 0.0), p(0.0, 2.0), p(2.0, 2.0), p(2.0, 0.0)];
    let ccw = [p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)];
    assert_eq!(area(&cw), area(&ccw));
}

#[test]
fn test_centroid_of_empty_is_origin() {
    assert_eq!(centroid(&[]), Point::origin());
}

#[test]
fn test_bounds() {
    assert!(bounds(&[p(1.0, 1.0)]).is_empty());
    assert_eq!(bounds(&[]), Bounds::empty());

    let b = bounds(&[p(-1.0, 2.0), p(3.0, -4.0), p(0.5, 0.5)]);
    assert_eq!(b, Bounds::new(-1.0, 3.0, -4.0, 2.0));
    assert_eq!(b.width(), 4.0);
    assert_eq!(b.depth(), 6.0);
}

#[test]
fn test_point_on_segment() {
    let a = p(0.0, 0.0);
    let b = p(4.0, 0.0);
    assert!(point_on_segment(p(2.0, 0.0), a, b, 1e-9));
    assert!(point_on_segment(a, a, b, 1e-9));
    assert!(point_on_segment(b, a, b, 1e-9));
    // On the line but past the end
    assert!(!point_on_segment(p(5.0, 0.0), a, b, 1e-9));
    assert!(!point_on_segment(p(-1.0, 0.0), a, b, 1e-9));
    // Off the line
    assert!(!point_on_segment(p(2.0, 0.5), a, b, 1e-9));
}

#[test]
fn test_segments_intersect() {
    assert!(segments_intersect(
        p(0.0, 0.0),
        p(2.0, 2.0),
        p(0.0, 2.0),
        p(2.0, 0.0)
    ));
    assert!(!segments_intersect(
        p(0.0, 0.0),
        p(1.0, 1.0),
        p(3.0, 0.0),
        p(3.0, 5.0)
    ));
    // Touching at an endpoint
    assert!(segments_intersect(
        p(0.0, 0.0),
        p(2.0, 0.0),
        p(2.0, 0.0),
        p(2.0, 2.0)
    ));
}

#[test]
fn test_parallel_segments_never_intersect() {
    assert!(!segments_intersect(
        p(0.0, 0.0),
        p(2.0, 0.0),
        p(0.0, 1.0),
        p(2.0, 1.0)
    ));
    // Collinear overlap is not detected
    assert!(!segments_intersect(
        p(0.0, 0.0),
        p(2.0, 0.0),
        p(1.0, 0.0),
        p(3.0, 0.0)
    ));
}

#[test]
fn test_closest_point_on_segment_is_clamped() {
    let a = p(0.0, 0.0);
    let b = p(2.0, 0.0);
    assert_eq!(closest_point_on_segment(p(1.0, 0.7), a, b), p(1.0, 0.0));
    assert_eq!(closest_point_on_segment(p(-3.0, 1.0), a, b), a);
    assert_eq!(closest_point_on_segment(p(9.0, -1.0), a, b), b);
    assert_eq!(closest_point_on_segment(p(1.0, 1.0), a, a), a);
}

#[test]
fn test_point_in_polygon() {
    let l_shape = [
        p(0.0, 0.0),
        p(4.0, 0.0),
        p(4.0, 2.0),
        p(2.0, 2.0),
        p(2.0, 4.0),
        p(0.0, 4.0),
    ];
    assert!(point_in_polygon(p(1.0, 1.0), &l_shape));
    assert!(point_in_polygon(p(1.0, 3.0), &l_shape));
    assert!(!point_in_polygon(p(3.0, 3.0), &l_shape));
    assert!(!point_in_polygon(p(5.0, 1.0), &l_shape));
    assert!(!point_in_polygon(p(1.0, 1.0), &l_shape[..2]));
}

#[test]
fn test_snap_to_grid() {
    assert_eq!(snap_to_grid(p(1.26, 0.74), 0.5), p(1.5, 0.5));
    assert_eq!(snap_to_grid(p(1.24, -0.76), 0.5), p(1.0, -1.0));

    let snapped = snap_to_grid(p(-0.1, -0.2), 0.5);
    assert_eq!(snapped, p(0.0, 0.0));
    assert!(snapped.x.is_sign_positive());
    assert!(snapped.z.is_sign_positive());
}
