//! Planar geometry helpers.
//!
//! All functions are pure and work on plain point slices. Polygons are
//! treated as implicitly closed; an explicit closing point (first vertex
//! repeated at the end) contributes a zero-length edge and does not change
//! any result.

use crate::model::{Bounds, Point};

/// Enclosed area by the shoelace formula. Zero for fewer than 3 points.
pub fn area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += a.x * b.z - b.x * a.z;
    }
    sum.abs() / 2.0
}

/// Arithmetic mean of the points.
///
/// Returns the origin for an empty slice.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::origin();
    }

    let n = points.len() as f64;
    let (sx, sz) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sz), p| (sx + p.x, sz + p.z));
    Point::new(sx / n, sz / n)
}

/// Componentwise bounds. [`Bounds::empty`] for fewer than 2 points.
pub fn bounds(points: &[Point]) -> Bounds {
    let mut b = Bounds::empty();
    if points.len() < 2 {
        return b;
    }
    for p in points {
        b.include(*p);
    }
    b
}

/// Whether `p` lies on segment `a`-`b`.
///
/// `tolerance` bounds the cross product, so it scales with segment length.
pub fn point_on_segment(p: Point, a: Point, b: Point, tolerance: f64) -> bool {
    let abx = b.x - a.x;
    let abz = b.z - a.z;
    let apx = p.x - a.x;
    let apz = p.z - a.z;

    let cross = apx * abz - apz * abx;
    if cross.abs() > tolerance {
        return false;
    }

    let dot = apx * abx + apz * abz;
    let len_sq = abx * abx + abz * abz;
    (0.0..=len_sq).contains(&dot)
}

/// Whether segments `p1`-`p2` and `p3`-`p4` cross.
///
/// Parallel segments never intersect, including collinear overlap.
pub fn segments_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let (rx, rz) = (p2.x - p1.x, p2.z - p1.z);
    let (sx, sz) = (p4.x - p3.x, p4.z - p3.z);
    let det = rx * sz - rz * sx;
    if det == 0.0 {
        return false;
    }

    let (qx, qz) = (p3.x - p1.x, p3.z - p1.z);
    let t = (qx * sz - qz * sx) / det;
    let u = (qx * rz - qz * rx) / det;
    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

/// Projection of `p` onto segment `a`-`b`, clamped to the endpoints.
pub fn closest_point_on_segment(p: Point, a: Point, b: Point) -> Point {
    let abx = b.x - a.x;
    let abz = b.z - a.z;
    let len_sq = abx * abx + abz * abz;
    if len_sq == 0.0 {
        return a;
    }

    let t = (((p.x - a.x) * abx + (p.z - a.z) * abz) / len_sq).clamp(0.0, 1.0);
    Point::new(a.x + t * abx, a.z + t * abz)
}

/// Even-odd ray cast.
pub fn point_in_polygon(p: Point, points: &[Point]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = points[i];
        let pj = points[j];
        if (pi.z > p.z) != (pj.z > p.z)
            && p.x < (pj.x - pi.x) * (p.z - pi.z) / (pj.z - pi.z) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Round each axis independently to the nearest multiple of `grid_size`.
pub fn snap_to_grid(p: Point, grid_size: f64) -> Point {
    if grid_size <= 0.0 {
        return p;
    }
    // Adding 0.0 folds -0.0 into 0.0 so snapped points compare and hash alike.
    Point::new(
        (p.x / grid_size).round() * grid_size + 0.0,
        (p.z / grid_size).round() * grid_size + 0.0,
    )
}
