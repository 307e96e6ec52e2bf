//! Small geometric helpers shared by the shape and mass computations.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

/// The inverse of `val`, with zero mapped to zero.
///
/// A zero mass or inertia models an immovable body, so its "inverse" is zero
/// rather than a division by zero.
#[inline]
pub fn inv(val: Real) -> Real {
    if val == 0.0 {
        0.0
    } else {
        1.0 / val
    }
}

/// Computes the direction pointing toward the right-hand-side of the oriented
/// segment `[a, b]`.
///
/// For an edge of a counter-clockwise polygon this is the outward normal.
/// Returns `None` if the segment is degenerate.
#[inline]
pub fn ccw_face_normal(a: &Point, b: &Point) -> Option<UnitVector> {
    let ab = b - a;
    UnitVector::try_new(Vector::new(ab.y, -ab.x), DEFAULT_EPSILON)
}

/// Computes the index of the support point of a cloud of points.
///
/// The scan uses a strict comparison, so exact dot-product ties resolve to
/// the lowest index.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector, points: &[Point]) -> usize {
    let mut best_pt = 0;
    let mut best_dot = points[0].coords.dot(dir);

    for (i, p) in points.iter().enumerate().skip(1) {
        let dot = p.coords.dot(dir);

        if dot > best_dot {
            best_dot = dot;
            best_pt = i;
        }
    }

    best_pt
}

/// Computes the support point of a cloud of points.
#[inline]
pub fn point_cloud_support_point(dir: &Vector, points: &[Point]) -> Point {
    points[point_cloud_support_point_id(dir, points)]
}
