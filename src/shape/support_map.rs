//! Support mapping for convex shapes.

use crate::math::{Isometry, Point, UnitVector, Vector};

/// Trait of convex shapes representable by a support mapping function.
///
/// A support function associates a direction to the shape point which
/// maximizes their dot product. It is the primitive separating-axis and
/// GJK-style collision tests are built on.
pub trait SupportMap {
    /// Evaluates the support function of this shape in its local space.
    fn local_support_point(&self, dir: &Vector) -> Point;

    /// Same as `self.local_support_point` except that `dir` is normalized.
    fn local_support_point_toward(&self, dir: &UnitVector) -> Point {
        self.local_support_point(dir.as_ref())
    }

    /// Evaluates the support function of this shape transformed by
    /// `transform`.
    fn support_point(&self, transform: &Isometry, dir: &Vector) -> Point {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }

    /// Same as `self.support_point` except that `dir` is normalized.
    fn support_point_toward(&self, transform: &Isometry, dir: &UnitVector) -> Point {
        let local_dir = UnitVector::new_unchecked(transform.inverse_transform_vector(dir));
        transform * self.local_support_point_toward(&local_dir)
    }
}
