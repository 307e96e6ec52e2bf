//! Linear algebra type aliases.

use na::{Isometry2, Translation2, UnitComplex, UnitVector2, Vector2};

/// The scalar type used throughout this crate.
pub type Real = f32;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 2;

/// The maximum number of vertices a convex polygon can store.
pub const MAX_VERTICES: usize = 64;

/// The point type.
pub type Point = na::Point2<Real>;

/// The vector type.
pub type Vector = Vector2<Real>;

/// The unit vector type.
pub type UnitVector = UnitVector2<Real>;

/// The rotation type.
pub type Rotation = UnitComplex<Real>;

/// The transformation matrix type.
pub type Isometry = Isometry2<Real>;

/// The translation type.
pub type Translation = Translation2<Real>;

/// The angular inertia of a rigid body.
pub type AngularInertia = Real;
