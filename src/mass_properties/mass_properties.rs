use crate::math::{AngularInertia, Point, Real};
use crate::utils;

/// The local mass properties of a rigid-body.
///
/// Shapes compute these and the owning rigid-body stores them; the shape
/// itself does not retain them.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MassProperties {
    /// The center of mass of the shape, expressed in the local space the
    /// shape occupied before any re-centering performed by the computation.
    pub local_com: Point,
    /// The mass.
    pub mass: Real,
    /// The inverse of the mass.
    ///
    /// If this is zero, the rigid-body is assumed to have infinite mass.
    pub inv_mass: Real,
    /// The angular inertia.
    pub angular_inertia: AngularInertia,
    /// The inverse of the angular inertia.
    ///
    /// If this is zero, the rigid-body is assumed to have infinite angular
    /// inertia.
    pub inv_angular_inertia: AngularInertia,
}

impl MassProperties {
    /// Initializes the mass properties with the given center-of-mass, mass,
    /// and angular inertia.
    ///
    /// A zero mass or angular inertia models an immovable body: the
    /// corresponding inverse is set to zero instead of dividing by zero.
    pub fn new(local_com: Point, mass: Real, angular_inertia: AngularInertia) -> Self {
        Self {
            local_com,
            mass,
            inv_mass: utils::inv(mass),
            angular_inertia,
            inv_angular_inertia: utils::inv(angular_inertia),
        }
    }
}

/// Errors raised when computing the mass properties of a shape.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MassPropertiesError {
    /// The density given to the mass computation was negative.
    #[error("the density of a shape cannot be negative")]
    NegativeDensity,
    /// The shape has a zero area, so its mass fields are undefined.
    #[error("cannot compute the mass properties of a zero-area shape")]
    ZeroArea,
}
