use crate::mass_properties::{MassProperties, MassPropertiesError};
use crate::math::{Real, Rotation};
use crate::shape::SupportMap;

/// Enum representing the type of a shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeType {
    /// A convex polygon shape.
    ConvexPolygon = 0,
}

/// Trait implemented by the shapes a rigid-body can carry.
///
/// The collision stage dispatches on [`Shape::shape_type`] and downgrades to
/// the capability accessors for the queries it needs.
pub trait Shape {
    /// The type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// Computes the mass, center-of-mass, and angular inertia of this shape
    /// given its density, for the owning rigid-body to store.
    ///
    /// Implementations are allowed to re-center the shape so that its local
    /// origin coincides with its center of mass.
    fn mass_properties(&mut self, density: Real) -> Result<MassProperties, MassPropertiesError>;

    /// Sets the orientation of this shape from an angle in radians.
    fn set_orientation(&mut self, angle: Real);

    /// The orientation of this shape.
    fn rotation(&self) -> &Rotation;

    /// Converts this shape to its support-mapping representation, if it has
    /// one.
    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        None
    }
}
