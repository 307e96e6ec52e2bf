//! Mass properties (mass, center-of-mass, angular inertia) of shapes.

pub use self::mass_properties::{MassProperties, MassPropertiesError};

mod mass_properties;
mod mass_properties_convex_polygon;

/// Free functions for some special-cases of mass-properties computation.
pub mod details {
    pub use super::mass_properties_convex_polygon::convex_polygon_area_com_inertia;
}
