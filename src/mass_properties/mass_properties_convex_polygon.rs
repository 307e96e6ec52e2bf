use crate::mass_properties::{MassProperties, MassPropertiesError};
use crate::math::{Point, Real, Vector};

impl MassProperties {
    /// Computes the mass properties of a convex polygon.
    ///
    /// The vertices must be wound counter-clockwise, otherwise the signed
    /// area, and with it the mass, comes out negative. A density of zero is
    /// valid and yields all-zero mass fields.
    pub fn from_convex_polygon(
        density: Real,
        vertices: &[Point],
    ) -> Result<MassProperties, MassPropertiesError> {
        if density < 0.0 {
            return Err(MassPropertiesError::NegativeDensity);
        }

        let (area, com, inertia) = convex_polygon_area_com_inertia(vertices);

        if area == 0.0 {
            return Err(MassPropertiesError::ZeroArea);
        }

        Ok(Self::new(com, density * area, density * inertia))
    }
}

/// Computes the signed area, centroid, and area moment of inertia about the
/// local origin of a convex polygon.
///
/// The polygon is triangulated as a fan from the local origin, one triangle
/// per edge including the wrap-around edge. If the accumulated area is zero
/// the returned centroid is the origin.
pub fn convex_polygon_area_com_inertia(vertices: &[Point]) -> (Real, Point, Real) {
    let mut area = 0.0;
    let mut com = Vector::zeros();
    let mut inertia = 0.0;

    for i1 in 0..vertices.len() {
        let i2 = (i1 + 1) % vertices.len();
        let p1 = vertices[i1].coords;
        let p2 = vertices[i2].coords;

        // Signed doubled area of the triangle (origin, p1, p2).
        let d = p1.perp(&p2);
        area += 0.5 * d;

        // Area-weighted centroid of the same triangle; the origin vertex
        // contributes nothing to the sum.
        com += (p1 + p2) * (d / 6.0);

        let intx2 = p1.x * p1.x + p2.x * p1.x + p2.x * p2.x;
        let inty2 = p1.y * p1.y + p2.y * p1.y + p2.y * p2.y;
        inertia += 0.25 * (d / 3.0) * (intx2 + inty2);
    }

    if area == 0.0 {
        (area, Point::origin(), inertia)
    } else {
        (area, Point::from(com / area), inertia)
    }
}
