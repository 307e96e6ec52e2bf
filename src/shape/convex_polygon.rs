use crate::mass_properties::{MassProperties, MassPropertiesError};
use crate::math::{Point, Real, Rotation, UnitVector, Vector};
use crate::shape::{Shape, ShapeType, SupportMap};
use crate::transformation::{self, ConvexHullError};
use crate::utils;

/// A 2D convex polygon with cached outward edge normals.
///
/// Vertices are stored in local space with a counter-clockwise winding;
/// `normals()[i]` is the outward unit normal of the edge joining
/// `points()[i]` to `points()[(i + 1) % len]`. Computing the mass properties
/// re-centers the polygon on its center of mass.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct ConvexPolygon {
    points: Vec<Point>,
    normals: Vec<UnitVector>,
    rotation: Rotation,
}

impl ConvexPolygon {
    /// Creates a convex polygon from an arbitrary point cloud.
    ///
    /// This explicitly computes the convex hull of the given points: they do
    /// not need to be convex, ordered, or free of interior points. The
    /// retained vertices are wound counter-clockwise and capped at
    /// [`crate::math::MAX_VERTICES`].
    ///
    /// Fails if fewer than 3 points are given, if all points are collinear,
    /// or if the hull exceeds the vertex cap.
    pub fn from_point_cloud(points: &[Point]) -> Result<Self, ConvexHullError> {
        let vertices = transformation::convex_hull(points)?;

        // The hull walk only keeps distinct extreme points, so every edge is
        // expected to have a well-defined outward normal.
        let mut normals = Vec::with_capacity(vertices.len());
        for i1 in 0..vertices.len() {
            let i2 = (i1 + 1) % vertices.len();
            let normal = utils::ccw_face_normal(&vertices[i1], &vertices[i2])
                .ok_or(ConvexHullError::DegenerateInput)?;
            normals.push(normal);
        }

        Ok(Self {
            points: vertices,
            normals,
            rotation: Rotation::identity(),
        })
    }

    /// Creates an axis-aligned box centered at the local origin.
    ///
    /// The four cardinal edge normals are assigned directly instead of being
    /// recomputed, which is valid only because the box is axis-aligned at
    /// construction time. Both half-extents must be positive.
    pub fn cuboid(half_extents: Vector) -> Self {
        debug_assert!(
            half_extents.x > 0.0 && half_extents.y > 0.0,
            "Cuboid half-extents must be positive."
        );

        let hx = half_extents.x;
        let hy = half_extents.y;
        let points = vec![
            Point::new(-hx, -hy),
            Point::new(hx, -hy),
            Point::new(hx, hy),
            Point::new(-hx, hy),
        ];
        let normals = vec![
            -Vector::y_axis(),
            Vector::x_axis(),
            Vector::y_axis(),
            -Vector::x_axis(),
        ];

        Self {
            points,
            normals,
            rotation: Rotation::identity(),
        }
    }

    /// The vertices of this convex polygon, in counter-clockwise order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The outward unit normals of the edges of this convex polygon.
    #[inline]
    pub fn normals(&self) -> &[UnitVector] {
        &self.normals
    }

    /// The orientation of this polygon.
    #[inline]
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    /// Sets the orientation of this polygon from an angle in radians.
    ///
    /// Vertices and normals are unaffected: they stay in local space and the
    /// rotation is applied at query time.
    #[inline]
    pub fn set_orientation(&mut self, angle: Real) {
        self.rotation = Rotation::new(angle);
    }

    /// Computes the mass, center-of-mass, and angular inertia of this
    /// polygon given its density.
    ///
    /// This also re-centers the polygon: every vertex is translated so that
    /// the center of mass becomes the local origin. The normals are left
    /// untouched since directions are unaffected by translations. The
    /// returned [`MassProperties::local_com`] is the centroid the vertices
    /// were shifted by, expressed in the pre-call local space. The angular
    /// inertia is integrated about the pre-call local origin, before the
    /// translation is applied.
    pub fn mass_properties(
        &mut self,
        density: Real,
    ) -> Result<MassProperties, MassPropertiesError> {
        let props = MassProperties::from_convex_polygon(density, &self.points)?;

        for pt in &mut self.points {
            *pt -= props.local_com.coords;
        }

        Ok(props)
    }

    /// Computes the mass properties of this polygon for a unit density.
    pub fn unit_mass_properties(&mut self) -> Result<MassProperties, MassPropertiesError> {
        self.mass_properties(1.0)
    }
}

impl SupportMap for ConvexPolygon {
    #[inline]
    fn local_support_point(&self, dir: &Vector) -> Point {
        utils::point_cloud_support_point(dir, &self.points)
    }
}

impl Shape for ConvexPolygon {
    fn shape_type(&self) -> ShapeType {
        ShapeType::ConvexPolygon
    }

    fn mass_properties(&mut self, density: Real) -> Result<MassProperties, MassPropertiesError> {
        self.mass_properties(density)
    }

    fn set_orientation(&mut self, angle: Real) {
        self.set_orientation(angle)
    }

    fn rotation(&self) -> &Rotation {
        self.rotation()
    }

    fn as_support_map(&self) -> Option<&dyn SupportMap> {
        Some(self)
    }
}
