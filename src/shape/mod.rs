//! Shapes usable by the rigid-body pipeline.

pub use self::convex_polygon::ConvexPolygon;
#[doc(inline)]
pub use self::shape::{Shape, ShapeType};
#[doc(inline)]
pub use self::support_map::SupportMap;

mod convex_polygon;
mod shape;
mod support_map;
