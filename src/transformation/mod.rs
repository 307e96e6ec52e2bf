//! Convex hull extraction from point clouds.

pub use self::convex_hull2::{convex_hull, ConvexHullError};

mod convex_hull2;
