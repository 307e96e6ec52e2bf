/*!
impulse2d
=========

**impulse2d** is the shape layer of a 2-dimensional rigid-body physics
engine: convex polygons with cached outward edge normals, closed-form
mass/centroid/inertia integration, and the support mapping used by
separating-axis collision tests.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod mass_properties;
pub mod math;
pub mod shape;
pub mod transformation;
pub mod utils;
