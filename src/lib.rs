//! Geometry - vector and matrix primitives with a small reporting front end
//!
//! The math types live in [`geometry_math`] and are re-exported here.

pub mod config;
pub mod report;

pub use geometry_math::{cross, dot, length, Float, Matrix4x4, Matrix4x4f, Scalar, Vec3, Vec3d, Vec3f, Vec3i};
