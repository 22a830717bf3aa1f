//! Geometry Mathematics Library
//!
//! Generic 3D vector and 4x4 matrix primitives for rendering code.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components over any [`Scalar`]
//! - [`Matrix4x4`] - 4x4 matrix container, identity by default
//!
//! ## Free Functions
//!
//! - [`dot`], [`cross`], [`length`] - non-member forms of the `Vec3` methods
//!
//! Note that [`Vec3::norm`] is the *squared* length.

pub mod scalar;
mod vec3;
mod matrix4x4;

pub use scalar::{Float, Scalar};
pub use vec3::{cross, dot, length, Vec3};
pub use matrix4x4::Matrix4x4;

/// Single-precision vector
pub type Vec3f = Vec3<f32>;
/// Double-precision vector
pub type Vec3d = Vec3<f64>;
/// Integer vector
pub type Vec3i = Vec3<i32>;
/// Single-precision matrix
pub type Matrix4x4f = Matrix4x4<f32>;
