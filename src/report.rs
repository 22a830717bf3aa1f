//! Vector algebra report for a pair of configured vectors

use std::fmt;

use geometry_math::{cross, dot, length, Vec3f};

use crate::config::VectorConfig;

/// Results of the elementary operations on two vectors
#[derive(Debug, Clone, PartialEq)]
pub struct VectorReport {
    pub a: Vec3f,
    pub b: Vec3f,
    pub sum: Vec3f,
    pub difference: Vec3f,
    pub dot: f32,
    pub cross: Vec3f,
    pub length_a: f32,
    pub length_b: f32,
    pub unit_a: Vec3f,
    pub unit_b: Vec3f,
    /// Normalized cross product; zero when the inputs are parallel
    pub normal: Vec3f,
}

impl VectorReport {
    pub fn compute(config: &VectorConfig) -> Self {
        let a = Vec3f::from(config.a);
        let b = Vec3f::from(config.b);
        log::debug!("Computing report for a={} b={}", a, b);

        let c = cross(a, b);
        let mut normal = c;
        normal.normalize();
        if normal == Vec3f::ZERO {
            log::debug!("a and b are parallel or degenerate, normal is zero");
        }

        Self {
            a,
            b,
            sum: a + b,
            difference: a - b,
            dot: dot(a, b),
            cross: c,
            length_a: length(a),
            length_b: length(b),
            unit_a: a.unit_vector(),
            unit_b: b.unit_vector(),
            normal,
        }
    }
}

impl fmt::Display for VectorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "a       = {}", self.a)?;
        writeln!(f, "b       = {}", self.b)?;
        writeln!(f, "a + b   = {}", self.sum)?;
        writeln!(f, "a - b   = {}", self.difference)?;
        writeln!(f, "a . b   = {}", self.dot)?;
        writeln!(f, "a x b   = {}", self.cross)?;
        writeln!(f, "|a|     = {}", self.length_a)?;
        writeln!(f, "|b|     = {}", self.length_b)?;
        writeln!(f, "unit(a) = {}", self.unit_a)?;
        writeln!(f, "unit(b) = {}", self.unit_b)?;
        write!(f, "normal  = {}", self.normal)
    }
}
