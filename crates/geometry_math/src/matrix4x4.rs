//! 4x4 matrix container
//!
//! Row storage with `m[row][col]` access. The matrix only holds values; it does
//! not multiply, transpose or invert.

use std::fmt;
use std::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;

/// 4x4 matrix of scalars, identity by default
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix4x4<T> {
    pub m: [[T; 4]; 4],
}

// SAFETY: `#[repr(C)]` wrapper around a nested array of `T`.
unsafe impl<T: Zeroable> Zeroable for Matrix4x4<T> {}
unsafe impl<T: Pod> Pod for Matrix4x4<T> {}

impl Matrix4x4<f32> {
    /// Identity matrix
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };
}

impl<T> Matrix4x4<T> {
    #[inline]
    pub const fn from_rows(m: [[T; 4]; 4]) -> Self {
        Self { m }
    }

    #[inline]
    pub fn rows(&self) -> &[[T; 4]; 4] {
        &self.m
    }
}

impl<T: Scalar> Matrix4x4<T> {
    /// Identity matrix: ones on the diagonal, zeros elsewhere
    pub fn identity() -> Self {
        let mut m = [[T::zero(); 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = T::one();
        }
        Self { m }
    }
}

impl<T: Scalar> Default for Matrix4x4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> From<[[T; 4]; 4]> for Matrix4x4<T> {
    fn from(m: [[T; 4]; 4]) -> Self {
        Self { m }
    }
}

impl<T> From<Matrix4x4<T>> for [[T; 4]; 4] {
    fn from(matrix: Matrix4x4<T>) -> Self {
        matrix.m
    }
}

/// Row access; index the returned row again for a column.
impl<T> Index<usize> for Matrix4x4<T> {
    type Output = [T; 4];
    #[inline]
    fn index(&self, row: usize) -> &[T; 4] {
        &self.m[row]
    }
}

impl<T> IndexMut<usize> for Matrix4x4<T> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut [T; 4] {
        &mut self.m[row]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix4x4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.m.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{} {} {} {}]", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}
