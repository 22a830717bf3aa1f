//! 3D Vector type

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::scalar::{Float, Scalar};

/// 3D Vector with x, y, z components over a generic scalar type
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// SAFETY: `#[repr(C)]` with three fields of the same type, so there is no padding
// and the all-zero pattern is valid whenever it is valid for `T`.
unsafe impl<T: Zeroable> Zeroable for Vec3<T> {}
unsafe impl<T: Pod> Pod for Vec3<T> {}

impl Vec3<f32> {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };
}

impl<T> Vec3<T> {
    /// Create a new Vec3
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// View the components as an array in x, y, z order
    #[inline]
    pub fn as_array(&self) -> &[T; 3] {
        // SAFETY: `#[repr(C)]` struct of three `T` has the layout of `[T; 3]`.
        unsafe { &*(self as *const Self as *const [T; 3]) }
    }

    /// Mutable view of the components as an array in x, y, z order
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [T; 3] {
        // SAFETY: see `as_array`.
        unsafe { &mut *(self as *mut Self as *mut [T; 3]) }
    }

    /// Component access without a bounds check
    ///
    /// # Safety
    /// `index` must be 0, 1 or 2. Any other value is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.as_array().get_unchecked(index)
    }

    /// Mutable component access without a bounds check
    ///
    /// # Safety
    /// `index` must be 0, 1 or 2. Any other value is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        self.as_array_mut().get_unchecked_mut(index)
    }
}

impl<T: Scalar> Vec3<T> {
    /// The zero vector
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Alias for [`Vec3::dot`]
    #[inline]
    pub fn dot_product(self, other: Self) -> T {
        self.dot(other)
    }

    /// Right-handed cross product
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Alias for [`Vec3::cross`]
    #[inline]
    pub fn cross_product(self, other: Self) -> Self {
        self.cross(other)
    }

    /// Squared length.
    ///
    /// Note the name: this is the dot product of the vector with itself, not the
    /// Euclidean norm. Use [`Vec3::length`] for the latter.
    #[inline]
    pub fn norm(self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn add_in_place(&mut self, other: Self) -> &mut Self {
        *self = *self + other;
        self
    }

    #[inline]
    pub fn sub_in_place(&mut self, other: Self) -> &mut Self {
        *self = *self - other;
        self
    }

    /// Component-wise multiplication in place
    #[inline]
    pub fn mul_in_place(&mut self, other: Self) -> &mut Self {
        *self = *self * other;
        self
    }

    #[inline]
    pub fn scale_in_place(&mut self, scalar: T) -> &mut Self {
        *self = *self * scalar;
        self
    }

    #[inline]
    pub fn div_in_place(&mut self, scalar: T) -> &mut Self {
        *self = *self / scalar;
        self
    }
}

impl<T: Float> Vec3<T> {
    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> T {
        self.norm().sqrt()
    }

    /// Unit-length copy of this vector, or the zero vector when the squared
    /// length is not positive
    #[inline]
    pub fn unit_vector(self) -> Self {
        let n = self.norm();
        if n > T::zero() {
            self * (T::one() / n.sqrt())
        } else {
            Self::zero()
        }
    }

    /// Normalize in place, with the same degenerate-length fallback as
    /// [`Vec3::unit_vector`]
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.unit_vector();
        self
    }
}

/// Dot product of two vectors
#[inline]
pub fn dot<T: Scalar>(a: Vec3<T>, b: Vec3<T>) -> T {
    a.dot(b)
}

/// Length of a vector
#[inline]
pub fn length<T: Float>(v: Vec3<T>) -> T {
    v.length()
}

/// Right-handed cross product of two vectors
#[inline]
pub fn cross<T: Scalar>(a: Vec3<T>, b: Vec3<T>) -> Vec3<T> {
    a.cross(b)
}

impl<T: Scalar> Default for Vec3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T> From<[T; 3]> for Vec3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<(T, T, T)> for Vec3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<Vec3<T>> for [T; 3] {
    fn from(v: Vec3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T: fmt::Display> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.x, self.y, self.z)
    }
}

// Indexing maps 0, 1, 2 to x, y, z and panics past that, like array indexing.
// `get_unchecked` is the unchecked form.

impl<T> Index<usize> for Vec3<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_array()[index]
    }
}

impl<T> IndexMut<usize> for Vec3<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_array_mut()[index]
    }
}

// Operator overloads

impl<T: Add<Output = T>> Add for Vec3<T> {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: AddAssign> AddAssign for Vec3<T> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl<T: Sub<Output = T>> Sub for Vec3<T> {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: SubAssign> SubAssign for Vec3<T> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vec3<T> {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl<T: Copy + MulAssign> MulAssign<T> for Vec3<T> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

/// Component-wise multiplication
impl<T: Mul<Output = T>> Mul for Vec3<T> {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }
}

impl<T: MulAssign> MulAssign for Vec3<T> {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        self.x *= other.x;
        self.y *= other.y;
        self.z *= other.z;
    }
}

impl<T: Copy + Div<Output = T>> Div<T> for Vec3<T> {
    type Output = Self;
    #[inline]
    fn div(self, scalar: T) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl<T: Copy + DivAssign> DivAssign<T> for Vec3<T> {
    #[inline]
    fn div_assign(&mut self, scalar: T) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
    }
}

impl<T: Neg<Output = T>> Neg for Vec3<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

macro_rules! impl_scalar_mul_vec3 {
    ($($t:ty),*) => {
        $(
            impl Mul<Vec3<$t>> for $t {
                type Output = Vec3<$t>;
                #[inline]
                fn mul(self, v: Vec3<$t>) -> Vec3<$t> {
                    v * self
                }
            }
        )*
    };
}

impl_scalar_mul_vec3!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3f;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3<f32>, b: Vec3<f32>) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    #[test]
    fn test_new() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Vec3::<f32>::default(), Vec3f::ZERO);
        assert_eq!(Vec3::<i32>::default(), Vec3::new(0, 0, 0));
    }

    #[test]
    fn test_add_sub() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(5.0, 6.0, 7.0);
        assert_eq!(a + b, Vec3::new(6.0, 8.0, 10.0));
        assert_eq!(b - a, Vec3::new(4.0, 4.0, 4.0));
    }

    #[test]
    fn test_mul_scalar_both_sides() {
        let v = Vec3::new(1.0f32, 2.0, 3.0);
        assert_eq!(v * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * v, v * 2.0);

        let vi = Vec3::new(1i32, -2, 3);
        assert_eq!(3 * vi, Vec3::new(3, -6, 9));
    }

    #[test]
    fn test_component_mul() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(2.0, 3.0, 4.0);
        assert_eq!(a * b, Vec3::new(2.0, 6.0, 12.0));
    }

    #[test]
    fn test_div_by_zero_is_infinite() {
        let v = Vec3::new(1.0f32, -1.0, 2.0) / 0.0;
        assert!(v.x.is_infinite() && v.x > 0.0);
        assert!(v.y.is_infinite() && v.y < 0.0);
    }

    #[test]
    fn test_assign_ops() {
        let mut v = Vec3::new(1.0f32, 2.0, 3.0);
        v += Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));
        v -= Vec3::new(2.0, 2.0, 2.0);
        assert_eq!(v, Vec3::new(0.0, 1.0, 2.0));
        v *= 3.0;
        assert_eq!(v, Vec3::new(0.0, 3.0, 6.0));
        v *= Vec3::new(1.0, 2.0, 0.5);
        assert_eq!(v, Vec3::new(0.0, 6.0, 3.0));
        v /= 3.0;
        assert_eq!(v, Vec3::new(0.0, 2.0, 1.0));
    }

    #[test]
    fn test_in_place_chaining() {
        let mut v = Vec3::new(1.0, 1.0, 1.0);
        v.add_in_place(Vec3::new(1.0, 0.0, 0.0))
            .scale_in_place(2.0)
            .sub_in_place(Vec3::new(0.0, 2.0, 0.0))
            .mul_in_place(Vec3::new(1.0, 1.0, 3.0))
            .div_in_place(2.0);
        assert_eq!(v, Vec3::new(2.0, 0.0, 3.0));
    }

    #[test]
    fn test_neg() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(-v, Vec3::new(-1.0, 2.0, -3.0));
    }

    #[test]
    fn test_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        // 1*4 + 2*5 + 3*6 = 32
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(a.dot_product(b), 32.0);
        assert_eq!(dot(a, b), 32.0);
    }

    #[test]
    fn test_cross_basis() {
        assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
        assert_eq!(Vec3f::Y.cross(Vec3f::Z), Vec3f::X);
        assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);
        assert_eq!(cross(Vec3f::Y, Vec3f::X), -Vec3f::Z);
    }

    #[test]
    fn test_cross_member_matches_free() {
        let a = Vec3::new(1.5, -2.0, 0.25);
        let b = Vec3::new(-3.0, 4.0, 2.0);
        assert_eq!(a.cross_product(b), cross(a, b));
    }

    #[test]
    fn test_norm_is_squared_length() {
        let v = Vec3::new(3.0f32, 4.0, 0.0);
        assert_eq!(v.norm(), 25.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(length(v), 5.0);
    }

    #[test]
    fn test_unit_vector() {
        let v = Vec3::new(0.0f32, 3.0, 4.0);
        let u = v.unit_vector();
        assert!(vec_approx_eq(u, Vec3::new(0.0, 0.6, 0.8)));
        assert!(approx_eq(u.length(), 1.0));
    }

    #[test]
    fn test_unit_vector_of_zero() {
        assert_eq!(Vec3::<f32>::ZERO.unit_vector(), Vec3f::ZERO);
    }

    #[test]
    fn test_normalize_matches_unit_vector() {
        let v = Vec3::new(2.0f32, -1.0, 5.0);
        let mut n = v;
        let len = n.normalize().length();
        assert!(approx_eq(len, 1.0));
        assert_eq!(n, v.unit_vector());

        let mut z = Vec3::<f64>::zero();
        z.normalize();
        assert_eq!(z, Vec3::zero());
    }

    #[test]
    fn test_normalize_nan_falls_back_to_zero() {
        let mut v = Vec3::new(f32::NAN, 1.0, 0.0);
        v.normalize();
        assert_eq!(v, Vec3f::ZERO);
    }

    #[test]
    fn test_index() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], v.x);
        assert_eq!(v[1], v.y);
        assert_eq!(v[2], v.z);

        v[1] = 7.0;
        assert_eq!(v.y, 7.0);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let v = Vec3::new(1, 2, 3);
        let _w = v[3];
    }

    #[test]
    fn test_get_unchecked() {
        let mut v = Vec3::new(4, 5, 6);
        unsafe {
            assert_eq!(*v.get_unchecked(2), 6);
            *v.get_unchecked_mut(0) = 9;
        }
        assert_eq!(v.x, 9);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec3::new(1.0f32, 2.0, 3.0).to_string(), "(1 2 3)");
        assert_eq!(Vec3::new(-1, 0, 5).to_string(), "(-1 0 5)");
        assert_eq!(Vec3::new(0.5f64, 1.25, 3.0).to_string(), "(0.5 1.25 3)");
    }

    #[test]
    fn test_conversions() {
        let v: Vec3<i32> = [1, 2, 3].into();
        assert_eq!(v, Vec3::new(1, 2, 3));
        let t: Vec3<i32> = (4, 5, 6).into();
        let arr: [i32; 3] = t.into();
        assert_eq!(arr, [4, 5, 6]);
        assert_eq!(v.as_array(), &[1, 2, 3]);
    }

    #[test]
    fn test_bytemuck_cast() {
        let vs = [Vec3::new(1.0f32, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
        let floats: &[f32] = bytemuck::cast_slice(&vs);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
