//! Fixed-length numeric vectors.
//!
//! `Vector<T, N>` is the building block for points and matrix rows/columns.
//! Storage is a plain `[T; N]`.

use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

use crate::element::{Element, checked_cast, saturate_cast};
use crate::errors::{PrimitiveError, Result};
use crate::format::write_joined;
use crate::traits::Norm;

/// A vector of `N` components of type `T`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    val: [T; N],
}

impl<T: Element, const N: usize> Vector<T, N> {
    #[inline]
    pub const fn new(val: [T; N]) -> Self {
        Vector { val }
    }

    /// Every component set to `v`.
    #[inline]
    pub fn all(v: T) -> Self {
        Vector { val: [v; N] }
    }

    #[inline]
    pub fn zeros() -> Self {
        Self::all(T::zero())
    }

    /// Build from exactly `N` values.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        let val: [T; N] = values
            .try_into()
            .map_err(|_| PrimitiveError::mismatch("vector elements", N, values.len()))?;
        Ok(Vector { val })
    }

    /// Build from up to `N` leading values; the rest are zero.
    ///
    /// `Scalar::from_prefix(&[1.0])` is `[1, 0, 0, 0]`.
    pub fn from_prefix(values: &[T]) -> Result<Self> {
        if values.len() > N {
            return Err(PrimitiveError::mismatch(
                "vector prefix",
                N,
                values.len(),
            ));
        }
        let mut val = [T::zero(); N];
        val[..values.len()].copy_from_slice(values);
        Ok(Vector { val })
    }

    /// Number of components.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.val
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.val.iter()
    }

    /// Component `i`, or [`PrimitiveError::OutOfRange`] past the end.
    pub fn get(&self, i: usize) -> Result<T> {
        self.val
            .get(i)
            .copied()
            .ok_or_else(|| PrimitiveError::out_of_range(i, N))
    }

    fn zip_with(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        let mut val = self.val;
        for (a, b) in val.iter_mut().zip(rhs.val) {
            *a = f(*a, b);
        }
        Vector { val }
    }

    fn map(self, f: impl Fn(T) -> T) -> Self {
        Vector {
            val: self.val.map(f),
        }
    }

    /// Component-wise product, saturating for integer elements.
    #[allow(clippy::should_implement_trait)]
    pub fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, T::saturating_mul)
    }

    pub fn dot(&self, rhs: &Self) -> T {
        self.val
            .iter()
            .zip(rhs.val.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc.saturating_add(a.saturating_mul(b)))
    }

    pub fn norm(&self) -> f64 {
        self.val
            .iter()
            .map(|v| {
                let v = v.as_f64();
                v * v
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Cross product for a vector whose length is only known generically.
    ///
    /// Fails with [`PrimitiveError::InvalidDimension`] unless `N == 3`.
    pub fn try_cross(&self, rhs: &Self) -> Result<Vector<T, 3>> {
        let invalid = || {
            crate::log::debug!(n = N, "cross product on non-3 vector");
            PrimitiveError::InvalidDimension {
                op: "cross product",
                expected: 3,
                got: N,
            }
        };
        let a: [T; 3] = self.val.as_slice().try_into().map_err(|_| invalid())?;
        let b: [T; 3] = rhs.val.as_slice().try_into().map_err(|_| invalid())?;
        Ok(Vector::new(a).cross(&Vector::new(b)))
    }

    /// Saturating conversion to another element type, see
    /// [`saturate_cast`](crate::element::saturate_cast).
    pub fn cast<U: Element>(&self) -> Vector<U, N> {
        Vector {
            val: self.val.map(saturate_cast::<T, U>),
        }
    }

    /// Exact conversion to another element type.
    pub fn try_cast<U: Element>(&self) -> Result<Vector<U, N>> {
        let mut val = [U::zero(); N];
        for (out, &v) in val.iter_mut().zip(self.val.iter()) {
            *out = checked_cast(v)?;
        }
        Ok(Vector { val })
    }
}

impl<T: Element> Vector<T, 3> {
    /// `(a1*b2 - a2*b1, a2*b0 - a0*b2, a0*b1 - a1*b0)`
    pub fn cross(&self, rhs: &Self) -> Self {
        let [a0, a1, a2] = self.val;
        let [b0, b1, b2] = rhs.val;
        let det = |p: T, q: T, r: T, s: T| p.saturating_mul(q).saturating_sub(r.saturating_mul(s));
        Vector::new([det(a1, b2, a2, b1), det(a2, b0, a0, b2), det(a0, b1, a1, b0)])
    }
}

impl<T: Element, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(val: [T; N]) -> Self {
        Vector { val }
    }
}

impl<T: Element, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.val
    }
}

/// Panics if `i >= N`; use [`Vector::get`] for a checked lookup.
impl<T: Element, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.val[i]
    }
}

impl<T: Element, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, T::saturating_add)
    }
}

impl<T: Element, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, T::saturating_sub)
    }
}

impl<T: Element + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(T::saturating_neg)
    }
}

/// Scale every component
impl<T: Element, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self.map(|a| a.saturating_mul(rhs))
    }
}

impl<T: Element, const N: usize> Norm for Vector<T, N> {
    fn norm(&self) -> f64 {
        Vector::norm(self)
    }
}

impl<T: Element, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_joined(f, &self.val, ", ")?;
        f.write_str("]")
    }
}

/// Four `f64` channels, zero-filled when built with fewer values
pub type Scalar = Vector<f64, 4>;

pub type Vec2b = Vector<u8, 2>;
pub type Vec3b = Vector<u8, 3>;
pub type Vec4b = Vector<u8, 4>;
pub type Vec2i = Vector<i32, 2>;
pub type Vec3i = Vector<i32, 3>;
pub type Vec4i = Vector<i32, 4>;
pub type Vec2f = Vector<f32, 2>;
pub type Vec3f = Vector<f32, 3>;
pub type Vec4f = Vector<f32, 4>;
pub type Vec2d = Vector<f64, 2>;
pub type Vec3d = Vector<f64, 3>;
pub type Vec4d = Vector<f64, 4>;
pub type Vec6d = Vector<f64, 6>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Construction tests ====================

    #[test]
    fn from_slice_requires_exact_length() {
        assert_eq!(Vec3d::from_slice(&[1.0, 2.0, 3.0]), Ok(Vec3d::new([1.0, 2.0, 3.0])));
        assert_eq!(
            Vec3d::from_slice(&[1.0, 2.0]),
            Err(PrimitiveError::DimensionMismatch {
                context: "vector elements",
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn scalar_from_prefix_zero_fills() {
        let s = Scalar::from_prefix(&[1.0]).unwrap();
        assert_eq!(s, Scalar::new([1.0, 0.0, 0.0, 0.0]));
        assert_eq!(s.to_string(), "[1, 0, 0, 0]");

        let s = Scalar::from_prefix(&[6.0, 7.0, 8.0]).unwrap();
        assert_eq!(s.to_string(), "[6, 7, 8, 0]");

        assert!(Scalar::from_prefix(&[0.0; 5]).is_err());
    }

    #[test]
    fn all_and_zeros() {
        assert_eq!(Vec3i::all(7), Vec3i::new([7, 7, 7]));
        assert_eq!(Vec2f::zeros(), Vec2f::default());
    }

    // ==================== Access tests ====================

    #[test]
    fn get_in_and_out_of_range() {
        let v = Vec3d::new([1.0, 2.0, 3.0]);
        assert_eq!(v.get(0), Ok(1.0));
        assert_eq!(v.get(2), Ok(3.0));
        assert_eq!(v.get(3), Err(PrimitiveError::OutOfRange { index: 3, len: 3 }));
        assert_eq!(v[1], 2.0);
        assert_eq!(v.len(), 3);
    }

    // ==================== Arithmetic tests ====================

    #[test]
    fn pixel_arithmetic_saturates() {
        let a = Vec3b::new([200, 10, 255]);
        let b = Vec3b::new([100, 20, 0]);
        assert_eq!(a + b, Vec3b::new([255, 30, 255]));
        assert_eq!(b - a, Vec3b::new([0, 10, 0]));
        assert_eq!(a * 2, Vec3b::new([255, 20, 255]));
        assert_eq!(a.mul(b), Vec3b::new([255, 200, 0]));
        assert_eq!(a.dot(&b), 255);
    }

    #[test]
    fn signed_arithmetic_saturates() {
        let a = Vec2i::new([i32::MAX, i32::MIN]);
        assert_eq!(a + Vec2i::new([1, 0]), a);
        assert_eq!(a - Vec2i::new([0, 1]), a);
        assert_eq!(-a, Vec2i::new([-i32::MAX, i32::MAX]));
        let big = Vec3i::new([i32::MAX, 0, 0]);
        let other = Vec3i::new([0, i32::MAX, 0]);
        assert_eq!(big.cross(&other), Vec3i::new([0, 0, i32::MAX]));
    }

    #[test]
    fn add_sub_neg() {
        let a = Vec3i::new([1, 2, 3]);
        let b = Vec3i::new([3, 2, 1]);
        assert_eq!(a + b, Vec3i::new([4, 4, 4]));
        assert_eq!(a - b, Vec3i::new([-2, 0, 2]));
        assert_eq!(-a, Vec3i::new([-1, -2, -3]));
    }

    #[test]
    fn scale_and_component_mul() {
        let v = Vec3d::new([1.0, 2.0, 3.0]);
        assert_eq!((v * 100.0).to_string(), "[100, 200, 300]");
        let d3 = Vec3d::new([2.0, 2.0, 3.0]);
        assert_eq!(v.mul(d3), Vec3d::new([2.0, 4.0, 9.0]));
    }

    #[test]
    fn dot_and_cross() {
        let a = Vec3i::new([1, 2, 3]);
        let b = Vec3i::new([4, 5, 6]);
        assert_eq!(a.dot(&b), 32);
        assert_eq!(a.cross(&b), Vec3i::new([-3, 6, -3]));
    }

    #[test]
    fn try_cross_checks_dimension() {
        let a = Vec2i::new([1, 2]);
        assert_eq!(
            a.try_cross(&a),
            Err(PrimitiveError::InvalidDimension {
                op: "cross product",
                expected: 3,
                got: 2
            })
        );
        let x = Vec3i::new([1, 0, 0]);
        let y = Vec3i::new([0, 1, 0]);
        assert_eq!(x.try_cross(&y), Ok(Vec3i::new([0, 0, 1])));
    }

    #[test]
    fn norm_of_three_four_five() {
        assert_eq!(Vec2i::new([3, 4]).norm(), 5.0);
        assert_eq!(crate::traits::norm(&Vec2i::new([3, 4])), 5.0);
        assert_eq!(Vec4d::zeros().norm(), 0.0);
    }

    // ==================== Conversion tests ====================

    #[test]
    fn wide_int_cast_is_exact() {
        let v = Vector::<i64, 2>::new([i64::MAX - 1, (1 << 53) + 1]);
        assert_eq!(v.cast::<i64>(), v);
        assert_eq!(v.try_cast::<i64>(), Ok(v));
        assert!(v.try_cast::<f64>().is_err());
        assert_eq!(v.cast::<i32>(), Vector::new([i32::MAX, i32::MAX]));
    }

    #[test]
    fn cast_int_to_double_then_add() {
        let vec3d = Vec3d::new([1.0, 2.0, 3.0]);
        let vec3i = Vec3i::new([3, 2, 1]);
        assert_eq!((vec3d + vec3i.cast()).to_string(), "[4, 4, 4]");
    }

    #[test]
    fn cast_rounds_and_saturates() {
        let v = Vec3d::new([1.4, 1.5, 300.0]);
        assert_eq!(v.cast::<u8>(), Vec3b::new([1, 2, 255]));
    }

    #[test]
    fn try_cast_refuses_lossy() {
        assert_eq!(Vec2d::new([1.0, -2.0]).try_cast::<i32>(), Ok(Vec2i::new([1, -2])));
        assert!(Vec2d::new([1.0, 2.5]).try_cast::<i32>().is_err());
    }

    // ==================== Display tests ====================

    #[test]
    fn display_with_precision() {
        let v = Vec2d::new([1.0, 2.26]);
        assert_eq!(v.to_string(), "[1, 2.26]");
        assert_eq!(format!("{v:.1}"), "[1.0, 2.3]");
        assert_eq!(format!("{:.3}", Vec2i::new([1, 2])), "[1, 2]");
    }
}
