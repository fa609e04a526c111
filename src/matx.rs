//! Small fixed-size matrices.
//!
//! `Matx<T, R, C>` holds `R * C` entries in row-major order in one contiguous
//! `[[T; C]; R]`. Shapes are part of the type, so `a * b` only compiles when
//! they line up; [`Matx::try_mul`] is the run-time checked form for code that
//! is generic over both shapes.

use std::array;
use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

use crate::element::Element;
use crate::errors::{PrimitiveError, Result};
use crate::format::write_joined;
use crate::vector::Vector;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Matx<T, const R: usize, const C: usize> {
    val: [[T; C]; R],
}

impl<T: Element, const R: usize, const C: usize> Matx<T, R, C> {
    #[inline]
    pub const fn new(rows: [[T; C]; R]) -> Self {
        Matx { val: rows }
    }

    /// Build from exactly `R * C` values in row-major order.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        if values.len() != R * C {
            return Err(PrimitiveError::mismatch("matrix elements", R * C, values.len()));
        }
        let mut val = [[T::zero(); C]; R];
        if C > 0 {
            for (row, chunk) in val.iter_mut().zip(values.chunks_exact(C)) {
                row.copy_from_slice(chunk);
            }
        }
        Ok(Matx { val })
    }

    pub fn all(v: T) -> Self {
        Matx { val: [[v; C]; R] }
    }

    pub fn zeros() -> Self {
        Self::all(T::zero())
    }

    /// Ones where `row == col`, zeros elsewhere. Works for any shape.
    pub fn eye() -> Self {
        Matx {
            val: array::from_fn(|i| array::from_fn(|j| if i == j { T::one() } else { T::zero() })),
        }
    }

    /// `(rows, cols)`
    #[inline]
    pub const fn shape(&self) -> (usize, usize) {
        (R, C)
    }

    #[inline]
    pub fn as_rows(&self) -> &[[T; C]; R] {
        &self.val
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let r = self
            .val
            .get(row)
            .ok_or_else(|| PrimitiveError::out_of_range(row, R))?;
        r.get(col)
            .copied()
            .ok_or_else(|| PrimitiveError::out_of_range(col, C))
    }

    pub fn row(&self, i: usize) -> Result<Vector<T, C>> {
        self.val
            .get(i)
            .map(|r| Vector::new(*r))
            .ok_or_else(|| PrimitiveError::out_of_range(i, R))
    }

    pub fn col(&self, j: usize) -> Result<Vector<T, R>> {
        if j >= C {
            return Err(PrimitiveError::out_of_range(j, C));
        }
        Ok(Vector::new(array::from_fn(|i| self.val[i][j])))
    }

    /// Transpose
    pub fn t(&self) -> Matx<T, C, R> {
        Matx {
            val: array::from_fn(|j| array::from_fn(|i| self.val[i][j])),
        }
    }

    /// Element-wise product.
    #[allow(clippy::should_implement_trait)]
    pub fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, T::saturating_mul)
    }

    /// Matrix product with shapes checked at run time.
    ///
    /// Fails with [`PrimitiveError::DimensionMismatch`] unless `rhs` has as
    /// many rows as `self` has columns.
    pub fn try_mul<const R2: usize, const K: usize>(
        &self,
        rhs: &Matx<T, R2, K>,
    ) -> Result<Matx<T, R, K>> {
        if R2 != C {
            return Err(PrimitiveError::mismatch("matrix product", C, R2));
        }
        Ok(self.product(rhs))
    }

    // Callers guarantee R2 == C.
    fn product<const R2: usize, const K: usize>(&self, rhs: &Matx<T, R2, K>) -> Matx<T, R, K> {
        Matx {
            val: array::from_fn(|i| {
                array::from_fn(|j| {
                    self.val[i]
                        .iter()
                        .zip(rhs.val.iter())
                        .fold(T::zero(), |acc, (&a, b_row)| {
                            acc.saturating_add(a.saturating_mul(b_row[j]))
                        })
                })
            }),
        }
    }

    fn zip_with(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        let mut val = self.val;
        for (row, rhs_row) in val.iter_mut().zip(rhs.val) {
            for (a, b) in row.iter_mut().zip(rhs_row) {
                *a = f(*a, b);
            }
        }
        Matx { val }
    }

    fn map(self, f: impl Fn(T) -> T) -> Self {
        Matx {
            val: self.val.map(|row| row.map(&f)),
        }
    }
}

impl<T: Element, const R: usize, const C: usize> Default for Matx<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Element, const R: usize, const C: usize> TryFrom<&[T]> for Matx<T, R, C> {
    type Error = PrimitiveError;

    fn try_from(values: &[T]) -> Result<Self> {
        Self::from_slice(values)
    }
}

/// Panics on a bad index; use [`Matx::get`] for a checked lookup.
impl<T: Element, const R: usize, const C: usize> Index<(usize, usize)> for Matx<T, R, C> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.val[row][col]
    }
}

impl<T: Element, const R: usize, const C: usize> Add for Matx<T, R, C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, T::saturating_add)
    }
}

impl<T: Element, const R: usize, const C: usize> Sub for Matx<T, R, C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, T::saturating_sub)
    }
}

impl<T: Element + Neg<Output = T>, const R: usize, const C: usize> Neg for Matx<T, R, C> {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(T::saturating_neg)
    }
}

impl<T: Element, const R: usize, const C: usize> Mul<T> for Matx<T, R, C> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self.map(|a| a.saturating_mul(rhs))
    }
}

impl<T: Element, const R: usize, const C: usize, const K: usize> Mul<Matx<T, C, K>>
    for Matx<T, R, C>
{
    type Output = Matx<T, R, K>;
    fn mul(self, rhs: Matx<T, C, K>) -> Matx<T, R, K> {
        self.product(&rhs)
    }
}

impl<T: Element, const R: usize, const C: usize> Mul<Vector<T, C>> for Matx<T, R, C> {
    type Output = Vector<T, R>;
    fn mul(self, rhs: Vector<T, C>) -> Vector<T, R> {
        Vector::new(array::from_fn(|i| Vector::new(self.val[i]).dot(&rhs)))
    }
}

impl<T: Element, const R: usize, const C: usize> fmt::Display for Matx<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, row) in self.val.iter().enumerate() {
            if i > 0 {
                f.write_str(";\n ")?;
            }
            write_joined(f, row, ", ")?;
        }
        f.write_str("]")
    }
}

pub type Matx12f = Matx<f32, 1, 2>;
pub type Matx12d = Matx<f64, 1, 2>;
pub type Matx21f = Matx<f32, 2, 1>;
pub type Matx21d = Matx<f64, 2, 1>;
pub type Matx22f = Matx<f32, 2, 2>;
pub type Matx22d = Matx<f64, 2, 2>;
pub type Matx23f = Matx<f32, 2, 3>;
pub type Matx23d = Matx<f64, 2, 3>;
pub type Matx33f = Matx<f32, 3, 3>;
pub type Matx33d = Matx<f64, 3, 3>;
pub type Matx34f = Matx<f32, 3, 4>;
pub type Matx34d = Matx<f64, 3, 4>;
pub type Matx44f = Matx<f32, 4, 4>;
pub type Matx44d = Matx<f64, 4, 4>;
