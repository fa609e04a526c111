//! 2D and 3D points.
//!
//! Arithmetic goes through the [`Vector`] of matching length, so points and
//! vectors always agree on the numbers.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::element::Element;
use crate::errors::Result;
use crate::format::write_joined;
use crate::rect::Rect;
use crate::size::Size;
use crate::traits::Norm;
use crate::vector::Vector;

/// A 2D point. Integer coordinates unless stated otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Point2<T = i32> {
    pub x: T,
    pub y: T,
}

impl<T: Element> Point2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }

    #[inline]
    pub fn to_vector(self) -> Vector<T, 2> {
        Vector::new([self.x, self.y])
    }

    pub fn dot(&self, rhs: &Self) -> T {
        self.to_vector().dot(&rhs.to_vector())
    }

    /// The scalar 2D cross product `x * rhs.y - y * rhs.x`.
    pub fn cross(&self, rhs: &Self) -> T {
        self.x
            .saturating_mul(rhs.y)
            .saturating_sub(self.y.saturating_mul(rhs.x))
    }

    pub fn norm(&self) -> f64 {
        self.to_vector().norm()
    }

    /// Whether the point lies in `rect`, see [`Rect::contains`].
    pub fn inside(&self, rect: &Rect<T>) -> bool {
        rect.contains(*self)
    }

    pub fn cast<U: Element>(&self) -> Point2<U> {
        self.to_vector().cast::<U>().into()
    }

    pub fn try_cast<U: Element>(&self) -> Result<Point2<U>> {
        Ok(self.to_vector().try_cast::<U>()?.into())
    }
}

/// A 3D point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Point3<T = i32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Element> Point3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Point3 { x, y, z }
    }

    #[inline]
    pub fn to_vector(self) -> Vector<T, 3> {
        Vector::new([self.x, self.y, self.z])
    }

    pub fn dot(&self, rhs: &Self) -> T {
        self.to_vector().dot(&rhs.to_vector())
    }

    pub fn cross(&self, rhs: &Self) -> Self {
        self.to_vector().cross(&rhs.to_vector()).into()
    }

    pub fn norm(&self) -> f64 {
        self.to_vector().norm()
    }

    pub fn cast<U: Element>(&self) -> Point3<U> {
        self.to_vector().cast::<U>().into()
    }

    pub fn try_cast<U: Element>(&self) -> Result<Point3<U>> {
        Ok(self.to_vector().try_cast::<U>()?.into())
    }
}

// Conversions

impl<T: Element> From<Vector<T, 2>> for Point2<T> {
    fn from(v: Vector<T, 2>) -> Self {
        let [x, y]: [T; 2] = v.into();
        Point2 { x, y }
    }
}

impl<T: Element> From<Point2<T>> for Vector<T, 2> {
    fn from(p: Point2<T>) -> Self {
        p.to_vector()
    }
}

impl<T: Element> From<Vector<T, 3>> for Point3<T> {
    fn from(v: Vector<T, 3>) -> Self {
        let [x, y, z]: [T; 3] = v.into();
        Point3 { x, y, z }
    }
}

impl<T: Element> From<Point3<T>> for Vector<T, 3> {
    fn from(p: Point3<T>) -> Self {
        p.to_vector()
    }
}

impl<T: Element> From<[T; 2]> for Point2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Point2 { x, y }
    }
}

impl<T: Element> From<[T; 3]> for Point3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Point3 { x, y, z }
    }
}

/// `(width, height)` becomes `(x, y)`
impl<T: Element> From<Size<T>> for Point2<T> {
    fn from(s: Size<T>) -> Self {
        Point2 {
            x: s.width,
            y: s.height,
        }
    }
}

// Arithmetic

impl<T: Element> Add for Point2<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        (self.to_vector() + rhs.to_vector()).into()
    }
}

impl<T: Element> Sub for Point2<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        (self.to_vector() - rhs.to_vector()).into()
    }
}

impl<T: Element + Neg<Output = T>> Neg for Point2<T> {
    type Output = Self;
    fn neg(self) -> Self {
        (-self.to_vector()).into()
    }
}

impl<T: Element> Mul<T> for Point2<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        (self.to_vector() * rhs).into()
    }
}

impl<T: Element> Add for Point3<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        (self.to_vector() + rhs.to_vector()).into()
    }
}

impl<T: Element> Sub for Point3<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        (self.to_vector() - rhs.to_vector()).into()
    }
}

impl<T: Element + Neg<Output = T>> Neg for Point3<T> {
    type Output = Self;
    fn neg(self) -> Self {
        (-self.to_vector()).into()
    }
}

impl<T: Element> Mul<T> for Point3<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        (self.to_vector() * rhs).into()
    }
}

impl<T: Element> Norm for Point2<T> {
    fn norm(&self) -> f64 {
        Point2::norm(self)
    }
}

impl<T: Element> Norm for Point3<T> {
    fn norm(&self) -> f64 {
        Point3::norm(self)
    }
}

impl<T: Element> fmt::Display for Point2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_joined(f, &[self.x, self.y], ", ")?;
        f.write_str("]")
    }
}

impl<T: Element> fmt::Display for Point3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_joined(f, &[self.x, self.y, self.z], ", ")?;
        f.write_str("]")
    }
}

pub type Point = Point2<i32>;
pub type Point2i = Point2<i32>;
pub type Point2f = Point2<f32>;
pub type Point2d = Point2<f64>;
pub type Point3i = Point3<i32>;
pub type Point3f = Point3<f32>;
pub type Point3d = Point3<f64>;
