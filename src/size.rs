//! Width/height pairs.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::element::Element;
use crate::format::write_elem;
use crate::point::Point2;
use crate::traits::Area;

/// Size of an image or rectangle. Negative values are kept as given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Size<T = i32> {
    pub width: T,
    pub height: T,
}

impl<T: Element> Size<T> {
    #[inline]
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    /// `width * height`, negative if exactly one side is.
    #[inline]
    pub fn area(&self) -> T {
        self.width.saturating_mul(self.height)
    }

    /// True when either side is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= T::zero() || self.height <= T::zero()
    }

    pub fn cast<U: Element>(&self) -> Size<U> {
        Size::from(Point2::from(*self).cast::<U>())
    }
}

/// `(x, y)` becomes `(width, height)`
impl<T: Element> From<Point2<T>> for Size<T> {
    fn from(p: Point2<T>) -> Self {
        Size {
            width: p.x,
            height: p.y,
        }
    }
}

impl<T: Element> Add for Size<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Size::new(
            self.width.saturating_add(rhs.width),
            self.height.saturating_add(rhs.height),
        )
    }
}

impl<T: Element> Sub for Size<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Size::new(
            self.width.saturating_sub(rhs.width),
            self.height.saturating_sub(rhs.height),
        )
    }
}

impl<T: Element> Mul<T> for Size<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Size::new(self.width.saturating_mul(rhs), self.height.saturating_mul(rhs))
    }
}

impl<T: Element> Area for Size<T> {
    type Output = T;

    fn area(&self) -> T {
        Size::area(self)
    }
}

impl<T: Element> fmt::Display for Size<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_elem(f, &self.width)?;
        f.write_str(" x ")?;
        write_elem(f, &self.height)?;
        f.write_str("]")
    }
}

pub type Size2i = Size<i32>;
pub type Size2f = Size<f32>;
pub type Size2d = Size<f64>;
