//! Axis-aligned rectangles.
//!
//! A rect is stored as its top-left corner plus its size. The corners are
//! always derived the same way:
//!
//! - `tl() = (x, y)`
//! - `br() = (x + width, y + height)`
//!
//! [`Rect::from_corners`] takes the raw difference of its two corners and does
//! not reorder them, so a rect built "backwards" has a negative width or
//! height and a `br()` that sits above-left of `tl()`. Callers that want a
//! normalized rect should order the corners themselves.

use std::fmt;
use std::ops::{Add, Sub};

use crate::element::Element;
use crate::format::write_elem;
use crate::point::Point2;
use crate::size::Size;
use crate::traits::Area;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rect<T = i32> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

fn min_of<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

fn max_of<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

impl<T: Element> Rect<T> {
    #[inline]
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point2<T>, size: Size<T>) -> Self {
        Rect::new(origin.x, origin.y, size.width, size.height)
    }

    /// Rect spanning `c1` to `c2`, with `width = c2.x - c1.x` and
    /// `height = c2.y - c1.y`. The corners are not reordered.
    pub fn from_corners(c1: Point2<T>, c2: Point2<T>) -> Self {
        Rect::new(c1.x, c1.y, c2.x.saturating_sub(c1.x), c2.y.saturating_sub(c1.y))
    }

    /// Top-left corner
    #[inline]
    pub fn tl(&self) -> Point2<T> {
        Point2::new(self.x, self.y)
    }

    /// Bottom-right corner (exclusive)
    #[inline]
    pub fn br(&self) -> Point2<T> {
        Point2::new(self.x.saturating_add(self.width), self.y.saturating_add(self.height))
    }

    #[inline]
    pub fn size(&self) -> Size<T> {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub fn area(&self) -> T {
        self.width.saturating_mul(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Half-open containment: the left and top edges are inside, the right
    /// and bottom edges are not.
    pub fn contains(&self, p: Point2<T>) -> bool {
        let br = self.br();
        self.x <= p.x && p.x < br.x && self.y <= p.y && p.y < br.y
    }

    /// Overlap of the two rects, or the default (all-zero) rect if they do
    /// not overlap.
    pub fn intersect(&self, other: &Self) -> Self {
        let x1 = max_of(self.x, other.x);
        let y1 = max_of(self.y, other.y);
        let (a, b) = (self.br(), other.br());
        let x2 = min_of(a.x, b.x);
        let y2 = min_of(a.y, b.y);
        if x2 <= x1 || y2 <= y1 {
            return Rect::default();
        }
        Rect::from_corners(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Smallest rect containing both. Empty rects do not contribute.
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x1 = min_of(self.x, other.x);
        let y1 = min_of(self.y, other.y);
        let (a, b) = (self.br(), other.br());
        let x2 = max_of(a.x, b.x);
        let y2 = max_of(a.y, b.y);
        Rect::from_corners(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    pub fn cast<U: Element>(&self) -> Rect<U> {
        Rect::from_origin_size(self.tl().cast::<U>(), self.size().cast::<U>())
    }
}

/// Shift by an offset
impl<T: Element> Add<Point2<T>> for Rect<T> {
    type Output = Self;
    fn add(self, rhs: Point2<T>) -> Self {
        Rect::new(
            self.x.saturating_add(rhs.x),
            self.y.saturating_add(rhs.y),
            self.width,
            self.height,
        )
    }
}

impl<T: Element> Sub<Point2<T>> for Rect<T> {
    type Output = Self;
    fn sub(self, rhs: Point2<T>) -> Self {
        Rect::new(
            self.x.saturating_sub(rhs.x),
            self.y.saturating_sub(rhs.y),
            self.width,
            self.height,
        )
    }
}

impl<T: Element> Area for Rect<T> {
    type Output = T;

    fn area(&self) -> T {
        Rect::area(self)
    }
}

impl<T: Element> fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_elem(f, &self.width)?;
        f.write_str(" x ")?;
        write_elem(f, &self.height)?;
        f.write_str(" from (")?;
        write_elem(f, &self.x)?;
        f.write_str(", ")?;
        write_elem(f, &self.y)?;
        f.write_str(")]")
    }
}

pub type Rect2i = Rect<i32>;
pub type Rect2f = Rect<f32>;
pub type Rect2d = Rect<f64>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    // ==================== Construction tests ====================

    #[test]
    fn fields_and_derived_values() {
        let r1 = Rect2d::new(1.0, 2.0, 8.0, 5.0);
        assert_eq!(r1.to_string(), "[8 x 5 from (1, 2)]");
        assert_eq!((r1.x, r1.y, r1.width, r1.height), (1.0, 2.0, 8.0, 5.0));
        assert_eq!(r1.area(), 40.0);
        assert_eq!(r1.size().to_string(), "[8 x 5]");
        assert_eq!(r1.tl().to_string(), "[1, 2]");
        assert_eq!(r1.br().to_string(), "[9, 7]");
    }

    #[test]
    fn from_origin_and_size() {
        let r2 = Rect::from_origin_size(Point::new(2, 3), Size::new(3, 4));
        assert_eq!(r2.tl(), Point::new(2, 3));
        assert_eq!(r2.br(), Point::new(5, 7));
    }

    #[test]
    fn from_two_corners() {
        let r3 = Rect::from_corners(Point::new(2, 3), Point::new(4, 4));
        assert_eq!(r3.width, 2);
        assert_eq!(r3.height, 1);
        assert_eq!(r3.tl(), Point::new(2, 3));
        assert_eq!(r3.br(), Point::new(4, 4));
        assert_eq!(r3.size().to_string(), "[2 x 1]");
    }

    #[test]
    fn backwards_corners_pass_through() {
        let r = Rect::from_corners(Point::new(4, 4), Point::new(2, 3));
        assert_eq!(r, Rect::new(4, 4, -2, -1));
        assert_eq!(r.tl(), Point::new(4, 4));
        assert_eq!(r.br(), Point::new(2, 3));
        assert_eq!(r.area(), 2);
        assert!(r.is_empty());
    }

    // ==================== Query tests ====================

    #[test]
    fn corners_saturate_at_the_bounds() {
        let r = Rect::new(i32::MAX - 1, 0, 10, 10);
        assert_eq!(r.br(), Point::new(i32::MAX, 10));
        assert!(r.contains(Point::new(i32::MAX - 1, 5)));
        assert_eq!(r + Point::new(5, 0), Rect::new(i32::MAX, 0, 10, 10));
        let wide = Rect::from_corners(Point::new(i32::MIN, 0), Point::new(i32::MAX, 1));
        assert_eq!(wide.width, i32::MAX);
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(1, 1, 3, 3);
        assert!(r.contains(Point::new(1, 1)));
        assert!(r.contains(Point::new(3, 3)));
        assert!(!r.contains(Point::new(4, 3)));
        assert!(!r.contains(Point::new(0, 2)));
    }

    #[test]
    fn intersect_and_union() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 1, 4, 4);
        assert_eq!(a.intersect(&b), Rect::new(2, 1, 2, 3));
        assert_eq!(a.union(&b), Rect::new(0, 0, 6, 5));

        let far = Rect::new(10, 10, 1, 1);
        assert_eq!(a.intersect(&far), Rect::default());
        assert_eq!(Rect::default().union(&far), far);
    }

    #[test]
    fn shift_by_point() {
        let r = Rect::new(1, 2, 3, 4);
        assert_eq!(r + Point::new(1, 1), Rect::new(2, 3, 3, 4));
        assert_eq!(r - Point::new(1, 2), Rect::new(0, 0, 3, 4));
    }

    #[test]
    fn area_trait_and_cast() {
        let r = Rect2d::new(0.0, 0.0, 2.5, 2.0);
        assert_eq!(Area::area(&r), 5.0);
        assert_eq!(r.cast::<i32>(), Rect::new(0, 0, 3, 2));
    }
}
