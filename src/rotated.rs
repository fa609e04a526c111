//! Rotated rectangles.

use std::fmt;

use glam::{Vec2, vec2};

use crate::element::saturate_cast;
use crate::format::write_elem;
use crate::point::Point2;
use crate::rect::Rect;
use crate::size::Size;

/// A rectangle of `size` centered on `center`, turned by `angle` degrees.
///
/// Immutable once built; everything else is derived on demand.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RotatedRect {
    center: Point2<f32>,
    size: Size<f32>,
    angle: f32,
}

impl RotatedRect {
    pub fn new(center: Point2<f32>, size: Size<f32>, angle: f32) -> Self {
        RotatedRect {
            center,
            size,
            angle,
        }
    }

    pub fn center(&self) -> Point2<f32> {
        self.center
    }

    pub fn size(&self) -> Size<f32> {
        self.size
    }

    /// Rotation in degrees
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// The four corners: bottom-left, top-left, top-right, bottom-right
    /// (y pointing down, before rotation).
    pub fn points(&self) -> [Point2<f32>; 4] {
        let rot = Vec2::from_angle(self.angle.to_radians());
        let c = vec2(self.center.x, self.center.y);
        let hw = self.size.width * 0.5;
        let hh = self.size.height * 0.5;
        [vec2(-hw, hh), vec2(-hw, -hh), vec2(hw, -hh), vec2(hw, hh)].map(|half| {
            let p = c + rot.rotate(half);
            Point2::new(p.x, p.y)
        })
    }

    fn extents(&self) -> (Vec2, Vec2) {
        let pts = self.points().map(|p| vec2(p.x, p.y));
        let min = pts.iter().fold(Vec2::splat(f32::INFINITY), |acc, p| acc.min(*p));
        let max = pts.iter().fold(Vec2::splat(f32::NEG_INFINITY), |acc, p| acc.max(*p));
        (min, max)
    }

    /// Integer bounding box in pixel units.
    ///
    /// The origin is `floor` of the smallest corner coordinate, the far edge
    /// is `ceil` of the largest, and both edges are counted as inside, so
    /// `width = ceil(max_x) - floor(min_x) + 1` (same for the height).
    pub fn bounding_rect(&self) -> Rect<i32> {
        let (min, max) = self.extents();
        // f64 holds every i32 exactly; saturate only at the end
        let x: i32 = saturate_cast(f64::from(min.x).floor());
        let y: i32 = saturate_cast(f64::from(min.y).floor());
        let right = f64::from(max.x).ceil();
        let bottom = f64::from(max.y).ceil();
        Rect::new(
            x,
            y,
            saturate_cast(right - f64::from(x) + 1.0),
            saturate_cast(bottom - f64::from(y) + 1.0),
        )
    }

    /// Exact floating point bounding box of the four corners.
    pub fn bounding_rect2f(&self) -> Rect<f32> {
        let (min, max) = self.extents();
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }
}

impl fmt::Display for RotatedRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_elem(f, &self.size.width)?;
        f.write_str(" x ")?;
        write_elem(f, &self.size.height)?;
        f.write_str(" at (")?;
        write_elem(f, &self.center.x)?;
        f.write_str(", ")?;
        write_elem(f, &self.center.y)?;
        f.write_str("), ")?;
        write_elem(f, &self.angle)?;
        f.write_str(" deg]")
    }
}
