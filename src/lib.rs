//! Fixed-size value types for vision code.
//!
//! Points, sizes, rectangles, rotated rectangles, small vectors and matrices,
//! and integer ranges. Everything is `Copy`, nothing allocates, and every type
//! has an exact text form through `Display`:
//!
//! ```
//! use vprim::{Point, Rect, Range};
//!
//! let p = Point::new(12, 23) + Point::new(12, 23);
//! assert_eq!(p.to_string(), "[24, 46]");
//!
//! let r = Rect::from_corners(Point::new(2, 3), Point::new(4, 4));
//! assert_eq!(r.to_string(), "[2 x 1 from (2, 3)]");
//!
//! assert_eq!(Range::new(1, 9).to_string(), "[1, 9)");
//! ```
//!
//! Fallible operations return [`PrimitiveError`]. Enable the `tracing`
//! feature to get debug events on those paths.

pub mod element;
pub mod errors;
mod format;
mod log;
pub mod matx;
pub mod point;
pub mod range;
pub mod rect;
pub mod rotated;
pub mod size;
pub mod traits;
pub mod vector;

pub use element::{Element, checked_cast, saturate_cast};
pub use errors::{PrimitiveError, Result};
pub use matx::*;
pub use point::*;
pub use range::Range;
pub use rect::*;
pub use rotated::RotatedRect;
pub use size::*;
pub use traits::{Area, Norm, norm};
pub use vector::*;
