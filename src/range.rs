//! Half-open integer ranges with an "everything" sentinel.

use std::fmt;
use std::ops::RangeFull;

/// `[start, end)` over `i32`, or the whole axis.
///
/// `All` is its own variant, so it never compares equal to a span, not even
/// `Range::new(i32::MIN, i32::MAX)`. Its [`start`](Range::start) and
/// [`end`](Range::end) report the `i32` bounds, but its [`size`](Range::size)
/// is `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Range {
    Span { start: i32, end: i32 },
    All,
}

impl Range {
    #[inline]
    pub const fn new(start: i32, end: i32) -> Self {
        Range::Span { start, end }
    }

    #[inline]
    pub const fn all() -> Self {
        Range::All
    }

    pub const fn is_all(&self) -> bool {
        matches!(self, Range::All)
    }

    pub const fn start(&self) -> i32 {
        match *self {
            Range::Span { start, .. } => start,
            Range::All => i32::MIN,
        }
    }

    pub const fn end(&self) -> i32 {
        match *self {
            Range::Span { end, .. } => end,
            Range::All => i32::MAX,
        }
    }

    /// `end - start` for a span (negative if reversed), `None` for `All`.
    pub const fn size(&self) -> Option<i64> {
        match *self {
            Range::Span { start, end } => Some(end as i64 - start as i64),
            Range::All => None,
        }
    }

    pub const fn is_empty(&self) -> bool {
        match *self {
            Range::Span { start, end } => start == end,
            Range::All => false,
        }
    }

    pub const fn contains(&self, i: i32) -> bool {
        match *self {
            Range::Span { start, end } => start <= i && i < end,
            Range::All => true,
        }
    }
}

impl Default for Range {
    fn default() -> Self {
        Range::new(0, 0)
    }
}

impl From<std::ops::Range<i32>> for Range {
    fn from(r: std::ops::Range<i32>) -> Self {
        Range::new(r.start, r.end)
    }
}

impl From<RangeFull> for Range {
    fn from(_: RangeFull) -> Self {
        Range::All
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start(), self.end())
    }
}
