//! Capabilities shared by several value types.

/// Types with an area (width times height).
pub trait Area {
    type Output;

    fn area(&self) -> Self::Output;
}

/// Types with a Euclidean length.
pub trait Norm {
    /// Square root of the sum of squared components, computed in `f64`.
    fn norm(&self) -> f64;
}

/// Euclidean norm of any vector-like value.
pub fn norm<V: Norm + ?Sized>(v: &V) -> f64 {
    v.norm()
}
