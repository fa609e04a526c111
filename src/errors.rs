//! Error types for the primitives
//!
//! Every fallible operation returns [`PrimitiveError`]. These are programmer
//! errors (bad index, wrong shape), so they carry no source spans, only the
//! numbers needed to see what went wrong.

use miette::Diagnostic;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T, E = PrimitiveError> = std::result::Result<T, E>;

/// Errors raised by construction, access, and conversion of primitives
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveError {
    #[error("index {index} out of range for length {len}")]
    #[diagnostic(code(vprim::out_of_range))]
    OutOfRange { index: usize, len: usize },

    #[error("{op} requires dimension {expected}, got {got}")]
    #[diagnostic(
        code(vprim::invalid_dimension),
        help("use a value of dimension {expected}")
    )]
    InvalidDimension {
        op: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("dimension mismatch in {context}: expected {expected}, got {got}")]
    #[diagnostic(code(vprim::dimension_mismatch))]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("{value} is not exactly representable as {target}")]
    #[diagnostic(
        code(vprim::inexact_cast),
        help("use `cast` for a saturating, rounding conversion")
    )]
    InexactCast { value: String, target: &'static str },
}

impl PrimitiveError {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        crate::log::debug!(index, len, "index out of range");
        PrimitiveError::OutOfRange { index, len }
    }

    pub(crate) fn mismatch(context: &'static str, expected: usize, got: usize) -> Self {
        crate::log::debug!(context, expected, got, "dimension mismatch");
        PrimitiveError::DimensionMismatch {
            context,
            expected,
            got,
        }
    }
}
