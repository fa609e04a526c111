//! Conditional logging macros.
//!
//! With the `tracing` feature, failure paths and lossy conversions emit
//! `tracing` events. Without it the macros expand to nothing, so the
//! primitives stay free of any logging cost.

#[cfg(feature = "tracing")]
pub use tracing::debug;

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::debug;
