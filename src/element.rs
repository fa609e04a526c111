//! Numeric element types for vectors, points, and matrices.
//!
//! Conversions between element types are always explicit:
//! - [`saturate_cast`] is lossy but defined: floats going to integers are
//!   rounded half away from zero and clamped to the target's bounds, NaN
//!   becomes 0. Anything going to a float uses `as` semantics.
//! - [`checked_cast`] refuses any conversion that changes the value.
//!
//! Arithmetic on integer elements saturates at the type's bounds instead of
//! overflowing, so `Vec3b` pixel sums clamp at 255.

use std::fmt;

use num_traits::{Bounded, NumCast, Zero};

use crate::errors::{PrimitiveError, Result};

/// A primitive number usable as a component of the value types in this crate.
pub trait Element:
    Copy
    + PartialEq
    + PartialOrd
    + Default
    + fmt::Debug
    + fmt::Display
    + num_traits::Num
    + NumCast
    + Bounded
{
    /// Name of the type, used in error messages
    const NAME: &'static str;
    /// Whether this is a floating point type
    const IS_FLOAT: bool;

    /// Widen to `f64`. Exact for every type except 64-bit integers beyond 2^53.
    fn as_f64(self) -> f64;

    /// Convert from `f64`, rounding and saturating for integer types.
    fn saturate_from_f64(v: f64) -> Self;

    fn saturating_add(self, rhs: Self) -> Self;
    fn saturating_sub(self, rhs: Self) -> Self;
    fn saturating_mul(self, rhs: Self) -> Self;
    /// `-self`, clamped for integers (unsigned values go to 0).
    fn saturating_neg(self) -> Self;
}

macro_rules! impl_element_int {
    ($($t:ty),*) => {$(
        impl Element for $t {
            const NAME: &'static str = stringify!($t);
            const IS_FLOAT: bool = false;

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            // `as` from a float saturates at the bounds and maps NaN to 0
            #[inline]
            fn saturate_from_f64(v: f64) -> Self {
                v.round() as $t
            }

            #[inline]
            fn saturating_add(self, rhs: Self) -> Self {
                <$t>::saturating_add(self, rhs)
            }

            #[inline]
            fn saturating_sub(self, rhs: Self) -> Self {
                <$t>::saturating_sub(self, rhs)
            }

            #[inline]
            fn saturating_mul(self, rhs: Self) -> Self {
                <$t>::saturating_mul(self, rhs)
            }

            #[inline]
            fn saturating_neg(self) -> Self {
                <$t>::saturating_sub(0, self)
            }
        }
    )*};
}

macro_rules! impl_element_float {
    ($($t:ty),*) => {$(
        impl Element for $t {
            const NAME: &'static str = stringify!($t);
            const IS_FLOAT: bool = true;

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn saturate_from_f64(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn saturating_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn saturating_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn saturating_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn saturating_neg(self) -> Self {
                -self
            }
        }
    )*};
}

impl_element_int!(u8, i8, u16, i16, u32, i32, u64, i64);
impl_element_float!(f32, f64);

/// Convert `v` to `U`, rounding and saturating where `U` cannot hold it.
pub fn saturate_cast<T: Element, U: Element>(v: T) -> U {
    let out = if U::IS_FLOAT {
        <U as NumCast>::from(v).unwrap_or_else(|| U::saturate_from_f64(v.as_f64()))
    } else if T::IS_FLOAT {
        U::saturate_from_f64(v.as_f64())
    } else {
        // integer to integer only fails when out of range
        <U as NumCast>::from(v).unwrap_or_else(|| {
            if v < <T as Zero>::zero() {
                <U as Bounded>::min_value()
            } else {
                <U as Bounded>::max_value()
            }
        })
    };
    if !U::IS_FLOAT && <T as NumCast>::from(out) != Some(v) {
        crate::log::debug!(from = %v, to = %out, ty = U::NAME, "lossy saturating cast");
    }
    out
}

/// Convert `v` to `U`, failing with [`PrimitiveError::InexactCast`] if the
/// value would change.
pub fn checked_cast<T: Element, U: Element>(v: T) -> Result<U> {
    let inexact = || {
        crate::log::debug!(value = %v, ty = U::NAME, "inexact checked cast");
        PrimitiveError::InexactCast {
            value: v.to_string(),
            target: U::NAME,
        }
    };

    let wide = v.as_f64();
    if wide.is_nan() {
        return if U::IS_FLOAT {
            Ok(U::saturate_from_f64(wide))
        } else {
            Err(inexact())
        };
    }

    let out = <U as NumCast>::from(v).ok_or_else(inexact)?;
    // converting back must give the same value in the source type
    if <T as NumCast>::from(out) != Some(v) {
        return Err(inexact());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== saturate_cast tests ====================

    #[test]
    fn float_to_int_rounds_half_away_from_zero() {
        assert_eq!(saturate_cast::<f64, i32>(2.5), 3);
        assert_eq!(saturate_cast::<f64, i32>(-2.5), -3);
        assert_eq!(saturate_cast::<f64, i32>(2.4), 2);
    }

    #[test]
    fn float_to_int_saturates() {
        assert_eq!(saturate_cast::<f64, u8>(300.0), 255);
        assert_eq!(saturate_cast::<f64, u8>(-5.0), 0);
        assert_eq!(saturate_cast::<f32, i32>(f32::INFINITY), i32::MAX);
        assert_eq!(saturate_cast::<f64, i32>(f64::NAN), 0);
    }

    #[test]
    fn int_to_int_saturates() {
        assert_eq!(saturate_cast::<i32, u8>(-1), 0);
        assert_eq!(saturate_cast::<i32, i8>(1000), i8::MAX);
        assert_eq!(saturate_cast::<u8, i32>(200), 200);
    }

    #[test]
    fn wide_int_casts_keep_every_bit() {
        let big: i64 = (1 << 53) + 1;
        assert_eq!(saturate_cast::<i64, i64>(big), big);
        assert_eq!(saturate_cast::<i64, i64>(i64::MAX - 1), i64::MAX - 1);
        assert_eq!(saturate_cast::<u64, u64>(u64::MAX), u64::MAX);
        assert_eq!(saturate_cast::<u64, i64>(u64::MAX), i64::MAX);
        assert_eq!(saturate_cast::<i64, u64>(i64::MIN), 0);
        assert_eq!(saturate_cast::<i64, u32>(-1), 0);
    }

    #[test]
    fn int_to_float_is_exact_for_small_values() {
        assert_eq!(saturate_cast::<i32, f64>(3), 3.0);
        assert_eq!(saturate_cast::<i32, f32>(-7), -7.0);
    }

    // ==================== arithmetic tests ====================

    #[test]
    fn integer_arithmetic_saturates() {
        assert_eq!(Element::saturating_add(200u8, 100), 255);
        assert_eq!(Element::saturating_sub(10u8, 20), 0);
        assert_eq!(Element::saturating_mul(i32::MAX, 2), i32::MAX);
        assert_eq!(Element::saturating_neg(i8::MIN), i8::MAX);
        assert_eq!(Element::saturating_neg(7u8), 0);
    }

    #[test]
    fn float_arithmetic_is_plain() {
        assert_eq!(Element::saturating_add(f32::MAX, f32::MAX), f32::INFINITY);
        assert_eq!(Element::saturating_sub(1.5f64, 2.0), -0.5);
        assert_eq!(Element::saturating_neg(2.0f64), -2.0);
    }

    // ==================== checked_cast tests ====================

    #[test]
    fn checked_cast_accepts_exact_values() {
        assert_eq!(checked_cast::<f64, i32>(4.0), Ok(4));
        assert_eq!(checked_cast::<i32, f64>(-3), Ok(-3.0));
        assert_eq!(checked_cast::<f64, f32>(0.5), Ok(0.5));
    }

    #[test]
    fn checked_cast_rejects_fractions() {
        let err = checked_cast::<f64, i32>(1.5).unwrap_err();
        assert_eq!(
            err,
            PrimitiveError::InexactCast {
                value: "1.5".into(),
                target: "i32"
            }
        );
    }

    #[test]
    fn checked_cast_rejects_out_of_range() {
        assert!(checked_cast::<i32, u8>(256).is_err());
        assert!(checked_cast::<i32, u8>(-1).is_err());
        assert!(checked_cast::<f64, f32>(0.1).is_err());
    }

    #[test]
    fn checked_cast_rejects_wide_ints_floats_cannot_hold() {
        let big: i64 = (1 << 53) + 1;
        assert!(checked_cast::<i64, f64>(big).is_err());
        assert!(checked_cast::<u64, f32>(u64::MAX).is_err());
        assert!(checked_cast::<i32, f32>(16_777_217).is_err());
        assert_eq!(checked_cast::<i64, f64>(1 << 53), Ok(9007199254740992.0));
        assert_eq!(checked_cast::<i64, i64>(big), Ok(big));
    }

    #[test]
    fn checked_cast_nan() {
        let nan: f32 = checked_cast::<f64, f32>(f64::NAN).unwrap();
        assert!(nan.is_nan());
        assert!(checked_cast::<f64, i64>(f64::NAN).is_err());
    }
}
