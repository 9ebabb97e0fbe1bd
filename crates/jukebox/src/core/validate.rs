//! Validation primitives for integral inputs.
//!
//! Every boundary that accepts an externally supplied integer (natural
//! construction, digit and trace indexing, arithmetic operands) runs its
//! input through these functions. They are pure: no state, no allocation
//! beyond the returned `BigInt`.

use core::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, ToPrimitive, Zero};

use super::error::{Error, Result};

/// A value that may have an exact integral representation.
///
/// Primitive integers and the big-integer types always convert. Floating
/// point values never do, even when they are whole: `3.0` is a measurement,
/// not an integer.
///
/// # Example
///
/// ```
/// use jukebox::Integral;
/// use num_bigint::BigInt;
///
/// assert_eq!(17u8.to_integer(), Some(BigInt::from(17)));
/// assert_eq!((-4i64).to_integer(), Some(BigInt::from(-4)));
/// assert_eq!(3.0f64.to_integer(), None);
/// ```
pub trait Integral: fmt::Display {
    /// Returns the exact integer this value denotes, if it has one.
    fn to_integer(&self) -> Option<BigInt>;
}

macro_rules! integral_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl Integral for $t {
                #[inline]
                fn to_integer(&self) -> Option<BigInt> {
                    Some(BigInt::from(*self))
                }
            }
        )*
    };
}

integral_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Integral for BigInt {
    #[inline]
    fn to_integer(&self) -> Option<BigInt> {
        Some(self.clone())
    }
}

impl Integral for BigUint {
    #[inline]
    fn to_integer(&self) -> Option<BigInt> {
        Some(BigInt::from(self.clone()))
    }
}

impl Integral for f32 {
    #[inline]
    fn to_integer(&self) -> Option<BigInt> {
        None
    }
}

impl Integral for f64 {
    #[inline]
    fn to_integer(&self) -> Option<BigInt> {
        None
    }
}

impl<T: Integral + ?Sized> Integral for &T {
    #[inline]
    fn to_integer(&self) -> Option<BigInt> {
        (**self).to_integer()
    }
}

/// Returns the integer denoted by `value`, or `TypeMismatch`.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `value` has no integral representation.
///
/// # Example
///
/// ```
/// use jukebox::validate::ensure_integral;
/// use num_bigint::BigInt;
///
/// assert_eq!(ensure_integral(&42u32).unwrap(), BigInt::from(42));
/// assert!(ensure_integral(&0.5f64).is_err());
/// ```
pub fn ensure_integral<V: Integral + ?Sized>(value: &V) -> Result<BigInt> {
    value.to_integer().ok_or_else(|| Error::TypeMismatch {
        value: value.to_string(),
    })
}

/// Returns `value` if it lies between `lo` and `hi`.
///
/// When `lo < hi` the interval is `[lo, hi)`, or `[lo, hi]` when
/// `right_inclusive`. When `lo >= hi` the interval is mirrored and walked
/// downwards: `(hi, lo]`, or `[hi, lo]` when `right_inclusive`.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if any argument is not integral, and
/// [`Error::OutOfRange`] if `value` is outside the interval.
///
/// # Example
///
/// ```
/// use jukebox::validate::ensure_in_range;
///
/// assert!(ensure_in_range(&9, &0, &9, true).is_ok());
/// assert!(ensure_in_range(&9, &0, &9, false).is_err());
/// // Descending: 5 down to (but excluding) 2
/// assert!(ensure_in_range(&5, &5, &2, false).is_ok());
/// assert!(ensure_in_range(&2, &5, &2, false).is_err());
/// ```
pub fn ensure_in_range<V, L, H>(value: &V, lo: &L, hi: &H, right_inclusive: bool) -> Result<BigInt>
where
    V: Integral + ?Sized,
    L: Integral + ?Sized,
    H: Integral + ?Sized,
{
    let value = ensure_integral(value)?;
    let lo = ensure_integral(lo)?;
    let hi = ensure_integral(hi)?;

    let inside = if lo < hi {
        value >= lo && (value < hi || (right_inclusive && value == hi))
    } else {
        value <= lo && (value > hi || (right_inclusive && value == hi))
    };

    if inside {
        Ok(value)
    } else {
        Err(Error::OutOfRange {
            value,
            lo,
            hi,
            right_inclusive,
        })
    }
}

/// Returns `value` if it is at least 0 (or at least 1 when zero is excluded).
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `value` is not integral and
/// [`Error::Negative`] if it is below the minimum.
pub fn ensure_non_negative<V: Integral + ?Sized>(value: &V, zero_allowed: bool) -> Result<BigInt> {
    let value = ensure_integral(value)?;
    let minimum = u8::from(!zero_allowed);

    if value >= BigInt::from(minimum) {
        Ok(value)
    } else {
        Err(Error::Negative { value, minimum })
    }
}

/// Returns `value` if it is not zero.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `value` is not integral and
/// [`Error::Zero`] if it is zero.
pub fn ensure_nonzero<V: Integral + ?Sized>(value: &V) -> Result<BigInt> {
    let value = ensure_integral(value)?;

    if value.is_zero() {
        Err(Error::Zero { value })
    } else {
        Ok(value)
    }
}

/// Resolves a possibly negative `index` into an offset into a sequence of
/// length `len`.
///
/// Indices in `[0, len)` count from the front; indices in `[-len, 0)` count
/// from the back, so `-1` is the last element.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `index` is not integral and
/// [`Error::IndexOutOfBounds`] if it lies outside `[-len, len)`.
///
/// # Example
///
/// ```
/// use jukebox::validate::ensure_index;
///
/// assert_eq!(ensure_index(&0, 3).unwrap(), 0);
/// assert_eq!(ensure_index(&-1, 3).unwrap(), 2);
/// assert!(ensure_index(&3, 3).is_err());
/// assert!(ensure_index(&-4, 3).is_err());
/// ```
pub fn ensure_index<I: Integral + ?Sized>(index: &I, len: usize) -> Result<usize> {
    let index = ensure_integral(index)?;
    let signed_len = BigInt::from(len);
    let lo = -signed_len.clone();

    let index = ensure_in_range(&index, &lo, &signed_len, false)
        .map_err(|_| Error::IndexOutOfBounds { index, len })?;

    let offset = if index.is_negative() {
        index + signed_len
    } else {
        index
    };

    // In range by construction, so the offset fits in usize.
    offset.to_usize().ok_or(Error::IndexOutOfBounds {
        index: offset,
        len,
    })
}
