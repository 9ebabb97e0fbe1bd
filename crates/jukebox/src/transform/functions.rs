//! The J, K and B transforms.
//!
//! Each transform reads the decimal digits of its input as coefficients of
//! a polynomial and evaluates that polynomial at another base:
//!
//! ```text
//! J_b(x)   = Σ b^i     · x[i]
//! K_b(x)   = Σ b^(i+1) · x[i]  = b   · J_b(x)
//! B_b,p(x) = Σ b^(i+p) · x[i]  = b^p · J_b(x)
//! ```
//!
//! where `x[i]` is the digit in the `10^i` place. With `b = 10` the digits
//! are read back in their own base, so `J_10` is the identity.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::core::error::Result;
use crate::core::natural::Natural;
use crate::core::ops::checked_pow;
use crate::core::validate::Integral;

/// Horner evaluation of the digit polynomial at `base`.
///
/// Digits are consumed most-significant first: `acc = acc * base + digit`.
pub(crate) fn digit_polynomial(value: &Natural, base: &BigUint) -> BigUint {
    value
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, digit| acc * base + u32::from(digit))
}

/// `base^power`, refusing results wider than [`MAX_RESULT_BITS`](crate::MAX_RESULT_BITS).
pub(crate) fn scale(base: &BigUint, power: &Natural) -> Result<BigUint> {
    checked_pow(base, &power.to_bigint())
}

pub(crate) fn j_of(value: &Natural, base: &Natural) -> Natural {
    Natural::from(digit_polynomial(value, base.magnitude()))
}

pub(crate) fn k_of(value: &Natural, base: &Natural) -> Natural {
    let base = base.magnitude();
    Natural::from(base * digit_polynomial(value, base))
}

pub(crate) fn b_of(value: &Natural, base: &Natural, power: &Natural) -> Result<Natural> {
    let base = base.magnitude();
    let factor = scale(base, power)?;
    Ok(Natural::from(factor * digit_polynomial(value, base)))
}

/// The J transform: `Σ base^i · digit_i(value)`.
///
/// # Errors
///
/// [`Error::TypeMismatch`](crate::Error::TypeMismatch) or
/// [`Error::Negative`](crate::Error::Negative) if `value` or `base` is not
/// a natural number.
///
/// # Example
///
/// ```
/// use jukebox::{transform, Natural};
///
/// // 19 has digits [9, 1]: 1·2 + 9 = 11
/// assert_eq!(transform::j(19, 2).unwrap(), Natural::from(11u8));
/// // Base 10 is the identity
/// assert_eq!(transform::j(4321, 10).unwrap(), Natural::from(4321u16));
/// ```
pub fn j<V: Integral, B: Integral>(value: V, base: B) -> Result<Natural> {
    let value = Natural::new(value)?;
    let base = Natural::new(base)?;
    Ok(j_of(&value, &base))
}

/// The K transform: `base · J(value, base)`.
///
/// # Errors
///
/// [`Error::TypeMismatch`](crate::Error::TypeMismatch) or
/// [`Error::Negative`](crate::Error::Negative) if `value` or `base` is not
/// a natural number.
///
/// # Example
///
/// ```
/// use jukebox::{transform, Natural};
///
/// assert_eq!(transform::k(19, 2).unwrap(), Natural::from(22u8));
/// ```
pub fn k<V: Integral, B: Integral>(value: V, base: B) -> Result<Natural> {
    let value = Natural::new(value)?;
    let base = Natural::new(base)?;
    Ok(k_of(&value, &base))
}

/// The B transform: `base^power · J(value, base)`.
///
/// # Errors
///
/// [`Error::TypeMismatch`](crate::Error::TypeMismatch) or
/// [`Error::Negative`](crate::Error::Negative) if any argument is not a
/// natural number, and [`Error::OutOfRange`](crate::Error::OutOfRange) if
/// `base^power` would be wider than
/// [`MAX_RESULT_BITS`](crate::MAX_RESULT_BITS) (never for bases 0 and 1).
///
/// # Example
///
/// ```
/// use jukebox::{transform, Natural};
///
/// // 7 in base 3 with power 2: 3^2 · 7 = 63
/// assert_eq!(transform::b(7, 3, 2).unwrap(), Natural::from(63u8));
/// assert_eq!(transform::b(19, 2, 0).unwrap(), transform::j(19, 2).unwrap());
/// ```
pub fn b<V: Integral, B: Integral, P: Integral>(value: V, base: B, power: P) -> Result<Natural> {
    let value = Natural::new(value)?;
    let base = Natural::new(base)?;
    let power = Natural::new(power)?;
    b_of(&value, &base, &power)
}
