//! Arithmetic and bitwise operations on naturals.
//!
//! Each operation accepts any [`Integral`] operand, performs the exact
//! signed computation, and wraps the result in a fresh [`Natural`]. A
//! result below zero is rejected with [`Error::Negative`]: nothing wraps or
//! saturates.
//!
//! An operand with no integral representation yields
//! [`Error::Unsupported`], the "not defined for this combination" outcome,
//! rather than [`Error::TypeMismatch`].
//!
//! Division and modulo round toward negative infinity, so
//! `7.rem(-3)` is `-2` and therefore rejected.
//!
//! Operations whose result size depends on an operand (`shl`, `pow`, and
//! the B transform's `base^power`) refuse to build anything wider than
//! [`MAX_RESULT_BITS`] and report [`Error::OutOfRange`] instead.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::error::{Error, Result};
use super::natural::Natural;
use super::validate::{ensure_nonzero, Integral};

/// Widest result, in bits, that a shift or power will materialise.
pub const MAX_RESULT_BITS: u64 = u32::MAX as u64;

/// Largest exponent for which `base^exp` fits in [`MAX_RESULT_BITS`], or
/// `None` when every exponent does (bases 0 and 1).
fn max_exponent(base: &BigUint) -> Option<u64> {
    if *base <= BigUint::one() {
        None
    } else {
        Some(MAX_RESULT_BITS / base.bits())
    }
}

/// `base^exp` for a non-negative `exp`, bounded by [`MAX_RESULT_BITS`].
pub(crate) fn checked_pow(base: &BigUint, exp: &BigInt) -> Result<BigUint> {
    let Some(limit) = max_exponent(base) else {
        // 0^0 = 1^0 = 1, and b^e = b for b <= 1, e > 0
        return Ok(if exp.is_zero() { BigUint::one() } else { base.clone() });
    };

    match exp.to_u64().filter(|&e| e <= limit).and_then(|e| u32::try_from(e).ok()) {
        Some(e) => Ok(base.pow(e)),
        None => Err(Error::OutOfRange {
            value: exp.clone(),
            lo: BigInt::zero(),
            hi: BigInt::from(limit),
            right_inclusive: true,
        }),
    }
}

/// Reads an arithmetic operand, mapping non-integral inputs to `Unsupported`.
fn operand<V: Integral>(op: &'static str, rhs: &V) -> Result<BigInt> {
    rhs.to_integer().ok_or_else(|| Error::Unsupported {
        op,
        operand: rhs.to_string(),
    })
}

/// Reads a non-negative shift count that fits in `usize`.
fn shift_count<V: Integral>(op: &'static str, rhs: &V) -> Result<usize> {
    let count = operand(op, rhs)?;
    if count.is_negative() {
        return Err(Error::Negative {
            value: count,
            minimum: 0,
        });
    }
    count.to_usize().ok_or_else(|| Error::OutOfRange {
        value: count,
        lo: BigInt::zero(),
        hi: BigInt::from(usize::MAX),
        right_inclusive: true,
    })
}

impl Natural {
    /// `self + rhs`.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] for a non-integral operand and
    /// [`Error::Negative`] if the sum is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use jukebox::Natural;
    ///
    /// let n = Natural::from(5u8);
    /// assert_eq!(n.add(3).unwrap(), Natural::from(8u8));
    /// assert_eq!(n.add(-5).unwrap(), Natural::zero());
    /// assert!(n.add(-6).is_err());
    /// assert!(n.add(0.5).unwrap_err().is_unsupported());
    /// ```
    pub fn add<V: Integral>(&self, rhs: V) -> Result<Self> {
        let rhs = operand("add", &rhs)?;
        Self::from_bigint(self.to_bigint() + rhs)
    }

    /// `self - rhs`. A negative difference is an error.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] for a non-integral operand and
    /// [`Error::Negative`] if `rhs > self`.
    ///
    /// # Example
    ///
    /// ```
    /// use jukebox::{Error, Natural};
    ///
    /// let n = Natural::from(5u8);
    /// assert_eq!(n.sub(5).unwrap(), Natural::zero());
    /// assert!(matches!(n.sub(6), Err(Error::Negative { .. })));
    /// ```
    pub fn sub<V: Integral>(&self, rhs: V) -> Result<Self> {
        let rhs = operand("sub", &rhs)?;
        Self::from_bigint(self.to_bigint() - rhs)
    }

    /// `self * rhs`.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] for a non-integral operand and
    /// [`Error::Negative`] if the product is negative.
    pub fn mul<V: Integral>(&self, rhs: V) -> Result<Self> {
        let rhs = operand("mul", &rhs)?;
        Self::from_bigint(self.to_bigint() * rhs)
    }

    /// Floored remainder `self mod rhs`.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] for a non-integral operand, [`Error::Zero`]
    /// when `rhs` is zero, and [`Error::Negative`] for a negative divisor
    /// with a nonzero remainder.
    ///
    /// # Example
    ///
    /// ```
    /// use jukebox::Natural;
    ///
    /// let n = Natural::from(7u8);
    /// assert_eq!(n.rem(3).unwrap(), Natural::from(1u8));
    /// assert!(n.rem(0).is_err());
    /// assert!(n.rem(-3).is_err()); // floored: -2
    /// ```
    pub fn rem<V: Integral>(&self, rhs: V) -> Result<Self> {
        let rhs = ensure_nonzero(&operand("rem", &rhs)?)?;
        Self::from_bigint(self.to_bigint().mod_floor(&rhs))
    }

    /// Floored quotient `self div rhs`.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] for a non-integral operand, [`Error::Zero`]
    /// when `rhs` is zero, and [`Error::Negative`] for a negative quotient.
    pub fn div_floor<V: Integral>(&self, rhs: V) -> Result<Self> {
        let rhs = ensure_nonzero(&operand("div_floor", &rhs)?)?;
        Self::from_bigint(Integer::div_floor(&self.to_bigint(), &rhs))
    }

    /// Floored quotient and remainder in one step.
    ///
    /// # Errors
    ///
    /// As [`Natural::div_floor`] and [`Natural::rem`]; fails if either part
    /// is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use jukebox::Natural;
    ///
    /// let (q, r) = Natural::from(47u8).div_rem(10).unwrap();
    /// assert_eq!((q, r), (Natural::from(4u8), Natural::from(7u8)));
    /// ```
    pub fn div_rem<V: Integral>(&self, rhs: V) -> Result<(Self, Self)> {
        let rhs = ensure_nonzero(&operand("div_rem", &rhs)?)?;
        let (q, r) = self.to_bigint().div_mod_floor(&rhs);
        Ok((Self::from_bigint(q)?, Self::from_bigint(r)?))
    }

    /// `self ^ exp`.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] for a non-integral exponent,
    /// [`Error::Negative`] for a negative one, and [`Error::OutOfRange`]
    /// when the result could exceed [`MAX_RESULT_BITS`] (never for bases 0
    /// and 1).
    ///
    /// # Example
    ///
    /// ```
    /// use jukebox::Natural;
    ///
    /// assert_eq!(Natural::from(3u8).pow(4).unwrap(), Natural::from(81u8));
    /// assert_eq!(Natural::from(9u8).pow(0).unwrap(), Natural::from(1u8));
    /// ```
    pub fn pow<V: Integral>(&self, exp: V) -> Result<Self> {
        let exp = operand("pow", &exp)?;
        if exp.is_negative() {
            return Err(Error::Negative {
                value: exp,
                minimum: 0,
            });
        }

        checked_pow(self.magnitude(), &exp).map(Self::from)
    }

    /// `self << rhs`.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] for a non-integral count, [`Error::Negative`]
    /// for a negative one, and [`Error::OutOfRange`] beyond `usize` or when
    /// the result would be wider than [`MAX_RESULT_BITS`].
    ///
    /// # Example
    ///
    /// ```
    /// use jukebox::{Error, Natural};
    ///
    /// assert_eq!(Natural::from(3u8).shl(4).unwrap(), Natural::from(48u8));
    /// assert!(Natural::from(3u8).shl(-1).is_err());
    /// assert!(matches!(Natural::from(1u8).shl(usize::MAX), Err(Error::OutOfRange { .. })));
    /// ```
    pub fn shl<V: Integral>(&self, rhs: V) -> Result<Self> {
        let count = shift_count("shl", &rhs)?;
        if self.is_zero() {
            return Ok(self.clone());
        }

        let limit = MAX_RESULT_BITS.saturating_sub(self.magnitude().bits());
        if !u64::try_from(count).is_ok_and(|c| c <= limit) {
            return Err(Error::OutOfRange {
                value: BigInt::from(count),
                lo: BigInt::zero(),
                hi: BigInt::from(limit),
                right_inclusive: true,
            });
        }
        Ok(Self::from(self.magnitude() << count))
    }

    /// `self >> rhs`.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] for a non-integral count, [`Error::Negative`]
    /// for a negative one, and [`Error::OutOfRange`] beyond `usize`.
    pub fn shr<V: Integral>(&self, rhs: V) -> Result<Self> {
        let count = shift_count("shr", &rhs)?;
        Ok(Self::from(self.magnitude() >> count))
    }

    /// Bitwise AND in two's complement.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] for a non-integral operand. The result of
    /// AND with a natural is never negative.
    ///
    /// # Example
    ///
    /// ```
    /// use jukebox::Natural;
    ///
    /// let n = Natural::from(0b1100u8);
    /// assert_eq!(n.bitand(0b1010).unwrap(), Natural::from(0b1000u8));
    /// assert_eq!(n.bitand(-1).unwrap(), n);
    /// ```
    pub fn bitand<V: Integral>(&self, rhs: V) -> Result<Self> {
        let rhs = operand("bitand", &rhs)?;
        Self::from_bigint(self.to_bigint() & rhs)
    }

    /// Bitwise OR in two's complement.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] for a non-integral operand and
    /// [`Error::Negative`] when `rhs` is negative.
    pub fn bitor<V: Integral>(&self, rhs: V) -> Result<Self> {
        let rhs = operand("bitor", &rhs)?;
        Self::from_bigint(self.to_bigint() | rhs)
    }

    /// Bitwise XOR in two's complement.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] for a non-integral operand and
    /// [`Error::Negative`] when `rhs` is negative.
    pub fn bitxor<V: Integral>(&self, rhs: V) -> Result<Self> {
        let rhs = operand("bitxor", &rhs)?;
        Self::from_bigint(self.to_bigint() ^ rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u64) -> Natural {
        Natural::from(v)
    }

    #[test]
    fn test_add_sub() {
        assert_eq!(n(2).add(n(3)).unwrap(), n(5));
        assert_eq!(n(2).add(-2).unwrap(), n(0));
        assert_eq!(n(10).sub(4u8).unwrap(), n(6));
        assert_eq!(n(10).sub(-4).unwrap(), n(14));
        assert!(matches!(
            n(3).sub(4),
            Err(Error::Negative { minimum: 0, .. })
        ));
    }

    #[test]
    fn test_results_rebuild_digits() {
        let sum = n(999).add(1).unwrap();
        assert_eq!(sum.digits(), &[0, 0, 0, 1]);
        assert_eq!(sum.digit_sum(), 1);
    }

    #[test]
    fn test_mul() {
        assert_eq!(n(12).mul(12).unwrap(), n(144));
        assert_eq!(n(0).mul(-12).unwrap(), n(0));
        assert!(n(1).mul(-1).is_err());
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(n(5).rem(0), Err(Error::Zero { .. })));
        assert!(matches!(n(5).div_floor(0u8), Err(Error::Zero { .. })));
        assert!(matches!(n(5).div_rem(0), Err(Error::Zero { .. })));
    }

    #[test]
    fn test_floored_division() {
        assert_eq!(n(47).div_floor(10).unwrap(), n(4));
        assert_eq!(n(47).rem(10).unwrap(), n(7));
        // 6 mod -3 == 0, which is a valid natural
        assert_eq!(n(6).rem(-3).unwrap(), n(0));
        assert!(n(7).div_floor(-3).is_err());
        assert!(n(7).div_rem(-3).is_err());
    }

    #[test]
    fn test_pow() {
        assert_eq!(n(2).pow(10).unwrap(), n(1024));
        assert_eq!(n(0).pow(0).unwrap(), n(1));
        assert!(matches!(n(2).pow(-1), Err(Error::Negative { .. })));

        let huge = BigInt::from(u64::MAX);
        assert_eq!(n(1).pow(&huge).unwrap(), n(1));
        assert_eq!(n(0).pow(&huge).unwrap(), n(0));
        assert!(matches!(n(2).pow(&huge), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn test_oversized_results_are_refused() {
        assert!(matches!(n(1).shl(usize::MAX), Err(Error::OutOfRange { .. })));
        assert!(matches!(n(1).shl(MAX_RESULT_BITS), Err(Error::OutOfRange { .. })));
        assert!(matches!(n(3).pow(u32::MAX), Err(Error::OutOfRange { .. })));

        // 2 has 2 bits, so 2^e is admitted up to e = MAX_RESULT_BITS / 2
        let err = n(2).pow(MAX_RESULT_BITS).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfRange {
                value: BigInt::from(MAX_RESULT_BITS),
                lo: BigInt::zero(),
                hi: BigInt::from(MAX_RESULT_BITS / 2),
                right_inclusive: true,
            }
        );

        // Zero shifts to zero however far
        assert_eq!(n(0).shl(usize::MAX).unwrap(), n(0));
        // Right shifts never grow
        assert_eq!(n(1).shr(usize::MAX).unwrap(), n(0));
    }

    #[test]
    fn test_checked_pow_small_bases() {
        let huge = BigInt::from(u64::MAX);
        assert_eq!(checked_pow(&BigUint::zero(), &BigInt::zero()).unwrap(), BigUint::one());
        assert_eq!(checked_pow(&BigUint::zero(), &huge).unwrap(), BigUint::zero());
        assert_eq!(checked_pow(&BigUint::one(), &huge).unwrap(), BigUint::one());
        assert_eq!(checked_pow(&BigUint::from(10u8), &BigInt::from(3)).unwrap(), BigUint::from(1000u16));
    }

    #[test]
    fn test_shifts() {
        assert_eq!(n(1).shl(64).unwrap(), Natural::from(BigUint::from(1u8) << 64usize));
        assert_eq!(n(1024).shr(3).unwrap(), n(128));
        assert_eq!(n(1).shr(100).unwrap(), n(0));
        assert!(matches!(n(1).shr(-2), Err(Error::Negative { .. })));
    }

    #[test]
    fn test_bitwise() {
        assert_eq!(n(0b1100).bitor(0b0011).unwrap(), n(0b1111));
        assert_eq!(n(0b1100).bitxor(0b0110).unwrap(), n(0b1010));
        assert_eq!(n(0b1100).bitand(0b0110).unwrap(), n(0b0100));
        assert!(n(1).bitor(-2).is_err());
        assert!(n(1).bitxor(-1).is_err());
    }

    #[test]
    fn test_non_integral_operand_is_unsupported() {
        let x = n(10);
        let outcomes = [
            x.add(1.0),
            x.sub(1.0),
            x.mul(1.0),
            x.rem(1.0),
            x.div_floor(1.0),
            x.pow(1.0),
            x.shl(1.0),
            x.shr(1.0),
            x.bitand(1.0),
            x.bitor(1.0),
            x.bitxor(1.0),
        ];
        for outcome in outcomes {
            assert!(outcome.unwrap_err().is_unsupported());
        }
        assert!(x.div_rem(2.5f32).unwrap_err().is_unsupported());
    }

    #[test]
    fn test_operations_do_not_mutate() {
        let x = n(42);
        let _ = x.add(1).unwrap();
        let _ = x.shl(3).unwrap();
        assert_eq!(x, n(42));
        assert_eq!(x.digits(), &[2, 4]);
    }
}
