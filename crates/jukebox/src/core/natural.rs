//! Exact natural numbers with decimal digit access.
//!
//! A [`Natural`] is an immutable non-negative integer of unbounded
//! magnitude. Its decimal expansion is computed once at construction and
//! cached, so every digit accessor is a slice read.
//!
//! # Digit Order
//!
//! Digits are stored least-significant first: `digits()[i]` is the digit in
//! the `10^i` place.
//!
//! ```text
//! 1907  →  [7, 0, 9, 1]
//! 0     →  [0]
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{ToPrimitive, Zero};

use super::error::{Error, Result};
use super::validate::{ensure_in_range, ensure_index, ensure_non_negative, Integral};

/// A non-negative arbitrary-precision integer.
///
/// # Example
///
/// ```
/// use jukebox::Natural;
///
/// let n = Natural::new(19).unwrap();
/// assert_eq!(n.digits(), &[9, 1]);
/// assert_eq!(n.digit_sum(), 10);
/// assert_eq!(n.digit_count(), 2);
/// assert_eq!(n.digit(-1).unwrap(), 1); // most significant
/// ```
#[derive(Clone)]
pub struct Natural {
    magnitude: BigUint,
    digits: Vec<u8>,
    digit_sum: u64,
}

impl Natural {
    /// Creates a natural from any integral value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if `value` is not integral and
    /// [`Error::Negative`] if it is below zero.
    ///
    /// # Example
    ///
    /// ```
    /// use jukebox::{Error, Natural};
    ///
    /// assert_eq!(Natural::new(7u8).unwrap(), Natural::from(7u32));
    /// assert!(matches!(Natural::new(-1), Err(Error::Negative { .. })));
    /// assert!(matches!(Natural::new(2.0), Err(Error::TypeMismatch { .. })));
    /// ```
    pub fn new<V: Integral>(value: V) -> Result<Self> {
        let value = ensure_non_negative(&value, true)?;
        Self::from_bigint(value)
    }

    /// Same as [`Natural::new`]; reads better at call sites that coerce.
    ///
    /// # Errors
    ///
    /// See [`Natural::new`].
    #[inline]
    pub fn of<V: Integral>(value: V) -> Result<Self> {
        Self::new(value)
    }

    /// The natural number zero.
    #[must_use]
    pub fn zero() -> Self {
        Self::from(BigUint::zero())
    }

    /// Wraps a signed integer, rejecting negatives.
    pub(crate) fn from_bigint(value: BigInt) -> Result<Self> {
        match value.to_biguint() {
            Some(magnitude) => Ok(Self::from(magnitude)),
            None => Err(Error::Negative { value, minimum: 0 }),
        }
    }

    /// The underlying magnitude.
    #[inline]
    #[must_use]
    pub fn magnitude(&self) -> &BigUint {
        &self.magnitude
    }

    /// The value as a signed big integer.
    #[inline]
    #[must_use]
    pub fn to_bigint(&self) -> BigInt {
        BigInt::from_biguint(Sign::Plus, self.magnitude.clone())
    }

    /// Returns the value as `usize` if it fits.
    #[inline]
    #[must_use]
    pub fn to_usize(&self) -> Option<usize> {
        self.magnitude.to_usize()
    }

    /// Returns true if this is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Decimal digits, least-significant first.
    ///
    /// Zero has the single digit `0`.
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of decimal digits.
    #[inline]
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Sum of the decimal digits.
    #[inline]
    #[must_use]
    pub fn digit_sum(&self) -> u64 {
        self.digit_sum
    }

    /// The value modulo 9.
    ///
    /// Nonzero multiples of 9 yield 0 here, not 9.
    ///
    /// # Example
    ///
    /// ```
    /// use jukebox::Natural;
    ///
    /// assert_eq!(Natural::from(19u32).digital_root(), 1);
    /// assert_eq!(Natural::from(18u32).digital_root(), 0);
    /// assert_eq!(Natural::zero().digital_root(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn digital_root(&self) -> u8 {
        // The digit sum is congruent to the value mod 9.
        (self.digit_sum % 9) as u8
    }

    /// The digit at `index`, counting negative indices from the
    /// most-significant end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for a non-integral index and
    /// [`Error::IndexOutOfBounds`] outside `[-digit_count, digit_count)`.
    pub fn digit<I: Integral>(&self, index: I) -> Result<u8> {
        let offset = ensure_index(&index, self.digits.len())?;
        Ok(self.digits[offset])
    }

    /// Returns true if the decimal digit `digit` appears in this number.
    ///
    /// Inputs that are not a single decimal digit are never contained.
    ///
    /// # Example
    ///
    /// ```
    /// use jukebox::Natural;
    ///
    /// let n = Natural::from(1907u32);
    /// assert!(n.contains_digit(0));
    /// assert!(!n.contains_digit(5));
    /// assert!(!n.contains_digit(19));
    /// assert!(!n.contains_digit(9.0));
    /// ```
    #[must_use]
    pub fn contains_digit<D: Integral>(&self, digit: D) -> bool {
        ensure_in_range(&digit, &0, &9, true)
            .ok()
            .and_then(|d| d.to_u8())
            .is_some_and(|d| self.digits.contains(&d))
    }

    /// Iterates over the digits, least-significant first.
    ///
    /// The iterator is double-ended: `.rev()` yields the most-significant
    /// digit first.
    #[inline]
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, u8>> {
        self.digits.iter().copied()
    }

    /// Returns true if `f` maps this number to itself.
    ///
    /// # Example
    ///
    /// ```
    /// use jukebox::{transform, Natural};
    ///
    /// let n = Natural::from(4321u32);
    /// assert!(n.is_fixed_point_of(|x| transform::j(x, 10u8).unwrap()));
    /// assert!(!n.is_fixed_point_of(|x| transform::j(x, 2u8).unwrap()));
    /// ```
    pub fn is_fixed_point_of<F>(&self, f: F) -> bool
    where
        F: FnOnce(&Self) -> Self,
    {
        f(self) == *self
    }
}

impl From<BigUint> for Natural {
    fn from(magnitude: BigUint) -> Self {
        let digits = magnitude.to_radix_le(10);
        let digits = if digits.is_empty() { vec![0] } else { digits };
        let digit_sum = digits.iter().map(|&d| u64::from(d)).sum();

        Self {
            magnitude,
            digits,
            digit_sum,
        }
    }
}

macro_rules! natural_from_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Natural {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::from(BigUint::from(value))
                }
            }
        )*
    };
}

natural_from_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! natural_try_from_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl TryFrom<$t> for Natural {
                type Error = Error;

                #[inline]
                fn try_from(value: $t) -> Result<Self> {
                    Self::new(value)
                }
            }
        )*
    };
}

natural_try_from_signed!(i8, i16, i32, i64, i128, isize, BigInt);

impl From<Natural> for BigUint {
    fn from(n: Natural) -> Self {
        n.magnitude
    }
}

impl From<Natural> for BigInt {
    fn from(n: Natural) -> Self {
        BigInt::from(n.magnitude)
    }
}

impl Integral for Natural {
    #[inline]
    fn to_integer(&self) -> Option<BigInt> {
        Some(self.to_bigint())
    }
}

impl FromStr for Natural {
    type Err = Error;

    /// Parses plain decimal text: ASCII digits with an optional leading
    /// `-`, which only ever yields [`Error::Negative`] (or zero for `-0`).
    /// Surrounding whitespace is ignored. Signs such as `+`, digit
    /// separators such as `_`, and radix prefixes are rejected.
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let body = text.strip_prefix('-').unwrap_or(text);
        let mismatch = || Error::TypeMismatch {
            value: s.to_string(),
        };

        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(mismatch());
        }
        let value = BigInt::from_str(text).map_err(|_| mismatch())?;
        Self::new(value)
    }
}

impl PartialEq for Natural {
    fn eq(&self, other: &Self) -> bool {
        self.magnitude == other.magnitude
    }
}

impl Eq for Natural {}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Natural {
    fn cmp(&self, other: &Self) -> Ordering {
        self.magnitude.cmp(&other.magnitude)
    }
}

impl Hash for Natural {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.magnitude.hash(state);
    }
}

impl Default for Natural {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.magnitude, f)
    }
}

impl fmt::Debug for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Natural({})", self.magnitude)
    }
}

impl<'a> IntoIterator for &'a Natural {
    type Item = u8;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Natural {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&self.magnitude)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Natural {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Rebuilds an integer from least-significant-first decimal digits.
///
/// Only used to check digit expansions; not part of the public surface.
#[cfg(test)]
pub(crate) fn from_digits(digits: &[u8]) -> BigUint {
    digits
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, &d| acc * 10u32 + u32::from(d))
}
