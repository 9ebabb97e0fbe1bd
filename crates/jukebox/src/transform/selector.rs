//! The closed choice among the three transforms.

use core::fmt;
use core::str::FromStr;

use crate::core::error::{Error, Result};
use crate::core::natural::Natural;

use super::functions::{b_of, j_of, k_of};

/// One of the J, K, B transforms.
///
/// The tag is a dispatch key only; it carries no state. J and K have a
/// conventional power of 0 and 1 respectively, while B takes its power
/// from the caller.
///
/// # Example
///
/// ```
/// use jukebox::{Natural, Transform};
///
/// let t: Transform = "k".parse().unwrap();
/// assert_eq!(t, Transform::K);
/// assert_eq!(t.name(), "K");
///
/// let x = Natural::from(19u8);
/// let base = Natural::from(2u8);
/// let p = t.resolve_power(None).unwrap();
/// assert_eq!(t.apply(&x, &base, &p).unwrap(), Natural::from(22u8));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transform {
    /// `J_b(x) = Σ b^i · x[i]`
    #[default]
    J,
    /// `K_b(x) = b · J_b(x)`
    K,
    /// `B_b,p(x) = b^p · J_b(x)`
    B,
}

impl Transform {
    /// All transforms in canonical order.
    pub const ALL: [Self; 3] = [Self::J, Self::K, Self::B];

    /// Display name of the transform.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::J => "J",
            Self::K => "K",
            Self::B => "B",
        }
    }

    /// Returns true if the caller must supply a power.
    #[inline]
    #[must_use]
    pub const fn requires_power(self) -> bool {
        matches!(self, Self::B)
    }

    /// The power fixed by convention, if any.
    ///
    /// - J: 0
    /// - K: 1
    /// - B: none, supplied by the caller
    #[must_use]
    pub fn fixed_power(self) -> Option<Natural> {
        match self {
            Self::J => Some(Natural::from(0u8)),
            Self::K => Some(Natural::from(1u8)),
            Self::B => None,
        }
    }

    /// Settles the power this transform will run with.
    ///
    /// J and K ignore `power` and use their conventional value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArgument`] for B without a power.
    pub fn resolve_power(self, power: Option<Natural>) -> Result<Natural> {
        match (self.fixed_power(), power) {
            (Some(fixed), _) => Ok(fixed),
            (None, Some(power)) => Ok(power),
            (None, None) => Err(Error::MissingArgument {
                transform: self,
                argument: "power",
            }),
        }
    }

    /// Applies this transform to `value`.
    ///
    /// `power` is read only by B.
    ///
    /// # Errors
    ///
    /// B fails with [`Error::OutOfRange`] if `power` cannot be materialised
    /// for the given base. J and K never fail.
    pub fn apply(self, value: &Natural, base: &Natural, power: &Natural) -> Result<Natural> {
        match self {
            Self::J => Ok(j_of(value, base)),
            Self::K => Ok(k_of(value, base)),
            Self::B => b_of(value, base, power),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transform {
    type Err = Error;

    /// Parses `J`, `K` or `B`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "J" | "j" => Ok(Self::J),
            "K" | "k" => Ok(Self::K),
            "B" | "b" => Ok(Self::B),
            other => Err(Error::InvalidTransform {
                name: other.to_string(),
            }),
        }
    }
}
