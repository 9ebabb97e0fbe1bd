//! Error taxonomy shared by every fallible operation in the crate.

use num_bigint::BigInt;
use thiserror::Error;

use crate::transform::Transform;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Every way a construction or operation can be rejected.
///
/// Errors are raised at the point of construction or invocation. No
/// partially built value is ever returned alongside one.
///
/// # Example
///
/// ```
/// use jukebox::{Error, Natural};
///
/// let err = Natural::new(-3).unwrap_err();
/// assert!(matches!(err, Error::Negative { .. }));
/// assert_eq!(err.to_string(), "-3 is less than 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input has no integral representation.
    #[error("{value} is not an integral value")]
    TypeMismatch {
        /// Rendering of the rejected input.
        value: String,
    },

    /// The input is integral but below the smallest accepted value.
    #[error("{value} is less than {minimum}")]
    Negative {
        /// The rejected value.
        value: BigInt,
        /// The smallest accepted value (0, or 1 when zero is excluded).
        minimum: u8,
    },

    /// The input is zero where a nonzero value is required.
    #[error("{value} is zero")]
    Zero {
        /// The rejected value.
        value: BigInt,
    },

    /// The input lies outside a bounded interval.
    #[error("{value} is not in the range of [{lo}, {hi}{}", closing(.right_inclusive))]
    OutOfRange {
        /// The rejected value.
        value: BigInt,
        /// Left bound as given by the caller.
        lo: BigInt,
        /// Right bound as given by the caller.
        hi: BigInt,
        /// Whether `hi` itself was admissible.
        right_inclusive: bool,
    },

    /// A positional index falls outside `[-len, len)`.
    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The rejected index.
        index: BigInt,
        /// Length of the indexed sequence.
        len: usize,
    },

    /// A transform name outside `{J, K, B}`.
    #[error("`{name}` is not a transform; options are J, K, or B")]
    InvalidTransform {
        /// The rejected name.
        name: String,
    },

    /// A required argument was omitted.
    #[error("the {transform} transform requires a `{argument}` argument")]
    MissingArgument {
        /// Transform that needs the argument.
        transform: Transform,
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// Arithmetic between a natural and an operand of an incompatible kind.
    ///
    /// Unlike [`Error::TypeMismatch`] this does not say the receiver is
    /// invalid, only that this combination is undefined. Callers may retry
    /// with a different interpretation of the operand.
    #[error("`{op}` is not supported between a natural and {operand}")]
    Unsupported {
        /// Name of the attempted operation.
        op: &'static str,
        /// Rendering of the operand.
        operand: String,
    },
}

fn closing(right_inclusive: &bool) -> char {
    if *right_inclusive {
        ']'
    } else {
        ')'
    }
}

impl Error {
    /// Returns true for the "unsupported operand" outcome of arithmetic.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}
