//! Jukebox - Iterated Positional-Digit Transforms
//!
//! Jukebox studies what happens when the decimal digits of a natural number
//! are read back as the coefficients of a polynomial in some other base,
//! and the result is fed in again.
//!
//! # Transforms
//!
//! ```text
//! J_b(x)   = Σ b^i     · x[i]
//! K_b(x)   = Σ b^(i+1) · x[i]      = b   · J_b(x)
//! B_b,p(x) = Σ b^(i+p) · x[i]      = b^p · J_b(x)
//! ```
//!
//! where `x[i]` is the decimal digit of `x` in the `10^i` place. The digits
//! are always decimal; only the base they are evaluated at varies.
//!
//! # Sequences
//!
//! Iterating a transform from `x_0` either revisits a value or keeps going
//! until it hits the cap. A [`TransformSequence`] records the trace and
//! splits it into a path of length μ and a cycle of length λ:
//!
//! | Outcome | μ | λ | x_μ / x_λ |
//! |------------|--------------|--------------|-------------------|
//! | cyclic | path length | cycle length | first / last of the cycle |
//! | persistent | trace length | 0 | absent |
//!
//! # Example
//!
//! ```
//! use jukebox::{Natural, Transform, TransformSequence};
//!
//! // 19 → 11 → 3 → 3
//! let seq = TransformSequence::new(
//!     Natural::from(19u8),
//!     Natural::from(2u8),
//!     None,
//!     Transform::J,
//!     Natural::from(500u16),
//! )
//! .unwrap();
//!
//! assert_eq!(seq.mu(), 2);
//! assert_eq!(seq.lambda(), 1);
//! assert_eq!(seq.cycle(), &[Natural::from(3u8)]);
//! ```
//!
//! # Exact Arithmetic
//!
//! Every value is a [`Natural`]: an immutable, unbounded non-negative
//! integer with its decimal digits cached. Nothing is ever truncated, and
//! any operation that would leave the naturals is an [`Error`].
//!
//! ```
//! use jukebox::{Error, Natural};
//!
//! let n = Natural::from(1907u16);
//! assert_eq!(n.digits(), &[7, 0, 9, 1]);
//! assert_eq!(n.digital_root(), 8);
//! assert!(matches!(n.sub(2000), Err(Error::Negative { .. })));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

// Core data types (error, validate, natural, ops)
mod core;

// J, K, B and the selector
pub mod transform;

// Transform sequences, summaries and factories
pub mod sequence;

// Base-bound transform wrapper
mod transformer;

// Re-export submodules for external access
pub use self::core::validate;

// Re-export core types at crate root
pub use self::core::error::{Error, Result};
pub use self::core::natural::Natural;
pub use self::core::ops::MAX_RESULT_BITS;
pub use self::core::validate::Integral;

pub use sequence::{
    Fixed, Overrides, SequenceFactory, SequenceSummary, TransformSequence, DEFAULT_MAX_LEN,
};
pub use transform::Transform;
pub use transformer::Transformer;

/// Prelude module for convenient imports.
///
/// ```
/// use jukebox::prelude::*;
///
/// let seq = TransformSequence::j(Natural::from(19u8), Natural::from(2u8), Natural::from(DEFAULT_MAX_LEN)).unwrap();
/// assert_eq!(seq.transform(), Transform::J);
/// ```
pub mod prelude {
    // Values and errors
    pub use crate::core::error::{Error, Result};
    pub use crate::core::natural::Natural;
    pub use crate::core::validate::Integral;

    // Transforms
    pub use crate::transform::Transform;
    pub use crate::transformer::Transformer;

    // Sequences
    pub use crate::sequence::{
        Fixed, Overrides, SequenceFactory, SequenceSummary, TransformSequence, DEFAULT_MAX_LEN,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u64) -> Natural {
        Natural::from(v)
    }

    #[test]
    fn test_j_transform_base_two() {
        assert_eq!(transform::j(19, 2).unwrap(), n(11));
        assert_eq!(transform::j(11, 2).unwrap(), n(3));
        assert_eq!(transform::j(3, 2).unwrap(), n(3));
    }

    #[test]
    fn test_j_base_ten_identity() {
        for v in [0u64, 5, 42, 1907, 8_675_309] {
            assert_eq!(transform::j(v, 10).unwrap(), n(v));
        }
    }

    #[test]
    fn test_rejects_negative_value() {
        assert!(matches!(transform::j(-5, 2), Err(Error::Negative { .. })));
    }

    #[test]
    fn test_k_b_relations() {
        for base in [2u64, 3, 7, 10] {
            let j = transform::j(1234, base).unwrap();
            let k = transform::k(1234, base).unwrap();
            assert_eq!(k, j.mul(base).unwrap());
            assert_eq!(transform::b(1234, base, 0).unwrap(), j);
            assert_eq!(transform::b(1234, base, 1).unwrap(), k);
        }
    }

    #[test]
    fn test_sequence_base_two() {
        let seq = TransformSequence::j(n(19), n(2), n(DEFAULT_MAX_LEN as u64)).unwrap();
        assert_eq!(seq.full_sequence(), &[n(19), n(11), n(3)]);
        assert_eq!((seq.mu(), seq.lambda()), (2, 1));
        assert_eq!(seq.x_mu(), Some(&n(3)));
        assert_eq!(seq.x_lambda(), Some(&n(3)));
        assert_eq!(seq.path(), &[n(19), n(11)]);
        assert_eq!(seq.cycle(), &[n(3)]);
    }

    #[test]
    fn test_sequence_zero_cap() {
        let seq = TransformSequence::j(n(19), n(2), n(0)).unwrap();
        assert!(seq.full_sequence().is_empty());
        assert_eq!((seq.mu(), seq.lambda()), (0, 0));
        assert!(seq.is_persistent());
    }

    #[test]
    fn test_digital_root() {
        assert_eq!(n(0).digital_root(), 0);
        assert_eq!(n(9).digital_root(), 0);
        assert_eq!(n(19).digital_root(), 1);
    }

    #[test]
    fn test_invalid_transform_name() {
        assert!(matches!(
            "X".parse::<Transform>(),
            Err(Error::InvalidTransform { .. })
        ));
    }
}
