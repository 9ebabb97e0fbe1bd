//! Transforms bound to a base.

use crate::core::error::Result;
use crate::core::natural::Natural;
use crate::core::validate::Integral;
use crate::transform::Transform;

/// A base, and a default B power, held for repeated transform calls.
///
/// Each call coerces its value and delegates to the transform functions;
/// the transformer keeps no other state.
///
/// # Example
///
/// ```
/// use jukebox::{Natural, Transform, Transformer};
///
/// let t = Transformer::new(2).unwrap();
/// assert_eq!(t.j(19).unwrap(), Natural::from(11u8));
/// assert_eq!(t.k(19).unwrap(), Natural::from(22u8));
/// // The default power is 1, so B matches K until told otherwise.
/// assert_eq!(t.b(19, None::<u8>).unwrap(), t.k(19).unwrap());
/// assert_eq!(t.apply(Transform::B, 19).unwrap(), Natural::from(22u8));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transformer {
    base: Natural,
    power: Natural,
}

impl Transformer {
    /// A transformer for `base`, with a default B power of 1.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`](crate::Error::TypeMismatch) or
    /// [`Error::Negative`](crate::Error::Negative) if `base` is not a natural.
    pub fn new<B: Integral>(base: B) -> Result<Self> {
        Ok(Self {
            base: Natural::new(base)?,
            power: Natural::from(1u8),
        })
    }

    /// Replaces the default B power.
    ///
    /// # Errors
    ///
    /// Fails if `power` is not a natural.
    pub fn with_power<P: Integral>(mut self, power: P) -> Result<Self> {
        self.power = Natural::new(power)?;
        Ok(self)
    }

    /// The bound base.
    #[inline]
    #[must_use]
    pub fn base(&self) -> &Natural {
        &self.base
    }

    /// The default B power.
    #[inline]
    #[must_use]
    pub fn power(&self) -> &Natural {
        &self.power
    }

    /// Moves this transformer to another base.
    ///
    /// # Errors
    ///
    /// Fails if `base` is not a natural; the old base is kept.
    pub fn rebase<B: Integral>(&mut self, base: B) -> Result<()> {
        self.base = Natural::new(base)?;
        Ok(())
    }

    /// `J` at the bound base.
    ///
    /// # Errors
    ///
    /// Fails if `value` is not a natural.
    pub fn j<V: Integral>(&self, value: V) -> Result<Natural> {
        self.apply(Transform::J, value)
    }

    /// `K` at the bound base.
    ///
    /// # Errors
    ///
    /// Fails if `value` is not a natural.
    pub fn k<V: Integral>(&self, value: V) -> Result<Natural> {
        self.apply(Transform::K, value)
    }

    /// `B` at the bound base. `None` uses the default power.
    ///
    /// # Errors
    ///
    /// Fails if `value` or `power` is not a natural, or if the power is too
    /// large to evaluate for this base.
    pub fn b<V: Integral, P: Integral>(&self, value: V, power: Option<P>) -> Result<Natural> {
        let value = Natural::new(value)?;
        let power = match power {
            Some(power) => Natural::new(power)?,
            None => self.power.clone(),
        };
        Transform::B.apply(&value, &self.base, &power)
    }

    /// Runs `transform` at the bound base, B with the default power.
    ///
    /// # Errors
    ///
    /// See [`Transformer::b`].
    pub fn apply<V: Integral>(&self, transform: Transform, value: V) -> Result<Natural> {
        let value = Natural::new(value)?;
        let power = transform.resolve_power(Some(self.power.clone()))?;
        transform.apply(&value, &self.base, &power)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;
    use crate::transform;

    #[test]
    fn test_matches_free_functions() {
        let t = Transformer::new(7).unwrap();
        for x in [0u32, 5, 19, 1907, 65_535] {
            assert_eq!(t.j(x).unwrap(), transform::j(x, 7).unwrap());
            assert_eq!(t.k(x).unwrap(), transform::k(x, 7).unwrap());
            assert_eq!(t.b(x, Some(3)).unwrap(), transform::b(x, 7, 3).unwrap());
        }
    }

    #[test]
    fn test_default_power() {
        let t = Transformer::new(3).unwrap();
        assert_eq!(t.power(), &Natural::from(1u8));
        assert_eq!(t.b(7, None::<u8>).unwrap(), transform::k(7, 3).unwrap());

        let t = t.with_power(2).unwrap();
        assert_eq!(t.b(7, None::<u8>).unwrap(), Natural::from(63u8));
        assert_eq!(t.apply(Transform::B, 7).unwrap(), Natural::from(63u8));
        // J and K keep their conventional powers
        assert_eq!(t.apply(Transform::J, 7).unwrap(), Natural::from(7u8));
        assert_eq!(t.apply(Transform::K, 7).unwrap(), Natural::from(21u8));
    }

    #[test]
    fn test_rebase() {
        let mut t = Transformer::new(2).unwrap();
        assert_eq!(t.j(19).unwrap(), Natural::from(11u8));
        t.rebase(10).unwrap();
        assert_eq!(t.base(), &Natural::from(10u8));
        assert_eq!(t.j(19).unwrap(), Natural::from(19u8));

        assert!(matches!(t.rebase(-3), Err(Error::Negative { .. })));
        assert_eq!(t.base(), &Natural::from(10u8));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Transformer::new(-1).is_err());
        assert!(Transformer::new(2).unwrap().with_power(0.5).is_err());
        let t = Transformer::new(2).unwrap();
        assert!(matches!(t.j(-19), Err(Error::Negative { .. })));
        assert!(matches!(t.b(19, Some(-1)), Err(Error::Negative { .. })));
    }
}
