//! Pre-bound sequence construction.
//!
//! A [`SequenceFactory`] fixes either the initial value or the base, and
//! optionally the transform, a B power, and the cap. Each call supplies the
//! free argument and any overrides, and the factory hands the fully
//! resolved arguments to [`TransformSequence::new`].

use num_bigint::BigInt;

use crate::core::error::{Error, Result};
use crate::core::natural::Natural;
use crate::core::validate::Integral;
use crate::transform::Transform;

use super::trace::{TransformSequence, DEFAULT_MAX_LEN};

/// Which constructor argument a factory holds constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Fixed {
    /// The factory holds `x_0`; calls vary the base.
    InitialValue,
    /// The factory holds the base; calls vary `x_0`.
    #[default]
    Base,
}

/// Per-call overrides of a factory's bound arguments.
///
/// Unset fields fall back to what the factory holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Power for a B sequence.
    pub power: Option<Natural>,
    /// Transform to run instead of the bound one.
    pub transform: Option<Transform>,
    /// Cap to use instead of the bound one. Negative values are ignored.
    pub max_len: Option<BigInt>,
}

/// Builds [`TransformSequence`]s with some arguments bound ahead of time.
///
/// # Example
///
/// ```
/// use jukebox::{Natural, SequenceFactory};
///
/// // Fix base 2 and the J transform, vary the initial value.
/// let factory = SequenceFactory::j(2, jukebox::Fixed::Base).unwrap();
/// let seq = factory.build(19).unwrap();
/// assert_eq!(seq.mu(), 2);
/// assert_eq!(seq.x_mu(), Some(&Natural::from(3u8)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceFactory {
    constant: Natural,
    fixed: Fixed,
    transform: Option<Transform>,
    power: Option<Natural>,
    max_len: Natural,
}

impl SequenceFactory {
    /// A factory holding `constant` as the argument named by `fixed`, with
    /// no transform bound and the default cap.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] or [`Error::Negative`] if `constant` is not a
    /// natural number.
    pub fn new<C: Integral>(constant: C, fixed: Fixed) -> Result<Self> {
        Ok(Self {
            constant: Natural::new(constant)?,
            fixed,
            transform: None,
            power: None,
            max_len: Natural::from(DEFAULT_MAX_LEN),
        })
    }

    /// A factory bound to the J transform.
    ///
    /// # Errors
    ///
    /// See [`SequenceFactory::new`].
    pub fn j<C: Integral>(constant: C, fixed: Fixed) -> Result<Self> {
        Ok(Self::new(constant, fixed)?.with_transform(Transform::J))
    }

    /// A factory bound to the K transform.
    ///
    /// # Errors
    ///
    /// See [`SequenceFactory::new`].
    pub fn k<C: Integral>(constant: C, fixed: Fixed) -> Result<Self> {
        Ok(Self::new(constant, fixed)?.with_transform(Transform::K))
    }

    /// A factory bound to the B transform with a default power.
    ///
    /// # Errors
    ///
    /// See [`SequenceFactory::new`]; also fails if `power` is not a natural.
    pub fn b<C: Integral, P: Integral>(constant: C, fixed: Fixed, power: P) -> Result<Self> {
        Self::new(constant, fixed)?
            .with_transform(Transform::B)
            .with_power(power)
    }

    /// Binds the transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Binds a default power for B sequences.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] or [`Error::Negative`] if `power` is not a
    /// natural number.
    pub fn with_power<P: Integral>(mut self, power: P) -> Result<Self> {
        self.power = Some(Natural::new(power)?);
        Ok(self)
    }

    /// Binds the cap.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] or [`Error::Negative`] if `max_len` is not a
    /// natural number.
    pub fn with_max_len<M: Integral>(mut self, max_len: M) -> Result<Self> {
        self.max_len = Natural::new(max_len)?;
        Ok(self)
    }

    /// The bound base, if the factory holds the base.
    #[must_use]
    pub fn base(&self) -> Option<&Natural> {
        (self.fixed == Fixed::Base).then_some(&self.constant)
    }

    /// The bound initial value, if the factory holds it.
    #[must_use]
    pub fn x_0(&self) -> Option<&Natural> {
        (self.fixed == Fixed::InitialValue).then_some(&self.constant)
    }

    /// Which argument is held constant.
    #[must_use]
    pub fn fixed(&self) -> Fixed {
        self.fixed
    }

    /// The bound transform, if any.
    #[must_use]
    pub fn transform(&self) -> Option<Transform> {
        self.transform
    }

    /// Name of the bound transform, or the empty string.
    #[must_use]
    pub fn transform_name(&self) -> &'static str {
        self.transform.map_or("", Transform::name)
    }

    /// The bound B power, if any.
    #[must_use]
    pub fn power(&self) -> Option<&Natural> {
        self.power.as_ref()
    }

    /// The bound cap.
    #[must_use]
    pub fn max_len(&self) -> &Natural {
        &self.max_len
    }

    /// Builds a sequence for the free argument using only bound values.
    ///
    /// # Errors
    ///
    /// See [`SequenceFactory::build_with`].
    pub fn build<F: Integral>(&self, free: F) -> Result<TransformSequence> {
        self.build_with(free, Overrides::default())
    }

    /// Builds a sequence for the free argument, applying `overrides`.
    ///
    /// An override transform wins over the bound one. A call-site power
    /// wins over the bound power. A negative cap override is ignored in
    /// favour of the bound cap.
    ///
    /// # Errors
    ///
    /// - [`Error::TypeMismatch`] / [`Error::Negative`] if `free` is not a natural
    /// - [`Error::InvalidTransform`] if no transform is bound or given
    /// - [`Error::MissingArgument`] for B with no power anywhere
    pub fn build_with<F: Integral>(&self, free: F, overrides: Overrides) -> Result<TransformSequence> {
        let free = Natural::new(free)?;
        let (x_0, base) = match self.fixed {
            Fixed::InitialValue => (self.constant.clone(), free),
            Fixed::Base => (free, self.constant.clone()),
        };

        let transform = match (self.transform, overrides.transform) {
            (Some(bound), Some(given)) => {
                if bound != given {
                    tracing::warn!(
                        given = %given,
                        bound = %bound,
                        "factory transform overridden by call-site transform"
                    );
                }
                given
            }
            (None, Some(given)) => given,
            (Some(bound), None) => bound,
            (None, None) => {
                return Err(Error::InvalidTransform {
                    name: "none".to_string(),
                })
            }
        };

        let power = overrides.power.or_else(|| self.power.clone());

        let max_len = match overrides.max_len {
            Some(requested) => Natural::new(&requested).unwrap_or_else(|err| {
                tracing::debug!(%err, fallback = %self.max_len, "ignoring cap override");
                self.max_len.clone()
            }),
            None => self.max_len.clone(),
        };

        TransformSequence::new(x_0, base, power, transform, max_len)
    }
}
