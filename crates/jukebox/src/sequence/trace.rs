//! Iterated transform application with path/cycle accounting.

use std::collections::HashMap;

use num_bigint::BigUint;

use crate::core::error::Result;
use crate::core::natural::Natural;
use crate::core::validate::{ensure_index, Integral};
use crate::transform::Transform;

/// Cap on the trace length used when the caller does not choose one.
pub const DEFAULT_MAX_LEN: usize = 500;

/// One run of a transform from an initial value until the first repeat or
/// until the trace holds `max_len` values.
///
/// The trace is built once, at construction, and is read-only afterwards.
///
/// ```text
/// x_0 → x_1 → … → x_(μ-1) → x_μ → … → x_(μ+λ-1) ─┐
///                           ▲                    │
///                           └────────────────────┘
/// ```
///
/// # Example
///
/// ```
/// use jukebox::{Natural, Transform, TransformSequence};
///
/// let seq = TransformSequence::with_default_cap(
///     Natural::from(19u8),
///     Natural::from(2u8),
///     None,
///     Transform::J,
/// )
/// .unwrap();
///
/// // 19 → 11 → 3 → 3
/// assert!(seq.is_cyclic());
/// assert_eq!(seq.mu(), 2);
/// assert_eq!(seq.lambda(), 1);
/// assert_eq!(seq.x_mu(), Some(&Natural::from(3u8)));
/// assert_eq!(seq.path(), &[Natural::from(19u8), Natural::from(11u8)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformSequence {
    x_0: Natural,
    base: Natural,
    power: Natural,
    transform: Transform,
    max_len: Natural,
    trace: Vec<Natural>,
    mu: usize,
    lambda: usize,
    cyclic: bool,
}

impl TransformSequence {
    /// Runs `transform` from `x_0` and records the resulting trace.
    ///
    /// `power` is required for [`Transform::B`] and ignored otherwise (J runs
    /// with power 0, K with power 1). `max_len = 0` yields an empty,
    /// persistent sequence.
    ///
    /// # Errors
    ///
    /// [`Error::MissingArgument`](crate::Error::MissingArgument) for B
    /// without a power, and [`Error::OutOfRange`](crate::Error::OutOfRange)
    /// if a B power is too large to evaluate for `base`.
    pub fn new(
        x_0: Natural,
        base: Natural,
        power: Option<Natural>,
        transform: Transform,
        max_len: Natural,
    ) -> Result<Self> {
        let power = transform.resolve_power(power)?;
        let cap = max_len.to_usize().unwrap_or(usize::MAX);

        let mut trace = Vec::new();
        // value -> index of its first occurrence in the trace
        let mut first_seen: HashMap<BigUint, usize> = HashMap::new();
        let mut current = x_0.clone();

        let repeat = loop {
            if let Some(&index) = first_seen.get(current.magnitude()) {
                break Some(index);
            }
            if trace.len() >= cap {
                break None;
            }

            let next = transform.apply(&current, &base, &power)?;
            tracing::trace!(step = trace.len(), value = %current, next = %next, "transform step");

            first_seen.insert(current.magnitude().clone(), trace.len());
            trace.push(current);
            current = next;
        };

        let (mu, cyclic) = match repeat {
            Some(index) => (index, true),
            None => (trace.len(), false),
        };
        let lambda = trace.len() - mu;

        tracing::debug!(
            transform = %transform,
            base = %base,
            x_0 = %x_0,
            mu,
            lambda,
            cyclic,
            "sequence built"
        );

        Ok(Self {
            x_0,
            base,
            power,
            transform,
            max_len,
            trace,
            mu,
            lambda,
            cyclic,
        })
    }

    /// [`TransformSequence::new`] with a cap of [`DEFAULT_MAX_LEN`].
    ///
    /// # Errors
    ///
    /// See [`TransformSequence::new`].
    pub fn with_default_cap(
        x_0: Natural,
        base: Natural,
        power: Option<Natural>,
        transform: Transform,
    ) -> Result<Self> {
        Self::new(x_0, base, power, transform, Natural::from(DEFAULT_MAX_LEN))
    }

    /// A J sequence.
    ///
    /// # Errors
    ///
    /// Never fails for J; the `Result` keeps the constructors uniform.
    pub fn j(x_0: Natural, base: Natural, max_len: Natural) -> Result<Self> {
        Self::new(x_0, base, None, Transform::J, max_len)
    }

    /// A K sequence.
    ///
    /// # Errors
    ///
    /// Never fails for K; the `Result` keeps the constructors uniform.
    pub fn k(x_0: Natural, base: Natural, max_len: Natural) -> Result<Self> {
        Self::new(x_0, base, None, Transform::K, max_len)
    }

    /// A B sequence with the given power.
    ///
    /// # Errors
    ///
    /// See [`TransformSequence::new`].
    pub fn b(x_0: Natural, base: Natural, power: Natural, max_len: Natural) -> Result<Self> {
        Self::new(x_0, base, Some(power), Transform::B, max_len)
    }

    /// The initial value.
    #[inline]
    #[must_use]
    pub fn x_0(&self) -> &Natural {
        &self.x_0
    }

    /// The base the transform evaluates digits at.
    #[inline]
    #[must_use]
    pub fn base(&self) -> &Natural {
        &self.base
    }

    /// The power the transform ran with (0 for J, 1 for K).
    #[inline]
    #[must_use]
    pub fn power(&self) -> &Natural {
        &self.power
    }

    /// The transform tag.
    #[inline]
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Display name of the transform.
    #[inline]
    #[must_use]
    pub fn transform_name(&self) -> &'static str {
        self.transform.name()
    }

    /// The cap the trace was built under.
    #[inline]
    #[must_use]
    pub fn max_len(&self) -> &Natural {
        &self.max_len
    }

    /// Every visited value, in order.
    #[inline]
    #[must_use]
    pub fn full_sequence(&self) -> &[Natural] {
        &self.trace
    }

    /// The values strictly before the cycle.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &[Natural] {
        &self.trace[..self.mu]
    }

    /// The repeating block, empty if no cycle was found.
    #[inline]
    #[must_use]
    pub fn cycle(&self) -> &[Natural] {
        &self.trace[self.mu..]
    }

    /// Length of the path (μ). Equals the trace length when persistent.
    #[inline]
    #[must_use]
    pub fn mu(&self) -> usize {
        self.mu
    }

    /// Length of the cycle (λ). Zero when persistent.
    #[inline]
    #[must_use]
    pub fn lambda(&self) -> usize {
        self.lambda
    }

    /// The first value of the cycle, the one whose repeat stopped the run.
    #[inline]
    #[must_use]
    pub fn x_mu(&self) -> Option<&Natural> {
        if self.cyclic {
            self.trace.get(self.mu)
        } else {
            None
        }
    }

    /// The last value produced before the repeat.
    #[inline]
    #[must_use]
    pub fn x_lambda(&self) -> Option<&Natural> {
        if self.cyclic {
            self.trace.last()
        } else {
            None
        }
    }

    /// Returns true if the run ended on a repeat.
    #[inline]
    #[must_use]
    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    /// Returns true if the run hit the cap without repeating.
    #[inline]
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        !self.cyclic
    }

    /// Number of values in the trace.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    /// Returns true if the trace is empty (only when `max_len` is 0).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// The trace value at `index`; negative indices count from the end.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`](crate::Error::TypeMismatch) for a
    /// non-integral index and
    /// [`Error::IndexOutOfBounds`](crate::Error::IndexOutOfBounds) outside
    /// `[-len, len)`.
    pub fn get<I: Integral>(&self, index: I) -> Result<&Natural> {
        let offset = ensure_index(&index, self.trace.len())?;
        Ok(&self.trace[offset])
    }

    /// Returns true if `value` was visited.
    #[must_use]
    pub fn contains(&self, value: &Natural) -> bool {
        self.trace.contains(value)
    }

    /// Iterates over the trace in visiting order. Double-ended.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Natural> {
        self.trace.iter()
    }
}

impl<'a> IntoIterator for &'a TransformSequence {
    type Item = &'a Natural;
    type IntoIter = core::slice::Iter<'a, Natural>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;

    fn n(v: u64) -> Natural {
        Natural::from(v)
    }

    fn naturals(values: &[u64]) -> Vec<Natural> {
        values.iter().map(|&v| n(v)).collect()
    }

    #[test]
    fn test_base_two_from_nineteen() {
        let seq = TransformSequence::j(n(19), n(2), n(500)).unwrap();
        assert_eq!(seq.full_sequence(), naturals(&[19, 11, 3]).as_slice());
        assert_eq!(seq.mu(), 2);
        assert_eq!(seq.lambda(), 1);
        assert_eq!(seq.x_mu(), Some(&n(3)));
        assert_eq!(seq.x_lambda(), Some(&n(3)));
        assert!(seq.is_cyclic());
        assert!(!seq.is_persistent());
        assert_eq!(seq.cycle(), naturals(&[3]).as_slice());
    }

    #[test]
    fn test_base_ten_is_immediate_fixed_point() {
        for x in [0u64, 7, 19, 123_456] {
            let seq = TransformSequence::j(n(x), n(10), n(500)).unwrap();
            assert_eq!(seq.mu(), 0);
            assert_eq!(seq.lambda(), 1);
            assert_eq!(seq.x_mu(), Some(&n(x)));
            assert_eq!(seq.x_lambda(), Some(&n(x)));
            assert!(seq.path().is_empty());
        }
    }

    #[test]
    fn test_zero_cap() {
        let seq = TransformSequence::k(n(19), n(2), n(0)).unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.mu(), 0);
        assert_eq!(seq.lambda(), 0);
        assert!(!seq.is_cyclic());
        assert_eq!(seq.x_mu(), None);
        assert_eq!(seq.x_lambda(), None);
    }

    #[test]
    fn test_cap_reached_without_cycle() {
        // K in base 11 grows without bound from 19
        let seq = TransformSequence::k(n(19), n(11), n(5)).unwrap();
        assert_eq!(seq.len(), 5);
        assert!(seq.is_persistent());
        assert_eq!(seq.mu(), 5);
        assert_eq!(seq.lambda(), 0);
        assert!(seq.cycle().is_empty());
        assert_eq!(seq.path().len(), 5);
    }

    #[test]
    fn test_repeat_detected_at_cap_boundary() {
        // 19 → 11 → 3, then 3 repeats; a cap of exactly 3 still sees it.
        let seq = TransformSequence::j(n(19), n(2), n(3)).unwrap();
        assert!(seq.is_cyclic());
        assert_eq!(seq.len(), 3);

        let seq = TransformSequence::j(n(19), n(2), n(2)).unwrap();
        assert!(seq.is_persistent());
        assert_eq!(seq.full_sequence(), naturals(&[19, 11]).as_slice());
    }

    #[test]
    fn test_longer_cycle_uses_first_occurrence() {
        // Base 1 maps x to its digit sum; base 0 to its units digit.
        // J_0: 1907 → 7 → 7
        let seq = TransformSequence::j(n(1907), n(0), n(500)).unwrap();
        assert_eq!(seq.full_sequence(), naturals(&[1907, 7]).as_slice());
        assert_eq!((seq.mu(), seq.lambda()), (1, 1));

        // B_2,1 == K_2: 1 → 2 → 4 → 8 → 16 → 26 → 28 → ...
        let seq = TransformSequence::b(n(1), n(2), n(1), n(500)).unwrap();
        let k = TransformSequence::k(n(1), n(2), n(500)).unwrap();
        assert_eq!(seq.full_sequence(), k.full_sequence());
        if let Some(x_mu) = seq.x_mu() {
            let first = seq.iter().position(|v| v == x_mu);
            assert_eq!(first, Some(seq.mu()));
        }
    }

    #[test]
    fn test_b_requires_power() {
        let err = TransformSequence::new(n(7), n(3), None, Transform::B, n(10)).unwrap_err();
        assert!(matches!(err, Error::MissingArgument { transform: Transform::B, .. }));
    }

    #[test]
    fn test_power_conventions() {
        let j = TransformSequence::new(n(7), n(3), Some(n(9)), Transform::J, n(1)).unwrap();
        assert_eq!(j.power(), &n(0));
        let k = TransformSequence::new(n(7), n(3), Some(n(9)), Transform::K, n(1)).unwrap();
        assert_eq!(k.power(), &n(1));
        let b = TransformSequence::b(n(7), n(3), n(9), n(1)).unwrap();
        assert_eq!(b.power(), &n(9));
    }

    #[test]
    fn test_indexing_and_membership() {
        let seq = TransformSequence::j(n(19), n(2), n(500)).unwrap();
        assert_eq!(seq.get(0).unwrap(), &n(19));
        assert_eq!(seq.get(-1).unwrap(), &n(3));
        assert_eq!(seq.get(-3).unwrap(), &n(19));
        assert!(matches!(seq.get(3), Err(Error::IndexOutOfBounds { len: 3, .. })));
        assert!(matches!(seq.get(-4), Err(Error::IndexOutOfBounds { .. })));
        assert!(seq.contains(&n(11)));
        assert!(!seq.contains(&n(12)));

        let backwards: Vec<&Natural> = seq.iter().rev().collect();
        assert_eq!(backwards, vec![&n(3), &n(11), &n(19)]);
        assert_eq!((&seq).into_iter().count(), 3);
    }

    #[test]
    fn test_accessors_echo_inputs() {
        let seq = TransformSequence::with_default_cap(n(19), n(2), None, Transform::K).unwrap();
        assert_eq!(seq.x_0(), &n(19));
        assert_eq!(seq.base(), &n(2));
        assert_eq!(seq.transform(), Transform::K);
        assert_eq!(seq.transform_name(), "K");
        assert_eq!(seq.max_len(), &n(DEFAULT_MAX_LEN as u64));
    }
}
