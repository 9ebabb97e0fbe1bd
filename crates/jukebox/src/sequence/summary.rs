//! Human-readable and serializable renderings of a sequence.

use core::fmt;
use core::fmt::Write as _;

use crate::core::natural::Natural;
use crate::transform::Transform;

use super::trace::TransformSequence;

/// Placeholder printed for an absent `x_μ` / `x_λ`.
const ABSENT: &str = "-";

fn braced(values: &[Natural]) -> String {
    let inner: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("{{{}}}", inner.join(", "))
}

fn or_absent(value: Option<&Natural>) -> String {
    value.map_or_else(|| ABSENT.to_string(), ToString::to_string)
}

impl TransformSequence {
    /// Multi-line description of this sequence.
    ///
    /// ```text
    /// Transform: J
    ///
    /// Base: 2
    ///
    /// x_0: 19
    /// x_μ: 3
    /// x_λ: 3
    ///
    /// μ: 2
    /// λ: 1
    ///
    /// Path: {19, 11}
    /// Cycle: {3}
    /// ```
    ///
    /// B sequences add a `Power:` line under the base. Absent `x_μ` and
    /// `x_λ` print as `-`.
    #[must_use]
    pub fn info(&self, include_path: bool, include_cycle: bool) -> String {
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "Transform: {}", self.transform_name());
        let _ = writeln!(out);
        let _ = writeln!(out, "Base: {}", self.base());
        if self.transform() == Transform::B {
            let _ = writeln!(out, "Power: {}", self.power());
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "x_0: {}", self.x_0());
        let _ = writeln!(out, "x_\u{03BC}: {}", or_absent(self.x_mu()));
        let _ = writeln!(out, "x_\u{03BB}: {}", or_absent(self.x_lambda()));
        let _ = writeln!(out);
        let _ = writeln!(out, "\u{03BC}: {}", self.mu());
        let _ = writeln!(out, "\u{03BB}: {}", self.lambda());

        if include_path {
            let _ = write!(out, "\nPath: {}", braced(self.path()));
        }
        if include_cycle {
            let _ = write!(out, "\nCycle: {}", braced(self.cycle()));
        }

        out
    }

    /// A detached snapshot suitable for serialization.
    #[must_use]
    pub fn summary(&self) -> SequenceSummary {
        SequenceSummary::from(self)
    }
}

impl fmt::Display for TransformSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info(true, true))
    }
}

/// Owned snapshot of a [`TransformSequence`].
///
/// With the `serde` feature this serializes to JSON with naturals rendered
/// as decimal strings, so arbitrarily large values survive the trip.
///
/// # Example
///
/// ```
/// use jukebox::{Natural, TransformSequence};
///
/// let seq = TransformSequence::j(19u8.into(), 2u8.into(), 500u16.into()).unwrap();
/// let summary = seq.summary();
/// assert_eq!(summary.mu, 2);
/// assert_eq!(summary.cycle, vec![Natural::from(3u8)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SequenceSummary {
    /// Transform tag.
    pub transform: Transform,
    /// Base.
    pub base: Natural,
    /// Power the transform ran with.
    pub power: Natural,
    /// Initial value.
    pub x_0: Natural,
    /// First value of the cycle.
    pub x_mu: Option<Natural>,
    /// Last value before the repeat.
    pub x_lambda: Option<Natural>,
    /// Path length.
    pub mu: usize,
    /// Cycle length.
    pub lambda: usize,
    /// Whether a cycle was found.
    pub cyclic: bool,
    /// Values before the cycle.
    pub path: Vec<Natural>,
    /// The repeating block.
    pub cycle: Vec<Natural>,
}

impl From<&TransformSequence> for SequenceSummary {
    fn from(seq: &TransformSequence) -> Self {
        Self {
            transform: seq.transform(),
            base: seq.base().clone(),
            power: seq.power().clone(),
            x_0: seq.x_0().clone(),
            x_mu: seq.x_mu().cloned(),
            x_lambda: seq.x_lambda().cloned(),
            mu: seq.mu(),
            lambda: seq.lambda(),
            cyclic: seq.is_cyclic(),
            path: seq.path().to_vec(),
            cycle: seq.cycle().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u64) -> Natural {
        Natural::from(v)
    }

    #[test]
    fn test_info_cyclic() {
        let seq = TransformSequence::j(n(19), n(2), n(500)).unwrap();
        let expected = "Transform: J\n\nBase: 2\n\nx_0: 19\nx_\u{3bc}: 3\nx_\u{3bb}: 3\n\n\u{3bc}: 2\n\u{3bb}: 1\n\nPath: {19, 11}\nCycle: {3}";
        assert_eq!(seq.info(true, true), expected);
        assert_eq!(seq.to_string(), expected);
    }

    #[test]
    fn test_info_persistent_without_lists() {
        let seq = TransformSequence::k(n(19), n(11), n(2)).unwrap();
        let info = seq.info(false, false);
        assert!(info.contains("x_\u{3bc}: -\n"));
        assert!(info.contains("x_\u{3bb}: -\n"));
        assert!(info.ends_with("\u{3bb}: 0\n"));
        assert!(!info.contains("Path"));
        assert!(!info.contains("Cycle"));
    }

    #[test]
    fn test_info_b_lists_power() {
        let seq = TransformSequence::b(n(7), n(3), n(2), n(3)).unwrap();
        assert!(seq.info(false, false).contains("Base: 3\nPower: 2\n"));
    }

    #[test]
    fn test_empty_lists_render_as_braces() {
        let seq = TransformSequence::j(n(5), n(10), n(500)).unwrap();
        let info = seq.info(true, true);
        assert!(info.ends_with("Path: {}\nCycle: {5}"));
    }

    #[test]
    fn test_summary_snapshot() {
        let seq = TransformSequence::j(n(19), n(2), n(500)).unwrap();
        let summary = seq.summary();
        assert_eq!(summary.transform, Transform::J);
        assert_eq!(summary.x_mu, Some(n(3)));
        assert_eq!(summary.path, vec![n(19), n(11)]);
        assert!(summary.cyclic);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_summary_json() {
        let seq = TransformSequence::j(n(19), n(2), n(500)).unwrap();
        let json = serde_json::to_value(seq.summary()).unwrap();
        assert_eq!(json["transform"], "J");
        assert_eq!(json["x_mu"], "3");
        assert_eq!(json["mu"], 2);
        assert_eq!(json["path"], serde_json::json!(["19", "11"]));

        let persistent = TransformSequence::k(n(19), n(11), n(1)).unwrap();
        let json = serde_json::to_value(persistent.summary()).unwrap();
        assert!(json["x_mu"].is_null());
    }
}
