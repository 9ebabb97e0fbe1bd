//! Transform sequences and their analysis.
//!
//! - [`TransformSequence`]: one run from `x_0`, with path and cycle split out
//! - [`SequenceFactory`]: builds runs with the base or `x_0` bound ahead of time
//! - [`SequenceSummary`]: owned, serializable snapshot of a run

mod factory;
mod summary;
mod trace;

pub use factory::{Fixed, Overrides, SequenceFactory};
pub use summary::SequenceSummary;
pub use trace::{TransformSequence, DEFAULT_MAX_LEN};
