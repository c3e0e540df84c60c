//! Statistical rescaling of indicator columns onto a common 0-100 scale.
//!
//! Four reference-anchored strategies plus a passthrough. The reference set
//! is the whole reported population; the subject set is the part being
//! scored, which may be a strict subset.

mod engine;
mod stats;
mod strategy;

pub use engine::NormalizationEngine;
pub use stats::ReferenceStats;
pub use strategy::NormalizationType;
