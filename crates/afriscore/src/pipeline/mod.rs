//! Reconciliation of indicator tables against the target population.

mod reconcile;
mod record;
mod request;

pub use reconcile::ReconciliationPipeline;
pub use record::{IndicatorSkip, ScoreOutcome, ScoreRecord, SkipReason};
pub use request::{IndicatorSpec, ScoreRequest};
