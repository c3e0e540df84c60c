//! afriscore: reconcile country indicator tables against the 54 African
//! Union member states and rescale indicators onto a common 0-100 scale.
//!
//! Scores are anchored on the *whole* reported population (every row with a
//! numeric value, wherever it is), while only rows that resolve to one of
//! the target countries are returned.
//!
//! # Core Principles
//!
//! - **Restricted output**: only allow-listed ISO3 codes ever appear in records
//! - **Non-destructive**: the source table is read, never rewritten
//! - **Independent indicators**: one bad column never aborts the others
//!
//! # Example
//!
//! ```no_run
//! use afriscore::{Scorer, ScoreRequest};
//!
//! let request = ScoreRequest::from_json(r#"{
//!     "countryColumn": "Country Name",
//!     "indicatorColumns": [
//!         {"columnName": "GDP", "indicatorId": "gdp", "normalizationType": "minmax normalisation"}
//!     ]
//! }"#).unwrap();
//!
//! let outcome = Scorer::new().score("indicators.csv", &request).unwrap();
//! for record in &outcome.records {
//!     println!("{} {} {}", record.country_code, record.indicator_id, record.score);
//! }
//! ```

pub mod country;
pub mod detection;
pub mod error;
pub mod input;
pub mod normalization;
pub mod pipeline;

mod scorer;

pub use crate::scorer::{DetectionResult, Scorer, ScorerConfig};
pub use country::{CountryMatch, CountryResolver, NameResolver, StaticResolver};
pub use detection::{ColumnDetector, DetectedColumns};
pub use error::{Result, ScoreError};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use normalization::{NormalizationEngine, NormalizationType};
pub use pipeline::{
    IndicatorSkip, IndicatorSpec, ReconciliationPipeline, ScoreOutcome, ScoreRecord, ScoreRequest,
    SkipReason,
};
