//! Pipeline output types.

use serde::{Deserialize, Serialize};

/// One scored (country, indicator) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    /// Canonical display name from the allow-list.
    pub country_name: String,
    /// ISO3 code from the allow-list.
    pub country_code: String,
    /// Identifier from the indicator spec.
    pub indicator_id: String,
    /// Rescaled value, rounded to two decimals.
    pub score: f64,
}

/// Why an indicator produced no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The column is not in the table.
    ColumnNotFound,
    /// No matched row has a numeric value in the column.
    NoMatchedValues,
    /// The column has no numeric values at all.
    NoReferenceValues,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::ColumnNotFound => write!(f, "column not found"),
            SkipReason::NoMatchedValues => write!(f, "no numeric values for matched countries"),
            SkipReason::NoReferenceValues => write!(f, "no numeric values in column"),
        }
    }
}

/// An indicator left out of the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSkip {
    pub indicator_id: String,
    pub column_name: String,
    pub reason: SkipReason,
}

/// Records plus diagnostics for one pipeline run.
///
/// `records` alone is the compatible output; the other fields are additive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreOutcome {
    /// Scored records, indicator order first, then row order.
    pub records: Vec<ScoreRecord>,
    /// Indicators that produced no records.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<IndicatorSkip>,
    /// Distinct country labels that did not resolve to a target country,
    /// in first-seen order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unmatched_labels: Vec<String>,
}

impl ScoreOutcome {
    /// Records for one indicator, in row order.
    pub fn records_for<'a>(&'a self, indicator_id: &'a str) -> impl Iterator<Item = &'a ScoreRecord> {
        self.records
            .iter()
            .filter(move |r| r.indicator_id == indicator_id)
    }

    /// Whether every requested indicator produced records.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Drop diagnostics, keeping the compatible record list.
    pub fn into_records(self) -> Vec<ScoreRecord> {
        self.records
    }
}
