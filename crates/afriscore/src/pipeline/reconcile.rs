//! The reconciliation pipeline: per-indicator reference/subject split and
//! rescaling.

use indexmap::IndexSet;

use crate::country::CountryMatch;
use crate::input::DataTable;
use crate::normalization::NormalizationEngine;

use super::record::{IndicatorSkip, ScoreOutcome, ScoreRecord, SkipReason};
use super::request::IndicatorSpec;

/// Values drawn from one indicator column.
struct IndicatorSample {
    /// Numeric values from every row.
    reference: Vec<f64>,
    /// Row index and value for matched rows only.
    subject: Vec<(usize, f64)>,
}

/// Scores indicator columns for the matched rows of a table.
///
/// Works on an already-resolved table: `matches[i]` is the country match
/// for row `i`. The table is only read.
#[derive(Debug, Clone, Default)]
pub struct ReconciliationPipeline {
    engine: NormalizationEngine,
}

impl ReconciliationPipeline {
    /// Create a pipeline with the default engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with a custom engine.
    pub fn with_engine(engine: NormalizationEngine) -> Self {
        Self { engine }
    }

    /// Score every indicator, returning only the records.
    ///
    /// Indicators that cannot be scored are silently left out.
    pub fn run(
        &self,
        table: &DataTable,
        country_column: &str,
        indicators: &[IndicatorSpec],
        matches: &[CountryMatch],
    ) -> Vec<ScoreRecord> {
        self.run_with_diagnostics(table, country_column, indicators, matches)
            .into_records()
    }

    /// Score every indicator and report what was left out.
    pub fn run_with_diagnostics(
        &self,
        table: &DataTable,
        country_column: &str,
        indicators: &[IndicatorSpec],
        matches: &[CountryMatch],
    ) -> ScoreOutcome {
        let mut outcome = ScoreOutcome {
            unmatched_labels: unmatched_labels(table, country_column, matches),
            ..ScoreOutcome::default()
        };

        for spec in indicators {
            match self.score_indicator(table, spec, matches) {
                Ok(records) => outcome.records.extend(records),
                Err(reason) => {
                    tracing::debug!(
                        indicator = %spec.indicator_id,
                        column = %spec.column_name,
                        %reason,
                        "skipping indicator"
                    );
                    outcome.skipped.push(IndicatorSkip {
                        indicator_id: spec.indicator_id.clone(),
                        column_name: spec.column_name.clone(),
                        reason,
                    });
                }
            }
        }

        tracing::info!(
            indicators = indicators.len(),
            records = outcome.records.len(),
            skipped = outcome.skipped.len(),
            "reconciliation complete"
        );

        outcome
    }

    /// Score one indicator, or say why it was skipped.
    fn score_indicator(
        &self,
        table: &DataTable,
        spec: &IndicatorSpec,
        matches: &[CountryMatch],
    ) -> Result<Vec<ScoreRecord>, SkipReason> {
        let sample = sample_column(table, &spec.column_name, matches)
            .ok_or(SkipReason::ColumnNotFound)?;

        if sample.subject.is_empty() {
            return Err(SkipReason::NoMatchedValues);
        }

        let subject: Vec<f64> = sample.subject.iter().map(|&(_, v)| v).collect();
        let scores = self
            .engine
            .normalize(spec.normalization_type, &subject, &sample.reference)
            .map_err(|_| SkipReason::NoReferenceValues)?;

        Ok(sample
            .subject
            .iter()
            .zip(scores)
            .filter_map(|(&(row, _), score)| {
                let CountryMatch::Matched { code, name } = matches.get(row).copied()? else {
                    return None;
                };
                Some(ScoreRecord {
                    country_name: name.to_string(),
                    country_code: code.to_string(),
                    indicator_id: spec.indicator_id.clone(),
                    score,
                })
            })
            .collect())
    }
}

/// Split a column into reference and subject values.
///
/// Returns `None` if the column is absent. Missing and non-numeric cells are
/// left out of both sets.
fn sample_column(table: &DataTable, column: &str, matches: &[CountryMatch]) -> Option<IndicatorSample> {
    let values = table.numeric_column(column)?;

    let mut reference = Vec::with_capacity(values.len());
    let mut subject = Vec::new();
    for (row, value) in values.into_iter().enumerate() {
        let Some(value) = value else {
            continue;
        };
        reference.push(value);
        if matches.get(row).is_some_and(CountryMatch::is_matched) {
            subject.push((row, value));
        }
    }

    Some(IndicatorSample { reference, subject })
}

/// Distinct labels whose rows did not match, in first-seen order.
fn unmatched_labels(table: &DataTable, country_column: &str, matches: &[CountryMatch]) -> Vec<String> {
    let Some(index) = table.column_index(country_column) else {
        return Vec::new();
    };

    let labels: IndexSet<&str> = table
        .column_values(index)
        .enumerate()
        .filter(|(row, _)| !matches.get(*row).is_some_and(CountryMatch::is_matched))
        .map(|(_, label)| label.trim())
        .filter(|label| !label.is_empty())
        .collect();

    labels.into_iter().map(str::to_string).collect()
}
