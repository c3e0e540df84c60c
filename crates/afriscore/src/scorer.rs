//! Main Scorer struct and public API.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::country::{CountryResolver, NameResolver};
use crate::detection::{ColumnDetector, DetectedColumns};
use crate::error::Result;
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::normalization::NormalizationEngine;
use crate::pipeline::{ReconciliationPipeline, ScoreOutcome, ScoreRequest};

/// Configuration for a [`Scorer`].
#[derive(Debug, Clone, Default)]
pub struct ScorerConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
}

/// Result of inspecting a data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Suggested column roles.
    pub columns: DetectedColumns,
}

/// Loads indicator tables and scores them against the target population.
///
/// Holds no per-request state; one instance can serve many requests.
pub struct Scorer {
    parser: Parser,
    detector: ColumnDetector,
    resolver: CountryResolver,
    pipeline: ReconciliationPipeline,
}

impl Scorer {
    /// Create a scorer with default configuration and the built-in resolver.
    pub fn new() -> Self {
        Self::with_config(ScorerConfig::default())
    }

    /// Create a scorer with custom configuration.
    pub fn with_config(config: ScorerConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser),
            detector: ColumnDetector::new(),
            resolver: CountryResolver::builtin(),
            pipeline: ReconciliationPipeline::with_engine(NormalizationEngine::new()),
        }
    }

    /// Replace the free-text country resolution capability.
    pub fn with_resolver(mut self, resolver: impl NameResolver + 'static) -> Self {
        self.resolver = CountryResolver::new(Arc::new(resolver));
        self
    }

    /// Use an already shared resolution capability.
    pub fn with_shared_resolver(mut self, resolver: Arc<dyn NameResolver>) -> Self {
        self.resolver = CountryResolver::new(resolver);
        self
    }

    /// Load a file and suggest which columns to use.
    pub fn detect(&self, path: impl AsRef<Path>) -> Result<DetectionResult> {
        let (table, source) = self.parser.parse_file(path)?;
        let columns = self.detector.detect(&table);
        Ok(DetectionResult { source, columns })
    }

    /// Load a file and score it.
    pub fn score(&self, path: impl AsRef<Path>, request: &ScoreRequest) -> Result<ScoreOutcome> {
        let (table, _source) = self.parser.parse_file(path)?;
        self.score_table(&table, request)
    }

    /// Score an in-memory table.
    ///
    /// Fails only if the country column is missing; indicator problems are
    /// reported in the outcome instead.
    pub fn score_table(&self, table: &DataTable, request: &ScoreRequest) -> Result<ScoreOutcome> {
        request.validate(table)?;

        let country_index = table
            .column_index(&request.country_column)
            .unwrap_or_default();

        // Rows without a country label take no part in scoring at all
        let labelled = table.filter_rows(|row| {
            row.get(country_index)
                .is_some_and(|label| !DataTable::is_null_value(label))
        });
        let dropped = table.row_count() - labelled.row_count();
        if dropped > 0 {
            tracing::debug!(dropped, "dropped rows with no country label");
        }

        let matches = self
            .resolver
            .resolve_column(labelled.column_values(country_index));
        let matched = matches.iter().filter(|m| m.is_matched()).count();
        tracing::debug!(
            rows = labelled.row_count(),
            matched,
            resolver = self.resolver.resolver_name(),
            "resolved country labels"
        );

        Ok(self.pipeline.run_with_diagnostics(
            &labelled,
            &request.country_column,
            &request.indicator_columns,
            &matches,
        ))
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}
