//! Scoring request schema.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};
use crate::input::DataTable;
use crate::normalization::NormalizationType;

/// One indicator column to score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSpec {
    /// Header of the source column.
    pub column_name: String,
    /// Identifier copied onto every emitted record.
    pub indicator_id: String,
    /// Rescaling strategy; absent or null means passthrough.
    #[serde(default)]
    pub normalization_type: NormalizationType,
}

impl IndicatorSpec {
    /// Create a spec with the passthrough strategy.
    pub fn new(column_name: impl Into<String>, indicator_id: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            indicator_id: indicator_id.into(),
            normalization_type: NormalizationType::None,
        }
    }

    /// Set the rescaling strategy.
    pub fn with_normalization(mut self, kind: NormalizationType) -> Self {
        self.normalization_type = kind;
        self
    }
}

/// A full scoring request: which column holds country labels and which
/// indicator columns to score, in output order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    /// Header of the column holding free-text country labels.
    pub country_column: String,
    /// Indicators to score, in output order.
    #[serde(alias = "indicators")]
    pub indicator_columns: Vec<IndicatorSpec>,
}

impl ScoreRequest {
    /// Create a request with no indicators.
    pub fn new(country_column: impl Into<String>) -> Self {
        Self {
            country_column: country_column.into(),
            indicator_columns: Vec::new(),
        }
    }

    /// Append an indicator.
    pub fn with_indicator(mut self, spec: IndicatorSpec) -> Self {
        self.indicator_columns.push(spec);
        self
    }

    /// Parse a request from JSON.
    ///
    /// Any shape problem (invalid JSON, missing or mistyped fields) is a
    /// configuration error.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ScoreError::Config(format!("Invalid request JSON: {}", e)))
    }

    /// Check the request against the table it will run on.
    pub fn validate(&self, table: &DataTable) -> Result<()> {
        if !table.has_column(&self.country_column) {
            return Err(ScoreError::Config(format!(
                "Country column '{}' not found in table",
                self.country_column
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request() {
        let json = r#"{
            "countryColumn": "Country Name",
            "indicatorColumns": [
                {"columnName": "GDP", "indicatorId": "gdp", "normalizationType": "MinMax Normalisation"},
                {"columnName": "Literacy", "indicatorId": "lit", "normalizationType": null},
                {"columnName": "Health", "indicatorId": "hlth"}
            ]
        }"#;
        let request = ScoreRequest::from_json(json).unwrap();

        assert_eq!(request.country_column, "Country Name");
        assert_eq!(request.indicator_columns.len(), 3);
        assert_eq!(
            request.indicator_columns[0].normalization_type,
            NormalizationType::MinMax
        );
        assert_eq!(
            request.indicator_columns[1].normalization_type,
            NormalizationType::None
        );
        assert_eq!(
            request.indicator_columns[2].normalization_type,
            NormalizationType::None
        );
    }

    #[test]
    fn test_indicators_alias() {
        let json = r#"{"countryColumn": "c", "indicators": []}"#;
        assert!(ScoreRequest::from_json(json).unwrap().indicator_columns.is_empty());
    }

    #[test]
    fn test_malformed_requests_are_config_errors() {
        for json in [
            "not json",
            r#"{"indicatorColumns": []}"#,
            r#"{"countryColumn": "c"}"#,
            r#"{"countryColumn": "c", "indicatorColumns": [{"columnName": "x"}]}"#,
            r#"{"countryColumn": 3, "indicatorColumns": []}"#,
        ] {
            let err = ScoreRequest::from_json(json).unwrap_err();
            assert!(matches!(err, ScoreError::Config(_)), "{json}");
        }
    }

    #[test]
    fn test_validate_country_column() {
        let table = DataTable::new(
            vec!["country".into(), "gdp".into()],
            vec![vec!["Kenya".into(), "1".into()]],
            b',',
        );

        assert!(ScoreRequest::new("country").validate(&table).is_ok());
        let err = ScoreRequest::new("Country").validate(&table).unwrap_err();
        assert!(matches!(err, ScoreError::Config(_)));
    }

    #[test]
    fn test_builder() {
        let request = ScoreRequest::new("country")
            .with_indicator(IndicatorSpec::new("gdp", "gdp").with_normalization(NormalizationType::ZScore));
        assert_eq!(request.indicator_columns[0].normalization_type, NormalizationType::ZScore);
    }
}
