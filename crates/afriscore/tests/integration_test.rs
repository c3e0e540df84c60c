//! Integration tests for afriscore.

use std::io::Write;
use tempfile::{Builder, NamedTempFile};

use afriscore::{
    IndicatorSpec, NormalizationType, ScoreError, ScoreRequest, Scorer, SkipReason,
    StaticResolver,
};

/// Helper to create a temporary CSV file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

const WORLD_TABLE: &str = "Country Name,Country Code,GDP,Literacy,Notes\n\
                           Kenya,KEN,10,80,\n\
                           France,FRA,100,99,\n\
                           Nigeria,NGA,20,n/a,\n\
                           World,WLD,0,85,aggregate\n\
                           \"Congo, Dem. Rep.\",COD,40,70,\n";

fn request(kind: NormalizationType) -> ScoreRequest {
    ScoreRequest::new("Country Name")
        .with_indicator(IndicatorSpec::new("GDP", "gdp").with_normalization(kind))
}

// =============================================================================
// End-to-end scoring
// =============================================================================

#[test]
fn test_score_file_min_max() {
    let file = create_test_file(WORLD_TABLE);
    let outcome = Scorer::new()
        .score(file.path(), &request(NormalizationType::MinMax))
        .expect("Scoring failed");

    let got: Vec<(&str, &str, f64)> = outcome
        .records
        .iter()
        .map(|r| (r.country_code.as_str(), r.country_name.as_str(), r.score))
        .collect();
    assert_eq!(
        got,
        vec![
            ("KEN", "Kenya", 10.0),
            ("NGA", "Nigeria", 20.0),
            ("COD", "Democratic Congo", 40.0),
        ]
    );
}

#[test]
fn test_non_target_country_never_scored() {
    let file = create_test_file(WORLD_TABLE);
    for kind in NormalizationType::ALL {
        let outcome = Scorer::new().score(file.path(), &request(kind)).unwrap();
        assert!(outcome.records.iter().all(|r| r.country_code != "FRA"));
        assert!(outcome.records.iter().all(|r| afriscore::country::is_target(&r.country_code)));
    }
}

#[test]
fn test_missing_values_are_not_zero() {
    let file = create_test_file(WORLD_TABLE);
    let request = ScoreRequest::new("Country Name").with_indicator(
        IndicatorSpec::new("Literacy", "lit").with_normalization(NormalizationType::MinMax),
    );
    let outcome = Scorer::new().score(file.path(), &request).unwrap();

    // Nigeria's literacy is missing: no record rather than a zero
    let codes: Vec<&str> = outcome.records.iter().map(|r| r.country_code.as_str()).collect();
    assert_eq!(codes, vec!["KEN", "COD"]);
    // Reference is [80, 99, 85, 70]
    assert_eq!(outcome.records[0].score, 34.48);
    assert_eq!(outcome.records[1].score, 0.0);
}

#[test]
fn test_indicator_order_then_row_order() {
    let file = create_test_file(WORLD_TABLE);
    let request = ScoreRequest::new("Country Name")
        .with_indicator(IndicatorSpec::new("Literacy", "lit"))
        .with_indicator(IndicatorSpec::new("Unknown Column", "nope"))
        .with_indicator(IndicatorSpec::new("GDP", "gdp"));
    let outcome = Scorer::new().score(file.path(), &request).unwrap();

    let ids: Vec<&str> = outcome.records.iter().map(|r| r.indicator_id.as_str()).collect();
    assert_eq!(ids, vec!["lit", "lit", "gdp", "gdp", "gdp"]);
    assert_eq!(outcome.records_for("nope").count(), 0);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].reason, SkipReason::ColumnNotFound);
}

#[test]
fn test_passthrough_keeps_raw_values() {
    let file = create_test_file(WORLD_TABLE);
    let outcome = Scorer::new()
        .score(file.path(), &request(NormalizationType::None))
        .unwrap();
    let scores: Vec<f64> = outcome.records.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![10.0, 20.0, 40.0]);
}

#[test]
fn test_text_column_is_skipped() {
    let file = create_test_file(WORLD_TABLE);
    let request = ScoreRequest::new("Country Name")
        .with_indicator(IndicatorSpec::new("Notes", "notes"))
        .with_indicator(IndicatorSpec::new("GDP", "gdp"));
    let outcome = Scorer::new().score(file.path(), &request).unwrap();

    assert_eq!(outcome.records_for("notes").count(), 0);
    assert_eq!(outcome.records_for("gdp").count(), 3);
    assert_eq!(outcome.skipped[0].reason, SkipReason::NoMatchedValues);
}

#[test]
fn test_unmatched_labels_reported() {
    let file = create_test_file(WORLD_TABLE);
    let outcome = Scorer::new()
        .score(file.path(), &request(NormalizationType::MinMax))
        .unwrap();
    assert_eq!(outcome.unmatched_labels, vec!["France", "World"]);
}

// =============================================================================
// Request contract
// =============================================================================

#[test]
fn test_json_request_and_output_shape() {
    let file = create_test_file(WORLD_TABLE);
    let request = ScoreRequest::from_json(
        r#"{
            "countryColumn": "Country Name",
            "indicatorColumns": [
                {"columnName": "GDP", "indicatorId": "gdp", "normalizationType": "Quantile Transformation"}
            ]
        }"#,
    )
    .unwrap();

    let records = Scorer::new().score(file.path(), &request).unwrap().into_records();
    let json = serde_json::to_value(&records).unwrap();

    assert_eq!(json[0]["countryName"], "Kenya");
    assert_eq!(json[0]["countryCode"], "KEN");
    assert_eq!(json[0]["indicatorId"], "gdp");
    // Reference [10, 100, 20, 0, 40]: two values at or below 10
    assert_eq!(json[0]["score"], 40.0);
}

#[test]
fn test_missing_country_column_aborts() {
    let file = create_test_file(WORLD_TABLE);
    let err = Scorer::new()
        .score(file.path(), &ScoreRequest::new("Nation"))
        .unwrap_err();
    assert!(matches!(err, ScoreError::Config(_)));
    assert!(err.to_string().contains("Nation"));
}

#[test]
fn test_spreadsheet_rejected() {
    let file = Builder::new().suffix(".xlsx").tempfile().unwrap();
    let err = Scorer::new()
        .score(file.path(), &request(NormalizationType::MinMax))
        .unwrap_err();
    assert!(matches!(err, ScoreError::UnsupportedFormat(_)));
}

#[test]
fn test_missing_file() {
    let err = Scorer::new()
        .score("/nonexistent/indicators.csv", &request(NormalizationType::MinMax))
        .unwrap_err();
    assert!(matches!(err, ScoreError::Io { .. }));
}

// =============================================================================
// Ingestion
// =============================================================================

#[test]
fn test_latin1_file_with_accented_names() {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(b"pays;score\nC\xf4te d'Ivoire;3\nS\xe3o Tom\xe9 and Pr\xedncipe;5\n")
        .unwrap();

    let request = ScoreRequest::new("pays").with_indicator(IndicatorSpec::new("score", "s"));
    let outcome = Scorer::new().score(file.path(), &request).unwrap();

    let names: Vec<&str> = outcome.records.iter().map(|r| r.country_name.as_str()).collect();
    assert_eq!(names, vec!["Ivory Coast", "Sao Tome and Principe"]);
}

#[test]
fn test_detect_columns() {
    let file = create_test_file(WORLD_TABLE);
    let result = Scorer::new().detect(file.path()).unwrap();

    assert_eq!(result.source.row_count, 5);
    assert_eq!(result.source.format, "csv");
    assert!(result.columns.best_country_column().unwrap().starts_with("Country"));
    assert_eq!(result.columns.indicator_columns, vec!["GDP", "Literacy"]);
}

// =============================================================================
// Injected resolver
// =============================================================================

#[test]
fn test_stub_resolver_drives_matching() {
    let file = create_test_file("name,value\nalpha,1\nbeta,2\ngamma,3\n");
    let resolver = StaticResolver::new()
        .with_entry("alpha", "GHA")
        .with_entry("beta", "FRA")
        .with_entry("gamma", "COG");
    let request = ScoreRequest::new("name").with_indicator(
        IndicatorSpec::new("value", "v").with_normalization(NormalizationType::MinMax),
    );

    let outcome = Scorer::new()
        .with_resolver(resolver)
        .score(file.path(), &request)
        .unwrap();

    let got: Vec<(&str, f64)> = outcome
        .records
        .iter()
        .map(|r| (r.country_name.as_str(), r.score))
        .collect();
    assert_eq!(got, vec![("Ghana", 0.0), ("Congo", 100.0)]);
}
