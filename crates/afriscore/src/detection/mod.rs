//! Guessing which columns hold country labels and which hold indicators.

use rapidfuzz::fuzz;
use serde::{Deserialize, Serialize};

use crate::input::DataTable;

/// Column roles suggested for a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedColumns {
    /// Every header, most country-like first.
    pub country_columns: Vec<String>,
    /// Numeric headers that do not look like ids, years or ranks.
    pub indicator_columns: Vec<String>,
}

impl DetectedColumns {
    /// The most likely country column, if the table has any columns.
    pub fn best_country_column(&self) -> Option<&str> {
        self.country_columns.first().map(String::as_str)
    }
}

/// Suggests column roles from header names and cell contents.
pub struct ColumnDetector {
    /// Word the country column header is compared against.
    country_keyword: String,
    /// Header fragments that disqualify a numeric column as an indicator.
    excluded_fragments: Vec<String>,
}

impl ColumnDetector {
    /// Create a detector with the default keyword and exclusions.
    pub fn new() -> Self {
        Self {
            country_keyword: "country".to_string(),
            excluded_fragments: vec!["id".to_string(), "year".to_string(), "rank".to_string()],
        }
    }

    /// Rank and classify the columns of a table.
    pub fn detect(&self, table: &DataTable) -> DetectedColumns {
        let mut scored: Vec<(&str, f64)> = table
            .headers
            .iter()
            .map(|h| (h.as_str(), self.country_similarity(h)))
            .collect();
        // Stable sort keeps table order among equal scores
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let country_columns = scored.into_iter().map(|(h, _)| h.to_string()).collect();

        let indicator_columns = table
            .headers
            .iter()
            .enumerate()
            .filter(|(index, _)| is_numeric_column(table, *index))
            .filter(|(_, header)| !self.is_excluded(header))
            .map(|(_, header)| header.clone())
            .collect();

        DetectedColumns {
            country_columns,
            indicator_columns,
        }
    }

    /// Similarity of a header to the country keyword, 0-100.
    ///
    /// Indel ratio of the token-sorted header, so word order does not
    /// matter ("Name Country" scores like "Country Name").
    pub fn country_similarity(&self, header: &str) -> f64 {
        let sorted = token_sort(header);
        fuzz::ratio(sorted.chars(), self.country_keyword.chars()) * 100.0
    }

    fn is_excluded(&self, header: &str) -> bool {
        let lower = header.to_lowercase();
        self.excluded_fragments.iter().any(|f| lower.contains(f.as_str()))
    }
}

impl Default for ColumnDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Lower-case, split on non-alphanumerics, sort tokens, rejoin with spaces.
fn token_sort(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut tokens: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// A column is numeric when every non-missing cell parses as a number.
/// A column with no values at all counts as numeric.
fn is_numeric_column(table: &DataTable, index: usize) -> bool {
    table
        .column_values(index)
        .filter(|v| !DataTable::is_null_value(v))
        .all(|v| DataTable::parse_numeric(v).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DataTable {
        DataTable::new(
            vec![
                "Year".into(),
                "Country Name".into(),
                "GDP growth".into(),
                "Region".into(),
                "Country ID".into(),
                "Literacy".into(),
            ],
            vec![
                vec!["2020".into(), "Kenya".into(), "5.1".into(), "East".into(), "404".into(), "".into()],
                vec!["2020".into(), "Chad".into(), "NA".into(), "Central".into(), "148".into(), "".into()],
            ],
            b',',
        )
    }

    #[test]
    fn test_country_column_ranked_first() {
        let detected = ColumnDetector::new().detect(&table());
        assert_eq!(detected.country_columns.len(), 6);
        let best = detected.best_country_column().unwrap();
        assert!(best.starts_with("Country"), "{best}");
    }

    #[test]
    fn test_exact_keyword_is_perfect_match() {
        let detector = ColumnDetector::new();
        assert_eq!(detector.country_similarity("COUNTRY"), 100.0);
        assert!(detector.country_similarity("Region") < detector.country_similarity("Country Name"));
    }

    #[test]
    fn test_equal_scores_keep_table_order() {
        let detector = ColumnDetector::new();
        assert_eq!(
            detector.country_similarity("Country Code"),
            detector.country_similarity("Country Name")
        );

        for headers in [["Country Code", "Country Name"], ["Country Name", "Country Code"]] {
            let table = DataTable::new(
                headers.iter().map(|h| h.to_string()).collect(),
                vec![vec!["KEN".into(), "Kenya".into()]],
                b',',
            );
            assert_eq!(detector.detect(&table).country_columns, headers);
        }
    }

    #[test]
    fn test_indicator_columns_exclude_ids_years_ranks() {
        let detected = ColumnDetector::new().detect(&table());
        assert_eq!(detected.indicator_columns, vec!["GDP growth", "Literacy"]);
    }

    #[test]
    fn test_token_sort() {
        assert_eq!(token_sort("Name, Country"), "country name");
        assert_eq!(token_sort(""), "");
    }
}
