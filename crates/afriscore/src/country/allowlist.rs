//! The target population: 54 African Union member states.

/// ISO3 code to canonical display name for every target country.
///
/// Codes outside this table never appear in scored output.
pub const TARGET_COUNTRIES: [(&str, &str); 54] = [
    ("DZA", "Algeria"),
    ("AGO", "Angola"),
    ("BEN", "Benin"),
    ("BWA", "Botswana"),
    ("BFA", "Burkina Faso"),
    ("BDI", "Burundi"),
    ("CMR", "Cameroon"),
    ("CPV", "Cape Verde"),
    ("CAF", "Central African Republic"),
    ("TCD", "Chad"),
    ("COM", "Comoros"),
    ("COG", "Congo"),
    ("DJI", "Djibouti"),
    ("EGY", "Egypt"),
    ("GNQ", "Equatorial Guinea"),
    ("ERI", "Eritrea"),
    ("SWZ", "Eswatini"),
    ("ETH", "Ethiopia"),
    ("GAB", "Gabon"),
    ("GMB", "Gambia"),
    ("GHA", "Ghana"),
    ("GIN", "Guinea"),
    ("GNB", "Guinea-Bissau"),
    ("CIV", "Ivory Coast"),
    ("KEN", "Kenya"),
    ("LSO", "Lesotho"),
    ("LBR", "Liberia"),
    ("LBY", "Libya"),
    ("MDG", "Madagascar"),
    ("MWI", "Malawi"),
    ("MLI", "Mali"),
    ("MRT", "Mauritania"),
    ("MUS", "Mauritius"),
    ("MAR", "Morocco"),
    ("MOZ", "Mozambique"),
    ("NAM", "Namibia"),
    ("NER", "Niger"),
    ("NGA", "Nigeria"),
    ("RWA", "Rwanda"),
    ("STP", "Sao Tome and Principe"),
    ("SEN", "Senegal"),
    ("SYC", "Seychelles"),
    ("SLE", "Sierra Leone"),
    ("SOM", "Somalia"),
    ("ZAF", "South Africa"),
    ("SSD", "South Sudan"),
    ("SDN", "Sudan"),
    ("TZA", "Tanzania"),
    ("TGO", "Togo"),
    ("TUN", "Tunisia"),
    ("UGA", "Uganda"),
    ("ZMB", "Zambia"),
    ("ZWE", "Zimbabwe"),
    ("COD", "Democratic Congo"),
];

/// Canonical display name for a target code, if the code is in the set.
pub fn canonical_name(code: &str) -> Option<&'static str> {
    TARGET_COUNTRIES
        .iter()
        .find(|(iso3, _)| *iso3 == code)
        .map(|(_, name)| *name)
}

/// Look up the allow-list entry for a code, returning the static pair.
pub fn target_entry(code: &str) -> Option<(&'static str, &'static str)> {
    TARGET_COUNTRIES.iter().find(|(iso3, _)| *iso3 == code).copied()
}

/// Whether a code belongs to the target population.
pub fn is_target(code: &str) -> bool {
    canonical_name(code).is_some()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<&str> = TARGET_COUNTRIES.iter().map(|(c, _)| *c).collect();
        assert_eq!(codes.len(), 54);
        assert!(codes.iter().all(|c| c.len() == 3 && c.chars().all(|ch| ch.is_ascii_uppercase())));
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = TARGET_COUNTRIES.iter().map(|(_, n)| *n).collect();
        assert_eq!(names.len(), 54);
    }

    #[test]
    fn test_confusable_congos() {
        assert_eq!(canonical_name("COG"), Some("Congo"));
        assert_eq!(canonical_name("COD"), Some("Democratic Congo"));
    }

    #[test]
    fn test_non_target_codes() {
        assert!(!is_target("FRA"));
        assert!(!is_target("ESH"));
        assert!(!is_target("cod"));
        assert!(is_target("KEN"));
    }
}
