//! Built-in alias knowledge base for free-text country resolution.
//!
//! Resolution works on labels already passed through
//! [`normalize_text`](super::normalize_text): lower-case, no diacritics. Each
//! country has an ISO3 code, an ISO2 code and a regex of known aliases,
//! demonym-style variants and historical names.
//!
//! The table deliberately includes many countries outside the target
//! population, so a label like "France" resolves to `FRA` here and is then
//! rejected by the allow-list rather than being misread as something else.

use once_cell::sync::Lazy;
use regex::Regex;

use super::resolver::NameResolver;

/// One entry in the alias table.
struct AliasEntry {
    iso3: &'static str,
    iso2: &'static str,
    pattern: Regex,
}

// =============================================================================
// ALIAS TABLE
// =============================================================================
// First match wins. Entries whose names contain another country's name
// (South Sudan / Sudan, Guinea-Bissau / Guinea, Nigeria / Niger, the two
// Congos, the two Koreas) must come before the shorter name.

const ALIASES: &[(&str, &str, &str)] = &[
    // Ordering-sensitive entries
    ("COD", "CD", r"democratic.*congo|congo.*democratic|\bdem\b.*congo|congo.*\bdem\b|\bd\.?\s*r\.?\s*(of\s*(the\s*)?)?congo|\bd\.r\.c\b|\bdrc\b|\brdc\b|kinshasa|zaire"),
    ("COG", "CG", r"\bcongo\b|brazzaville"),
    ("SSD", "SS", r"south\s*sudan|s\.\s*sudan"),
    ("SDN", "SD", r"\bsudan\b"),
    ("GNB", "GW", r"guinea[\s-]*bissau|guinee?[\s-]*bissau|portuguese guinea"),
    ("GNQ", "GQ", r"equatorial\s*guinea|guinea\s*ecuatorial|guinee\s*equatoriale|\beq\.?\s*guinea"),
    ("PNG", "PG", r"papua|new guinea"),
    ("GIN", "GN", r"\bguinea\b|\bguinee\b"),
    ("NGA", "NG", r"\bnigeria"),
    ("NER", "NE", r"\bniger\b"),
    ("PRK", "KP", r"north\s*korea|korea.*(dem|people)|\bdprk\b"),
    ("KOR", "KR", r"south\s*korea|korea.*rep|\bkorea\b"),
    ("ESH", "EH", r"western\s*sahara|sahrawi"),
    ("CAF", "CF", r"central\s*african|\bcar\b|centrafrique"),
    ("ZAF", "ZA", r"south\s*africa|\brsa\b"),
    // Target population
    ("DZA", "DZ", r"algeria|algerie"),
    ("AGO", "AO", r"angola"),
    ("BEN", "BJ", r"\bbenin\b|dahomey"),
    ("BWA", "BW", r"botswana"),
    ("BFA", "BF", r"burkina|upper\s*volta"),
    ("BDI", "BI", r"burundi"),
    ("CMR", "CM", r"cameroon|cameroun"),
    ("CPV", "CV", r"ca(pe|bo)\s*verde|cap\s*vert"),
    ("TCD", "TD", r"\bchad\b|\btchad\b"),
    ("COM", "KM", r"comoros|comores"),
    ("DJI", "DJ", r"djibouti"),
    ("EGY", "EG", r"egypt"),
    ("ERI", "ER", r"eritrea"),
    ("SWZ", "SZ", r"eswatini|swaziland"),
    ("ETH", "ET", r"ethiopia"),
    ("GAB", "GA", r"gabon"),
    ("GMB", "GM", r"gambia"),
    ("GHA", "GH", r"ghana|gold coast"),
    ("CIV", "CI", r"ivory\s*coast|cote\s*d.?\s*ivoire"),
    ("KEN", "KE", r"kenya"),
    ("LSO", "LS", r"lesotho|basutoland"),
    ("LBR", "LR", r"liberia"),
    ("LBY", "LY", r"libya"),
    ("MDG", "MG", r"madagascar|malagasy"),
    ("MWI", "MW", r"malawi|nyasaland"),
    ("MLI", "ML", r"\bmali\b"),
    ("MRT", "MR", r"mauritania"),
    ("MUS", "MU", r"mauritius"),
    ("MAR", "MA", r"morocco|\bmaroc\b"),
    ("MOZ", "MZ", r"mozambique|mocambique"),
    ("NAM", "NA", r"namibia"),
    ("RWA", "RW", r"rwanda"),
    ("STP", "ST", r"s(ao|\.)\s*tome"),
    ("SEN", "SN", r"senegal"),
    ("SYC", "SC", r"seychelles"),
    ("SLE", "SL", r"sierra\s*leone"),
    ("SOM", "SO", r"somalia|\bsomali\b"),
    ("TZA", "TZ", r"tanzania"),
    ("TGO", "TG", r"\btogo"),
    ("TUN", "TN", r"tunisia|tunisie"),
    ("UGA", "UG", r"uganda"),
    ("ZMB", "ZM", r"zambia"),
    ("ZWE", "ZW", r"zimbabwe|rhodesia"),
    // Rest of the world
    ("USA", "US", r"united\s*states|^u\.?s\.?a?\.?$|\bamerica\b"),
    ("GBR", "GB", r"united\s*kingdom|great\s*britain|^u\.?k\.?$|england|scotland|wales"),
    ("CAN", "CA", r"canada"),
    ("MEX", "MX", r"mexic"),
    ("BRA", "BR", r"brazil|brasil"),
    ("ARG", "AR", r"argentin"),
    ("CHL", "CL", r"\bchile\b"),
    ("COL", "CO", r"colombia"),
    ("PER", "PE", r"\bperu\b"),
    ("VEN", "VE", r"venezuela"),
    ("CUB", "CU", r"\bcuba\b"),
    ("HTI", "HT", r"haiti"),
    ("JAM", "JM", r"jamaica"),
    ("FRA", "FR", r"\bfrance\b|french\s*republic"),
    ("DEU", "DE", r"germany|deutschland"),
    ("ITA", "IT", r"\bitaly\b|italia"),
    ("ESP", "ES", r"\bspain\b|espana"),
    ("PRT", "PT", r"portugal"),
    ("NLD", "NL", r"netherlands|holland"),
    ("BEL", "BE", r"belgium|belgique"),
    ("CHE", "CH", r"switzerland|swiss"),
    ("AUT", "AT", r"austria"),
    ("SWE", "SE", r"sweden"),
    ("NOR", "NO", r"norway"),
    ("DNK", "DK", r"denmark"),
    ("FIN", "FI", r"finland"),
    ("IRL", "IE", r"ireland"),
    ("POL", "PL", r"poland"),
    ("UKR", "UA", r"ukrain"),
    ("GRC", "GR", r"greece|hellenic"),
    ("RUS", "RU", r"russia"),
    ("TUR", "TR", r"turkey|turkiye"),
    ("ISR", "IL", r"israel"),
    ("JOR", "JO", r"jordan"),
    ("LBN", "LB", r"lebanon"),
    ("SYR", "SY", r"\bsyria"),
    ("IRQ", "IQ", r"\biraq\b"),
    ("IRN", "IR", r"\biran\b"),
    ("SAU", "SA", r"saudi"),
    ("YEM", "YE", r"yemen"),
    ("OMN", "OM", r"\boman\b"),
    ("ARE", "AE", r"emirates|\buae\b"),
    ("QAT", "QA", r"qatar"),
    ("KWT", "KW", r"kuwait"),
    ("AFG", "AF", r"afghanistan"),
    ("PAK", "PK", r"pakistan"),
    ("IND", "IN", r"\bindia\b"),
    ("BGD", "BD", r"bangladesh"),
    ("CHN", "CN", r"\bchina\b|people.?s\s*republic\s*of\s*china"),
    ("JPN", "JP", r"japan"),
    ("IDN", "ID", r"indonesia"),
    ("PHL", "PH", r"philippine"),
    ("VNM", "VN", r"viet\s*nam"),
    ("THA", "TH", r"thailand"),
    ("MYS", "MY", r"malaysia"),
    ("SGP", "SG", r"singapore"),
    ("AUS", "AU", r"australia"),
    ("NZL", "NZ", r"new\s*zealand"),
];

/// Words that mark a regional or income-group aggregate rather than a country.
const AGGREGATE_MARKERS: &str =
    r"\bexcl(uding)?\b|\bincome\b|\bibrd\b|\bida\b|\baggregate\b|\bcountries\b|\bregion\b|\bworld\b";

static AGGREGATE_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(AGGREGATE_MARKERS).ok());

static ALIAS_TABLE: Lazy<Vec<AliasEntry>> = Lazy::new(|| {
    ALIASES
        .iter()
        .filter_map(|&(iso3, iso2, pattern)| {
            // Invalid patterns are skipped; see test_all_patterns_compile
            Regex::new(pattern)
                .ok()
                .map(|pattern| AliasEntry { iso3, iso2, pattern })
        })
        .collect()
});

/// Default [`NameResolver`] backed by the built-in alias table.
#[derive(Debug, Clone, Copy, Default)]
pub struct AliasResolver;

impl AliasResolver {
    /// Create the built-in resolver.
    pub fn new() -> Self {
        Self
    }

    /// Number of countries the alias table knows about.
    pub fn known_countries(&self) -> usize {
        ALIAS_TABLE.len()
    }

    /// Match a bare ISO3 or ISO2 code typed in place of a name.
    fn lookup_code(&self, text: &str) -> Option<&'static str> {
        let upper = text.to_ascii_uppercase();
        match upper.len() {
            3 => ALIAS_TABLE.iter().find(|e| e.iso3 == upper).map(|e| e.iso3),
            2 => ALIAS_TABLE.iter().find(|e| e.iso2 == upper).map(|e| e.iso3),
            _ => None,
        }
    }
}

impl NameResolver for AliasResolver {
    fn resolve_free_text(&self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Some(code) = self.lookup_code(text) {
            return Some(code.to_string());
        }

        // "Sub-Saharan Africa excluding South Africa" names no single country
        if AGGREGATE_PATTERN.as_ref().is_some_and(|p| p.is_match(text)) {
            return None;
        }

        ALIAS_TABLE
            .iter()
            .find(|entry| entry.pattern.is_match(text))
            .map(|entry| entry.iso3.to_string())
    }

    fn name(&self) -> &str {
        "built-in aliases"
    }
}
