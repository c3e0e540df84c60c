//! Country resolution restricted to the target population.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use super::aliases::AliasResolver;
use super::allowlist::target_entry;
use super::normalize::normalize_text;

/// Free-text to ISO3 resolution capability.
///
/// Implementations receive labels already normalized by
/// [`normalize_text`] and may return any ISO3 code; filtering to the target
/// population happens in [`CountryResolver`].
pub trait NameResolver: Send + Sync {
    /// Resolve a normalized label to an ISO3 code.
    fn resolve_free_text(&self, text: &str) -> Option<String>;

    /// Human-readable name of this resolver, for logs.
    fn name(&self) -> &str {
        "custom"
    }
}

/// Deterministic resolver built from an explicit label table.
///
/// Keys are normalized on insertion, so `"Côte d'Ivoire"` and
/// `"cote d'ivoire"` are the same entry.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    entries: HashMap<String, String>,
}

impl StaticResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a label → code mapping.
    pub fn with_entry(mut self, label: impl AsRef<str>, code: impl Into<String>) -> Self {
        self.entries.insert(normalize_text(label.as_ref()), code.into());
        self
    }

    /// Build from an iterator of label/code pairs.
    pub fn from_pairs<L, C>(pairs: impl IntoIterator<Item = (L, C)>) -> Self
    where
        L: AsRef<str>,
        C: Into<String>,
    {
        pairs
            .into_iter()
            .fold(Self::new(), |resolver, (label, code)| resolver.with_entry(label, code))
    }
}

impl NameResolver for StaticResolver {
    fn resolve_free_text(&self, text: &str) -> Option<String> {
        self.entries.get(text).cloned()
    }

    fn name(&self) -> &str {
        "static table"
    }
}

/// Per-row resolution result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CountryMatch {
    /// The label resolved to a target country.
    Matched {
        code: &'static str,
        name: &'static str,
    },
    /// The label is empty, unknown, or resolved outside the target population.
    NotFound,
}

impl CountryMatch {
    /// Whether this row belongs to the subject population.
    pub fn is_matched(&self) -> bool {
        matches!(self, CountryMatch::Matched { .. })
    }

    /// ISO3 code, if matched.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            CountryMatch::Matched { code, .. } => Some(code),
            CountryMatch::NotFound => None,
        }
    }

    /// Canonical display name, if matched.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            CountryMatch::Matched { name, .. } => Some(name),
            CountryMatch::NotFound => None,
        }
    }
}

/// Resolves free-text labels to the 54 target countries.
///
/// Cheap to clone; the underlying [`NameResolver`] is shared.
#[derive(Clone)]
pub struct CountryResolver {
    resolver: Arc<dyn NameResolver>,
}

impl CountryResolver {
    /// Wrap an injected resolution capability.
    pub fn new(resolver: Arc<dyn NameResolver>) -> Self {
        Self { resolver }
    }

    /// Resolver backed by the built-in alias table.
    pub fn builtin() -> Self {
        Self::new(Arc::new(AliasResolver::new()))
    }

    /// Name of the underlying resolution capability.
    pub fn resolver_name(&self) -> &str {
        self.resolver.name()
    }

    /// Resolve one raw label.
    ///
    /// Returns [`CountryMatch::NotFound`] for empty labels, unknown labels,
    /// and codes outside the allow-list.
    pub fn resolve(&self, raw: &str) -> CountryMatch {
        let normalized = normalize_text(raw);
        if normalized.is_empty() {
            return CountryMatch::NotFound;
        }

        let Some(code) = self.resolver.resolve_free_text(&normalized) else {
            return CountryMatch::NotFound;
        };

        match target_entry(code.trim()) {
            Some((code, name)) => CountryMatch::Matched { code, name },
            None => {
                tracing::trace!(label = raw, code = %code, "resolved outside target population");
                CountryMatch::NotFound
            }
        }
    }

    /// Resolve every value of a column, one result per row.
    ///
    /// Repeated labels are resolved once.
    pub fn resolve_column<'a>(&self, values: impl IntoIterator<Item = &'a str>) -> Vec<CountryMatch> {
        let mut seen: HashMap<&'a str, CountryMatch> = HashMap::new();
        values
            .into_iter()
            .map(|value| *seen.entry(value).or_insert_with(|| self.resolve(value)))
            .collect()
    }
}

impl Default for CountryResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for CountryResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryResolver")
            .field("resolver", &self.resolver.name())
            .finish()
    }
}
