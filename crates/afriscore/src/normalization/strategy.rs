//! Normalization strategy selection.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How an indicator column is rescaled.
///
/// On the wire this is an optional free-text label. Known labels match
/// case-insensitively; an absent, null or empty label means [`None`], and
/// any other label falls back to [`MinMax`].
///
/// [`None`]: NormalizationType::None
/// [`MinMax`]: NormalizationType::MinMax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NormalizationType {
    /// Linear rescale between the reference minimum and maximum.
    MinMax,
    /// Standard score mapped from [-3, 3] onto [0, 100].
    ZScore,
    /// Median/IQR scaling, clipped, then rescaled over the subject values.
    Robust,
    /// Percentile rank within the reference population.
    Quantile,
    /// Values passed through unchanged (rounded only).
    #[default]
    None,
}

impl NormalizationType {
    /// Every variant, in a stable order.
    pub const ALL: [NormalizationType; 5] = [
        NormalizationType::MinMax,
        NormalizationType::ZScore,
        NormalizationType::Robust,
        NormalizationType::Quantile,
        NormalizationType::None,
    ];

    /// Interpret an optional request label.
    pub fn from_label(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return NormalizationType::None;
        };
        if label.is_empty() {
            return NormalizationType::None;
        }

        match label.to_lowercase().as_str() {
            "minmax normalisation" => NormalizationType::MinMax,
            "z-score normalisation" => NormalizationType::ZScore,
            "robust scaling" => NormalizationType::Robust,
            "quantile transformation" => NormalizationType::Quantile,
            other => {
                tracing::debug!(label = other, "unknown normalization label, using min-max");
                NormalizationType::MinMax
            }
        }
    }

    /// Canonical request label, or `None` for the passthrough.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            NormalizationType::MinMax => Some("minmax normalisation"),
            NormalizationType::ZScore => Some("z-score normalisation"),
            NormalizationType::Robust => Some("robust scaling"),
            NormalizationType::Quantile => Some("quantile transformation"),
            NormalizationType::None => None,
        }
    }
}

impl std::fmt::Display for NormalizationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label().unwrap_or("none"))
    }
}

impl Serialize for NormalizationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.label().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NormalizationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(NormalizationType::from_label(label.as_deref()))
    }
}
