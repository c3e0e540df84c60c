//! Reference-anchored rescaling of indicator values onto 0-100.

use std::borrow::Cow;

use crate::error::{Result, ScoreError};

use super::stats::ReferenceStats;
use super::strategy::NormalizationType;

/// Upper end of the common score scale.
const SCALE_MAX: f64 = 100.0;

/// Score given to every subject value when the reference has no spread.
const DEGENERATE_SCORE: f64 = 100.0;

/// Largest binary exponent kept before squaring values (z-score variance).
const SQUARE_HEADROOM_EXP: i32 = 400;

/// Largest binary exponent kept before subtracting values (robust scaling).
const DIFFERENCE_HEADROOM_EXP: i32 = 1020;

/// Round to two decimal places. Values too large to scale are returned as is.
fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// Power-of-two factor that keeps every magnitude below `2^max_exp`.
///
/// Multiplying by a power of two only moves the exponent, so the
/// scale-invariant strategies give the same scores on the scaled values.
fn headroom(subject: &[f64], reference: &[f64], max_exp: i32) -> f64 {
    let largest = subject
        .iter()
        .chain(reference)
        .copied()
        .filter(|v| v.is_finite())
        .map(f64::abs)
        .fold(0.0, f64::max);
    if largest < 2f64.powi(max_exp) {
        return 1.0;
    }
    let excess = largest.log2().ceil() as i32 - max_exp + 1;
    2f64.powi(-excess)
}

fn rescaled(values: &[f64], factor: f64) -> Cow<'_, [f64]> {
    if factor == 1.0 {
        Cow::Borrowed(values)
    } else {
        Cow::Owned(values.iter().map(|v| v * factor).collect())
    }
}

/// Rescales subject values against a reference population.
///
/// Every method returns one score per subject value, in input order, rounded
/// to two decimals as the last step. Inputs are never modified.
#[derive(Debug, Clone)]
pub struct NormalizationEngine {
    /// Standard scores in [-z_bound, z_bound] map onto [0, 100].
    z_bound: f64,
    /// Robust-scaled values are clipped to [-robust_clip, robust_clip].
    robust_clip: f64,
}

impl NormalizationEngine {
    /// Create an engine with the standard bounds (z in ±3, robust clip ±2).
    pub fn new() -> Self {
        Self {
            z_bound: 3.0,
            robust_clip: 2.0,
        }
    }

    /// Apply the selected strategy.
    ///
    /// Fails only when a bounded strategy is given an empty reference set.
    pub fn normalize(
        &self,
        kind: NormalizationType,
        subject: &[f64],
        reference: &[f64],
    ) -> Result<Vec<f64>> {
        let factor = match kind {
            NormalizationType::ZScore => headroom(subject, reference, SQUARE_HEADROOM_EXP),
            NormalizationType::Robust => headroom(subject, reference, DIFFERENCE_HEADROOM_EXP),
            _ => 1.0,
        };
        let subject = rescaled(subject, factor);
        let reference = rescaled(reference, factor);

        let stats = || {
            ReferenceStats::from_values(&reference).ok_or_else(|| {
                ScoreError::EmptyData(format!("{} needs a non-empty reference set", kind))
            })
        };

        Ok(match kind {
            NormalizationType::MinMax => self.min_max(&subject, &stats()?),
            NormalizationType::ZScore => self.z_score(&subject, &stats()?),
            NormalizationType::Robust => self.robust(&subject, &stats()?),
            NormalizationType::Quantile => self.quantile(&subject, &stats()?),
            NormalizationType::None => self.passthrough(&subject),
        })
    }

    /// `(v - min) / (max - min) * 100`, clipped to [0, 100].
    ///
    /// Operands are halved first so the span cannot overflow.
    pub fn min_max(&self, subject: &[f64], reference: &ReferenceStats) -> Vec<f64> {
        let (low, high) = (reference.min() / 2.0, reference.max() / 2.0);
        let span = high - low;
        if span == 0.0 {
            return vec![DEGENERATE_SCORE; subject.len()];
        }

        subject
            .iter()
            .map(|&v| round2((v / 2.0 - low) / span * SCALE_MAX).clamp(0.0, SCALE_MAX))
            .collect()
    }

    /// Standard score against the reference mean and sample deviation,
    /// mapped linearly from [-3, 3] onto [0, 100] and clipped.
    pub fn z_score(&self, subject: &[f64], reference: &ReferenceStats) -> Vec<f64> {
        let std = match reference.sample_std() {
            Some(std) if std > 0.0 => std,
            _ => return vec![DEGENERATE_SCORE; subject.len()],
        };
        let mean = reference.mean();
        let span = 2.0 * self.z_bound;

        subject
            .iter()
            .map(|&v| {
                let z = (v - mean) / std;
                round2((z + self.z_bound) / span * SCALE_MAX).clamp(0.0, SCALE_MAX)
            })
            .collect()
    }

    /// Median/IQR scaling clipped to [-2, 2], then rescaled onto [0, 100]
    /// using the minimum and maximum of the clipped *subject* values.
    pub fn robust(&self, subject: &[f64], reference: &ReferenceStats) -> Vec<f64> {
        let iqr = reference.iqr();
        if iqr == 0.0 {
            return vec![DEGENERATE_SCORE; subject.len()];
        }
        let median = reference.median();

        let scaled: Vec<f64> = subject
            .iter()
            .map(|&v| ((v - median) / iqr).clamp(-self.robust_clip, self.robust_clip))
            .collect();

        let lowest = scaled.iter().copied().fold(f64::INFINITY, f64::min);
        let highest = scaled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // One subject value, or all subject values clipped to the same bound
        if lowest == highest {
            return vec![DEGENERATE_SCORE; subject.len()];
        }

        scaled
            .iter()
            .map(|&s| round2((s - lowest) / (highest - lowest) * SCALE_MAX))
            .collect()
    }

    /// Percentile rank: share of reference values at or below `v`, times 100.
    pub fn quantile(&self, subject: &[f64], reference: &ReferenceStats) -> Vec<f64> {
        subject
            .iter()
            .map(|&v| round2(reference.fraction_at_or_below(v) * SCALE_MAX))
            .collect()
    }

    /// Values unchanged apart from rounding; may lie outside [0, 100].
    pub fn passthrough(&self, subject: &[f64]) -> Vec<f64> {
        subject.iter().map(|&v| round2(v)).collect()
    }
}

impl Default for NormalizationEngine {
    fn default() -> Self {
        Self::new()
    }
}
