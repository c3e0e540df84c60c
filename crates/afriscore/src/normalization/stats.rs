//! Summary statistics over a reference population.

/// Statistics of a non-empty set of finite values.
///
/// Mean and variance use Welford's single-pass update; quantiles use linear
/// interpolation between order statistics over a sorted copy.
#[derive(Debug, Clone)]
pub struct ReferenceStats {
    count: usize,
    mean: f64,
    m2: f64,
    sorted: Vec<f64>,
}

impl ReferenceStats {
    /// Compute statistics, or `None` for an empty set.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut count = 0usize;
        let mut mean = 0.0;
        let mut m2 = 0.0;
        for &value in values {
            count += 1;
            let delta = value - mean;
            mean += delta / count as f64;
            m2 += delta * (value - mean);
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            count,
            mean,
            m2,
            sorted,
        })
    }

    /// Number of values.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Smallest value.
    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    /// Largest value.
    pub fn max(&self) -> f64 {
        self.sorted[self.count - 1]
    }

    /// Arithmetic mean.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation (n - 1 denominator).
    ///
    /// Undefined for a single value.
    pub fn sample_std(&self) -> Option<f64> {
        if self.count < 2 {
            None
        } else {
            Some((self.m2 / (self.count - 1) as f64).sqrt())
        }
    }

    /// Quantile `q` in [0, 1], linearly interpolated.
    pub fn quantile(&self, q: f64) -> f64 {
        let q = q.clamp(0.0, 1.0);
        let position = q * (self.count - 1) as f64;
        let lower = position.floor() as usize;
        let upper = position.ceil() as usize;
        let fraction = position - lower as f64;
        self.sorted[lower] + (self.sorted[upper] - self.sorted[lower]) * fraction
    }

    /// Median (the 0.5 quantile).
    pub fn median(&self) -> f64 {
        self.quantile(0.5)
    }

    /// Interquartile range, Q3 - Q1.
    pub fn iqr(&self) -> f64 {
        self.quantile(0.75) - self.quantile(0.25)
    }

    /// Fraction of values less than or equal to `value`.
    pub fn fraction_at_or_below(&self, value: f64) -> f64 {
        let at_or_below = self.sorted.partition_point(|&r| r <= value);
        at_or_below as f64 / self.count as f64
    }
}
