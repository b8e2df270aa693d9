//! Frequency counting and a chi-square goodness-of-fit check against the uniform distribution.

#[derive(Debug, Clone)]
pub struct Histogram {
    counts: Vec<u64>,
    total: u64,
}

impl Histogram {
    pub fn new(num_buckets: usize) -> Self {
        Self {
            counts: vec![0; num_buckets],
            total: 0,
        }
    }
    pub fn push(&mut self, bucket: usize) {
        self.counts[bucket] += 1;
        self.total += 1;
    }
    pub fn count(&self, bucket: usize) -> u64 {
        self.counts[bucket]
    }
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }
    pub fn get_total(&self) -> u64 {
        self.total
    }
    pub fn num_buckets(&self) -> usize {
        self.counts.len()
    }
    /// Pearson's statistic for the hypothesis that every bucket is equally likely.
    /// `None` until something has been counted.
    pub fn chi_square_uniform(&self) -> Option<f64> {
        if self.total == 0 || self.counts.is_empty() {
            return None;
        }
        let expected = self.total as f64 / self.counts.len() as f64;
        Some(
            self.counts
                .iter()
                .map(|&observed| {
                    let diff = observed as f64 - expected;
                    diff * diff / expected
                })
                .sum(),
        )
    }
    /// True when the uniform hypothesis survives at roughly the one-sided level given by `z`
    /// (e.g. `z = 3.09` for 0.1%).
    pub fn looks_uniform(&self, z: f64) -> bool {
        let df = self.counts.len().saturating_sub(1);
        match self.chi_square_uniform() {
            None => false,
            Some(_) if df == 0 => true,
            Some(stat) => stat <= chi_square_critical(df, z),
        }
    }
}

/// Upper critical value of the chi-square distribution with `df` degrees of freedom, via the
/// Wilson-Hilferty cube approximation.
pub fn chi_square_critical(df: usize, z: f64) -> f64 {
    let k = df as f64;
    let a = 2.0 / (9.0 * k);
    k * (1.0 - a + z * a.sqrt()).powi(3)
}
