pub struct StatsHelper;

impl StatsHelper {
    pub fn rms(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = samples.iter().map(|&v| v * v).sum();
        (sum_sq / samples.len() as f64).sqrt()
    }

    /// Largest absolute sample value.
    pub fn peak(samples: &[f64]) -> f64 {
        samples.iter().fold(0.0, |acc, &v| acc.max(v.abs()))
    }

    /// `(min, max)` of the samples, `None` when there are none.
    pub fn extent(samples: &[f64]) -> Option<(f64, f64)> {
        if samples.is_empty() {
            return None;
        }
        let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }
}
