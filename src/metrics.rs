use crate::sampler::SegmentCounts;

/// Normalized metrics for one analyzed region.
///
/// Every ratio is a count divided by the number of sampled (non-background)
/// pixels, so background-skipped pixels never dilute the signal.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentMetrics {
    pub green: f64,
    pub yellow: f64,
    pub brown: f64,
    pub black: f64,
    pub white: f64,
    pub bleached: f64,
    pub crispy: f64,
    pub low_sat: f64,
    pub high_bright: f64,
    pub texture_breaks: f64,
    pub avg_brightness: f64,
    pub avg_saturation: f64,
    pub green_variance: f64,
}

impl SegmentMetrics {
    /// Normalize raw segment counts into ratios and derived statistics.
    /// Returns `None` when the segment had no usable samples.
    pub fn from_counts(counts: &SegmentCounts) -> Option<Self> {
        if counts.sampled == 0 {
            return None;
        }

        let n = counts.sampled as f64;

        Some(Self {
            green: counts.green as f64 / n,
            yellow: counts.yellow as f64 / n,
            brown: counts.brown as f64 / n,
            black: counts.black as f64 / n,
            white: counts.white as f64 / n,
            bleached: counts.bleached as f64 / n,
            crispy: counts.crispy as f64 / n,
            low_sat: counts.low_sat as f64 / n,
            high_bright: counts.high_bright as f64 / n,
            texture_breaks: counts.texture_breaks as f64 / n,
            avg_brightness: counts.brightness_sum / n,
            avg_saturation: counts.saturation_sum / n,
            green_variance: population_variance(&counts.green_intensities),
        })
    }

    /// Combined disease signal used only for region selection.
    pub fn disease_score(&self) -> f64 {
        self.yellow + self.brown + self.white
    }
}

/// Population variance: mean of squared deviations from the mean.
/// Returns 0.0 for an empty list.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;

    values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n
}
