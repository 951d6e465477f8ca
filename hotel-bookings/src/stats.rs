//! Descriptive statistics used by the reports
//!
//! Box-plot summaries, mean estimates with a confidence band, and Gaussian
//! kernel density curves.

use serde::Serialize;

/// z-score of a two-sided 95 % normal interval
const Z_95: f64 = 1.959_963_984_540_054;

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator)
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Quantile of sorted data using linear interpolation between closest ranks
///
/// `sorted` must be ascending and non-empty; `q` is clamped to `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let q = q.clamp(0.0, 1.0);
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let weight = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

/// Five-number summary for a box plot
///
/// Whiskers reach the most extreme observations within 1.5 × IQR of the
/// box; anything beyond is counted as an outlier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxSummary {
    pub count: usize,
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    pub outliers: usize,
}

impl BoxSummary {
    /// Summarize a set of observations; non-finite values are ignored
    pub fn from_values(values: &[f64]) -> Option<BoxSummary> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile_sorted(&sorted, 0.25);
        let median = quantile_sorted(&sorted, 0.5);
        let q3 = quantile_sorted(&sorted, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;

        let inside = || sorted.iter().copied().filter(|v| *v >= low_fence && *v <= high_fence);
        let lower_whisker = inside().next().unwrap_or(q1);
        let upper_whisker = inside().last().unwrap_or(q3);
        let outliers = sorted.len() - inside().count();

        Some(BoxSummary {
            count: sorted.len(),
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
            outliers,
        })
    }
}

/// Mean with a 95 % confidence interval (normal approximation)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeanEstimate {
    pub count: usize,
    pub mean: f64,
    pub lower: f64,
    pub upper: f64,
}

impl MeanEstimate {
    /// Estimate the mean of `values`; a single observation has a zero-width band
    pub fn from_values(values: &[f64]) -> Option<MeanEstimate> {
        let m = mean(values)?;
        let half_width = sample_std_dev(values)
            .map(|sd| Z_95 * sd / (values.len() as f64).sqrt())
            .unwrap_or(0.0);

        Some(MeanEstimate {
            count: values.len(),
            mean: m,
            lower: m - half_width,
            upper: m + half_width,
        })
    }
}

/// Scott's rule bandwidth: σ · n^(-1/5)
pub fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    let sd = sample_std_dev(values)?;
    if sd <= 0.0 {
        return None;
    }
    Some(sd * (values.len() as f64).powf(-0.2))
}

/// Evenly spaced grid over `[start, end]` with `points` entries
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (points - 1) as f64;
            (0..points).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Gaussian kernel density estimate of `values`, evaluated on `grid`
///
/// Returns `None` when fewer than two observations are available or they
/// have no spread.
pub fn gaussian_kde(values: &[f64], grid: &[f64]) -> Option<Vec<(f64, f64)>> {
    let bandwidth = scott_bandwidth(values)?;
    let norm = 1.0 / (values.len() as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt());

    let curve = grid
        .iter()
        .map(|&x| {
            let density: f64 = values
                .iter()
                .map(|&v| {
                    let u = (x - v) / bandwidth;
                    (-0.5 * u * u).exp()
                })
                .sum();
            (x, density * norm)
        })
        .collect();

    Some(curve)
}
