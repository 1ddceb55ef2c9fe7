//! Caption length vs. engagement rate.

use postlift_core::PostRecord;

use crate::summary::mean;
use crate::types::{CorrelationResult, LengthBucket};

/// Inclusive caption-length ranges, scanned in order. `None` is open-ended.
pub const LENGTH_BUCKETS: [(&str, usize, Option<usize>); 6] = [
    ("0-20", 0, Some(20)),
    ("21-40", 21, Some(40)),
    ("41-60", 41, Some(60)),
    ("61-80", 61, Some(80)),
    ("81-120", 81, Some(120)),
    ("121+", 121, None),
];

/// Pearson product-moment correlation of two equally long sequences.
///
/// Returns `None` for fewer than two pairs, mismatched lengths, or when
/// either side has zero variance. The result is clamped to `[-1, 1]` to
/// absorb rounding.
#[must_use]
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 || is_constant(xs) || is_constant(ys) {
        return None;
    }

    let mean_x = mean(xs);
    let mean_y = mean(ys);

    let (covariance, variance_x, variance_y) = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| {
            let dx = x - mean_x;
            let dy = y - mean_y;
            (dx * dy, dx * dx, dy * dy)
        })
        .fold((0.0, 0.0, 0.0), |acc, (c, vx, vy)| {
            (acc.0 + c, acc.1 + vx, acc.2 + vy)
        });

    if variance_x == 0.0 || variance_y == 0.0 {
        return None;
    }

    Some((covariance / (variance_x.sqrt() * variance_y.sqrt())).clamp(-1.0, 1.0))
}

/// Exact equality, so a constant series is caught even when its computed
/// mean carries rounding error.
fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

fn bucket_index(length: usize) -> usize {
    LENGTH_BUCKETS
        .iter()
        .position(|&(_, min, max)| length >= min && max.map_or(true, |max| length <= max))
        .unwrap_or(LENGTH_BUCKETS.len() - 1)
}

/// Correlates caption length with engagement over posts that have a rate,
/// and averages the rate within each [`LENGTH_BUCKETS`] range.
///
/// All six buckets are always reported; an empty one is `(0.0, 0)`.
#[must_use]
pub fn caption_length_vs_rate(posts: &[PostRecord]) -> CorrelationResult {
    let pairs: Vec<(usize, f64)> = posts
        .iter()
        .filter_map(|p| p.engagement_rate.map(|rate| (p.caption_length, rate)))
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let xs: Vec<f64> = pairs.iter().map(|&(len, _)| len as f64).collect();
    let ys: Vec<f64> = pairs.iter().map(|&(_, rate)| rate).collect();
    let coefficient = pearson_correlation(&xs, &ys);

    let mut grouped: [Vec<f64>; 6] = Default::default();
    for &(len, rate) in &pairs {
        grouped[bucket_index(len)].push(rate);
    }

    let buckets = LENGTH_BUCKETS
        .iter()
        .zip(grouped)
        .map(|(&(label, min, max), rates)| LengthBucket {
            label: label.to_string(),
            min,
            max,
            average_rate: mean(&rates),
            sample_size: rates.len(),
        })
        .collect();

    tracing::debug!(pairs = pairs.len(), ?coefficient, "correlated caption length");

    CorrelationResult {
        coefficient,
        buckets,
    }
}
