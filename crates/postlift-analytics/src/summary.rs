//! Central-tendency summaries that never fail on empty input.

use serde::Serialize;

/// Mean and median of a sequence. Both are `0.0` for an empty sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
}

/// Arithmetic mean, or `0.0` when `values` is empty.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let denom = values.len() as f64;
    values.iter().sum::<f64>() / denom
}

fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Summarizes the present values of `values`, skipping `None`s.
///
/// Returns `(0.0, 0.0)` when nothing is present: an empty profile is a normal
/// outcome, not an error.
#[must_use]
pub fn summarize<I>(values: I) -> Summary
where
    I: IntoIterator<Item = Option<f64>>,
{
    let present: Vec<f64> = values.into_iter().flatten().collect();
    Summary {
        mean: mean(&present),
        median: median(&present),
    }
}
