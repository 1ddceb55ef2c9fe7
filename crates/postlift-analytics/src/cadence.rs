//! Posting cadence: how many posts a profile publishes per week.

use chrono::NaiveDateTime;

/// Estimated posts per 7-day period from the spread of `timestamps`.
///
/// Needs at least two timestamps. The span is counted in whole days and
/// floored at one, so posts that all fall on the same day still yield a
/// finite rate.
#[must_use]
pub fn posts_per_week(timestamps: &[NaiveDateTime]) -> Option<f64> {
    if timestamps.len() < 2 {
        return None;
    }
    let earliest = timestamps.iter().min()?;
    let latest = timestamps.iter().max()?;
    let span_days = (*latest - *earliest).num_days().max(1);

    #[allow(clippy::cast_precision_loss)]
    let rate = timestamps.len() as f64 / (span_days as f64 / 7.0);
    Some(rate)
}
