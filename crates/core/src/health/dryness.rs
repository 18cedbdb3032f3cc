use crate::types::WateringHistory;

use super::days_between;

/// How far into the watering cycle the plant is, as a percentage.
///
/// Elapsed time is clamped at zero so clock skew or a future-dated watering
/// reads as "just watered" rather than going negative. There is no upper
/// bound: values past 130 simply indicate deepening dryness.
///
/// Callers validate that the frequency is positive.
pub fn percent(history: &WateringHistory) -> f64 {
    let days_since = days_between(history.last_watered, history.now).max(0.0);
    days_since / history.watering_frequency_days as f64 * 100.0
}
