use chrono::{DateTime, Utc};

use crate::types::WateringHistory;

use super::{
    BENIGN_INTERVAL_PERCENT, RECOVERY_END_PERCENT, SEVERE_INTERVAL_PERCENT, days_between,
    relative_position,
};

/// Percent of a full cycle that elapsed between the two most recent
/// waterings.
pub fn interval_percent(
    previous: DateTime<Utc>,
    last: DateTime<Utc>,
    watering_frequency_days: i64,
) -> f64 {
    days_between(previous, last) / watering_frequency_days as f64 * 100.0
}

/// Severity in `[0, 1]` read off the re-watering interval.
///
/// Three zones: below 30% of a cycle the watering came far too soon (full
/// severity), between 30% and 70% severity ramps linearly down to zero, and
/// at or above 70% the watering was appropriately timed or late.
pub fn starting_severity(interval_percent: f64) -> f64 {
    if interval_percent < SEVERE_INTERVAL_PERCENT {
        1.0
    } else if interval_percent < BENIGN_INTERVAL_PERCENT {
        1.0 - relative_position(SEVERE_INTERVAL_PERCENT, BENIGN_INTERVAL_PERCENT, interval_percent)
    } else {
        0.0
    }
}

/// Stress decay as the plant dries out since the most recent watering:
/// fully present at dryness 0, fully dissipated once dryness reaches 30%,
/// whatever the starting severity.
pub fn decay(dryness_percent: f64) -> f64 {
    (1.0 - dryness_percent / RECOVERY_END_PERCENT).clamp(0.0, 1.0)
}

/// Effective overwatering severity: starting severity × decay.
///
/// Zero whenever either factor is zero; in particular, a plant with no
/// watering before its most recent one cannot be overwatered. Non-increasing
/// as `now` advances.
pub fn effective_severity(history: &WateringHistory, dryness_percent: f64) -> f64 {
    let Some(previous) = history.previous_last_watered else {
        return 0.0;
    };
    let interval = interval_percent(previous, history.last_watered, history.watering_frequency_days);
    starting_severity(interval) * decay(dryness_percent)
}
