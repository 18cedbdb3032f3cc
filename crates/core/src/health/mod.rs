pub mod dryness;
pub mod fraction;
pub mod overwater;
pub mod status;

use chrono::{DateTime, Utc};

use crate::types::{HealthEvaluation, HealthStatus, WateringHistory};

/// Dryness percent at the top of the `Healthy` bucket.
pub const HEALTHY_MAX_PERCENT: f64 = 70.0;
/// Dryness percent at the top of the `SlightlyDry` bucket.
pub const SLIGHTLY_DRY_MAX_PERCENT: f64 = 100.0;
/// Dryness percent at the top of the `NeedsWater` bucket; beyond it the
/// plant is `SeverelyDry` with no upper bound.
pub const NEEDS_WATER_MAX_PERCENT: f64 = 130.0;

/// Re-watering interval (as percent of a cycle) below which overwatering
/// starts at full severity.
pub const SEVERE_INTERVAL_PERCENT: f64 = 30.0;
/// Re-watering interval (as percent of a cycle) at or above which the
/// watering was appropriately timed or late: no overwatering at all.
pub const BENIGN_INTERVAL_PERCENT: f64 = 70.0;

/// Dryness percent at which overwatering stress has fully dissipated.
/// The decay slope, the implicit "just watered" window, and the low edge of
/// the `Healthy` bar range all share this constant; they move together.
pub const RECOVERY_END_PERCENT: f64 = 30.0;

/// Effective severity above which an overwatered reading is severe.
pub const SEVERE_SEVERITY: f64 = 0.5;

/// Evaluate a watering history into a status and a bar position, computed
/// together from one consistent snapshot.
///
/// Total over all inputs: a non-positive frequency yields
/// `(Unknown, 1.0)` rather than an error.
pub fn evaluate(history: &WateringHistory) -> HealthEvaluation {
    if history.watering_frequency_days <= 0 {
        return HealthEvaluation {
            status: HealthStatus::Unknown,
            fraction: 1.0,
        };
    }
    let dryness = dryness::percent(history);
    let severity = overwater::effective_severity(history, dryness);
    let status = status::resolve(dryness, severity);
    HealthEvaluation {
        status,
        fraction: fraction::within_status(status, dryness, severity),
    }
}

/// Bar position only, for callers that do not need the discrete status.
pub fn fraction(history: &WateringHistory) -> f64 {
    evaluate(history).fraction
}

/// Signed difference `b - a` in fractional days.
pub(crate) fn days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    (b - a).num_milliseconds() as f64 / 86_400_000.0
}

/// Normalize `value` within `[low, high]` to `[0, 1]`, clamping outside it.
pub(crate) fn relative_position(low: f64, high: f64, value: f64) -> f64 {
    if high == low {
        return 0.0;
    }
    (value.clamp(low, high) - low) / (high - low)
}
