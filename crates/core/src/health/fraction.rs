use crate::types::HealthStatus;

use super::{
    HEALTHY_MAX_PERCENT, NEEDS_WATER_MAX_PERCENT, RECOVERY_END_PERCENT, SEVERE_SEVERITY,
    SLIGHTLY_DRY_MAX_PERCENT, relative_position,
};

/// Position within the resolved status on a 0→1 scale: 1 at the wettest
/// reading the status covers (just entered), falling to 0 at the point the
/// status is about to hand off to the next one.
///
/// Overwatered states re-normalize the severity to their own sub-range, so
/// the bar drains as stress fades and refills to 1 when the plant re-enters
/// `Healthy`. Dryness states re-normalize the dryness percent between their
/// bucket bounds. `SeverelyDry` has no upper bound and pins to 0;
/// `Unknown` reports a full bar as a safe default.
pub fn within_status(status: HealthStatus, dryness_percent: f64, overwater_severity: f64) -> f64 {
    match status {
        HealthStatus::SeverelyOverwatered => {
            relative_position(SEVERE_SEVERITY, 1.0, overwater_severity)
        }
        HealthStatus::Overwatered => relative_position(0.0, SEVERE_SEVERITY, overwater_severity),
        HealthStatus::Healthy => {
            1.0 - relative_position(RECOVERY_END_PERCENT, HEALTHY_MAX_PERCENT, dryness_percent)
        }
        HealthStatus::SlightlyDry => {
            1.0 - relative_position(HEALTHY_MAX_PERCENT, SLIGHTLY_DRY_MAX_PERCENT, dryness_percent)
        }
        HealthStatus::NeedsWater => {
            1.0 - relative_position(
                SLIGHTLY_DRY_MAX_PERCENT,
                NEEDS_WATER_MAX_PERCENT,
                dryness_percent,
            )
        }
        HealthStatus::SeverelyDry => 0.0,
        HealthStatus::Unknown => 1.0,
    }
}
