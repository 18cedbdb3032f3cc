use crate::types::HealthStatus;

use super::{
    HEALTHY_MAX_PERCENT, NEEDS_WATER_MAX_PERCENT, SEVERE_SEVERITY, SLIGHTLY_DRY_MAX_PERCENT,
};

/// Resolve the discrete status from the two signals. First matching rule
/// wins.
///
/// Any active overwatering stress overrides the dryness ladder entirely;
/// a plant never reads as healthy and overwatered at once. Stress is
/// transient (the decay guarantees it reaches exactly zero), so the
/// classification falls back to the ladder without oscillating. The ladder
/// buckets have inclusive upper bounds: an exact boundary value lands in the
/// lower of the two adjacent buckets.
///
/// The frequency has already been validated; `evaluate` maps non-positive
/// frequencies to `Unknown` before the signals are ever computed.
pub fn resolve(dryness_percent: f64, overwater_severity: f64) -> HealthStatus {
    if overwater_severity > 0.0 {
        return if overwater_severity > SEVERE_SEVERITY {
            HealthStatus::SeverelyOverwatered
        } else {
            HealthStatus::Overwatered
        };
    }

    if dryness_percent <= HEALTHY_MAX_PERCENT {
        HealthStatus::Healthy
    } else if dryness_percent <= SLIGHTLY_DRY_MAX_PERCENT {
        HealthStatus::SlightlyDry
    } else if dryness_percent <= NEEDS_WATER_MAX_PERCENT {
        HealthStatus::NeedsWater
    } else {
        HealthStatus::SeverelyDry
    }
}
