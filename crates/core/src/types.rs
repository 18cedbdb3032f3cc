use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Health model types ─────────────────────────────────────────

/// Discrete plant health classification, ordered along two axes:
/// wet → dry and normal → stressed.
///
/// `Unknown` is reserved for invalid input (non-positive watering
/// frequency); it never results from a normal evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthStatus {
    SeverelyOverwatered,
    Overwatered,
    Healthy,
    SlightlyDry,
    NeedsWater,
    SeverelyDry,
    Unknown,
}

impl Serialize for HealthStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_db_str())
    }
}

impl<'de> Deserialize<'de> for HealthStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::Unknown
    }
}

impl HealthStatus {
    /// Stable string form used by the external store.
    pub fn as_db_str(&self) -> &'static str {
        match self {
            Self::SeverelyOverwatered => "SEVERELY_OVERWATERED",
            Self::Overwatered => "OVERWATERED",
            Self::Healthy => "HEALTHY",
            Self::SlightlyDry => "SLIGHTLY_DRY",
            Self::NeedsWater => "NEEDS_WATER",
            Self::SeverelyDry => "SEVERELY_DRY",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parse the store's string form. Unrecognized strings read as `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s {
            "SEVERELY_OVERWATERED" => Self::SeverelyOverwatered,
            "OVERWATERED" => Self::Overwatered,
            "HEALTHY" => Self::Healthy,
            "SLIGHTLY_DRY" => Self::SlightlyDry,
            "NEEDS_WATER" => Self::NeedsWater,
            "SEVERELY_DRY" => Self::SeverelyDry,
            _ => Self::Unknown,
        }
    }

    /// Whether this status counts toward the healthy streak.
    /// A slightly dry plant is still considered cared-for.
    pub fn counts_as_healthy(&self) -> bool {
        matches!(self, Self::Healthy | Self::SlightlyDry)
    }
}

/// Immutable snapshot of one plant's watering history at a single instant.
///
/// `now` is part of the snapshot so that dryness and overwatering are always
/// computed against the same clock reading (mixing instants would make the
/// two percentages mutually inconsistent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WateringHistory {
    pub last_watered: DateTime<Utc>,
    pub previous_last_watered: Option<DateTime<Utc>>,
    /// May be non-positive, which is a degenerate input rather than an error.
    pub watering_frequency_days: i64,
    pub now: DateTime<Utc>,
}

impl WateringHistory {
    /// Snapshot evaluated against the current wall clock.
    pub fn new(
        last_watered: DateTime<Utc>,
        previous_last_watered: Option<DateTime<Utc>>,
        watering_frequency_days: i64,
    ) -> Self {
        Self {
            last_watered,
            previous_last_watered,
            watering_frequency_days,
            now: Utc::now(),
        }
    }

    /// Pin the evaluation instant (deterministic evaluations, tests).
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

/// Result of one health evaluation.
///
/// `fraction` has no meaning apart from `status`: it is the position within
/// the resolved status on a 0→1 scale, 1 = just entered (wettest reading the
/// status covers), 0 = about to leave it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthEvaluation {
    pub status: HealthStatus,
    pub fraction: f64,
}

// ── Stored record types ────────────────────────────────────────

/// A plant as supplied by the external store.
///
/// Timestamps are stored as epoch milliseconds; the legacy store writes `0`
/// for "never", so non-positive values read back as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    pub id: Uuid,
    pub name: String,
    pub watering_frequency_days: i64,
    /// Status as of the last refresh pass.
    #[serde(default)]
    pub health_status: HealthStatus,
    #[serde(default, with = "stored_ms")]
    pub last_watered: Option<DateTime<Utc>>,
    #[serde(default, with = "stored_ms")]
    pub previous_last_watered: Option<DateTime<Utc>>,
    /// Start of the current healthy streak, if one is running.
    #[serde(default, with = "stored_ms")]
    pub healthy_since: Option<DateTime<Utc>>,
}

impl PlantRecord {
    /// Watering snapshot for evaluation at `now`.
    /// `None` if the plant has never been watered, since there is nothing
    /// to evaluate.
    pub fn history(&self, now: DateTime<Utc>) -> Option<WateringHistory> {
        Some(WateringHistory {
            last_watered: self.last_watered?,
            previous_last_watered: self.previous_last_watered,
            watering_frequency_days: self.watering_frequency_days,
            now,
        })
    }
}

/// Epoch-millisecond (de)serialization with the store's `0` = absent rule.
mod stored_ms {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(t) => serializer.serialize_i64(t.timestamp_millis()),
            None => serializer.serialize_i64(0),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let ms = Option::<i64>::deserialize(deserializer)?;
        Ok(ms
            .filter(|&v| v > 0)
            .and_then(DateTime::<Utc>::from_timestamp_millis))
    }
}
