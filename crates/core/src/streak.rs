use chrono::{DateTime, Utc};

use crate::health::days_between;
use crate::types::HealthStatus;

/// Streak lengths (whole days) at which the next milestone level unlocks.
pub const STREAK_MILESTONES: [i64; 9] = [1, 3, 5, 7, 10, 20, 30, 40, 50];

/// Highest milestone level.
pub const STREAK_LEVEL_MAX: u8 = 10;

/// How a status change moves the healthy-streak anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakTransition {
    /// The change stayed on one side of the healthy band.
    Unchanged,
    /// The plant entered the healthy band; the streak starts now.
    Started(DateTime<Utc>),
    /// The plant left the healthy band; the streak is over.
    Cleared,
}

/// Work out the anchor movement for a status change at `now`.
///
/// The healthy band is `Healthy` and `SlightlyDry`; see
/// [`HealthStatus::counts_as_healthy`]. Movement within the band (or
/// entirely outside it) leaves the anchor alone.
pub fn transition(old: HealthStatus, new: HealthStatus, now: DateTime<Utc>) -> StreakTransition {
    match (old.counts_as_healthy(), new.counts_as_healthy()) {
        (false, true) => StreakTransition::Started(now),
        (true, false) => StreakTransition::Cleared,
        _ => StreakTransition::Unchanged,
    }
}

/// Length of the running streak in whole days, clamped at zero.
pub fn streak_days(healthy_since: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (days_between(healthy_since, now) as i64).max(0)
}

/// Milestone level for a streak length: level 1 before the first milestone,
/// one more per milestone reached, capped at [`STREAK_LEVEL_MAX`].
pub fn streak_level(days: i64) -> u8 {
    for (i, milestone) in STREAK_MILESTONES.iter().enumerate() {
        if days < *milestone {
            return 1 + i as u8;
        }
    }
    STREAK_LEVEL_MAX
}
