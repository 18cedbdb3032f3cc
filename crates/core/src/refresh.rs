use chrono::{DateTime, Utc};

use crate::health;
use crate::reminder::{Reminder, ReminderKind};
use crate::store::{PlantStore, ReminderSink, StoreError};
use crate::streak::{self, StreakTransition};
use crate::types::{HealthEvaluation, HealthStatus, PlantRecord};

/// The store-facing slice of a refresh: the fields that actually change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusPatch {
    pub health_status: HealthStatus,
    pub healthy_since: StreakTransition,
}

/// Everything a refresh pass decides about one plant. Produced purely from
/// the record and `now`; the record itself is never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefreshOutcome {
    pub evaluation: HealthEvaluation,
    pub previous_status: HealthStatus,
    /// Anchor movement, meaningful only when the status changed.
    pub healthy_since: StreakTransition,
    /// Length of the running streak, when one is running.
    pub streak_days: Option<i64>,
    /// Set only when the status changed into a reminder-worthy one.
    pub reminder: Option<ReminderKind>,
}

impl RefreshOutcome {
    pub fn status_changed(&self) -> bool {
        self.evaluation.status != self.previous_status
    }

    /// The patch to persist, or `None` when the stored status still holds.
    pub fn patch(&self) -> Option<StatusPatch> {
        self.status_changed().then(|| StatusPatch {
            health_status: self.evaluation.status,
            healthy_since: self.healthy_since,
        })
    }
}

/// Plan the refresh of one plant against `now`.
///
/// `None` when the record has never been watered; there is nothing to
/// evaluate and the plant is left untouched.
pub fn plan(record: &PlantRecord, now: DateTime<Utc>) -> Option<RefreshOutcome> {
    let history = record.history(now)?;
    let evaluation = health::evaluate(&history);
    let changed = evaluation.status != record.health_status;

    let healthy_since = if changed {
        streak::transition(record.health_status, evaluation.status, now)
    } else {
        StreakTransition::Unchanged
    };
    let reminder = changed
        .then(|| ReminderKind::for_status(evaluation.status))
        .flatten();

    Some(RefreshOutcome {
        evaluation,
        previous_status: record.health_status,
        healthy_since,
        streak_days: record.healthy_since.map(|since| streak::streak_days(since, now)),
        reminder,
    })
}

/// Counts from one full refresh pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    pub examined: usize,
    pub updated: usize,
    pub reminders: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Refresh every plant in the store: re-evaluate, persist status changes,
/// record streaks, and forward reminders to the sink.
///
/// A failure on one plant is logged and skipped so the rest of the pass
/// still runs; only a failure to list the plants at all is fatal.
pub async fn refresh_all(
    store: &dyn PlantStore,
    sink: &dyn ReminderSink,
    now: DateTime<Utc>,
) -> Result<RefreshSummary, StoreError> {
    let plants = store.list_plants().await?;
    let mut summary = RefreshSummary::default();

    for record in &plants {
        summary.examined += 1;
        let Some(outcome) = plan(record, now) else {
            tracing::debug!(plant = %record.id, "never watered, skipping");
            summary.skipped += 1;
            continue;
        };

        if let Some(days) = outcome.streak_days {
            if let Err(e) = store.record_streak(record.id, days).await {
                tracing::warn!(plant = %record.id, error = %e, "failed to record streak");
                summary.failed += 1;
                continue;
            }
        }

        let Some(patch) = outcome.patch() else {
            continue;
        };
        if let Err(e) = store.apply_patch(record.id, &patch).await {
            tracing::warn!(plant = %record.id, error = %e, "failed to apply status patch");
            summary.failed += 1;
            continue;
        }
        summary.updated += 1;
        tracing::info!(
            plant = %record.id,
            from = outcome.previous_status.as_db_str(),
            to = outcome.evaluation.status.as_db_str(),
            "status changed"
        );

        if let Some(kind) = outcome.reminder {
            let reminder = Reminder::compose(record.id, &record.name, kind);
            match sink.deliver(&reminder).await {
                Ok(()) => summary.reminders += 1,
                Err(e) => {
                    tracing::warn!(plant = %record.id, error = %e, "reminder delivery failed");
                }
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SinkError;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use uuid::Uuid;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 10, 0, 0, 0).unwrap()
    }

    fn record(
        frequency: i64,
        status: HealthStatus,
        watered_days_ago: Option<i64>,
        healthy_days_ago: Option<i64>,
    ) -> PlantRecord {
        PlantRecord {
            id: Uuid::new_v4(),
            name: "Rose".into(),
            watering_frequency_days: frequency,
            health_status: status,
            last_watered: watered_days_ago.map(|d| now() - Duration::days(d)),
            previous_last_watered: None,
            healthy_since: healthy_days_ago.map(|d| now() - Duration::days(d)),
        }
    }

    #[test]
    fn stale_healthy_plant_needs_water_and_loses_its_streak() {
        // 8 days dry on a 7-day cycle, stored as HEALTHY since the watering
        let record = record(7, HealthStatus::Healthy, Some(8), Some(8));
        let outcome = plan(&record, now()).unwrap();

        assert_eq!(outcome.evaluation.status, HealthStatus::NeedsWater);
        assert!(outcome.status_changed());
        assert_eq!(outcome.healthy_since, StreakTransition::Cleared);
        assert_eq!(outcome.reminder, Some(ReminderKind::NeedsWater));
        assert_eq!(outcome.streak_days, Some(8));

        let patch = outcome.patch().unwrap();
        assert_eq!(patch.health_status, HealthStatus::NeedsWater);
        assert_eq!(patch.healthy_since, StreakTransition::Cleared);
    }

    #[test]
    fn unchanged_status_produces_no_patch_or_reminder() {
        let record = record(10, HealthStatus::Healthy, Some(5), Some(5));
        let outcome = plan(&record, now()).unwrap();

        assert!(!outcome.status_changed());
        assert_eq!(outcome.patch(), None);
        assert_eq!(outcome.reminder, None);
        // streak keeps accruing while nothing changes
        assert_eq!(outcome.streak_days, Some(5));
    }

    #[test]
    fn recovery_into_the_band_starts_a_streak_without_a_reminder() {
        let record = record(10, HealthStatus::NeedsWater, Some(1), None);
        let outcome = plan(&record, now()).unwrap();

        assert_eq!(outcome.evaluation.status, HealthStatus::Healthy);
        assert_eq!(outcome.healthy_since, StreakTransition::Started(now()));
        assert_eq!(outcome.reminder, None);
        assert_eq!(outcome.streak_days, None);
    }

    #[test]
    fn worsening_within_dry_statuses_reminds_but_keeps_anchor() {
        let record = record(10, HealthStatus::NeedsWater, Some(20), None);
        let outcome = plan(&record, now()).unwrap();

        assert_eq!(outcome.evaluation.status, HealthStatus::SeverelyDry);
        assert_eq!(outcome.healthy_since, StreakTransition::Unchanged);
        assert_eq!(outcome.reminder, Some(ReminderKind::SeverelyDry));
    }

    #[test]
    fn never_watered_plants_are_not_planned() {
        let record = record(7, HealthStatus::Unknown, None, None);
        assert_eq!(plan(&record, now()), None);
    }

    #[test]
    fn invalid_frequency_patches_to_unknown() {
        let record = record(0, HealthStatus::Healthy, Some(3), Some(3));
        let outcome = plan(&record, now()).unwrap();

        assert_eq!(outcome.evaluation.status, HealthStatus::Unknown);
        assert_eq!(outcome.evaluation.fraction, 1.0);
        // Unknown is outside the healthy band, so the streak clears
        assert_eq!(outcome.healthy_since, StreakTransition::Cleared);
        assert_eq!(outcome.reminder, None);
    }

    // ── driver ─────────────────────────────────────────────────

    #[derive(Default)]
    struct MemoryStore {
        plants: Vec<PlantRecord>,
        patches: Mutex<HashMap<Uuid, StatusPatch>>,
        streaks: Mutex<HashMap<Uuid, i64>>,
        fail_patch_for: Option<Uuid>,
    }

    #[async_trait]
    impl PlantStore for MemoryStore {
        async fn list_plants(&self) -> Result<Vec<PlantRecord>, StoreError> {
            Ok(self.plants.clone())
        }

        async fn apply_patch(
            &self,
            plant_id: Uuid,
            patch: &StatusPatch,
        ) -> Result<(), StoreError> {
            if self.fail_patch_for == Some(plant_id) {
                return Err(StoreError::NotFound(plant_id));
            }
            self.patches.lock().unwrap().insert(plant_id, *patch);
            Ok(())
        }

        async fn record_streak(&self, plant_id: Uuid, days: i64) -> Result<(), StoreError> {
            let mut streaks = self.streaks.lock().unwrap();
            let best = streaks.entry(plant_id).or_insert(0);
            if days > *best {
                *best = days;
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemorySink {
        delivered: Mutex<Vec<Reminder>>,
    }

    #[async_trait]
    impl ReminderSink for MemorySink {
        async fn deliver(&self, reminder: &Reminder) -> Result<(), SinkError> {
            self.delivered.lock().unwrap().push(reminder.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn refresh_pass_patches_reminds_and_records_streaks() {
        let stale = record(7, HealthStatus::Healthy, Some(8), Some(8));
        let steady = record(10, HealthStatus::Healthy, Some(2), Some(4));
        let unwatered = record(7, HealthStatus::Unknown, None, None);
        let stale_id = stale.id;
        let steady_id = steady.id;

        let store = MemoryStore {
            plants: vec![stale, steady, unwatered],
            ..Default::default()
        };
        let sink = MemorySink::default();

        let summary = refresh_all(&store, &sink, now()).await.unwrap();
        assert_eq!(
            summary,
            RefreshSummary {
                examined: 3,
                updated: 1,
                reminders: 1,
                skipped: 1,
                failed: 0,
            }
        );

        let patches = store.patches.lock().unwrap();
        assert_eq!(
            patches.get(&stale_id).unwrap().health_status,
            HealthStatus::NeedsWater
        );
        assert!(!patches.contains_key(&steady_id));

        let streaks = store.streaks.lock().unwrap();
        assert_eq!(streaks.get(&stale_id), Some(&8));
        assert_eq!(streaks.get(&steady_id), Some(&4));

        let delivered = sink.delivered.lock().unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].plant_id, stale_id);
        assert_eq!(delivered[0].kind, ReminderKind::NeedsWater);
        assert_eq!(delivered[0].body, "Rose needs water!");
    }

    #[tokio::test]
    async fn one_failing_plant_does_not_stop_the_pass() {
        let failing = record(7, HealthStatus::Healthy, Some(8), None);
        let fine = record(7, HealthStatus::Healthy, Some(8), None);
        let failing_id = failing.id;
        let fine_id = fine.id;

        let store = MemoryStore {
            plants: vec![failing, fine],
            fail_patch_for: Some(failing_id),
            ..Default::default()
        };
        let sink = MemorySink::default();

        let summary = refresh_all(&store, &sink, now()).await.unwrap();
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.updated, 1);
        assert!(store.patches.lock().unwrap().contains_key(&fine_id));
    }
}
