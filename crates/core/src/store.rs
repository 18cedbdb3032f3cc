use async_trait::async_trait;
use uuid::Uuid;

use crate::refresh::StatusPatch;
use crate::reminder::Reminder;
use crate::types::PlantRecord;

/// Error surfaced by a plant store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("plant not found: {0}")]
    NotFound(Uuid),
    #[error("backend error: {0}")]
    Backend(String),
}

/// Error surfaced by a reminder delivery channel.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("no delivery channel registered for this plant's owner")]
    NoChannel,
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Read/write seam to wherever plants actually live. The refresh driver is
/// the only caller; backends stay entirely outside this crate.
#[async_trait]
pub trait PlantStore: Send + Sync {
    /// Every plant a refresh pass should examine.
    async fn list_plants(&self) -> Result<Vec<PlantRecord>, StoreError>;

    /// Apply a planned status patch to one plant.
    async fn apply_patch(&self, plant_id: Uuid, patch: &StatusPatch) -> Result<(), StoreError>;

    /// Record the current streak length for a plant. Stores keep the best
    /// value ever seen; shorter streaks are a no-op.
    async fn record_streak(&self, plant_id: Uuid, days: i64) -> Result<(), StoreError>;
}

/// Outbound push channel for watering reminders.
#[async_trait]
pub trait ReminderSink: Send + Sync {
    async fn deliver(&self, reminder: &Reminder) -> Result<(), SinkError>;
}
