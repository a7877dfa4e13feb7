//! Topic model and mastery aggregation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schedule::{generate_checkpoints, Checkpoint, CheckpointStatus, INTERVAL_SCHEDULE};

/// One studied subject/concept pair under review tracking.
///
/// `id`, `lesson`, `topic_name` and `start_date` are immutable after
/// creation; checkpoint statuses are the only thing that ever changes.
/// Checkpoints are owned exclusively and removed with the topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub lesson: String,
    pub topic_name: String,
    pub start_date: NaiveDate,
    pub checkpoints: Vec<Checkpoint>,
}

impl Topic {
    /// Create a topic studied on `start_date` with a fresh checkpoint ladder.
    pub(crate) fn new(id: String, lesson: String, topic_name: String, start_date: NaiveDate) -> Self {
        Self {
            id,
            lesson,
            topic_name,
            start_date,
            checkpoints: generate_checkpoints(start_date),
        }
    }

    /// Look up the checkpoint at `offset_days`, if the offset is one of the
    /// schedule values.
    pub fn checkpoint(&self, offset_days: u32) -> Option<&Checkpoint> {
        self.checkpoints.iter().find(|c| c.offset_days == offset_days)
    }

    pub(crate) fn checkpoint_mut(&mut self, offset_days: u32) -> Option<&mut Checkpoint> {
        self.checkpoints
            .iter_mut()
            .find(|c| c.offset_days == offset_days)
    }

    /// Completion percentage in `[0, 100]`: persisted `Done` checkpoints out
    /// of the fixed schedule length, rounded. Computed on read, never cached.
    pub fn mastery(&self) -> u8 {
        let done = self
            .checkpoints
            .iter()
            .filter(|c| c.status == CheckpointStatus::Done)
            .count();
        (done as f64 * 100.0 / INTERVAL_SCHEDULE.len() as f64).round() as u8
    }
}
