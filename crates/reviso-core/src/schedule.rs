//! Review interval schedule and checkpoint generation.
//!
//! Every topic gets the same fixed ladder of review checkpoints, offset in
//! days from the date the topic was first studied. Intervals do not adapt to
//! performance and completing a checkpoint late never reschedules the later
//! ones.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Day offsets from a topic's start date at which reviews fall due.
/// Shared by every topic and never mutated.
pub const INTERVAL_SCHEDULE: [u32; 7] = [1, 3, 7, 15, 30, 60, 90];

/// Persisted checkpoint status.
///
/// Only these two values are ever stored; `DueToday` and `Missed` are
/// derived projections (see [`crate::status`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckpointStatus {
    Pending,
    Done,
}

impl CheckpointStatus {
    /// The opposite status. `Pending ⇄ Done` is the whole machine.
    pub fn toggled(self) -> Self {
        match self {
            CheckpointStatus::Pending => CheckpointStatus::Done,
            CheckpointStatus::Done => CheckpointStatus::Pending,
        }
    }
}

impl Default for CheckpointStatus {
    fn default() -> Self {
        CheckpointStatus::Pending
    }
}

/// One scheduled review point within a topic.
///
/// `offset_days` identifies the checkpoint within its topic. `due_date` is
/// cached at generation time and stays consistent because a topic's start
/// date is immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkpoint {
    pub offset_days: u32,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: CheckpointStatus,
}

/// Build the full checkpoint ladder for a topic studied on `start_date`.
///
/// Deterministic: always exactly `INTERVAL_SCHEDULE.len()` entries, in
/// schedule order, all `Pending`, due at `start_date + offset`.
pub fn generate_checkpoints(start_date: NaiveDate) -> Vec<Checkpoint> {
    INTERVAL_SCHEDULE
        .iter()
        .map(|&offset_days| Checkpoint {
            offset_days,
            due_date: start_date + Days::new(u64::from(offset_days)),
            status: CheckpointStatus::Pending,
        })
        .collect()
}
