//! Effective checkpoint status resolution.
//!
//! The persisted machine has two states (`Pending`, `Done`). What the user
//! sees has four: the resolver projects persisted status and due date against
//! "today" on every query. The projection is never written back; `Missed`
//! and `DueToday` only exist in views.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schedule::CheckpointStatus;

/// Display status of a checkpoint as of a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectiveStatus {
    Pending,
    Done,
    DueToday,
    Missed,
}

/// Resolve the effective status of `(status, due_date)` as of `today`.
///
/// Total and idempotent. A persisted `Done` always resolves to `Done`; a
/// late completion is never shown as missed. Both dates must use the same
/// day-boundary convention.
pub fn resolve(status: CheckpointStatus, due_date: NaiveDate, today: NaiveDate) -> EffectiveStatus {
    if status == CheckpointStatus::Done {
        return EffectiveStatus::Done;
    }
    let diff = (due_date - today).num_days();
    if diff == 0 {
        EffectiveStatus::DueToday
    } else if diff < 0 {
        EffectiveStatus::Missed
    } else {
        EffectiveStatus::Pending
    }
}
