//! Read-only view composition.
//!
//! Views combine persisted topic state with "today": due dates, effective
//! statuses, mastery. Nothing in here mutates the store and nothing computed
//! here is ever persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::{resolve, EffectiveStatus};
use crate::topic::Topic;

/// One checkpoint as displayed on a given day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointView {
    pub offset_days: u32,
    pub due_date: NaiveDate,
    pub effective_status: EffectiveStatus,
}

/// One topic as displayed on a given day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicView {
    pub id: String,
    pub lesson: String,
    pub topic_name: String,
    pub start_date: NaiveDate,
    pub mastery: u8,
    pub checkpoints: Vec<CheckpointView>,
}

/// Project a single topic against `today`.
pub fn topic_view(topic: &Topic, today: NaiveDate) -> TopicView {
    TopicView {
        id: topic.id.clone(),
        lesson: topic.lesson.clone(),
        topic_name: topic.topic_name.clone(),
        start_date: topic.start_date,
        mastery: topic.mastery(),
        checkpoints: topic
            .checkpoints
            .iter()
            .map(|c| CheckpointView {
                offset_days: c.offset_days,
                due_date: c.due_date,
                effective_status: resolve(c.status, c.due_date, today),
            })
            .collect(),
    }
}

/// Project a topic collection against `today`, preserving order.
/// Never fails for any combination of statuses and dates.
pub fn resolve_view(topics: &[Topic], today: NaiveDate) -> Vec<TopicView> {
    topics.iter().map(|t| topic_view(t, today)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TopicStore;
    use chrono::Days;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn view_carries_identity_and_mastery() {
        let mut store = TopicStore::new();
        let id = store.add_topic("Math", "Limits", d(2026, 3, 1)).unwrap().id;
        store.toggle_checkpoint(&id, 1).unwrap();

        let views = resolve_view(store.list_topics(), d(2026, 3, 2));
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].id, id);
        assert_eq!(views[0].lesson, "Math");
        assert_eq!(views[0].start_date, d(2026, 3, 1));
        assert_eq!(views[0].mastery, 14);
    }

    #[test]
    fn effective_statuses_split_around_today() {
        let mut store = TopicStore::new();
        let start = d(2026, 3, 1);
        store.add_topic("Math", "Limits", start).unwrap();

        // Four days in: offsets 1 and 3 are behind, 7+ are ahead.
        let views = resolve_view(store.list_topics(), start + Days::new(4));
        let statuses: Vec<EffectiveStatus> = views[0]
            .checkpoints
            .iter()
            .map(|c| c.effective_status)
            .collect();
        assert_eq!(statuses[0], EffectiveStatus::Missed);
        assert_eq!(statuses[1], EffectiveStatus::Missed);
        assert!(statuses[2..]
            .iter()
            .all(|s| *s == EffectiveStatus::Pending));
    }

    #[test]
    fn done_shows_done_even_when_overdue() {
        let mut store = TopicStore::new();
        let start = d(2026, 3, 1);
        let id = store.add_topic("Math", "Limits", start).unwrap().id;
        store.toggle_checkpoint(&id, 1).unwrap();

        let views = resolve_view(store.list_topics(), start + Days::new(10));
        assert_eq!(views[0].checkpoints[0].effective_status, EffectiveStatus::Done);
    }

    #[test]
    fn empty_collection_resolves_to_empty_view() {
        assert!(resolve_view(&[], d(2026, 3, 1)).is_empty());
    }
}
