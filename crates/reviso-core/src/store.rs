//! Topic store: the authoritative collection and its command surface.
//!
//! One logical learner owns the store; commands are applied synchronously
//! and each effect is visible to the next read. Conflict resolution across
//! devices is the persistence collaborator's problem, not the store's.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{NotFoundError, ValidationError};
use crate::topic::Topic;

/// Keyed, insertion-ordered collection of topics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicStore {
    topics: Vec<Topic>,
}

impl TopicStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from persisted topic records, keeping their order.
    pub fn from_topics(topics: Vec<Topic>) -> Self {
        Self { topics }
    }

    /// Create a topic studied today and append it to the collection.
    ///
    /// `today` must already be normalized to a day boundary (it is a
    /// calendar date). Rejects empty or whitespace-only names without
    /// creating anything.
    pub fn add_topic(
        &mut self,
        lesson: &str,
        topic_name: &str,
        today: NaiveDate,
    ) -> Result<Topic, ValidationError> {
        if lesson.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "lesson" });
        }
        if topic_name.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "topic_name" });
        }
        let topic = Topic::new(
            Uuid::new_v4().to_string(),
            lesson.trim().to_string(),
            topic_name.trim().to_string(),
            today,
        );
        self.topics.push(topic.clone());
        Ok(topic)
    }

    /// Remove a topic and its checkpoints. Removing an absent id is an
    /// error, not a no-op; callers must handle "already removed".
    pub fn remove_topic(&mut self, id: &str) -> Result<(), NotFoundError> {
        let index = self
            .topics
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| NotFoundError::Topic { id: id.to_string() })?;
        self.topics.remove(index);
        Ok(())
    }

    pub fn get_topic(&self, id: &str) -> Result<&Topic, NotFoundError> {
        self.topics
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| NotFoundError::Topic { id: id.to_string() })
    }

    /// All topics in insertion order.
    pub fn list_topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Flip one checkpoint's persisted status `Pending ⇄ Done` and return
    /// the updated topic.
    ///
    /// The flip ignores the effective status: a checkpoint currently shown
    /// as missed toggles straight to done. Either the single status flips or
    /// an error comes back with nothing mutated.
    pub fn toggle_checkpoint(
        &mut self,
        topic_id: &str,
        offset_days: u32,
    ) -> Result<Topic, NotFoundError> {
        let topic = self
            .topics
            .iter_mut()
            .find(|t| t.id == topic_id)
            .ok_or_else(|| NotFoundError::Topic {
                id: topic_id.to_string(),
            })?;
        let checkpoint =
            topic
                .checkpoint_mut(offset_days)
                .ok_or_else(|| NotFoundError::Checkpoint {
                    topic_id: topic_id.to_string(),
                    offset_days,
                })?;
        checkpoint.status = checkpoint.status.toggled();
        Ok(topic.clone())
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
