//! JSON snapshot persistence for topic records.
//!
//! The persistence contract is whole-record: topics are loaded and saved as
//! one JSON array at `<data_dir>/topics.json`, with `start_date` and every
//! checkpoint's `offset_days`/`status` preserved exactly. Dates are ISO 8601
//! calendar dates with no time component, so the resolver never sees a
//! timezone-shifted day.

use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::store::TopicStore;
use crate::topic::Topic;

const STORE_FILE_NAME: &str = "topics.json";

/// Handle to the topic snapshot file.
#[derive(Debug, Clone)]
pub struct TopicFile {
    path: PathBuf,
}

impl TopicFile {
    /// Open the snapshot in the default data directory.
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self {
            path: super::data_dir()?.join(STORE_FILE_NAME),
        })
    }

    /// Open a snapshot at an explicit path (config override).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the store. A missing file is an empty store, not an error.
    pub fn load(&self) -> Result<TopicStore, StorageError> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(TopicStore::new());
            }
            Err(source) => {
                return Err(StorageError::ReadFailed {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let topics: Vec<Topic> =
            serde_json::from_str(&data).map_err(|source| StorageError::ParseFailed {
                path: self.path.clone(),
                source,
            })?;
        Ok(TopicStore::from_topics(topics))
    }

    /// Save the whole store. Writes to a temp file then renames, so a crash
    /// mid-write never leaves a truncated snapshot.
    pub fn save(&self, store: &TopicStore) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(store.list_topics()).map_err(|source| {
            StorageError::ParseFailed {
                path: self.path.clone(),
                source,
            }
        })?;
        let tmp = self.path.with_extension("json.tmp");
        let write_err = |source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        };
        std::fs::write(&tmp, json).map_err(write_err)?;
        std::fs::rename(&tmp, &self.path).map_err(write_err)?;
        Ok(())
    }
}
