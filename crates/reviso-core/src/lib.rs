//! # Reviso Core Library
//!
//! This library provides the core business logic for the Reviso study
//! tracker. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI being a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Topic Store**: In-memory collection of studied topics and their
//!   review checkpoints; the only mutation surface
//! - **Status Resolver**: Pure projection of persisted checkpoint status
//!   against "today" (never written back)
//! - **Storage**: JSON snapshot persistence and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`TopicStore`]: Authoritative topic collection with the command surface
//! - [`resolve_view`]: Read-only view composition (due dates, effective
//!   statuses, mastery)
//! - [`TopicFile`]: Topic snapshot persistence
//! - [`Config`]: Application configuration management

pub mod error;
pub mod schedule;
pub mod status;
pub mod storage;
pub mod store;
pub mod topic;
pub mod view;

pub use error::{ConfigError, CoreError, NotFoundError, StorageError, ValidationError};
pub use schedule::{generate_checkpoints, Checkpoint, CheckpointStatus, INTERVAL_SCHEDULE};
pub use status::{resolve, EffectiveStatus};
pub use storage::{Config, TopicFile};
pub use store::TopicStore;
pub use topic::Topic;
pub use view::{resolve_view, topic_view, CheckpointView, TopicView};
