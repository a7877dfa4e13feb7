//! Core error types for reviso-core.
//!
//! This module defines the error hierarchy using thiserror. Domain errors
//! (`ValidationError`, `NotFoundError`) are local and fully recoverable by
//! the caller; storage and config errors originate at the persistence
//! boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for reviso-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input validation failed; no state was created.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A referenced topic or checkpoint does not exist; no state was mutated.
    #[error("Not found: {0}")]
    NotFound(#[from] NotFoundError),

    /// Topic snapshot persistence errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required text field was empty or whitespace-only.
    #[error("'{field}' must not be empty")]
    EmptyField { field: &'static str },
}

/// Lookup errors for topics and checkpoints.
#[derive(Error, Debug)]
pub enum NotFoundError {
    /// No topic with the given id exists in the store.
    #[error("no topic with id '{id}'")]
    Topic { id: String },

    /// The topic exists but has no checkpoint at the given offset.
    /// Offsets are fixed per topic, so this indicates a caller bug.
    #[error("topic '{topic_id}' has no checkpoint at offset {offset_days}")]
    Checkpoint { topic_id: String, offset_days: u32 },
}

/// Topic snapshot storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to determine or create the data directory
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the snapshot file
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the snapshot file
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot file exists but does not parse
    #[error("Failed to parse {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
