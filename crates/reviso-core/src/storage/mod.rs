mod config;
mod store_file;

pub use config::Config;
pub use store_file::TopicFile;

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/reviso[-dev]/` based on REVISO_ENV, creating it if
/// needed. REVISO_DATA_DIR overrides the whole path (used by E2E tests and
/// portable installs).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = if let Ok(dir) = std::env::var("REVISO_DATA_DIR") {
        PathBuf::from(dir)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");
        let env = std::env::var("REVISO_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("reviso-dev")
        } else {
            base_dir.join("reviso")
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
