pub mod config;
pub mod review;
pub mod topic;

use reviso_core::{Config, TopicFile};

/// Open the topic snapshot, honoring a `data_file` override from config.
pub fn open_topic_file(config: &Config) -> Result<TopicFile, Box<dyn std::error::Error>> {
    match &config.data_file {
        Some(path) => Ok(TopicFile::at(path)),
        None => Ok(TopicFile::open_default()?),
    }
}
