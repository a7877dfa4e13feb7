//! Topic management commands for CLI.

use clap::Subcommand;
use reviso_core::{resolve_view, topic_view, Config};

use super::open_topic_file;

#[derive(Subcommand)]
pub enum TopicAction {
    /// Start tracking a studied topic
    Add {
        /// Subject name (e.g. "Math")
        lesson: String,
        /// Concept name (e.g. "Exponential function")
        name: String,
    },
    /// List all topics with resolved checkpoint statuses
    List,
    /// Get one topic with resolved checkpoint statuses
    Get {
        /// Topic ID
        id: String,
    },
    /// Stop tracking a topic and drop its checkpoints
    Remove {
        /// Topic ID
        id: String,
    },
}

pub fn run(action: TopicAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let file = open_topic_file(&config)?;
    let mut store = file.load()?;
    let today = config.today();

    match action {
        TopicAction::Add { lesson, name } => {
            let topic = store.add_topic(&lesson, &name, today)?;
            file.save(&store)?;
            println!("Topic created: {}", topic.id);
            println!("{}", serde_json::to_string_pretty(&topic_view(&topic, today))?);
        }
        TopicAction::List => {
            let views = resolve_view(store.list_topics(), today);
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        TopicAction::Get { id } => {
            let topic = store.get_topic(&id)?;
            println!("{}", serde_json::to_string_pretty(&topic_view(topic, today))?);
        }
        TopicAction::Remove { id } => {
            store.remove_topic(&id)?;
            file.save(&store)?;
            println!("Topic removed: {id}");
        }
    }
    Ok(())
}
