//! Review checkpoint commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use reviso_core::{resolve_view, topic_view, Config, EffectiveStatus};
use serde::Serialize;

use super::open_topic_file;

#[derive(Subcommand)]
pub enum ReviewAction {
    /// Toggle one checkpoint between pending and done
    Toggle {
        /// Topic ID
        topic_id: String,
        /// Checkpoint offset in days (one of 1, 3, 7, 15, 30, 60, 90)
        offset_days: u32,
    },
    /// Show every checkpoint that is due today or missed
    Agenda,
}

/// One row of the agenda listing.
#[derive(Serialize)]
struct AgendaEntry {
    topic_id: String,
    lesson: String,
    topic_name: String,
    offset_days: u32,
    due_date: NaiveDate,
    effective_status: EffectiveStatus,
}

pub fn run(action: ReviewAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let file = open_topic_file(&config)?;
    let mut store = file.load()?;
    let today = config.today();

    match action {
        ReviewAction::Toggle {
            topic_id,
            offset_days,
        } => {
            let topic = store.toggle_checkpoint(&topic_id, offset_days)?;
            file.save(&store)?;
            println!("{}", serde_json::to_string_pretty(&topic_view(&topic, today))?);
        }
        ReviewAction::Agenda => {
            let entries: Vec<AgendaEntry> = resolve_view(store.list_topics(), today)
                .into_iter()
                .flat_map(|view| {
                    let (topic_id, lesson, topic_name) = (view.id, view.lesson, view.topic_name);
                    view.checkpoints
                        .into_iter()
                        .filter(|c| {
                            matches!(
                                c.effective_status,
                                EffectiveStatus::DueToday | EffectiveStatus::Missed
                            )
                        })
                        .map(move |c| AgendaEntry {
                            topic_id: topic_id.clone(),
                            lesson: lesson.clone(),
                            topic_name: topic_name.clone(),
                            offset_days: c.offset_days,
                            due_date: c.due_date,
                            effective_status: c.effective_status,
                        })
                        .collect::<Vec<_>>()
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }
    Ok(())
}
