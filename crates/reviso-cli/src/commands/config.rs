//! Configuration commands for CLI.

use clap::Subcommand;
use reviso_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Set the day-boundary convention for "today"
    SetTimezone {
        /// "utc" or "local"
        convention: String,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::SetTimezone { convention } => {
            let mut config = Config::load()?;
            config.use_local_time = match convention.as_str() {
                "local" => true,
                "utc" => false,
                other => return Err(format!("unknown convention '{other}' (use utc or local)").into()),
            };
            config.save()?;
            println!("Day boundary convention: {convention}");
        }
    }
    Ok(())
}
