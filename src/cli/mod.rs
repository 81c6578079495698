pub mod completions;
pub mod config;
pub mod generate;
pub mod verify;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use crate::config::Settings;

/// df-macros - Dwarf Fortress cursor macros from marker images
#[derive(Parser, Debug)]
#[command(name = "df-macros")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file to use instead of the platform default
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The settings file in effect: `--config`, else the platform default.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(Settings::default_path)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate macros from marker images
    Generate(generate::GenerateArgs),

    /// Check that a macro paints an image completely
    Verify(verify::VerifyArgs),

    /// Show or change persisted settings
    Config(config::ConfigArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Log level for a `-v` count.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize logging. `RUST_LOG` takes precedence over the `-v` count.
pub fn init_logging(verbose: u8) {
    let default = level_for(verbose).to_string().to_lowercase();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}
