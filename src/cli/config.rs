//! Config command implementation.
//!
//! Shows the persisted settings, or updates them.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Args};

use crate::config::Settings;
use crate::error::{DfError, Result};
use crate::output::{display_path, Printer};

/// Show or change persisted settings
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Save a default output directory
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Save whether the preview is shown by default
    #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
    pub visualize: Option<bool>,

    /// Delete the settings file
    #[arg(long, conflicts_with_all = ["output", "visualize"])]
    pub reset: bool,
}

impl ConfigArgs {
    fn changes_settings(&self) -> bool {
        self.output.is_some() || self.visualize.is_some()
    }
}

pub fn run(args: ConfigArgs, path: Option<&Path>, printer: &Printer) -> Result<()> {
    let path = path.ok_or_else(|| DfError::Config {
        message: "No configuration directory on this platform".to_string(),
        help: Some("Pass --config <PATH> to choose a settings file".to_string()),
    })?;

    let settings = apply(&args, path)?;
    if args.reset {
        printer.status("Removed", &display_path(path));
    } else if args.changes_settings() {
        printer.status("Saved", &display_path(path));
    } else {
        printer.info("Settings", &display_path(path));
    }

    println!("{}", settings.to_json()?);
    Ok(())
}

/// Apply the requested change to the settings file and return the result.
pub fn apply(args: &ConfigArgs, path: &Path) -> Result<Settings> {
    if args.reset {
        if path.exists() {
            fs::remove_file(path).map_err(|e| DfError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to remove settings: {}", e),
            })?;
        }
        return Ok(Settings::default());
    }

    let mut settings = Settings::load(path)?;
    if !args.changes_settings() {
        return Ok(settings);
    }

    if let Some(output) = &args.output {
        settings.output = Some(output.clone());
    }
    if let Some(visualize) = args.visualize {
        settings.visualize = Some(visualize);
    }
    settings.save(path)?;
    log::info!("saved settings to {}", path.display());
    Ok(settings)
}
