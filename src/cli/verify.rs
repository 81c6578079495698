//! Verify command implementation.
//!
//! Replays a macro over the grid of its source image and reports whether it
//! paints exactly the cells marked for painting.

use std::path::PathBuf;

use clap::Args;

use crate::brush::replay::{replay, ReplayReport};
use crate::discovery::load_grid;
use crate::error::{DfError, Result};
use crate::output::{count, display_path, Printer};
use crate::render::read_macro;

/// Check that a macro paints an image completely
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Source image the macro was generated from
    pub image: PathBuf,

    /// Macro file to check
    #[arg(value_name = "MACRO")]
    pub macro_file: PathBuf,
}

pub fn run(args: VerifyArgs, printer: &Printer) -> Result<()> {
    let report = verify(&args)?;

    printer.status(
        "Replayed",
        &format!(
            "{} over {} ({})",
            display_path(&args.macro_file),
            display_path(&args.image),
            count(report.selections, "rectangle")
        ),
    );

    if !report.ends_at_exit {
        printer.warning("Warning", &format!("cursor ends at {}, not the exit", report.end));
    }

    if report.is_complete() {
        printer.status("Verified", "every cell painted exactly as marked");
        return Ok(());
    }

    if !report.missing.is_empty() {
        printer.error(
            "Missing",
            &format!(
                "{} unpainted, first at {}",
                count(report.missing.len(), "cell"),
                report.missing[0]
            ),
        );
    }
    if !report.stray.is_empty() {
        printer.error(
            "Stray",
            &format!(
                "{} painted outside the marked area, first at {}",
                count(report.stray.len(), "cell"),
                report.stray[0]
            ),
        );
    }
    if report.unclosed {
        printer.error("Unclosed", "macro ends with a selection still open");
    }

    Err(DfError::Build {
        message: format!("{} does not paint the image", display_path(&args.macro_file)),
        help: Some("Regenerate the macro with `df-macros generate`".to_string()),
    })
}

/// Load both files and replay the macro.
pub fn verify(args: &VerifyArgs) -> Result<ReplayReport> {
    let grid = load_grid(&args.image)?;
    let parsed = read_macro(&args.macro_file)?;
    log::info!(
        "replaying {} ({} commands)",
        parsed.name,
        parsed.commands.len()
    );
    replay(&grid, &parsed.commands)
}
