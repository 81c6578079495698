//! Generate command implementation.
//!
//! Turns marker images into `.mak` macro files.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::brush::coverage::{plan, plan_with};
use crate::config::{RunOptions, Settings};
use crate::discovery::{load_grid, scan_inputs, InputImage};
use crate::error::{DfError, ErrorKind, Result};
use crate::output::{count, display_path, Printer};
use crate::render::{
    write_coverage_png, write_macro, TerminalPreview, MACRO_EXTENSION, MAX_COVERAGE_SCALE,
};

/// Extension of coverage maps written next to macros.
const COVERAGE_EXTENSION: &str = "coverage.png";

/// Generate macros from marker images
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Images, or directories to scan for images
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output directory (default: saved setting, else current directory)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Show painting progress in the terminal
    #[arg(long, overrides_with = "no_visualize")]
    pub visualize: bool,

    /// Disable the preview even if enabled in settings
    #[arg(long, overrides_with = "visualize")]
    pub no_visualize: bool,

    /// Also write a coverage PNG, scaled by this factor, next to each macro
    #[arg(
        long,
        value_name = "SCALE",
        value_parser = clap::value_parser!(u32).range(1..=MAX_COVERAGE_SCALE as i64)
    )]
    pub png: Option<u32>,

    /// Stop at the first file that fails
    #[arg(long)]
    pub fail_fast: bool,
}

impl GenerateArgs {
    /// The preview flag, if given explicitly.
    pub fn visualize(&self) -> Option<bool> {
        if self.visualize {
            Some(true)
        } else if self.no_visualize {
            Some(false)
        } else {
            None
        }
    }

    /// Merge flags with persisted settings.
    pub fn options(&self, settings: &Settings) -> RunOptions {
        RunOptions {
            coverage_png: self.png,
            fail_fast: self.fail_fast,
            ..RunOptions::resolve(settings, self.output.clone(), self.visualize())
        }
    }
}

/// Result of generating one macro.
#[derive(Debug, Clone)]
pub struct Generated {
    /// The macro file written.
    pub path: PathBuf,
    /// Number of commands in the macro.
    pub commands: usize,
    /// Number of rectangles selected.
    pub selections: usize,
}

pub fn run(args: GenerateArgs, settings: &Settings, printer: &Printer) -> Result<()> {
    let options = args.options(settings);
    let files = scan_inputs(&args.files)?;

    if files.is_empty() {
        return Err(DfError::Build {
            message: "No input images found".to_string(),
            help: Some("Pass image files or directories containing .png files".to_string()),
        });
    }

    check_output_collisions(&files, &options.output)?;

    // Create output directory if needed
    if !options.output.exists() {
        fs::create_dir_all(&options.output).map_err(|e| DfError::Io {
            path: options.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut generated = 0;
    let mut failures: BTreeMap<ErrorKind, usize> = BTreeMap::new();

    for file in &files {
        printer.status("Generating", &display_path(&file.path));
        match generate_file(file, &options) {
            Ok(result) => {
                generated += 1;
                let detail = format!(
                    "({}, {})",
                    count(result.commands, "command"),
                    count(result.selections, "rectangle")
                );
                printer.info(
                    "Wrote",
                    &format!("{} {}", display_path(&result.path), printer.dim(&detail)),
                );
            }
            Err(err) if options.fail_fast => return Err(err),
            Err(err) => {
                *failures.entry(err.kind()).or_default() += 1;
                log::debug!("{} failed: {:?}", file.path.display(), err);
                printer.error("Failed", &format!("{}: {}", display_path(&file.path), err));
            }
        }
    }

    let failed: usize = failures.values().sum();
    if failed > 0 {
        let by_kind: Vec<String> = failures
            .iter()
            .map(|(kind, n)| format!("{}: {}", kind, n))
            .collect();
        return Err(DfError::Build {
            message: format!(
                "{} of {} failed ({})",
                count(failed, "file"),
                files.len(),
                by_kind.join(", ")
            ),
            help: Some("Run with -v for details".to_string()),
        });
    }

    printer.status(
        "Finished",
        &format!(
            "{} in {}",
            count(generated, "macro"),
            display_path(&options.output)
        ),
    );
    Ok(())
}

/// Fail before writing anything if two inputs would write the same macro.
fn check_output_collisions(files: &[InputImage], output: &Path) -> Result<()> {
    let mut targets: HashMap<PathBuf, &Path> = HashMap::new();

    for file in files {
        let target = file.output_path(output, MACRO_EXTENSION);
        if let Some(previous) = targets.get(&target) {
            return Err(DfError::Build {
                message: format!(
                    "{} and {} would both write {}",
                    display_path(previous),
                    display_path(&file.path),
                    display_path(&target)
                ),
                help: Some(
                    "Pass the parent directory instead, or rename one of the images".to_string(),
                ),
            });
        }
        targets.insert(target, &file.path);
    }

    Ok(())
}

/// Plan and write the macro for a single image.
pub fn generate_file(input: &InputImage, options: &RunOptions) -> Result<Generated> {
    let path = &input.path;
    let grid = load_grid(path)?;
    log::info!(
        "{}: {}x{} grid, {} cells to paint, entrance {}, exit {}",
        path.display(),
        grid.width(),
        grid.height(),
        grid.eligible_count(),
        grid.entrance(),
        grid.exit()
    );

    let brush = if options.visualize {
        plan_with(&grid, &mut TerminalPreview::new())?
    } else {
        plan(&grid)?
    };

    let name = macro_name(path);
    let macro_path = input.output_path(&options.output, MACRO_EXTENSION);
    if let Some(parent) = macro_path.parent() {
        fs::create_dir_all(parent).map_err(|e| DfError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }
    write_macro(&macro_path, &name, brush.commands())?;

    if let Some(scale) = options.coverage_png {
        let png_path = input.output_path(&options.output, COVERAGE_EXTENSION);
        write_coverage_png(&grid, &brush, &png_path, scale)?;
    }

    log::info!(
        "{}: {} commands, {} rectangles",
        macro_path.display(),
        brush.commands().len(),
        brush.selections().len()
    );

    Ok(Generated {
        path: macro_path,
        commands: brush.commands().len(),
        selections: brush.selections().len(),
    })
}

/// Macro name for an input file: its base name without extension.
pub fn macro_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "macro".to_string())
}
