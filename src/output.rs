//! Status lines for the CLI.
//!
//! Lines go to stderr as a right-aligned verb followed by a message, the way
//! Cargo reports progress. Stdout stays free for the preview and for JSON.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Width of the verb column.
const VERB_WIDTH: usize = 12;

/// How a status line is coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Work starting or finished (green).
    Progress,
    /// A file written or a result reported (cyan).
    Result,
    /// Something worth a look that did not fail (yellow).
    Warning,
    /// A file that failed (red).
    Failure,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Progress => "\x1b[32m",
            Tone::Result => "\x1b[36m",
            Tone::Warning => "\x1b[33m",
            Tone::Failure => "\x1b[31m",
        }
    }
}

/// Writes status lines, coloured only when stderr is a terminal.
pub struct Printer {
    colour: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            colour: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits colour codes.
    pub fn plain() -> Self {
        Self { colour: false }
    }

    pub fn status(&self, verb: &str, message: &str) {
        self.line(Tone::Progress, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.line(Tone::Result, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.line(Tone::Warning, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.line(Tone::Failure, verb, message);
    }

    /// Secondary detail, dimmed on a terminal.
    pub fn dim(&self, text: &str) -> String {
        if self.colour {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Format one status line without printing it.
    pub fn format_line(&self, tone: Tone, verb: &str, message: &str) -> String {
        if self.colour {
            format!("{BOLD}{}{verb:>VERB_WIDTH$}{RESET} {message}", tone.ansi())
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }

    pub fn line(&self, tone: Tone, verb: &str, message: &str) {
        let text = self.format_line(tone, verb, message);
        let _ = writeln!(io::stderr().lock(), "{text}");
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// A count with its noun: `count(1, "cell")` is "1 cell", `count(3, "cell")`
/// is "3 cells".
pub fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// A path relative to the working directory when it lies below it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}
