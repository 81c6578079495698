use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use crate::types::{Colour, Point};

/// Main error type for df-macros operations
#[derive(Error, Diagnostic, Debug)]
pub enum DfError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(df_macros::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to decode image {path}: {message}")]
    #[diagnostic(code(df_macros::input::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid pixel colour {colour} at {position}")]
    #[diagnostic(
        code(df_macros::input::colour),
        help("Only black (ignore), white (process), red (enter) and green (exit) are allowed")
    )]
    InvalidPixelColor { colour: Colour, position: Point },

    #[error("Image has no cells to paint")]
    #[diagnostic(
        code(df_macros::input::empty),
        help("Mark the area to paint with white, red or green pixels")
    )]
    EmptyImage,

    #[error("Brush is already painting")]
    #[diagnostic(code(df_macros::state::already_painting))]
    AlreadyPainting,

    #[error("Brush is not painting")]
    #[diagnostic(code(df_macros::state::not_painting))]
    NotPainting,

    #[error("Unknown macro command: {token}")]
    #[diagnostic(code(df_macros::encoding::unknown_command))]
    UnknownCommand { token: String },

    #[error("Malformed macro at line {line}: {message}")]
    #[diagnostic(code(df_macros::encoding::malformed))]
    MalformedMacro { line: usize, message: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(df_macros::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(df_macros::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

/// Coarse classification of a [`DfError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorKind {
    /// Bad input image.
    Input,
    /// Brush state machine misuse; a bug in the driving logic.
    State,
    /// Macro text that does not map onto the command set.
    Encoding,
    Io,
    Config,
    Build,
}

impl DfError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DfError::Image { .. } | DfError::InvalidPixelColor { .. } | DfError::EmptyImage => {
                ErrorKind::Input
            }
            DfError::AlreadyPainting | DfError::NotPainting => ErrorKind::State,
            DfError::UnknownCommand { .. } | DfError::MalformedMacro { .. } => ErrorKind::Encoding,
            DfError::Io { .. } => ErrorKind::Io,
            DfError::Config { .. } => ErrorKind::Config,
            DfError::Build { .. } => ErrorKind::Build,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Input => "input",
            ErrorKind::State => "state",
            ErrorKind::Encoding => "encoding",
            ErrorKind::Io => "io",
            ErrorKind::Config => "config",
            ErrorKind::Build => "build",
        };
        f.write_str(name)
    }
}

pub type Result<T> = std::result::Result<T, DfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(DfError::EmptyImage.kind(), ErrorKind::Input);
        assert_eq!(DfError::NotPainting.kind(), ErrorKind::State);
        assert_eq!(
            DfError::UnknownCommand {
                token: "JUMP".to_string()
            }
            .kind(),
            ErrorKind::Encoding
        );
        assert_eq!(ErrorKind::Io.to_string(), "io");
    }

    #[test]
    fn test_invalid_colour_message() {
        let err = DfError::InvalidPixelColor {
            colour: Colour::rgb(0, 0, 255),
            position: Point::new(3, 4),
        };
        assert_eq!(err.to_string(), "Invalid pixel colour #0000FF at (3, 4)");
    }
}
