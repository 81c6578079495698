//! Rendering of planned command logs.
//!
//! `macro_text` serializes a command log for the macro player, `png` draws
//! the rectangle decomposition as an image, and `preview` draws painting
//! progress in the terminal.

pub mod macro_text;
mod png;
pub mod preview;

pub use macro_text::{encode_macro, parse_macro, read_macro, write_macro, Macro, MACRO_EXTENSION};
pub use png::{coverage_image, write_coverage_png, MAX_COVERAGE_SCALE};
pub use preview::{render_frame, TerminalPreview, FRAME_DELAY};
