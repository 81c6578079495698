//! Core domain types for df-macros.
//!
//! - `Colour` - RGB values read from the input image
//! - `Pixel` - the four cell categories
//! - `Point` - integer cell coordinates
//! - `Grid` - the cropped, immutable cell grid
//! - `Command` - the closed set of macro commands

mod colour;
mod command;
mod grid;
mod pixel;
mod point;

pub use colour::Colour;
pub use command::{Command, Direction, FAST_STEP};
pub use grid::{selection, Grid};
pub use pixel::Pixel;
pub use point::Point;
