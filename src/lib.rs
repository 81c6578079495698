//! df-macros - Dwarf Fortress cursor macros from marker images
//!
//! A library for turning an image painted in four marker colours into a
//! macro that selects every marked cell with as few rectangles as the greedy
//! planner finds.
//!
//! ```ignore
//! use df_macros::{encode_macro, load_grid, plan};
//!
//! let grid = load_grid("rooms/hall.png".as_ref())?;
//! let brush = plan(&grid)?;
//! let text = encode_macro("hall", brush.commands());
//! ```

pub mod brush;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use brush::coverage::{plan, plan_with, Painter, Quadrant, TickObserver};
pub use brush::replay::{replay, ReplayReport};
pub use brush::{Brush, PaintState};
pub use config::{RunOptions, Settings};
pub use discovery::{classify_image, load_grid, scan_inputs, InputImage};
pub use error::{DfError, ErrorKind, Result};
pub use render::{encode_macro, parse_macro, read_macro, write_coverage_png, write_macro, Macro};
pub use types::{Colour, Command, Direction, Grid, Pixel, Point};
