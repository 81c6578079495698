//! Finding input images and loading them as grids.
//!
//! # Example
//!
//! ```ignore
//! use df_macros::discovery::{load_grid, scan_inputs};
//!
//! for input in scan_inputs(&inputs)? {
//!     let grid = load_grid(&input.path)?;
//!     println!("{}: {} cells", input.path.display(), grid.eligible_count());
//! }
//! ```

mod loader;
mod scanner;

pub use loader::{classify_image, load_grid};
pub use scanner::{is_image_file, scan_directory, scan_inputs, InputImage, IMAGE_EXTENSIONS};
