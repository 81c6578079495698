//! PNG coverage maps.
//!
//! Draws every committed selection of a brush in its own colour so the
//! rectangle decomposition can be inspected.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::brush::Brush;
use crate::error::{DfError, Result};
use crate::types::{selection, Colour, Grid, Pixel, Point};

/// Colours cycled through for consecutive selections.
const SELECTION_COLOURS: [Colour; 8] = [
    Colour::rgb(0x4e, 0x79, 0xa7),
    Colour::rgb(0xf2, 0x8e, 0x2b),
    Colour::rgb(0xe1, 0x57, 0x59),
    Colour::rgb(0x76, 0xb7, 0xb2),
    Colour::rgb(0x59, 0xa1, 0x4f),
    Colour::rgb(0xed, 0xc9, 0x48),
    Colour::rgb(0xb0, 0x7a, 0xa1),
    Colour::rgb(0xff, 0x9d, 0xa7),
];

/// Largest accepted scale factor for coverage maps.
pub const MAX_COVERAGE_SCALE: u32 = 64;

/// Build the coverage map of a brush over its grid, one pixel per cell.
///
/// Cells outside every selection keep their marker colour.
pub fn coverage_image(grid: &Grid, brush: &Brush) -> RgbImage {
    let mut cells: Vec<Colour> = grid
        .points()
        .map(|p| grid.get(p).map_or(Colour::BLACK, Pixel::colour))
        .collect();

    for (i, &(anchor, corner)) in brush.selections().iter().enumerate() {
        let colour = SELECTION_COLOURS[i % SELECTION_COLOURS.len()];
        for point in selection(anchor, corner).filter(|&p| grid.contains(p)) {
            cells[index(grid, point)] = colour;
        }
    }

    ImageBuffer::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        Rgb(cells[y as usize * grid.width() + x as usize].to_array())
    })
}

/// Write the coverage map of a brush to a PNG file.
///
/// # Arguments
///
/// * `grid` - The grid the brush painted
/// * `brush` - The brush after planning
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_coverage_png(grid: &Grid, brush: &Brush, path: &Path, scale: u32) -> Result<()> {
    let scale = scale.max(1); // Minimum scale of 1
    if scale > MAX_COVERAGE_SCALE {
        return Err(DfError::Build {
            message: format!("Coverage scale {} is too large", scale),
            help: Some(format!("Use a scale between 1 and {}", MAX_COVERAGE_SCALE)),
        });
    }
    let map = coverage_image(grid, brush);

    let (width, height) = map
        .width()
        .checked_mul(scale)
        .zip(map.height().checked_mul(scale))
        .ok_or_else(|| DfError::Build {
            message: format!(
                "Coverage map of {}x{} cells cannot be scaled by {}",
                map.width(),
                map.height(),
                scale
            ),
            help: None,
        })?;

    let mut img: RgbImage = ImageBuffer::new(width, height);
    for (x, y, pixel) in map.enumerate_pixels() {
        // Fill scaled pixels
        for sy in 0..scale {
            for sx in 0..scale {
                img.put_pixel(x * scale + sx, y * scale + sy, *pixel);
            }
        }
    }

    img.save(path).map_err(|e| DfError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

fn index(grid: &Grid, point: Point) -> usize {
    point.y as usize * grid.width() + point.x as usize
}
