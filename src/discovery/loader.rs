//! Image decoding and pixel classification.

use std::path::Path;

use image::RgbImage;

use crate::error::{DfError, Result};
use crate::types::{Colour, Grid, Pixel, Point};

/// Decode an image file and classify it into a cropped [`Grid`].
///
/// Any alpha channel is dropped before classification.
pub fn load_grid(path: &Path) -> Result<Grid> {
    let image = image::open(path).map_err(|e| DfError::Image {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let rgb = image.to_rgb8();
    log::debug!(
        "decoded {} ({}x{})",
        path.display(),
        rgb.width(),
        rgb.height()
    );

    classify_image(&rgb)
}

/// Classify every pixel of an image and crop to the eligible cells.
///
/// Fails on the first pixel (row-major) whose colour is not one of the four
/// markers, or with [`DfError::EmptyImage`] when nothing is eligible.
pub fn classify_image(image: &RgbImage) -> Result<Grid> {
    let mut rows = Vec::with_capacity(image.height() as usize);

    for y in 0..image.height() {
        let mut row = Vec::with_capacity(image.width() as usize);
        for x in 0..image.width() {
            let colour = Colour::from_array(image.get_pixel(x, y).0);
            let pixel = Pixel::from_colour(colour).ok_or_else(|| DfError::InvalidPixelColor {
                colour,
                position: Point::new(x as i32, y as i32),
            })?;
            row.push(pixel);
        }
        rows.push(row);
    }

    Grid::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba, RgbaImage};
    use tempfile::tempdir;

    fn image_from(rows: &[&[Colour]]) -> RgbImage {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        RgbImage::from_fn(width, height, |x, y| {
            Rgb(rows[y as usize][x as usize].to_array())
        })
    }

    #[test]
    fn test_classify_and_crop() {
        let b = Colour::BLACK;
        let w = Colour::WHITE;
        let r = Colour::RED;
        let g = Colour::GREEN;
        let image = image_from(&[&[b, b, b, b], &[b, r, w, b], &[b, w, g, b], &[b, b, b, b]]);

        let grid = classify_image(&image).unwrap();

        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.entrance(), Point::new(0, 0));
        assert_eq!(grid.exit(), Point::new(1, 1));
        assert_eq!(grid.get(Point::new(1, 0)), Some(Pixel::Process));
    }

    #[test]
    fn test_unknown_colour_fails() {
        let blue = Colour::rgb(0, 0, 255);
        let image = image_from(&[&[Colour::WHITE, blue]]);

        let err = classify_image(&image).unwrap_err();
        assert!(matches!(
            err,
            DfError::InvalidPixelColor { colour, position }
                if colour == blue && position == Point::new(1, 0)
        ));
    }

    #[test]
    fn test_all_black_is_empty() {
        let image = image_from(&[&[Colour::BLACK, Colour::BLACK]]);
        assert!(matches!(classify_image(&image), Err(DfError::EmptyImage)));
    }

    #[test]
    fn test_load_grid_ignores_alpha() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");

        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 0]));
        img.put_pixel(1, 0, Rgba([0, 255, 0, 128]));
        img.save(&path).unwrap();

        let grid = load_grid(&path).unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.exit(), Point::new(1, 0));
    }

    #[test]
    fn test_load_grid_bad_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();

        assert!(matches!(load_grid(&path), Err(DfError::Image { .. })));
    }
}
