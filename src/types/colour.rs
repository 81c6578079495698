//! Colour type for the marker palette.

use std::fmt;

/// An opaque RGB colour value read from an input image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a colour from an `[r, g, b]` array, as delivered by `image::Rgb`.
    pub const fn from_array(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Black, the background colour.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White, marks cells to paint.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Red, marks the entrance.
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Green, marks the exit.
    pub const GREEN: Self = Self::rgb(0, 255, 0);

    /// Convert to an RGB array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
