//! Cell categories decoded from marker colours.

use std::fmt;

use crate::types::Colour;

/// What a single grid cell means to the brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {
    /// Background; never painted.
    Ignore,
    /// A cell to paint.
    Process,
    /// Paintable cell where the cursor starts.
    Enter,
    /// Paintable cell where the cursor ends.
    Exit,
}

impl Pixel {
    /// Map a marker colour to its category, or `None` for any other colour.
    pub fn from_colour(colour: Colour) -> Option<Self> {
        match colour {
            Colour::BLACK => Some(Pixel::Ignore),
            Colour::WHITE => Some(Pixel::Process),
            Colour::RED => Some(Pixel::Enter),
            Colour::GREEN => Some(Pixel::Exit),
            _ => None,
        }
    }

    /// The marker colour for this category.
    pub fn colour(self) -> Colour {
        match self {
            Pixel::Ignore => Colour::BLACK,
            Pixel::Process => Colour::WHITE,
            Pixel::Enter => Colour::RED,
            Pixel::Exit => Colour::GREEN,
        }
    }

    /// Whether the brush has to paint this cell.
    pub fn is_eligible(self) -> bool {
        self != Pixel::Ignore
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pixel::Ignore => "ignore",
            Pixel::Process => "process",
            Pixel::Enter => "enter",
            Pixel::Exit => "exit",
        };
        f.write_str(name)
    }
}
