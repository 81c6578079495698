//! Replaying a command log to check what it paints.

use crate::error::Result;
use crate::types::{Command, Grid, Point};

use super::Brush;

/// What a replayed command log did to a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    /// Eligible cells the log never painted, row-major.
    pub missing: Vec<Point>,
    /// Painted cells that are `Ignore` or off the grid, row-major.
    pub stray: Vec<Point>,
    /// The log ended with a selection still open.
    pub unclosed: bool,
    /// Where the cursor ended.
    pub end: Point,
    /// Whether that is the grid's exit.
    pub ends_at_exit: bool,
    /// Number of committed selections.
    pub selections: usize,
}

impl ReplayReport {
    /// Every eligible cell painted, nothing else painted, selections balanced.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.stray.is_empty() && !self.unclosed
    }
}

/// Replay `commands` from the grid's entrance on a fresh brush.
pub fn replay(grid: &Grid, commands: &[Command]) -> Result<ReplayReport> {
    let mut brush = Brush::new(grid.entrance());
    for &command in commands {
        brush.apply(command)?;
    }

    let missing = grid
        .eligible_points()
        .filter(|&p| !brush.is_painted(p))
        .collect();

    let mut stray: Vec<Point> = brush
        .painted()
        .iter()
        .copied()
        .filter(|&p| !grid.is_eligible(p))
        .collect();
    stray.sort_by_key(|p| (p.y, p.x));

    Ok(ReplayReport {
        missing,
        stray,
        unclosed: brush.is_painting(),
        end: brush.position(),
        ends_at_exit: brush.position() == grid.exit(),
        selections: brush.selections().len(),
    })
}
