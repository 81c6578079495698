//! Terminal preview of a painting run.
//!
//! Draws the grid after each tick: the cursor in yellow, painted cells in
//! green, background in dark grey, and cells still to paint in white.

use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::Duration;

use crate::brush::coverage::TickObserver;
use crate::brush::Brush;
use crate::types::{Grid, Point};

/// Pause between preview frames.
pub const FRAME_DELAY: Duration = Duration::from_millis(200);

const RESET: &str = "\x1b[0m";
const GREY: &str = "\x1b[90m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CLEAR: &str = "\x1b[2J\x1b[H";

const CURSOR_CELL: &str = "■■■";
const SOLID_CELL: &str = "███";

/// Render one frame of the grid with row and column rulers.
///
/// Without colour, painted cells are drawn as `░░░` and background as
/// blanks so the frame stays readable.
pub fn render_frame(grid: &Grid, brush: &Brush, colour: bool) -> String {
    let mut frame = String::from("   ");
    for x in 0..grid.width() {
        frame.push_str(&format!("{:3}", x));
    }
    frame.push('\n');

    for y in 0..grid.height() as i32 {
        frame.push_str(&format!("{:3}", y));
        for x in 0..grid.width() as i32 {
            let point = Point::new(x, y);
            let (paint, cell) = if point == brush.position() {
                (YELLOW, CURSOR_CELL)
            } else if brush.is_painted(point) {
                (GREEN, if colour { SOLID_CELL } else { "░░░" })
            } else if !grid.is_eligible(point) {
                (GREY, if colour { SOLID_CELL } else { "   " })
            } else {
                ("", SOLID_CELL)
            };

            if colour && !paint.is_empty() {
                frame.push_str(paint);
                frame.push_str(cell);
                frame.push_str(RESET);
            } else {
                frame.push_str(cell);
            }
        }
        frame.push('\n');
    }

    frame.push_str(&format!("Movements: {}\n", brush.commands().len()));
    frame
}

/// Observer that redraws the grid on stdout after every tick.
pub struct TerminalPreview {
    delay: Duration,
    colour: bool,
}

impl TerminalPreview {
    pub fn new() -> Self {
        Self {
            delay: FRAME_DELAY,
            colour: io::stdout().is_terminal(),
        }
    }

    /// Override the frame delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for TerminalPreview {
    fn default() -> Self {
        Self::new()
    }
}

impl TickObserver for TerminalPreview {
    fn on_tick(&mut self, grid: &Grid, brush: &Brush) {
        let frame = render_frame(grid, brush, self.colour);
        let mut stdout = io::stdout().lock();
        if self.colour {
            let _ = stdout.write_all(CLEAR.as_bytes());
        }
        let _ = stdout.write_all(frame.as_bytes());
        let _ = stdout.flush();
        drop(stdout);

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_frame_plain() {
        let grid = Grid::from_text("#.#").unwrap();
        let mut brush = Brush::new(Point::new(0, 0));
        brush.start_painting().unwrap();
        brush.stop_painting().unwrap();
        brush.move_to(Point::new(2, 0));

        let frame = render_frame(&grid, &brush, false);
        let lines: Vec<_> = frame.lines().collect();

        assert_eq!(lines[0], "     0  1  2");
        assert_eq!(lines[1], "  0░░░   ■■■");
        assert_eq!(lines[2], "Movements: 4");
    }

    #[test]
    fn test_render_frame_colour_marks_cursor() {
        let grid = Grid::from_text("##").unwrap();
        let brush = Brush::new(Point::new(1, 0));

        let frame = render_frame(&grid, &brush, true);
        assert!(frame.contains(&format!("{YELLOW}{CURSOR_CELL}{RESET}")));
        assert!(frame.contains(&format!("  0{SOLID_CELL}{YELLOW}")));
    }

    #[test]
    fn test_observer_without_delay() {
        let grid = Grid::from_text("#").unwrap();
        let brush = Brush::new(Point::new(0, 0));
        let mut preview = TerminalPreview::new().with_delay(Duration::ZERO);
        preview.on_tick(&grid, &brush);
    }
}
