//! Cursor commands understood by the macro player.

use std::fmt;
use std::str::FromStr;

use crate::error::DfError;
use crate::types::Point;

/// Cells moved by a fast command.
pub const FAST_STEP: i32 = 10;

/// A cursor direction. `Down` and `Right` increase the coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset `(dx, dy)` of one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The point `distance` steps away in this direction.
    pub fn step(self, from: Point, distance: i32) -> Point {
        let (dx, dy) = self.offset();
        Point::new(from.x + dx * distance, from.y + dy * distance)
    }

    fn token(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

/// One macro command.
///
/// The set is closed: a selection toggle plus a normal and a fast move for
/// each of the four directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Start or finish a rectangular selection at the cursor.
    Select,
    /// Move the cursor one cell.
    Move(Direction),
    /// Move the cursor [`FAST_STEP`] cells.
    MoveFast(Direction),
}

impl Command {
    /// Every command, in token table order.
    pub fn all() -> impl Iterator<Item = Command> {
        std::iter::once(Command::Select)
            .chain(Direction::ALL.into_iter().map(Command::Move))
            .chain(Direction::ALL.into_iter().map(Command::MoveFast))
    }

    /// Cells this command moves the cursor.
    pub fn distance(self) -> i32 {
        match self {
            Command::Select => 0,
            Command::Move(_) => 1,
            Command::MoveFast(_) => FAST_STEP,
        }
    }

    /// The macro player's key token for this command.
    pub fn token(self) -> String {
        match self {
            Command::Select => "SELECT".to_string(),
            Command::Move(direction) => format!("KEYBOARD_CURSOR_{}", direction.token()),
            Command::MoveFast(direction) => {
                format!("KEYBOARD_CURSOR_{}_FAST", direction.token())
            }
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

impl FromStr for Command {
    type Err = DfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Command::all()
            .find(|command| command.token() == token)
            .ok_or_else(|| DfError::UnknownCommand {
                token: token.to_string(),
            })
    }
}
