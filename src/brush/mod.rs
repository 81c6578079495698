//! The simulated macro cursor.
//!
//! A [`Brush`] tracks the cursor position, whether a selection is open, every
//! cell covered by a committed selection, and the commands emitted so far.
//! The [`coverage`] module drives it across a [`Grid`](crate::types::Grid);
//! [`replay`] runs an existing command log back through it.

pub mod coverage;
pub mod replay;

use std::collections::HashSet;

use crate::error::{DfError, Result};
use crate::types::{selection, Command, Direction, Point, FAST_STEP};

/// Selection state of the brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintState {
    Idle,
    /// A selection is open; `anchor` is where it started.
    Painting { anchor: Point },
}

/// Cursor state plus the command log that reproduces it.
#[derive(Debug, Clone)]
pub struct Brush {
    position: Point,
    state: PaintState,
    /// Only ever grows.
    painted: HashSet<Point>,
    /// Committed selections as `(anchor, corner)`, oldest first.
    selections: Vec<(Point, Point)>,
    commands: Vec<Command>,
}

impl Brush {
    /// Create an idle brush at `start` with nothing painted.
    pub fn new(start: Point) -> Self {
        Self {
            position: start,
            state: PaintState::Idle,
            painted: HashSet::new(),
            selections: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn state(&self) -> PaintState {
        self.state
    }

    pub fn is_painting(&self) -> bool {
        matches!(self.state, PaintState::Painting { .. })
    }

    /// Cells covered by committed selections.
    pub fn painted(&self) -> &HashSet<Point> {
        &self.painted
    }

    pub fn is_painted(&self, point: Point) -> bool {
        self.painted.contains(&point)
    }

    /// Committed selections as `(anchor, corner)` pairs, oldest first.
    pub fn selections(&self) -> &[(Point, Point)] {
        &self.selections
    }

    /// Commands emitted so far, oldest first.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }

    /// Walk the cursor to `target`, X axis first, then Y.
    ///
    /// Along each axis a fast command is used while at least [`FAST_STEP`]
    /// cells remain, so a distance `d` costs `d / 10` fast moves followed by
    /// `d % 10` normal moves. Never overshoots.
    pub fn move_to(&mut self, target: Point) {
        while self.position != target {
            let (direction, remaining) = if self.position.x != target.x {
                let dx = target.x - self.position.x;
                let direction = if dx > 0 { Direction::Right } else { Direction::Left };
                (direction, dx.abs())
            } else {
                let dy = target.y - self.position.y;
                let direction = if dy > 0 { Direction::Down } else { Direction::Up };
                (direction, dy.abs())
            };

            let command = if remaining >= FAST_STEP {
                Command::MoveFast(direction)
            } else {
                Command::Move(direction)
            };
            self.shift(command);
        }
    }

    /// Open a selection at the current position.
    pub fn start_painting(&mut self) -> Result<()> {
        if self.is_painting() {
            return Err(DfError::AlreadyPainting);
        }
        self.state = PaintState::Painting {
            anchor: self.position,
        };
        self.commands.push(Command::Select);
        Ok(())
    }

    /// Close the open selection, painting every cell between its anchor and
    /// the current position.
    pub fn stop_painting(&mut self) -> Result<()> {
        let PaintState::Painting { anchor } = self.state else {
            return Err(DfError::NotPainting);
        };
        self.painted.extend(selection(anchor, self.position));
        self.selections.push((anchor, self.position));
        self.state = PaintState::Idle;
        self.commands.push(Command::Select);
        log::trace!("painted {} -> {}", anchor, self.position);
        Ok(())
    }

    /// Replay one command: moves shift the cursor, `Select` toggles painting.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Select if self.is_painting() => self.stop_painting(),
            Command::Select => self.start_painting(),
            Command::Move(_) | Command::MoveFast(_) => {
                self.shift(command);
                Ok(())
            }
        }
    }

    fn shift(&mut self, command: Command) {
        if let Command::Move(direction) | Command::MoveFast(direction) = command {
            self.position = direction.step(self.position, command.distance());
            self.commands.push(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use Command::{Move, MoveFast, Select};
    use Direction::{Down, Left, Right, Up};

    #[test]
    fn test_move_to_single_axis_prefers_fast() {
        let mut brush = Brush::new(Point::new(0, 0));
        brush.move_to(Point::new(23, 0));

        assert_eq!(brush.position(), Point::new(23, 0));
        assert_eq!(
            brush.commands(),
            &[
                MoveFast(Right),
                MoveFast(Right),
                Move(Right),
                Move(Right),
                Move(Right)
            ]
        );
    }

    #[test]
    fn test_move_to_resolves_x_before_y() {
        let mut brush = Brush::new(Point::new(12, 3));
        brush.move_to(Point::new(10, 14));

        assert_eq!(brush.position(), Point::new(10, 14));
        assert_eq!(
            brush.commands(),
            &[Move(Left), Move(Left), MoveFast(Down), Move(Down)]
        );
    }

    #[test]
    fn test_move_to_exactly_ten_is_one_fast_move() {
        let mut brush = Brush::new(Point::new(0, 10));
        brush.move_to(Point::new(0, 0));
        assert_eq!(brush.commands(), &[MoveFast(Up)]);
    }

    #[test]
    fn test_move_to_same_point_is_noop() {
        let mut brush = Brush::new(Point::new(4, 4));
        brush.move_to(Point::new(4, 4));
        assert!(brush.commands().is_empty());
    }

    #[test]
    fn test_start_then_stop_paints_current_cell() {
        let mut brush = Brush::new(Point::new(2, 3));
        brush.start_painting().unwrap();
        brush.stop_painting().unwrap();

        assert_eq!(brush.painted().len(), 1);
        assert!(brush.is_painted(Point::new(2, 3)));
        assert_eq!(brush.commands(), &[Select, Select]);
        assert_eq!(brush.state(), PaintState::Idle);
    }

    #[test]
    fn test_stop_paints_rectangle_in_any_direction() {
        let mut brush = Brush::new(Point::new(3, 3));
        brush.start_painting().unwrap();
        brush.move_to(Point::new(1, 2));
        brush.stop_painting().unwrap();

        let expected: HashSet<Point> = [(1, 2), (2, 2), (3, 2), (1, 3), (2, 3), (3, 3)]
            .into_iter()
            .map(Point::from)
            .collect();
        assert_eq!(brush.painted(), &expected);
        assert_eq!(brush.selections(), &[(Point::new(3, 3), Point::new(1, 2))]);
    }

    #[test]
    fn test_painted_only_grows() {
        let mut brush = Brush::new(Point::new(0, 0));
        brush.start_painting().unwrap();
        brush.move_to(Point::new(1, 0));
        brush.stop_painting().unwrap();

        brush.start_painting().unwrap();
        brush.stop_painting().unwrap();

        assert_eq!(brush.painted().len(), 2);
    }

    #[test]
    fn test_state_errors() {
        let mut brush = Brush::new(Point::new(0, 0));
        assert!(matches!(brush.stop_painting(), Err(DfError::NotPainting)));

        brush.start_painting().unwrap();
        assert_eq!(
            brush.state(),
            PaintState::Painting {
                anchor: Point::new(0, 0)
            }
        );
        assert!(matches!(
            brush.start_painting(),
            Err(DfError::AlreadyPainting)
        ));
    }

    #[test]
    fn test_apply_replays_commands() {
        let mut brush = Brush::new(Point::new(0, 0));
        for command in [Select, MoveFast(Right), Move(Down), Select, Move(Left)] {
            brush.apply(command).unwrap();
        }

        assert_eq!(brush.position(), Point::new(9, 1));
        assert_eq!(brush.painted().len(), 22);
        assert!(!brush.is_painting());
        assert_eq!(brush.commands().len(), 5);
    }
}
