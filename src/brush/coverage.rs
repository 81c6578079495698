//! Greedy rectangle covering.
//!
//! Each tick picks the nearest unpainted cell, grows the largest rectangle of
//! unpainted, non-`Ignore` cells from it in each of the four diagonal
//! quadrants, and commits the one that paints the most new cells. Every tick
//! paints at least its starting cell, so the loop always terminates.
//!
//! The query functions here take the painted set explicitly and never mutate
//! it; only [`Painter`] writes through its [`Brush`].

use std::collections::HashSet;

use crate::error::Result;
use crate::types::{selection, Direction, Grid, Point};

use super::Brush;

/// One of the four directions a rectangle can grow from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl Quadrant {
    /// Evaluation order; earlier quadrants win ties.
    pub const ORDER: [Quadrant; 4] = [
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
        Quadrant::TopLeft,
        Quadrant::TopRight,
    ];

    pub fn horizontal(self) -> Direction {
        match self {
            Quadrant::BottomLeft | Quadrant::TopLeft => Direction::Left,
            Quadrant::BottomRight | Quadrant::TopRight => Direction::Right,
        }
    }

    pub fn vertical(self) -> Direction {
        match self {
            Quadrant::BottomLeft | Quadrant::BottomRight => Direction::Down,
            Quadrant::TopLeft | Quadrant::TopRight => Direction::Up,
        }
    }
}

/// Nearest unpainted eligible cell by Manhattan distance.
///
/// Cells are scanned row-major and the first one found wins ties.
pub fn nearest_unpainted(grid: &Grid, painted: &HashSet<Point>, from: Point) -> Option<Point> {
    let mut best: Option<(u32, Point)> = None;
    for point in grid.eligible_points() {
        if painted.contains(&point) {
            continue;
        }
        let distance = from.distance(point);
        if best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, point));
        }
    }
    best.map(|(_, point)| point)
}

/// Number of points in the rectangle `[a, b]` not yet painted.
pub fn count_unpainted(painted: &HashSet<Point>, a: Point, b: Point) -> usize {
    selection(a, b).filter(|p| !painted.contains(p)).count()
}

/// The row or column a rectangle gains when its corner steps to `candidate`.
///
/// Returned as the two ends of the strip; `direction` is the step taken.
pub fn added_strip(anchor: Point, candidate: Point, direction: Direction) -> (Point, Point) {
    match direction {
        Direction::Left | Direction::Right => (Point::new(candidate.x, anchor.y), candidate),
        Direction::Up | Direction::Down => (Point::new(anchor.x, candidate.y), candidate),
    }
}

/// Grow a rectangle from `anchor` into `quadrant`, X first and then Y.
///
/// A step is taken while the candidate corner is eligible, the rectangle
/// gains no `Ignore` cell, and the grown rectangle still holds an unpainted
/// cell. The rectangle is clean before every step, so only the added strip
/// is inspected. Returns the opposite corner.
pub fn grow_corner(
    grid: &Grid,
    painted: &HashSet<Point>,
    anchor: Point,
    quadrant: Quadrant,
) -> Point {
    let mut corner = anchor;
    let mut has_unpainted = !painted.contains(&anchor);

    for direction in [quadrant.horizontal(), quadrant.vertical()] {
        loop {
            let candidate = direction.step(corner, 1);
            if !grid.is_eligible(candidate) {
                break;
            }

            let (from, to) = added_strip(anchor, candidate, direction);
            if grid.selection_has_ignore(from, to) {
                break;
            }
            if !has_unpainted && selection(from, to).all(|p| painted.contains(&p)) {
                break;
            }

            has_unpainted = true;
            corner = candidate;
        }
    }
    corner
}

/// The corner whose rectangle paints the most new cells, and that count.
pub fn best_corner(grid: &Grid, painted: &HashSet<Point>, anchor: Point) -> (Point, usize) {
    let mut best = (anchor, 0);
    let mut best_quadrant = None;

    for quadrant in Quadrant::ORDER {
        let corner = grow_corner(grid, painted, anchor, quadrant);
        let score = count_unpainted(painted, anchor, corner);
        if best_quadrant.is_none() || score > best.1 {
            best = (corner, score);
            best_quadrant = Some(quadrant);
        }
    }

    log::trace!(
        "best corner from {}: {} via {:?} ({} cells)",
        anchor,
        best.0,
        best_quadrant,
        best.1
    );
    best
}

/// Receives the painting state as it evolves.
pub trait TickObserver {
    fn on_tick(&mut self, grid: &Grid, brush: &Brush);
}

impl<F> TickObserver for F
where
    F: FnMut(&Grid, &Brush),
{
    fn on_tick(&mut self, grid: &Grid, brush: &Brush) {
        self(grid, brush)
    }
}

/// Drives a [`Brush`] over a [`Grid`] until every eligible cell is painted.
#[derive(Debug)]
pub struct Painter<'g> {
    grid: &'g Grid,
    brush: Brush,
    eligible: usize,
    ticks: usize,
}

impl<'g> Painter<'g> {
    /// Start a brush at the grid's entrance.
    pub fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            brush: Brush::new(grid.entrance()),
            eligible: grid.eligible_count(),
            ticks: 0,
        }
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// Number of rectangles committed so far.
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    /// Whether eligible cells remain unpainted.
    pub fn has_unpainted(&self) -> bool {
        self.brush.painted().len() < self.eligible
    }

    /// Paint one rectangle. Returns whether unpainted cells remain.
    pub fn tick(&mut self) -> Result<bool> {
        let position = self.brush.position();
        let start = if self.brush.is_painted(position) || !self.grid.is_eligible(position) {
            match nearest_unpainted(self.grid, self.brush.painted(), position) {
                Some(point) => point,
                None => return Ok(false),
            }
        } else {
            position
        };

        self.brush.move_to(start);
        self.brush.start_painting()?;
        let (corner, score) = best_corner(self.grid, self.brush.painted(), start);
        self.brush.move_to(corner);
        self.brush.stop_painting()?;
        self.ticks += 1;

        log::debug!(
            "tick {}: painted {} -> {} ({} new cells, {} of {} done)",
            self.ticks,
            start,
            corner,
            score,
            self.brush.painted().len(),
            self.eligible
        );

        Ok(self.has_unpainted())
    }

    /// Tick until done, then park the cursor on the exit.
    pub fn run(mut self, observer: &mut dyn TickObserver) -> Result<Brush> {
        while self.tick()? {
            observer.on_tick(self.grid, &self.brush);
        }
        self.brush.move_to(self.grid.exit());
        observer.on_tick(self.grid, &self.brush);
        Ok(self.brush)
    }
}

/// Plan the full command log for a grid.
pub fn plan(grid: &Grid) -> Result<Brush> {
    plan_with(grid, &mut |_: &Grid, _: &Brush| {})
}

/// Plan the full command log for a grid, reporting every tick to `observer`.
pub fn plan_with(grid: &Grid, observer: &mut dyn TickObserver) -> Result<Brush> {
    Painter::new(grid).run(observer)
}
