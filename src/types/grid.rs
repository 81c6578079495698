//! The cropped cell grid an image is painted from.

use crate::error::{DfError, Result};
use crate::types::{Pixel, Point};

/// An immutable grid of cell categories.
///
/// The grid is cropped to the bounding box of its eligible cells, so the
/// top-left cell is `(0, 0)` and every row and column holds at least one cell
/// that needs painting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Row-major cells: `cells[y * width + x]`.
    cells: Vec<Pixel>,
    width: usize,
    height: usize,
    entrance: Point,
    exit: Point,
}

impl Grid {
    /// Build a grid from rows of cells, cropping away the `Ignore` border.
    ///
    /// Short rows are padded with `Ignore`. Fails with [`DfError::EmptyImage`]
    /// when no eligible cell exists.
    pub fn new(rows: Vec<Vec<Pixel>>) -> Result<Self> {
        let full_width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let eligible = |x: usize, y: usize| rows[y].get(x).is_some_and(|p| p.is_eligible());

        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for y in 0..rows.len() {
            for x in 0..full_width {
                if !eligible(x, y) {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((min_x, min_y, max_x, max_y)) => {
                        (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
                    }
                });
            }
        }

        let (min_x, min_y, max_x, max_y) = bounds.ok_or(DfError::EmptyImage)?;
        let width = max_x - min_x + 1;
        let height = max_y - min_y + 1;

        let mut cells = Vec::with_capacity(width * height);
        for row in &rows[min_y..=max_y] {
            for x in min_x..=max_x {
                cells.push(row.get(x).copied().unwrap_or(Pixel::Ignore));
            }
        }

        let mut grid = Self {
            cells,
            width,
            height,
            entrance: Point::default(),
            exit: Point::default(),
        };
        let center = grid.center();
        grid.entrance = grid.find_by_category(Pixel::Enter).unwrap_or(center);
        grid.exit = grid.find_by_category(Pixel::Exit).unwrap_or(center);

        Ok(grid)
    }

    /// Build a grid from a text picture, one line per row.
    ///
    /// `.` is `Ignore`, `#` is `Process`, `E` is `Enter` and `X` is `Exit`.
    /// Any other character is treated as `Ignore`.
    pub fn from_text(text: &str) -> Result<Self> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        '#' => Pixel::Process,
                        'E' => Pixel::Enter,
                        'X' => Pixel::Exit,
                        _ => Pixel::Ignore,
                    })
                    .collect()
            })
            .collect();

        Self::new(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Where the cursor starts: the `Enter` marker, or the center.
    pub fn entrance(&self) -> Point {
        self.entrance
    }

    /// Where the cursor ends: the `Exit` marker, or the center.
    pub fn exit(&self) -> Point {
        self.exit
    }

    /// Integer-floor geometric center of the grid.
    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Whether the point lies inside the grid.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    /// The category at a point, or `None` outside the grid.
    pub fn get(&self, point: Point) -> Option<Pixel> {
        if !self.contains(point) {
            return None;
        }
        self.cells
            .get(point.y as usize * self.width + point.x as usize)
            .copied()
    }

    /// Whether the point is an in-bounds cell that needs painting.
    pub fn is_eligible(&self, point: Point) -> bool {
        self.get(point).is_some_and(Pixel::is_eligible)
    }

    /// First cell of the given category in row-major order.
    pub fn find_by_category(&self, category: Pixel) -> Option<Point> {
        self.points().find(|&p| self.get(p) == Some(category))
    }

    /// Every cell position in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.width as i32;
        (0..self.height as i32).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    /// Every eligible cell position in row-major order.
    pub fn eligible_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(|&p| self.is_eligible(p))
    }

    /// Number of cells that need painting.
    pub fn eligible_count(&self) -> usize {
        self.cells.iter().filter(|p| p.is_eligible()).count()
    }

    /// Every point of the rectangle spanned by `a` and `b`, inclusive,
    /// row-major from its top-left corner.
    pub fn points_in_selection(&self, a: Point, b: Point) -> Vec<Point> {
        selection(a, b).collect()
    }

    /// Categories of [`Grid::points_in_selection`], in the same order.
    ///
    /// Points outside the grid read as `Ignore`.
    pub fn values_in_selection(&self, a: Point, b: Point) -> Vec<Pixel> {
        selection(a, b)
            .map(|p| self.get(p).unwrap_or(Pixel::Ignore))
            .collect()
    }

    /// Whether any cell of the rectangle is `Ignore` or off the grid.
    pub fn selection_has_ignore(&self, a: Point, b: Point) -> bool {
        selection(a, b).any(|p| !self.is_eligible(p))
    }
}

/// Iterate the rectangle spanned by two corners, row-major from its top-left.
pub fn selection(a: Point, b: Point) -> impl Iterator<Item = Point> {
    let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
    let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));
    (min_y..=max_y).flat_map(move |y| (min_x..=max_x).map(move |x| Point::new(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_to_eligible_bounds() {
        let grid = Grid::from_text(
            "
            .....
            ..#..
            ..##.
            .....
            ",
        )
        .unwrap();

        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(Point::new(0, 0)), Some(Pixel::Process));
        assert_eq!(grid.get(Point::new(1, 0)), Some(Pixel::Ignore));
        assert_eq!(grid.get(Point::new(1, 1)), Some(Pixel::Process));
        assert_eq!(grid.eligible_count(), 3);
    }

    #[test]
    fn test_empty_grid_fails() {
        let err = Grid::from_text("...\n...").unwrap_err();
        assert!(matches!(err, DfError::EmptyImage));
        assert!(matches!(Grid::new(vec![]), Err(DfError::EmptyImage)));
    }

    #[test]
    fn test_entrance_and_exit_markers() {
        let grid = Grid::from_text("#E#\n##X").unwrap();
        assert_eq!(grid.entrance(), Point::new(1, 0));
        assert_eq!(grid.exit(), Point::new(2, 1));
    }

    #[test]
    fn test_entrance_and_exit_fall_back_independently() {
        let grid = Grid::from_text("E###\n####\n####").unwrap();
        assert_eq!(grid.entrance(), Point::new(0, 0));
        assert_eq!(grid.exit(), Point::new(2, 1));

        let grid = Grid::from_text("####\n####\n###X").unwrap();
        assert_eq!(grid.entrance(), Point::new(2, 1));
        assert_eq!(grid.exit(), Point::new(3, 2));
    }

    #[test]
    fn test_marker_coordinates_are_crop_relative() {
        let grid = Grid::from_text("....\n..E#\n..##").unwrap();
        assert_eq!(grid.entrance(), Point::new(0, 0));
    }

    #[test]
    fn test_find_by_category_is_row_major() {
        let grid = Grid::from_text("#.#E\nE###").unwrap();
        assert_eq!(grid.find_by_category(Pixel::Enter), Some(Point::new(3, 0)));
        assert_eq!(grid.find_by_category(Pixel::Ignore), Some(Point::new(1, 0)));
        assert_eq!(grid.find_by_category(Pixel::Exit), None);
    }

    #[test]
    fn test_points_in_selection_order() {
        let grid = Grid::from_text("###\n###").unwrap();
        let expected = vec![
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(0, 1),
            Point::new(1, 1),
            Point::new(2, 1),
        ];

        assert_eq!(
            grid.points_in_selection(Point::new(0, 0), Point::new(2, 1)),
            expected
        );
        assert_eq!(
            grid.points_in_selection(Point::new(2, 1), Point::new(0, 0)),
            expected
        );
        assert_eq!(
            grid.points_in_selection(Point::new(2, 0), Point::new(0, 1)),
            expected
        );
    }

    #[test]
    fn test_single_point_selection() {
        let grid = Grid::from_text("#").unwrap();
        let p = Point::new(0, 0);
        assert_eq!(grid.points_in_selection(p, p), vec![p]);
    }

    #[test]
    fn test_values_in_selection() {
        let grid = Grid::from_text("#.\nE#").unwrap();
        assert_eq!(
            grid.values_in_selection(Point::new(1, 1), Point::new(0, 0)),
            vec![Pixel::Process, Pixel::Ignore, Pixel::Enter, Pixel::Process]
        );
        assert!(grid.selection_has_ignore(Point::new(0, 0), Point::new(1, 0)));
        assert!(!grid.selection_has_ignore(Point::new(0, 0), Point::new(0, 1)));
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::from_text("##").unwrap();
        assert_eq!(grid.get(Point::new(-1, 0)), None);
        assert_eq!(grid.get(Point::new(2, 0)), None);
        assert!(!grid.is_eligible(Point::new(0, 1)));
        assert!(grid.selection_has_ignore(Point::new(0, 0), Point::new(2, 0)));
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let grid = Grid::new(vec![
            vec![Pixel::Process],
            vec![Pixel::Process, Pixel::Process],
        ])
        .unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.get(Point::new(1, 0)), Some(Pixel::Ignore));
    }
}
