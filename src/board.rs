//! Square grid of cells and the flood fill used for groups and liberties.
//!
//! Points are `(row, col)` pairs with row 0 at the top. The grid is stored
//! row-major in a flat `Vec`, and adjacency is computed from coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE};

/// A player / stone color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other color.
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Content of a single point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Color of the stone on this cell, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => GLYPH_EMPTY,
            Cell::Black => GLYPH_BLACK,
            Cell::White => GLYPH_WHITE,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// A board point as `(row, col)`.
pub type Point = (usize, usize);

/// A maximal 4-connected set of same-colored stones with its liberties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub color: Color,
    /// Member stones, in flood-fill order.
    pub stones: Vec<Point>,
    /// Distinct empty points adjacent to the group.
    pub liberties: Vec<Point>,
}

impl Group {
    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    pub fn is_dead(&self) -> bool {
        self.liberties.is_empty()
    }
}

/// Fixed-size square grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An empty `size` x `size` grid. Size validation is the caller's job.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Rebuild a grid from row-major cells. Returns `None` if the length is not `size * size`.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Option<Self> {
        (cells.len() == size * size).then_some(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major cell slice.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Cell at `(row, col)`, or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if !self.contains(row, col) {
            return None;
        }
        Some(self.cells[self.idx(row, col)])
    }

    pub(crate) fn set(&mut self, (row, col): Point, cell: Cell) {
        let i = self.idx(row, col);
        self.cells[i] = cell;
    }

    fn at(&self, (row, col): Point) -> Cell {
        self.cells[self.idx(row, col)]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Count stones of one color.
    pub fn count(&self, color: Color) -> usize {
        let cell = Cell::from(color);
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Orthogonal neighbors of a point that lie on the board.
    pub fn neighbors(&self, (row, col): Point) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        let mut v = Vec::with_capacity(4);
        if row > 0 {
            v.push((row - 1, col));
        }
        if row + 1 < s {
            v.push((row + 1, col));
        }
        if col > 0 {
            v.push((row, col - 1));
        }
        if col + 1 < s {
            v.push((row, col + 1));
        }
        v.into_iter()
    }

    /// Flood-fill the group containing `start`.
    ///
    /// Only cells of the starting stone's color are expanded; empty cells are
    /// recorded as liberties and never end the search. Returns `None` when
    /// `start` is empty or off the board.
    pub fn group_at(&self, start: Point) -> Option<Group> {
        let color = self.get(start.0, start.1)?.color()?;
        let cell = Cell::from(color);
        let mut stack = vec![start];
        let mut visited = vec![false; self.cells.len()];
        let mut liberty_seen = vec![false; self.cells.len()];
        let mut stones = Vec::new();
        let mut liberties = Vec::new();

        visited[self.idx(start.0, start.1)] = true;
        while let Some(pt) = stack.pop() {
            stones.push(pt);
            for n in self.neighbors(pt) {
                let ni = self.idx(n.0, n.1);
                match self.at(n) {
                    Cell::Empty => {
                        if !liberty_seen[ni] {
                            liberty_seen[ni] = true;
                            liberties.push(n);
                        }
                    }
                    c if c == cell && !visited[ni] => {
                        visited[ni] = true;
                        stack.push(n);
                    }
                    _ => {}
                }
            }
        }
        log::trace!(
            "group at {:?}: {} stones, {} liberties",
            start,
            stones.len(),
            liberties.len()
        );
        Some(Group {
            color,
            stones,
            liberties,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&str]) -> Grid {
        let size = rows.len();
        let cells = rows
            .iter()
            .flat_map(|r| r.chars())
            .map(|c| match c {
                'X' => Cell::Black,
                'O' => Cell::White,
                _ => Cell::Empty,
            })
            .collect();
        Grid::from_cells(size, cells).unwrap()
    }

    #[test]
    fn test_new_grid_is_empty() {
        let g = Grid::new(9);
        assert_eq!(g.size(), 9);
        assert!(g.cells().iter().all(|c| c.is_empty()));
        assert_eq!(g.get(9, 0), None);
    }

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        assert!(Grid::from_cells(3, vec![Cell::Empty; 8]).is_none());
    }

    #[test]
    fn test_neighbors_corner_and_center() {
        let g = Grid::new(5);
        assert_eq!(g.neighbors((0, 0)).count(), 2);
        assert_eq!(g.neighbors((0, 2)).count(), 3);
        assert_eq!(g.neighbors((2, 2)).count(), 4);
    }

    #[test]
    fn test_single_stone_liberties() {
        let g = grid_from(&[".....", ".....", "..X..", ".....", "....."]);
        let group = g.group_at((2, 2)).unwrap();
        assert_eq!(group.stones, vec![(2, 2)]);
        assert_eq!(group.liberty_count(), 4);
    }

    #[test]
    fn test_shared_liberty_counted_once() {
        let g = grid_from(&["X.X", "...", "..."]);
        // Two separate groups; each sees (0, 1) once.
        assert_eq!(g.group_at((0, 0)).unwrap().liberty_count(), 2);
        let g = grid_from(&["XX.", "X..", "..."]);
        let group = g.group_at((0, 0)).unwrap();
        assert_eq!(group.stones.len(), 3);
        assert_eq!(group.liberty_count(), 3);
    }

    #[test]
    fn test_group_stops_at_other_color() {
        let g = grid_from(&["XO.", "OO.", "..."]);
        let black = g.group_at((0, 0)).unwrap();
        assert!(black.is_dead());
        let white = g.group_at((0, 1)).unwrap();
        assert_eq!(white.stones.len(), 3);
        assert_eq!(white.liberty_count(), 4);
    }

    #[test]
    fn test_group_at_empty_is_none() {
        let g = Grid::new(3);
        assert!(g.group_at((1, 1)).is_none());
        assert!(g.group_at((3, 3)).is_none());
    }

    #[test]
    fn test_display() {
        let g = grid_from(&["X.", ".O"]);
        assert_eq!(g.to_string(), "X .\n. O\n");
    }
}
