//! Wall/passage matrix addressed by logical maze cells.
//!
//! Cell `(x, y)` lives at matrix position `(row = 2y + 1, col = 2x + 1)`. The
//! position halfway between two adjacent cells is the wall joining them; even
//! row/column intersections are pillars and are never carved.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Passage,
}

/// The four carving directions. Variant order is the enumeration order used
/// everywhere candidates are listed, so it fixes the random draw sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
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

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Slot in per-direction tables.
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Vec<Tile>>,
    visited: Vec<Vec<bool>>,
}

impl Grid {
    /// All-wall, all-unvisited grid for `width` x `height` cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![vec![Tile::Wall; 2 * width + 1]; 2 * height + 1],
            visited: vec![vec![false; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Matrix columns (`2 * width + 1`).
    pub fn cols(&self) -> usize {
        2 * self.width + 1
    }

    /// Matrix rows (`2 * height + 1`).
    pub fn rows(&self) -> usize {
        2 * self.height + 1
    }

    pub fn tiles(&self) -> &[Vec<Tile>] {
        &self.tiles
    }

    /// Tile at matrix position, `None` outside the matrix.
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        self.tiles.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn is_passage(&self, col: usize, row: usize) -> bool {
        self.tile(col, row) == Some(Tile::Passage)
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn is_visited(&self, x: usize, y: usize) -> bool {
        self.in_bounds(x, y) && self.visited[y][x]
    }

    /// Neighbor cell of `(x, y)` in `dir`, if it is inside the maze.
    pub fn neighbor(&self, x: usize, y: usize, dir: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = dir.delta();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        if self.in_bounds(nx, ny) {
            Some((nx, ny))
        } else {
            None
        }
    }

    /// Marks the cell center as a passage and the cell as visited.
    pub fn carve_cell(&mut self, x: usize, y: usize) {
        self.tiles[2 * y + 1][2 * x + 1] = Tile::Passage;
        self.visited[y][x] = true;
    }

    /// Opens the wall between two 4-adjacent cells.
    ///
    /// # Panics
    ///
    /// Panics if the cells are not 4-adjacent.
    pub fn carve_passage(&mut self, x1: usize, y1: usize, x2: usize, y2: usize) {
        let (col, row) = wall_between(x1, y1, x2, y2);
        self.tiles[row][col] = Tile::Passage;
    }

    /// Opens the matrix position beyond `(x, y)` in `dir` when that position
    /// is on the outer frame. Returns whether anything was opened.
    pub fn open_boundary(&mut self, x: usize, y: usize, dir: Direction) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let at_edge = match dir {
            Direction::Up => y == 0,
            Direction::Down => y == self.height - 1,
            Direction::Left => x == 0,
            Direction::Right => x == self.width - 1,
        };
        if !at_edge {
            return false;
        }
        let (dx, dy) = dir.delta();
        let col = (2 * x + 1).wrapping_add_signed(dx);
        let row = (2 * y + 1).wrapping_add_signed(dy);
        self.set(col, row, Tile::Passage);
        true
    }

    pub(crate) fn set(&mut self, col: usize, row: usize, tile: Tile) {
        self.tiles[row][col] = tile;
    }
}

/// Matrix position `(col, row)` of the wall joining two 4-adjacent cells.
///
/// # Panics
///
/// Panics if the cells are not 4-adjacent.
pub fn wall_between(x1: usize, y1: usize, x2: usize, y2: usize) -> (usize, usize) {
    assert_eq!(
        x1.abs_diff(x2) + y1.abs_diff(y2),
        1,
        "cells ({x1}, {y1}) and ({x2}, {y2}) are not adjacent"
    );
    let col = (2 * x1 + 1 + 2 * x2 + 1) / 2;
    let row = (2 * y1 + 1 + 2 * y2 + 1) / 2;
    (col, row)
}
