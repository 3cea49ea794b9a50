use std::collections::VecDeque;
use std::fmt;

use crate::grid::{Direction, Grid, Tile};

/// Counts derived purely from the wall/passage matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct MazeStats {
    pub grid_width: usize,
    pub grid_height: usize,
    pub maze_width: usize,
    pub maze_height: usize,
    pub total_cells: usize,
    pub wall_count: usize,
    pub passage_count: usize,
    /// Percentage of open matrix positions.
    pub sparsity: f64,
    pub dead_ends: usize,
    /// Open wall positions strictly inside the outer frame.
    pub internal_passages: usize,
}

impl MazeStats {
    pub fn calculate(grid: &Grid) -> Self {
        let tiles = grid.tiles();
        let grid_height = grid.rows();
        let grid_width = grid.cols();
        let total_cells = grid_width * grid_height;

        let passage_count = tiles
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&t| t == Tile::Passage)
            .count();
        let wall_count = total_cells - passage_count;

        let mut internal_passages = 0;
        for row in 1..grid_height - 1 {
            for col in 1..grid_width - 1 {
                let is_wall_slot = (row % 2 == 0) != (col % 2 == 0);
                if is_wall_slot && tiles[row][col] == Tile::Passage {
                    internal_passages += 1;
                }
            }
        }

        Self {
            grid_width,
            grid_height,
            maze_width: grid.width(),
            maze_height: grid.height(),
            total_cells,
            wall_count,
            passage_count,
            sparsity: passage_count as f64 / total_cells as f64 * 100.0,
            dead_ends: count_dead_ends(grid),
            internal_passages,
        }
    }

    /// Share of maze cells that are not dead ends, in percent.
    pub fn connectivity(&self) -> f64 {
        let cells = (self.maze_width * self.maze_height) as f64;
        100.0 - self.dead_ends as f64 / cells * 100.0
    }

    pub fn summarize(&self) -> String {
        format!(
            "{}x{} maze, {:.1}% open, {} dead ends",
            self.maze_width, self.maze_height, self.sparsity, self.dead_ends
        )
    }
}

impl fmt::Display for MazeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics:")?;
        writeln!(f, "  Grid size: {} × {}", self.grid_width, self.grid_height)?;
        writeln!(f, "  Maze cells: {} × {}", self.maze_width, self.maze_height)?;
        writeln!(f, "  Sparsity: {:.1}% open", self.sparsity)?;
        writeln!(f, "  Dead ends: {}", self.dead_ends)?;
        write!(f, "  Connectivity: {:.1}%", self.connectivity())
    }
}

/// Open cell centers with walls on exactly three of four sides.
pub fn count_dead_ends(grid: &Grid) -> usize {
    let mut count = 0;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let (col, row) = (2 * x + 1, 2 * y + 1);
            if !grid.is_passage(col, row) {
                continue;
            }
            let walls = Direction::ALL
                .into_iter()
                .filter(|dir| {
                    let (dx, dy) = dir.delta();
                    let tile = grid.tile(col.wrapping_add_signed(dx), row.wrapping_add_signed(dy));
                    tile == Some(Tile::Wall)
                })
                .count();
            if walls == 3 {
                count += 1;
            }
        }
    }
    count
}

/// Cells reachable from cell `(0, 0)` through open walls.
pub fn reachable_cells(grid: &Grid) -> usize {
    if !grid.is_passage(1, 1) {
        return 0;
    }
    let mut seen = vec![vec![false; grid.width()]; grid.height()];
    let mut queue = VecDeque::new();
    seen[0][0] = true;
    queue.push_back((0usize, 0usize));
    let mut reached = 0;

    while let Some((x, y)) = queue.pop_front() {
        reached += 1;
        for dir in Direction::ALL {
            let Some((nx, ny)) = grid.neighbor(x, y, dir) else {
                continue;
            };
            if seen[ny][nx] {
                continue;
            }
            let (wall_col, wall_row) = crate::grid::wall_between(x, y, nx, ny);
            if grid.is_passage(wall_col, wall_row) {
                seen[ny][nx] = true;
                queue.push_back((nx, ny));
            }
        }
    }
    reached
}
