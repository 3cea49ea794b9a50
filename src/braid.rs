use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::grid::{wall_between, Direction, Grid, Tile};

/// Opens at most one extra wall from a freshly carved cell to an already
/// visited neighbor, refusing any opening that would leave a 2x2 block of
/// passages in the matrix.
#[derive(Clone, Copy, Debug, Default)]
pub struct BraidingPolicy;

impl BraidingPolicy {
    /// Braids cell `(x, y)`. `came_from` is the direction back to the cell the
    /// walk arrived from; that neighbor is not a candidate. Returns the
    /// direction opened, if any.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        x: usize,
        y: usize,
        came_from: Option<Direction>,
        rng: &mut R,
    ) -> Option<Direction> {
        let mut candidates: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&dir| Some(dir) != came_from)
            .filter(|&dir| {
                grid.neighbor(x, y, dir)
                    .is_some_and(|(nx, ny)| grid.is_visited(nx, ny))
            })
            .collect();
        if candidates.is_empty() {
            return None;
        }

        candidates.shuffle(rng);

        for dir in candidates {
            let Some((nx, ny)) = grid.neighbor(x, y, dir) else {
                continue;
            };
            let (wall_col, wall_row) = wall_between(x, y, nx, ny);
            if grid.tile(wall_col, wall_row) != Some(Tile::Wall) {
                continue;
            }
            if creates_open_block(grid, wall_col, wall_row) {
                continue;
            }
            grid.set(wall_col, wall_row, Tile::Passage);
            trace!(x, y, ?dir, "braided wall");
            return Some(dir);
        }
        None
    }
}

/// Whether opening matrix position `(col, row)` would complete a 2x2 window
/// of passages. Only the current grid is considered.
pub fn creates_open_block(grid: &Grid, col: usize, row: usize) -> bool {
    for top in row.saturating_sub(1)..=row {
        for left in col.saturating_sub(1)..=col {
            if top + 1 >= grid.rows() || left + 1 >= grid.cols() {
                continue;
            }
            let open = [(left, top), (left + 1, top), (left, top + 1), (left + 1, top + 1)]
                .into_iter()
                .filter(|&(c, r)| (c, r) == (col, row) || grid.is_passage(c, r))
                .count();
            if open == 4 {
                return true;
            }
        }
    }
    false
}
