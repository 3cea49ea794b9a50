//! Anti-persistent depth-first maze generator with braiding.
//!
//! The walk keeps an explicit frontier stack instead of recursing, so stack
//! usage is bounded by the cell count. One seeded [`StdRng`] is consumed in a
//! fixed order: sampler draw, braid trigger, then braid shuffle.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::braid::BraidingPolicy;
use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::grid::{Direction, Grid, Tile};
use crate::history::DirectionHistory;
use crate::sampler::AntiPersistenceSampler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Carving,
    Backtrack,
    Done,
}

pub struct Generator {
    grid: Grid,
    history: DirectionHistory,
    sampler: AntiPersistenceSampler,
    braiding: BraidingPolicy,
    braid_probability: f64,
    rng: StdRng,
    stack: Vec<(usize, usize)>,
    phase: Phase,
    braids: usize,
    entrance: Option<(usize, usize)>,
    exit: Option<(usize, usize)>,
}

impl Generator {
    pub fn new(
        width: usize,
        height: usize,
        seed: u64,
        history_window: usize,
        anti_persistence: f64,
        braid_probability: f64,
    ) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        if history_window < 1 {
            return Err(MazeError::InvalidHistoryWindow(history_window));
        }
        if !anti_persistence.is_finite() || anti_persistence < 0.0 {
            return Err(MazeError::InvalidAntiPersistence(anti_persistence));
        }
        if !(0.0..=1.0).contains(&braid_probability) {
            return Err(MazeError::InvalidBraidProbability(braid_probability));
        }

        Ok(Self {
            grid: Grid::new(width, height),
            history: DirectionHistory::new(history_window),
            sampler: AntiPersistenceSampler::new(anti_persistence),
            braiding: BraidingPolicy,
            braid_probability,
            rng: StdRng::seed_from_u64(seed),
            stack: Vec::new(),
            phase: Phase::Done,
            braids: 0,
            entrance: None,
            exit: None,
        })
    }

    pub fn from_config(config: &MazeConfig) -> Result<Self, MazeError> {
        Self::new(
            config.width,
            config.height,
            config.seed,
            config.history_window,
            config.beta,
            config.braid_probability,
        )
    }

    /// Carves the whole maze starting at `(start_x, start_y)`.
    pub fn generate(&mut self, start_x: usize, start_y: usize) -> Result<(), MazeError> {
        self.start(start_x, start_y)?;
        let mut steps = 0usize;
        while self.step() != Phase::Done {
            steps += 1;
        }
        debug!(
            width = self.grid.width(),
            height = self.grid.height(),
            steps,
            braids = self.braids,
            "maze generated"
        );
        Ok(())
    }

    /// Carves the start cell and seeds the frontier stack. Run counters and
    /// the direction history start over; carved tiles are kept. Nothing is
    /// mutated when the start is out of bounds.
    pub fn start(&mut self, start_x: usize, start_y: usize) -> Result<(), MazeError> {
        if !self.grid.in_bounds(start_x, start_y) {
            return Err(MazeError::OutOfBounds {
                what: "start",
                x: start_x,
                y: start_y,
            });
        }
        self.history.clear();
        self.stack.clear();
        self.braids = 0;
        self.grid.carve_cell(start_x, start_y);
        self.stack.push((start_x, start_y));
        self.phase = Phase::Carving;
        Ok(())
    }

    /// Advances the walk by one carve or one backtrack.
    pub fn step(&mut self) -> Phase {
        let Some(&(cx, cy)) = self.stack.last() else {
            self.phase = Phase::Done;
            return self.phase;
        };

        let candidates = self.unvisited_neighbors(cx, cy);
        let Some(chosen) = self
            .sampler
            .sample(&candidates, &self.history, &mut self.rng)
        else {
            self.stack.pop();
            self.phase = if self.stack.is_empty() {
                Phase::Done
            } else {
                Phase::Backtrack
            };
            return self.phase;
        };

        let Some((nx, ny)) = self.grid.neighbor(cx, cy, chosen) else {
            unreachable!("candidate directions stay inside the grid");
        };
        self.grid.carve_passage(cx, cy, nx, ny);
        self.grid.carve_cell(nx, ny);
        self.stack.push((nx, ny));
        self.history.record(chosen);

        if self.rng.gen::<f64>() < self.braid_probability
            && self
                .braiding
                .apply(&mut self.grid, nx, ny, Some(chosen.opposite()), &mut self.rng)
                .is_some()
        {
            self.braids += 1;
        }

        self.phase = Phase::Carving;
        self.phase
    }

    fn unvisited_neighbors(&self, x: usize, y: usize) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| {
                self.grid
                    .neighbor(x, y, dir)
                    .is_some_and(|(nx, ny)| !self.grid.is_visited(nx, ny))
            })
            .collect()
    }

    /// Records entrance/exit markers for rendering.
    pub fn set_entrance_exit(
        &mut self,
        entrance_x: usize,
        entrance_y: usize,
        exit_x: usize,
        exit_y: usize,
    ) -> Result<(), MazeError> {
        if !self.grid.in_bounds(entrance_x, entrance_y) {
            return Err(MazeError::OutOfBounds {
                what: "entrance",
                x: entrance_x,
                y: entrance_y,
            });
        }
        if !self.grid.in_bounds(exit_x, exit_y) {
            return Err(MazeError::OutOfBounds {
                what: "exit",
                x: exit_x,
                y: exit_y,
            });
        }
        self.entrance = Some((entrance_x, entrance_y));
        self.exit = Some((exit_x, exit_y));
        Ok(())
    }

    /// Opens the outer wall beyond `(cell_x, cell_y)` in `dir` if that cell
    /// sits on that edge; otherwise leaves the grid untouched.
    pub fn open_boundary_entrance(&mut self, cell_x: usize, cell_y: usize, dir: Direction) -> bool {
        self.grid.open_boundary(cell_x, cell_y, dir)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tiles(&self) -> &[Vec<Tile>] {
        self.grid.tiles()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn is_visited(&self, x: usize, y: usize) -> bool {
        self.grid.is_visited(x, y)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn history(&self) -> &DirectionHistory {
        &self.history
    }

    /// Number of walls opened by braiding since the last [`Generator::start`].
    pub fn braid_count(&self) -> usize {
        self.braids
    }

    pub fn entrance(&self) -> Option<(usize, usize)> {
        self.entrance
    }

    pub fn exit(&self) -> Option<(usize, usize)> {
        self.exit
    }
}
