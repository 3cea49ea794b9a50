//! Anti-persistent depth-first maze generation with braiding.
//!
//! [`Generator`] drives a randomized DFS over a [`Grid`]. Directions used
//! recently are down-weighted by [`AntiPersistenceSampler`] to break up long
//! corridors, and [`BraidingPolicy`] optionally opens extra walls to cut down
//! dead ends without ever leaving a 2x2 open block.

pub mod benchmark;
pub mod braid;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod grid;
pub mod history;
pub mod render;
pub mod sampler;
pub mod stats;

pub use braid::BraidingPolicy;
pub use config::{MazeConfig, Profile};
pub use error::MazeError;
pub use generator::{Generator, Phase};
pub use grid::{Direction, Grid, Tile};
pub use history::DirectionHistory;
pub use render::Style;
pub use sampler::AntiPersistenceSampler;
pub use stats::MazeStats;
