use thiserror::Error;

/// Errors surfaced by maze construction, generation and export.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("dimensions must be positive (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },
    #[error("history window must be >= 1 (got {0})")]
    InvalidHistoryWindow(usize),
    #[error("anti-persistence must be non-negative (got {0})")]
    InvalidAntiPersistence(f64),
    #[error("braid probability must be in [0, 1] (got {0})")]
    InvalidBraidProbability(f64),
    #[error("{what} position ({x}, {y}) out of bounds")]
    OutOfBounds { what: &'static str, x: usize, y: usize },
    #[error("unknown profile: {0}. Available: classic, winding, open, complex, sparse")]
    UnknownProfile(String),
    #[error("unknown style: {0}. Available: block, hash, bracket, shade, plus")]
    UnknownStyle(String),
    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
}
