use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::MazeError;
use crate::render::Style;

const DEFAULT_SIZE: usize = 11;
const DEFAULT_SEED: u64 = 21;
const DEFAULT_HISTORY: usize = 50;
const DEFAULT_BETA: f64 = 0.8;
const DEFAULT_BRAID: f64 = 0.08;

/// Full run configuration: generation parameters plus what to do with the
/// result.
#[derive(Clone, Debug, PartialEq)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub history_window: usize,
    pub beta: f64,
    pub braid_probability: f64,
    pub start: (usize, usize),
    /// `None` means the far corner, `(width - 1, height - 1)`.
    pub exit: Option<(usize, usize)>,
    pub run_benchmark: bool,
    pub export_path: Option<PathBuf>,
    pub style: Style,
    pub color: bool,
    pub border: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            seed: DEFAULT_SEED,
            history_window: DEFAULT_HISTORY,
            beta: DEFAULT_BETA,
            braid_probability: DEFAULT_BRAID,
            start: (0, 0),
            exit: None,
            run_benchmark: false,
            export_path: None,
            style: Style::UnicodeBlock,
            color: false,
            border: false,
        }
    }
}

impl MazeConfig {
    pub fn exit_cell(&self) -> (usize, usize) {
        self.exit.unwrap_or((
            self.width.saturating_sub(1),
            self.height.saturating_sub(1),
        ))
    }

    pub fn apply_profile(&mut self, profile: Profile) {
        let (beta, history_window, braid_probability) = profile.parameters();
        self.beta = beta;
        self.history_window = history_window;
        self.braid_probability = braid_probability;
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        if self.width == 0 || self.height == 0 {
            return Err(MazeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.history_window < 1 {
            return Err(MazeError::InvalidHistoryWindow(self.history_window));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(MazeError::InvalidAntiPersistence(self.beta));
        }
        if !(0.0..=1.0).contains(&self.braid_probability) {
            return Err(MazeError::InvalidBraidProbability(self.braid_probability));
        }
        let (sx, sy) = self.start;
        if sx >= self.width || sy >= self.height {
            return Err(MazeError::OutOfBounds { what: "start", x: sx, y: sy });
        }
        let (ex, ey) = self.exit_cell();
        if ex >= self.width || ey >= self.height {
            return Err(MazeError::OutOfBounds { what: "exit", x: ex, y: ey });
        }
        Ok(())
    }
}

impl fmt::Display for MazeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MazeConfig[{}x{}, seed={}, β={:.2}, k={}, p={:.2}]",
            self.width, self.height, self.seed, self.beta, self.history_window, self.braid_probability
        )
    }
}

/// Named parameter presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    /// Plain DFS, long straight corridors.
    Classic,
    Winding,
    /// Many loops, few dead ends.
    Open,
    Complex,
    Sparse,
}

impl Profile {
    pub const ALL: [Profile; 5] = [
        Profile::Classic,
        Profile::Winding,
        Profile::Open,
        Profile::Complex,
        Profile::Sparse,
    ];

    /// `(beta, history_window, braid_probability)`.
    pub fn parameters(self) -> (f64, usize, f64) {
        match self {
            Profile::Classic => (0.0, 10, 0.0),
            Profile::Winding => (1.2, 80, 0.05),
            Profile::Open => (0.5, 40, 0.15),
            Profile::Complex => (0.8, 50, 0.12),
            Profile::Sparse => (0.6, 30, 0.03),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Profile::Classic => "classic",
            Profile::Winding => "winding",
            Profile::Open => "open",
            Profile::Complex => "complex",
            Profile::Sparse => "sparse",
        }
    }

    /// Config of the given size and seed with this profile applied.
    pub fn config(self, width: usize, height: usize, seed: u64) -> MazeConfig {
        let mut config = MazeConfig {
            width,
            height,
            seed,
            ..MazeConfig::default()
        };
        config.apply_profile(self);
        config
    }
}

impl FromStr for Profile {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MazeError::UnknownProfile(s.to_string()))
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (beta, k, p) = self.parameters();
        write!(f, "{} (β={:.1}, k={}, p={:.2})", self.name(), beta, k, p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = MazeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.exit_cell(), (10, 10));
    }

    #[test]
    fn test_exit_follows_dimensions() {
        let config = MazeConfig {
            width: 20,
            height: 15,
            ..MazeConfig::default()
        };
        assert_eq!(config.exit_cell(), (19, 14));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = [
            MazeConfig { width: 0, ..MazeConfig::default() },
            MazeConfig { history_window: 0, ..MazeConfig::default() },
            MazeConfig { beta: -1.0, ..MazeConfig::default() },
            MazeConfig { braid_probability: 1.01, ..MazeConfig::default() },
            MazeConfig { start: (11, 0), ..MazeConfig::default() },
            MazeConfig { exit: Some((3, 11)), ..MazeConfig::default() },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{config:?}");
        }
    }

    #[test]
    fn test_profile_parsing() {
        assert_eq!("WINDING".parse::<Profile>().unwrap(), Profile::Winding);
        assert_eq!("open".parse::<Profile>().unwrap(), Profile::Open);
        let err = "spiral".parse::<Profile>().unwrap_err();
        assert!(err.to_string().contains("classic, winding"));
    }

    #[test]
    fn test_profile_applies_parameters() {
        let config = Profile::Classic.config(8, 6, 3);
        assert_eq!(config.beta, 0.0);
        assert_eq!(config.history_window, 10);
        assert_eq!(config.braid_probability, 0.0);
        assert_eq!((config.width, config.height, config.seed), (8, 6, 3));
        assert_eq!(Profile::Complex.to_string(), "complex (β=0.8, k=50, p=0.12)");
    }
}
