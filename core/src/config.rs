//! Startup Configuration
//!
//! Validated inputs for a [`Simulation`](crate::Simulation): board size,
//! terminal size, initial frame rate, seed pattern and RNG seed. Parsing is
//! the surface's job; this module only decides what is acceptable.

use thiserror::Error;

use crate::geometry::{Size2D, MAX_BOARD_DIM};
use crate::pattern::Pattern;
use crate::scheduler::{DEFAULT_TARGET_FPS, MAX_TARGET_FPS, MIN_TARGET_FPS};
use crate::viewport::Viewport;

// =============================================================================
// Error Types
// =============================================================================

/// Reasons a configuration is rejected
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A board dimension is zero
    #[error("board dimensions must be positive, got {width}x{height}")]
    ZeroDimension {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// A board dimension reaches the upper bound
    #[error("board size {width}x{height} is too large, each dimension must be below {max}")]
    BoardTooLarge {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Exclusive bound for each dimension
        max: u32,
    },

    /// The terminal cannot hold the header, footer, frame and one cell
    #[error("terminal {width}x{height} is too small, need at least {min_width}x{min_height}")]
    TerminalTooSmall {
        /// Terminal columns
        width: u32,
        /// Terminal rows
        height: u32,
        /// Minimum columns
        min_width: u32,
        /// Minimum rows
        min_height: u32,
    },

    /// Initial frame rate outside `[1, 500)`
    #[error("target fps {0} is outside [1, 500)")]
    InvalidFps(f64),

    /// Random seeding density outside `[0, 1]`
    #[error("density {0} is outside [0, 1]")]
    InvalidDensity(f64),
}

// =============================================================================
// Config
// =============================================================================

/// Everything needed to start a simulation
///
/// Only constructible through [`Config::new`] and the `with_*` builders, so
/// every instance has passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// World dimensions
    board: Size2D,
    /// Terminal dimensions at startup
    terminal: Size2D,
    /// Initial target frame rate
    target_fps: f64,
    /// Generation 0 layout
    pattern: Pattern,
    /// RNG seed for random layouts (`None` = seeded from entropy)
    seed: Option<u64>,
}

impl Config {
    /// Validate a board and terminal size
    ///
    /// Other settings start at their defaults.
    pub fn new(board: Size2D, terminal: Size2D) -> Result<Self, ConfigError> {
        if board.width == 0 || board.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: board.width,
                height: board.height,
            });
        }

        if board.width >= MAX_BOARD_DIM || board.height >= MAX_BOARD_DIM {
            return Err(ConfigError::BoardTooLarge {
                width: board.width,
                height: board.height,
                max: MAX_BOARD_DIM,
            });
        }

        let min = Viewport::min_screen();
        if terminal.width < min.width || terminal.height < min.height {
            return Err(ConfigError::TerminalTooSmall {
                width: terminal.width,
                height: terminal.height,
                min_width: min.width,
                min_height: min.height,
            });
        }

        Ok(Self {
            board,
            terminal,
            target_fps: DEFAULT_TARGET_FPS,
            pattern: Pattern::default(),
            seed: None,
        })
    }

    /// Set the initial target frame rate
    pub fn with_target_fps(mut self, fps: f64) -> Result<Self, ConfigError> {
        if !(MIN_TARGET_FPS..MAX_TARGET_FPS).contains(&fps) {
            return Err(ConfigError::InvalidFps(fps));
        }
        self.target_fps = fps;
        Ok(self)
    }

    /// Set the seed pattern
    pub fn with_pattern(mut self, pattern: Pattern) -> Result<Self, ConfigError> {
        if let Pattern::Random { density } = pattern {
            if !(0.0..=1.0).contains(&density) {
                return Err(ConfigError::InvalidDensity(density));
            }
        }
        self.pattern = pattern;
        Ok(self)
    }

    /// Set the RNG seed
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// World dimensions
    pub fn board(&self) -> Size2D {
        self.board
    }

    /// Terminal dimensions at startup
    pub fn terminal(&self) -> Size2D {
        self.terminal
    }

    /// Initial target frame rate
    pub fn target_fps(&self) -> f64 {
        self.target_fps
    }

    /// Generation 0 layout
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// RNG seed for random layouts
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
