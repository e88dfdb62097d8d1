//! Command Line
//!
//! `gol <WIDTH> <HEIGHT> [OPTIONS]`. Parsing and usage errors belong to
//! clap; range checks belong to [`Config`].

use clap::{Parser, ValueEnum};
use life_core::{Config, ConfigError, Pattern, Size2D, DEFAULT_TARGET_FPS};

/// Conway's Game of Life in the terminal
#[derive(Parser, Debug)]
#[command(name = "gol")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// World width in cells (1-1023)
    #[arg(value_name = "WIDTH")]
    pub width: u32,

    /// World height in cells (1-1023)
    #[arg(value_name = "HEIGHT")]
    pub height: u32,

    /// Initial target frames per second, in [1, 500)
    #[arg(short, long, env = "GOL_FPS", default_value_t = DEFAULT_TARGET_FPS)]
    pub fps: f64,

    /// Starting layout
    #[arg(short, long, env = "GOL_PATTERN", value_enum, default_value_t = PatternArg::Glider)]
    pub pattern: PatternArg,

    /// Probability that a cell starts alive with `--pattern random`
    #[arg(short, long, env = "GOL_DENSITY", default_value_t = 0.3)]
    pub density: f64,

    /// RNG seed for `--pattern random`
    #[arg(short, long, env = "GOL_SEED", value_name = "N")]
    pub seed: Option<u64>,
}

/// Layout names accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PatternArg {
    Glider,
    Blinker,
    RPentomino,
    Acorn,
    Random,
}

impl Args {
    /// World dimensions
    pub fn board(&self) -> Size2D {
        Size2D::new(self.width, self.height)
    }

    /// Seed pattern, with the density applied for random layouts
    pub fn pattern(&self) -> Pattern {
        match self.pattern {
            PatternArg::Glider => Pattern::Glider,
            PatternArg::Blinker => Pattern::Blinker,
            PatternArg::RPentomino => Pattern::RPentomino,
            PatternArg::Acorn => Pattern::Acorn,
            PatternArg::Random => Pattern::Random {
                density: self.density,
            },
        }
    }

    /// Validate the arguments against the terminal they will run in
    pub fn to_config(&self, terminal: Size2D) -> Result<Config, ConfigError> {
        Ok(Config::new(self.board(), terminal)?
            .with_target_fps(self.fps)?
            .with_pattern(self.pattern())?
            .with_seed(self.seed))
    }
}
