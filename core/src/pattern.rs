//! Seed Patterns
//!
//! Generation 0 of the world. Named patterns are stamped with their bounding
//! box centred on the board; `Random` fills the whole board.

use rand::Rng;

use crate::board::BitBoard;

/// `(x, y)` offsets of live cells, relative to the pattern's top-left
type Cells = &'static [(u32, u32)];

const GLIDER: Cells = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

const BLINKER: Cells = &[(0, 0), (1, 0), (2, 0)];

const R_PENTOMINO: Cells = &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)];

const ACORN: Cells = &[(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)];

/// An initial live-cell layout
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Pattern {
    /// The 5-cell glider, travelling down and right
    #[default]
    Glider,
    /// Period-2 oscillator
    Blinker,
    /// Methuselah that settles after 1103 generations on an open plane
    RPentomino,
    /// Methuselah that settles after 5206 generations on an open plane
    Acorn,
    /// Every cell alive with probability `density`
    Random {
        /// Probability in `[0, 1]`
        density: f64,
    },
}

impl Pattern {
    /// Short name for logs and the CLI
    pub fn name(&self) -> &'static str {
        match self {
            Self::Glider => "glider",
            Self::Blinker => "blinker",
            Self::RPentomino => "r-pentomino",
            Self::Acorn => "acorn",
            Self::Random { .. } => "random",
        }
    }

    /// Live cell offsets of a named pattern (empty for `Random`)
    pub fn cells(&self) -> &'static [(u32, u32)] {
        match self {
            Self::Glider => GLIDER,
            Self::Blinker => BLINKER,
            Self::RPentomino => R_PENTOMINO,
            Self::Acorn => ACORN,
            Self::Random { .. } => &[],
        }
    }

    /// Bounding box `(width, height)` of a named pattern
    pub fn extent(&self) -> (u32, u32) {
        self.cells()
            .iter()
            .fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }

    /// Write the pattern onto `board`
    ///
    /// Existing live cells are kept. Cells of a named pattern that land
    /// outside a board smaller than the pattern are dropped.
    pub fn stamp<R: Rng + ?Sized>(&self, board: &mut BitBoard, rng: &mut R) {
        let size = board.size();

        if let Self::Random { density } = *self {
            // NaN would make gen_bool panic; treat it as an empty soup
            let density = if density.is_nan() {
                0.0
            } else {
                density.clamp(0.0, 1.0)
            };
            for y in 0..size.height {
                for x in 0..size.width {
                    if rng.gen_bool(density) {
                        board.set(x, y, true);
                    }
                }
            }
            return;
        }

        let (width, height) = self.extent();
        let origin_x = (i64::from(size.width) - i64::from(width)) / 2;
        let origin_y = (i64::from(size.height) - i64::from(height)) / 2;

        for &(dx, dy) in self.cells() {
            let x = origin_x + i64::from(dx);
            let y = origin_y + i64::from(dy);
            if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
                if size.contains(x, y) {
                    board.set(x, y, true);
                }
            }
        }
    }
}
