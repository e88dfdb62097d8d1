//! Generation Engine
//!
//! Applies Conway's rule (B3/S23) to a [`BitBoard`]. Edges are hard
//! boundaries: neighbors outside the grid count as dead, nothing wraps.
//!
//! The next generation is always written into a second board. Updating in
//! place would let cells written this generation feed into neighbor counts
//! that must still see the previous one. [`World`] owns both boards and
//! swaps them after every step.

use crate::board::BitBoard;
use crate::geometry::Size2D;

/// Count live cells among the up-to-8 neighbors of `(x, y)`
///
/// Neighbors outside `[0, width) x [0, height)` are skipped.
pub fn live_neighbors(board: &BitBoard, x: u32, y: u32) -> u8 {
    let size = board.size();
    let x_range = x.saturating_sub(1)..=(x + 1).min(size.width - 1);
    let y_range = y.saturating_sub(1)..=(y + 1).min(size.height - 1);

    let mut count = 0;
    for ny in y_range {
        for nx in x_range.clone() {
            if (nx, ny) != (x, y) && board.get(nx, ny) {
                count += 1;
            }
        }
    }
    count
}

/// The transition rule for a single cell
///
/// A live cell with fewer than 2 or more than 3 neighbors dies, a dead
/// cell with exactly 3 is born, everything else keeps its state.
pub const fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}

/// Compute the generation after `current` into `next`
///
/// Every cell of `next` is overwritten; its previous contents are ignored.
pub fn step(current: &BitBoard, next: &mut BitBoard) {
    let size = current.size();
    debug_assert_eq!(size, next.size(), "double buffer size mismatch");

    for y in 0..size.height {
        for x in 0..size.width {
            let alive = current.get(x, y);
            let neighbors = live_neighbors(current, x, y);
            next.set(x, y, next_state(alive, neighbors));
        }
    }
}

/// The world: a double-buffered board and its generation counter
#[derive(Clone, Debug)]
pub struct World {
    /// Board read by the renderer and by the next step
    current: BitBoard,
    /// Scratch board the next generation is written into
    next: BitBoard,
    /// Number of steps taken
    generation: u64,
}

impl World {
    /// Create an all-dead world
    pub fn new(size: Size2D) -> Self {
        Self {
            current: BitBoard::new(size),
            next: BitBoard::new(size),
            generation: 0,
        }
    }

    /// Create a world whose generation 0 is `board`
    pub fn from_board(board: BitBoard) -> Self {
        let next = BitBoard::new(board.size());
        Self {
            current: board,
            next,
            generation: 0,
        }
    }

    /// World dimensions
    pub fn size(&self) -> Size2D {
        self.current.size()
    }

    /// The current generation
    pub fn board(&self) -> &BitBoard {
        &self.current
    }

    /// Mutable access to the current generation (for seeding)
    pub fn board_mut(&mut self) -> &mut BitBoard {
        &mut self.current
    }

    /// Number of generations computed so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Live cells in the current generation
    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// Advance one generation
    pub fn advance(&mut self) {
        step(&self.current, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }
}
