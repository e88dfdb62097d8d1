//! Packed Bit Board
//!
//! A 2D grid stored one bit per cell in a contiguous word buffer. Each row
//! starts on a word boundary, so cell `(x, y)` lives in word
//! `y * stride + x / BITS_PER_WORD` at bit `x % BITS_PER_WORD`.
//!
//! # Bounds
//!
//! Accessors expect `0 <= x < width` and `0 <= y < height`. The hot path
//! does not check this in release builds; callers that may step outside the
//! grid (neighbor counting) must range-check first.

use crate::geometry::Size2D;

/// Storage word for packed cells
pub type Word = u64;

/// Bits held by one storage word
pub const BITS_PER_WORD: usize = Word::BITS as usize;

/// Bits used by one world cell
const CELL_BITS: usize = 1;

/// Number of words needed to hold one row of `width` elements of
/// `elem_bits` bits each
///
/// The world uses `elem_bits = 1`; a byte-per-cell screen row would use 8.
pub const fn row_stride(width: u32, elem_bits: usize) -> usize {
    (width as usize * elem_bits).div_ceil(BITS_PER_WORD)
}

/// A zero-initialised 1-bit-per-cell grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitBoard {
    /// Logical dimensions
    size: Size2D,
    /// Words per row
    stride: usize,
    /// Row-major packed cells, `stride * height` words
    cells: Vec<Word>,
}

impl BitBoard {
    /// Create an all-dead board
    pub fn new(size: Size2D) -> Self {
        let stride = row_stride(size.width, CELL_BITS);
        Self {
            size,
            stride,
            cells: vec![0; stride * size.height as usize],
        }
    }

    /// Logical dimensions
    pub fn size(&self) -> Size2D {
        self.size
    }

    /// Words per row
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw word buffer
    pub fn words(&self) -> &[Word] {
        &self.cells
    }

    /// Word index and bit mask for a cell
    #[inline]
    fn locate(&self, x: u32, y: u32) -> (usize, Word) {
        debug_assert!(
            self.size.contains(x, y),
            "cell ({x}, {y}) outside {}x{} board",
            self.size.width,
            self.size.height
        );
        let x = x as usize;
        let index = y as usize * self.stride + x / BITS_PER_WORD;
        (index, 1 << (x % BITS_PER_WORD))
    }

    /// Check whether a cell is alive
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        let (index, mask) = self.locate(x, y);
        self.cells[index] & mask != 0
    }

    /// Set a cell alive or dead
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, alive: bool) {
        let (index, mask) = self.locate(x, y);
        if alive {
            self.cells[index] |= mask;
        } else {
            self.cells[index] &= !mask;
        }
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Check if no cell is alive
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&w| w == 0)
    }

    /// Iterate over the coordinates of live cells in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.size.width;
        (0..self.size.height)
            .flat_map(move |y| (0..width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.get(x, y))
    }
}
