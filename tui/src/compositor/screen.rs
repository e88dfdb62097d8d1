//! Screen Buffer
//!
//! A terminal-sized grid with one glyph per character cell.

use life_core::Size2D;

/// Light shade block used for the frame border
pub const FRAME_CHAR: char = '\u{2591}';

/// Full block used for live cells
pub const FILLED_CHAR: char = '\u{2588}';

/// What occupies one screen cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Glyph {
    /// Empty background
    #[default]
    Blank,
    /// Frame border
    Frame,
    /// Half of a live world cell
    Filled,
    /// Header, footer or scroll-marker text
    Literal(char),
}

impl Glyph {
    /// Character written to the terminal for this glyph
    pub const fn to_char(self) -> char {
        match self {
            Self::Blank => ' ',
            Self::Frame => FRAME_CHAR,
            Self::Filled => FILLED_CHAR,
            Self::Literal(c) => c,
        }
    }
}

/// Row-major glyph grid the size of the terminal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenBuffer {
    size: Size2D,
    cells: Vec<Glyph>,
}

impl ScreenBuffer {
    /// Create a blank buffer
    pub fn new(size: Size2D) -> Self {
        Self {
            size,
            cells: vec![Glyph::Blank; size.area()],
        }
    }

    /// Buffer dimensions
    pub fn size(&self) -> Size2D {
        self.size
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Glyph] {
        &self.cells
    }

    /// Cells grouped by row
    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> {
        self.cells.chunks(self.size.width.max(1) as usize)
    }

    #[inline]
    fn index_of(&self, x: u32, y: u32) -> usize {
        debug_assert!(self.size.contains(x, y), "screen cell ({x}, {y}) out of range");
        y as usize * self.size.width as usize + x as usize
    }

    /// Glyph at a cell
    pub fn get(&self, x: u32, y: u32) -> Glyph {
        self.cells[self.index_of(x, y)]
    }

    /// Replace the glyph at a cell
    pub fn set(&mut self, x: u32, y: u32, glyph: Glyph) {
        let index = self.index_of(x, y);
        self.cells[index] = glyph;
    }

    /// Overwrite every cell
    pub fn fill(&mut self, glyph: Glyph) {
        self.cells.fill(glyph);
    }

    /// Write text as literal glyphs starting at `(x, y)`
    ///
    /// Characters past the right edge are dropped.
    pub fn put_str(&mut self, x: u32, y: u32, text: &str) {
        for (column, c) in (x..self.size.width).zip(text.chars()) {
            self.set(column, y, Glyph::Literal(c));
        }
    }

    /// Write text centered on row `y` if it fits the width
    ///
    /// Returns `false` and writes nothing when it does not fit.
    pub fn put_centered(&mut self, y: u32, text: &str) -> bool {
        let len = text.chars().count();
        let width = self.size.width as usize;
        if len > width {
            return false;
        }
        self.put_str(((width - len) / 2) as u32, y, text);
        true
    }

    /// Row `y` as a string (for tests and debugging)
    pub fn row_text(&self, y: u32) -> String {
        let start = self.index_of(0, y);
        self.cells[start..start + self.size.width as usize]
            .iter()
            .map(|g| g.to_char())
            .collect()
    }
}
