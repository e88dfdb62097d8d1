//! Renderer
//!
//! Writes a composed [`ScreenBuffer`] to the terminal in one pass, row-major,
//! then moves the cursor back up so the next frame overwrites this one in
//! place. The screen is never cleared between frames, so there is no
//! flicker.

use std::io::{self, Write};

use crossterm::{cursor, queue, style::Print};

use crate::compositor::ScreenBuffer;

/// Flushes screen buffers to a writer
pub struct Renderer<W: Write> {
    out: W,
    /// Reused frame text
    line: String,
}

impl<W: Write> Renderer<W> {
    /// Wrap a writer (usually stdout)
    pub fn new(out: W) -> Self {
        Self {
            out,
            line: String::new(),
        }
    }

    /// Write one frame and return the cursor to the top row
    pub fn flush(&mut self, screen: &ScreenBuffer) -> io::Result<()> {
        let Self { out, line } = self;

        line.clear();
        for row in screen.rows() {
            line.extend(row.iter().map(|glyph| glyph.to_char()));
        }

        let rows = u16::try_from(screen.size().height).unwrap_or(u16::MAX);
        queue!(out, Print(line.as_str()), cursor::MoveToPreviousLine(rows))?;
        out.flush()
    }

    /// The underlying writer
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::Glyph;
    use life_core::Size2D;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flush_writes_glyphs_then_moves_up() {
        let mut screen = ScreenBuffer::new(Size2D::new(3, 2));
        screen.set(0, 0, Glyph::Frame);
        screen.set(1, 0, Glyph::Filled);
        screen.set(2, 1, Glyph::Literal('q'));

        let mut renderer = Renderer::new(Vec::new());
        renderer.flush(&screen).unwrap();

        let written = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(written, "░█   q\x1b[2F");
    }

    #[test]
    fn test_consecutive_frames_do_not_clear() {
        let screen = ScreenBuffer::new(Size2D::new(2, 1));
        let mut renderer = Renderer::new(Vec::new());
        renderer.flush(&screen).unwrap();
        renderer.flush(&screen).unwrap();

        let written = String::from_utf8(renderer.get_ref().clone()).unwrap();
        assert_eq!(written, "  \x1b[1F  \x1b[1F");
        assert!(!written.contains("\x1b[2J"));
    }
}
