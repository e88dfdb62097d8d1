//! Viewport Geometry
//!
//! Maps a world of arbitrary size onto a fixed-size screen. The screen is
//! split into bands:
//!
//! ```text
//! row 0 ┌──────────────────────────────┐
//!       │ header (3 rows, title)       │
//!       ├──────────────────────────────┤
//!       │   frame ░░░░░░w░░░░░░        │
//!       │         ░ display  ░         │
//!       │         a  area    d         │
//!       │         ░░░░░░s░░░░░         │
//!       ├──────────────────────────────┤
//!       │ footer (1 row, stats)        │
//! h-1   └──────────────────────────────┘
//! ```
//!
//! Each world cell is drawn two screen columns wide so cells come out
//! roughly square. When the world fits, the display area is centered;
//! otherwise the visible world is clipped to what fits, anchored at the
//! world origin, and can be scrolled.

use crate::action::ScrollDirection;
use crate::geometry::{Rect2D, Size2D};

/// Rows reserved above the frame for the title
pub const HEADER_HEIGHT: u32 = 3;

/// Rows reserved below the frame for the stats line
pub const FOOTER_HEIGHT: u32 = 1;

/// Cells reserved on each side of the display area for the frame border
pub const FRAME_MARGIN: u32 = 1;

/// Screen columns per world column
pub const CELL_ASPECT: u32 = 2;

/// Visible world and display area, both half-open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Full world dimensions
    world: Size2D,
    /// Screen dimensions
    screen: Size2D,
    /// Shown part of the world, in world coordinates
    visible: Rect2D,
    /// Where the visible world is drawn, in screen coordinates
    display: Rect2D,
}

impl Viewport {
    /// Smallest screen that can show at least one world cell
    pub const fn min_screen() -> Size2D {
        Size2D::new(
            2 * FRAME_MARGIN + CELL_ASPECT,
            HEADER_HEIGHT + FOOTER_HEIGHT + 2 * FRAME_MARGIN + 1,
        )
    }

    /// Screen space left for the display area once bands and frame are taken
    ///
    /// The width is in screen columns.
    pub fn display_budget(screen: Size2D) -> Size2D {
        Size2D::new(
            screen.width.saturating_sub(2 * FRAME_MARGIN),
            screen
                .height
                .saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT + 2 * FRAME_MARGIN),
        )
    }

    /// Compute the initial viewport for a world shown on a screen
    pub fn new(world: Size2D, screen: Size2D) -> Self {
        let budget = Self::display_budget(screen);

        let span = world.width * CELL_ASPECT;
        let (visible_right, display_left, display_right) = if span <= budget.width {
            let left = (screen.width - span) / 2;
            (world.width, left, left + span)
        } else {
            let columns = budget.width / CELL_ASPECT;
            (columns, FRAME_MARGIN, FRAME_MARGIN + columns * CELL_ASPECT)
        };

        let top_band = HEADER_HEIGHT + FRAME_MARGIN;
        let (visible_bottom, display_top, display_bottom) = if world.height <= budget.height {
            let top = top_band + (budget.height - world.height) / 2;
            (world.height, top, top + world.height)
        } else {
            (budget.height, top_band, top_band + budget.height)
        };

        Self {
            world,
            screen,
            visible: Rect2D::new(0, 0, visible_bottom, visible_right),
            display: Rect2D::new(display_top, display_left, display_bottom, display_right),
        }
    }

    /// Shown part of the world
    pub fn visible(&self) -> Rect2D {
        self.visible
    }

    /// Screen rectangle the visible world is drawn into
    pub fn display(&self) -> Rect2D {
        self.display
    }

    /// Screen rectangle including the one-cell frame around the display area
    pub fn frame(&self) -> Rect2D {
        self.display.expand(FRAME_MARGIN)
    }

    /// Full world dimensions
    pub fn world(&self) -> Size2D {
        self.world
    }

    /// Screen dimensions
    pub fn screen(&self) -> Size2D {
        self.screen
    }

    /// Whether the visible world can move one cell in `direction`
    pub fn can_scroll(&self, direction: ScrollDirection) -> bool {
        match direction {
            ScrollDirection::Up => self.visible.top > 0,
            ScrollDirection::Down => self.visible.bottom < self.world.height,
            ScrollDirection::Left => self.visible.left > 0,
            ScrollDirection::Right => self.visible.right < self.world.width,
        }
    }

    /// Move the visible world by `(dx, dy)` cells
    ///
    /// Each axis is handled on its own: a delta that would push the visible
    /// rectangle outside the world on that axis is dropped without error.
    /// Returns `true` if anything moved.
    pub fn scroll(&mut self, dx: i32, dy: i32) -> bool {
        let mut moved = false;

        if dx != 0 {
            if let Some((left, right)) =
                shift_span(self.visible.left, self.visible.right, dx, self.world.width)
            {
                self.visible.left = left;
                self.visible.right = right;
                moved = true;
            }
        }

        if dy != 0 {
            if let Some((top, bottom)) =
                shift_span(self.visible.top, self.visible.bottom, dy, self.world.height)
            {
                self.visible.top = top;
                self.visible.bottom = bottom;
                moved = true;
            }
        }

        moved
    }
}

/// Translate `start..end` by `delta`, keeping it inside `0..limit`
fn shift_span(start: u32, end: u32, delta: i32, limit: u32) -> Option<(u32, u32)> {
    let start = start.checked_add_signed(delta)?;
    let end = end.checked_add_signed(delta)?;
    (end <= limit).then_some((start, end))
}
