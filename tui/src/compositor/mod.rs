//! Screen Compositor
//!
//! Paints one frame of the simulation into a [`ScreenBuffer`], back to
//! front:
//!
//! 1. background (blank)
//! 2. header band with the centered title
//! 3. frame border one cell outside the display area, with `w`/`a`/`s`/`d`
//!    at the edge midpoints where scrolling that way is possible
//! 4. the visible slice of the world, two columns per cell
//! 5. footer with generation count, frame rates and key hints
//!
//! The title and the footer are skipped when they do not fit the width.

mod screen;

use life_core::{
    BitBoard, ScrollDirection, Simulation, Viewport, CELL_ASPECT, HEADER_HEIGHT,
};

pub use screen::{Glyph, ScreenBuffer, FILLED_CHAR, FRAME_CHAR};

/// Title shown in the header band
pub const TITLE: &str = "Conway's Game of Life";

/// Key reminder appended to the footer
pub const CONTROLS_HINT: &str = "wasd +/- q";

/// Compose a full frame for `simulation` into `screen`
pub fn compose(screen: &mut ScreenBuffer, simulation: &Simulation) {
    screen.fill(Glyph::Blank);
    draw_header(screen);
    draw_frame(screen, simulation.viewport());
    draw_world(screen, simulation.world().board(), simulation.viewport());
    draw_footer(screen, &footer_text(simulation));
}

/// Title on the middle row of the header band
fn draw_header(screen: &mut ScreenBuffer) {
    screen.put_centered(HEADER_HEIGHT / 2, TITLE);
}

/// Border around the display area with scroll markers
fn draw_frame(screen: &mut ScreenBuffer, viewport: &Viewport) {
    let frame = viewport.frame();
    let (top, bottom) = (frame.top, frame.bottom - 1);
    let (left, right) = (frame.left, frame.right - 1);

    for x in left..=right {
        screen.set(x, top, Glyph::Frame);
        screen.set(x, bottom, Glyph::Frame);
    }
    for y in top + 1..bottom {
        screen.set(left, y, Glyph::Frame);
        screen.set(right, y, Glyph::Frame);
    }

    let mid_x = left + (right - left) / 2;
    let mid_y = top + (bottom - top) / 2;
    for direction in ScrollDirection::ALL {
        if !viewport.can_scroll(direction) {
            continue;
        }
        let (x, y) = match direction {
            ScrollDirection::Up => (mid_x, top),
            ScrollDirection::Down => (mid_x, bottom),
            ScrollDirection::Left => (left, mid_y),
            ScrollDirection::Right => (right, mid_y),
        };
        screen.set(x, y, Glyph::Literal(direction.key()));
    }
}

/// Live cells of the visible world mapped into the display area
fn draw_world(screen: &mut ScreenBuffer, board: &BitBoard, viewport: &Viewport) {
    let visible = viewport.visible();
    let display = viewport.display();
    // the frame's right column sits at display.right
    let frame_right = display.right;

    for m in visible.top..visible.bottom {
        let sy = m - visible.top + display.top;
        for n in visible.left..visible.right {
            let sx = CELL_ASPECT * (n - visible.left) + display.left;
            if sx + 1 >= frame_right {
                break;
            }
            if board.get(n, m) {
                screen.set(sx, sy, Glyph::Filled);
                screen.set(sx + 1, sy, Glyph::Filled);
            }
        }
    }
}

/// Stats line for the footer
pub fn footer_text(simulation: &Simulation) -> String {
    let scheduler = simulation.scheduler();
    format_footer(
        simulation.iteration(),
        scheduler.current_fps(),
        scheduler.max_fps(),
        scheduler.target_fps(),
    )
}

/// Footer layout, kept well under 80 columns for long runs
pub fn format_footer(iteration: u64, current_fps: f64, max_fps: f64, target_fps: f64) -> String {
    format!(
        "gen {iteration} | {current_fps:.1} fps, max {max_fps:.0}, target {target_fps:.0} | {CONTROLS_HINT}"
    )
}

/// Footer on the last screen row
fn draw_footer(screen: &mut ScreenBuffer, text: &str) {
    let last_row = screen.size().height - 1;
    screen.put_centered(last_row, text);
}
