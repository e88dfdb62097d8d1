//! Game of Life TUI - terminal surface for `life-core`
//!
//! Draws a running [`life_core::Simulation`] into the terminal and feeds
//! keystrokes back to it. All simulation logic lives in the core crate;
//! this crate only owns the screen, the keyboard and the clock.
//!
//! # Architecture
//!
//! - **Compositor**: paints header, frame, world slice and footer into a
//!   screen-sized glyph buffer
//! - **Renderer**: writes the buffer in place, without clearing
//! - **Input**: async key polling with a per-frame timeout
//! - **Terminal**: raw mode, alternate screen and cursor as a scoped guard
//! - **App**: the frame loop tying them together

pub mod app;
pub mod cli;
pub mod compositor;
pub mod input;
pub mod renderer;
pub mod terminal;

pub use app::App;
pub use cli::Args;
pub use terminal::TerminalGuard;
