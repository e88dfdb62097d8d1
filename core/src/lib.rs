//! Life Core - Headless Game of Life Simulation
//!
//! This crate holds everything about the simulation that does not touch a
//! terminal: the packed board, the generation rule, the viewport that maps a
//! world onto a fixed-size screen, and the frame-rate bookkeeping. The `gol`
//! terminal surface in `life-tui` drives it one frame at a time.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      Terminal Surface                         │
//! │   compose ──► flush ──► step ──► poll ──► pace  (per frame)   │
//! └──────────────┬───────────────────────────────┬───────────────┘
//!                │ reads                          │ Action
//! ┌──────────────┴───────────────────────────────┴───────────────┐
//! │                         LIFE CORE                             │
//! │  ┌────────────────────────────────────────────────────────┐   │
//! │  │                      Simulation                        │   │
//! │  │  ┌──────────┐  ┌──────────┐  ┌──────────────────────┐  │   │
//! │  │  │  World   │  │ Viewport │  │    FrameScheduler    │  │   │
//! │  │  │(2 boards)│  │          │  │                      │  │   │
//! │  │  └──────────┘  └──────────┘  └──────────────────────┘  │   │
//! │  └────────────────────────────────────────────────────────┘   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Overview
//!
//! - [`geometry`]: `Size2D` and half-open `Rect2D`
//! - [`board`]: 1-bit-per-cell packed grid with row-stride arithmetic
//! - [`generation`]: neighbor counting, the transition rule, double buffering
//! - [`viewport`]: visible world / display area geometry and clamped scrolling
//! - [`scheduler`]: target fps, pacing delay, measured fps
//! - [`action`]: user actions and their key bindings
//! - [`pattern`]: initial seeds
//! - [`config`]: validated startup configuration
//! - [`simulation`]: the owned aggregate the frame loop mutates
//!
//! # No Terminal Dependencies
//!
//! This crate has **zero** dependencies on crossterm, tokio, or any other
//! terminal or runtime crate.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]

pub mod action;
pub mod board;
pub mod config;
pub mod generation;
pub mod geometry;
pub mod pattern;
pub mod scheduler;
pub mod simulation;
pub mod viewport;

// Re-exports for convenience
pub use action::{Action, ScrollDirection};
pub use board::{row_stride, BitBoard, Word, BITS_PER_WORD};
pub use config::{Config, ConfigError};
pub use generation::{live_neighbors, next_state, step, World};
pub use geometry::{Rect2D, Size2D, MAX_BOARD_DIM};
pub use pattern::Pattern;
pub use scheduler::{FrameScheduler, DEFAULT_TARGET_FPS, MAX_TARGET_FPS, MIN_TARGET_FPS};
pub use simulation::Simulation;
pub use viewport::{Viewport, CELL_ASPECT, FOOTER_HEIGHT, FRAME_MARGIN, HEADER_HEIGHT};
