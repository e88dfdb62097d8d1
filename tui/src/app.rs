//! Main Application
//!
//! The frame loop. Each iteration runs the same strict sequence:
//!
//! ```text
//! compose -> flush -> step -> poll input -> apply action -> pace
//! |<------ compute ----->|
//! ```
//!
//! Compose reads the board that flush puts on screen, so stepping only
//! happens after the frame is out. The loop owns the [`Simulation`]
//! exclusively and ends once an action clears its run flag.

use std::io::Write;
use std::time::{Duration, Instant};

use life_core::Simulation;
use tracing::{debug, info, trace};

use crate::compositor::{compose, ScreenBuffer};
use crate::input::InputController;
use crate::renderer::Renderer;

/// Main application state
pub struct App<W: Write> {
    /// World, viewport, frame rates and run flag
    simulation: Simulation,
    /// Composed frame, reused every iteration
    screen: ScreenBuffer,
    /// Terminal writer
    renderer: Renderer<W>,
}

impl<W: Write> App<W> {
    /// Create an app drawing to `out`
    pub fn new(simulation: Simulation, out: W) -> Self {
        let screen = ScreenBuffer::new(simulation.config().terminal());
        Self {
            simulation,
            screen,
            renderer: Renderer::new(out),
        }
    }

    /// The simulation
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Last composed frame
    pub fn screen(&self) -> &ScreenBuffer {
        &self.screen
    }

    /// The renderer's writer
    pub fn output(&self) -> &W {
        self.renderer.get_ref()
    }

    /// Compose, flush and step once, returning how long that took
    pub fn tick(&mut self) -> anyhow::Result<Duration> {
        let started = Instant::now();

        compose(&mut self.screen, &self.simulation);
        self.renderer.flush(&self.screen)?;
        self.simulation.step();

        Ok(started.elapsed())
    }

    /// Run until quit
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut input = InputController::new();
        info!(
            target_fps = self.simulation.scheduler().target_fps(),
            "Frame loop started"
        );

        while self.simulation.is_running() {
            let frame_start = Instant::now();

            let compute = self.tick()?;

            let poll_timeout = self.simulation.scheduler().poll_timeout();
            if let Some(action) = input.poll(poll_timeout).await? {
                self.simulation.apply(action);
            }

            // Frame rate limiting: sleep off what is left of the frame budget
            let pacing = self.simulation.scheduler().pacing_delay(compute);
            if !pacing.is_zero() {
                tokio::time::sleep(pacing).await;
            }

            let frame_time = frame_start.elapsed();
            self.simulation
                .scheduler_mut()
                .record_frame(compute, frame_time);
            trace!(
                iteration = self.simulation.iteration(),
                compute_us = compute.as_micros() as u64,
                frame_us = frame_time.as_micros() as u64,
                "Frame"
            );
        }

        let scheduler = self.simulation.scheduler();
        info!(
            iterations = self.simulation.iteration(),
            population = self.simulation.world().population(),
            max_fps = scheduler.max_fps(),
            "Frame loop finished"
        );
        debug!(target_fps = scheduler.target_fps(), "Final frame rate");
        Ok(())
    }
}
