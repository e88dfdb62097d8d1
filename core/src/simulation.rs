//! Simulation State
//!
//! The single owned aggregate the frame loop mutates: world, viewport,
//! frame scheduler and the run flag. The loop holds it exclusively and
//! passes `&mut` into each stage; nothing is shared or copied per frame.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::action::Action;
use crate::config::Config;
use crate::generation::World;
use crate::scheduler::FrameScheduler;
use crate::viewport::Viewport;

/// A running Game of Life
#[derive(Clone, Debug)]
pub struct Simulation {
    /// Settings the simulation was started with
    config: Config,
    /// Double-buffered board
    world: World,
    /// Visible world and display area
    viewport: Viewport,
    /// Target and measured frame rates
    scheduler: FrameScheduler,
    /// Cleared by `Action::Quit`
    running: bool,
}

impl Simulation {
    /// Start a simulation, seeding random layouts from `config.seed()`
    pub fn new(config: Config) -> Self {
        let mut rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, &mut rng)
    }

    /// Start a simulation with an explicit RNG for seeding
    pub fn with_rng<R: Rng + ?Sized>(config: Config, rng: &mut R) -> Self {
        let (board, terminal) = (config.board(), config.terminal());
        let mut world = World::new(board);
        config.pattern().stamp(world.board_mut(), rng);

        let viewport = Viewport::new(board, terminal);
        let scheduler = FrameScheduler::new(config.target_fps());

        info!(
            board_width = board.width,
            board_height = board.height,
            terminal_width = terminal.width,
            terminal_height = terminal.height,
            pattern = config.pattern().name(),
            population = world.population(),
            "Simulation created"
        );
        debug!(visible = ?viewport.visible(), display = ?viewport.display(), "Viewport initialised");

        Self {
            config,
            world,
            viewport,
            scheduler,
            running: true,
        }
    }

    /// Settings the simulation was started with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access (for seeding and tests)
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Visible world and display area
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Frame rates
    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// Mutable frame rates (for recording frame timings)
    pub fn scheduler_mut(&mut self) -> &mut FrameScheduler {
        &mut self.scheduler
    }

    /// Generations computed so far
    pub fn iteration(&self) -> u64 {
        self.world.generation()
    }

    /// Whether the loop should keep going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Clear the run flag
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance the world one generation
    pub fn step(&mut self) {
        self.world.advance();
    }

    /// Apply a user action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => {
                info!(iteration = self.iteration(), "Quit requested");
                self.stop();
            }
            Action::Scroll(direction) => {
                let (dx, dy) = direction.delta();
                let moved = self.viewport.scroll(dx, dy);
                debug!(?direction, moved, visible = ?self.viewport.visible(), "Scroll");
            }
            Action::SpeedUp => {
                self.scheduler.speed_up();
                debug!(target_fps = self.scheduler.target_fps(), "Speed up");
            }
            Action::SlowDown => {
                self.scheduler.slow_down();
                debug!(target_fps = self.scheduler.target_fps(), "Slow down");
            }
        }
    }
}
