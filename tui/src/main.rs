//! Game of Life TUI Entry Point
//!
//! Usage:
//!   gol <WIDTH> <HEIGHT> [OPTIONS]
//!
//! Options:
//!   -f, --fps <FPS>          Initial target frame rate (default: 2)
//!   -p, --pattern <PATTERN>  glider, blinker, r-pentomino, acorn, random
//!   -d, --density <P>        Live probability for random seeding
//!   -s, --seed <N>           RNG seed for random seeding
//!
//! Logs go to stderr; set `RUST_LOG=debug` and redirect `2>gol.log`.

use std::io;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use life_core::Simulation;
use life_tui::{terminal, App, Args, TerminalGuard};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Set up logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Check if we have a TTY before touching terminal modes
    terminal::ensure_tty()?;

    let config = args.to_config(terminal::terminal_size()?)?;
    let simulation = Simulation::new(config);

    // Restore the terminal on panic, then take it over
    terminal::install_panic_hook();
    let guard = TerminalGuard::acquire()?;

    let mut app = App::new(simulation, io::stdout());
    let result = app.run().await;

    // Restore terminal before reporting anything
    guard.release()?;
    result?;

    let simulation = app.simulation();
    info!(
        iterations = simulation.iteration(),
        max_fps = simulation.scheduler().max_fps(),
        "Goodbye"
    );
    Ok(())
}
