//! Terminal Mode
//!
//! Scoped ownership of the terminal: [`TerminalGuard::acquire`] switches to
//! raw mode (no line buffering, no echo), enters the alternate screen and
//! hides the cursor. Dropping the guard undoes all three in reverse order,
//! on every exit path including `?` returns. A panic hook covers the one
//! path where destructors may not run.

use std::io::{self, IsTerminal};
use std::panic;

use anyhow::{bail, Context};
use crossterm::{
    cursor, execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use life_core::Size2D;
use tracing::{debug, warn};

/// Raw-mode terminal that is restored on drop
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Take over the terminal
    pub fn acquire() -> anyhow::Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        // from here on the guard owns cleanup, even if the next step fails
        let guard = Self { _private: () };

        execute!(
            io::stdout(),
            EnterAlternateScreen,
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )
        .context("failed to prepare the screen")?;

        debug!("Terminal acquired");
        Ok(guard)
    }

    /// Restore the terminal now, reporting failures
    pub fn release(self) -> anyhow::Result<()> {
        let result = restore();
        std::mem::forget(self);
        result.context("failed to restore the terminal")
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore() {
            warn!("Terminal restore failed: {}", e);
        }
    }
}

/// Show the cursor, leave the alternate screen, leave raw mode
fn restore() -> io::Result<()> {
    let screen = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
    let mode = disable_raw_mode();
    debug!("Terminal restored");
    screen.and(mode)
}

/// Restore the terminal before the default hook prints a panic
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}

/// Refuse to start without an interactive terminal
pub fn ensure_tty() -> anyhow::Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        bail!(
            "gol requires an interactive terminal (TTY) on stdin and stdout; \
             run it directly, or over ssh with -t"
        );
    }
    Ok(())
}

/// Terminal size in character cells
pub fn terminal_size() -> anyhow::Result<Size2D> {
    let (columns, rows) = terminal::size().context("failed to query the terminal size")?;
    Ok(Size2D::new(u32::from(columns), u32::from(rows)))
}
