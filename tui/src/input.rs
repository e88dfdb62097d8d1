//! Input Controller
//!
//! Polls the terminal for at most one key event per frame, waiting no
//! longer than the scheduler's poll timeout, and maps it to an [`Action`].
//! Unrecognised keys and non-key events are ignored.
//!
//! The controller reads any stream of terminal events; the frame loop uses
//! crossterm's [`EventStream`].

use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::{Stream, StreamExt};
use life_core::Action;
use tracing::trace;

/// Async keystroke source for the frame loop
pub struct InputController<S = EventStream> {
    events: S,
}

impl InputController<EventStream> {
    /// Attach to the terminal's event stream
    ///
    /// Raw mode should already be enabled.
    pub fn new() -> Self {
        Self::from_stream(EventStream::new())
    }
}

impl<S> InputController<S>
where
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    /// Read events from `events` instead of the terminal
    pub fn from_stream(events: S) -> Self {
        Self { events }
    }

    /// Wait up to `timeout` for one event
    ///
    /// Returns `Ok(None)` when nothing arrived in time or the event does not
    /// map to an action.
    pub async fn poll(&mut self, timeout: Duration) -> anyhow::Result<Option<Action>> {
        let Ok(next) = tokio::time::timeout(timeout, self.events.next()).await else {
            return Ok(None);
        };

        let event = next
            .context("terminal event stream closed")?
            .context("failed to read terminal event")?;
        let action = action_for_event(&event);
        trace!(?event, ?action, "Input event");
        Ok(action)
    }
}

impl Default for InputController<EventStream> {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a terminal event to an action
///
/// Only key presses count; releases and repeats are dropped so one
/// keystroke is one action on terminals that report all three.
pub fn action_for_event(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => action_for_key(key),
        _ => None,
    }
}

/// Map a key press to an action
pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
    match key.code {
        // raw mode swallows SIGINT
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::Quit)
        }
        KeyCode::Char(c) => Action::from_char(c),
        _ => None,
    }
}
