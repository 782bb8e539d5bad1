//! Event handling for the TUI.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::FocusError;
use crate::features::focus::TimerMode;
use crate::tui::app::{App, InputMode};

/// Longest time to block waiting for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Poll terminal events, waking early for the next timer tick.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, FocusError> {
    let timeout = app
        .view
        .timer()
        .next_deadline()
        .map_or(POLL_INTERVAL, |deadline| {
            deadline
                .saturating_duration_since(Instant::now())
                .min(POLL_INTERVAL)
        });

    if event::poll(timeout).map_err(|e| FocusError::terminal("Event poll failed", e))? {
        if let Event::Key(key) =
            event::read().map_err(|e| FocusError::terminal("Event read failed", e))?
        {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key(app, key, Instant::now()));
            }
        }
    }

    Ok(None)
}

/// Apply a single key press to the app.
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match app.input_mode {
        InputMode::Editing => {
            handle_editing_key(app, key);
            None
        }
        InputMode::Normal => handle_normal_key(app, key, now),
    }
}

fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_task(),
        KeyCode::Esc => app.cancel_editing(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.input.push(c);
        }
        _ => {}
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent, now: Instant) -> Option<Action> {
    // Any key closes the help panel.
    if app.show_help {
        app.toggle_help();
        return None;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),

        // Timer
        KeyCode::Char(' ') => app.toggle_timer(now),
        KeyCode::Char('r') => app.reset_timer(),
        KeyCode::Char('1') => app.change_mode(TimerMode::Focus),
        KeyCode::Char('2') => app.change_mode(TimerMode::ShortBreak),
        KeyCode::Char('3') => app.change_mode(TimerMode::LongBreak),
        KeyCode::Char(']') => app.cycle_duration(true),
        KeyCode::Char('[') => app.cycle_duration(false),

        // Navigation - vim style
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        // Tasks
        KeyCode::Char('a' | 'i') => app.begin_editing(),
        KeyCode::Char('c' | 'x') => app.complete_selected(),
        KeyCode::Char('s') | KeyCode::Enter => app.select_current(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),

        // Alarm
        KeyCode::Char('m') => app.toggle_mute(),
        KeyCode::Char('S') => app.stop_alarm(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }

    None
}
