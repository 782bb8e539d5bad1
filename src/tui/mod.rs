//! Terminal User Interface (TUI) for focus-timer.
//!
//! Provides the interactive timer view. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, InputMode};

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use crate::error::FocusError;
use crate::features::focus::FocusView;

/// Run the TUI application until the user quits.
///
/// The view is shut down on every exit path, releasing the countdown driver
/// and any ringing alarm.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(view: FocusView) -> Result<(), FocusError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| FocusError::terminal("Failed to enable raw mode", e))?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode().ok();
        return Err(FocusError::terminal("Failed to setup terminal", e));
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            disable_raw_mode().ok();
            execute!(io::stdout(), LeaveAlternateScreen).ok();
            return Err(FocusError::terminal("Failed to create terminal", e));
        }
    };

    // Create app state and run main loop
    let mut app = App::new(view);
    info!("timer opened");
    let result = run_app(&mut terminal, &mut app);
    app.shutdown();

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), FocusError> {
    loop {
        app.tick(Instant::now());

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| FocusError::terminal("Failed to draw", e))?;

        // Handle events
        if let Some(event::Action::Quit) = event::handle_events(app)? {
            app.should_quit = true;
        }
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
