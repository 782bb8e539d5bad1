//! Launching the interactive timer.

use tracing::{info, warn};

use crate::cli::args::RunArgs;
use crate::config::{Config, Paths};
use crate::error::FocusError;
use crate::features::focus::{Alarm, FocusView, TimerMode};
use crate::features::tone::{BellGenerator, SilentGenerator, ToneGenerator};
use crate::logging;

/// Build the view described by the configuration and command-line flags.
///
/// Flags win over the file: `--mode`, `--minutes`, `--muted` and `--no-sound`
/// override their configured counterparts.
#[must_use]
pub fn build_view(config: &Config, args: &RunArgs) -> FocusView {
    let mode = args.mode.unwrap_or(config.timer.initial_mode);

    let mut settings = config.alarm.settings();
    settings.start_muted |= args.muted;

    let generator: Box<dyn ToneGenerator> = if config.alarm.sound && !args.no_sound {
        Box::new(BellGenerator::new(config.alarm.bell_interval()))
    } else {
        Box::new(SilentGenerator)
    };

    let mut view = FocusView::new(mode, Alarm::new(generator, settings));

    // A custom duration only applies to the mode the timer opens in.
    if let Some(choice) = args.minutes.or_else(|| config.timer.initial_duration()) {
        view.set_custom_duration(choice);
    }

    for text in &args.tasks {
        if view.add_task(text).is_none() {
            warn!("Ignoring blank --task");
        }
    }

    view
}

/// Open the timer, logging to the configured file.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up. A log file that
/// cannot be opened only produces a warning.
pub fn run(config: &Config, args: &RunArgs) -> Result<(), FocusError> {
    let paths = Paths::default();
    let log_file = logging::log_path(&config.logging, args.log_file.as_deref(), &paths);
    logging::init_or_warn(&config.logging, &log_file);

    let view = build_view(config, args);
    info!(
        mode = %view.timer_state().mode,
        remaining = view.timer_state().remaining_seconds,
        tasks = view.tasks().len(),
        muted = view.is_muted(),
        "starting focus timer"
    );

    crate::tui::run(view)
}
