//! Countdown timer state machine.
//!
//! The timer owns at most one [`Ticker`], the one-second driver that exists
//! only while the timer is running. Every transition out of the running state
//! drops it, so repeated start/pause toggles can never leave two drivers
//! decrementing the same countdown.

use std::time::{Duration, Instant};

use tracing::debug;

use super::mode::{DurationChoice, TimerMode};

/// Snapshot of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    /// Seconds left on the countdown
    pub remaining_seconds: u32,
    /// Mode being counted down
    pub mode: TimerMode,
    /// Whether the countdown is advancing
    pub is_running: bool,
}

/// Result of advancing the timer to a new instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No whole second elapsed, or the timer is not running.
    Idle,
    /// The countdown moved by this many seconds and is still running.
    Ticked(u32),
    /// The countdown reached zero and the timer stopped itself.
    Expired(TimerMode),
}

/// Repeating one-second driver, anchored at the instant the timer started.
#[derive(Debug)]
struct Ticker {
    anchor: Instant,
    fired: u64,
}

impl Ticker {
    const fn new(anchor: Instant) -> Self {
        Self { anchor, fired: 0 }
    }

    /// Number of one-second ticks due since the last call.
    fn due(&mut self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.anchor).as_secs();
        let due = elapsed.saturating_sub(self.fired);
        self.fired = self.fired.max(elapsed);
        due
    }

    /// Instant of the next tick.
    fn next_deadline(&self) -> Instant {
        self.anchor + Duration::from_secs(self.fired + 1)
    }
}

/// A countdown timer over the three [`TimerMode`]s.
#[derive(Debug)]
pub struct Timer {
    mode: TimerMode,
    /// Length of the countdown as last loaded (mode default or custom choice)
    total_seconds: u32,
    remaining_seconds: u32,
    ticker: Option<Ticker>,
}

impl Timer {
    /// Create a paused timer loaded with the mode's default duration.
    #[must_use]
    pub const fn new(mode: TimerMode) -> Self {
        let seconds = mode.default_seconds();
        Self {
            mode,
            total_seconds: seconds,
            remaining_seconds: seconds,
            ticker: None,
        }
    }

    /// Start or resume the countdown.
    ///
    /// Does nothing when no time is left. Returns whether the timer is running
    /// afterwards.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.remaining_seconds == 0 {
            debug!(mode = %self.mode, "start ignored, no time remaining");
            return false;
        }
        if self.ticker.is_none() {
            self.ticker = Some(Ticker::new(now));
            debug!(mode = %self.mode, remaining = self.remaining_seconds, "timer started");
        }
        true
    }

    /// Pause the countdown, discarding the driver and any partial second.
    pub fn pause(&mut self) {
        if self.ticker.take().is_some() {
            debug!(mode = %self.mode, remaining = self.remaining_seconds, "timer paused");
        }
    }

    /// Start when paused, pause when running.
    pub fn toggle(&mut self, now: Instant) {
        if self.is_running() {
            self.pause();
        } else {
            self.start(now);
        }
    }

    /// Advance the countdown to `now`.
    ///
    /// Reports [`TickOutcome::Expired`] exactly once, on the tick that reaches
    /// zero; the timer is stopped by then so later calls return `Idle`.
    pub fn advance(&mut self, now: Instant) -> TickOutcome {
        let Some(ticker) = self.ticker.as_mut() else {
            return TickOutcome::Idle;
        };

        let due = ticker.due(now);
        if due == 0 {
            return TickOutcome::Idle;
        }

        let steps = u32::try_from(due)
            .unwrap_or(u32::MAX)
            .min(self.remaining_seconds);
        self.remaining_seconds -= steps;

        if self.remaining_seconds == 0 {
            self.ticker = None;
            debug!(mode = %self.mode, "timer expired");
            TickOutcome::Expired(self.mode)
        } else {
            TickOutcome::Ticked(steps)
        }
    }

    /// Switch modes: stop and load the new mode's default duration.
    pub fn change_mode(&mut self, mode: TimerMode) {
        self.pause();
        self.mode = mode;
        self.load(mode.default_seconds());
        debug!(mode = %mode, "mode changed");
    }

    /// Stop and reload the current mode's default duration.
    pub fn reset(&mut self) {
        self.pause();
        self.load(self.mode.default_seconds());
        debug!(mode = %self.mode, "timer reset");
    }

    /// Replace the remaining time with one of the fixed durations.
    ///
    /// The running state is left alone: a running countdown keeps going from
    /// the new value.
    pub fn set_custom_duration(&mut self, choice: DurationChoice) {
        self.load(choice.seconds());
        debug!(minutes = choice.minutes(), running = self.is_running(), "duration selected");
    }

    fn load(&mut self, seconds: u32) {
        self.total_seconds = seconds;
        self.remaining_seconds = seconds;
    }

    #[must_use]
    pub const fn mode(&self) -> TimerMode {
        self.mode
    }

    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Get the current state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        TimerState {
            remaining_seconds: self.remaining_seconds,
            mode: self.mode,
            is_running: self.is_running(),
        }
    }

    /// The duration choice matching the loaded countdown length, if any.
    #[must_use]
    pub fn duration_choice(&self) -> Option<DurationChoice> {
        DurationChoice::matching_seconds(self.total_seconds)
    }

    /// Instant at which the next second elapses, while running.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.ticker.as_ref().map(Ticker::next_deadline)
    }

    /// Get progress as a percentage (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 1.0;
        }
        let remaining = f64::from(self.remaining_seconds.min(self.total_seconds));
        1.0 - remaining / f64::from(self.total_seconds)
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_mmss(self.remaining_seconds)
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(TimerMode::default())
    }
}

/// Format a number of seconds as zero-padded MM:SS.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}
