//! The focus timer view: timer, task list, and alerts under one owner.
//!
//! All state lives on a single [`FocusView`] created at startup and dropped
//! (or [`FocusView::shutdown`]) at exit. Time is passed in explicitly so the
//! caller decides how often to poll and tests can simulate it.

use std::time::Instant;

use tracing::info;

use super::alert::{Alarm, VisualAlert};
use super::mode::{DurationChoice, TimerMode};
use super::tasks::{Task, TaskId, TaskList};
use super::timer::{TickOutcome, Timer, TimerState};

/// What happened when a countdown reached zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    /// Mode that expired
    pub mode: TimerMode,
    /// Task auto-completed by a finished focus session
    pub completed_task: Option<TaskId>,
}

/// Focus timer with task tracking.
#[derive(Debug)]
pub struct FocusView {
    timer: Timer,
    tasks: TaskList,
    visual_alert: VisualAlert,
    alarm: Alarm,
    sessions_completed: u32,
}

impl FocusView {
    /// Create a paused view in `mode` with an empty task list.
    #[must_use]
    pub fn new(mode: TimerMode, alarm: Alarm) -> Self {
        Self {
            timer: Timer::new(mode),
            tasks: TaskList::new(),
            visual_alert: VisualAlert::default(),
            alarm,
            sessions_completed: 0,
        }
    }

    /// Drive the view to `now`.
    ///
    /// Clears an elapsed visual alert and advances the countdown. Returns the
    /// expiry when this call is the one that took the countdown to zero.
    pub fn advance(&mut self, now: Instant) -> Option<Expiry> {
        self.visual_alert.advance(now);

        match self.timer.advance(now) {
            TickOutcome::Expired(mode) => Some(self.expire(mode, now)),
            TickOutcome::Idle | TickOutcome::Ticked(_) => None,
        }
    }

    fn expire(&mut self, mode: TimerMode, now: Instant) -> Expiry {
        self.visual_alert.trigger(now);
        self.alarm.ring();

        let completed_task = if mode.is_break() {
            None
        } else {
            self.sessions_completed += 1;
            self.tasks.complete_current()
        };

        info!(
            mode = %mode,
            sessions = self.sessions_completed,
            completed_task,
            "countdown finished"
        );

        Expiry {
            mode,
            completed_task,
        }
    }

    // Timer controls

    /// Start or resume. Has no effect when the countdown is at zero.
    pub fn start(&mut self, now: Instant) -> bool {
        self.timer.start(now)
    }

    pub fn pause(&mut self) {
        self.timer.pause();
    }

    /// The start/pause button.
    pub fn toggle_timer(&mut self, now: Instant) {
        self.timer.toggle(now);
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
    }

    pub fn change_mode(&mut self, mode: TimerMode) {
        self.timer.change_mode(mode);
    }

    pub fn set_custom_duration(&mut self, choice: DurationChoice) {
        self.timer.set_custom_duration(choice);
    }

    // Task controls

    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        self.tasks.add(text)
    }

    pub fn remove_task(&mut self, id: TaskId) {
        self.tasks.remove(id);
    }

    pub fn complete_task(&mut self, id: TaskId) {
        self.tasks.complete(id);
    }

    pub fn select_task(&mut self, id: TaskId) {
        self.tasks.select(id);
    }

    // Alarm controls

    pub fn toggle_mute(&mut self) {
        self.alarm.toggle_mute();
    }

    pub fn stop_alarm(&mut self) {
        self.alarm.stop();
    }

    /// Release the countdown driver and the alarm tone.
    pub fn shutdown(&mut self) {
        self.timer.pause();
        self.alarm.stop();
        self.visual_alert.clear();
        info!(sessions = self.sessions_completed, "focus view shut down");
    }

    // Accessors

    #[must_use]
    pub const fn timer(&self) -> &Timer {
        &self.timer
    }

    #[must_use]
    pub const fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    #[must_use]
    pub const fn task_list(&self) -> &TaskList {
        &self.tasks
    }

    #[must_use]
    pub fn current_task(&self) -> Option<&Task> {
        self.tasks.current()
    }

    #[must_use]
    pub const fn sessions_completed(&self) -> u32 {
        self.sessions_completed
    }

    #[must_use]
    pub const fn is_alert_active(&self) -> bool {
        self.visual_alert.is_active()
    }

    #[must_use]
    pub const fn is_ringing(&self) -> bool {
        self.alarm.is_ringing()
    }

    #[must_use]
    pub const fn is_muted(&self) -> bool {
        self.alarm.is_muted()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::features::focus::alert::AlarmSettings;
    use crate::features::tone::{MockToneGenerator, MockToneHandle, SilentGenerator, ToneHandle};

    fn view(mode: TimerMode) -> FocusView {
        FocusView::new(mode, Alarm::new(Box::new(SilentGenerator), AlarmSettings::default()))
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    /// Run the current countdown to zero, returning the expiry instant.
    fn run_out(view: &mut FocusView, t0: Instant) -> (Instant, Option<Expiry>) {
        let total = u64::from(view.timer_state().remaining_seconds);
        view.start(t0);
        let end = t0 + secs(total);
        (end, view.advance(end))
    }

    #[test]
    fn test_focus_expiry_counts_session_and_completes_current() {
        let t0 = Instant::now();
        let mut view = view(TimerMode::Focus);
        let id = view.add_task("Write report").unwrap();
        view.select_task(id);

        let (_, expiry) = run_out(&mut view, t0);

        assert_eq!(
            expiry,
            Some(Expiry {
                mode: TimerMode::Focus,
                completed_task: Some(id),
            })
        );
        assert_eq!(view.sessions_completed(), 1);
        assert!(view.tasks()[0].completed);
        assert!(view.current_task().is_none());
        assert!(!view.timer_state().is_running);
        assert!(view.is_ringing());
    }

    #[test]
    fn test_break_expiry_leaves_sessions_alone() {
        for mode in [TimerMode::ShortBreak, TimerMode::LongBreak] {
            let t0 = Instant::now();
            let mut view = view(mode);
            let id = view.add_task("Stretch").unwrap();
            view.select_task(id);

            let (_, expiry) = run_out(&mut view, t0);

            assert_eq!(expiry.map(|e| e.mode), Some(mode));
            assert_eq!(view.sessions_completed(), 0);
            assert!(!view.tasks()[0].completed);
            assert_eq!(view.current_task().map(|t| t.id), Some(id));
        }
    }

    #[test]
    fn test_expiry_handled_once() {
        let t0 = Instant::now();
        let mut view = view(TimerMode::Focus);
        view.set_custom_duration(DurationChoice::Fifteen);
        view.start(t0);
        view.advance(t0 + secs(899));
        assert_eq!(view.timer_state().remaining_seconds, 1);

        assert!(view.advance(t0 + secs(900)).is_some());
        for extra in 0..5 {
            assert!(view.advance(t0 + secs(900 + extra)).is_none());
        }
        assert_eq!(view.sessions_completed(), 1);
        assert_eq!(view.timer_state().remaining_seconds, 0);

        // Start is refused until the timer is reloaded.
        assert!(!view.start(t0 + secs(901)));
    }

    #[test]
    fn test_no_current_task_on_focus_expiry() {
        let t0 = Instant::now();
        let mut view = view(TimerMode::Focus);
        view.add_task("Unselected").unwrap();

        let (_, expiry) = run_out(&mut view, t0);
        assert_eq!(expiry.and_then(|e| e.completed_task), None);
        assert_eq!(view.sessions_completed(), 1);
        assert!(!view.tasks()[0].completed);
    }

    #[test]
    fn test_visual_alert_clears_after_three_seconds() {
        let t0 = Instant::now();
        let mut view = view(TimerMode::ShortBreak);
        let (end, _) = run_out(&mut view, t0);
        assert!(view.is_alert_active());

        let before = view.timer_state();
        let ringing = view.is_ringing();

        view.advance(end + Duration::from_millis(2999));
        assert!(view.is_alert_active());

        view.advance(end + secs(3));
        assert!(!view.is_alert_active());
        assert_eq!(view.timer_state(), before);
        assert_eq!(view.is_ringing(), ringing);
        assert_eq!(view.sessions_completed(), 0);
    }

    #[test]
    fn test_alarm_keeps_ringing_until_stopped() {
        let t0 = Instant::now();
        let mut view = view(TimerMode::ShortBreak);
        let (end, _) = run_out(&mut view, t0);

        view.advance(end + secs(600));
        assert!(view.is_ringing());

        view.toggle_mute();
        assert!(view.is_muted());
        assert!(view.is_ringing());

        view.stop_alarm();
        assert!(!view.is_ringing());
        assert!(view.is_muted());
    }

    #[test]
    fn test_second_expiry_replaces_tone() {
        let mut generator = MockToneGenerator::new();
        generator.expect_start().times(2).returning(|_| {
            let mut handle = MockToneHandle::new();
            handle.expect_stop().times(1).return_const(());
            Ok(Box::new(handle) as Box<dyn ToneHandle>)
        });
        let mut view = FocusView::new(
            TimerMode::ShortBreak,
            Alarm::new(Box::new(generator), AlarmSettings::default()),
        );

        let t0 = Instant::now();
        let (end, _) = run_out(&mut view, t0);
        view.reset_timer();
        run_out(&mut view, end);
        assert!(view.is_ringing());

        view.shutdown();
        assert!(!view.is_ringing());
    }

    #[test]
    fn test_change_mode_stops_and_reloads() {
        let t0 = Instant::now();
        let mut view = view(TimerMode::Focus);
        view.start(t0);
        view.advance(t0 + secs(10));

        for mode in TimerMode::ALL {
            view.change_mode(mode);
            let state = view.timer_state();
            assert_eq!(state.remaining_seconds, mode.default_seconds());
            assert_eq!(state.mode, mode);
            assert!(!state.is_running);
        }
    }

    #[test]
    fn test_toggle_storm_single_decrement() {
        let t0 = Instant::now();
        let mut view = view(TimerMode::Focus);
        for _ in 0..10 {
            view.toggle_timer(t0);
        }
        view.start(t0);
        view.advance(t0 + secs(1));
        assert_eq!(view.timer_state().remaining_seconds, 1499);
    }

    #[test]
    fn test_shutdown_releases_driver() {
        let t0 = Instant::now();
        let mut view = view(TimerMode::Focus);
        view.start(t0);
        view.shutdown();

        assert!(!view.timer_state().is_running);
        assert!(view.advance(t0 + secs(5000)).is_none());
        assert_eq!(view.timer_state().remaining_seconds, 1500);
    }

    #[test]
    fn test_task_operations_through_view() {
        let mut view = view(TimerMode::Focus);
        assert!(view.add_task("   ").is_none());
        assert!(view.tasks().is_empty());

        let a = view.add_task("a").unwrap();
        let b = view.add_task("b").unwrap();
        view.select_task(a);
        view.remove_task(b);
        assert_eq!(view.current_task().map(|t| t.id), Some(a));

        view.complete_task(a);
        assert!(view.current_task().is_none());
        assert_eq!(view.task_list().pending_count(), 0);
    }
}
