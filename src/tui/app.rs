//! Application state for the TUI.

use std::time::Instant;

use crate::features::focus::{DurationChoice, Expiry, FocusView, Task, TimerMode};

/// Whether keys drive the timer or type into the new-task field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Application state.
pub struct App {
    /// The timer and its tasks.
    pub view: FocusView,
    /// Task under the cursor.
    pub selected: usize,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Text of the task being typed.
    pub input: String,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the "how to use" panel is open.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app around a view.
    #[must_use]
    pub fn new(view: FocusView) -> Self {
        Self {
            view,
            selected: 0,
            input_mode: InputMode::Normal,
            input: String::new(),
            status: Some("Press ? for help".to_string()),
            show_help: false,
            should_quit: false,
        }
    }

    /// Advance the timer, reporting expiry in the status bar.
    pub fn tick(&mut self, now: Instant) {
        if let Some(expiry) = self.view.advance(now) {
            self.status = Some(expiry_message(&expiry, &self.view));
        }
    }

    /// Get the task under the cursor.
    pub fn selected_task(&self) -> Option<&Task> {
        self.view.tasks().get(self.selected)
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        let len = self.view.tasks().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// Jump to first item.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Jump to last item.
    pub fn select_last(&mut self) {
        self.selected = self.view.tasks().len().saturating_sub(1);
    }

    pub fn toggle_timer(&mut self, now: Instant) {
        if !self.view.timer_state().is_running && self.view.timer_state().remaining_seconds == 0 {
            self.status = Some("Time is up. Press r to reset or pick a mode".to_string());
            return;
        }
        self.view.toggle_timer(now);
        self.status = None;
    }

    pub fn reset_timer(&mut self) {
        self.view.reset_timer();
        self.status = Some(format!("Reset {}", self.view.timer_state().mode));
    }

    pub fn change_mode(&mut self, mode: TimerMode) {
        self.view.change_mode(mode);
        self.status = Some(format!("{mode} mode"));
    }

    /// Step through the fixed durations and apply the result immediately.
    pub fn cycle_duration(&mut self, forward: bool) {
        let choice = match (self.view.timer().duration_choice(), forward) {
            (Some(current), true) => current.next(),
            (Some(current), false) => current.previous(),
            (None, true) => DurationChoice::Fifteen,
            (None, false) => DurationChoice::Sixty,
        };
        self.view.set_custom_duration(choice);
        self.status = Some(format!("Duration set to {choice}"));
    }

    /// Open the new-task field.
    pub fn begin_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.status = Some("Type a task, Enter to add, Esc to cancel".to_string());
    }

    pub fn cancel_editing(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Normal;
        self.status = None;
    }

    /// Add the typed task. Blank input is dropped silently.
    pub fn submit_task(&mut self) {
        if self.view.add_task(&self.input).is_some() {
            self.select_last();
            self.status = None;
        }
        self.input.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Tick the checkbox of the task under the cursor.
    pub fn complete_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            let (id, text) = (task.id, task.text.clone());
            self.view.complete_task(id);
            self.status = Some(format!("Completed: {text}"));
        }
    }

    /// Make the task under the cursor the current task.
    pub fn select_current(&mut self) {
        if let Some(task) = self.selected_task() {
            let (id, text) = (task.id, task.text.clone());
            self.view.select_task(id);
            self.status = Some(format!("Working on: {text}"));
        }
    }

    pub fn remove_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            let (id, text) = (task.id, task.text.clone());
            self.view.remove_task(id);
            if self.selected >= self.view.tasks().len() {
                self.select_last();
            }
            self.status = Some(format!("Removed: {text}"));
        }
    }

    pub fn toggle_mute(&mut self) {
        self.view.toggle_mute();
        let label = if self.view.is_muted() { "Muted" } else { "Unmuted" };
        self.status = Some(label.to_string());
    }

    pub fn stop_alarm(&mut self) {
        if self.view.is_ringing() {
            self.view.stop_alarm();
            self.status = Some("Alarm stopped".to_string());
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Release timer and alarm resources before exit.
    pub fn shutdown(&mut self) {
        self.view.shutdown();
    }
}

fn expiry_message(expiry: &Expiry, view: &FocusView) -> String {
    if expiry.mode == TimerMode::Focus {
        let task = expiry
            .completed_task
            .and_then(|id| view.task_list().get(id))
            .map_or_else(String::new, |t| format!(" Completed \"{}\".", t.text));
        format!(
            "Focus session {} finished!{task} Press S to stop the alarm",
            view.sessions_completed()
        )
    } else {
        format!("{} is over. Press S to stop the alarm", expiry.mode)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::features::focus::{Alarm, AlarmSettings};
    use crate::features::tone::SilentGenerator;

    fn app() -> App {
        let alarm = Alarm::new(Box::new(SilentGenerator), AlarmSettings::default());
        App::new(FocusView::new(TimerMode::Focus, alarm))
    }

    fn add(app: &mut App, text: &str) {
        app.begin_editing();
        app.input = text.to_string();
        app.submit_task();
    }

    #[test]
    fn test_submit_task_selects_it() {
        let mut app = app();
        add(&mut app, "first");
        add(&mut app, "second");

        assert_eq!(app.view.tasks().len(), 2);
        assert_eq!(app.selected, 1);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut app = app();
        add(&mut app, "   ");
        assert!(app.view.tasks().is_empty());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut app = app();
        app.select_next();
        assert_eq!(app.selected, 0);

        add(&mut app, "a");
        add(&mut app, "b");
        app.select_first();
        app.select_previous();
        assert_eq!(app.selected, 0);
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_remove_last_moves_cursor() {
        let mut app = app();
        add(&mut app, "a");
        add(&mut app, "b");
        app.remove_selected();

        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_task().map(|t| t.text.as_str()), Some("a"));
    }

    #[test]
    fn test_cycle_duration_from_break() {
        let mut app = app();
        app.change_mode(TimerMode::ShortBreak);
        app.cycle_duration(true);
        assert_eq!(app.view.timer_state().remaining_seconds, 15 * 60);

        app.change_mode(TimerMode::Focus);
        app.cycle_duration(true);
        assert_eq!(app.view.timer_state().remaining_seconds, 30 * 60);
        app.cycle_duration(false);
        app.cycle_duration(false);
        assert_eq!(app.view.timer_state().remaining_seconds, 15 * 60);
    }

    #[test]
    fn test_expiry_reported_in_status() {
        let t0 = Instant::now();
        let mut app = app();
        add(&mut app, "Write report");
        app.select_current();

        app.toggle_timer(t0);
        app.tick(t0 + Duration::from_secs(1500));

        let status = app.status.clone().unwrap();
        assert!(status.contains("Focus session 1 finished"));
        assert!(status.contains("Write report"));
        assert!(app.view.is_ringing());

        app.toggle_timer(t0 + Duration::from_secs(1501));
        assert!(!app.view.timer_state().is_running);

        app.stop_alarm();
        assert!(!app.view.is_ringing());
    }
}
