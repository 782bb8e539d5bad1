//! Focus timer core.
//!
//! Provides the Pomodoro-style countdown and the task list it works through:
//! - Three timer modes with fixed default durations
//! - A single-driver countdown state machine
//! - An in-memory task list with one current task
//! - Visual and audible expiry alerts

pub mod alert;
pub mod mode;
pub mod tasks;
pub mod timer;
pub mod view;

pub use alert::{Alarm, AlarmSettings, VisualAlert, VISUAL_ALERT_WINDOW};
pub use mode::{DurationChoice, TimerMode};
pub use tasks::{Task, TaskId, TaskList};
pub use timer::{format_mmss, TickOutcome, Timer, TimerState};
pub use view::{Expiry, FocusView};
