//! focus-timer - A Pomodoro focus timer with task tracking
//!
//! The timer core ([`features::focus`]) is a plain state machine driven by
//! explicit instants; the terminal UI ([`tui`]) polls it and renders it.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::FocusError;
pub use features::focus::FocusView;
