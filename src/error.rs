//! Error types for focus-timer.
//!
//! The timer core is total and never fails; these errors only come from the
//! edges of the program (configuration files, the terminal, logging).

use thiserror::Error;

/// Errors surfaced by the focus-timer binary and its supporting modules.
#[derive(Debug, Error)]
pub enum FocusError {
    /// Configuration could not be located, read, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A value could not be parsed or serialized.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The terminal could not be set up, drawn, or polled.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FocusError {
    /// Wrap a terminal failure with the step that produced it.
    pub fn terminal(step: &str, err: impl std::fmt::Display) -> Self {
        Self::Terminal(format!("{step}: {err}"))
    }
}
