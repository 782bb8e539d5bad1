//! Feature implementations for focus-timer.
//!
//! - Focus timer: countdown modes, task list, expiry alerts
//! - Tone: audible alarm backends

pub mod focus;
pub mod tone;
