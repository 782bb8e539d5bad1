//! Audible alarm tone generation.
//!
//! A [`ToneGenerator`] hands out owned [`ToneHandle`]s. A handle keeps sounding
//! until it is stopped or dropped; muting only changes its volume.
//!
//! Backends:
//! - [`BellGenerator`]: rings the terminal bell from a background thread
//! - [`SilentGenerator`]: produces no sound, used when sound is disabled

mod bell;

pub use bell::{BellGenerator, BellHandle};

use crate::error::FocusError;

/// Pitch and loudness of a tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    /// Pitch in hertz
    pub frequency_hz: f32,
    /// Loudness from 0.0 (silent) to 1.0
    pub volume: f32,
}

/// A live tone. Dropping the handle releases the tone.
#[cfg_attr(test, mockall::automock)]
pub trait ToneHandle: Send {
    /// Change the volume without stopping generation.
    fn set_volume(&mut self, volume: f32);

    /// Tear down generation. Calling it twice is harmless.
    fn stop(&mut self);
}

/// Source of tones.
#[cfg_attr(test, mockall::automock)]
pub trait ToneGenerator: Send {
    /// Begin a continuous tone.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot start producing sound.
    fn start(&mut self, spec: ToneSpec) -> Result<Box<dyn ToneHandle>, FocusError>;
}

/// Generator that never makes a sound.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentGenerator;

/// Handle returned by [`SilentGenerator`].
#[derive(Debug, Default)]
pub struct SilentHandle {
    volume: f32,
    stopped: bool,
}

impl SilentHandle {
    #[must_use]
    pub const fn volume(&self) -> f32 {
        self.volume
    }

    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl ToneHandle for SilentHandle {
    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

impl ToneGenerator for SilentGenerator {
    fn start(&mut self, spec: ToneSpec) -> Result<Box<dyn ToneHandle>, FocusError> {
        Ok(Box::new(SilentHandle {
            volume: spec.volume,
            stopped: false,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_handle_tracks_volume() {
        let mut handle = SilentHandle::default();
        handle.set_volume(0.5);
        assert!((handle.volume() - 0.5).abs() < f32::EPSILON);

        handle.stop();
        handle.stop();
        assert!(handle.is_stopped());
    }

    #[test]
    fn test_silent_generator_starts() {
        let mut generator = SilentGenerator;
        let handle = generator.start(ToneSpec {
            frequency_hz: 440.0,
            volume: 0.5,
        });
        assert!(handle.is_ok());
    }
}
