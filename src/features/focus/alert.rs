//! Expiry alerts: the short visual pulse and the ringing alarm.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::features::tone::{ToneGenerator, ToneHandle, ToneSpec};

/// How long the visual alert stays up after expiry.
pub const VISUAL_ALERT_WINDOW: Duration = Duration::from_secs(3);

/// Transient "alert active" flag that clears itself after a fixed window.
#[derive(Debug, Default, Clone, Copy)]
pub struct VisualAlert {
    until: Option<Instant>,
}

impl VisualAlert {
    /// Raise the alert for [`VISUAL_ALERT_WINDOW`] starting at `now`.
    pub fn trigger(&mut self, now: Instant) {
        self.until = Some(now + VISUAL_ALERT_WINDOW);
    }

    /// Clear the alert once its window has passed. Returns true if it cleared.
    pub fn advance(&mut self, now: Instant) -> bool {
        match self.until {
            Some(until) if now >= until => {
                self.until = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.until = None;
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.until.is_some()
    }
}

/// Fixed tone parameters for the alarm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlarmSettings {
    pub frequency_hz: f32,
    pub volume: f32,
    pub start_muted: bool,
}

impl Default for AlarmSettings {
    fn default() -> Self {
        Self {
            frequency_hz: 440.0,
            volume: 0.5,
            start_muted: false,
        }
    }
}

/// Continuous alarm tone with mute and stop controls.
///
/// Holds at most one live [`ToneHandle`]. Ringing again releases the previous
/// handle first, and dropping the alarm stops it.
pub struct Alarm {
    generator: Box<dyn ToneGenerator>,
    tone: Option<Box<dyn ToneHandle>>,
    settings: AlarmSettings,
    muted: bool,
}

impl Alarm {
    #[must_use]
    pub fn new(generator: Box<dyn ToneGenerator>, settings: AlarmSettings) -> Self {
        Self {
            generator,
            tone: None,
            muted: settings.start_muted,
            settings,
        }
    }

    /// Start the tone. It does not stop on its own.
    pub fn ring(&mut self) {
        self.stop();

        let spec = ToneSpec {
            frequency_hz: self.settings.frequency_hz,
            volume: self.effective_volume(),
        };
        match self.generator.start(spec) {
            Ok(handle) => {
                self.tone = Some(handle);
                info!(muted = self.muted, "alarm ringing");
            }
            Err(e) => warn!("Failed to start alarm tone: {e}"),
        }
    }

    /// Flip the mute flag, silencing or restoring a live tone in place.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        let volume = self.effective_volume();
        if let Some(tone) = self.tone.as_mut() {
            tone.set_volume(volume);
        }
        debug!(muted = self.muted, "alarm mute toggled");
    }

    /// Tear down the tone entirely.
    pub fn stop(&mut self) {
        if let Some(mut tone) = self.tone.take() {
            tone.stop();
            debug!("alarm stopped");
        }
    }

    #[must_use]
    pub const fn is_ringing(&self) -> bool {
        self.tone.is_some()
    }

    #[must_use]
    pub const fn is_muted(&self) -> bool {
        self.muted
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.settings.volume
        }
    }
}

impl std::fmt::Debug for Alarm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alarm")
            .field("ringing", &self.is_ringing())
            .field("muted", &self.muted)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Drop for Alarm {
    fn drop(&mut self) {
        self.stop();
    }
}
