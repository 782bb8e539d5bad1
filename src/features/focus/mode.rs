//! Timer modes and selectable durations.

use serde::{Deserialize, Serialize};

/// Which phase the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerMode {
    /// Work interval (25 minutes)
    #[default]
    Focus,
    /// Short rest (5 minutes)
    ShortBreak,
    /// Long rest (15 minutes)
    LongBreak,
}

impl TimerMode {
    /// All modes in display order.
    pub const ALL: [Self; 3] = [Self::Focus, Self::ShortBreak, Self::LongBreak];

    /// Get the default duration for this mode, in seconds.
    #[must_use]
    pub const fn default_seconds(&self) -> u32 {
        match self {
            Self::Focus => 25 * 60,
            Self::ShortBreak => 5 * 60,
            Self::LongBreak => 15 * 60,
        }
    }

    /// Parse a mode from a user-supplied string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "focus" | "f" | "pomodoro" | "pomo" => Some(Self::Focus),
            "short" | "short-break" | "short_break" | "sb" => Some(Self::ShortBreak),
            "long" | "long-break" | "long_break" | "lb" => Some(Self::LongBreak),
            _ => None,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Check if this is a break mode.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

impl std::fmt::Display for TimerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One of the fixed custom durations offered by the duration selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationChoice {
    Fifteen,
    TwentyFive,
    Thirty,
    FortyFive,
    Sixty,
}

impl DurationChoice {
    /// All choices, shortest first.
    pub const ALL: [Self; 5] = [
        Self::Fifteen,
        Self::TwentyFive,
        Self::Thirty,
        Self::FortyFive,
        Self::Sixty,
    ];

    #[must_use]
    pub const fn minutes(&self) -> u32 {
        match self {
            Self::Fifteen => 15,
            Self::TwentyFive => 25,
            Self::Thirty => 30,
            Self::FortyFive => 45,
            Self::Sixty => 60,
        }
    }

    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.minutes() * 60
    }

    /// Look up the choice for a minute count, if it is one of the offered values.
    #[must_use]
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.minutes() == minutes)
    }

    /// The choice whose length matches `seconds` exactly.
    #[must_use]
    pub fn matching_seconds(seconds: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.seconds() == seconds)
    }

    /// Next longer choice, wrapping to the shortest.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Next shorter choice, wrapping to the longest.
    #[must_use]
    pub fn previous(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

impl std::fmt::Display for DurationChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} minutes", self.minutes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_default_seconds() {
        assert_eq!(TimerMode::Focus.default_seconds(), 1500);
        assert_eq!(TimerMode::ShortBreak.default_seconds(), 300);
        assert_eq!(TimerMode::LongBreak.default_seconds(), 900);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(TimerMode::parse("focus"), Some(TimerMode::Focus));
        assert_eq!(TimerMode::parse("Short"), Some(TimerMode::ShortBreak));
        assert_eq!(TimerMode::parse("lb"), Some(TimerMode::LongBreak));
        assert_eq!(TimerMode::parse("nap"), None);
    }

    #[test]
    fn test_mode_is_break() {
        assert!(!TimerMode::Focus.is_break());
        assert!(TimerMode::ShortBreak.is_break());
        assert!(TimerMode::LongBreak.is_break());
    }

    #[test]
    fn test_duration_choice_from_minutes() {
        assert_eq!(DurationChoice::from_minutes(45), Some(DurationChoice::FortyFive));
        assert_eq!(DurationChoice::from_minutes(20), None);
        assert_eq!(DurationChoice::Sixty.seconds(), 3600);
    }

    #[test]
    fn test_duration_choice_cycles() {
        assert_eq!(DurationChoice::Fifteen.next(), DurationChoice::TwentyFive);
        assert_eq!(DurationChoice::Sixty.next(), DurationChoice::Fifteen);
        assert_eq!(DurationChoice::Fifteen.previous(), DurationChoice::Sixty);
    }

    #[test]
    fn test_matching_seconds() {
        assert_eq!(
            DurationChoice::matching_seconds(TimerMode::Focus.default_seconds()),
            Some(DurationChoice::TwentyFive)
        );
        assert_eq!(DurationChoice::matching_seconds(300), None);
    }
}
