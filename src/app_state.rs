//! Timer phase the host application is in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Current phase of the Pomodoro timer.
///
/// The titlebar accepts and keeps this value but does not change its output
/// based on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppState {
    #[default]
    StayFocused,
    ShortBreak,
    LongBreak,
    SpecialBreak,
}

impl AppState {
    pub fn all_variants() -> &'static [AppState] {
        &[
            AppState::StayFocused,
            AppState::ShortBreak,
            AppState::LongBreak,
            AppState::SpecialBreak,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AppState::StayFocused => "stay-focused",
            AppState::ShortBreak => "short-break",
            AppState::LongBreak => "long-break",
            AppState::SpecialBreak => "special-break",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            AppState::StayFocused => "Stay Focused",
            AppState::ShortBreak => "Short Break",
            AppState::LongBreak => "Long Break",
            AppState::SpecialBreak => "Special Break",
        }
    }
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text that does not name any [`AppState`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown app state \"{0}\"")]
pub struct ParseAppStateError(pub String);

impl FromStr for AppState {
    type Err = ParseAppStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppState::all_variants()
            .iter()
            .copied()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ParseAppStateError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_stay_focused() {
        assert_eq!(AppState::default(), AppState::StayFocused);
    }

    #[test]
    fn parses_kebab_case_names() {
        assert_eq!("short-break".parse::<AppState>(), Ok(AppState::ShortBreak));
        assert_eq!("special-break".parse::<AppState>(), Ok(AppState::SpecialBreak));
        for state in AppState::all_variants() {
            assert_eq!(state.to_string().parse::<AppState>(), Ok(*state));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "coffee-break".parse::<AppState>().unwrap_err();
        assert_eq!(err, ParseAppStateError("coffee-break".to_string()));
        assert_eq!(err.to_string(), "unknown app state \"coffee-break\"");
        assert!("StayFocused".parse::<AppState>().is_err());
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&AppState::LongBreak).unwrap();
        assert_eq!(json, "\"long-break\"");
        let state: AppState = serde_json::from_str("\"stay-focused\"").unwrap();
        assert_eq!(state, AppState::StayFocused);
    }
}
