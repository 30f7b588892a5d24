//! Media transport actions accepted by the bridge
//!
//! The set is closed: a request token either parses into one of these
//! variants or is rejected before any process is spawned. Only the token
//! returned by [`Action::as_str`] is ever passed to playerctl.

use std::fmt;
use std::str::FromStr;

/// A playerctl transport command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Play,
    Pause,
    Next,
    Previous,
    PlayPause,
}

impl Action {
    /// Every accepted action, in wire-token order
    pub const ALL: [Action; 5] = [
        Action::Play,
        Action::Pause,
        Action::Next,
        Action::Previous,
        Action::PlayPause,
    ];

    /// Token used both in the URL path and as the playerctl argument
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Play => "play",
            Action::Pause => "pause",
            Action::Next => "next",
            Action::Previous => "previous",
            Action::PlayPause => "play-pause",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token that is not in the action set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action: {}", self.0)
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for Action {
    type Err = UnknownAction;

    /// Exact, case-sensitive match against the wire tokens
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == token)
            .ok_or_else(|| UnknownAction(token.to_string()))
    }
}
