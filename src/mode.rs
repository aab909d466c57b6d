//! Terminal mode detection
//!
//! Multiplexers swallow or mangle a bare OSC 52 sequence coming from an inner
//! session, so the sequence has to be wrapped in a pass-through the
//! multiplexer understands. kitty wants a priming sequence first.

use std::fmt;

use crate::env::Environment;

/// Output encoding selected for a copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Bare OSC 52
    Default,
    /// OSC 52 inside a tmux DCS pass-through
    Tmux,
    /// OSC 52 inside GNU screen DCS chunks
    Screen,
    /// kitty priming sequence followed by bare OSC 52
    Kitty,
}

impl Mode {
    /// Pick the mode for the given environment
    ///
    /// Checks run in order and the first match wins: a non-empty `TMUX`, then
    /// a `screen` prefix on `TERM` or `LC_TERM`, then a `kitty` prefix on
    /// either. Prefix matching is case-sensitive.
    pub fn detect(env: &Environment) -> Mode {
        let term = env.get("TERM");
        let lc_term = env.get("LC_TERM");
        let either_starts_with =
            |prefix: &str| term.starts_with(prefix) || lc_term.starts_with(prefix);

        if !env.get("TMUX").is_empty() {
            Mode::Tmux
        } else if either_starts_with("screen") {
            Mode::Screen
        } else if either_starts_with("kitty") {
            Mode::Kitty
        } else {
            Mode::Default
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Default => "default",
            Mode::Tmux => "tmux",
            Mode::Screen => "screen",
            Mode::Kitty => "kitty",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod mode_tests;
