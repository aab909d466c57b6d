// Configuration type definitions

use serde::Deserialize;

use crate::env::Environment;
use crate::mode::Mode;

/// Mode selection: detect from the environment or pin one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    #[default]
    Auto,
    Default,
    Tmux,
    Screen,
    Kitty,
}

impl ModeSetting {
    /// Mode to encode with, running detection only for `Auto`
    pub fn resolve(self, env: &Environment) -> Mode {
        match self {
            ModeSetting::Auto => Mode::detect(env),
            ModeSetting::Default => Mode::Default,
            ModeSetting::Tmux => Mode::Tmux,
            ModeSetting::Screen => Mode::Screen,
            ModeSetting::Kitty => Mode::Kitty,
        }
    }
}

impl From<Mode> for ModeSetting {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Default => ModeSetting::Default,
            Mode::Tmux => ModeSetting::Tmux,
            Mode::Screen => ModeSetting::Screen,
            Mode::Kitty => ModeSetting::Kitty,
        }
    }
}

fn default_flush() -> bool {
    true
}

/// Clipboard configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub mode: ModeSetting,
    /// Flush the sink after every sequence
    #[serde(default = "default_flush")]
    pub flush: bool,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        ClipboardConfig {
            mode: ModeSetting::Auto,
            flush: true,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
