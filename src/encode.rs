//! OSC 52 sequence encoders
//!
//! The payload is always standard base64 (with `=` padding) of the raw UTF-8
//! bytes, unwrapped. Each mode only changes what surrounds it.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::mode::Mode;

/// OSC 52 introducer targeting the clipboard selection
const OSC52_START: &str = "\x1b]52;c;";

const BEL: &str = "\x07";

/// String terminator, also closes a DCS
const ST: &str = "\x1b\\";

/// DCS introducer
const DCS_START: &str = "\x1bP";

/// Priming sequence kitty expects before the real payload
const KITTY_PRIME: &str = "\x1b]52;c;!\x07";

/// Maximum number of DCS chunks screen output is split into
pub const SCREEN_MAX_CHUNKS: usize = 76;

/// Encode `text` for the given mode
pub fn encode(mode: Mode, text: &str) -> String {
    match mode {
        Mode::Default => encode_default(text),
        Mode::Tmux => encode_tmux(text),
        Mode::Screen => encode_screen(text),
        Mode::Kitty => encode_kitty(text),
    }
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn encode_default(text: &str) -> String {
    format!("{}{}{}", OSC52_START, STANDARD.encode(text), BEL)
}

/// OSC 52 wrapped in a tmux pass-through
///
/// `ESC P tmux ; ESC ESC ] 52 ; c ; <base64> BEL ESC \`
///
/// The inner ESC is doubled so tmux forwards it verbatim to the outer terminal.
pub fn encode_tmux(text: &str) -> String {
    format!(
        "{}tmux;\x1b{}{}{}{}",
        DCS_START,
        OSC52_START,
        STANDARD.encode(text),
        BEL,
        ST
    )
}

/// OSC 52 carried through GNU screen in DCS chunks
///
/// screen does not understand OSC 52 but passes DCS contents through to the
/// outer terminal unchanged, and it caps the length of a single DCS. The
/// base64 text is split on newlines into at most [`SCREEN_MAX_CHUNKS`]
/// chunks, each preceded by `ESC \ ESC P`. Standard base64 never contains a
/// newline, so in practice there is exactly one chunk:
///
/// `ESC P ESC ] 52 ; c ; ESC \ ESC P <base64> BEL ESC \`
pub fn encode_screen(text: &str) -> String {
    let encoded = STANDARD.encode(text);

    let mut sequence = String::with_capacity(encoded.len() + 16);
    sequence.push_str(DCS_START);
    sequence.push_str(OSC52_START);
    for chunk in encoded.splitn(SCREEN_MAX_CHUNKS, '\n') {
        sequence.push_str(ST);
        sequence.push_str(DCS_START);
        sequence.push_str(chunk);
    }
    sequence.push_str(BEL);
    sequence.push_str(ST);
    sequence
}

/// kitty priming sequence followed by the default encoding
pub fn encode_kitty(text: &str) -> String {
    let mut sequence = String::from(KITTY_PRIME);
    sequence.push_str(&encode_default(text));
    sequence
}

#[cfg(test)]
#[path = "encode_tests.rs"]
mod encode_tests;
