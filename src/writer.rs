//! Clipboard writer
//!
//! Pairs an output sink with an environment snapshot and writes the OSC 52
//! sequence suited to the terminal that snapshot describes.

use std::io::Write;

use crate::config::ClipboardConfig;
use crate::encode::encode;
use crate::env::Environment;
use crate::error::Result;
use crate::mode::Mode;

/// Writes OSC 52 clipboard sequences to a sink
///
/// Holds no state besides the sink, so one writer can be reused for any
/// number of copies.
#[derive(Debug)]
pub struct Writer<W: Write> {
    out: W,
    env: Environment,
    config: ClipboardConfig,
}

impl<W: Write> Writer<W> {
    /// Create a writer from a sink and raw `KEY=VALUE` environment entries
    pub fn new<I, S>(out: W, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(out, Environment::parse(entries), ClipboardConfig::default())
    }

    pub fn with_config(out: W, env: Environment, config: ClipboardConfig) -> Self {
        Writer { out, env, config }
    }

    /// Mode the next copy will use
    pub fn mode(&self) -> Mode {
        self.config.mode.resolve(&self.env)
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn config(&self) -> &ClipboardConfig {
        &self.config
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Copy `text` to the clipboard, ignoring write failures
    ///
    /// Clipboard copy is a side channel: a closed or full sink must not
    /// disturb the caller. Use [`Writer::try_copy`] to observe failures.
    pub fn copy(&mut self, text: &str) {
        if let Err(_e) = self.try_copy(text) {
            #[cfg(debug_assertions)]
            log::debug!("OSC 52 write failed, ignoring: {}", _e);
        }
    }

    /// Copy `text` to the clipboard, returning any write or flush error
    pub fn try_copy(&mut self, text: &str) -> Result<()> {
        let mode = self.mode();
        let sequence = encode(mode, text);

        #[cfg(debug_assertions)]
        log::debug!(
            "OSC 52 copy: {} bytes of text, {} bytes of sequence, mode {}",
            text.len(),
            sequence.len(),
            mode
        );

        self.out.write_all(sequence.as_bytes())?;
        if self.config.flush {
            self.out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod writer_tests;
