//! Process-wide default writer
//!
//! Built lazily from stdout and the live environment on first use. Copies
//! through the shared writer are serialized by a mutex, so two threads never
//! interleave halves of their sequences.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::env::Environment;
use crate::error::Result;
use crate::writer::Writer;

/// Writer type stored as the process-wide default
pub type SharedWriter = Writer<Box<dyn Write + Send>>;

static DEFAULT_WRITER: Mutex<Option<SharedWriter>> = Mutex::new(None);

fn lock() -> MutexGuard<'static, Option<SharedWriter>> {
    // The writer holds no invariants a panicking copy could break
    DEFAULT_WRITER.lock().unwrap_or_else(PoisonError::into_inner)
}

fn with_default_writer<R>(f: impl FnOnce(&mut SharedWriter) -> R) -> R {
    let mut guard = lock();
    let writer = guard.get_or_insert_with(stdout_writer);
    f(writer)
}

/// Writer over stdout with a snapshot of the current process environment
pub fn stdout_writer() -> SharedWriter {
    #[cfg(debug_assertions)]
    log::debug!("Initializing default OSC 52 writer from process environment");

    Writer::with_config(
        Box::new(io::stdout()),
        Environment::from_process(),
        Default::default(),
    )
}

/// Copy `text` through the default writer, ignoring write failures
pub fn copy(text: &str) {
    with_default_writer(|writer| writer.copy(text));
}

/// Copy `text` through the default writer, returning any write failure
pub fn try_copy(text: &str) -> Result<()> {
    with_default_writer(|writer| writer.try_copy(text))
}

/// Replace the default writer, returning the previous one if it was built
pub fn set_default_writer(writer: SharedWriter) -> Option<SharedWriter> {
    lock().replace(writer)
}

/// Drop the default writer so the next copy rebuilds it from stdout and the
/// live environment
pub fn reset_default_writer() -> Option<SharedWriter> {
    lock().take()
}

#[cfg(test)]
#[path = "shared_tests.rs"]
mod shared_tests;
