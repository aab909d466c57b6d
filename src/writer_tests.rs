//! Tests for writer

use super::*;
use crate::config::ModeSetting;
use crate::encode::{encode_default, encode_kitty, encode_screen, encode_tmux};
use std::io;

/// Sink that rejects every write
struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

/// Sink that records writes and counts flush calls
#[derive(Default)]
struct FlushCounter {
    buf: Vec<u8>,
    flushes: usize,
}

impl Write for FlushCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

fn copied(entries: &[&str], text: &str) -> String {
    let mut writer = Writer::new(Vec::new(), entries);
    writer.copy(text);
    String::from_utf8(writer.into_inner()).unwrap()
}

#[test]
fn test_copy_default_mode() {
    assert_eq!(copied(&["TERM=xterm"], "hello"), encode_default("hello"));
}

#[test]
fn test_copy_tmux_mode() {
    assert_eq!(
        copied(&["TMUX=/tmp/tmux-1000/default,42,0", "TERM=screen"], "hello"),
        encode_tmux("hello")
    );
}

#[test]
fn test_copy_screen_mode() {
    assert_eq!(copied(&["TERM=screen-256color"], "hello"), encode_screen("hello"));
}

#[test]
fn test_copy_kitty_mode() {
    assert_eq!(copied(&["TERM=kitty"], "hello"), encode_kitty("hello"));
}

#[test]
fn test_copy_empty_string_is_well_formed() {
    assert_eq!(copied(&[], ""), "\x1b]52;c;\x07");
}

#[test]
fn test_repeated_copies_append() {
    let mut writer = Writer::new(Vec::new(), ["TERM=xterm"]);
    writer.copy("a");
    writer.copy("b");

    let expected = format!("{}{}", encode_default("a"), encode_default("b"));
    assert_eq!(writer.get_ref().as_slice(), expected.as_bytes());
}

#[test]
fn test_mode_reflects_environment() {
    let writer = Writer::new(io::sink(), ["TERM=xterm", "LC_TERM=kitty"]);
    assert_eq!(writer.mode(), Mode::Kitty);
    assert_eq!(writer.environment().get("LC_TERM"), "kitty");
}

#[test]
fn test_pinned_mode_overrides_detection() {
    let config = ClipboardConfig {
        mode: ModeSetting::Tmux,
        ..ClipboardConfig::default()
    };
    let mut writer = Writer::with_config(Vec::new(), Environment::parse(["TERM=kitty"]), config);

    assert_eq!(writer.mode(), Mode::Tmux);
    writer.copy("x");
    assert_eq!(writer.get_ref().as_slice(), encode_tmux("x").as_bytes());
}

#[test]
fn test_copy_ignores_write_failure() {
    let mut writer = Writer::new(BrokenSink, ["TERM=xterm"]);
    // Must not panic
    writer.copy("hello");
}

#[test]
fn test_try_copy_reports_write_failure() {
    let mut writer = Writer::new(BrokenSink, ["TERM=xterm"]);
    let result = writer.try_copy("hello");
    assert!(matches!(
        result,
        Err(crate::error::Osc52Error::Write(ref e)) if e.kind() == io::ErrorKind::BrokenPipe
    ));
}

#[test]
fn test_flush_after_each_copy_by_default() {
    let mut writer = Writer::new(FlushCounter::default(), Vec::<String>::new());
    writer.copy("a");
    writer.copy("b");
    assert_eq!(writer.get_ref().flushes, 2);
}

#[test]
fn test_flush_disabled() {
    let config = ClipboardConfig {
        flush: false,
        ..ClipboardConfig::default()
    };
    let mut writer = Writer::with_config(FlushCounter::default(), Environment::default(), config);
    writer.try_copy("a").unwrap();

    assert_eq!(writer.get_ref().flushes, 0);
    assert_eq!(writer.get_ref().buf, encode_default("a").into_bytes());
}

#[test]
fn test_get_mut_exposes_sink() {
    let mut writer = Writer::new(Vec::new(), ["TERM=xterm"]);
    writer.copy("a");
    writer.get_mut().clear();
    assert!(writer.get_ref().is_empty());
}
