//! Environment snapshot used for terminal detection
//!
//! Lookups never fail: a variable that is unset reads the same as one that is
//! set to the empty string.

use std::collections::HashMap;

/// Immutable snapshot of environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Build a snapshot from raw `KEY=VALUE` entries
    ///
    /// Only the first `=` separates key from value, so `B=2=3` stores `2=3`.
    /// An entry without `=` is stored as a key with an empty value. Later
    /// duplicates overwrite earlier ones.
    pub fn parse<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vars = entries
            .into_iter()
            .map(|entry| {
                let entry = entry.as_ref();
                match entry.split_once('=') {
                    Some((key, value)) => (key.to_string(), value.to_string()),
                    None => (entry.to_string(), String::new()),
                }
            })
            .collect();

        Environment { vars }
    }

    /// Build a snapshot from already separated name/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        Environment { vars }
    }

    /// Snapshot the live process environment
    ///
    /// Names and values that are not valid UTF-8 are converted lossily.
    pub fn from_process() -> Self {
        Self::from_pairs(std::env::vars_os().map(|(key, value)| {
            (
                key.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            )
        }))
    }

    /// Value of `key`, or `""` when it is not present
    pub fn get(&self, key: &str) -> &str {
        self.vars.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Environment {
    fn from_iter<I: IntoIterator<Item = S>>(entries: I) -> Self {
        Self::parse(entries)
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod env_tests;
