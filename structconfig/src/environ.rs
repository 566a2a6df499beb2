//! Environment snapshots built from `NAME=VALUE` entries

use std::collections::HashMap;

/// Value stored for entries that are set but empty (`NAME=`).
///
/// Makes a bare-set variable read as a truthy flag.
pub const EMPTY_VALUE: &str = "1";

/// Name to value mapping built from an ordered list of `NAME=VALUE` entries.
///
/// - Entries are split on the first `=`; entries without one are skipped.
/// - An empty value is stored as [`EMPTY_VALUE`].
/// - A later entry for the same name replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environ(HashMap<String, String>);

impl Environ {
    /// Build a snapshot from raw entries.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        entries.into_iter().collect()
    }

    /// Look up a variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no entries were recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Environ {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vars = HashMap::new();
        for entry in iter {
            let entry = entry.as_ref();
            let Some((name, value)) = entry.split_once('=') else {
                tracing::debug!(entry_len = entry.len(), "skipping environment entry without '='");
                continue;
            };
            let value = if value.is_empty() { EMPTY_VALUE } else { value };
            vars.insert(name.to_string(), value.to_string());
        }
        Self(vars)
    }
}

/// Materialize the process environment as `NAME=VALUE` entries.
///
/// Non-UTF-8 names and values are converted lossily. Nothing else in this
/// crate reads the process environment; pass the result to
/// [`crate::from_environ`].
pub fn process_environ() -> Vec<String> {
    std::env::vars_os()
        .map(|(name, value)| format!("{}={}", name.to_string_lossy(), value.to_string_lossy()))
        .collect()
}
