//! Line parser for `set key = value` dumps.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, error};

/// One setting per line: optional `set`, a name of letters and underscores,
/// `=`, and a non-empty value. Surrounding whitespace is ignored.
///
/// U+FEFF counts as whitespace, so a dump saved with a byte-order mark still
/// yields its first line.
///
/// The name class is spelled out in both cases rather than using `(?i)`,
/// which would also admit Unicode folds such as `ſ` and `K` (Kelvin).
pub const SETTING_LINE_PATTERN: &str =
    r"^[\s\x{FEFF}]*(?:(?i:set)[\s\x{FEFF}]+)?([A-Za-z_]+)[\s\x{FEFF}]*=[\s\x{FEFF}]*(.+?)[\s\x{FEFF}]*$";

fn setting_line() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| match Regex::new(SETTING_LINE_PATTERN) {
            Ok(regex) => Some(regex),
            Err(e) => {
                error!(error = %e, "Setting line pattern failed to compile");
                None
            }
        })
        .as_ref()
}

/// Settings read from a dump: lower-cased key to trimmed raw value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSettings {
    values: BTreeMap<String, String>,
}

impl ParsedSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, replacing any earlier one for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .insert(key.into().to_ascii_lowercase(), value.into());
    }

    /// Value for `key`; the lookup ignores ASCII case.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParsedSettings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut settings = Self::new();
        for (key, value) in iter {
            settings.insert(key, value);
        }
        settings
    }
}

/// Parse a configuration dump.
///
/// Lines that do not look like a setting (comments, blank lines, other
/// commands) are skipped. When a key appears more than once the last
/// occurrence wins. Never fails.
pub fn parse(text: &str) -> ParsedSettings {
    let mut settings = ParsedSettings::new();
    let Some(pattern) = setting_line() else {
        return settings;
    };

    for line in text.split('\n') {
        let Some(captures) = pattern.captures(line) else {
            continue;
        };
        let (Some(key), Some(value)) = (captures.get(1), captures.get(2)) else {
            continue;
        };
        let key = key.as_str().to_ascii_lowercase();
        let value = value.as_str().trim();
        if let Some(previous) = settings.get(&key) {
            debug!(key = %key, previous, value, "Later setting overrides earlier one");
        }
        settings.insert(key, value);
    }

    settings
}
