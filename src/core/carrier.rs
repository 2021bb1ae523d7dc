//! Patterns for the carrier line (`database_id = "..."`).
//!
//! The key is configurable, so the patterns are compiled per run instead of
//! living in statics.

use regex::Regex;

use crate::core::constants;

/// Compiled patterns for one carrier key.
#[derive(Debug, Clone)]
pub struct Carrier {
    key: String,
    value: Regex,
    empty: Regex,
    line: Regex,
}

impl Carrier {
    /// Compile the patterns for `key`.
    ///
    /// The key is escaped, so any string is accepted.
    pub fn new(key: &str) -> Self {
        let k = regex::escape(key);
        let compile = |pattern: String| Regex::new(&pattern).expect("escaped carrier pattern");

        Self {
            key: key.to_string(),
            value: compile(format!(r#"{}\s*=\s*"([^"]+)""#, k)),
            empty: compile(format!(r#"(?m)^\s*{}\s*=\s*""\s*$"#, k)),
            line: compile(format!(r#"(?m)^\s*{}\s*=\s*"[^"]+"\s*$"#, k)),
        }
    }

    /// The carrier key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Prefix that marks a carrier line once trimmed (`database_id = `).
    pub fn prefix(&self) -> String {
        format!("{} = ", self.key)
    }

    /// First quoted value assigned to the key anywhere in `text`, trimmed.
    ///
    /// Returns `None` when there is no match or the value is blank.
    pub fn find_value(&self, text: &str) -> Option<String> {
        self.value
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Quoted value on a single line, trimmed (may be empty).
    pub fn line_value(&self, line: &str) -> Option<String> {
        self.value
            .captures(line)
            .map(|caps| caps[1].trim().to_string())
    }

    /// Whether any line assigns an empty string to the key.
    pub fn has_empty_assignment(&self, text: &str) -> bool {
        self.empty.is_match(text)
    }

    /// Whether at least one line is a well-formed assignment with a value.
    pub fn has_well_formed_line(&self, text: &str) -> bool {
        self.line.is_match(text)
    }

    /// Lines (1-based) that mention the key, for diagnostics.
    pub fn mentions(&self, text: &str) -> Vec<(usize, String)> {
        text.lines()
            .enumerate()
            .filter(|(_, l)| l.contains(self.key.as_str()))
            .map(|(i, l)| (i + 1, l.to_string()))
            .collect()
    }
}

impl Default for Carrier {
    fn default() -> Self {
        Self::new(constants::TARGET_KEY)
    }
}
