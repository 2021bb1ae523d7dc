//! Carrier line normalization.
//!
//! Rebuilds the first `database_id = ...` line as `<indent>database_id = "<value>"`,
//! dropping trailing comments or stray whitespace the substitution may have
//! left around the value.

use tracing::debug;

use crate::core::carrier::Carrier;
use crate::error::{NormalizeError, Result};

/// Normalize the first carrier line in `text`.
///
/// Lines are rejoined with `\n`; no trailing newline is added here.
///
/// # Errors
///
/// Returns `NormalizeError::LineNotFound` if no line starts with the key,
/// `NormalizeError::Malformed` if that line has no quoted value and
/// `NormalizeError::EmptyValue` if the value is blank.
pub fn normalize(text: &str, carrier: &Carrier) -> Result<String> {
    let prefix = carrier.prefix();
    let mut lines: Vec<&str> = text.lines().collect();

    let (index, line) = lines
        .iter()
        .enumerate()
        .find(|(_, l)| l.trim().starts_with(&prefix))
        .map(|(i, l)| (i, *l))
        .ok_or_else(|| NormalizeError::LineNotFound(carrier.key().to_string()))?;

    let value = carrier
        .line_value(line)
        .ok_or_else(|| NormalizeError::Malformed {
            key: carrier.key().to_string(),
            line: index + 1,
            content: line.to_string(),
        })?;

    if value.is_empty() {
        return Err(NormalizeError::EmptyValue {
            key: carrier.key().to_string(),
            line: index + 1,
        }
        .into());
    }

    let indent = &line[..line.len() - line.trim_start().len()];
    let rebuilt = format!("{}{}\"{}\"", indent, prefix, value);
    debug!(line = index + 1, "carrier line normalized");

    lines[index] = &rebuilt;
    Ok(lines.join("\n"))
}
