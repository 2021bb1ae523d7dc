//! Input validation for d1gen.
//!
//! Checks the shape of the database id and of the names configured in
//! `.d1gen.toml`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{ConfigError, Result};

lazy_static! {
    static ref UUID_RE: Regex = Regex::new(
        r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$"
    )
    .expect("uuid regex");
}

/// Check whether a database id looks like a UUID (8-4-4-4-12 hex groups).
///
/// D1 ids are UUIDs, but a mismatch is only ever reported as a warning.
pub fn is_uuid_like(value: &str) -> bool {
    UUID_RE.is_match(value)
}

/// Masked preview of a secret value for console output.
///
/// Long values show the first and last eight characters; short ones only
/// their first half, so the whole value is never printed.
pub fn preview(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() > 16 {
        let head: String = chars[..8].iter().collect();
        let tail: String = chars[chars.len() - 8..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        let head: String = chars[..chars.len() / 2].iter().collect();
        format!("{}...", head)
    }
}

/// Validate an environment variable name.
///
/// Same rules as shell variables:
/// - Only A-Z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot be empty
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` naming `field`.
pub fn validate_env_var(field: &'static str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "cannot be empty".to_string(),
        }
        .into());
    }

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("'{}' cannot start with a digit", name),
        }
        .into());
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_uppercase() && !ch.is_ascii_digit() && ch != '_' {
            return Err(ConfigError::InvalidValue {
                field,
                reason: format!(
                    "invalid character '{}' at position {}. Only A-Z, 0-9, and underscore are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate a bare TOML key used as the carrier line key.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` naming `field`.
pub fn validate_toml_key(field: &'static str, key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "cannot be empty".to_string(),
        }
        .into());
    }

    if let Some(ch) = key
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '_' && *c != '-')
    {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("'{}' is not a bare key (invalid character '{}')", key, ch),
        }
        .into());
    }

    Ok(())
}
