//! Template loading and placeholder substitution.

use std::path::Path;
use tracing::debug;

use crate::core::carrier::Carrier;
use crate::error::{Result, TemplateError};

/// Read the template file.
///
/// # Errors
///
/// Returns `TemplateError::NotFound` if the file does not exist and
/// `TemplateError::Read` if it cannot be read.
pub fn load(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(TemplateError::NotFound(path.to_path_buf()).into());
    }

    debug!(path = %path.display(), "reading template");
    std::fs::read_to_string(path).map_err(|source| {
        TemplateError::Read {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// Check that the placeholder occurs in the template.
///
/// `path` is only used for the error message.
pub fn require_placeholder(text: &str, placeholder: &str, path: &Path) -> Result<()> {
    if !text.contains(placeholder) {
        return Err(TemplateError::PlaceholderMissing {
            placeholder: placeholder.to_string(),
            path: path.to_path_buf(),
        }
        .into());
    }
    Ok(())
}

/// Replace every occurrence of `placeholder` with `value`.
///
/// The replacement is literal. Fails if the placeholder survives or if the
/// carrier line ends up with an empty value.
///
/// # Errors
///
/// Returns `TemplateError::PlaceholderRemains` or `TemplateError::EmptyValue`.
pub fn substitute(text: &str, placeholder: &str, value: &str, carrier: &Carrier) -> Result<String> {
    let occurrences = text.matches(placeholder).count();
    debug!(occurrences, "substituting placeholder");

    let substituted = text.replace(placeholder, value);

    if substituted.contains(placeholder) {
        return Err(TemplateError::PlaceholderRemains(placeholder.to_string()).into());
    }

    if carrier.has_empty_assignment(&substituted) {
        return Err(TemplateError::EmptyValue(carrier.key().to_string()).into());
    }

    Ok(substituted)
}
