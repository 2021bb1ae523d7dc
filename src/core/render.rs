//! In-memory rendering: substitution followed by normalization.

use std::path::Path;

use crate::core::config::Settings;
use crate::core::{normalize, output, template};
use crate::error::Result;

/// Render template text with `value`.
///
/// Runs the placeholder check, substitution and carrier normalization, and
/// returns the text exactly as it will be written.
///
/// `template_path` is only used in error messages.
pub fn render(text: &str, template_path: &Path, settings: &Settings, value: &str) -> Result<String> {
    template::require_placeholder(text, &settings.placeholder, template_path)?;
    let substituted = template::substitute(text, &settings.placeholder, value, &settings.carrier)?;
    let normalized = normalize::normalize(&substituted, &settings.carrier)?;
    Ok(output::with_trailing_newline(&normalized))
}
