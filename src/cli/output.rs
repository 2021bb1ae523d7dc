//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: paths, hints
//! - Dimmed: labels
//!
//! Informational lines go to stdout; warnings, errors and hints to stderr.

use console::style;
use std::fmt::Display;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ created wrangler.toml`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ D1_DATABASE_ID not found`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message to stderr (yellow).
///
/// Example: `⚠ database id doesn't look like a UUID`
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ set D1_DATABASE_ID or create wrangler.toml.local`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a progress/info line.
///
/// Example: `• creating wrangler.toml from wrangler.example.toml`
pub fn info(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("•").dim(), msg);
    } else {
        println!("• {}", msg);
    }
}

/// Print an info line to stderr, keeping stdout free for data.
///
/// Example: `• database id 12345678...56789012 (from wrangler.toml.local)`
pub fn note(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("•").dim(), msg);
    } else {
        eprintln!("• {}", msg);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  source  environment variable D1_DATABASE_ID`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Print raw data with no decoration (for piping).
pub fn data(text: &str) {
    print!("{}", text);
}

/// Format a path in cyan for inline use.
pub fn path(p: &std::path::Path) -> String {
    if colors_enabled() {
        style(p.display()).cyan().to_string()
    } else {
        p.display().to_string()
    }
}
