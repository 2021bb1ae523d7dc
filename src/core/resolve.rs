//! Database id resolution.
//!
//! The environment variable wins; the local override file is the fallback.

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::carrier::Carrier;
use crate::core::config::Settings;
use crate::error::{ResolveError, Result};

/// Where the value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Named environment variable.
    Environment(String),
    /// Local override file.
    LocalFile(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Environment(var) => write!(f, "environment variable {}", var),
            Source::LocalFile(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A resolved value and its source.
pub struct Resolution {
    pub value: Zeroizing<String>,
    pub source: Source,
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolution")
            .field("value", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Read the value from an environment lookup, trimmed.
///
/// Unset and blank variables both count as absent.
pub fn from_env<F>(lookup: F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Extract the value from the local override file.
///
/// A missing file yields `Ok(None)`.
///
/// # Errors
///
/// Returns `ResolveError::LocalUnreadable` if the file exists but cannot be
/// read. Callers treat this as a warning, not a failure.
pub fn from_local(path: &Path, carrier: &Carrier) -> std::result::Result<Option<String>, ResolveError> {
    if !path.exists() {
        debug!(path = %path.display(), "no local override file");
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ResolveError::LocalUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(carrier.find_value(&contents))
}

/// Resolve the value using a custom environment lookup.
///
/// An unreadable local file is passed to `on_warning` and resolution
/// continues as if the file were absent.
///
/// # Errors
///
/// Returns `ResolveError::NotFound` when neither source yields a value.
pub fn resolve_with<F, W>(lookup: F, settings: &Settings, mut on_warning: W) -> Result<Resolution>
where
    F: Fn(&str) -> Option<String>,
    W: FnMut(&ResolveError),
{
    if let Some(value) = from_env(lookup, &settings.env_var) {
        debug!(var = %settings.env_var, "value taken from environment");
        return Ok(Resolution {
            value: Zeroizing::new(value),
            source: Source::Environment(settings.env_var.clone()),
        });
    }

    let local = from_local(&settings.local, &settings.carrier).unwrap_or_else(|e| {
        debug!(error = %e, "local override unreadable");
        on_warning(&e);
        None
    });

    if let Some(value) = local {
        debug!(path = %settings.local.display(), "value taken from local file");
        return Ok(Resolution {
            value: Zeroizing::new(value),
            source: Source::LocalFile(settings.local.clone()),
        });
    }

    Err(ResolveError::NotFound {
        var: settings.env_var.clone(),
        local: settings.local.clone(),
        key: settings.carrier.key().to_string(),
    }
    .into())
}

/// Resolve the value from the process environment or the local file.
pub fn resolve<W>(settings: &Settings, on_warning: W) -> Result<Resolution>
where
    W: FnMut(&ResolveError),
{
    resolve_with(|var| std::env::var(var).ok(), settings, on_warning)
}
