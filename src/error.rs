//! Error types for every pipeline stage.
//!
//! Each stage owns a small enum; [`Error`] wraps them so the CLI can match on
//! the stage that failed and attach a hint.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error returned by every fallible operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Problems loading `.d1gen.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Problems sourcing the database id.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("{var} not found")]
    NotFound {
        var: String,
        local: PathBuf,
        key: String,
    },

    #[error("failed to read {}: {source}", .path.display())]
    LocalUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Problems reading or substituting the template.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read template {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("placeholder {placeholder} not found in {}", .path.display())]
    PlaceholderMissing { placeholder: String, path: PathBuf },

    #[error("substitution failed: placeholder {0} still present")]
    PlaceholderRemains(String),

    #[error("{0} is empty after substitution")]
    EmptyValue(String),
}

/// Problems rewriting the carrier line.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("{0} line not found")]
    LineNotFound(String),

    #[error("{key} line {line} is malformed: {content:?}")]
    Malformed {
        key: String,
        line: usize,
        content: String,
    },

    #[error("{key} value on line {line} is empty")]
    EmptyValue { key: String, line: usize },
}

/// Problems writing or verifying the generated file.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} not found", .0.display())]
    Missing(PathBuf),

    #[error("failed to verify {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{key} line format verification failed{}", format_offending(.offending))]
    Malformed {
        key: String,
        offending: Vec<(usize, String)>,
    },

    #[error("placeholder {0} still present in final file")]
    PlaceholderRemains(String),
}

fn format_offending(lines: &[(usize, String)]) -> String {
    lines
        .iter()
        .map(|(n, l)| format!("\n   line {}: {:?}", n, l))
        .collect()
}

pub type Result<T> = std::result::Result<T, Error>;
