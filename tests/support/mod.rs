//! Test support utilities for d1gen integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated project directory.
///
/// Child processes run with `.current_dir()` pointed at the temp dir and a
/// scrubbed environment, so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with the standard template in place.
    pub fn with_template() -> Self {
        let t = Self::new();
        t.write(TEMPLATE_FILE, TEMPLATE);
        t
    }

    /// Absolute path of a file inside the project directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file inside the project directory.
    pub fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.path(name), contents).expect("failed to write fixture");
    }

    /// Read a file inside the project directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("failed to read file")
    }

    /// Whether a file exists inside the project directory.
    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }

    /// Write a local override file holding `id`.
    pub fn write_local(&self, id: &str) {
        self.write(LOCAL_FILE, &local_override(id));
    }
}
