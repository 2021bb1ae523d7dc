//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Variables that would leak the developer's shell into a test run.
const SCRUBBED_VARS: &[&str] = &[
    "D1_DATABASE_ID",
    "D1GEN_TEMPLATE",
    "D1GEN_OUTPUT",
    "D1GEN_LOCAL",
    "D1GEN_CONFIG",
    "D1GEN_LOG",
];

impl Test {
    /// Create a d1gen command with a clean environment.
    ///
    /// Returns a Command configured with:
    /// - Current directory set to the test project directory
    /// - d1gen variables removed and colors disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("d1gen").expect("failed to find d1gen binary");
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run `d1gen` with no arguments and no database id in the environment.
    pub fn generate(&self) -> Output {
        self.cmd().output().expect("failed to run d1gen")
    }

    /// Run `d1gen` with `D1_DATABASE_ID` set.
    pub fn generate_with_env(&self, id: &str) -> Output {
        self.cmd()
            .env("D1_DATABASE_ID", id)
            .output()
            .expect("failed to run d1gen")
    }

    /// Shortcut for `d1gen check`.
    pub fn check(&self) -> Output {
        self.cmd()
            .arg("check")
            .output()
            .expect("failed to run d1gen check")
    }
}
