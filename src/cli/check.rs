//! Check command.
//!
//! Runs the post-write verification against an existing output file.

use std::path::PathBuf;

use crate::cli::output;
use crate::core::config::{Config, Overrides, Settings};
use crate::core::output as file;
use crate::error::Result;

/// Verify the output file in place.
pub fn execute(config: Config, output_path: Option<PathBuf>) -> Result<()> {
    let settings = Settings::resolve(
        config,
        Overrides {
            output: output_path,
            ..Default::default()
        },
    );

    file::verify(&settings.output, &settings.placeholder, &settings.carrier)?;
    output::success(&format!(
        "{} has a valid {} line",
        output::path(&settings.output),
        settings.carrier.key()
    ));

    Ok(())
}
