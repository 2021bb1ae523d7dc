//! Generate command.
//!
//! Resolve the id, render the template, write the output and verify it.
//! Every stage is a gate: the first failure aborts the run.

use tracing::info;

use crate::cli::output;
use crate::cli::GenerateArgs;
use crate::core::config::{Config, Settings};
use crate::core::{output as file, render, resolve, template, validation};
use crate::error::Result;

/// Run the generate pipeline.
pub fn execute(config: Config, args: &GenerateArgs) -> Result<()> {
    let settings = Settings::resolve(config, args.overrides());

    let resolved = resolve::resolve(&settings, |e| output::warn(&e.to_string()))?;
    let value = resolved.value.as_str();

    if !validation::is_uuid_like(value) {
        output::warn(&format!(
            "{} doesn't match the expected UUID format: {}",
            settings.carrier.key(),
            validation::preview(value)
        ));
        output::warn("continuing anyway, but this may cause issues");
    }

    // A dry run owns stdout for the rendered file.
    let id_line = format!(
        "database id {} (from {})",
        validation::preview(value),
        resolved.source
    );
    if args.dry_run {
        output::note(&id_line);
    } else {
        output::info(&id_line);
    }

    let text = template::load(&settings.template)?;
    let rendered = render::render(&text, &settings.template, &settings, value)?;

    if args.dry_run {
        file::check(&rendered, &settings.placeholder, &settings.carrier)?;
        output::data(&rendered);
        return Ok(());
    }

    output::info(&format!(
        "creating {} from {}",
        output::path(&settings.output),
        output::path(&settings.template)
    ));

    file::write(&settings.output, &rendered)?;
    file::verify(&settings.output, &settings.placeholder, &settings.carrier)?;
    info!(output = %settings.output.display(), "output verified");

    output::success(&format!(
        "created {} with validated {}",
        output::path(&settings.output),
        settings.carrier.key()
    ));
    output::kv("source", settings.template.display());
    output::kv("target", settings.output.display());

    Ok(())
}
