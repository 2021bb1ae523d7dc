//! d1gen - generate wrangler.toml with a validated D1 database id.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use d1gen::cli::output;
use d1gen::cli::{execute, Cli};
use d1gen::core::constants;
use d1gen::error::{Error, ResolveError, TemplateError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("d1gen=debug")
        } else {
            EnvFilter::new("d1gen=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
        for hint in hints(&e) {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}

/// Follow-up suggestions for errors the user can fix directly.
fn hints(e: &Error) -> Vec<String> {
    match e {
        Error::Resolve(ResolveError::NotFound { var, local, key }) => vec![
            format!(
                "set {} or create {} with a {} line",
                var,
                local.display(),
                key
            ),
            format!("see {}.example for reference", local.display()),
        ],
        Error::Template(TemplateError::NotFound(_)) => {
            vec!["run from the directory containing the template, or pass --template".to_string()]
        }
        _ => Vec::new(),
    }
}
