//! Command-line interface.

pub mod check;
pub mod completions;
pub mod generate;
pub mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::{Config, Overrides};
use crate::error::Result;

/// d1gen - generate wrangler.toml with a validated D1 database id.
#[derive(Parser)]
#[command(
    name = "d1gen",
    about = "Generate wrangler.toml from wrangler.example.toml with a validated D1 database id",
    version,
    after_help = "The id is read from D1_DATABASE_ID, falling back to wrangler.toml.local."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to .d1gen.toml when present)
    #[arg(short, long, global = true, env = "D1GEN_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate the output file (default when no command is given)
    Generate(GenerateArgs),

    /// Verify an existing output file without regenerating it
    Check {
        /// File to verify
        #[arg(short, long, env = "D1GEN_OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options for `generate`.
#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Template file containing the placeholder
    #[arg(short, long, env = "D1GEN_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// File to write
    #[arg(short, long, env = "D1GEN_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Local override file to read the id from
    #[arg(short, long, env = "D1GEN_LOCAL")]
    pub local: Option<PathBuf>,

    /// Print the rendered file instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    /// Fill unset options from flags given before the subcommand name.
    ///
    /// `d1gen --dry-run generate` and `d1gen generate --dry-run` mean the same.
    pub fn merge(self, outer: GenerateArgs) -> GenerateArgs {
        GenerateArgs {
            template: self.template.or(outer.template),
            output: self.output.or(outer.output),
            local: self.local.or(outer.local),
            dry_run: self.dry_run || outer.dry_run,
        }
    }

    /// Path overrides carried by these arguments.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            template: self.template.clone(),
            output: self.output.clone(),
            local: self.local.clone(),
        }
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute the parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        None => generate::execute(Config::load(cli.config.as_deref())?, &cli.generate),
        Some(Command::Generate(args)) => {
            let args = args.merge(cli.generate);
            generate::execute(Config::load(cli.config.as_deref())?, &args)
        }
        Some(Command::Check { output }) => {
            let output = output.or(cli.generate.output);
            check::execute(Config::load(cli.config.as_deref())?, output)
        }
        Some(Command::Completions { shell }) => completions::execute(shell),
    }
}
