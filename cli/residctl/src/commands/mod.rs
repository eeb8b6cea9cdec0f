//! CLI commands.

mod config;
mod ids;
mod types;

use anyhow::Result;
use clap::{Parser, Subcommand};
use resid::IdDescriptor;

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// resid CLI - Parse, render, and validate resource IDs.
#[derive(Debug, Parser)]
#[command(name = "resid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true)]
    format: Option<String>,

    /// Log level when RUST_LOG is not set.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a resource ID into its fields.
    Parse(ids::ParseCommand),

    /// Render a resource ID from field values.
    Render(ids::RenderCommand),

    /// Parse a resource ID and validate its field values.
    Validate(ids::ValidateCommand),

    /// Show an example ID for a type.
    Example(ids::ExampleCommand),

    /// List known ID types.
    Types(types::TypesCommand),

    /// Show or initialize CLI configuration.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let mut config = Config::load()?;
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }

        crate::logging::init(&config.log_level)?;

        let ctx = CommandContext {
            format: OutputFormat::from_name(&config.format),
            config,
        };

        match self.command {
            Commands::Parse(cmd) => cmd.run(&ctx),
            Commands::Render(cmd) => cmd.run(&ctx),
            Commands::Validate(cmd) => cmd.run(&ctx),
            Commands::Example(cmd) => cmd.run(&ctx),
            Commands::Types(cmd) => cmd.run(&ctx),
            Commands::Config(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("resid {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

/// Resolve an ID type by kind.
fn resolve_kind(kind: &str) -> Result<&'static IdDescriptor, CliError> {
    resid::lookup(kind.trim()).ok_or_else(|| CliError::UnknownType(kind.to_string()))
}
