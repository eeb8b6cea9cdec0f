//! Config commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::config::config_path;
use crate::output::{print_single, print_success, OutputFormat};

use super::CommandContext;

/// Show or initialize CLI configuration.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the effective configuration.
    Show,

    /// Print the config file path.
    Path,

    /// Write the effective configuration to the config file.
    Init,
}

#[derive(Debug, Serialize)]
struct ConfigView {
    path: String,
    format: String,
    insensitive: bool,
    log_level: String,
}

impl ConfigCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let path = config_path()?;

        match self.command {
            ConfigSubcommand::Path => println!("{}", path.display()),
            ConfigSubcommand::Init => {
                ctx.config.save_to(&path)?;
                print_success(&format!("Wrote {}", path.display()));
            }
            ConfigSubcommand::Show => {
                let view = ConfigView {
                    path: path.display().to_string(),
                    format: ctx.config.format.clone(),
                    insensitive: ctx.config.insensitive,
                    log_level: ctx.config.log_level.clone(),
                };

                match ctx.format {
                    OutputFormat::Json => print_single(&view),
                    OutputFormat::Table => {
                        println!("path: {}", view.path);
                        println!("format: {}", view.format);
                        println!("insensitive: {}", view.insensitive);
                        println!("log_level: {}", view.log_level);
                    }
                }
            }
        }

        Ok(())
    }
}
