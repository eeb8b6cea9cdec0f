//! Commands operating on a single resource ID.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use resid::{MatchMode, ParsedId, ValidationError};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_output, print_single, print_success, print_warning, OutputFormat};

use super::{resolve_kind, CommandContext};

/// Parse a resource ID into its fields.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// ID type (see `resid types`).
    kind: String,

    /// Resource ID to parse.
    id: String,

    /// Tolerate a trailing `/`.
    #[arg(long)]
    insensitive: bool,
}

impl ParseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let descriptor = resolve_kind(&self.kind)?;
        let mode = MatchMode::from_insensitive(self.insensitive || ctx.config.insensitive);
        debug!(kind = descriptor.kind, ?mode, "parsing id");

        let parsed = descriptor
            .parse(&self.id, mode)
            .with_context(|| format!("parsing {:?} as {}", self.id, descriptor.label))?;

        print_parsed(&parsed, ctx.format);
        Ok(())
    }
}

/// Render a resource ID from field values.
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// ID type (see `resid types`).
    kind: String,

    /// One value per variable, in path order.
    #[arg(required = true)]
    values: Vec<String>,
}

impl RenderCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let descriptor = resolve_kind(&self.kind)?;

        let values: Vec<&str> = self.values.iter().map(String::as_str).collect();
        let parsed = descriptor
            .render(&values)
            .with_context(|| format!("rendering {}", descriptor.label))?;

        match ctx.format {
            OutputFormat::Json => print_single(&parsed),
            OutputFormat::Table => println!("{}", parsed.id),
        }
        Ok(())
    }
}

/// Parse a resource ID and validate its field values.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// ID type (see `resid types`).
    kind: String,

    /// Resource ID to validate.
    id: String,

    /// Name reported for structural errors.
    #[arg(long, default_value = "id")]
    key: String,
}

#[derive(Debug, Serialize, Tabled)]
struct ValidationRow {
    field: String,
    message: String,
}

impl From<&ValidationError> for ValidationRow {
    fn from(err: &ValidationError) -> Self {
        Self {
            field: err.field.clone(),
            message: err.message.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ValidationView {
    kind: &'static str,
    id: String,
    valid: bool,
    warnings: Vec<String>,
    errors: Vec<ValidationRow>,
}

impl ValidateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let descriptor = resolve_kind(&self.kind)?;
        let result = descriptor.validate(&self.id, &self.key);
        debug!(
            kind = descriptor.kind,
            warnings = result.warnings.len(),
            errors = result.errors.len(),
            "validated id"
        );

        let view = ValidationView {
            kind: descriptor.kind,
            id: self.id,
            valid: result.is_valid(),
            warnings: result.warnings.clone(),
            errors: result.errors.iter().map(ValidationRow::from).collect(),
        };

        match ctx.format {
            OutputFormat::Json => print_single(&view),
            OutputFormat::Table => {
                for warning in &view.warnings {
                    print_warning(warning);
                }
                if view.valid {
                    print_success(&format!("{} is a valid {} ID", view.id, descriptor.label));
                } else {
                    print_output(&view.errors, ctx.format);
                }
            }
        }

        if view.valid {
            Ok(())
        } else {
            Err(CliError::ValidationFailed {
                kind: descriptor.kind,
                count: view.errors.len(),
            }
            .into())
        }
    }
}

/// Show an example ID for a type.
#[derive(Debug, Args)]
pub struct ExampleCommand {
    /// ID type (see `resid types`).
    kind: String,
}

impl ExampleCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let descriptor = resolve_kind(&self.kind)?;
        let example = descriptor.example();

        match ctx.format {
            OutputFormat::Json => print_single(&serde_json::json!({
                "kind": descriptor.kind,
                "shape": descriptor.shape(),
                "id": example,
            })),
            OutputFormat::Table => println!("{}", example),
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Tabled)]
struct FieldRow {
    name: &'static str,
    label: &'static str,
    value: String,
}

fn print_parsed(parsed: &ParsedId, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_single(parsed),
        OutputFormat::Table => {
            println!("{} {}", "ID:".bold(), parsed.id);
            println!("{} {}", "Type:".bold(), parsed.label);
            let rows: Vec<FieldRow> = parsed
                .fields
                .iter()
                .map(|field| FieldRow {
                    name: field.name,
                    label: field.label,
                    value: field.value.clone(),
                })
                .collect();
            print_output(&rows, format);
        }
    }
}
