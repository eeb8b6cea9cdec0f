//! Error handling and display for the CLI.

use colored::Colorize;
use resid::IdError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown ID type '{0}'")]
    UnknownType(String),

    #[error("{kind} ID failed validation with {count} error(s)")]
    ValidationFailed { kind: &'static str, count: usize },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

/// Returns a hint for errors the user can act on.
fn hint_for(err: &anyhow::Error) -> Option<String> {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return match cli_err {
            CliError::UnknownType(_) => Some("Run `resid types` to list known ID types.".to_string()),
            CliError::ValidationFailed { .. } => None,
        };
    }

    let id_err = err.downcast_ref::<IdError>()?;
    match id_err {
        IdError::ShapeMismatch { shape, .. } => {
            Some(format!("IDs of this type look like '{shape}'."))
        }
        IdError::UnexpectedSegment {
            expected, position, ..
        } => Some(format!(
            "Segment {position} (counting from 0) must be '{expected}'."
        )),
        IdError::EmptySegment { name, .. } => Some(format!("Provide a value for '{name}'.")),
        IdError::InvalidValue { name, .. } => {
            Some(format!("The value for '{name}' must be a single path segment."))
        }
        IdError::ValueCountMismatch { names, .. } => {
            Some(format!("Pass one value for each of: {names}."))
        }
        _ if id_err.is_contract_violation() => {
            Some("This is a defect in the ID type definition, please report it.".to_string())
        }
        _ => None,
    }
}
