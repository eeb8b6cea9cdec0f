//! Semantic validation of resource ID fields.
//!
//! Validation runs strictly after structural parsing has succeeded. Validators
//! never short-circuit: every problem found for an input is collected into a
//! single [`Validation`] so callers can report them together.

use thiserror::Error;
use uuid::Uuid;

use crate::{IdError, ResourceId};

/// A semantic validation failure attached to one field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// Label of the field that failed.
    pub field: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The outcome of validating a value: warnings plus errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub warnings: Vec<String>,
    pub errors: Vec<ValidationError>,
}

impl Validation {
    /// A result with no warnings or errors.
    #[must_use]
    pub fn ok() -> Self {
        Self::default()
    }

    /// A result holding a single error.
    #[must_use]
    pub fn error(error: ValidationError) -> Self {
        Self {
            warnings: Vec::new(),
            errors: vec![error],
        }
    }

    /// Returns true if no errors were recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Appends another result's warnings and errors.
    pub fn merge(&mut self, other: Validation) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }

    /// Converts to a `Result`, returning the first error if any were recorded.
    pub fn into_result(self) -> Result<Vec<String>, IdError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(IdError::Validation(err)),
            None => Ok(self.warnings),
        }
    }
}

/// A field validator: `(value, field label) -> Validation`.
pub type Validator = fn(&str, &str) -> Validation;

/// Checks that `value` is a UUID in hyphenated form.
pub fn is_uuid(value: &str, field: &str) -> Validation {
    match Uuid::try_parse(value) {
        Ok(_) if value.len() == 36 => Validation::ok(),
        _ => Validation::error(ValidationError::new(
            field,
            format!("expected {field:?} to be a valid UUID, got {value}"),
        )),
    }
}

/// Validates an input string as a resource ID of type `T`.
///
/// A structural parse failure is reported as the only error and no semantic
/// checks run. Otherwise every field validator runs and all errors are kept.
pub fn validate_id<T: ResourceId>(input: &str, key: &str) -> Validation {
    match T::parse(input) {
        Ok(id) => id.validate_fields(),
        Err(err) => Validation::error(ValidationError::new(
            key,
            format!("parsing {input:?}: {err}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::OwnerId;

    #[rstest]
    #[case("00000000-0000-0000-0000-000000000000", true)]
    #[case("11111111-1111-1111-1111-111111111111", true)]
    #[case("A1B2C3D4-0000-4000-8000-0123456789AB", true)]
    #[case("00000000000000000000000000000000", false)]
    #[case("{00000000-0000-0000-0000-000000000000}", false)]
    #[case("not-a-uuid", false)]
    #[case("", false)]
    fn test_is_uuid(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(is_uuid(value, "ID").is_valid(), valid);
    }

    #[test]
    fn test_is_uuid_message_names_field() {
        let result = is_uuid("nope", "Owner ID");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, "Owner ID");
        assert_eq!(
            result.errors[0].message,
            "expected \"Owner ID\" to be a valid UUID, got nope"
        );
    }

    #[test]
    fn test_validate_id_collects_all_field_errors() {
        let result = validate_id::<OwnerId>("/applications/abc/owners/def", "owner_id");
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].field, "Application ID");
        assert_eq!(result.errors[1].field, "Owner ID");
    }

    #[test]
    fn test_validate_id_structural_error_skips_semantic_checks() {
        let result = validate_id::<OwnerId>("/applications/abc", "owner_id");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, "owner_id");
        assert!(result.errors[0].message.starts_with("parsing \"/applications/abc\""));
    }

    #[test]
    fn test_validate_id_valid() {
        let result = validate_id::<OwnerId>(
            "/applications/00000000-0000-0000-0000-000000000000/owners/11111111-1111-1111-1111-111111111111",
            "owner_id",
        );
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Validation::ok().into_result(), Ok(vec![]));

        let err = is_uuid("x", "ID").into_result().unwrap_err();
        assert!(matches!(err, IdError::Validation(ref e) if e.field == "ID"));
    }
}
