//! Typed resource identifiers.
//!
//! A [`ResourceId`] binds a plain struct to a segment specification. Parsing
//! goes through the generic matcher, rendering through the generic formatter;
//! an identifier type only supplies its segments and a table of field
//! bindings. Types are normally declared with [`define_resource_id!`].
//!
//! [`define_resource_id!`]: crate::define_resource_id

use serde::Serialize;
use tracing::error;

use crate::format::{self, Values};
use crate::parser::{self, Captures, MatchMode};
use crate::segment::{self, Segment};
use crate::validate::{Validation, Validator};
use crate::IdError;

/// Binds a user-specified segment to a struct field.
pub struct Field<T: 'static> {
    /// Name of the user-specified segment.
    pub segment: &'static str,
    /// Human-readable label used in display output and validation messages.
    pub label: &'static str,
    /// Reads the field value.
    pub get: fn(&T) -> &str,
    /// Semantic validator applied after parsing.
    pub validate: Validator,
}

/// A strongly-typed identifier bound to a segment specification.
pub trait ResourceId: Values + Sized + 'static {
    /// Short machine name of the identifier type.
    const KIND: &'static str;

    /// Human-readable name of the identifier type.
    const LABEL: &'static str;

    /// The segment specification, in path order.
    const SEGMENTS: &'static [Segment];

    /// One binding per user-specified segment.
    const FIELDS: &'static [Field<Self>];

    /// Builds the identifier from a successful parse.
    ///
    /// Fails with [`IdError::SegmentNotFound`] if a field's segment was not captured.
    fn from_captures(captures: Captures<'_>) -> Result<Self, IdError>;

    /// Parses a resource ID in strict mode.
    fn parse(input: &str) -> Result<Self, IdError> {
        Self::parse_with(input, MatchMode::Strict)
    }

    /// Parses a resource ID, tolerating a trailing `/`.
    fn parse_insensitively(input: &str) -> Result<Self, IdError> {
        Self::parse_with(input, MatchMode::Insensitive)
    }

    /// Parses a resource ID with the given match mode.
    fn parse_with(input: &str, mode: MatchMode) -> Result<Self, IdError> {
        let captures = parser::parse(Self::SEGMENTS, input, mode)?;
        Self::from_captures(captures)
    }

    /// Renders the canonical ID, or the contract error if the fields and
    /// specification disagree.
    fn try_id(&self) -> Result<String, IdError> {
        format::render(Self::SEGMENTS, self)
    }

    /// Renders the canonical ID.
    ///
    /// # Panics
    ///
    /// Panics if the type's specification names a segment it has no field
    /// for. That is a defect in the type definition, not a runtime condition.
    fn id(&self) -> String {
        match self.try_id() {
            Ok(id) => id,
            Err(err) => {
                error!(id_type = Self::LABEL, error = %err, "resource id definition is inconsistent");
                panic!("{} resource id definition is inconsistent: {err}", Self::LABEL)
            }
        }
    }

    /// Checks every user-specified segment has a value that renders as one path component.
    fn check_populated(&self) -> Result<(), IdError> {
        for (position, segment) in Self::SEGMENTS.iter().enumerate() {
            let Some(name) = segment.name() else {
                continue;
            };
            let value = self.value(name).ok_or(IdError::SegmentNotFound {
                name,
                id_type: Self::LABEL,
            })?;
            format::check_value(name, position, value)?;
        }
        Ok(())
    }

    /// Runs every field validator, collecting all warnings and errors.
    fn validate_fields(&self) -> Validation {
        let mut result = Validation::ok();
        for field in Self::FIELDS {
            result.merge((field.validate)((field.get)(self), field.label));
        }
        result
    }

    /// Human-readable label for diagnostics. Not parseable.
    ///
    /// `Application Owner (Application ID: "…", Owner ID: "…")`
    fn display_label(&self) -> String {
        let fields = Self::FIELDS
            .iter()
            .map(|field| format!("{}: {:?}", field.label, (field.get)(self)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} ({})", Self::LABEL, fields)
    }

    /// Summarizes the identifier for structured output.
    fn describe(&self) -> Result<ParsedId, IdError> {
        Ok(ParsedId {
            kind: Self::KIND,
            id: self.try_id()?,
            label: self.display_label(),
            fields: Self::FIELDS
                .iter()
                .map(|field| ParsedField {
                    name: field.segment,
                    label: field.label,
                    value: (field.get)(self).to_string(),
                })
                .collect(),
        })
    }
}

/// Structured summary of a parsed identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedId {
    pub kind: &'static str,
    pub id: String,
    pub label: String,
    pub fields: Vec<ParsedField>,
}

/// One field of a [`ParsedId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// Type-erased handle to one identifier type.
///
/// Lets callers pick an identifier type by name at runtime.
#[derive(Clone, Copy)]
pub struct IdDescriptor {
    pub kind: &'static str,
    pub label: &'static str,
    pub segments: &'static [Segment],
    parse: fn(&str, MatchMode) -> Result<ParsedId, IdError>,
    render: fn(&[&str]) -> Result<ParsedId, IdError>,
    validate: fn(&str, &str) -> Validation,
}

impl IdDescriptor {
    /// Builds the descriptor for `T`.
    #[must_use]
    pub const fn of<T: ResourceId>() -> Self {
        Self {
            kind: T::KIND,
            label: T::LABEL,
            segments: T::SEGMENTS,
            parse: parse_erased::<T>,
            render: render_erased::<T>,
            validate: crate::validate::validate_id::<T>,
        }
    }

    /// Parses `input` as this identifier type.
    pub fn parse(&self, input: &str, mode: MatchMode) -> Result<ParsedId, IdError> {
        (self.parse)(input, mode)
    }

    /// Builds an identifier from positional values, one per user-specified
    /// segment in path order. Any other number of values is a
    /// [`IdError::ValueCountMismatch`].
    pub fn render(&self, values: &[&str]) -> Result<ParsedId, IdError> {
        (self.render)(values)
    }

    /// Parses and semantically validates `input`.
    pub fn validate(&self, input: &str, key: &str) -> Validation {
        (self.validate)(input, key)
    }

    /// The documentation form, e.g. `/applications/{applicationId}`.
    pub fn shape(&self) -> String {
        segment::shape(self.segments)
    }

    /// An example ID built from the specification's example values.
    pub fn example(&self) -> String {
        segment::example(self.segments)
    }

    /// Variable names in path order.
    pub fn names(&self) -> Vec<&'static str> {
        segment::names(self.segments).collect()
    }
}

impl std::fmt::Debug for IdDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdDescriptor")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("shape", &self.shape())
            .finish()
    }
}

fn parse_erased<T: ResourceId>(input: &str, mode: MatchMode) -> Result<ParsedId, IdError> {
    T::parse_with(input, mode)?.describe()
}

fn render_erased<T: ResourceId>(values: &[&str]) -> Result<ParsedId, IdError> {
    let names: Vec<&'static str> = segment::names(T::SEGMENTS).collect();
    if names.len() != values.len() {
        return Err(IdError::ValueCountMismatch {
            expected: names.len(),
            actual: values.len(),
            names: names.join(", "),
        });
    }
    let pairs: Vec<(&str, &str)> = names.into_iter().zip(values.iter().copied()).collect();
    let rendered = format::render(T::SEGMENTS, pairs.as_slice())?;
    T::parse(&rendered)?.describe()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{define_resource_id, validate};

    // Field bound to a segment name the layout does not declare.
    define_resource_id! {
        MisboundId {
            kind: "misbound",
            label: "Misbound",
            segments: [
                Segment::static_segment("things", "things", "things"),
                Segment::user_specified("thingId", "x"),
            ],
            fields: {
                thing_id: "thingRef" => "Thing ID", validate::is_uuid;
            },
        }
    }

    #[test]
    fn test_parse_reports_unbound_field() {
        assert_eq!(
            MisboundId::parse("/things/a"),
            Err(IdError::SegmentNotFound {
                name: "thingRef",
                id_type: "Misbound",
            })
        );
    }

    #[test]
    fn test_try_new_reports_unbound_segment() {
        let err = MisboundId::try_new("a").unwrap_err();
        assert_eq!(
            err,
            IdError::SegmentNotFound {
                name: "thingId",
                id_type: "Misbound",
            }
        );
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_try_id_and_describe_return_missing_value() {
        let id = MisboundId::new("a");
        let expected = IdError::MissingValue { name: "thingId" };
        assert_eq!(id.try_id(), Err(expected.clone()));
        assert_eq!(id.describe(), Err(expected.clone()));
        assert_eq!(MisboundId::DESCRIPTOR.render(&["a"]), Err(expected));
    }

    #[test]
    fn test_serialize_reports_inconsistent_definition() {
        let err = serde_json::to_string(&MisboundId::new("a")).unwrap_err();
        assert!(err.to_string().contains("thingId"));
    }

    #[test]
    #[should_panic(expected = "Misbound resource id definition is inconsistent")]
    fn test_id_panics_on_inconsistent_definition() {
        let _ = MisboundId::new("a").id();
    }
}
