//! Rendering resource IDs in canonical form.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::parser::{self, Captures, MatchMode};
use crate::segment::{self, Segment};
use crate::IdError;

/// A source of values for user-specified segments.
pub trait Values {
    /// Returns the value bound to the segment `name`, if any.
    fn value(&self, name: &str) -> Option<&str>;
}

impl Values for Captures<'_> {
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

impl Values for HashMap<String, String> {
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl Values for [(&str, &str)] {
    fn value(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
}

/// Renders the canonical string for `spec` using `values`.
///
/// Static segments emit their render key; user-specified segments emit the
/// bound value. The result always starts with a single `/`. A bound value
/// must be one non-empty path component, so it cannot contain `/`.
pub fn render<V>(spec: &[Segment], values: &V) -> Result<String, IdError>
where
    V: Values + ?Sized,
{
    trace!(segments = spec.len(), "rendering resource id");

    let mut components = Vec::with_capacity(spec.len());
    for (position, segment) in spec.iter().enumerate() {
        match segment {
            Segment::Static { render_key, .. } => components.push(*render_key),
            Segment::UserSpecified { name, .. } => {
                let value = values.value(name).ok_or_else(|| {
                    debug!(name, "no value bound for segment");
                    IdError::MissingValue { name: *name }
                })?;
                check_value(*name, position, value)?;
                components.push(value);
            }
        }
    }

    Ok(segment::join(components))
}

/// Checks that `value` can be written as the single component at `position`.
pub(crate) fn check_value(
    name: &'static str,
    position: usize,
    value: &str,
) -> Result<(), IdError> {
    if value.is_empty() {
        debug!(name, position, "empty value bound for segment");
        return Err(IdError::EmptySegment { name, position });
    }
    if value.contains('/') {
        debug!(name, position, value, "value bound for segment contains '/'");
        return Err(IdError::InvalidValue { name, position });
    }
    Ok(())
}

/// Parses `input` and renders it back, normalizing static segment casing.
pub fn canonicalize(spec: &[Segment], input: &str, mode: MatchMode) -> Result<String, IdError> {
    let captures = parser::parse(spec, input, mode)?;
    render(captures.spec(), &captures)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: &[Segment] = &[
        Segment::static_segment("servicePrincipals", "servicePrincipals", "servicePrincipals"),
        Segment::user_specified("servicePrincipalId", "00000000-0000-0000-0000-000000000000"),
        Segment::static_segment(
            "claimsMappingPolicies",
            "claimsMappingPolicies",
            "claimsMappingPolicies",
        ),
        Segment::user_specified("claimsMappingPolicyId", "11111111-1111-1111-1111-111111111111"),
    ];

    #[test]
    fn test_render_from_pairs() {
        let values: &[(&str, &str)] = &[
            ("servicePrincipalId", "sp"),
            ("claimsMappingPolicyId", "p"),
        ];
        assert_eq!(
            render(SPEC, values).unwrap(),
            "/servicePrincipals/sp/claimsMappingPolicies/p"
        );
    }

    #[test]
    fn test_render_from_map() {
        let mut values = HashMap::new();
        values.insert("servicePrincipalId".to_string(), "a".to_string());
        values.insert("claimsMappingPolicyId".to_string(), "b".to_string());
        values.insert("unused".to_string(), "c".to_string());

        assert_eq!(
            render(SPEC, &values).unwrap(),
            "/servicePrincipals/a/claimsMappingPolicies/b"
        );
    }

    #[test]
    fn test_render_missing_value() {
        let values: &[(&str, &str)] = &[("servicePrincipalId", "sp")];
        assert_eq!(
            render(SPEC, values),
            Err(IdError::MissingValue {
                name: "claimsMappingPolicyId"
            })
        );
    }

    #[test]
    fn test_render_rejects_value_spanning_components() {
        let values: &[(&str, &str)] = &[
            ("servicePrincipalId", "sp/claimsMappingPolicies/x"),
            ("claimsMappingPolicyId", "p"),
        ];
        assert_eq!(
            render(SPEC, values),
            Err(IdError::InvalidValue {
                name: "servicePrincipalId",
                position: 1,
            })
        );
    }

    #[test]
    fn test_render_rejects_empty_value() {
        let values: &[(&str, &str)] = &[
            ("servicePrincipalId", "sp"),
            ("claimsMappingPolicyId", ""),
        ];
        assert_eq!(
            render(SPEC, values),
            Err(IdError::EmptySegment {
                name: "claimsMappingPolicyId",
                position: 3,
            })
        );
    }

    #[test]
    fn test_render_uses_render_key_not_matched_text() {
        let spec = [
            Segment::static_segment("subscriptions", "Subscriptions", "subscriptions"),
            Segment::user_specified("subscriptionId", "x"),
        ];
        let values: &[(&str, &str)] = &[("subscriptionId", "abc")];
        assert_eq!(render(&spec, values).unwrap(), "/Subscriptions/abc");
    }

    #[test]
    fn test_canonicalize_normalizes_statics_only() {
        let canonical = canonicalize(
            SPEC,
            "/SERVICEPRINCIPALS/AbC/claimsmappingpolicies/DeF",
            MatchMode::Strict,
        )
        .unwrap();
        assert_eq!(canonical, "/servicePrincipals/AbC/claimsMappingPolicies/DeF");

        let again = canonicalize(SPEC, &canonical, MatchMode::Strict).unwrap();
        assert_eq!(again, canonical);
    }

    #[test]
    fn test_empty_spec_renders_empty() {
        let values: &[(&str, &str)] = &[];
        assert_eq!(render(&[], values).unwrap(), "");
    }
}
