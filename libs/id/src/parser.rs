//! Matching input strings against a segment specification.

use tracing::{debug, trace};

use crate::segment::{self, Segment};
use crate::IdError;

/// How strictly input is matched against a specification.
///
/// Static segments always compare ignoring ASCII case. Captured values are
/// never altered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Component counts must line up exactly.
    #[default]
    Strict,
    /// Like `Strict`, but a single trailing `/` is tolerated.
    Insensitive,
}

impl MatchMode {
    /// Returns the mode for a boolean "insensitively" flag.
    #[must_use]
    pub const fn from_insensitive(insensitively: bool) -> Self {
        if insensitively {
            MatchMode::Insensitive
        } else {
            MatchMode::Strict
        }
    }
}

/// Record of one path component matched against its segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedSegment<'s> {
    pub position: usize,
    pub segment: &'s Segment,
    pub text: String,
}

/// The result of a successful parse.
///
/// Holds one entry per user-specified segment, in specification order, along
/// with the raw input and the per-segment match record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captures<'s> {
    input: String,
    spec: &'s [Segment],
    matched: Vec<MatchedSegment<'s>>,
    values: Vec<(&'static str, String)>,
}

impl<'s> Captures<'s> {
    /// The raw input that was parsed.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The specification the input was matched against.
    pub fn spec(&self) -> &'s [Segment] {
        self.spec
    }

    /// Every segment with the component it matched.
    pub fn matched(&self) -> &[MatchedSegment<'s>] {
        &self.matched
    }

    /// Returns the captured value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// Removes and returns the captured value for `name`.
    pub fn take(&mut self, name: &str) -> Option<String> {
        let index = self.values.iter().position(|(key, _)| *key == name)?;
        Some(self.values.remove(index).1)
    }

    /// Iterates over `(name, value)` pairs in specification order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Number of captured values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parses `input` against `spec`.
///
/// The input is split on `/` after dropping a single leading `/`. Each
/// component is matched positionally: static segments compare ignoring ASCII
/// case, user-specified segments capture any non-empty component verbatim.
pub fn parse<'s>(
    spec: &'s [Segment],
    input: &str,
    mode: MatchMode,
) -> Result<Captures<'s>, IdError> {
    trace!(input, segments = spec.len(), ?mode, "parsing resource id");

    let components = split(input, mode);
    if components.len() != spec.len() {
        debug!(
            input,
            expected = spec.len(),
            actual = components.len(),
            "segment count mismatch"
        );
        return Err(IdError::ShapeMismatch {
            expected: spec.len(),
            actual: components.len(),
            shape: segment::shape(spec),
        });
    }

    let mut matched = Vec::with_capacity(spec.len());
    let mut values = Vec::new();

    for (position, (segment, component)) in spec.iter().zip(components).enumerate() {
        match segment {
            Segment::Static { match_key, .. } => {
                if !segment.matches_static(component) {
                    debug!(
                        position,
                        expected = match_key,
                        got = component,
                        "static segment mismatch"
                    );
                    return Err(IdError::UnexpectedSegment {
                        expected: *match_key,
                        got: component.to_string(),
                        position,
                    });
                }
            }
            Segment::UserSpecified { name, .. } => {
                if component.is_empty() {
                    debug!(position, name, "empty user-specified segment");
                    return Err(IdError::EmptySegment {
                        name: *name,
                        position,
                    });
                }
                values.push((*name, component.to_string()));
            }
        }

        matched.push(MatchedSegment {
            position,
            segment,
            text: component.to_string(),
        });
    }

    Ok(Captures {
        input: input.to_string(),
        spec,
        matched,
        values,
    })
}

/// Splits input into path components.
///
/// Empty input (or a lone `/`) yields no components.
fn split(input: &str, mode: MatchMode) -> Vec<&str> {
    let mut path = input.strip_prefix('/').unwrap_or(input);
    if mode == MatchMode::Insensitive {
        path = path.strip_suffix('/').unwrap_or(path);
    }

    if path.is_empty() {
        return Vec::new();
    }
    path.split('/').collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const APP: &str = "00000000-0000-0000-0000-000000000000";
    const OWNER: &str = "11111111-1111-1111-1111-111111111111";

    const SPEC: &[Segment] = &[
        Segment::static_segment("applications", "applications", "applications"),
        Segment::user_specified("applicationId", APP),
        Segment::static_segment("owners", "owners", "owners"),
        Segment::user_specified("ownerId", OWNER),
    ];

    #[test]
    fn test_parse_captures_every_variable() {
        let input = format!("/applications/{APP}/owners/{OWNER}");
        let captures = parse(SPEC, &input, MatchMode::Strict).unwrap();

        assert_eq!(captures.len(), 2);
        assert_eq!(captures.get("applicationId"), Some(APP));
        assert_eq!(captures.get("ownerId"), Some(OWNER));
        assert_eq!(captures.get("owners"), None);
        assert_eq!(captures.input(), input);
        assert_eq!(captures.matched().len(), 4);
        assert_eq!(captures.matched()[2].text, "owners");
    }

    #[rstest]
    #[case("", 0)]
    #[case("/", 0)]
    #[case("/applications/00000000-0000-0000-0000-000000000000", 2)]
    #[case("https://graph.microsoft.com", 3)]
    #[case("/applications/a/owners/b/extra", 5)]
    #[case("/applications/a/owners/b/", 5)]
    fn test_parse_rejects_wrong_component_count(#[case] input: &str, #[case] actual: usize) {
        let err = parse(SPEC, input, MatchMode::Strict).unwrap_err();
        assert_eq!(
            err,
            IdError::ShapeMismatch {
                expected: 4,
                actual,
                shape: "/applications/{applicationId}/owners/{ownerId}".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_reports_static_mismatch_position() {
        let err = parse(SPEC, "/application/x/owners/y", MatchMode::Strict).unwrap_err();
        assert_eq!(
            err,
            IdError::UnexpectedSegment {
                expected: "applications",
                got: "application".to_string(),
                position: 0,
            }
        );

        let err = parse(SPEC, "/applications/x/members/y", MatchMode::Strict).unwrap_err();
        assert_eq!(err.position(), Some(2));
    }

    #[test]
    fn test_parse_rejects_empty_variable() {
        let input = format!("/applications//owners/{OWNER}");
        let err = parse(SPEC, &input, MatchMode::Strict).unwrap_err();
        assert_eq!(
            err,
            IdError::EmptySegment {
                name: "applicationId",
                position: 1,
            }
        );
    }

    #[test]
    fn test_static_case_ignored_but_values_preserved() {
        let captures = parse(SPEC, "/Applications/AbC/OWNERS/dEf", MatchMode::Strict).unwrap();
        assert_eq!(captures.get("applicationId"), Some("AbC"));
        assert_eq!(captures.get("ownerId"), Some("dEf"));
    }

    #[test]
    fn test_insensitive_mode_tolerates_trailing_slash() {
        let captures = parse(SPEC, "/applications/a/owners/b/", MatchMode::Insensitive).unwrap();
        assert_eq!(captures.get("ownerId"), Some("b"));

        // only one trailing slash is dropped
        let err = parse(SPEC, "/applications/a/owners/b//", MatchMode::Insensitive).unwrap_err();
        assert!(matches!(err, IdError::ShapeMismatch { actual: 5, .. }));
    }

    #[test]
    fn test_missing_leading_slash_still_splits() {
        let captures = parse(SPEC, "applications/a/owners/b", MatchMode::Strict).unwrap();
        assert_eq!(captures.get("applicationId"), Some("a"));
    }

    #[test]
    fn test_take_removes_value() {
        let mut captures = parse(SPEC, "/applications/a/owners/b", MatchMode::Strict).unwrap();
        assert_eq!(captures.take("ownerId"), Some("b".to_string()));
        assert_eq!(captures.take("ownerId"), None);
        assert_eq!(captures.len(), 1);
    }

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(MatchMode::from_insensitive(false), MatchMode::Strict);
        assert_eq!(MatchMode::from_insensitive(true), MatchMode::Insensitive);
        assert_eq!(MatchMode::default(), MatchMode::Strict);
    }
}
