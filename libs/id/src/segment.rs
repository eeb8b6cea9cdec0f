//! Segment specifications.
//!
//! A segment specification is an ordered, immutable list of [`Segment`]s
//! describing every `/`-delimited component of one identifier type, in the
//! order they appear. Specifications are plain `&'static [Segment]` slices so
//! that each identifier type can declare its layout as a constant.

use std::collections::HashSet;

use crate::IdError;

/// One component of a resource ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Fixed literal text.
    ///
    /// Input is compared against `match_key` ignoring ASCII case. Rendering
    /// always emits `render_key`; `fixed_value` is the value shown in examples.
    Static {
        match_key: &'static str,
        render_key: &'static str,
        fixed_value: &'static str,
    },

    /// A named variable capturing exactly one non-empty path component.
    UserSpecified {
        name: &'static str,
        example_value: &'static str,
    },
}

impl Segment {
    /// Creates a static segment.
    #[must_use]
    pub const fn static_segment(
        match_key: &'static str,
        render_key: &'static str,
        fixed_value: &'static str,
    ) -> Self {
        Segment::Static {
            match_key,
            render_key,
            fixed_value,
        }
    }

    /// Creates a user-specified segment.
    #[must_use]
    pub const fn user_specified(name: &'static str, example_value: &'static str) -> Self {
        Segment::UserSpecified {
            name,
            example_value,
        }
    }

    /// Returns the variable name of a user-specified segment.
    #[must_use]
    pub const fn name(&self) -> Option<&'static str> {
        match self {
            Segment::UserSpecified { name, .. } => Some(*name),
            Segment::Static { .. } => None,
        }
    }

    /// Returns true if `component` satisfies a static segment.
    pub(crate) fn matches_static(&self, component: &str) -> bool {
        match self {
            Segment::Static { match_key, .. } => match_key.eq_ignore_ascii_case(component),
            Segment::UserSpecified { .. } => false,
        }
    }

    /// The form used in shape descriptions: the literal or `{name}`.
    fn shape_text(&self) -> String {
        match self {
            Segment::Static { render_key, .. } => (*render_key).to_string(),
            Segment::UserSpecified { name, .. } => format!("{{{name}}}"),
        }
    }
}

/// Renders the documentation form of a specification.
///
/// `/applications/{applicationId}/owners/{ownerId}`
#[must_use]
pub fn shape(spec: &[Segment]) -> String {
    join(spec.iter().map(Segment::shape_text))
}

/// Renders an example ID from the specification's example values.
#[must_use]
pub fn example(spec: &[Segment]) -> String {
    join(spec.iter().map(|segment| match segment {
        Segment::Static { fixed_value, .. } => (*fixed_value).to_string(),
        Segment::UserSpecified { example_value, .. } => (*example_value).to_string(),
    }))
}

/// Returns the variable names of a specification, in order.
pub fn names(spec: &[Segment]) -> impl Iterator<Item = &'static str> + '_ {
    spec.iter().filter_map(Segment::name)
}

/// Checks that user-specified segment names are unique within a specification.
pub fn check_spec(spec: &[Segment]) -> Result<(), IdError> {
    let mut seen = HashSet::new();
    for name in names(spec) {
        if !seen.insert(name) {
            return Err(IdError::DuplicateSegmentName { name });
        }
    }
    Ok(())
}

/// Joins rendered components with `/` behind a single leading `/`.
pub(crate) fn join<I>(components: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    for component in components {
        out.push('/');
        out.push_str(component.as_ref());
    }
    out
}
