//! Macros for defining typed resource ID types.

/// Macro to define a typed resource ID from its segment layout.
///
/// This generates a struct with one `String` field per user-specified segment, plus:
/// - `new()` from raw field values and `try_new()` which rejects values that are
///   empty or contain `/`
/// - a [`ResourceId`](crate::ResourceId) implementation (`parse`, `parse_insensitively`, `id`, ...)
/// - a [`Values`](crate::Values) implementation mapping segment names to fields
/// - `Display` (the human-readable label) and `FromStr` (strict parse)
/// - `Serialize` and `Deserialize` using the canonical ID string
/// - a `DESCRIPTOR` constant for runtime lookup
///
/// # Example
///
/// ```ignore
/// define_resource_id! {
///     /// The ID of an application owner.
///     OwnerId {
///         kind: "application_owner",
///         label: "Application Owner",
///         segments: [
///             Segment::static_segment("applications", "applications", "applications"),
///             Segment::user_specified("applicationId", "00000000-0000-0000-0000-000000000000"),
///             Segment::static_segment("owners", "owners", "owners"),
///             Segment::user_specified("ownerId", "11111111-1111-1111-1111-111111111111"),
///         ],
///         fields: {
///             application_id: "applicationId" => "Application ID", validate::is_uuid;
///             owner_id: "ownerId" => "Owner ID", validate::is_uuid;
///         },
///     }
/// }
///
/// let id = OwnerId::parse("/applications/.../owners/...")?;
/// ```
#[macro_export]
macro_rules! define_resource_id {
    (
        $(#[$meta:meta])*
        $name:ident {
            kind: $kind:literal,
            label: $label:literal,
            segments: [ $($segment:expr),+ $(,)? ],
            fields: {
                $( $field:ident : $seg_name:literal => $field_label:literal, $validator:path );+ $(;)?
            } $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            $( pub $field: String, )+
        }

        impl $name {
            /// Descriptor for runtime lookup of this ID type.
            pub const DESCRIPTOR: $crate::IdDescriptor = $crate::IdDescriptor::of::<$name>();

            /// Creates an ID from raw field values.
            #[must_use]
            pub fn new($( $field: impl Into<String> ),+) -> Self {
                Self {
                    $( $field: $field.into(), )+
                }
            }

            /// Creates an ID from raw field values, rejecting values that are empty
            /// or contain `/`.
            pub fn try_new($( $field: impl Into<String> ),+) -> Result<Self, $crate::IdError> {
                let id = Self::new($( $field ),+);
                $crate::ResourceId::check_populated(&id)?;
                Ok(id)
            }

            /// Parses an ID in strict mode.
            pub fn parse(input: &str) -> Result<Self, $crate::IdError> {
                <Self as $crate::ResourceId>::parse(input)
            }

            /// Parses an ID, tolerating a trailing `/`.
            pub fn parse_insensitively(input: &str) -> Result<Self, $crate::IdError> {
                <Self as $crate::ResourceId>::parse_insensitively(input)
            }

            /// Renders the canonical ID.
            #[must_use]
            pub fn id(&self) -> String {
                <Self as $crate::ResourceId>::id(self)
            }
        }

        impl $crate::ResourceId for $name {
            const KIND: &'static str = $kind;
            const LABEL: &'static str = $label;
            const SEGMENTS: &'static [$crate::Segment] = &[ $($segment),+ ];
            const FIELDS: &'static [$crate::Field<Self>] = &[
                $(
                    $crate::Field {
                        segment: $seg_name,
                        label: $field_label,
                        get: |id| id.$field.as_str(),
                        validate: $validator,
                    },
                )+
            ];

            fn from_captures(mut captures: $crate::Captures<'_>) -> Result<Self, $crate::IdError> {
                Ok(Self {
                    $(
                        $field: captures.take($seg_name).ok_or($crate::IdError::SegmentNotFound {
                            name: $seg_name,
                            id_type: $label,
                        })?,
                    )+
                })
            }
        }

        impl $crate::Values for $name {
            fn value(&self, name: &str) -> Option<&str> {
                match name {
                    $( $seg_name => Some(self.$field.as_str()), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::ResourceId::display_label(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let id = $crate::ResourceId::try_id(self).map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&id)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}
