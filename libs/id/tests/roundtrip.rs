//! Roundtrip laws for typed resource IDs.
//!
//! ## Running
//!
//! ```bash
//! cargo test -p resid --test roundtrip
//! ```

use proptest::prelude::*;
use resid::{format, segment, GroupMemberId, IdError, MatchMode, OwnerId, ResourceId};
use resid_testing::{case_variant, segment_value, uuid_string, APPLICATION_ID, OWNER_ID};

#[test]
fn owner_id_worked_example() {
    let id = OwnerId::new(APPLICATION_ID, OWNER_ID);
    let rendered = id.id();
    assert_eq!(
        rendered,
        "/applications/00000000-0000-0000-0000-000000000000/owners/11111111-1111-1111-1111-111111111111"
    );

    let parsed = OwnerId::parse(&rendered).unwrap();
    assert_eq!(parsed.application_id, APPLICATION_ID);
    assert_eq!(parsed.owner_id, OWNER_ID);
}

#[test]
fn owner_id_error_cases() {
    assert!(matches!(
        OwnerId::parse("/applications/00000000-0000-0000-0000-000000000000"),
        Err(IdError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        OwnerId::parse("/application/x/owners/y"),
        Err(IdError::UnexpectedSegment { expected: "applications", position: 0, .. })
    ));
    assert!(matches!(
        OwnerId::parse("/applications//owners/11111111-1111-1111-1111-111111111111"),
        Err(IdError::EmptySegment { name: "applicationId", .. })
    ));
    assert!(matches!(OwnerId::parse(""), Err(IdError::ShapeMismatch { actual: 0, .. })));
}

proptest! {
    #[test]
    fn parse_of_render_recovers_fields(app in segment_value(), owner in segment_value()) {
        let id = OwnerId::new(app.clone(), owner.clone());
        let parsed = OwnerId::parse(&id.id()).unwrap();
        prop_assert_eq!(parsed.application_id, app);
        prop_assert_eq!(parsed.owner_id, owner);
    }

    #[test]
    fn render_is_idempotent(group in uuid_string(), member in uuid_string()) {
        let first = GroupMemberId::new(group, member).id();
        let second = GroupMemberId::parse(&first).unwrap().id();
        let third = GroupMemberId::parse(&second).unwrap().id();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&second, &third);
    }

    #[test]
    fn static_case_is_normalized_and_values_preserved(
        applications in case_variant("applications"),
        owners in case_variant("owners"),
        app in uuid_string(),
        owner in uuid_string(),
    ) {
        let input = format!("/{applications}/{app}/{owners}/{owner}");
        let id = OwnerId::parse(&input).unwrap();
        prop_assert_eq!(&id.application_id, &app);
        prop_assert_eq!(&id.owner_id, &owner);

        let canonical = format::canonicalize(OwnerId::SEGMENTS, &input, MatchMode::Strict).unwrap();
        prop_assert_eq!(id.id(), canonical);
    }

    #[test]
    fn uuid_values_pass_semantic_validation(app in uuid_string(), owner in uuid_string()) {
        let id = OwnerId::new(app, owner);
        prop_assert!(id.validate_fields().is_valid());
    }

    #[test]
    fn extra_components_are_rejected(app in segment_value(), owner in segment_value(), tail in segment_value()) {
        let input = format!("{}/{}", OwnerId::new(app, owner).id(), tail);
        let err = OwnerId::parse(&input).unwrap_err();
        prop_assert_eq!(
            err,
            IdError::ShapeMismatch {
                expected: 4,
                actual: 5,
                shape: segment::shape(OwnerId::SEGMENTS),
            }
        );
    }
}
