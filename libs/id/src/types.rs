//! Typed resource ID definitions.
//!
//! Each ID type lists its segments in path order and binds every
//! user-specified segment to a field. All variables are object IDs and are
//! validated as UUIDs.

use crate::define_resource_id;
use crate::validate;
use crate::{IdDescriptor, Segment};

// =============================================================================
// Applications
// =============================================================================

define_resource_id! {
    /// The ID of an application.
    ApplicationId {
        kind: "application",
        label: "Application",
        segments: [
            Segment::static_segment("applications", "applications", "applications"),
            Segment::user_specified("applicationId", "00000000-0000-0000-0000-000000000000"),
        ],
        fields: {
            application_id: "applicationId" => "Application ID", validate::is_uuid;
        },
    }
}

define_resource_id! {
    /// The ID of an owner of an application.
    OwnerId {
        kind: "application_owner",
        label: "Application Owner",
        segments: [
            Segment::static_segment("applications", "applications", "applications"),
            Segment::user_specified("applicationId", "00000000-0000-0000-0000-000000000000"),
            Segment::static_segment("owners", "owners", "owners"),
            Segment::user_specified("ownerId", "11111111-1111-1111-1111-111111111111"),
        ],
        fields: {
            application_id: "applicationId" => "Application ID", validate::is_uuid;
            owner_id: "ownerId" => "Owner ID", validate::is_uuid;
        },
    }
}

// =============================================================================
// Groups
// =============================================================================

define_resource_id! {
    /// The ID of a member of a group.
    GroupMemberId {
        kind: "group_member",
        label: "Group Member",
        segments: [
            Segment::static_segment("groups", "groups", "groups"),
            Segment::user_specified("groupId", "00000000-0000-0000-0000-000000000000"),
            Segment::static_segment("members", "members", "members"),
            Segment::user_specified("memberId", "11111111-1111-1111-1111-111111111111"),
        ],
        fields: {
            group_id: "groupId" => "Group ID", validate::is_uuid;
            member_id: "memberId" => "Member ID", validate::is_uuid;
        },
    }
}

define_resource_id! {
    /// The ID of an owner of a group.
    GroupOwnerId {
        kind: "group_owner",
        label: "Group Owner",
        segments: [
            Segment::static_segment("groups", "groups", "groups"),
            Segment::user_specified("groupId", "00000000-0000-0000-0000-000000000000"),
            Segment::static_segment("owners", "owners", "owners"),
            Segment::user_specified("ownerId", "11111111-1111-1111-1111-111111111111"),
        ],
        fields: {
            group_id: "groupId" => "Group ID", validate::is_uuid;
            owner_id: "ownerId" => "Owner ID", validate::is_uuid;
        },
    }
}

// =============================================================================
// Service Principals
// =============================================================================

define_resource_id! {
    /// The ID of a claims mapping policy assigned to a service principal.
    ServicePrincipalClaimsMappingPolicyId {
        kind: "service_principal_claims_mapping_policy",
        label: "Service Principal Claims Mapping Policy",
        segments: [
            Segment::static_segment("servicePrincipals", "servicePrincipals", "servicePrincipals"),
            Segment::user_specified("servicePrincipalId", "00000000-0000-0000-0000-000000000000"),
            Segment::static_segment(
                "claimsMappingPolicies",
                "claimsMappingPolicies",
                "claimsMappingPolicies"
            ),
            Segment::user_specified("claimsMappingPolicyId", "11111111-1111-1111-1111-111111111111"),
        ],
        fields: {
            service_principal_id: "servicePrincipalId" => "Service Principal ID", validate::is_uuid;
            claims_mapping_policy_id: "claimsMappingPolicyId" => "Claims Mapping Policy ID", validate::is_uuid;
        },
    }
}

// =============================================================================
// Registry
// =============================================================================

static REGISTRY: [IdDescriptor; 5] = [
    ApplicationId::DESCRIPTOR,
    OwnerId::DESCRIPTOR,
    GroupMemberId::DESCRIPTOR,
    GroupOwnerId::DESCRIPTOR,
    ServicePrincipalClaimsMappingPolicyId::DESCRIPTOR,
];

/// Every known ID type.
pub fn registry() -> &'static [IdDescriptor] {
    &REGISTRY
}

/// Finds an ID type by kind, ignoring ASCII case.
pub fn lookup(kind: &str) -> Option<&'static IdDescriptor> {
    REGISTRY
        .iter()
        .find(|descriptor| descriptor.kind.eq_ignore_ascii_case(kind))
}

// =============================================================================
// Tests
// =============================================================================
