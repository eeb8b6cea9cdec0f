//! # resid
//!
//! Parsing and formatting of path-like resource identifiers.
//!
//! ## Design Principles
//!
//! - One generic engine matches and renders every identifier shape
//! - Identifier types are declarative: an ordered segment list plus field bindings
//! - IDs roundtrip exactly (format → parse → format)
//! - Structural errors name the failing segment position and expected text
//! - Semantic validation (e.g. "is a UUID") runs only after structural parsing
//!
//! ## ID Format
//!
//! An ID is `/` followed by its segments joined with `/`. A segment is either
//! a static literal, matched ignoring ASCII case, or a user-specified value
//! captured verbatim.
//!
//! Examples:
//! - `/applications/{applicationId}`
//! - `/applications/{applicationId}/owners/{ownerId}`
//! - `/servicePrincipals/{servicePrincipalId}/claimsMappingPolicies/{claimsMappingPolicyId}`

mod error;
pub mod format;
mod macros;
pub mod parser;
mod resource;
pub mod segment;
pub mod types;
pub mod validate;

pub use error::IdError;
pub use format::Values;
pub use parser::{Captures, MatchMode, MatchedSegment};
pub use resource::{Field, IdDescriptor, ParsedField, ParsedId, ResourceId};
pub use segment::Segment;
pub use types::*;
pub use validate::{Validation, ValidationError};
