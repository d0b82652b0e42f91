//! Commerce-role and assignment-level vocabulary.

use serde::{Deserialize, Serialize};

/// The category of principal a security-profile assignment concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommerceRole {
    Buyer,
    Supplier,
    Admin,
}

impl core::fmt::Display for CommerceRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CommerceRole::Buyer => f.write_str("buyer"),
            CommerceRole::Supplier => f.write_str("supplier"),
            CommerceRole::Admin => f.write_str("admin"),
        }
    }
}

/// Granularity at which a security-profile assignment is anchored.
///
/// User is the most specific level, company the most general. A principal
/// viewed at level L inherits assignments anchored at any other level; the
/// level enum itself carries no directional semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentLevel {
    User,
    Group,
    Company,
}

impl AssignmentLevel {
    pub const ALL: [AssignmentLevel; 3] = [
        AssignmentLevel::User,
        AssignmentLevel::Group,
        AssignmentLevel::Company,
    ];
}

impl core::fmt::Display for AssignmentLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AssignmentLevel::User => f.write_str("user"),
            AssignmentLevel::Group => f.write_str("group"),
            AssignmentLevel::Company => f.write_str("company"),
        }
    }
}
