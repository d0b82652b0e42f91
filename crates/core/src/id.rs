//! Strongly-typed identifiers used across the domain.
//!
//! Commerce-platform identifiers are tenant-supplied opaque strings (not
//! UUIDs), so these newtypes wrap `String` and never invent values.

use serde::{Deserialize, Serialize};

/// Identifier of a security profile.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityProfileId(String);

/// Identifier of a user (buyer, supplier, or admin user).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

/// Identifier of a user group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserGroupId(String);

/// Identifier of a buyer organization.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuyerId(String);

/// Identifier of a supplier organization.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_string_newtype!(SecurityProfileId);
impl_string_newtype!(UserId);
impl_string_newtype!(UserGroupId);
impl_string_newtype!(BuyerId);
impl_string_newtype!(SupplierId);
