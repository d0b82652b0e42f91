//! Role identifiers.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Platform-defined permission token (e.g. "ProductReader", "OrderAdmin").
///
/// API roles are intentionally opaque strings at this layer; the commerce
/// platform's authorization layer gives them meaning.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiRole(Cow<'static, str>);

impl ApiRole {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ApiRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tenant-defined permission token with no platform-enforced meaning.
///
/// Used purely by the application's feature catalog to track which features
/// a security profile was granted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomRole(Cow<'static, str>);

impl CustomRole {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CustomRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
