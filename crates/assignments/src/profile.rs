//! Security profiles: named, reusable role bundles.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use commerceadmin_catalog::{ApiRole, CustomRole, RoleSet};
use commerceadmin_core::SecurityProfileId;

/// A named bundle of roles assignable to users, groups, or companies.
///
/// Immutable from this core's perspective; edits happen through the profile
/// editor, which recomputes `roles`/`custom_roles` via the role aggregator
/// and persists through the external client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityProfile {
    pub id: SecurityProfileId,
    pub name: String,
    pub roles: BTreeSet<ApiRole>,
    pub custom_roles: BTreeSet<CustomRole>,
}

impl SecurityProfile {
    pub fn new(
        id: impl Into<SecurityProfileId>,
        name: impl Into<String>,
        roles: impl IntoIterator<Item = ApiRole>,
        custom_roles: impl IntoIterator<Item = CustomRole>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            roles: roles.into_iter().collect(),
            custom_roles: custom_roles.into_iter().collect(),
        }
    }

    /// The profile's held roles as a set-algebra value.
    pub fn role_set(&self) -> RoleSet {
        RoleSet {
            api_roles: self.roles.clone(),
            custom_roles: self.custom_roles.clone(),
        }
    }
}
