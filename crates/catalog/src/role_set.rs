//! Set-algebra value over API roles and custom roles.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::role::{ApiRole, CustomRole};

/// An unordered pair of role sets.
///
/// Equality is component-wise set equality (order irrelevant, duplicates
/// collapsed). `BTreeSet` keeps iteration and serialization deterministic,
/// which matters because these values are diffed and persisted by the
/// profile editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet {
    pub api_roles: BTreeSet<ApiRole>,
    pub custom_roles: BTreeSet<CustomRole>,
}

impl RoleSet {
    pub fn new(
        api_roles: impl IntoIterator<Item = ApiRole>,
        custom_roles: impl IntoIterator<Item = CustomRole>,
    ) -> Self {
        Self {
            api_roles: api_roles.into_iter().collect(),
            custom_roles: custom_roles.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.api_roles.is_empty() && self.custom_roles.is_empty()
    }

    /// Merge another role set into this one (set union).
    pub fn merge(&mut self, other: &RoleSet) {
        self.api_roles.extend(other.api_roles.iter().cloned());
        self.custom_roles.extend(other.custom_roles.iter().cloned());
    }

    /// Set union, consuming neither operand.
    pub fn union(&self, other: &RoleSet) -> RoleSet {
        let mut out = self.clone();
        out.merge(other);
        out
    }

    /// Superset test: every role in `required` is present here, in both
    /// components simultaneously. Extra held roles are ignored.
    pub fn contains_all(&self, required: &RoleSet) -> bool {
        required.api_roles.is_subset(&self.api_roles)
            && required.custom_roles.is_subset(&self.custom_roles)
    }
}
