//! Feature records: application-level capabilities and their role requirements.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::role::{ApiRole, CustomRole};
use crate::role_set::RoleSet;

/// Unique key of a feature within a catalog (e.g. "ProductViewer").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(Cow<'static, str>);

impl FeatureId {
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which side of the marketplace may hold a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrincipalUserType {
    Supplier,
    Admin,
}

/// A catalog entry: one named application capability and the roles it needs.
///
/// Immutable once constructed. A feature is "enabled" for a principal when
/// the principal's held [`RoleSet`] is a superset of [`Feature::required`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    id: FeatureId,
    display_name: Cow<'static, str>,
    description: Cow<'static, str>,
    group: Cow<'static, str>,
    required: RoleSet,
    allowed_user_types: Vec<PrincipalUserType>,
}

impl Feature {
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        display_name: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
        group: impl Into<Cow<'static, str>>,
        api_roles: impl IntoIterator<Item = ApiRole>,
        custom_roles: impl IntoIterator<Item = CustomRole>,
        allowed_user_types: impl IntoIterator<Item = PrincipalUserType>,
    ) -> Self {
        Self {
            id: FeatureId::new(id),
            display_name: display_name.into(),
            description: description.into(),
            group: group.into(),
            required: RoleSet::new(api_roles, custom_roles),
            allowed_user_types: allowed_user_types.into_iter().collect(),
        }
    }

    pub fn id(&self) -> &FeatureId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Caller-supplied classification tag used for grouped display
    /// (e.g. "Products", "Orders").
    pub fn group(&self) -> &str {
        &self.group
    }

    /// The roles a principal must hold for this feature.
    pub fn required(&self) -> &RoleSet {
        &self.required
    }

    pub fn allows(&self, user_type: PrincipalUserType) -> bool {
        self.allowed_user_types.contains(&user_type)
    }
}
