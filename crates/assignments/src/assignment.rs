//! Security-profile assignment records.

use serde::{Deserialize, Serialize};

use commerceadmin_core::{
    BuyerId, DomainError, DomainResult, SecurityProfileId, SupplierId, UserGroupId, UserId,
};

/// The company context an assignment is scoped to.
///
/// Buyer- and supplier-side assignments carry their parent company id; admin
/// (seller-side) assignments have no parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyContext {
    Buyer(BuyerId),
    Supplier(SupplierId),
    Admin,
}

/// One security-profile assignment row, as stored by the platform.
///
/// Invariant: at most one of `user_id` / `user_group_id` is set. A record is
/// a user assignment, a group assignment, or a bare company assignment with
/// neither. Created and removed only through the external assignment API;
/// this core classifies and groups records, never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityProfileAssignment {
    pub security_profile_id: SecurityProfileId,
    pub user_id: Option<UserId>,
    pub user_group_id: Option<UserGroupId>,
    pub buyer_id: Option<BuyerId>,
    pub supplier_id: Option<SupplierId>,
}

impl SecurityProfileAssignment {
    fn bare(security_profile_id: SecurityProfileId, company: CompanyContext) -> Self {
        let (buyer_id, supplier_id) = match company {
            CompanyContext::Buyer(id) => (Some(id), None),
            CompanyContext::Supplier(id) => (None, Some(id)),
            CompanyContext::Admin => (None, None),
        };
        Self {
            security_profile_id,
            user_id: None,
            user_group_id: None,
            buyer_id,
            supplier_id,
        }
    }

    /// Assignment anchored at an individual user.
    pub fn for_user(
        security_profile_id: impl Into<SecurityProfileId>,
        user_id: impl Into<UserId>,
        company: CompanyContext,
    ) -> Self {
        let mut assignment = Self::bare(security_profile_id.into(), company);
        assignment.user_id = Some(user_id.into());
        assignment
    }

    /// Assignment anchored at a user group.
    pub fn for_group(
        security_profile_id: impl Into<SecurityProfileId>,
        user_group_id: impl Into<UserGroupId>,
        company: CompanyContext,
    ) -> Self {
        let mut assignment = Self::bare(security_profile_id.into(), company);
        assignment.user_group_id = Some(user_group_id.into());
        assignment
    }

    /// Assignment anchored at a whole company.
    pub fn for_company(
        security_profile_id: impl Into<SecurityProfileId>,
        company: CompanyContext,
    ) -> Self {
        Self::bare(security_profile_id.into(), company)
    }

    /// Check the record invariant on data that arrived from outside
    /// (deserialized payloads bypass the constructors).
    pub fn validate(&self) -> DomainResult<()> {
        if self.user_id.is_some() && self.user_group_id.is_some() {
            return Err(DomainError::integrity(format!(
                "assignment of profile '{}' names both a user and a user group",
                self.security_profile_id
            )));
        }
        Ok(())
    }
}
