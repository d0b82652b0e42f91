//! Read/write contracts consumed from the external data-access layer.
//!
//! Shape-only, transport-agnostic. Implementations live outside this
//! workspace (REST client, caching layer, in-memory stubs for tests).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use commerceadmin_assignments::{
    Buyer, SecurityProfile, SecurityProfileAssignment, Supplier, UserGroup,
};
use commerceadmin_core::{BuyerId, CommerceRole, DomainResult, SupplierId, UserGroupId, UserId};

/// Assignment-level filter for [`AdminDataClient::list_assignments`].
///
/// Only group and company are queryable upstream; user-anchored assignments
/// are selected via `user_id` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryLevel {
    Group,
    Company,
}

/// Commerce-role filter for [`AdminDataClient::list_assignments`].
///
/// The platform calls the admin side "Seller" in its query vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryCommerceRole {
    Buyer,
    Supplier,
    Seller,
}

impl From<CommerceRole> for QueryCommerceRole {
    fn from(role: CommerceRole) -> Self {
        match role {
            CommerceRole::Buyer => QueryCommerceRole::Buyer,
            CommerceRole::Supplier => QueryCommerceRole::Supplier,
            CommerceRole::Admin => QueryCommerceRole::Seller,
        }
    }
}

/// Typed assignment-list filter (replaces the ad-hoc filter objects the
/// transport layer used to accept).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentQuery {
    pub user_id: Option<UserId>,
    pub level: Option<QueryLevel>,
    pub commerce_role: Option<QueryCommerceRole>,
}

impl AssignmentQuery {
    pub fn for_user(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Self::default()
        }
    }

    pub fn at_level(mut self, level: QueryLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_commerce_role(mut self, commerce_role: impl Into<QueryCommerceRole>) -> Self {
        self.commerce_role = Some(commerce_role.into());
        self
    }
}

/// The external data-access collaborator.
///
/// Four read contracts and one write contract. Every method is independently
/// fallible; the resolver treats any read failure as fatal for the whole
/// resolution (no partial party data). Implementations own retries, if any;
/// this core never retries.
#[async_trait]
pub trait AdminDataClient: Send + Sync {
    /// All security profiles known to the tenant.
    async fn list_security_profiles(&self) -> DomainResult<Vec<SecurityProfile>>;

    /// Assignments matching the typed filter.
    async fn list_assignments(
        &self,
        query: &AssignmentQuery,
    ) -> DomainResult<Vec<SecurityProfileAssignment>>;

    /// Buyer records for the given ids (batched lookup).
    async fn list_buyers(&self, ids: &[BuyerId]) -> DomainResult<Vec<Buyer>>;

    /// Supplier records for the given ids (batched lookup).
    async fn list_suppliers(&self, ids: &[SupplierId]) -> DomainResult<Vec<Supplier>>;

    /// A buyer-side user group, scoped by its parent buyer.
    async fn get_buyer_user_group(
        &self,
        buyer_id: &BuyerId,
        group_id: &UserGroupId,
    ) -> DomainResult<UserGroup>;

    /// A supplier-side user group, scoped by its parent supplier.
    async fn get_supplier_user_group(
        &self,
        supplier_id: &SupplierId,
        group_id: &UserGroupId,
    ) -> DomainResult<UserGroup>;

    /// An admin-side user group (no parent company).
    async fn get_admin_user_group(&self, group_id: &UserGroupId) -> DomainResult<UserGroup>;

    /// Persist an assignment. Fails with
    /// [`commerceadmin_core::DomainError::WriteConflict`] on conflict; the
    /// conflict is surfaced to the caller unmodified.
    async fn save_assignment(&self, assignment: &SecurityProfileAssignment) -> DomainResult<()>;
}
