//! Party records resolved for inherited assignments.
//!
//! Thin read-model shapes: just enough identity and display data for the
//! assignment view to say *which* group or company an inherited row came
//! through.

use serde::{Deserialize, Serialize};

use commerceadmin_core::{BuyerId, SupplierId, UserGroupId};

/// A buyer organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buyer {
    pub id: BuyerId,
    pub name: String,
}

/// A supplier organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
}

/// A user group (buyer-side, supplier-side, or admin-side).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
    pub id: UserGroupId,
    pub name: String,
}

/// A buyer user group together with its owning buyer.
///
/// Group ids are only unique within their parent company, so the pair is the
/// party identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerUserGroup {
    pub group: UserGroup,
    pub buyer_id: BuyerId,
}

/// A supplier user group together with its owning supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierUserGroup {
    pub group: UserGroup,
    pub supplier_id: SupplierId,
}
