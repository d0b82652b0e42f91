//! `commerceadmin-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! string-backed identifiers, the commerce-role/assignment-level vocabulary,
//! and the shared error model.

pub mod error;
pub mod id;
pub mod scope;

pub use error::{DomainError, DomainResult};
pub use id::{BuyerId, SecurityProfileId, SupplierId, UserGroupId, UserId};
pub use scope::{AssignmentLevel, CommerceRole};
