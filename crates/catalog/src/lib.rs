//! `commerceadmin-catalog` — the immutable feature/permission registry.
//!
//! Maps each application-level feature (e.g. "Product Manager") to the API
//! roles and custom roles required to use it. The catalog is an explicitly
//! constructed value passed to consumers; there is no hidden global.

pub mod catalog;
pub mod feature;
pub mod role;
pub mod role_set;
mod standard;

pub use catalog::Catalog;
pub use feature::{Feature, FeatureId, PrincipalUserType};
pub use role::{ApiRole, CustomRole};
pub use role_set::RoleSet;
