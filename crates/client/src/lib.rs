//! `commerceadmin-client` — external data contracts and orchestration.
//!
//! The only crate in the workspace that touches I/O, and even here only
//! through the [`contracts::AdminDataClient`] trait: transport (REST, cache,
//! test stub) is the implementor's concern. Provides the concurrent fan-out
//! that feeds the inheritance resolver and the profile-editor flow that
//! persists role-set changes.

pub mod contracts;
pub mod editor;
pub mod resolver;

pub use contracts::{AdminDataClient, AssignmentQuery, QueryCommerceRole, QueryLevel};
pub use editor::{assign_profile, eligible_features, profile_summary, toggle_feature, ProfileSummary};
pub use resolver::{load_user_scope, resolve_assignment_rows, PrincipalAssignments};
