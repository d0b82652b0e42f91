//! `commerceadmin-access` — feature/role set algebra.
//!
//! Two pure facets over the catalog:
//! - the **aggregator** translates an enabled-feature set into the role set
//!   that expresses exactly that feature set (and back),
//! - the **evaluator** decides whether a held role set satisfies a feature.
//!
//! Everything here is deterministic, total, and free of I/O.

pub mod aggregate;
pub mod evaluate;

pub use aggregate::{apply_toggle, features_enabled, roles_for_features};
pub use evaluate::{enabled_count, is_allowed, is_allowed_any};
