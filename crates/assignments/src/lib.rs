//! `commerceadmin-assignments` — security-profile assignment model.
//!
//! Holds the assignment records themselves, the single-source-of-truth
//! level classifier, and the pure inheritance resolver that turns a
//! principal's assignment list into annotated direct/inherited rows.

pub mod assignment;
pub mod classify;
pub mod party;
pub mod profile;
pub mod resolve;

pub use assignment::{CompanyContext, SecurityProfileAssignment};
pub use classify::{applies_at_level, classified_level};
pub use party::{Buyer, BuyerUserGroup, Supplier, SupplierUserGroup, UserGroup};
pub use profile::SecurityProfile;
pub use resolve::{resolve_rows, InheritedParties, RelatedParties, ResolvedRow};
