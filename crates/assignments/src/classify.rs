//! Assignment-level classification.
//!
//! Single source of truth for "does this assignment apply at level L for
//! commerce role R". The inheritance resolver and the profile editor both
//! route through here; re-deriving the conditions per call site is exactly
//! the drift hazard this module exists to remove.

use commerceadmin_core::{AssignmentLevel, CommerceRole};

use crate::assignment::SecurityProfileAssignment;

/// Whether `assignment` applies *at* `level` for the given commerce role.
///
/// Company-level shape differs by commerce role: buyer/supplier assignments
/// are scoped to a parent company id, admin (seller) assignments have no
/// parent at all.
pub fn applies_at_level(
    assignment: &SecurityProfileAssignment,
    level: AssignmentLevel,
    commerce_role: CommerceRole,
) -> bool {
    match level {
        AssignmentLevel::User => assignment.user_id.is_some(),
        AssignmentLevel::Group => assignment.user_group_id.is_some(),
        AssignmentLevel::Company => {
            if assignment.user_id.is_some() || assignment.user_group_id.is_some() {
                return false;
            }
            match commerce_role {
                CommerceRole::Buyer => assignment.buyer_id.is_some(),
                CommerceRole::Supplier => assignment.supplier_id.is_some(),
                CommerceRole::Admin => {
                    assignment.buyer_id.is_none() && assignment.supplier_id.is_none()
                }
            }
        }
    }
}

/// The single level a well-formed assignment applies at, if any.
///
/// Returns `None` for shapes that do not belong to `commerce_role` at all
/// (e.g. a buyer-scoped bare-company record classified under the admin role).
pub fn classified_level(
    assignment: &SecurityProfileAssignment,
    commerce_role: CommerceRole,
) -> Option<AssignmentLevel> {
    AssignmentLevel::ALL
        .into_iter()
        .find(|&level| applies_at_level(assignment, level, commerce_role))
}
