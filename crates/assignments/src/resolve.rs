//! Inheritance resolution over a principal's assignment list.
//!
//! Partitions assignments into "directly assigned at the requested level"
//! versus "inherited from another level", and annotates each row with the
//! concrete party (which group, which company) the inherited assignment came
//! through. An assignment anchored at any level other than the requested one
//! counts as inherited; records are level-exclusive by construction, so no
//! directional ordering is applied.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::warn;

use commerceadmin_core::{AssignmentLevel, CommerceRole, SecurityProfileId};

use crate::assignment::SecurityProfileAssignment;
use crate::classify::applies_at_level;
use crate::party::{Buyer, BuyerUserGroup, Supplier, SupplierUserGroup, UserGroup};
use crate::profile::SecurityProfile;

/// Joined result of the related-data fan-out: every lookup table the
/// resolver needs. Must be complete before resolution starts; a missing
/// party table would mis-render inherited rows as unassigned.
#[derive(Debug, Clone, Default)]
pub struct RelatedParties {
    pub profiles: Vec<SecurityProfile>,
    pub buyers: Vec<Buyer>,
    pub suppliers: Vec<Supplier>,
    pub buyer_user_groups: Vec<BuyerUserGroup>,
    pub supplier_user_groups: Vec<SupplierUserGroup>,
    pub admin_user_groups: Vec<UserGroup>,
}

/// The concrete parties an assignment row was granted through, deduplicated
/// by party identity (group id + parent company id, company id, or the
/// admin-company flag).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InheritedParties {
    pub buyer: Option<Buyer>,
    pub supplier: Option<Supplier>,
    pub admin: bool,
    pub buyer_user_groups: Vec<BuyerUserGroup>,
    pub supplier_user_groups: Vec<SupplierUserGroup>,
    pub admin_user_groups: Vec<UserGroup>,
}

/// One row of the assignment view.
///
/// A security profile appears at most twice in a resolution: once direct
/// (`is_inherited == false`) and once inherited. `security_profile == None`
/// marks a dangling assignment referencing a deleted profile; it stays
/// visible rather than being dropped. `is_assigned == false` rows are
/// profiles known to the tenant but unassigned, listed so the UI can offer
/// them for assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRow {
    pub security_profile: Option<SecurityProfile>,
    pub assignments: Vec<SecurityProfileAssignment>,
    pub is_inherited: bool,
    pub is_assigned: bool,
    pub inherited_parties: InheritedParties,
}

struct RowBuild {
    profile_id: SecurityProfileId,
    row: ResolvedRow,
}

/// Resolve a principal's assignments into sorted view rows.
///
/// Steps:
/// 1. seed one unassigned row per known profile,
/// 2. classify each assignment against the requested level,
/// 3. fold it into the row keyed by `(profile_id, is_inherited)`,
/// 4. sort by profile name (ordinal, ascending), dangling rows last.
pub fn resolve_rows(
    assignments: &[SecurityProfileAssignment],
    requested_level: AssignmentLevel,
    commerce_role: CommerceRole,
    related: &RelatedParties,
) -> Vec<ResolvedRow> {
    let mut builds: Vec<RowBuild> = related
        .profiles
        .iter()
        .map(|profile| RowBuild {
            profile_id: profile.id.clone(),
            row: ResolvedRow {
                security_profile: Some(profile.clone()),
                assignments: Vec::new(),
                is_inherited: false,
                is_assigned: false,
                inherited_parties: InheritedParties::default(),
            },
        })
        .collect();

    for assignment in assignments {
        let is_inherited = !applies_at_level(assignment, requested_level, commerce_role);

        let existing = builds.iter_mut().find(|build| {
            build.profile_id == assignment.security_profile_id
                && build.row.is_inherited == is_inherited
        });

        match existing {
            Some(build) => {
                build.row.assignments.push(assignment.clone());
                build.row.is_assigned = true;
                merge_inherited_parties(
                    assignment,
                    &mut build.row.inherited_parties,
                    commerce_role,
                    related,
                );
            }
            None => {
                let profile = related
                    .profiles
                    .iter()
                    .find(|profile| profile.id == assignment.security_profile_id)
                    .cloned();
                if profile.is_none() {
                    warn!(
                        profile_id = %assignment.security_profile_id,
                        "assignment references an unknown security profile"
                    );
                }

                let mut parties = InheritedParties::default();
                merge_inherited_parties(assignment, &mut parties, commerce_role, related);

                builds.push(RowBuild {
                    profile_id: assignment.security_profile_id.clone(),
                    row: ResolvedRow {
                        security_profile: profile,
                        assignments: vec![assignment.clone()],
                        is_inherited,
                        is_assigned: true,
                        inherited_parties: parties,
                    },
                });
            }
        }
    }

    let mut rows: Vec<ResolvedRow> = builds.into_iter().map(|build| build.row).collect();
    rows.sort_by(|a, b| match (&a.security_profile, &b.security_profile) {
        (Some(left), Some(right)) => left.name.cmp(&right.name),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    rows
}

/// Attach the concrete party an assignment was anchored at.
///
/// Company-level assignments resolve to their buyer/supplier record (or the
/// admin-company flag); group-level assignments append the resolved group,
/// keyed by group id plus parent company id so duplicate assignments to the
/// same party collapse. User-level assignments carry no party.
fn merge_inherited_parties(
    assignment: &SecurityProfileAssignment,
    parties: &mut InheritedParties,
    commerce_role: CommerceRole,
    related: &RelatedParties,
) {
    if applies_at_level(assignment, AssignmentLevel::Company, commerce_role) {
        match commerce_role {
            CommerceRole::Buyer => {
                parties.buyer = related
                    .buyers
                    .iter()
                    .find(|buyer| Some(&buyer.id) == assignment.buyer_id.as_ref())
                    .cloned();
            }
            CommerceRole::Supplier => {
                parties.supplier = related
                    .suppliers
                    .iter()
                    .find(|supplier| Some(&supplier.id) == assignment.supplier_id.as_ref())
                    .cloned();
            }
            CommerceRole::Admin => {
                parties.admin = true;
            }
        }
    } else if applies_at_level(assignment, AssignmentLevel::Group, commerce_role) {
        match commerce_role {
            CommerceRole::Buyer => {
                let additional = related.buyer_user_groups.iter().filter(|candidate| {
                    Some(&candidate.group.id) == assignment.user_group_id.as_ref()
                        && Some(&candidate.buyer_id) == assignment.buyer_id.as_ref()
                });
                for candidate in additional {
                    let already = parties.buyer_user_groups.iter().any(|existing| {
                        existing.group.id == candidate.group.id
                            && existing.buyer_id == candidate.buyer_id
                    });
                    if !already {
                        parties.buyer_user_groups.push(candidate.clone());
                    }
                }
            }
            CommerceRole::Supplier => {
                let additional = related.supplier_user_groups.iter().filter(|candidate| {
                    Some(&candidate.group.id) == assignment.user_group_id.as_ref()
                        && Some(&candidate.supplier_id) == assignment.supplier_id.as_ref()
                });
                for candidate in additional {
                    let already = parties.supplier_user_groups.iter().any(|existing| {
                        existing.group.id == candidate.group.id
                            && existing.supplier_id == candidate.supplier_id
                    });
                    if !already {
                        parties.supplier_user_groups.push(candidate.clone());
                    }
                }
            }
            CommerceRole::Admin => {
                let additional = related
                    .admin_user_groups
                    .iter()
                    .filter(|candidate| Some(&candidate.id) == assignment.user_group_id.as_ref());
                for candidate in additional {
                    if !parties.admin_user_groups.iter().any(|existing| existing.id == candidate.id)
                    {
                        parties.admin_user_groups.push(candidate.clone());
                    }
                }
            }
        }
    }
}
