//! Feature-set to role-set aggregation.
//!
//! The profile editor never diffs role lists when a checkbox is toggled: it
//! recomputes the full role set from the surviving feature set. That is what
//! keeps roles shared between two features alive when only one of them is
//! turned off.

use commerceadmin_catalog::{Feature, RoleSet};

use crate::evaluate::is_allowed;

/// Union of every feature's required roles.
///
/// Commutative and deterministic; a union-homomorphism over feature sets:
/// `roles_for_features(F1 ∪ F2) == roles_for_features(F1) ∪ roles_for_features(F2)`.
pub fn roles_for_features<'a>(features: impl IntoIterator<Item = &'a Feature>) -> RoleSet {
    let mut roles = RoleSet::default();
    for feature in features {
        roles.merge(feature.required());
    }
    roles
}

/// Exactly those candidates whose requirement is a subset of `held`.
///
/// Inverse of [`roles_for_features`] in the sense used by the editor: it
/// recovers the enabled-feature set from a profile's persisted roles.
pub fn features_enabled<'a>(
    held: &RoleSet,
    candidates: impl IntoIterator<Item = &'a Feature>,
) -> Vec<&'a Feature> {
    candidates
        .into_iter()
        .filter(|feature| is_allowed(held, feature))
        .collect()
}

/// Compute the role set after toggling `feature` on or off.
///
/// The result depends only on the resulting feature set, never on toggle
/// history: the toggled feature is removed from `current`, re-added when
/// `turn_on`, and the role set is recomputed from the survivors. Toggling a
/// feature that is already in the requested state is a no-op.
pub fn apply_toggle<'a>(
    current: impl IntoIterator<Item = &'a Feature>,
    feature: &'a Feature,
    turn_on: bool,
) -> RoleSet {
    let mut surviving: Vec<&Feature> = current
        .into_iter()
        .filter(|enabled| enabled.id() != feature.id())
        .collect();
    if turn_on {
        surviving.push(feature);
    }
    roles_for_features(surviving)
}
