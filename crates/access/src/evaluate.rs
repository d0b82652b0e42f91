//! Pass/fail access decisions for features.

use commerceadmin_catalog::{Feature, RoleSet};

/// True iff every API role AND every custom role the feature requires is
/// present in `held`. Extra held roles are ignored; when a feature names both
/// role kinds, both must be satisfied simultaneously.
///
/// - No IO
/// - No panics
/// - Monotonic: adding roles to `held` never turns a true result false
pub fn is_allowed(held: &RoleSet, feature: &Feature) -> bool {
    held.contains_all(feature.required())
}

/// Any-of check: true iff [`is_allowed`] holds for at least one feature.
///
/// Used to gate UI regions that should appear when the principal has any of
/// several equivalent permissions (e.g. Viewer OR Manager).
pub fn is_allowed_any<'a>(
    held: &RoleSet,
    features: impl IntoIterator<Item = &'a Feature>,
) -> bool {
    features.into_iter().any(|feature| is_allowed(held, feature))
}

/// How many of `features` the held role set satisfies ("3 of 8 enabled").
pub fn enabled_count<'a>(
    held: &RoleSet,
    features: impl IntoIterator<Item = &'a Feature>,
) -> usize {
    features
        .into_iter()
        .filter(|feature| is_allowed(held, feature))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use commerceadmin_catalog::{ApiRole, Catalog, CustomRole, FeatureId};

    fn held(api: &[&'static str], custom: &[&'static str]) -> RoleSet {
        RoleSet::new(
            api.iter().map(|r| ApiRole::new(*r)),
            custom.iter().map(|r| CustomRole::new(*r)),
        )
    }

    #[test]
    fn product_viewer_requires_full_role_list() {
        let catalog = Catalog::standard();
        let feature = catalog.lookup(&FeatureId::new("ProductViewer")).unwrap();

        // Exactly the required roles plus an unrelated one passes.
        let mut roles = feature.required().clone();
        roles.api_roles.insert(ApiRole::new("ShipmentReader"));
        assert!(is_allowed(&roles, feature));

        // Missing PriceScheduleReader fails.
        let mut missing = roles.clone();
        missing.api_roles.remove(&ApiRole::new("PriceScheduleReader"));
        assert!(!is_allowed(&missing, feature));
    }

    #[test]
    fn both_role_kinds_are_required() {
        let catalog = Catalog::standard();
        let feature = catalog.lookup(&FeatureId::new("PromotionViewer")).unwrap();

        assert!(!is_allowed(&held(&["PromotionReader"], &[]), feature));
        assert!(!is_allowed(&held(&[], &["PromotionViewer"]), feature));
        assert!(is_allowed(&held(&["PromotionReader"], &["PromotionViewer"]), feature));
    }

    #[test]
    fn any_of_gates_viewer_or_manager() {
        let catalog = Catalog::standard();
        let viewer = catalog.lookup(&FeatureId::new("PromotionViewer")).unwrap();
        let manager = catalog.lookup(&FeatureId::new("PromotionManager")).unwrap();

        let held_viewer = held(&["PromotionReader"], &["PromotionViewer"]);
        assert!(is_allowed_any(&held_viewer, [viewer, manager]));

        let held_nothing = held(&["OrderReader"], &[]);
        assert!(!is_allowed_any(&held_nothing, [viewer, manager]));
    }

    #[test]
    fn enabled_count_for_summary_badge() {
        let catalog = Catalog::standard();
        let viewer = catalog.lookup(&FeatureId::new("PromotionViewer")).unwrap();
        let manager = catalog.lookup(&FeatureId::new("PromotionManager")).unwrap();

        let held_viewer = held(&["PromotionReader"], &["PromotionViewer"]);
        assert_eq!(enabled_count(&held_viewer, [viewer, manager]), 1);
        assert_eq!(enabled_count(&RoleSet::default(), [viewer, manager]), 0);
    }
}
