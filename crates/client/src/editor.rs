//! Profile-editor flow: feature toggles, summary badges, persistence.

use tracing::instrument;

use commerceadmin_access::{apply_toggle, enabled_count, features_enabled};
use commerceadmin_assignments::{SecurityProfile, SecurityProfileAssignment};
use commerceadmin_catalog::{Catalog, Feature, PrincipalUserType, RoleSet};
use commerceadmin_core::DomainResult;

use crate::contracts::AdminDataClient;

/// Badge data rendered per profile ("4 features, 12 roles, 4 custom roles").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSummary {
    pub enabled_features: usize,
    pub api_roles: usize,
    pub custom_roles: usize,
}

/// The role set to persist after an admin toggles a feature checkbox.
///
/// Derives the currently enabled feature set from the profile's stored
/// roles, applies the toggle, and recomputes the full role set from the
/// surviving features. The result depends only on the final feature set,
/// not on the order of clicks.
pub fn toggle_feature(
    profile: &SecurityProfile,
    feature: &Feature,
    turn_on: bool,
    catalog: &Catalog,
) -> RoleSet {
    let held = profile.role_set();
    let enabled = features_enabled(&held, catalog.all());
    apply_toggle(enabled, feature, turn_on)
}

/// Counts for the profile's summary badge.
pub fn profile_summary(profile: &SecurityProfile, catalog: &Catalog) -> ProfileSummary {
    let held = profile.role_set();
    ProfileSummary {
        enabled_features: enabled_count(&held, catalog.all()),
        api_roles: profile.roles.len(),
        custom_roles: profile.custom_roles.len(),
    }
}

/// The catalog entries a given principal side may be offered at all.
pub fn eligible_features(
    catalog: &Catalog,
    user_type: PrincipalUserType,
) -> Vec<&Feature> {
    catalog
        .all()
        .iter()
        .filter(|feature| feature.allows(user_type))
        .collect()
}

/// Persist a new assignment through the external write contract.
///
/// A `WriteConflict` from the collaborator is surfaced unmodified: resolving
/// it needs user intervention, not an automatic merge or retry.
#[instrument(skip(client, assignment), fields(profile_id = %assignment.security_profile_id))]
pub async fn assign_profile<C: AdminDataClient>(
    client: &C,
    assignment: &SecurityProfileAssignment,
) -> DomainResult<()> {
    assignment.validate()?;
    client.save_assignment(assignment).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use commerceadmin_assignments::{Buyer, CompanyContext, Supplier, UserGroup};
    use commerceadmin_catalog::FeatureId;
    use commerceadmin_core::{
        BuyerId, DomainError, SupplierId, UserGroupId,
    };

    use crate::contracts::AssignmentQuery;

    fn profile_with_features(catalog: &Catalog, ids: &[&str]) -> SecurityProfile {
        let features: Vec<&Feature> = ids
            .iter()
            .map(|id| catalog.lookup(&FeatureId::new(id.to_string())).unwrap())
            .collect();
        let roles = commerceadmin_access::roles_for_features(features);
        SecurityProfile::new("SP1", "Editor", roles.api_roles, roles.custom_roles)
    }

    #[test]
    fn toggling_off_preserves_roles_shared_with_other_features() {
        let catalog = Catalog::standard();
        // OrderViewer and ProductViewer both require SupplierAddressReader.
        let profile = profile_with_features(&catalog, &["OrderViewer", "ProductViewer"]);
        let order_viewer = catalog.lookup(&FeatureId::new("OrderViewer")).unwrap();

        let roles = toggle_feature(&profile, order_viewer, false, &catalog);

        let shared = commerceadmin_catalog::ApiRole::new("SupplierAddressReader");
        let order_only = commerceadmin_catalog::ApiRole::new("ShipmentReader");
        assert!(roles.api_roles.contains(&shared));
        assert!(!roles.api_roles.contains(&order_only));
        assert!(!roles
            .custom_roles
            .contains(&commerceadmin_catalog::CustomRole::new("OrderViewer")));
    }

    #[test]
    fn toggling_on_adds_exactly_the_new_requirement() {
        let catalog = Catalog::standard();
        let profile = profile_with_features(&catalog, &["PromotionViewer"]);
        let manager = catalog.lookup(&FeatureId::new("PromotionManager")).unwrap();

        let roles = toggle_feature(&profile, manager, true, &catalog);

        assert!(roles
            .api_roles
            .contains(&commerceadmin_catalog::ApiRole::new("PromotionAdmin")));
        // Still holds the viewer requirement.
        assert!(roles
            .api_roles
            .contains(&commerceadmin_catalog::ApiRole::new("PromotionReader")));
    }

    #[test]
    fn summary_counts_enabled_features_and_roles() {
        let catalog = Catalog::standard();
        let profile = profile_with_features(&catalog, &["PromotionViewer", "PromotionManager"]);

        let summary = profile_summary(&profile, &catalog);

        assert_eq!(summary.enabled_features, 2);
        assert_eq!(summary.api_roles, profile.roles.len());
        assert_eq!(summary.custom_roles, 2);
    }

    #[test]
    fn supplier_side_editor_sees_only_supplier_features() {
        let catalog = Catalog::standard();
        let features = eligible_features(&catalog, PrincipalUserType::Supplier);

        assert!(features.iter().all(|f| f.allows(PrincipalUserType::Supplier)));
        assert!(features.iter().any(|f| f.id().as_str() == "ProductViewer"));
        assert!(!features.iter().any(|f| f.id().as_str() == "BuyerManager"));
    }

    struct ConflictingClient;

    #[async_trait]
    impl AdminDataClient for ConflictingClient {
        async fn list_security_profiles(&self) -> DomainResult<Vec<SecurityProfile>> {
            Ok(Vec::new())
        }

        async fn list_assignments(
            &self,
            _query: &AssignmentQuery,
        ) -> DomainResult<Vec<SecurityProfileAssignment>> {
            Ok(Vec::new())
        }

        async fn list_buyers(&self, _ids: &[BuyerId]) -> DomainResult<Vec<Buyer>> {
            Ok(Vec::new())
        }

        async fn list_suppliers(&self, _ids: &[SupplierId]) -> DomainResult<Vec<Supplier>> {
            Ok(Vec::new())
        }

        async fn get_buyer_user_group(
            &self,
            _buyer_id: &BuyerId,
            group_id: &UserGroupId,
        ) -> DomainResult<UserGroup> {
            Err(DomainError::not_found(format!("user group '{group_id}'")))
        }

        async fn get_supplier_user_group(
            &self,
            _supplier_id: &SupplierId,
            group_id: &UserGroupId,
        ) -> DomainResult<UserGroup> {
            Err(DomainError::not_found(format!("user group '{group_id}'")))
        }

        async fn get_admin_user_group(
            &self,
            group_id: &UserGroupId,
        ) -> DomainResult<UserGroup> {
            Err(DomainError::not_found(format!("user group '{group_id}'")))
        }

        async fn save_assignment(
            &self,
            _assignment: &SecurityProfileAssignment,
        ) -> DomainResult<()> {
            Err(DomainError::conflict("assignment already exists"))
        }
    }

    #[tokio::test]
    async fn write_conflict_is_surfaced_unmodified() {
        let assignment =
            SecurityProfileAssignment::for_company("P1", CompanyContext::Admin);

        let err = assign_profile(&ConflictingClient, &assignment)
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::conflict("assignment already exists"));
    }
}
