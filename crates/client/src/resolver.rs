//! Fan-out orchestration feeding the inheritance resolver.
//!
//! The resolver itself is pure; this module performs the fixed fan-out of
//! independent reads it needs (profiles, companies, user groups), joins
//! them, and only then resolves. A failure in any branch aborts the whole
//! resolution: resolving with partial party data would mis-render inherited
//! assignments as unassigned.

use tracing::{debug, instrument, warn};

use commerceadmin_assignments::{
    applies_at_level, resolve_rows, Buyer, BuyerUserGroup, RelatedParties, ResolvedRow,
    SecurityProfile, SecurityProfileAssignment, Supplier, SupplierUserGroup, UserGroup,
};
use commerceadmin_core::{
    AssignmentLevel, BuyerId, CommerceRole, DomainError, DomainResult, SupplierId, UserId,
};

use crate::contracts::{AdminDataClient, AssignmentQuery};

/// A principal's full assignment scope: every assignment naming the target
/// user, any group the user belongs to, and the owning company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalAssignments {
    pub commerce_role: CommerceRole,
    pub assignments: Vec<SecurityProfileAssignment>,
}

impl PrincipalAssignments {
    pub fn new(
        commerce_role: CommerceRole,
        assignments: Vec<SecurityProfileAssignment>,
    ) -> Self {
        Self {
            commerce_role,
            assignments,
        }
    }

    fn at_level(&self, level: AssignmentLevel) -> impl Iterator<Item = &SecurityProfileAssignment> {
        self.assignments
            .iter()
            .filter(move |assignment| applies_at_level(assignment, level, self.commerce_role))
    }
}

/// Fetch the assignment scope for one user via the typed list contract.
pub async fn load_user_scope<C: AdminDataClient>(
    client: &C,
    user_id: &UserId,
    commerce_role: CommerceRole,
) -> DomainResult<PrincipalAssignments> {
    let query = AssignmentQuery::for_user(user_id.clone()).with_commerce_role(commerce_role);
    let assignments = client
        .list_assignments(&query)
        .await
        .map_err(|err| DomainError::upstream("list_assignments", err.to_string()))?;
    Ok(PrincipalAssignments::new(commerce_role, assignments))
}

/// Resolve a principal's assignments into sorted direct/inherited rows.
///
/// Runs the related-data fan-out concurrently, joins, then hands the
/// complete [`RelatedParties`] to the pure resolver. Branch failures come
/// back as [`DomainError::UpstreamFetch`] naming the branch.
#[instrument(skip(client, principal), fields(commerce_role = %principal.commerce_role, level = %requested_level))]
pub async fn resolve_assignment_rows<C: AdminDataClient>(
    client: &C,
    principal: &PrincipalAssignments,
    requested_level: AssignmentLevel,
) -> DomainResult<Vec<ResolvedRow>> {
    let (profiles, buyers, suppliers, buyer_user_groups, supplier_user_groups, admin_user_groups) =
        tokio::try_join!(
            fetch_profiles(client),
            fetch_buyers(client, principal),
            fetch_suppliers(client, principal),
            fetch_buyer_user_groups(client, principal),
            fetch_supplier_user_groups(client, principal),
            fetch_admin_user_groups(client, principal),
        )?;

    debug!(
        profiles = profiles.len(),
        buyers = buyers.len(),
        suppliers = suppliers.len(),
        buyer_user_groups = buyer_user_groups.len(),
        supplier_user_groups = supplier_user_groups.len(),
        admin_user_groups = admin_user_groups.len(),
        "related-data fan-out complete"
    );

    let related = RelatedParties {
        profiles,
        buyers,
        suppliers,
        buyer_user_groups,
        supplier_user_groups,
        admin_user_groups,
    };

    Ok(resolve_rows(
        &principal.assignments,
        requested_level,
        principal.commerce_role,
        &related,
    ))
}

async fn fetch_profiles<C: AdminDataClient>(client: &C) -> DomainResult<Vec<SecurityProfile>> {
    client
        .list_security_profiles()
        .await
        .map_err(|err| DomainError::upstream("list_security_profiles", err.to_string()))
}

async fn fetch_buyers<C: AdminDataClient>(
    client: &C,
    principal: &PrincipalAssignments,
) -> DomainResult<Vec<Buyer>> {
    if principal.commerce_role != CommerceRole::Buyer {
        return Ok(Vec::new());
    }
    let mut ids: Vec<BuyerId> = Vec::new();
    for assignment in principal.at_level(AssignmentLevel::Company) {
        if let Some(id) = &assignment.buyer_id {
            if !ids.contains(id) {
                ids.push(id.clone());
            }
        }
    }
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    client
        .list_buyers(&ids)
        .await
        .map_err(|err| DomainError::upstream("list_buyers", err.to_string()))
}

async fn fetch_suppliers<C: AdminDataClient>(
    client: &C,
    principal: &PrincipalAssignments,
) -> DomainResult<Vec<Supplier>> {
    if principal.commerce_role != CommerceRole::Supplier {
        return Ok(Vec::new());
    }
    let mut ids: Vec<SupplierId> = Vec::new();
    for assignment in principal.at_level(AssignmentLevel::Company) {
        if let Some(id) = &assignment.supplier_id {
            if !ids.contains(id) {
                ids.push(id.clone());
            }
        }
    }
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    client
        .list_suppliers(&ids)
        .await
        .map_err(|err| DomainError::upstream("list_suppliers", err.to_string()))
}

async fn fetch_buyer_user_groups<C: AdminDataClient>(
    client: &C,
    principal: &PrincipalAssignments,
) -> DomainResult<Vec<BuyerUserGroup>> {
    if principal.commerce_role != CommerceRole::Buyer {
        return Ok(Vec::new());
    }
    let mut groups = Vec::new();
    for assignment in principal.at_level(AssignmentLevel::Group) {
        let Some(group_id) = &assignment.user_group_id else {
            continue;
        };
        let Some(buyer_id) = &assignment.buyer_id else {
            warn!(
                group_id = %group_id,
                "buyer group assignment is missing its parent buyer; skipping party lookup"
            );
            continue;
        };
        let group = client
            .get_buyer_user_group(buyer_id, group_id)
            .await
            .map_err(|err| DomainError::upstream("get_buyer_user_group", err.to_string()))?;
        groups.push(BuyerUserGroup {
            group,
            buyer_id: buyer_id.clone(),
        });
    }
    Ok(groups)
}

async fn fetch_supplier_user_groups<C: AdminDataClient>(
    client: &C,
    principal: &PrincipalAssignments,
) -> DomainResult<Vec<SupplierUserGroup>> {
    if principal.commerce_role != CommerceRole::Supplier {
        return Ok(Vec::new());
    }
    let mut groups = Vec::new();
    for assignment in principal.at_level(AssignmentLevel::Group) {
        let Some(group_id) = &assignment.user_group_id else {
            continue;
        };
        let Some(supplier_id) = &assignment.supplier_id else {
            warn!(
                group_id = %group_id,
                "supplier group assignment is missing its parent supplier; skipping party lookup"
            );
            continue;
        };
        let group = client
            .get_supplier_user_group(supplier_id, group_id)
            .await
            .map_err(|err| DomainError::upstream("get_supplier_user_group", err.to_string()))?;
        groups.push(SupplierUserGroup {
            group,
            supplier_id: supplier_id.clone(),
        });
    }
    Ok(groups)
}

async fn fetch_admin_user_groups<C: AdminDataClient>(
    client: &C,
    principal: &PrincipalAssignments,
) -> DomainResult<Vec<UserGroup>> {
    if principal.commerce_role != CommerceRole::Admin {
        return Ok(Vec::new());
    }
    let mut groups = Vec::new();
    for assignment in principal.at_level(AssignmentLevel::Group) {
        let Some(group_id) = &assignment.user_group_id else {
            continue;
        };
        let group = client
            .get_admin_user_group(group_id)
            .await
            .map_err(|err| DomainError::upstream("get_admin_user_group", err.to_string()))?;
        groups.push(group);
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use commerceadmin_assignments::CompanyContext;
    use commerceadmin_core::UserGroupId;

    /// In-memory collaborator; `fail_branch` makes one read contract error.
    #[derive(Default)]
    struct StubClient {
        profiles: Vec<SecurityProfile>,
        assignments: Vec<SecurityProfileAssignment>,
        buyers: Vec<Buyer>,
        suppliers: Vec<Supplier>,
        groups: Vec<UserGroup>,
        fail_branch: Option<&'static str>,
    }

    impl StubClient {
        fn fail_if(&self, branch: &'static str) -> DomainResult<()> {
            if self.fail_branch == Some(branch) {
                return Err(DomainError::upstream(branch, "stubbed outage"));
            }
            Ok(())
        }

        fn group(&self, group_id: &UserGroupId) -> DomainResult<UserGroup> {
            self.groups
                .iter()
                .find(|g| &g.id == group_id)
                .cloned()
                .ok_or_else(|| DomainError::not_found(format!("user group '{group_id}'")))
        }
    }

    #[async_trait::async_trait]
    impl AdminDataClient for StubClient {
        async fn list_security_profiles(&self) -> DomainResult<Vec<SecurityProfile>> {
            self.fail_if("profiles")?;
            Ok(self.profiles.clone())
        }

        async fn list_assignments(
            &self,
            query: &AssignmentQuery,
        ) -> DomainResult<Vec<SecurityProfileAssignment>> {
            self.fail_if("assignments")?;
            let mut out = self.assignments.clone();
            if let Some(user_id) = &query.user_id {
                out.retain(|a| a.user_id.is_none() || a.user_id.as_ref() == Some(user_id));
            }
            Ok(out)
        }

        async fn list_buyers(&self, ids: &[BuyerId]) -> DomainResult<Vec<Buyer>> {
            self.fail_if("buyers")?;
            Ok(self
                .buyers
                .iter()
                .filter(|b| ids.contains(&b.id))
                .cloned()
                .collect())
        }

        async fn list_suppliers(&self, ids: &[SupplierId]) -> DomainResult<Vec<Supplier>> {
            self.fail_if("suppliers")?;
            Ok(self
                .suppliers
                .iter()
                .filter(|s| ids.contains(&s.id))
                .cloned()
                .collect())
        }

        async fn get_buyer_user_group(
            &self,
            _buyer_id: &BuyerId,
            group_id: &UserGroupId,
        ) -> DomainResult<UserGroup> {
            self.fail_if("buyer_user_groups")?;
            self.group(group_id)
        }

        async fn get_supplier_user_group(
            &self,
            _supplier_id: &SupplierId,
            group_id: &UserGroupId,
        ) -> DomainResult<UserGroup> {
            self.fail_if("supplier_user_groups")?;
            self.group(group_id)
        }

        async fn get_admin_user_group(&self, group_id: &UserGroupId) -> DomainResult<UserGroup> {
            self.fail_if("admin_user_groups")?;
            self.group(group_id)
        }

        async fn save_assignment(
            &self,
            _assignment: &SecurityProfileAssignment,
        ) -> DomainResult<()> {
            self.fail_if("save")?;
            Ok(())
        }
    }

    fn profile(id: &str, name: &str) -> SecurityProfile {
        SecurityProfile::new(id, name, [], [])
    }

    #[tokio::test]
    async fn resolves_buyer_scope_with_inherited_group_and_company() {
        let client = StubClient {
            profiles: vec![profile("P1", "Catalog Staff"), profile("P2", "Order Staff")],
            buyers: vec![Buyer {
                id: BuyerId::new("B1"),
                name: "Northwind".to_string(),
            }],
            groups: vec![UserGroup {
                id: UserGroupId::new("G1"),
                name: "East".to_string(),
            }],
            ..StubClient::default()
        };

        let principal = PrincipalAssignments::new(
            CommerceRole::Buyer,
            vec![
                SecurityProfileAssignment::for_user(
                    "P1",
                    "U1",
                    CompanyContext::Buyer(BuyerId::new("B1")),
                ),
                SecurityProfileAssignment::for_group(
                    "P1",
                    "G1",
                    CompanyContext::Buyer(BuyerId::new("B1")),
                ),
                SecurityProfileAssignment::for_company(
                    "P2",
                    CompanyContext::Buyer(BuyerId::new("B1")),
                ),
            ],
        );

        let rows = resolve_assignment_rows(&client, &principal, AssignmentLevel::User)
            .await
            .unwrap();

        // P1 direct + P1 inherited-via-group + P2 inherited-via-company,
        // plus the seeded unassigned direct row for P2.
        assert_eq!(rows.len(), 4);

        let p1_inherited = rows
            .iter()
            .find(|r| {
                r.is_inherited
                    && r.security_profile.as_ref().map(|p| p.id.as_str()) == Some("P1")
            })
            .unwrap();
        assert_eq!(p1_inherited.inherited_parties.buyer_user_groups.len(), 1);
        assert_eq!(
            p1_inherited.inherited_parties.buyer_user_groups[0].group.name,
            "East"
        );

        let p2_inherited = rows
            .iter()
            .find(|r| {
                r.is_inherited
                    && r.security_profile.as_ref().map(|p| p.id.as_str()) == Some("P2")
            })
            .unwrap();
        assert_eq!(
            p2_inherited
                .inherited_parties
                .buyer
                .as_ref()
                .map(|b| b.name.as_str()),
            Some("Northwind")
        );
    }

    #[tokio::test]
    async fn failing_branch_aborts_whole_resolution() {
        let client = StubClient {
            profiles: vec![profile("P1", "Alpha")],
            suppliers: vec![Supplier {
                id: SupplierId::new("S1"),
                name: "Acme".to_string(),
            }],
            fail_branch: Some("suppliers"),
            ..StubClient::default()
        };

        let principal = PrincipalAssignments::new(
            CommerceRole::Supplier,
            vec![SecurityProfileAssignment::for_company(
                "P1",
                CompanyContext::Supplier(SupplierId::new("S1")),
            )],
        );

        let err = resolve_assignment_rows(&client, &principal, AssignmentLevel::User)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::UpstreamFetch { ref branch, .. } if branch == "list_suppliers"
        ));
    }

    #[tokio::test]
    async fn irrelevant_branches_are_skipped_for_admin_scope() {
        let client = StubClient {
            profiles: vec![profile("P1", "Alpha")],
            groups: vec![UserGroup {
                id: UserGroupId::new("AG1"),
                name: "Support".to_string(),
            }],
            // Buyer/supplier branches would fail if called.
            fail_branch: Some("buyers"),
            ..StubClient::default()
        };

        let principal = PrincipalAssignments::new(
            CommerceRole::Admin,
            vec![SecurityProfileAssignment::for_group(
                "P1",
                "AG1",
                CompanyContext::Admin,
            )],
        );

        let rows = resolve_assignment_rows(&client, &principal, AssignmentLevel::User)
            .await
            .unwrap();
        let inherited = rows.iter().find(|r| r.is_inherited).unwrap();
        assert_eq!(inherited.inherited_parties.admin_user_groups.len(), 1);
    }

    #[tokio::test]
    async fn load_user_scope_uses_typed_query() {
        let client = StubClient {
            assignments: vec![
                SecurityProfileAssignment::for_user("P1", "U1", CompanyContext::Admin),
                SecurityProfileAssignment::for_user("P1", "U2", CompanyContext::Admin),
                SecurityProfileAssignment::for_company("P2", CompanyContext::Admin),
            ],
            ..StubClient::default()
        };

        let scope = load_user_scope(&client, &UserId::new("U1"), CommerceRole::Admin)
            .await
            .unwrap();
        assert_eq!(scope.assignments.len(), 2);
    }
}
