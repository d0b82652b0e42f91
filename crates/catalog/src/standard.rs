//! The production feature registry.
//!
//! Declarative data: one entry per console feature. Declaration order is the
//! display order, and the `group` tag drives the accordion sections in the
//! profile editor.

use crate::feature::{Feature, PrincipalUserType};
use crate::role::{ApiRole, CustomRole};

const SUPPLIER_AND_ADMIN: &[PrincipalUserType] =
    &[PrincipalUserType::Supplier, PrincipalUserType::Admin];
const ADMIN_ONLY: &[PrincipalUserType] = &[PrincipalUserType::Admin];

fn entry(
    id: &'static str,
    display_name: &'static str,
    description: &'static str,
    group: &'static str,
    api_roles: &'static [&'static str],
    custom_roles: &'static [&'static str],
    allowed: &'static [PrincipalUserType],
) -> Feature {
    Feature::new(
        id,
        display_name,
        description,
        group,
        api_roles.iter().map(|r| ApiRole::new(*r)),
        custom_roles.iter().map(|r| CustomRole::new(*r)),
        allowed.iter().copied(),
    )
}

pub(crate) fn standard_features() -> Vec<Feature> {
    vec![
        entry(
            "SuperAdmin",
            "Super Admin",
            "Can perform any action, use wisely",
            "Administration",
            &["FullAccess"],
            &["SuperAdmin"],
            ADMIN_ONLY,
        ),
        entry(
            "ProfileManager",
            "Profile Manager",
            "View, and manage my profile, notifications, and theme",
            "Profile",
            &["MeAdmin"],
            &["ProfileManager"],
            SUPPLIER_AND_ADMIN,
        ),
        entry(
            "DashboardViewer",
            "Dashboard Viewer",
            "View dashboard",
            "Dashboard",
            &["ProductReader", "OrderReader", "PromotionReader", "BuyerUserReader"],
            &["DashboardViewer"],
            SUPPLIER_AND_ADMIN,
        ),
        entry(
            "ProductViewer",
            "Product Viewer",
            "View products",
            "Products",
            &[
                "ProductReader",
                "PriceScheduleReader",
                "CatalogReader",
                "CategoryReader",
                "BuyerReader",
                "UserGroupReader",
                "AdminAddressReader",
                "SupplierAddressReader",
                "ProductFacetReader",
                "SupplierReader",
            ],
            &["ProductViewer"],
            SUPPLIER_AND_ADMIN,
        ),
        entry(
            "ProductManager",
            "Product Manager",
            "View, and manage products",
            "Products",
            &[
                "ProductAdmin",
                "PriceScheduleAdmin",
                "CatalogAdmin",
                "CategoryAdmin",
                "BuyerReader",
                "UserGroupReader",
                "AdminAddressReader",
                "SupplierAddressReader",
                "ProductFacetReader",
                "SupplierReader",
            ],
            &["ProductManager"],
            SUPPLIER_AND_ADMIN,
        ),
        entry(
            "PromotionViewer",
            "Promotion Viewer",
            "View promotions",
            "Promotions",
            &["PromotionReader"],
            &["PromotionViewer"],
            SUPPLIER_AND_ADMIN,
        ),
        entry(
            "PromotionManager",
            "Promotion Manager",
            "View, and manage promotions",
            "Promotions",
            &["PromotionAdmin"],
            &["PromotionManager"],
            SUPPLIER_AND_ADMIN,
        ),
        entry(
            "OrderViewer",
            "Order Viewer",
            "View orders, shipments, and order returns",
            "Orders",
            &["OrderReader", "ShipmentReader", "SupplierReader", "SupplierAddressReader"],
            &["OrderViewer"],
            SUPPLIER_AND_ADMIN,
        ),
        entry(
            "OrderManager",
            "Order Manager",
            "View and manage orders, shipments, and order returns",
            "Orders",
            &["OrderAdmin", "ShipmentAdmin", "SupplierReader", "SupplierAddressReader"],
            &["OrderManager"],
            SUPPLIER_AND_ADMIN,
        ),
        entry(
            "BuyerViewer",
            "Buyer Viewer",
            "View buyers",
            "Buyers",
            &["BuyerReader", "CatalogReader"],
            &["BuyerViewer"],
            ADMIN_ONLY,
        ),
        entry(
            "BuyerManager",
            "Buyer Manager",
            "View, and manage buyers",
            "Buyers",
            &["BuyerAdmin", "CatalogReader"],
            &["BuyerManager"],
            ADMIN_ONLY,
        ),
        entry(
            "BuyerUserViewer",
            "Buyer User Viewer",
            "View buyer users. This permission should be paired with either BuyerViewer or BuyerManager",
            "Buyers",
            &["BuyerUserReader"],
            &["BuyerUserViewer"],
            ADMIN_ONLY,
        ),
        entry(
            "BuyerUserManager",
            "Buyer User Manager",
            "View, and manage buyer users. This permission should be paired with either BuyerViewer or BuyerManager",
            "Buyers",
            &["BuyerUserAdmin"],
            &["BuyerUserManager"],
            ADMIN_ONLY,
        ),
        entry(
            "BuyerUserGroupViewer",
            "Buyer User Group Viewer",
            "View buyer user groups. This permission should be paired with either BuyerViewer or BuyerManager",
            "Buyers",
            &["UserGroupReader"],
            &["BuyerUserGroupViewer"],
            ADMIN_ONLY,
        ),
        entry(
            "BuyerUserGroupManager",
            "Buyer User Group Manager",
            "View, and manage buyer user groups. This permission should be paired with either BuyerViewer or BuyerManager",
            "Buyers",
            &["UserGroupAdmin"],
            &["BuyerUserGroupManager"],
            ADMIN_ONLY,
        ),
        entry(
            "BuyerCatalogViewer",
            "Catalog Viewer",
            "View catalogs. This permission should be paired with either BuyerViewer or BuyerManager",
            "Buyers",
            &["CatalogReader", "CategoryReader"],
            &["BuyerCatalogViewer"],
            ADMIN_ONLY,
        ),
        entry(
            "BuyerCatalogManager",
            "Catalog Manager",
            "View, and manage catalogs. This permission should be paired with either BuyerViewer or BuyerManager",
            "Buyers",
            &["CatalogAdmin", "CategoryAdmin"],
            &["BuyerCatalogManager"],
            ADMIN_ONLY,
        ),
        entry(
            "SupplierViewer",
            "Supplier Viewer",
            "View suppliers",
            "Suppliers",
            &["SupplierReader"],
            &["SupplierViewer"],
            SUPPLIER_AND_ADMIN,
        ),
        entry(
            "SupplierManager",
            "Supplier Manager",
            "View, and manage suppliers",
            "Suppliers",
            &["SupplierAdmin"],
            &["SupplierManager"],
            SUPPLIER_AND_ADMIN,
        ),
        entry(
            "SupplierPermissionViewer",
            "Supplier Permission Viewer",
            "View supplier permissions",
            "Suppliers",
            &["SecurityProfileReader"],
            &["SupplierPermissionViewer"],
            SUPPLIER_AND_ADMIN,
        ),
        entry(
            "SupplierPermissionManager",
            "Supplier Permission Manager",
            "View, and manage supplier permissions",
            "Suppliers",
            &["SecurityProfileAdmin"],
            &["SupplierPermissionManager"],
            SUPPLIER_AND_ADMIN,
        ),
        entry(
            "SupplierUserViewer",
            "Supplier User Viewer",
            "View supplier users. This permission should be paired with either SupplierViewer or SupplierManager",
            "Suppliers",
            &["SupplierUserReader"],
            &["SupplierUserViewer"],
            SUPPLIER_AND_ADMIN,
        ),
        entry(
            "SupplierUserManager",
            "Supplier User Manager",
            "View, and manage supplier users. This permission should be paired with either SupplierViewer or SupplierManager",
            "Suppliers",
            &["SupplierUserAdmin"],
            &["SupplierUserManager"],
            SUPPLIER_AND_ADMIN,
        ),
        entry(
            "SupplierUserGroupViewer",
            "Supplier User Group Viewer",
            "View supplier user groups. This permission should be paired with either SupplierViewer or SupplierManager",
            "Suppliers",
            &["SupplierUserGroupReader"],
            &["SupplierUserGroupViewer"],
            SUPPLIER_AND_ADMIN,
        ),
        entry(
            "SupplierUserGroupManager",
            "Supplier User Group Manager",
            "View, and manage supplier user groups. This permission should be paired with either SupplierViewer or SupplierManager",
            "Suppliers",
            &["SupplierUserGroupAdmin"],
            &["SupplierUserGroupManager"],
            SUPPLIER_AND_ADMIN,
        ),
        entry(
            "SupplierAddressViewer",
            "Supplier Address Viewer",
            "View supplier addresses. This permission should be paired with either SupplierViewer or SupplierManager",
            "Suppliers",
            &["SupplierAddressReader"],
            &["SupplierAddressViewer"],
            SUPPLIER_AND_ADMIN,
        ),
        entry(
            "SupplierAddressManager",
            "Supplier Address Manager",
            "View, and manage supplier addresses. This permission should be paired with either SupplierViewer or SupplierManager",
            "Suppliers",
            &["SupplierAddressAdmin"],
            &["SupplierAddressManager"],
            SUPPLIER_AND_ADMIN,
        ),
        entry(
            "AdminPermissionViewer",
            "Admin Permission Viewer",
            "View admin permissions",
            "Administration",
            &["SecurityProfileReader"],
            &["AdminPermissionViewer"],
            ADMIN_ONLY,
        ),
        entry(
            "AdminPermissionManager",
            "Admin Permission Manager",
            "View, and manage admin permissions",
            "Administration",
            &["SecurityProfileAdmin"],
            &["AdminPermissionManager"],
            ADMIN_ONLY,
        ),
        entry(
            "AdminUserViewer",
            "Admin User Viewer",
            "View admin users",
            "Administration",
            &["AdminUserReader", "AdminUserGroupReader"],
            &["AdminUserViewer"],
            ADMIN_ONLY,
        ),
        entry(
            "AdminUserManager",
            "Admin User Manager",
            "View, and manage admin users",
            "Administration",
            &["AdminUserAdmin", "AdminUserGroupReader"],
            &["AdminUserManager"],
            ADMIN_ONLY,
        ),
        entry(
            "AdminAddressViewer",
            "Admin Address Viewer",
            "View admin addresses",
            "Administration",
            &["AdminAddressReader"],
            &["AdminAddressViewer"],
            ADMIN_ONLY,
        ),
        entry(
            "AdminAddressManager",
            "Admin Address Manager",
            "View, and manage admin addresses",
            "Administration",
            &["AdminAddressAdmin"],
            &["AdminAddressManager"],
            ADMIN_ONLY,
        ),
        entry(
            "ProductFacetViewer",
            "Product Facet Viewer",
            "View product facets",
            "Products",
            &["ProductFacetReader"],
            &["ProductFacetViewer"],
            ADMIN_ONLY,
        ),
        entry(
            "ProductFacetManager",
            "Product Facet Manager",
            "View, and manage product facets",
            "Products",
            &["ProductFacetAdmin"],
            &["ProductFacetManager"],
            ADMIN_ONLY,
        ),
    ]
}
