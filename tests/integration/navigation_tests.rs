//! Navigation filtering and catalog coverage tests

#[cfg(test)]
mod tests {
    use crate::common::DashboardFixture;
    use noc_rbac::{Action, NavEntry, PermissionCatalog, RbacSystem, Role};
    use std::sync::Arc;

    fn views(entries: Vec<&NavEntry>) -> Vec<&str> {
        entries.into_iter().map(|e| e.view.as_str()).collect()
    }

    /// Every action the dashboard references must have an entry, otherwise
    /// the affordance is silently hidden from everyone but SUPER_DEV.
    #[test]
    fn test_builtin_catalog_covers_dashboard() {
        let catalog = PermissionCatalog::builtin();
        let missing = catalog.missing_entries(DashboardFixture::referenced_actions());
        assert!(missing.is_empty(), "missing catalog entries: {:?}", missing);
    }

    #[test]
    fn test_sidebar_per_role() {
        let rbac = RbacSystem::builtin();
        let sidebar = DashboardFixture::sidebar();

        assert_eq!(
            views(rbac.visible_items(Some(Role::Admin), &sidebar)),
            vec!["/clients", "/vlans", "/work-orders", "/broadcast", "/audit-log", "/team"]
        );
        assert_eq!(
            views(rbac.visible_items(Some(Role::Cs), &sidebar)),
            vec!["/work-orders"]
        );
        assert_eq!(
            views(rbac.visible_items(Some(Role::Aktivator), &sidebar)),
            vec!["/clients"]
        );
        assert_eq!(rbac.visible_items(Some(Role::SuperDev), &sidebar).len(), sidebar.len());
        assert!(rbac.visible_items(None, &sidebar).is_empty());
    }

    #[test]
    fn test_row_buttons_per_role() {
        let rbac = RbacSystem::builtin();
        let buttons = DashboardFixture::work_order_row_buttons();

        assert_eq!(
            rbac.visible_items(Some(Role::Aktivator), &buttons),
            vec![&Action::WorkOrderUpdate]
        );
        assert_eq!(
            rbac.visible_items(Some(Role::Admin), &buttons),
            vec![&Action::WorkOrderUpdate, &Action::WorkOrderDelete]
        );
        assert!(rbac.visible_items(Some(Role::Cs), &buttons).is_empty());
    }

    #[test]
    fn test_incomplete_catalog_reports_unguarded_entries() {
        let catalog = PermissionCatalog::from_entries([(
            Action::ClientAdd,
            [Role::Noc].into_iter().collect(),
        )]);
        let rbac = RbacSystem::new(Arc::new(catalog));

        let missing = rbac.unguarded_references(&DashboardFixture::sidebar());
        assert!(!missing.contains(&Action::ClientAdd));
        assert!(missing.contains(&Action::ManageUsers));
        assert_eq!(missing.len(), DashboardFixture::sidebar().len() - 1);
    }
}
