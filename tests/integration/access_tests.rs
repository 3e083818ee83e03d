//! Access decision integration tests

#[cfg(test)]
mod tests {
    use crate::common::ProfileFactory;
    use noc_rbac::{Action, PermissionCatalog, RbacSystem, Role, RoleSet};
    use std::sync::Arc;

    fn rbac() -> RbacSystem {
        RbacSystem::builtin()
    }

    fn role_set(roles: &[Role]) -> RoleSet {
        roles.iter().copied().collect()
    }

    // ==================== Dashboard scenarios ====================

    #[test]
    fn test_dashboard_scenarios() {
        let rbac = rbac();
        assert!(!rbac.has_access_str(Some("ADMIN"), "MANAGE_USERS"));
        assert!(rbac.has_access_str(Some("SUPER_DEV"), "MANAGE_USERS"));
        assert!(rbac.has_access_str(Some("NOC"), "CLIENT_ADD"));
        assert!(!rbac.has_access_str(Some("CS"), "CLIENT_EDIT_DELETE"));
        assert!(!rbac.has_access_str(None, "VLAN_EDIT_DELETE"));
        assert!(!rbac.has_access_str(Some("ADMIN"), "UNDEFINED_ACTION_KEY"));
    }

    #[test]
    fn test_profile_loading_is_denied() {
        let rbac = rbac();
        let profile = ProfileFactory::loading();
        for action in Action::ALL {
            assert!(
                !rbac.has_access_str(profile.role.as_deref(), action.as_str()),
                "{} granted {}",
                profile.email,
                action
            );
        }
    }

    #[test]
    fn test_role_change_takes_effect_on_next_call() {
        let rbac = rbac();
        let mut profile = ProfileFactory::with_role("CS");
        assert!(!rbac.has_access_str(profile.role.as_deref(), "BROADCAST_ACCESS"));

        profile.role = Some("NOC".to_string());
        assert!(rbac.has_access_str(profile.role.as_deref(), "BROADCAST_ACCESS"));
    }

    #[test]
    fn test_super_dev_profile_sees_everything() {
        let rbac = rbac();
        let profile = ProfileFactory::with_role("SUPER_DEV");
        for action in Action::ALL {
            assert!(rbac.has_access_str(profile.role.as_deref(), action.as_str()));
        }
    }

    // ==================== Quantified properties ====================

    #[test]
    fn test_membership_matches_custom_catalog() {
        let catalog = PermissionCatalog::from_entries([
            (Action::ClientAdd, role_set(&[Role::Cs])),
            (Action::VlanAdd, role_set(&[Role::Aktivator, Role::Noc])),
            (Action::ManageTeam, RoleSet::new()),
        ]);
        let rbac = RbacSystem::new(Arc::new(catalog.clone()));

        for role in Role::ALL {
            for action in Action::ALL {
                let expected = match (role, catalog.entry(action)) {
                    (Role::SuperDev, _) => true,
                    (_, None) => false,
                    (role, Some(allowed)) => allowed.contains(&role),
                };
                assert_eq!(rbac.has_access(Some(role), action), expected);
            }
        }
    }

    #[test]
    fn test_every_profile_against_every_action() {
        let rbac = rbac();
        for profile in ProfileFactory::all_roles() {
            let role = Role::resolve(profile.role.as_deref());
            assert!(role.is_some(), "{} should resolve", profile.email);

            for action in Action::ALL {
                assert_eq!(
                    rbac.has_access_str(profile.role.as_deref(), action.as_str()),
                    rbac.has_access(role, action)
                );
            }
        }
    }

    #[test]
    fn test_shared_across_threads() {
        let rbac = Arc::new(rbac());
        let handles: Vec<_> = Role::ALL
            .into_iter()
            .map(|role| {
                let rbac = Arc::clone(&rbac);
                std::thread::spawn(move || rbac.allowed_actions(Some(role)))
            })
            .collect();

        for (role, handle) in Role::ALL.into_iter().zip(handles) {
            assert_eq!(handle.join().unwrap(), rbac.allowed_actions(Some(role)));
        }
    }
}
