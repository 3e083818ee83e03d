//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use crate::common::write_config;
    use noc_rbac::{Action, Config, NocError, RbacSystem, Role};

    #[tokio::test]
    async fn test_catalog_from_config_file() {
        let file = write_config(
            r#"
rbac:
  permissions:
    BROADCAST_ACCESS: [ADMIN]
    MANAGE_TEAM: []
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        let rbac = RbacSystem::from_config(config.rbac()).unwrap();

        assert!(!rbac.has_access(Some(Role::Noc), Action::BroadcastAccess));
        assert!(rbac.has_access(Some(Role::Admin), Action::BroadcastAccess));
        assert!(!rbac.has_access(Some(Role::Admin), Action::ManageTeam));
        assert!(rbac.has_access(Some(Role::SuperDev), Action::ManageTeam));
        assert!(rbac.catalog().is_complete());
    }

    #[tokio::test]
    async fn test_config_without_builtin_denies_missing_actions() {
        let file = write_config(
            r#"
rbac:
  use_builtin: false
  permissions:
    WORK_ORDER_CREATE: [CS, NOC]
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        let rbac = RbacSystem::from_config(config.rbac()).unwrap();

        assert!(rbac.has_access(Some(Role::Cs), Action::WorkOrderCreate));
        assert!(!rbac.has_access(Some(Role::Noc), Action::ClientAdd));
        assert!(rbac.has_access(Some(Role::SuperDev), Action::ClientAdd));
        assert_eq!(
            rbac.catalog().missing_entries(Action::ALL).len(),
            Action::ALL.len() - 1
        );
    }

    #[tokio::test]
    async fn test_config_typo_is_rejected_at_load() {
        let file = write_config("rbac:\n  permissions:\n    CLIENT_ADDD: [NOC]\n");

        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(NocError::Config(msg)) if msg.contains("CLIENT_ADDD")));
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_rejected() {
        let file = write_config("rbac: [this is not a map");

        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(NocError::Config(msg)) if msg.contains("parse")));
    }

    #[tokio::test]
    async fn test_example_config_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/noc-rbac.yaml.example");
        let config = Config::from_file(path).await.unwrap();
        let rbac = RbacSystem::from_config(config.rbac()).unwrap();
        assert!(rbac.catalog().is_complete());
    }
}
