    use super::*;
    use crate::test_fixtures::{bundle, config};

    #[test]
    fn entity_id_strips_namespace_and_appends_alias() {
        let r = bundle("org.example.core", ResourceState::Installed);
        assert_eq!(entity_id(&r.registered, None), "org.example.core");
        assert_eq!(
            entity_id(&r.registered, Some("core-alias")),
            "org.example.core\ncore-alias"
        );
    }

    #[test]
    fn entity_id_only_strips_first_prefix() {
        let mut r = config("a", ResourceState::Installed);
        r.registered.entity_id = "config:factory:instance".to_string();
        assert_eq!(entity_id(&r.registered, None), "factory:instance");

        r.registered.entity_id = "plain".to_string();
        assert_eq!(entity_id(&r.registered, None), "plain");
    }

    #[test]
    fn url_carries_version_when_known() {
        let mut r = bundle("b", ResourceState::Installed);
        assert_eq!(url(&r), "jcrinstall:/apps/install/b.jar");
        r.version = Some("1.2.0".to_string());
        assert_eq!(url(&r), "jcrinstall:/apps/install/b.jar (1.2.0)");
    }

    #[test]
    fn info_joins_digest_and_priority() {
        let mut r = bundle("b", ResourceState::Installed);
        r.registered.digest = "abc".to_string();
        r.registered.priority = 200;
        assert_eq!(info(&r.registered), "abc/200");
    }

    #[test]
    fn excluded_installed_resource_is_labeled_excluded() {
        let mut r = bundle("b", ResourceState::Installed);
        assert_eq!(state_label(&r), "INSTALLED");

        r.attributes
            .insert(ATTR_INSTALL_EXCLUDED.to_string(), "newer version".into());
        assert_eq!(state_label(&r), "EXCLUDED");

        r.attributes
            .insert(ATTR_INSTALL_INFO.to_string(), "see log".into());
        assert_eq!(state_label(&r), "EXCLUDED(*)");
    }

    #[test]
    fn info_marker_without_exclusion() {
        let mut r = bundle("b", ResourceState::Installed);
        r.attributes
            .insert(ATTR_INSTALL_INFO.to_string(), "note".into());
        assert_eq!(state_label(&r), "INSTALLED(*)");
    }

    #[test]
    fn label_ignores_attributes_for_other_states() {
        let mut r = bundle("b", ResourceState::Ignored);
        r.attributes
            .insert(ATTR_INSTALL_EXCLUDED.to_string(), "x".into());
        r.attributes.insert(ATTR_INSTALL_INFO.to_string(), "y".into());
        assert_eq!(state_label(&r), "IGNORED");
    }

    #[test]
    fn annotations_list_excluded_before_info() {
        let mut r = bundle("b", ResourceState::Installed);
        r.attributes.insert(ATTR_INSTALL_INFO.to_string(), "info".into());
        r.attributes
            .insert(ATTR_INSTALL_EXCLUDED.to_string(), serde_json::json!(true));
        assert_eq!(annotations(&r), vec!["true".to_string(), "info".to_string()]);
    }

    #[test]
    fn timestamps_use_console_pattern() {
        // 2024-03-05T14:03:22.123Z
        assert_eq!(format_timestamp(1_709_647_402_123), "14:03:22:123 2024-Mar-05");
        assert_eq!(format_timestamp(0), "00:00:00:000 1970-Jan-01");
        assert_eq!(format_timestamp(-1), "-");
        assert_eq!(format_timestamp(-1000), "23:59:59:000 1969-Dec-31");
    }

    #[test]
    fn last_change_only_for_installed_with_positive_time() {
        let mut r = bundle("b", ResourceState::Installed);
        assert_eq!(last_change(&r), None);

        r.last_change = Some(0);
        assert_eq!(last_change(&r), None);

        r.last_change = Some(1_709_647_402_123);
        assert_eq!(last_change(&r).as_deref(), Some("14:03:22:123 2024-Mar-05"));

        r.state = ResourceState::Install;
        assert_eq!(last_change(&r), None);
    }

    #[test]
    fn error_defaults_to_empty() {
        let mut r = bundle("b", ResourceState::Installed);
        assert_eq!(error(&r), "");
        r.error = Some("boom".to_string());
        assert_eq!(error(&r), "boom");
    }
