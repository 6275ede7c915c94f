    use super::*;
    use serde_json::json;

    fn resource_json(state: &str) -> serde_json::Value {
        json!({
            "type": "config",
            "entity_id": "config:com.example.Foo",
            "url": "jcrinstall:/apps/config/com.example.Foo.config",
            "digest": "abc",
            "priority": 100,
            "state": state
        })
    }

    #[test]
    fn resource_reads_flat_json() {
        let r: Resource = serde_json::from_value(resource_json("INSTALLED")).unwrap();
        assert_eq!(r.resource_type(), ResourceType::Config);
        assert_eq!(r.registered.entity_id, "config:com.example.Foo");
        assert_eq!(r.state, ResourceState::Installed);
        assert_eq!(r.version, None);
        assert!(r.attributes.is_empty());
        assert!(!r.is_install_excluded());
    }

    #[test]
    fn unknown_state_is_rejected() {
        assert!(serde_json::from_value::<Resource>(resource_json("PENDING")).is_err());
    }

    #[test]
    fn group_splits_winner_and_alternatives() {
        let group: ResourceGroup = serde_json::from_value(json!({
            "alias": "foo",
            "resources": [resource_json("INSTALLED"), resource_json("IGNORED")]
        }))
        .unwrap();

        assert_eq!(group.alias(), Some("foo"));
        assert_eq!(group.winner().state, ResourceState::Installed);
        assert_eq!(group.alternatives().len(), 1);
        assert_eq!(group.alternatives()[0].state, ResourceState::Ignored);
        assert_eq!(group.resource_type(), ResourceType::Config);
        assert_eq!(group.resources().len(), 2);
    }

    #[test]
    fn single_group_has_no_alternatives() {
        let r: Resource = serde_json::from_value(resource_json("INSTALL")).unwrap();
        let group = ResourceGroup::single(r.clone()).with_alias("foo");
        assert_eq!(group.resources(), std::slice::from_ref(&r));
        assert!(group.alternatives().is_empty());
        assert_eq!(group.alias(), Some("foo"));
    }

    #[test]
    fn groups_cannot_be_empty() {
        assert!(ResourceGroup::new(Vec::new(), None).is_err());
        assert!(serde_json::from_value::<ResourceGroup>(json!({"resources": []})).is_err());
    }

    #[test]
    fn state_labels_and_names() {
        assert_eq!(ResourceType::Bundle.label(), "Bundles");
        assert_eq!(ResourceType::Config.label(), "Configurations");
        assert_eq!(ResourceType::File.label(), "Files");
        assert_eq!(ResourceType::Properties.label(), "Properties");
        assert_eq!(ResourceState::Uninstall.to_string(), "UNINSTALL");
    }

    #[test]
    fn empty_snapshot() {
        let state: InstallationState = serde_json::from_value(json!({})).unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn configuration_constructors() {
        assert!(Configuration::missing("p").properties.is_none());
        let c = Configuration::with_properties("p", Dictionary::new());
        assert_eq!(c.properties, Some(Dictionary::new()));
    }
