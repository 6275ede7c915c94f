    use super::*;
    use crate::model::{ATTR_INSTALL_EXCLUDED, ResourceState, ResourceType};
    use crate::test_fixtures::{bundle, config, group, registered};

    fn sample_state() -> InstallationState {
        let mut excluded = bundle("core", ResourceState::Installed);
        excluded
            .attributes
            .insert(ATTR_INSTALL_EXCLUDED.to_string(), "newer installed".into());

        InstallationState {
            active: vec![group(vec![config("org.example.Foo", ResourceState::Install)])],
            installed: vec![group(vec![
                excluded,
                bundle("core", ResourceState::Ignored),
            ])],
            untransformed: vec![registered(ResourceType::File, "file:f", "file:/f.txt")],
        }
    }

    #[test]
    fn text_report_layout() {
        let mut out = String::new();
        render_text(&sample_state(), &mut out).unwrap();

        let expected = [
            "Apache Sling OSGi Installer",
            "===========================",
            "Active Resources",
            "----------------",
            "Configurations:",
            "- org.example.Foo: d-org.example.Foo/100, jcrinstall:/apps/config/org.example.Foo.config, INSTALL, ",
            "",
            "Processed Resources",
            "-------------------",
            "Bundles:",
            "* core: d-core/100, jcrinstall:/apps/install/core.jar, EXCLUDED, ",
            "  : newer installed",
            "  - d-core/100, jcrinstall:/apps/install/core.jar, IGNORED, ",
            "",
            "Untransformed Resources",
            "-----------------------",
            "Files:",
            "- d-f/100, file:/f.txt",
            "",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn text_report_is_not_escaped() {
        let mut r = bundle("a", ResourceState::Install);
        r.error = Some("<&>".to_string());
        let state = InstallationState {
            active: vec![group(vec![r])],
            ..Default::default()
        };

        let mut out = String::new();
        render_text(&state, &mut out).unwrap();
        assert!(out.contains(", INSTALL, <&>\n"));
    }

    #[test]
    fn printer_accepts_zip_and_txt_only() {
        for mode in ["zip", "txt"] {
            let mut out = String::new();
            print_configuration(&sample_state(), mode, &mut out).unwrap();
            assert!(out.starts_with("Apache Sling OSGi Installer\n"), "mode {}", mode);
        }

        for mode in ["web", "", "TXT"] {
            let mut out = String::new();
            print_configuration(&sample_state(), mode, &mut out).unwrap();
            assert!(out.is_empty(), "mode {:?} should print nothing", mode);
        }
    }

    #[test]
    fn empty_state_prints_headings_only() {
        let mut out = String::new();
        render_text(&InstallationState::default(), &mut out).unwrap();
        assert!(out.contains("Active Resources\n----------------\n\n"));
        assert!(out.ends_with("Untransformed Resources\n-----------------------\n"));
    }

    #[test]
    fn modes_parse() {
        assert_eq!(PrinterMode::parse("zip"), Some(PrinterMode::Zip));
        assert_eq!(PrinterMode::parse("txt"), Some(PrinterMode::Txt));
        assert_eq!(PrinterMode::parse("html"), None);
    }
