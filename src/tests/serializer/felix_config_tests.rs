    use super::*;
    use serde_json::json;

    fn encode(value: serde_json::Value) -> Result<String> {
        let props: Dictionary = serde_json::from_value(value).unwrap();
        let mut out = Vec::new();
        FelixConfigSerializer.serialize(&props, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn scalars_carry_type_markers() {
        let text = encode(json!({
            "name": "web",
            "port": 8080,
            "ratio": 0.5,
            "enabled": true
        }))
        .unwrap();
        assert_eq!(
            text,
            "enabled=B\"true\"\nname=\"web\"\nport=L\"8080\"\nratio=D\"0.5\"\n"
        );
    }

    #[test]
    fn arrays_share_the_element_marker() {
        assert_eq!(encode(json!({"ids": [1, 2]})).unwrap(), "ids=L[\"1\", \"2\"]\n");
        assert_eq!(encode(json!({"tags": ["a", "b"]})).unwrap(), "tags=[\"a\", \"b\"]\n");
        assert_eq!(encode(json!({"none": []})).unwrap(), "none=[]\n");
    }

    #[test]
    fn strings_and_keys_are_escaped() {
        let text = encode(json!({"a key": "say \"hi\"\n\\"})).unwrap();
        assert_eq!(text, "a\\ key=\"say \\\"hi\\\"\\n\\\\\"\n");
    }

    #[test]
    fn unsupported_values_are_rejected() {
        assert!(encode(json!({"n": null})).is_err());
        assert!(encode(json!({"o": {"x": 1}})).is_err());
        assert!(encode(json!({"m": [1, "a"]})).is_err());
    }
