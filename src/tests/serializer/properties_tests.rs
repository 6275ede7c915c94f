    use super::*;
    use serde_json::json;

    fn encode(value: serde_json::Value) -> String {
        let props: Dictionary = serde_json::from_value(value).unwrap();
        let mut out = Vec::new();
        PropertiesSerializer.serialize(&props, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_values() {
        assert_eq!(encode(json!({"x": "1", "y": 2})), "x=1\ny=2\n");
    }

    #[test]
    fn separators_and_comments_are_escaped() {
        assert_eq!(encode(json!({"a=b": "c:d #e !f"})), "a\\=b=c\\:d \\#e \\!f\n");
    }

    #[test]
    fn leading_space_and_line_breaks() {
        assert_eq!(encode(json!({"k": " v\nw"})), "k=\\ v\\nw\n");
        assert_eq!(encode(json!({"my key": "v"})), "my\\ key=v\n");
    }

    #[test]
    fn non_ascii_uses_unicode_escapes() {
        assert_eq!(encode(json!({"k": "é"})), "k=\\u00E9\n");
        assert_eq!(encode(json!({"k": "😀"})), "k=\\uD83D\\uDE00\n");
    }
