use formcheck::{ConfigError, Pattern, Settings, Spec, SpecSet, TextRule};

#[test]
fn test_settings_from_json() {
    let settings = Settings::from_json_str(
        r#"{
            "regex": {
                "numeric": "^[0-9]+$",
                "email": { "pattern": "^[a-z]+@[a-z]+\\.[a-z]{2,}$", "flags": "i" },
                "strictEmail": { "builtin": "email" }
            }
        }"#,
    )
    .unwrap();

    assert_eq!(settings.len(), 3);
    assert_eq!(settings.get("strictEmail"), Some(&Pattern::Email));
    assert!(settings.get("numeric").unwrap().is_match("0042"));
    assert!(settings.get("email").unwrap().is_match("JOHN@EXAMPLE.COM"));
}

#[test]
fn test_settings_equal_to_hand_built_table() {
    let loaded = Settings::from_json_str(r#"{ "regex": { "numeric": "^[0-9]+$" } }"#).unwrap();
    let built = Settings::new().pattern("numeric", Pattern::regex("^[0-9]+$").unwrap());
    assert_eq!(loaded, built);
}

#[test]
fn test_multiline_and_dotall_flags() {
    let settings = Settings::from_json_str(
        r#"{ "regex": {
            "line": { "pattern": "^b$", "flags": "m" },
            "span": { "pattern": "a.b", "flags": "s" }
        } }"#,
    )
    .unwrap();
    assert!(settings.get("line").unwrap().is_match("a\nb\nc"));
    assert!(settings.get("span").unwrap().is_match("a\nb"));
}

#[test]
fn test_invalid_pattern_reports_name() {
    let err = Settings::from_json_str(r#"{ "regex": { "broken": "([0-9]" } }"#).unwrap_err();
    match &err {
        ConfigError::Pattern { name, .. } => assert_eq!(name, "broken"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().starts_with("invalid pattern 'broken'"));
}

#[test]
fn test_unsupported_flag() {
    let err = Settings::from_json_str(r#"{ "regex": { "x": { "pattern": "a", "flags": "q" } } }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Flag { flag: 'q', .. }));
}

#[test]
fn test_unknown_builtin() {
    let err = Settings::from_json_str(r#"{ "regex": { "x": { "builtin": "phone" } } }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Builtin { ref builtin, .. } if builtin == "phone"));
}

#[test]
fn test_shorthand_classes_are_unicode_aware() {
    let settings = Settings::from_json_str(
        r#"{ "regex": {
            "digits": "^\\d+$",
            "asciiDigits": "^(?-u:\\d)+$",
            "word": "^\\w+$"
        } }"#,
    )
    .unwrap();
    assert!(settings.get("digits").unwrap().is_match("\u{0663}\u{0664}"));
    assert!(!settings.get("asciiDigits").unwrap().is_match("\u{0663}\u{0664}"));
    assert!(settings.get("asciiDigits").unwrap().is_match("34"));
    assert!(settings.get("word").unwrap().is_match("caf\u{e9}"));
}

#[test]
fn test_malformed_json() {
    let err = Settings::from_json_str("{ regex: }").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_missing_file_reports_path() {
    let err = SpecSet::from_json_file("/definitely/not/here/specs.json").unwrap_err();
    match &err {
        ConfigError::Io { path, .. } => assert!(path.ends_with("specs.json")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("/definitely/not/here/specs.json"));
}

#[test]
fn test_spec_set_from_json_tolerates_incomplete_entries() {
    let specs = SpecSet::from_json_str(
        r##"{
            "#a": "oops",
            "#name": { "type": "text", "rules": [{ "type": "notEmpty" }] },
            "#terms": { "type": "checkbox", "errMsg": "Accept the terms" }
        }"##,
    )
    .unwrap();
    assert_eq!(specs.len(), 3);
    assert_eq!(specs.get("#a"), Some(&Spec::Unrecognized { kind: None }));
    assert_eq!(
        specs.get("#name"),
        Some(&Spec::text([TextRule::new("notEmpty", "")]))
    );
}

#[test]
fn test_spec_set_from_json_accepts_both_field_spellings() {
    let specs = SpecSet::from_json_str(
        r##"{
            ".gender": { "type": "select", "default_value": "test", "errorMessage": "Pick one" },
            "#terms": { "type": "checkbox", "errMsg": "Accept the terms" }
        }"##,
    )
    .unwrap();
    assert_eq!(specs.get(".gender"), Some(&Spec::select("test", "Pick one")));
    assert_eq!(specs.get("#terms"), Some(&Spec::checkbox("Accept the terms")));
}
