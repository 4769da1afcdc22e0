//! Declarative descriptions of what each form element must look like.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One named pattern check within a text spec.
///
/// Missing fields default to empty strings. An empty pattern name never
/// resolves, so such a rule always fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRule {
    /// Name of the pattern in the validator's settings.
    #[serde(rename = "type", alias = "patternName", default)]
    pub pattern: String,
    #[serde(rename = "errMsg", alias = "errorMessage", default)]
    pub message: String,
}

impl TextRule {
    pub fn new(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

/// How one element (or group of elements) should be validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SpecRepr", into = "RawSpec")]
pub enum Spec {
    /// The first element's value must satisfy every rule, checked in order.
    Text { rules: Vec<TextRule> },
    /// At least one matched element must be checked.
    Checkbox { message: String },
    /// At least one matched element must be checked.
    Radio { message: String },
    /// The first element's value must differ from `default_value`. Without a
    /// default there is nothing to compare against and the check passes.
    Select {
        default_value: Option<String>,
        message: String,
    },
    /// A spec whose `type` is missing or not one of the above. Never checked.
    Unrecognized { kind: Option<String> },
}

impl Spec {
    pub fn text(rules: impl IntoIterator<Item = TextRule>) -> Self {
        Self::Text {
            rules: rules.into_iter().collect(),
        }
    }

    pub fn checkbox(message: impl Into<String>) -> Self {
        Self::Checkbox {
            message: message.into(),
        }
    }

    pub fn radio(message: impl Into<String>) -> Self {
        Self::Radio {
            message: message.into(),
        }
    }

    pub fn select(default_value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Select {
            default_value: Some(default_value.into()),
            message: message.into(),
        }
    }

    /// The `type` tag as written in a spec file.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Text { .. } => Some("text"),
            Self::Checkbox { .. } => Some("checkbox"),
            Self::Radio { .. } => Some("radio"),
            Self::Select { .. } => Some("select"),
            Self::Unrecognized { kind } => kind.as_deref(),
        }
    }
}

// Wire shape shared by every spec type (`type`, `rules`, `errMsg`, `defaultValue`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSpec {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rules: Option<Vec<TextRule>>,
    #[serde(
        rename = "errMsg",
        alias = "errorMessage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    message: Option<String>,
    #[serde(alias = "default_value", default, skip_serializing_if = "Option::is_none")]
    default_value: Option<String>,
}

// Anything that is not a spec object is kept as an unrecognized spec rather
// than failing the whole set.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SpecRepr {
    Object(RawSpec),
    Other(IgnoredAny),
}

impl From<SpecRepr> for Spec {
    fn from(repr: SpecRepr) -> Self {
        match repr {
            SpecRepr::Object(raw) => raw.into(),
            SpecRepr::Other(_) => Spec::Unrecognized { kind: None },
        }
    }
}

impl From<RawSpec> for Spec {
    fn from(raw: RawSpec) -> Self {
        let message = raw.message.unwrap_or_default();
        match raw.kind.as_deref() {
            Some("text") => Spec::Text {
                rules: raw.rules.unwrap_or_default(),
            },
            Some("checkbox") => Spec::Checkbox { message },
            Some("radio") => Spec::Radio { message },
            Some("select") => Spec::Select {
                default_value: raw.default_value,
                message,
            },
            _ => Spec::Unrecognized { kind: raw.kind },
        }
    }
}

impl From<Spec> for RawSpec {
    fn from(spec: Spec) -> Self {
        let kind = spec.kind().map(str::to_string);
        match spec {
            Spec::Text { rules } => RawSpec {
                kind,
                rules: Some(rules),
                ..Default::default()
            },
            Spec::Checkbox { message } | Spec::Radio { message } => RawSpec {
                kind,
                message: Some(message),
                ..Default::default()
            },
            Spec::Select {
                default_value,
                message,
            } => RawSpec {
                kind,
                message: Some(message),
                default_value,
                ..Default::default()
            },
            Spec::Unrecognized { .. } => RawSpec {
                kind,
                ..Default::default()
            },
        }
    }
}

/// Specs keyed by element selector, in insertion order.
///
/// Selectors are unique: inserting an existing selector replaces its spec in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecSet {
    entries: Vec<(String, Spec)>,
}

impl SpecSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a spec, builder style.
    pub fn with(mut self, selector: impl Into<String>, spec: Spec) -> Self {
        self.insert(selector, spec);
        self
    }

    /// Insert a spec, returning the one it replaced.
    pub fn insert(&mut self, selector: impl Into<String>, spec: Spec) -> Option<Spec> {
        let selector = selector.into();
        match self.entries.iter_mut().find(|(s, _)| *s == selector) {
            Some((_, existing)) => Some(std::mem::replace(existing, spec)),
            None => {
                self.entries.push((selector, spec));
                None
            }
        }
    }

    pub fn get(&self, selector: &str) -> Option<&Spec> {
        self.entries
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, spec)| spec)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Spec)> {
        self.entries.iter().map(|(s, spec)| (s.as_str(), spec))
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(s, _)| s.as_str())
    }
}

impl<S: Into<String>> FromIterator<(S, Spec)> for SpecSet {
    fn from_iter<I: IntoIterator<Item = (S, Spec)>>(iter: I) -> Self {
        let mut set = SpecSet::new();
        for (selector, spec) in iter {
            set.insert(selector, spec);
        }
        set
    }
}

impl IntoIterator for SpecSet {
    type Item = (String, Spec);
    type IntoIter = std::vec::IntoIter<(String, Spec)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for SpecSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (selector, spec) in &self.entries {
            map.serialize_entry(selector, spec)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SpecSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecSetVisitor;

        impl<'de> Visitor<'de> for SpecSetVisitor {
            type Value = SpecSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of element selectors to specs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SpecSet, A::Error> {
                let mut set = SpecSet::new();
                while let Some((selector, spec)) = access.next_entry::<String, Spec>()? {
                    set.insert(selector, spec);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(SpecSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut set = SpecSet::new()
            .with("#a", Spec::checkbox("a"))
            .with("#b", Spec::checkbox("b"));
        let old = set.insert("#a", Spec::radio("a2"));
        assert_eq!(old, Some(Spec::checkbox("a")));
        assert_eq!(set.selectors().collect::<Vec<_>>(), vec!["#a", "#b"]);
        assert_eq!(set.get("#a"), Some(&Spec::radio("a2")));
    }

    #[test]
    fn test_deserialize_keeps_insertion_order() {
        let json = r##"{
            "#zeta": { "type": "checkbox", "errMsg": "z" },
            "#alpha": { "type": "radio", "errMsg": "a" },
            "#mid": { "type": "select", "defaultValue": "none", "errMsg": "m" }
        }"##;
        let set: SpecSet = serde_json::from_str(json).unwrap();
        assert_eq!(
            set.selectors().collect::<Vec<_>>(),
            vec!["#zeta", "#alpha", "#mid"]
        );
        assert_eq!(set.get("#mid"), Some(&Spec::select("none", "m")));
    }

    #[test]
    fn test_deserialize_text_rules() {
        let json = r#"{
            "type": "text",
            "rules": [
                { "type": "notEmpty", "errMsg": "Empty text!" },
                { "patternName": "email", "errorMessage": "Wrong email format!" }
            ]
        }"#;
        let spec: Spec = serde_json::from_str(json).unwrap();
        assert_eq!(
            spec,
            Spec::text([
                TextRule::new("notEmpty", "Empty text!"),
                TextRule::new("email", "Wrong email format!"),
            ])
        );
    }

    #[test]
    fn test_text_without_rules_deserializes_to_empty_rules() {
        // `rule` is a misspelling, so the spec has no rules at all.
        let json = r#"{ "type": "text", "rule": [{ "type": "notEmpty", "errMsg": "x" }] }"#;
        let spec: Spec = serde_json::from_str(json).unwrap();
        assert_eq!(spec, Spec::Text { rules: vec![] });
    }

    #[test]
    fn test_unknown_or_missing_type_is_unrecognized() {
        let spec: Spec = serde_json::from_str(r#"{ "type": "range", "errMsg": "x" }"#).unwrap();
        assert_eq!(
            spec,
            Spec::Unrecognized {
                kind: Some("range".to_string())
            }
        );

        let spec: Spec = serde_json::from_str(r#"{ "errMsg": "x" }"#).unwrap();
        assert_eq!(spec, Spec::Unrecognized { kind: None });
    }

    #[test]
    fn test_rule_with_missing_fields_defaults_to_empty() {
        let json = r#"{
            "type": "text",
            "rules": [{ "type": "notEmpty" }, { "errMsg": "no pattern" }]
        }"#;
        let spec: Spec = serde_json::from_str(json).unwrap();
        assert_eq!(
            spec,
            Spec::text([
                TextRule::new("notEmpty", ""),
                TextRule::new("", "no pattern"),
            ])
        );
    }

    #[test]
    fn test_non_object_spec_is_unrecognized() {
        let json = r##"{ "#a": "oops", "#b": 42, "#c": { "type": "checkbox", "errMsg": "c" } }"##;
        let set: SpecSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.get("#a"), Some(&Spec::Unrecognized { kind: None }));
        assert_eq!(set.get("#b"), Some(&Spec::Unrecognized { kind: None }));
        assert_eq!(set.get("#c"), Some(&Spec::checkbox("c")));
    }

    #[test]
    fn test_select_without_default_value() {
        let spec: Spec = serde_json::from_str(r#"{ "type": "select", "errMsg": "pick" }"#).unwrap();
        assert_eq!(
            spec,
            Spec::Select {
                default_value: None,
                message: "pick".to_string()
            }
        );
    }

    #[test]
    fn test_serialize_uses_camel_case_field_names() {
        let set = SpecSet::new()
            .with("#email", Spec::text([TextRule::new("email", "Bad email")]))
            .with(".gender", Spec::select("test", "Not selected selectbox!"));
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "#email": { "type": "text", "rules": [{ "type": "email", "errMsg": "Bad email" }] },
                ".gender": { "type": "select", "errMsg": "Not selected selectbox!", "defaultValue": "test" }
            })
        );

        let back: SpecSet = serde_json::from_value(json).unwrap();
        assert_eq!(back, set);
    }
}
