use std::fmt;

use serde::{Deserialize, Serialize};

use super::spec::SpecSet;

/// A selector whose check failed, with the message of the failing rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedRule {
    /// Selector of the spec that failed.
    pub selector: String,
    /// Error message.
    #[serde(rename = "errMsg", alias = "errorMessage")]
    pub message: String,
}

impl FailedRule {
    pub fn new(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FailedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.selector, self.message)
    }
}

/// Result of validating a spec set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a failed validation is only reported through this value"]
pub enum ValidationResult {
    /// Every applicable check passed. Carries the spec set that was validated.
    Valid(SpecSet),
    /// One or more selectors failed, in spec order.
    Invalid(Vec<FailedRule>),
}

impl ValidationResult {
    /// Check if all specs passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Check if any spec failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all failures.
    pub fn errors(&self) -> &[FailedRule] {
        match self {
            Self::Valid(_) => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first failure (if any).
    pub fn first_error(&self) -> Option<&FailedRule> {
        self.errors().first()
    }

    /// Selector of the first failing spec, e.g. to focus that field.
    pub fn first_invalid_selector(&self) -> Option<&str> {
        self.first_error().map(|e| e.selector.as_str())
    }

    /// The validated specs, when validation succeeded.
    pub fn specs(&self) -> Option<&SpecSet> {
        match self {
            Self::Valid(specs) => Some(specs),
            Self::Invalid(_) => None,
        }
    }

    pub fn into_result(self) -> Result<SpecSet, Vec<FailedRule>> {
        match self {
            Self::Valid(specs) => Ok(specs),
            Self::Invalid(errors) => Err(errors),
        }
    }
}

impl From<ValidationResult> for Result<SpecSet, Vec<FailedRule>> {
    fn from(result: ValidationResult) -> Self {
        result.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Spec;

    #[test]
    fn test_valid_result_has_no_errors() {
        let specs = SpecSet::new().with("#a", Spec::checkbox("required"));
        let result = ValidationResult::Valid(specs.clone());
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert_eq!(result.first_invalid_selector(), None);
        assert_eq!(result.specs(), Some(&specs));
        assert_eq!(result.into_result(), Ok(specs));
    }

    #[test]
    fn test_invalid_result_exposes_first_failure() {
        let result = ValidationResult::Invalid(vec![
            FailedRule::new("#a", "first"),
            FailedRule::new("#b", "second"),
        ]);
        assert!(result.is_invalid());
        assert_eq!(result.first_invalid_selector(), Some("#a"));
        assert_eq!(result.first_error().map(|e| e.message.as_str()), Some("first"));
        assert!(result.specs().is_none());
        assert_eq!(result.into_result().unwrap_err().len(), 2);
    }

    #[test]
    fn test_failed_rule_display() {
        let failed = FailedRule::new("#email", "Wrong email format!");
        assert_eq!(failed.to_string(), "#email: Wrong email format!");
    }

    #[test]
    fn test_failed_rule_serializes_with_err_msg_key() {
        let failed = FailedRule::new("#email", "Empty text!");
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "selector": "#email", "errMsg": "Empty text!" })
        );
    }
}
