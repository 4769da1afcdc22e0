//! Rule dispatch for a spec set.

use log::{debug, trace, warn};

use super::provider::ElementProvider;
use super::result::{FailedRule, ValidationResult};
use super::settings::Settings;
use super::spec::{Spec, SpecSet, TextRule};

/// Outcome of checking a single selector.
#[derive(Debug, PartialEq, Eq)]
enum Verdict<'a> {
    Passed,
    Failed(&'a str),
    /// Nothing was checked. Counts as passing.
    Unchecked(&'static str),
}

/// Validates spec sets against the patterns it was built with.
///
/// # Example
///
/// ```ignore
/// let validator = Validator::new(settings);
///
/// match validator.validate(&document, specs) {
///     ValidationResult::Valid(specs) => submit(specs),
///     ValidationResult::Invalid(errors) => show(errors),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    settings: Settings,
}

impl Validator {
    /// Create a validator with a pattern table.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// The settings this validator was built with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Check every spec against the elements `provider` resolves for its
    /// selector.
    ///
    /// Selectors are checked independently, in insertion order, and each
    /// contributes at most one failure. A selector that matches no element
    /// is skipped.
    pub fn validate<P>(&self, provider: &P, specs: SpecSet) -> ValidationResult
    where
        P: ElementProvider + ?Sized,
    {
        let mut errors = Vec::new();

        for (selector, spec) in specs.iter() {
            let elements = provider.resolve(selector);
            if elements.is_empty() {
                trace!("skipping {selector:?}: no matching elements");
                continue;
            }

            match self.check(provider, &elements, spec) {
                Verdict::Passed => debug!("{selector:?} passed"),
                Verdict::Unchecked(reason) => debug!("{selector:?} not checked: {reason}"),
                Verdict::Failed(message) => {
                    debug!("{selector:?} failed: {message}");
                    errors.push(FailedRule::new(selector, message));
                }
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid(specs)
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    fn check<'s, P>(&self, provider: &P, elements: &[P::Handle], spec: &'s Spec) -> Verdict<'s>
    where
        P: ElementProvider + ?Sized,
    {
        let Some(&first) = elements.first() else {
            return Verdict::Unchecked("no matching elements");
        };

        match spec {
            Spec::Text { rules } if rules.is_empty() => {
                Verdict::Unchecked("text spec has no rules")
            }
            Spec::Text { rules } => {
                // First failing rule wins; later rules are not evaluated.
                for rule in rules {
                    let value = provider.read_value(first);
                    if !self.text_satisfies(value.as_deref(), rule) {
                        return Verdict::Failed(&rule.message);
                    }
                }
                Verdict::Passed
            }
            Spec::Checkbox { message } | Spec::Radio { message } => {
                if elements.iter().any(|&el| provider.read_checked(el)) {
                    Verdict::Passed
                } else {
                    Verdict::Failed(message)
                }
            }
            Spec::Select {
                default_value: None,
                ..
            } => Verdict::Unchecked("select spec has no default value"),
            Spec::Select {
                default_value: Some(default_value),
                message,
            } => {
                if provider.read_value(first).as_deref() == Some(default_value.as_str()) {
                    Verdict::Failed(message)
                } else {
                    Verdict::Passed
                }
            }
            Spec::Unrecognized { kind } => {
                warn!("unrecognized spec type {kind:?}, not checking");
                Verdict::Unchecked("unrecognized spec type")
            }
        }
    }

    fn text_satisfies(&self, value: Option<&str>, rule: &TextRule) -> bool {
        let Some(pattern) = self.settings.get(&rule.pattern) else {
            warn!("no pattern named {:?} in settings", rule.pattern);
            return false;
        };
        match value {
            Some(value) if !value.is_empty() => pattern.is_match(value),
            _ => false,
        }
    }
}

impl From<Settings> for Validator {
    fn from(settings: Settings) -> Self {
        Self::new(settings)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::validation::Pattern;

    /// Provider backed by a fixed selector table.
    #[derive(Default)]
    struct FakeForm {
        elements: Vec<(Option<String>, bool)>,
        selectors: HashMap<String, Vec<usize>>,
    }

    impl FakeForm {
        fn add(mut self, selector: &str, value: Option<&str>, checked: bool) -> Self {
            let handle = self.elements.len();
            self.elements.push((value.map(str::to_string), checked));
            self.selectors
                .entry(selector.to_string())
                .or_default()
                .push(handle);
            self
        }
    }

    impl ElementProvider for FakeForm {
        type Handle = usize;

        fn resolve(&self, selector: &str) -> Vec<usize> {
            self.selectors.get(selector).cloned().unwrap_or_default()
        }

        fn read_value(&self, element: usize) -> Option<String> {
            self.elements[element].0.clone()
        }

        fn read_checked(&self, element: usize) -> bool {
            self.elements[element].1
        }
    }

    fn validator() -> Validator {
        Validator::new(
            Settings::new()
                .pattern("notEmpty", Pattern::regex(r"\S+").unwrap())
                .pattern("numeric", Pattern::regex("^[0-9]+$").unwrap()),
        )
    }

    #[test]
    fn test_text_uses_first_element_value() {
        let form = FakeForm::default()
            .add(".num", Some("123"), false)
            .add(".num", Some("abc"), false);
        let spec = Spec::text([TextRule::new("numeric", "nan")]);
        let elements = form.resolve(".num");
        assert_eq!(validator().check(&form, &elements, &spec), Verdict::Passed);
    }

    #[test]
    fn test_missing_value_fails_text_rule() {
        let form = FakeForm::default().add("#x", None, false);
        let spec = Spec::text([TextRule::new("notEmpty", "empty")]);
        let elements = form.resolve("#x");
        assert_eq!(
            validator().check(&form, &elements, &spec),
            Verdict::Failed("empty")
        );
    }

    #[test]
    fn test_select_without_value_passes() {
        let form = FakeForm::default().add("#s", None, false);
        let spec = Spec::select("default", "pick one");
        let elements = form.resolve("#s");
        assert_eq!(validator().check(&form, &elements, &spec), Verdict::Passed);
    }

    #[test]
    fn test_pass_through_branches_are_unchecked() {
        let form = FakeForm::default().add("#x", Some(""), false);
        let elements = form.resolve("#x");
        let v = validator();

        assert!(matches!(
            v.check(&form, &elements, &Spec::Text { rules: vec![] }),
            Verdict::Unchecked(_)
        ));
        assert!(matches!(
            v.check(&form, &elements, &Spec::Unrecognized { kind: None }),
            Verdict::Unchecked(_)
        ));
        assert!(matches!(
            v.check(&form, &[], &Spec::checkbox("x")),
            Verdict::Unchecked(_)
        ));
        assert!(matches!(
            v.check(
                &form,
                &elements,
                &Spec::Select {
                    default_value: None,
                    message: "pick".to_string()
                }
            ),
            Verdict::Unchecked(_)
        ));
    }
}
