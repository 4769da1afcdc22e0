use std::collections::HashMap;

use regex::Regex;

/// A named matcher referenced by text rules.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Unanchored regular expression search, like `RegExp.test`.
    Regex(Regex),
    /// Structural e-mail address check.
    Email,
}

impl Pattern {
    /// Compile a regular expression pattern.
    pub fn regex(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Self::Regex)
    }

    pub fn is_match(&self, value: &str) -> bool {
        match self {
            Self::Regex(re) => re.is_match(value),
            Self::Email => email_address::EmailAddress::is_valid(value),
        }
    }

    /// Source text of the pattern. Built-in matchers report their name.
    pub fn source(&self) -> &str {
        match self {
            Self::Regex(re) => re.as_str(),
            Self::Email => "builtin:email",
        }
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Self::Regex(re)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Regex(a), Self::Regex(b)) => a.as_str() == b.as_str(),
            (Self::Email, Self::Email) => true,
            _ => false,
        }
    }
}

impl Eq for Pattern {}

/// Table of named patterns a validator checks text rules against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    patterns: HashMap<String, Pattern>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named pattern, builder style.
    pub fn pattern(mut self, name: impl Into<String>, pattern: impl Into<Pattern>) -> Self {
        self.insert(name, pattern);
        self
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        pattern: impl Into<Pattern>,
    ) -> Option<Pattern> {
        self.patterns.insert(name.into(), pattern.into())
    }

    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.patterns.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Pattern)> {
        self.patterns.iter().map(|(name, p)| (name.as_str(), p))
    }
}

impl<K: Into<String>, P: Into<Pattern>> FromIterator<(K, P)> for Settings {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        let mut settings = Settings::new();
        for (name, pattern) in iter {
            settings.insert(name, pattern);
        }
        settings
    }
}
