//! Loading settings and spec sets from JSON.
//!
//! Settings files keep patterns under a `regex` key. A pattern is either a
//! bare source string, a `{ "pattern", "flags" }` object, or a reference to
//! a built-in matcher:
//!
//! ```json
//! {
//!   "regex": {
//!     "notEmpty": "\\S+",
//!     "email": { "pattern": "^[\\w-]+@[\\w-]+(\\.[\\w-]+)*\\.[a-z]{2,}$", "flags": "i" },
//!     "strictEmail": { "builtin": "email" }
//!   }
//! }
//! ```
//!
//! Sources use the `regex` crate syntax, where `\w`, `\d` and `\s` are
//! Unicode classes.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::validation::{Pattern, Settings, SpecSet};

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid pattern '{name}': {source}")]
    Pattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("unsupported flag '{flag}' on pattern '{name}'")]
    Flag { name: String, flag: char },

    #[error("unknown builtin '{builtin}' on pattern '{name}'")]
    Builtin { name: String, builtin: String },
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    regex: BTreeMap<String, PatternDef>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PatternDef {
    Source(String),
    Regex {
        pattern: String,
        #[serde(default)]
        flags: String,
    },
    Builtin {
        builtin: String,
    },
}

impl PatternDef {
    fn compile(self, name: &str) -> Result<Pattern, ConfigError> {
        match self {
            PatternDef::Source(source) => compile_regex(name, &source, ""),
            PatternDef::Regex { pattern, flags } => compile_regex(name, &pattern, &flags),
            PatternDef::Builtin { builtin } => match builtin.as_str() {
                "email" => Ok(Pattern::Email),
                _ => Err(ConfigError::Builtin {
                    name: name.to_string(),
                    builtin,
                }),
            },
        }
    }
}

/// Compile a pattern with JavaScript-style flags.
///
/// `i`, `m` and `s` become inline flags. `g`, `u` and `y` only affect
/// stateful matching in a browser and are accepted without effect.
///
/// Patterns are always Unicode-aware: `\w`, `\d` and `\s` match any
/// Unicode word character, decimal digit or whitespace, not only ASCII.
/// Write `[0-9]` or `(?-u:\d)` where only ASCII digits are allowed.
fn compile_regex(name: &str, source: &str, flags: &str) -> Result<Pattern, ConfigError> {
    let mut inline = String::new();
    for flag in flags.chars() {
        match flag {
            'i' | 'm' | 's' => {
                if !inline.contains(flag) {
                    inline.push(flag);
                }
            }
            'g' | 'u' | 'y' => debug!("ignoring flag '{flag}' on pattern {name:?}"),
            _ => {
                return Err(ConfigError::Flag {
                    name: name.to_string(),
                    flag,
                });
            }
        }
    }

    let source = if inline.is_empty() {
        source.to_string()
    } else {
        format!("(?{inline}){source}")
    };

    Pattern::regex(&source).map_err(|source| ConfigError::Pattern {
        name: name.to_string(),
        source,
    })
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl Settings {
    /// Parse settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let file: SettingsFile = serde_json::from_str(json)?;
        let mut settings = Settings::new();
        for (name, def) in file.regex {
            let pattern = def.compile(&name)?;
            settings.insert(name, pattern);
        }
        debug!("loaded {} patterns", settings.len());
        Ok(settings)
    }

    /// Read and parse a JSON settings file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&read(path.as_ref())?)
    }
}

impl SpecSet {
    /// Parse a spec set from a JSON object keyed by selector.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON spec file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&read(path.as_ref())?)
    }
}
