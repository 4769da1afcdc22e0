//! CSS-like selectors for locating form elements.
//!
//! Supported syntax:
//!
//! - type selectors and `*`
//! - `#id`, `.class`
//! - `[attr]`, `[attr=value]`, `[attr="quoted value"]`
//! - the `:checked` pseudo-class
//! - descendant (` `) and child (`>`) combinators
//! - selector groups separated by `,`

mod parse;

use thiserror::Error;

use crate::document::{Document, Node, NodeId};

/// Errors produced while parsing a selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unexpected character '{found}' at offset {offset}")]
    Unexpected { found: char, offset: usize },

    #[error("unexpected end of selector at offset {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("unclosed attribute selector starting at offset {offset}")]
    UnclosedAttribute { offset: usize },

    #[error("unsupported pseudo-class ':{name}'")]
    UnsupportedPseudo { name: String },
}

/// A parsed, comma separated selector group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    selectors: Vec<ComplexSelector>,
}

impl SelectorList {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        parse::Parser::new(input).parse_list()
    }

    /// Whether any selector of the group matches `node`.
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        self.selectors.iter().any(|s| s.matches(doc, node))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Combinator {
    Descendant,
    Child,
}

/// Compound selectors joined by combinators, left to right.
///
/// `combinators[i]` joins `compounds[i]` and `compounds[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ComplexSelector {
    pub(crate) compounds: Vec<Compound>,
    pub(crate) combinators: Vec<Combinator>,
}

impl ComplexSelector {
    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        match self.compounds.len() {
            0 => false,
            n => self.matches_at(doc, node, n - 1),
        }
    }

    // Right-to-left: `node` must match compound `idx`, and some ancestor
    // chain must satisfy the compounds before it.
    fn matches_at(&self, doc: &Document, node: NodeId, idx: usize) -> bool {
        if !self.compounds[idx].matches(&doc[node]) {
            return false;
        }
        if idx == 0 {
            return true;
        }

        match self.combinators[idx - 1] {
            Combinator::Child => doc[node]
                .parent
                .is_some_and(|parent| self.matches_at(doc, parent, idx - 1)),
            Combinator::Descendant => {
                let mut current = doc[node].parent;
                while let Some(ancestor) = current {
                    if self.matches_at(doc, ancestor, idx - 1) {
                        return true;
                    }
                    current = doc[ancestor].parent;
                }
                false
            }
        }
    }
}

/// A type selector (or none, for `*`) plus simple selectors on one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Compound {
    pub(crate) tag: Option<String>,
    pub(crate) simples: Vec<Simple>,
}

impl Compound {
    fn matches(&self, node: &Node) -> bool {
        if let Some(tag) = &self.tag {
            if !node.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        self.simples.iter().all(|simple| simple.matches(node))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Simple {
    Id(String),
    Class(String),
    Attr { name: String, value: Option<String> },
    Checked,
}

impl Simple {
    fn matches(&self, node: &Node) -> bool {
        match self {
            Simple::Id(id) => node.id.as_deref() == Some(id.as_str()),
            Simple::Class(class) => node.has_class(class),
            Simple::Attr { name, value: None } => node.attribute(name).is_some(),
            Simple::Attr {
                name,
                value: Some(expected),
            } => node.attribute(name).as_deref() == Some(expected.as_str()),
            Simple::Checked => node.is_checked(),
        }
    }
}
