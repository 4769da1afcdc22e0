use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A form element and its subtree.
///
/// Elements are plain data: build them with the chained setters below or
/// deserialize them from a JSON snapshot, then hand the root to
/// [`Document::new`](crate::Document::new) for querying.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Element {
    // Identity
    pub tag: String,
    pub id: Option<String>,
    #[serde(alias = "class")]
    pub classes: Vec<String>,
    pub attrs: HashMap<String, String>,

    // Form state
    /// Current value of the control. For `input`/`textarea` this is the text
    /// the user typed, for `option` the submitted value.
    pub value: Option<String>,
    /// Checked state of checkbox and radio inputs.
    pub checked: bool,
    /// Selected state of `option` elements.
    pub selected: bool,

    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn form() -> Self {
        Self::new("form")
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    /// An `input` with the given `type` attribute (`text`, `checkbox`, ...).
    pub fn input(kind: impl Into<String>) -> Self {
        Self::new("input").attr("type", kind)
    }

    pub fn textarea() -> Self {
        Self::new("textarea")
    }

    pub fn select() -> Self {
        Self::new("select")
    }

    pub fn option(value: impl Into<String>) -> Self {
        Self::new("option").value(value)
    }

    // Builder methods

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.attr("name", name)
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// The `type` attribute, if any.
    pub fn kind(&self) -> Option<&str> {
        self.attrs.get("type").map(String::as_str)
    }
}
