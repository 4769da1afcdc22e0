//! Flattened, queryable element tree.

use std::collections::HashMap;
use std::ops::Index;

use log::trace;

use crate::element::Element;
use crate::selector::{SelectorError, SelectorList};

/// Index of a node inside a [`Document`].
///
/// Ids are assigned in document (pre-order) order, so comparing two ids
/// compares their position in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single element of a [`Document`], detached from its children.
#[derive(Debug, Clone)]
pub struct Node {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: HashMap<String, String>,
    pub value: Option<String>,
    pub checked: bool,
    pub selected: bool,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Look up an attribute the way a selector sees it.
    ///
    /// `id`, `class` and `value` are served from the dedicated fields.
    pub fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "id" => self.id.clone(),
            "class" if !self.classes.is_empty() => Some(self.classes.join(" ")),
            "value" => self.value.clone().or_else(|| self.attrs.get(name).cloned()),
            _ => self.attrs.get(name).cloned(),
        }
    }

    pub fn kind(&self) -> Option<&str> {
        self.attrs.get("type").map(String::as_str)
    }

    /// Checked state as the `:checked` pseudo-class sees it: checked
    /// checkbox/radio inputs and selected options.
    pub fn is_checked(&self) -> bool {
        match self.tag.as_str() {
            "input" => self.is_checkable() && self.checked,
            "option" => self.selected,
            _ => false,
        }
    }

    fn is_checkable(&self) -> bool {
        self.tag == "input" && matches!(self.kind(), Some("checkbox") | Some("radio"))
    }
}

/// An element tree flattened into an arena for selector queries.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        let mut nodes = Vec::new();
        push_node(&mut nodes, root, None);
        Self { nodes }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// All nodes in document order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.iter()
            .find(|(_, node)| node.id.as_deref() == Some(id))
            .map(|(node_id, _)| node_id)
    }

    /// All nodes matching `selector`, in document order and without duplicates.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        let selector = SelectorList::parse(selector)?;
        Ok(self.select(&selector))
    }

    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>, SelectorError> {
        Ok(self.query_selector_all(selector)?.into_iter().next())
    }

    /// Run an already parsed selector against the document.
    pub fn select(&self, selector: &SelectorList) -> Vec<NodeId> {
        let found: Vec<NodeId> = self
            .iter()
            .filter(|&(id, _)| selector.matches(self, id))
            .map(|(id, _)| id)
            .collect();
        trace!("selector matched {} of {} nodes", found.len(), self.len());
        found
    }

    /// The current value of a form control.
    ///
    /// Text controls report their value or an empty string. Checkable inputs
    /// without an explicit value report `"on"`. A `select` reports its first
    /// selected option, falling back to its first option. Elements that are
    /// not form controls have no value.
    pub fn value(&self, id: NodeId) -> Option<String> {
        let node = self.get(id)?;
        match node.tag.as_str() {
            "input" if node.is_checkable() => {
                Some(node.value.clone().unwrap_or_else(|| "on".to_string()))
            }
            "input" | "textarea" => Some(node.value.clone().unwrap_or_default()),
            "option" => node.value.clone(),
            "select" => {
                let options = self.options(id);
                options
                    .iter()
                    .find(|&&option| self[option].selected)
                    .or_else(|| options.first())
                    .and_then(|&option| self[option].value.clone())
            }
            _ => None,
        }
    }

    pub fn is_checked(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_checked)
    }

    /// Option descendants of a `select`, in document order.
    fn options(&self, select: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack = vec![select];
        while let Some(current) = stack.pop() {
            for &child in self[current].children.iter().rev() {
                if self[child].tag == "option" {
                    found.push(child);
                } else {
                    stack.push(child);
                }
            }
        }
        found.sort();
        found
    }
}

impl Index<NodeId> for Document {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl From<Element> for Document {
    fn from(root: Element) -> Self {
        Self::new(root)
    }
}

fn push_node(nodes: &mut Vec<Node>, element: Element, parent: Option<NodeId>) -> NodeId {
    let Element {
        tag,
        id,
        classes,
        attrs,
        value,
        checked,
        selected,
        children,
    } = element;

    let node_id = NodeId(nodes.len());
    nodes.push(Node {
        tag: tag.to_ascii_lowercase(),
        id,
        classes,
        attrs,
        value,
        checked,
        selected,
        parent,
        children: Vec::with_capacity(children.len()),
    });

    for child in children {
        let child_id = push_node(nodes, child, Some(node_id));
        nodes[node_id.0].children.push(child_id);
    }

    node_id
}
