//! [`ElementProvider`] for [`formdom`] documents.

use formdom::{Document, NodeId};
use log::warn;

use crate::validation::ElementProvider;

impl ElementProvider for Document {
    type Handle = NodeId;

    fn resolve(&self, selector: &str) -> Vec<NodeId> {
        match self.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                warn!("ignoring selector {selector:?}: {err}");
                Vec::new()
            }
        }
    }

    fn read_value(&self, element: NodeId) -> Option<String> {
        self.value(element)
    }

    fn read_checked(&self, element: NodeId) -> bool {
        self.is_checked(element)
    }
}
