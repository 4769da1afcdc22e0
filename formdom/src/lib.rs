//! In-memory form element tree with a CSS-like selector engine.
//!
//! Build a tree of [`Element`]s (or deserialize one from JSON), flatten it
//! into a [`Document`], then query it:
//!
//! ```
//! use formdom::{Document, Element};
//!
//! let doc = Document::new(
//!     Element::form()
//!         .child(Element::input("email").id("email").value("a@b.co"))
//!         .child(Element::input("checkbox").class("terms").checked(true)),
//! );
//!
//! let email = doc.query_selector("#email").unwrap().unwrap();
//! assert_eq!(doc.value(email).as_deref(), Some("a@b.co"));
//! assert_eq!(doc.query_selector_all(".terms:checked").unwrap().len(), 1);
//! ```

pub mod document;
pub mod element;
pub mod selector;

pub use document::{Document, Node, NodeId};
pub use element::Element;
pub use selector::{SelectorError, SelectorList};
