//! Form validation against a live element tree.
//!
//! A [`Validator`] owns a table of named patterns ([`Settings`]). Each call to
//! [`Validator::validate`] takes a [`SpecSet`] mapping element selectors to
//! what those elements must look like, reads the elements through an
//! [`ElementProvider`], and reports every selector whose check failed.
//!
//! # Example
//!
//! ```
//! use formcheck::validation::{Pattern, Settings, Spec, SpecSet, TextRule, Validator};
//! use formdom::{Document, Element};
//!
//! let settings = Settings::new()
//!     .pattern("notEmpty", Pattern::regex(r"\S+").unwrap())
//!     .pattern("numeric", Pattern::regex(r"^[0-9]+$").unwrap());
//! let validator = Validator::new(settings);
//!
//! let form = Document::new(
//!     Element::form()
//!         .child(Element::input("text").id("postcode").value("12ab"))
//!         .child(Element::input("checkbox").class("terms-of-use")),
//! );
//!
//! let specs = SpecSet::new()
//!     .with(
//!         "#postcode",
//!         Spec::text([
//!             TextRule::new("notEmpty", "Empty text!"),
//!             TextRule::new("numeric", "Wrong numeric format!"),
//!         ]),
//!     )
//!     .with(".terms-of-use", Spec::checkbox("Not selected checkbox!"));
//!
//! let result = validator.validate(&form, specs);
//! assert!(result.is_invalid());
//! assert_eq!(result.errors().len(), 2);
//! assert_eq!(result.first_invalid_selector(), Some("#postcode"));
//! ```

mod provider;
mod result;
mod settings;
mod spec;
mod validator;

pub use provider::ElementProvider;
pub use result::{FailedRule, ValidationResult};
pub use settings::{Pattern, Settings};
pub use spec::{Spec, SpecSet, TextRule};
pub use validator::Validator;
