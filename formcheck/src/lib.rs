pub mod config;
pub mod dom;
pub mod validation;

pub use config::ConfigError;
pub use validation::{
    ElementProvider, FailedRule, Pattern, Settings, Spec, SpecSet, TextRule, ValidationResult,
    Validator,
};

pub mod prelude {
    pub use crate::config::ConfigError;
    pub use crate::validation::{
        ElementProvider, FailedRule, Pattern, Settings, Spec, SpecSet, TextRule,
        ValidationResult, Validator,
    };
    pub use formdom::{Document, Element};
}
