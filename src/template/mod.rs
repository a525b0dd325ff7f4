//! Placeholder template system.
//!
//! This module provides:
//! - Template strings with variable placeholders (`{variable}`)
//! - A strict parser and validator for placeholder syntax
//! - A best-effort scanner that lists referenced variable names
//! - A substitution engine and a stateful processor with a chained context builder
//!
//! Braces never nest and cannot be escaped, so a literal `{` or `}` can not
//! appear in rendered output.
//!
//! # Example
//!
//! ```ignore
//! let mut processor = TemplateProcessor::new(Some("greeting".into()));
//!
//! let text = processor
//!     .set_context([("name", "Developer"), ("product", "G-UNIT")])
//!     .process("Hello, {name}! Welcome to {product}.")?;
//!
//! assert!(validate_template("Hello, {name}!"));
//! assert!(!validate_template("Hello, {name!"));
//! ```

mod parser;
mod processor;
mod scanner;
mod substitution;
mod types;
mod validation;

pub use parser::{parse, Segment, SyntaxError, SyntaxErrorKind};
pub use processor::TemplateProcessor;
pub use scanner::extract_variables;
pub use substitution::{render_value, substitute, variables_from_json};
pub use types::{
    TemplateContext, TemplateError, TemplateId, TemplateResult, Variables, DEFAULT_ID_PREFIX,
};
pub use validation::validate_template;
