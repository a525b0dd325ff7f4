//! G-UNIT (Guided Unified Notation for Intelligent Text)
//!
//! A small placeholder templating engine: substitutes `{name}` variables
//! into template strings, validates placeholder syntax, and extracts the
//! variable names a template references.

// Template engine
pub mod gunit;
pub mod template;

// Supporting modules
pub mod annotate;
pub mod cli;
pub mod config;
pub mod error;
pub mod telemetry;

pub use gunit::Gunit;
pub use template::{
    extract_variables, validate_template, TemplateContext, TemplateError, TemplateId,
    TemplateProcessor, TemplateResult,
};
