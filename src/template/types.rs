//! Template types and error definitions

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::parser::SyntaxErrorKind;

/// Default prefix for generated template identifiers
pub const DEFAULT_ID_PREFIX: &str = "template";

/// Variable bindings, keyed by the verbatim placeholder name
pub type Variables = serde_json::Map<String, serde_json::Value>;

/// Template-specific error type
#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("Context must be set before processing template {template_id}")]
    ContextNotSet { template_id: TemplateId },

    #[error("Missing variable: {0}")]
    MissingVariable(String),

    #[error("Malformed template at byte {position}: {kind}")]
    Malformed {
        position: usize,
        kind: SyntaxErrorKind,
    },

    #[error("Invalid variables: {0}")]
    InvalidVariables(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Identifier of a template processor session.
///
/// Uniqueness is not enforced; generated identifiers embed the creation
/// time and are only meant for caller bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    /// Wrap a caller-supplied identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate an identifier of the form `{prefix}_{seconds}.{micros}`
    pub fn generate(prefix: &str) -> Self {
        let now = Utc::now();
        Self(format!(
            "{}_{}.{:06}",
            prefix,
            now.timestamp(),
            now.timestamp_subsec_micros()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplateId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TemplateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Variables bound to a processor for one substitution cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateContext {
    /// Bound variables
    pub variables: Variables,

    /// When the variables were bound
    pub timestamp: DateTime<Utc>,

    /// Processor that owns this context
    pub template_id: TemplateId,
}

impl TemplateContext {
    pub fn new(template_id: TemplateId, variables: Variables) -> Self {
        Self {
            variables,
            timestamp: Utc::now(),
            template_id,
        }
    }
}
