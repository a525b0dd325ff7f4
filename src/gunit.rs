//! G-UNIT (Guided Unified Notation for Intelligent Text) facade.
//!
//! Bundles one-shot processing, processor creation, validation and variable
//! extraction behind a single type.

use std::collections::BTreeSet;

use crate::config::TemplateSettings;
use crate::template::{
    self, TemplateId, TemplateProcessor, TemplateResult, DEFAULT_ID_PREFIX,
};

/// Entry point for template processing
#[derive(Debug)]
pub struct Gunit {
    processor: TemplateProcessor,
    id_prefix: String,
}

impl Default for Gunit {
    fn default() -> Self {
        Self::new()
    }
}

impl Gunit {
    pub fn new() -> Self {
        Self::with_id_prefix(DEFAULT_ID_PREFIX)
    }

    /// Build from the `template` configuration section
    pub fn from_settings(settings: &TemplateSettings) -> Self {
        Self::with_id_prefix(&settings.id_prefix)
    }

    fn with_id_prefix(prefix: &str) -> Self {
        Self {
            processor: TemplateProcessor::with_prefix(None, prefix),
            id_prefix: prefix.to_string(),
        }
    }

    /// Create a new, independent processor
    pub fn create_template(&self, template_id: Option<TemplateId>) -> TemplateProcessor {
        TemplateProcessor::with_prefix(template_id, &self.id_prefix)
    }

    /// Process a template with the given variables using the built-in processor
    pub fn process<I, K, V>(&mut self, template: &str, variables: I) -> TemplateResult<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.processor.set_context(variables).process(template)
    }

    /// Process a template with variables given as a JSON object
    pub fn process_json(
        &mut self,
        template: &str,
        variables: serde_json::Value,
    ) -> TemplateResult<String> {
        self.processor.set_context_json(variables)?.process(template)
    }

    /// See [`template::validate_template`]
    pub fn validate_template(template: &str) -> bool {
        template::validate_template(template)
    }

    /// See [`template::extract_variables`]
    pub fn extract_variables(template: &str) -> BTreeSet<String> {
        template::extract_variables(template)
    }
}
