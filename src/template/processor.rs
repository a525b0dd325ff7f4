//! Stateful template processor with a chained context builder

use super::substitution::{substitute, variables_from_json};
use super::types::{
    TemplateContext, TemplateError, TemplateId, TemplateResult, Variables, DEFAULT_ID_PREFIX,
};

/// A template processing session.
///
/// Holds at most one [`TemplateContext`]; each [`set_context`] call
/// replaces it. The context stays bound after [`process`] until it is
/// replaced.
///
/// A processor is not synchronized. Callers sharing one instance across
/// threads must serialize access themselves; separate instances are
/// independent.
///
/// [`set_context`]: TemplateProcessor::set_context
/// [`process`]: TemplateProcessor::process
#[derive(Debug, Clone)]
pub struct TemplateProcessor {
    template_id: TemplateId,
    context: Option<TemplateContext>,
}

impl Default for TemplateProcessor {
    fn default() -> Self {
        Self::new(None)
    }
}

impl TemplateProcessor {
    /// Create a processor, generating an identifier when none is given
    pub fn new(template_id: Option<TemplateId>) -> Self {
        Self::with_prefix(template_id, DEFAULT_ID_PREFIX)
    }

    /// Create a processor, generating an identifier with `prefix` when none is given
    pub fn with_prefix(template_id: Option<TemplateId>, prefix: &str) -> Self {
        Self {
            template_id: template_id.unwrap_or_else(|| TemplateId::generate(prefix)),
            context: None,
        }
    }

    pub fn template_id(&self) -> &TemplateId {
        &self.template_id
    }

    /// Currently bound context, if any
    pub fn context(&self) -> Option<&TemplateContext> {
        self.context.as_ref()
    }

    /// Bind variables, replacing any previous context.
    ///
    /// ```ignore
    /// let text = processor
    ///     .set_context([("character", "wizard"), ("action", "code")])
    ///     .process("A {character} who loved to {action}.")?;
    /// ```
    pub fn set_context<I, K, V>(&mut self, variables: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        let variables: Variables = variables
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.bind(variables)
    }

    /// Bind variables from a JSON object, replacing any previous context
    pub fn set_context_json(&mut self, variables: serde_json::Value) -> TemplateResult<&mut Self> {
        let variables = variables_from_json(variables)?;
        Ok(self.bind(variables))
    }

    fn bind(&mut self, variables: Variables) -> &mut Self {
        tracing::debug!(
            template_id = %self.template_id,
            variable_count = variables.len(),
            "Template context set"
        );
        self.context = Some(TemplateContext::new(self.template_id.clone(), variables));
        self
    }

    /// Process a template with the current context
    pub fn process(&self, template: &str) -> TemplateResult<String> {
        let context = self
            .context
            .as_ref()
            .ok_or_else(|| TemplateError::ContextNotSet {
                template_id: self.template_id.clone(),
            })?;

        let result = substitute(template, &context.variables)?;

        tracing::debug!(
            template_id = %self.template_id,
            input_len = template.len(),
            output_len = result.len(),
            "Template processed"
        );

        Ok(result)
    }
}
