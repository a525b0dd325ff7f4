//! Variable substitution engine for templates

use std::borrow::Cow;

use super::parser::{parse, Segment};
use super::types::{TemplateError, TemplateResult, Variables};

/// Substitute `{variable}` placeholders in a template string.
///
/// The template is parsed strictly first and every referenced name is
/// resolved before anything is returned, so the result is either the
/// complete output or an error.
pub fn substitute(template: &str, variables: &Variables) -> TemplateResult<String> {
    let segments = parse(template).map_err(|e| TemplateError::Malformed {
        position: e.position,
        kind: e.kind,
    })?;

    let mut result = String::with_capacity(template.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => result.push_str(text),
            Segment::Placeholder(name) => {
                let value = variables
                    .get(name)
                    .ok_or_else(|| TemplateError::MissingVariable(name.to_string()))?;
                result.push_str(&render_value(value));
            }
        }
    }

    Ok(result)
}

/// Text representation of a bound value
pub fn render_value(value: &serde_json::Value) -> Cow<'_, str> {
    match value {
        serde_json::Value::String(s) => Cow::Borrowed(s),
        serde_json::Value::Number(n) => Cow::Owned(n.to_string()),
        serde_json::Value::Bool(b) => Cow::Owned(b.to_string()),
        serde_json::Value::Null => Cow::Borrowed(""),
        // For arrays and objects, use JSON representation
        _ => Cow::Owned(value.to_string()),
    }
}

/// Convert a JSON object into variable bindings
pub fn variables_from_json(variables: serde_json::Value) -> TemplateResult<Variables> {
    match variables {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(TemplateError::InvalidVariables(
            "Variables must be an object".to_string(),
        )),
    }
}
