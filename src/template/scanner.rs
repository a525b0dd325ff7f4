//! Placeholder scanner

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex_lite::Regex;

lazy_static! {
    /// A `{`, then everything up to the next `}`
    static ref PLACEHOLDER: Regex = Regex::new(r"\{([^}]+)\}").unwrap();
}

/// Extract the set of variable names referenced by a template.
///
/// Each `{...}` span is captured verbatim, without trimming or validation.
/// This never fails, but on malformed input the result is best-effort;
/// use [`super::validate_template`] to decide well-formedness.
pub fn extract_variables(template: &str) -> BTreeSet<String> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
