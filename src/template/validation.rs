//! Template validation

use super::parser::parse;

/// Check whether a template is well-formed.
///
/// Two checks must pass: the raw counts of `{` and `}` match, and the
/// strict parser accepts the template. Failures are reported as `false`,
/// never as an error.
pub fn validate_template(template: &str) -> bool {
    let open = template.matches('{').count();
    let close = template.matches('}').count();
    if open != close {
        tracing::debug!(open, close, "Template rejected: unbalanced braces");
        return false;
    }

    match parse(template) {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!(position = e.position, reason = %e.kind, "Template rejected");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_well_formed() {
        assert!(validate_template("The {animal} is {color} and {mood}."));
        assert!(validate_template("no placeholders at all"));
        assert!(validate_template(""));
    }

    #[test]
    fn test_validate_nested_with_balanced_counts() {
        assert!(!validate_template("The {animal is {color} and {mood}."));

        // Balanced counts, rejected by the parser
        assert!(!validate_template("{a {b}}"));
        assert!(!validate_template("{a}} {{b}"));
    }

    #[test]
    fn test_validate_unbalanced() {
        assert!(!validate_template("Hello {name"));
        assert!(!validate_template("Hello name}"));
    }

    #[test]
    fn test_validate_balanced_but_reversed() {
        assert!(!validate_template("}name{"));
    }

    #[test]
    fn test_validate_empty_placeholder() {
        assert!(!validate_template("Hello {}"));
    }
}
