//! Strict placeholder parser.
//!
//! Splits a template into literal text and `{name}` placeholders. Braces
//! never nest and there is no escape sequence, so any `{` inside an open
//! placeholder, any stray `}`, or an unterminated placeholder is a syntax
//! error. This is the authoritative structural check; the scanner in
//! [`super::scanner`] is only best-effort.

use thiserror::Error;

/// A piece of a parsed template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied to the output unchanged
    Literal(&'a str),
    /// Verbatim variable name between `{` and `}`
    Placeholder(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("unexpected '{{' inside placeholder")]
    NestedOpenBrace,

    #[error("unmatched '}}'")]
    UnmatchedCloseBrace,

    #[error("placeholder is never closed")]
    UnclosedPlaceholder,

    #[error("placeholder has no variable name")]
    EmptyPlaceholder,
}

/// Syntax error with the byte offset of the offending brace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at byte {position}")]
pub struct SyntaxError {
    pub position: usize,
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    fn new(position: usize, kind: SyntaxErrorKind) -> Self {
        Self { position, kind }
    }
}

/// Parse a template into segments, borrowing from the input
pub fn parse(template: &str) -> Result<Vec<Segment<'_>>, SyntaxError> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut open: Option<usize> = None;

    for (pos, ch) in template.char_indices() {
        match (ch, open) {
            ('{', None) => {
                if pos > literal_start {
                    segments.push(Segment::Literal(&template[literal_start..pos]));
                }
                open = Some(pos);
            }
            ('{', Some(_)) => {
                return Err(SyntaxError::new(pos, SyntaxErrorKind::NestedOpenBrace));
            }
            ('}', None) => {
                return Err(SyntaxError::new(pos, SyntaxErrorKind::UnmatchedCloseBrace));
            }
            ('}', Some(start)) => {
                let name = &template[start + 1..pos];
                if name.trim().is_empty() {
                    return Err(SyntaxError::new(start, SyntaxErrorKind::EmptyPlaceholder));
                }
                segments.push(Segment::Placeholder(name));
                open = None;
                literal_start = pos + 1;
            }
            _ => {}
        }
    }

    if let Some(start) = open {
        return Err(SyntaxError::new(start, SyntaxErrorKind::UnclosedPlaceholder));
    }

    if literal_start < template.len() {
        segments.push(Segment::Literal(&template[literal_start..]));
    }

    Ok(segments)
}
