//! Inline span validation for one logical line.

use crate::error::{ErrorCode, ValidationError};
use docdraw_doc::inline::{InlineIssue, InlineIssueKind, parse_runs};

/// Validates the inline spans of one line of text.
///
/// `line` is the 1-based source line number reported on failure. This is a
/// pure function over the same scanner the document builder uses, so the
/// accepted language cannot drift between validation and rendering.
pub fn validate_inline(text: &str, line: usize) -> Result<(), ValidationError> {
    parse_runs(text)
        .map(|_| ())
        .map_err(|issue| inline_error(issue, line))
}

fn inline_error(issue: InlineIssue, line: usize) -> ValidationError {
    let InlineIssue { kind, column } = issue;
    let (code, message) = match kind {
        InlineIssueKind::Nesting => (
            ErrorCode::InlineNesting,
            format!(
                "Inline spans may not nest or overlap (marker at column {column}); \
                 escape literal marker characters with a backslash."
            ),
        ),
        InlineIssueKind::UnclosedSpan => (
            ErrorCode::InlineUnclosedSpan,
            format!("Inline span opened at column {column} is not closed before the end of the line."),
        ),
        InlineIssueKind::EmptySpan => (
            ErrorCode::InlineEmptySpan,
            format!("Inline span opened at column {column} has no content."),
        ),
    };
    ValidationError::at(code, message, line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_lines_pass() {
        assert!(validate_inline("plain", 1).is_ok());
        assert!(validate_inline("**b** *i* ++u++ `c`", 1).is_ok());
        assert!(validate_inline(r"escaped \*stars\* and \`ticks\`", 1).is_ok());
    }

    #[test]
    fn overlap_reports_nesting_with_line() {
        let err = validate_inline("**bold *italic** still**", 3).unwrap_err();
        assert_eq!(err.code, ErrorCode::InlineNesting);
        assert_eq!(err.line, Some(3));
    }

    #[test]
    fn unclosed_and_empty() {
        let err = validate_inline("++never closed", 5).unwrap_err();
        assert_eq!(err.code, ErrorCode::InlineUnclosedSpan);
        let err = validate_inline("oops ``", 6).unwrap_err();
        assert_eq!(err.code, ErrorCode::InlineEmptySpan);
    }

    #[test]
    fn escaped_text_round_trips_to_plain_runs() {
        // Text with only escaped markers validates and produces exactly one
        // unstyled run.
        let text = r"\*\*not bold\*\* \+\+nor underlined\+\+";
        assert!(validate_inline(text, 1).is_ok());
        let runs = parse_runs(text).unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].style, docdraw_doc::InlineStyle::PLAIN);
        assert!(!runs[0].is_code);
    }
}
