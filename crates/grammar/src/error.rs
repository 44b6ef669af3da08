//! Validation error type and its stable wire codes.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Stable identifiers for every way a document can fail validation.
///
/// These codes are part of the cross-implementation contract: the same
/// invalid input must produce the same code (and line) everywhere, so they
/// must never be renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCode {
    UnknownLine,
    UnclosedBlock,
    LevelJump,
    BreakOutsideBlock,
    ContinuationWithoutItem,
    InlineNesting,
    InlineUnclosedSpan,
    InlineEmptySpan,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::UnknownLine => "unknown-line",
            ErrorCode::UnclosedBlock => "unclosed-block",
            ErrorCode::LevelJump => "level-jump",
            ErrorCode::BreakOutsideBlock => "break-outside-block",
            ErrorCode::ContinuationWithoutItem => "continuation-without-item",
            ErrorCode::InlineNesting => "inline-nesting",
            ErrorCode::InlineUnclosedSpan => "inline-unclosed-span",
            ErrorCode::InlineEmptySpan => "inline-empty-span",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first error found in a document. `line` is 1-based; it is absent only
/// for end-of-document errors (an unclosed block).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{code}: {message}")]
pub struct ValidationError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl ValidationError {
    pub fn at(code: ErrorCode, message: impl Into<String>, line: usize) -> Self {
        ValidationError {
            code,
            message: message.into(),
            line: Some(line),
        }
    }

    pub fn end_of_document(code: ErrorCode, message: impl Into<String>) -> Self {
        ValidationError {
            code,
            message: message.into(),
            line: None,
        }
    }
}

/// The JSON validation result: `{"ok":true}` or
/// `{"ok":false,"error":{"code":...,"message":...,"line":...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

impl From<Result<(), ValidationError>> for Validation {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Validation {
                ok: true,
                error: None,
            },
            Err(error) => Validation {
                ok: false,
                error: Some(error),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_kebab_case_on_the_wire() {
        let err = ValidationError::at(ErrorCode::LevelJump, "jump", 2);
        let json = serde_json::to_value(Validation::from(Err(err))).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"]["code"], "level-jump");
        assert_eq!(json["error"]["line"], 2);
    }

    #[test]
    fn ok_result_has_no_error_field() {
        let json = serde_json::to_string(&Validation::from(Ok(()))).unwrap();
        assert_eq!(json, r#"{"ok":true}"#);
    }

    #[test]
    fn line_is_omitted_for_end_of_document_errors() {
        let err = ValidationError::end_of_document(ErrorCode::UnclosedBlock, "unclosed");
        let json = serde_json::to_string(&err).unwrap();
        assert!(!json.contains("line"));
    }
}
