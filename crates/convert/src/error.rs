use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Stable codes for DMP-1 conversion failures; the string forms are part
/// of the tool's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConvertErrorCode {
    TabsInvalid,
    HtmlUnsupported,
    TablesUnsupported,
    TaskListUnsupported,
    CodeblockUnsupported,
    AmbiguousListIndent,
}

impl ConvertErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ConvertErrorCode::TabsInvalid => "tabs-invalid",
            ConvertErrorCode::HtmlUnsupported => "html-unsupported",
            ConvertErrorCode::TablesUnsupported => "tables-unsupported",
            ConvertErrorCode::TaskListUnsupported => "task-list-unsupported",
            ConvertErrorCode::CodeblockUnsupported => "codeblock-unsupported",
            ConvertErrorCode::AmbiguousListIndent => "ambiguous-list-indent",
        }
    }
}

impl fmt::Display for ConvertErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A conversion failure with its stable code and 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{code}: {message} (line {line})")]
pub struct ConvertError {
    pub code: ConvertErrorCode,
    pub message: String,
    pub line: usize,
}

impl ConvertError {
    pub(crate) fn at(code: ConvertErrorCode, message: impl Into<String>, line: usize) -> Self {
        ConvertError {
            code,
            message: message.into(),
            line,
        }
    }
}
