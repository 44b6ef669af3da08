//! The in-memory representation of a DocDraw document.
//!
//! A document is an ordered sequence of [`Block`] nodes; blocks are fully
//! self-contained once parsed and carry no cross-references.

use serde::Serialize;

/// A string type for document content.
pub type TextStr = String;

/// Style flags carried by a single inline run.
///
/// A run is either code (monospace, no other style) or carries zero or more
/// of bold/italic/underline; the parser never produces both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct InlineStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl InlineStyle {
    pub const PLAIN: InlineStyle = InlineStyle {
        bold: false,
        italic: false,
        underline: false,
    };
}

/// A contiguous stretch of text with a single style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    pub text: TextStr,
    pub style: InlineStyle,
    pub is_code: bool,
}

impl Run {
    /// A run with no styling, used for plain segments and for the raw-text
    /// fallback path.
    pub fn plain(text: impl Into<TextStr>) -> Self {
        Run {
            text: text.into(),
            style: InlineStyle::PLAIN,
            is_code: false,
        }
    }
}

/// The styled content of one logical line.
pub type InlineText = Vec<Run>;

/// Which counting scheme an ordered list item uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderedKind {
    Numeric,
    AlphaLower,
    AlphaUpper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListKind {
    Bullet,
    Ordered(OrderedKind),
}

/// A top-level structural unit of a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Block {
    Heading {
        /// 1..=6.
        level: u8,
        text: InlineText,
    },
    Paragraph {
        /// Hard lines; each entry is wrapped independently. A single-line
        /// paragraph has exactly one entry. An empty entry is an explicit
        /// blank line produced by the `br` keyword.
        lines: Vec<InlineText>,
        single_line: bool,
    },
    Quote {
        text: InlineText,
    },
    Divider,
    /// Raw lines, whitespace preserved, no inline interpretation.
    CodeBlock {
        raw_lines: Vec<TextStr>,
    },
    ListItem {
        kind: ListKind,
        /// Nesting level, 1..=9.
        level: u8,
        text: InlineText,
        /// True when this item begins a new list run, i.e. the previous
        /// source line was not a list item or continuation. Ordered
        /// counters restart at a run boundary.
        starts_run: bool,
    },
    /// Continuation text attaching to the preceding list item at the same
    /// indentation column; carries no level or marker of its own.
    ListContinuation {
        text: InlineText,
    },
}
