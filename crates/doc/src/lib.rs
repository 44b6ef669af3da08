//! DocDraw document model and shared text tokenization.
//!
//! This crate defines the in-memory representation of a DocDraw document
//! after parsing but before layout, together with the line classifier and
//! inline marker scanner that the grammar validator and the document
//! builder both consume. Keeping both sides on one tokenizer is what makes
//! the validator's accept set and the builder's parse set identical.

pub mod builder;
pub mod inline;
pub mod line;
pub mod model;
pub mod text;

pub use builder::build_document;
pub use inline::{InlineIssue, InlineIssueKind, ParsedInline, parse_runs, parse_runs_safe};
pub use line::{Line, classify};
pub use model::{Block, InlineStyle, InlineText, ListKind, OrderedKind, Run, TextStr};
pub use text::{normalize, normalize_newlines};
