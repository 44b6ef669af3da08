//! DocDraw: a structured-text markup validator and deterministic PDF
//! renderer.
//!
//! DocDraw documents are line-oriented: headings (`#1:` through `#6:`),
//! paragraphs (`p:` or `p{ ... }`), quotes (`q:`), dividers (`---`), code
//! blocks (`code{ ... }`), and nested bullet or ordered lists, with a
//! small inline span syntax for bold, italic, underline, and code. The
//! pipeline validates first (every error has a stable code and line
//! number), then lays out and renders; the same input always produces
//! byte-identical PDF output, identified by its SHA-256 hash.
//!
//! ```no_run
//! use docdraw::RenderOptions;
//!
//! let source = "#1: Hello\n\np: A **DocDraw** document.\n";
//! let pdf = docdraw::render_to_vec(source, &RenderOptions::default())?;
//! let hash = docdraw::sha256_hex(&pdf);
//! # Ok::<(), docdraw::PipelineError>(())
//! ```

mod error;

pub use error::PipelineError;

pub use docdraw_convert::{ConvertError, ConvertErrorCode, convert};
pub use docdraw_doc::{Block, InlineStyle, InlineText, ListKind, OrderedKind, Run, build_document};
pub use docdraw_grammar::{ErrorCode, Validation, ValidationError, validate};
pub use docdraw_layout::{LayoutEngine, Page, PositionedElement};
pub use docdraw_render_pdf::{RenderError, RenderOptions, render_pdf, sha256_hex};

use std::io::Cursor;

/// Normalizes DocDraw source: newline canonicalization, trailing
/// whitespace removal, blank-run collapsing. Idempotent.
pub fn normalize(text: &str) -> String {
    docdraw_doc::normalize(text)
}

/// Validates, lays out, and renders a document to PDF bytes.
///
/// Rendering is only attempted on text that passes validation; invalid
/// input returns the validator's first error untouched.
pub fn render_to_vec(text: &str, options: &RenderOptions) -> Result<Vec<u8>, PipelineError> {
    validate(text)?;
    let blocks = build_document(text);
    let pages = LayoutEngine::paginate(&blocks);
    let cursor = render_pdf(&pages, options, Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}

/// Renders a document and returns the SHA-256 content hash of its bytes.
pub fn render_digest(text: &str, options: &RenderOptions) -> Result<String, PipelineError> {
    Ok(sha256_hex(&render_to_vec(text, options)?))
}
