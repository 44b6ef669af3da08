//! Deterministic layout for DocDraw documents.
//!
//! Turns a parsed block stream into pages of absolutely positioned
//! elements. Measurement uses fixed metric tables for the PDF base fonts,
//! so the same document always paginates to the same geometry; the PDF
//! backend only has to paint what it is given.

pub mod elements;
pub mod engine;
pub mod fonts;
pub mod style;
pub mod text;

pub use elements::{LayoutElement, Page, PositionedElement};
pub use engine::{CONTENT_WIDTH, LayoutEngine, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};
pub use fonts::{Font, to_win_ansi, win_ansi_byte};
pub use style::Color;
