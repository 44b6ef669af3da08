//! Resolved visual styles for positioned elements.

use docdraw_doc::{InlineStyle, Run};

use crate::fonts::Font;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn gray(v: u8) -> Color {
        Color { r: v, g: v, b: v }
    }

    /// Near-black body text.
    pub const TEXT: Color = Color::gray(0x11);
    /// Quote left rule.
    pub const QUOTE_RULE: Color = Color::gray(0xDD);
    /// Horizontal divider rule.
    pub const DIVIDER_RULE: Color = Color::gray(0xBB);
    /// Code block background fill.
    pub const CODE_FILL: Color = Color::gray(0xF6);
    /// Code block border.
    pub const CODE_BORDER: Color = Color::gray(0xE0);
}

/// Resolves a styled run to a concrete face.
///
/// Code runs are always plain Courier. For everything else bold and italic
/// select among the four Helvetica faces; `base_bold` forces the bold axis,
/// which is how heading text stays bold around inline spans. Underline is
/// not a face property and is handled separately as a drawn rule.
pub fn resolve_font(run: &Run, base_bold: bool) -> Font {
    if run.is_code {
        return Font::Courier;
    }
    let InlineStyle { bold, italic, .. } = run.style;
    match (bold || base_bold, italic) {
        (false, false) => Font::Helvetica,
        (true, false) => Font::HelveticaBold,
        (false, true) => Font::HelveticaOblique,
        (true, true) => Font::HelveticaBoldOblique,
    }
}
