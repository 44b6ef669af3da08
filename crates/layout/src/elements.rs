//! The positioned-element IR handed to the PDF backend.
//!
//! Coordinates are top-down page points: `y` is the distance from the top
//! edge of the page to the top of the element's box. The backend flips into
//! PDF's bottom-up space and derives text baselines from the font size.

use crate::fonts::Font;
use crate::style::Color;

/// One laid-out page.
pub type Page = Vec<PositionedElement>;

#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    /// A single-face text segment. The box height is the line height; the
    /// baseline sits inside it at a fixed fraction of the font size.
    Text {
        content: String,
        font: Font,
        size: f32,
        color: Color,
    },
    /// A solid filled bar, used for dividers, quote rules, and underlines.
    /// The box is the full extent of the bar.
    Rule { color: Color },
    /// A rectangle with optional fill and border.
    Rect {
        fill: Option<Color>,
        stroke: Option<Color>,
        stroke_width: f32,
    },
}
