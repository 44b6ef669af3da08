//! Turns positioned pages into PDF content streams.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Object, StringFormat, dictionary};

use docdraw_layout::fonts::to_win_ansi;
use docdraw_layout::{Color, Font, LayoutElement, PositionedElement};

/// The font resource dictionary shared by every page: the five built-in
/// faces as Type1 with WinAnsi encoding, no embedding.
pub fn font_resources() -> Dictionary {
    let mut fonts = Dictionary::new();
    for font in Font::ALL {
        let entry = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.postscript_name(),
            "Encoding" => "WinAnsiEncoding",
        };
        fonts.set(font.resource_name().as_bytes(), Object::Dictionary(entry));
    }
    fonts
}

/// Accumulates the content stream for one page.
///
/// Layout coordinates are top-down; PDF user space is bottom-up, so every
/// y is flipped against the page height here. Font and fill-color
/// selections are deduplicated across operations to keep streams small and
/// stable.
pub struct PageContext {
    page_height: f32,
    content: Content,
    current_font: Option<(&'static str, f32)>,
    current_fill: Option<Color>,
}

impl PageContext {
    pub fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            current_font: None,
            current_fill: None,
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    pub fn draw(&mut self, el: &PositionedElement) {
        match &el.element {
            LayoutElement::Text {
                content,
                font,
                size,
                color,
            } => self.draw_text(el, content, *font, *size, *color),
            LayoutElement::Rule { color } => self.draw_rule(el, *color),
            LayoutElement::Rect {
                fill,
                stroke,
                stroke_width,
            } => self.draw_rect(el, *fill, *stroke, *stroke_width),
        }
    }

    fn draw_text(&mut self, el: &PositionedElement, text: &str, font: Font, size: f32, color: Color) {
        if text.trim().is_empty() {
            return;
        }
        self.op("BT", vec![]);
        self.set_font(font, size);
        self.set_fill(color);
        // The baseline sits at a fixed fraction of the font size below the
        // top of the line box.
        let baseline = el.y + size * 0.8;
        let pdf_y = self.page_height - baseline;
        self.op("Td", vec![el.x.into(), pdf_y.into()]);
        self.op(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.op("ET", vec![]);
    }

    fn draw_rule(&mut self, el: &PositionedElement, color: Color) {
        self.set_fill(color);
        let pdf_y = self.page_height - (el.y + el.height);
        self.op(
            "re",
            vec![el.x.into(), pdf_y.into(), el.width.into(), el.height.into()],
        );
        self.op("f", vec![]);
    }

    fn draw_rect(
        &mut self,
        el: &PositionedElement,
        fill: Option<Color>,
        stroke: Option<Color>,
        stroke_width: f32,
    ) {
        let pdf_y = self.page_height - (el.y + el.height);
        let rect_args = vec![
            Object::Real(el.x),
            Object::Real(pdf_y),
            Object::Real(el.width),
            Object::Real(el.height),
        ];
        if let Some(color) = fill {
            self.set_fill(color);
            self.op("re", rect_args.clone());
            self.op("f", vec![]);
        }
        if let Some(color) = stroke {
            self.op("w", vec![stroke_width.into()]);
            self.op(
                "RG",
                vec![
                    (f32::from(color.r) / 255.0).into(),
                    (f32::from(color.g) / 255.0).into(),
                    (f32::from(color.b) / 255.0).into(),
                ],
            );
            self.op("re", rect_args);
            self.op("S", vec![]);
        }
    }

    fn set_font(&mut self, font: Font, size: f32) {
        let name = font.resource_name();
        if self.current_font != Some((name, size)) {
            self.op(
                "Tf",
                vec![Object::Name(name.as_bytes().to_vec()), size.into()],
            );
            self.current_font = Some((name, size));
        }
    }

    fn set_fill(&mut self, color: Color) {
        if self.current_fill != Some(color) {
            self.op(
                "rg",
                vec![
                    (f32::from(color.r) / 255.0).into(),
                    (f32::from(color.g) / 255.0).into(),
                    (f32::from(color.b) / 255.0).into(),
                ],
            );
            self.current_fill = Some(color);
        }
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_element(content: &str, y: f32) -> PositionedElement {
        PositionedElement {
            x: 72.0,
            y,
            width: 100.0,
            height: 13.75,
            element: LayoutElement::Text {
                content: content.to_owned(),
                font: Font::Helvetica,
                size: 11.0,
                color: Color::TEXT,
            },
        }
    }

    fn operators(ctx: &PageContext) -> Vec<String> {
        ctx.content
            .operations
            .iter()
            .map(|op| op.operator.clone())
            .collect()
    }

    #[test]
    fn font_resources_cover_all_faces() {
        let fonts = font_resources();
        for font in Font::ALL {
            assert!(fonts.get(font.resource_name().as_bytes()).is_ok());
        }
    }

    #[test]
    fn font_and_color_selections_deduplicate() {
        let mut ctx = PageContext::new(792.0);
        ctx.draw(&text_element("one", 72.0));
        ctx.draw(&text_element("two", 90.0));
        let ops = operators(&ctx);
        assert_eq!(ops.iter().filter(|o| *o == "Tf").count(), 1);
        assert_eq!(ops.iter().filter(|o| *o == "rg").count(), 1);
        assert_eq!(ops.iter().filter(|o| *o == "Tj").count(), 2);
    }

    #[test]
    fn whitespace_only_text_is_skipped() {
        let mut ctx = PageContext::new(792.0);
        ctx.draw(&text_element("   ", 72.0));
        assert!(ctx.content.operations.is_empty());
    }

    #[test]
    fn y_axis_flips_to_pdf_space() {
        let mut ctx = PageContext::new(792.0);
        ctx.draw(&text_element("x", 72.0));
        let td = ctx
            .content
            .operations
            .iter()
            .find(|op| op.operator == "Td")
            .map(|op| op.operands.clone());
        // Baseline at 72 + 11 * 0.8, flipped from a 792pt page.
        let expected = 792.0 - (72.0 + 11.0 * 0.8);
        match td.as_deref() {
            Some([Object::Real(_), Object::Real(y)]) => {
                assert!((y - expected).abs() < 1e-3);
            }
            other => panic!("unexpected Td operands: {other:?}"),
        }
    }

    #[test]
    fn rect_with_fill_and_stroke_emits_both_paints() {
        let mut ctx = PageContext::new(792.0);
        ctx.draw(&PositionedElement {
            x: 72.0,
            y: 100.0,
            width: 468.0,
            height: 27.5,
            element: LayoutElement::Rect {
                fill: Some(Color::CODE_FILL),
                stroke: Some(Color::CODE_BORDER),
                stroke_width: 0.5,
            },
        });
        let ops = operators(&ctx);
        assert!(ops.contains(&"f".to_owned()));
        assert!(ops.contains(&"S".to_owned()));
        assert_eq!(ops.iter().filter(|o| *o == "re").count(), 2);
    }
}
