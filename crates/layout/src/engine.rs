//! Pagination of a block stream into positioned pages.
//!
//! Geometry is fixed: US Letter portrait with one-inch margins, body text
//! in Helvetica 11 pt on 13.75 pt leading. The engine walks the blocks
//! once, top to bottom, carrying a cursor and the list state (per-level
//! ordered counters and the indentation context continuation lines attach
//! to). Every vertical decision funnels through [`Flow::ensure_room`], so a
//! block asks for the space it needs before emitting anything and a page
//! never receives a line it cannot hold.

use docdraw_doc::{Block, InlineText, ListKind, OrderedKind, Run};
use log::warn;

use crate::elements::{LayoutElement, Page, PositionedElement};
use crate::fonts::Font;
use crate::style::Color;
use crate::text::{Token, break_lines, tokenize};

pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
pub const MARGIN: f32 = 72.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

const BODY_SIZE: f32 = 11.0;
const LINE_HEIGHT: f32 = 13.75;
const UNIT: f32 = 6.0;

const LIST_INDENT_STEP: f32 = 18.0;
const MARKER_COL_WIDTH: f32 = 18.0;
const ITEM_GAP: f32 = 2.0;

const QUOTE_INDENT: f32 = 18.0;
const QUOTE_RULE_WIDTH: f32 = 2.0;
const QUOTE_RULE_GAP: f32 = 8.0;

const DIVIDER_THICKNESS: f32 = 0.5;
const CODE_SIZE: f32 = 10.0;
const CODE_BORDER_WIDTH: f32 = 0.5;

// Underline geometry as a fraction of the font size, matching the Type1
// core font metrics (baseline at 0.8 of the box, rule 0.1 em below it).
const UNDERLINE_OFFSET: f32 = 0.9;
const UNDERLINE_THICKNESS: f32 = 0.05;

pub struct LayoutEngine;

impl LayoutEngine {
    /// Lays out a block stream into pages of positioned elements. Always
    /// produces at least one page; pure and deterministic.
    pub fn paginate(blocks: &[Block]) -> Vec<Page> {
        let mut layouter = Layouter::new();
        for block in blocks {
            layouter.block(block);
        }
        layouter.flow.pages
    }
}

/// The vertical cursor over a growing list of pages.
struct Flow {
    pages: Vec<Page>,
    /// Distance from the top of the current page to the next line's top.
    y: f32,
}

impl Flow {
    fn new() -> Flow {
        Flow {
            pages: vec![Page::new()],
            y: MARGIN,
        }
    }

    fn page_index(&self) -> usize {
        self.pages.len() - 1
    }

    fn current_len(&self) -> usize {
        self.pages.last().map_or(0, Vec::len)
    }

    /// Starts a new page if `needed` points do not fit above the bottom
    /// margin. Returns whether a break happened.
    fn ensure_room(&mut self, needed: f32) -> bool {
        if self.y + needed > PAGE_HEIGHT - MARGIN {
            self.pages.push(Page::new());
            self.y = MARGIN;
            true
        } else {
            false
        }
    }

    fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    fn push(&mut self, element: PositionedElement) {
        if let Some(page) = self.pages.last_mut() {
            page.push(element);
        }
    }
}

/// Indentation context saved from the last list item, reused by `..:`
/// continuation lines.
#[derive(Clone, Copy)]
struct ListContext {
    text_x: f32,
    max_width: f32,
}

struct Layouter {
    flow: Flow,
    counters: [u32; 9],
    list_ctx: Option<ListContext>,
}

impl Layouter {
    fn new() -> Layouter {
        Layouter {
            flow: Flow::new(),
            counters: [0; 9],
            list_ctx: None,
        }
    }

    fn block(&mut self, block: &Block) {
        match block {
            Block::Heading { level, text } => {
                self.leave_list();
                self.heading(*level, text);
            }
            Block::Paragraph { lines, .. } => {
                self.leave_list();
                self.paragraph(lines);
            }
            Block::Quote { text } => {
                self.leave_list();
                self.quote(text);
            }
            Block::Divider => {
                self.leave_list();
                self.divider();
            }
            Block::CodeBlock { raw_lines } => {
                self.leave_list();
                self.code_block(raw_lines);
            }
            Block::ListItem {
                kind,
                level,
                text,
                starts_run,
            } => self.list_item(*kind, *level, text, *starts_run),
            Block::ListContinuation { text } => self.continuation(text),
        }
    }

    fn leave_list(&mut self) {
        self.counters = [0; 9];
        self.list_ctx = None;
    }

    fn heading(&mut self, level: u8, text: &[Run]) {
        let size = match level {
            1 => 18.0,
            2 => 14.0,
            3 => 12.0,
            _ => BODY_SIZE,
        };
        let space_before = if level == 1 { 18.0 } else { 12.0 };

        // Keep-with-next: room for the heading plus one body line.
        self.flow.ensure_room(space_before + size + LINE_HEIGHT);
        self.flow.advance(space_before);

        let lines = break_lines(tokenize(text, size, true), CONTENT_WIDTH);
        self.emit_text_block(&lines, MARGIN, size, size + 2.0);
        self.flow.advance(UNIT);
    }

    fn paragraph(&mut self, lines: &[InlineText]) {
        // Orphan control: a paragraph never starts on its own at the very
        // bottom of a page.
        self.flow.ensure_room(LINE_HEIGHT * 2.0);
        for hard_line in lines {
            if hard_line.is_empty() {
                // Explicit blank line from `br`.
                self.flow.ensure_room(LINE_HEIGHT);
                self.flow.advance(LINE_HEIGHT);
                continue;
            }
            let wrapped = break_lines(tokenize(hard_line, BODY_SIZE, false), CONTENT_WIDTH);
            self.emit_text_block(&wrapped, MARGIN, BODY_SIZE, LINE_HEIGHT);
        }
        self.flow.advance(UNIT);
    }

    fn quote(&mut self, text: &[Run]) {
        self.flow.advance(UNIT);
        let x = MARGIN + QUOTE_INDENT;
        let lines = break_lines(tokenize(text, BODY_SIZE, false), CONTENT_WIDTH - QUOTE_INDENT);

        // The left rule spans the wrapped lines' vertical extent; when the
        // quote crosses a page break each page gets its own segment.
        let mut segments: Vec<(usize, f32, f32)> = Vec::new();
        let mut open: Option<(usize, f32)> = None;
        let mut last_end = self.flow.y;
        for line in &lines {
            if self.flow.ensure_room(LINE_HEIGHT)
                && let Some((page, y0)) = open.take()
            {
                segments.push((page, y0, last_end));
            }
            if open.is_none() {
                open = Some((self.flow.page_index(), self.flow.y));
            }
            self.emit_line(line, x, BODY_SIZE, LINE_HEIGHT);
            self.flow.advance(LINE_HEIGHT);
            last_end = self.flow.y;
        }
        if let Some((page, y0)) = open {
            segments.push((page, y0, last_end));
        }

        for (page, y0, y1) in segments {
            self.flow.pages[page].push(PositionedElement {
                x: MARGIN + QUOTE_INDENT - QUOTE_RULE_GAP,
                y: y0,
                width: QUOTE_RULE_WIDTH,
                height: y1 - y0,
                element: LayoutElement::Rule {
                    color: Color::QUOTE_RULE,
                },
            });
        }
        self.flow.advance(UNIT);
    }

    fn divider(&mut self) {
        self.flow.advance(UNIT * 2.0);
        self.flow.ensure_room(UNIT * 4.0);
        self.flow.push(PositionedElement {
            x: MARGIN,
            y: self.flow.y,
            width: CONTENT_WIDTH,
            height: DIVIDER_THICKNESS,
            element: LayoutElement::Rule {
                color: Color::DIVIDER_RULE,
            },
        });
        self.flow.advance(UNIT * 2.0);
    }

    fn code_block(&mut self, raw_lines: &[String]) {
        self.flow.advance(UNIT);

        // Lines are verbatim Courier except for wrapping: anything wider
        // than the content width is split by character count, which is
        // exact for a fixed-pitch face. The fill-and-border box is sized
        // from the emitted lines afterwards, one box per page segment,
        // inserted under the text it backs.
        let char_advance = Font::Courier.measure(" ", CODE_SIZE);
        let max_chars = ((CONTENT_WIDTH / char_advance) as usize).max(1);
        let display_lines: Vec<String> = raw_lines
            .iter()
            .flat_map(|raw| split_code_line(raw, max_chars))
            .collect();

        let mut segments: Vec<(usize, usize, f32, f32)> = Vec::new();
        let mut open: Option<(usize, usize, f32)> = None;
        let mut last_end = self.flow.y;
        for raw in &display_lines {
            if self.flow.ensure_room(LINE_HEIGHT)
                && let Some((page, idx, y0)) = open.take()
            {
                segments.push((page, idx, y0, last_end));
            }
            if open.is_none() {
                open = Some((self.flow.page_index(), self.flow.current_len(), self.flow.y));
            }
            let width = Font::Courier.measure(raw, CODE_SIZE);
            self.flow.push(PositionedElement {
                x: MARGIN,
                y: self.flow.y,
                width,
                height: LINE_HEIGHT,
                element: LayoutElement::Text {
                    content: raw.clone(),
                    font: Font::Courier,
                    size: CODE_SIZE,
                    color: Color::TEXT,
                },
            });
            self.flow.advance(LINE_HEIGHT);
            last_end = self.flow.y;
        }
        if let Some((page, idx, y0)) = open {
            segments.push((page, idx, y0, last_end));
        }

        for (page, idx, y0, y1) in segments {
            self.flow.pages[page].insert(
                idx,
                PositionedElement {
                    x: MARGIN,
                    y: y0,
                    width: CONTENT_WIDTH,
                    height: y1 - y0,
                    element: LayoutElement::Rect {
                        fill: Some(Color::CODE_FILL),
                        stroke: Some(Color::CODE_BORDER),
                        stroke_width: CODE_BORDER_WIDTH,
                    },
                },
            );
        }
        self.flow.advance(UNIT);
    }

    fn list_item(&mut self, kind: ListKind, level: u8, text: &[Run], starts_run: bool) {
        if starts_run {
            self.counters = [0; 9];
        }
        let level = level.clamp(1, 9);
        let marker = match kind {
            ListKind::Bullet => {
                // A bullet item interrupts any ordered numbering in the run.
                self.counters = [0; 9];
                bullet_glyph(level).to_owned()
            }
            ListKind::Ordered(ordered) => {
                for deeper in &mut self.counters[level as usize..] {
                    *deeper = 0;
                }
                let slot = &mut self.counters[usize::from(level - 1)];
                *slot += 1;
                ordered_marker(ordered, *slot)
            }
        };

        let marker_x = MARGIN + f32::from(level - 1) * LIST_INDENT_STEP;
        let text_x = marker_x + MARKER_COL_WIDTH;
        let max_width = PAGE_WIDTH - MARGIN - text_x;

        // One reservation covers the marker and the first text line, which
        // share a baseline.
        self.flow.ensure_room(LINE_HEIGHT);
        let marker_width = Font::Helvetica.measure(&marker, BODY_SIZE);
        self.flow.push(PositionedElement {
            x: marker_x + MARKER_COL_WIDTH - marker_width,
            y: self.flow.y,
            width: marker_width,
            height: LINE_HEIGHT,
            element: LayoutElement::Text {
                content: marker,
                font: Font::Helvetica,
                size: BODY_SIZE,
                color: Color::TEXT,
            },
        });

        let lines = break_lines(tokenize(text, BODY_SIZE, false), max_width);
        if lines.is_empty() {
            self.flow.advance(LINE_HEIGHT);
        }
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                self.flow.ensure_room(LINE_HEIGHT);
            }
            self.emit_line(line, text_x, BODY_SIZE, LINE_HEIGHT);
            self.flow.advance(LINE_HEIGHT);
        }
        self.flow.advance(ITEM_GAP);

        self.list_ctx = Some(ListContext { text_x, max_width });
    }

    fn continuation(&mut self, text: &[Run]) {
        if let Some(ctx) = self.list_ctx {
            let lines = break_lines(tokenize(text, BODY_SIZE, false), ctx.max_width);
            self.emit_text_block(&lines, ctx.text_x, BODY_SIZE, LINE_HEIGHT);
        } else {
            // Unreachable for validated input; degrade to a paragraph.
            warn!("continuation line without a preceding list item, laying out as a paragraph");
            let lines = break_lines(tokenize(text, BODY_SIZE, false), CONTENT_WIDTH);
            self.emit_text_block(&lines, MARGIN, BODY_SIZE, LINE_HEIGHT);
            self.flow.advance(UNIT);
        }
    }

    fn emit_text_block(&mut self, lines: &[Vec<Token>], x: f32, size: f32, line_height: f32) {
        for line in lines {
            self.flow.ensure_room(line_height);
            self.emit_line(line, x, size, line_height);
            self.flow.advance(line_height);
        }
    }

    /// Places one wrapped line at the cursor, merging adjacent tokens that
    /// share a face into single text elements. Does not advance.
    fn emit_line(&mut self, line: &[Token], x: f32, size: f32, line_height: f32) {
        let mut cursor = x;
        let mut i = 0;
        while i < line.len() {
            let font = line[i].font;
            let underline = line[i].underline;
            let mut content = String::new();
            let mut width = 0.0f32;
            while i < line.len() && line[i].font == font && line[i].underline == underline {
                content.push_str(&line[i].text);
                width += line[i].width;
                i += 1;
            }
            self.flow.push(PositionedElement {
                x: cursor,
                y: self.flow.y,
                width,
                height: line_height,
                element: LayoutElement::Text {
                    content,
                    font,
                    size,
                    color: Color::TEXT,
                },
            });
            if underline {
                self.flow.push(PositionedElement {
                    x: cursor,
                    y: self.flow.y + size * UNDERLINE_OFFSET,
                    width,
                    height: size * UNDERLINE_THICKNESS,
                    element: LayoutElement::Rule { color: Color::TEXT },
                });
            }
            cursor += width;
        }
    }
}

/// Splits a code line into chunks of at most `max_chars` characters. A
/// line that fits, including an empty one, stays a single chunk.
fn split_code_line(line: &str, max_chars: usize) -> Vec<String> {
    if line.chars().count() <= max_chars {
        return vec![line.to_owned()];
    }
    let chars: Vec<char> = line.chars().collect();
    chars
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

fn bullet_glyph(level: u8) -> &'static str {
    match level {
        1 => "\u{2022}",
        2 => "o",
        _ => "-",
    }
}

fn ordered_marker(kind: OrderedKind, n: u32) -> String {
    match kind {
        OrderedKind::Numeric => format!("{n}."),
        OrderedKind::AlphaLower => format!("{}.", alpha_label(n, false)),
        OrderedKind::AlphaUpper => format!("{}.", alpha_label(n, true)),
    }
}

/// Bijective base-26 label: 1 is `a`, 26 is `z`, 27 is `aa`.
fn alpha_label(n: u32, upper: bool) -> String {
    let mut n = n;
    let mut digits = Vec::new();
    while n > 0 {
        n -= 1;
        let c = b'a' + (n % 26) as u8;
        digits.push(if upper { c.to_ascii_uppercase() } else { c } as char);
        n /= 26;
    }
    digits.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdraw_doc::build_document;

    fn paginate(source: &str) -> Vec<Page> {
        LayoutEngine::paginate(&build_document(source))
    }

    fn texts(page: &Page) -> Vec<(String, f32, f32, f32)> {
        page.iter()
            .filter_map(|el| match &el.element {
                LayoutElement::Text { content, size, .. } => {
                    Some((content.clone(), el.x, el.y, *size))
                }
                _ => None,
            })
            .collect()
    }

    fn marker_texts(page: &Page) -> Vec<String> {
        texts(page).into_iter().map(|(c, ..)| c).collect()
    }

    #[test]
    fn empty_document_is_one_empty_page() {
        let pages = paginate("");
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
    }

    #[test]
    fn heading_then_paragraph_vertical_rhythm() {
        let pages = paginate("#1: Title\n\np: Body text.\n");
        let t = texts(&pages[0]);
        assert_eq!(t.len(), 2);
        // 18pt space before the heading, then a 20pt heading line and 6pt
        // after.
        assert_eq!(t[0], ("Title".to_owned(), MARGIN, 90.0, 18.0));
        assert_eq!(t[1].2, 90.0 + 20.0 + 6.0);
        assert_eq!(t[1].3, BODY_SIZE);
    }

    #[test]
    fn long_documents_break_pages() {
        let source: String = (0..60).map(|i| format!("p: paragraph {i}\n\n")).collect();
        let pages = paginate(&source);
        assert!(pages.len() >= 2);
        for page in &pages {
            for el in page {
                assert!(el.y >= MARGIN - 1e-3);
                assert!(el.y + el.height <= PAGE_HEIGHT - MARGIN + 1e-3);
            }
        }
    }

    #[test]
    fn heading_keeps_with_next_line() {
        // 31 one-line paragraphs leave too little room for the heading plus
        // one body line, so the heading moves to page two whole.
        let mut source: String = (0..31).map(|i| format!("p: filler {i}\n\n")).collect();
        source.push_str("#2: Section\n\np: follows\n");
        let pages = paginate(&source);
        assert_eq!(pages.len(), 2);
        let second = texts(&pages[1]);
        assert_eq!(second[0].0, "Section");
        // 12pt space before, at the top of the fresh page.
        assert_eq!(second[0].2, MARGIN + 12.0);
        assert_eq!(second[1].0, "follows");
    }

    #[test]
    fn ordered_counters_count_and_reset_per_level() {
        let pages = paginate("1-1: a\n1-2: b\n1-2: c\n1-1: d\n1-2: e\n");
        let markers: Vec<String> = marker_texts(&pages[0])
            .into_iter()
            .filter(|t| t.ends_with('.'))
            .collect();
        assert_eq!(markers, ["1.", "1.", "2.", "2.", "1."]);
    }

    #[test]
    fn blank_line_restarts_ordered_numbering() {
        let pages = paginate("1-1: a\n1-1: b\n\n1-1: c\n");
        let markers: Vec<String> = marker_texts(&pages[0])
            .into_iter()
            .filter(|t| t.ends_with('.'))
            .collect();
        assert_eq!(markers, ["1.", "2.", "1."]);
    }

    #[test]
    fn bullet_interrupts_ordered_numbering() {
        let pages = paginate("1-1: a\n-1: b\n1-1: c\n");
        let markers: Vec<String> = marker_texts(&pages[0]);
        assert_eq!(markers[0], "1.");
        assert_eq!(markers[2], "\u{2022}");
        assert_eq!(markers[4], "1.");
    }

    #[test]
    fn bullet_glyph_tiers() {
        assert_eq!(bullet_glyph(1), "\u{2022}");
        assert_eq!(bullet_glyph(2), "o");
        assert_eq!(bullet_glyph(3), "-");
        assert_eq!(bullet_glyph(7), "-");
    }

    #[test]
    fn alpha_markers_extend_past_z() {
        assert_eq!(alpha_label(1, false), "a");
        assert_eq!(alpha_label(26, false), "z");
        assert_eq!(alpha_label(27, false), "aa");
        assert_eq!(alpha_label(28, false), "ab");
        assert_eq!(alpha_label(3, true), "C");
        assert_eq!(ordered_marker(OrderedKind::AlphaLower, 27), "aa.");
    }

    #[test]
    fn alpha_list_items_use_letter_markers() {
        let pages = paginate("a-1: first\na-1: second\nA-1: third\n");
        let markers: Vec<String> = marker_texts(&pages[0])
            .into_iter()
            .filter(|t| t.ends_with('.'))
            .collect();
        // The upper item continues the same per-level counter.
        assert_eq!(markers, ["a.", "b.", "C."]);
    }

    #[test]
    fn markers_right_align_in_their_column() {
        let pages = paginate("-1: one\n-2: two\n");
        let t = texts(&pages[0]);
        // Marker glyph box ends exactly at the text column.
        assert!((t[0].1 + width_of(&pages[0], 0) - (MARGIN + MARKER_COL_WIDTH)).abs() < 1e-3);
        assert_eq!(t[1].1, MARGIN + MARKER_COL_WIDTH);
        // Level 2 shifts one indent step.
        assert_eq!(t[3].1, MARGIN + LIST_INDENT_STEP + MARKER_COL_WIDTH);
    }

    fn width_of(page: &Page, idx: usize) -> f32 {
        page[idx].width
    }

    #[test]
    fn continuation_reuses_the_item_text_column() {
        let pages = paginate("-2: item\n..: continued\n");
        let t = texts(&pages[0]);
        let item_x = t[1].1;
        assert_eq!(t[2].0, "continued");
        assert_eq!(t[2].1, item_x);
    }

    #[test]
    fn quote_draws_an_inset_left_rule() {
        let pages = paginate("q: a short quotation\n");
        let rules: Vec<&PositionedElement> = pages[0]
            .iter()
            .filter(|el| matches!(el.element, LayoutElement::Rule { .. }))
            .collect();
        assert_eq!(rules.len(), 1);
        let rule = rules[0];
        assert_eq!(rule.x, MARGIN + QUOTE_INDENT - QUOTE_RULE_GAP);
        assert_eq!(rule.width, QUOTE_RULE_WIDTH);
        assert_eq!(rule.height, LINE_HEIGHT);
        let t = texts(&pages[0]);
        assert_eq!(t[0].1, MARGIN + QUOTE_INDENT);
    }

    #[test]
    fn divider_is_a_thin_full_width_rule() {
        let pages = paginate("---\n");
        assert_eq!(pages[0].len(), 1);
        let el = &pages[0][0];
        assert!(matches!(
            el.element,
            LayoutElement::Rule {
                color: Color::DIVIDER_RULE
            }
        ));
        assert_eq!(el.width, CONTENT_WIDTH);
        assert_eq!(el.height, DIVIDER_THICKNESS);
        assert_eq!(el.y, MARGIN + UNIT * 2.0);
    }

    #[test]
    fn code_block_box_sits_under_its_lines() {
        let pages = paginate("code{\nlet x = 1;\n  indented\n}\n");
        let page = &pages[0];
        assert!(matches!(page[0].element, LayoutElement::Rect { .. }));
        assert_eq!(page[0].y, MARGIN + UNIT);
        assert_eq!(page[0].height, 2.0 * LINE_HEIGHT);
        let t = texts(page);
        assert_eq!(t[0].0, "let x = 1;");
        assert_eq!(t[1].0, "  indented");
        assert_eq!(t[1].3, CODE_SIZE);
    }

    #[test]
    fn long_code_lines_wrap_inside_the_box() {
        let long = "x".repeat(120);
        let pages = paginate(&format!("code{{\n{long}\n}}\n"));
        let page = &pages[0];
        for el in page {
            assert!(el.x + el.width <= PAGE_WIDTH - MARGIN + 1e-3);
        }
        // 6pt per Courier character at 10pt leaves 78 columns.
        let t = texts(page);
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].0.chars().count(), 78);
        assert_eq!(t[1].0.chars().count(), 42);
        // The box covers both wrapped lines.
        assert!(matches!(page[0].element, LayoutElement::Rect { .. }));
        assert_eq!(page[0].height, 2.0 * LINE_HEIGHT);
    }

    #[test]
    fn code_block_across_pages_gets_one_box_per_page() {
        let body: String = (0..60).map(|i| format!("line {i}\n")).collect();
        let pages = paginate(&format!("code{{\n{body}}}\n"));
        assert_eq!(pages.len(), 2);
        for page in &pages {
            let rects: Vec<&PositionedElement> = page
                .iter()
                .filter(|el| matches!(el.element, LayoutElement::Rect { .. }))
                .collect();
            assert_eq!(rects.len(), 1);
            assert!(matches!(page[0].element, LayoutElement::Rect { .. }));
        }
    }

    #[test]
    fn underlined_runs_carry_a_rule() {
        let pages = paginate("p: see ++this++ here\n");
        let rules: Vec<&PositionedElement> = pages[0]
            .iter()
            .filter(|el| matches!(el.element, LayoutElement::Rule { .. }))
            .collect();
        assert_eq!(rules.len(), 1);
        let texts = texts(&pages[0]);
        let underlined = texts.iter().find(|(c, ..)| c == "this").map(|t| t.1);
        assert_eq!(Some(rules[0].x), underlined);
    }

    #[test]
    fn paragraph_break_keyword_leaves_a_blank_line() {
        let pages = paginate("p{\nfirst\nbr\nsecond\n}\n");
        let t = texts(&pages[0]);
        assert_eq!(t[0].0, "first");
        assert_eq!(t[1].0, "second");
        assert_eq!(t[1].2 - t[0].2, 2.0 * LINE_HEIGHT);
    }

    #[test]
    fn pagination_is_deterministic() {
        let source = "#1: T\n\np: words words words\n\n-1: a\n..: b\n\ncode{\nx\n}\n";
        let first = paginate(source);
        for _ in 0..5 {
            assert_eq!(paginate(source), first);
        }
    }
}
