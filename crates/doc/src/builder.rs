//! Builds the block model from already-validated DocDraw text.
//!
//! The builder re-parses the source with the same line classifier and inline
//! scanner the validator used; it does not re-validate. On text that could
//! not have validated it degrades per line (raw-text runs, skipped unknown
//! lines) instead of failing, so a contract violation upstream can never
//! turn into a panic here.

use crate::inline::parse_runs_safe;
use crate::line::{Line, classify};
use crate::model::{Block, InlineText};
use crate::text::normalize_newlines;

#[derive(Default)]
struct BuilderState {
    blocks: Vec<Block>,
    paragraph_buf: Option<Vec<InlineText>>,
    code_buf: Option<Vec<String>>,
    prev_was_list_item: bool,
}

impl BuilderState {
    fn push_block(&mut self, block: Block) {
        self.prev_was_list_item = matches!(
            block,
            Block::ListItem { .. } | Block::ListContinuation { .. }
        );
        self.blocks.push(block);
    }

    fn flush_paragraph(&mut self) {
        if let Some(lines) = self.paragraph_buf.take() {
            self.push_block(Block::Paragraph {
                lines,
                single_line: false,
            });
        }
    }

    fn flush_code(&mut self) {
        if let Some(raw_lines) = self.code_buf.take() {
            self.push_block(Block::CodeBlock { raw_lines });
        }
    }
}

/// Parses validated DocDraw text into its ordered block sequence.
pub fn build_document(text: &str) -> Vec<Block> {
    let text = normalize_newlines(text);
    let mut state = BuilderState::default();

    for raw_line in text.split('\n') {
        let line = raw_line.trim_end_matches([' ', '\t']);
        let trimmed = line.trim();

        if let Some(code_buf) = state.code_buf.as_mut() {
            if trimmed == "}" {
                state.flush_code();
            } else {
                // Verbatim, trailing whitespace included.
                code_buf.push(raw_line.to_string());
            }
            continue;
        }

        if let Some(paragraph_buf) = state.paragraph_buf.as_mut() {
            match classify(trimmed) {
                Line::Close => state.flush_paragraph(),
                // An explicit break is an empty hard line; a blank line
                // inside the block is ignored (it does not close anything).
                Line::Break => paragraph_buf.push(Vec::new()),
                Line::Blank => {}
                _ => paragraph_buf.push(parse_runs_safe(trimmed).into_runs()),
            }
            continue;
        }

        match classify(trimmed) {
            Line::Blank => state.prev_was_list_item = false,
            Line::ParagraphOpen => state.paragraph_buf = Some(Vec::new()),
            Line::CodeOpen => state.code_buf = Some(Vec::new()),
            Line::Divider => state.push_block(Block::Divider),
            Line::Heading { level, text } => state.push_block(Block::Heading {
                level,
                text: parse_runs_safe(text).into_runs(),
            }),
            Line::Paragraph(text) => state.push_block(Block::Paragraph {
                lines: vec![parse_runs_safe(text).into_runs()],
                single_line: true,
            }),
            Line::Quote(text) => state.push_block(Block::Quote {
                text: parse_runs_safe(text).into_runs(),
            }),
            Line::Continuation(text) => state.push_block(Block::ListContinuation {
                text: parse_runs_safe(text).into_runs(),
            }),
            Line::ListItem { kind, level, text } => {
                let starts_run = !state.prev_was_list_item;
                state.push_block(Block::ListItem {
                    kind,
                    level,
                    text: parse_runs_safe(text).into_runs(),
                    starts_run,
                });
            }
            // `br` outside a paragraph block and unknown lines cannot occur
            // in validated input; skip them rather than guess.
            Line::Break | Line::Unknown => state.prev_was_list_item = false,
            Line::Close => state.prev_was_list_item = false,
        }
    }

    // Unclosed blocks cannot occur in validated input; keep their content.
    state.flush_paragraph();
    state.flush_code();
    state.blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListKind, OrderedKind};

    #[test]
    fn heading_then_paragraph() {
        let blocks = build_document("#1: Title\n\np: Hello **world**.\n");
        assert_eq!(blocks.len(), 2);
        let Block::Heading { level, text } = &blocks[0] else {
            panic!("expected heading");
        };
        assert_eq!(*level, 1);
        assert_eq!(text[0].text, "Title");
        let Block::Paragraph { lines, single_line } = &blocks[1] else {
            panic!("expected paragraph");
        };
        assert!(single_line);
        assert_eq!(lines.len(), 1);
        assert!(lines[0][1].style.bold);
        assert_eq!(lines[0][1].text, "world");
    }

    #[test]
    fn paragraph_block_preserves_hard_lines_and_breaks() {
        let blocks = build_document("p{\nfirst\nbr\nsecond\n}\n");
        let Block::Paragraph { lines, single_line } = &blocks[0] else {
            panic!("expected paragraph");
        };
        assert!(!single_line);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0][0].text, "first");
        assert!(lines[1].is_empty());
        assert_eq!(lines[2][0].text, "second");
    }

    #[test]
    fn code_block_is_raw() {
        let blocks = build_document("code{\n  raw **not bold**\n\n}\n");
        let Block::CodeBlock { raw_lines } = &blocks[0] else {
            panic!("expected code block");
        };
        assert_eq!(raw_lines.len(), 2);
        assert_eq!(raw_lines[0], "  raw **not bold**");
        assert_eq!(raw_lines[1], "");
    }

    #[test]
    fn code_block_keeps_trailing_whitespace() {
        let blocks = build_document("code{\nend with spaces   \n\ttabbed\t\n}\n");
        let Block::CodeBlock { raw_lines } = &blocks[0] else {
            panic!("expected code block");
        };
        assert_eq!(raw_lines[0], "end with spaces   ");
        assert_eq!(raw_lines[1], "\ttabbed\t");
    }

    #[test]
    fn list_run_boundaries() {
        let blocks = build_document("1-1: a\n1-1: b\n\n1-1: c\n");
        let starts: Vec<bool> = blocks
            .iter()
            .map(|b| match b {
                Block::ListItem { starts_run, .. } => *starts_run,
                _ => panic!("expected list item"),
            })
            .collect();
        assert_eq!(starts, vec![true, false, true]);
    }

    #[test]
    fn continuation_keeps_the_run_alive() {
        let blocks = build_document("-1: a\n..: more\n-2: b\n");
        assert!(matches!(blocks[1], Block::ListContinuation { .. }));
        let Block::ListItem {
            kind,
            level,
            starts_run,
            ..
        } = &blocks[2]
        else {
            panic!("expected list item");
        };
        assert_eq!(*kind, ListKind::Bullet);
        assert_eq!(*level, 2);
        assert!(!starts_run);
    }

    #[test]
    fn ordered_kinds_come_through() {
        let blocks = build_document("a-1: x\nA-2: y\n");
        let kinds: Vec<ListKind> = blocks
            .iter()
            .map(|b| match b {
                Block::ListItem { kind, .. } => *kind,
                _ => panic!("expected list item"),
            })
            .collect();
        assert_eq!(kinds, vec![
            ListKind::Ordered(OrderedKind::AlphaLower),
            ListKind::Ordered(OrderedKind::AlphaUpper),
        ]);
    }
}
