//! The block-level grammar validator.
//!
//! One pass over the document, line by line, with an explicit state value:
//! the open-block flags and the list-adjacency tracking. Inline validation
//! happens at the leaves, on every text-bearing line. The first error wins;
//! there is no recovery.

use crate::error::{ErrorCode, ValidationError};
use crate::inline::validate_inline;
use docdraw_doc::line::{Line, classify};
use docdraw_doc::text::normalize_newlines;

#[derive(Debug, Default)]
struct ValidatorState {
    in_paragraph_block: bool,
    in_code_block: bool,
    prev_was_list_item: bool,
    prev_level: Option<u8>,
}

impl ValidatorState {
    fn reset_list_adjacency(&mut self) {
        self.prev_was_list_item = false;
        self.prev_level = None;
    }
}

/// Validates a whole document, reporting the first error with its stable
/// code and 1-based line number.
pub fn validate(text: &str) -> Result<(), ValidationError> {
    let text = normalize_newlines(text);
    let mut state = ValidatorState::default();

    for (idx, raw_line) in text.split('\n').enumerate() {
        let line_no = idx + 1;
        let trimmed = raw_line.trim_end_matches([' ', '\t']).trim();

        // Blank lines break list adjacency regardless of block state and
        // never close an open block.
        if trimmed.is_empty() {
            state.reset_list_adjacency();
            continue;
        }

        if state.in_code_block {
            if trimmed == "}" {
                state.in_code_block = false;
            }
            // Everything else is raw content, not inspected.
            continue;
        }

        if state.in_paragraph_block {
            match classify(trimmed) {
                Line::Close => state.in_paragraph_block = false,
                Line::Break => {}
                _ => validate_inline(trimmed, line_no)?,
            }
            continue;
        }

        match classify(trimmed) {
            Line::Blank => unreachable!("blank lines are handled above"),
            Line::ParagraphOpen => {
                state.in_paragraph_block = true;
                state.reset_list_adjacency();
            }
            Line::CodeOpen => {
                state.in_code_block = true;
                state.reset_list_adjacency();
            }
            Line::Break => {
                return Err(ValidationError::at(
                    ErrorCode::BreakOutsideBlock,
                    "`br` is only allowed inside a p{ } block.",
                    line_no,
                ));
            }
            Line::Continuation(text) => {
                if !state.prev_was_list_item {
                    return Err(ValidationError::at(
                        ErrorCode::ContinuationWithoutItem,
                        "A `..:` continuation line must follow a list item.",
                        line_no,
                    ));
                }
                validate_inline(text, line_no)?;
                // Adjacency carries through: further continuations and list
                // items may still follow.
            }
            Line::Divider => state.reset_list_adjacency(),
            Line::Heading { text, .. } => {
                validate_inline(text, line_no)?;
                state.reset_list_adjacency();
            }
            Line::Paragraph(text) | Line::Quote(text) => {
                validate_inline(text, line_no)?;
                state.reset_list_adjacency();
            }
            Line::ListItem { level, text, .. } => {
                if let Some(prev) = state.prev_level
                    && state.prev_was_list_item
                    && level > prev + 1
                {
                    return Err(ValidationError::at(
                        ErrorCode::LevelJump,
                        format!(
                            "List level jumped from {prev} to {level}; levels may only \
                             increase by 1 between adjacent items."
                        ),
                        line_no,
                    ));
                }
                validate_inline(text, line_no)?;
                state.prev_was_list_item = true;
                state.prev_level = Some(level);
            }
            Line::Close | Line::Unknown => {
                return Err(ValidationError::at(
                    ErrorCode::UnknownLine,
                    "Unrecognized line.",
                    line_no,
                ));
            }
        }
    }

    if state.in_paragraph_block {
        return Err(ValidationError::end_of_document(
            ErrorCode::UnclosedBlock,
            "Unclosed p{ } block.",
        ));
    }
    if state.in_code_block {
        return Err(ValidationError::end_of_document(
            ErrorCode::UnclosedBlock,
            "Unclosed code{ } block.",
        ));
    }
    Ok(())
}
