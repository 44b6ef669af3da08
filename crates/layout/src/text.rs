//! Styled-run tokenization and greedy line breaking.
//!
//! Wrapping never splits a word and never moves a style boundary: runs are
//! tokenized into words and single spaces, each carrying its resolved face,
//! and lines are filled greedily against a fixed width. Whitespace inside a
//! run collapses to one space, a line never starts with a space, and
//! trailing spaces are dropped when a line is flushed. A word wider than
//! the whole line is placed alone on its own line, unsplit.

use docdraw_doc::Run;

use crate::fonts::Font;
use crate::style::resolve_font;

/// A word or single-space token with its resolved face and measured width.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub font: Font,
    pub underline: bool,
    pub is_space: bool,
    pub width: f32,
}

/// Tokenizes styled runs at a fixed font size.
pub fn tokenize(runs: &[Run], size: f32, base_bold: bool) -> Vec<Token> {
    let mut tokens = Vec::new();
    for run in runs {
        let font = resolve_font(run, base_bold);
        let underline = run.style.underline;
        let mut word = String::new();
        let mut flush_word = |word: &mut String, tokens: &mut Vec<Token>| {
            if !word.is_empty() {
                let width = font.measure(word, size);
                tokens.push(Token {
                    text: std::mem::take(word),
                    font,
                    underline,
                    is_space: false,
                    width,
                });
            }
        };
        let mut prev_space = false;
        for c in run.text.chars() {
            if c.is_whitespace() {
                flush_word(&mut word, &mut tokens);
                if !prev_space {
                    tokens.push(Token {
                        text: " ".to_owned(),
                        font,
                        underline,
                        is_space: true,
                        width: font.measure(" ", size),
                    });
                }
                prev_space = true;
            } else {
                word.push(c);
                prev_space = false;
            }
        }
        flush_word(&mut word, &mut tokens);
    }
    tokens
}

/// Breaks a token stream into lines no wider than `max_width`.
pub fn break_lines(tokens: Vec<Token>, max_width: f32) -> Vec<Vec<Token>> {
    let mut lines = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut current_width = 0.0f32;

    fn flush(lines: &mut Vec<Vec<Token>>, current: &mut Vec<Token>) {
        while current.last().is_some_and(|t| t.is_space) {
            current.pop();
        }
        if !current.is_empty() {
            lines.push(std::mem::take(current));
        }
    }

    for token in tokens {
        if token.is_space && current.is_empty() {
            continue;
        }
        if current.is_empty() {
            current_width = token.width;
            current.push(token);
            continue;
        }
        if token.is_space {
            if current_width + token.width <= max_width {
                current_width += token.width;
                current.push(token);
            } else {
                flush(&mut lines, &mut current);
                current_width = 0.0;
            }
            continue;
        }
        if current_width + token.width <= max_width {
            current_width += token.width;
            current.push(token);
        } else {
            flush(&mut lines, &mut current);
            current_width = token.width;
            current.push(token);
        }
    }
    flush(&mut lines, &mut current);
    lines
}
