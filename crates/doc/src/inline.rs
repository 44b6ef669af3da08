//! Inline marker scanning and styled-run parsing.
//!
//! Recognized markers, longest match first: `**` (bold), `++` (underline),
//! `*` (italic), `` ` `` (code). A backslash followed by `\`, `*`, `+` or
//! `` ` `` consumes both characters as the literal; any other backslash is a
//! literal backslash. Spans may not nest, overlap, be empty, or cross a line
//! boundary.
//!
//! [`parse_runs`] is the single source of truth for this tokenization: the
//! grammar validator reports its issues as errors, and the renderer consumes
//! its runs (degrading to raw text through [`parse_runs_safe`] if an
//! unvalidated string somehow reaches it).

use crate::model::{InlineStyle, Run};

/// An inline span marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Bold,
    Italic,
    Underline,
    Code,
}

impl Marker {
    pub fn as_str(self) -> &'static str {
        match self {
            Marker::Bold => "**",
            Marker::Italic => "*",
            Marker::Underline => "++",
            Marker::Code => "`",
        }
    }

    pub fn len(self) -> usize {
        self.as_str().len()
    }
}

/// What went wrong while scanning a line, with a 1-based character column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineIssueKind {
    /// A different marker appeared inside an open span.
    Nesting,
    /// End of line before the closing marker.
    UnclosedSpan,
    /// A closing marker immediately after the opening one.
    EmptySpan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineIssue {
    pub kind: InlineIssueKind,
    pub column: usize,
}

/// The outcome of parsing a line that should already have validated.
///
/// `Fallback` carries the raw line verbatim; it is a defensive degrade path
/// for contract violations between validator and renderer, never a
/// substitute for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedInline {
    Runs(Vec<Run>),
    Fallback(String),
}

impl ParsedInline {
    /// Flattens the fallback into a single unstyled run.
    pub fn into_runs(self) -> Vec<Run> {
        match self {
            ParsedInline::Runs(runs) => runs,
            ParsedInline::Fallback(text) => vec![Run::plain(text)],
        }
    }
}

/// Returns the marker starting at byte offset `i`, longest match first.
fn marker_at(bytes: &[u8], i: usize) -> Option<Marker> {
    match bytes.get(i)? {
        b'*' if bytes.get(i + 1) == Some(&b'*') => Some(Marker::Bold),
        b'+' if bytes.get(i + 1) == Some(&b'+') => Some(Marker::Underline),
        b'*' => Some(Marker::Italic),
        b'`' => Some(Marker::Code),
        _ => None,
    }
}

fn is_escapable(b: u8) -> bool {
    matches!(b, b'\\' | b'*' | b'+' | b'`')
}

/// True if an escape sequence starts at byte offset `i`.
fn escape_at(bytes: &[u8], i: usize) -> bool {
    bytes[i] == b'\\' && i + 1 < bytes.len() && is_escapable(bytes[i + 1])
}

fn column_of(text: &str, byte_idx: usize) -> usize {
    text[..byte_idx].chars().count() + 1
}

fn style_for(marker: Marker) -> (InlineStyle, bool) {
    match marker {
        Marker::Bold => (
            InlineStyle {
                bold: true,
                ..InlineStyle::PLAIN
            },
            false,
        ),
        Marker::Italic => (
            InlineStyle {
                italic: true,
                ..InlineStyle::PLAIN
            },
            false,
        ),
        Marker::Underline => (
            InlineStyle {
                underline: true,
                ..InlineStyle::PLAIN
            },
            false,
        ),
        Marker::Code => (InlineStyle::PLAIN, true),
    }
}

/// Parses one line into styled runs, or reports the first structural issue.
///
/// Single left-to-right scan with an index cursor. Outside a span, an
/// unescaped marker opens a span; inside, only the matching close of
/// identical width is legal before end of line.
pub fn parse_runs(text: &str) -> Result<Vec<Run>, InlineIssue> {
    let bytes = text.as_bytes();
    let mut runs: Vec<Run> = Vec::new();
    let mut buf = String::new();
    let mut i = 0;

    while i < bytes.len() {
        if escape_at(bytes, i) {
            buf.push(bytes[i + 1] as char);
            i += 2;
            continue;
        }

        let Some(marker) = marker_at(bytes, i) else {
            // Advance one whole character; markers and escapes are ASCII so
            // multi-byte characters can never match above.
            let ch_len = text[i..].chars().next().map_or(1, char::len_utf8);
            buf.push_str(&text[i..i + ch_len]);
            i += ch_len;
            continue;
        };

        if !buf.is_empty() {
            runs.push(Run::plain(std::mem::take(&mut buf)));
        }
        let open_at = i;
        i += marker.len();

        let mut content = String::new();
        let mut closed = false;
        while i < bytes.len() {
            if escape_at(bytes, i) {
                content.push(bytes[i + 1] as char);
                i += 2;
                continue;
            }
            // The matching close wins over the nesting check so that e.g.
            // `*a**b*` closes the italic span at the first `*`.
            if bytes[i..].starts_with(marker.as_str().as_bytes()) {
                if content.is_empty() {
                    return Err(InlineIssue {
                        kind: InlineIssueKind::EmptySpan,
                        column: column_of(text, open_at),
                    });
                }
                i += marker.len();
                closed = true;
                break;
            }
            if marker_at(bytes, i).is_some() {
                return Err(InlineIssue {
                    kind: InlineIssueKind::Nesting,
                    column: column_of(text, i),
                });
            }
            let ch_len = text[i..].chars().next().map_or(1, char::len_utf8);
            content.push_str(&text[i..i + ch_len]);
            i += ch_len;
        }
        if !closed {
            return Err(InlineIssue {
                kind: InlineIssueKind::UnclosedSpan,
                column: column_of(text, open_at),
            });
        }

        let (style, is_code) = style_for(marker);
        runs.push(Run {
            text: content,
            style,
            is_code,
        });
    }

    if !buf.is_empty() {
        runs.push(Run::plain(buf));
    }
    Ok(runs)
}

/// Like [`parse_runs`], but degrades to the raw line on any issue.
pub fn parse_runs_safe(text: &str) -> ParsedInline {
    match parse_runs(text) {
        Ok(runs) => ParsedInline::Runs(runs),
        Err(_) => ParsedInline::Fallback(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles(text: &str) -> Vec<(String, InlineStyle, bool)> {
        parse_runs(text)
            .unwrap()
            .into_iter()
            .map(|r| (r.text, r.style, r.is_code))
            .collect()
    }

    #[test]
    fn plain_text_is_one_run() {
        assert_eq!(styles("hello world"), vec![(
            "hello world".to_string(),
            InlineStyle::PLAIN,
            false
        )]);
    }

    #[test]
    fn bold_italic_underline_code() {
        let runs = parse_runs("a **b** *c* ++d++ `e`").unwrap();
        assert_eq!(runs.len(), 8);
        assert!(runs[1].style.bold);
        assert!(runs[3].style.italic);
        assert!(runs[5].style.underline);
        assert!(runs[7].is_code);
        assert_eq!(runs[7].text, "e");
    }

    #[test]
    fn escapes_produce_literals_and_no_spans() {
        assert_eq!(styles(r"\*not italic\*"), vec![(
            "*not italic*".to_string(),
            InlineStyle::PLAIN,
            false
        )]);
        assert_eq!(styles(r"back\\slash"), vec![(
            r"back\slash".to_string(),
            InlineStyle::PLAIN,
            false
        )]);
        // A backslash before anything else is a literal backslash.
        assert_eq!(styles(r"a\bc"), vec![(
            r"a\bc".to_string(),
            InlineStyle::PLAIN,
            false
        )]);
    }

    #[test]
    fn escapes_inside_spans() {
        let runs = parse_runs(r"**a\*b**").unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "a*b");
        assert!(runs[0].style.bold);
    }

    #[test]
    fn nesting_is_rejected_at_the_second_marker() {
        let err = parse_runs("**bold *italic** still**").unwrap_err();
        assert_eq!(err.kind, InlineIssueKind::Nesting);
        assert_eq!(err.column, 8);
    }

    #[test]
    fn unclosed_span() {
        let err = parse_runs("a `code").unwrap_err();
        assert_eq!(err.kind, InlineIssueKind::UnclosedSpan);
        assert_eq!(err.column, 3);
        // Width must match: a single `*` does not close `**`; it reads as
        // an italic marker inside the bold span instead.
        let err = parse_runs("**bold*").unwrap_err();
        assert_eq!(err.kind, InlineIssueKind::Nesting);
    }

    #[test]
    fn empty_span() {
        let err = parse_runs("before **** after").unwrap_err();
        assert_eq!(err.kind, InlineIssueKind::EmptySpan);
        assert_eq!(err.column, 8);
        assert_eq!(
            parse_runs("``").unwrap_err().kind,
            InlineIssueKind::EmptySpan
        );
    }

    #[test]
    fn italic_closes_before_nesting_check() {
        // The first `*` after the content closes the italic span; the rest
        // opens a new span which then fails as unclosed.
        let err = parse_runs("*a**b").unwrap_err();
        assert_eq!(err.kind, InlineIssueKind::UnclosedSpan);
    }

    #[test]
    fn adjacent_spans_are_legal() {
        let runs = parse_runs("**a**`b`").unwrap();
        assert_eq!(runs.len(), 2);
        assert!(runs[0].style.bold);
        assert!(runs[1].is_code);
    }

    #[test]
    fn fallback_carries_raw_text() {
        match parse_runs_safe("**broken") {
            ParsedInline::Fallback(raw) => assert_eq!(raw, "**broken"),
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[test]
    fn multibyte_text_survives() {
        let runs = parse_runs("caf\u{e9} **na\u{ef}ve**").unwrap();
        assert_eq!(runs[0].text, "caf\u{e9} ");
        assert_eq!(runs[1].text, "na\u{ef}ve");
    }
}
