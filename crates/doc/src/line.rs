//! Line classification for the DocDraw grammar.
//!
//! A document is processed line by line; each line's significant content is
//! the line with trailing horizontal whitespace stripped and surrounding
//! whitespace trimmed. [`classify`] maps that content to exactly one
//! [`Line`] variant, in the grammar's priority order. Both the validator and
//! the document builder go through this function so they can never disagree
//! on what a line is.

use crate::model::{ListKind, OrderedKind};

/// The classification of one trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    /// `p{`
    ParagraphOpen,
    /// `code{`
    CodeOpen,
    /// `}`
    Close,
    /// `br`
    Break,
    /// `---`
    Divider,
    /// `#N: text`
    Heading { level: u8, text: &'a str },
    /// `p: text`
    Paragraph(&'a str),
    /// `q: text`
    Quote(&'a str),
    /// `..: text`
    Continuation(&'a str),
    /// `-N:`, `1-N:`, `a-N:` or `A-N:` followed by text.
    ListItem {
        kind: ListKind,
        level: u8,
        text: &'a str,
    },
    /// Any other non-blank line.
    Unknown,
}

/// Classifies a line whose surrounding whitespace has already been trimmed.
pub fn classify(trimmed: &str) -> Line<'_> {
    match trimmed {
        "" => return Line::Blank,
        "p{" => return Line::ParagraphOpen,
        "code{" => return Line::CodeOpen,
        "}" => return Line::Close,
        "br" => return Line::Break,
        "---" => return Line::Divider,
        _ => {}
    }

    if let Some(rest) = trimmed.strip_prefix('#')
        && let Some((level, text)) = digit_colon_text(rest, b'1'..=b'6')
    {
        return Line::Heading { level, text };
    }
    if let Some(text) = prefix_colon_text(trimmed, "p") {
        return Line::Paragraph(text);
    }
    if let Some(text) = prefix_colon_text(trimmed, "q") {
        return Line::Quote(text);
    }
    if let Some(text) = prefix_colon_text(trimmed, "..") {
        return Line::Continuation(text);
    }
    if let Some(rest) = trimmed.strip_prefix('-')
        && let Some((level, text)) = digit_colon_text(rest, b'1'..=b'9')
    {
        return Line::ListItem {
            kind: ListKind::Bullet,
            level,
            text,
        };
    }
    for (prefix, kind) in [
        ("1-", OrderedKind::Numeric),
        ("a-", OrderedKind::AlphaLower),
        ("A-", OrderedKind::AlphaUpper),
    ] {
        if let Some(rest) = trimmed.strip_prefix(prefix)
            && let Some((level, text)) = digit_colon_text(rest, b'1'..=b'9')
        {
            return Line::ListItem {
                kind: ListKind::Ordered(kind),
                level,
                text,
            };
        }
    }

    Line::Unknown
}

/// Matches `<digit>:<ws+><text>` where the digit falls in `range` and the
/// text is non-empty, returning the digit's value and the text.
fn digit_colon_text(rest: &str, range: std::ops::RangeInclusive<u8>) -> Option<(u8, &str)> {
    let bytes = rest.as_bytes();
    let digit = *bytes.first()?;
    if !range.contains(&digit) {
        return None;
    }
    let text = colon_text(&rest[1..])?;
    Some((digit - b'0', text))
}

fn prefix_colon_text<'a>(trimmed: &'a str, prefix: &str) -> Option<&'a str> {
    colon_text(trimmed.strip_prefix(prefix)?)
}

/// Matches `:<ws+><text>` with non-empty text. The whitespace after the
/// colon is required; the text keeps no leading whitespace.
fn colon_text(rest: &str) -> Option<&str> {
    let rest = rest.strip_prefix(':')?;
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    let text = rest.trim_start_matches([' ', '\t']);
    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_classify_exactly() {
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify("p{"), Line::ParagraphOpen);
        assert_eq!(classify("code{"), Line::CodeOpen);
        assert_eq!(classify("}"), Line::Close);
        assert_eq!(classify("br"), Line::Break);
        assert_eq!(classify("---"), Line::Divider);
    }

    #[test]
    fn heading_levels() {
        assert_eq!(
            classify("#1: Title"),
            Line::Heading {
                level: 1,
                text: "Title"
            }
        );
        assert_eq!(
            classify("#6:  spaced"),
            Line::Heading {
                level: 6,
                text: "spaced"
            }
        );
        // Level 0 and 7 are not headings.
        assert_eq!(classify("#0: x"), Line::Unknown);
        assert_eq!(classify("#7: x"), Line::Unknown);
        // Missing space or missing text.
        assert_eq!(classify("#1:x"), Line::Unknown);
        assert_eq!(classify("#1:"), Line::Unknown);
    }

    #[test]
    fn paragraph_quote_continuation() {
        assert_eq!(classify("p: hello"), Line::Paragraph("hello"));
        assert_eq!(classify("q: quoted"), Line::Quote("quoted"));
        assert_eq!(classify("..: more"), Line::Continuation("more"));
        assert_eq!(classify("p:nospace"), Line::Unknown);
        assert_eq!(classify("..:"), Line::Unknown);
    }

    #[test]
    fn list_items() {
        assert_eq!(
            classify("-1: a"),
            Line::ListItem {
                kind: ListKind::Bullet,
                level: 1,
                text: "a"
            }
        );
        assert_eq!(
            classify("1-3: b"),
            Line::ListItem {
                kind: ListKind::Ordered(OrderedKind::Numeric),
                level: 3,
                text: "b"
            }
        );
        assert_eq!(
            classify("a-2: c"),
            Line::ListItem {
                kind: ListKind::Ordered(OrderedKind::AlphaLower),
                level: 2,
                text: "c"
            }
        );
        assert_eq!(
            classify("A-9: d"),
            Line::ListItem {
                kind: ListKind::Ordered(OrderedKind::AlphaUpper),
                level: 9,
                text: "d"
            }
        );
        // Level 0 is invalid everywhere.
        assert_eq!(classify("-0: x"), Line::Unknown);
        assert_eq!(classify("1-0: x"), Line::Unknown);
    }

    #[test]
    fn unknown_lines() {
        assert_eq!(classify("hello world"), Line::Unknown);
        assert_eq!(classify("## not docdraw"), Line::Unknown);
        assert_eq!(classify("p {"), Line::Unknown);
    }
}
