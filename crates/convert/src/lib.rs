//! Conversion from the DMP-1 Markdown profile to DocDraw source.
//!
//! DMP-1 is a deliberately small Markdown subset: `#` headings, `-`/`*`
//! bullets and `n.` ordered items indented four spaces per level, `>`
//! quotes, and plain paragraph text. Anything outside the profile is
//! rejected with a stable error code and line number rather than guessed
//! at. Successful output is grammar-valid DocDraw.

mod error;

pub use error::{ConvertError, ConvertErrorCode};

use docdraw_doc::normalize_newlines;

/// Converts DMP-1 Markdown to DocDraw source, or reports the first
/// unsupported construct.
pub fn convert(markdown: &str) -> Result<String, ConvertError> {
    let markdown = normalize_newlines(markdown);

    let mut out: Vec<String> = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();

    fn flush_paragraph(out: &mut Vec<String>, paragraph: &mut Vec<String>) {
        if paragraph.is_empty() {
            return;
        }
        // Adjacent source lines join into one DocDraw paragraph line.
        let text = paragraph.join(" ");
        let text = text.trim();
        if !text.is_empty() {
            out.push(format!("p: {text}"));
        }
        paragraph.clear();
    }

    for (idx, raw) in markdown.split('\n').enumerate() {
        let line_no = idx + 1;
        if raw.contains('\t') {
            return Err(ConvertError::at(
                ConvertErrorCode::TabsInvalid,
                "Tabs are not allowed in DMP-1.",
                line_no,
            ));
        }
        let line = raw.trim_end_matches(' ');
        let trimmed = line.trim();

        if trimmed.is_empty() {
            flush_paragraph(&mut out, &mut paragraph);
            continue;
        }

        if leading_html_tag(trimmed) {
            return Err(ConvertError::at(
                ConvertErrorCode::HtmlUnsupported,
                "HTML is not supported in DMP-1.",
                line_no,
            ));
        }
        if table_row(trimmed) {
            return Err(ConvertError::at(
                ConvertErrorCode::TablesUnsupported,
                "Tables are not supported in DMP-1.",
                line_no,
            ));
        }
        if task_list_item(trimmed) {
            return Err(ConvertError::at(
                ConvertErrorCode::TaskListUnsupported,
                "Task lists are not supported in DMP-1.",
                line_no,
            ));
        }

        if let Some((level, text)) = heading(trimmed) {
            flush_paragraph(&mut out, &mut paragraph);
            out.push(format!("#{level}: {text}"));
            continue;
        }

        if let Some((indent, text)) = bullet_item(line) {
            flush_paragraph(&mut out, &mut paragraph);
            let level = list_level(indent, line_no)?;
            out.push(format!("-{level}: {text}"));
            continue;
        }
        if let Some((indent, text)) = ordered_item(line) {
            flush_paragraph(&mut out, &mut paragraph);
            let level = list_level(indent, line_no)?;
            out.push(format!("1-{level}: {text}"));
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix('>') {
            flush_paragraph(&mut out, &mut paragraph);
            out.push(format!("q: {}", rest.trim()));
            continue;
        }

        if trimmed.starts_with("```") {
            return Err(ConvertError::at(
                ConvertErrorCode::CodeblockUnsupported,
                "Fenced code blocks are not supported in DMP-1.",
                line_no,
            ));
        }

        paragraph.push(trimmed.to_owned());
    }
    flush_paragraph(&mut out, &mut paragraph);

    let mut docdraw = out.join("\n");
    docdraw.push('\n');
    Ok(docdraw)
}

fn list_level(indent: usize, line_no: usize) -> Result<usize, ConvertError> {
    if indent % 4 != 0 {
        return Err(ConvertError::at(
            ConvertErrorCode::AmbiguousListIndent,
            "List indentation must increase by exactly 4 spaces per level.",
            line_no,
        ));
    }
    Ok(indent / 4 + 1)
}

/// A line-initial `<tag>` shaped prefix.
fn leading_html_tag(trimmed: &str) -> bool {
    match trimmed.strip_prefix('<') {
        Some(rest) => rest.find('>').is_some_and(|i| i >= 1),
        None => false,
    }
}

fn table_row(trimmed: &str) -> bool {
    trimmed.len() >= 3 && trimmed.starts_with('|') && trimmed.ends_with('|')
}

fn task_list_item(trimmed: &str) -> bool {
    let Some(rest) = trimmed.strip_prefix("- [") else {
        return false;
    };
    let mut chars = rest.chars();
    matches!(chars.next(), Some(' ' | 'x' | 'X'))
        && chars.next() == Some(']')
        && chars.next().is_some_and(char::is_whitespace)
}

/// ATX heading: 1..=6 hashes, whitespace, text. Optional closing hashes
/// are stripped.
fn heading(trimmed: &str) -> Option<(usize, &str)> {
    let hashes = trimmed.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &trimmed[hashes..];
    let text = rest.trim_start();
    if text.len() == rest.len() || text.is_empty() {
        return None;
    }
    Some((hashes, strip_closing_hashes(text)))
}

fn strip_closing_hashes(text: &str) -> &str {
    let text = text.trim_end();
    let without = text.trim_end_matches('#');
    if without.len() < text.len() && without.ends_with(char::is_whitespace) {
        without.trim_end()
    } else {
        text
    }
}

fn bullet_item(line: &str) -> Option<(usize, &str)> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    let rest = &line[indent..];
    if !rest.starts_with(['-', '*']) {
        return None;
    }
    let after = &rest[1..];
    let text = after.trim_start();
    if text.len() == after.len() || text.is_empty() {
        return None;
    }
    Some((indent, text.trim_end()))
}

fn ordered_item(line: &str) -> Option<(usize, &str)> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    let rest = &line[indent..];
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let after = rest[digits..].strip_prefix('.')?;
    let text = after.trim_start();
    if text.len() == after.len() || text.is_empty() {
        return None;
    }
    Some((indent, text.trim_end()))
}
