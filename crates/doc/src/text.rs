//! Source text normalization.

/// Normalizes CRLF/CR line endings to LF. Idempotent.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Canonicalizes DocDraw source text: LF endings, trailing horizontal
/// whitespace stripped, runs of blank lines collapsed to one, leading and
/// trailing blank lines removed, exactly one final newline. Idempotent, so
/// normalizing already-normalized text is a no-op.
pub fn normalize(text: &str) -> String {
    let text = normalize_newlines(text);
    let mut out: Vec<&str> = Vec::new();
    let mut blank_run = 0usize;

    for line in text.split('\n') {
        let line = line.trim_end_matches([' ', '\t']);
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
            out.push("");
            continue;
        }
        blank_run = 0;
        out.push(line);
    }

    while out.first() == Some(&"") {
        out.remove(0);
    }
    while out.last() == Some(&"") {
        out.pop();
    }

    let mut result = out.join("\n");
    result.push('\n');
    result
}
