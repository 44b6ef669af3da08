use lopdf::Document;

/// Extracts the text of every page of a rendered PDF, in page order.
pub fn extract_text(pdf_bytes: &[u8]) -> String {
    let doc = Document::load_mem(pdf_bytes).expect("rendered bytes should parse as PDF");
    let mut text = String::new();
    let page_count = doc.get_pages().len();
    for page_num in 1..=page_count {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// Parses the rendered bytes and returns the number of pages.
pub fn page_count(pdf_bytes: &[u8]) -> usize {
    let doc = Document::load_mem(pdf_bytes).expect("rendered bytes should parse as PDF");
    doc.get_pages().len()
}
