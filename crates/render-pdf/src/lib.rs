//! Deterministic PDF output for DocDraw.
//!
//! Rendering the same pages with the same options always produces the same
//! bytes. The writer serializes objects in id order with sorted dictionary
//! keys and fixed-precision reals, and the document's `CreationDate` is
//! pinned to the epoch rather than the wall clock. The SHA-256 of the
//! output is the document's content hash.

mod error;
mod renderer;
mod writer;

pub use error::RenderError;
pub use renderer::{PageContext, font_resources};
pub use writer::StreamingPdfWriter;

use std::io::{Seek, Write};

use lopdf::{Dictionary, Object, StringFormat, dictionary};
use sha2::{Digest, Sha256};

use docdraw_layout::fonts::to_win_ansi;
use docdraw_layout::{PAGE_HEIGHT, PAGE_WIDTH, Page};

const PDF_VERSION: &str = "1.4";
const DEFAULT_TITLE: &str = "DocDraw Document";
const PRODUCER: &str = "DocDraw (DD-PDF-1)";
// Pinned so output never depends on the wall clock.
const CREATION_DATE: &str = "D:19700101000000Z";

/// Backend passthrough options. Geometry and typography are fixed by the
/// layout engine and deliberately not configurable here.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Document title metadata; a fixed default is used when absent.
    pub title: Option<String>,
}

/// Renders laid-out pages to `writer` as a complete PDF document and
/// returns the writer.
pub fn render_pdf<W: Write + Seek>(
    pages: &[Page],
    options: &RenderOptions,
    writer: W,
) -> Result<W, RenderError> {
    let mut pdf = StreamingPdfWriter::new(writer, PDF_VERSION, font_resources(), info_dict(options))?;

    let mut page_ids = Vec::with_capacity(pages.len());
    for page in pages {
        let mut ctx = PageContext::new(PAGE_HEIGHT);
        for element in page {
            ctx.draw(element);
        }
        let content_id = pdf.buffer_content_stream(ctx.finish())?;
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => pdf.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Contents" => content_id,
            "Resources" => pdf.resources_id,
        };
        page_ids.push(pdf.buffer_object(page_dict.into()));
    }
    pdf.set_page_ids(page_ids);
    Ok(pdf.finish()?)
}

/// Lowercase hex SHA-256 of the rendered bytes.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut out = String::with_capacity(64);
    for byte in digest {
        use std::fmt::Write as _;
        let _ = write!(out, "{byte:02x}");
    }
    out
}

fn info_dict(options: &RenderOptions) -> Dictionary {
    let title = options.title.as_deref().unwrap_or(DEFAULT_TITLE);
    dictionary! {
        "Title" => Object::String(to_win_ansi(title), StringFormat::Literal),
        "Author" => Object::string_literal("DocDraw"),
        "Producer" => Object::string_literal(PRODUCER),
        "CreationDate" => Object::string_literal(CREATION_DATE),
    }
}
