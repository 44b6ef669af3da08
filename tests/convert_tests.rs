//! DMP-1 conversion feeding the full pipeline.

mod common;

use common::extract_text;
use docdraw::{ConvertErrorCode, RenderOptions};

#[test]
fn converted_markdown_renders_end_to_end() {
    let markdown = "# Release Notes\n\nThe highlights of\nthis release.\n\n- faster validation\n- stable hashing\n    - now documented\n\n> determinism or bust\n";
    let docdraw_text = docdraw::convert(markdown).unwrap();
    assert!(docdraw::validate(&docdraw_text).is_ok());
    let bytes = docdraw::render_to_vec(&docdraw_text, &RenderOptions::default()).unwrap();
    let text = extract_text(&bytes);
    assert!(text.contains("Release Notes"));
    assert!(text.contains("faster validation"));
    assert!(text.contains("determinism or bust"));
}

#[test]
fn conversion_errors_surface_through_the_pipeline_error() {
    let err = docdraw::convert("| a | b |\n").unwrap_err();
    assert_eq!(err.code, ConvertErrorCode::TablesUnsupported);
    let pipeline_err: docdraw::PipelineError = err.into();
    assert!(pipeline_err.to_string().contains("tables-unsupported"));
}
