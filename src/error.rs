use thiserror::Error;

use docdraw_convert::ConvertError;
use docdraw_grammar::ValidationError;
use docdraw_render_pdf::RenderError;

/// Aggregated error type for the whole validate-layout-render pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("conversion failed: {0}")]
    Convert(#[from] ConvertError),

    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
