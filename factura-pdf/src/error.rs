use thiserror::Error;

/// Rendering only fails when the output stream does; invoice content
/// never produces an error.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to write PDF output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
