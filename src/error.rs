//! Error types for SGF preparation, region lookup and rendering.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SgfError {
    /// The SGF text failed the `(;` ... `)` shape check.
    #[error("Invalid SGF format: {0}")]
    InvalidInput(String),

    /// The requested region name is not in the catalog.
    #[error("Invalid region name: {0}")]
    UnknownRegion(String),

    /// Drawing or encoding a region failed. No image is produced.
    #[error("Failed to render {region}: {message}")]
    RenderFailure { region: String, message: String },
}

impl SgfError {
    pub fn render_failure(region: &str, message: impl ToString) -> Self {
        SgfError::RenderFailure {
            region: region.to_string(),
            message: message.to_string(),
        }
    }

    /// True for errors caused by the request itself rather than by an internal fault.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, SgfError::InvalidInput(_) | SgfError::UnknownRegion(_))
    }
}
