use thiserror::Error;

/// Input rejected before any analysis started.
///
/// Surfaced to the user as a notification; the page stays idle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter some text to analyze")]
    EmptyText,

    #[error("Please upload an image first")]
    NoImage,

    #[error("Image size should be less than {}MB (got {size} bytes)", .limit / (1024 * 1024))]
    ImageTooLarge { size: u64, limit: u64 },

    #[error("Unsupported image format (expected PNG, JPEG, GIF, WebP or BMP)")]
    UnsupportedImage,
}

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    State(#[from] dv_core::CoreError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl VerifyError {
    /// The validation failure, if this error is one.
    #[must_use]
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(error) => Some(error),
            _ => None,
        }
    }
}
