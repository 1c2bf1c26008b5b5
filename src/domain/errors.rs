use thiserror::Error;

/// Classified failure of a single upstream generation attempt.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// The caller supplied no prompt (or an empty one); no upstream call is made.
    #[error("prompt parameter is required")]
    InvalidInput,

    /// The upstream API answered with a non-200 status.
    #[error("upstream API returned status {status}")]
    UpstreamRejected { status: u16, body_snippet: String },

    /// The upstream API answered 200 but the body is not image data.
    #[error("upstream response is not an image")]
    UnexpectedContentType { content_type: String },

    /// Network error, timeout, or any other failure issuing the call.
    #[error("upstream request failed: {message}")]
    TransportFailure { message: String },
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("image not found")]
    NotFound,
}
