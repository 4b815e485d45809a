//! Errors returned by `TodoClient` parse methods.
//!
//! 404 and 422 get their own variants since callers act on them
//! differently: one means the id is gone, the other that the input must be
//! fixed. Any other unexpected status lands in `HttpError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("todo not found")]
    NotFound,

    /// The server rejected the input with 422. `body` holds the field
    /// errors as sent by the server.
    #[error("validation failed: {body}")]
    Validation { body: String },

    /// Any other non-success status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
