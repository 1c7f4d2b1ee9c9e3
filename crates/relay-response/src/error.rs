//! Error types for response mutation.

use thiserror::Error;

/// Result type alias for response operations.
pub type Result<T> = std::result::Result<T, ResponseError>;

/// Errors raised synchronously by [`Response`](crate::Response) operations.
///
/// None of these are recovered internally; callers handle or propagate them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// The stored status line has no `"code message"` structure.
    #[error("malformed status line: {0:?}")]
    MalformedStatus(String),

    /// The numeric code has no registered reason phrase.
    #[error("no reason phrase known for status code {0}")]
    InvalidStatusCode(u16),

    /// A text-only accessor was used while the body holds a non-text part.
    #[error("body is not text-only: found a {0} part")]
    NonTextBody(&'static str),

    /// A header value does not have the shape its accessor expects.
    #[error("malformed {name} header: {value:?}")]
    MalformedHeader { name: String, value: String },
}
