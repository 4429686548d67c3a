//! Client-side error types.
//!
//! This module provides [`ClientError`], the error type for header, URL and
//! request assembly.

use formdata_core::FormDataError;

/// Errors raised while preparing a form-data request.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The form body could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[from] FormDataError),

    /// A header name is not a valid HTTP token.
    #[error("invalid header name: {0:?}")]
    InvalidHeaderName(String),

    /// A header value contains bytes not allowed in HTTP headers.
    #[error("invalid value for header {0:?}")]
    InvalidHeaderValue(String),

    /// The URL or request could not be built.
    #[error("request error: {0}")]
    Request(String),
}

impl ClientError {
    /// Whether the error came from encoding the form body.
    pub fn is_encode(&self) -> bool {
        matches!(self, ClientError::Encode(_))
    }
}

impl From<http::Error> for ClientError {
    fn from(err: http::Error) -> Self {
        ClientError::Request(format!("failed to build request: {err}"))
    }
}
