//! Form-data encoding errors.
//!
//! Every error here is a usage fault raised synchronously by the call that
//! detected it. Nothing is retried, swallowed or logged.

/// Errors produced while appending fields or building a body.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormDataError {
    /// A required argument was missing or unusable.
    #[error("argument error: {0}")]
    Argument(String),

    /// A UTF-16 surrogate without its partner, rejected under
    /// [`SurrogatePolicy::Strict`](crate::SurrogatePolicy::Strict).
    #[error("unpaired surrogate 0x{unit:04x} at code unit {index}")]
    UnpairedSurrogate { index: usize, unit: u16 },
}

impl FormDataError {
    /// Create an argument error with a message.
    pub fn argument<S: Into<String>>(message: S) -> Self {
        FormDataError::Argument(message.into())
    }

    /// Whether this is an argument error.
    pub fn is_argument(&self) -> bool {
        matches!(self, FormDataError::Argument(_))
    }
}
