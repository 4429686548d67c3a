//! `multipart/form-data` body assembly.
//!
//! Each part is framed as:
//!
//! ```text
//! --{boundary}\r\n
//! Content-Disposition: form-data; name="{name}"[; filename="{filename}"]\r\n
//! Content-Type: {content-type}\r\n
//! \r\n
//! {content}\r\n
//! ```
//!
//! and the body ends with `--{boundary}--\r\n`.

use bytes::{Bytes, BytesMut};

use crate::boundary::{BoundarySource, FixedBoundary, RandomBoundary};
use crate::error::FormDataError;
use crate::options::EncoderOptions;
use crate::part::{Part, Payload};
use crate::utf8::encode_str;

/// Line terminator used throughout the body.
pub const CRLF: &str = "\r\n";

/// An ordered set of form fields sharing one boundary.
///
/// Fields are appended one at a time and rendered in insertion order by
/// [`body`](FormData::body). Building does not consume or change the
/// fields, so it can be repeated.
///
/// # Example
///
/// ```
/// use formdata_core::{BinaryPayload, FormData};
///
/// let mut form = FormData::with_boundary("XyZ");
/// form.append("name", "José")?
///     .append("file", BinaryPayload::new(vec![1, 2, 3]).filename("a.bin"))?;
///
/// let body = form.body()?;
/// assert!(body.starts_with(b"--XyZ\r\n"));
/// assert!(body.ends_with(b"--XyZ--\r\n"));
/// # Ok::<(), formdata_core::FormDataError>(())
/// ```
#[derive(Clone, Debug)]
pub struct FormData {
    boundary: String,
    parts: Vec<Part>,
    options: EncoderOptions,
}

impl Default for FormData {
    fn default() -> Self {
        Self::new()
    }
}

impl FormData {
    /// Create an encoder with default options and a random boundary.
    pub fn new() -> Self {
        Self::with_options(EncoderOptions::default(), &mut RandomBoundary::thread())
    }

    /// Create an encoder whose boundary is `options.boundary_prefix`
    /// followed by one token from `source`.
    pub fn with_options<B>(options: EncoderOptions, source: &mut B) -> Self
    where
        B: BoundarySource + ?Sized,
    {
        let boundary = format!("{}{}", options.boundary_prefix, source.token());
        Self {
            boundary,
            parts: Vec::new(),
            options,
        }
    }

    /// Create an encoder with an exact boundary (no prefix is added).
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        let options = EncoderOptions::default().boundary_prefix("");
        Self::with_options(options, &mut FixedBoundary::new(boundary))
    }

    /// Append a field.
    ///
    /// Strings become text parts with content type `text/plain`; byte
    /// buffers and [`BinaryPayload`](crate::BinaryPayload)s are stored as
    /// given. Duplicate names are kept and emitted in order.
    ///
    /// # Errors
    ///
    /// Returns [`FormDataError::Argument`] if `name` is empty.
    pub fn append(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Payload>,
    ) -> Result<&mut Self, FormDataError> {
        let name = name.into();
        if name.is_empty() {
            return Err(FormDataError::argument(
                "not enough arguments: field name is required",
            ));
        }
        let payload = value.into();
        tracing::trace!(
            field = %name,
            text = matches!(payload, Payload::Text(_)),
            "appended form field"
        );
        self.parts.push(Part::new(name, payload));
        Ok(self)
    }

    /// The boundary shared by every part delimiter.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Appended fields, in insertion order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Options this encoder was created with.
    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Number of appended fields.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether no field has been appended.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The request `Content-Type` value announcing this body's boundary.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Render the body.
    ///
    /// # Errors
    ///
    /// Fails only under [`SurrogatePolicy::Strict`](crate::SurrogatePolicy::Strict)
    /// when a UTF-16 text part contains an unpaired surrogate. No partial
    /// body is returned.
    pub fn body(&self) -> Result<Bytes, FormDataError> {
        let delimiter = format!("--{}{CRLF}", self.boundary);
        let mut out = BytesMut::new();

        for part in &self.parts {
            encode_str(&delimiter, &mut out);
            encode_str(&part.headers(), &mut out);
            part.encode_content(self.options.surrogates, &mut out)?;
            encode_str(CRLF, &mut out);
        }
        encode_str(&format!("--{}--{CRLF}", self.boundary), &mut out);

        tracing::debug!(
            parts = self.parts.len(),
            bytes = out.len(),
            boundary = %self.boundary,
            "built multipart body"
        );
        Ok(out.freeze())
    }
}
