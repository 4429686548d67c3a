//! Binary field values.

use bytes::{Bytes, BytesMut};

/// A binary field value with optional part metadata.
///
/// The data is held as [`Bytes`], so both an owned buffer (`Vec<u8>`) and a
/// view into a shared one (`Bytes::slice`) are accepted without copying.
///
/// # Example
///
/// ```
/// use formdata_core::BinaryPayload;
///
/// let payload = BinaryPayload::new(vec![0x89, b'P', b'N', b'G'])
///     .content_type("image/png")
///     .filename("logo.png");
/// assert_eq!(payload.data().len(), 4);
/// assert_eq!(payload.get_filename(), Some("logo.png"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryPayload {
    data: Bytes,
    content_type: Option<String>,
    filename: Option<String>,
}

impl BinaryPayload {
    /// Create a payload with no content type or filename.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            content_type: None,
            filename: None,
        }
    }

    /// Set the part's `Content-Type`.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the part's `filename`.
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn get_content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn get_filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }
}

impl From<Bytes> for BinaryPayload {
    fn from(data: Bytes) -> Self {
        Self::new(data)
    }
}

impl From<Vec<u8>> for BinaryPayload {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&'static [u8]> for BinaryPayload {
    fn from(data: &'static [u8]) -> Self {
        Self::new(data)
    }
}

/// Copy bytes into the output unchanged, preserving order and length.
pub fn encode_binary(data: &[u8], out: &mut BytesMut) {
    out.extend_from_slice(data);
}
