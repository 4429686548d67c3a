//! Form fields and their per-part headers.

use bytes::{Bytes, BytesMut};

use crate::binary::{BinaryPayload, encode_binary};
use crate::error::FormDataError;
use crate::utf8::{SurrogatePolicy, encode_str, encode_utf16};

/// Content type recorded for text fields.
pub const TEXT_CONTENT_TYPE: &str = "text/plain";

/// Content type written when a part carries none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A text field value.
///
/// Usually built from a Rust string. Raw UTF-16 code units are also
/// accepted so text coming from a UTF-16 source, including broken
/// surrogate pairs, can be encoded as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextPayload {
    Str(String),
    Utf16(Vec<u16>),
}

impl TextPayload {
    /// Content type of every text part.
    pub fn content_type(&self) -> &'static str {
        TEXT_CONTENT_TYPE
    }

    fn encode(&self, policy: SurrogatePolicy, out: &mut BytesMut) -> Result<(), FormDataError> {
        match self {
            TextPayload::Str(s) => {
                encode_str(s, out);
                Ok(())
            }
            TextPayload::Utf16(units) => encode_utf16(units.iter().copied(), policy, out),
        }
    }
}

/// The value of a form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    Text(TextPayload),
    Binary(BinaryPayload),
}

impl Payload {
    /// Text payload from UTF-16 code units.
    pub fn utf16(units: impl Into<Vec<u16>>) -> Self {
        Payload::Text(TextPayload::Utf16(units.into()))
    }

    pub fn content_type(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text.content_type()),
            Payload::Binary(binary) => binary.get_content_type(),
        }
    }

    pub fn filename(&self) -> Option<&str> {
        match self {
            Payload::Text(_) => None,
            Payload::Binary(binary) => binary.get_filename(),
        }
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::Text(TextPayload::Str(value.to_owned()))
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::Text(TextPayload::Str(value))
    }
}

impl From<TextPayload> for Payload {
    fn from(value: TextPayload) -> Self {
        Payload::Text(value)
    }
}

impl From<BinaryPayload> for Payload {
    fn from(value: BinaryPayload) -> Self {
        Payload::Binary(value)
    }
}

impl From<Bytes> for Payload {
    fn from(value: Bytes) -> Self {
        Payload::Binary(BinaryPayload::new(value))
    }
}

impl From<Vec<u8>> for Payload {
    fn from(value: Vec<u8>) -> Self {
        Payload::Binary(BinaryPayload::new(value))
    }
}

/// A named field, in the order it was appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Part {
    name: String,
    payload: Payload,
}

impl Part {
    pub(crate) fn new(name: String, payload: Payload) -> Self {
        Self { name, payload }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The `Content-Disposition` and `Content-Type` lines, ending with the
    /// blank line that separates headers from content.
    ///
    /// An empty filename is omitted and an empty content type falls back to
    /// [`DEFAULT_CONTENT_TYPE`].
    pub fn headers(&self) -> String {
        let mut headers = format!("Content-Disposition: form-data; name=\"{}\"", self.name);
        if let Some(filename) = self.payload.filename().filter(|f| !f.is_empty()) {
            headers.push_str("; filename=\"");
            headers.push_str(&escape_filename(filename));
            headers.push('"');
        }
        headers.push_str("\r\nContent-Type: ");
        let content_type = self
            .payload
            .content_type()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE);
        headers.push_str(content_type);
        headers.push_str("\r\n\r\n");
        headers
    }

    /// Write the part's content bytes.
    pub(crate) fn encode_content(
        &self,
        policy: SurrogatePolicy,
        out: &mut BytesMut,
    ) -> Result<(), FormDataError> {
        match &self.payload {
            Payload::Text(text) => text.encode(policy, out),
            Payload::Binary(binary) => {
                encode_binary(binary.data(), out);
                Ok(())
            }
        }
    }
}

/// Double quotes become `%22`; nothing else is touched.
pub fn escape_filename(filename: &str) -> String {
    filename.replace('"', "%22")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_part_headers() {
        let part = Part::new("name".into(), "José".into());
        assert_eq!(
            part.headers(),
            "Content-Disposition: form-data; name=\"name\"\r\nContent-Type: text/plain\r\n\r\n"
        );
    }

    #[test]
    fn test_binary_part_default_content_type() {
        let part = Part::new("blob".into(), vec![1u8, 2, 3].into());
        assert_eq!(
            part.headers(),
            "Content-Disposition: form-data; name=\"blob\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        );
    }

    #[test]
    fn test_binary_part_with_filename() {
        let payload = BinaryPayload::new(vec![0u8])
            .content_type("image/png")
            .filename("logo.png");
        let part = Part::new("file".into(), payload.into());
        assert_eq!(
            part.headers(),
            "Content-Disposition: form-data; name=\"file\"; filename=\"logo.png\"\r\nContent-Type: image/png\r\n\r\n"
        );
    }

    #[test]
    fn test_empty_metadata_uses_defaults() {
        let payload = BinaryPayload::new(vec![1u8]).content_type("").filename("");
        let part = Part::new("f".into(), payload.into());
        assert_eq!(
            part.headers(),
            "Content-Disposition: form-data; name=\"f\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        );
    }

    #[test]
    fn test_escape_filename() {
        assert_eq!(escape_filename("a\"b.txt"), "a%22b.txt");
        assert_eq!(escape_filename("\"q\".txt"), "%22q%22.txt");
        assert_eq!(escape_filename("ok;name=\\x 'y'.txt"), "ok;name=\\x 'y'.txt");
    }

    #[test]
    fn test_payload_conversions() {
        assert!(matches!(Payload::from("x"), Payload::Text(TextPayload::Str(_))));
        assert!(matches!(Payload::from(String::from("x")), Payload::Text(_)));
        assert!(matches!(Payload::from(vec![1u8]), Payload::Binary(_)));
        assert!(matches!(
            Payload::from(Bytes::from_static(b"x")),
            Payload::Binary(_)
        ));
        assert!(matches!(
            Payload::utf16(vec![0x41u16]),
            Payload::Text(TextPayload::Utf16(_))
        ));
    }

    #[test]
    fn test_text_content_type_is_fixed() {
        assert_eq!(Payload::from("x").content_type(), Some("text/plain"));
        assert_eq!(Payload::from(vec![1u8]).content_type(), None);
        assert_eq!(Payload::from("x").filename(), None);
    }
}
