//! Request header accumulation.
//!
//! [`RequestHeaders`] collects headers for a single request. [`build`]
//! hands the collected map over and leaves the accumulator empty, so the
//! same value can be reused for the next request.
//!
//! [`build`]: RequestHeaders::build

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue};

use crate::ClientError;

/// `Content-Type` for JSON request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Accumulates headers for one request.
///
/// Setting a header that is already present replaces its value.
///
/// # Example
///
/// ```
/// use formdata_client::RequestHeaders;
///
/// let mut headers = RequestHeaders::new();
/// headers
///     .set_auth("Bearer token123")?
///     .add("x-request-id", "abc-123")?;
///
/// let map = headers.build();
/// assert_eq!(map.get("authorization").unwrap(), "Bearer token123");
/// assert!(headers.is_empty());
/// # Ok::<(), formdata_client::ClientError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestHeaders {
    headers: HeaderMap,
}

impl RequestHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header, replacing any earlier value for the same name.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidHeaderName`] or
    /// [`ClientError::InvalidHeaderValue`] if either part is not valid HTTP.
    pub fn add(&mut self, name: &str, value: &str) -> Result<&mut Self, ClientError> {
        let header_name = HeaderName::try_from(name)
            .map_err(|_| ClientError::InvalidHeaderName(name.to_owned()))?;
        let header_value = HeaderValue::try_from(value)
            .map_err(|_| ClientError::InvalidHeaderValue(name.to_owned()))?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Set the `Authorization` header.
    pub fn set_auth(&mut self, value: &str) -> Result<&mut Self, ClientError> {
        self.insert(AUTHORIZATION, value)
    }

    /// Set the `Content-Type` header.
    pub fn set_content_type(&mut self, value: &str) -> Result<&mut Self, ClientError> {
        self.insert(CONTENT_TYPE, value)
    }

    /// Set `Content-Type: application/json`.
    pub fn set_json_content_type(&mut self) -> &mut Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        self
    }

    /// Set `Content-Type: multipart/form-data; boundary={boundary}`.
    pub fn set_form_data_content_type(
        &mut self,
        boundary: &str,
    ) -> Result<&mut Self, ClientError> {
        self.set_content_type(&format!("multipart/form-data; boundary={boundary}"))
    }

    /// Drop every accumulated header.
    pub fn reset(&mut self) -> &mut Self {
        self.headers.clear();
        self
    }

    /// Take the accumulated headers, leaving this accumulator empty.
    pub fn build(&mut self) -> HeaderMap {
        std::mem::take(&mut self.headers)
    }

    pub fn get_headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    fn insert(&mut self, name: HeaderName, value: &str) -> Result<&mut Self, ClientError> {
        let header_value = HeaderValue::try_from(value)
            .map_err(|_| ClientError::InvalidHeaderValue(name.as_str().to_owned()))?;
        self.headers.insert(name, header_value);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_default() {
        let headers = RequestHeaders::new();
        assert!(headers.is_empty());
    }

    #[test]
    fn test_add_and_build() {
        let mut headers = RequestHeaders::new();
        headers
            .add("x-request-id", "abc-123")
            .unwrap()
            .add("X-Custom", "value")
            .unwrap();

        let map = headers.build();
        assert_eq!(map.get("x-request-id").unwrap(), "abc-123");
        assert_eq!(map.get("x-custom").unwrap(), "value");
        assert!(headers.is_empty());
    }

    #[test]
    fn test_add_replaces_value() {
        let mut headers = RequestHeaders::new();
        headers.add("x-custom", "one").unwrap();
        headers.add("x-custom", "two").unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get_headers().get("x-custom").unwrap(), "two");
    }

    #[test]
    fn test_convenience_setters() {
        let mut headers = RequestHeaders::new();
        headers.set_auth("Bearer token").unwrap();
        headers.set_json_content_type();

        let map = headers.build();
        assert_eq!(map.get(AUTHORIZATION).unwrap(), "Bearer token");
        assert_eq!(map.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_form_data_content_type() {
        let mut headers = RequestHeaders::new();
        headers.set_json_content_type();
        headers.set_form_data_content_type("----abc").unwrap();

        let map = headers.build();
        assert_eq!(
            map.get(CONTENT_TYPE).unwrap(),
            "multipart/form-data; boundary=----abc"
        );
    }

    #[test]
    fn test_build_is_single_use() {
        let mut headers = RequestHeaders::new();
        headers.set_auth("Bearer first").unwrap();
        let first = headers.build();
        assert_eq!(first.len(), 1);

        let second = headers.build();
        assert!(second.is_empty());

        headers.add("x-next", "1").unwrap();
        let third = headers.build();
        assert_eq!(third.len(), 1);
        assert!(third.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_reset() {
        let mut headers = RequestHeaders::new();
        headers.set_auth("Bearer token").unwrap();
        headers.reset();
        assert!(headers.build().is_empty());
    }

    #[test]
    fn test_invalid_header_name() {
        let mut headers = RequestHeaders::new();
        let err = headers.add("invalid\0name", "value").unwrap_err();
        assert!(matches!(err, ClientError::InvalidHeaderName(_)));
        assert!(headers.is_empty());
    }

    #[test]
    fn test_invalid_header_value() {
        let mut headers = RequestHeaders::new();
        let err = headers.set_auth("line\nbreak").unwrap_err();
        assert!(
            matches!(err, ClientError::InvalidHeaderValue(ref name) if name == "authorization")
        );
    }
}
