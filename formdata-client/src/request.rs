//! Request assembly.
//!
//! Combines an encoded form body, its boundary, a URL and accumulated
//! headers into an [`http::Request`]. Sending it is left to the caller.

use bytes::Bytes;
use formdata_core::FormData;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, Method, Request};

use crate::{ClientError, QueryUrl, RequestHeaders};

/// Builder for a `multipart/form-data` request.
///
/// # Example
///
/// ```
/// use formdata_client::{FormRequest, QueryUrl, RequestHeaders};
/// use formdata_core::FormData;
///
/// let mut form = FormData::new();
/// form.append("comment", "Добрый день")?;
///
/// let mut headers = RequestHeaders::new();
/// headers.set_auth("Bearer token123")?;
///
/// let request = FormRequest::post(QueryUrl::new("https://example.com/upload"))
///     .headers(&mut headers)
///     .build(&form)?;
///
/// assert_eq!(request.method().as_str(), "POST");
/// assert_eq!(request.headers()["content-type"], form.content_type().as_str());
/// # Ok::<(), formdata_client::ClientError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FormRequest {
    method: Method,
    url: QueryUrl,
    headers: HeaderMap,
}

impl FormRequest {
    pub fn new(method: Method, url: QueryUrl) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
        }
    }

    pub fn post(url: QueryUrl) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn put(url: QueryUrl) -> Self {
        Self::new(Method::PUT, url)
    }

    /// Take the headers accumulated so far, leaving `headers` empty.
    ///
    /// Called more than once, later headers replace earlier ones of the
    /// same name.
    pub fn headers(mut self, headers: &mut RequestHeaders) -> Self {
        for (name, value) in headers.build() {
            if let Some(name) = name {
                self.headers.insert(name, value);
            }
        }
        self
    }

    /// Encode `form` and build the request.
    ///
    /// The form's own `Content-Type` (with its boundary) always wins over
    /// a `Content-Type` set through [`headers`](Self::headers).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Encode`] if the body cannot be encoded and
    /// [`ClientError::Request`] if the URL or request is invalid.
    pub fn build(self, form: &FormData) -> Result<Request<Bytes>, ClientError> {
        let body = form.body()?;
        let uri = self.url.to_uri()?;

        let mut headers = self.headers;
        let content_type = HeaderValue::try_from(form.content_type())
            .map_err(|_| ClientError::InvalidHeaderValue(CONTENT_TYPE.as_str().to_owned()))?;
        headers.insert(CONTENT_TYPE, content_type);
        headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            method = %self.method,
            uri = %uri,
            parts = form.len(),
            bytes = body.len(),
            "assembled form-data request"
        );

        let mut builder = Request::builder().method(self.method).uri(uri);
        if let Some(map) = builder.headers_mut() {
            map.extend(headers);
        }
        Ok(builder.body(body)?)
    }
}
