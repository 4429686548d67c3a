//! Query-string URL building.

use std::fmt;

use http::Uri;

use crate::ClientError;

/// A base URL plus ordered query parameters.
///
/// Keys and values are written as given; nothing is percent-encoded.
///
/// # Example
///
/// ```
/// use formdata_client::QueryUrl;
///
/// let mut url = QueryUrl::new("https://example.com/upload");
/// url.add_param("key", "value").add_array_param("arr", ["a", "b"]);
/// assert_eq!(url.to_string(), "https://example.com/upload?key=value&arr[]=a&arr[]=b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryUrl {
    base: String,
    params: Vec<(String, String)>,
}

impl QueryUrl {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            params: Vec::new(),
        }
    }

    /// Append `key=value`.
    pub fn add_param(&mut self, key: impl Into<String>, value: impl fmt::Display) -> &mut Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Append one `key[]=value` pair per element, in order.
    pub fn add_array_param<I>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let key = format!("{key}[]");
        for value in values {
            self.params.push((key.clone(), value.to_string()));
        }
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Parse the rendered URL into an [`http::Uri`].
    pub fn to_uri(&self) -> Result<Uri, ClientError> {
        self.to_string()
            .parse()
            .map_err(|e| ClientError::Request(format!("invalid url: {e}")))
    }
}

impl fmt::Display for QueryUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        for (i, (key, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}
