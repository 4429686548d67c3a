//! Request-side helpers for `formdata-core` bodies.
//!
//! ## Modules
//!
//! - [`headers`]: [`RequestHeaders`], a single-use header accumulator
//! - [`url`]: [`QueryUrl`], a base URL with `key=value` / `key[]=value` parameters
//! - [`request`]: [`FormRequest`], assembles an [`http::Request`] around a form body
//! - [`error`]: [`ClientError`]
//!
//! Nothing here performs I/O; the assembled request is handed back to the
//! caller for whatever transport it uses.
//!
//! ## Example
//!
//! ```
//! use formdata_client::{FormRequest, QueryUrl, RequestHeaders};
//! use formdata_core::{BinaryPayload, FormData};
//!
//! let mut form = FormData::new();
//! form.append("title", "Ünïcödé")?;
//! form.append(
//!     "attachment",
//!     BinaryPayload::new(vec![0xDE, 0xAD, 0xBE, 0xEF]).filename("blob.bin"),
//! )?;
//!
//! let mut url = QueryUrl::new("https://api.example.com/v1/files");
//! url.add_param("folder", "inbox");
//!
//! let mut headers = RequestHeaders::new();
//! headers.set_auth("Bearer token123")?;
//!
//! let request = FormRequest::post(url).headers(&mut headers).build(&form)?;
//! assert_eq!(request.uri().query(), Some("folder=inbox"));
//! # Ok::<(), formdata_client::ClientError>(())
//! ```

pub mod error;
pub mod headers;
pub mod request;
pub mod url;

pub use error::ClientError;
pub use headers::RequestHeaders;
pub use request::FormRequest;
pub use url::QueryUrl;

// Re-export the encoder for callers that only depend on this crate.
pub use formdata_core::{BinaryPayload, FormData, FormDataError, Payload};
