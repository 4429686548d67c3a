//! Byte-exact `multipart/form-data` encoding.
//!
//! This crate builds request bodies from named text and binary fields.
//! Text is packed into UTF-8 by a hand-written code-unit encoder, so scripts
//! outside Latin-1 (Cyrillic, CJK, emoji) come out correctly regardless of
//! how the text reached the encoder.
//!
//! ## Modules
//!
//! - [`multipart`]: The [`FormData`] encoder and body framing
//! - [`part`]: Field payloads and per-part headers
//! - [`utf8`]: UTF-16 code unit to UTF-8 byte encoding
//! - [`binary`]: Binary payloads and byte pass-through
//! - [`boundary`]: Boundary token sources
//! - [`options`]: Encoder configuration
//! - [`error`]: Error types
//!
//! ## Example
//!
//! ```
//! use formdata_core::{BinaryPayload, FormData};
//!
//! let mut form = FormData::new();
//! form.append("title", "Отчёт за квартал")?;
//! form.append(
//!     "report",
//!     BinaryPayload::new(b"%PDF-1.7".to_vec())
//!         .content_type("application/pdf")
//!         .filename("report.pdf"),
//! )?;
//!
//! let body = form.body()?;
//! let content_type = form.content_type();
//! assert!(content_type.ends_with(form.boundary()));
//! assert!(!body.is_empty());
//! # Ok::<(), formdata_core::FormDataError>(())
//! ```

pub mod binary;
pub mod boundary;
pub mod error;
pub mod multipart;
pub mod options;
pub mod part;
pub mod utf8;

pub use binary::BinaryPayload;
pub use boundary::{BoundarySource, FixedBoundary, RandomBoundary};
pub use error::FormDataError;
pub use multipart::FormData;
pub use options::{EncoderOptions, defaults};
pub use part::{Part, Payload, TextPayload};
pub use utf8::SurrogatePolicy;
