//! Encoder configuration.

use crate::utf8::SurrogatePolicy;

/// Default encoder settings.
pub mod defaults {
    use crate::utf8::SurrogatePolicy;

    /// Fixed marker placed before the random boundary token.
    pub const BOUNDARY_PREFIX: &str = "------FormDataBoundary";

    /// Broken surrogate pairs are encoded, not rejected.
    pub const SURROGATES: SurrogatePolicy = SurrogatePolicy::Lenient;
}

/// Settings for a [`FormData`](crate::FormData) encoder.
///
/// # Example
///
/// ```
/// use formdata_core::{EncoderOptions, SurrogatePolicy};
///
/// let options = EncoderOptions::new()
///     .boundary_prefix("----upload")
///     .surrogates(SurrogatePolicy::Strict);
/// assert_eq!(options.boundary_prefix, "----upload");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Marker prepended to the generated token.
    pub boundary_prefix: String,

    /// Handling of UTF-16 text with unpaired surrogates.
    pub surrogates: SurrogatePolicy,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            boundary_prefix: defaults::BOUNDARY_PREFIX.to_owned(),
            surrogates: defaults::SURROGATES,
        }
    }
}

impl EncoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boundary_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.boundary_prefix = prefix.into();
        self
    }

    pub fn surrogates(mut self, policy: SurrogatePolicy) -> Self {
        self.surrogates = policy;
        self
    }

    /// Shorthand for `surrogates(SurrogatePolicy::Strict)`.
    pub fn strict(self) -> Self {
        self.surrogates(SurrogatePolicy::Strict)
    }
}
