//! Product image payloads.
//!
//! The backend serves item images either as an already usable reference (an
//! `http(s)` URL or an inline `data:` URL) or as a bare base64 payload with
//! no scheme, assumed to be JPEG. Rather than sniffing string prefixes at
//! every display site, the payload is classified once into a tagged value.

use core::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

/// MIME type assumed for bare base64 payloads.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Display reference used when an item carries no image payload.
pub const PLACEHOLDER_IMAGE_URL: &str = "/placeholder.jpg";

/// Errors that can occur when classifying an image payload.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageSourceError {
    /// The payload string is empty.
    #[error("image payload cannot be empty")]
    Empty,
    /// The payload has no scheme prefix and is not valid base64.
    #[error("invalid base64 image payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// A product image, either raw bytes or an external reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSource {
    /// Decoded image bytes with their MIME type.
    Raw {
        /// Image bytes.
        data: Vec<u8>,
        /// MIME type (e.g., `image/jpeg`).
        mime: String,
    },
    /// A URL or `data:` reference, used verbatim.
    Reference(String),
}

impl ImageSource {
    /// Classify an image payload string, assuming [`DEFAULT_IMAGE_MIME`] for
    /// bare base64 payloads.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is empty or is neither a recognised
    /// reference nor valid base64.
    pub fn parse(payload: &str) -> Result<Self, ImageSourceError> {
        Self::parse_with_mime(payload, DEFAULT_IMAGE_MIME)
    }

    /// Classify an image payload string with an explicit MIME type for bare
    /// base64 payloads.
    ///
    /// Payloads starting with `data:` or `http` are passed through unchanged
    /// as [`ImageSource::Reference`]; anything else must decode as base64.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is empty or not valid base64.
    pub fn parse_with_mime(payload: &str, mime: &str) -> Result<Self, ImageSourceError> {
        if payload.is_empty() {
            return Err(ImageSourceError::Empty);
        }

        if payload.starts_with("data:") || payload.starts_with("http") {
            return Ok(Self::Reference(payload.to_owned()));
        }

        let data = BASE64.decode(payload)?;
        Ok(Self::Raw {
            data,
            mime: mime.to_owned(),
        })
    }

    /// A reference usable as an image display source.
    ///
    /// Raw bytes are rendered as a `data:` URL; references are returned
    /// verbatim.
    #[must_use]
    pub fn display_url(&self) -> String {
        match self {
            Self::Raw { data, mime } => {
                format!("data:{mime};base64,{}", BASE64.encode(data))
            }
            Self::Reference(url) => url.clone(),
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_url())
    }
}
