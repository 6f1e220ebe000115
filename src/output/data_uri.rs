//! `data:` URI encoding of rendered SVG markup.
//!
//! The payload is percent-encoded so the URI survives being embedded in an
//! unquoted CSS `url(...)`: only ASCII alphanumerics and `- _ . ~` pass
//! through, everything else (quotes, parens, `#`, `%`, whitespace) is escaped.

use crate::error::{Error, Result};
use crate::output::SvgScene;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

/// Prefix of every encoded SVG data URI.
pub const SVG_DATA_PREFIX: &str = "data:image/svg+xml;utf8,";

/// Bytes escaped in the payload.
const PAYLOAD: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A self-contained `data:image/svg+xml` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri(String);

impl DataUri {
    /// Serialize a scene and encode it.
    ///
    /// # Errors
    ///
    /// Returns an encoding error if serialization fails.
    pub fn encode(scene: &SvgScene) -> Result<Self> {
        let markup = scene.render()?;
        Self::from_markup(&markup)
    }

    /// Encode already serialized markup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if the markup is not an SVG document.
    pub fn from_markup(markup: &str) -> Result<Self> {
        if !markup.trim_start().starts_with("<svg") {
            return Err(Error::Encoding("markup is not an <svg> document".to_string()));
        }

        let uri = format!("{SVG_DATA_PREFIX}{}", utf8_percent_encode(markup, PAYLOAD));
        log::trace!("encoded {} bytes of SVG into {} byte data URI", markup.len(), uri.len());
        Ok(Self(uri))
    }

    /// The encoded payload, without the `data:` prefix.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.0[SVG_DATA_PREFIX.len()..]
    }

    /// Decode the payload back to markup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if the payload is not valid UTF-8.
    pub fn decode_markup(&self) -> Result<String> {
        percent_decode_str(self.payload())
            .decode_utf8()
            .map(std::borrow::Cow::into_owned)
            .map_err(|e| Error::Encoding(format!("payload is not valid UTF-8: {e}")))
    }

    /// The full URI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DataUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
