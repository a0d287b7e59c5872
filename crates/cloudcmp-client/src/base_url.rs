//! Backend origin handling

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use cloudcmp_core::prelude::*;

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Validated HTTP(S) origin of the catalog backend
///
/// Stored without a trailing slash so endpoint paths can be appended directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    raw: String,
}

impl BaseUrl {
    /// Parse and validate an origin such as `http://localhost:8000`
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let url = Url::parse(trimmed)
            .map_err(|e| Error::config_invalid(format!("invalid API URL '{trimmed}': {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config_invalid(format!(
                "API URL must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if url.host_str().is_none() {
            return Err(Error::config_invalid(format!(
                "API URL '{trimmed}' has no host"
            )));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(Error::config_invalid(format!(
                "API URL '{trimmed}' must not carry a query or fragment"
            )));
        }

        Ok(Self {
            raw: url.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Absolute URL for an endpoint path beginning with `/`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.raw, path)
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Percent-encode one path segment (`{id}`, `{category}`)
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}
