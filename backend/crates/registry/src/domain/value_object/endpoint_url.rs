//! Endpoint URL Value Object
//!
//! The base URL an application is reachable at, stored exactly as submitted.
//!
//! ## Accepted form
//! - absolute URL with scheme `http`, `https`, `ftp`, `ftps`, `tcp` or `udp`
//! - host is `localhost`, an IP literal, or a dotted domain name
//! - domain labels: a-z, 0-9, `-` (not at either end), at most 63 chars
//! - top-level label: alphabetic (2+ chars) or an IDNA `xn--` label
//! - at most 255 characters, no whitespace

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use url::{Host, Url};

/// Maximum URL length (in characters)
pub const URL_MAX_LENGTH: usize = 255;

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps", "tcp", "udp"];

const LABEL_MAX_LENGTH: usize = 63;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointUrlError {
    #[error("This field cannot be blank.")]
    Blank,

    #[error("Ensure this value has at most {max} characters (it has {length}).")]
    TooLong { length: usize, max: usize },

    #[error("Enter a valid URL.")]
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EndpointUrl(String);

impl EndpointUrl {
    pub fn new(url: impl Into<String>) -> Result<Self, EndpointUrlError> {
        let url = url.into();

        if url.is_empty() {
            return Err(EndpointUrlError::Blank);
        }

        let length = url.chars().count();
        if length > URL_MAX_LENGTH {
            return Err(EndpointUrlError::TooLong {
                length,
                max: URL_MAX_LENGTH,
            });
        }

        if !Self::is_well_formed(&url) {
            return Err(EndpointUrlError::Invalid);
        }

        Ok(Self(url))
    }

    fn is_well_formed(raw: &str) -> bool {
        if raw.chars().any(char::is_whitespace) {
            return false;
        }

        let Ok(parsed) = Url::parse(raw) else {
            return false;
        };

        if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
            return false;
        }

        match parsed.host() {
            Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
            // Non-special schemes (tcp, udp) keep IPv4 literals as opaque domains.
            Some(Host::Domain(domain)) => {
                domain.parse::<Ipv4Addr>().is_ok() || is_valid_hostname(domain)
            }
            None => false,
        }
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_hostname(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    if domain.eq_ignore_ascii_case("localhost") {
        return true;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= LABEL_MAX_LENGTH
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    if !labels_ok {
        return false;
    }

    let tld = labels[labels.len() - 1];
    (tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
        || tld.to_ascii_lowercase().starts_with("xn--")
}

impl TryFrom<String> for EndpointUrl {
    type Error = EndpointUrlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EndpointUrl::new(value)
    }
}

impl From<EndpointUrl> for String {
    fn from(url: EndpointUrl) -> Self {
        url.0
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EndpointUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
