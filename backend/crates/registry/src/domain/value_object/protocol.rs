//! Protocol Value Object
//!
//! Closed set of transport/application protocols an endpoint can speak.
//! Stored by its lowercase code; shown to operators by its label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a stored protocol code
pub const PROTOCOL_MAX_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
    Ftp,
    Tcp,
    Udp,
}

impl Protocol {
    /// All protocols in declaration order (the order offered as choices).
    pub const ALL: [Protocol; 5] = [
        Protocol::Http,
        Protocol::Https,
        Protocol::Ftp,
        Protocol::Tcp,
        Protocol::Udp,
    ];

    #[inline]
    pub const fn code(&self) -> &'static str {
        use Protocol::*;
        match self {
            Http => "http",
            Https => "https",
            Ftp => "ftp",
            Tcp => "tcp",
            Udp => "udp",
        }
    }

    #[inline]
    pub const fn label(&self) -> &'static str {
        use Protocol::*;
        match self {
            Http => "HTTP",
            Https => "HTTPS",
            Ftp => "FTP",
            Tcp => "TCP",
            Udp => "UDP",
        }
    }

    /// Exact, case-sensitive lookup by stored code.
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
