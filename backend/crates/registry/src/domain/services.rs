//! Domain Services
//!
//! Pure formatting logic for registered endpoints.

use std::fmt::Display;

/// Join protocol, url and port into the display address.
///
/// The url is used verbatim: a url that already carries a scheme keeps it,
/// so `("https", "https://example.com", 443)` yields
/// `"https://https://example.com:443"`.
pub fn full_address(protocol: &str, url: &str, port: impl Display) -> String {
    format!("{protocol}://{url}:{port}")
}
