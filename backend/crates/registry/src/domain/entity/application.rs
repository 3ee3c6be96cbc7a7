//! Application Entity
//!
//! A registered network endpoint: protocol + url + port.
//! The display address is derived on every read and never stored.

use std::fmt;

use crate::domain::services;
use crate::domain::validation::{Field, ValidationErrors};
use crate::domain::value_object::protocol::PROTOCOL_MAX_LENGTH;
use crate::domain::value_object::{ApplicationId, EndpointUrl, Port, PortInput, Protocol};

/// Unvalidated candidate for a create or full update.
///
/// Fields are kept in their raw form so every violation can be reported
/// against what the caller actually submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub protocol: String,
    pub url: String,
    pub port: PortInput,
}

impl ApplicationDraft {
    pub fn new(protocol: impl Into<String>, url: impl Into<String>, port: i64) -> Self {
        Self::with_port_input(protocol, url, PortInput::Integer(port))
    }

    /// Candidate whose port may be missing or not an integer.
    pub fn with_port_input(
        protocol: impl Into<String>,
        url: impl Into<String>,
        port: PortInput,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            url: url.into(),
            port,
        }
    }

    /// Run every field check (protocol, url, port) and report all failures.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.parse().map(|_| ())
    }

    /// Validate and convert into typed fields ready to be written.
    pub fn into_fields(self) -> Result<ApplicationFields, ValidationErrors> {
        self.parse()
    }

    /// Display address of the raw candidate, valid or not.
    pub fn full_address(&self) -> String {
        services::full_address(&self.protocol, &self.url, &self.port)
    }

    fn parse(&self) -> Result<ApplicationFields, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let protocol = check_protocol(&self.protocol, &mut errors);

        let url = EndpointUrl::new(self.url.as_str())
            .map_err(|e| errors.push(Field::Url, e.to_string()))
            .ok();

        let port = self
            .port
            .clone()
            .into_port()
            .map_err(|message| errors.push(Field::Port, message))
            .ok();

        match (protocol, url, port) {
            (Some(protocol), Some(url), Some(port)) if errors.is_empty() => {
                Ok(ApplicationFields {
                    protocol,
                    url,
                    port,
                })
            }
            _ => Err(errors),
        }
    }
}

fn check_protocol(raw: &str, errors: &mut ValidationErrors) -> Option<Protocol> {
    if raw.is_empty() {
        errors.push(Field::Protocol, "This field cannot be blank.");
        return None;
    }

    let length = raw.chars().count();
    if length > PROTOCOL_MAX_LENGTH {
        errors.push(
            Field::Protocol,
            format!(
                "Ensure this value has at most {PROTOCOL_MAX_LENGTH} characters (it has {length})."
            ),
        );
    }

    let protocol = Protocol::from_code(raw);
    if protocol.is_none() {
        errors.push(Field::Protocol, format!("Value '{raw}' is not a valid choice."));
    }
    protocol
}

/// Validated field values of an application, without identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationFields {
    pub protocol: Protocol,
    pub url: EndpointUrl,
    pub port: Port,
}

impl ApplicationFields {
    pub fn full_address(&self) -> String {
        services::full_address(self.protocol.code(), self.url.as_str(), self.port)
    }
}

/// Persisted application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    /// Assigned by the store on insert, immutable afterwards
    pub id: ApplicationId,
    pub protocol: Protocol,
    pub url: EndpointUrl,
    pub port: Port,
}

impl Application {
    pub fn new(id: ApplicationId, fields: ApplicationFields) -> Self {
        Self {
            id,
            protocol: fields.protocol,
            url: fields.url,
            port: fields.port,
        }
    }

    /// Replace every field; the id is kept.
    pub fn replace_fields(&mut self, fields: ApplicationFields) {
        self.protocol = fields.protocol;
        self.url = fields.url;
        self.port = fields.port;
    }

    pub fn full_address(&self) -> String {
        services::full_address(self.protocol.code(), self.url.as_str(), self.port)
    }

    /// Composite ordering key used by every listing.
    pub fn sort_key(&self) -> (&'static str, &str, u16) {
        (self.protocol.code(), self.url.as_str(), self.port.get())
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(protocol: &str, url: &str, port: i64) -> ApplicationDraft {
        ApplicationDraft::new(protocol, url, port)
    }

    #[test]
    fn test_valid_draft() {
        let fields = draft("https", "https://example.com", 443).into_fields().unwrap();
        assert_eq!(fields.protocol, Protocol::Https);
        assert_eq!(fields.url.as_str(), "https://example.com");
        assert_eq!(fields.port.get(), 443);
    }

    #[test]
    fn test_every_protocol_accepted() {
        for protocol in ["http", "https", "ftp", "tcp", "udp"] {
            assert!(draft(protocol, "https://example.com", 80).validate().is_ok());
        }
    }

    #[test]
    fn test_invalid_protocol_choice() {
        let errors = draft("invalid_protocol", "https://example.com", 80)
            .validate()
            .unwrap_err();
        assert_eq!(
            errors.messages(Field::Protocol),
            vec![
                "Ensure this value has at most 10 characters (it has 16).",
                "Value 'invalid_protocol' is not a valid choice.",
            ]
        );
        assert!(!errors.has(Field::Url));
        assert!(!errors.has(Field::Port));
    }

    #[test]
    fn test_protocol_max_length() {
        let errors = draft(&"a".repeat(11), "https://example.com", 80)
            .validate()
            .unwrap_err();
        assert!(errors.messages(Field::Protocol)[0].contains("at most 10 characters"));
    }

    #[test]
    fn test_blank_protocol() {
        let errors = draft("", "https://example.com", 80).validate().unwrap_err();
        assert_eq!(errors.messages(Field::Protocol), vec!["This field cannot be blank."]);
    }

    #[test]
    fn test_port_range() {
        for port in [1, 21, 22, 80, 443, 8080, 65534, 65535] {
            assert!(draft("http", "https://example.com", port).validate().is_ok());
        }
        for port in [0, -1, -100, 65536, 70000, 100000] {
            let errors = draft("http", "https://example.com", port)
                .validate()
                .unwrap_err();
            assert!(
                errors.to_string().contains("Port number must be between 1 and 65535"),
                "port {port}"
            );
        }
    }

    #[test]
    fn test_common_ports() {
        for port in [
            21, 22, 23, 25, 53, 80, 110, 143, 443, 993, 995, 3306, 5432, 6379, 8080, 8443, 9000,
        ] {
            assert!(draft("tcp", "https://service.com", port).validate().is_ok());
        }
    }

    #[test]
    fn test_invalid_urls() {
        for url in ["not_a_url", "ftp://", ""] {
            let errors = draft("http", url, 80).validate().unwrap_err();
            assert!(errors.has(Field::Url), "{url:?}");
        }
    }

    #[test]
    fn test_url_max_length() {
        let long_url = format!("https://{}.com", "a".repeat(250));
        let errors = draft("http", &long_url, 80).validate().unwrap_err();
        assert!(errors.messages(Field::Url)[0].contains("at most 255 characters"));
    }

    #[test]
    fn test_all_violations_reported_together() {
        let errors = draft("gopher", "not_a_url", 0).validate().unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Protocol, Field::Url, Field::Port]);
    }

    #[test]
    fn test_full_address_with_each_protocol() {
        let cases = [
            ("http", "http://localhost", 80, "http://http://localhost:80"),
            ("https", "https://secure.com", 443, "https://https://secure.com:443"),
            ("ftp", "ftp://files.com", 21, "ftp://ftp://files.com:21"),
            ("tcp", "tcp://service.com", 8080, "tcp://tcp://service.com:8080"),
            ("udp", "udp://stream.com", 9090, "udp://udp://stream.com:9090"),
        ];
        for (protocol, url, port, expected) in cases {
            assert_eq!(draft(protocol, url, port).full_address(), expected);
            let fields = draft(protocol, url, port).into_fields().unwrap();
            assert_eq!(fields.full_address(), expected);
        }
    }

    #[test]
    fn test_display_matches_full_address() {
        let fields = draft("https", "https://example.com", 443).into_fields().unwrap();
        let app = Application::new(ApplicationId::new(), fields);
        assert_eq!(app.to_string(), "https://https://example.com:443");
        assert_eq!(app.to_string(), app.full_address());
    }

    #[test]
    fn test_non_integer_port_collected_with_other_errors() {
        let draft = ApplicationDraft::with_port_input(
            "gopher",
            "not_a_url",
            PortInput::NotInteger("abc".to_string()),
        );
        let errors = draft.validate().unwrap_err();
        assert!(errors.has(Field::Protocol));
        assert!(errors.has(Field::Url));
        assert_eq!(
            errors.messages(Field::Port),
            vec!["\u{201c}abc\u{201d} value must be an integer."]
        );

        let missing =
            ApplicationDraft::with_port_input("http", "https://example.com", PortInput::Missing);
        assert_eq!(
            missing.validate().unwrap_err().messages(Field::Port),
            vec!["This field cannot be null."]
        );
    }

    #[test]
    fn test_replace_fields_keeps_id() {
        let fields = draft("http", "http://app1.com", 80).into_fields().unwrap();
        let mut app = Application::new(ApplicationId::new(), fields);
        let id = app.id;

        app.replace_fields(draft("udp", "udp://stream.com", 9090).into_fields().unwrap());
        assert_eq!(app.id, id);
        assert_eq!(app.full_address(), "udp://udp://stream.com:9090");
    }
}
