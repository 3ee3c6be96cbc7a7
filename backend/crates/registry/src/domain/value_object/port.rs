use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// TCP/UDP port number in `1..=65535`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct Port(u16);

impl Port {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 65535;

    /// Accepts any integer so out-of-range input (negative, > 65535) can be
    /// reported with the value the caller actually sent.
    pub fn new(value: i64) -> Result<Self, PortRangeError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value as u16))
        } else {
            Err(PortRangeError(value))
        }
    }

    #[inline]
    pub const fn get(&self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for Port {
    type Error = PortRangeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Port::new(value)
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Port number must be between 1 and 65535. Got: {0}")]
pub struct PortRangeError(pub i64);

/// Port as submitted, before it is known to be an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortInput {
    Integer(i64),
    /// Not coercible to an integer; holds the submitted text
    NotInteger(String),
    Missing,
}

impl PortInput {
    /// Coerce a JSON value the way an integer form field does.
    ///
    /// Integral strings (`"80"`, `" 80 "`) and finite floats (truncated toward
    /// zero) become integers. `null` or an absent value is `Missing`.
    pub fn from_json(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) => PortInput::Missing,
            Some(Value::Number(n)) => {
                if let Some(v) = n.as_i64() {
                    PortInput::Integer(v)
                } else if n.as_u64().is_some() {
                    PortInput::Integer(i64::MAX)
                } else {
                    match n.as_f64() {
                        Some(f) if f.is_finite() => PortInput::Integer(f.trunc() as i64),
                        _ => PortInput::NotInteger(n.to_string()),
                    }
                }
            }
            Some(Value::Bool(b)) => PortInput::Integer(i64::from(b)),
            Some(Value::String(s)) => match s.trim().parse::<i64>() {
                Ok(v) => PortInput::Integer(v),
                Err(_) => PortInput::NotInteger(s),
            },
            Some(other) => PortInput::NotInteger(other.to_string()),
        }
    }

    /// Validate into a `Port`, yielding the field message on failure.
    pub fn into_port(self) -> Result<Port, String> {
        match self {
            PortInput::Integer(v) => Port::new(v).map_err(|e| e.to_string()),
            PortInput::NotInteger(raw) => {
                Err(format!("\u{201c}{raw}\u{201d} value must be an integer."))
            }
            PortInput::Missing => Err("This field cannot be null.".to_string()),
        }
    }
}

impl From<i64> for PortInput {
    fn from(value: i64) -> Self {
        PortInput::Integer(value)
    }
}

impl fmt::Display for PortInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortInput::Integer(v) => write!(f, "{v}"),
            PortInput::NotInteger(raw) => f.write_str(raw),
            PortInput::Missing => f.write_str("None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_bounds() {
        assert_eq!(Port::new(1).unwrap().get(), 1);
        assert_eq!(Port::new(65535).unwrap().get(), 65535);
        assert!(Port::new(0).is_err());
        assert!(Port::new(65536).is_err());
    }

    #[test]
    fn test_port_full_range() {
        for value in Port::MIN..=Port::MAX {
            assert!(Port::new(value).is_ok(), "port {value} should be valid");
        }
    }

    #[test]
    fn test_port_error_message() {
        for value in [0, -1, -100, 65536, 70000, 100000] {
            let err = Port::new(value).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("Port number must be between 1 and 65535. Got: {value}")
            );
        }
    }

    #[test]
    fn test_port_input_coercion() {
        use serde_json::json;

        assert_eq!(PortInput::from_json(Some(json!(80))), PortInput::Integer(80));
        assert_eq!(PortInput::from_json(Some(json!("80"))), PortInput::Integer(80));
        assert_eq!(PortInput::from_json(Some(json!(" 443 "))), PortInput::Integer(443));
        assert_eq!(PortInput::from_json(Some(json!(80.5))), PortInput::Integer(80));
        assert_eq!(PortInput::from_json(Some(json!(-3))), PortInput::Integer(-3));
        assert_eq!(
            PortInput::from_json(Some(json!("abc"))),
            PortInput::NotInteger("abc".to_string())
        );
        assert_eq!(
            PortInput::from_json(Some(json!("80.5"))),
            PortInput::NotInteger("80.5".to_string())
        );
        assert_eq!(PortInput::from_json(Some(json!(null))), PortInput::Missing);
        assert_eq!(PortInput::from_json(None), PortInput::Missing);
    }

    #[test]
    fn test_port_input_messages() {
        assert_eq!(PortInput::Integer(8080).into_port().unwrap().get(), 8080);
        assert_eq!(
            PortInput::NotInteger("abc".to_string()).into_port().unwrap_err(),
            "\u{201c}abc\u{201d} value must be an integer."
        );
        assert_eq!(
            PortInput::Missing.into_port().unwrap_err(),
            "This field cannot be null."
        );
        assert_eq!(
            PortInput::Integer(0).into_port().unwrap_err(),
            "Port number must be between 1 and 65535. Got: 0"
        );
    }

    #[test]
    fn test_port_serde() {
        let port: Port = serde_json::from_str("8080").unwrap();
        assert_eq!(port.get(), 8080);
        assert_eq!(serde_json::to_string(&port).unwrap(), "8080");
        assert!(serde_json::from_str::<Port>("0").is_err());
    }
}
