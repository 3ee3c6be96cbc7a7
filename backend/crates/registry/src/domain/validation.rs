//! Field-scoped validation errors
//!
//! Every check produces a [`FieldError`]; checks never short-circuit across
//! fields, so one response can surface every problem with a candidate.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Protocol,
    Url,
    Port,
}

impl Field {
    pub const fn name(&self) -> &'static str {
        match self {
            Field::Protocol => "protocol",
            Field::Url => "url",
            Field::Port => "port",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors collected in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn has(&self, field: Field) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// Messages reported for one field, in check order.
    pub fn messages(&self, field: Field) -> Vec<&str> {
        self.0
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// `Ok(value)` when nothing was collected.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

/// Renders as `{"field": ["message", ...]}`, fields in declaration order.
impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut fields: Vec<Field> = self.0.iter().map(|e| e.field).collect();
        fields.sort();
        fields.dedup();

        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for field in fields {
            map.serialize_entry(field.name(), &self.messages(field))?;
        }
        map.end()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_in_order() {
        let mut errors = ValidationErrors::new();
        errors.push(Field::Url, "Enter a valid URL.");
        errors.push(Field::Protocol, "Value 'x' is not a valid choice.");
        errors.push(Field::Port, "Port number must be between 1 and 65535. Got: 0");

        assert_eq!(errors.len(), 3);
        assert!(errors.has(Field::Port));
        assert_eq!(
            errors.to_string(),
            "url: Enter a valid URL.; protocol: Value 'x' is not a valid choice.; \
             port: Port number must be between 1 and 65535. Got: 0"
        );
    }

    #[test]
    fn test_serializes_grouped_by_field() {
        let mut errors = ValidationErrors::new();
        errors.push(Field::Port, "bad port");
        errors.push(Field::Protocol, "too long");
        errors.push(Field::Protocol, "not a choice");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "protocol": ["too long", "not a choice"],
                "port": ["bad port"],
            })
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::new().into_result(|| 1), Ok(1));

        let mut errors = ValidationErrors::new();
        errors.push(Field::Url, "Enter a valid URL.");
        assert!(errors.into_result(|| 1).is_err());
    }
}
