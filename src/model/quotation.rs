//! The quotation value displayed by the app.

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur while parsing a response body into a [`Quotation`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// Body is not valid JSON
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Body parsed, but the top level is not an object
    #[error("response body is not a JSON object")]
    NotAnObject,

    /// Expected field is absent or not a string
    #[error("missing string field \"{field}\"")]
    MissingField { field: &'static str },
}

/// A single quotation. No identity beyond its field values; replaced
/// wholesale on every successful refresh, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quotation {
    pub person: String,
    pub quote: String,
}

impl Quotation {
    pub fn new(person: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            person: person.into(),
            quote: quote.into(),
        }
    }

    /// Initial value shown before the first successful fetch.
    pub fn placeholder() -> Self {
        Self::new("System", "Nothing to Show yet")
    }

    /// Parse a raw response body. The server is expected to return a JSON
    /// object with string fields `"Person"` and `"Quote"`; anything else is
    /// an error and leaves the caller's current value alone.
    pub fn from_json(body: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(body)?;
        let object = value.as_object().ok_or(ParseError::NotAnObject)?;
        Ok(Self {
            person: string_field(object, "Person")?,
            quote: string_field(object, "Quote")?,
        })
    }
}

fn string_field(object: &Map<String, Value>, field: &'static str) -> Result<String, ParseError> {
    object
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ParseError::MissingField { field })
}
