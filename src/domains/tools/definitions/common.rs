//! Common utilities shared across tool definitions.
//!
//! This module provides argument coercion helpers and response formatting.

use std::borrow::Cow;

use rmcp::model::{CallToolResult, Content};
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, de};
use serde_json::{Number, Value};
use tracing::warn;

// Argument type of the parameterless tools; unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoParams {}

// Hand-written so the schema carries an explicit empty `properties` and no
// description.
impl JsonSchema for NoParams {
    fn schema_name() -> Cow<'static, str> {
        "NoParams".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "object",
            "properties": {}
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(Number),
    Text(String),
}

/// Parse a numeric string into a JSON number.
///
/// Integers stay integers so that `"30"` and `30` produce the same value.
pub fn parse_number(raw: &str) -> Option<Number> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<u64>() {
        return Some(n.into());
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Some(n.into());
    }
    raw.parse::<f64>().ok().and_then(Number::from_f64)
}

fn coerce<E: de::Error>(value: NumberOrString) -> Result<Number, E> {
    match value {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => {
            parse_number(&s).ok_or_else(|| E::custom(format!("expected a number, got \"{}\"", s)))
        }
    }
}

/// Deserialize a required number given as a JSON number or a numeric string.
pub fn number_or_string<'de, D>(deserializer: D) -> Result<Number, D::Error>
where
    D: Deserializer<'de>,
{
    coerce(NumberOrString::deserialize(deserializer)?)
}

/// Deserialize an optional number. `null` and `""` count as absent.
pub fn optional_number_or_string<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => coerce(value).map(Some),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(Number),
    Bool(bool),
}

/// Deserialize an optional string parameter.
///
/// Numbers and booleans are accepted in their text form (`2024` becomes
/// `"2024"`). `null` and `""` count as absent.
pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<Scalar>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(Scalar::Text(s)) => s,
        Some(Scalar::Number(n)) => n.to_string(),
        Some(Scalar::Bool(b)) => b.to_string(),
    };
    Ok(Some(text).filter(|s| !s.is_empty()))
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Render an upstream JSON value as a pretty-printed text result.
pub fn json_result(value: &Value) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => success_result(text),
        Err(e) => error_result(&format!("Error: {}", e)),
    }
}
