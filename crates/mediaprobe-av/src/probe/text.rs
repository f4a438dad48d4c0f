//! Lenient readers for mediainfo's text-valued JSON fields.
//!
//! Depending on the mediainfo version a value arrives as a string, a number,
//! or an array of alternative renderings. Everything is kept as opaque text.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a scalar JSON value as text. Objects, arrays and `null` have no
/// text form.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Deserialize an optional scalar field as text.
pub(crate) fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value))
}

/// Deserialize a field that is either a scalar or an array of scalars.
///
/// A scalar becomes a one-element list.
pub(crate) fn text_values<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = match Value::deserialize(deserializer)? {
        Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
        other => scalar_text(&other).into_iter().collect(),
    };
    Ok(values)
}
