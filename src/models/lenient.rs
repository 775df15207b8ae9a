//! Forgiving field deserializers.
//!
//! Generated itineraries and browser form posts are loosely typed: costs show
//! up as `1200`, `1200.5` or `"1,200"`, ratings as `"4.5"`, lists as `null`.
//! These helpers accept all of those and fall back to `None`/empty rather than
//! rejecting the whole document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Integer from a number or numeric string. Fractions are truncated.
pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    // `as` saturates at the i64 bounds
    Ok(value.and_then(|value| value_to_f64(&value)).map(|n| n as i64))
}

pub fn float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|value| value_to_f64(&value)))
}

pub fn integer_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(integer(deserializer)?.unwrap_or(0))
}

pub fn float_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(float(deserializer)?.unwrap_or(0.0))
}

/// Any scalar rendered as text; objects and arrays are dropped.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// A list that may be missing or `null`.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => leading_number(s),
        _ => None,
    }
    .filter(|n: &f64| n.is_finite())
}

/// First number embedded in `text`, ignoring currency marks and thousands
/// separators: `"Rs. 1,200/night"` is 1200.
pub(crate) fn leading_number(text: &str) -> Option<f64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let negative = text[..start].trim() == "-";
    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .filter(|c| *c != ',')
        .collect();
    let number: f64 = digits.trim_end_matches('.').parse().ok()?;
    Some(if negative { -number } else { number })
}
