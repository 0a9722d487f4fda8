//! Numeric coercion for loosely-typed exchange fields.
//!
//! Upstream payloads carry financial values as decimal strings, plain JSON
//! numbers, `null`, or not at all. Everything passes through [`coerce`] (or
//! [`Numeric`] during deserialization) before any arithmetic happens, so the
//! engine only ever sees finite `f64` values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A raw numeric input: either already a number or a decimal string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawNumeric<'a> {
    Number(f64),
    Text(&'a str),
}

impl From<f64> for RawNumeric<'_> {
    fn from(value: f64) -> Self {
        RawNumeric::Number(value)
    }
}

impl<'a> From<&'a str> for RawNumeric<'a> {
    fn from(value: &'a str) -> Self {
        RawNumeric::Text(value)
    }
}

/// Coerce a string-or-number into a finite float.
///
/// Unparsable text, `NaN` and infinities all become `0.0`. Never panics.
pub fn coerce<'a>(raw: impl Into<RawNumeric<'a>>) -> f64 {
    try_coerce(raw.into()).unwrap_or(0.0)
}

fn try_coerce(raw: RawNumeric<'_>) -> Option<f64> {
    let value = match raw {
        RawNumeric::Number(n) => n,
        RawNumeric::Text(s) => s.trim().parse::<f64>().ok()?,
    };
    value.is_finite().then_some(value)
}

/// A coerced numeric field that remembers whether the source was usable.
///
/// `value` is always finite. `parsed == false` means the field was missing,
/// `null`, non-numeric or non-finite and `value` was substituted with `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Numeric {
    value: f64,
    parsed: bool,
}

impl Numeric {
    /// A successfully parsed value. Non-finite input is demoted to unparsed.
    pub fn new(value: f64) -> Self {
        Self::from_raw(RawNumeric::Number(value))
    }

    /// The substitute used for missing or malformed input.
    pub fn unparsed() -> Self {
        Numeric {
            value: 0.0,
            parsed: false,
        }
    }

    pub fn from_raw(raw: RawNumeric<'_>) -> Self {
        match try_coerce(raw) {
            Some(value) => Numeric {
                value,
                parsed: true,
            },
            None => Self::unparsed(),
        }
    }

    /// Coerce an arbitrary JSON value. Objects, arrays and booleans are unparsed.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => n.as_f64().map(Self::new).unwrap_or_default(),
            serde_json::Value::String(s) => Self::from_raw(RawNumeric::Text(s)),
            _ => Self::unparsed(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::new(value)
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Numeric::from_raw(RawNumeric::Text(value))
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<'de> Deserialize<'de> for Numeric {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Any JSON shape is accepted; bad leaves coerce instead of failing the payload.
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(Numeric::from_json(&raw))
    }
}

/// Pin an arithmetic result to the finite range. Overflow saturates at
/// `f64::MAX`, NaN becomes `0.0`.
pub fn clamp_finite(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}

/// Epoch milliseconds from a string-or-number, truncated toward zero.
pub fn timestamp_ms(value: &serde_json::Value) -> Option<i64> {
    let numeric = Numeric::from_json(value);
    numeric.is_parsed().then(|| numeric.value().trunc() as i64)
}

/// `deserialize_with` for optional timestamps: unparsable input is `None`.
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(timestamp_ms(&raw))
}

/// `deserialize_with` that treats an explicit `null` like a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `deserialize_with` for identifiers that arrive as strings or numbers.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

impl Serialize for Numeric {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.value)
    }
}
