//! Domain primitives: TimeMs, Address, Side.

use serde::{Deserialize, Deserializer, Serialize};

/// Time in milliseconds since Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TimeMs(pub i64);

impl TimeMs {
    /// Create a TimeMs from milliseconds.
    pub fn new(ms: i64) -> Self {
        TimeMs(ms)
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        TimeMs(chrono::Utc::now().timestamp_millis())
    }

    /// Get the underlying milliseconds value.
    pub fn as_ms(&self) -> i64 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self` (negative if `earlier` is in the future).
    pub fn since(&self, earlier: TimeMs) -> i64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl<'de> Deserialize<'de> for TimeMs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Stringly and fractional timestamps are common upstream; garbage reads as epoch.
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(TimeMs(crate::domain::timestamp_ms(&raw).unwrap_or(0)))
    }
}

/// Wallet address as reported by the upstream service. Not validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(pub String);

impl Address {
    pub fn new(addr: String) -> Self {
        Address(addr)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Long,
    Short,
}

impl Side {
    /// Map an exchange side string. Only "sell" (any case) is short.
    pub fn from_exchange(side: &str) -> Self {
        if side.trim().eq_ignore_ascii_case("sell") {
            Side::Short
        } else {
            Side::Long
        }
    }

    /// +1 for long, -1 for short.
    pub fn sign(&self) -> f64 {
        match self {
            Side::Long => 1.0,
            Side::Short => -1.0,
        }
    }
}

impl<'de> Deserialize<'de> for Side {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(serde_json::Value::String(s)) => Side::from_exchange(&s),
            _ => Side::Long,
        })
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Long => write!(f, "long"),
            Side::Short => write!(f, "short"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_from_exchange() {
        assert_eq!(Side::from_exchange("sell"), Side::Short);
        assert_eq!(Side::from_exchange("SELL"), Side::Short);
        assert_eq!(Side::from_exchange("Sell"), Side::Short);
        assert_eq!(Side::from_exchange("buy"), Side::Long);
        assert_eq!(Side::from_exchange("short"), Side::Long);
        assert_eq!(Side::from_exchange(""), Side::Long);
    }

    #[test]
    fn test_side_deserialize_tolerates_non_strings() {
        let side: Side = serde_json::from_str("\"Sell\"").unwrap();
        assert_eq!(side, Side::Short);
        let side: Side = serde_json::from_str("null").unwrap();
        assert_eq!(side, Side::Long);
        let side: Side = serde_json::from_str("7").unwrap();
        assert_eq!(side, Side::Long);
    }

    #[test]
    fn test_side_sign() {
        assert_eq!(Side::Long.sign(), 1.0);
        assert_eq!(Side::Short.sign(), -1.0);
    }

    #[test]
    fn test_timems_deserializes_loose_shapes() {
        let ts: TimeMs = serde_json::from_str("\"1700000000000\"").unwrap();
        assert_eq!(ts, TimeMs::new(1_700_000_000_000));
        let ts: TimeMs = serde_json::from_str("1700000000000.0").unwrap();
        assert_eq!(ts, TimeMs::new(1_700_000_000_000));
        let ts: TimeMs = serde_json::from_str("\"soon\"").unwrap();
        assert_eq!(ts, TimeMs::new(0));
        let ts: TimeMs = serde_json::from_str("null").unwrap();
        assert_eq!(ts, TimeMs::new(0));
    }

    #[test]
    fn test_timems_since() {
        let now = TimeMs::new(10_000);
        assert_eq!(now.since(TimeMs::new(4_000)), 6_000);
        assert_eq!(TimeMs::new(0).since(TimeMs::new(5)), -5);
    }
}
