//! Open positions as reported per account, grouped in timestamped batches.

use crate::domain::numeric::{lenient_timestamp, null_as_default};
use crate::domain::{Numeric, Side};
use serde::{Deserialize, Serialize};

/// A single open derivatives position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(default, deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(default)]
    pub side: Side,
    #[serde(default)]
    pub leverage: Numeric,
    #[serde(default)]
    pub entry_price: Numeric,
    #[serde(default)]
    pub mark_price: Numeric,
    #[serde(default)]
    pub notional: Numeric,
    #[serde(default)]
    pub contracts: Numeric,
    #[serde(default)]
    pub liquidation_price: Numeric,
    #[serde(default)]
    pub unrealized_pnl: Numeric,
}

/// One poll's worth of positions: `{ timestamp?, value: { raw: { positions } } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionBatch {
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: PositionBatchValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionBatchValue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub raw: RawPositions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPositions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub positions: Vec<Position>,
}

impl PositionBatch {
    pub fn new(positions: Vec<Position>) -> Self {
        PositionBatch {
            timestamp: None,
            value: PositionBatchValue {
                raw: RawPositions { positions },
            },
        }
    }

    pub fn positions(&self) -> &[Position] {
        &self.value.raw.positions
    }

    pub fn len(&self) -> usize {
        self.positions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_batch_deserializes_nested_payload() {
        let batch: PositionBatch = serde_json::from_value(json!({
            "timestamp": 1_700_000_000_000i64,
            "value": {"raw": {"positions": [
                {"symbol": "BTC/USDT:USDT", "side": "sell", "entryPrice": "100", "markPrice": 90,
                 "leverage": "10", "unrealizedPnl": "5"},
                {"symbol": "ETH/USDT:USDT", "entryPrice": "2000"}
            ]}}
        }))
        .unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.timestamp, Some(1_700_000_000_000));
        let btc = &batch.positions()[0];
        assert_eq!(btc.side, Side::Short);
        assert_eq!(btc.mark_price.value(), 90.0);
        assert_eq!(btc.leverage.value(), 10.0);
        let eth = &batch.positions()[1];
        assert_eq!(eth.side, Side::Long);
        assert!(!eth.mark_price.is_parsed());
    }

    #[test]
    fn test_batch_tolerates_string_timestamp_and_null_lists() {
        let batch: PositionBatch = serde_json::from_value(json!({
            "timestamp": "1700000000000.0",
            "value": {"raw": {"positions": null}}
        }))
        .unwrap();
        assert_eq!(batch.timestamp, Some(1_700_000_000_000));
        assert!(batch.is_empty());

        let batch: PositionBatch =
            serde_json::from_value(json!({"timestamp": "n/a", "value": null})).unwrap();
        assert_eq!(batch.timestamp, None);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_batch_without_value_is_empty() {
        let batch: PositionBatch = serde_json::from_value(json!({})).unwrap();
        assert!(batch.is_empty());
    }
}
