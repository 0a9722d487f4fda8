//! Order books keyed by symbol, split into open / closed / canceled lists.

use crate::domain::numeric::{lenient_id, lenient_timestamp, null_as_default};
use crate::domain::Numeric;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single exchange order. Status transitions are owned by the exchange.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default, rename = "type")]
    pub order_type: Option<String>,
    #[serde(default)]
    pub price: Numeric,
    #[serde(default)]
    pub amount: Numeric,
    #[serde(default)]
    pub filled: Numeric,
    #[serde(default)]
    pub remaining: Numeric,
    #[serde(default)]
    pub cost: Numeric,
    #[serde(default)]
    pub fee: Numeric,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<i64>,
}

/// The three disjoint order lists for one symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderBucket {
    #[serde(default, deserialize_with = "null_as_default")]
    pub open: Vec<Order>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub closed: Vec<Order>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub canceled: Vec<Order>,
}

/// One `{ [symbol]: OrderBucket }` map. Symbol order follows the payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBatch {
    entries: Vec<(String, OrderBucket)>,
}

impl OrderBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>, bucket: OrderBucket) -> Self {
        self.entries.push((symbol.into(), bucket));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OrderBucket)> {
        self.entries.iter().map(|(s, b)| (s.as_str(), b))
    }

    pub fn buckets(&self) -> impl Iterator<Item = &OrderBucket> {
        self.entries.iter().map(|(_, b)| b)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for OrderBatch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderBatchVisitor;

        impl<'de> Visitor<'de> for OrderBatchVisitor {
            type Value = OrderBatch;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of symbol to order bucket")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((symbol, bucket)) =
                    map.next_entry::<String, Option<OrderBucket>>()?
                {
                    entries.push((symbol, bucket.unwrap_or_default()));
                }
                Ok(OrderBatch { entries })
            }
        }

        deserializer.deserialize_map(OrderBatchVisitor)
    }
}

impl Serialize for OrderBatch {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (symbol, bucket) in &self.entries {
            map.serialize_entry(symbol, bucket)?;
        }
        map.end()
    }
}

/// An account's order books, split by market.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    #[serde(default, deserialize_with = "null_as_default")]
    pub spot: Vec<OrderBatch>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub futures: Vec<OrderBatch>,
}

impl OrderBook {
    /// Spot batches first, then futures.
    pub fn batches(&self) -> impl Iterator<Item = &OrderBatch> {
        self.spot.iter().chain(self.futures.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_batch_from_str_keeps_source_order() {
        let raw = r#"{"SOL/USDT": {}, "BTC/USDT": {}, "ETH/USDT": {}}"#;
        let batch: OrderBatch = serde_json::from_str(raw).unwrap();
        let symbols: Vec<&str> = batch.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec!["SOL/USDT", "BTC/USDT", "ETH/USDT"]);
    }

    #[test]
    fn test_order_tolerates_loose_timestamp_and_id() {
        let order: Order = serde_json::from_value(json!({
            "id": 12345,
            "price": "20",
            "timestamp": "1700000000000"
        }))
        .unwrap();
        assert_eq!(order.id.as_deref(), Some("12345"));
        assert_eq!(order.timestamp, Some(1_700_000_000_000));

        let order: Order = serde_json::from_value(json!({"timestamp": "later"})).unwrap();
        assert_eq!(order.timestamp, None);
    }

    #[test]
    fn test_null_buckets_and_lists_read_as_empty() {
        let book: OrderBook = serde_json::from_str(
            r#"{"spot": [{"BTC/USDT": null, "ETH/USDT": {"open": null, "closed": [{}]}}],
                "futures": null}"#,
        )
        .unwrap();
        let batch = &book.spot[0];
        let symbols: Vec<&str> = batch.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec!["BTC/USDT", "ETH/USDT"]);
        let (_, eth) = batch.iter().nth(1).unwrap();
        assert!(eth.open.is_empty());
        assert_eq!(eth.closed.len(), 1);
        assert!(book.futures.is_empty());
    }

    #[test]
    fn test_order_book_batches_spot_then_futures() {
        let book: OrderBook = serde_json::from_value(json!({
            "spot": [{"A": {}}],
            "futures": [{"B": {}}, {"C": {}}]
        }))
        .unwrap();
        assert_eq!(book.batches().count(), 3);
    }
}
