use serde::Serialize;

use crate::domain::{Order, OrderBatch};

/// Every order from every input map, split into three flat lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregatedOrders {
    pub open: Vec<Order>,
    pub closed: Vec<Order>,
    pub canceled: Vec<Order>,
}

impl AggregatedOrders {
    pub fn total(&self) -> usize {
        self.open.len() + self.closed.len() + self.canceled.len()
    }
}

/// Merge symbol buckets across batches, keeping source order. No de-duplication.
pub fn aggregate_orders<'a, I>(batches: I) -> AggregatedOrders
where
    I: IntoIterator<Item = &'a OrderBatch>,
{
    let mut merged = AggregatedOrders::default();
    for bucket in batches.into_iter().flat_map(OrderBatch::buckets) {
        merged.open.extend(bucket.open.iter().cloned());
        merged.closed.extend(bucket.closed.iter().cloned());
        merged.canceled.extend(bucket.canceled.iter().cloned());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderBucket;

    fn order(id: &str) -> Order {
        Order {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    fn ids(orders: &[Order]) -> Vec<&str> {
        orders.iter().filter_map(|o| o.id.as_deref()).collect()
    }

    #[test]
    fn test_merges_across_accounts_and_markets() {
        let spot = OrderBatch::new()
            .with_symbol(
                "BTC/USDT",
                OrderBucket {
                    open: vec![order("1"), order("2")],
                    closed: vec![order("3")],
                    canceled: vec![],
                },
            )
            .with_symbol(
                "ETH/USDT",
                OrderBucket {
                    open: vec![order("4")],
                    closed: vec![],
                    canceled: vec![order("5")],
                },
            );
        let futures = OrderBatch::new().with_symbol(
            "BTC/USDT:USDT",
            OrderBucket {
                open: vec![order("6")],
                closed: vec![order("7")],
                canceled: vec![order("8")],
            },
        );

        let merged = aggregate_orders([&spot, &futures]);
        assert_eq!(ids(&merged.open), vec!["1", "2", "4", "6"]);
        assert_eq!(ids(&merged.closed), vec!["3", "7"]);
        assert_eq!(ids(&merged.canceled), vec!["5", "8"]);
        assert_eq!(merged.total(), 8);
    }

    #[test]
    fn test_same_id_in_two_accounts_kept_twice() {
        let bucket = OrderBucket {
            open: vec![order("42")],
            ..Default::default()
        };
        let a = OrderBatch::new().with_symbol("BTC/USDT", bucket.clone());
        let b = OrderBatch::new().with_symbol("BTC/USDT", bucket);

        let merged = aggregate_orders([&a, &b]);
        assert_eq!(ids(&merged.open), vec!["42", "42"]);
    }

    #[test]
    fn test_no_batches() {
        let merged = aggregate_orders(std::iter::empty::<&OrderBatch>());
        assert_eq!(merged, AggregatedOrders::default());
    }
}
