//! Telemetry snapshot of one distributed runtime node.

use crate::domain::numeric::{clamp_finite, null_as_default};
use crate::domain::{Numeric, TimeMs};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeLocation {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    #[serde(default)]
    pub heap_used: Numeric,
    #[serde(default)]
    pub heap_total: Numeric,
}

impl MemoryUsage {
    /// Heap usage percentage, or None when the total is missing or zero.
    pub fn usage_pct(&self) -> Option<f64> {
        let total = self.heap_total.value();
        if !self.heap_total.is_parsed() || total == 0.0 {
            return None;
        }
        Some(clamp_finite(self.heap_used.value() / total * 100.0))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkNode {
    #[serde(default)]
    pub last_update: TimeMs,
    #[serde(default)]
    pub location: Option<NodeLocation>,
    /// CPU load samples, one per core or per sampling tick.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cpu: Vec<Numeric>,
    #[serde(default)]
    pub memory: Option<MemoryUsage>,
}

impl NetworkNode {
    /// Country name, if one was reported and is non-blank.
    pub fn country(&self) -> Option<&str> {
        self.location
            .as_ref()
            .and_then(|l| l.country.as_deref())
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Mean of the node's own CPU samples; None if it reported none.
    pub fn avg_cpu(&self) -> Option<f64> {
        let samples: Vec<f64> = self
            .cpu
            .iter()
            .filter(|s| s.is_parsed())
            .map(|s| s.value())
            .collect();
        if samples.is_empty() {
            return None;
        }
        Some(clamp_finite(samples.iter().sum::<f64>() / samples.len() as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_deserializes_telemetry() {
        let node: NetworkNode = serde_json::from_value(json!({
            "lastUpdate": 1_000,
            "location": {"country": "Germany", "city": "Frankfurt"},
            "cpu": [10, "30", "bad"],
            "memory": {"heapUsed": 50, "heapTotal": "200"}
        }))
        .unwrap();

        assert_eq!(node.last_update, TimeMs::new(1_000));
        assert_eq!(node.country(), Some("Germany"));
        assert_eq!(node.avg_cpu(), Some(20.0));
        assert_eq!(node.memory.unwrap().usage_pct(), Some(25.0));
    }

    #[test]
    fn test_blank_country_is_unresolved() {
        let node: NetworkNode =
            serde_json::from_value(json!({"location": {"country": "  "}})).unwrap();
        assert_eq!(node.country(), None);
        assert_eq!(node.avg_cpu(), None);
    }

    #[test]
    fn test_node_tolerates_loose_timestamps_and_null_cpu() {
        let node: NetworkNode = serde_json::from_value(json!({
            "lastUpdate": "1700000000000",
            "cpu": null
        }))
        .unwrap();
        assert_eq!(node.last_update, TimeMs::new(1_700_000_000_000));
        assert_eq!(node.avg_cpu(), None);

        let node: NetworkNode =
            serde_json::from_value(json!({"lastUpdate": 1700000000000.0})).unwrap();
        assert_eq!(node.last_update, TimeMs::new(1_700_000_000_000));
    }

    #[test]
    fn test_huge_cpu_samples_stay_finite() {
        let node: NetworkNode = serde_json::from_value(json!({"cpu": [1e308, 1e308]})).unwrap();
        assert_eq!(node.avg_cpu(), Some(f64::MAX));

        let memory = MemoryUsage {
            heap_used: Numeric::new(1e308),
            heap_total: Numeric::new(1e-10),
        };
        assert_eq!(memory.usage_pct(), Some(f64::MAX));
    }

    #[test]
    fn test_zero_heap_total_has_no_usage() {
        let memory = MemoryUsage {
            heap_used: Numeric::new(10.0),
            heap_total: Numeric::new(0.0),
        };
        assert_eq!(memory.usage_pct(), None);
    }
}
