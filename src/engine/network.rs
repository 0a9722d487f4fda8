use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::{clamp_finite, NetworkNode, TimeMs};

use super::policy::{ratio_pct, AnalyticsPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStatus {
    Critical,
    Stable,
    Good,
    Excellent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkHealth {
    pub total_nodes: usize,
    pub active_nodes: usize,
    /// Node count per country. Nodes without a country are not listed.
    pub regions: BTreeMap<String, usize>,
    pub avg_cpu_usage: f64,
    pub avg_memory_usage: f64,
    pub health_status: HealthStatus,
    pub last_update: TimeMs,
}

/// A node is live while its last update is younger than the liveness window.
pub fn is_node_active(node: &NetworkNode, now: TimeMs, window_ms: i64) -> bool {
    now.since(node.last_update) < window_ms
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        clamp_finite(values.iter().sum::<f64>() / values.len() as f64)
    }
}

pub fn analyze_network(
    nodes: &BTreeMap<String, NetworkNode>,
    now: TimeMs,
    policy: &AnalyticsPolicy,
) -> NetworkHealth {
    let mut regions = BTreeMap::new();
    let mut cpu = Vec::new();
    let mut memory = Vec::new();
    let mut active_nodes = 0;
    let mut last_update = TimeMs::default();

    for (id, node) in nodes {
        if is_node_active(node, now, policy.liveness_window_ms) {
            active_nodes += 1;
        }
        match node.country() {
            Some(country) => *regions.entry(country.to_string()).or_insert(0) += 1,
            None => tracing::debug!(node = %id, "node has no resolvable location"),
        }
        if let Some(avg) = node.avg_cpu().filter(|v| *v != 0.0) {
            cpu.push(avg);
        }
        if let Some(pct) = node.memory.as_ref().and_then(|m| m.usage_pct()) {
            memory.push(pct);
        }
        last_update = last_update.max(node.last_update);
    }

    let total_nodes = nodes.len();
    let active_ratio = ratio_pct(active_nodes as f64, total_nodes as f64);
    let health_status = match policy.health.tier(active_ratio) {
        0 => HealthStatus::Critical,
        1 => HealthStatus::Stable,
        2 => HealthStatus::Good,
        _ => HealthStatus::Excellent,
    };

    NetworkHealth {
        total_nodes,
        active_nodes,
        regions,
        avg_cpu_usage: mean(&cpu),
        avg_memory_usage: mean(&memory),
        health_status,
        last_update,
    }
}
