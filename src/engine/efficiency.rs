use serde::{Deserialize, Serialize};

use super::policy::{ratio_pct, TierBounds};

/// Worker or node counts. `active + stopped` need not equal `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCounts {
    #[serde(default)]
    pub active: u64,
    #[serde(default)]
    pub stopped: u64,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EfficiencyStatus {
    Critical,
    Warning,
    Good,
    Optimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Efficiency {
    pub efficiency: f64,
    pub status: EfficiencyStatus,
}

pub fn score_efficiency(counts: ResourceCounts, bounds: &TierBounds) -> Efficiency {
    let efficiency = ratio_pct(counts.active as f64, counts.total as f64);
    let status = match bounds.tier(efficiency) {
        0 => EfficiencyStatus::Critical,
        1 => EfficiencyStatus::Warning,
        2 => EfficiencyStatus::Good,
        _ => EfficiencyStatus::Optimal,
    };
    Efficiency { efficiency, status }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AnalyticsPolicy;

    fn score(active: u64, total: u64) -> Efficiency {
        let counts = ResourceCounts {
            active,
            stopped: total.saturating_sub(active),
            total,
        };
        score_efficiency(counts, &AnalyticsPolicy::default().efficiency)
    }

    #[test]
    fn test_empty_counts_are_critical() {
        let bounds = AnalyticsPolicy::default().efficiency;
        let result = score_efficiency(ResourceCounts::default(), &bounds);
        assert_eq!(result.efficiency, 0.0);
        assert_eq!(result.status, EfficiencyStatus::Critical);
    }

    #[test]
    fn test_status_boundaries() {
        assert_eq!(score(49, 100).status, EfficiencyStatus::Critical);
        assert_eq!(score(50, 100).status, EfficiencyStatus::Warning);
        assert_eq!(score(69, 100).status, EfficiencyStatus::Warning);
        assert_eq!(score(70, 100).status, EfficiencyStatus::Good);
        assert_eq!(score(89, 100).status, EfficiencyStatus::Good);
        assert_eq!(score(90, 100).status, EfficiencyStatus::Optimal);
        assert_eq!(score(4, 4).status, EfficiencyStatus::Optimal);
    }

    #[test]
    fn test_stopped_does_not_affect_efficiency() {
        let counts = ResourceCounts {
            active: 3,
            stopped: 0,
            total: 4,
        };
        let result = score_efficiency(counts, &AnalyticsPolicy::default().efficiency);
        assert_eq!(result.efficiency, 75.0);
        assert_eq!(result.status, EfficiencyStatus::Good);
    }
}
