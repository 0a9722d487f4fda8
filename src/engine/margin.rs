use serde::Serialize;

use super::policy::{ratio_pct, AnalyticsPolicy, TierBounds};

/// Liquidation risk tier, worst first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl RiskLevel {
    fn from_tier(tier: u8) -> Self {
        match tier {
            0 => RiskLevel::Critical,
            1 => RiskLevel::High,
            2 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginRisk {
    /// Initial margin as a percentage of balance.
    pub utilization_ratio: f64,
    /// Balance as a percentage of maintenance margin.
    pub margin_level: f64,
    pub risk_level: RiskLevel,
}

pub fn classify_margin(
    balance: f64,
    initial_margin: f64,
    maintenance_margin: f64,
    bounds: &TierBounds,
) -> MarginRisk {
    let margin_level = ratio_pct(balance, maintenance_margin);
    MarginRisk {
        utilization_ratio: ratio_pct(initial_margin, balance),
        margin_level,
        risk_level: RiskLevel::from_tier(bounds.tier(margin_level)),
    }
}

/// Classify with the default thresholds.
pub fn classify_margin_default(
    balance: f64,
    initial_margin: f64,
    maintenance_margin: f64,
) -> MarginRisk {
    classify_margin(
        balance,
        initial_margin,
        maintenance_margin,
        &AnalyticsPolicy::default().margin,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_at(margin_level: f64) -> RiskLevel {
        // maintenance margin of 100 makes balance == margin level
        classify_margin_default(margin_level, 0.0, 100.0).risk_level
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(level_at(109.999), RiskLevel::Critical);
        assert_eq!(level_at(110.0), RiskLevel::High);
        assert_eq!(level_at(149.999), RiskLevel::High);
        assert_eq!(level_at(150.0), RiskLevel::Medium);
        assert_eq!(level_at(199.999), RiskLevel::Medium);
        assert_eq!(level_at(200.0), RiskLevel::Low);
        assert_eq!(level_at(10_000.0), RiskLevel::Low);
    }

    #[test]
    fn test_ratios() {
        let risk = classify_margin_default(1000.0, 250.0, 400.0);
        assert_eq!(risk.utilization_ratio, 25.0);
        assert_eq!(risk.margin_level, 250.0);
        assert_eq!(risk.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_zero_divisors() {
        let risk = classify_margin_default(0.0, 50.0, 0.0);
        assert_eq!(risk.utilization_ratio, 0.0);
        assert_eq!(risk.margin_level, 0.0);
        // A zero margin level reads as the worst tier.
        assert_eq!(risk.risk_level, RiskLevel::Critical);
    }

    #[test]
    fn test_custom_bounds() {
        let bounds = TierBounds::new(120.0, 160.0, 250.0);
        let risk = classify_margin(115.0, 0.0, 100.0, &bounds);
        assert_eq!(risk.risk_level, RiskLevel::Critical);
        let risk = classify_margin(220.0, 0.0, 100.0, &bounds);
        assert_eq!(risk.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_risk_level_serialization() {
        let json = serde_json::to_string(&RiskLevel::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");
    }
}
