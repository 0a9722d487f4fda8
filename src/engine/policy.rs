//! Classification thresholds.
//!
//! None of these boundaries come from a documented policy; they are the values
//! the dashboard has always shipped with. They are overridable through
//! [`crate::config::Config`] pending product-owner confirmation.

use crate::domain::clamp_finite;

/// Default margin-level boundaries (percent).
pub const MARGIN_CRITICAL_BELOW: f64 = 110.0;
pub const MARGIN_HIGH_BELOW: f64 = 150.0;
pub const MARGIN_MEDIUM_BELOW: f64 = 200.0;

/// Default efficiency boundaries (percent).
pub const EFFICIENCY_CRITICAL_BELOW: f64 = 50.0;
pub const EFFICIENCY_WARNING_BELOW: f64 = 70.0;
pub const EFFICIENCY_GOOD_BELOW: f64 = 90.0;

/// A node older than this is considered inactive.
pub const NODE_LIVENESS_WINDOW_MS: i64 = 300_000;

/// Default active-node ratio boundaries (percent).
pub const HEALTH_CRITICAL_BELOW: f64 = 10.0;
pub const HEALTH_STABLE_BELOW: f64 = 40.0;
pub const HEALTH_GOOD_BELOW: f64 = 95.0;

/// Three ascending cut points splitting a percentage into four tiers.
///
/// A value below `worst` lands in the worst tier, below `second` in the
/// second, below `third` in the third, otherwise in the best tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierBounds {
    pub worst: f64,
    pub second: f64,
    pub third: f64,
}

impl TierBounds {
    pub const fn new(worst: f64, second: f64, third: f64) -> Self {
        TierBounds {
            worst,
            second,
            third,
        }
    }

    /// True when all bounds are finite and strictly ascending.
    pub fn is_ascending(&self) -> bool {
        [self.worst, self.second, self.third]
            .iter()
            .all(|b| b.is_finite())
            && self.worst < self.second
            && self.second < self.third
    }

    /// Tier index: 0 is worst, 3 is best.
    pub fn tier(&self, value: f64) -> u8 {
        if value < self.worst {
            0
        } else if value < self.second {
            1
        } else if value < self.third {
            2
        } else {
            3
        }
    }
}

/// The complete set of thresholds the engine classifies against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticsPolicy {
    pub margin: TierBounds,
    pub efficiency: TierBounds,
    pub health: TierBounds,
    pub liveness_window_ms: i64,
}

impl Default for AnalyticsPolicy {
    fn default() -> Self {
        AnalyticsPolicy {
            margin: TierBounds::new(MARGIN_CRITICAL_BELOW, MARGIN_HIGH_BELOW, MARGIN_MEDIUM_BELOW),
            efficiency: TierBounds::new(
                EFFICIENCY_CRITICAL_BELOW,
                EFFICIENCY_WARNING_BELOW,
                EFFICIENCY_GOOD_BELOW,
            ),
            health: TierBounds::new(HEALTH_CRITICAL_BELOW, HEALTH_STABLE_BELOW, HEALTH_GOOD_BELOW),
            liveness_window_ms: NODE_LIVENESS_WINDOW_MS,
        }
    }
}

/// Guarded percentage: `numerator / denominator * 100`, or 0 when the denominator is 0.
/// Overflow saturates at `f64::MAX`.
pub fn ratio_pct(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        clamp_finite(numerator / denominator * 100.0)
    }
}
