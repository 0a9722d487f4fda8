use serde::Serialize;

use crate::domain::clamp_finite;

use super::policy::ratio_pct;

/// Change of a scalar between a baseline and the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delta {
    pub absolute: f64,
    /// Percent change relative to the baseline; 0 when the baseline is 0.
    pub percentage: f64,
    /// True for gains and for no change.
    pub is_profit: bool,
}

pub fn compute_delta(current: f64, baseline: f64) -> Delta {
    let absolute = clamp_finite(current - baseline);
    Delta {
        absolute,
        percentage: ratio_pct(absolute, baseline),
        is_profit: is_profit(absolute),
    }
}

/// Profit flag against an implicit zero baseline.
pub fn is_profit(pnl: f64) -> bool {
    pnl >= 0.0
}
