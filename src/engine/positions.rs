use serde::Serialize;

use crate::domain::{clamp_finite, Position, PositionBatch, Side};

use super::delta::is_profit;

/// A flattened position with its derived return figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionMetrics {
    #[serde(flatten)]
    pub position: Position,
    /// Return on entry in percent, sign-adjusted for shorts.
    pub roi: f64,
    /// Whether the unrealized PnL is non-negative.
    pub is_profit: bool,
}

/// ROI of a move from `entry_price` to `mark_price`.
///
/// A zero entry price yields 0 instead of dividing by zero.
pub fn roi(entry_price: f64, mark_price: f64, side: Side) -> f64 {
    if entry_price == 0.0 {
        return 0.0;
    }
    clamp_finite((mark_price - entry_price) / entry_price * 100.0 * side.sign())
}

pub fn position_roi(position: &Position) -> f64 {
    roi(
        position.entry_price.value(),
        position.mark_price.value(),
        position.side,
    )
}

/// Concatenate batches in order, attaching ROI and P/L flag to each position.
pub fn flatten_positions<'a, I>(batches: I) -> Vec<PositionMetrics>
where
    I: IntoIterator<Item = &'a PositionBatch>,
{
    batches
        .into_iter()
        .flat_map(|batch| batch.positions().iter())
        .map(|position| PositionMetrics {
            roi: position_roi(position),
            is_profit: is_profit(position.unrealized_pnl.value()),
            position: position.clone(),
        })
        .collect()
}
