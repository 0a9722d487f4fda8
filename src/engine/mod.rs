//! Pure risk and performance calculations over account and node snapshots.
//!
//! Every function here is total and side-effect free: bad numeric input has
//! already been coerced by the domain layer, and zero divisors short-circuit
//! to 0.

pub mod delta;
pub mod efficiency;
pub mod margin;
pub mod network;
pub mod orders;
pub mod policy;
pub mod positions;
pub mod protocol;
pub mod report;
pub mod rollup;

pub use delta::{compute_delta, is_profit, Delta};
pub use efficiency::{score_efficiency, Efficiency, EfficiencyStatus, ResourceCounts};
pub use margin::{classify_margin, classify_margin_default, MarginRisk, RiskLevel};
pub use network::{analyze_network, is_node_active, HealthStatus, NetworkHealth};
pub use orders::{aggregate_orders, AggregatedOrders};
pub use policy::{AnalyticsPolicy, TierBounds};
pub use positions::{flatten_positions, position_roi, roi, PositionMetrics};
pub use protocol::{leverage_breaches, LeverageBreach};
pub use report::{analyze_portfolio, AccountSummary, PortfolioReport};
pub use rollup::{rollup, PortfolioDeltas, PortfolioTotals};
