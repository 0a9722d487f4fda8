//! Static risk-policy record attached to an account. Read-only.

use crate::domain::numeric::null_as_default;
use crate::domain::Numeric;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protocol {
    #[serde(default)]
    pub max_risk_per_trade: Numeric,
    #[serde(default)]
    pub max_leverage: Numeric,
    #[serde(default)]
    pub max_drawdown: Numeric,
    #[serde(default)]
    pub stop_loss_percentage: Numeric,
    #[serde(default)]
    pub take_profit_percentage: Numeric,
    #[serde(default)]
    pub risk_reward_ratio: Numeric,
    #[serde(default, deserialize_with = "null_as_default")]
    pub markets: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_types: Vec<String>,
}
