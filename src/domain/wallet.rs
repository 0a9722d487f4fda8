//! Unified-account wallet state as returned by the wallet query.

use crate::domain::numeric::null_as_default;
use crate::domain::Numeric;
use serde::{Deserialize, Serialize};

/// Per-asset balance line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinBalance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub coin: String,
    #[serde(default)]
    pub wallet_balance: Numeric,
    #[serde(default)]
    pub equity: Numeric,
    #[serde(default)]
    pub usd_value: Numeric,
    #[serde(default)]
    pub locked: Numeric,
    #[serde(default)]
    pub borrow_amount: Numeric,
    #[serde(default)]
    pub cum_realised_pnl: Numeric,
    #[serde(default)]
    pub unrealised_pnl: Numeric,
}

/// Account-level wallet totals. All fields are coerced on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletState {
    #[serde(default)]
    pub total_equity: Numeric,
    #[serde(default)]
    pub total_wallet_balance: Numeric,
    #[serde(default)]
    pub total_available_balance: Numeric,
    #[serde(default, rename = "totalPerpUPL")]
    pub total_perp_upl: Numeric,
    #[serde(default)]
    pub total_initial_margin: Numeric,
    #[serde(default)]
    pub total_maintenance_margin: Numeric,
    #[serde(default, rename = "accountLTV")]
    pub account_ltv: Numeric,
    #[serde(default, deserialize_with = "null_as_default")]
    pub coin: Vec<CoinBalance>,
}

impl WalletState {
    /// Names of the account-level fields that could not be coerced.
    pub fn unparsed_fields(&self) -> Vec<&'static str> {
        [
            ("totalEquity", self.total_equity),
            ("totalWalletBalance", self.total_wallet_balance),
            ("totalAvailableBalance", self.total_available_balance),
            ("totalPerpUPL", self.total_perp_upl),
            ("totalInitialMargin", self.total_initial_margin),
            ("totalMaintenanceMargin", self.total_maintenance_margin),
            ("accountLTV", self.account_ltv),
        ]
        .into_iter()
        .filter(|(_, n)| !n.is_parsed())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Envelope around the wallet query response: `info.result.list[]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub info: WalletInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: WalletResult,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: Vec<WalletState>,
}

impl WalletEnvelope {
    pub fn from_state(state: WalletState) -> Self {
        WalletEnvelope {
            info: WalletInfo {
                result: WalletResult { list: vec![state] },
            },
        }
    }

    /// The account's wallet state: the first list entry, or all-unparsed zeros.
    pub fn state(&self) -> WalletState {
        self.info.result.list.first().cloned().unwrap_or_default()
    }
}
