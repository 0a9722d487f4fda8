use serde::Serialize;

use crate::domain::{clamp_finite, AccountSnapshot};

use super::delta::{compute_delta, Delta};

/// Multi-account totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotals {
    pub total_equity: f64,
    pub total_wallet_balance: f64,
    pub total_available_balance: f64,
    #[serde(rename = "totalPerpUPL")]
    pub total_perp_upl: f64,
    pub total_positions: usize,
    pub total_open_orders: usize,
}

/// Deltas of the monetary totals against a baseline rollup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDeltas {
    pub equity: Delta,
    pub wallet_balance: Delta,
    pub available_balance: Delta,
    pub unrealized_pnl: Delta,
}

impl PortfolioTotals {
    pub fn delta_against(&self, baseline: &PortfolioTotals) -> PortfolioDeltas {
        PortfolioDeltas {
            equity: compute_delta(self.total_equity, baseline.total_equity),
            wallet_balance: compute_delta(self.total_wallet_balance, baseline.total_wallet_balance),
            available_balance: compute_delta(
                self.total_available_balance,
                baseline.total_available_balance,
            ),
            unrealized_pnl: compute_delta(self.total_perp_upl, baseline.total_perp_upl),
        }
    }
}

pub fn rollup(accounts: &[AccountSnapshot]) -> PortfolioTotals {
    accounts
        .iter()
        .fold(PortfolioTotals::default(), |mut totals, account| {
            let wallet = account.wallet_state();
            totals.total_equity = clamp_finite(totals.total_equity + wallet.total_equity.value());
            totals.total_wallet_balance =
                clamp_finite(totals.total_wallet_balance + wallet.total_wallet_balance.value());
            totals.total_available_balance = clamp_finite(
                totals.total_available_balance + wallet.total_available_balance.value(),
            );
            totals.total_perp_upl =
                clamp_finite(totals.total_perp_upl + wallet.total_perp_upl.value());
            totals.total_positions += account.position_count();
            totals.total_open_orders += account.open_order_count();
            totals
        })
}
