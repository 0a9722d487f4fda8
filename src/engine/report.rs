//! Composes the individual calculators into one portfolio report.

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::{AccountKey, AccountSnapshot, Address};

use super::delta::{compute_delta, Delta};
use super::margin::{classify_margin, MarginRisk};
use super::orders::{aggregate_orders, AggregatedOrders};
use super::policy::AnalyticsPolicy;
use super::positions::{flatten_positions, PositionMetrics};
use super::protocol::{leverage_breaches, LeverageBreach};
use super::rollup::{rollup, PortfolioDeltas, PortfolioTotals};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub nid: String,
    pub address: Address,
    pub exchange: String,
    pub connection: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub equity: f64,
    pub unrealized_pnl: f64,
    pub margin: MarginRisk,
    /// Present only when the account also appears in the baseline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equity_delta: Option<Delta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unrealized_pnl_delta: Option<Delta>,
    pub position_count: usize,
    pub open_order_count: usize,
    pub unparsed_fields: Vec<&'static str>,
    pub leverage_breaches: Vec<LeverageBreach>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub totals: PortfolioTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_totals: Option<PortfolioTotals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deltas: Option<PortfolioDeltas>,
    pub accounts: Vec<AccountSummary>,
    pub positions: Vec<PositionMetrics>,
    pub orders: AggregatedOrders,
}

fn summarize(
    account: &AccountSnapshot,
    baseline: Option<&AccountSnapshot>,
    policy: &AnalyticsPolicy,
) -> AccountSummary {
    let wallet = account.wallet_state();
    let equity = wallet.total_equity.value();
    let unrealized_pnl = wallet.total_perp_upl.value();

    let margin = classify_margin(
        wallet.total_wallet_balance.value(),
        wallet.total_initial_margin.value(),
        wallet.total_maintenance_margin.value(),
        &policy.margin,
    );

    let previous = baseline.map(AccountSnapshot::wallet_state);
    let equity_delta = previous
        .as_ref()
        .map(|prev| compute_delta(equity, prev.total_equity.value()));
    let unrealized_pnl_delta = previous
        .as_ref()
        .map(|prev| compute_delta(unrealized_pnl, prev.total_perp_upl.value()));

    let breaches = match &account.protocol {
        Some(protocol) => leverage_breaches(
            account.positions.iter().flat_map(|b| b.positions().iter()),
            protocol,
        ),
        None => Vec::new(),
    };

    AccountSummary {
        nid: account.nid.clone(),
        address: account.address.clone(),
        exchange: account.exchange.clone(),
        connection: account.connection,
        note: account.note.clone(),
        equity,
        unrealized_pnl,
        margin,
        equity_delta,
        unrealized_pnl_delta,
        position_count: account.position_count(),
        open_order_count: account.open_order_count(),
        unparsed_fields: wallet.unparsed_fields(),
        leverage_breaches: breaches,
    }
}

/// Derive every portfolio metric from a current snapshot and an optional baseline.
///
/// Accounts are paired with their baseline by `(nid, exchange, address)`.
/// Neither input is modified.
pub fn analyze_portfolio(
    current: &[AccountSnapshot],
    baseline: Option<&[AccountSnapshot]>,
    policy: &AnalyticsPolicy,
) -> PortfolioReport {
    let mut baseline_by_key: HashMap<AccountKey, &AccountSnapshot> = HashMap::new();
    for account in baseline.unwrap_or_default() {
        baseline_by_key.entry(account.key()).or_insert(account);
    }

    let accounts: Vec<AccountSummary> = current
        .iter()
        .map(|account| summarize(account, baseline_by_key.get(&account.key()).copied(), policy))
        .collect();

    let unpaired = accounts
        .iter()
        .filter(|a| baseline.is_some() && a.equity_delta.is_none())
        .count();
    let unparsed = accounts
        .iter()
        .filter(|a| !a.unparsed_fields.is_empty())
        .count();
    tracing::debug!(
        accounts = accounts.len(),
        unpaired,
        unparsed,
        "portfolio analyzed"
    );

    let totals = rollup(current);
    let baseline_totals = baseline.map(rollup);
    let deltas = baseline_totals.as_ref().map(|b| totals.delta_against(b));

    let positions = flatten_positions(current.iter().flat_map(|a| a.positions.iter()));
    let orders = aggregate_orders(
        current
            .iter()
            .filter_map(|a| a.orders.as_ref())
            .flat_map(|book| book.batches()),
    );

    PortfolioReport {
        totals,
        baseline_totals,
        deltas,
        accounts,
        positions,
        orders,
    }
}
