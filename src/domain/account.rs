//! One exchange account as delivered by the wallet query.

use crate::domain::numeric::null_as_default;
use crate::domain::{Address, OrderBook, PositionBatch, Protocol, WalletEnvelope, WalletState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: Address,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exchange: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub connection: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub wallet: WalletEnvelope,
    #[serde(default, deserialize_with = "null_as_default")]
    pub positions: Vec<PositionBatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orders: Option<OrderBook>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
}

/// Identity used to pair an account with its own baseline snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountKey {
    pub nid: String,
    pub exchange: String,
    pub address: Address,
}

impl AccountSnapshot {
    pub fn key(&self) -> AccountKey {
        AccountKey {
            nid: self.nid.clone(),
            exchange: self.exchange.clone(),
            address: self.address.clone(),
        }
    }

    pub fn wallet_state(&self) -> WalletState {
        self.wallet.state()
    }

    pub fn position_count(&self) -> usize {
        self.positions.iter().map(PositionBatch::len).sum()
    }

    pub fn open_order_count(&self) -> usize {
        self.orders
            .iter()
            .flat_map(OrderBook::batches)
            .flat_map(|batch| batch.buckets())
            .map(|bucket| bucket.open.len())
            .sum()
    }
}
