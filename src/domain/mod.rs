//! Snapshot data model for exchange accounts and runtime nodes.
//!
//! This module provides:
//! - Numeric coercion for string-or-number fields (`Numeric`, `coerce`)
//! - Domain primitives: TimeMs, Address, Side
//! - Account, wallet, position, order, protocol and node snapshot types,
//!   deserializable straight from the upstream payload

pub mod account;
pub mod node;
pub mod numeric;
pub mod order;
pub mod position;
pub mod primitives;
pub mod protocol;
pub mod wallet;

pub use account::{AccountKey, AccountSnapshot};
pub use node::{MemoryUsage, NetworkNode, NodeLocation};
pub use numeric::{clamp_finite, coerce, timestamp_ms, Numeric, RawNumeric};
pub use order::{Order, OrderBatch, OrderBook, OrderBucket};
pub use position::{Position, PositionBatch};
pub use primitives::{Address, Side, TimeMs};
pub use protocol::Protocol;
pub use wallet::{CoinBalance, WalletEnvelope, WalletState};
