pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;

pub use config::Config;
pub use domain::{
    coerce, AccountSnapshot, Address, NetworkNode, Numeric, Order, OrderBook, Position,
    PositionBatch, Protocol, Side, TimeMs, WalletState,
};
pub use engine::{analyze_portfolio, AnalyticsPolicy, PortfolioReport};
pub use error::AppError;
