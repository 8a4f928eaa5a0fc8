//! clp-chain: chain-data reads for the position valuation engine.
//!
//! Binds the two read surfaces the engine consumes — the position
//! manager (pool key + packed info word, liquidity) and the state-view
//! lens (`getSlot0`) — over an alloy HTTP provider, and implements the
//! deliberately throttled multi-position fetcher.

pub mod bindings;
pub mod positions;
pub mod provider;
pub mod state;

pub use positions::{FetchPolicy, PositionReader};
pub use provider::{connect, HttpProvider};
pub use state::StateViewSource;
