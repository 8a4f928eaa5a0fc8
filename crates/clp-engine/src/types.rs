//! Position and pool data model for the valuation engine.

use alloy::primitives::U256;
use clp_math::{PoolKey, RangeStatus};

/// Immutable snapshot of a pool's price state.
///
/// Read fresh from the chain and held constant for the duration of one
/// enrichment pass; `tick` is trusted to be consistent with
/// `sqrt_price_x96` at read time and is not re-derived here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSnapshot {
    /// Current √price in Q64.96 (uint160 on-chain).
    pub sqrt_price_x96: U256,
    /// Current tick.
    pub tick: i32,
}

/// A position as decoded from the chain, before valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionDescriptor {
    /// Position token id.
    pub token_id: U256,
    /// Lower tick bound; always below `tick_upper` for decoded positions.
    pub tick_lower: i32,
    /// Upper tick bound.
    pub tick_upper: i32,
    /// Position liquidity (uint128 on-chain).
    pub liquidity: u128,
    /// Identity of the pool the position sits in.
    pub pool_key: PoolKey,
}

/// USD pricing inputs supplied by the caller.
///
/// The engine has no opinion on where prices come from. Valuation runs
/// only when both sides are present; otherwise it is omitted entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsdQuote {
    /// USD price of one whole unit of currency0.
    pub usd0: Option<f64>,
    /// USD price of one whole unit of currency1.
    pub usd1: Option<f64>,
    /// Decimals of currency0, for scaling raw amounts.
    pub decimals0: u8,
    /// Decimals of currency1.
    pub decimals1: u8,
}

/// A descriptor enriched with current amounts, range status and value.
///
/// Derived and ephemeral — recomputed on every valuation pass, never
/// persisted by this engine.
#[derive(Debug, Clone)]
pub struct EnrichedPosition {
    /// The descriptor this record was derived from.
    pub descriptor: PositionDescriptor,
    /// Raw amount of currency0 the position currently represents.
    pub amount0: U256,
    /// Raw amount of currency1.
    pub amount1: U256,
    /// Where the pool's current price sits relative to the bounds.
    pub range_status: RangeStatus,
    /// Pool tick at enrichment time.
    pub current_tick: i32,
    /// Pool √price at enrichment time.
    pub sqrt_price_x96: U256,
    /// USD value; present only when both unit prices were supplied.
    pub value_usd: Option<f64>,
}
