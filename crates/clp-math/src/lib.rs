//! clp-math: fixed-point math kernel for concentrated-liquidity positions.
//!
//! Integer-only ports of the protocol's tick/price table, full-precision
//! multiply-divide, liquidity/amount conversion, packed position-info
//! decoding and pool-id hashing. Everything here is pure computation over
//! alloy integer types — no I/O, no floating point, no global state.
//!
//! Bit-for-bit compatibility with the reference protocol is the contract:
//! a rounding or sign error in this crate silently corrupts every valuation
//! derived from it downstream.

pub mod full_math;
pub mod liquidity_amounts;
pub mod pool_key;
pub mod position_info;
pub mod range;
pub mod tick_math;

mod error;

pub use error::MathError;
pub use full_math::mul_div;
pub use liquidity_amounts::{amount0_for_liquidity, amount1_for_liquidity, amounts_for_liquidity};
pub use pool_key::{PoolId, PoolKey};
pub use position_info::{decode_position_info, PositionInfoFields};
pub use range::{classify, RangeStatus};
pub use tick_math::{sqrt_ratio_at_tick, MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK, Q96};
