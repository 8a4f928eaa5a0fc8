//! USD valuation of enriched amounts.
//!
//! Floating point enters the engine only here, at the valuation edge —
//! every token amount is computed and carried as an integer up to this
//! point, so the fixed-point path stays bit-exact.

use alloy::primitives::U256;

use crate::types::UsdQuote;

/// Values raw token amounts in USD.
///
/// Returns `None` when either unit price is missing: an absent valuation
/// must stay distinguishable from a genuinely zero-valued position.
pub fn value_usd(amount0: U256, amount1: U256, quote: &UsdQuote) -> Option<f64> {
    let usd0 = quote.usd0?;
    let usd1 = quote.usd1?;
    let whole0 = to_f64(amount0) / 10f64.powi(i32::from(quote.decimals0));
    let whole1 = to_f64(amount1) / 10f64.powi(i32::from(quote.decimals1));
    Some(whole0 * usd0 + whole1 * usd1)
}

/// Lossy widening to f64 via the decimal representation; 2^256 ≈ 1.16e77
/// sits well inside f64's exponent range, so the parse cannot fail.
fn to_f64(value: U256) -> f64 {
    value.to_string().parse().unwrap_or(f64::MAX)
}
