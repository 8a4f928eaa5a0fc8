//! Liquidity → token amount conversion for a tick range.
//!
//! A position's single liquidity scalar, combined with its √price bounds
//! and the pool's current √price, determines the two token amounts it
//! holds: all token0 below the range, all token1 above it, a mix inside.
//! Divisions truncate toward zero; all products go through the 512-bit
//! [`mul_div`] so nothing is lost before the final division.

use alloy::primitives::U256;

use crate::full_math::mul_div;
use crate::tick_math::Q96;
use crate::MathError;

/// Token0 held by `liquidity` between two √prices (floor).
///
/// `amount0 = L · 2^96 · (√upper − √lower) / (√upper · √lower)`, computed
/// as a full-precision mul-div by `√upper` followed by a truncating divide
/// by `√lower`.
///
/// # Errors
/// [`MathError::DivisionByZero`] if either bound is zero — unreachable for
/// bounds produced by the tick kernel, whose minimum is `MIN_SQRT_RATIO`.
pub fn amount0_for_liquidity(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
) -> Result<U256, MathError> {
    let (sqrt_lower, sqrt_upper) = ordered(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    if sqrt_lower.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let numerator = U256::from(liquidity) << 96;
    Ok(mul_div(numerator, sqrt_upper - sqrt_lower, sqrt_upper)? / sqrt_lower)
}

/// Token1 held by `liquidity` between two √prices (floor):
/// `amount1 = L · (√upper − √lower) / 2^96`.
///
/// # Errors
/// Propagates [`MathError`] from the full-precision divide.
pub fn amount1_for_liquidity(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
) -> Result<U256, MathError> {
    let (sqrt_lower, sqrt_upper) = ordered(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    mul_div(U256::from(liquidity), sqrt_upper - sqrt_lower, Q96)
}

/// Splits `liquidity` into the `(amount0, amount1)` it represents at the
/// current √price. Bounds may be passed in either order.
///
/// # Errors
/// Propagates [`MathError`] from the underlying conversions.
pub fn amounts_for_liquidity(
    sqrt_price_x96: U256,
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
) -> Result<(U256, U256), MathError> {
    let (sqrt_lower, sqrt_upper) = ordered(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if sqrt_price_x96 <= sqrt_lower {
        // Price at or below the range: entirely token0.
        let amount0 = amount0_for_liquidity(sqrt_lower, sqrt_upper, liquidity)?;
        Ok((amount0, U256::ZERO))
    } else if sqrt_price_x96 >= sqrt_upper {
        // Price at or above the range: entirely token1.
        let amount1 = amount1_for_liquidity(sqrt_lower, sqrt_upper, liquidity)?;
        Ok((U256::ZERO, amount1))
    } else {
        let amount0 = amount0_for_liquidity(sqrt_price_x96, sqrt_upper, liquidity)?;
        let amount1 = amount1_for_liquidity(sqrt_lower, sqrt_price_x96, liquidity)?;
        Ok((amount0, amount1))
    }
}

fn ordered(a: U256, b: U256) -> (U256, U256) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tick_math::sqrt_ratio_at_tick;

    fn bounds(lower: i32, upper: i32) -> (U256, U256) {
        (
            sqrt_ratio_at_tick(lower).unwrap(),
            sqrt_ratio_at_tick(upper).unwrap(),
        )
    }

    #[test]
    fn below_range_is_all_token0() {
        let (sa, sb) = bounds(-1_000, 1_000);
        let price = sqrt_ratio_at_tick(-2_000).unwrap();
        let (amount0, amount1) = amounts_for_liquidity(price, sa, sb, 1_000_000).unwrap();
        assert!(amount0 > U256::ZERO);
        assert_eq!(amount1, U256::ZERO);
    }

    #[test]
    fn above_range_is_all_token1() {
        let (sa, sb) = bounds(-1_000, 1_000);
        let price = sqrt_ratio_at_tick(2_000).unwrap();
        let (amount0, amount1) = amounts_for_liquidity(price, sa, sb, 1_000_000).unwrap();
        assert_eq!(amount0, U256::ZERO);
        assert!(amount1 > U256::ZERO);
    }

    #[test]
    fn inside_range_holds_both_tokens() {
        let (sa, sb) = bounds(-1_000, 1_000);
        let price = sqrt_ratio_at_tick(0).unwrap();
        let (amount0, amount1) = amounts_for_liquidity(price, sa, sb, 1_000_000).unwrap();
        assert!(amount0 > U256::ZERO);
        assert!(amount1 > U256::ZERO);
    }

    #[test]
    fn reversed_bounds_are_normalized() {
        let (sa, sb) = bounds(-1_000, 1_000);
        let price = sqrt_ratio_at_tick(0).unwrap();
        assert_eq!(
            amounts_for_liquidity(price, sa, sb, 1_000_000).unwrap(),
            amounts_for_liquidity(price, sb, sa, 1_000_000).unwrap()
        );
    }

    #[test]
    fn zero_liquidity_yields_zero_amounts() {
        let (sa, sb) = bounds(-1_000, 1_000);
        let price = sqrt_ratio_at_tick(0).unwrap();
        assert_eq!(
            amounts_for_liquidity(price, sa, sb, 0).unwrap(),
            (U256::ZERO, U256::ZERO)
        );
    }

    #[test]
    fn inside_split_matches_per_side_formulas() {
        // The mixed case must equal the single-sided formulas evaluated
        // over the sub-ranges (current..upper) and (lower..current).
        let (sa, sb) = bounds(-106_600, -104_600);
        let price = sqrt_ratio_at_tick(-105_600).unwrap();
        let liquidity = 10_000_000u128;
        let (amount0, amount1) = amounts_for_liquidity(price, sa, sb, liquidity).unwrap();
        assert_eq!(
            amount0,
            amount0_for_liquidity(price, sb, liquidity).unwrap()
        );
        assert_eq!(
            amount1,
            amount1_for_liquidity(sa, price, liquidity).unwrap()
        );
    }
}
