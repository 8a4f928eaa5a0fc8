//! Human-readable pool price from a Q64.96 √price.
//!
//! Display-layer concern only — the engine hands out raw integers. The
//! whole conversion stays in integer math: `sqrtPriceX96` is shifted down
//! by 32 bits so its square fits 256 bits (sacrificing bits the display
//! never shows), squared to a price in Q.128, then scaled to a fixed
//! number of decimal places.

use alloy::primitives::U256;
use clp_math::mul_div;

/// Decimal places carried in the rendered price.
const DISPLAY_DECIMALS: u8 = 6;

/// Renders the pool price (currency1 per currency0, adjusted for token
/// decimals) as a decimal string, e.g. `"2950.42"`.
pub fn display_price(sqrt_price_x96: U256, decimals0: u8, decimals1: u8) -> String {
    let shifted = sqrt_price_x96 >> 32usize;
    let Some(price_x128) = shifted.checked_mul(shifted) else {
        return "n/a".to_string();
    };
    if price_x128.is_zero() {
        return "0.00".to_string();
    }

    // price_scaled = price_x128 · 10^(display + dec0 - dec1) / 2^128,
    // with the decimal adjustment folded into whichever side keeps the
    // exponent non-negative.
    let scale = U256::from(10u64).pow(U256::from(DISPLAY_DECIMALS));
    let (numerator_scale, extra_divisor) = if decimals0 >= decimals1 {
        (
            scale * U256::from(10u64).pow(U256::from(decimals0 - decimals1)),
            U256::from(1u64),
        )
    } else {
        (
            scale,
            U256::from(10u64).pow(U256::from(decimals1 - decimals0)),
        )
    };
    let denominator = (U256::from(1u64) << 128) * extra_divisor;

    let Ok(price_scaled) = mul_div(price_x128, numerator_scale, denominator) else {
        return "n/a".to_string();
    };

    format_scaled(price_scaled, DISPLAY_DECIMALS)
}

/// Formats a scaled integer as a decimal string, trimming trailing zeros
/// but keeping at least two fractional digits.
fn format_scaled(scaled: U256, decimals: u8) -> String {
    let divisor = U256::from(10u64).pow(U256::from(decimals));
    let integer_part = scaled / divisor;
    let fractional_part = scaled % divisor;

    let frac_str = format!("{:0>width$}", fractional_part, width = decimals as usize);
    let trimmed = frac_str.trim_end_matches('0');
    let frac_display = if trimmed.len() < 2 {
        &frac_str[..2]
    } else {
        trimmed
    };

    format!("{integer_part}.{frac_display}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clp_math::{sqrt_ratio_at_tick, Q96};

    #[test]
    fn unit_price_with_equal_decimals() {
        // √P = 2^96 → P = 1.0
        assert_eq!(display_price(Q96, 18, 18), "1.00");
    }

    #[test]
    fn decimal_adjustment_applies() {
        // P = 1.0 in raw units; 6 vs 18 decimals → 10^12 in whole units.
        assert_eq!(display_price(Q96, 18, 6), "1000000000000.00");
    }

    #[test]
    fn zero_price_renders_zero() {
        assert_eq!(display_price(U256::ZERO, 6, 18), "0.00");
    }

    #[test]
    fn negative_tick_price_is_fractional() {
        let sqrt_price = sqrt_ratio_at_tick(-6_932).unwrap();
        let rendered = display_price(sqrt_price, 18, 18);
        // 1.0001^-6932 ≈ 0.5
        assert!(
            rendered.starts_with("0.49") || rendered.starts_with("0.50"),
            "expected ~0.5, got {rendered}"
        );
    }

    #[test]
    fn trims_trailing_zeros_keeping_two() {
        assert_eq!(format_scaled(U256::from(2_950_420_000u64), 6), "2950.42");
        assert_eq!(format_scaled(U256::from(100_000_000u64), 6), "100.00");
    }
}
