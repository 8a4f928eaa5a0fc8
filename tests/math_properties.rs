//! Cross-crate properties of the fixed-point kernel and converters.
//!
//! These pin down the behaviors every downstream consumer (leaderboards,
//! reward allocation) silently depends on: monotonicity and exact bounds
//! of the tick kernel, one-sidedness of out-of-range positions, and the
//! totality of the classifier.

use alloy::primitives::{Address, U256};
use clp_math::{
    amounts_for_liquidity, classify, sqrt_ratio_at_tick, MathError, PoolKey, RangeStatus,
    MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK,
};

#[test]
fn kernel_is_strictly_monotonic() {
    let mut prev = sqrt_ratio_at_tick(MIN_TICK).expect("min tick is valid");
    let mut tick = MIN_TICK + 1_009;
    while tick <= MAX_TICK {
        let cur = sqrt_ratio_at_tick(tick).expect("sampled tick is valid");
        assert!(cur > prev, "ratio not strictly increasing at tick {tick}");
        prev = cur;
        tick += 1_009;
    }
}

#[test]
fn kernel_bounds_are_exact() {
    assert_eq!(sqrt_ratio_at_tick(MIN_TICK).unwrap(), MIN_SQRT_RATIO);
    assert_eq!(sqrt_ratio_at_tick(MAX_TICK).unwrap(), MAX_SQRT_RATIO);
}

#[test]
fn kernel_is_idempotent() {
    for tick in [MIN_TICK, -105_600, -1, 0, 1, 203_189, MAX_TICK] {
        assert_eq!(
            sqrt_ratio_at_tick(tick).unwrap(),
            sqrt_ratio_at_tick(tick).unwrap(),
            "non-deterministic output at tick {tick}"
        );
    }
}

#[test]
fn kernel_rejects_tick_past_max() {
    assert_eq!(
        sqrt_ratio_at_tick(887_273),
        Err(MathError::TickOutOfBounds(887_273))
    );
}

#[test]
fn below_range_position_holds_only_token0() {
    let sqrt_lower = sqrt_ratio_at_tick(-1_000).unwrap();
    let sqrt_upper = sqrt_ratio_at_tick(1_000).unwrap();
    // Smallest liquidity large enough that floor rounding cannot swallow
    // the nonzero side entirely for this range width.
    for liquidity in [100u128, 10_000_000, u128::from(u64::MAX)] {
        let price = sqrt_ratio_at_tick(-5_000).unwrap();
        let (amount0, amount1) =
            amounts_for_liquidity(price, sqrt_lower, sqrt_upper, liquidity).unwrap();
        assert!(amount0 > U256::ZERO, "no token0 at liquidity {liquidity}");
        assert_eq!(amount1, U256::ZERO);
    }
}

#[test]
fn above_range_position_holds_only_token1() {
    let sqrt_lower = sqrt_ratio_at_tick(-1_000).unwrap();
    let sqrt_upper = sqrt_ratio_at_tick(1_000).unwrap();
    for liquidity in [100u128, 10_000_000, u128::from(u64::MAX)] {
        let price = sqrt_ratio_at_tick(5_000).unwrap();
        let (amount0, amount1) =
            amounts_for_liquidity(price, sqrt_lower, sqrt_upper, liquidity).unwrap();
        assert_eq!(amount0, U256::ZERO);
        assert!(amount1 > U256::ZERO, "no token1 at liquidity {liquidity}");
    }
}

#[test]
fn classifier_returns_exactly_one_status() {
    for tick_lower in (-600..600).step_by(97) {
        let tick_upper = tick_lower + 200;
        for current in (tick_lower - 300..tick_upper + 300).step_by(13) {
            let status = classify(current, tick_lower, tick_upper);
            let expected = if current < tick_lower {
                RangeStatus::BelowRange
            } else if current > tick_upper {
                RangeStatus::AboveRange
            } else {
                RangeStatus::InRange
            };
            assert_eq!(status, expected, "at ({current}, {tick_lower}, {tick_upper})");
        }
    }
}

/// Scenario from the production pair: spacing 200, a 2000-tick-wide range
/// straddled by the current price at its midpoint.
#[test]
fn in_range_midpoint_splits_into_both_tokens() {
    let tick_lower = -106_600;
    let tick_upper = -104_600;
    let current_tick = -105_600;
    let liquidity = 10_000_000u128;

    let sqrt_lower = sqrt_ratio_at_tick(tick_lower).unwrap();
    let sqrt_upper = sqrt_ratio_at_tick(tick_upper).unwrap();
    let sqrt_price = sqrt_ratio_at_tick(current_tick).unwrap();

    let (amount0, amount1) =
        amounts_for_liquidity(sqrt_price, sqrt_lower, sqrt_upper, liquidity).unwrap();
    assert!(amount0 > U256::ZERO);
    assert!(amount1 > U256::ZERO);
    assert_eq!(
        classify(current_tick, tick_lower, tick_upper),
        RangeStatus::InRange
    );

    // Re-deriving the bounds independently must reproduce the same split.
    let rederived_lower = sqrt_ratio_at_tick(-106_600).unwrap();
    let rederived_upper = sqrt_ratio_at_tick(-104_600).unwrap();
    assert_eq!(rederived_lower, sqrt_lower);
    assert_eq!(rederived_upper, sqrt_upper);
    assert_eq!(
        amounts_for_liquidity(sqrt_price, rederived_lower, rederived_upper, liquidity).unwrap(),
        (amount0, amount1)
    );
}

#[test]
fn pool_ids_are_deterministic_across_construction_paths() {
    let a = PoolKey {
        currency0: Address::repeat_byte(0x01),
        currency1: Address::repeat_byte(0x02),
        fee: 3_000,
        tick_spacing: 200,
        hooks: Address::ZERO,
    };
    // Same field values assembled in a different order.
    let mut b = PoolKey {
        currency0: Address::ZERO,
        currency1: Address::ZERO,
        fee: 0,
        tick_spacing: 0,
        hooks: Address::ZERO,
    };
    b.hooks = Address::ZERO;
    b.tick_spacing = 200;
    b.fee = 3_000;
    b.currency1 = Address::repeat_byte(0x02);
    b.currency0 = Address::repeat_byte(0x01);

    assert_eq!(a.id(), b.id());
}
