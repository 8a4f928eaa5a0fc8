//! Tick → √price conversion in Q64.96, ported from the reference
//! protocol's tick math.
//!
//! A tick is a discrete log-scale price index with price = 1.0001^tick.
//! The conversion runs a fixed chain of conditional multiply-and-shift
//! steps over a precomputed Q128.128 constant table — one multiplier per
//! bit of `|tick|` — then inverts for positive ticks and downshifts to
//! Q64.96. The constants, the shift amounts and the asymmetric round-up on
//! the final shift all come from the reference implementation verbatim;
//! changing any of them breaks bit-for-bit compatibility.

use alloy::primitives::{U256, U512};
use alloy::uint;

use crate::MathError;

/// Lowest usable tick (price = 1.0001^tick).
pub const MIN_TICK: i32 = -887_272;
/// Highest usable tick.
pub const MAX_TICK: i32 = 887_272;

/// √price at [`MIN_TICK`]; lower saturation bound for any computed ratio.
pub const MIN_SQRT_RATIO: U256 = uint!(4295128739_U256);
/// √price at [`MAX_TICK`]; upper saturation bound.
pub const MAX_SQRT_RATIO: U256 =
    uint!(1461446703485210103287273052203988822378723970342_U256);

/// 2^96, the Q64.96 scale factor.
pub const Q96: U256 = uint!(79228162514264337593543950336_U256);

/// Fixed multiplier table: entry `i` is `1.0001^-(2^i) · 2^128`, applied
/// when bit `i + 1` of `|tick|` is set. Nineteen entries cover bits 1–19,
/// enough for the full tick range. Reference-protocol constants — a fixed
/// table, never regenerated.
const SQRT_RATIO_MULTIPLIERS: [U256; 19] = [
    uint!(0xfff97272373d413259a46990580e213a_U256),
    uint!(0xfff2e50f5f656932ef12357cf3c7fdcc_U256),
    uint!(0xffe5caca7e10e4e61c3624eaa0941cd0_U256),
    uint!(0xffcb9843d60f6159c9db58835c926644_U256),
    uint!(0xff973b41fa98c081472e6896dfb254c0_U256),
    uint!(0xff2ea16466c96a3843ec78b326b52861_U256),
    uint!(0xfe5dee046a99a2a811c461f1969c3053_U256),
    uint!(0xfcbe86c7900a88aedcffc83b479aa3a4_U256),
    uint!(0xf987a7253ac413176f2b074cf7815e54_U256),
    uint!(0xf3392b0822b70005940c7a398e4b70f3_U256),
    uint!(0xe7159475a2c29b7443b29c7fa6e889d9_U256),
    uint!(0xd097f3bdfd2022b8845ad8f792aa5825_U256),
    uint!(0xa9f746462d870fdf8a65dc1f90e061e5_U256),
    uint!(0x70d869a156d2a1b890bb3df62baf32f7_U256),
    uint!(0x31be135f97d08fd981231505542fcfa6_U256),
    uint!(0x9aa508b5b7a84e1c677de54f3e99bc9_U256),
    uint!(0x5d6af8dedb81196699c329225ee604_U256),
    uint!(0x2216e584f5fa1ea926041bedfe98_U256),
    uint!(0x48a170391f7dc42444e8fa2_U256),
];

/// Seed for the Q128.128 chain when bit 0 of `|tick|` is set
/// (`1.0001^-0.5 · 2^128`).
const ODD_TICK_SEED: U256 = uint!(0xfffcb933bd6fad37aa2d162d1a594001_U256);
/// Seed when bit 0 is clear (`1 · 2^128`).
const EVEN_TICK_SEED: U256 = uint!(0x100000000000000000000000000000000_U256);

/// Converts a tick to its Q64.96 √price.
///
/// Out-of-range input ticks are rejected — never clamped — while the
/// computed ratio is saturated into `[MIN_SQRT_RATIO, MAX_SQRT_RATIO]`,
/// since extreme ticks can overshoot the bounds by a few ULPs of the
/// truncated fixed-point chain.
///
/// # Errors
/// [`MathError::TickOutOfBounds`] when `tick ∉ [MIN_TICK, MAX_TICK]`.
pub fn sqrt_ratio_at_tick(tick: i32) -> Result<U256, MathError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(MathError::TickOutOfBounds(tick));
    }
    let abs_tick = tick.unsigned_abs();

    // Running Q128.128 ratio of 1.0001^-(|tick|/2).
    let mut ratio = if abs_tick & 0x1 != 0 {
        ODD_TICK_SEED
    } else {
        EVEN_TICK_SEED
    };
    for (i, multiplier) in SQRT_RATIO_MULTIPLIERS.iter().enumerate() {
        if abs_tick & (1u32 << (i + 1)) != 0 {
            ratio = mul_shift_128(ratio, *multiplier);
        }
    }

    // The chain computed the negative-tick ratio; invert for positive.
    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 → Q64.96: shift out 32 bits, rounding up on a nonzero
    // remainder. The round-up direction matches the reference exactly.
    let mut sqrt_price_x96 = ratio >> 32usize;
    if ratio & uint!(0xffffffff_U256) != U256::ZERO {
        sqrt_price_x96 += U256::from(1u64);
    }

    Ok(sqrt_price_x96.clamp(MIN_SQRT_RATIO, MAX_SQRT_RATIO))
}

/// `(a * b) >> 128` with the product held in 512 bits so no intermediate
/// can wrap.
fn mul_shift_128(a: U256, b: U256) -> U256 {
    let product: U512 = a.widening_mul(b);
    (product >> 128usize).to::<U256>()
}
