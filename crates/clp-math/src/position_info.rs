//! Decoder for the position manager's packed info word.
//!
//! The manager stores each position's metadata in one 256-bit word:
//!
//! ```text
//! bits 0–7     subscriber flag byte (nonzero = subscriber set)
//! bits 8–31    tickLower (int24, two's complement)
//! bits 32–55   tickUpper (int24, two's complement)
//! bits 56–255  pool-key lookup prefix (not consumed here)
//! ```
//!
//! The layout is a fixed on-chain contract and is reproduced exactly; the
//! only transformation is the 24-bit sign extension of the tick fields.

use alloy::primitives::U256;

const TICK_LOWER_OFFSET: usize = 8;
const TICK_UPPER_OFFSET: usize = 32;
const TICK_FIELD_MASK: u32 = 0xFF_FFFF;

/// Fields decoded from a packed position-info word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionInfoFields {
    /// Lower tick bound of the position.
    pub tick_lower: i32,
    /// Upper tick bound of the position.
    pub tick_upper: i32,
    /// True when the low byte is nonzero (a subscriber contract is set).
    pub has_subscriber: bool,
}

/// Decodes the tick bounds and subscriber flag from a packed info word.
pub fn decode_position_info(packed: U256) -> PositionInfoFields {
    let lower_raw = ((packed >> TICK_LOWER_OFFSET) & U256::from(TICK_FIELD_MASK)).to::<u32>();
    let upper_raw = ((packed >> TICK_UPPER_OFFSET) & U256::from(TICK_FIELD_MASK)).to::<u32>();
    PositionInfoFields {
        tick_lower: sign_extend_i24(lower_raw),
        tick_upper: sign_extend_i24(upper_raw),
        has_subscriber: packed & U256::from(0xFFu32) != U256::ZERO,
    }
}

/// Sign-extend a 24-bit `int24` value (stored as u32) to `i32`.
///
/// If bit 23 is set, the value is negative in two's complement.
fn sign_extend_i24(raw: u32) -> i32 {
    if raw & 0x80_0000 != 0 {
        (raw | 0xFF00_0000) as i32
    } else {
        raw as i32
    }
}
