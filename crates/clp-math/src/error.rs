use thiserror::Error;

use crate::tick_math::{MAX_TICK, MIN_TICK};

/// Failures of the pure math layer.
///
/// Every failure is a typed error rather than a sentinel zero: a zero
/// amount is a legitimate result ("no liquidity on this side"), so an
/// error collapsed into zero would be invisible to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Tick outside the protocol's `[MIN_TICK, MAX_TICK]` domain.
    #[error("tick {0} outside [{MIN_TICK}, {MAX_TICK}]")]
    TickOutOfBounds(i32),
    /// Zero denominator reached a full-precision multiply-divide.
    #[error("division by zero in mul_div")]
    DivisionByZero,
    /// A full-precision quotient does not fit in 256 bits.
    #[error("mul_div result exceeds 256 bits")]
    Overflow,
}
