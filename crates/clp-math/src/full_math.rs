//! Full-precision multiply-then-divide over 256-bit operands.
//!
//! Amount conversion multiplies three 256-bit quantities before dividing;
//! the product is held in 512 bits so precision is only lost at the final
//! truncating division, matching the reference protocol's FullMath.

use alloy::primitives::{U256, U512};

use crate::MathError;

/// Computes `a * b / denominator`, truncating toward zero, with the
/// intermediate product held in 512 bits.
///
/// # Errors
/// [`MathError::DivisionByZero`] when `denominator` is zero and
/// [`MathError::Overflow`] when the quotient does not fit in 256 bits.
/// Both indicate a caller bug given valid pool state; neither is collapsed
/// into a sentinel zero.
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let product: U512 = a.widening_mul(b);
    let quotient = product / denominator.to::<U512>();
    if quotient > U256::MAX.to::<U512>() {
        return Err(MathError::Overflow);
    }
    Ok(quotient.to::<U256>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_division() {
        let a = U256::from(6u64);
        let b = U256::from(7u64);
        assert_eq!(mul_div(a, b, U256::from(21u64)).unwrap(), U256::from(2u64));
    }

    #[test]
    fn truncates_toward_zero() {
        // 7 * 3 / 2 = 10.5 → 10
        assert_eq!(
            mul_div(U256::from(7u64), U256::from(3u64), U256::from(2u64)).unwrap(),
            U256::from(10u64)
        );
    }

    #[test]
    fn survives_overflowing_intermediate_product() {
        // MAX * MAX / MAX = MAX: the product needs 512 bits but the
        // quotient fits.
        assert_eq!(
            mul_div(U256::MAX, U256::MAX, U256::MAX).unwrap(),
            U256::MAX
        );
    }

    #[test]
    fn zero_denominator_is_an_error() {
        assert_eq!(
            mul_div(U256::from(1u64), U256::from(1u64), U256::ZERO),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn oversized_quotient_is_an_error() {
        assert_eq!(
            mul_div(U256::MAX, U256::from(2u64), U256::from(1u64)),
            Err(MathError::Overflow)
        );
    }
}
