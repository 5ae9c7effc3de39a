//! Big integer operations for exact pricing math
//!
//! Amounts are `u128`; every product of two amounts is formed in a 256-bit
//! intermediate so the full numerator exists before the floor division.

use ethnum::U256;
use pnyx_types::{Amount, DexError, DexResult};

/// Widen an amount to 256 bits
pub fn widen(value: Amount) -> U256 {
    U256::from(value)
}

/// Narrow a 256-bit result back to an amount
pub fn narrow(value: U256, operation: &str) -> DexResult<Amount> {
    if value > U256::from(u128::MAX) {
        return Err(DexError::math_overflow(operation, &[&value]));
    }
    Ok(value.as_u128())
}

/// Checked 256-bit product
pub fn mul_wide(a: U256, b: U256, operation: &str) -> DexResult<U256> {
    a.checked_mul(b)
        .ok_or_else(|| DexError::math_overflow(operation, &[&a, &b]))
}

/// Checked 256-bit sum
pub fn add_wide(a: U256, b: U256, operation: &str) -> DexResult<U256> {
    a.checked_add(b)
        .ok_or_else(|| DexError::math_overflow(operation, &[&a, &b]))
}

/// Floor division of 256-bit values
pub fn div_wide(numerator: U256, denominator: U256, operation: &str) -> DexResult<U256> {
    if denominator == U256::ZERO {
        return Err(DexError::internal(
            operation,
            format!("division by zero: {} / 0", numerator),
        ));
    }
    Ok(numerator / denominator)
}

/// ⌊a · b / c⌋ with a 256-bit intermediate
pub fn mul_div(a: Amount, b: Amount, c: Amount) -> DexResult<Amount> {
    let product = mul_wide(widen(a), widen(b), "mul_div")?;
    narrow(div_wide(product, widen(c), "mul_div")?, "mul_div")
}

/// Integer square root: ⌊√n⌋.
///
/// Newton iteration seeded at `n`, stopping as soon as the estimate stops
/// decreasing. The average is formed without overflowing at `U256::MAX`.
pub fn isqrt(n: U256) -> U256 {
    if n == U256::ZERO {
        return U256::ZERO;
    }

    let mut x = n;
    loop {
        let q = n / x;
        // (x + q) / 2 without the intermediate sum
        let next = (x >> 1) + (q >> 1) + (x & q & U256::ONE);
        if next >= x {
            return x;
        }
        x = next;
    }
}

/// Integer square root of an amount
pub fn isqrt_u128(n: Amount) -> Amount {
    // ⌊√n⌋ < 2^64 for any u128, so the low word is exact
    isqrt(widen(n)).as_u128()
}

/// ⌊√(a · b)⌋; the product never overflows 256 bits and its root fits an amount
pub fn isqrt_product(a: Amount, b: Amount) -> Amount {
    let product = widen(a) * widen(b);
    isqrt(product).as_u128()
}
