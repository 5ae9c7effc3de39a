/// Safe arithmetic operations with overflow protection
///
/// All operations return errors instead of panicking.
use pnyx_types::{Amount, DexError, DexResult};

// ============================================================================
// Safe Basic Arithmetic
// ============================================================================

/// Safe addition for amounts
pub fn safe_add(a: Amount, b: Amount) -> DexResult<Amount> {
    a.checked_add(b)
        .ok_or_else(|| DexError::math_overflow("amount addition", &[&a, &b]))
}

/// Safe subtraction for amounts
pub fn safe_sub(a: Amount, b: Amount) -> DexResult<Amount> {
    a.checked_sub(b)
        .ok_or_else(|| DexError::math_overflow("amount subtraction", &[&a, &b]))
}

/// Safe increment of a 64-bit counter
pub fn safe_inc_u64(value: u64) -> DexResult<u64> {
    value
        .checked_add(1)
        .ok_or_else(|| DexError::math_overflow("counter increment", &[&value]))
}
