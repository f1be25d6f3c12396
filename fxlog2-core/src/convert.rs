//! Change of base from fixed-point log2 to fixed-point natural log.
//!
//! `ln(x) = log2(x) * ln(2)`. With `ln(2)` held as a Q31 constant the
//! conversion is one widening multiply and a shift, and keeps the
//! fractional width of its input.

use crate::log2::try_fixed_log2_u64;

/// Fractional width of [`LN2_Q31`].
pub const LN2_SHIFT: u32 = 31;

/// `round(ln(2) * 2^31)`.
pub const LN2_Q31: u32 = 0x58b9_0bfc;

// ln(2) * 2^31 = 1488522235.91
const _: () = assert!(LN2_Q31 == 1_488_522_236);

/// Converts a Q-format `log2` value to a Q-format natural log with the same
/// fractional width.
#[inline]
#[must_use]
pub const fn log2_to_ln(log2_q: u32) -> u32 {
    ((log2_q as u64 * LN2_Q31 as u64) >> LN2_SHIFT) as u32
}

/// Natural log of a fixed-point input, as an unsigned Q-format value.
///
/// `v` carries `input_frac_bits` fractional bits; the result carries
/// `frac_bits`. Returns `None` for zero, for inputs below 1.0, for
/// `frac_bits` above the 64-bit kernel's limit, and when the packed log2
/// does not fit in 32 bits.
#[must_use]
pub fn fixed_ln_q(v: u64, input_frac_bits: u32, frac_bits: u32) -> Option<u32> {
    let log2 = try_fixed_log2_u64(v, frac_bits).ok()?;
    log2.to_q(input_frac_bits).map(log2_to_ln)
}
