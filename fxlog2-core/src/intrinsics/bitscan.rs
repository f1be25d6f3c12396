// =============================================================================
// 64-bit Bit Scans
// =============================================================================
//
// Forward (LSB) and reverse (MSB) scans over a 64-bit word using de Bruijn
// multiplication and a 64-entry lookup table. Branch-free apart from the
// debug-only precondition check.

use crate::error::Log2Error;

/// Multiplier for the folded 32-bit LSB hash (Matt Taylor's constant).
pub const LSB_DEBRUIJN_32: u32 = 0x7829_1ACF;

/// 64-bit de Bruijn multiplier for the MSB hash (Kim Walisch, Mark Dickinson).
pub const MSB_DEBRUIJN_64: u64 = 0x03f7_9d71_b4cb_0a89;

/// Maps the folded LSB hash to the index of the lowest set bit.
pub const LSB_64_TABLE: [u8; 64] = build_lsb_64_table();

/// Maps the top six bits of the filled-word product to the index of the
/// highest set bit.
pub const MSB_64_TABLE: [u8; 64] = build_msb_64_table();

/// Hash of the lowest set bit of `bb`.
///
/// `bb ^ (bb - 1)` sets every bit up to and including the lowest set bit,
/// so the hash only depends on that bit's position.
#[inline(always)]
const fn lsb_hash(bb: u64) -> usize {
    let bb = bb ^ bb.wrapping_sub(1);
    let folded = (bb as u32) ^ ((bb >> 32) as u32);
    (folded.wrapping_mul(LSB_DEBRUIJN_32) >> 26) as usize
}

/// Sets every bit below the highest set bit.
#[inline(always)]
pub const fn fill_below_msb_64(mut bb: u64) -> u64 {
    bb |= bb >> 1;
    bb |= bb >> 2;
    bb |= bb >> 4;
    bb |= bb >> 8;
    bb |= bb >> 16;
    bb |= bb >> 32;
    bb
}

#[inline(always)]
const fn msb_hash(bb: u64) -> usize {
    (fill_below_msb_64(bb).wrapping_mul(MSB_DEBRUIJN_64) >> 58) as usize
}

const fn build_lsb_64_table() -> [u8; 64] {
    let mut table = [0u8; 64];
    let mut seen = 0u64;
    let mut k = 0;
    while k < 64 {
        let index = lsb_hash(1u64 << k);
        assert!(seen & (1u64 << index) == 0, "LSB hash collision");
        seen |= 1u64 << index;
        table[index] = k as u8;
        k += 1;
    }
    table
}

const fn build_msb_64_table() -> [u8; 64] {
    let mut table = [0u8; 64];
    let mut seen = 0u64;
    let mut k = 0;
    while k < 64 {
        let index = msb_hash(1u64 << k);
        assert!(seen & (1u64 << index) == 0, "MSB hash collision");
        seen |= 1u64 << index;
        table[index] = k as u8;
        k += 1;
    }
    table
}

/// Index (0..=63) of the least significant set bit.
///
/// # Preconditions
/// `bb != 0`. Checked with `debug_assert!`; in release builds a zero input
/// returns an unspecified index. Use [`try_bit_scan_forward`] when the input
/// is not known to be nonzero.
#[inline(always)]
pub fn bit_scan_forward(bb: u64) -> u32 {
    debug_assert!(bb != 0, "bit_scan_forward: input must be nonzero");
    LSB_64_TABLE[lsb_hash(bb)] as u32
}

/// Index (0..=63) of the most significant set bit.
///
/// # Preconditions
/// `bb != 0`, with the same policy as [`bit_scan_forward`].
#[inline(always)]
pub fn bit_scan_reverse(bb: u64) -> u32 {
    debug_assert!(bb != 0, "bit_scan_reverse: input must be nonzero");
    MSB_64_TABLE[msb_hash(bb)] as u32
}

/// Checked [`bit_scan_forward`].
///
/// # Errors
/// Returns [`Log2Error::ZeroInput`] if `bb == 0`.
#[inline]
pub fn try_bit_scan_forward(bb: u64) -> Result<u32, Log2Error> {
    if bb == 0 {
        return Err(Log2Error::ZeroInput);
    }
    Ok(bit_scan_forward(bb))
}

/// Checked [`bit_scan_reverse`].
///
/// # Errors
/// Returns [`Log2Error::ZeroInput`] if `bb == 0`.
#[inline]
pub fn try_bit_scan_reverse(bb: u64) -> Result<u32, Log2Error> {
    if bb == 0 {
        return Err(Log2Error::ZeroInput);
    }
    Ok(bit_scan_reverse(bb))
}
