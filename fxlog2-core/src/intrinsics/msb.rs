// =============================================================================
// Narrow MSB Finders
// =============================================================================
//
// Highest-set-bit lookups for 8/16/32-bit values, used by the log2 kernels
// while renormalizing the accumulator. All three share one 32-entry table:
// the input is rounded down to one less than a power of two, which the
// 32-bit de Bruijn multiply maps to a unique slot.
//
// Zero input returns 0. That is a side effect of the fill (0 stays 0 and
// hashes to slot 0), not a statement that zero has a most significant bit.

/// 32-bit de Bruijn multiplier for filled words.
pub const MSB_DEBRUIJN_32: u32 = 0x07C4_ACDD;

/// Maps `(filled * MSB_DEBRUIJN_32) >> 27` to the index of the highest set bit.
pub const MSB_32_TABLE: [u8; 32] = build_msb_32_table();

#[inline(always)]
const fn filled_index(filled: u32) -> usize {
    (filled.wrapping_mul(MSB_DEBRUIJN_32) >> 27) as usize
}

const fn build_msb_32_table() -> [u8; 32] {
    let mut table = [0u8; 32];
    let mut seen = 0u32;
    let mut k = 0;
    while k < 32 {
        // 2^(k+1) - 1, written so that k = 31 does not overflow
        let filled = (1u32 << k) | ((1u32 << k) - 1);
        let index = filled_index(filled);
        assert!(seen & (1u32 << index) == 0, "MSB-32 hash collision");
        seen |= 1u32 << index;
        table[index] = k as u8;
        k += 1;
    }
    table
}

/// Index of the highest set bit of a value below 256.
///
/// Only three fill rounds are applied, so bits above bit 7 are not fully
/// propagated and the result is only meaningful for `v < 256`.
#[inline(always)]
pub fn msb_8bit(mut v: u16) -> u32 {
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    MSB_32_TABLE[filled_index(v as u32)] as u32
}

/// Index (0..=15) of the highest set bit of a 16-bit value.
#[inline(always)]
pub fn msb_16bit(mut v: u16) -> u32 {
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    MSB_32_TABLE[filled_index(v as u32)] as u32
}

/// Index (0..=31) of the highest set bit of a 32-bit value.
#[inline(always)]
pub fn msb_32bit(mut v: u32) -> u32 {
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    MSB_32_TABLE[filled_index(v)] as u32
}
