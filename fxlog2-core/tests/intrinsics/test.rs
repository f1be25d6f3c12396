//! Unit tests for fxlog2-core intrinsics module.
//!
//! Tests cover: bitscan.rs, msb.rs
//! Focus: edge positions and the patterns the log2 kernels feed in.

#[cfg(test)]
mod tests {
    use fxlog2_core::intrinsics::{
        bit_scan_forward, bit_scan_reverse, fill_below_msb_64, msb_16bit, msb_32bit, msb_8bit,
        try_bit_scan_forward, try_bit_scan_reverse, LSB_64_TABLE, MSB_32_TABLE, MSB_64_TABLE,
    };
    use fxlog2_core::Log2Error;

    // =========================================================================
    // bitscan.rs: bit_scan_forward
    // =========================================================================

    #[test]
    fn test_forward_powers_of_two() {
        for k in 0..64 {
            assert_eq!(bit_scan_forward(1u64 << k), k, "Failed for bit {}", k);
        }
    }

    #[test]
    fn test_forward_ignores_higher_bits() {
        assert_eq!(bit_scan_forward(u64::MAX), 0);
        assert_eq!(bit_scan_forward(0b1011_0000), 4);
        assert_eq!(bit_scan_forward(0x8000_0000_0000_0000), 63);
        assert_eq!(bit_scan_forward(0xFFFF_0000_0000_0000), 48);
        // Halves that cancel under the fold
        assert_eq!(bit_scan_forward(0x0000_0001_0000_0001), 0);
        assert_eq!(bit_scan_forward(0x0000_0100_0000_0000), 40);
    }

    #[test]
    fn test_forward_matches_trailing_zeros_on_walk() {
        let mut x = 0x9E37_79B9_7F4A_7C15u64;
        for _ in 0..1000 {
            assert_eq!(bit_scan_forward(x), x.trailing_zeros(), "x={:#x}", x);
            x = x.rotate_left(7) ^ (x >> 3);
            if x == 0 {
                x = 1;
            }
        }
    }

    #[test]
    fn test_try_forward_zero() {
        assert_eq!(try_bit_scan_forward(0), Err(Log2Error::ZeroInput));
        assert_eq!(try_bit_scan_forward(8), Ok(3));
    }

    // =========================================================================
    // bitscan.rs: bit_scan_reverse
    // =========================================================================

    #[test]
    fn test_reverse_powers_of_two() {
        for k in 0..64 {
            assert_eq!(bit_scan_reverse(1u64 << k), k, "Failed for bit {}", k);
        }
    }

    #[test]
    fn test_reverse_ignores_lower_bits() {
        assert_eq!(bit_scan_reverse(1), 0);
        assert_eq!(bit_scan_reverse(u64::MAX), 63);
        assert_eq!(bit_scan_reverse(0b1011_0000), 7);
        assert_eq!(bit_scan_reverse(0x0000_0001_FFFF_FFFF), 32);
    }

    #[test]
    fn test_try_reverse_zero() {
        assert_eq!(try_bit_scan_reverse(0), Err(Log2Error::ZeroInput));
        assert_eq!(try_bit_scan_reverse(9), Ok(3));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_reverse_zero_panics_in_debug() {
        let _ = bit_scan_reverse(0);
    }

    #[test]
    fn test_fill_below_msb_produces_mask() {
        for k in 0..64 {
            let x = 1u64 << k;
            let expected = if k == 63 { u64::MAX } else { (1u64 << (k + 1)) - 1 };
            assert_eq!(fill_below_msb_64(x | 1), expected);
        }
    }

    // =========================================================================
    // msb.rs
    // =========================================================================

    #[test]
    fn test_msb_32bit_powers_and_masks() {
        for k in 0..32 {
            assert_eq!(msb_32bit(1u32 << k), k);
            assert_eq!(msb_32bit(u32::MAX >> (31 - k)), k);
        }
    }

    #[test]
    fn test_msb_16bit_renormalization_inputs() {
        // High halves seen by the 32-bit kernel's renormalization
        assert_eq!(msb_16bit(1), 0);
        assert_eq!(msb_16bit(0x00FF), 7);
        assert_eq!(msb_16bit(0x8000), 15);
        assert_eq!(msb_16bit(u16::MAX), 15);
    }

    #[test]
    fn test_msb_8bit_in_range() {
        assert_eq!(msb_8bit(1), 0);
        assert_eq!(msb_8bit(0x80), 7);
        assert_eq!(msb_8bit(0xFF), 7);
    }

    #[test]
    fn test_msb_helpers_zero_is_zero() {
        // Incidental: zero fills to zero, which hashes to slot 0
        assert_eq!(msb_8bit(0), 0);
        assert_eq!(msb_16bit(0), 0);
        assert_eq!(msb_32bit(0), 0);
    }

    // =========================================================================
    // Table construction
    // =========================================================================

    #[test]
    fn test_tables_cover_every_position() {
        let mut lsb_seen = [false; 64];
        let mut msb_seen = [false; 64];
        for i in 0..64 {
            lsb_seen[LSB_64_TABLE[i] as usize] = true;
            msb_seen[MSB_64_TABLE[i] as usize] = true;
        }
        assert!(lsb_seen.iter().all(|&s| s));
        assert!(msb_seen.iter().all(|&s| s));

        let mut msb32_seen = [false; 32];
        for &k in MSB_32_TABLE.iter() {
            msb32_seen[k as usize] = true;
        }
        assert!(msb32_seen.iter().all(|&s| s));
    }
}
