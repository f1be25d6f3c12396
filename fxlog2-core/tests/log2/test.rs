//! Unit tests for fxlog2-core log2 and convert modules.
//!
//! Tests cover: log2.rs, convert.rs
//! Focus: the documented contract (sentinel, fast path, bounds) and the
//! accuracy the validation sweep relies on.

#[path = "../common/mod.rs"]
mod common;

#[cfg(test)]
mod tests {
    use super::common::{log2_error, u32_error_bound, u64_error_bound};
    use fxlog2_core::{
        fixed_ln_q, fixed_log2_u32, fixed_log2_u64, log2_to_ln, try_fixed_log2_u32,
        try_fixed_log2_u64, FixedLog2, Log2Error, LOG2_UNDEFINED, MAX_FRAC_BITS_U32,
        MAX_FRAC_BITS_U64,
    };

    // =========================================================================
    // Contract edges
    // =========================================================================

    #[test]
    fn test_exact_power_with_zero_frac_bits() {
        let mut int_part = 0;
        assert_eq!(fixed_log2_u32(256, 0, &mut int_part), 0);
        assert_eq!(int_part, 8);
    }

    #[test]
    fn test_zero_returns_sentinel_and_keeps_int_part() {
        let mut int_part = 12345;
        assert_eq!(fixed_log2_u32(0, 16, &mut int_part), LOG2_UNDEFINED);
        assert_eq!(int_part, 12345);
        assert_eq!(fixed_log2_u64(0, 16, &mut int_part), LOG2_UNDEFINED);
        assert_eq!(int_part, 12345);
    }

    #[test]
    fn test_powers_of_two_are_exact_for_every_width() {
        for k in 0..64u32 {
            for frac_bits in 0..=MAX_FRAC_BITS_U64 {
                let mut int_part = u32::MAX;
                assert_eq!(fixed_log2_u64(1u64 << k, frac_bits, &mut int_part), 0);
                assert_eq!(int_part, k);
            }
        }
        for k in 0..32u32 {
            for frac_bits in 0..=MAX_FRAC_BITS_U32 {
                let mut int_part = u32::MAX;
                assert_eq!(fixed_log2_u32(1u32 << k, frac_bits, &mut int_part), 0);
                assert_eq!(int_part, k);
            }
        }
    }

    #[test]
    fn test_top_of_range_does_not_wrap() {
        // Renormalizing these rounds up to a mantissa of exactly 2.0, so
        // every fractional bit is set.
        for frac_bits in [8, 16, MAX_FRAC_BITS_U32] {
            for v in [u32::MAX, u32::MAX - 1] {
                let mut int_part = 0;
                assert_eq!(fixed_log2_u32(v, frac_bits, &mut int_part), (1 << frac_bits) - 1);
                assert_eq!(int_part, 31);
            }
        }
        for frac_bits in [8, 16, MAX_FRAC_BITS_U64] {
            for v in [u64::MAX, u64::MAX - 1] {
                let mut int_part = 0;
                assert_eq!(fixed_log2_u64(v, frac_bits, &mut int_part), (1 << frac_bits) - 1);
                assert_eq!(int_part, 63);
            }
        }
    }

    #[test]
    fn test_non_power_zero_frac_bits_gives_floor() {
        let mut int_part = 0;
        assert_eq!(fixed_log2_u64(1000, 0, &mut int_part), 0);
        assert_eq!(int_part, 9);
        assert_eq!(fixed_log2_u32(3, 0, &mut int_part), 0);
        assert_eq!(int_part, 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "frac_bits must be <= 30")]
    fn test_u64_frac_bits_above_cap_panics() {
        let mut int_part = 0;
        let _ = fixed_log2_u64(5, 31, &mut int_part);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "frac_bits must be <= 28")]
    fn test_u32_frac_bits_above_cap_panics() {
        let mut int_part = 0;
        let _ = fixed_log2_u32(5, 29, &mut int_part);
    }

    // =========================================================================
    // Checked API
    // =========================================================================

    #[test]
    fn test_checked_rejects_zero_and_out_of_range() {
        assert_eq!(try_fixed_log2_u32(0, 16), Err(Log2Error::ZeroInput));
        assert_eq!(try_fixed_log2_u64(0, 16), Err(Log2Error::ZeroInput));
        assert_eq!(
            try_fixed_log2_u64(5, 31),
            Err(Log2Error::FracBitsOutOfRange {
                requested: 31,
                max: 30
            })
        );
        assert_eq!(
            try_fixed_log2_u32(5, 29),
            Err(Log2Error::FracBitsOutOfRange {
                requested: 29,
                max: 28
            })
        );
    }

    #[test]
    fn test_checked_matches_raw() {
        for v in [3u32, 5, 7, 100, 255, 65_537, 0xDEAD_BEEF] {
            let mut int_part = 0;
            let frac = fixed_log2_u32(v, 20, &mut int_part);
            assert_eq!(
                try_fixed_log2_u32(v, 20),
                Ok(FixedLog2 {
                    int_part,
                    frac,
                    frac_bits: 20
                })
            );
        }
    }

    // =========================================================================
    // Accuracy
    // =========================================================================

    #[test]
    fn test_q8_inputs_in_unit_interval_u32() {
        // [1.0, 2.0) with 8 fractional input bits, 16 output bits
        let mut max_err = 0.0f64;
        for raw in 256u32..512 {
            let r = try_fixed_log2_u32(raw, 16).unwrap();
            let q = r.to_q(8).unwrap();
            let approx = q as f64 / 65536.0;
            let exact = (raw as f64 / 256.0).log2();
            max_err = max_err.max((approx - exact).abs());
        }
        assert!(max_err < 1e-4, "max error {}", max_err);
    }

    #[test]
    fn test_small_values_within_bound() {
        for v in 1u64..5000 {
            for frac_bits in [1, 8, 16, 24] {
                let r64 = try_fixed_log2_u64(v, frac_bits).unwrap();
                assert!(log2_error(v, &r64) <= u64_error_bound(frac_bits), "v={} F={}", v, frac_bits);
                let r32 = try_fixed_log2_u32(v as u32, frac_bits).unwrap();
                assert!(log2_error(v, &r32) <= u32_error_bound(frac_bits), "v={} F={}", v, frac_bits);
            }
        }
    }

    #[test]
    fn test_known_fractions() {
        let mut int_part = 0;
        // log2(3) - 1 = 0.5849625007 -> 38336 in Q16
        assert_eq!(fixed_log2_u32(3, 16, &mut int_part), 38336);
        assert_eq!(int_part, 1);
        assert_eq!(fixed_log2_u64(u64::MAX, 30, &mut int_part), (1 << 30) - 1);
        assert_eq!(int_part, 63);
    }

    #[test]
    fn test_widths_agree_on_16_bit_inputs() {
        // Below 2^16 neither kernel renormalizes before the first square
        for v in [3u32, 5, 7, 11, 255, 1000, 65_535] {
            let a = try_fixed_log2_u32(v, 8).unwrap();
            let b = try_fixed_log2_u64(v as u64, 8).unwrap();
            assert_eq!(a.int_part, b.int_part);
            assert!(a.frac.abs_diff(b.frac) <= 1, "v={} {} vs {}", v, a.frac, b.frac);
        }
    }

    // =========================================================================
    // convert.rs
    // =========================================================================

    #[test]
    fn test_fixed_ln_q8_input() {
        // 7.25 in Q8 -> ln = 1.98100...
        let q = fixed_ln_q(7 * 256 + 64, 8, 20).unwrap();
        let ln = q as f64 / (1u64 << 20) as f64;
        assert!((ln - 7.25f64.ln()).abs() < 1e-5, "ln {}", ln);
    }

    #[test]
    fn test_log2_to_ln_is_monotone() {
        let mut prev = 0;
        for q in (0u32..(1 << 24)).step_by(4099) {
            let ln = log2_to_ln(q);
            assert!(ln >= prev);
            prev = ln;
        }
    }
}
