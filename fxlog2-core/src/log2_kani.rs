//! Kani formal verification proofs for the log2 kernels.
//!
//! The squaring loop relies on renormalization to keep the accumulator
//! below half its width. These proofs check that the kernels never panic on
//! arithmetic overflow and that the fast path is exact.
//!
//! Run with: `cargo kani --package fxlog2-core`

use crate::log2::{fixed_log2_u32, fixed_log2_u64, LOG2_UNDEFINED};

// ============================================================================
// Proof 1: exact powers of two
// ============================================================================
// File: log2.rs
// What: fixed_log2_u64(2^k, F) == 0 with int_part == k
// Why: The fast path skips the loop entirely and must not lose precision

/// Verify powers of two produce an integral result.
#[kani::proof]
fn verify_power_of_two_exact() {
    let k: u32 = kani::any();
    let frac_bits: u32 = kani::any();
    kani::assume(k < 64);
    kani::assume(frac_bits <= 30);

    let mut int_part = u32::MAX;
    let frac = fixed_log2_u64(1u64 << k, frac_bits, &mut int_part);

    kani::assert(frac == 0, "power of two has no fractional part");
    kani::assert(int_part == k, "integer part equals the exponent");
}

// ============================================================================
// Proof 2: zero sentinel
// ============================================================================
// File: log2.rs
// What: v == 0 returns the sentinel and leaves int_part untouched
// Why: Callers rely on the untouched output slot

/// Verify the zero sentinel contract for both widths.
#[kani::proof]
fn verify_zero_sentinel() {
    let seed: u32 = kani::any();
    let mut int_part = seed;

    kani::assert(
        fixed_log2_u32(0, 16, &mut int_part) == LOG2_UNDEFINED,
        "u32 kernel returns sentinel",
    );
    kani::assert(
        fixed_log2_u64(0, 16, &mut int_part) == LOG2_UNDEFINED,
        "u64 kernel returns sentinel",
    );
    kani::assert(int_part == seed, "int_part must be untouched");
}

// ============================================================================
// Proof 3: no overflow in the 32-bit squaring loop
// ============================================================================
// File: log2.rs
// What: Arbitrary u32 input with a short iteration count never overflows
// Why: Overflow in `v *= v` would panic in debug and corrupt bits in release

/// Verify the 32-bit kernel is panic-free over a bounded iteration count.
#[kani::proof]
#[kani::unwind(6)] // 4 iterations, renormalization loop runs at most twice
fn verify_u32_kernel_no_overflow() {
    let v: u32 = kani::any();
    kani::assume(v != 0);

    let mut int_part = 0;
    let frac = fixed_log2_u32(v, 4, &mut int_part);

    kani::assert(frac < 16, "result fits in the requested width");
    kani::assert(int_part < 32, "integer part is a bit index");
}
