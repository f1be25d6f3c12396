//! Kani formal verification proofs for the intrinsics module.
//!
//! The lookup tables are built by construction at compile time; these
//! proofs check the lookups against the hardware-independent definitions
//! for every possible input, not just the sampled ones.
//!
//! Run with: `cargo kani --package fxlog2-core`

use super::{bit_scan_forward, bit_scan_reverse, msb_16bit, msb_32bit, msb_8bit};

// ============================================================================
// Proof 1: bit_scan_forward finds the lowest set bit
// ============================================================================
// File: bitscan.rs
// What: For every nonzero u64, the result equals trailing_zeros()
// Why: The log2 kernels shift away exactly this many bits

/// Verify the LSB table lookup agrees with `trailing_zeros` everywhere.
#[kani::proof]
fn verify_bit_scan_forward_exact() {
    let x: u64 = kani::any();
    kani::assume(x != 0);

    let idx = bit_scan_forward(x);

    kani::assert(idx < 64, "index must be a valid bit position");
    kani::assert(idx == x.trailing_zeros(), "must equal trailing zero count");
}

// ============================================================================
// Proof 2: bit_scan_reverse finds the highest set bit
// ============================================================================
// File: bitscan.rs
// What: For every nonzero u64, the result equals 63 - leading_zeros()
// Why: The 64-bit kernel's integer part is this value

/// Verify the MSB table lookup agrees with `leading_zeros` everywhere.
#[kani::proof]
fn verify_bit_scan_reverse_exact() {
    let x: u64 = kani::any();
    kani::assume(x != 0);

    let idx = bit_scan_reverse(x);

    kani::assert(idx == 63 - x.leading_zeros(), "must equal 63 - leading zeros");
    kani::assert((x >> idx) == 1, "no set bit above the result");
}

// ============================================================================
// Proof 3: narrow MSB finders
// ============================================================================
// File: msb.rs
// What: msb_32bit / msb_16bit exact for nonzero input, msb_8bit below 256
// Why: Renormalization shift amounts are derived from these

/// Verify `msb_32bit` for every nonzero u32.
#[kani::proof]
fn verify_msb_32bit_exact() {
    let x: u32 = kani::any();
    kani::assume(x != 0);

    kani::assert(msb_32bit(x) == 31 - x.leading_zeros(), "msb_32bit mismatch");
}

/// Verify `msb_16bit` and `msb_8bit` on their documented domains.
#[kani::proof]
fn verify_msb_narrow_exact() {
    let x: u16 = kani::any();
    kani::assume(x != 0);

    kani::assert(msb_16bit(x) == 15 - x.leading_zeros(), "msb_16bit mismatch");
    if x < 256 {
        kani::assert(msb_8bit(x) == 15 - x.leading_zeros(), "msb_8bit mismatch");
    }
}
