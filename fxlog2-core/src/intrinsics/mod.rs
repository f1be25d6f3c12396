// =============================================================================
// Intrinsics Module
// =============================================================================
//
// Table-driven bit scans the logarithm kernels are built on. No hardware
// instructions are assumed, so results are identical on every target.

/// 64-bit forward and reverse bit scans.
pub mod bitscan;

/// 8/16/32-bit most-significant-bit finders.
pub mod msb;

/// Kani formal verification proofs.
#[cfg(kani)]
mod kani_proofs;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use bitscan::{
    bit_scan_forward, bit_scan_reverse, fill_below_msb_64, try_bit_scan_forward,
    try_bit_scan_reverse, LSB_64_TABLE, MSB_64_TABLE,
};

pub use msb::{msb_16bit, msb_32bit, msb_8bit, MSB_32_TABLE};
