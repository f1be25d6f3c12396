//! # fxlog2-core: Fixed-Point Binary Logarithm Without Floating Point
//!
//! `fxlog2-core` is a `no_std`, allocation-free library that approximates
//! `log2` of an unsigned integer using integer arithmetic only. The result
//! is bit-exact across targets, which makes it usable on embedded cores
//! without an FPU and in pipelines that must be deterministic.
//!
//! ## Overview
//!
//! 1. **Bit scans** - de Bruijn table lookups for the lowest and highest set
//!    bit of a word, with no reliance on hardware `tzcnt`/`lzcnt`
//! 2. **Repeated squaring** - each squaring of the normalized mantissa
//!    yields one more fractional bit of the logarithm
//! 3. **Change of base** - a Q31 `ln(2)` constant turns log2 into ln
//!
//! ## Quick Start
//!
//! ```
//! use fxlog2_core::{fixed_log2_u32, try_fixed_log2_u64, LOG2_UNDEFINED};
//!
//! let mut int_part = 0;
//! let frac = fixed_log2_u32(256, 0, &mut int_part);
//! assert_eq!((int_part, frac), (8, 0));
//!
//! // Zero has no logarithm.
//! assert_eq!(fixed_log2_u32(0, 16, &mut int_part), LOG2_UNDEFINED);
//!
//! // Checked API with a typed result.
//! let r = try_fixed_log2_u64(3, 16).unwrap();
//! assert!((r.to_f64() - 3f64.log2()).abs() < 1e-4);
//! ```
//!
//! ## Module Organization
//!
//! - [`intrinsics`] - Bit scans and MSB finders
//! - [`log2`] - Fixed-point log2 kernels for 32- and 64-bit inputs
//! - [`convert`] - Change of base to the natural logarithm
//! - [`error`] - Error kinds for the checked entry points

#![no_std]
#![deny(missing_docs)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Change of base from log2 to ln.
pub mod convert;

/// Error kinds for checked operations.
pub mod error;

/// De Bruijn bit scans and MSB finders.
pub mod intrinsics;

/// Fixed-point log2 by repeated squaring.
pub mod log2;

/// Kani formal verification proofs for the log2 kernels.
#[cfg(kani)]
mod log2_kani;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use convert::{fixed_ln_q, log2_to_ln, LN2_Q31, LN2_SHIFT};

pub use error::Log2Error;

pub use intrinsics::{
    bit_scan_forward, bit_scan_reverse, msb_16bit, msb_32bit, msb_8bit, try_bit_scan_forward,
    try_bit_scan_reverse,
};

pub use log2::{
    fixed_log2_u32, fixed_log2_u64, try_fixed_log2_u32, try_fixed_log2_u64, FixedLog2,
    LOG2_UNDEFINED, MAX_FRAC_BITS_U32, MAX_FRAC_BITS_U64,
};
