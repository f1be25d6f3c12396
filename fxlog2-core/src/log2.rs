//! Fixed-point binary logarithm by repeated squaring.
//!
//! For `v` with highest set bit at position `n`, `log2(v) = n + log2(m)` where
//! `m = v / 2^n` lies in `[1, 2)`. Squaring `m` doubles `log2(m)`; if the
//! square reaches 2, the next fractional bit of the logarithm is 1 and the
//! mantissa is halved (here: the fractional-bit boundary moves up by one).
//! Each iteration therefore yields one more fractional bit, most
//! significant first.
//!
//! The working value is an integer whose binary point sits `n_frac_bits`
//! above bit 0. Before each squaring it is renormalized into half the
//! accumulator width so the square cannot overflow.
//!
//! # Contract
//!
//! - `v == 0` returns [`LOG2_UNDEFINED`] and leaves the integer part alone.
//! - Exact powers of two return a fractional part of 0 without iterating.
//! - `frac_bits` must not exceed [`MAX_FRAC_BITS_U32`] / [`MAX_FRAC_BITS_U64`].
//!
//! All arithmetic is integer, so `(v, frac_bits)` always produces the same
//! bits on every platform.

use crate::error::Log2Error;
use crate::intrinsics::{bit_scan_forward, bit_scan_reverse, msb_16bit, msb_32bit};

/// Sentinel returned for `log2(0)`.
pub const LOG2_UNDEFINED: u32 = u32::MAX;

/// Largest fractional bit count accepted by [`fixed_log2_u32`].
///
/// Tied to the 32-bit accumulator: changing its width requires
/// recomputing this bound.
pub const MAX_FRAC_BITS_U32: u32 = 28;

/// Largest fractional bit count accepted by [`fixed_log2_u64`].
///
/// Tied to the 64-bit accumulator, see [`MAX_FRAC_BITS_U32`].
pub const MAX_FRAC_BITS_U64: u32 = 30;

/// Fixed-point `floor(log2(v))` and fractional part of `log2(v)` for a
/// 32-bit input.
///
/// Writes the integer part to `int_part` and returns the fraction scaled by
/// `2^frac_bits`. Returns [`LOG2_UNDEFINED`] without touching `int_part`
/// when `v == 0`.
///
/// # Preconditions
/// `frac_bits <= MAX_FRAC_BITS_U32`, checked with `debug_assert!`.
pub fn fixed_log2_u32(v: u32, frac_bits: u32, int_part: &mut u32) -> u32 {
    debug_assert!(
        frac_bits <= MAX_FRAC_BITS_U32,
        "fixed_log2_u32: frac_bits must be <= 28"
    );
    if v == 0 {
        return LOG2_UNDEFINED;
    }

    let trailing = bit_scan_forward(v as u64);
    let msb = msb_32bit(v);
    *int_part = msb;
    if msb == trailing {
        return 0;
    }

    let mut v = v >> trailing;
    let mut n_frac_bits = msb - trailing;
    let mut result = 0u32;

    for _ in 0..frac_bits {
        while v >= 1 << 16 {
            let shift = msb_16bit((v >> 16) as u16) + 1;
            v = shr_round_up_u32(v, shift);
            n_frac_bits -= shift;
        }
        // v < 2^16 here, so the square fits in 32 bits
        v *= v;
        n_frac_bits <<= 1;
        result <<= 1;
        if v >> (n_frac_bits + 1) != 0 {
            result |= 1;
            n_frac_bits += 1;
        }
    }
    result
}

/// Fixed-point `floor(log2(v))` and fractional part of `log2(v)` for a
/// 64-bit input.
///
/// Same contract as [`fixed_log2_u32`], with a 64-bit accumulator.
///
/// # Preconditions
/// `frac_bits <= MAX_FRAC_BITS_U64`, checked with `debug_assert!`.
pub fn fixed_log2_u64(v: u64, frac_bits: u32, int_part: &mut u32) -> u32 {
    debug_assert!(
        frac_bits <= MAX_FRAC_BITS_U64,
        "fixed_log2_u64: frac_bits must be <= 30"
    );
    if v == 0 {
        return LOG2_UNDEFINED;
    }

    let trailing = bit_scan_forward(v);
    let msb = bit_scan_reverse(v);
    *int_part = msb;
    if msb == trailing {
        return 0;
    }

    let mut v = v >> trailing;
    let mut n_frac_bits = msb - trailing;
    let mut result = 0u32;

    for _ in 0..frac_bits {
        while v >= 1 << 32 {
            let shift = msb_32bit((v >> 32) as u32) + 1;
            v = shr_round_up_u64(v, shift);
            n_frac_bits -= shift;
        }
        v *= v;
        n_frac_bits <<= 1;
        result <<= 1;
        if v >> (n_frac_bits + 1) != 0 {
            result |= 1;
            n_frac_bits += 1;
        }
    }
    result
}

/// `ceil(v / 2^shift)`, equal to `(v + 2^shift - 1) >> shift` without the
/// intermediate overflow. `shift` is in `1..=16`.
#[inline(always)]
fn shr_round_up_u32(v: u32, shift: u32) -> u32 {
    let mask = (1u32 << shift) - 1;
    (v >> shift) + ((v & mask) != 0) as u32
}

/// 64-bit [`shr_round_up_u32`]; `shift` is in `1..=32`.
#[inline(always)]
fn shr_round_up_u64(v: u64, shift: u32) -> u64 {
    let mask = (1u64 << shift) - 1;
    (v >> shift) + ((v & mask) != 0) as u64
}

/// A computed logarithm: `int_part + frac / 2^frac_bits`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixedLog2 {
    /// `floor(log2(v))` of the raw input word.
    pub int_part: u32,
    /// Fractional part scaled by `2^frac_bits`.
    pub frac: u32,
    /// Number of fractional bits in `frac`.
    pub frac_bits: u32,
}

impl FixedLog2 {
    /// Packs the result as an unsigned Q-format value with `frac_bits`
    /// fractional bits, treating the original input as a fixed-point number
    /// with `input_frac_bits` fractional bits.
    ///
    /// Returns `None` if the input was below 1.0 (negative logarithm) or the
    /// packed value does not fit in 32 bits.
    #[must_use]
    pub fn to_q(&self, input_frac_bits: u32) -> Option<u32> {
        let int = self.int_part.checked_sub(input_frac_bits)?;
        if self.frac_bits >= 32 {
            return None;
        }
        let packed = (int as u64) << self.frac_bits;
        if packed > u32::MAX as u64 {
            return None;
        }
        Some(packed as u32 | self.frac)
    }

    /// The logarithm of the raw input word as a float.
    ///
    /// Any `frac_bits` is accepted; widths past the `f64` exponent range
    /// contribute nothing.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.int_part as f64 + self.frac as f64 * pow2_neg(self.frac_bits)
    }
}

/// `2^-k` built from the exponent field, so no shift can overflow.
/// Clamped at the smallest normal `f64`.
#[inline]
fn pow2_neg(k: u32) -> f64 {
    let exp = 1023 - k.min(1022) as u64;
    f64::from_bits(exp << 52)
}

/// Checked [`fixed_log2_u32`].
///
/// # Errors
/// - [`Log2Error::ZeroInput`] if `v == 0`.
/// - [`Log2Error::FracBitsOutOfRange`] if `frac_bits > MAX_FRAC_BITS_U32`.
pub fn try_fixed_log2_u32(v: u32, frac_bits: u32) -> Result<FixedLog2, Log2Error> {
    check_frac_bits(frac_bits, MAX_FRAC_BITS_U32)?;
    if v == 0 {
        return Err(Log2Error::ZeroInput);
    }
    let mut int_part = 0;
    let frac = fixed_log2_u32(v, frac_bits, &mut int_part);
    Ok(FixedLog2 {
        int_part,
        frac,
        frac_bits,
    })
}

/// Checked [`fixed_log2_u64`].
///
/// # Errors
/// - [`Log2Error::ZeroInput`] if `v == 0`.
/// - [`Log2Error::FracBitsOutOfRange`] if `frac_bits > MAX_FRAC_BITS_U64`.
pub fn try_fixed_log2_u64(v: u64, frac_bits: u32) -> Result<FixedLog2, Log2Error> {
    check_frac_bits(frac_bits, MAX_FRAC_BITS_U64)?;
    if v == 0 {
        return Err(Log2Error::ZeroInput);
    }
    let mut int_part = 0;
    let frac = fixed_log2_u64(v, frac_bits, &mut int_part);
    Ok(FixedLog2 {
        int_part,
        frac,
        frac_bits,
    })
}

#[inline]
fn check_frac_bits(requested: u32, max: u32) -> Result<(), Log2Error> {
    if requested > max {
        return Err(Log2Error::FracBitsOutOfRange { requested, max });
    }
    Ok(())
}
