//! Drives the fixed-point kernels over an input range and compares each
//! result against the `f64` logarithm of the same fixed-point value.

use std::time::Instant;

use anyhow::{bail, Result};
use clap::ValueEnum;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use fxlog2_core::{
    log2_to_ln, try_fixed_log2_u32, try_fixed_log2_u64, FixedLog2, MAX_FRAC_BITS_U32,
    MAX_FRAC_BITS_U64,
};

use crate::stats::ErrorStats;

/// Which log2 kernel is under test.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Kernel {
    /// 32-bit input, 32-bit accumulator
    U32,
    /// 64-bit input, 64-bit accumulator
    U64,
}

impl Kernel {
    /// Largest fractional bit count the kernel accepts.
    pub fn max_frac_bits(self) -> u32 {
        match self {
            Kernel::U32 => MAX_FRAC_BITS_U32,
            Kernel::U64 => MAX_FRAC_BITS_U64,
        }
    }

    /// Largest power of two bounding the raw inputs the kernel accepts.
    pub fn max_end_log2(self) -> u32 {
        match self {
            Kernel::U32 => 32,
            Kernel::U64 => 63,
        }
    }

    fn log2(self, raw: u64, frac_bits: u32) -> Result<FixedLog2> {
        let r = match self {
            Kernel::U32 => try_fixed_log2_u32(raw as u32, frac_bits),
            Kernel::U64 => try_fixed_log2_u64(raw, frac_bits),
        };
        r.map_err(|e| anyhow::anyhow!("log2({}) with {} fractional bits: {}", raw, frac_bits, e))
    }
}

/// Half-open range of raw fixed-point inputs and how to read them.
#[derive(Debug, Clone)]
pub struct ErrorSampler {
    kernel: Kernel,
    input_frac_bits: u32,
    start: u64,
    end: u64,
}

impl ErrorSampler {
    /// Sweep the `window` raw inputs just below `2^end_log2`, never starting
    /// below 1.0 (`2^input_frac_bits`).
    ///
    /// # Errors
    /// Rejects ranges the kernel cannot take and ranges that are empty.
    pub fn new(kernel: Kernel, input_frac_bits: u32, end_log2: u32, window: u64) -> Result<Self> {
        if end_log2 > kernel.max_end_log2() {
            bail!(
                "end 2^{} exceeds the {:?} kernel's input width (at most 2^{})",
                end_log2,
                kernel,
                kernel.max_end_log2()
            );
        }
        if input_frac_bits >= end_log2 {
            bail!(
                "input fractional bits ({}) must be below the end exponent ({})",
                input_frac_bits,
                end_log2
            );
        }
        let end = 1u64 << end_log2;
        let start = (1u64 << input_frac_bits).max(end.saturating_sub(window));
        if start >= end {
            bail!("empty sweep range [{}, {})", start, end);
        }
        Ok(Self {
            kernel,
            input_frac_bits,
            start,
            end,
        })
    }

    /// Number of inputs in the full sweep.
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// First raw input (inclusive).
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Last raw input (exclusive).
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Checks that every result in the range packs into a 32-bit Q value
    /// with `frac_bits` fractional bits.
    ///
    /// # Errors
    /// Fails if `frac_bits` exceeds the kernel limit or the integer part
    /// of the largest log2 does not fit beside the fraction.
    pub fn check_frac_bits(&self, frac_bits: u32) -> Result<()> {
        if frac_bits > self.kernel.max_frac_bits() {
            bail!(
                "{} fractional bits exceeds the {:?} kernel limit of {}",
                frac_bits,
                self.kernel,
                self.kernel.max_frac_bits()
            );
        }
        let max_int = 63 - (self.end - 1).leading_zeros() - self.input_frac_bits;
        if frac_bits < 32 && (max_int as u64) < (1u64 << (32 - frac_bits)) {
            return Ok(());
        }
        bail!(
            "integer part up to {} does not fit beside {} fractional bits in 32 bits",
            max_int,
            frac_bits
        )
    }

    /// Sweep every input in the range.
    ///
    /// # Errors
    /// Propagates kernel and packing failures.
    pub fn sweep(&self, frac_bits: u32) -> Result<ErrorStats> {
        self.run(frac_bits, self.start..self.end)
    }

    /// Sample `count` inputs uniformly from the range.
    ///
    /// # Errors
    /// Propagates kernel and packing failures.
    pub fn sample(&self, frac_bits: u32, count: usize, seed: u64) -> Result<ErrorStats> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed.wrapping_add(frac_bits as u64));
        let (start, end) = (self.start, self.end);
        let inputs: Vec<u64> = (0..count).map(|_| rng.random_range(start..end)).collect();
        self.run(frac_bits, inputs)
    }

    fn run<I>(&self, frac_bits: u32, inputs: I) -> Result<ErrorStats>
    where
        I: IntoIterator<Item = u64>,
    {
        self.check_frac_bits(frac_bits)?;

        let inv_out = 1.0 / (1u64 << frac_bits) as f64;
        let inv_in = 1.0 / (1u64 << self.input_frac_bits) as f64;
        let mut stats = ErrorStats::new(frac_bits);
        let t0 = Instant::now();

        for raw in inputs {
            let Some(log2_q) = self.kernel.log2(raw, frac_bits)?.to_q(self.input_frac_bits) else {
                bail!("log2({}) does not pack into Q{}", raw, frac_bits);
            };
            let ln_q = log2_to_ln(log2_q);

            let exact_ln = (raw as f64 * inv_in).ln();
            let exact_log2 = exact_ln / std::f64::consts::LN_2;

            stats.record(
                (exact_log2 - log2_q as f64 * inv_out).abs(),
                (exact_ln - ln_q as f64 * inv_out).abs(),
            );
        }

        stats.elapsed = t0.elapsed();
        Ok(stats)
    }
}
