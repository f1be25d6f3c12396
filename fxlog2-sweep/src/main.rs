//! Accuracy sweep: fxlog2-core vs `f64` log2/ln
//!
//! Feeds a window of fixed-point inputs through the integer log2 kernel for
//! each fractional output width, converts the result to ln by change of
//! base, and reports max/mean absolute error against the floating-point
//! reference. Total run time is printed last.
//!
//! # Usage
//!
//! ```bash
//! # Default sweep: Q8 inputs just below 2^26, 8..=27 fractional bits
//! cargo run --release -p fxlog2-sweep
//!
//! # 32-bit kernel, CSV output
//! cargo run --release -p fxlog2-sweep -- --kernel u32 --max-frac-bits 20 --csv
//!
//! # Random sampling over a wider range
//! cargo run --release -p fxlog2-sweep -- --end-log2 40 --window 1000000000 --random 100000
//! ```

mod sampler;
mod stats;

use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::sampler::{ErrorSampler, Kernel};
use crate::stats::{format_number, CSV_HEADER, TABLE_HEADER};

#[derive(Parser, Debug)]
#[command(name = "fxlog2-sweep")]
#[command(about = "Accuracy sweep of the fixed-point log2 kernels against f64")]
struct Args {
    /// Smallest number of fractional output bits
    #[arg(long, default_value_t = 8)]
    min_frac_bits: u32,

    /// Largest number of fractional output bits
    #[arg(long, default_value_t = 27)]
    max_frac_bits: u32,

    /// Fractional bits of the fixed-point input
    #[arg(long, default_value_t = 8)]
    input_frac_bits: u32,

    /// Raw inputs stay below 2^END_LOG2
    #[arg(long, default_value_t = 26)]
    end_log2: u32,

    /// Number of raw inputs just below the end to sweep
    #[arg(long, default_value_t = 1 << 16)]
    window: u64,

    /// Kernel under test
    #[arg(long, value_enum, default_value_t = Kernel::U64)]
    kernel: Kernel,

    /// Sample this many random inputs per row instead of the whole window
    #[arg(long)]
    random: Option<usize>,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output results as CSV to stdout
    #[arg(long)]
    csv: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let t0 = Instant::now();

    if args.min_frac_bits > args.max_frac_bits {
        bail!(
            "--min-frac-bits ({}) is above --max-frac-bits ({})",
            args.min_frac_bits,
            args.max_frac_bits
        );
    }

    let sampler = ErrorSampler::new(args.kernel, args.input_frac_bits, args.end_log2, args.window)
        .context("invalid sweep range")?;
    sampler
        .check_frac_bits(args.max_frac_bits)
        .context("invalid --max-frac-bits")?;

    let samples = args.random.map_or(sampler.len(), |n| n as u64);
    eprintln!(
        "Kernel {:?} | inputs [{}, {}) in Q{} | {} samples per row",
        args.kernel,
        sampler.start(),
        sampler.end(),
        args.input_frac_bits,
        format_number(samples)
    );

    println!("{}", if args.csv { CSV_HEADER } else { TABLE_HEADER });
    for frac_bits in args.min_frac_bits..=args.max_frac_bits {
        let stats = match args.random {
            Some(count) => sampler.sample(frac_bits, count, args.seed)?,
            None => sampler.sweep(frac_bits)?,
        };
        eprintln!(
            "  F={:>2} done ({:.2} ns/sample)",
            frac_bits,
            stats.ns_per_sample()
        );
        if args.csv {
            println!("{}", stats.to_csv());
        } else {
            println!("{}", stats.to_row());
        }
    }

    println!("{:.6}", t0.elapsed().as_secs_f64());
    Ok(())
}
