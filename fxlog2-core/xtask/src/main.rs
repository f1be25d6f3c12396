use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use xshell::{cmd, Shell};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build and sweep automation for fxlog2-core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs the accuracy sweep in release mode
    Sweep {
        /// Kernel to sweep
        #[arg(long, short, value_enum, default_value_t = KernelArg::U64)]
        kernel: KernelArg,

        /// Pin the sweep process to a specific CPU core (using taskset)
        #[arg(long, short = 'p')]
        pin_core: Option<usize>,

        /// Emit CSV instead of the plain table
        #[arg(long)]
        csv: bool,
    },
    /// Checks that the no_std core builds for every supported target
    CheckAll,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum KernelArg {
    U32,
    U64,
}

/// Bare-metal and wasm targets the core must build for without `std`.
const NO_STD_TARGETS: &[&str] = &[
    "thumbv7em-none-eabihf",
    "armv7r-none-eabi",
    "wasm32-unknown-unknown",
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;

    match cli.command {
        Commands::Sweep {
            kernel,
            pin_core,
            csv,
        } => {
            run_sweep(&sh, kernel, pin_core, csv)?;
        }
        Commands::CheckAll => {
            check_all(&sh)?;
        }
    }

    Ok(())
}

fn run_sweep(sh: &Shell, kernel: KernelArg, pin_core: Option<usize>, csv: bool) -> Result<()> {
    let kernel_str = match kernel {
        KernelArg::U32 => "u32",
        KernelArg::U64 => "u64",
    };
    // The 32-bit kernel tops out at 28 fractional bits
    let max_frac_bits = match kernel {
        KernelArg::U32 => "20",
        KernelArg::U64 => "27",
    };
    let end_log2 = match kernel {
        KernelArg::U32 => "24",
        KernelArg::U64 => "26",
    };
    let csv_flag = if csv { "--csv" } else { "" };

    let prefix = match pin_core {
        Some(c) => format!("taskset -c {} ", c),
        None => String::new(),
    };

    println!(">> Sweeping {} kernel...", kernel_str);
    if let Some(c) = pin_core {
        println!("   (Pinned to Core {})", c);
    }

    let cmd_str = format!(
        "{}cargo run --release -p fxlog2-sweep -- --kernel {} --end-log2 {} --max-frac-bits {} {}",
        prefix, kernel_str, end_log2, max_frac_bits, csv_flag
    );
    cmd!(sh, "bash -c {cmd_str}").run()?;
    Ok(())
}

fn check_all(sh: &Shell) -> Result<()> {
    // Assume running from project root
    println!("--- Checking host ---");
    cmd!(sh, "cargo check -p fxlog2-core --all-targets --release").run()?;

    for &target in NO_STD_TARGETS {
        println!("--- Checking {} ---", target);
        ensure_target(sh, target)?;
        cmd!(sh, "cargo check --target {target} -p fxlog2-core --release").run()?;
    }

    println!(">> All targets checked successfully.");
    Ok(())
}

fn ensure_target(sh: &Shell, target: &str) -> Result<()> {
    let installed = cmd!(sh, "rustup target list --installed").read()?;
    if !installed.lines().any(|l| l.trim() == target) {
        println!("   [Setup] Installing target {}...", target);
        cmd!(sh, "rustup target add {target}").run()?;
    }
    Ok(())
}
