//! Error kinds returned by the checked (`try_*`) entry points.
//!
//! The unchecked kernels treat these conditions as caller bugs and only
//! catch them with debug assertions. The checked variants surface them as
//! values instead, for callers that cannot guarantee their inputs.

use core::fmt;

/// Reasons a checked bit scan or logarithm can refuse its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Log2Error {
    /// The input word was zero: it has no set bit and no logarithm.
    ZeroInput,
    /// More fractional output bits were requested than the accumulator
    /// can produce without overflowing.
    FracBitsOutOfRange {
        /// Number of fractional bits the caller asked for.
        requested: u32,
        /// Largest value accepted by the selected kernel.
        max: u32,
    },
}

impl Log2Error {
    /// Short static description, usable where formatting is unavailable.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Log2Error::ZeroInput => "input is zero",
            Log2Error::FracBitsOutOfRange { .. } => "fractional bit count exceeds kernel limit",
        }
    }
}

impl fmt::Display for Log2Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Log2Error::ZeroInput => f.write_str(self.as_str()),
            Log2Error::FracBitsOutOfRange { requested, max } => write!(
                f,
                "{} ({} requested, at most {})",
                self.as_str(),
                requested,
                max
            ),
        }
    }
}
