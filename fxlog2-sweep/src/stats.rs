//! Error accumulation for the accuracy sweep.

use std::time::Duration;

/// Running absolute-error statistics for one fractional width.
#[derive(Debug, Clone, Default)]
pub struct ErrorStats {
    /// Number of fractional output bits of the kernel under test.
    pub frac_bits: u32,
    /// Largest |approx - exact| seen for log2.
    pub max_log2: f64,
    /// Sum of |approx - exact| for log2.
    pub sum_log2: f64,
    /// Largest |approx - exact| seen for ln.
    pub max_ln: f64,
    /// Sum of |approx - exact| for ln.
    pub sum_ln: f64,
    /// Number of recorded samples.
    pub count: u64,
    /// Wall time spent computing the row.
    pub elapsed: Duration,
}

impl ErrorStats {
    /// Empty statistics for `frac_bits` fractional output bits.
    pub fn new(frac_bits: u32) -> Self {
        Self {
            frac_bits,
            ..Self::default()
        }
    }

    /// Record one sample's log2 and ln errors.
    pub fn record(&mut self, err_log2: f64, err_ln: f64) {
        self.max_log2 = self.max_log2.max(err_log2);
        self.sum_log2 += err_log2;
        self.max_ln = self.max_ln.max(err_ln);
        self.sum_ln += err_ln;
        self.count += 1;
    }

    /// Mean log2 error.
    ///
    /// Divides by `count - 1` so the table stays comparable with the
    /// reference numbers published for this algorithm.
    pub fn avg_log2(&self) -> f64 {
        self.sum_log2 / self.divisor()
    }

    /// Mean ln error, same divisor as [`avg_log2`](Self::avg_log2).
    pub fn avg_ln(&self) -> f64 {
        self.sum_ln / self.divisor()
    }

    fn divisor(&self) -> f64 {
        self.count.saturating_sub(1).max(1) as f64
    }

    /// Nanoseconds per sample, including the float reference.
    pub fn ns_per_sample(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.elapsed.as_secs_f64() * 1e9 / self.count as f64
    }

    /// Format as CSV row.
    pub fn to_csv(&self) -> String {
        format!(
            "{},{:.9e},{:.9e},{:.9e},{:.9e},{},{:.3}",
            self.frac_bits,
            self.max_log2,
            self.avg_log2(),
            self.max_ln,
            self.avg_ln(),
            self.count,
            self.ns_per_sample(),
        )
    }

    /// Format as a row of the plain-text table.
    pub fn to_row(&self) -> String {
        format!(
            "{} {:.9} {:.9} {:.9} {:.9}",
            self.frac_bits,
            self.max_log2,
            self.avg_log2(),
            self.max_ln,
            self.avg_ln(),
        )
    }
}

/// CSV header matching [`ErrorStats::to_csv`].
pub const CSV_HEADER: &str =
    "shifts,maxerr_log2,avgerr_log2,maxerr_ln,avgerr_ln,samples,ns_per_sample";

/// Plain-text header matching [`ErrorStats::to_row`].
pub const TABLE_HEADER: &str = "shifts maxerr(log2) avgerr(log2) maxerr(logE) avgerr(logE)";

/// Format a number with thousand separators.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
