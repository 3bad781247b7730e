#![doc = include_str!("../README.md")]

use std::fmt;

/// Converts a Q factor to bandwidth in octaves.
pub fn q2bw(q: f64) -> f64 {
    let q2 = (2.0 * q * q + 1.0) / (2.0 * q * q);
    (q2 + (q2 * q2 - 1.0).sqrt()).log(2.0)
}

/// Represents a single peaking filter of a parametric equalizer.
///
/// No range checks are applied: whatever was read is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Filter {
    /// Center frequency in Hz
    pub freq: f64,
    /// Gain in dB
    pub gain: f64,
    /// Q factor (quality factor)
    pub q: f64,
}

impl Filter {
    /// Creates a new peaking filter.
    pub fn new(freq: f64, gain: f64, q: f64) -> Self {
        Filter { freq, gain, q }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PK Fc {:.1} Hz Gain {:+.2} dB Q {:.2}",
            self.freq, self.gain, self.q
        )
    }
}

/// Type alias for a parametric EQ read from a file.
/// Order is the order of appearance in the source and is significant.
pub type FilterSequence = Vec<Filter>;

/// Format a table of the parametric EQ filters, in sequence order.
pub fn peq_format_table(filters: &[Filter]) -> String {
    let mut lines = Vec::with_capacity(filters.len() + 2);
    lines.push("+-# -|-Freq (Hz)--|-Q ---------|-BW (oct)---|-Gain (dB)--+".to_string());
    for (i, f) in filters.iter().enumerate() {
        lines.push(format!(
            "| {:<2} | {:<10.2} | {:<10.3} | {:<10.3} | {:<+10.3} |",
            i,
            f.freq,
            f.q,
            q2bw(f.q),
            f.gain
        ));
    }
    lines.push("+----|------------|------------|------------|------------+".to_string());
    lines.join("\n")
}
