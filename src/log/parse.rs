//! Extract (size, fct) pairs from raw simulator log lines.
//!
//! A flow line looks like:
//!
//! Flow conga-src24504104 98020668 size 10000 start 1276075 end 1276113 fct 38.2858 sent 10500 0 tput 2.08955 rtt 14.263 cwnd 12000 alpha 0
//!
//! Only the size and fct fields matter; whole tokens between them are
//! ignored. Lines that do not match are skipped silently, since logs carry
//! free-form diagnostic output between flow records.

use crate::Result;
use regex::Regex;

pub struct LineParser {
    re: Regex,
}

impl LineParser {
    pub fn new() -> Result<Self> {
        // Anchored at line start: `Flow`, a flow identifier, a numeric id,
        // `size` and an integer, any ignored tokens, then `fct` (the one
        // case-insensitive keyword) and a numeric value with optional sign
        // and exponent.
        let re = Regex::new(
            r"^Flow\s+\S+\s+\d+\s+size\s+(\d+)(?:\s+\S+)*?\s+(?i:fct)\s+([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)",
        )?;
        Ok(Self { re })
    }

    /// Parse one line. `None` means "not a flow record"; a partial match
    /// whose numeric fields do not parse is treated the same way, so no
    /// half-built record ever escapes.
    pub fn parse(&self, line: &str) -> Option<(u64, f64)> {
        let caps = self.re.captures(line)?;
        let size = caps[1].parse::<u64>().ok()?;
        let fct = caps[2].parse::<f64>().ok()?;
        Some((size, fct))
    }
}
