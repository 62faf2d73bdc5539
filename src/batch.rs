//! Line-oriented batch decoding
//!
//! Decodes one report per line from any buffered reader. A failing line does
//! not stop the batch; it is recorded with its line number and error, and the
//! remaining lines are still decoded.

use std::io::BufRead;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::decoder::MetarParser;
use crate::error::MetarError;
use crate::models::Report;

/// Decoded reports, failures and statistics for one input
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Successfully decoded reports, in input order
    pub reports: Vec<Report>,

    /// Lines that failed to decode, in input order
    pub failures: Vec<LineFailure>,

    pub stats: BatchStats,
}

/// A line that failed to decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// 1-based line number in the input
    pub line: usize,

    /// Trimmed line text
    pub raw: String,

    pub error: MetarError,
}

/// Batch decoding statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Non-blank lines encountered
    pub total_reports: usize,

    /// Reports decoded successfully
    pub reports_decoded: usize,

    /// Reports that failed to decode
    pub reports_failed: usize,
}

impl BatchStats {
    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_reports == 0 {
            0.0
        } else {
            (self.reports_decoded as f64 / self.total_reports as f64) * 100.0
        }
    }

    /// True when every report decoded
    pub fn is_clean(&self) -> bool {
        self.reports_failed == 0
    }
}

/// Decode every non-blank line of `reader` with `parser`
///
/// Only I/O errors abort the batch.
pub fn decode_reader<R: BufRead>(parser: &MetarParser, reader: R) -> std::io::Result<BatchResult> {
    let mut reports = Vec::new();
    let mut failures = Vec::new();
    let mut stats = BatchStats::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }

        stats.total_reports += 1;
        match parser.parse(raw) {
            Ok(report) => {
                stats.reports_decoded += 1;
                reports.push(report);
            }
            Err(error) => {
                warn!("Line {}: {}", index + 1, error);
                stats.reports_failed += 1;
                failures.push(LineFailure {
                    line: index + 1,
                    raw: raw.to_string(),
                    error,
                });
            }
        }
    }

    debug!(
        "Batch complete: {}/{} reports decoded ({:.1}%)",
        stats.reports_decoded,
        stats.total_reports,
        stats.success_rate()
    );

    Ok(BatchResult {
        reports,
        failures,
        stats,
    })
}
