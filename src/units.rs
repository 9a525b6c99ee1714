//! Human readable sizes for the optimization report
//!
//! Sizes use decimal units (1 kB = 1000 bytes) and keep their sign, so the
//! same helpers format both absolute sizes and size differences.

use crate::constants::DIFF_RATE_UNDEFINED;

const KB: u64 = 1_000;
const MB: u64 = 1_000_000;
const GB: u64 = 1_000_000_000;

/// Format a signed byte count in human-readable form
///
/// # Arguments
/// * `size` - Size or size difference in bytes
///
/// # Returns
/// * Size string such as "512 Byte", "1.50 kB" or "-2.50 MB"
pub fn format_bytes(size: i64) -> String {
    let magnitude = size.unsigned_abs();

    let formatted = if magnitude >= GB {
        format!("{:.2} GB", magnitude as f64 / GB as f64)
    } else if magnitude >= MB {
        format!("{:.2} MB", magnitude as f64 / MB as f64)
    } else if magnitude >= KB {
        format!("{:.2} kB", magnitude as f64 / KB as f64)
    } else {
        format!("{} Byte", magnitude)
    };

    if size < 0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Relative size change as a percentage string
///
/// # Arguments
/// * `before` - Size before optimization in bytes
/// * `after` - Size after optimization in bytes
///
/// # Returns
/// * Percentage with two decimals, e.g. "-20.00%", or "N/A" when `before` is 0
pub fn diff_rate(before: i64, after: i64) -> String {
    if before == 0 {
        return DIFF_RATE_UNDEFINED.to_string();
    }
    let rate = (after - before) as f64 / before as f64 * 100.0;
    format!("{:.2}%", rate)
}
