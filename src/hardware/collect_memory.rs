use sysinfo::System;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemorySummary {
    pub total_bytes: u64,
    pub available_bytes: u64,
    pub used_bytes: u64,
    pub percent_used: f64,
}

/// Expects `sys` to have refreshed its memory counters.
pub fn collect_memory_info(sys: &System) -> MemorySummary {
    let total_bytes = sys.total_memory();
    let available_bytes = sys.available_memory();
    let summary = MemorySummary {
        total_bytes,
        available_bytes,
        used_bytes: sys.used_memory(),
        percent_used: percent_used(total_bytes, available_bytes),
    };
    debug!(?summary, "Collected memory info");
    summary
}

/// Share of memory not available, rounded to one decimal.
fn percent_used(total: u64, available: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = total.saturating_sub(available) as f64 / total as f64 * 100.0;
    (percent * 10.0).round() / 10.0
}
