/// Scan progress reporting — lightweight messages sent from the scan
/// thread to the frontend via a crossbeam channel.
use crate::model::ScanStats;

/// Progress updates sent from the scan thread to the frontend.
///
/// The unused-asset list itself accumulates in the shared `LiveResults`;
/// these messages carry only counters and status.
#[derive(Debug)]
pub enum ScanProgress {
    /// Periodic update with running totals.
    Update {
        scanned: u64,
        unused_found: u64,
        current_path: String,
    },
    /// A non-fatal dependency-lookup failure. The asset was classified
    /// "used" as the fail-safe default.
    Warning { path: String, message: String },
    /// Scan completed. The full result list is in the shared `LiveResults`;
    /// the stats carry duration and all counters.
    Complete { stats: ScanStats },
    /// Scan was cancelled by the caller.
    Cancelled,
    /// Scan aborted before completion (invalid inventory). Terminal.
    Failed { message: String },
}
