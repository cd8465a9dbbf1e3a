/// Scan results — the ordered unused-asset list plus run statistics.
use crate::model::AssetPath;
use serde::Serialize;
use std::time::Duration;

/// Counters accumulated over a single scan.
///
/// `lookup_failures` counts assets whose dependency query failed and which
/// were therefore classified "used" as the fail-safe default. A nonzero
/// value is a warning condition the caller should surface, not an error.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ScanStats {
    /// Total assets in the inventory at scan time.
    pub total_assets: u64,
    /// Assets protected by an exclusion rule (never candidates).
    pub excluded: u64,
    /// Directories and metadata side-files skipped.
    pub non_content: u64,
    /// Sprite-sheet textures that took the per-sprite reference path.
    pub sheets_inspected: u64,
    /// Dependency lookups that failed and were recovered as "used".
    pub lookup_failures: u64,
    /// Wall-clock scan duration.
    #[serde(with = "serde_duration_secs")]
    pub duration: Duration,
}

/// Outcome of one scan: the subset of the inventory classified unused,
/// in the inventory's relative order.
///
/// Produced fresh per scan invocation and immutable afterwards; the scanner
/// holds no state between runs.
#[derive(Clone, Debug, Serialize)]
pub struct ScanResult {
    /// Unused asset paths, a subsequence of the input inventory order.
    pub unused: Vec<AssetPath>,
    /// Run statistics.
    pub stats: ScanStats,
}

impl ScanResult {
    /// Number of assets classified unused.
    pub fn unused_count(&self) -> usize {
        self.unused.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unused.is_empty()
    }
}

/// Serialize `Duration` as fractional seconds for JSON export.
mod serde_duration_secs {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unused_count_matches_list_len() {
        let result = ScanResult {
            unused: vec![AssetPath::new("Assets/a.png"), AssetPath::new("Assets/b.png")],
            stats: ScanStats::default(),
        };
        assert_eq!(result.unused_count(), 2);
        assert!(!result.is_empty());
    }

    #[test]
    fn stats_serialize_duration_as_seconds() {
        let stats = ScanStats {
            duration: Duration::from_millis(1500),
            ..Default::default()
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["duration"], serde_json::json!(1.5));
    }
}
