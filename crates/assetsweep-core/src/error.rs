/// Error taxonomy for the core crate.
///
/// A scan never aborts mid-run for a single bad asset: per-asset dependency
/// lookup failures are recovered locally (the asset is classified "used"
/// and counted in `ScanStats::lookup_failures`). Only pre-flight conditions
/// — an unavailable inventory or malformed exclusion rules — stop a scan
/// before any per-asset work.
use thiserror::Error;

/// Fatal scan errors, surfaced before or instead of a result.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The asset inventory is unavailable or self-contradictory. An empty
    /// inventory is NOT invalid — it yields an empty result.
    #[error("invalid scan input: {0}")]
    InvalidInput(String),

    /// The exclusion-rule list failed validation at scan start.
    #[error("exclusion rules rejected: {0}")]
    Config(#[from] ConfigError),

    /// The scan was cancelled between assets. Callers that cancel get this
    /// instead of a partial result that could be mistaken for a full one.
    #[error("scan cancelled")]
    Cancelled,
}

/// Malformed exclusion-rule configuration, detected before any per-asset
/// work.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("empty pattern in {list} rule list")]
    EmptyPattern { list: &'static str },
}

/// Failure loading or decoding an asset-database snapshot manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("I/O error reading manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("manifest JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate asset path in manifest: {0}")]
    DuplicatePath(String),
}

/// A single dependency-index query failed (stale or corrupt index entry).
///
/// Recovered per-asset by the scanner; never propagated as fatal.
#[derive(Debug, Error)]
#[error("dependency lookup failed for {path}: {message}")]
pub struct LookupError {
    pub path: String,
    pub message: String,
}
