/// Data model for AssetSweep scans.
///
/// Re-exports asset identity types and the scan result structure.
pub mod asset;
pub mod result;

pub use asset::{AssetKind, AssetPath, SpriteRef};
pub use result::{ScanResult, ScanStats};
