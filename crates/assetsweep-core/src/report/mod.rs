/// Result presentation and export.
///
/// The core hands a finished [`ScanResult`] to a frontend-owned
/// [`ResultPresenter`]; the "locate this asset" action is a callback shape
/// on that trait, keyed by path. Export helpers write the result as CSV or
/// JSON for toolchain consumption.
pub mod export;

pub use export::{write_csv, write_json};

use crate::model::{AssetPath, ScanResult};

/// Output collaborator — consumes a scan result for display.
///
/// Implementations live in frontends (the CLI ships a text presenter).
/// `locate` is invoked per asset the user wants highlighted in whatever
/// view the frontend owns.
pub trait ResultPresenter {
    /// Render the full result (count + ordered list + stats).
    fn present(&mut self, result: &ScanResult);

    /// Highlight/locate a single asset. Default: no-op for frontends
    /// without a navigable view.
    fn locate(&mut self, _path: &AssetPath) {}
}
