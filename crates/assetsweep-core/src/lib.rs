/// AssetSweep Core — scanning, classification, and data model.
///
/// This crate contains all business logic with zero frontend dependencies.
/// It is designed to be reusable across different frontends (CLI, GUI,
/// editor plugin).
///
/// # Modules
///
/// - [`model`] — Asset paths, kinds, sprite sub-assets, and scan results.
/// - [`inventory`] — Injectable asset-inventory and dependency-index
///   collaborators, plus the JSON snapshot manifest.
/// - [`rules`] — Data-driven exclusion rules (protected directories and
///   extensions).
/// - [`scanner`] — The unused-asset classification algorithm, with a
///   background-thread wrapper reporting progress over a channel.
/// - [`report`] — Presenter trait and CSV/JSON export of scan results.
pub mod error;
pub mod inventory;
pub mod model;
pub mod report;
pub mod rules;
pub mod scanner;

pub use error::{ConfigError, LookupError, ManifestError, ScanError};
