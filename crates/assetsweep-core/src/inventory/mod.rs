/// Input collaborators for a scan — dependency injection instead of
/// ambient global lookups.
///
/// The scanner never touches a live asset database. It is handed two
/// read-only capabilities: an [`AssetInventory`] (the complete, ordered
/// asset list with per-asset kind and sprite sub-assets) and a
/// [`DependencyIndex`] (declared outgoing dependency lists). Both are
/// point-in-time snapshots; the host owns freshness and caching.
pub mod manifest;

pub use manifest::{InMemoryAssets, ManifestAsset, ProjectManifest};

use crate::error::LookupError;
use crate::model::{AssetKind, AssetPath, SpriteRef};

/// The complete asset inventory of a project at scan time.
///
/// `paths()` order is authoritative: scan results preserve it.
pub trait AssetInventory {
    /// Every asset path in the project, in inventory order.
    fn paths(&self) -> &[AssetPath];

    /// Kind of the given asset. Unknown paths are regular assets.
    fn kind(&self, path: &AssetPath) -> AssetKind;

    /// Sprite sub-assets of a sheet texture. Empty for everything else.
    fn sprites(&self, path: &AssetPath) -> &[SpriteRef];
}

/// Declared outgoing dependency lists, queryable per asset.
///
/// By host convention a list includes the asset itself, so a list of
/// length one means "depends on nothing but itself". A failed query is a
/// per-asset condition the scanner recovers from (the asset is classified
/// "used"); implementations must not panic.
pub trait DependencyIndex {
    fn dependencies(&self, path: &AssetPath) -> Result<&[AssetPath], LookupError>;
}
