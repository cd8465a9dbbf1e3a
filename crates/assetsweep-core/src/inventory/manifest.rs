/// Asset-database snapshot manifest — the JSON interchange format.
///
/// A manifest is an export of the host project's asset database at a point
/// in time: the ordered asset list and, per asset, its kind, its sprite
/// sub-assets, and its declared dependency list. Dependency lists follow
/// the host convention of including the asset's own path.
///
/// ```json
/// {
///   "project": "MyGame",
///   "assets": [
///     { "path": "Assets/Art/tex.png",
///       "dependencies": ["Assets/Art/tex.png"] },
///     { "path": "Assets/Art/sheet.png",
///       "kind": "sprite_sheet",
///       "sprites": [ { "name": "run_0", "id": "Assets/Art/sheet.png#run_0" } ],
///       "dependencies": ["Assets/Art/sheet.png"] }
///   ]
/// }
/// ```
use crate::error::{LookupError, ManifestError};
use crate::inventory::{AssetInventory, DependencyIndex};
use crate::model::{AssetKind, AssetPath, SpriteRef};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One asset entry in the snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ManifestAsset {
    pub path: AssetPath,
    /// Explicit kind; derived from the path when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<AssetKind>,
    /// Sprite sub-assets (sprite sheets only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sprites: Vec<SpriteRef>,
    /// Declared outgoing dependencies, including the asset itself.
    #[serde(default)]
    pub dependencies: Vec<AssetPath>,
}

/// Top-level snapshot document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProjectManifest {
    #[serde(default)]
    pub project: String,
    pub assets: Vec<ManifestAsset>,
}

impl ProjectManifest {
    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Build the queryable in-memory index, rejecting duplicate paths.
    pub fn into_index(self) -> Result<InMemoryAssets, ManifestError> {
        let mut order = Vec::with_capacity(self.assets.len());
        let mut entries = HashMap::with_capacity(self.assets.len());

        for asset in self.assets {
            let kind = asset.kind.unwrap_or_else(|| AssetKind::derive(&asset.path));
            let entry = Entry {
                kind,
                sprites: asset.sprites,
                dependencies: asset.dependencies,
            };
            if entries.insert(asset.path.clone(), entry).is_some() {
                return Err(ManifestError::DuplicatePath(asset.path.to_string()));
            }
            order.push(asset.path);
        }

        Ok(InMemoryAssets { order, entries })
    }
}

#[derive(Clone, Debug)]
struct Entry {
    kind: AssetKind,
    sprites: Vec<SpriteRef>,
    dependencies: Vec<AssetPath>,
}

/// HashMap-backed implementation of both scan collaborators.
///
/// Every dependency query is an O(1) lookup into the loaded snapshot, so
/// the scanner's "memoized per query" requirement holds trivially.
#[derive(Clone, Debug)]
pub struct InMemoryAssets {
    order: Vec<AssetPath>,
    entries: HashMap<AssetPath, Entry>,
}

const NO_SPRITES: &[SpriteRef] = &[];

impl AssetInventory for InMemoryAssets {
    fn paths(&self) -> &[AssetPath] {
        &self.order
    }

    fn kind(&self, path: &AssetPath) -> AssetKind {
        self.entries.get(path).map(|e| e.kind).unwrap_or_default()
    }

    fn sprites(&self, path: &AssetPath) -> &[SpriteRef] {
        self.entries
            .get(path)
            .map(|e| e.sprites.as_slice())
            .unwrap_or(NO_SPRITES)
    }
}

impl DependencyIndex for InMemoryAssets {
    fn dependencies(&self, path: &AssetPath) -> Result<&[AssetPath], LookupError> {
        self.entries
            .get(path)
            .map(|e| e.dependencies.as_slice())
            .ok_or_else(|| LookupError {
                path: path.to_string(),
                message: "asset not present in snapshot".into(),
            })
    }
}
