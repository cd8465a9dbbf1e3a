/// Asset identity types.
///
/// Asset paths are project-relative, forward-slash strings exactly as the
/// host asset database reports them (`"Assets/Art/tex.png"`). They are
/// opaque identifiers: unique per asset and stable for the duration of a
/// scan. `CompactString` keeps the common short path inline on the stack.
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Project-relative path identifying a single asset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetPath(CompactString);

impl AssetPath {
    pub fn new(path: impl AsRef<str>) -> Self {
        Self(CompactString::new(path.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix match — used for protected directory subtrees.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Suffix match — used for protected file extensions.
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.0.ends_with(suffix)
    }

    /// Substring match — used for runtime-loaded directory segments
    /// (`/Resources/`, `/StreamingAssets/`) that can appear anywhere in
    /// the tree.
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    /// Whether this path names a metadata side-file rather than content.
    pub fn is_meta_file(&self) -> bool {
        self.0.ends_with(".meta")
    }

    /// Whether this path names a directory (trailing separator convention).
    pub fn is_directory(&self) -> bool {
        self.0.ends_with('/')
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Classification of an asset, deciding which reachability rule applies.
///
/// The manifest may state the kind explicitly; when absent it is derived
/// from the path (trailing `/` ⇒ directory, `.meta` suffix ⇒ meta file,
/// otherwise a regular asset). Sprite sheets cannot be derived from the
/// path alone and must be declared by the exporter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    /// Ordinary content asset — classified via its dependency list.
    #[default]
    Regular,
    /// Folder entry in the inventory. Never flagged unused.
    Directory,
    /// Asset-description companion file. Never flagged unused.
    MetaFile,
    /// Multi-sprite texture — classified via per-sprite reference counts.
    SpriteSheet,
}

impl AssetKind {
    /// Derive the kind from the path when the manifest does not state one.
    pub fn derive(path: &AssetPath) -> Self {
        if path.is_directory() {
            AssetKind::Directory
        } else if path.is_meta_file() {
            AssetKind::MetaFile
        } else {
            AssetKind::Regular
        }
    }
}

/// A named sub-asset (sprite) inside a sprite-sheet texture.
///
/// Sprites carry their own path-equivalent identity — the string that other
/// assets' dependency lists use to name them (by convention
/// `"<sheet-path>#<sprite-name>"`). Individual sprites never appear in scan
/// results; only their parent sheet does.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteRef {
    /// Sprite name within the sheet.
    pub name: CompactString,
    /// Identity used in dependency lists project-wide.
    pub id: AssetPath,
}

impl SpriteRef {
    pub fn new(name: impl AsRef<str>, id: impl AsRef<str>) -> Self {
        Self {
            name: CompactString::new(name.as_ref()),
            id: AssetPath::new(id),
        }
    }
}
