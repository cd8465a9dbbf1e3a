/// Data-driven exclusion rules — protected directories and extensions.
///
/// Assets matching any rule are never candidates for the unused list,
/// regardless of what the dependency index says about them. The rule list
/// is plain data (serde-loadable) so projects can extend it — e.g. add a
/// vendored UI package directory — without touching the algorithm.
///
/// Matching semantics are fixed per list: prefix match for directory
/// subtrees, substring match for runtime-loaded directory segments that can
/// appear anywhere in the tree, suffix match for file extensions.
use crate::error::ConfigError;
use crate::model::AssetPath;
use serde::{Deserialize, Serialize};

/// Exclusion rule lists, checked in order: prefixes, substrings, suffixes.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExclusionRules {
    /// Directory subtrees, matched against the start of the path.
    #[serde(default)]
    pub prefixes: Vec<String>,
    /// Path segments matched anywhere (e.g. `/Resources/`).
    #[serde(default)]
    pub substrings: Vec<String>,
    /// File suffixes (e.g. `.prefs`), matched against the end of the path.
    #[serde(default)]
    pub suffixes: Vec<String>,
}

impl Default for ExclusionRules {
    /// The stock protected set: editor tooling, runtime-loaded resources,
    /// streaming assets, third-party packages, project settings, the usual
    /// vendored asset packages, and preferences files.
    fn default() -> Self {
        Self {
            prefixes: vec![
                "Assets/Editor".into(),
                "Packages/".into(),
                "ProjectSettings/".into(),
                "Assets/Standard Assets/".into(),
                "Assets/TextMesh Pro/".into(),
                "Assets/PostProcessing/".into(),
            ],
            substrings: vec!["/Resources/".into(), "/StreamingAssets/".into()],
            suffixes: vec![".prefs".into()],
        }
    }
}

impl ExclusionRules {
    /// Reject malformed rule lists before any per-asset work.
    ///
    /// An empty pattern would match every path and silently protect the
    /// whole project, so it is a configuration error rather than a no-op.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (list, patterns) in [
            ("prefixes", &self.prefixes),
            ("substrings", &self.substrings),
            ("suffixes", &self.suffixes),
        ] {
            if patterns.iter().any(|p| p.is_empty()) {
                return Err(ConfigError::EmptyPattern { list });
            }
        }
        Ok(())
    }

    /// Whether the path is protected by any rule.
    pub fn is_excluded(&self, path: &AssetPath) -> bool {
        self.prefixes.iter().any(|p| path.starts_with(p))
            || self.substrings.iter().any(|s| path.contains(s))
            || self.suffixes.iter().any(|s| path.ends_with(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> AssetPath {
        AssetPath::new(s)
    }

    #[test]
    fn default_rules_protect_editor_subtree() {
        let rules = ExclusionRules::default();
        assert!(rules.is_excluded(&path("Assets/Editor/Foo.cs")));
        // Prefix semantics: "Assets/Editor" also matches "Assets/EditorTools".
        assert!(rules.is_excluded(&path("Assets/EditorTools/Bar.cs")));
    }

    #[test]
    fn default_rules_protect_runtime_directories_anywhere() {
        let rules = ExclusionRules::default();
        assert!(rules.is_excluded(&path("Assets/Game/Resources/table.json")));
        assert!(rules.is_excluded(&path("Assets/StreamingAssets/video.mp4")));
        // Substring semantics require the surrounding slashes, so a
        // top-level "StreamingAssets" folder is not protected.
        assert!(!rules.is_excluded(&path("StreamingAssets/video.mp4")));
    }

    #[test]
    fn default_rules_protect_packages_and_settings() {
        let rules = ExclusionRules::default();
        assert!(rules.is_excluded(&path("Packages/com.example.ui/Runtime/Text.cs")));
        assert!(rules.is_excluded(&path("ProjectSettings/TagManager.asset")));
        assert!(rules.is_excluded(&path("Assets/TextMesh Pro/Fonts/Arial.asset")));
        assert!(rules.is_excluded(&path("Assets/PostProcessing/Runtime/Bloom.cs")));
        assert!(rules.is_excluded(&path("Assets/Standard Assets/Water/Water.shader")));
    }

    #[test]
    fn default_rules_protect_prefs_extension() {
        let rules = ExclusionRules::default();
        assert!(rules.is_excluded(&path("Assets/Settings/user.prefs")));
    }

    #[test]
    fn ordinary_content_is_not_excluded() {
        let rules = ExclusionRules::default();
        assert!(!rules.is_excluded(&path("Assets/Art/tex.png")));
        assert!(!rules.is_excluded(&path("Assets/Prefabs/Enemy.prefab")));
    }

    #[test]
    fn custom_rules_extend_protection() {
        let rules = ExclusionRules {
            prefixes: vec!["Assets/ThirdParty/".into()],
            substrings: vec![],
            suffixes: vec![".generated.cs".into()],
        };
        assert!(rules.is_excluded(&path("Assets/ThirdParty/lib.dll")));
        assert!(rules.is_excluded(&path("Assets/Code/Ui.generated.cs")));
        assert!(!rules.is_excluded(&path("Assets/Editor/Foo.cs")));
    }

    #[test]
    fn empty_pattern_is_rejected() {
        let rules = ExclusionRules {
            prefixes: vec!["".into()],
            substrings: vec![],
            suffixes: vec![],
        };
        assert!(matches!(
            rules.validate(),
            Err(ConfigError::EmptyPattern { list: "prefixes" })
        ));
    }

    #[test]
    fn default_rules_validate() {
        assert!(ExclusionRules::default().validate().is_ok());
    }

    #[test]
    fn rules_deserialize_from_json() {
        let json = r#"{ "prefixes": ["Assets/Vendor/"], "suffixes": [".bak"] }"#;
        let rules: ExclusionRules = serde_json::from_str(json).unwrap();
        assert!(rules.is_excluded(&path("Assets/Vendor/x.png")));
        assert!(rules.is_excluded(&path("Assets/old.bak")));
        assert!(rules.substrings.is_empty());
    }
}
