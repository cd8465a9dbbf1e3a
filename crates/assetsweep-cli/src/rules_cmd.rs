/// `rules` subcommand — print the effective exclusion rules.
use anyhow::Context;
use assetsweep_core::rules::ExclusionRules;
use std::path::Path;

/// Load rules from a file, or fall back to the built-in defaults.
pub(crate) fn load_rules(path: Option<&Path>) -> anyhow::Result<ExclusionRules> {
    let rules = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read rules file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid rules file {}", path.display()))?
        }
        None => ExclusionRules::default(),
    };
    rules.validate()?;
    Ok(rules)
}

pub(crate) fn run(rules_path: Option<&Path>) -> anyhow::Result<()> {
    let rules = load_rules(rules_path)?;
    println!("{}", serde_json::to_string_pretty(&rules)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_load_without_a_file() {
        let rules = load_rules(None).unwrap();
        assert!(!rules.prefixes.is_empty());
    }

    #[test]
    fn rules_file_replaces_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "prefixes": ["Assets/Vendor/"] }}"#).unwrap();
        let rules = load_rules(Some(file.path())).unwrap();
        assert_eq!(rules.prefixes, ["Assets/Vendor/"]);
        assert!(rules.suffixes.is_empty());
    }

    #[test]
    fn malformed_rules_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "prefixes": [""] }}"#).unwrap();
        assert!(load_rules(Some(file.path())).is_err());
    }

    #[test]
    fn missing_rules_file_is_an_error() {
        assert!(load_rules(Some(Path::new("/nonexistent/rules.json"))).is_err());
    }
}
