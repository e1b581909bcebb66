//! TOML configuration for the validator and the command-line tools.
//!
//! ```toml
//! [loader]
//! imports = "load"          # load | ignore
//! missing_imports = "throw" # throw | silent
//! network = "allow"         # allow | deny
//! strict = false
//! syntax = "turtle"         # rdfxml | turtle | ntriples
//! timeout_secs = 30
//!
//! [loader.iri_mappings]
//! "http://example.org/base" = "ontologies/base.ttl"
//! ```
//!
//! Relative mapping paths are resolved against the directory of the
//! configuration file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use owlet_ontology::{ImportPolicy, LoaderConfig, MissingImportHandling, NetworkPolicy, Syntax};
use serde::Deserialize;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Options forwarded to the loader.
    #[serde(default)]
    pub loader: LoaderSection,
}

/// The `[loader]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoaderSection {
    /// Whether `owl:imports` are followed.
    pub imports: ImportPolicy,
    /// Failure handling for imports.
    pub missing_imports: MissingImportHandling,
    /// Remote access.
    pub network: NetworkPolicy,
    /// Strict structural checks.
    pub strict: bool,
    /// Forced syntax.
    pub syntax: Option<Syntax>,
    /// Deadline for one validation, in seconds.
    pub timeout_secs: Option<u64>,
    /// Import IRI to local file redirections.
    pub iri_mappings: BTreeMap<String, PathBuf>,
}

impl ValidatorConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or contains unknown keys.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse validator configuration")
    }

    /// Reads a configuration file, resolving relative mapping paths against
    /// the file's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config = Self::from_toml(&text)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        if let Some(dir) = path.parent() {
            for target in config.loader.iri_mappings.values_mut() {
                if target.is_relative() {
                    *target = dir.join(&*target);
                }
            }
        }
        Ok(config)
    }

    /// The loader options this configuration describes.
    #[must_use]
    pub fn loader_config(&self) -> LoaderConfig {
        let l = &self.loader;
        LoaderConfig {
            imports: l.imports,
            missing_imports: l.missing_imports,
            network: l.network,
            strict: l.strict,
            syntax: l.syntax,
            timeout: l.timeout_secs.map(Duration::from_secs),
            iri_mappings: l.iri_mappings.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn empty_file_gives_defaults() -> TestResult {
        let config = ValidatorConfig::from_toml("")?;
        assert_eq!(config.loader_config(), LoaderConfig::default());
        Ok(())
    }

    #[test]
    fn full_loader_section() -> TestResult {
        let config = ValidatorConfig::from_toml(
            r#"
            [loader]
            imports = "ignore"
            missing_imports = "silent"
            network = "deny"
            strict = true
            syntax = "turtle"
            timeout_secs = 5

            [loader.iri_mappings]
            "http://example.org/base" = "base.ttl"
            "#,
        )?;
        let loader = config.loader_config();
        assert_eq!(loader.imports, ImportPolicy::Ignore);
        assert_eq!(loader.missing_imports, MissingImportHandling::Silent);
        assert_eq!(loader.network, NetworkPolicy::Deny);
        assert!(loader.strict);
        assert_eq!(loader.syntax, Some(Syntax::Turtle));
        assert_eq!(loader.timeout, Some(Duration::from_secs(5)));
        assert_eq!(
            loader.iri_mappings.get("http://example.org/base"),
            Some(&PathBuf::from("base.ttl"))
        );
        Ok(())
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ValidatorConfig::from_toml("[loader]\nfollow_imports = true\n").is_err());
        assert!(ValidatorConfig::from_toml("[reasoner]\n").is_err());
    }

    #[test]
    fn relative_mappings_resolve_against_config_dir() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("owlet.toml");
        std::fs::write(
            &path,
            "[loader.iri_mappings]\n\"http://example.org/base\" = \"onto/base.ttl\"\n",
        )?;
        let config = ValidatorConfig::from_file(&path)?;
        assert_eq!(
            config.loader.iri_mappings.get("http://example.org/base"),
            Some(&dir.path().join("onto/base.ttl"))
        );
        Ok(())
    }
}
