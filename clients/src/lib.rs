//! Flags and helpers shared by the owlet command-line tools.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Args};
use owlet_ontology::{
    DocumentLoader, DocumentSource, ImportPolicy, LoaderConfig, MissingImportHandling,
    NetworkPolicy, Ontology, OntologyLoader, Syntax,
};
use owlet_validator::{logging, ValidatorConfig};

/// Loader and logging flags accepted by every tool.
#[derive(Debug, Default, Args)]
pub struct LoaderArgs {
    /// TOML configuration file; flags below override it.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not follow owl:imports.
    #[arg(long)]
    pub no_imports: bool,

    /// Skip imports that cannot be loaded instead of failing.
    #[arg(long)]
    pub silent_imports: bool,

    /// Never fetch remote documents.
    #[arg(long)]
    pub offline: bool,

    /// Require an owl:Ontology header and well-formed restrictions.
    #[arg(long)]
    pub strict: bool,

    /// Give up after this many seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Parse with this syntax only (rdfxml, turtle, ntriples).
    #[arg(long)]
    pub syntax: Option<Syntax>,

    /// More log output (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Errors only.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl LoaderArgs {
    /// Log verbosity: `-1` for `--quiet`, otherwise the `-v` count.
    #[must_use]
    pub fn verbosity(&self) -> i8 {
        if self.quiet {
            -1
        } else {
            i8::try_from(self.verbose).unwrap_or(i8::MAX)
        }
    }

    /// Installs the stderr logger.
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger is already installed.
    pub fn init_logging(&self) -> Result<()> {
        logging::init_logging(self.verbosity())
    }

    /// Builds the loader configuration: the config file first, then flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed.
    pub fn loader_config(&self) -> Result<LoaderConfig> {
        let mut config = match &self.config {
            Some(path) => ValidatorConfig::from_file(path)?.loader_config(),
            None => LoaderConfig::default(),
        };
        if self.no_imports {
            config.imports = ImportPolicy::Ignore;
        }
        if self.silent_imports {
            config.missing_imports = MissingImportHandling::Silent;
        }
        if self.offline {
            config.network = NetworkPolicy::Deny;
        }
        if self.strict {
            config.strict = true;
        }
        if let Some(secs) = self.timeout {
            config.timeout = Some(Duration::from_secs(secs));
        }
        if self.syntax.is_some() {
            config.syntax = self.syntax;
        }
        tracing::debug!(?config, "loader configuration");
        Ok(config)
    }

    /// Loads one document with these flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or the document cannot be loaded.
    pub fn load(&self, document: &str) -> Result<Ontology> {
        let config = self.loader_config()?;
        DocumentLoader::new()
            .load(&DocumentSource::parse(document), &config)
            .with_context(|| format!("Failed to load {document}"))
    }
}

/// Writes `text` to `out`, or to stdout when `out` is `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn emit(out: Option<&PathBuf>, text: &str) -> Result<()> {
    match out {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn flags_override_config_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("owlet.toml");
        std::fs::write(&path, "[loader]\nimports = \"load\"\ntimeout_secs = 10\n")?;
        let args = LoaderArgs {
            config: Some(path),
            no_imports: true,
            offline: true,
            timeout: Some(3),
            ..LoaderArgs::default()
        };
        let config = args.loader_config()?;
        assert_eq!(config.imports, ImportPolicy::Ignore);
        assert_eq!(config.network, NetworkPolicy::Deny);
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
        Ok(())
    }

    #[test]
    fn verbosity_follows_flags() {
        let args = LoaderArgs {
            verbose: 2,
            ..LoaderArgs::default()
        };
        assert_eq!(args.verbosity(), 2);
        let args = LoaderArgs {
            quiet: true,
            ..LoaderArgs::default()
        };
        assert_eq!(args.verbosity(), -1);
    }
}
