//! The error taxonomy of a validation call.
//!
//! Every loader failure is translated into exactly one [`ValidationError`]
//! variant; anything the taxonomy does not cover ends up in
//! [`ValidationError::Unexpected`] with the path and configuration attached.

use std::time::Duration;

use owlet_ontology::{LoadError, LoaderConfig, ParserFailure};
use thiserror::Error;

/// Why an ontology could not be validated.
///
/// An inconsistent ontology is not an error: it is `Ok(false)`.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The document does not exist or cannot be read.
    #[error("ontology document not found: {path}")]
    DocumentNotFound {
        /// Requested path or IRI.
        path: String,
        /// Underlying I/O error, for local files.
        #[source]
        source: Option<std::io::Error>,
    },

    /// A remote document or import could not be fetched.
    #[error("network unreachable for {location}{}: {message}", import_note(.import))]
    NetworkUnreachable {
        /// IRI whose fetch failed.
        location: String,
        /// Import declaration that led to the fetch, if it was an import.
        import: Option<String>,
        /// Transport-level reason.
        message: String,
    },

    /// No parser could read the document.
    #[error("could not parse {path}: {}", attempts_note(.attempts))]
    ParseFailure {
        /// Document that failed to parse.
        path: String,
        /// Each attempted parser and its failure, in attempt order.
        attempts: Vec<ParserFailure>,
    },

    /// An `owl:imports` target could not be loaded.
    #[error("import {declaration} could not be loaded: {cause}")]
    ImportUnloadable {
        /// Target IRI of the failing declaration.
        declaration: String,
        /// The failure for that import.
        #[source]
        cause: Box<LoadError>,
    },

    /// The document was read but does not form a usable ontology.
    #[error("could not create ontology from {path}: {message}")]
    OntologyCreationFailure {
        /// Document path or IRI.
        path: String,
        /// What is wrong with it.
        message: String,
    },

    /// The configured timeout elapsed.
    #[error("validating {path} exceeded the {limit:?} deadline")]
    DeadlineExceeded {
        /// Requested path.
        path: String,
        /// Configured limit.
        limit: Duration,
    },

    /// Any other failure.
    #[error("unexpected failure validating {path} (config: {config}): {source}")]
    Unexpected {
        /// Requested path.
        path: String,
        /// The configuration in effect, rendered with `Debug`.
        config: String,
        /// The original error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

fn import_note(import: &Option<String>) -> String {
    match import {
        Some(declaration) => format!(" (import {declaration})"),
        None => String::new(),
    }
}

fn attempts_note(attempts: &[ParserFailure]) -> String {
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Translates a loader failure for the document requested as `path`.
    #[must_use]
    pub fn from_load(path: &str, err: LoadError) -> Self {
        let err = match err.into_innermost_import() {
            Ok((declaration, cause)) => return Self::from_import(declaration, cause),
            Err(err) => err,
        };
        match err {
            LoadError::NotFound { source, .. } => ValidationError::DocumentNotFound {
                path: path.to_owned(),
                source,
            },
            LoadError::Network { location, message } => ValidationError::NetworkUnreachable {
                location,
                import: None,
                message,
            },
            LoadError::Unparsable { location, attempts } => ValidationError::ParseFailure {
                path: location,
                attempts,
            },
            LoadError::Creation { location, message } => {
                ValidationError::OntologyCreationFailure {
                    path: location,
                    message,
                }
            }
            LoadError::DeadlineExceeded { limit, .. } => ValidationError::DeadlineExceeded {
                path: path.to_owned(),
                limit,
            },
            LoadError::UnloadableImport { declaration, cause } => {
                Self::from_import(declaration, *cause)
            }
        }
    }

    /// Network failures keep their own variant even when an import caused
    /// them; every other import failure is reported against `declaration`,
    /// the innermost failing one.
    fn from_import(declaration: String, cause: LoadError) -> Self {
        match cause {
            LoadError::Network { location, message } => ValidationError::NetworkUnreachable {
                location,
                import: Some(declaration),
                message,
            },
            LoadError::DeadlineExceeded { location, limit } => {
                ValidationError::DeadlineExceeded {
                    path: location,
                    limit,
                }
            }
            cause => ValidationError::ImportUnloadable {
                declaration,
                cause: Box::new(cause),
            },
        }
    }

    /// Wraps any other error with the call's context.
    #[must_use]
    pub fn unexpected(
        path: &str,
        config: &LoaderConfig,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        ValidationError::Unexpected {
            path: path.to_owned(),
            config: format!("{config:?}"),
            source: source.into(),
        }
    }

    /// Short variant name for logs and exit summaries.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::DocumentNotFound { .. } => "DocumentNotFound",
            ValidationError::NetworkUnreachable { .. } => "NetworkUnreachable",
            ValidationError::ParseFailure { .. } => "ParseFailure",
            ValidationError::ImportUnloadable { .. } => "ImportUnloadable",
            ValidationError::OntologyCreationFailure { .. } => "OntologyCreationFailure",
            ValidationError::DeadlineExceeded { .. } => "DeadlineExceeded",
            ValidationError::Unexpected { .. } => "Unexpected",
        }
    }
}
