//! Errors raised while loading ontology documents.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::syntax::Syntax;

/// One parser's failure to read a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserFailure {
    /// Syntax that was attempted.
    pub syntax: Syntax,
    /// The parser's message.
    pub message: String,
}

impl fmt::Display for ParserFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.syntax.parser_name(), self.message)
    }
}

/// Why a document (or one of its imports) could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document does not exist or cannot be read.
    #[error("document not found: {location}")]
    NotFound {
        /// Path or IRI that was requested.
        location: String,
        /// Underlying I/O error for local files.
        #[source]
        source: Option<std::io::Error>,
    },

    /// A remote fetch failed or network access is disabled.
    #[error("network access to {location} failed: {message}")]
    Network {
        /// IRI that was requested.
        location: String,
        /// Transport-level reason.
        message: String,
    },

    /// Every attempted parser rejected the document.
    #[error("no parser could read {location} ({})", summarize(.attempts))]
    Unparsable {
        /// Document IRI.
        location: String,
        /// Each attempted parser and its failure, in attempt order.
        attempts: Vec<ParserFailure>,
    },

    /// An `owl:imports` declaration could not be loaded.
    #[error("could not load import {declaration}: {cause}")]
    UnloadableImport {
        /// Target IRI of the failing `owl:imports` declaration.
        declaration: String,
        /// Why the import failed.
        #[source]
        cause: Box<LoadError>,
    },

    /// The document was read but does not form a usable ontology.
    #[error("could not create ontology from {location}: {message}")]
    Creation {
        /// Document path or IRI.
        location: String,
        /// What is wrong with it.
        message: String,
    },

    /// The configured timeout elapsed.
    #[error("loading {location} exceeded the {limit:?} deadline")]
    DeadlineExceeded {
        /// Document that was being loaded when the deadline passed.
        location: String,
        /// Configured limit.
        limit: Duration,
    },
}

impl LoadError {
    /// Follows nested import failures down to the innermost failing
    /// declaration and its direct cause.
    ///
    /// # Errors
    ///
    /// Hands the error back unchanged if it is not an import failure.
    pub fn into_innermost_import(self) -> Result<(String, LoadError), LoadError> {
        let (mut declaration, mut cause) = match self {
            LoadError::UnloadableImport { declaration, cause } => (declaration, *cause),
            other => return Err(other),
        };
        loop {
            match cause {
                LoadError::UnloadableImport {
                    declaration: inner,
                    cause: next,
                } => {
                    declaration = inner;
                    cause = *next;
                }
                other => return Ok((declaration, other)),
            }
        }
    }
}

fn summarize(attempts: &[ParserFailure]) -> String {
    if attempts.is_empty() {
        return "no parser attempted".to_owned();
    }
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn innermost_import_unwraps_nested_failures() -> Result<(), LoadError> {
        let err = LoadError::UnloadableImport {
            declaration: "http://example.org/a".into(),
            cause: Box::new(LoadError::UnloadableImport {
                declaration: "http://example.org/b".into(),
                cause: Box::new(LoadError::NotFound {
                    location: "/tmp/b.ttl".into(),
                    source: None,
                }),
            }),
        };
        let (declaration, cause) = err.into_innermost_import()?;
        assert_eq!(declaration, "http://example.org/b");
        assert!(matches!(cause, LoadError::NotFound { .. }));
        Ok(())
    }

    #[test]
    fn other_failures_are_not_import_failures() {
        let err = LoadError::Network {
            location: "http://example.org/a".into(),
            message: "refused".into(),
        };
        assert!(matches!(
            err.into_innermost_import(),
            Err(LoadError::Network { .. })
        ));
    }

    #[test]
    fn import_failure_exposes_its_cause_as_source() {
        use std::error::Error as _;

        let err = LoadError::UnloadableImport {
            declaration: "http://example.org/a".into(),
            cause: Box::new(LoadError::NotFound {
                location: "/tmp/a.ttl".into(),
                source: None,
            }),
        };
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("document not found: /tmp/a.ttl"));
    }

    #[test]
    fn unparsable_message_lists_every_parser() {
        let err = LoadError::Unparsable {
            location: "file:///tmp/x.owl".into(),
            attempts: vec![
                ParserFailure {
                    syntax: Syntax::RdfXml,
                    message: "unexpected end of file".into(),
                },
                ParserFailure {
                    syntax: Syntax::Turtle,
                    message: "expected '.'".into(),
                },
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("RdfXmlParser: unexpected end of file"), "{msg}");
        assert!(msg.contains("TurtleParser: expected '.'"), "{msg}");
    }
}
