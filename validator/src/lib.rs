//! owlet ontology validator.
//!
//! This crate ties the loader and the reasoner together: an
//! [`OntologyValidator`] loads a document (and, by default, its
//! `owl:imports` closure), hands it to a freshly built reasoner, and answers
//! whether the ontology is consistent. Every way loading can fail maps to
//! exactly one [`ValidationError`] variant.
//!
//! | Outcome | Result |
//! |---------|--------|
//! | Consistent | `Ok(true)` |
//! | Loaded, inconsistent | `Ok(false)` |
//! | Missing document | `Err(DocumentNotFound)` |
//! | Fetch failure (document or import) | `Err(NetworkUnreachable)` |
//! | No parser could read it | `Err(ParseFailure)` |
//! | Import failed to load | `Err(ImportUnloadable)` |
//! | Structurally unusable | `Err(OntologyCreationFailure)` |
//! | Timeout elapsed | `Err(DeadlineExceeded)` |
//! | Anything else | `Err(Unexpected)` |
//!
//! # Entry Point
//!
//! ```no_run
//! use owlet_validator::{LoaderConfig, OntologyValidator};
//!
//! let validator = OntologyValidator::new();
//! let consistent = validator.validate("ontologies/pizza.owl", &LoaderConfig::default())?;
//! println!("consistent: {consistent}");
//! # Ok::<(), owlet_validator::ValidationError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod checks;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod tests;
pub mod validator;

pub use config::ValidatorConfig;
pub use error::ValidationError;
pub use owlet_ontology::LoaderConfig;
pub use report::{CheckResult, Report, Severity};
pub use validator::OntologyValidator;
