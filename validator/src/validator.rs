//! The ontology validator.

use std::time::{Duration, Instant};

use owlet_ontology::{DocumentLoader, DocumentSource, LoaderConfig, Ontology, OntologyLoader};
use owlet_reasoner::{Reasoner, ReasonerFactory, StructuralReasonerFactory};
use tracing::Dispatch;

use crate::error::ValidationError;

/// Loads an ontology document, hands it to a fresh reasoner and reports
/// whether it is consistent.
///
/// The validator holds no per-call state: every call builds its own
/// ontology and its own reasoner, so one validator can serve any number of
/// calls, from any number of threads when `L` and `F` allow it.
#[derive(Debug, Clone)]
pub struct OntologyValidator<L = DocumentLoader, F = StructuralReasonerFactory> {
    loader: L,
    factory: F,
    logger: Option<Dispatch>,
}

impl OntologyValidator {
    /// Creates a validator with the default loader and the structural reasoner.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(DocumentLoader::new(), StructuralReasonerFactory)
    }
}

impl Default for OntologyValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: OntologyLoader, F: ReasonerFactory> OntologyValidator<L, F> {
    /// Creates a validator from a loader and a reasoner factory.
    pub fn with_parts(loader: L, factory: F) -> Self {
        Self {
            loader,
            factory,
            logger: None,
        }
    }

    /// Routes this validator's logs to `logger` instead of the global
    /// subscriber.
    #[must_use]
    pub fn with_logger(mut self, logger: Dispatch) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Validates the document at `path` (a file path or an IRI).
    ///
    /// Returns `Ok(true)` if the ontology is consistent and `Ok(false)` if
    /// it was loaded but is inconsistent.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the document or one of its imports
    /// cannot be loaded, or the reasoner cannot be built.
    pub fn validate(&self, path: &str, config: &LoaderConfig) -> Result<bool, ValidationError> {
        self.call("validate", path, config, |_, reasoner| reasoner.is_consistent())
    }

    /// Like [`validate`](Self::validate), but hands back the loaded
    /// ontology and its reasoner for further queries.
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate).
    pub fn analyze(
        &self,
        path: &str,
        config: &LoaderConfig,
    ) -> Result<(Ontology, F::Reasoner), ValidationError> {
        self.call("analyze", path, config, |ontology, reasoner| (ontology, reasoner))
    }

    fn call<T>(
        &self,
        operation: &str,
        path: &str,
        config: &LoaderConfig,
        finish: impl FnOnce(Ontology, F::Reasoner) -> T,
    ) -> Result<T, ValidationError> {
        let run = || {
            let started = Instant::now();
            tracing::info!(operation, path, "BEGIN");
            let result = self.run(path, config, started).map(|(o, r)| finish(o, r));
            match &result {
                Ok(_) => tracing::info!(
                    operation,
                    path,
                    elapsed_ms = millis(started.elapsed()),
                    "END"
                ),
                Err(e) => tracing::error!(
                    operation,
                    path,
                    config = ?config,
                    kind = e.kind(),
                    error = %e,
                    "END with error"
                ),
            }
            result
        };
        match &self.logger {
            Some(logger) => tracing::dispatcher::with_default(logger, run),
            None => run(),
        }
    }

    fn run(
        &self,
        path: &str,
        config: &LoaderConfig,
        started: Instant,
    ) -> Result<(Ontology, F::Reasoner), ValidationError> {
        let source = DocumentSource::parse(path);
        let ontology = self
            .loader
            .load(&source, config)
            .map_err(|e| ValidationError::from_load(path, e))?;
        tracing::info!(
            ontology = %ontology.id,
            document = %ontology.document_iri,
            syntax = %ontology.syntax,
            imports = ontology.closure().count().saturating_sub(1),
            triples = ontology.closure_len(),
            "loaded ontology"
        );
        check_deadline(path, config, started)?;

        tracing::info!(reasoner = self.factory.name(), "invoking reasoner");
        let reasoner = self
            .factory
            .create_reasoner(&ontology)
            .map_err(|e| ValidationError::unexpected(path, config, e))?;
        check_deadline(path, config, started)?;

        tracing::info!(consistent = reasoner.is_consistent(), "reasoner finished");
        Ok((ontology, reasoner))
    }
}

fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn check_deadline(path: &str, config: &LoaderConfig, started: Instant) -> Result<(), ValidationError> {
    match config.timeout {
        Some(limit) if started.elapsed() >= limit => Err(ValidationError::DeadlineExceeded {
            path: path.to_owned(),
            limit,
        }),
        _ => Ok(()),
    }
}
