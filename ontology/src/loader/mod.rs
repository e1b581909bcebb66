//! Ontology document loading.
//!
//! [`DocumentLoader`] reads a document from a file or an `http(s):` IRI,
//! tries each registered parser in turn, and then follows the document's
//! `owl:imports` declarations according to the [`LoaderConfig`]:
//!
//! - the parser guessed from the extension or media type goes first, the
//!   others follow; the first parser that succeeds wins
//! - imports are loaded depth first; ontologies already loaded in the same
//!   call (by ontology IRI or document IRI) are skipped, so import cycles end
//! - `iri_mappings` redirect an import IRI to a local file before any
//!   network access is attempted
//! - blank node labels are prefixed per document so two documents never
//!   share a blank node

pub mod fetch;
pub mod source;

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, ParserFailure};
use crate::model::{Ontology, Term, Triple};
use crate::restrictions;
use crate::syntax::Syntax;

pub use source::DocumentSource;

/// Whether `owl:imports` declarations are followed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportPolicy {
    /// Load every import transitively.
    #[default]
    Load,
    /// Load only the requested document.
    Ignore,
}

/// What happens when an import cannot be loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingImportHandling {
    /// Fail the whole load with [`LoadError::UnloadableImport`].
    #[default]
    Throw,
    /// Log a warning and continue without the import.
    Silent,
}

/// Whether remote documents may be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkPolicy {
    /// Fetch `http(s):` documents.
    #[default]
    Allow,
    /// Treat every remote fetch as a network failure.
    Deny,
}

/// Options forwarded to the loader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Import handling.
    pub imports: ImportPolicy,
    /// Failure handling for imports.
    pub missing_imports: MissingImportHandling,
    /// Remote access.
    pub network: NetworkPolicy,
    /// Require an `owl:Ontology` header and well-formed restrictions.
    pub strict: bool,
    /// Parse with this syntax only instead of sniffing.
    pub syntax: Option<Syntax>,
    /// Upper bound for the whole load, imports included.
    pub timeout: Option<Duration>,
    /// Import IRI to local file redirections.
    pub iri_mappings: BTreeMap<String, PathBuf>,
}

/// Loads ontology documents.
///
/// Implementations must not keep state between calls: each call gets a
/// fresh [`Ontology`] that the caller owns.
pub trait OntologyLoader {
    /// Loads `source` and, depending on `config`, its imports closure.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] describing the first failure.
    fn load(&self, source: &DocumentSource, config: &LoaderConfig) -> Result<Ontology, LoadError>;
}

/// The default loader: local files and HTTP(S), RDF/XML, Turtle and N-Triples.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentLoader;

impl DocumentLoader {
    /// Creates a loader.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl OntologyLoader for DocumentLoader {
    fn load(&self, source: &DocumentSource, config: &LoaderConfig) -> Result<Ontology, LoadError> {
        let mut session = Session {
            config,
            started: Instant::now(),
            loaded: HashSet::new(),
            documents: 0,
        };
        session.load_document(source)
    }
}

/// State for one `load` call.
struct Session<'a> {
    config: &'a LoaderConfig,
    started: Instant,
    /// Ontology IRIs, document IRIs and import IRIs already handled.
    loaded: HashSet<String>,
    /// Number of documents parsed so far, used for blank node scoping.
    documents: usize,
}

impl Session<'_> {
    fn load_document(&mut self, source: &DocumentSource) -> Result<Ontology, LoadError> {
        let location = source.location();
        let remaining = self.remaining(&location)?;

        let fetched = fetch::fetch(source, self.config.network, remaining)?;
        self.remaining(&location)?;

        let text = std::str::from_utf8(&fetched.bytes).map_err(|e| LoadError::Unparsable {
            location: fetched.document_iri.clone(),
            attempts: self
                .candidates(fetched.hint)
                .into_iter()
                .map(|syntax| ParserFailure {
                    syntax,
                    message: format!("document is not valid UTF-8: {e}"),
                })
                .collect(),
        })?;

        let (syntax, triples) = self.parse(text, &fetched.document_iri, fetched.hint)?;
        let triples = self.scope_blank_nodes(triples);
        let mut ontology = Ontology::from_triples(fetched.document_iri, syntax, triples);
        tracing::debug!(
            document = %ontology.document_iri,
            syntax = %syntax,
            triples = ontology.triples.len(),
            "parsed document"
        );

        if self.config.strict {
            check_strict(&ontology)?;
        }

        self.loaded.insert(ontology.document_iri.clone());
        if let Some(iri) = &ontology.id.iri {
            self.loaded.insert(iri.clone());
        }

        if self.config.imports == ImportPolicy::Load {
            self.load_imports(&mut ontology)?;
        }
        Ok(ontology)
    }

    fn load_imports(&mut self, ontology: &mut Ontology) -> Result<(), LoadError> {
        for declaration in ontology.import_declarations.clone() {
            if !self.loaded.insert(declaration.clone()) {
                tracing::debug!(import = %declaration, "import already loaded");
                continue;
            }
            let source = match self.config.iri_mappings.get(&declaration) {
                Some(path) => DocumentSource::File(path.clone()),
                None => DocumentSource::parse(&declaration),
            };
            tracing::debug!(import = %declaration, source = %source, "loading import");
            match self.load_document(&source) {
                Ok(imported) => ontology.imports.push(imported),
                Err(err @ LoadError::DeadlineExceeded { .. }) => return Err(err),
                Err(cause) => match self.config.missing_imports {
                    MissingImportHandling::Throw => {
                        return Err(LoadError::UnloadableImport {
                            declaration,
                            cause: Box::new(cause),
                        })
                    }
                    MissingImportHandling::Silent => {
                        tracing::warn!(
                            import = %declaration,
                            error = %cause,
                            "skipping import that could not be loaded"
                        );
                    }
                },
            }
        }
        Ok(())
    }

    fn candidates(&self, hint: Option<Syntax>) -> Vec<Syntax> {
        match self.config.syntax {
            Some(forced) => vec![forced],
            None => Syntax::candidates(hint),
        }
    }

    fn parse(
        &self,
        text: &str,
        document_iri: &str,
        hint: Option<Syntax>,
    ) -> Result<(Syntax, Vec<Triple>), LoadError> {
        let mut attempts = Vec::new();
        for syntax in self.candidates(hint) {
            match syntax.parse(text, document_iri) {
                Ok(triples) => {
                    if !attempts.is_empty() {
                        tracing::debug!(
                            document = document_iri,
                            syntax = %syntax,
                            failed = attempts.len(),
                            "parsed after earlier parsers failed"
                        );
                    }
                    return Ok((syntax, triples));
                }
                Err(message) => attempts.push(ParserFailure { syntax, message }),
            }
        }
        Err(LoadError::Unparsable {
            location: document_iri.to_owned(),
            attempts,
        })
    }

    fn scope_blank_nodes(&mut self, triples: Vec<Triple>) -> Vec<Triple> {
        let scope = self.documents;
        self.documents += 1;
        let rename = |term: Term| match term {
            Term::BlankNode(id) => Term::BlankNode(format!("d{scope}b{id}")),
            other => other,
        };
        triples
            .into_iter()
            .map(|t| Triple {
                subject: rename(t.subject),
                predicate: t.predicate,
                object: rename(t.object),
            })
            .collect()
    }

    /// Time left before the deadline, or an error if it has passed.
    fn remaining(&self, location: &str) -> Result<Option<Duration>, LoadError> {
        let Some(limit) = self.config.timeout else {
            return Ok(None);
        };
        match limit.checked_sub(self.started.elapsed()) {
            Some(left) if !left.is_zero() => Ok(Some(left)),
            _ => Err(LoadError::DeadlineExceeded {
                location: location.to_owned(),
                limit,
            }),
        }
    }
}

fn check_strict(ontology: &Ontology) -> Result<(), LoadError> {
    let mut problems = Vec::new();
    if !ontology.has_header {
        problems.push("document has no owl:Ontology header".to_owned());
    }
    for bad in restrictions::check(&ontology.triples)
        .into_iter()
        .filter(|b| b.issue.is_error())
    {
        problems.push(bad.to_string());
    }
    if problems.is_empty() {
        return Ok(());
    }
    Err(LoadError::Creation {
        location: ontology.document_iri.clone(),
        message: problems.join("; "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const BASE_TTL: &str = r#"
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        @prefix ex: <http://example.org/base#> .
        <http://example.org/base> a owl:Ontology .
        ex:Person a owl:Class .
    "#;

    fn write(dir: &Path, name: &str, content: &str) -> Result<PathBuf, std::io::Error> {
        let path = dir.join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    fn importing(target: &str) -> String {
        format!(
            "@prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
             <http://example.org/main> a owl:Ontology ; owl:imports <{target}> .\n"
        )
    }

    #[test]
    fn loads_document_with_mapped_import() -> TestResult {
        let dir = tempfile::tempdir()?;
        let base = write(dir.path(), "base.ttl", BASE_TTL)?;
        let main = write(dir.path(), "main.ttl", &importing("http://example.org/base"))?;
        let mut config = LoaderConfig::default();
        config.iri_mappings.insert("http://example.org/base".into(), base);

        let onto = DocumentLoader.load(&DocumentSource::File(main), &config)?;
        assert_eq!(onto.id.iri.as_deref(), Some("http://example.org/main"));
        assert_eq!(onto.imports.len(), 1);
        assert_eq!(onto.imports[0].id.iri.as_deref(), Some("http://example.org/base"));
        assert_eq!(onto.closure().count(), 2);
        Ok(())
    }

    #[test]
    fn import_cycles_terminate() -> TestResult {
        let dir = tempfile::tempdir()?;
        let a = dir.path().join("a.ttl");
        let b = dir.path().join("b.ttl");
        let root = fs::canonicalize(dir.path())?;
        let a_iri = source::path_to_file_iri(&root.join("a.ttl")).ok_or("no file IRI")?;
        let b_iri = source::path_to_file_iri(&root.join("b.ttl")).ok_or("no file IRI")?;
        fs::write(&a, importing(&b_iri))?;
        fs::write(&b, importing(&a_iri))?;

        let onto = DocumentLoader.load(&DocumentSource::File(a), &LoaderConfig::default())?;
        assert_eq!(onto.closure().count(), 2);
        Ok(())
    }

    #[test]
    fn missing_import_names_the_declaration() -> TestResult {
        let dir = tempfile::tempdir()?;
        let main = write(dir.path(), "main.ttl", &importing("file:///no/such/import.ttl"))?;
        let err = DocumentLoader
            .load(&DocumentSource::File(main), &LoaderConfig::default())
            .err();
        match err {
            Some(LoadError::UnloadableImport { declaration, cause }) => {
                assert_eq!(declaration, "file:///no/such/import.ttl");
                assert!(matches!(*cause, LoadError::NotFound { .. }));
            }
            other => return Err(format!("unexpected result: {other:?}").into()),
        }
        Ok(())
    }

    #[test]
    fn silent_missing_imports_are_skipped() -> TestResult {
        let dir = tempfile::tempdir()?;
        let main = write(dir.path(), "main.ttl", &importing("file:///no/such/import.ttl"))?;
        let config = LoaderConfig {
            missing_imports: MissingImportHandling::Silent,
            ..LoaderConfig::default()
        };
        let onto = DocumentLoader.load(&DocumentSource::File(main), &config)?;
        assert!(onto.imports.is_empty());
        assert_eq!(onto.import_declarations.len(), 1);
        Ok(())
    }

    #[test]
    fn ignored_imports_are_not_loaded() -> TestResult {
        let dir = tempfile::tempdir()?;
        let main = write(dir.path(), "main.ttl", &importing("file:///no/such/import.ttl"))?;
        let config = LoaderConfig {
            imports: ImportPolicy::Ignore,
            ..LoaderConfig::default()
        };
        let onto = DocumentLoader.load(&DocumentSource::File(main), &config)?;
        assert!(onto.imports.is_empty());
        Ok(())
    }

    #[test]
    fn unparsable_document_reports_every_parser() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = write(dir.path(), "broken.owl", "<?xml version=\"1.0\"?>\n<rdf:RDF xmlns:rdf=")?;
        let err = DocumentLoader
            .load(&DocumentSource::File(path), &LoaderConfig::default())
            .err();
        match err {
            Some(LoadError::Unparsable { attempts, .. }) => {
                let tried: Vec<Syntax> = attempts.iter().map(|a| a.syntax).collect();
                assert_eq!(tried, vec![Syntax::RdfXml, Syntax::Turtle, Syntax::NTriples]);
                assert!(attempts.iter().all(|a| !a.message.is_empty()));
            }
            other => return Err(format!("unexpected result: {other:?}").into()),
        }
        Ok(())
    }

    #[test]
    fn forced_syntax_is_the_only_attempt() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = write(dir.path(), "base.ttl", BASE_TTL)?;
        let config = LoaderConfig {
            syntax: Some(Syntax::NTriples),
            ..LoaderConfig::default()
        };
        let err = DocumentLoader.load(&DocumentSource::File(path), &config).err();
        match err {
            Some(LoadError::Unparsable { attempts, .. }) => assert_eq!(attempts.len(), 1),
            other => return Err(format!("unexpected result: {other:?}").into()),
        }
        Ok(())
    }

    #[test]
    fn strict_mode_requires_a_header() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = write(dir.path(), "plain.nt", "<http://a> <http://b> <http://c> .\n")?;
        let lenient = DocumentLoader.load(&DocumentSource::File(path.clone()), &LoaderConfig::default());
        assert!(lenient.is_ok());

        let config = LoaderConfig {
            strict: true,
            ..LoaderConfig::default()
        };
        let err = DocumentLoader.load(&DocumentSource::File(path), &config).err();
        assert!(matches!(err, Some(LoadError::Creation { .. })), "{err:?}");
        Ok(())
    }

    #[test]
    fn blank_nodes_are_scoped_per_document() -> TestResult {
        let dir = tempfile::tempdir()?;
        let base = write(
            dir.path(),
            "base.ttl",
            "<http://example.org/base> a <http://www.w3.org/2002/07/owl#Ontology> .\n_:x <http://p> _:y .\n",
        )?;
        let main = write(
            dir.path(),
            "main.ttl",
            &format!("{}_:x <http://p> _:y .\n", importing("http://example.org/base")),
        )?;
        let mut config = LoaderConfig::default();
        config.iri_mappings.insert("http://example.org/base".into(), base);
        let onto = DocumentLoader.load(&DocumentSource::File(main), &config)?;
        let blanks: HashSet<&Term> = onto
            .closure_triples()
            .map(|t| &t.subject)
            .filter(|s| s.is_blank())
            .collect();
        assert_eq!(blanks.len(), 2);
        Ok(())
    }

    #[test]
    fn elapsed_deadline_fails_the_load() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = write(dir.path(), "base.ttl", BASE_TTL)?;
        let config = LoaderConfig {
            timeout: Some(Duration::ZERO),
            ..LoaderConfig::default()
        };
        let err = DocumentLoader.load(&DocumentSource::File(path), &config).err();
        assert!(matches!(err, Some(LoadError::DeadlineExceeded { .. })), "{err:?}");
        Ok(())
    }
}
