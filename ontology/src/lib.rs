//! OWL ontology documents as owned Rust data.
//!
//! The `owlet-ontology` crate loads ontology documents from files or URLs,
//! follows their `owl:imports`, and exposes the resulting graph as plain
//! triples. It also carries the document-level tooling built on that model:
//! a sorted N-Triples serializer, a blank-node-aware graph diff, and a lint
//! for malformed `owl:Restriction` nodes.
//!
//! # Entry Point
//!
//! ```no_run
//! use owlet_ontology::{DocumentLoader, DocumentSource, LoaderConfig, OntologyLoader};
//!
//! let source = DocumentSource::parse("ontologies/pizza.owl");
//! let ontology = DocumentLoader::new().load(&source, &LoaderConfig::default())?;
//! println!("{} ({} triples)", ontology.id, ontology.closure_len());
//! # Ok::<(), owlet_ontology::LoadError>(())
//! ```
//!
//! # Serialization
//!
//! ```
//! use owlet_ontology::{Ontology, Syntax, Term, Triple, vocab};
//!
//! let triples = vec![Triple::new(
//!     Term::iri("http://example.org/A"),
//!     vocab::RDF_TYPE,
//!     Term::iri(vocab::OWL_CLASS),
//! )];
//! let ontology = Ontology::from_triples("file:///tmp/a.ttl", Syntax::Turtle, triples);
//! let nt = owlet_ontology::serializer::ntriples::document_to_ntriples(&ontology);
//! assert_eq!(nt.lines().count(), 1);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod diff;
pub mod error;
pub mod loader;
pub mod model;
pub mod restrictions;
pub mod serializer;
pub mod syntax;
pub mod vocab;

pub use error::{LoadError, ParserFailure};
pub use loader::{
    DocumentLoader, DocumentSource, ImportPolicy, LoaderConfig, MissingImportHandling,
    NetworkPolicy, OntologyLoader,
};
pub use model::{Literal, Ontology, OntologyId, Term, Triple};
pub use syntax::Syntax;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_follows_imports_and_allows_network() {
        let config = LoaderConfig::default();
        assert_eq!(config.imports, ImportPolicy::Load);
        assert_eq!(config.missing_imports, MissingImportHandling::Throw);
        assert_eq!(config.network, NetworkPolicy::Allow);
        assert!(!config.strict);
        assert!(config.syntax.is_none());
        assert!(config.timeout.is_none());
    }

    #[test]
    fn all_vocabulary_iris_unique() {
        let mut iris = std::collections::HashSet::new();
        for iri in [
            vocab::OWL_CLASS,
            vocab::OWL_THING,
            vocab::OWL_NOTHING,
            vocab::OWL_RESTRICTION,
            vocab::RDFS_CLASS,
            vocab::RDFS_SUBCLASS_OF,
            vocab::RDF_TYPE,
        ] {
            assert!(iris.insert(iri), "Duplicate vocabulary IRI: {iri}");
        }
    }
}
