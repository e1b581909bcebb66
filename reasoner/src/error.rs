//! Reasoner construction errors.

use thiserror::Error;

/// Failure to build a reasoner over a loaded ontology.
#[derive(Debug, Error)]
pub enum ReasonerError {
    /// An `rdf:List` used by a class axiom is not a proper list.
    #[error("malformed rdf:List {node} in {axiom} axiom")]
    MalformedList {
        /// List head as written in N-Triples.
        node: String,
        /// Property whose object the list is, e.g. `owl:intersectionOf`.
        axiom: String,
    },
    /// Failure reported by another reasoner implementation.
    #[error("{0}")]
    Other(String),
}
