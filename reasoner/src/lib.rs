//! Reasoning capability for loaded ontologies.
//!
//! The `owlet-reasoner` crate defines the seam between loading and
//! reasoning: a [`ReasonerFactory`] builds one [`Reasoner`] per loaded
//! [`Ontology`], and the reasoner answers whether the ontology is
//! consistent. [`StructuralReasoner`] is the engine shipped with owlet; any
//! other engine plugs in by implementing the two traits.
//!
//! # Entry Point
//!
//! ```
//! use owlet_ontology::{vocab, Ontology, Syntax, Term, Triple};
//! use owlet_reasoner::{Reasoner, ReasonerFactory, StructuralReasonerFactory};
//!
//! let triples = vec![Triple::new(
//!     Term::iri("http://example.org/rex"),
//!     vocab::RDF_TYPE,
//!     Term::iri("http://example.org/Dog"),
//! )];
//! let ontology = Ontology::from_triples("file:///tmp/dogs.ttl", Syntax::Turtle, triples);
//! let reasoner = StructuralReasonerFactory.create_reasoner(&ontology)?;
//! assert!(reasoner.is_consistent());
//! # Ok::<(), owlet_reasoner::ReasonerError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
mod graph;
pub mod structural;

pub use error::ReasonerError;
pub use structural::{Clash, StructuralReasoner, StructuralReasonerFactory};

use owlet_ontology::Ontology;

/// A reasoner bound to one loaded ontology.
pub trait Reasoner {
    /// Returns true if the ontology and its imports closure have a model.
    fn is_consistent(&self) -> bool;
}

/// Builds reasoners.
///
/// Every call must return a new reasoner; a reasoner is never shared
/// between two ontologies.
pub trait ReasonerFactory {
    /// The reasoner type produced.
    type Reasoner: Reasoner;

    /// Name used in logs.
    fn name(&self) -> &str;

    /// Builds a reasoner over `ontology` and its imports closure.
    ///
    /// # Errors
    ///
    /// Returns a [`ReasonerError`] if the ontology uses constructs the
    /// reasoner cannot read.
    fn create_reasoner(&self, ontology: &Ontology) -> Result<Self::Reasoner, ReasonerError>;
}
