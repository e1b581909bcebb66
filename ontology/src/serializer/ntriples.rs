//! N-Triples serializer for loaded documents.
//!
//! Produces one statement per line, absolute IRIs, lines sorted
//! lexicographically and deduplicated. Sorting makes two serializations of
//! the same statements byte-identical, which is what diff tooling and
//! checked-in fixtures need.

use std::collections::BTreeSet;

use crate::model::{Ontology, Triple};

/// Serializes statements to sorted N-Triples.
///
/// # Errors
///
/// This function is infallible; it always returns a valid N-Triples string.
#[must_use]
pub fn to_ntriples<'a>(triples: impl IntoIterator<Item = &'a Triple>) -> String {
    let lines: BTreeSet<String> = triples.into_iter().map(ToString::to_string).collect();
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Serializes the statements of one document, imports excluded.
#[must_use]
pub fn document_to_ntriples(ontology: &Ontology) -> String {
    to_ntriples(&ontology.triples)
}

/// Serializes the whole imports closure as one graph.
#[must_use]
pub fn closure_to_ntriples(ontology: &Ontology) -> String {
    to_ntriples(ontology.closure_triples())
}
