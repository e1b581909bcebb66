//! Statement-level difference between two graphs.
//!
//! Blank node labels are arbitrary, so before comparing, each graph's blank
//! nodes are relabelled canonically: statements are ordered with every blank
//! node masked, then labels `_:c1`, `_:c2`, ... are handed out in order of
//! first occurrence. This matches isomorphic graphs whose blank nodes can be
//! told apart by their surrounding statements, which covers the restriction
//! and list structures OWL documents use. Fully symmetric blank node
//! structures may still be reported as different.

use std::collections::{BTreeSet, HashMap};

use crate::model::{Term, Triple};

/// Statements present in only one of two graphs, as sorted N-Triples lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphDiff {
    /// Lines only in the first graph.
    pub only_in_first: Vec<String>,
    /// Lines only in the second graph.
    pub only_in_second: Vec<String>,
}

impl GraphDiff {
    /// Returns true if the graphs have the same statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.only_in_first.is_empty() && self.only_in_second.is_empty()
    }
}

/// Compares two graphs.
#[must_use]
pub fn diff(first: &[Triple], second: &[Triple]) -> GraphDiff {
    let a = canonical_lines(first);
    let b = canonical_lines(second);
    GraphDiff {
        only_in_first: a.difference(&b).cloned().collect(),
        only_in_second: b.difference(&a).cloned().collect(),
    }
}

/// Renders statements as N-Triples lines with canonical blank node labels.
#[must_use]
pub fn canonical_lines(triples: &[Triple]) -> BTreeSet<String> {
    let mut ordered: Vec<&Triple> = triples.iter().collect();
    ordered.sort_by_cached_key(|t| masked(t));

    let mut labels: HashMap<String, String> = HashMap::new();
    let mut relabel = |term: &Term| -> Term {
        match term {
            Term::BlankNode(id) => {
                let next = labels.len() + 1;
                let label = labels.entry(id.clone()).or_insert_with(|| format!("c{next}"));
                Term::BlankNode(label.clone())
            }
            other => other.clone(),
        }
    };

    let mut lines = BTreeSet::new();
    for t in ordered {
        let subject = relabel(&t.subject);
        let object = relabel(&t.object);
        lines.insert(Triple::new(subject, t.predicate.clone(), object).to_string());
    }
    lines
}

fn masked(t: &Triple) -> String {
    let mask = |term: &Term| match term {
        Term::BlankNode(_) => "_:".to_owned(),
        other => other.to_string(),
    };
    format!("{} <{}> {}", mask(&t.subject), t.predicate, mask(&t.object))
}
