//! Core ontology model types.
//!
//! A loaded document is held as a flat list of owned [`Triple`]s plus the
//! header information OWL tools care about: the ontology id, the document it
//! came from, and its `owl:imports` declarations. Imported documents are
//! loaded into [`Ontology::imports`], so an [`Ontology`] value is always the
//! root of its own imports closure.

use std::collections::HashSet;
use std::fmt;

use crate::syntax::Syntax;
use crate::vocab;

/// An RDF term in subject or object position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// An absolute IRI.
    Iri(String),
    /// A blank node, labelled uniquely within one load.
    BlankNode(String),
    /// A literal value.
    Literal(Literal),
}

/// An RDF literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// Lexical form, unescaped.
    pub lexical: String,
    /// Datatype IRI. `xsd:string` for simple literals, `rdf:langString` for
    /// language-tagged ones.
    pub datatype: String,
    /// Language tag, if any.
    pub language: Option<String>,
}

impl Term {
    /// Creates an IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Creates a blank node term.
    pub fn blank(id: impl Into<String>) -> Self {
        Term::BlankNode(id.into())
    }

    /// Creates an `xsd:string` literal.
    pub fn string(lexical: impl Into<String>) -> Self {
        Term::Literal(Literal {
            lexical: lexical.into(),
            datatype: vocab::XSD_STRING.to_owned(),
            language: None,
        })
    }

    /// Creates a typed literal.
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::Literal(Literal {
            lexical: lexical.into(),
            datatype: datatype.into(),
            language: None,
        })
    }

    /// Returns the IRI if this term is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns true for blank nodes.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Returns true for literals.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Returns true if this term is the given IRI.
    #[must_use]
    pub fn is(&self, iri: &str) -> bool {
        self.as_iri() == Some(iri)
    }
}

impl fmt::Display for Term {
    /// Formats the term in N-Triples syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{}>", iri),
            Term::BlankNode(id) => write!(f, "_:{}", id),
            Term::Literal(lit) => {
                write!(f, "\"{}\"", escape_literal(&lit.lexical))?;
                if let Some(lang) = &lit.language {
                    write!(f, "@{}", lang)
                } else if lit.datatype == vocab::XSD_STRING {
                    Ok(())
                } else {
                    write!(f, "^^<{}>", lit.datatype)
                }
            }
        }
    }
}

fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

/// A single RDF statement. The predicate is always an IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    /// Subject (IRI or blank node).
    pub subject: Term,
    /// Predicate IRI.
    pub predicate: String,
    /// Object.
    pub object: Term,
}

impl Triple {
    /// Creates a triple.
    pub fn new(subject: Term, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

impl fmt::Display for Triple {
    /// Formats the triple as one N-Triples line, without the trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {} .", self.subject, self.predicate, self.object)
    }
}

/// Identity of an ontology as declared in its `owl:Ontology` header.
///
/// Both parts are optional: an ontology without a header, or with a blank
/// node header, is anonymous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OntologyId {
    /// The ontology IRI.
    pub iri: Option<String>,
    /// The `owl:versionIRI`, if declared.
    pub version_iri: Option<String>,
}

impl OntologyId {
    /// Returns true if no ontology IRI was declared.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.iri.is_none()
    }
}

impl fmt::Display for OntologyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.iri, &self.version_iri) {
            (Some(iri), Some(version)) => write!(f, "OntologyID(<{}> <{}>)", iri, version),
            (Some(iri), None) => write!(f, "OntologyID(<{}>)", iri),
            _ => f.write_str("OntologyID(Anonymous)"),
        }
    }
}

/// A loaded ontology document together with its loaded imports.
#[derive(Debug, Clone)]
pub struct Ontology {
    /// Declared identity.
    pub id: OntologyId,
    /// IRI of the document the ontology was read from.
    pub document_iri: String,
    /// Syntax the document was parsed with.
    pub syntax: Syntax,
    /// Whether the document carries an `owl:Ontology` header.
    pub has_header: bool,
    /// All statements of this document (imports excluded).
    pub triples: Vec<Triple>,
    /// Target IRIs of the document's `owl:imports` declarations, in document order.
    pub import_declarations: Vec<String>,
    /// Imported ontologies that were loaded.
    pub imports: Vec<Ontology>,
}

impl Ontology {
    /// Builds an ontology from the statements of one document, reading the
    /// header and import declarations out of them.
    #[must_use]
    pub fn from_triples(document_iri: impl Into<String>, syntax: Syntax, triples: Vec<Triple>) -> Self {
        let headers: Vec<&Term> = triples
            .iter()
            .filter(|t| t.predicate == vocab::RDF_TYPE && t.object.is(vocab::OWL_ONTOLOGY))
            .map(|t| &t.subject)
            .collect();
        let has_header = !headers.is_empty();
        let header = headers.iter().find(|s| s.as_iri().is_some()).copied();
        let iri = header.and_then(Term::as_iri).map(str::to_owned);
        let version_iri = header.and_then(|h| {
            triples
                .iter()
                .find(|t| &t.subject == h && t.predicate == vocab::OWL_VERSION_IRI)
                .and_then(|t| t.object.as_iri())
                .map(str::to_owned)
        });

        let mut seen = HashSet::new();
        let import_declarations = triples
            .iter()
            .filter(|t| t.predicate == vocab::OWL_IMPORTS)
            .filter_map(|t| t.object.as_iri())
            .filter(|iri| seen.insert(*iri))
            .map(str::to_owned)
            .collect();

        Self {
            id: OntologyId { iri, version_iri },
            document_iri: document_iri.into(),
            syntax,
            has_header,
            triples,
            import_declarations,
            imports: Vec::new(),
        }
    }

    /// Iterates over this ontology and every loaded import, depth first,
    /// starting with `self`.
    pub fn closure(&self) -> impl Iterator<Item = &Ontology> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.imports.iter().rev());
            Some(next)
        })
    }

    /// Iterates over the statements of the whole imports closure.
    pub fn closure_triples(&self) -> impl Iterator<Item = &Triple> {
        self.closure().flat_map(|o| o.triples.iter())
    }

    /// Number of statements in the imports closure.
    #[must_use]
    pub fn closure_len(&self) -> usize {
        self.closure().map(|o| o.triples.len()).sum()
    }

    /// Returns the objects of `subject predicate ?o` in this document.
    pub fn objects<'a, 'q>(
        &'a self,
        subject: &'q Term,
        predicate: &'q str,
    ) -> impl Iterator<Item = &'a Term> + 'q
    where
        'a: 'q,
    {
        objects(&self.triples, subject, predicate)
    }

    /// Shortest name for diagnostics: the ontology IRI, or the document IRI
    /// for anonymous ontologies.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.id.iri.as_deref().unwrap_or(&self.document_iri)
    }
}

/// Returns the objects of `subject predicate ?o` in a statement list.
///
/// The yielded terms borrow from `triples` only.
pub fn objects<'a, 'q>(
    triples: &'a [Triple],
    subject: &'q Term,
    predicate: &'q str,
) -> impl Iterator<Item = &'a Term> + 'q
where
    'a: 'q,
{
    triples
        .iter()
        .filter(move |t| &t.subject == subject && t.predicate == predicate)
        .map(|t| &t.object)
}

/// Reads an `rdf:List` starting at `head`.
///
/// Returns `None` if the list is malformed: a node without exactly one
/// `rdf:first` and one `rdf:rest`, or a cycle.
#[must_use]
pub fn list_items(triples: &[Triple], head: &Term) -> Option<Vec<Term>> {
    let mut items = Vec::new();
    let mut visited = HashSet::new();
    let mut node = head.clone();
    while !node.is(vocab::RDF_NIL) {
        if !visited.insert(node.clone()) {
            return None;
        }
        let firsts: Vec<&Term> = objects(triples, &node, vocab::RDF_FIRST).collect();
        let rests: Vec<&Term> = objects(triples, &node, vocab::RDF_REST).collect();
        let ([first], [rest]) = (firsts.as_slice(), rests.as_slice()) else {
            return None;
        };
        items.push((*first).clone());
        node = (*rest).clone();
    }
    Some(items)
}
