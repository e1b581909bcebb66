//! RDF concrete syntaxes and the parsers behind them.
//!
//! Parsing is delegated to the sophia parsers; their terms are copied into
//! the owned [`Triple`](crate::Triple) model straight away so nothing
//! downstream depends on sophia's borrowed term types.

use std::fmt;
use std::str::FromStr;

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::{Deserialize, Serialize};
use sophia_api::parser::TripleParser;
use sophia_api::source::TripleSource;
use sophia_api::term::{Term as SophiaTerm, TermKind};
use sophia_api::triple::Triple as SophiaTriple;
use sophia_iri::Iri;
use sophia_turtle::parser::nt::NTriplesParser;
use sophia_turtle::parser::turtle::TurtleParser;
use sophia_xml::parser::RdfXmlParser;

use crate::model::{Literal, Term, Triple};
use crate::vocab;

/// A concrete RDF syntax the loader can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    /// RDF/XML, the OWL exchange syntax.
    RdfXml,
    /// Turtle 1.1.
    Turtle,
    /// N-Triples.
    NTriples,
}

impl Syntax {
    /// Every supported syntax, in default attempt order.
    pub const ALL: [Syntax; 3] = [Syntax::RdfXml, Syntax::Turtle, Syntax::NTriples];

    /// Name of the parser used for this syntax, as reported in diagnostics.
    #[must_use]
    pub fn parser_name(self) -> &'static str {
        match self {
            Syntax::RdfXml => "RdfXmlParser",
            Syntax::Turtle => "TurtleParser",
            Syntax::NTriples => "NTriplesParser",
        }
    }

    /// Short lowercase name, the same one accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Syntax::RdfXml => "rdfxml",
            Syntax::Turtle => "turtle",
            Syntax::NTriples => "ntriples",
        }
    }

    /// Guesses the syntax from a file extension (without the dot).
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "owl" | "rdf" | "xml" | "rdfs" => Some(Syntax::RdfXml),
            "ttl" | "turtle" => Some(Syntax::Turtle),
            "nt" | "ntriples" => Some(Syntax::NTriples),
            _ => None,
        }
    }

    /// Guesses the syntax from an HTTP media type, parameters stripped.
    #[must_use]
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        match media_type.trim().to_ascii_lowercase().as_str() {
            "application/rdf+xml" | "application/xml" | "text/xml" => Some(Syntax::RdfXml),
            "text/turtle" | "application/x-turtle" => Some(Syntax::Turtle),
            "application/n-triples" => Some(Syntax::NTriples),
            _ => None,
        }
    }

    /// Parser attempt order: the guess first, then every other syntax.
    #[must_use]
    pub fn candidates(guess: Option<Syntax>) -> Vec<Syntax> {
        let mut order: Vec<Syntax> = guess.into_iter().collect();
        order.extend(Syntax::ALL.iter().copied().filter(|s| Some(*s) != guess));
        order
    }

    /// Parses a whole document in this syntax.
    ///
    /// Relative IRIs are resolved against `base` when it is a valid IRI.
    ///
    /// # Errors
    ///
    /// Returns the parser's message if the document is not valid in this syntax.
    pub fn parse(self, text: &str, base: &str) -> Result<Vec<Triple>, String> {
        let base = Iri::new(base.to_owned()).ok();
        let mut triples = Vec::new();
        match self {
            Syntax::RdfXml => {
                ensure_markup(text)?;
                ensure_well_formed(text)?;
                RdfXmlParser { base }
                    .parse_str(text)
                    .for_each_triple(|t| push_triple(&mut triples, t))
                    .map_err(|e| e.to_string())?
            }
            Syntax::Turtle => TurtleParser { base }
                .parse_str(text)
                .for_each_triple(|t| push_triple(&mut triples, t))
                .map_err(|e| e.to_string())?,
            Syntax::NTriples => NTriplesParser {}
                .parse_str(text)
                .for_each_triple(|t| push_triple(&mut triples, t))
                .map_err(|e| e.to_string())?,
        }
        Ok(triples)
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Syntax {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rdfxml" | "rdf/xml" | "rdf-xml" | "xml" => Ok(Syntax::RdfXml),
            "turtle" | "ttl" => Ok(Syntax::Turtle),
            "ntriples" | "n-triples" | "nt" => Ok(Syntax::NTriples),
            other => Err(format!(
                "unknown syntax '{other}' (expected rdfxml, turtle or ntriples)"
            )),
        }
    }
}

/// The XML reader skips leading character data, so text that is not markup
/// at all would otherwise come back as an empty graph.
fn ensure_markup(text: &str) -> Result<(), String> {
    match text.trim_start_matches('\u{feff}').trim_start().chars().next() {
        Some('<') | None => Ok(()),
        Some(c) => Err(format!(
            "not an XML document: unexpected character '{c}' before the root element"
        )),
    }
}

/// The RDF/XML parser stops quietly at end of input, so a document cut off
/// inside `rdf:RDF` would yield the statements read so far.
fn ensure_well_formed(text: &str) -> Result<(), String> {
    let mut reader = Reader::from_str(text);
    let mut open: Vec<String> = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                open.push(String::from_utf8_lossy(start.name().as_ref()).into_owned());
            }
            Ok(Event::End(_)) => {
                open.pop();
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(format!(
                    "malformed XML at byte {}: {e}",
                    reader.error_position()
                ))
            }
        }
    }
    match open.last() {
        Some(name) => Err(format!("document ends before <{name}> is closed")),
        None => Ok(()),
    }
}

fn push_triple<T: SophiaTriple>(out: &mut Vec<Triple>, t: T) {
    let predicate = match t.p().iri() {
        Some(iri) => iri.as_str().to_owned(),
        None => return,
    };
    if let (Some(subject), Some(object)) = (convert_term(t.s()), convert_term(t.o())) {
        out.push(Triple {
            subject,
            predicate,
            object,
        });
    }
}

fn convert_term<T: SophiaTerm>(term: T) -> Option<Term> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Term::Iri(iri.as_str().to_owned())),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| Term::BlankNode(id.as_str().to_owned())),
        TermKind::Literal => {
            let lexical = term.lexical_form()?.to_string();
            let language = term.language_tag().map(|tag| tag.as_str().to_owned());
            let datatype = match (&language, term.datatype()) {
                (Some(_), _) => vocab::RDF_LANG_STRING.to_owned(),
                (None, Some(dt)) => dt.as_str().to_owned(),
                (None, None) => vocab::XSD_STRING.to_owned(),
            };
            Some(Term::Literal(Literal {
                lexical,
                datatype,
                language,
            }))
        }
        // Quoted triples and variables never appear in OWL documents.
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "file:///tmp/test.ttl";

    #[test]
    fn turtle_document_parses() {
        let ttl = r#"
            @prefix ex: <http://example.org/> .
            @prefix owl: <http://www.w3.org/2002/07/owl#> .
            ex:A a owl:Class ; ex:label "A class"@en .
        "#;
        let triples = Syntax::Turtle.parse(ttl, BASE).unwrap_or_default();
        assert_eq!(triples.len(), 2);
        assert!(triples.iter().any(|t| t.object.is(vocab::OWL_CLASS)));
        assert!(triples.iter().any(|t| matches!(
            &t.object,
            Term::Literal(l) if l.language.as_deref() == Some("en")
        )));
    }

    #[test]
    fn rdfxml_document_parses() {
        let xml = r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:owl="http://www.w3.org/2002/07/owl#">
  <owl:Class rdf:about="http://example.org/A"/>
</rdf:RDF>"#;
        let triples = Syntax::RdfXml.parse(xml, BASE).unwrap_or_default();
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].subject, Term::iri("http://example.org/A"));
    }

    #[test]
    fn relative_iris_resolve_against_base() {
        let triples = Syntax::Turtle
            .parse("<#A> a <#B> .", "http://example.org/doc")
            .unwrap_or_default();
        assert_eq!(triples[0].subject, Term::iri("http://example.org/doc#A"));
    }

    #[test]
    fn truncated_turtle_is_rejected() {
        let result = Syntax::Turtle.parse("@prefix ex: <http://example.org/> .\nex:A a ", BASE);
        assert!(result.is_err());
    }

    #[test]
    fn turtle_is_rejected_by_the_xml_parser() {
        let ttl = "@prefix ex: <http://example.org/> .\nex:a ex:b ex:c .";
        let err = Syntax::RdfXml.parse(ttl, BASE).err().unwrap_or_default();
        assert!(err.contains("not an XML document"), "{err}");
    }

    const RDF_OPEN: &str = r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:owl="http://www.w3.org/2002/07/owl#">
  <owl:Ontology rdf:about="http://example.org/cut"/>
  <owl:Class rdf:about="http://example.org/cut#Person"/>
"#;

    #[test]
    fn rdfxml_cut_after_a_complete_element_is_rejected() {
        let err = Syntax::RdfXml.parse(RDF_OPEN, BASE).err().unwrap_or_default();
        assert!(err.contains("<rdf:RDF> is closed"), "{err}");
    }

    #[test]
    fn rdfxml_cut_inside_an_open_element_is_rejected() {
        let xml = format!(
            "{RDF_OPEN}  <owl:Class rdf:about=\"http://example.org/cut#Adult\">\n    <rdfs:label>Adult</rdfs:label>\n"
        );
        let err = Syntax::RdfXml.parse(&xml, BASE).err().unwrap_or_default();
        assert!(err.contains("<owl:Class> is closed"), "{err}");
    }

    #[test]
    fn rdfxml_with_doctype_entities_is_well_formed() {
        let xml = r#"<?xml version="1.0"?>
<!DOCTYPE rdf:RDF [
  <!ENTITY ex "http://example.org/" >
]>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:owl="http://www.w3.org/2002/07/owl#">
  <owl:Class rdf:about="http://example.org/A"/>
</rdf:RDF>"#;
        assert_eq!(ensure_well_formed(xml), Ok(()));
    }

    #[test]
    fn mismatched_end_tag_is_malformed() {
        let err = ensure_well_formed("<a><b></a></b>").err().unwrap_or_default();
        assert!(err.starts_with("malformed XML"), "{err}");
    }

    #[test]
    fn candidates_put_the_guess_first() {
        assert_eq!(
            Syntax::candidates(Some(Syntax::Turtle)),
            vec![Syntax::Turtle, Syntax::RdfXml, Syntax::NTriples]
        );
        assert_eq!(Syntax::candidates(None), Syntax::ALL.to_vec());
    }

    #[test]
    fn syntax_names_round_trip_through_from_str() {
        for syntax in Syntax::ALL {
            assert_eq!(syntax.as_str().parse::<Syntax>(), Ok(syntax));
        }
        assert!("json-ld".parse::<Syntax>().is_err());
    }

    #[test]
    fn guesses_from_extension_and_media_type() {
        assert_eq!(Syntax::from_extension("OWL"), Some(Syntax::RdfXml));
        assert_eq!(Syntax::from_extension("ttl"), Some(Syntax::Turtle));
        assert_eq!(Syntax::from_media_type("text/turtle"), Some(Syntax::Turtle));
        assert_eq!(Syntax::from_media_type("text/html"), None);
    }
}
