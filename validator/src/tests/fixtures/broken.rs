//! Documents that are inconsistent, unparsable, or structurally off.

/// Consistent people ontology plus an individual that is both an `Adult`
/// and a `Child`.
pub const DISJOINT_INCONSISTENT_TTL: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix :     <http://example.org/clash#> .

<http://example.org/clash> a owl:Ontology .

:Person a owl:Class .
:Adult  a owl:Class ; rdfs:subClassOf :Person .
:Child  a owl:Class ; rdfs:subClassOf :Person ; owl:disjointWith :Adult .

:carol a owl:NamedIndividual , :Adult , :Child .
"#;

/// RDF/XML cut off in the middle of a start tag.
pub const TRUNCATED_OWL: &str = r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
     xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
     xmlns:owl="http://www.w3.org/2002/07/owl#">

    <owl:Ontology rdf:about="http://example.org/truncated"/>

    <owl:Class rdf:about="http://example.org/truncated#Person"/>

    <owl:Class rdf:about="http://example.org/trunc"#;

/// RDF/XML that stops after a complete class declaration, with `rdf:RDF`
/// never closed.
pub const UNCLOSED_ROOT_OWL: &str = r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
     xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
     xmlns:owl="http://www.w3.org/2002/07/owl#">

    <owl:Ontology rdf:about="http://example.org/truncated"/>

    <owl:Class rdf:about="http://example.org/truncated#Person"/>
"#;

/// RDF/XML that stops inside an open `owl:Class` element.
pub const UNCLOSED_ELEMENT_OWL: &str = r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
     xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
     xmlns:owl="http://www.w3.org/2002/07/owl#">

    <owl:Ontology rdf:about="http://example.org/truncated"/>

    <owl:Class rdf:about="http://example.org/truncated#Adult">
        <rdfs:subClassOf rdf:resource="http://example.org/truncated#Person"/>
"#;

/// A restriction carrying two constraints at once.
pub const BAD_RESTRICTION_TTL: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix :     <http://example.org/pets#> .

<http://example.org/pets> a owl:Ontology .

:Animal a owl:Class .
:Food   a owl:Class .
:eats   a owl:ObjectProperty .

:Dog a owl:Class ;
    rdfs:subClassOf [
        a owl:Restriction ;
        owl:onProperty :eats ;
        owl:someValuesFrom :Food ;
        owl:allValuesFrom :Food ;
        rdfs:comment "Dogs eat food, and only food."
    ] .

:Puppy a owl:Class ; rdfs:subClassOf :Dog .
"#;

/// Statements without an `owl:Ontology` header.
pub const HEADERLESS_TTL: &str = r#"
@prefix owl: <http://www.w3.org/2002/07/owl#> .
<http://example.org/loose#Thing> a owl:Class .
"#;
