//! A small consistent ontology, in RDF/XML and in Turtle.
//!
//! Classes `Person`, `Adult`, `Child` (disjoint with `Adult`) and `Parent`,
//! the inverse pair `hasChild`/`hasParent`, a functional `age`, and two
//! individuals.

/// Ontology IRI of the people fixtures.
pub const PEOPLE_IRI: &str = "http://example.org/people";

/// The people ontology in RDF/XML.
pub const PEOPLE_OWL: &str = r#"<?xml version="1.0"?>
<rdf:RDF xmlns="http://example.org/people#"
     xml:base="http://example.org/people"
     xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
     xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
     xmlns:owl="http://www.w3.org/2002/07/owl#"
     xmlns:xsd="http://www.w3.org/2001/XMLSchema#">

    <owl:Ontology rdf:about="http://example.org/people"/>

    <owl:Class rdf:about="http://example.org/people#Person"/>

    <owl:Class rdf:about="http://example.org/people#Adult">
        <rdfs:subClassOf rdf:resource="http://example.org/people#Person"/>
    </owl:Class>

    <owl:Class rdf:about="http://example.org/people#Child">
        <rdfs:subClassOf rdf:resource="http://example.org/people#Person"/>
        <owl:disjointWith rdf:resource="http://example.org/people#Adult"/>
    </owl:Class>

    <owl:Class rdf:about="http://example.org/people#Parent">
        <rdfs:subClassOf rdf:resource="http://example.org/people#Adult"/>
        <rdfs:subClassOf>
            <owl:Restriction>
                <owl:onProperty rdf:resource="http://example.org/people#hasChild"/>
                <owl:someValuesFrom rdf:resource="http://example.org/people#Person"/>
            </owl:Restriction>
        </rdfs:subClassOf>
    </owl:Class>

    <owl:ObjectProperty rdf:about="http://example.org/people#hasChild">
        <owl:inverseOf rdf:resource="http://example.org/people#hasParent"/>
        <rdfs:domain rdf:resource="http://example.org/people#Parent"/>
    </owl:ObjectProperty>

    <owl:ObjectProperty rdf:about="http://example.org/people#hasParent"/>

    <owl:DatatypeProperty rdf:about="http://example.org/people#age">
        <rdf:type rdf:resource="http://www.w3.org/2002/07/owl#FunctionalProperty"/>
    </owl:DatatypeProperty>

    <owl:NamedIndividual rdf:about="http://example.org/people#alice">
        <rdf:type rdf:resource="http://example.org/people#Adult"/>
        <hasChild rdf:resource="http://example.org/people#bob"/>
        <age rdf:datatype="http://www.w3.org/2001/XMLSchema#integer">42</age>
    </owl:NamedIndividual>

    <owl:NamedIndividual rdf:about="http://example.org/people#bob">
        <rdf:type rdf:resource="http://example.org/people#Child"/>
    </owl:NamedIndividual>
</rdf:RDF>
"#;

/// The people ontology in Turtle.
pub const PEOPLE_TTL: &str = r#"
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix :     <http://example.org/people#> .

<http://example.org/people> a owl:Ontology .

:Person a owl:Class .
:Adult  a owl:Class ; rdfs:subClassOf :Person .
:Child  a owl:Class ; rdfs:subClassOf :Person ; owl:disjointWith :Adult .
:Parent a owl:Class ;
    rdfs:subClassOf :Adult ,
        [ a owl:Restriction ;
          owl:onProperty :hasChild ;
          owl:someValuesFrom :Person ] .

:hasChild  a owl:ObjectProperty ; owl:inverseOf :hasParent ; rdfs:domain :Parent .
:hasParent a owl:ObjectProperty .
:age       a owl:DatatypeProperty , owl:FunctionalProperty .

:alice a owl:NamedIndividual , :Adult ;
    :hasChild :bob ;
    :age "42"^^xsd:integer .

:bob a owl:NamedIndividual , :Child .
"#;
