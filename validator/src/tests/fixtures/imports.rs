//! Documents for import resolution.

/// Ontology IRI of [`BASE_TTL`].
pub const BASE_IRI: &str = "http://example.org/base";

/// A document meant to be imported, typically through an IRI mapping.
pub const BASE_TTL: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix :     <http://example.org/base#> .

<http://example.org/base> a owl:Ontology .

:Vehicle a owl:Class .
:Bicycle a owl:Class ; rdfs:subClassOf :Vehicle .
:Car     a owl:Class ; rdfs:subClassOf :Vehicle ; owl:disjointWith :Bicycle .
"#;

/// A Turtle document whose only content is a header importing `target`,
/// plus one individual typed with `types` (IRIs, may be empty).
#[must_use]
pub fn importing(target: &str, types: &[&str]) -> String {
    let mut doc = format!(
        "@prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
         <http://example.org/main> a owl:Ontology ;\n    owl:imports <{target}> .\n"
    );
    if !types.is_empty() {
        let list: Vec<String> = types.iter().map(|t| format!("<{t}>")).collect();
        doc.push_str(&format!(
            "<http://example.org/main#it> a owl:NamedIndividual , {} .\n",
            list.join(" , ")
        ));
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn importing_without_types_has_no_individual() {
        let doc = importing(BASE_IRI, &[]);
        assert!(doc.contains("owl:imports <http://example.org/base>"));
        assert!(!doc.contains("NamedIndividual"));
    }
}
