//! Demonstrates loading an ontology document and printing its imports closure.
//!
//! Run with: `cargo run --example dump_ontology -p owlet-ontology -- path/to/doc.owl`

use owlet_ontology::{DocumentLoader, DocumentSource, LoaderConfig, OntologyLoader};

fn main() {
    let Some(input) = std::env::args().nth(1) else {
        eprintln!("usage: dump_ontology <document>");
        std::process::exit(2);
    };

    let source = DocumentSource::parse(&input);
    let ontology = match DocumentLoader::new().load(&source, &LoaderConfig::default()) {
        Ok(ontology) => ontology,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    println!("{}", ontology.id);
    println!("  Document:   {}", ontology.document_iri);
    println!("  Syntax:     {}", ontology.syntax);
    println!("  Triples:    {}", ontology.closure_len());
    println!();

    // One line per document in the imports closure.
    for doc in ontology.closure() {
        println!(
            "  {:60} {:>6} triples  [{}]",
            doc.display_name(),
            doc.triples.len(),
            doc.syntax.as_str(),
        );
    }

    println!();

    let nt = owlet_ontology::serializer::ntriples::document_to_ntriples(&ontology);
    println!("N-Triples output ({} bytes):", nt.len());
    for line in nt.lines().take(5) {
        println!("{line}");
    }
}
