//! `owlet-classify`: prints the inferred class hierarchy of an ontology.
//!
//! **Usage:**
//! ```text
//! owlet-classify <document> [--class IRI] [--prefix IRI] [--offline]
//! ```
//!
//! With `--class`, also lists the instances of that class together with
//! their property values.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::collections::HashSet;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use owlet_clients::LoaderArgs;
use owlet_ontology::vocab;
use owlet_reasoner::StructuralReasoner;
use owlet_validator::OntologyValidator;

/// Print the inferred class hierarchy of an OWL ontology.
#[derive(Parser)]
#[command(name = "owlet-classify", about = "Print the inferred class hierarchy")]
struct Args {
    /// Ontology document: a file path, a file: IRI or an http(s): IRI.
    document: String,

    /// List the instances of this class.
    #[arg(long, value_name = "IRI")]
    class: Option<String>,

    /// Strip this prefix from printed IRIs.
    #[arg(long, value_name = "IRI")]
    prefix: Option<String>,

    #[command(flatten)]
    loader: LoaderArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Err(e) = args.loader.init_logging() {
        eprintln!("warning: {e}");
    }
    let started = Instant::now();

    let config = args.loader.loader_config()?;
    let (ontology, reasoner) = OntologyValidator::new().analyze(&args.document, &config)?;
    let short = |iri: &str| -> String {
        args.prefix
            .as_deref()
            .and_then(|p| iri.strip_prefix(p))
            .unwrap_or(iri)
            .to_owned()
    };

    println!("Loaded ontology: {}", ontology.id);
    println!("\tfrom: {}", ontology.document_iri);
    for import in ontology.closure().skip(1) {
        println!("\timports: {}", import.display_name());
    }
    println!();

    if !reasoner.clashes().is_empty() {
        println!("Ontology is INCONSISTENT:");
        for clash in reasoner.clashes() {
            println!("  - {clash}");
        }
        println!();
    }

    println!("Class hierarchy:");
    let mut seen = HashSet::new();
    print_tree(&reasoner, vocab::OWL_THING, 0, &short, &mut seen);

    let unsatisfiable = reasoner.unsatisfiable_classes();
    if !unsatisfiable.is_empty() {
        println!();
        println!("Unsatisfiable classes:");
        for class in unsatisfiable {
            println!("  - {}", short(class));
        }
    }

    if let Some(class) = &args.class {
        println!();
        println!("Instances of {}:", short(class));
        for individual in reasoner.instances(class, false) {
            let name = individual
                .as_iri()
                .map_or_else(|| individual.to_string(), |iri| short(iri));
            println!("  {name}");
            for property in reasoner.object_properties_of(&individual) {
                for value in reasoner.object_property_values(&individual, property) {
                    let value = value
                        .as_iri()
                        .map_or_else(|| value.to_string(), |iri| short(iri));
                    println!("    {} {value}", short(property));
                }
            }
            for property in reasoner.data_properties_of(&individual) {
                for value in reasoner.data_property_values(&individual, property) {
                    println!("    {} \"{}\"", short(property), value.lexical);
                }
            }
        }
    }

    eprintln!("Finished in {:.3}s", started.elapsed().as_secs_f64());
    Ok(())
}

/// Prints `class` and its direct sub classes, indented by depth.
fn print_tree(
    reasoner: &StructuralReasoner,
    class: &str,
    depth: usize,
    short: &dyn Fn(&str) -> String,
    seen: &mut HashSet<String>,
) {
    let mut name = short(class);
    let equivalents = reasoner.equivalent_classes(class);
    if !equivalents.is_empty() {
        let names: Vec<String> = equivalents.iter().map(|e| short(e)).collect();
        name = format!("{name} = {}", names.join(" = "));
    }
    println!("{}{name}", "  ".repeat(depth));
    if !seen.insert(class.to_owned()) {
        return;
    }
    seen.extend(equivalents);
    for sub in reasoner.sub_classes(class, true) {
        if sub != vocab::OWL_NOTHING && !seen.contains(&sub) {
            print_tree(reasoner, &sub, depth + 1, short, seen);
        }
    }
}
