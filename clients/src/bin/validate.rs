//! `owlet-validate`: checks whether an ontology document is consistent.
//!
//! Loads the document and its imports, builds a reasoner, and prints the
//! verdict.
//!
//! **Usage:**
//! ```text
//! owlet-validate <document> [--report] [--json] [--offline] [--no-imports] [--strict]
//! ```
//!
//! Exits 0 if the ontology is consistent, 1 if it is inconsistent, 2 if it
//! could not be validated.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::Result;
use clap::Parser;
use owlet_clients::LoaderArgs;
use owlet_reasoner::Reasoner;
use owlet_validator::{checks, OntologyValidator, ValidationError};

/// Check an OWL ontology for consistency.
#[derive(Parser)]
#[command(name = "owlet-validate", about = "Check an OWL ontology for consistency")]
struct Args {
    /// Ontology document: a file path, a file: IRI or an http(s): IRI.
    document: String,

    /// Print the clash and restriction report, not just the verdict.
    #[arg(long)]
    report: bool,

    /// Print the verdict, or the report with `--report`, as JSON.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    loader: LoaderArgs,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = args.loader.init_logging() {
        eprintln!("warning: {e}");
    }

    let code = match run(&args) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            if args.json {
                let kind = e
                    .downcast_ref::<ValidationError>()
                    .map_or("Configuration", ValidationError::kind);
                println!(
                    "{}",
                    serde_json::json!({
                        "document": args.document,
                        "error": kind,
                        "message": format!("{e:#}"),
                    })
                );
            } else {
                eprintln!("error: {e:#}");
            }
            2
        }
    };
    process::exit(code);
}

fn run(args: &Args) -> Result<bool> {
    let config = args.loader.loader_config()?;
    let validator = OntologyValidator::new();

    if !args.report {
        let consistent = validator.validate(&args.document, &config)?;
        if args.json {
            println!(
                "{}",
                serde_json::json!({ "document": args.document, "consistent": consistent })
            );
        } else {
            println!(
                "{}: {}",
                args.document,
                if consistent { "consistent" } else { "INCONSISTENT" }
            );
        }
        return Ok(consistent);
    }

    let (ontology, reasoner) = validator.analyze(&args.document, &config)?;
    let mut report = checks::consistency_report(&reasoner);
    report.extend(checks::restriction_report(&ontology));
    let consistent = reasoner.is_consistent();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "document": args.document,
                "ontology": ontology.id.to_string(),
                "consistent": consistent,
                "report": report,
            }))?
        );
        return Ok(consistent);
    }

    println!("owlet validation report: {}", ontology.id);
    println!("=========================");
    println!("from: {}", ontology.document_iri);
    println!();
    report.print();
    println!();
    println!(
        "Summary: {}, {} failed check(s)",
        if consistent { "consistent" } else { "INCONSISTENT" },
        report.failure_count()
    );
    Ok(consistent)
}
