//! `owlet-diff`: compares the statements of two ontologies.
//!
//! Both documents are loaded with their imports and compared as graphs,
//! ignoring blank node labels and statement order.
//!
//! **Usage:**
//! ```text
//! owlet-diff <first> <second> [--offline] [--no-imports]
//! ```
//!
//! Prints `< line` for statements only in the first graph and `> line` for
//! statements only in the second. Exits 0 if the graphs are equal, 1 if they
//! differ, 2 on error.

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
use owlet_ontology::diff::diff;
use owlet_ontology::Triple;

/// Compare the statements of two ontologies.
#[derive(Parser)]
#[command(name = "owlet-diff", about = "Compare the statements of two ontologies")]
struct Args {
    /// First ontology document.
    first: String,

    /// Second ontology document.
    second: String,

    #[command(flatten)]
    loader: LoaderArgs,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = args.loader.init_logging() {
        eprintln!("warning: {e}");
    }
    match run(&args) {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(2);
        }
    }
}

fn run(args: &Args) -> Result<bool> {
    let first = args.loader.load(&args.first)?;
    let second = args.loader.load(&args.second)?;
    let a: Vec<Triple> = first.closure_triples().cloned().collect();
    let b: Vec<Triple> = second.closure_triples().cloned().collect();

    let result = diff(&a, &b);
    for line in &result.only_in_first {
        println!("< {line}");
    }
    for line in &result.only_in_second {
        println!("> {line}");
    }
    if result.is_empty() {
        eprintln!("Graphs are equal ({} statements)", a.len());
    } else {
        eprintln!(
            "{} statement(s) only in {}, {} only in {}",
            result.only_in_first.len(),
            args.first,
            result.only_in_second.len(),
            args.second
        );
    }
    Ok(result.is_empty())
}
