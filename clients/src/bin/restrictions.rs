//! `owlet-restrictions`: lints and repairs `owl:Restriction` nodes.
//!
//! A restriction must name one property and carry exactly one constraint.
//! `check` lists the ones that do not; `repair` splits restrictions with
//! several constraints into one restriction per constraint and writes the
//! repaired document as sorted N-Triples.
//!
//! **Usage:**
//! ```text
//! owlet-restrictions check <document> [--summary]
//! owlet-restrictions repair <document> [-o out.nt] [--dry-run]
//! ```
//!
//! `check` exits 1 if any restriction is malformed.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owlet_clients::{emit, LoaderArgs};
use owlet_ontology::restrictions;
use owlet_ontology::serializer::ntriples::to_ntriples;
use owlet_validator::checks;

/// Lint and repair OWL restrictions.
#[derive(Parser)]
#[command(name = "owlet-restrictions", about = "Lint and repair OWL restrictions")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    loader: LoaderArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Report malformed restrictions in the document and its imports.
    Check {
        /// Ontology document.
        document: String,

        /// Only print one line per document.
        #[arg(long)]
        summary: bool,
    },
    /// Split multi-constraint restrictions of the document.
    Repair {
        /// Ontology document.
        document: String,

        /// Output file (default: stdout).
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Print what would change without writing anything.
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Err(e) = cli.loader.init_logging() {
        eprintln!("warning: {e}");
    }

    match &cli.command {
        Command::Check { document, summary } => {
            let ontology = cli.loader.load(document)?;
            let mut report = checks::restriction_report(&ontology);
            if *summary {
                for result in &mut report.results {
                    result.details.clear();
                }
            }
            report.print();
            if !report.all_passed() {
                process::exit(1);
            }
        }
        Command::Repair {
            document,
            out,
            dry_run,
        } => {
            let ontology = cli.loader.load(document)?;
            let mut triples = ontology.triples;
            let plans = restrictions::repair(&mut triples)
                .with_context(|| format!("Failed to repair {document}"))?;

            let added: usize = plans.iter().map(|p| p.added.len()).sum();
            let removed: usize = plans.iter().map(|p| p.removed.len()).sum();
            eprintln!(
                "Repaired {} restriction(s): {added} statement(s) added, {removed} removed",
                plans.len()
            );
            if *dry_run {
                for plan in &plans {
                    for t in &plan.removed {
                        println!("- {t}");
                    }
                    for t in &plan.added {
                        println!("+ {t}");
                    }
                }
                return Ok(());
            }
            emit(out.as_ref(), &to_ntriples(&triples))?;
        }
    }
    Ok(())
}
