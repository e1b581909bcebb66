//! `owlet-ntriples`: re-serializes an ontology document as sorted N-Triples.
//!
//! **Usage:**
//! ```text
//! owlet-ntriples <document> [-o out.nt] [--closure]
//! ```
//!
//! Without `--closure` only the document's own statements are written. The
//! output is sorted, so two runs over the same statements compare equal.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use owlet_clients::{emit, LoaderArgs};
use owlet_ontology::serializer::ntriples::{closure_to_ntriples, document_to_ntriples};

/// Write an ontology document as sorted N-Triples.
#[derive(Parser)]
#[command(name = "owlet-ntriples", about = "Write an ontology as sorted N-Triples")]
struct Args {
    /// Ontology document: a file path, a file: IRI or an http(s): IRI.
    document: String,

    /// Output file (default: stdout).
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Include the statements of every loaded import.
    #[arg(long)]
    closure: bool,

    #[command(flatten)]
    loader: LoaderArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Err(e) = args.loader.init_logging() {
        eprintln!("warning: {e}");
    }

    let ontology = args.loader.load(&args.document)?;
    let text = if args.closure {
        closure_to_ntriples(&ontology)
    } else {
        document_to_ntriples(&ontology)
    };
    emit(args.out.as_ref(), &text)?;

    if let Some(out) = &args.out {
        let count = text.lines().count();
        eprintln!("Wrote {count} statements to {}", out.display());
    }
    Ok(())
}
