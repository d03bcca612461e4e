//! `vocab-build`: serializes vocabularies from the `rdf-vocab` library and
//! writes the artifacts to the output directory.
//!
//! **Outputs**, per vocabulary:
//! - `<out>/<prefix>.jsonld`: JSON-LD 1.1
//! - `<out>/<prefix>.ttl`: Turtle 1.1
//! - `<out>/<prefix>.nt`: N-Triples
//!
//! **Usage:**
//! ```text
//! vocab-build [--out <path>] [--vocab <prefix>]... [--definition <file>]... [--verbose]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Build vocabulary artifacts.
#[derive(Parser)]
#[command(name = "vocab-build", about = "Serialize RDF vocabularies to JSON-LD, Turtle and N-Triples")]
struct Args {
    /// Output directory for generated artifacts.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// Only build the vocabulary with this prefix (repeatable).
    #[arg(long = "vocab", value_name = "PREFIX")]
    vocabs: Vec<String>,

    /// Extra vocabulary definition file, YAML or JSON (repeatable).
    #[arg(long = "definition", value_name = "FILE")]
    definitions: Vec<PathBuf>,

    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    rdf_vocab_clients::init_logging(args.verbose);
    let out = &args.out;

    let catalog = rdf_vocab_clients::catalog_with(&args.definitions)?;
    let selected = rdf_vocab_clients::select(&catalog, &args.vocabs)?;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    // Print summary
    println!(
        "{} vocabularies, {} terms",
        selected.len(),
        selected.iter().map(|r| r.len()).sum::<usize>()
    );

    for registry in selected {
        rdf_vocab_clients::write_artifacts(out, registry, &catalog)?;
    }

    println!("Build complete.");
    Ok(())
}
