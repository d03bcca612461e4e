//! `vocab-lookup`: prints one term as JSON.
//!
//! **Usage:**
//! ```text
//! vocab-lookup <NAME> [--definition <file>]... [--verbose]
//! ```
//!
//! `NAME` is a prefixed name (`schema:Person`) or a full URI. Unknown terms
//! exit with a non-zero status.

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

/// Look up a vocabulary term.
#[derive(Parser)]
#[command(name = "vocab-lookup", about = "Print an RDF vocabulary term as JSON")]
struct Args {
    /// Prefixed name or full URI of the term.
    name: String,

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

    let catalog = rdf_vocab_clients::catalog_with(&args.definitions)?;
    println!("{}", rdf_vocab_clients::lookup_json(&catalog, &args.name)?);
    Ok(())
}
