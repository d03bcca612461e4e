//! Lists the built-in vocabularies and previews one serialization.
//!
//! Run with: `cargo run --example dump_catalog -p rdf-vocab`

use rdf_vocab::{Catalog, TermKind};

fn main() {
    let catalog = Catalog::builtin();

    println!("Built-in vocabularies: {}", catalog.len());
    println!("  Terms:        {}", catalog.term_count());
    println!();

    for registry in catalog {
        println!(
            "  {:8} {:45} {:>3} classes, {:>3} properties, {:>2} other",
            registry.prefix().unwrap_or("-"),
            registry.base_uri(),
            registry.classes().count(),
            registry.properties().count(),
            registry.of_kind(TermKind::Datatype).count()
                + registry.of_kind(TermKind::Individual).count(),
        );
    }

    println!();

    let Some(schema) = catalog.get("schema") else {
        return;
    };
    let json_ld = rdf_vocab::serializer::jsonld::to_json_ld(schema);
    let json_str =
        serde_json::to_string_pretty(&json_ld).unwrap_or_else(|e| format!("JSON error: {e}"));
    println!("JSON-LD output for schema: ({} bytes):", json_str.len());
    let preview_end = json_str
        .char_indices()
        .nth(200)
        .map_or(json_str.len(), |(i, _)| i);
    println!("{}...", &json_str[..preview_end]);
}
