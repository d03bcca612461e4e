//! Shared setup for the `vocab-build` and `vocab-lookup` binaries.
//!
//! The binaries only parse arguments; selection and artifact writing live
//! here.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rdf_vocab::serializer::{jsonld, ntriples, turtle};
use rdf_vocab::{loader, Catalog, VocabularyRegistry};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber on stderr.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `debug` and the
/// default is `warn`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// The built-in catalog extended with vocabularies read from definition
/// files.
///
/// # Errors
///
/// Fails if a file cannot be loaded or clashes with a vocabulary already in
/// the catalog.
pub fn catalog_with(definitions: &[PathBuf]) -> Result<Catalog> {
    let mut registries: Vec<_> = Catalog::builtin().iter().cloned().collect();
    for path in definitions {
        let registry = loader::load_path(path)
            .with_context(|| format!("Failed to load vocabulary definition {}", path.display()))?;
        registries.push(registry);
    }
    Catalog::new(registries).context("Failed to assemble vocabulary catalog")
}

/// Pretty JSON for the term `name` names, a prefixed name or a full URI.
///
/// # Errors
///
/// Fails if no vocabulary in `catalog` declares the term.
pub fn lookup_json(catalog: &Catalog, name: &str) -> Result<String> {
    let term = catalog
        .resolve(name)
        .with_context(|| format!("Failed to look up {name}"))?;
    serde_json::to_string_pretty(term).context("Failed to serialize term")
}

/// The vocabularies named by `prefixes`, or all of them when none are named.
///
/// # Errors
///
/// Fails on the first prefix the catalog does not know.
pub fn select<'a>(
    catalog: &'a Catalog,
    prefixes: &[String],
) -> Result<Vec<&'a VocabularyRegistry>> {
    if prefixes.is_empty() {
        return Ok(catalog.iter().collect());
    }
    let mut selected = Vec::with_capacity(prefixes.len());
    for prefix in prefixes {
        match catalog.get(prefix) {
            Some(registry) => selected.push(registry),
            None => bail!("Unknown vocabulary prefix: {prefix}"),
        }
    }
    Ok(selected)
}

/// Writes `<stem>.jsonld`, `<stem>.ttl` and `<stem>.nt` for one vocabulary
/// and returns the paths written.
///
/// Prefixed names resolve against the whole `catalog`, so loaded
/// vocabularies may refer to each other.
///
/// # Errors
///
/// Fails if a file cannot be written.
pub fn write_artifacts(
    out: &Path,
    registry: &VocabularyRegistry,
    catalog: &Catalog,
) -> Result<Vec<PathBuf>> {
    let stem = registry
        .prefix()
        .map_or_else(|| file_stem_for(registry.base_uri()), str::to_owned);
    println!(
        "  {stem}: {} ({} classes, {} properties, {} terms)",
        registry.base_uri(),
        registry.classes().count(),
        registry.properties().count(),
        registry.len()
    );

    // JSON-LD
    let json_path = out.join(format!("{stem}.jsonld"));
    let json_value = jsonld::to_json_ld_with_catalog(registry, catalog);
    let json_str = serde_json::to_string_pretty(&json_value)
        .with_context(|| format!("Failed to serialize {stem} to JSON-LD"))?;
    fs::write(&json_path, &json_str)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;
    info!(path = %json_path.display(), "written");

    // Turtle
    let ttl_path = out.join(format!("{stem}.ttl"));
    fs::write(&ttl_path, turtle::to_turtle_with_catalog(registry, catalog))
        .with_context(|| format!("Failed to write {}", ttl_path.display()))?;
    info!(path = %ttl_path.display(), "written");

    // N-Triples
    let nt_path = out.join(format!("{stem}.nt"));
    fs::write(&nt_path, ntriples::to_ntriples_with_catalog(registry, catalog))
        .with_context(|| format!("Failed to write {}", nt_path.display()))?;
    info!(path = %nt_path.display(), "written");

    Ok(vec![json_path, ttl_path, nt_path])
}

/// A file name for vocabularies loaded without a prefix.
#[must_use]
pub fn file_stem_for(base_uri: &str) -> String {
    base_uri
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect::<String>()
        .trim_matches('_')
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_only() {
        let catalog = catalog_with(&[]).unwrap();
        assert_eq!(catalog.len(), Catalog::builtin().len());
    }

    #[test]
    fn adds_definition_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ex.json");
        std::fs::write(
            &path,
            r#"{"vocabulary": {"baseUri": "http://example.org/ns#", "prefix": "ex", "terms": [{"name": "Foo", "kind": "class"}]}}"#,
        )
        .unwrap();
        let catalog = catalog_with(&[path]).unwrap();
        assert_eq!(catalog.expand("ex:Foo").unwrap(), "http://example.org/ns#Foo");
    }

    #[test]
    fn clashing_prefix_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clash.yaml");
        std::fs::write(
            &path,
            "vocabulary:\n  baseUri: \"http://example.org/schema#\"\n  prefix: schema\n",
        )
        .unwrap();
        let err = catalog_with(&[path]).unwrap_err();
        assert!(err.to_string().contains("catalog"));
    }

    #[test]
    fn lookup_by_prefixed_name_or_uri() {
        let catalog = Catalog::builtin();
        let by_pname: serde_json::Value =
            serde_json::from_str(&lookup_json(catalog, "schema:Person").unwrap()).unwrap();
        assert_eq!(by_pname["uri"], "http://schema.org/Person");
        assert_eq!(by_pname["kind"], "class");

        let by_uri = lookup_json(catalog, "http://schema.org/Person").unwrap();
        assert_eq!(serde_json::from_str::<serde_json::Value>(&by_uri).unwrap(), by_pname);

        let err = lookup_json(catalog, "schema:Bogus").unwrap_err();
        assert!(err.to_string().contains("schema:Bogus"));
    }

    #[test]
    fn select_all_or_named() {
        let catalog = Catalog::builtin();
        assert_eq!(select(catalog, &[]).unwrap().len(), catalog.len());

        let named = select(catalog, &["vcard".to_owned(), "gr".to_owned()]).unwrap();
        let prefixes: Vec<_> = named.iter().filter_map(|r| r.prefix()).collect();
        assert_eq!(prefixes, ["vcard", "gr"]);

        let err = select(catalog, &["gr".to_owned(), "nope".to_owned()]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown vocabulary prefix: nope");
    }

    #[test]
    fn writes_three_artifacts_per_vocabulary() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::builtin();
        let http = catalog.get("http").unwrap();

        let written = write_artifacts(dir.path(), http, catalog).unwrap();
        let names: Vec<_> = written
            .iter()
            .filter_map(|p| p.file_name()?.to_str())
            .collect();
        assert_eq!(names, ["http.jsonld", "http.ttl", "http.nt"]);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&written[0]).unwrap()).unwrap();
        assert_eq!(json["@graph"].as_array().unwrap().len(), http.len() + 1);
        assert!(std::fs::read_to_string(&written[1]).unwrap().starts_with("@prefix"));
        assert!(std::fs::read_to_string(&written[2])
            .unwrap()
            .contains("<http://www.w3.org/2011/http#Request>"));
    }

    #[test]
    fn unprefixed_vocabulary_gets_a_stem_from_its_base_uri() {
        assert_eq!(file_stem_for("http://example.org/ns#"), "http___example_org_ns");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("link.yaml");
        std::fs::write(
            &path,
            "vocabulary:\n  baseUri: \"http://example.org/ns#\"\n  terms:\n    - name: Foo\n      kind: class\n      metadata:\n        subClassOf: { \"@id\": \"schema:Thing\" }\n",
        )
        .unwrap();
        let catalog = catalog_with(&[path]).unwrap();
        let loaded = catalog.by_base_uri("http://example.org/ns#").unwrap();

        let out = dir.path().join("public");
        std::fs::create_dir_all(&out).unwrap();
        write_artifacts(&out, loaded, &catalog).unwrap();
        let nt = std::fs::read_to_string(out.join("http___example_org_ns.nt")).unwrap();
        assert!(nt.contains(
            "<http://example.org/ns#Foo> \
             <http://www.w3.org/2000/01/rdf-schema#subClassOf> \
             <http://schema.org/Thing> ."
        ));
    }
}
