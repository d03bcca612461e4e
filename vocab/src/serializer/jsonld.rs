//! JSON-LD 1.1 serializer for a vocabulary registry.
//!
//! Produces a single JSON-LD document containing a `@context` and a `@graph`
//! array: the vocabulary node first, then one node per term.

use serde_json::{json, Map, Value};

use super::{describe, describe_header, shorten, Object, Resolver, RDF_TYPE};
use crate::catalog::Catalog;
use crate::registry::VocabularyRegistry;

const STANDARD_PREFIXES: &[(&str, &str)] = &[
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
];

/// Serializes a registry to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(registry: &VocabularyRegistry) -> Value {
    build_json_ld(registry, None)
}

/// Like [`to_json_ld`], also resolving prefixes of the vocabularies in
/// `catalog`.
#[must_use]
pub fn to_json_ld_with_catalog(registry: &VocabularyRegistry, catalog: &Catalog) -> Value {
    build_json_ld(registry, Some(catalog))
}

fn build_json_ld(registry: &VocabularyRegistry, catalog: Option<&Catalog>) -> Value {
    let resolver = Resolver::new(registry, catalog);
    let mut namespaces: Vec<(&str, &str)> = STANDARD_PREFIXES.to_vec();
    if let Some(prefix) = registry.prefix() {
        if !STANDARD_PREFIXES.iter().any(|(p, _)| *p == prefix) {
            namespaces.push((prefix, registry.base_uri()));
        }
    }

    let mut ctx = Map::new();
    for (prefix, ns) in &namespaces {
        ctx.insert((*prefix).to_owned(), json!(ns));
    }

    let mut graph = Vec::with_capacity(registry.len() + 1);
    graph.push(node(registry.base_uri(), describe_header(registry), &namespaces));
    for term in registry {
        graph.push(node(term.uri(), describe(resolver, term), &namespaces));
    }

    json!({
        "@context": Value::Object(ctx),
        "@graph": graph
    })
}

fn node(id: &str, statements: Vec<(String, Object)>, namespaces: &[(&str, &str)]) -> Value {
    let mut map = Map::new();
    map.insert("@id".to_owned(), json!(id));
    for (predicate, object) in statements {
        let (key, value) = if predicate == RDF_TYPE {
            let Object::Iri(iri) = object else { continue };
            ("@type".to_owned(), json!(compact(&iri, namespaces)))
        } else {
            let value = match object {
                Object::Iri(iri) => json!({ "@id": compact(&iri, namespaces) }),
                Object::Literal(s) => json!(s),
            };
            (compact(&predicate, namespaces), value)
        };
        // Repeated predicates are promoted to an array rather than overwritten.
        if let Some(existing) = map.get_mut(&key) {
            let prev = std::mem::replace(existing, Value::Null);
            *existing = match prev {
                Value::Array(mut arr) => {
                    arr.push(value);
                    Value::Array(arr)
                }
                other => json!([other, value]),
            };
        } else {
            map.insert(key, value);
        }
    }
    Value::Object(map)
}

fn compact(iri: &str, namespaces: &[(&str, &str)]) -> String {
    shorten(iri, namespaces.iter().copied()).unwrap_or_else(|| iri.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Declaration, MetaValue};

    #[test]
    fn produces_context_and_graph() {
        let sioc = Catalog::builtin().get("sioc").unwrap();
        let json = to_json_ld(sioc);
        assert_eq!(json["@context"]["sioc"], "http://rdfs.org/sioc/ns#");
        assert_eq!(json["@context"]["rdfs"], "http://www.w3.org/2000/01/rdf-schema#");
        let graph = json["@graph"].as_array().expect("@graph must be array");
        assert_eq!(graph.len(), sioc.len() + 1);
        assert_eq!(graph[0]["@type"], "owl:Ontology");
    }

    #[test]
    fn all_nodes_have_ids() {
        for registry in Catalog::builtin() {
            let json = to_json_ld(registry);
            let graph = json["@graph"].as_array().expect("@graph must be array");
            for (i, node) in graph.iter().enumerate() {
                assert!(node["@id"].is_string(), "Node at index {i} is missing @id");
            }
        }
    }

    #[test]
    fn list_values_become_arrays() {
        let schema = Catalog::builtin().get("schema").unwrap();
        let json = to_json_ld(schema);
        let graph = json["@graph"].as_array().expect("@graph must be array");
        let email = graph
            .iter()
            .find(|n| n["@id"] == "http://schema.org/email")
            .expect("email node");
        assert_eq!(email["@type"], "rdf:Property");
        assert_eq!(email["schema:domainIncludes"].as_array().map(Vec::len), Some(3));
        assert_eq!(email["schema:rangeIncludes"]["@id"], "schema:Text");
    }

    #[test]
    fn catalog_variant_writes_cross_vocabulary_ids() {
        let base = VocabularyRegistry::builder("http://example.org/a#")
            .prefix("exa")
            .declare(Declaration::class("Base"))
            .build();
        let child = VocabularyRegistry::builder("http://example.org/b#")
            .prefix("exb")
            .declare(Declaration::class("Child").with_meta("subClassOf", MetaValue::iri("exa:Base")))
            .build();
        let catalog = Catalog::new([base, child]).unwrap();
        let exb = catalog.get("exb").unwrap();

        let json = to_json_ld_with_catalog(exb, &catalog);
        assert_eq!(json["@graph"][1]["rdfs:subClassOf"]["@id"], "http://example.org/a#Base");
        assert!(to_json_ld(exb)["@graph"][1].get("rdfs:subClassOf").is_none());
    }
}
