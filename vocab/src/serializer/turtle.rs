//! Turtle 1.1 serializer for a vocabulary registry.
//!
//! Produces a Turtle document with the vocabulary header followed by one
//! subject block per term, in registration order.

use super::{describe, describe_header, shorten, Object, Resolver, RDF_TYPE};
use crate::catalog::Catalog;
use crate::registry::VocabularyRegistry;

const STANDARD_PREFIXES: &[(&str, &str)] = &[
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
];

/// Serializes a registry to a Turtle string.
#[must_use]
pub fn to_turtle(registry: &VocabularyRegistry) -> String {
    write_turtle(registry, None)
}

/// Like [`to_turtle`], also resolving prefixes of the vocabularies in
/// `catalog`.
#[must_use]
pub fn to_turtle_with_catalog(registry: &VocabularyRegistry, catalog: &Catalog) -> String {
    write_turtle(registry, Some(catalog))
}

fn write_turtle(registry: &VocabularyRegistry, catalog: Option<&Catalog>) -> String {
    let resolver = Resolver::new(registry, catalog);
    let mut out = String::with_capacity(registry.len() * 256);

    let mut namespaces: Vec<(&str, &str)> = STANDARD_PREFIXES.to_vec();
    if let Some(prefix) = registry.prefix() {
        if !STANDARD_PREFIXES.iter().any(|(p, _)| *p == prefix) {
            namespaces.push((prefix, registry.base_uri()));
        }
    }
    for (prefix, ns) in &namespaces {
        out.push_str(&format!("@prefix {prefix}: <{ns}> .\n"));
    }
    out.push('\n');

    subject_block(
        &mut out,
        &format!("<{}>", registry.base_uri()),
        &describe_header(registry),
        &namespaces,
    );

    for term in registry {
        let subject =
            shorten(term.uri(), namespaces.iter().copied()).unwrap_or_else(|| format!("<{}>", term.uri()));
        subject_block(&mut out, &subject, &describe(resolver, term), &namespaces);
    }

    out
}

fn subject_block(out: &mut String, subject: &str, statements: &[(String, Object)], namespaces: &[(&str, &str)]) {
    out.push_str(subject);
    if statements.is_empty() {
        // a bare subject still needs a predicate to be valid Turtle
        out.push_str(" a <http://www.w3.org/2000/01/rdf-schema#Resource> .\n\n");
        return;
    }
    for (i, (predicate, object)) in statements.iter().enumerate() {
        out.push_str(if i == 0 { "\n  " } else { " ;\n  " });
        if predicate == RDF_TYPE {
            out.push('a');
        } else {
            out.push_str(&term_ref(predicate, namespaces));
        }
        out.push(' ');
        match object {
            Object::Iri(iri) => out.push_str(&term_ref(iri, namespaces)),
            Object::Literal(s) => out.push_str(&turtle_string(s)),
        }
    }
    out.push_str(" .\n\n");
}

fn term_ref(iri: &str, namespaces: &[(&str, &str)]) -> String {
    shorten(iri, namespaces.iter().copied()).unwrap_or_else(|| format!("<{iri}>"))
}

fn turtle_string(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r");
    format!("\"{escaped}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Declaration, MetaValue};

    #[test]
    fn produces_prefixes_and_header() {
        let schema = Catalog::builtin().get("schema").unwrap();
        let turtle = to_turtle(schema);
        assert!(turtle.contains("@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> ."));
        assert!(turtle.contains("@prefix schema: <http://schema.org/> ."));
        assert!(turtle.contains("<http://schema.org/>\n  a owl:Ontology"));
    }

    #[test]
    fn writes_person_block() {
        let schema = Catalog::builtin().get("schema").unwrap();
        let turtle = to_turtle(schema);
        assert!(turtle.contains("schema:Person\n  a rdfs:Class ;\n  rdfs:label \"Person\""));
        assert!(turtle.contains("rdfs:subClassOf schema:Thing"));
    }

    #[test]
    fn one_block_per_term() {
        for registry in Catalog::builtin() {
            let turtle = to_turtle(registry);
            let blocks = turtle
                .split("\n\n")
                .filter(|chunk| !chunk.is_empty() && !chunk.starts_with("@prefix"))
                .count();
            assert_eq!(blocks, registry.len() + 1, "vocabulary {:?}", registry.prefix());
        }
    }

    #[test]
    fn catalog_variant_keeps_cross_vocabulary_links() {
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

        let turtle = to_turtle_with_catalog(exb, &catalog);
        assert!(turtle.contains("exb:Child\n  a rdfs:Class ;\n  rdfs:subClassOf <http://example.org/a#Base> ."));
        assert!(!to_turtle(exb).contains("subClassOf"));
    }

    #[test]
    fn escapes_quotes_and_newlines() {
        assert_eq!(turtle_string("a \"b\"\nc"), "\"a \\\"b\\\"\\nc\"");
    }
}
