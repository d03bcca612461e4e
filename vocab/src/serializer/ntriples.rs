//! N-Triples serializer for a vocabulary registry.
//!
//! Produces a valid N-Triples document (one triple per line, absolute IRIs).
//! N-Triples is suitable for streaming, bulk loading, and diff-friendly storage.

use super::{describe, describe_header, Object, Resolver};
use crate::catalog::Catalog;
use crate::registry::VocabularyRegistry;

const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// Serializes a registry to an N-Triples string.
#[must_use]
pub fn to_ntriples(registry: &VocabularyRegistry) -> String {
    write_ntriples(registry, None)
}

/// Like [`to_ntriples`], also resolving prefixes of the vocabularies in
/// `catalog`.
#[must_use]
pub fn to_ntriples_with_catalog(registry: &VocabularyRegistry, catalog: &Catalog) -> String {
    write_ntriples(registry, Some(catalog))
}

fn write_ntriples(registry: &VocabularyRegistry, catalog: Option<&Catalog>) -> String {
    let resolver = Resolver::new(registry, catalog);
    let mut out = String::with_capacity(registry.len() * 512);

    for (predicate, object) in describe_header(registry) {
        triple(&mut out, registry.base_uri(), &predicate, &object);
    }
    for term in registry {
        for (predicate, object) in describe(resolver, term) {
            triple(&mut out, term.uri(), &predicate, &object);
        }
    }

    out
}

fn triple(out: &mut String, subj: &str, pred: &str, obj: &Object) {
    out.push('<');
    out.push_str(subj);
    out.push_str("> <");
    out.push_str(pred);
    out.push_str("> ");
    match obj {
        Object::Iri(iri) => {
            out.push('<');
            out.push_str(iri);
            out.push('>');
        }
        Object::Literal(s) => out.push_str(&lit(s)),
    }
    out.push_str(" .\n");
}

fn lit(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r");
    format!("\"{escaped}\"^^<{XSD_STRING}>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Declaration, MetaValue};

    #[test]
    fn every_line_ends_with_period() {
        for registry in Catalog::builtin() {
            let nt = to_ntriples(registry);
            assert!(!nt.is_empty());
            for line in nt.lines() {
                assert!(line.starts_with('<'), "Line does not start with a subject: {line}");
                assert!(line.ends_with(" ."), "Line does not end with ' .': {line}");
            }
        }
    }

    #[test]
    fn contains_typed_term() {
        let http = Catalog::builtin().get("http").unwrap();
        let nt = to_ntriples(http);
        assert!(nt.contains(
            "<http://www.w3.org/2011/http#Request> \
             <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> \
             <http://www.w3.org/2000/01/rdf-schema#Class> ."
        ));
    }

    #[test]
    fn list_metadata_becomes_one_triple_per_value() {
        let schema = Catalog::builtin().get("schema").unwrap();
        let nt = to_ntriples(schema);
        let email_domains = nt
            .lines()
            .filter(|l| {
                l.starts_with("<http://schema.org/email> <http://schema.org/domainIncludes>")
            })
            .count();
        assert_eq!(email_domains, 3);
    }

    #[test]
    fn loaded_vocabularies_link_through_the_catalog() {
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

        let link = "<http://example.org/b#Child> \
                    <http://www.w3.org/2000/01/rdf-schema#subClassOf> \
                    <http://example.org/a#Base> .";
        assert!(to_ntriples_with_catalog(exb, &catalog).contains(link));
        assert!(!to_ntriples(exb).contains("subClassOf"));
    }
}
