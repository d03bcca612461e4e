//! Serializers for vocabulary registries.
//!
//! Three serialization formats are supported:
//! - **Turtle** ([`turtle`]): for RDF tooling
//! - **N-Triples** ([`ntriples`]): one triple per line, absolute IRIs
//! - **JSON-LD** ([`jsonld`]): a `@context` plus a `@graph` of term nodes
//!
//! All three describe the same statements: a vocabulary header node, then one
//! subject per term with its type, label, comment and metadata.
//!
//! Prefixed metadata keys and IRI values resolve against the vocabulary's own
//! prefix, then the well-known prefixes in [`prefixes`]. The `*_with_catalog`
//! entry points also try every vocabulary in a [`Catalog`], so a loaded
//! vocabulary can refer to another loaded one by prefix.

pub mod jsonld;
pub mod ntriples;
pub mod turtle;

use tracing::warn;

use crate::catalog::Catalog;
use crate::model::{MetaValue, Term, TermKind};
use crate::prefixes;
use crate::registry::VocabularyRegistry;

pub(crate) const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub(crate) const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub(crate) const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
pub(crate) const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";

/// The `rdf:type` object for a term kind, `None` for undeclared kinds.
pub(crate) fn kind_iri(kind: TermKind) -> Option<&'static str> {
    match kind {
        TermKind::Class => Some("http://www.w3.org/2000/01/rdf-schema#Class"),
        TermKind::Property => Some("http://www.w3.org/1999/02/22-rdf-syntax-ns#Property"),
        TermKind::Datatype => Some("http://www.w3.org/2000/01/rdf-schema#Datatype"),
        TermKind::Individual => Some("http://www.w3.org/2002/07/owl#NamedIndividual"),
        TermKind::Other => None,
    }
}

/// Object position of a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Object {
    Iri(String),
    Literal(String),
}

/// Turns prefixed names into absolute IRIs for one vocabulary.
#[derive(Clone, Copy)]
pub(crate) struct Resolver<'a> {
    own: Option<(&'a str, &'a str)>,
    catalog: Option<&'a Catalog>,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(registry: &'a VocabularyRegistry, catalog: Option<&'a Catalog>) -> Self {
        Resolver {
            own: registry.prefix().map(|p| (p, registry.base_uri())),
            catalog,
        }
    }

    fn predicate(&self, key: &str) -> Option<String> {
        prefixes::predicate(key, self.own).or_else(|| self.via_catalog(key))
    }

    fn iri(&self, value: &str) -> Option<String> {
        if let Some((prefix, ns)) = self.own {
            if let Some(local) = value.strip_prefix(prefix).and_then(|r| r.strip_prefix(':')) {
                return Some(format!("{ns}{local}"));
            }
        }
        prefixes::expand(value).or_else(|| self.via_catalog(value))
    }

    fn via_catalog(&self, pname: &str) -> Option<String> {
        let (prefix, local) = pname.split_once(':')?;
        let vocab = self.catalog?.get(prefix)?;
        Some(format!("{}{local}", vocab.base_uri()))
    }
}

/// Predicate/object pairs describing one term, in output order.
pub(crate) fn describe(resolver: Resolver<'_>, term: &Term) -> Vec<(String, Object)> {
    let mut out = Vec::new();
    if let Some(kind) = kind_iri(term.kind()) {
        out.push((RDF_TYPE.to_owned(), Object::Iri(kind.to_owned())));
    }
    if let Some(label) = term.label() {
        out.push((RDFS_LABEL.to_owned(), Object::Literal(label.to_owned())));
    }
    if let Some(comment) = term.comment() {
        out.push((RDFS_COMMENT.to_owned(), Object::Literal(comment.to_owned())));
    }
    for (key, value) in term.metadata() {
        let Some(predicate) = resolver.predicate(key) else {
            warn!(term = term.uri(), key = %key, "skipping unresolvable metadata key");
            continue;
        };
        for item in value.values() {
            match item {
                MetaValue::Literal(s) => out.push((predicate.clone(), Object::Literal(s.clone()))),
                MetaValue::Iri(s) => match resolver.iri(s) {
                    Some(iri) => out.push((predicate.clone(), Object::Iri(iri))),
                    None => warn!(term = term.uri(), value = %s, "skipping unresolvable IRI"),
                },
                MetaValue::List(_) => {}
            }
        }
    }
    out
}

/// Predicate/object pairs describing the vocabulary itself.
pub(crate) fn describe_header(registry: &VocabularyRegistry) -> Vec<(String, Object)> {
    let mut out = vec![(RDF_TYPE.to_owned(), Object::Iri(OWL_ONTOLOGY.to_owned()))];
    if let Some(label) = registry.label() {
        out.push((RDFS_LABEL.to_owned(), Object::Literal(label.to_owned())));
    }
    if let Some(comment) = registry.comment() {
        out.push((RDFS_COMMENT.to_owned(), Object::Literal(comment.to_owned())));
    }
    out
}

/// Returns `prefix:local` if `iri` falls in one of `namespaces` and the local
/// part is safe to write unescaped.
pub(crate) fn shorten<'a>(iri: &str, namespaces: impl IntoIterator<Item = (&'a str, &'a str)>) -> Option<String> {
    namespaces.into_iter().find_map(|(prefix, ns)| {
        iri.strip_prefix(ns)
            .filter(|local| {
                !local.is_empty()
                    && !local.starts_with('-')
                    && local
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            })
            .map(|local| format!("{prefix}:{local}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Declaration;

    fn registry() -> VocabularyRegistry {
        VocabularyRegistry::builder("http://example.org/ns#")
            .prefix("ex")
            .declare(
                Declaration::property("size")
                    .with_label("size")
                    .with_meta("range", MetaValue::iri("xsd:integer"))
                    .with_meta("domain", MetaValue::iri("ex:Thing"))
                    .with_meta("colour", MetaValue::literal("red")),
            )
            .build()
    }

    #[test]
    fn describes_kind_label_and_resolved_metadata() {
        let reg = registry();
        let term = reg.get("size").unwrap();
        let statements = describe(Resolver::new(&reg, None), term);
        assert_eq!(
            statements[0],
            (
                RDF_TYPE.to_owned(),
                Object::Iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#Property".to_owned())
            )
        );
        assert!(statements.contains(&(
            "http://www.w3.org/2000/01/rdf-schema#range".to_owned(),
            Object::Iri("http://www.w3.org/2001/XMLSchema#integer".to_owned())
        )));
        assert!(statements.contains(&(
            "http://www.w3.org/2000/01/rdf-schema#domain".to_owned(),
            Object::Iri("http://example.org/ns#Thing".to_owned())
        )));
        // bare `colour` is not a known attribute
        assert_eq!(statements.len(), 4);
    }

    #[test]
    fn shorten_only_safe_locals() {
        let ns = [("rdfs", "http://www.w3.org/2000/01/rdf-schema#")];
        assert_eq!(
            shorten("http://www.w3.org/2000/01/rdf-schema#label", ns).as_deref(),
            Some("rdfs:label")
        );
        assert_eq!(shorten("http://www.w3.org/2000/01/rdf-schema#a.b", ns), None);
        assert_eq!(shorten("http://example.org/x", ns), None);
        assert_eq!(shorten("http://www.w3.org/2000/01/rdf-schema#-label", ns), None);
        assert_eq!(
            shorten("http://www.w3.org/2000/01/rdf-schema#sub-label", ns).as_deref(),
            Some("rdfs:sub-label")
        );
    }

    fn linked_catalog() -> Catalog {
        let base = VocabularyRegistry::builder("http://example.org/a#")
            .prefix("exa")
            .declare(Declaration::class("Base"))
            .build();
        let child = VocabularyRegistry::builder("http://example.org/b#")
            .prefix("exb")
            .declare(
                Declaration::class("Child")
                    .with_meta("subClassOf", MetaValue::iri("exa:Base"))
                    .with_meta("exa:note", MetaValue::literal("kept")),
            )
            .build();
        Catalog::new([base, child]).unwrap()
    }

    #[test]
    fn catalog_prefixes_resolve_keys_and_values() {
        let catalog = linked_catalog();
        let exb = catalog.get("exb").unwrap();
        let child = exb.get("Child").unwrap();

        let statements = describe(Resolver::new(exb, Some(&catalog)), child);
        assert!(statements.contains(&(
            "http://www.w3.org/2000/01/rdf-schema#subClassOf".to_owned(),
            Object::Iri("http://example.org/a#Base".to_owned())
        )));
        assert!(statements.contains(&(
            "http://example.org/a#note".to_owned(),
            Object::Literal("kept".to_owned())
        )));

        // without the catalog both references are skipped
        let alone = describe(Resolver::new(exb, None), child);
        assert_eq!(alone.len(), 1);
    }
}
