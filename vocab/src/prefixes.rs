//! Well-known namespace prefixes and metadata-key resolution.
//!
//! Metadata keys and IRI values in declarations may be written as bare
//! RDFS/OWL attribute names (`domain`, `subClassOf`) or as prefixed names
//! (`owl:inverseOf`, `xsd:string`). This module turns both into absolute IRIs.

use crate::model::iris;

/// Prefixes understood everywhere, including the built-in vocabularies.
pub const WELL_KNOWN: &[(&str, &str)] = &[
    ("rdf", iris::RDF),
    ("rdfs", iris::RDFS),
    ("owl", iris::OWL),
    ("xsd", iris::XSD),
    ("dc", iris::DC),
    ("dcterms", iris::DCTERMS),
    ("foaf", iris::FOAF),
    ("skos", iris::SKOS),
    ("vs", iris::VS),
    ("event", iris::EVENT),
    ("frbr", iris::FRBR),
    ("tl", iris::TL),
    ("geo", iris::GEO),
    ("exif", "http://www.w3.org/2003/12/exif/ns#"),
    ("gr", "http://purl.org/goodrelations/v1#"),
    ("http", "http://www.w3.org/2011/http#"),
    ("ical", "http://www.w3.org/2002/12/cal/icaltzd#"),
    ("mo", "http://purl.org/ontology/mo/"),
    ("schema", "http://schema.org/"),
    ("sioc", "http://rdfs.org/sioc/ns#"),
    ("vcard", "http://www.w3.org/2006/vcard/ns#"),
];

/// Bare attribute names and the predicates they stand for.
const BARE_KEYS: &[(&str, &str)] = &[
    ("type", "http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
    ("domain", "http://www.w3.org/2000/01/rdf-schema#domain"),
    ("range", "http://www.w3.org/2000/01/rdf-schema#range"),
    ("subClassOf", "http://www.w3.org/2000/01/rdf-schema#subClassOf"),
    ("subPropertyOf", "http://www.w3.org/2000/01/rdf-schema#subPropertyOf"),
    ("seeAlso", "http://www.w3.org/2000/01/rdf-schema#seeAlso"),
    ("isDefinedBy", "http://www.w3.org/2000/01/rdf-schema#isDefinedBy"),
    ("inverseOf", "http://www.w3.org/2002/07/owl#inverseOf"),
    ("equivalentClass", "http://www.w3.org/2002/07/owl#equivalentClass"),
    ("equivalentProperty", "http://www.w3.org/2002/07/owl#equivalentProperty"),
    ("disjointWith", "http://www.w3.org/2002/07/owl#disjointWith"),
    ("unionOf", "http://www.w3.org/2002/07/owl#unionOf"),
];

/// Returns the namespace IRI for a well-known prefix.
#[must_use]
pub fn namespace(prefix: &str) -> Option<&'static str> {
    WELL_KNOWN
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, ns)| *ns)
}

/// True if `s` already looks like an absolute IRI (`scheme://...` or `urn:`).
#[must_use]
pub fn is_absolute(s: &str) -> bool {
    s.contains("://") || s.starts_with("urn:") || s.starts_with("mailto:")
}

/// True if `s` can be written between `<` and `>` in Turtle or N-Triples
/// without escaping. Whitespace, control characters, angle brackets,
/// double quotes, braces, `|`, `^`, the backtick and the backslash are refused.
#[must_use]
pub fn is_iri_safe(s: &str) -> bool {
    !s.chars().any(|c| {
        c.is_whitespace()
            || c.is_control()
            || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\')
    })
}

/// Expands a well-known prefixed name; absolute IRIs are returned as-is.
///
/// ```
/// assert_eq!(
///     rdf_vocab::prefixes::expand("xsd:string").as_deref(),
///     Some("http://www.w3.org/2001/XMLSchema#string")
/// );
/// assert_eq!(rdf_vocab::prefixes::expand("nope:thing"), None);
/// ```
#[must_use]
pub fn expand(value: &str) -> Option<String> {
    if is_absolute(value) {
        return Some(value.to_owned());
    }
    let (prefix, local) = value.split_once(':')?;
    namespace(prefix).map(|ns| format!("{ns}{local}"))
}

/// Resolves a metadata key to a predicate IRI.
///
/// Bare keys must be one of the RDFS/OWL attribute names; prefixed keys go
/// through [`expand`], falling back to `own` for the vocabulary's own prefix.
#[must_use]
pub fn predicate(key: &str, own: Option<(&str, &str)>) -> Option<String> {
    if let Some((_, iri)) = BARE_KEYS.iter().find(|(k, _)| *k == key) {
        return Some((*iri).to_owned());
    }
    if let Some((prefix, ns)) = own {
        if let Some(local) = key.strip_prefix(prefix).and_then(|r| r.strip_prefix(':')) {
            return Some(format!("{ns}{local}"));
        }
    }
    if key.contains(':') {
        expand(key)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iri_safety() {
        assert!(is_iri_safe("http://schema.org/Person"));
        assert!(is_iri_safe("xsd:string"));
        assert!(!is_iri_safe("http://example.org/a b"));
        assert!(!is_iri_safe("http://example.org/<a>"));
        assert!(!is_iri_safe("http://example.org/a\"b"));
        assert!(!is_iri_safe("http://example.org/a\\b"));
    }

    #[test]
    fn bare_keys_resolve_to_rdfs_and_owl() {
        assert_eq!(
            predicate("subClassOf", None).as_deref(),
            Some("http://www.w3.org/2000/01/rdf-schema#subClassOf")
        );
        assert_eq!(
            predicate("inverseOf", None).as_deref(),
            Some("http://www.w3.org/2002/07/owl#inverseOf")
        );
        assert_eq!(predicate("colour", None), None);
    }

    #[test]
    fn prefixed_keys_expand() {
        assert_eq!(
            predicate("owl:deprecated", None).as_deref(),
            Some("http://www.w3.org/2002/07/owl#deprecated")
        );
        assert_eq!(
            predicate("schema:domainIncludes", None).as_deref(),
            Some("http://schema.org/domainIncludes")
        );
    }

    #[test]
    fn own_prefix_is_used_for_unknown_vocabularies() {
        let own = Some(("ex", "http://example.org/ns#"));
        assert_eq!(
            predicate("ex:note", own).as_deref(),
            Some("http://example.org/ns#note")
        );
        assert_eq!(predicate("zz:note", own), None);
    }

    #[test]
    fn absolute_iris_pass_through() {
        assert_eq!(
            expand("http://example.org/x").as_deref(),
            Some("http://example.org/x")
        );
        assert!(is_absolute("urn:isbn:0451450523"));
    }
}
