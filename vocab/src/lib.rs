//! Common RDF vocabularies encoded as typed Rust data.
//!
//! The `rdf-vocab` crate provides eight widely used vocabularies (EXIF,
//! GoodRelations, HTTP, iCal, Music Ontology, Schema.org, SIOC and vCard) as
//! immutable [`VocabularyRegistry`] instances, a [`Catalog`] for lookups that
//! span vocabularies, a loader for vocabularies defined in YAML or JSON, and
//! serializers that produce Turtle, N-Triples and JSON-LD.
//!
//! # Entry Point
//!
//! ```
//! let catalog = rdf_vocab::Catalog::builtin();
//! let schema = catalog.get("schema").unwrap();
//! let person = schema.class("Person").unwrap();
//! assert_eq!(person.uri(), "http://schema.org/Person");
//! assert_eq!(person.label(), Some("Person"));
//! ```
//!
//! # Custom vocabularies
//!
//! ```
//! use rdf_vocab::{Declaration, VocabularyRegistry};
//!
//! let ex = VocabularyRegistry::create(
//!     "http://example.org/ns#",
//!     [Declaration::class("Foo").with_label("Foo Thing")],
//! );
//! assert_eq!(ex.uri("Foo").unwrap(), "http://example.org/ns#Foo");
//! // not strict: undeclared names are synthesized
//! assert_eq!(ex.uri("Bar").unwrap(), "http://example.org/ns#Bar");
//! ```
//!
//! # Serialization
//!
//! ```
//! # #[cfg(feature = "serializers")]
//! # {
//! let vcard = rdf_vocab::Catalog::builtin().get("vcard").unwrap();
//! let json_ld = rdf_vocab::serializer::jsonld::to_json_ld(vcard);
//! let turtle = rdf_vocab::serializer::turtle::to_turtle(vcard);
//! # assert!(json_ld["@graph"].is_array());
//! # assert!(turtle.starts_with("@prefix"));
//! # }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod catalog;
pub mod error;
#[cfg(feature = "loader")]
pub mod loader;
pub mod model;
pub mod prefixes;
pub mod registry;
#[cfg(feature = "serializers")]
pub mod serializer;
pub mod vocabularies;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use model::{
    Declaration, MetaDecl, MetaValue, Metadata, Term, TermDecl, TermKind, VocabularyHeader,
    VocabularyModule,
};
pub use registry::{DuplicatePolicy, RegistryBuilder, VocabularyRegistry};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn vocabulary_count() {
        assert_eq!(vocabularies::all().len(), 8);
        assert_eq!(Catalog::builtin().len(), 8);
    }

    #[test]
    fn every_builtin_is_strict() {
        for registry in Catalog::builtin() {
            assert!(registry.is_strict(), "{:?} is not strict", registry.prefix());
        }
    }

    #[test]
    fn registry_sizes_match_declarations() {
        for module in vocabularies::all() {
            let registry = VocabularyRegistry::from_module(&module);
            let distinct: HashSet<&str> = module.declarations().map(|d| d.name).collect();
            assert_eq!(
                registry.len(),
                distinct.len(),
                "vocabulary {}",
                module.header.prefix
            );
        }
    }

    #[test]
    fn only_ical_repeats_short_names() {
        for module in vocabularies::all() {
            let distinct: HashSet<&str> = module.declarations().map(|d| d.name).collect();
            let repeats = module.declaration_count() - distinct.len();
            if module.header.prefix == "ical" {
                assert_eq!(repeats, 3);
            } else {
                assert_eq!(repeats, 0, "Duplicate short name in {}", module.header.prefix);
            }
        }
    }

    #[test]
    fn all_term_uris_unique() {
        let mut uris = HashSet::new();
        for registry in Catalog::builtin() {
            for term in registry {
                assert!(uris.insert(term.uri()), "Duplicate term URI: {}", term.uri());
            }
        }
    }

    #[test]
    fn all_terms_have_labels() {
        for registry in Catalog::builtin() {
            for term in registry {
                assert!(term.label().is_some(), "Missing label on {}", term.uri());
            }
        }
    }

    #[test]
    fn metadata_keys_resolve() {
        for registry in Catalog::builtin() {
            let own = registry.prefix().map(|p| (p, registry.base_uri()));
            for term in registry {
                for key in term.metadata().keys() {
                    assert!(
                        prefixes::predicate(key, own).is_some(),
                        "Unresolvable metadata key {key} on {}",
                        term.uri()
                    );
                }
            }
        }
    }
}
