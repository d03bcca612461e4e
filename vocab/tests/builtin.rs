//! Integration tests over the built-in vocabularies and the catalog.

use std::collections::HashSet;

use rdf_vocab::vocabularies;
use rdf_vocab::{Catalog, DuplicatePolicy, Error, MetaValue, TermKind, VocabularyRegistry};

fn vocab(prefix: &str) -> &'static VocabularyRegistry {
    Catalog::builtin()
        .get(prefix)
        .unwrap_or_else(|| panic!("missing built-in vocabulary {prefix}"))
}

// =============================================================================
// Registry scenarios
// =============================================================================

#[test]
fn schema_person() {
    let schema = vocab("schema");
    assert_eq!(schema.base_uri(), "http://schema.org/");
    let person = schema.term("Person").unwrap();
    assert_eq!(person.uri(), "http://schema.org/Person");
    assert_eq!(person.label(), Some("Person"));
    assert!(person.comment().unwrap().starts_with("A person"));
    assert!(person.is_class());
    assert_eq!(schema.class("Person").unwrap().uri(), person.uri());
}

#[test]
fn strict_vocabularies_reject_bogus() {
    for registry in Catalog::builtin() {
        let err = registry.term("Bogus").unwrap_err();
        match err {
            Error::UndeclaredTerm { vocabulary, name } => {
                assert_eq!(vocabulary, registry.base_uri());
                assert_eq!(name, "Bogus");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(registry.uri("Bogus").is_err());
        assert!(registry.property("Bogus").is_err());
    }
}

#[test]
fn class_and_property_are_aliases() {
    let http = vocab("http");
    assert_eq!(
        http.property("Request").unwrap().uri(),
        http.class("Request").unwrap().uri()
    );
    assert!(http.class("methodName").unwrap().is_property());
}

#[test]
fn each_is_restartable() {
    for registry in Catalog::builtin() {
        let first: Vec<&str> = registry.each().map(|t| t.name()).collect();
        let second: Vec<&str> = registry.each().map(|t| t.name()).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), registry.len());
        let distinct: HashSet<&str> = first.iter().copied().collect();
        assert_eq!(distinct.len(), first.len());
    }
}

#[test]
fn uri_is_base_plus_name() {
    for registry in Catalog::builtin() {
        for term in registry {
            assert_eq!(term.uri(), format!("{}{}", registry.base_uri(), term.name()));
            assert_eq!(registry.uri(term.name()).unwrap(), term.uri());
        }
    }
}

// =============================================================================
// iCal duplicates
// =============================================================================

#[test]
fn ical_duplicates_keep_last() {
    let ical = vocab("ical");
    assert_eq!(ical.duplicate_policy(), DuplicatePolicy::KeepLast);

    let dtend = ical.term("dtend").unwrap();
    assert!(dtend.comment().unwrap().contains("VFREEBUSY"));
    let due = ical.term("due").unwrap();
    assert!(due.comment().unwrap().ends_with("if specified."));
    let action = ical.term("action").unwrap();
    assert!(action.comment().unwrap().contains("Applications MUST ignore alarms"));
}

#[test]
fn ical_duplicates_under_other_policies() {
    let module = vocabularies::ical::module();

    let mut header = module.header;
    header.duplicates = DuplicatePolicy::KeepFirst;
    let first = VocabularyRegistry::from_module(&rdf_vocab::VocabularyModule { header, ..module });
    assert_eq!(
        first.term("dtend").unwrap().comment(),
        Some("This property specifies the date and time that a calendar component ends.")
    );

    header.duplicates = DuplicatePolicy::MergeComments;
    let merged = VocabularyRegistry::from_module(&rdf_vocab::VocabularyModule { header, ..module });
    let comment = merged.term("due").unwrap().comment().unwrap().to_owned();
    let paragraphs: Vec<&str> = comment.split("\n\n").collect();
    assert_eq!(paragraphs.len(), 2);
    assert!(paragraphs[1].ends_with("if specified."));

    // position is that of the first declaration
    let last = VocabularyRegistry::from_module(&module);
    let order = |r: &VocabularyRegistry| r.iter().map(|t| t.name().to_owned()).collect::<Vec<_>>();
    assert_eq!(order(&first), order(&last));
    assert_eq!(order(&merged), order(&last));
}

// =============================================================================
// Metadata
// =============================================================================

#[test]
fn cross_vocabulary_references_stay_opaque() {
    let mo = vocab("mo");
    let artist = mo.term("MusicArtist").unwrap();
    assert_eq!(
        artist.sub_class_of(),
        Some(&MetaValue::iri("http://xmlns.com/foaf/0.1/Agent"))
    );
    // foaf is not a catalog vocabulary
    assert!(Catalog::builtin().find_term("http://xmlns.com/foaf/0.1/Agent").is_none());
}

#[test]
fn schema_properties_use_includes() {
    let email = vocab("schema").term("email").unwrap();
    let domains: Vec<&str> = email
        .domain()
        .unwrap()
        .values()
        .filter_map(MetaValue::as_iri)
        .collect();
    assert_eq!(
        domains,
        [
            "http://schema.org/Person",
            "http://schema.org/Organization",
            "http://schema.org/ContactPoint"
        ]
    );
}

#[test]
fn vcard_deprecations() {
    let vcard = vocab("vcard");
    assert!(vcard.term("tel").unwrap().is_deprecated());
    assert!(vcard.term("Label").unwrap().is_deprecated());
    assert!(!vcard.term("hasTelephone").unwrap().is_deprecated());
}

#[test]
fn goodrelations_individuals() {
    let gr = vocab("gr");
    let sell = gr.term("Sell").unwrap();
    assert_eq!(sell.kind(), TermKind::Individual);
    assert!(gr.of_kind(TermKind::Individual).count() >= 10);
}

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn expand_and_compact_round_trip() {
    let catalog = Catalog::builtin();
    for registry in catalog {
        let prefix = registry.prefix().unwrap();
        for term in registry {
            let pname = catalog.compact(term.uri()).unwrap();
            assert_eq!(pname, format!("{prefix}:{}", term.name()));
            assert_eq!(catalog.expand(&pname).unwrap(), term.uri());
            assert_eq!(catalog.resolve(&pname).unwrap(), term);
            assert_eq!(catalog.resolve(term.uri()).unwrap(), term);
        }
    }
}

#[test]
fn expand_errors() {
    let catalog = Catalog::builtin();
    assert!(matches!(catalog.expand("Person"), Err(Error::InvalidPrefixedName(_))));
    assert!(matches!(catalog.expand("nope:Person"), Err(Error::UnknownPrefix(_))));
    assert!(catalog.expand("schema:Bogus").unwrap_err().is_undeclared());
    assert!(catalog
        .resolve("http://schema.org/Bogus")
        .unwrap_err()
        .is_undeclared());
}

#[test]
fn find_vocabulary_by_uri() {
    let catalog = Catalog::builtin();
    let found = catalog
        .find_vocabulary("http://www.w3.org/2006/vcard/ns#hasEmail")
        .unwrap();
    assert_eq!(found.prefix(), Some("vcard"));
    assert!(catalog.find_vocabulary("http://example.org/").is_none());
    assert_eq!(
        catalog.by_base_uri("http://purl.org/goodrelations/v1#").and_then(|v| v.prefix()),
        Some("gr")
    );
}

#[test]
fn catalog_rejects_duplicates() {
    let a = VocabularyRegistry::builder("http://example.org/a#").prefix("ex").build();
    let b = VocabularyRegistry::builder("http://example.org/b#").prefix("ex").build();
    assert!(matches!(Catalog::new([a.clone(), b]), Err(Error::DuplicatePrefix(p)) if p == "ex"));

    let c = VocabularyRegistry::builder("http://example.org/a#").prefix("other").build();
    assert!(matches!(Catalog::new([a, c]), Err(Error::DuplicateBaseUri(_))));
}

#[test]
fn registries_are_shareable_across_threads() {
    let schema = vocab("schema");
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| schema.term("Person").unwrap().uri().to_owned()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "http://schema.org/Person");
        }
    });
}

// =============================================================================
// Definition files
// =============================================================================

#[cfg(feature = "loader")]
#[test]
fn loaded_vocabulary_joins_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ex.yml");
    std::fs::write(
        &path,
        r#"
vocabulary:
  baseUri: "http://example.org/ns#"
  prefix: ex
  strict: true
  terms:
    - name: Foo
      label: Foo Thing
      comment: Description of Foo
      kind: class
      metadata:
        subClassOf: { "@id": "schema:Thing" }
"#,
    )
    .unwrap();
    let ex = rdf_vocab::loader::load_path(&path).unwrap();

    let catalog = Catalog::new(
        Catalog::builtin()
            .iter()
            .cloned()
            .chain(std::iter::once(ex)),
    )
    .unwrap();
    assert_eq!(catalog.len(), 9);
    assert_eq!(catalog.expand("ex:Foo").unwrap(), "http://example.org/ns#Foo");
    assert_eq!(catalog.compact("http://example.org/ns#Foo").as_deref(), Some("ex:Foo"));
    assert!(catalog.expand("ex:Bar").is_err());
}
