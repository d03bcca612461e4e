//! Property-based tests for vocabulary registries.
//!
//! Every registry is built from generated declarations and checked against
//! the lookup, URI and iteration guarantees.

use proptest::prelude::*;
use rdf_vocab::{Declaration, DuplicatePolicy, MetaValue, TermKind, VocabularyRegistry};

const BASE: &str = "http://example.org/ns#";

fn name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_-]{0,15}"
}

fn meta_value() -> impl Strategy<Value = MetaValue> {
    let leaf = prop_oneof![
        "[ -~]{0,20}".prop_map(MetaValue::literal),
        "[a-z]{1,8}".prop_map(|s| MetaValue::iri(format!("http://example.org/other#{s}"))),
    ];
    leaf.prop_recursive(2, 8, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(MetaValue::List)
    })
}

fn kind() -> impl Strategy<Value = TermKind> {
    prop_oneof![
        Just(TermKind::Class),
        Just(TermKind::Property),
        Just(TermKind::Datatype),
        Just(TermKind::Individual),
        Just(TermKind::Other),
    ]
}

prop_compose! {
    fn declaration(name: String)(
        kind in kind(),
        label in proptest::option::of("[ -~]{0,20}"),
        comment in proptest::option::of("[ -~\n]{0,40}"),
        override_uri in proptest::option::of("[a-z]{1,8}"),
        metadata in prop::collection::btree_map("[a-zA-Z:]{1,12}", meta_value(), 0..4),
    ) -> Declaration {
        Declaration {
            name: name.clone(),
            kind,
            uri: override_uri.map(|s| format!("http://elsewhere.example/{s}")),
            label,
            comment,
            metadata,
        }
    }
}

fn declarations() -> impl Strategy<Value = Vec<Declaration>> {
    prop::collection::btree_set(name(), 0..24).prop_flat_map(|names| {
        names
            .into_iter()
            .map(declaration)
            .collect::<Vec<_>>()
    })
}

fn registry(decls: &[Declaration], strict: bool) -> VocabularyRegistry {
    VocabularyRegistry::builder(BASE)
        .strict(strict)
        .declarations(decls.iter().cloned())
        .build()
}

// =============================================================================
// Declared names
// =============================================================================

proptest! {
    /// term(n).uri is base + n, or the override when one was given;
    /// uri(n) is always base + n.
    #[test]
    fn prop_declared_uri(decls in declarations(), strict in any::<bool>()) {
        let vocab = registry(&decls, strict);
        for decl in &decls {
            let term = vocab.term(&decl.name).unwrap();
            let expected = decl.uri.clone().unwrap_or_else(|| format!("{BASE}{}", decl.name));
            prop_assert_eq!(term.uri(), expected.as_str());
            prop_assert_eq!(vocab.uri(&decl.name).unwrap(), format!("{BASE}{}", decl.name));
        }
    }

    /// Label, comment, kind and metadata are read back verbatim.
    #[test]
    fn prop_round_trip(decls in declarations()) {
        let vocab = registry(&decls, true);
        for decl in &decls {
            let term = vocab.term(&decl.name).unwrap();
            prop_assert_eq!(term.name(), decl.name.as_str());
            prop_assert_eq!(term.kind(), decl.kind);
            prop_assert_eq!(term.label(), decl.label.as_deref());
            prop_assert_eq!(term.comment(), decl.comment.as_deref());
            prop_assert_eq!(term.metadata(), &decl.metadata);
        }
    }
}

// =============================================================================
// Undeclared names
// =============================================================================

proptest! {
    /// A strict vocabulary rejects every name it was not given.
    #[test]
    fn prop_strict_rejects_undeclared(decls in declarations(), probe in name()) {
        prop_assume!(decls.iter().all(|d| d.name != probe));
        let vocab = registry(&decls, true);
        let err = vocab.term(&probe).unwrap_err();
        prop_assert!(err.is_undeclared());
        prop_assert!(vocab.uri(&probe).is_err());
    }

    /// A non-strict vocabulary never fails and synthesizes base + name.
    #[test]
    fn prop_lenient_synthesizes(decls in declarations(), probe in name()) {
        prop_assume!(decls.iter().all(|d| d.name != probe));
        let vocab = registry(&decls, false);
        let term = vocab.term(&probe).unwrap();
        prop_assert_eq!(term.uri(), format!("{BASE}{probe}"));
        prop_assert_eq!(term.kind(), TermKind::Other);
        prop_assert_eq!(vocab.uri(&probe).unwrap(), format!("{BASE}{probe}"));
        prop_assert!(!vocab.contains(&probe));
    }
}

// =============================================================================
// Iteration
// =============================================================================

proptest! {
    /// each() yields every declared name once, in order, and is restartable.
    #[test]
    fn prop_each_is_declaration_order(decls in declarations()) {
        let vocab = registry(&decls, true);
        let first: Vec<&str> = vocab.each().map(|t| t.name()).collect();
        let second: Vec<&str> = vocab.each().map(|t| t.name()).collect();
        let declared: Vec<&str> = decls.iter().map(|d| d.name.as_str()).collect();
        prop_assert_eq!(&first, &declared);
        prop_assert_eq!(first, second);
        prop_assert_eq!(vocab.len(), decls.len());
    }

    /// Duplicates keep their first position under every policy.
    #[test]
    fn prop_duplicates_keep_position(
        decls in declarations(),
        pick in any::<prop::sample::Index>(),
        policy in prop_oneof![
            Just(DuplicatePolicy::KeepLast),
            Just(DuplicatePolicy::KeepFirst),
            Just(DuplicatePolicy::MergeComments),
        ],
    ) {
        prop_assume!(!decls.is_empty());
        let again = decls[pick.index(decls.len())].clone().with_label("again");
        let vocab = VocabularyRegistry::builder(BASE)
            .duplicates(policy)
            .declarations(decls.iter().cloned())
            .declare(again.clone())
            .build();
        prop_assert_eq!(vocab.len(), decls.len());
        let names: Vec<&str> = vocab.iter().map(|t| t.name()).collect();
        let declared: Vec<&str> = decls.iter().map(|d| d.name.as_str()).collect();
        prop_assert_eq!(names, declared);

        let label = vocab.term(&again.name).unwrap().label().map(str::to_owned);
        match policy {
            DuplicatePolicy::KeepFirst => {
                let original = decls.iter().find(|d| d.name == again.name).unwrap();
                prop_assert_eq!(label, original.label.clone());
            }
            DuplicatePolicy::KeepLast | DuplicatePolicy::MergeComments => {
                prop_assert_eq!(label.as_deref(), Some("again"));
            }
        }
    }
}
