//! The per-namespace term registry.
//!
//! A [`VocabularyRegistry`] is populated once from a list of declarations and
//! is read-only afterwards, so it can be shared between threads without
//! locking.

use std::borrow::Cow;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Declaration, Term, TermKind, VocabularyModule};

/// How a registry resolves several declarations of the same short name.
///
/// Whatever the policy, the term keeps the position of its first
/// declaration in iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum DuplicatePolicy {
    /// The last declaration replaces earlier ones entirely.
    #[default]
    KeepLast,
    /// Later declarations are ignored.
    KeepFirst,
    /// Label and URI override from the later declaration win when present,
    /// distinct comments are concatenated, metadata is merged key by key.
    MergeComments,
}

/// One vocabulary: a base URI and the terms declared under it.
///
/// ```
/// use rdf_vocab::{Declaration, VocabularyRegistry};
///
/// let vocab = VocabularyRegistry::builder("http://schema.org/")
///     .strict(true)
///     .declare(Declaration::class("Person").with_label("Person").with_comment("A person."))
///     .build();
///
/// let person = vocab.term("Person").unwrap();
/// assert_eq!(person.uri(), "http://schema.org/Person");
/// assert!(vocab.term("Bogus").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct VocabularyRegistry {
    base_uri: String,
    prefix: Option<String>,
    label: Option<String>,
    comment: Option<String>,
    strict: bool,
    duplicates: DuplicatePolicy,
    terms: Vec<Term>,
    index: HashMap<String, usize>,
}

impl VocabularyRegistry {
    /// Builds a non-strict registry that keeps the last of any duplicate
    /// declarations.
    pub fn create<I>(base_uri: impl Into<String>, declarations: I) -> Self
    where
        I: IntoIterator<Item = Declaration>,
    {
        Self::builder(base_uri).declarations(declarations).build()
    }

    /// Starts a registry with full control over prefix, strictness and
    /// duplicate handling.
    pub fn builder(base_uri: impl Into<String>) -> RegistryBuilder {
        RegistryBuilder {
            base_uri: base_uri.into(),
            prefix: None,
            label: None,
            comment: None,
            strict: false,
            duplicates: DuplicatePolicy::default(),
            declarations: Vec::new(),
        }
    }

    /// Builds the registry for a static vocabulary module.
    #[must_use]
    pub fn from_module(module: &VocabularyModule) -> Self {
        let header = &module.header;
        Self::builder(header.base_uri)
            .prefix(header.prefix)
            .label(header.label)
            .comment(header.comment)
            .strict(header.strict)
            .duplicates(header.duplicates)
            .declarations(module.declarations().map(Declaration::from))
            .build()
    }

    /// Namespace URI that short names are appended to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Preferred prefix, if one was given.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Human-readable title of the vocabulary.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Description of the vocabulary.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Whether lookups of undeclared names fail.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// The duplicate policy the registry was built with.
    #[must_use]
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Returns the term registered under `name`.
    ///
    /// Non-strict vocabularies synthesize a bare term for names they never
    /// declared.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndeclaredTerm`] if the vocabulary is strict and
    /// `name` was never declared.
    pub fn term(&self, name: &str) -> Result<Cow<'_, Term>> {
        match self.get(name) {
            Some(term) => Ok(Cow::Borrowed(term)),
            None if self.strict => Err(Error::undeclared(&self.base_uri, name)),
            None => Ok(Cow::Owned(Term::synthesized(&self.base_uri, name))),
        }
    }

    /// Same as [`term`](Self::term); named after the class declaration list.
    ///
    /// # Errors
    ///
    /// See [`term`](Self::term).
    pub fn class(&self, name: &str) -> Result<Cow<'_, Term>> {
        self.term(name)
    }

    /// Same as [`term`](Self::term); named after the property declaration
    /// list.
    ///
    /// # Errors
    ///
    /// See [`term`](Self::term).
    pub fn property(&self, name: &str) -> Result<Cow<'_, Term>> {
        self.term(name)
    }

    /// Returns the declared term for `name`, ignoring strictness.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.index.get(name).map(|&i| &self.terms[i])
    }

    /// True if `name` was declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The base URI concatenated with `name`, without escaping.
    ///
    /// Override URIs are not consulted; use [`term`](Self::term) to get the
    /// URI a declared term actually carries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndeclaredTerm`] if the vocabulary is strict and
    /// `name` was never declared.
    pub fn uri(&self, name: &str) -> Result<String> {
        if self.strict && !self.contains(name) {
            return Err(Error::undeclared(&self.base_uri, name));
        }
        Ok(format!("{}{name}", self.base_uri))
    }

    /// All declared terms in declaration order. Each call starts over.
    pub fn each(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Alias for [`each`](Self::each).
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Declared classes, in declaration order.
    pub fn classes(&self) -> impl Iterator<Item = &Term> {
        self.of_kind(TermKind::Class)
    }

    /// Declared properties, in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &Term> {
        self.of_kind(TermKind::Property)
    }

    /// Declared terms of one kind, in declaration order.
    pub fn of_kind(&self, kind: TermKind) -> impl Iterator<Item = &Term> {
        self.terms.iter().filter(move |t| t.kind() == kind)
    }

    /// Number of distinct declared short names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if nothing was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<'a> IntoIterator for &'a VocabularyRegistry {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Collects the settings and declarations for a [`VocabularyRegistry`].
#[derive(Debug, Clone)]
#[must_use]
pub struct RegistryBuilder {
    base_uri: String,
    prefix: Option<String>,
    label: Option<String>,
    comment: Option<String>,
    strict: bool,
    duplicates: DuplicatePolicy,
    declarations: Vec<Declaration>,
}

impl RegistryBuilder {
    /// Sets the preferred prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the vocabulary title.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the vocabulary description.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Makes lookups of undeclared names fail instead of synthesizing URIs.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Chooses how duplicate short names are resolved.
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Appends one declaration.
    pub fn declare(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Appends several declarations.
    pub fn declarations<I>(mut self, declarations: I) -> Self
    where
        I: IntoIterator<Item = Declaration>,
    {
        self.declarations.extend(declarations);
        self
    }

    /// Populates the registry.
    pub fn build(self) -> VocabularyRegistry {
        let mut terms: Vec<Term> = Vec::with_capacity(self.declarations.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(self.declarations.len());

        for decl in self.declarations {
            if let Some(&i) = index.get(&decl.name) {
                debug!(
                    vocabulary = %self.base_uri,
                    name = %decl.name,
                    policy = ?self.duplicates,
                    "duplicate term declaration"
                );
                terms[i].merge(&self.base_uri, decl, self.duplicates);
                continue;
            }
            index.insert(decl.name.clone(), terms.len());
            terms.push(Term::from_declaration(&self.base_uri, decl));
        }

        debug!(
            vocabulary = %self.base_uri,
            prefix = self.prefix.as_deref().unwrap_or(""),
            terms = terms.len(),
            strict = self.strict,
            "built vocabulary registry"
        );

        VocabularyRegistry {
            base_uri: self.base_uri,
            prefix: self.prefix,
            label: self.label,
            comment: self.comment,
            strict: self.strict,
            duplicates: self.duplicates,
            terms,
            index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MetaValue;

    const SCHEMA: &str = "http://schema.org/";

    fn person() -> Declaration {
        Declaration::class("Person")
            .with_label("Person")
            .with_comment("A person.")
    }

    #[test]
    fn declared_term_uri_is_base_plus_name() {
        let vocab = VocabularyRegistry::builder(SCHEMA)
            .strict(true)
            .declare(person())
            .build();
        let term = vocab.term("Person").unwrap();
        assert_eq!(term.uri(), "http://schema.org/Person");
        assert_eq!(term.label(), Some("Person"));
        assert_eq!(term.comment(), Some("A person."));
        assert!(matches!(term, Cow::Borrowed(_)));
    }

    #[test]
    fn strict_rejects_undeclared() {
        let vocab = VocabularyRegistry::builder(SCHEMA)
            .strict(true)
            .declare(person())
            .build();
        let err = vocab.term("Bogus").unwrap_err();
        assert!(err.is_undeclared());
        assert!(vocab.class("Bogus").is_err());
        assert!(vocab.property("Bogus").is_err());
        assert!(vocab.uri("Bogus").is_err());
    }

    #[test]
    fn non_strict_synthesizes() {
        let vocab = VocabularyRegistry::create(SCHEMA, [person()]);
        let term = vocab.term("Bogus").unwrap();
        assert_eq!(term.uri(), "http://schema.org/Bogus");
        assert_eq!(term.kind(), TermKind::Other);
        assert!(term.label().is_none());
        assert_eq!(vocab.uri("Bogus").unwrap(), "http://schema.org/Bogus");
        // Synthesized names are not registered.
        assert!(!vocab.contains("Bogus"));
        assert_eq!(vocab.len(), 1);
    }

    #[test]
    fn class_and_property_are_aliases() {
        let vocab = VocabularyRegistry::create(
            SCHEMA,
            [person(), Declaration::property("name").with_label("name")],
        );
        assert_eq!(vocab.class("name").unwrap().uri(), vocab.term("name").unwrap().uri());
        assert_eq!(vocab.property("Person").unwrap().label(), Some("Person"));
        assert_eq!(vocab.classes().count(), 1);
        assert_eq!(vocab.properties().count(), 1);
    }

    #[test]
    fn each_is_restartable_and_ordered() {
        let vocab = VocabularyRegistry::create(
            SCHEMA,
            ["b", "a", "c"].map(Declaration::property),
        );
        let first: Vec<_> = vocab.each().map(Term::name).collect();
        let second: Vec<_> = vocab.each().map(Term::name).collect();
        assert_eq!(first, ["b", "a", "c"]);
        assert_eq!(first, second);
        assert_eq!((&vocab).into_iter().count(), 3);
    }

    fn dtend_twice() -> [Declaration; 3] {
        [
            Declaration::property("dtend").with_comment("first"),
            Declaration::property("dtstart"),
            Declaration::property("dtend")
                .with_comment("second")
                .with_meta("range", MetaValue::iri("http://www.w3.org/2001/XMLSchema#dateTime")),
        ]
    }

    #[test]
    fn duplicates_keep_last_by_default() {
        let vocab = VocabularyRegistry::create(SCHEMA, dtend_twice());
        assert_eq!(vocab.len(), 2);
        let dtend = vocab.get("dtend").unwrap();
        assert_eq!(dtend.comment(), Some("second"));
        assert!(dtend.range().is_some());
        let names: Vec<_> = vocab.each().map(Term::name).collect();
        assert_eq!(names, ["dtend", "dtstart"]);
    }

    #[test]
    fn duplicates_keep_first() {
        let vocab = VocabularyRegistry::builder(SCHEMA)
            .duplicates(DuplicatePolicy::KeepFirst)
            .declarations(dtend_twice())
            .build();
        let dtend = vocab.get("dtend").unwrap();
        assert_eq!(dtend.comment(), Some("first"));
        assert!(dtend.range().is_none());
    }

    #[test]
    fn duplicates_merge_comments() {
        let vocab = VocabularyRegistry::builder(SCHEMA)
            .duplicates(DuplicatePolicy::MergeComments)
            .declarations(dtend_twice())
            .build();
        let dtend = vocab.get("dtend").unwrap();
        assert_eq!(dtend.comment(), Some("first\n\nsecond"));
        assert!(dtend.range().is_some());
    }

    #[test]
    fn uri_ignores_override_but_term_keeps_it() {
        for strict in [true, false] {
            let vocab = VocabularyRegistry::builder(SCHEMA)
                .strict(strict)
                .declare(Declaration::class("Agent").with_uri("http://xmlns.com/foaf/0.1/Agent"))
                .build();
            assert_eq!(vocab.uri("Agent").unwrap(), "http://schema.org/Agent");
            assert_eq!(vocab.term("Agent").unwrap().uri(), "http://xmlns.com/foaf/0.1/Agent");
        }
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VocabularyRegistry>();
    }
}
