//! A set of vocabularies with unique base URIs and prefixes.
//!
//! The catalog answers the questions that span vocabularies: which
//! vocabulary owns a full URI, what `schema:Person` expands to, and how to
//! write a URI back as a prefixed name. Registries never reference each
//! other; cross-vocabulary metadata values stay opaque strings.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::Term;
use crate::registry::VocabularyRegistry;
use crate::vocabularies;

/// An immutable collection of [`VocabularyRegistry`] instances.
#[derive(Debug, Clone)]
pub struct Catalog {
    vocabularies: Vec<VocabularyRegistry>,
    by_prefix: HashMap<String, usize>,
    by_base: HashMap<String, usize>,
}

impl Catalog {
    /// Assembles a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateBaseUri`] or [`Error::DuplicatePrefix`] if
    /// two registries share a base URI or a prefix.
    pub fn new<I>(registries: I) -> Result<Self>
    where
        I: IntoIterator<Item = VocabularyRegistry>,
    {
        let mut catalog = Catalog {
            vocabularies: Vec::new(),
            by_prefix: HashMap::new(),
            by_base: HashMap::new(),
        };
        for registry in registries {
            catalog.insert(registry)?;
        }
        Ok(catalog)
    }

    fn insert(&mut self, registry: VocabularyRegistry) -> Result<()> {
        if self.by_base.contains_key(registry.base_uri()) {
            return Err(Error::DuplicateBaseUri(registry.base_uri().to_owned()));
        }
        if let Some(prefix) = registry.prefix() {
            if self.by_prefix.contains_key(prefix) {
                return Err(Error::DuplicatePrefix(prefix.to_owned()));
            }
            self.by_prefix.insert(prefix.to_owned(), self.vocabularies.len());
        }
        self.by_base
            .insert(registry.base_uri().to_owned(), self.vocabularies.len());
        self.vocabularies.push(registry);
        Ok(())
    }

    /// The built-in vocabularies, built on first use and shared for the
    /// rest of the process.
    ///
    /// ```
    /// let catalog = rdf_vocab::Catalog::builtin();
    /// assert_eq!(catalog.len(), 8);
    /// assert_eq!(
    ///     catalog.expand("schema:Person").unwrap(),
    ///     "http://schema.org/Person"
    /// );
    /// ```
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        static CATALOG: std::sync::OnceLock<Catalog> = std::sync::OnceLock::new();
        CATALOG.get_or_init(|| {
            let mut catalog = Catalog {
                vocabularies: Vec::new(),
                by_prefix: HashMap::new(),
                by_base: HashMap::new(),
            };
            for module in vocabularies::all() {
                // Built-in prefixes and base URIs are distinct; see the
                // `builtin_prefixes_and_bases_unique` test.
                if let Err(err) = catalog.insert(VocabularyRegistry::from_module(&module)) {
                    tracing::error!(%err, "skipping built-in vocabulary");
                }
            }
            catalog
        })
    }

    /// Looks a vocabulary up by prefix.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&VocabularyRegistry> {
        self.by_prefix.get(prefix).map(|&i| &self.vocabularies[i])
    }

    /// Looks a vocabulary up by its exact base URI.
    #[must_use]
    pub fn by_base_uri(&self, base_uri: &str) -> Option<&VocabularyRegistry> {
        self.by_base.get(base_uri).map(|&i| &self.vocabularies[i])
    }

    /// Vocabularies in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, VocabularyRegistry> {
        self.vocabularies.iter()
    }

    /// Number of vocabularies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vocabularies.len()
    }

    /// True if the catalog holds no vocabularies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vocabularies.is_empty()
    }

    /// Total number of declared terms across all vocabularies.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.vocabularies.iter().map(VocabularyRegistry::len).sum()
    }

    /// Returns the vocabulary whose base URI is the longest prefix of `uri`.
    #[must_use]
    pub fn find_vocabulary(&self, uri: &str) -> Option<&VocabularyRegistry> {
        self.vocabularies
            .iter()
            .filter(|v| uri.starts_with(v.base_uri()))
            .max_by_key(|v| v.base_uri().len())
    }

    /// Returns the declared term whose full URI is `uri`.
    ///
    /// Terms with an override URI outside their vocabulary's namespace are
    /// found too.
    #[must_use]
    pub fn find_term(&self, uri: &str) -> Option<&Term> {
        if let Some(vocab) = self.find_vocabulary(uri) {
            let local = &uri[vocab.base_uri().len()..];
            if let Some(term) = vocab.get(local).filter(|t| t.uri() == uri) {
                return Some(term);
            }
        }
        self.vocabularies
            .iter()
            .flat_map(VocabularyRegistry::iter)
            .find(|t| t.uri() == uri)
    }

    /// Expands a prefixed name such as `schema:Person` to a full URI.
    ///
    /// The URI is the one the term carries, so a declared override wins over
    /// the vocabulary's base URI.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPrefixedName`] if `pname` has no `:`.
    /// - [`Error::UnknownPrefix`] if no vocabulary uses the prefix.
    /// - [`Error::UndeclaredTerm`] if the vocabulary is strict and the local
    ///   name is not declared.
    pub fn expand(&self, pname: &str) -> Result<String> {
        let (prefix, local) = pname
            .split_once(':')
            .ok_or_else(|| Error::InvalidPrefixedName(pname.to_owned()))?;
        let vocab = self
            .get(prefix)
            .ok_or_else(|| Error::UnknownPrefix(prefix.to_owned()))?;
        Ok(vocab.term(local)?.uri().to_owned())
    }

    /// Resolves a prefixed name or a full URI to a declared term.
    ///
    /// # Errors
    ///
    /// Same as [`expand`](Self::expand) for prefixed names; a full URI no
    /// vocabulary declares yields [`Error::UndeclaredTerm`] against the
    /// closest matching vocabulary (or the URI itself).
    pub fn resolve(&self, name: &str) -> Result<&Term> {
        let uri = if crate::prefixes::is_absolute(name) {
            name.to_owned()
        } else {
            self.expand(name)?
        };
        self.find_term(&uri).ok_or_else(|| {
            let vocabulary = self
                .find_vocabulary(&uri)
                .map_or(uri.as_str(), VocabularyRegistry::base_uri);
            let local = uri.strip_prefix(vocabulary).unwrap_or(&uri);
            Error::undeclared(vocabulary, local)
        })
    }

    /// Writes `uri` as `prefix:local` when a prefixed vocabulary owns it.
    #[must_use]
    pub fn compact(&self, uri: &str) -> Option<String> {
        self.vocabularies
            .iter()
            .filter(|v| v.prefix().is_some() && uri.starts_with(v.base_uri()))
            .max_by_key(|v| v.base_uri().len())
            .and_then(|v| {
                let local = &uri[v.base_uri().len()..];
                v.prefix().map(|p| format!("{p}:{local}"))
            })
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a VocabularyRegistry;
    type IntoIter = std::slice::Iter<'a, VocabularyRegistry>;

    fn into_iter(self) -> Self::IntoIter {
        self.vocabularies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Declaration;

    fn vocab(prefix: &str, base: &str, names: &[&str]) -> VocabularyRegistry {
        VocabularyRegistry::builder(base)
            .prefix(prefix)
            .strict(true)
            .declarations(names.iter().map(|n| Declaration::class(*n)))
            .build()
    }

    #[test]
    fn rejects_duplicate_base_uri() {
        let err = Catalog::new([
            vocab("a", "http://example.org/", &[]),
            vocab("b", "http://example.org/", &[]),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateBaseUri(_)));
    }

    #[test]
    fn rejects_duplicate_prefix() {
        let err = Catalog::new([
            vocab("ex", "http://example.org/a#", &[]),
            vocab("ex", "http://example.org/b#", &[]),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::DuplicatePrefix(p) if p == "ex"));
    }

    #[test]
    fn longest_base_uri_wins() {
        let catalog = Catalog::new([
            vocab("ex", "http://example.org/", &["Thing"]),
            vocab("exa", "http://example.org/a/", &["Thing"]),
        ])
        .unwrap();
        let found = catalog.find_vocabulary("http://example.org/a/Thing").unwrap();
        assert_eq!(found.prefix(), Some("exa"));
        assert_eq!(
            catalog.compact("http://example.org/a/Thing").as_deref(),
            Some("exa:Thing")
        );
        assert_eq!(
            catalog.compact("http://example.org/Thing").as_deref(),
            Some("ex:Thing")
        );
        assert_eq!(catalog.compact("http://other.org/Thing"), None);
    }

    #[test]
    fn expand_reports_each_failure() {
        let catalog = Catalog::new([vocab("ex", "http://example.org/", &["Thing"])]).unwrap();
        assert_eq!(catalog.expand("ex:Thing").unwrap(), "http://example.org/Thing");
        assert!(matches!(
            catalog.expand("Thing"),
            Err(Error::InvalidPrefixedName(_))
        ));
        assert!(matches!(
            catalog.expand("zz:Thing"),
            Err(Error::UnknownPrefix(p)) if p == "zz"
        ));
        assert!(catalog.expand("ex:Nothing").unwrap_err().is_undeclared());
    }

    #[test]
    fn find_term_sees_override_uris() {
        let registry = VocabularyRegistry::builder("http://example.org/")
            .prefix("ex")
            .declare(Declaration::class("Agent").with_uri("http://xmlns.com/foaf/0.1/Agent"))
            .build();
        let catalog = Catalog::new([registry]).unwrap();
        let term = catalog.find_term("http://xmlns.com/foaf/0.1/Agent").unwrap();
        assert_eq!(term.name(), "Agent");
        assert!(catalog.find_term("http://example.org/Agent").is_none());

        assert_eq!(catalog.expand("ex:Agent").unwrap(), "http://xmlns.com/foaf/0.1/Agent");
        assert_eq!(catalog.resolve("ex:Agent").unwrap().name(), "Agent");
        assert_eq!(catalog.expand("ex:Unknown").unwrap(), "http://example.org/Unknown");
    }

    #[test]
    fn resolve_accepts_both_forms() {
        let catalog = Catalog::new([vocab("ex", "http://example.org/", &["Thing"])]).unwrap();
        assert_eq!(catalog.resolve("ex:Thing").unwrap().name(), "Thing");
        assert_eq!(
            catalog.resolve("http://example.org/Thing").unwrap().name(),
            "Thing"
        );
        let err = catalog.resolve("http://example.org/Nope").unwrap_err();
        assert!(matches!(
            err,
            Error::UndeclaredTerm { ref vocabulary, ref name }
                if vocabulary == "http://example.org/" && name == "Nope"
        ));
    }

    #[test]
    fn builtin_prefixes_and_bases_unique() {
        let modules = vocabularies::all();
        let registries = modules.iter().map(VocabularyRegistry::from_module);
        let catalog = Catalog::new(registries).unwrap();
        assert_eq!(catalog.len(), modules.len());
        assert_eq!(Catalog::builtin().len(), modules.len());
    }
}
