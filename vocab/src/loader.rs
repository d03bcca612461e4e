//! Vocabulary definitions read from YAML or JSON files.
//!
//! ```yaml
//! vocabulary:
//!   baseUri: "http://example.org/ns#"
//!   prefix: ex
//!   strict: true
//!   terms:
//!     - name: Foo
//!       label: Foo Thing
//!       kind: class
//!       metadata:
//!         subClassOf: { "@id": "http://example.org/ns#Bar" }
//! ```
//!
//! Metadata scalars must be quoted strings so their text survives a round
//! trip unchanged; `version: 1.10` is rejected, `version: "1.10"` is kept.
//!
//! Loading is a one-shot synchronous read; the caller decides whether a
//! failure is fatal.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::model::{Declaration, MetaValue};
use crate::prefixes;
use crate::registry::{DuplicatePolicy, VocabularyRegistry};

/// Top-level document: a single `vocabulary:` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefinitionFile {
    /// The vocabulary being defined.
    pub vocabulary: VocabularyDefinition,
}

/// One vocabulary as written in a definition file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VocabularyDefinition {
    /// Namespace URI.
    pub base_uri: String,
    /// Preferred prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Human-readable title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Reject undeclared short names.
    #[serde(default)]
    pub strict: bool,
    /// Handling of repeated short names.
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
    /// Term declarations in registration order.
    #[serde(default)]
    pub terms: Vec<Declaration>,
}

impl VocabularyDefinition {
    /// Checks the structural requirements the registry relies on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDefinition`] for an empty base URI, an empty
    /// prefix, an empty term name, or any base URI, term name, override,
    /// metadata key or IRI value holding characters that cannot appear in
    /// an IRI (spaces, `<`, `>`, `"` and the like).
    pub fn validate(&self) -> Result<()> {
        if self.base_uri.trim().is_empty() {
            return Err(Error::InvalidDefinition("baseUri must not be empty".to_owned()));
        }
        if self.prefix.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(Error::InvalidDefinition(format!(
                "prefix of <{}> must not be empty",
                self.base_uri
            )));
        }
        if let Some(pos) = self.terms.iter().position(|t| t.name.trim().is_empty()) {
            return Err(Error::InvalidDefinition(format!(
                "term #{pos} of <{}> has an empty name",
                self.base_uri
            )));
        }
        check_iri("baseUri", &self.base_uri)?;
        for term in &self.terms {
            check_iri(&format!("name of term `{}`", term.name), &term.name)?;
            if let Some(uri) = &term.uri {
                check_iri(&format!("uri of term `{}`", term.name), uri)?;
            }
            for (key, value) in &term.metadata {
                check_iri(&format!("metadata key of term `{}`", term.name), key)?;
                for iri in value.values().filter_map(MetaValue::as_iri) {
                    check_iri(&format!("`{key}` of term `{}`", term.name), iri)?;
                }
            }
        }
        Ok(())
    }

    /// Validates and builds the registry.
    ///
    /// # Errors
    ///
    /// See [`VocabularyDefinition::validate`].
    pub fn into_registry(self) -> Result<VocabularyRegistry> {
        self.validate()?;
        let mut builder = VocabularyRegistry::builder(self.base_uri)
            .strict(self.strict)
            .duplicates(self.duplicates)
            .declarations(self.terms);
        if let Some(prefix) = self.prefix {
            builder = builder.prefix(prefix);
        }
        if let Some(label) = self.label {
            builder = builder.label(label);
        }
        if let Some(comment) = self.comment {
            builder = builder.comment(comment);
        }
        Ok(builder.build())
    }
}

fn check_iri(what: &str, value: &str) -> Result<()> {
    if prefixes::is_iri_safe(value) {
        Ok(())
    } else {
        Err(Error::InvalidDefinition(format!(
            "{what} contains characters not allowed in an IRI: {value:?}"
        )))
    }
}

/// Definition file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl Format {
    /// Picks the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// Parses a YAML definition.
///
/// # Errors
///
/// Returns [`Error::Yaml`] for malformed input and
/// [`Error::InvalidDefinition`] for structurally invalid definitions.
pub fn from_yaml_str(source: &str) -> Result<VocabularyRegistry> {
    let file: DefinitionFile = serde_yaml::from_str(source)?;
    file.vocabulary.into_registry()
}

/// Parses a JSON definition.
///
/// # Errors
///
/// Returns [`Error::Json`] for malformed input and
/// [`Error::InvalidDefinition`] for structurally invalid definitions.
pub fn from_json_str(source: &str) -> Result<VocabularyRegistry> {
    let file: DefinitionFile = serde_json::from_str(source)?;
    file.vocabulary.into_registry()
}

/// Reads a definition file, choosing the decoder by extension.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read,
/// [`Error::InvalidDefinition`] for an unsupported extension, and any
/// decoding error from [`from_yaml_str`] / [`from_json_str`].
pub fn load_path(path: impl AsRef<Path>) -> Result<VocabularyRegistry> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| {
        Error::InvalidDefinition(format!(
            "{}: expected a .yaml, .yml or .json extension",
            path.display()
        ))
    })?;
    let source = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let registry = match format {
        Format::Yaml => from_yaml_str(&source)?,
        Format::Json => from_json_str(&source)?,
    };
    info!(
        path = %path.display(),
        base_uri = registry.base_uri(),
        terms = registry.len(),
        "loaded vocabulary definition"
    );
    Ok(registry)
}

/// Writes a registry back out as a definition document.
#[must_use]
pub fn to_definition(registry: &VocabularyRegistry) -> DefinitionFile {
    DefinitionFile {
        vocabulary: VocabularyDefinition {
            base_uri: registry.base_uri().to_owned(),
            prefix: registry.prefix().map(str::to_owned),
            label: registry.label().map(str::to_owned),
            comment: registry.comment().map(str::to_owned),
            strict: registry.is_strict(),
            duplicates: registry.duplicate_policy(),
            terms: registry
                .iter()
                .map(|term| Declaration {
                    name: term.name().to_owned(),
                    kind: term.kind(),
                    uri: (term.uri() != format!("{}{}", registry.base_uri(), term.name()))
                        .then(|| term.uri().to_owned()),
                    label: term.label().map(str::to_owned),
                    comment: term.comment().map(str::to_owned),
                    metadata: term.metadata().clone(),
                })
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::model::TermKind;

    const EXAMPLE_YAML: &str = r#"
vocabulary:
  baseUri: "http://example.org/ns#"
  prefix: ex
  strict: true
  duplicates: mergeComments
  terms:
    - name: Foo
      label: Foo Thing
      comment: Description of Foo
      kind: class
      metadata:
        subClassOf: { "@id": "http://example.org/ns#Bar" }
        note: text
        schema:domainIncludes:
          - { "@id": "http://example.org/ns#A" }
          - { "@id": "http://example.org/ns#B" }
    - name: size
      kind: property
      metadata:
        range: { "@id": "xsd:integer" }
        rank: "3"
    - name: Foo
      comment: Second paragraph
    - name: Elsewhere
      uri: "http://other.example/Elsewhere"
"#;

    #[test]
    fn yaml_definition_builds_registry() {
        let vocab = from_yaml_str(EXAMPLE_YAML).unwrap();
        assert_eq!(vocab.base_uri(), "http://example.org/ns#");
        assert_eq!(vocab.prefix(), Some("ex"));
        assert!(vocab.is_strict());
        assert_eq!(vocab.len(), 3);

        let foo = vocab.term("Foo").unwrap();
        assert_eq!(foo.kind(), TermKind::Class);
        assert_eq!(foo.label(), Some("Foo Thing"));
        assert_eq!(foo.comment(), Some("Description of Foo\n\nSecond paragraph"));
        assert_eq!(
            foo.sub_class_of(),
            Some(&MetaValue::iri("http://example.org/ns#Bar"))
        );
        assert_eq!(foo.get("note"), Some(&MetaValue::literal("text")));
        assert_eq!(
            foo.domain().map(|d| d.values().count()),
            Some(2)
        );

        let size = vocab.term("size").unwrap();
        assert_eq!(size.get("rank"), Some(&MetaValue::literal("3")));
        assert_eq!(
            vocab.term("Elsewhere").unwrap().uri(),
            "http://other.example/Elsewhere"
        );
        assert_eq!(vocab.uri("Elsewhere").unwrap(), "http://example.org/ns#Elsewhere");
        assert!(vocab.term("Bogus").unwrap_err().is_undeclared());
    }

    #[test]
    fn kind_defaults_to_other() {
        let vocab = from_yaml_str(
            "vocabulary:\n  baseUri: \"http://example.org/\"\n  terms:\n    - name: x\n",
        )
        .unwrap();
        assert_eq!(vocab.term("x").unwrap().kind(), TermKind::Other);
        assert!(!vocab.is_strict());
    }

    #[test]
    fn json_matches_yaml() {
        let yaml = from_yaml_str(EXAMPLE_YAML).unwrap();
        let json_text = serde_json::to_string(&to_definition(&yaml)).unwrap();
        let json = from_json_str(&json_text).unwrap();
        assert_eq!(yaml.len(), json.len());
        for (a, b) in yaml.iter().zip(json.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn rejects_empty_base_uri_and_names() {
        let err = from_yaml_str("vocabulary:\n  baseUri: \"\"\n").unwrap_err();
        assert!(matches!(err, Error::InvalidDefinition(_)));

        let err = from_yaml_str(
            "vocabulary:\n  baseUri: \"http://example.org/\"\n  terms:\n    - name: \"\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidDefinition(_)));
    }

    #[test]
    fn quoted_scalars_keep_their_text() {
        let yaml = r#"
vocabulary:
  baseUri: "http://example.org/"
  terms:
    - name: x
      metadata:
        version: "1.10"
        code: "0x1F"
        deprecated: "True"
"#;
        let vocab = from_yaml_str(yaml).unwrap();
        let x = vocab.term("x").unwrap();
        assert_eq!(x.get("version"), Some(&MetaValue::literal("1.10")));
        assert_eq!(x.get("code"), Some(&MetaValue::literal("0x1F")));
        assert_eq!(x.get("deprecated"), Some(&MetaValue::literal("True")));

        let json = serde_json::to_string(&to_definition(&vocab)).unwrap();
        let again = from_json_str(&json).unwrap();
        assert_eq!(again.term("x").unwrap().metadata(), x.metadata());
    }

    #[test]
    fn rejects_unquoted_scalars() {
        for value in ["1.10", "0x1F", "3", "true"] {
            let yaml = format!(
                "vocabulary:\n  baseUri: \"http://example.org/\"\n  terms:\n    - name: x\n      metadata:\n        v: {value}\n"
            );
            let err = from_yaml_str(&yaml).unwrap_err();
            assert!(matches!(err, Error::Yaml(_)), "{value} was accepted");
        }
        let err = from_json_str(
            r#"{"vocabulary": {"baseUri": "http://example.org/", "terms": [{"name": "x", "metadata": {"v": 1.10}}]}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn rejects_characters_outside_iris() {
        let cases = [
            "vocabulary:\n  baseUri: \"http://example.org/a b\"\n",
            "vocabulary:\n  baseUri: \"http://example.org/\"\n  terms:\n    - name: \"a>b\"\n",
            "vocabulary:\n  baseUri: \"http://example.org/\"\n  terms:\n    - name: a\n      uri: \"http://x.example/a b\"\n",
            "vocabulary:\n  baseUri: \"http://example.org/\"\n  terms:\n    - name: a\n      metadata:\n        range: { \"@id\": \"http://x.example/<b>\" }\n",
            "vocabulary:\n  baseUri: \"http://example.org/\"\n  terms:\n    - name: a\n      metadata:\n        \"ex:has key\": v\n",
        ];
        for yaml in cases {
            let err = from_yaml_str(yaml).unwrap_err();
            assert!(matches!(err, Error::InvalidDefinition(_)), "accepted {yaml}");
        }
        // literals are escaped on output, so anything goes there
        let ok = "vocabulary:\n  baseUri: \"http://example.org/\"\n  terms:\n    - name: a\n      comment: \"a <b> \\\"c\\\"\"\n";
        assert!(from_yaml_str(ok).is_ok());
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = from_yaml_str(
            "vocabulary:\n  baseUri: \"http://example.org/\"\n  colour: blue\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn load_path_picks_decoder_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("ex.yaml");
        fs::write(&yaml_path, EXAMPLE_YAML).unwrap();
        assert_eq!(load_path(&yaml_path).unwrap().len(), 3);

        let json_path = dir.path().join("ex.json");
        let mut f = fs::File::create(&json_path).unwrap();
        write!(
            f,
            r#"{{"vocabulary": {{"baseUri": "http://example.org/", "terms": [{{"name": "a", "kind": "property"}}]}}}}"#
        )
        .unwrap();
        drop(f);
        let json = load_path(&json_path).unwrap();
        assert_eq!(json.term("a").unwrap().kind(), TermKind::Property);

        let txt_path = dir.path().join("ex.txt");
        fs::write(&txt_path, "").unwrap();
        assert!(matches!(load_path(&txt_path), Err(Error::InvalidDefinition(_))));

        let missing = dir.path().join("missing.yaml");
        assert!(matches!(load_path(&missing), Err(Error::Io { .. })));
    }
}
