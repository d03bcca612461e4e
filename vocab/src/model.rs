//! Core vocabulary model types.
//!
//! Built-in vocabularies are written as `&'static` [`TermDecl`] tables and
//! converted into owned [`Declaration`]s when a registry is built. A
//! registry stores one [`Term`] per short name; terms are never mutated
//! after construction.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::registry::DuplicatePolicy;

/// Which declaration list a term came from.
///
/// The distinction is documentary: every kind produces the same [`Term`]
/// record and is reachable through the same lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TermKind {
    /// An `rdfs:Class` / `owl:Class`.
    Class,
    /// An `rdf:Property` or one of its OWL refinements.
    Property,
    /// An `rdfs:Datatype`.
    Datatype,
    /// A named individual (enumeration member, well-known instance).
    Individual,
    /// A generic term with no declared kind, or a term synthesized by a
    /// non-strict vocabulary.
    #[default]
    Other,
}

impl TermKind {
    /// Returns the lowercase name used in definition files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TermKind::Class => "class",
            TermKind::Property => "property",
            TermKind::Datatype => "datatype",
            TermKind::Individual => "individual",
            TermKind::Other => "other",
        }
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value in a term's metadata bag.
///
/// Values are opaque: IRIs pointing at other terms (even in other
/// vocabularies) are stored as strings and never resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MetaRepr", into = "MetaRepr"))]
pub enum MetaValue {
    /// A plain string literal.
    Literal(String),
    /// An IRI, either absolute or a prefixed name such as `xsd:string`.
    Iri(String),
    /// Several values for the same attribute (e.g. `schema:domainIncludes`).
    List(Vec<MetaValue>),
}

impl MetaValue {
    /// Creates a literal value.
    pub fn literal(s: impl Into<String>) -> Self {
        MetaValue::Literal(s.into())
    }

    /// Creates an IRI value.
    pub fn iri(s: impl Into<String>) -> Self {
        MetaValue::Iri(s.into())
    }

    /// Returns the string form of a scalar value, `None` for lists.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::Literal(s) | MetaValue::Iri(s) => Some(s),
            MetaValue::List(_) => None,
        }
    }

    /// Returns the IRI if this is an IRI value.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            MetaValue::Iri(s) => Some(s),
            _ => None,
        }
    }

    /// Iterates over the scalar values, flattening lists.
    pub fn values(&self) -> Box<dyn Iterator<Item = &MetaValue> + '_> {
        match self {
            MetaValue::List(items) => Box::new(items.iter().flat_map(|item| item.values())),
            scalar => Box::new(std::iter::once(scalar)),
        }
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Literal(s) => write!(f, "{s:?}"),
            MetaValue::Iri(s) => write!(f, "<{s}>"),
            MetaValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// On-disk shape of a [`MetaValue`]: a string is a literal, `{"@id": ...}`
/// is an IRI and a sequence is a list. Unquoted numbers and booleans are
/// rejected because decoding them loses their source text (`1.10`, `0x1F`).
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum MetaRepr {
    Literal(String),
    Iri {
        #[serde(rename = "@id")]
        id: String,
    },
    List(Vec<MetaRepr>),
    #[serde(skip_serializing)]
    Bool(bool),
    #[serde(skip_serializing)]
    Int(i64),
    #[serde(skip_serializing)]
    Float(f64),
}

#[cfg(feature = "serde")]
impl TryFrom<MetaRepr> for MetaValue {
    type Error = String;

    fn try_from(repr: MetaRepr) -> std::result::Result<Self, Self::Error> {
        let unquoted = |v: &dyn fmt::Display| {
            format!("metadata value `{v}` must be a quoted string, an {{\"@id\": ...}} map or a list")
        };
        match repr {
            MetaRepr::Literal(s) => Ok(MetaValue::Literal(s)),
            MetaRepr::Iri { id } => Ok(MetaValue::Iri(id)),
            MetaRepr::List(items) => items
                .into_iter()
                .map(MetaValue::try_from)
                .collect::<std::result::Result<_, _>>()
                .map(MetaValue::List),
            MetaRepr::Bool(b) => Err(unquoted(&b)),
            MetaRepr::Int(i) => Err(unquoted(&i)),
            MetaRepr::Float(x) => Err(unquoted(&x)),
        }
    }
}

#[cfg(feature = "serde")]
impl From<MetaValue> for MetaRepr {
    fn from(value: MetaValue) -> Self {
        match value {
            MetaValue::Literal(s) => MetaRepr::Literal(s),
            MetaValue::Iri(id) => MetaRepr::Iri { id },
            MetaValue::List(items) => MetaRepr::List(items.into_iter().map(Into::into).collect()),
        }
    }
}

/// Metadata bag keyed by attribute name, e.g. `"domain"`, `"subClassOf"`,
/// `"owl:inverseOf"`.
pub type Metadata = BTreeMap<String, MetaValue>;

/// A class, property, datatype or individual registered in a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Term {
    name: String,
    uri: String,
    kind: TermKind,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    label: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    comment: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "BTreeMap::is_empty"))]
    metadata: Metadata,
}

impl Term {
    /// Builds a term from a declaration, deriving the URI from `base_uri`
    /// unless the declaration carries an override.
    pub(crate) fn from_declaration(base_uri: &str, decl: Declaration) -> Self {
        let uri = decl.uri.unwrap_or_else(|| format!("{base_uri}{}", decl.name));
        Term {
            name: decl.name,
            uri,
            kind: decl.kind,
            label: decl.label,
            comment: decl.comment,
            metadata: decl.metadata,
        }
    }

    /// A bare term for a short name a non-strict vocabulary never declared.
    pub(crate) fn synthesized(base_uri: &str, name: &str) -> Self {
        Term {
            name: name.to_owned(),
            uri: format!("{base_uri}{name}"),
            kind: TermKind::Other,
            label: None,
            comment: None,
            metadata: Metadata::new(),
        }
    }

    /// Short name within the owning vocabulary.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full URI of the term.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Declaration list the term came from.
    #[must_use]
    pub fn kind(&self) -> TermKind {
        self.kind
    }

    /// `rdfs:label`, if declared.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// `rdfs:comment`, if declared.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// The full metadata bag.
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// A single metadata attribute.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.metadata.get(key)
    }

    /// `rdfs:domain` (or `schema:domainIncludes`).
    #[must_use]
    pub fn domain(&self) -> Option<&MetaValue> {
        self.get("domain").or_else(|| self.get("schema:domainIncludes"))
    }

    /// `rdfs:range` (or `schema:rangeIncludes`).
    #[must_use]
    pub fn range(&self) -> Option<&MetaValue> {
        self.get("range").or_else(|| self.get("schema:rangeIncludes"))
    }

    /// `rdfs:subClassOf`.
    #[must_use]
    pub fn sub_class_of(&self) -> Option<&MetaValue> {
        self.get("subClassOf")
    }

    /// `rdfs:subPropertyOf`.
    #[must_use]
    pub fn sub_property_of(&self) -> Option<&MetaValue> {
        self.get("subPropertyOf")
    }

    /// True when the term is flagged `owl:deprecated "true"`.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.get("owl:deprecated")
            .and_then(MetaValue::as_str)
            .is_some_and(|v| v == "true")
    }

    /// True for terms declared as classes.
    #[must_use]
    pub fn is_class(&self) -> bool {
        self.kind == TermKind::Class
    }

    /// True for terms declared as properties.
    #[must_use]
    pub fn is_property(&self) -> bool {
        self.kind == TermKind::Property
    }

    /// Applies a later declaration of the same short name.
    pub(crate) fn merge(&mut self, base_uri: &str, decl: Declaration, policy: DuplicatePolicy) {
        match policy {
            DuplicatePolicy::KeepFirst => {}
            DuplicatePolicy::KeepLast => *self = Term::from_declaration(base_uri, decl),
            DuplicatePolicy::MergeComments => {
                if let Some(uri) = decl.uri {
                    self.uri = uri;
                }
                if decl.label.is_some() {
                    self.label = decl.label;
                }
                if decl.kind != TermKind::Other {
                    self.kind = decl.kind;
                }
                self.comment = match (self.comment.take(), decl.comment) {
                    (Some(old), Some(new)) if !old.split("\n\n").any(|c| c == new) => {
                        Some(format!("{old}\n\n{new}"))
                    }
                    (old, new) => old.or(new),
                };
                self.metadata.extend(decl.metadata);
            }
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

impl AsRef<str> for Term {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

/// An owned term declaration, the input to registry construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct Declaration {
    /// Short name, unique within the vocabulary.
    pub name: String,
    /// Declaration list this entry belongs to.
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: TermKind,
    /// Explicit URI, for terms whose URI is not `base + name`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub uri: Option<String>,
    /// `rdfs:label`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub label: Option<String>,
    /// `rdfs:comment`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub comment: Option<String>,
    /// Open-ended attribute bag.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "BTreeMap::is_empty"))]
    pub metadata: Metadata,
}

impl Declaration {
    /// A declaration with no label, comment or metadata.
    pub fn new(name: impl Into<String>, kind: TermKind) -> Self {
        Declaration {
            name: name.into(),
            kind,
            uri: None,
            label: None,
            comment: None,
            metadata: Metadata::new(),
        }
    }

    /// Shorthand for `Declaration::new(name, TermKind::Class)`.
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TermKind::Class)
    }

    /// Shorthand for `Declaration::new(name, TermKind::Property)`.
    pub fn property(name: impl Into<String>) -> Self {
        Self::new(name, TermKind::Property)
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Overrides the URI that would otherwise be `base + name`.
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Adds one metadata attribute, replacing any earlier value for `key`.
    #[must_use]
    pub fn with_meta(mut self, key: impl Into<String>, value: MetaValue) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// A metadata value in a static declaration table.
#[derive(Debug, Clone, Copy)]
pub enum MetaDecl {
    /// A string literal.
    Lit(&'static str),
    /// A single IRI.
    Iri(&'static str),
    /// Several IRIs.
    Iris(&'static [&'static str]),
}

impl From<MetaDecl> for MetaValue {
    fn from(decl: MetaDecl) -> Self {
        match decl {
            MetaDecl::Lit(s) => MetaValue::Literal(s.to_owned()),
            MetaDecl::Iri(s) => MetaValue::Iri(s.to_owned()),
            MetaDecl::Iris(items) => {
                MetaValue::List(items.iter().map(|s| MetaValue::Iri((*s).to_owned())).collect())
            }
        }
    }
}

/// A term declaration written as static data.
///
/// ```
/// use rdf_vocab::model::{MetaDecl, TermDecl};
///
/// const PERSON: TermDecl = TermDecl::class("Person")
///     .label("Person")
///     .comment("A person.")
///     .meta(&[("subClassOf", MetaDecl::Iri("http://schema.org/Thing"))]);
/// assert_eq!(PERSON.name, "Person");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TermDecl {
    /// Short name.
    pub name: &'static str,
    /// Declaration list.
    pub kind: TermKind,
    /// URI override.
    pub uri: Option<&'static str>,
    /// `rdfs:label`.
    pub label: Option<&'static str>,
    /// `rdfs:comment`.
    pub comment: Option<&'static str>,
    /// Metadata attributes, in declaration order.
    pub metadata: &'static [(&'static str, MetaDecl)],
}

impl TermDecl {
    const fn new(name: &'static str, kind: TermKind) -> Self {
        TermDecl {
            name,
            kind,
            uri: None,
            label: None,
            comment: None,
            metadata: &[],
        }
    }

    /// A class declaration.
    #[must_use]
    pub const fn class(name: &'static str) -> Self {
        Self::new(name, TermKind::Class)
    }

    /// A property declaration.
    #[must_use]
    pub const fn property(name: &'static str) -> Self {
        Self::new(name, TermKind::Property)
    }

    /// A datatype declaration.
    #[must_use]
    pub const fn datatype(name: &'static str) -> Self {
        Self::new(name, TermKind::Datatype)
    }

    /// A named individual.
    #[must_use]
    pub const fn individual(name: &'static str) -> Self {
        Self::new(name, TermKind::Individual)
    }

    /// Sets the label.
    #[must_use]
    pub const fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    /// Sets the comment.
    #[must_use]
    pub const fn comment(mut self, comment: &'static str) -> Self {
        self.comment = Some(comment);
        self
    }

    /// Sets an explicit URI.
    #[must_use]
    pub const fn uri(mut self, uri: &'static str) -> Self {
        self.uri = Some(uri);
        self
    }

    /// Sets the metadata table.
    #[must_use]
    pub const fn meta(mut self, metadata: &'static [(&'static str, MetaDecl)]) -> Self {
        self.metadata = metadata;
        self
    }
}

impl From<&TermDecl> for Declaration {
    fn from(decl: &TermDecl) -> Self {
        Declaration {
            name: decl.name.to_owned(),
            kind: decl.kind,
            uri: decl.uri.map(str::to_owned),
            label: decl.label.map(str::to_owned),
            comment: decl.comment.map(str::to_owned),
            metadata: decl
                .metadata
                .iter()
                .map(|(k, v)| ((*k).to_owned(), MetaValue::from(*v)))
                .collect(),
        }
    }
}

/// Vocabulary-level metadata for a static vocabulary module.
#[derive(Debug, Clone, Copy)]
pub struct VocabularyHeader {
    /// Preferred prefix (e.g. `"schema"`).
    pub prefix: &'static str,
    /// Namespace URI every short name is appended to.
    pub base_uri: &'static str,
    /// Human-readable title.
    pub label: &'static str,
    /// Description of the vocabulary.
    pub comment: &'static str,
    /// Whether undeclared short names are rejected.
    pub strict: bool,
    /// How repeated short names are resolved.
    pub duplicates: DuplicatePolicy,
}

/// A complete static vocabulary: header plus declaration tables.
#[derive(Debug, Clone, Copy)]
pub struct VocabularyModule {
    /// Vocabulary metadata.
    pub header: VocabularyHeader,
    /// Class declarations.
    pub classes: &'static [TermDecl],
    /// Property declarations.
    pub properties: &'static [TermDecl],
    /// Datatypes and named individuals.
    pub others: &'static [TermDecl],
}

impl VocabularyModule {
    /// All declarations in registration order: classes, properties, others.
    pub fn declarations(&self) -> impl Iterator<Item = &'static TermDecl> {
        self.classes
            .iter()
            .chain(self.properties)
            .chain(self.others)
    }

    /// Number of declarations, counting duplicates.
    #[must_use]
    pub fn declaration_count(&self) -> usize {
        self.classes.len() + self.properties.len() + self.others.len()
    }
}

/// Namespace IRIs for vocabularies referenced from metadata values.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// Dublin Core elements.
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    /// DCMI terms.
    pub const DCTERMS: &str = "http://purl.org/dc/terms/";
    /// FOAF.
    pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
    /// SKOS.
    pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";
    /// SemWeb vocab status.
    pub const VS: &str = "http://www.w3.org/2003/06/sw-vocab-status/ns#";
    /// Event ontology.
    pub const EVENT: &str = "http://purl.org/NET/c4dm/event.owl#";
    /// FRBR core.
    pub const FRBR: &str = "http://purl.org/vocab/frbr/core#";
    /// Timeline ontology.
    pub const TL: &str = "http://purl.org/NET/c4dm/timeline.owl#";
    /// W3C geo.
    pub const GEO: &str = "http://www.w3.org/2003/01/geo/wgs84_pos#";

    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:int`.
    pub const XSD_INT: &str = "http://www.w3.org/2001/XMLSchema#int";
    /// `xsd:nonNegativeInteger`.
    pub const XSD_NON_NEGATIVE_INTEGER: &str =
        "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
    /// `xsd:float`.
    pub const XSD_FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `xsd:date`.
    pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
    /// `xsd:dateTime`.
    pub const XSD_DATETIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    /// `xsd:duration`.
    pub const XSD_DURATION: &str = "http://www.w3.org/2001/XMLSchema#duration";
    /// `xsd:anyURI`.
    pub const XSD_ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
    /// `rdfs:Literal`.
    pub const RDFS_LITERAL: &str = "http://www.w3.org/2000/01/rdf-schema#Literal";
    /// `rdfs:Resource`.
    pub const RDFS_RESOURCE: &str = "http://www.w3.org/2000/01/rdf-schema#Resource";
    /// `rdf:List`.
    pub const RDF_LIST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#List";
    /// `owl:Thing`.
    pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";

    /// `foaf:Agent`.
    pub const FOAF_AGENT: &str = "http://xmlns.com/foaf/0.1/Agent";
    /// `foaf:Person`.
    pub const FOAF_PERSON: &str = "http://xmlns.com/foaf/0.1/Person";
    /// `foaf:Organization`.
    pub const FOAF_ORGANIZATION: &str = "http://xmlns.com/foaf/0.1/Organization";
    /// `foaf:Group`.
    pub const FOAF_GROUP: &str = "http://xmlns.com/foaf/0.1/Group";
    /// `foaf:Document`.
    pub const FOAF_DOCUMENT: &str = "http://xmlns.com/foaf/0.1/Document";
    /// `foaf:OnlineAccount`.
    pub const FOAF_ONLINE_ACCOUNT: &str = "http://xmlns.com/foaf/0.1/OnlineAccount";
    /// `foaf:Image`.
    pub const FOAF_IMAGE: &str = "http://xmlns.com/foaf/0.1/Image";
    /// `event:Event`.
    pub const EVENT_EVENT: &str = "http://purl.org/NET/c4dm/event.owl#Event";
    /// `frbr:Expression`.
    pub const FRBR_EXPRESSION: &str = "http://purl.org/vocab/frbr/core#Expression";
    /// `frbr:Manifestation`.
    pub const FRBR_MANIFESTATION: &str = "http://purl.org/vocab/frbr/core#Manifestation";
    /// `frbr:Item`.
    pub const FRBR_ITEM: &str = "http://purl.org/vocab/frbr/core#Item";
    /// `frbr:Work`.
    pub const FRBR_WORK: &str = "http://purl.org/vocab/frbr/core#Work";
    /// `tl:Interval`.
    pub const TL_INTERVAL: &str = "http://purl.org/NET/c4dm/timeline.owl#Interval";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_uri_wins_over_base() {
        let decl = Declaration::class("Agent").with_uri("http://xmlns.com/foaf/0.1/Agent");
        let term = Term::from_declaration("http://example.org/", decl);
        assert_eq!(term.uri(), "http://xmlns.com/foaf/0.1/Agent");
        assert_eq!(term.name(), "Agent");
    }

    #[test]
    fn static_decl_converts_verbatim() {
        const DECL: TermDecl = TermDecl::property("knows")
            .label("knows")
            .comment("A person known by this person.")
            .meta(&[
                ("domain", MetaDecl::Iri(iris::FOAF_PERSON)),
                ("owl:deprecated", MetaDecl::Lit("true")),
            ]);
        let owned = Declaration::from(&DECL);
        assert_eq!(owned.label.as_deref(), Some("knows"));
        assert_eq!(
            owned.metadata.get("domain"),
            Some(&MetaValue::iri(iris::FOAF_PERSON))
        );
        let term = Term::from_declaration("http://example.org/", owned);
        assert!(term.is_deprecated());
        assert!(term.is_property());
    }

    #[test]
    fn merge_comments_joins_distinct_comments() {
        let base = "http://example.org/";
        let mut term = Term::from_declaration(
            base,
            Declaration::property("due").with_comment("first"),
        );
        term.merge(
            base,
            Declaration::property("due").with_comment("second"),
            DuplicatePolicy::MergeComments,
        );
        assert_eq!(term.comment(), Some("first\n\nsecond"));

        term.merge(
            base,
            Declaration::property("due").with_comment("second"),
            DuplicatePolicy::MergeComments,
        );
        assert_eq!(term.comment(), Some("first\n\nsecond"));
    }

    #[test]
    fn list_values_flatten() {
        let v = MetaValue::List(vec![
            MetaValue::iri("http://schema.org/Person"),
            MetaValue::List(vec![MetaValue::iri("http://schema.org/Organization")]),
        ]);
        let flat: Vec<_> = v.values().filter_map(MetaValue::as_iri).collect();
        assert_eq!(
            flat,
            ["http://schema.org/Person", "http://schema.org/Organization"]
        );
    }
}
