//! Error type shared by registry lookups, catalog assembly and the
//! definition loader.

use std::path::PathBuf;

/// Errors produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A short name was requested from a strict vocabulary that never
    /// declared it.
    #[error("term `{name}` is not declared in strict vocabulary <{vocabulary}>")]
    UndeclaredTerm {
        /// Base URI of the vocabulary that was queried.
        vocabulary: String,
        /// The short name that was requested.
        name: String,
    },

    /// A prefixed name used a prefix no vocabulary is registered under.
    #[error("unknown vocabulary prefix `{0}`")]
    UnknownPrefix(String),

    /// A string that should have been a prefixed name had no `:` separator.
    #[error("`{0}` is not a prefixed name (expected `prefix:name`)")]
    InvalidPrefixedName(String),

    /// Two vocabularies in one catalog share a base URI.
    #[error("base URI <{0}> is registered by more than one vocabulary")]
    DuplicateBaseUri(String),

    /// Two vocabularies in one catalog share a prefix.
    #[error("prefix `{0}` is registered by more than one vocabulary")]
    DuplicatePrefix(String),

    /// A vocabulary definition is structurally unusable.
    #[error("invalid vocabulary definition: {0}")]
    InvalidDefinition(String),

    /// A definition file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A YAML definition could not be decoded.
    #[cfg(feature = "loader")]
    #[error("malformed YAML vocabulary definition")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON definition could not be decoded.
    #[cfg(feature = "loader")]
    #[error("malformed JSON vocabulary definition")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Builds an [`Error::UndeclaredTerm`].
    pub(crate) fn undeclared(vocabulary: &str, name: &str) -> Self {
        Error::UndeclaredTerm {
            vocabulary: vocabulary.to_owned(),
            name: name.to_owned(),
        }
    }

    /// Returns true if this is an undeclared-term lookup failure.
    #[must_use]
    pub fn is_undeclared(&self) -> bool {
        matches!(self, Error::UndeclaredTerm { .. })
    }
}
