//! Built-in vocabularies.
//!
//! Each sub-module exposes a `module()` function returning the vocabulary's
//! header and declaration tables as static data.

pub mod exif;
pub mod gr;
pub mod http;
pub mod ical;
pub mod mo;
pub mod schema;
pub mod sioc;
pub mod vcard;

use crate::model::VocabularyModule;

/// Every built-in vocabulary, ordered by prefix.
#[must_use]
pub fn all() -> Vec<VocabularyModule> {
    vec![
        exif::module(),
        gr::module(),
        http::module(),
        ical::module(),
        mo::module(),
        schema::module(),
        sioc::module(),
        vcard::module(),
    ]
}
