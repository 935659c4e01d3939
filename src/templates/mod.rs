//! Template engine: one pure generator per document type
//!
//! Every generator is a fixed, ordered list of [`Section`]s, each gated by a
//! predicate over the [`ConfigRecord`]. Generation never fails; missing
//! fields produce degraded text rather than errors. Free-text fields are
//! interpolated verbatim without escaping.

pub mod common;
pub mod cookies;
pub mod disclaimer;
pub mod privacy;
pub mod providers;
pub mod refund;
pub mod section;
pub mod terms;

use crate::config::{ConfigRecord, DocType};
use indexmap::IndexMap;

pub use cookies::cookie_policy;
pub use disclaimer::disclaimer;
pub use privacy::privacy_policy;
pub use refund::refund_policy;
pub use section::{assemble, Section};
pub use terms::terms_of_service;

/// Ordered section list of a document type.
pub fn sections(doc: DocType) -> &'static [Section] {
    match doc {
        DocType::Privacy => privacy::SECTIONS,
        DocType::Terms => terms::SECTIONS,
        DocType::Cookies => cookies::SECTIONS,
        DocType::Disclaimer => disclaimer::SECTIONS,
        DocType::Refund => refund::SECTIONS,
    }
}

/// Generates the Markdown document of type `doc`.
pub fn generate(doc: DocType, config: &ConfigRecord) -> String {
    assemble(sections(doc), config)
}

/// Generates each of `docs` in the given order.
pub fn generate_many<I>(docs: I, config: &ConfigRecord) -> IndexMap<DocType, String>
where
    I: IntoIterator<Item = DocType>,
{
    docs.into_iter().map(|doc| (doc, generate(doc, config))).collect()
}
