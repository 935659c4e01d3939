use super::entitlement::Entitlement;
use crate::config::{ConfigRecord, DocType};
use crate::markdown;
use crate::templates::generate_many;
use indexmap::IndexMap;

/// One preview tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub doc: DocType,
    pub label: &'static str,
    pub active: bool,
    pub locked: bool,
}

/// Outcome of selecting a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Rendered HTML of the selected document.
    Shown(String),
    UpgradeRequired,
}

/// The documents generated for the last wizard step.
#[derive(Debug, Clone)]
pub struct Preview {
    entitlement: Entitlement,
    documents: IndexMap<DocType, String>,
    active: DocType,
}

impl Preview {
    /// Generates the privacy policy, plus every other document when premium.
    pub fn build(config: &ConfigRecord, entitlement: Entitlement) -> Self {
        let documents = generate_many(entitlement.documents(), config);
        log::debug!("Preview holds {} document(s)", documents.len());
        Self { entitlement, documents, active: DocType::Privacy }
    }

    pub fn active(&self) -> DocType {
        self.active
    }

    pub fn documents(&self) -> &IndexMap<DocType, String> {
        &self.documents
    }

    /// Markdown of the active tab, the payload for copying.
    pub fn active_markdown(&self) -> Option<&str> {
        self.documents.get(&self.active).map(String::as_str)
    }

    pub fn tabs(&self) -> Vec<Tab> {
        DocType::ALL
            .into_iter()
            .map(|doc| Tab {
                doc,
                label: doc.label(),
                active: doc == self.active,
                locked: !self.entitlement.allows(doc),
            })
            .collect()
    }

    /// Activates `doc` and renders it. Locked documents leave the active tab
    /// unchanged.
    pub fn select(&mut self, doc: DocType) -> Selection {
        if !self.entitlement.allows(doc) {
            return Selection::UpgradeRequired;
        }
        self.active = doc;
        match self.documents.get(&doc) {
            Some(md) => Selection::Shown(markdown::render(md)),
            None => Selection::UpgradeRequired,
        }
    }
}
