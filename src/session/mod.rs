//! State the interactive flow carries between steps: wizard position,
//! entitlement, preview tabs, persisted form and export artifacts.

pub mod entitlement;
pub mod export;
pub mod preview;
pub mod store;
pub mod wizard;

pub use entitlement::Entitlement;
pub use export::{export_all, Artifact, ExportFormat, Exporter};
pub use preview::{Preview, Selection, Tab};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use wizard::{StepStatus, Wizard};
