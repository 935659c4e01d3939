/// Handles argument parsing and the command workflows.
pub mod cli;

/// Configuration record, answers loading and shared enumerations.
pub mod config;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Markdown to HTML rendering and the export page.
pub mod markdown;

/// Interactive questionnaire.
pub mod prompt;

/// Wizard, entitlement, preview, store and export state.
pub mod session;

/// One generator per legal document.
pub mod templates;

/// Identity field checks.
pub mod validation;

pub mod constants;

pub use config::{ConfigRecord, DocType, RefundType, Region};
pub use markdown::render;
pub use templates::generate;
