//! Configuration management for ShieldPage documents
//!
//! This module contains the configuration system components:
//! - `types`: Document, region and refund enumerations
//! - `record`: The configuration record consumed by every generator
//! - `loader`: Answers loading from files, inline JSON and stdin

pub mod loader;
pub mod record;
pub mod types;

// Re-export commonly used types for convenience
pub use loader::{load_answers_file, parse_answers, read_answers_arg};
pub use record::ConfigRecord;
pub use types::{DocType, RefundType, Region};
