//! Interactive questionnaire
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `questionnaire`: The wizard's form steps expressed through the interfaces

pub mod dialoguer;
pub mod interface;
pub mod questionnaire;

pub use interface::*;
pub use questionnaire::Questionnaire;

use crate::{config::ConfigRecord, error::Result, prompt::dialoguer::DialoguerPrompter};

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}

/// Runs the questionnaire in the terminal, starting from `record`.
pub fn ask_questions(record: ConfigRecord) -> Result<ConfigRecord> {
    let provider = get_prompt_provider();
    Questionnaire::new(&provider).run(record)
}
