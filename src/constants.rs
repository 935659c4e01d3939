//! Constants used throughout the ShieldPage application

/// Refund window (in days) used when none is configured
pub const DEFAULT_REFUND_WINDOW: u32 = 30;

/// Number of wizard steps; the last one is the preview
pub const TOTAL_STEPS: u8 = 6;

/// `chrono` format for the "Last Updated" line, e.g. `October 14, 2026`
pub const DATE_FORMAT: &str = "%B %-d, %Y";

/// Answers file extensions accepted by the loader
pub const ANSWERS_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Business types offered by the questionnaire. Some select extra
/// disclaimer or refund policy sections.
pub const BUSINESS_TYPES: &[&str] = &[
    "blog",
    "ecommerce",
    "saas",
    "digital",
    "physical",
    "service",
    "consulting",
    "education",
    "health",
    "finance",
    "legal",
];

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Keys of the persisted key-value store
pub mod store {
    pub const FORM_KEY: &str = "shieldpage_form";
    pub const PREMIUM_KEY: &str = "shieldpage_premium";
    pub const PREMIUM_VALUE: &str = "true";
    pub const APP_DIR: &str = "shieldpage";
    pub const STORE_FILE: &str = "store.json";
}

/// User-facing messages
pub mod messages {
    pub const REQUIRED_FIELDS: &str = "Please fill in all required fields";
    pub const UPGRADE: &str = "Unlock all 5 document types + GDPR, CCPA, and PIPEDA compliance sections with a one-time premium purchase.";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
