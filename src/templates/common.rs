//! Blocks and helpers shared by all five documents

use crate::config::{ConfigRecord, DocType};

/// One row of a cookie listing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieRow {
    pub name: &'static str,
    pub purpose: &'static str,
    pub duration: &'static str,
}

impl CookieRow {
    pub const fn new(name: &'static str, purpose: &'static str, duration: &'static str) -> Self {
        Self { name, purpose, duration }
    }
}

/// Title and "Last Updated" line.
pub fn header(doc: DocType, config: &ConfigRecord) -> String {
    format!("# {}\n\n**Last Updated:** {}\n\n", doc.label(), config.last_updated)
}

/// Returns `fallback` when `value` is empty.
pub fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

pub fn bullets<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items.into_iter().map(|item| format!("- {}\n", item.as_ref())).collect()
}

pub fn cookie_table(rows: &[CookieRow]) -> String {
    let mut table = String::from(
        "| Cookie | Purpose | Duration |\n|--------|---------|----------|\n",
    );
    for row in rows {
        table.push_str(&format!("| {} | {} | {} |\n", row.name, row.purpose, row.duration));
    }
    table
}

/// Terminal "Contact Us" section. The business line is omitted when no name is set.
pub fn contact(intro: &str, config: &ConfigRecord) -> String {
    let mut section = format!(
        "## Contact Us\n\n{intro}\n\n- **Email:** {}\n- **Website:** {}\n",
        config.email, config.website_url
    );
    if !config.business_name.is_empty() {
        section.push_str(&format!("- **Business:** {}\n", config.business_name));
    }
    section.push('\n');
    section
}
