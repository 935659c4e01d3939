use crate::{
    config::ConfigRecord,
    error::{Error, Result},
};
use log::warn;
use url::Url;

/// Identity fields that must be filled before leaving the first wizard step.
pub const REQUIRED_FIELDS: [(&str, fn(&ConfigRecord) -> &str); 3] = [
    ("business name", |c| c.business_name.as_str()),
    ("website URL", |c| c.website_url.as_str()),
    ("contact email", |c| c.email.as_str()),
];

/// Names of the required identity fields that are blank after trimming.
pub fn missing_identity_fields(config: &ConfigRecord) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .filter(|(_, field)| field(config).trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

/// Checks the identity step.
///
/// Blank required fields are an error. A website that does not parse as a
/// URL or an email without `@` only produces a warning, since the documents
/// still render.
pub fn validate_identity(config: &ConfigRecord) -> Result<()> {
    let missing = missing_identity_fields(config);
    if !missing.is_empty() {
        return Err(Error::ValidationError(format!("missing {}", missing.join(", "))));
    }

    let website = config.website_url.trim();
    if let Err(e) = Url::parse(website) {
        warn!("Website URL '{website}' does not look like a URL: {e}");
    }
    if !config.email.contains('@') {
        warn!("Contact email '{}' has no '@'", config.email.trim());
    }
    Ok(())
}
