//! The configuration record describing a business and its data practices

use super::types::{RefundType, Region};
use crate::constants::DEFAULT_REFUND_WINDOW;
use crate::error::Result;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// Flat input of every generator.
///
/// All fields are optional on input; missing strings become empty and the
/// generators degrade gracefully instead of rejecting the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigRecord {
    // Identity
    #[serde(deserialize_with = "null_as_default")]
    pub business_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub website_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub business_type: String,

    // Data collected
    #[serde(deserialize_with = "null_as_default")]
    pub collects_email: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub collects_name: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub collects_phone: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub collects_address: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub collects_payment: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub collects_usage_data: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub collects_cookies: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub collects_location: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub collects_device_info: bool,

    // Third parties
    #[serde(deserialize_with = "null_as_default")]
    pub uses_analytics: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub analytics_provider: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uses_ads: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub ads_provider: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uses_third_party_login: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub login_providers: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sells_data: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub shares_with_third_parties: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub third_party_names: String,

    // Site features and audience
    #[serde(deserialize_with = "null_as_default")]
    pub has_user_accounts: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub allows_user_content: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_affiliate_links: bool,
    #[serde(deserialize_with = "lenient_regions")]
    pub target_regions: Vec<Region>,
    #[serde(rename = "childrenUnder13", deserialize_with = "null_as_default")]
    pub children_under_13: bool,

    // Policy parameters
    #[serde(deserialize_with = "null_as_default")]
    pub offers_subscription: bool,
    #[serde(deserialize_with = "lenient_refund_type", skip_serializing_if = "Option::is_none")]
    pub refund_type: Option<RefundType>,
    #[serde(deserialize_with = "lenient_refund_window")]
    pub refund_window: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub governing_law: String,
    #[serde(deserialize_with = "null_as_default")]
    pub has_arbitration: bool,
    #[serde(deserialize_with = "null_as_true")]
    pub limit_of_liability: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub provides_advice: bool,

    /// Supplied by the caller per generation; never persisted.
    #[serde(skip_serializing, deserialize_with = "null_as_default")]
    pub last_updated: String,
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self {
            business_name: String::new(),
            website_url: String::new(),
            email: String::new(),
            business_type: String::new(),
            collects_email: false,
            collects_name: false,
            collects_phone: false,
            collects_address: false,
            collects_payment: false,
            collects_usage_data: false,
            collects_cookies: false,
            collects_location: false,
            collects_device_info: false,
            uses_analytics: false,
            analytics_provider: String::new(),
            uses_ads: false,
            ads_provider: String::new(),
            uses_third_party_login: false,
            login_providers: String::new(),
            sells_data: false,
            shares_with_third_parties: false,
            third_party_names: String::new(),
            has_user_accounts: false,
            allows_user_content: false,
            has_affiliate_links: false,
            target_regions: Vec::new(),
            children_under_13: false,
            offers_subscription: false,
            refund_type: None,
            refund_window: DEFAULT_REFUND_WINDOW,
            governing_law: String::new(),
            has_arbitration: false,
            limit_of_liability: true,
            provides_advice: false,
            last_updated: String::new(),
        }
    }
}

impl ConfigRecord {
    pub fn targets(&self, region: Region) -> bool {
        self.target_regions.contains(&region)
    }

    /// EU or UK visitors get GDPR-style sections.
    pub fn includes_gdpr(&self) -> bool {
        self.targets(Region::Eu) || self.targets(Region::Uk)
    }

    pub fn includes_ccpa(&self) -> bool {
        self.targets(Region::Us)
    }

    pub fn includes_pipeda(&self) -> bool {
        self.targets(Region::Ca)
    }

    /// Returns a copy carrying the given "Last Updated" text.
    pub fn with_last_updated(mut self, date: impl Into<String>) -> Self {
        self.last_updated = date.into();
        self
    }

    /// Overlays a JSON object of answers onto this record, field by field.
    ///
    /// Keys present in `answers` win; everything else keeps its current value.
    pub fn merge_answers(&self, answers: &Map<String, Value>) -> Result<Self> {
        let mut merged = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        merged.insert("lastUpdated".into(), Value::String(self.last_updated.clone()));
        merged.extend(answers.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(serde_json::from_value(Value::Object(merged))?)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// A present-but-null key decodes like an absent one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

fn lenient_refund_window<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let days = match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => n.trunc() as i64,
        NumberOrText::Text(s) => s.trim().parse::<i64>().unwrap_or(0),
        NumberOrText::Other(_) => 0,
    };
    Ok(u32::try_from(days).ok().filter(|d| *d > 0).unwrap_or(DEFAULT_REFUND_WINDOW))
}

fn lenient_refund_type<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<RefundType>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_str).and_then(|s| RefundType::from_str(s).ok()))
}

fn lenient_regions<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Region>, D::Error> {
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    let mut regions = Vec::new();
    for region in raw.iter().filter_map(Value::as_str).filter_map(|s| s.parse().ok()) {
        if !regions.contains(&region) {
            regions.push(region);
        }
    }
    Ok(regions)
}
