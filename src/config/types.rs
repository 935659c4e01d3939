//! Enumerations shared by the configuration record and the generators

use cruet::case::kebab::to_kebab_case;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// One of the five legal documents ShieldPage can produce.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum DocType {
    Privacy,
    Terms,
    Cookies,
    Disclaimer,
    Refund,
}

impl DocType {
    /// Every document type in its fixed presentation order.
    pub const ALL: [DocType; 5] = [
        DocType::Privacy,
        DocType::Terms,
        DocType::Cookies,
        DocType::Disclaimer,
        DocType::Refund,
    ];

    /// Human readable title, also used as the document's H1.
    pub fn label(&self) -> &'static str {
        match self {
            DocType::Privacy => "Privacy Policy",
            DocType::Terms => "Terms of Service",
            DocType::Cookies => "Cookie Policy",
            DocType::Disclaimer => "Disclaimer",
            DocType::Refund => "Refund Policy",
        }
    }

    /// Whether the document is available without the premium entitlement.
    pub fn is_free(&self) -> bool {
        matches!(self, DocType::Privacy)
    }

    /// Export file name without extension, e.g. `terms-of-service`.
    pub fn file_stem(&self) -> String {
        to_kebab_case(self.label())
    }

    pub fn tag(&self) -> &'static str {
        match self {
            DocType::Privacy => "privacy",
            DocType::Terms => "terms",
            DocType::Cookies => "cookies",
            DocType::Disclaimer => "disclaimer",
            DocType::Refund => "refund",
        }
    }
}

impl Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Jurisdiction tag driving the compliance sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Us,
    Eu,
    Ca,
    Uk,
    Au,
}

impl Region {
    pub const ALL: [Region; 5] = [Region::Us, Region::Eu, Region::Ca, Region::Uk, Region::Au];

    pub fn code(&self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Eu => "eu",
            Region::Ca => "ca",
            Region::Uk => "uk",
            Region::Au => "au",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::Us => "United States",
            Region::Eu => "European Union",
            Region::Ca => "Canada",
            Region::Uk => "United Kingdom",
            Region::Au => "Australia",
        }
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown region code '{s}'"))
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// How purchases are refunded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefundType {
    #[default]
    Full,
    Partial,
    StoreCredit,
    None,
}

impl RefundType {
    pub const ALL: [RefundType; 4] =
        [RefundType::Full, RefundType::Partial, RefundType::StoreCredit, RefundType::None];

    pub fn code(&self) -> &'static str {
        match self {
            RefundType::Full => "full",
            RefundType::Partial => "partial",
            RefundType::StoreCredit => "store-credit",
            RefundType::None => "none",
        }
    }
}

impl FromStr for RefundType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RefundType::ALL
            .into_iter()
            .find(|kind| kind.code() == s.trim())
            .ok_or_else(|| format!("unknown refund type '{s}'"))
    }
}

impl Display for RefundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_stems_are_kebab_cased_labels() {
        let stems: Vec<String> = DocType::ALL.iter().map(DocType::file_stem).collect();
        assert_eq!(
            stems,
            vec![
                "privacy-policy",
                "terms-of-service",
                "cookie-policy",
                "disclaimer",
                "refund-policy"
            ]
        );
    }

    #[test]
    fn only_privacy_is_free() {
        let free: Vec<DocType> = DocType::ALL.into_iter().filter(DocType::is_free).collect();
        assert_eq!(free, vec![DocType::Privacy]);
    }

    #[test]
    fn region_codes_parse_case_insensitively() {
        assert_eq!("EU".parse::<Region>(), Ok(Region::Eu));
        assert_eq!(" uk ".parse::<Region>(), Ok(Region::Uk));
        assert!("mars".parse::<Region>().is_err());
    }

    #[test]
    fn refund_type_uses_kebab_codes() {
        assert_eq!("store-credit".parse::<RefundType>(), Ok(RefundType::StoreCredit));
        assert_eq!(RefundType::StoreCredit.to_string(), "store-credit");
        let json = serde_json::to_string(&RefundType::StoreCredit).unwrap();
        assert_eq!(json, r#""store-credit""#);
        assert!("custom".parse::<RefundType>().is_err());
    }
}
