//! Analytics providers with known cookie listings
//!
//! Cookie tables in the cookie policy are looked up here by the exact
//! provider name from the configuration. Names that are not listed fall back
//! to [`GENERIC_ANALYTICS_COOKIES`]. Adding a provider is a new entry in
//! [`PROVIDERS`]; the generators need no change.

use super::common::CookieRow;

/// Browser add-on or page that lets visitors opt out of a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptOut {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsProvider {
    pub name: &'static str,
    pub cookies: &'static [CookieRow],
    pub opt_out: Option<OptOut>,
}

pub const GENERIC_ANALYTICS_COOKIES: &[CookieRow] =
    &[CookieRow::new("analytics_id", "Tracks anonymous usage", "1 year")];

pub const PROVIDERS: &[AnalyticsProvider] = &[AnalyticsProvider {
    name: "Google Analytics",
    cookies: &[
        CookieRow::new("_ga", "Distinguishes users", "2 years"),
        CookieRow::new("_gid", "Distinguishes users", "24 hours"),
        CookieRow::new("_gat", "Throttles request rate", "1 minute"),
    ],
    opt_out: Some(OptOut {
        label: "Google Analytics Opt-Out Browser Add-on",
        url: "https://tools.google.com/dlpage/gaoptout",
    }),
}];

/// Exact, case-sensitive lookup by provider name.
pub fn lookup(name: &str) -> Option<&'static AnalyticsProvider> {
    PROVIDERS.iter().find(|provider| provider.name == name)
}

/// Cookie rows for `name`, or the generic row for unknown providers.
pub fn analytics_cookies(name: &str) -> &'static [CookieRow] {
    lookup(name).map_or(GENERIC_ANALYTICS_COOKIES, |provider| provider.cookies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn google_analytics_is_known() {
        let provider = lookup("Google Analytics").unwrap();
        let names: Vec<&str> = provider.cookies.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["_ga", "_gid", "_gat"]);
        assert!(provider.opt_out.is_some());
    }

    #[test]
    fn lookup_requires_exact_name() {
        assert!(lookup("google analytics").is_none());
        assert!(lookup("GA4").is_none());
        assert_eq!(analytics_cookies("GA4"), GENERIC_ANALYTICS_COOKIES);
        assert_eq!(analytics_cookies(""), GENERIC_ANALYTICS_COOKIES);
    }
}
