use super::common::{contact, cookie_table, header, or_default, CookieRow};
use super::providers;
use super::section::{assemble, Section};
use crate::config::{ConfigRecord, DocType};

pub const SECTIONS: &[Section] = &[
    Section::always("title", title),
    Section::always("what_are_cookies", what_are_cookies),
    Section::always("how_we_use_cookies", how_we_use_cookies),
    Section::when("analytics_cookies", |c| c.uses_analytics, analytics_cookies),
    Section::when("advertising_cookies", |c| c.uses_ads, advertising_cookies),
    Section::when("login_cookies", |c| c.uses_third_party_login, login_cookies),
    Section::always("managing_cookies", managing_cookies),
    Section::when("consent", ConfigRecord::includes_gdpr, consent),
    Section::always("changes", changes),
    Section::always("contact", contact_us),
];

const ESSENTIAL_COOKIES: &[CookieRow] = &[
    CookieRow::new("session_id", "Maintains your session", "Session"),
    CookieRow::new("csrf_token", "Security protection", "Session"),
    CookieRow::new("cookie_consent", "Remembers your cookie preference", "1 year"),
];

const FUNCTIONAL_COOKIES: &[CookieRow] = &[
    CookieRow::new("language", "Remembers your language preference", "1 year"),
    CookieRow::new("theme", "Remembers your display preferences", "1 year"),
];

const ADVERTISING_COOKIES: &[CookieRow] = &[
    CookieRow::new("ad_id", "Serves relevant ads", "90 days"),
    CookieRow::new("conversion", "Tracks ad effectiveness", "30 days"),
];

/// Generates the cookie policy.
pub fn cookie_policy(config: &ConfigRecord) -> String {
    assemble(SECTIONS, config)
}

fn title(config: &ConfigRecord) -> String {
    header(DocType::Cookies, config)
}

fn what_are_cookies(_: &ConfigRecord) -> String {
    "## What Are Cookies?\n\n\
     Cookies are small text files stored on your device (computer, tablet, or mobile) when you visit a website. They help the website remember your preferences and understand how you interact with it.\n\n"
        .to_string()
}

fn how_we_use_cookies(config: &ConfigRecord) -> String {
    format!(
        "## How {name} Uses Cookies\n\n\
         We use cookies and similar technologies on {url} for the following purposes:\n\n\
         ### Essential Cookies\n\n\
         These cookies are necessary for the Site to function properly. They enable core features like security, network management, and accessibility. You cannot opt out of these cookies.\n\n\
         {essential}\n\
         ### Functional Cookies\n\n\
         These cookies enable enhanced functionality and personalization, such as remembering your preferences and settings.\n\n\
         {functional}\n",
        name = config.business_name,
        url = config.website_url,
        essential = cookie_table(ESSENTIAL_COOKIES),
        functional = cookie_table(FUNCTIONAL_COOKIES),
    )
}

fn analytics_cookies(config: &ConfigRecord) -> String {
    format!(
        "### Analytics Cookies\n\n\
         We use {} to understand how visitors use our Site. These cookies collect information in an anonymous form.\n\n\
         {}\n",
        or_default(&config.analytics_provider, "analytics services"),
        cookie_table(providers::analytics_cookies(&config.analytics_provider))
    )
}

fn advertising_cookies(config: &ConfigRecord) -> String {
    format!(
        "### Advertising Cookies\n\n\
         {} may set cookies to deliver relevant advertisements and measure their effectiveness.\n\n\
         {}\n",
        or_default(&config.ads_provider, "Advertising services"),
        cookie_table(ADVERTISING_COOKIES)
    )
}

fn login_cookies(config: &ConfigRecord) -> String {
    format!(
        "### Third-Party Login Cookies\n\n\
         If you sign in using {}, additional cookies may be set by that provider to manage your authentication.\n\n",
        or_default(&config.login_providers, "a third-party service")
    )
}

fn managing_cookies(config: &ConfigRecord) -> String {
    let provider_opt_out = providers::lookup(&config.analytics_provider)
        .filter(|_| config.uses_analytics)
        .and_then(|provider| provider.opt_out.map(|link| (provider.name, link)))
        .map(|(name, link)| format!("- **{name}:** Install the [{}]({})\n", link.label, link.url))
        .unwrap_or_default();
    format!(
        "## Managing Cookies\n\n\
         ### Browser Settings\n\n\
         Most web browsers allow you to manage cookies through their settings. You can:\n\n\
         - **Block all cookies:** This may affect Site functionality\n\
         - **Delete existing cookies:** Removes stored preferences\n\
         - **Allow only first-party cookies:** Blocks third-party tracking\n\n\
         ### Browser-Specific Instructions\n\n\
         - **Chrome:** Settings → Privacy and Security → Cookies\n\
         - **Firefox:** Settings → Privacy & Security → Cookies\n\
         - **Safari:** Preferences → Privacy → Cookies\n\
         - **Edge:** Settings → Cookies and site permissions\n\n\
         ### Opt-Out Tools\n\n\
         {provider_opt_out}\
         - **General:** Visit [Your Online Choices](https://www.youronlinechoices.com/) or [NAI Opt-Out](https://optout.networkadvertising.org/)\n\n"
    )
}

fn consent(_: &ConfigRecord) -> String {
    "## Consent (EU/UK Visitors)\n\n\
     Under the GDPR and ePrivacy Directive, we require your consent before placing non-essential cookies on your device. When you first visit our Site, you will see a cookie consent banner where you can accept or decline optional cookies.\n\n\
     You can change your cookie preferences at any time by clearing your cookies and revisiting the Site.\n\n"
        .to_string()
}

fn changes(_: &ConfigRecord) -> String {
    "## Changes to This Cookie Policy\n\n\
     We may update this Cookie Policy periodically. Changes will be posted on this page with an updated \"Last Updated\" date.\n\n"
        .to_string()
}

fn contact_us(config: &ConfigRecord) -> String {
    contact("If you have questions about our use of cookies, please contact us:", config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Region;

    fn analytics(provider: &str) -> ConfigRecord {
        ConfigRecord {
            business_name: "Acme".into(),
            website_url: "https://acme.test".into(),
            email: "a@acme.test".into(),
            uses_analytics: true,
            analytics_provider: provider.into(),
            ..Default::default()
        }
    }

    #[test]
    fn known_provider_lists_its_cookies_and_opt_out() {
        let doc = cookie_policy(&analytics("Google Analytics"));
        assert!(doc.contains("We use Google Analytics to understand"));
        assert!(doc.contains("| _ga | Distinguishes users | 2 years |\n| _gid | Distinguishes users | 24 hours |\n| _gat | Throttles request rate | 1 minute |\n"));
        assert!(!doc.contains("analytics_id"));
        assert!(doc.contains("- **Google Analytics:** Install the [Google Analytics Opt-Out Browser Add-on](https://tools.google.com/dlpage/gaoptout)\n- **General:**"));
    }

    #[test]
    fn unknown_provider_uses_generic_row() {
        let doc = cookie_policy(&analytics("Fathom"));
        assert!(doc.contains("| analytics_id | Tracks anonymous usage | 1 year |"));
        assert!(!doc.contains("_ga"));
        assert!(doc.contains("### Opt-Out Tools\n\n- **General:**"));
    }

    #[test]
    fn provider_opt_out_requires_analytics_enabled() {
        let config = ConfigRecord { uses_analytics: false, ..analytics("Google Analytics") };
        let doc = cookie_policy(&config);
        assert!(!doc.contains("### Analytics Cookies"));
        assert!(!doc.contains("gaoptout"));
    }

    #[test]
    fn essential_and_functional_tables_always_present() {
        let doc = cookie_policy(&ConfigRecord::default());
        assert!(doc.contains("## How  Uses Cookies"));
        assert!(doc.contains("| session_id | Maintains your session | Session |"));
        assert!(doc.contains("| theme | Remembers your display preferences | 1 year |\n\n## Managing Cookies"));
    }

    #[test]
    fn consent_section_for_eu_and_uk() {
        let eu = ConfigRecord { target_regions: vec![Region::Uk], ..Default::default() };
        assert!(cookie_policy(&eu).contains("## Consent (EU/UK Visitors)"));
        let us = ConfigRecord { target_regions: vec![Region::Us], ..Default::default() };
        assert!(!cookie_policy(&us).contains("## Consent (EU/UK Visitors)"));
    }

    #[test]
    fn ads_and_login_fall_back_to_generic_names() {
        let config = ConfigRecord { uses_ads: true, uses_third_party_login: true, ..Default::default() };
        let doc = cookie_policy(&config);
        assert!(doc.contains("Advertising services may set cookies"));
        assert!(doc.contains("| ad_id | Serves relevant ads | 90 days |"));
        assert!(doc.contains("If you sign in using a third-party service,"));
    }
}
