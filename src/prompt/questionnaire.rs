//! The wizard's form steps as terminal questions.

use super::interface::{
    ConfirmationConfig, MultipleChoiceConfig, PromptProvider, SingleChoiceConfig,
    TextPromptConfig,
};
use crate::config::{ConfigRecord, RefundType, Region};
use crate::constants::{messages, BUSINESS_TYPES, DEFAULT_REFUND_WINDOW, TOTAL_STEPS};
use crate::error::{Error, Result};
use crate::session::Wizard;
use log::debug;

type Flag = fn(&mut ConfigRecord) -> &mut bool;

const DATA_COLLECTED: [(&str, Flag); 9] = [
    ("Email addresses", |c| &mut c.collects_email),
    ("Names", |c| &mut c.collects_name),
    ("Phone numbers", |c| &mut c.collects_phone),
    ("Physical addresses", |c| &mut c.collects_address),
    ("Payment information", |c| &mut c.collects_payment),
    ("Usage data", |c| &mut c.collects_usage_data),
    ("Cookies", |c| &mut c.collects_cookies),
    ("Location data", |c| &mut c.collects_location),
    ("Device information", |c| &mut c.collects_device_info),
];

/// Walks the form steps of the wizard, using the current record values as
/// defaults.
pub struct Questionnaire<'a, P: PromptProvider> {
    provider: &'a P,
}

impl<'a, P: PromptProvider> Questionnaire<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Asks steps one to five and returns the completed record. Step one is
    /// repeated until the identity fields are filled.
    pub fn run(&self, record: ConfigRecord) -> Result<ConfigRecord> {
        let mut record = record;
        let mut wizard = Wizard::new();
        while !wizard.is_preview() {
            eprintln!("\nStep {}/{}: {}", wizard.step(), TOTAL_STEPS - 1, wizard.title());
            self.ask_step(wizard.step(), &mut record)?;
            match wizard.next(&record) {
                Ok(step) => debug!("Advanced to step {step}"),
                Err(Error::ValidationError(reason)) => {
                    debug!("Staying on step {}: {reason}", wizard.step());
                    eprintln!("{}", messages::REQUIRED_FIELDS);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(record)
    }

    fn ask_step(&self, step: u8, record: &mut ConfigRecord) -> Result<()> {
        match step {
            1 => self.identity(record),
            2 => self.data_collected(record),
            3 => self.third_parties(record),
            4 => self.features(record),
            5 => self.policy_terms(record),
            _ => Ok(()),
        }
    }

    fn identity(&self, record: &mut ConfigRecord) -> Result<()> {
        record.business_name = self.text("Business name", &record.business_name)?;
        record.website_url = self.text("Website URL", &record.website_url)?;
        record.email = self.text("Contact email", &record.email)?;
        // an unlisted stored type stays selectable and is kept when chosen
        let mut choices: Vec<String> = BUSINESS_TYPES.iter().map(|t| t.to_string()).collect();
        if !record.business_type.is_empty() && !choices.contains(&record.business_type) {
            choices.push(record.business_type.clone());
        }
        let current = choices.iter().position(|t| *t == record.business_type);
        let index = self.provider.prompt_single_choice(&SingleChoiceConfig {
            prompt: "Business type".to_string(),
            default_index: Some(current.unwrap_or(0)),
            choices,
        })?;
        if let Some(business_type) = BUSINESS_TYPES.get(index) {
            record.business_type = business_type.to_string();
        }
        Ok(())
    }

    fn data_collected(&self, record: &mut ConfigRecord) -> Result<()> {
        let defaults = DATA_COLLECTED.iter().map(|(_, flag)| *flag(record)).collect();
        let selected = self.provider.prompt_multiple_choice(&MultipleChoiceConfig {
            prompt: "What data do you collect?".to_string(),
            choices: DATA_COLLECTED.iter().map(|(label, _)| label.to_string()).collect(),
            defaults,
        })?;
        for (index, (_, flag)) in DATA_COLLECTED.iter().enumerate() {
            *flag(record) = selected.contains(&index);
        }
        Ok(())
    }

    fn third_parties(&self, record: &mut ConfigRecord) -> Result<()> {
        record.uses_analytics = self.confirm("Do you use analytics?", record.uses_analytics)?;
        if record.uses_analytics {
            record.analytics_provider = self.text("Analytics provider", &record.analytics_provider)?;
        }
        record.uses_ads = self.confirm("Do you show ads?", record.uses_ads)?;
        if record.uses_ads {
            record.ads_provider = self.text("Ad provider", &record.ads_provider)?;
        }
        record.uses_third_party_login =
            self.confirm("Do you offer social login?", record.uses_third_party_login)?;
        if record.uses_third_party_login {
            record.login_providers = self.text("Login providers", &record.login_providers)?;
        }
        record.sells_data = self.confirm("Do you sell personal data?", record.sells_data)?;
        record.shares_with_third_parties =
            self.confirm("Do you share data with partners?", record.shares_with_third_parties)?;
        if record.shares_with_third_parties {
            record.third_party_names = self.text("Partner names", &record.third_party_names)?;
        }
        Ok(())
    }

    fn features(&self, record: &mut ConfigRecord) -> Result<()> {
        record.has_user_accounts = self.confirm("Do users create accounts?", record.has_user_accounts)?;
        record.allows_user_content =
            self.confirm("Can users post content?", record.allows_user_content)?;
        record.has_affiliate_links =
            self.confirm("Do you use affiliate links?", record.has_affiliate_links)?;

        let selected = self.provider.prompt_multiple_choice(&MultipleChoiceConfig {
            prompt: "Target regions".to_string(),
            choices: Region::ALL.iter().map(|r| r.label().to_string()).collect(),
            defaults: Region::ALL.iter().map(|r| record.targets(*r)).collect(),
        })?;
        record.target_regions =
            Region::ALL.into_iter().enumerate().filter(|(i, _)| selected.contains(i)).map(|(_, r)| r).collect();

        record.children_under_13 =
            self.confirm("Is your site directed at children under 13?", record.children_under_13)?;
        Ok(())
    }

    fn policy_terms(&self, record: &mut ConfigRecord) -> Result<()> {
        record.offers_subscription =
            self.confirm("Do you offer subscriptions?", record.offers_subscription)?;

        let current = record.refund_type.unwrap_or_default();
        let index = self.provider.prompt_single_choice(&SingleChoiceConfig {
            prompt: "Refund policy".to_string(),
            choices: RefundType::ALL.iter().map(RefundType::to_string).collect(),
            default_index: RefundType::ALL.iter().position(|kind| *kind == current),
        })?;
        record.refund_type = RefundType::ALL.get(index).copied();

        let window = self.text("Refund window (days)", &record.refund_window.to_string())?;
        record.refund_window = window.parse().ok().filter(|days| *days > 0).unwrap_or(DEFAULT_REFUND_WINDOW);

        record.governing_law = self.text("Governing law (state or country)", &record.governing_law)?;
        record.has_arbitration = self.confirm("Require arbitration?", record.has_arbitration)?;
        record.provides_advice =
            self.confirm("Does your site give professional advice?", record.provides_advice)?;
        Ok(())
    }

    fn text(&self, prompt: &str, default: &str) -> Result<String> {
        let answer = self.provider.prompt_text(&TextPromptConfig {
            prompt: prompt.to_string(),
            default: Some(default.to_string()),
        })?;
        Ok(answer.trim().to_string())
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        self.provider.prompt_confirmation(&ConfirmationConfig { prompt: prompt.to_string(), default })
    }
}
