use super::common::{contact, header, or_default};
use super::section::{assemble, Section};
use crate::config::{ConfigRecord, DocType, RefundType};

pub const SECTIONS: &[Section] = &[
    Section::always("title", title),
    Section::always("agreement", agreement),
    Section::always("use_of_site", use_of_site),
    Section::when("user_accounts", |c| c.has_user_accounts, user_accounts),
    Section::when("user_content", |c| c.allows_user_content, user_content),
    Section::always("intellectual_property", intellectual_property),
    Section::when("payments", |c| c.collects_payment, payments),
    Section::when("refunds", |c| c.collects_payment && c.refund_type.is_some(), refunds),
    Section::always("disclaimers", disclaimers),
    Section::always("limitation_of_liability", limitation_of_liability),
    Section::always("indemnification", indemnification),
    Section::when("dispute_resolution", |c| c.has_arbitration, dispute_resolution),
    Section::always("governing_law", governing_law),
    Section::always("changes", changes),
    Section::always("severability", severability),
    Section::always("contact", contact_us),
];

const DEFAULT_JURISDICTION: &str = "the United States";

/// Generates the terms of service.
pub fn terms_of_service(config: &ConfigRecord) -> String {
    assemble(SECTIONS, config)
}

fn title(config: &ConfigRecord) -> String {
    header(DocType::Terms, config)
}

fn agreement(config: &ConfigRecord) -> String {
    format!(
        "## Agreement to Terms\n\n\
         By accessing or using {} (the \"Site\") operated by {} (\"we,\" \"us,\" or \"our\"), you agree to be bound by these Terms of Service (\"Terms\"). If you do not agree to these Terms, do not use our Site.\n\n",
        config.website_url, config.business_name
    )
}

fn use_of_site(_: &ConfigRecord) -> String {
    "## Use of Our Site\n\n\
     ### Eligibility\n\n\
     You must be at least 18 years old (or the age of majority in your jurisdiction) to use our Site. By using the Site, you represent and warrant that you meet this requirement.\n\n\
     ### Acceptable Use\n\n\
     You agree not to:\n\n\
     - Use the Site for any unlawful purpose or in violation of any applicable laws\n\
     - Interfere with or disrupt the Site's infrastructure or security\n\
     - Attempt to gain unauthorized access to any part of the Site\n\
     - Use automated tools (bots, scrapers) without our written permission\n\
     - Transmit viruses, malware, or other harmful code\n\
     - Harass, abuse, or harm another person through the Site\n\
     - Impersonate any person or entity\n\
     - Use the Site to send unsolicited communications (spam)\n\n\
     We reserve the right to terminate or suspend your access for violations of these Terms.\n\n"
        .to_string()
}

fn user_accounts(config: &ConfigRecord) -> String {
    format!(
        "## User Accounts\n\n\
         ### Account Creation\n\n\
         To access certain features, you may need to create an account. You agree to:\n\n\
         - Provide accurate, current, and complete information\n\
         - Maintain the security of your password and account\n\
         - Promptly update any changes to your information\n\
         - Accept responsibility for all activity under your account\n\n\
         ### Account Termination\n\n\
         We may suspend or terminate your account at our discretion, with or without notice, for conduct that we believe violates these Terms or is harmful to other users, us, or third parties.\n\n\
         You may delete your account at any time by contacting us at {}.\n\n",
        config.email
    )
}

fn user_content(_: &ConfigRecord) -> String {
    "## User Content\n\n\
     ### Your Responsibilities\n\n\
     You are solely responsible for any content you post, upload, or share through the Site (\"User Content\"). You represent that:\n\n\
     - You own or have the necessary rights to post the content\n\
     - The content does not infringe on any third party's intellectual property rights\n\
     - The content is not illegal, obscene, defamatory, or otherwise objectionable\n\n\
     ### License Grant\n\n\
     By posting User Content, you grant us a non-exclusive, worldwide, royalty-free license to use, reproduce, modify, and display your content in connection with operating the Site. This license ends when you delete your content, except where it has been shared with others who have not deleted it.\n\n\
     ### Content Moderation\n\n\
     We reserve the right, but have no obligation, to monitor, edit, or remove User Content at our sole discretion.\n\n"
        .to_string()
}

fn intellectual_property(config: &ConfigRecord) -> String {
    format!(
        "## Intellectual Property\n\n\
         ### Our Content\n\n\
         The Site and its original content (excluding User Content), features, and functionality are owned by {} and are protected by copyright, trademark, and other intellectual property laws. You may not reproduce, distribute, or create derivative works from our content without our express written permission.\n\n\
         ### Trademarks\n\n\
         Our name, logo, and all related names, logos, and slogans are our trademarks. You may not use these without our prior written consent.\n\n",
        config.business_name
    )
}

fn payments(config: &ConfigRecord) -> String {
    let billing = if config.offers_subscription {
        "Subscriptions are billed on a recurring basis. By subscribing, you authorize us to charge your payment method at the applicable rate."
    } else {
        "All purchases are subject to the prices listed at the time of purchase."
    };
    let mut section = format!(
        "## Payments and Billing\n\n\
         ### Payment Terms\n\n\
         {billing}\n\n\
         - All prices are in USD unless otherwise stated\n\
         - You are responsible for any applicable taxes\n\
         - We use third-party payment processors and do not store your full payment information\n\n"
    );
    if config.offers_subscription {
        section.push_str(
            "### Subscription Cancellation\n\n\
             You may cancel your subscription at any time. Cancellation takes effect at the end of the current billing period. No refunds are provided for partial billing periods.\n\n",
        );
    }
    section
}

/// Refunds subsection of "Payments and Billing", one body per refund type.
fn refunds(config: &ConfigRecord) -> String {
    let days = config.refund_window;
    let email = &config.email;
    let body = match config.refund_type.unwrap_or_default() {
        RefundType::Full => format!(
            "We offer full refunds within {days} days of purchase, no questions asked. To request a refund, contact us at {email}."
        ),
        RefundType::Partial => format!(
            "Refund requests are evaluated on a case-by-case basis. Please contact us at {email} within {days} days of purchase to request a refund."
        ),
        RefundType::StoreCredit => format!(
            "Eligible purchases may be exchanged for store credit within {days} days of purchase. Store credit does not expire. To request store credit, contact us at {email}."
        ),
        RefundType::None => {
            "All sales are final. We do not offer refunds except as required by applicable law.".to_string()
        }
    };
    format!("### Refunds\n\n{body}\n\n")
}

fn disclaimers(_: &ConfigRecord) -> String {
    "## Disclaimers\n\n\
     The Site and its content are provided on an \"AS IS\" and \"AS AVAILABLE\" basis. We make no warranties, express or implied, including but not limited to:\n\n\
     - Merchantability or fitness for a particular purpose\n\
     - Accuracy, reliability, or completeness of any content\n\
     - Uninterrupted or error-free operation of the Site\n\
     - Security of data transmitted through the Site\n\n\
     Your use of the Site is at your sole risk.\n\n"
        .to_string()
}

fn limitation_of_liability(config: &ConfigRecord) -> String {
    let name = &config.business_name;
    let body = if config.limit_of_liability {
        format!(
            "To the maximum extent permitted by law, {name} shall not be liable for any indirect, incidental, special, consequential, or punitive damages, or any loss of profits or revenues, whether incurred directly or indirectly. Our total liability for any claim arising from these Terms shall not exceed the amount you paid us in the 12 months preceding the claim, or $100, whichever is greater."
        )
    } else {
        format!(
            "To the maximum extent permitted by law, {name} and its officers, directors, employees, and agents shall not be liable for any indirect, incidental, special, consequential, or punitive damages arising from your use of the Site."
        )
    };
    format!("## Limitation of Liability\n\n{body}\n\n")
}

fn indemnification(config: &ConfigRecord) -> String {
    format!(
        "## Indemnification\n\n\
         You agree to indemnify and hold harmless {}, its officers, directors, employees, and agents from any claims, losses, damages, liabilities, and expenses (including attorneys' fees) arising from your use of the Site, violation of these Terms, or infringement of any third party's rights.\n\n",
        config.business_name
    )
}

fn dispute_resolution(config: &ConfigRecord) -> String {
    format!(
        "## Dispute Resolution\n\n\
         ### Arbitration\n\n\
         Any disputes arising from these Terms or your use of the Site shall be resolved through binding arbitration in accordance with the rules of the American Arbitration Association. Arbitration shall take place in {}, and the arbitrator's decision shall be final and binding.\n\n\
         ### Class Action Waiver\n\n\
         You agree to resolve disputes individually and waive any right to participate in a class action lawsuit or class-wide arbitration.\n\n",
        or_default(&config.governing_law, DEFAULT_JURISDICTION)
    )
}

fn governing_law(config: &ConfigRecord) -> String {
    format!(
        "## Governing Law\n\n\
         These Terms shall be governed by and construed in accordance with the laws of {}, without regard to its conflict of law provisions.\n\n",
        or_default(&config.governing_law, DEFAULT_JURISDICTION)
    )
}

fn changes(_: &ConfigRecord) -> String {
    "## Changes to These Terms\n\n\
     We reserve the right to modify these Terms at any time. We will notify users of material changes by posting the revised Terms on this page and updating the \"Last Updated\" date. Your continued use of the Site after changes constitutes acceptance of the new Terms.\n\n"
        .to_string()
}

fn severability(_: &ConfigRecord) -> String {
    "## Severability\n\n\
     If any provision of these Terms is found to be invalid or unenforceable, the remaining provisions shall continue in full force and effect.\n\n"
        .to_string()
}

fn contact_us(config: &ConfigRecord) -> String {
    contact("If you have questions about these Terms, please contact us:", config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paying() -> ConfigRecord {
        ConfigRecord {
            business_name: "Acme".into(),
            website_url: "https://acme.test".into(),
            email: "a@acme.test".into(),
            collects_payment: true,
            ..Default::default()
        }
    }

    #[test]
    fn refunds_are_nested_under_payments() {
        let config = ConfigRecord { refund_type: Some(RefundType::Partial), offers_subscription: true, ..paying() };
        let doc = terms_of_service(&config);
        let payments = doc.find("## Payments and Billing").unwrap();
        let cancellation = doc.find("### Subscription Cancellation").unwrap();
        let refunds = doc.find("### Refunds").unwrap();
        let disclaimers = doc.find("## Disclaimers").unwrap();
        assert!(payments < cancellation && cancellation < refunds && refunds < disclaimers);
        assert!(doc.contains("contact us at a@acme.test within 30 days of purchase"));
    }

    #[test]
    fn refunds_omitted_without_refund_type_or_payments() {
        assert!(!terms_of_service(&paying()).contains("### Refunds"));
        let free = ConfigRecord { collects_payment: false, refund_type: Some(RefundType::Full), ..paying() };
        assert!(!terms_of_service(&free).contains("### Refunds"));
    }

    #[test]
    fn governing_law_defaults_to_united_states() {
        let doc = terms_of_service(&ConfigRecord { has_arbitration: true, ..paying() });
        assert!(doc.contains("Arbitration shall take place in the United States,"));
        assert!(doc.contains("in accordance with the laws of the United States, without"));

        let delaware = ConfigRecord { governing_law: "the State of Delaware".into(), ..paying() };
        assert!(terms_of_service(&delaware).contains("laws of the State of Delaware,"));
        assert!(!terms_of_service(&delaware).contains("## Dispute Resolution"));
    }

    #[test]
    fn liability_wording_follows_flag() {
        let capped = terms_of_service(&paying());
        assert!(capped.contains("or $100, whichever is greater"));
        let uncapped = terms_of_service(&ConfigRecord { limit_of_liability: false, ..paying() });
        assert!(uncapped.contains("Acme and its officers, directors, employees, and agents shall not be liable"));
        assert!(!uncapped.contains("$100"));
    }

    #[test]
    fn optional_sections_appear_with_flags() {
        let config = ConfigRecord { has_user_accounts: true, allows_user_content: true, ..paying() };
        let doc = terms_of_service(&config);
        assert!(doc.contains("## User Accounts"));
        assert!(doc.contains("by contacting us at a@acme.test."));
        assert!(doc.contains("## User Content"));
        assert!(doc.ends_with("- **Business:** Acme\n"));
    }
}
