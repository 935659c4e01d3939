use super::common::{bullets, contact, header, or_default};
use super::section::{assemble, Section};
use crate::config::{ConfigRecord, DocType};

pub const SECTIONS: &[Section] = &[
    Section::always("title", title),
    Section::always("introduction", introduction),
    Section::always("information_we_collect", information_we_collect),
    Section::when("user_generated_content", |c| c.allows_user_content, user_generated_content),
    Section::when(
        "automatically_collected",
        |c| c.collects_usage_data || c.collects_cookies,
        automatically_collected,
    ),
    Section::always("how_we_use", how_we_use),
    Section::always("how_we_share", how_we_share),
    Section::when("analytics_and_advertising", |c| c.uses_analytics || c.uses_ads, analytics_and_advertising),
    Section::when("cookies_and_tracking", |c| c.collects_cookies, cookies_and_tracking),
    Section::always("data_retention", data_retention),
    Section::always("data_security", data_security),
    Section::always("your_rights", your_rights),
    Section::when("gdpr", ConfigRecord::includes_gdpr, gdpr),
    Section::when("ccpa", ConfigRecord::includes_ccpa, ccpa),
    Section::when("pipeda", ConfigRecord::includes_pipeda, pipeda),
    Section::always("children", children),
    Section::always("changes", changes),
    Section::always("contact", contact_us),
];

/// Data categories in listing order.
const DATA_CATEGORIES: &[(fn(&ConfigRecord) -> bool, &str)] = &[
    (|c| c.collects_name, "Name"),
    (|c| c.collects_email, "Email address"),
    (|c| c.collects_phone, "Phone number"),
    (|c| c.collects_address, "Mailing address"),
    (|c| c.collects_payment, "Payment information (credit card, billing address)"),
    (|c| c.collects_usage_data, "Usage data (pages visited, time spent, clicks)"),
    (|c| c.collects_cookies, "Cookies and tracking technologies"),
    (|c| c.collects_location, "Location data"),
    (|c| c.collects_device_info, "Device information (browser type, operating system, IP address)"),
];

/// Generates the privacy policy.
pub fn privacy_policy(config: &ConfigRecord) -> String {
    assemble(SECTIONS, config)
}

fn title(config: &ConfigRecord) -> String {
    header(DocType::Privacy, config)
}

fn introduction(config: &ConfigRecord) -> String {
    let account = if config.has_user_accounts { " or create an account with us" } else { "" };
    format!(
        "## Introduction\n\n\
         {name} (\"we,\" \"us,\" or \"our\") operates {url} (the \"Site\"). This Privacy Policy explains how we collect, use, disclose, and protect your personal information when you visit our Site{account}.\n\n\
         By using our Site, you agree to the collection and use of information as described in this policy. If you do not agree, please do not use our Site.\n\n",
        name = config.business_name,
        url = config.website_url,
    )
}

fn information_we_collect(config: &ConfigRecord) -> String {
    let account = if config.has_user_accounts { "create an account, " } else { "" };
    let collected = DATA_CATEGORIES
        .iter()
        .filter(|(collects, _)| collects(config))
        .map(|(_, label)| *label);
    format!(
        "## Information We Collect\n\n\
         ### Personal Information You Provide\n\n\
         When you {account}use our services, or contact us, we may collect the following:\n\n\
         {list}\n",
        list = bullets(collected),
    )
}

fn user_generated_content(_: &ConfigRecord) -> String {
    "### User-Generated Content\n\n\
     If you post, upload, or share content through our Site, we collect that content and any metadata associated with it.\n\n"
        .to_string()
}

fn automatically_collected(config: &ConfigRecord) -> String {
    let mut items = vec![
        "Your IP address",
        "Browser type and version",
        "Operating system",
        "Pages you visit and actions you take",
        "Date and time of your visit",
        "Referring website",
    ];
    if config.collects_cookies {
        items.push("Cookie data and similar tracking technologies");
    }
    if config.collects_location {
        items.push("Approximate geographic location based on IP address");
    }
    format!(
        "### Automatically Collected Information\n\n\
         When you visit our Site, we automatically collect certain information, including:\n\n\
         {}\n",
        bullets(items)
    )
}

fn how_we_use(config: &ConfigRecord) -> String {
    let mut purposes = vec![
        "To provide, maintain, and improve our services",
        "To communicate with you, including responding to inquiries",
    ];
    if config.has_user_accounts {
        purposes.push("To manage your account and provide customer support");
    }
    if config.collects_payment {
        purposes.push("To process transactions and send related information");
    }
    if config.uses_analytics {
        purposes.push("To analyze usage patterns and improve our Site");
    }
    purposes.push("To protect against fraud, unauthorized access, and other illegal activities");
    purposes.push("To comply with legal obligations");
    format!(
        "## How We Use Your Information\n\n\
         We use the information we collect for the following purposes:\n\n\
         {}\n",
        bullets(purposes)
    )
}

fn how_we_share(config: &ConfigRecord) -> String {
    let stance = if config.sells_data {
        "**We may sell or share your personal information** with third parties for commercial purposes."
    } else {
        "**We do not sell your personal information.**"
    };
    let analytics = if config.uses_analytics { ", analytics" } else { "" };
    let mut circumstances = vec![format!(
        "**Service Providers:** We share information with vendors who help us operate our business (e.g., hosting, payment processing{analytics})."
    )];
    if config.shares_with_third_parties {
        circumstances.push(format!(
            "**Third-Party Partners:** We may share information with {} to enhance our services.",
            or_default(&config.third_party_names, "select partners")
        ));
    }
    circumstances.extend(
        [
            "**Legal Requirements:** We may disclose information when required by law, court order, or governmental request.",
            "**Business Transfers:** In the event of a merger, acquisition, or sale of assets, your information may be transferred.",
            "**With Your Consent:** We may share information for other purposes with your explicit consent.",
        ]
        .map(String::from),
    );
    format!(
        "## How We Share Your Information\n\n\
         {stance}\n\n\
         We may share your information in the following circumstances:\n\n\
         {}\n",
        bullets(circumstances)
    )
}

fn analytics_and_advertising(config: &ConfigRecord) -> String {
    let mut section = String::from("## Analytics and Advertising\n\n");
    if config.uses_analytics {
        section.push_str(&format!(
            "We use {} to understand how visitors interact with our Site. These services may collect information about your online activities over time and across different websites.\n\n",
            or_default(&config.analytics_provider, "analytics services")
        ));
    }
    if config.uses_ads {
        section.push_str(&format!(
            "We use {} to display relevant advertisements. These services may use cookies and similar technologies to serve ads based on your browsing activity.\n\n",
            or_default(&config.ads_provider, "advertising services")
        ));
    }
    section
}

fn cookies_and_tracking(config: &ConfigRecord) -> String {
    let mut kinds = vec![
        "**Essential Cookies:** Required for the Site to function properly.",
        "**Analytics Cookies:** Help us understand how visitors use our Site.",
    ];
    if config.uses_ads {
        kinds.push("**Advertising Cookies:** Used to deliver relevant advertisements.");
    }
    kinds.push("**Preference Cookies:** Remember your settings and preferences.");
    format!(
        "## Cookies and Tracking\n\n\
         We use cookies and similar tracking technologies to collect information and improve our Site. Types of cookies we use:\n\n\
         {}\n\
         You can manage cookie preferences through your browser settings. Note that disabling cookies may affect Site functionality.\n\n",
        bullets(kinds)
    )
}

fn data_retention(_: &ConfigRecord) -> String {
    "## Data Retention\n\n\
     We retain your personal information for as long as necessary to fulfill the purposes described in this policy, unless a longer retention period is required by law. When we no longer need your information, we will securely delete or anonymize it.\n\n"
        .to_string()
}

fn data_security(_: &ConfigRecord) -> String {
    "## Data Security\n\n\
     We implement reasonable technical and organizational measures to protect your personal information against unauthorized access, alteration, disclosure, or destruction. However, no method of transmission over the Internet or electronic storage is 100% secure, and we cannot guarantee absolute security.\n\n"
        .to_string()
}

fn your_rights(config: &ConfigRecord) -> String {
    let mut rights = vec![
        "**Access:** Request a copy of the personal information we hold about you.",
        "**Correction:** Request correction of inaccurate or incomplete information.",
        "**Deletion:** Request deletion of your personal information.",
        "**Opt-Out:** Opt out of marketing communications at any time.",
    ];
    if config.has_user_accounts {
        rights.push("**Account Deletion:** Request deletion of your account and associated data.");
    }
    format!(
        "## Your Rights\n\n\
         Depending on your location, you may have the following rights regarding your personal information:\n\n\
         {}\n\
         To exercise any of these rights, contact us at {}.\n\n",
        bullets(rights),
        config.email
    )
}

fn gdpr(config: &ConfigRecord) -> String {
    format!(
        "## European Privacy Rights (GDPR)\n\n\
         If you are located in the European Economic Area (EEA) or the United Kingdom, you have additional rights under the General Data Protection Regulation (GDPR):\n\n\
         - **Legal Basis:** We process your data based on consent, contractual necessity, legitimate interests, or legal obligations.\n\
         - **Data Portability:** You may request your data in a structured, machine-readable format.\n\
         - **Right to Object:** You may object to processing based on legitimate interests.\n\
         - **Right to Restrict Processing:** You may request restriction of processing in certain circumstances.\n\
         - **Withdraw Consent:** Where processing is based on consent, you may withdraw it at any time.\n\
         - **Complaint:** You have the right to lodge a complaint with a supervisory authority in your jurisdiction.\n\n\
         **Data Controller:** {}, {}\n\n",
        config.business_name, config.email
    )
}

fn ccpa(config: &ConfigRecord) -> String {
    let sale = if config.sells_data {
        format!(
            "**To opt out of the sale of your personal information,** contact us at {} or use the \"Do Not Sell My Personal Information\" link on our Site.",
            config.email
        )
    } else {
        "We do not sell personal information as defined by the CCPA.".to_string()
    };
    format!(
        "## California Privacy Rights (CCPA/CPRA)\n\n\
         If you are a California resident, you have the following rights under the California Consumer Privacy Act and California Privacy Rights Act:\n\n\
         - **Right to Know:** You may request details about the categories and specific pieces of personal information we have collected.\n\
         - **Right to Delete:** You may request deletion of your personal information, subject to certain exceptions.\n\
         - **Right to Opt-Out:** You may opt out of the sale or sharing of your personal information.\n\
         - **Right to Non-Discrimination:** We will not discriminate against you for exercising your privacy rights.\n\n\
         {sale}\n\n"
    )
}

fn pipeda(config: &ConfigRecord) -> String {
    format!(
        "## Canadian Privacy Rights (PIPEDA)\n\n\
         If you are a Canadian resident, you have rights under the Personal Information Protection and Electronic Documents Act (PIPEDA):\n\n\
         - We obtain meaningful consent for the collection, use, and disclosure of personal information.\n\
         - We limit collection to what is necessary for identified purposes.\n\
         - You may access and challenge the accuracy of your personal information.\n\
         - We are transparent about our privacy practices and policies.\n\n\
         To exercise your rights, contact our Privacy Officer at {}.\n\n",
        config.email
    )
}

fn children(config: &ConfigRecord) -> String {
    let body = if config.children_under_13 {
        format!(
            "Our Site is not intended for children under the age of 13. We do not knowingly collect personal information from children under 13. If you believe we have collected information from a child under 13, please contact us at {}, and we will promptly delete it.",
            config.email
        )
    } else {
        "Our Site is not directed to individuals under the age of 13, and we do not knowingly collect personal information from children under 13. If we become aware that we have collected information from a child under 13, we will take steps to delete it promptly.".to_string()
    };
    format!("## Children's Privacy\n\n{body}\n\n")
}

fn changes(_: &ConfigRecord) -> String {
    "## Changes to This Privacy Policy\n\n\
     We may update this Privacy Policy from time to time. We will notify you of any material changes by posting the new policy on this page and updating the \"Last Updated\" date. We encourage you to review this policy periodically.\n\n"
        .to_string()
}

fn contact_us(config: &ConfigRecord) -> String {
    contact(
        "If you have questions or concerns about this Privacy Policy, please contact us:",
        config,
    )
}
