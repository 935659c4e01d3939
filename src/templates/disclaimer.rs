use super::common::{contact, header};
use super::section::{assemble, Section};
use crate::config::{ConfigRecord, DocType};

pub const SECTIONS: &[Section] = &[
    Section::always("title", title),
    Section::always("general", general),
    Section::when("professional", needs_professional_disclaimer, professional),
    Section::always("external_links", external_links),
    Section::when("affiliate", |c| c.has_affiliate_links, affiliate),
    Section::always("testimonials", testimonials),
    Section::always("own_risk", own_risk),
    Section::always("errors_and_omissions", errors_and_omissions),
    Section::always("contact", contact_us),
];

/// Business types that always carry a professional disclaimer.
pub const ADVICE_BUSINESS_TYPES: &[&str] = &["health", "finance", "legal", "education"];

/// Generates the disclaimer.
pub fn disclaimer(config: &ConfigRecord) -> String {
    assemble(SECTIONS, config)
}

fn needs_professional_disclaimer(config: &ConfigRecord) -> bool {
    config.provides_advice || ADVICE_BUSINESS_TYPES.contains(&config.business_type.as_str())
}

fn title(config: &ConfigRecord) -> String {
    header(DocType::Disclaimer, config)
}

fn general(config: &ConfigRecord) -> String {
    format!(
        "## General Disclaimer\n\n\
         The information provided on {} (the \"Site\") by {} is for general informational purposes only. All information on the Site is provided in good faith. However, we make no representation or warranty of any kind, express or implied, regarding the accuracy, adequacy, validity, reliability, availability, or completeness of any information on the Site.\n\n\
         Under no circumstance shall we have any liability to you for any loss or damage of any kind incurred as a result of the use of the Site or reliance on any information provided on the Site. Your use of the Site and your reliance on any information on the Site is solely at your own risk.\n\n",
        config.website_url, config.business_name
    )
}

fn professional(config: &ConfigRecord) -> String {
    let (field, substitute) = match config.business_type.as_str() {
        "health" => ("medical", "medical advice, diagnosis, or treatment"),
        "finance" => ("financial", "financial advice from a qualified advisor"),
        "legal" => ("legal", "legal advice from a licensed attorney"),
        _ => ("professional", "advice from a qualified professional"),
    };
    format!(
        "## Professional Disclaimer\n\n\
         The Site does not provide {field} advice. The content is not intended to be a substitute for professional {substitute}.\n\n\
         Always seek the advice of a qualified professional with any questions you may have. Never disregard professional advice or delay seeking it because of something you read on this Site.\n\n"
    )
}

fn external_links(config: &ConfigRecord) -> String {
    format!(
        "## External Links Disclaimer\n\n\
         The Site may contain links to third-party websites or services that are not owned or controlled by {}. We have no control over, and assume no responsibility for, the content, privacy policies, or practices of any third-party websites or services.\n\n\
         We strongly advise you to read the terms and conditions and privacy policies of any third-party websites that you visit.\n\n",
        config.business_name
    )
}

fn affiliate(_: &ConfigRecord) -> String {
    "## Affiliate Disclosure\n\n\
     Some of the links on this Site are affiliate links. This means if you click on the link and purchase an item, we may receive an affiliate commission at no additional cost to you. We only recommend products or services that we believe will add value to our readers.\n\n\
     This affiliate disclosure is provided in accordance with the Federal Trade Commission's guidelines on endorsements and testimonials.\n\n"
        .to_string()
}

fn testimonials(_: &ConfigRecord) -> String {
    "## Testimonials Disclaimer\n\n\
     The Site may contain testimonials from users of our products and/or services. These testimonials reflect the real-life experiences and opinions of those users. However, the experiences are personal and may not be representative of all users. We do not claim, and you should not assume, that all users will have the same experiences.\n\n"
        .to_string()
}

fn own_risk(_: &ConfigRecord) -> String {
    "## \"Use at Your Own Risk\" Disclaimer\n\n\
     All information on the Site is provided \"as is,\" with no guarantee of completeness, accuracy, timeliness, or of the results obtained from the use of this information, and without warranty of any kind, express or implied.\n\n"
        .to_string()
}

fn errors_and_omissions(_: &ConfigRecord) -> String {
    "## Errors and Omissions Disclaimer\n\n\
     While we strive to ensure the information on the Site is correct, we are not responsible for errors or omissions, or for the results obtained from the use of this information. All information on the Site is provided with no guarantee of completeness, accuracy, or timeliness.\n\n"
        .to_string()
}

fn contact_us(config: &ConfigRecord) -> String {
    contact("If you have questions about this Disclaimer, please contact us:", config)
}
