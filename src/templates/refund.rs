use super::common::{contact, header};
use super::section::{assemble, Section};
use crate::config::{ConfigRecord, DocType, RefundType};

pub const SECTIONS: &[Section] = &[
    Section::always("title", title),
    Section::always("overview", overview),
    Section::always("refund_terms", refund_terms),
    Section::when("digital_products", |c| c.business_type == "digital", digital_products),
    Section::when("subscription_services", |c| c.business_type == "saas", subscription_services),
    Section::when("physical_products", |c| c.business_type == "physical", physical_products),
    Section::always("how_to_request", how_to_request),
    Section::always("processing_time", processing_time),
    Section::always("exceptions", exceptions),
    Section::always("contact", contact_us),
];

/// Generates the refund policy.
pub fn refund_policy(config: &ConfigRecord) -> String {
    assemble(SECTIONS, config)
}

fn title(config: &ConfigRecord) -> String {
    header(DocType::Refund, config)
}

fn overview(config: &ConfigRecord) -> String {
    format!(
        "## Overview\n\n\
         At {}, we want you to be satisfied with your purchase. This Refund Policy outlines the terms and conditions for requesting a refund.\n\n",
        config.business_name
    )
}

/// One body per refund type; an absent type reads as a full refund.
fn refund_terms(config: &ConfigRecord) -> String {
    let days = config.refund_window;
    match config.refund_type.unwrap_or_default() {
        RefundType::Full => format!(
            "## Our Guarantee\n\n\
             We offer a **{days}-day money-back guarantee** on all purchases. If you are not completely satisfied, you may request a full refund within {days} days of your purchase — no questions asked.\n\n"
        ),
        RefundType::Partial => format!(
            "## Refund Terms\n\n\
             Refund requests are considered on a case-by-case basis within **{days} days** of purchase. Refunds may be issued in full or partial amount depending on the circumstances.\n\n"
        ),
        RefundType::StoreCredit => format!(
            "## Refund Terms\n\n\
             We offer **store credit** for eligible returns within **{days} days** of purchase. Store credit does not expire and can be applied to any future purchase.\n\n"
        ),
        RefundType::None => "## Refund Terms\n\n\
             All sales are final. We do not offer refunds except as required by applicable law.\n\n"
            .to_string(),
    }
}

fn digital_products(config: &ConfigRecord) -> String {
    format!(
        "## Digital Products\n\n\
         Due to the nature of digital products, refunds are handled as follows:\n\n\
         - Refund requests must be made within {} days of purchase\n\
         - We may ask for a brief explanation to help us improve our products\n\
         - Refunds are processed to the original payment method\n\
         - Processing time is typically 5-10 business days\n\n",
        config.refund_window
    )
}

fn subscription_services(config: &ConfigRecord) -> String {
    format!(
        "## Subscription Services\n\n\
         - You may cancel your subscription at any time\n\
         - Cancellation takes effect at the end of the current billing period\n\
         - No refunds are provided for partial billing periods\n\
         - Annual subscriptions may be eligible for a prorated refund within the first {} days\n\
         - Free trial periods do not require payment and no refund is applicable\n\n",
        config.refund_window
    )
}

fn physical_products(config: &ConfigRecord) -> String {
    format!(
        "## Physical Products\n\n\
         ### Eligible Returns\n\n\
         To be eligible for a return:\n\n\
         - Items must be returned within {} days of delivery\n\
         - Items must be in original condition, unused, and in original packaging\n\
         - You must provide proof of purchase (receipt or order confirmation)\n\n\
         ### Return Shipping\n\n\
         - Return shipping costs are the responsibility of the customer\n\
         - We recommend using a trackable shipping method\n\
         - We are not responsible for items lost in return transit\n\n\
         ### Damaged or Defective Items\n\n\
         If you receive a damaged or defective item, please contact us within 48 hours of delivery. We will provide a prepaid return label and full refund or replacement.\n\n",
        config.refund_window
    )
}

fn how_to_request(config: &ConfigRecord) -> String {
    format!(
        "## How to Request a Refund\n\n\
         To request a refund:\n\n\
         1. Email us at {} with your order details\n\
         2. Include your order number and reason for the refund request\n\
         3. We will respond within 2 business days with next steps\n\n",
        config.email
    )
}

fn processing_time(_: &ConfigRecord) -> String {
    "## Processing Time\n\n\
     Approved refunds are processed within 5-10 business days. The time for the refund to appear in your account depends on your payment provider.\n\n"
        .to_string()
}

fn exceptions(config: &ConfigRecord) -> String {
    let mut section = format!(
        "## Exceptions\n\n\
         We reserve the right to refuse a refund if:\n\n\
         - The request falls outside the {}-day window\n\
         - There is evidence of fraud or abuse\n\
         - The product was substantially used or consumed\n",
        config.refund_window
    );
    if config.business_type == "digital" {
        section.push_str("- The digital product was downloaded and used extensively\n");
    }
    section.push('\n');
    section
}

fn contact_us(config: &ConfigRecord) -> String {
    contact("For refund inquiries, please contact:", config)
}
