use common_enums::{Currency, PaymentStatus};
use common_utils::{request::Method, CustomResult, StringMajorUnitForConnector};
use domain_types::{
    connector_types::{NotificationRecord, PaymentOrder, RedirectForm, RequestDetails},
    errors,
    router_data::ConnectorAuthType,
    signature::{DigestAlgorithm, DigestEncoding, SignatureContext, SignatureRule},
    FieldMap,
};
use hyperswitch_masking::{PeekInterface, Secret};
use interfaces::decode;

use super::constants;
use crate::utils;

pub const SIGNATURE_RULE: SignatureRule =
    SignatureRule::new(DigestAlgorithm::Md5, "", DigestEncoding::UpperHex);

#[derive(Debug, Clone)]
pub struct TwoCheckoutAuthType {
    pub seller_id: Secret<String>,
    pub secret_word: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for TwoCheckoutAuthType {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::BodyKey { api_key, key1 } => Ok(Self {
                seller_id: api_key.to_owned(),
                secret_word: key1.to_owned(),
            }),
            _ => Err(error_stack::report!(
                errors::ConnectorError::FailedToObtainAuthType
            )),
        }
    }
}

pub fn build_payment_form(
    endpoint: &str,
    order: &PaymentOrder,
    auth: &TwoCheckoutAuthType,
) -> CustomResult<RedirectForm, errors::ConnectorError> {
    let price = utils::convert_amount(&StringMajorUnitForConnector, order.amount, order.currency)?;
    let customer = order.customer.clone().unwrap_or_default();
    let address = order.billing_address.clone().unwrap_or_default();

    let mut form_fields = FieldMap::new();
    form_fields
        .add_field("sid", auth.seller_id.peek().as_str())
        .add_field("mode", "2CO")
        .add_field("li_0_type", "product")
        .add_field(
            "li_0_name",
            order.description.as_deref().unwrap_or(order.order_id.as_str()),
        )
        .add_field("li_0_price", price.get_amount_as_string())
        .add_field("li_0_quantity", "1")
        .add_field("merchant_order_id", order.order_id.as_str())
        .add_field("currency_code", order.currency.to_string())
        .add_optional_field("x_receipt_link_url", order.return_url.as_deref())
        .add_optional_field("card_holder_name", customer.full_name())
        .add_optional_field("email", customer.email.map(|email| email.peek().to_owned()))
        .add_optional_field("phone", customer.phone.map(|phone| phone.peek().to_owned()))
        .add_optional_field(
            "street_address",
            address.line1.map(|line| line.peek().to_owned()),
        )
        .add_optional_field(
            "street_address2",
            address.line2.map(|line| line.peek().to_owned()),
        )
        .add_optional_field("city", address.city)
        .add_optional_field("state", address.state.map(|state| state.peek().to_owned()))
        .add_optional_field("zip", address.zip.map(|zip| zip.peek().to_owned()))
        .add_optional_field("country", address.country);
    if order.test_mode {
        form_fields.add_field("demo", "Y");
    }

    Ok(RedirectForm {
        endpoint: endpoint.to_string(),
        method: Method::Post,
        form_fields,
    })
}

/// `secret + sid + order_number + total`, upper-case MD5.
pub fn return_signature_context(fields: &FieldMap, auth: &TwoCheckoutAuthType) -> SignatureContext {
    let order_number = if fields.get("demo") == Some("Y") {
        constants::DEMO_ORDER_NUMBER
    } else {
        fields.get_or_empty("order_number")
    };
    SignatureContext::new(SIGNATURE_RULE)
        .secret()
        .value(auth.seller_id.peek().as_str())
        .value(order_number)
        .value(fields.get_or_empty("total"))
}

/// `sale_id + vendor_id + invoice_id + secret`, upper-case MD5.
pub fn ins_signature_context(fields: &FieldMap) -> SignatureContext {
    SignatureContext::new(SIGNATURE_RULE)
        .values(["sale_id", "vendor_id", "invoice_id"].map(|name| fields.get_or_empty(name)))
        .secret()
}

pub fn return_status(credit_card_processed: &str) -> PaymentStatus {
    match credit_card_processed {
        "Y" => PaymentStatus::Completed,
        "K" => PaymentStatus::Pending,
        _ => PaymentStatus::Failed,
    }
}

fn notification_status(fields: &FieldMap) -> PaymentStatus {
    if fields.get("message_type") == Some(constants::MESSAGE_TYPE_FRAUD_STATUS_CHANGED) {
        return match fields.get_or_empty("fraud_status") {
            "pass" => PaymentStatus::Completed,
            "fail" => PaymentStatus::Failed,
            _ => PaymentStatus::Pending,
        };
    }
    match fields.get_or_empty("invoice_status") {
        "approved" | "deposited" => PaymentStatus::Completed,
        "declined" => PaymentStatus::Failed,
        _ => PaymentStatus::Pending,
    }
}

pub fn notification_from_fields(fields: FieldMap, request: &RequestDetails) -> NotificationRecord {
    NotificationRecord {
        signature: utils::get_optional_field(&fields, constants::INS_HASH_FIELD),
        status: notification_status(&fields),
        order_id: utils::get_optional_field(&fields, "vendor_order_id"),
        transaction_id: utils::get_optional_field(&fields, "sale_id"),
        gross: utils::get_optional_amount(&fields, "invoice_list_amount"),
        currency: fields
            .get_non_empty("list_currency")
            .and_then(|currency| currency.parse::<Currency>().ok()),
        message: utils::get_optional_field(&fields, "message_description"),
        test: fields.get("demo") == Some("Y"),
        raw_payload: decode::raw_form_payload(request),
        fields,
    }
}
