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
pub struct SkrillAuthType {
    pub pay_to_email: Secret<String>,
    pub secret_word: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for SkrillAuthType {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::BodyKey { api_key, key1 } => Ok(Self {
                pay_to_email: api_key.to_owned(),
                secret_word: key1.to_owned(),
            }),
            _ => Err(error_stack::report!(
                errors::ConnectorError::FailedToObtainAuthType
            )),
        }
    }
}

/// Upper-case MD5 of the secret word, the inner half of `md5sig`.
pub fn secret_word_digest(
    secret_word: &Secret<String>,
) -> CustomResult<String, errors::ConnectorError> {
    SignatureContext::new(SIGNATURE_RULE)
        .secret()
        .sign(secret_word)
}

/// `merchant_id + transaction_id + UPPER(MD5(secret)) + mb_amount + mb_currency + status`
pub fn status_signature_context(fields: &FieldMap) -> SignatureContext {
    SignatureContext::new(SIGNATURE_RULE)
        .values(["merchant_id", "transaction_id"].map(|name| fields.get_or_empty(name)))
        .secret()
        .values(["mb_amount", "mb_currency", "status"].map(|name| fields.get_or_empty(name)))
}

pub fn build_payment_form(
    endpoint: &str,
    order: &PaymentOrder,
    auth: &SkrillAuthType,
) -> CustomResult<RedirectForm, errors::ConnectorError> {
    let amount = utils::convert_amount(&StringMajorUnitForConnector, order.amount, order.currency)?;
    let customer = order.customer.clone().unwrap_or_default();
    let address = order.billing_address.clone().unwrap_or_default();

    let mut form_fields = FieldMap::new();
    form_fields
        .add_field("pay_to_email", auth.pay_to_email.peek().as_str())
        .add_field("transaction_id", order.order_id.as_str())
        .add_optional_field("return_url", order.return_url.as_deref())
        .add_optional_field("cancel_url", order.cancel_return_url.as_deref())
        .add_optional_field("status_url", order.notify_url.as_deref())
        .add_field("language", constants::LANGUAGE)
        .add_field("amount", amount.get_amount_as_string())
        .add_field("currency", order.currency.to_string())
        .add_optional_field(
            "detail1_description",
            order.description.as_ref().map(|_| "Order"),
        )
        .add_optional_field("detail1_text", order.description.as_deref())
        .add_optional_field(
            "pay_from_email",
            customer.email.map(|email| email.peek().to_owned()),
        )
        .add_optional_field("firstname", customer.first_name)
        .add_optional_field("lastname", customer.last_name)
        .add_optional_field("address", address.line1.map(|line| line.peek().to_owned()))
        .add_optional_field("city", address.city)
        .add_optional_field("postal_code", address.zip.map(|zip| zip.peek().to_owned()));

    Ok(RedirectForm {
        endpoint: endpoint.to_string(),
        method: Method::Post,
        form_fields,
    })
}

fn status_from_field(status: &str) -> PaymentStatus {
    match status {
        constants::STATUS_PROCESSED => PaymentStatus::Completed,
        constants::STATUS_PENDING => PaymentStatus::Pending,
        // -1 cancelled, -2 failed, -3 chargeback
        _ => PaymentStatus::Failed,
    }
}

pub fn notification_from_fields(fields: FieldMap, request: &RequestDetails) -> NotificationRecord {
    NotificationRecord {
        signature: utils::get_optional_field(&fields, constants::SIGNATURE_FIELD),
        status: status_from_field(fields.get_or_empty("status")),
        order_id: utils::get_optional_field(&fields, "transaction_id"),
        transaction_id: utils::get_optional_field(&fields, "mb_transaction_id"),
        gross: utils::get_optional_amount(&fields, "mb_amount"),
        currency: fields
            .get_non_empty("mb_currency")
            .and_then(|currency| currency.parse::<Currency>().ok()),
        message: utils::get_optional_field(&fields, "failed_reason_code"),
        test: false,
        raw_payload: decode::raw_form_payload(request),
        fields,
    }
}
