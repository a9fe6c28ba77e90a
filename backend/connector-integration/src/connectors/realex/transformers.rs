use common_enums::{Currency, PaymentStatus};
use common_utils::{
    request::Method, CustomResult, MinorUnit, StringMajorUnit, StringMinorUnitForConnector,
};
use domain_types::{
    connector_types::{NotificationRecord, PaymentOrder, RedirectForm, RequestDetails},
    errors,
    router_data::ConnectorAuthType,
    signature::{DigestAlgorithm, DigestEncoding, SignatureContext, SignatureRule},
    FieldMap,
};
use error_stack::ResultExt;
use hyperswitch_masking::{PeekInterface, Secret};
use interfaces::decode;
use time::macros::format_description;

use super::constants;
use crate::utils;

pub const SIGNATURE_RULE: SignatureRule =
    SignatureRule::new(DigestAlgorithm::Sha1, ".", DigestEncoding::LowerHex).case_insensitive();

const REQUEST_SIGNED_FIELDS: [&str; 5] =
    ["TIMESTAMP", "MERCHANT_ID", "ORDER_ID", "AMOUNT", "CURRENCY"];

const RESPONSE_SIGNED_FIELDS: [&str; 7] = [
    "TIMESTAMP",
    "MERCHANT_ID",
    "ORDER_ID",
    "RESULT",
    "MESSAGE",
    "PASREF",
    "AUTHCODE",
];

#[derive(Debug, Clone)]
pub struct RealexAuthType {
    pub merchant_id: Secret<String>,
    pub shared_secret: Secret<String>,
    pub account: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for RealexAuthType {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::SignatureKey {
                api_key,
                key1,
                api_secret,
            } => Ok(Self {
                merchant_id: api_key.to_owned(),
                shared_secret: key1.to_owned(),
                account: api_secret.to_owned(),
            }),
            _ => Err(error_stack::report!(
                errors::ConnectorError::FailedToObtainAuthType
            )),
        }
    }
}

/// Caller-pinned `yyyyMMddHHmmss`, or now in UTC.
fn timestamp(order: &PaymentOrder) -> CustomResult<String, errors::ConnectorError> {
    if let Some(nonce) = order.nonce.as_deref() {
        return Ok(nonce.to_string());
    }
    time::OffsetDateTime::now_utc()
        .format(format_description!(
            "[year][month][day][hour][minute][second]"
        ))
        .change_context(errors::ConnectorError::RequestEncodingFailed)
}

/// `sha1(sha1(a.b.c...) + "." + secret)`
fn nested_signature_context(
    fields: &FieldMap,
    signed_fields: &[&str],
) -> CustomResult<SignatureContext, errors::ConnectorError> {
    let inner = SignatureContext::new(SIGNATURE_RULE)
        .values(signed_fields.iter().map(|name| fields.get_or_empty(name)))
        .fingerprint()?;
    Ok(SignatureContext::new(SIGNATURE_RULE).value(inner).secret())
}

pub fn request_signature_context(
    form_fields: &FieldMap,
) -> CustomResult<SignatureContext, errors::ConnectorError> {
    nested_signature_context(form_fields, &REQUEST_SIGNED_FIELDS)
}

pub fn response_signature_context(
    fields: &FieldMap,
) -> CustomResult<SignatureContext, errors::ConnectorError> {
    nested_signature_context(fields, &RESPONSE_SIGNED_FIELDS)
}

pub fn build_payment_form(
    endpoint: &str,
    order: &PaymentOrder,
    auth: &RealexAuthType,
) -> CustomResult<RedirectForm, errors::ConnectorError> {
    let amount = utils::convert_amount(&StringMinorUnitForConnector, order.amount, order.currency)?;

    let mut form_fields = FieldMap::new();
    form_fields
        .add_field("MERCHANT_ID", auth.merchant_id.peek().as_str())
        .add_optional_field("ACCOUNT", Some(auth.account.peek().as_str()))
        .add_field("ORDER_ID", order.order_id.as_str())
        .add_field("AMOUNT", amount.get_amount_as_string())
        .add_field("CURRENCY", order.currency.to_string())
        .add_field("TIMESTAMP", timestamp(order)?)
        .add_field("AUTO_SETTLE_FLAG", constants::AUTO_SETTLE)
        .add_optional_field("MERCHANT_RESPONSE_URL", order.return_url.as_deref())
        .add_optional_field("COMMENT1", order.description.as_deref());

    let signature = request_signature_context(&form_fields)?.sign(&auth.shared_secret)?;
    form_fields.add_field(constants::SIGNATURE_FIELD, signature);

    Ok(RedirectForm {
        endpoint: endpoint.to_string(),
        method: Method::Post,
        form_fields,
    })
}

/// The response echoes `AMOUNT` in minor units; rendered in major units of `currency`.
fn gross_from_minor(fields: &FieldMap, currency: Option<Currency>) -> Option<StringMajorUnit> {
    let currency = currency?;
    let minor = fields.get_non_empty("AMOUNT")?.trim().parse::<i64>().ok()?;
    Some(MinorUnit::new(minor).to_major_unit_as_string(currency))
}

pub fn notification_from_fields(fields: FieldMap, request: &RequestDetails) -> NotificationRecord {
    let status = if fields.get("RESULT") == Some(constants::RESULT_SUCCESS) {
        PaymentStatus::Completed
    } else {
        PaymentStatus::Failed
    };
    let currency = fields
        .get_non_empty("CURRENCY")
        .and_then(|currency| currency.parse::<Currency>().ok());

    NotificationRecord {
        signature: utils::get_optional_field(&fields, constants::SIGNATURE_FIELD),
        status,
        order_id: utils::get_optional_field(&fields, "ORDER_ID"),
        transaction_id: utils::get_optional_field(&fields, "PASREF"),
        gross: gross_from_minor(&fields, currency),
        currency,
        message: utils::get_optional_field(&fields, "MESSAGE"),
        test: false,
        raw_payload: decode::raw_form_payload(request),
        fields,
    }
}
