use common_enums::{Currency, PaymentStatus};
use common_utils::{request::Method, CustomResult, MinorUnit, StringMinorUnitForConnector};
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
use serde::Deserialize;

use super::constants;
use crate::utils;

pub const FORM_CHECKSUM_RULE: SignatureRule =
    SignatureRule::new(DigestAlgorithm::HmacSha256, " ", DigestEncoding::LowerHex);

pub const CALLBACK_CHECKSUM_RULE: SignatureRule =
    SignatureRule::new(DigestAlgorithm::HmacSha256, "", DigestEncoding::LowerHex);

#[derive(Debug, Clone)]
pub struct QuickpayAuthType {
    pub merchant_id: Secret<String>,
    pub agreement_id: Secret<String>,
    /// Payment window API key, signs the form.
    pub api_key: Secret<String>,
    /// Account private key, signs callbacks.
    pub private_key: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for QuickpayAuthType {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::MultiAuthKey {
                api_key,
                key1,
                api_secret,
                key2,
            } => Ok(Self {
                merchant_id: api_key.to_owned(),
                agreement_id: key1.to_owned(),
                api_key: api_secret.to_owned(),
                private_key: key2.to_owned(),
            }),
            _ => Err(error_stack::report!(
                errors::ConnectorError::FailedToObtainAuthType
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuickpayCallback {
    pub id: i64,
    pub order_id: String,
    pub accepted: bool,
    #[serde(default)]
    pub test_mode: bool,
    pub currency: Option<String>,
    #[serde(default)]
    pub operations: Vec<QuickpayOperation>,
}

#[derive(Debug, Deserialize)]
pub struct QuickpayOperation {
    #[serde(rename = "type")]
    pub operation_type: String,
    pub amount: Option<i64>,
    pub qp_status_code: Option<String>,
    pub qp_status_msg: Option<String>,
}

/// Form values sorted by field name, joined by a space.
pub fn form_checksum_context(fields: &FieldMap) -> SignatureContext {
    SignatureContext::new(FORM_CHECKSUM_RULE).values(
        fields
            .sorted_by_key()
            .into_iter()
            .filter(|(name, _)| name != constants::CHECKSUM_FIELD)
            .map(|(_, value)| value),
    )
}

/// The callback body exactly as received.
pub fn callback_signature_context(raw_payload: &[u8]) -> SignatureContext {
    SignatureContext::new(CALLBACK_CHECKSUM_RULE).value(String::from_utf8_lossy(raw_payload))
}

pub fn build_payment_form(
    endpoint: &str,
    order: &PaymentOrder,
    auth: &QuickpayAuthType,
) -> CustomResult<RedirectForm, errors::ConnectorError> {
    let amount = utils::convert_amount(&StringMinorUnitForConnector, order.amount, order.currency)?;

    let mut form_fields = FieldMap::new();
    form_fields
        .add_field("version", constants::API_VERSION)
        .add_field("merchant_id", auth.merchant_id.peek().as_str())
        .add_field("agreement_id", auth.agreement_id.peek().as_str())
        .add_field("order_id", order.order_id.as_str())
        .add_field("amount", amount.get_amount_as_string())
        .add_field("currency", order.currency.to_string())
        .add_field("continueurl", order.get_return_url()?)
        .add_optional_field("cancelurl", order.cancel_return_url.as_deref())
        .add_optional_field("callbackurl", order.notify_url.as_deref())
        .add_field("language", constants::LANGUAGE)
        .add_field(
            "autocapture",
            order.extra_fields.get("autocapture").unwrap_or("0"),
        )
        .add_optional_field("description", order.description.as_deref());

    let checksum = form_checksum_context(&form_fields).sign(&auth.api_key)?;
    form_fields.add_field(constants::CHECKSUM_FIELD, checksum);

    Ok(RedirectForm {
        endpoint: endpoint.to_string(),
        method: Method::Post,
        form_fields,
    })
}

fn status_from_callback(callback: &QuickpayCallback) -> PaymentStatus {
    if callback.accepted {
        return PaymentStatus::Completed;
    }
    match callback
        .operations
        .last()
        .and_then(|operation| operation.qp_status_code.as_deref())
    {
        None | Some(constants::STATUS_CODE_APPROVED) => PaymentStatus::Pending,
        Some(_) => PaymentStatus::Failed,
    }
}

pub fn notification_from_payload(
    payload: serde_json::Value,
    request: &RequestDetails,
) -> CustomResult<NotificationRecord, errors::ConnectorError> {
    let fields = decode::json_scalar_fields(&payload);
    let callback: QuickpayCallback = serde_json::from_value(payload)
        .change_context(errors::ConnectorError::WebhookBodyDecodingFailed)?;

    let currency = callback
        .currency
        .as_deref()
        .and_then(|currency| currency.parse::<Currency>().ok());
    let last_operation = callback.operations.last();
    let gross = currency.and_then(|currency| {
        last_operation
            .and_then(|operation| operation.amount)
            .map(|amount| MinorUnit::new(amount).to_major_unit_as_string(currency))
    });

    Ok(NotificationRecord {
        signature: request
            .header(constants::CHECKSUM_HEADER)
            .map(ToString::to_string),
        status: status_from_callback(&callback),
        order_id: Some(callback.order_id.clone()),
        transaction_id: Some(callback.id.to_string()),
        gross,
        currency,
        message: last_operation.and_then(|operation| operation.qp_status_msg.clone()),
        test: callback.test_mode,
        raw_payload: request.body.clone(),
        fields,
    })
}
