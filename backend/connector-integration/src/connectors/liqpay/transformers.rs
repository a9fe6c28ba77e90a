use base64::Engine;
use common_enums::{Currency, PaymentStatus};
use common_utils::{request::Method, CustomResult, StringMajorUnitForConnector};
use domain_types::{
    connector_types::{NotificationRecord, PaymentOrder, RedirectForm},
    errors,
    router_data::ConnectorAuthType,
    signature::{DigestAlgorithm, DigestEncoding, SignatureContext, SignatureRule},
    FieldMap,
};
use error_stack::ResultExt;
use hyperswitch_masking::{PeekInterface, Secret};
use interfaces::decode;

use super::constants;
use crate::utils;

pub const SIGNATURE_RULE: SignatureRule =
    SignatureRule::new(DigestAlgorithm::Sha1, "", DigestEncoding::Base64);

#[derive(Debug, Clone)]
pub struct LiqpayAuthType {
    pub merchant_id: Secret<String>,
    pub signature_key: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for LiqpayAuthType {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::BodyKey { api_key, key1 } => Ok(Self {
                merchant_id: api_key.to_owned(),
                signature_key: key1.to_owned(),
            }),
            _ => Err(error_stack::report!(
                errors::ConnectorError::FailedToObtainAuthType
            )),
        }
    }
}

/// `base64(sha1(key + xml + key))`
pub fn signature_context(xml: &str) -> SignatureContext {
    SignatureContext::new(SIGNATURE_RULE)
        .secret()
        .value(xml)
        .secret()
}

/// Flat field map as `<request>` XML, the document LiqPay signs.
pub fn encode_operation_xml(fields: &FieldMap) -> CustomResult<String, errors::ConnectorError> {
    utils::serialize_to_xml_string_with_root(constants::REQUEST_ROOT, fields)
}

/// Base64 `operation_xml` back to the XML text and its flat fields.
pub fn decode_operation_xml(
    operation_xml: &str,
) -> CustomResult<(String, FieldMap), errors::ConnectorError> {
    let xml = decode::base64_text(operation_xml)?;
    let fields = decode::xml_payload::<FieldMap>(&xml)?;
    Ok((xml, fields))
}

pub fn build_payment_form(
    endpoint: &str,
    order: &PaymentOrder,
    auth: &LiqpayAuthType,
) -> CustomResult<RedirectForm, errors::ConnectorError> {
    let amount = utils::convert_amount(&StringMajorUnitForConnector, order.amount, order.currency)?;

    let mut operation = FieldMap::new();
    operation
        .add_field("version", constants::API_VERSION)
        .add_field("merchant_id", auth.merchant_id.peek().as_str())
        .add_optional_field("result_url", order.return_url.as_deref())
        .add_optional_field("server_url", order.notify_url.as_deref())
        .add_field("order_id", order.order_id.as_str())
        .add_field("amount", amount.get_amount_as_string())
        .add_field("currency", order.currency.to_string())
        .add_field("description", order.get_description()?)
        .add_optional_field(
            "default_phone",
            order
                .customer
                .as_ref()
                .and_then(|customer| customer.phone.as_ref())
                .map(|phone| phone.peek().to_owned()),
        )
        .add_optional_field("pay_way", order.extra_fields.get("pay_way"));

    let xml = encode_operation_xml(&operation)?;
    let signature = signature_context(&xml).sign(&auth.signature_key)?;

    let mut form_fields = FieldMap::with_capacity(2);
    form_fields
        .add_field(
            constants::OPERATION_XML_FIELD,
            base64::engine::general_purpose::STANDARD.encode(xml.as_bytes()),
        )
        .add_field(constants::SIGNATURE_FIELD, signature);

    Ok(RedirectForm {
        endpoint: endpoint.to_string(),
        method: Method::Post,
        form_fields,
    })
}

fn status_from_field(status: &str) -> PaymentStatus {
    match status {
        constants::STATUS_SUCCESS | constants::STATUS_SANDBOX => PaymentStatus::Completed,
        constants::STATUS_WAIT_SECURE => PaymentStatus::Pending,
        _ => PaymentStatus::Failed,
    }
}

pub fn notification_from_form(
    form: &FieldMap,
) -> CustomResult<NotificationRecord, errors::ConnectorError> {
    let operation_xml = form
        .get_non_empty(constants::OPERATION_XML_FIELD)
        .ok_or(errors::ConnectorError::WebhookBodyDecodingFailed)
        .attach_printable("operation_xml is missing")?;
    let (xml, fields) = decode_operation_xml(operation_xml)?;
    let status = fields.get_or_empty("status");

    Ok(NotificationRecord {
        signature: utils::get_optional_field(form, constants::SIGNATURE_FIELD),
        status: status_from_field(status),
        order_id: utils::get_optional_field(&fields, "order_id"),
        transaction_id: utils::get_optional_field(&fields, "transaction_id"),
        gross: utils::get_optional_amount(&fields, "amount"),
        currency: fields
            .get_non_empty("currency")
            .and_then(|currency| currency.parse::<Currency>().ok()),
        message: utils::get_optional_field(&fields, "code"),
        test: status == constants::STATUS_SANDBOX,
        raw_payload: xml.into_bytes(),
        fields,
    })
}
