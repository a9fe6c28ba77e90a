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
    SignatureRule::new(DigestAlgorithm::Sha1, "|", DigestEncoding::LowerHex).case_insensitive();

#[derive(Debug, Clone)]
pub struct PaydollarAuthType {
    pub merchant_id: Secret<String>,
    pub secure_hash_secret: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for PaydollarAuthType {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::BodyKey { api_key, key1 } => Ok(Self {
                merchant_id: api_key.to_owned(),
                secure_hash_secret: key1.to_owned(),
            }),
            _ => Err(error_stack::report!(
                errors::ConnectorError::FailedToObtainAuthType
            )),
        }
    }
}

/// `merchantId|orderRef|currCode|amount|payType|secret`
pub fn request_signature_context(form_fields: &FieldMap) -> SignatureContext {
    SignatureContext::new(SIGNATURE_RULE)
        .values(
            ["merchantId", "orderRef", "currCode", "amount", "payType"]
                .map(|name| form_fields.get_or_empty(name)),
        )
        .secret()
}

/// `src|prc|successcode|Ref|PayRef|Cur|Amt|payerAuth|secret`
pub fn datafeed_signature_context(fields: &FieldMap) -> SignatureContext {
    SignatureContext::new(SIGNATURE_RULE)
        .values(
            [
                "src",
                "prc",
                "successcode",
                "Ref",
                "PayRef",
                "Cur",
                "Amt",
                "payerAuth",
            ]
            .map(|name| fields.get_or_empty(name)),
        )
        .secret()
}

pub fn build_payment_form(
    endpoint: &str,
    order: &PaymentOrder,
    auth: &PaydollarAuthType,
) -> CustomResult<RedirectForm, errors::ConnectorError> {
    let amount = utils::convert_amount(&StringMajorUnitForConnector, order.amount, order.currency)?;

    let mut form_fields = FieldMap::new();
    form_fields
        .add_field("merchantId", auth.merchant_id.peek().as_str())
        .add_field("amount", amount.get_amount_as_string())
        .add_field("orderRef", order.order_id.as_str())
        .add_field("currCode", order.currency.iso_4217())
        .add_field("mpsMode", constants::MPS_MODE_NONE)
        .add_optional_field("successUrl", order.return_url.as_deref())
        .add_optional_field("failUrl", order.cancel_return_url.as_deref())
        .add_optional_field("cancelUrl", order.cancel_return_url.as_deref())
        .add_field(
            "payType",
            order
                .extra_fields
                .get_non_empty("payType")
                .unwrap_or(constants::PAY_TYPE_NORMAL),
        )
        .add_field("lang", constants::LANGUAGE)
        .add_field(
            "payMethod",
            order
                .extra_fields
                .get_non_empty("payMethod")
                .unwrap_or(constants::PAY_METHOD_ALL),
        )
        .add_optional_field("remark", order.description.as_deref());

    let signature = request_signature_context(&form_fields).sign(&auth.secure_hash_secret)?;
    form_fields.add_field(constants::SIGNATURE_FIELD, signature);

    Ok(RedirectForm {
        endpoint: endpoint.to_string(),
        method: Method::Post,
        form_fields,
    })
}

fn status_from_success_code(success_code: &str) -> PaymentStatus {
    match success_code {
        constants::SUCCESS_CODE_SUCCEEDED => PaymentStatus::Completed,
        constants::SUCCESS_CODE_FAILED => PaymentStatus::Failed,
        _ => PaymentStatus::Pending,
    }
}

pub fn notification_from_fields(fields: FieldMap, request: &RequestDetails) -> NotificationRecord {
    NotificationRecord {
        signature: utils::get_optional_field(&fields, constants::SIGNATURE_FIELD),
        status: status_from_success_code(fields.get_or_empty("successcode")),
        order_id: utils::get_optional_field(&fields, "Ref"),
        transaction_id: utils::get_optional_field(&fields, "PayRef"),
        gross: utils::get_optional_amount(&fields, "Amt"),
        currency: fields.get_non_empty("Cur").and_then(Currency::from_iso_4217),
        message: utils::get_optional_field(&fields, "errMsg"),
        test: false,
        raw_payload: decode::raw_form_payload(request),
        fields,
    }
}
