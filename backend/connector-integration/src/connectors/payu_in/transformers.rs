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

pub const HASH_RULE: SignatureRule =
    SignatureRule::new(DigestAlgorithm::Sha512, "|", DigestEncoding::LowerHex);

#[derive(Debug, Clone)]
pub struct PayuInAuthType {
    pub merchant_key: Secret<String>,
    pub salt: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for PayuInAuthType {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::BodyKey { api_key, key1 } => Ok(Self {
                merchant_key: api_key.to_owned(),
                salt: key1.to_owned(),
            }),
            _ => Err(error_stack::report!(
                errors::ConnectorError::FailedToObtainAuthType
            )),
        }
    }
}

/// `key|txnid|amount|productinfo|firstname|email|udf1..udf10|salt`
pub fn request_hash_context(fields: &FieldMap) -> SignatureContext {
    SignatureContext::new(HASH_RULE)
        .values(
            ["key", "txnid", "amount", "productinfo", "firstname", "email"]
                .map(|name| fields.get_or_empty(name)),
        )
        .values(constants::UDF_FIELDS.map(|name| fields.get_or_empty(name)))
        .secret()
}

/// `[additionalCharges|]salt|status|udf10..udf1|email|firstname|productinfo|amount|txnid|key`
pub fn response_hash_context(fields: &FieldMap) -> SignatureContext {
    let mut context = SignatureContext::new(HASH_RULE);
    if let Some(charges) = fields.get_non_empty("additionalCharges") {
        context = context.value(charges);
    }
    context
        .secret()
        .value(fields.get_or_empty("status"))
        .values(
            constants::UDF_FIELDS
                .iter()
                .rev()
                .map(|name| fields.get_or_empty(name)),
        )
        .values(
            ["email", "firstname", "productinfo", "amount", "txnid", "key"]
                .map(|name| fields.get_or_empty(name)),
        )
}

pub fn build_payment_form(
    endpoint: &str,
    order: &PaymentOrder,
    auth: &PayuInAuthType,
) -> CustomResult<RedirectForm, errors::ConnectorError> {
    if order.currency != Currency::INR {
        return Err(errors::ConnectorError::CurrencyNotSupported {
            currency: order.currency.to_string(),
            connector: "payu_in",
        }
        .into());
    }
    let amount = utils::convert_amount(&StringMajorUnitForConnector, order.amount, order.currency)?;
    let customer = order.customer.clone().unwrap_or_default();
    let address = order.billing_address.clone().unwrap_or_default();

    let mut form_fields = FieldMap::new();
    form_fields
        .add_field("key", auth.merchant_key.peek().as_str())
        .add_field("txnid", order.order_id.as_str())
        .add_field("amount", amount.get_amount_as_string())
        .add_field(
            "productinfo",
            order
                .description
                .as_deref()
                .unwrap_or(constants::DEFAULT_PRODUCT_INFO),
        )
        .add_field("firstname", customer.first_name.unwrap_or_default())
        .add_optional_field("lastname", customer.last_name)
        .add_field(
            "email",
            customer
                .email
                .map(|email| email.peek().to_owned())
                .unwrap_or_default(),
        )
        .add_optional_field("phone", customer.phone.map(|phone| phone.peek().to_owned()))
        .add_optional_field("address1", address.line1.map(|line| line.peek().to_owned()))
        .add_optional_field("address2", address.line2.map(|line| line.peek().to_owned()))
        .add_optional_field("city", address.city)
        .add_optional_field("state", address.state.map(|state| state.peek().to_owned()))
        .add_optional_field("country", address.country)
        .add_optional_field("zipcode", address.zip.map(|zip| zip.peek().to_owned()));

    for name in constants::UDF_FIELDS {
        form_fields.add_optional_field(name, order.extra_fields.get(name));
    }

    let return_url = order.get_return_url()?;
    form_fields
        .add_field("surl", return_url)
        .add_field(
            "furl",
            order.cancel_return_url.as_deref().unwrap_or(return_url),
        )
        .add_optional_field("curl", order.cancel_return_url.as_deref());

    let hash = request_hash_context(&form_fields).sign(&auth.salt)?;
    form_fields.add_field("hash", hash);

    Ok(RedirectForm {
        endpoint: endpoint.to_string(),
        method: Method::Post,
        form_fields,
    })
}

fn status_from_field(status: &str) -> PaymentStatus {
    match status.to_ascii_lowercase().as_str() {
        constants::STATUS_SUCCESS => PaymentStatus::Completed,
        constants::STATUS_FAILURE | "failed" => PaymentStatus::Failed,
        _ => PaymentStatus::Pending,
    }
}

pub fn notification_from_fields(fields: FieldMap, request: &RequestDetails) -> NotificationRecord {
    NotificationRecord {
        signature: utils::get_optional_field(&fields, "hash"),
        status: status_from_field(fields.get_or_empty("status")),
        order_id: utils::get_optional_field(&fields, "txnid"),
        transaction_id: utils::get_optional_field(&fields, "mihpayid"),
        gross: utils::get_optional_amount(&fields, "amount"),
        currency: Some(Currency::INR),
        message: utils::get_optional_field(&fields, "error_Message")
            .or_else(|| utils::get_optional_field(&fields, "field9")),
        test: false,
        raw_payload: decode::raw_form_payload(request),
        fields,
    }
}
