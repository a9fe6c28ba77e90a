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
use rand::Rng;

use super::constants;
use crate::utils;

pub const REQUEST_SIGNATURE_RULE: SignatureRule =
    SignatureRule::new(DigestAlgorithm::Sha1, "", DigestEncoding::LowerHex);

pub const NOTIFY_SIGNATURE_RULE: SignatureRule =
    SignatureRule::new(DigestAlgorithm::Md5, "", DigestEncoding::LowerHex);

const NOTIFY_SIGNED_FIELDS: [&str; 9] = [
    "batch_timestamp",
    "currency_id",
    "amount",
    "payment_method",
    "order_id",
    "site_order_id",
    "transaction_id",
    "payment_type",
    "rrn",
];

#[derive(Debug, Clone)]
pub struct WebpayAuthType {
    pub store_id: Secret<String>,
    pub secret_key: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for WebpayAuthType {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::BodyKey { api_key, key1 } => Ok(Self {
                store_id: api_key.to_owned(),
                secret_key: key1.to_owned(),
            }),
            _ => Err(error_stack::report!(
                errors::ConnectorError::FailedToObtainAuthType
            )),
        }
    }
}

/// Caller-pinned nonce, or a fresh random one.
fn seed(order: &PaymentOrder) -> String {
    order
        .nonce
        .clone()
        .unwrap_or_else(|| rand::thread_rng().gen_range(1_000_000_000u64..10_000_000_000).to_string())
}

/// `seed + storeid + order_num + test + currency_id + total + secret`
pub fn request_signature_context(form_fields: &FieldMap) -> SignatureContext {
    SignatureContext::new(REQUEST_SIGNATURE_RULE)
        .values(
            [
                "wsb_seed",
                "wsb_storeid",
                "wsb_order_num",
                "wsb_test",
                "wsb_currency_id",
                "wsb_total",
            ]
            .map(|name| form_fields.get_or_empty(name)),
        )
        .secret()
}

pub fn notify_signature_context(fields: &FieldMap) -> SignatureContext {
    SignatureContext::new(NOTIFY_SIGNATURE_RULE)
        .values(NOTIFY_SIGNED_FIELDS.map(|name| fields.get_or_empty(name)))
        .secret()
}

pub fn build_payment_form(
    endpoint: &str,
    order: &PaymentOrder,
    auth: &WebpayAuthType,
) -> CustomResult<RedirectForm, errors::ConnectorError> {
    let total = utils::convert_amount(&StringMajorUnitForConnector, order.amount, order.currency)?
        .get_amount_as_string();
    let customer = order.customer.clone().unwrap_or_default();

    let mut form_fields = FieldMap::new();
    form_fields
        .add_field(constants::CART_MARKER, "")
        .add_field("wsb_version", constants::API_VERSION)
        .add_optional_field("wsb_language_id", order.extra_fields.get("wsb_language_id"))
        .add_field("wsb_storeid", auth.store_id.peek().as_str())
        .add_optional_field("wsb_store", order.extra_fields.get("wsb_store"))
        .add_field("wsb_order_num", order.order_id.as_str())
        .add_field("wsb_test", if order.test_mode { "1" } else { "0" })
        .add_field("wsb_currency_id", order.currency.to_string())
        .add_field("wsb_seed", seed(order))
        .add_optional_field("wsb_return_url", order.return_url.as_deref())
        .add_optional_field("wsb_cancel_return_url", order.cancel_return_url.as_deref())
        .add_optional_field("wsb_notify_url", order.notify_url.as_deref())
        .add_optional_field("wsb_email", customer.email.map(|email| email.peek().to_owned()))
        .add_optional_field("wsb_phone", customer.phone.map(|phone| phone.peek().to_owned()))
        .add_field(
            "wsb_invoice_item_name[0]",
            order.description.as_deref().unwrap_or(order.order_id.as_str()),
        )
        .add_field("wsb_invoice_item_quantity[0]", "1")
        .add_field("wsb_invoice_item_price[0]", total.as_str())
        .add_field("wsb_total", total.as_str());

    let signature = request_signature_context(&form_fields).sign(&auth.secret_key)?;
    form_fields.add_field(constants::SIGNATURE_FIELD, signature);

    Ok(RedirectForm {
        endpoint: endpoint.to_string(),
        method: Method::Post,
        form_fields,
    })
}

fn status_from_payment_type(payment_type: &str) -> PaymentStatus {
    match payment_type {
        constants::PAYMENT_COMPLETED | constants::PAYMENT_AUTHORIZED => PaymentStatus::Completed,
        constants::PAYMENT_PENDING | constants::PAYMENT_SYSTEM => PaymentStatus::Pending,
        _ => PaymentStatus::Failed,
    }
}

pub fn notification_from_fields(fields: FieldMap, request: &RequestDetails) -> NotificationRecord {
    let payment_type = fields.get_or_empty("payment_type");
    NotificationRecord {
        signature: utils::get_optional_field(&fields, constants::SIGNATURE_FIELD),
        status: status_from_payment_type(payment_type),
        order_id: utils::get_optional_field(&fields, "site_order_id"),
        transaction_id: utils::get_optional_field(&fields, "transaction_id"),
        gross: utils::get_optional_amount(&fields, "amount"),
        currency: fields
            .get_non_empty("currency_id")
            .and_then(|currency| currency.parse::<Currency>().ok()),
        message: (payment_type == constants::PAYMENT_DECLINED).then(|| "declined".to_string()),
        test: false,
        raw_payload: decode::raw_form_payload(request),
        fields,
    }
}
