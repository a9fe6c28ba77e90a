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
    SignatureRule::new(DigestAlgorithm::HmacSha256, "", DigestEncoding::LowerHex);

#[derive(Debug, Clone)]
pub struct UniversalAuthType {
    pub account_id: Secret<String>,
    pub secret_key: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for UniversalAuthType {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::BodyKey { api_key, key1 } => Ok(Self {
                account_id: api_key.to_owned(),
                secret_key: key1.to_owned(),
            }),
            _ => Err(error_stack::report!(
                errors::ConnectorError::FailedToObtainAuthType
            )),
        }
    }
}

/// Every `x_*` field but the signature, sorted by name, as `namevalue` pairs.
pub fn signature_context(fields: &FieldMap) -> SignatureContext {
    SignatureContext::new(SIGNATURE_RULE).values(
        fields
            .filter_prefix(constants::FIELD_PREFIX)
            .sorted_by_key()
            .iter()
            .filter(|(name, _)| *name != constants::SIGNATURE_FIELD)
            .map(|(name, value)| format!("{name}{value}")),
    )
}

pub fn build_payment_form(
    endpoint: &str,
    order: &PaymentOrder,
    auth: &UniversalAuthType,
) -> CustomResult<RedirectForm, errors::ConnectorError> {
    let amount = utils::convert_amount(&StringMajorUnitForConnector, order.amount, order.currency)?;
    let customer = order.customer.clone().unwrap_or_default();
    let address = order.billing_address.clone().unwrap_or_default();

    let mut form_fields = FieldMap::new();
    form_fields
        .add_field("x_account_id", auth.account_id.peek().as_str())
        .add_field("x_currency", order.currency.to_string())
        .add_field("x_amount", amount.get_amount_as_string())
        .add_field("x_reference", order.order_id.as_str())
        .add_field("x_transaction_type", constants::TRANSACTION_TYPE_SALE)
        .add_optional_field("x_description", order.description.as_deref())
        .add_field("x_invoice", order.order_id.as_str())
        .add_field("x_test", order.test_mode.to_string())
        .add_optional_field("x_customer_first_name", customer.first_name)
        .add_optional_field("x_customer_last_name", customer.last_name)
        .add_optional_field(
            "x_customer_email",
            customer.email.map(|email| email.peek().to_owned()),
        )
        .add_optional_field(
            "x_customer_phone",
            customer.phone.map(|phone| phone.peek().to_owned()),
        )
        .add_optional_field(
            "x_customer_billing_address1",
            address.line1.map(|line| line.peek().to_owned()),
        )
        .add_optional_field(
            "x_customer_billing_address2",
            address.line2.map(|line| line.peek().to_owned()),
        )
        .add_optional_field("x_customer_billing_city", address.city)
        .add_optional_field(
            "x_customer_billing_state",
            address.state.map(|state| state.peek().to_owned()),
        )
        .add_optional_field(
            "x_customer_billing_zip",
            address.zip.map(|zip| zip.peek().to_owned()),
        )
        .add_optional_field("x_customer_billing_country", address.country)
        .add_optional_field("x_url_callback", order.notify_url.as_deref())
        .add_field("x_url_complete", order.get_return_url()?)
        .add_optional_field("x_url_cancel", order.cancel_return_url.as_deref());
    utils::merge_prefixed_fields(
        &mut form_fields,
        &order.extra_fields,
        constants::FIELD_PREFIX,
    );

    let signature = signature_context(&form_fields).sign(&auth.secret_key)?;
    form_fields.add_field(constants::SIGNATURE_FIELD, signature);

    Ok(RedirectForm {
        endpoint: endpoint.to_string(),
        method: Method::Post,
        form_fields,
    })
}

fn status_from_result(result: &str) -> PaymentStatus {
    match result.to_ascii_lowercase().as_str() {
        constants::RESULT_COMPLETED => PaymentStatus::Completed,
        constants::RESULT_FAILED => PaymentStatus::Failed,
        _ => PaymentStatus::Pending,
    }
}

pub fn notification_from_fields(fields: FieldMap, request: &RequestDetails) -> NotificationRecord {
    NotificationRecord {
        signature: utils::get_optional_field(&fields, constants::SIGNATURE_FIELD),
        status: status_from_result(fields.get_or_empty("x_result")),
        order_id: utils::get_optional_field(&fields, "x_reference"),
        transaction_id: utils::get_optional_field(&fields, "x_gateway_reference"),
        gross: utils::get_optional_amount(&fields, "x_amount"),
        currency: fields
            .get_non_empty("x_currency")
            .and_then(|currency| currency.parse::<Currency>().ok()),
        message: utils::get_optional_field(&fields, "x_message"),
        test: fields.get("x_test") == Some("true"),
        raw_payload: decode::raw_form_payload(request),
        fields,
    }
}
