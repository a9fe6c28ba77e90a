use common_enums::{Currency, PaymentStatus};
use common_utils::{request::Method, CustomResult, StringMajorUnitForConnector};
use domain_types::{
    connector_types::{NotificationRecord, PaymentOrder, RedirectForm, RequestDetails},
    errors,
    router_data::ConnectorAuthType,
    FieldMap,
};
use hyperswitch_masking::{PeekInterface, Secret};
use interfaces::decode;

use super::constants;
use crate::utils;

#[derive(Debug, Clone)]
pub struct PaypalAuthType {
    /// Email or merchant id of the receiving account.
    pub business: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for PaypalAuthType {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::HeaderKey { api_key } => Ok(Self {
                business: api_key.to_owned(),
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
    auth: &PaypalAuthType,
) -> CustomResult<RedirectForm, errors::ConnectorError> {
    let amount = utils::convert_amount(&StringMajorUnitForConnector, order.amount, order.currency)?;
    let customer = order.customer.clone().unwrap_or_default();
    let address = order.billing_address.clone().unwrap_or_default();

    let mut form_fields = FieldMap::new();
    form_fields
        .add_field("cmd", constants::COMMAND)
        .add_field("charset", constants::CHARSET)
        .add_field("business", auth.business.peek().as_str())
        .add_field(
            "item_name",
            order.description.as_deref().unwrap_or(order.order_id.as_str()),
        )
        .add_field("item_number", order.order_id.as_str())
        .add_field("invoice", order.order_id.as_str())
        .add_field("amount", amount.get_amount_as_string())
        .add_field("currency_code", order.currency.to_string())
        .add_field("quantity", "1")
        .add_field("no_shipping", "1")
        .add_field("no_note", "1")
        .add_optional_field("return", order.return_url.as_deref())
        .add_optional_field("notify_url", order.notify_url.as_deref())
        .add_optional_field("cancel_return", order.cancel_return_url.as_deref())
        .add_optional_field("first_name", customer.first_name)
        .add_optional_field("last_name", customer.last_name)
        .add_optional_field("email", customer.email.map(|email| email.peek().to_owned()))
        .add_optional_field("address1", address.line1.map(|line| line.peek().to_owned()))
        .add_optional_field("address2", address.line2.map(|line| line.peek().to_owned()))
        .add_optional_field("city", address.city)
        .add_optional_field("state", address.state.map(|state| state.peek().to_owned()))
        .add_optional_field("zip", address.zip.map(|zip| zip.peek().to_owned()))
        .add_optional_field("country", address.country);
    form_fields.extend(order.extra_fields.iter());

    Ok(RedirectForm {
        endpoint: endpoint.to_string(),
        method: Method::Post,
        form_fields,
    })
}

fn status_from_field(payment_status: &str) -> PaymentStatus {
    match payment_status {
        "Completed" => PaymentStatus::Completed,
        "Pending" | "In-Progress" | "Processed" => PaymentStatus::Pending,
        _ => PaymentStatus::Failed,
    }
}

pub fn notification_from_fields(fields: FieldMap, request: &RequestDetails) -> NotificationRecord {
    NotificationRecord {
        signature: None,
        status: status_from_field(fields.get_or_empty("payment_status")),
        order_id: utils::get_optional_field(&fields, "invoice")
            .or_else(|| utils::get_optional_field(&fields, "item_number")),
        transaction_id: utils::get_optional_field(&fields, "txn_id"),
        gross: utils::get_optional_amount(&fields, "mc_gross"),
        currency: fields
            .get_non_empty("mc_currency")
            .and_then(|currency| currency.parse::<Currency>().ok()),
        message: utils::get_optional_field(&fields, "pending_reason"),
        test: fields.get("test_ipn") == Some("1"),
        raw_payload: decode::raw_form_payload(request),
        fields,
    }
}
