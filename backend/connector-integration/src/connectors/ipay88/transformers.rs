use common_enums::{Currency, PaymentStatus};
use common_utils::{request::Method, CustomResult, StringMajorUnit, StringMajorUnitForConnector};
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
    SignatureRule::new(DigestAlgorithm::Sha1, "", DigestEncoding::Base64);

#[derive(Debug, Clone)]
pub struct Ipay88AuthType {
    pub merchant_code: Secret<String>,
    pub merchant_key: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for Ipay88AuthType {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::BodyKey { api_key, key1 } => Ok(Self {
                merchant_code: api_key.to_owned(),
                merchant_key: key1.to_owned(),
            }),
            _ => Err(error_stack::report!(
                errors::ConnectorError::FailedToObtainAuthType
            )),
        }
    }
}

/// `1278.99` as `1,278.99`, the format iPay88 expects in `Amount`.
pub fn format_amount(amount: &StringMajorUnit) -> String {
    let amount = amount.get_amount_as_string();
    let (sign, unsigned) = match amount.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", amount.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// The amount as signed: separators stripped.
pub fn amount_digits(amount: &str) -> String {
    amount.chars().filter(|c| !matches!(c, ',' | '.')).collect()
}

/// `MerchantKey + MerchantCode + RefNo + amount digits + Currency`
pub fn request_signature_context(fields: &FieldMap) -> SignatureContext {
    SignatureContext::new(SIGNATURE_RULE)
        .secret()
        .values(["MerchantCode", "RefNo"].map(|name| fields.get_or_empty(name)))
        .value(amount_digits(fields.get_or_empty("Amount")))
        .value(fields.get_or_empty("Currency"))
}

/// `MerchantKey + MerchantCode + PaymentId + RefNo + amount digits + Currency + Status`
pub fn response_signature_context(fields: &FieldMap) -> SignatureContext {
    SignatureContext::new(SIGNATURE_RULE)
        .secret()
        .values(["MerchantCode", "PaymentId", "RefNo"].map(|name| fields.get_or_empty(name)))
        .value(amount_digits(fields.get_or_empty("Amount")))
        .values(["Currency", "Status"].map(|name| fields.get_or_empty(name)))
}

pub fn build_payment_form(
    endpoint: &str,
    order: &PaymentOrder,
    auth: &Ipay88AuthType,
) -> CustomResult<RedirectForm, errors::ConnectorError> {
    if order.currency != Currency::MYR {
        return Err(errors::ConnectorError::CurrencyNotSupported {
            currency: order.currency.to_string(),
            connector: "ipay88",
        }
        .into());
    }
    let amount = utils::convert_amount(&StringMajorUnitForConnector, order.amount, order.currency)?;
    let customer = order.customer.clone().unwrap_or_default();

    let mut form_fields = FieldMap::new();
    form_fields
        .add_field("MerchantCode", auth.merchant_code.peek().as_str())
        .add_optional_field("PaymentId", order.extra_fields.get("PaymentId"))
        .add_field("RefNo", order.order_id.as_str())
        .add_field("Amount", format_amount(&amount))
        .add_field("Currency", order.currency.to_string())
        .add_field("ProdDesc", order.get_description()?)
        .add_optional_field("UserName", customer.full_name())
        .add_optional_field(
            "UserEmail",
            customer.email.map(|email| email.peek().to_owned()),
        )
        .add_optional_field(
            "UserContact",
            customer.phone.map(|phone| phone.peek().to_owned()),
        )
        .add_optional_field("Remark", order.extra_fields.get("Remark"))
        .add_field("Lang", constants::LANGUAGE)
        .add_field("ResponseURL", order.get_return_url()?)
        .add_optional_field("BackendURL", order.notify_url.as_deref());

    let signature = request_signature_context(&form_fields).sign(&auth.merchant_key)?;
    form_fields.add_field(constants::SIGNATURE_FIELD, signature);

    Ok(RedirectForm {
        endpoint: endpoint.to_string(),
        method: Method::Post,
        form_fields,
    })
}

pub fn requery_fields(fields: &FieldMap, auth: &Ipay88AuthType) -> FieldMap {
    let mut requery = FieldMap::with_capacity(3);
    requery
        .add_field("MerchantCode", auth.merchant_code.peek().as_str())
        .add_field("RefNo", fields.get_or_empty("RefNo"))
        .add_field("Amount", fields.get_or_empty("Amount"));
    requery
}

pub fn notification_from_fields(fields: FieldMap, request: &RequestDetails) -> NotificationRecord {
    let status = if fields.get("Status") == Some(constants::STATUS_SUCCESS) {
        PaymentStatus::Completed
    } else {
        PaymentStatus::Failed
    };
    NotificationRecord {
        signature: utils::get_optional_field(&fields, constants::SIGNATURE_FIELD),
        status,
        order_id: utils::get_optional_field(&fields, "RefNo"),
        transaction_id: utils::get_optional_field(&fields, "TransId"),
        gross: fields
            .get_non_empty("Amount")
            .map(|amount| StringMajorUnit::new(amount.replace(',', ""))),
        currency: fields
            .get_non_empty("Currency")
            .and_then(|currency| currency.parse::<Currency>().ok()),
        message: utils::get_optional_field(&fields, "ErrDesc"),
        test: false,
        raw_payload: decode::raw_form_payload(request),
        fields,
    }
}
