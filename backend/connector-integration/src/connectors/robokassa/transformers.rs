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

/// Robokassa accepts the digest in either case.
pub const SIGNATURE_RULE: SignatureRule =
    SignatureRule::new(DigestAlgorithm::Md5, ":", DigestEncoding::LowerHex).case_insensitive();

#[derive(Debug, Clone)]
pub struct RobokassaAuthType {
    pub merchant_login: Secret<String>,
    pub password1: Secret<String>,
    pub password2: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for RobokassaAuthType {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::SignatureKey {
                api_key,
                key1,
                api_secret,
            } => Ok(Self {
                merchant_login: api_key.to_owned(),
                password1: key1.to_owned(),
                password2: api_secret.to_owned(),
            }),
            _ => Err(error_stack::report!(
                errors::ConnectorError::FailedToObtainAuthType
            )),
        }
    }
}

fn is_custom_field(name: &str) -> bool {
    name.get(..constants::CUSTOM_FIELD_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(constants::CUSTOM_FIELD_PREFIX))
}

/// `shp_*` fields sorted by name, rendered as `name=value`.
fn custom_field_segments(fields: &FieldMap) -> Vec<String> {
    let mut custom = fields
        .iter()
        .filter(|(name, _)| is_custom_field(name))
        .collect::<Vec<_>>();
    custom.sort_by(|(left, _), (right, _)| left.cmp(right));
    custom
        .into_iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect()
}

/// `MrchLogin:OutSum:InvId[:OutSumCurrency]:password1[:shp_*=..]`
pub fn request_signature_context(fields: &FieldMap) -> SignatureContext {
    let mut context = SignatureContext::new(SIGNATURE_RULE).values(
        ["MrchLogin", "OutSum", "InvId"].map(|name| fields.get_or_empty(name)),
    );
    if let Some(currency) = fields.get_non_empty("OutSumCurrency") {
        context = context.value(currency);
    }
    context.secret().values(custom_field_segments(fields))
}

/// `OutSum:InvId:password[:shp_*=..]`, password #2 on the Result URL and #1 on the Success URL.
pub fn result_signature_context(fields: &FieldMap) -> SignatureContext {
    SignatureContext::new(SIGNATURE_RULE)
        .values(["OutSum", "InvId"].map(|name| fields.get_or_empty(name)))
        .secret()
        .values(custom_field_segments(fields))
}

pub fn build_payment_form(
    endpoint: &str,
    order: &PaymentOrder,
    auth: &RobokassaAuthType,
) -> CustomResult<RedirectForm, errors::ConnectorError> {
    let amount = utils::convert_amount(&StringMajorUnitForConnector, order.amount, order.currency)?;

    let mut form_fields = FieldMap::new();
    form_fields
        .add_field("MrchLogin", auth.merchant_login.peek().as_str())
        .add_field("OutSum", amount.get_amount_as_string())
        .add_field("InvId", order.order_id.as_str())
        .add_optional_field("Desc", order.description.as_deref())
        .add_optional_field(
            "Email",
            order
                .customer
                .as_ref()
                .and_then(|customer| customer.email.as_ref())
                .map(|email| email.peek().to_owned()),
        );
    if order.currency != Currency::RUB {
        form_fields.add_field("OutSumCurrency", order.currency.to_string());
    }
    if order.test_mode {
        form_fields.add_field("IsTest", "1");
    }
    form_fields.extend(
        order
            .extra_fields
            .iter()
            .filter(|(name, _)| is_custom_field(name)),
    );

    let signature = request_signature_context(&form_fields).sign(&auth.password1)?;
    form_fields.add_field(constants::SIGNATURE_FIELD, signature);

    Ok(RedirectForm {
        endpoint: endpoint.to_string(),
        method: Method::Post,
        form_fields,
    })
}

/// Robokassa only calls the Result URL for paid invoices.
pub fn notification_from_fields(fields: FieldMap, request: &RequestDetails) -> NotificationRecord {
    NotificationRecord {
        signature: utils::get_optional_field(&fields, constants::SIGNATURE_FIELD),
        status: PaymentStatus::Completed,
        order_id: utils::get_optional_field(&fields, "InvId"),
        transaction_id: None,
        gross: utils::get_optional_amount(&fields, "OutSum"),
        currency: Some(Currency::RUB),
        message: None,
        test: fields.get("IsTest") == Some("1"),
        raw_payload: decode::raw_form_payload(request),
        fields,
    }
}
