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
    SignatureRule::new(DigestAlgorithm::Md5, ":", DigestEncoding::Base64);

#[derive(Debug, Clone)]
pub struct InterkassaAuthType {
    pub checkout_id: Secret<String>,
    pub secret_key: Secret<String>,
    pub test_key: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for InterkassaAuthType {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::SignatureKey {
                api_key,
                key1,
                api_secret,
            } => Ok(Self {
                checkout_id: api_key.to_owned(),
                secret_key: key1.to_owned(),
                test_key: api_secret.to_owned(),
            }),
            _ => Err(error_stack::report!(
                errors::ConnectorError::FailedToObtainAuthType
            )),
        }
    }
}

impl InterkassaAuthType {
    /// Sandbox payments are signed with the test key.
    pub fn key_for(&self, fields: &FieldMap) -> Secret<String> {
        if is_test_payment(fields) {
            self.test_key.clone()
        } else {
            self.secret_key.clone()
        }
    }
}

pub fn is_test_payment(fields: &FieldMap) -> bool {
    fields.get("ik_pw_via") == Some(constants::TEST_PAYMENT_SYSTEM)
}

/// Values of every `ik_` field but `ik_sign`, sorted by name, then the key.
pub fn signature_context(fields: &FieldMap) -> SignatureContext {
    let signed = fields.filter_prefix(constants::FIELD_PREFIX).sorted_by_key();
    SignatureContext::new(SIGNATURE_RULE)
        .values(
            signed
                .iter()
                .filter(|(name, _)| *name != constants::SIGNATURE_FIELD)
                .map(|(_, value)| value),
        )
        .secret()
}

pub fn build_payment_form(
    endpoint: &str,
    order: &PaymentOrder,
    auth: &InterkassaAuthType,
) -> CustomResult<RedirectForm, errors::ConnectorError> {
    let amount = utils::convert_amount(&StringMajorUnitForConnector, order.amount, order.currency)?;

    let mut form_fields = FieldMap::new();
    form_fields
        .add_field("ik_co_id", auth.checkout_id.peek().as_str())
        .add_field("ik_pm_no", order.order_id.as_str())
        .add_field("ik_am", amount.get_amount_as_string())
        .add_field("ik_cur", order.currency.to_string())
        .add_field(
            "ik_desc",
            order.description.as_deref().unwrap_or(order.order_id.as_str()),
        )
        .add_optional_field("ik_suc_u", order.return_url.as_deref())
        .add_optional_field("ik_fal_u", order.cancel_return_url.as_deref())
        .add_optional_field("ik_pnd_u", order.return_url.as_deref())
        .add_optional_field("ik_ia_u", order.notify_url.as_deref())
        .add_optional_field(
            "ik_ia_m",
            order.notify_url.as_ref().map(|_| constants::INTERACTION_METHOD),
        )
        .add_optional_field(
            "ik_cli",
            order
                .customer
                .as_ref()
                .and_then(|customer| customer.email.as_ref())
                .map(|email| email.peek().to_owned()),
        );
    utils::merge_prefixed_fields(&mut form_fields, &order.extra_fields, constants::FIELD_PREFIX);
    form_fields.remove(constants::SIGNATURE_FIELD);

    let signature = signature_context(&form_fields).sign(&auth.secret_key)?;
    form_fields.add_field(constants::SIGNATURE_FIELD, signature);

    Ok(RedirectForm {
        endpoint: endpoint.to_string(),
        method: Method::Post,
        form_fields,
    })
}

fn status_from_field(status: &str) -> PaymentStatus {
    match status {
        constants::STATUS_SUCCESS => PaymentStatus::Completed,
        constants::STATUS_FAIL | constants::STATUS_CANCELED => PaymentStatus::Failed,
        _ => PaymentStatus::Pending,
    }
}

pub fn notification_from_fields(fields: FieldMap, request: &RequestDetails) -> NotificationRecord {
    NotificationRecord {
        signature: utils::get_optional_field(&fields, constants::SIGNATURE_FIELD),
        status: status_from_field(fields.get_or_empty("ik_inv_st")),
        order_id: utils::get_optional_field(&fields, "ik_pm_no"),
        transaction_id: utils::get_optional_field(&fields, "ik_inv_id"),
        gross: utils::get_optional_amount(&fields, "ik_am"),
        currency: fields
            .get_non_empty("ik_cur")
            .and_then(|currency| currency.parse::<Currency>().ok()),
        message: None,
        test: is_test_payment(&fields),
        raw_payload: decode::raw_form_payload(request),
        fields,
    }
}
