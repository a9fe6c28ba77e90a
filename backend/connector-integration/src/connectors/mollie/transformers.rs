use common_enums::{Currency, PaymentStatus};
use common_utils::{CustomResult, StringMajorUnit, StringMajorUnitForConnector};
use domain_types::{
    connector_types::{NotificationRecord, PaymentOrder, ResponseRecord},
    errors,
    router_data::ConnectorAuthType,
    FieldMap,
};
use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};

use super::constants;
use crate::utils;

#[derive(Debug, Clone)]
pub struct MollieAuthType {
    pub api_key: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for MollieAuthType {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::HeaderKey { api_key } => Ok(Self {
                api_key: api_key.to_owned(),
            }),
            _ => Err(error_stack::report!(
                errors::ConnectorError::FailedToObtainAuthType
            )),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MollieAmount {
    pub currency: String,
    pub value: StringMajorUnit,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MollieMetadata {
    pub order_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MolliePaymentsRequest {
    pub amount: MollieAmount,
    pub description: String,
    pub redirect_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    pub metadata: MollieMetadata,
}

impl TryFrom<&PaymentOrder> for MolliePaymentsRequest {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(order: &PaymentOrder) -> Result<Self, Self::Error> {
        let value =
            utils::convert_amount(&StringMajorUnitForConnector, order.amount, order.currency)?;
        Ok(Self {
            amount: MollieAmount {
                currency: order.currency.to_string(),
                value,
            },
            description: order
                .description
                .clone()
                .unwrap_or_else(|| format!("Order {}", order.order_id)),
            redirect_url: order.get_return_url()?.to_string(),
            webhook_url: order.notify_url.clone(),
            cancel_url: order.cancel_return_url.clone(),
            method: utils::get_optional_field(&order.extra_fields, "method"),
            locale: utils::get_optional_field(&order.extra_fields, "locale"),
            metadata: MollieMetadata {
                order_id: order.order_id.clone(),
            },
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MollieLink {
    pub href: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct MollieLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout: Option<MollieLink>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MolliePaymentResponse {
    pub id: String,
    pub status: String,
    pub amount: MollieAmount,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub metadata: Option<MollieMetadata>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: MollieLinks,
}

impl MolliePaymentResponse {
    pub fn checkout_url(&self) -> Option<&str> {
        self.links.checkout.as_ref().map(|link| link.href.as_str())
    }

    pub fn payment_status(&self) -> PaymentStatus {
        status_from_field(&self.status)
    }

    /// The payment as a notification record, fields flattened for callers.
    pub fn to_record(&self, raw_response: &[u8]) -> NotificationRecord {
        let order_id = self
            .metadata
            .as_ref()
            .map(|metadata| metadata.order_id.clone());
        let mut fields = FieldMap::new();
        fields
            .add_field("id", self.id.as_str())
            .add_field("status", self.status.as_str())
            .add_field("amount", self.amount.value.get_amount_as_string())
            .add_field("currency", self.amount.currency.as_str())
            .add_optional_field(constants::METADATA_ORDER_ID, order_id.clone());

        NotificationRecord {
            fields,
            signature: None,
            status: self.payment_status(),
            order_id,
            transaction_id: Some(self.id.clone()),
            gross: Some(self.amount.value.clone()),
            currency: self.amount.currency.parse::<Currency>().ok(),
            message: self.description.clone(),
            test: self.mode.as_deref() == Some("test"),
            raw_payload: raw_response.to_vec(),
        }
    }

    pub fn to_response_record(&self, raw_response: &[u8]) -> ResponseRecord {
        ResponseRecord {
            success: self.payment_status() == PaymentStatus::Completed,
            message: self.status.clone(),
            authorization: Some(self.id.clone()),
            raw_response: String::from_utf8_lossy(raw_response).into_owned(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MollieErrorResponse {
    pub status: u16,
    pub title: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

pub fn status_from_field(status: &str) -> PaymentStatus {
    match status {
        constants::STATUS_PAID => PaymentStatus::Completed,
        constants::STATUS_OPEN | constants::STATUS_PENDING | constants::STATUS_AUTHORIZED => {
            PaymentStatus::Pending
        }
        _ => PaymentStatus::Failed,
    }
}

/// Webhook calls carry only the payment id; the status is learned by fetching it.
pub fn notification_from_form(
    fields: FieldMap,
) -> CustomResult<NotificationRecord, errors::ConnectorError> {
    let payment_id = utils::get_optional_field(&fields, constants::WEBHOOK_ID_FIELD)
        .ok_or(errors::ConnectorError::WebhookReferenceIdNotFound)?;

    Ok(NotificationRecord {
        status: PaymentStatus::Pending,
        transaction_id: Some(payment_id),
        fields,
        ..Default::default()
    })
}
