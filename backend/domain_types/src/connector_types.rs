use std::collections::HashMap;

use common_enums::{Currency, PaymentStatus};
use common_utils::{request::Method, MinorUnit, StringMajorUnit};
use hyperswitch_masking::Secret;

use crate::{errors::ConnectorError, field_map::FieldMap, utils::missing_field_err};

/// Provider independent description of what the payer is asked to pay.
#[derive(Clone, Debug, Default)]
pub struct PaymentOrder {
    pub order_id: String,
    pub amount: MinorUnit,
    pub currency: Currency,
    pub description: Option<String>,
    pub customer: Option<Customer>,
    pub billing_address: Option<Address>,
    pub return_url: Option<String>,
    pub notify_url: Option<String>,
    pub cancel_return_url: Option<String>,
    pub test_mode: bool,
    /// Provider specific fields appended as-is (e.g. Robokassa `shp_*`, PayU `udf*`).
    pub extra_fields: FieldMap,
    /// Pins the nonce of providers that sign one (WebPay seed, Realex timestamp).
    pub nonce: Option<String>,
}

impl PaymentOrder {
    pub fn new(order_id: impl Into<String>, amount: MinorUnit, currency: Currency) -> Self {
        Self {
            order_id: order_id.into(),
            amount,
            currency,
            ..Default::default()
        }
    }

    pub fn get_return_url(&self) -> Result<&str, error_stack::Report<ConnectorError>> {
        self.return_url
            .as_deref()
            .ok_or_else(missing_field_err("return_url"))
    }

    pub fn get_description(&self) -> Result<&str, error_stack::Report<ConnectorError>> {
        self.description
            .as_deref()
            .ok_or_else(missing_field_err("description"))
    }
}

#[derive(Clone, Debug, Default)]
pub struct Customer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<Secret<String>>,
    pub phone: Option<Secret<String>>,
}

impl Customer {
    pub fn full_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(name), None) | (None, Some(name)) => Some(name.to_string()),
            (None, None) => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Address {
    pub line1: Option<Secret<String>>,
    pub line2: Option<Secret<String>>,
    pub city: Option<String>,
    pub state: Option<Secret<String>>,
    pub zip: Option<Secret<String>>,
    /// ISO 3166-1 alpha-2
    pub country: Option<String>,
}

/// Where and how the payer's browser is sent to the provider.
#[derive(Clone, Debug, PartialEq)]
pub struct RedirectForm {
    pub endpoint: String,
    pub method: Method,
    pub form_fields: FieldMap,
}

impl RedirectForm {
    /// Endpoint with the form fields as query string, for GET redirects.
    pub fn to_url(&self) -> Result<url::Url, error_stack::Report<ConnectorError>> {
        let mut url = url::Url::parse(&self.endpoint).map_err(|_| {
            error_stack::report!(ConnectorError::InvalidConnectorConfig { config: "base_url" })
        })?;
        url.query_pairs_mut().extend_pairs(self.form_fields.iter());
        Ok(url)
    }
}

/// The inbound HTTP request exactly as the application's handler received it.
#[derive(Clone, Debug, Default)]
pub struct RequestDetails {
    pub method: Method,
    pub headers: HashMap<String, String>,
    pub query_params: Option<String>,
    pub body: Vec<u8>,
}

impl RequestDetails {
    /// Header lookup ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Inbound webhook / IPN after parsing.
#[derive(Clone, Debug, Default)]
pub struct NotificationRecord {
    pub fields: FieldMap,
    pub signature: Option<String>,
    pub status: PaymentStatus,
    pub order_id: Option<String>,
    pub transaction_id: Option<String>,
    pub gross: Option<StringMajorUnit>,
    pub currency: Option<Currency>,
    pub message: Option<String>,
    pub test: bool,
    /// Body as received, for providers that sign or echo the raw payload.
    pub raw_payload: Vec<u8>,
}

impl NotificationRecord {
    pub fn get_order_id(&self) -> Result<&str, error_stack::Report<ConnectorError>> {
        self.order_id
            .as_deref()
            .ok_or_else(|| ConnectorError::WebhookReferenceIdNotFound.into())
    }

    pub fn get_signature(&self) -> Result<&str, error_stack::Report<ConnectorError>> {
        self.signature
            .as_deref()
            .filter(|signature| !signature.is_empty())
            .ok_or_else(|| ConnectorError::WebhookSignatureNotFound.into())
    }

    /// Gross amount in minor units of the notified currency.
    pub fn gross_amount(&self) -> Option<MinorUnit> {
        let currency = self.currency?;
        self.gross.as_ref()?.to_minor_unit_as_i64(currency).ok()
    }

    pub fn is_completed(&self) -> bool {
        self.status == PaymentStatus::Completed
    }
}

/// Outcome of checking a signed return.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SignatureCheck {
    #[default]
    NotSigned,
    Verified,
    Mismatch,
}

/// Payer redirect back from the hosted page.
#[derive(Clone, Debug, Default)]
pub struct ReturnRecord {
    pub fields: FieldMap,
    pub status: PaymentStatus,
    pub order_id: Option<String>,
    pub gross: Option<StringMajorUnit>,
    pub message: Option<String>,
    pub signature_check: SignatureCheck,
}

impl ReturnRecord {
    /// Completed and not contradicted by the signature.
    pub fn is_success(&self) -> bool {
        self.status == PaymentStatus::Completed && self.signature_check != SignatureCheck::Mismatch
    }
}

/// Outcome of a server-to-server request.
#[derive(Clone, Debug, Default)]
pub struct ResponseRecord {
    pub success: bool,
    pub message: String,
    pub authorization: Option<String>,
    /// Provider payload kept verbatim for auditing.
    pub raw_response: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum RejectionReason {
    SignatureMismatch,
    ConfirmationDenied,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    Accepted,
    Rejected(RejectionReason),
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        self == Self::Accepted
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted => f.write_str("accepted"),
            Self::Rejected(reason) => write!(f, "rejected({reason})"),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use common_enums::{Currency, PaymentStatus};
    use common_utils::{request::Method, MinorUnit, StringMajorUnit};

    use super::*;

    #[test]
    fn test_redirect_form_to_url() {
        let mut form_fields = FieldMap::new();
        form_fields
            .add_field("MrchLogin", "demo")
            .add_field("Desc", "Order 1");
        let form = RedirectForm {
            endpoint: "https://auth.example.com/Merchant/Index.aspx".to_string(),
            method: Method::Get,
            form_fields,
        };
        assert_eq!(
            form.to_url().unwrap().as_str(),
            "https://auth.example.com/Merchant/Index.aspx?MrchLogin=demo&Desc=Order+1"
        );
    }

    #[test]
    fn test_notification_accessors() {
        let record = NotificationRecord {
            status: PaymentStatus::Completed,
            gross: Some(StringMajorUnit::new("12.50".to_string())),
            currency: Some(Currency::EUR),
            ..Default::default()
        };
        assert_eq!(record.gross_amount(), Some(MinorUnit::new(1250)));
        assert!(record.is_completed());
        assert!(record.get_order_id().is_err());
        assert!(record.get_signature().is_err());
    }

    #[test]
    fn test_return_record_success_requires_signature() {
        let mut record = ReturnRecord {
            status: PaymentStatus::Completed,
            signature_check: SignatureCheck::Verified,
            ..Default::default()
        };
        assert!(record.is_success());
        record.signature_check = SignatureCheck::Mismatch;
        assert!(!record.is_success());
    }

    #[test]
    fn test_request_details_header_lookup() {
        let details = RequestDetails {
            headers: [("QuickPay-Checksum-Sha256".to_string(), "abc".to_string())]
                .into_iter()
                .collect(),
            ..Default::default()
        };
        assert_eq!(details.header("quickpay-checksum-sha256"), Some("abc"));
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(
            Verdict::Rejected(RejectionReason::SignatureMismatch).to_string(),
            "rejected(signature_mismatch)"
        );
    }
}
