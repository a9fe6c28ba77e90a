pub mod constants;
pub mod transformers;


use common_enums::{Connector, PaymentStatus};
use common_utils::CustomResult;
use domain_types::{
    connector_types::{
        NotificationRecord, PaymentOrder, RedirectForm, RequestDetails, ReturnRecord,
        SignatureCheck,
    },
    errors,
    router_data::ConnectorAuthType,
    signature::SignatureContext,
    types::ConnectorParams,
};
use hyperswitch_masking::Secret;
use interfaces::{
    api::ConnectorTransport,
    connector_types::{ConnectorCommon, IncomingNotification, PaymentFormBuilder, RedirectReturn},
    decode,
    verification::SourceVerification,
};

use self::transformers::QuickpayAuthType;
use crate::utils;

#[derive(Clone, Debug)]
pub struct Quickpay {
    params: ConnectorParams,
}

impl Quickpay {
    pub fn new(params: ConnectorParams) -> Self {
        Self { params }
    }
}

impl ConnectorCommon for Quickpay {
    fn id(&self) -> &'static str {
        "quickpay"
    }

    fn connector(&self) -> Connector {
        Connector::Quickpay
    }

    fn params(&self) -> &ConnectorParams {
        &self.params
    }
}

#[async_trait::async_trait]
impl PaymentFormBuilder for Quickpay {
    #[tracing::instrument(skip_all, fields(connector = "quickpay", order_id = %order.order_id))]
    async fn build_payment_form(
        &self,
        order: &PaymentOrder,
        auth: &ConnectorAuthType,
        _transport: &dyn ConnectorTransport,
    ) -> CustomResult<RedirectForm, errors::ConnectorError> {
        let auth = QuickpayAuthType::try_from(auth)?;
        let endpoint = utils::get_endpoint(&self.params)?;
        transformers::build_payment_form(endpoint, order, &auth)
    }
}

/// Callbacks are signed with the account private key, not the payment window key.
impl SourceVerification for Quickpay {
    fn get_secrets(
        &self,
        auth: &ConnectorAuthType,
        _record: &NotificationRecord,
    ) -> CustomResult<Secret<String>, errors::ConnectorError> {
        Ok(QuickpayAuthType::try_from(auth)?.private_key)
    }

    fn get_signature_context(
        &self,
        record: &NotificationRecord,
    ) -> CustomResult<Option<SignatureContext>, errors::ConnectorError> {
        Ok(Some(transformers::callback_signature_context(
            &record.raw_payload,
        )))
    }
}

#[async_trait::async_trait]
impl IncomingNotification for Quickpay {
    fn parse_notification(
        &self,
        request: &RequestDetails,
    ) -> CustomResult<NotificationRecord, errors::ConnectorError> {
        let payload: serde_json::Value = decode::json_payload(request, "QuickpayCallback")?;
        transformers::notification_from_payload(payload, request)
    }
}

impl RedirectReturn for Quickpay {
    /// `continueurl` carries no provider fields; the callback is authoritative.
    fn parse_return(
        &self,
        request: &RequestDetails,
        _auth: &ConnectorAuthType,
    ) -> CustomResult<ReturnRecord, errors::ConnectorError> {
        let fields = decode::form_payload(request)?;
        Ok(ReturnRecord {
            status: PaymentStatus::Pending,
            order_id: utils::get_optional_field(&fields, "order_id"),
            gross: None,
            message: None,
            fields,
            signature_check: SignatureCheck::NotSigned,
        })
    }
}
