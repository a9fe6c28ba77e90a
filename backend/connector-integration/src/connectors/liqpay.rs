pub mod constants;
pub mod transformers;


use common_enums::Connector;
use common_utils::CustomResult;
use domain_types::{
    connector_types::{NotificationRecord, PaymentOrder, RedirectForm, RequestDetails},
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

use self::transformers::LiqpayAuthType;
use crate::utils;

#[derive(Clone, Debug)]
pub struct Liqpay {
    params: ConnectorParams,
}

impl Liqpay {
    pub fn new(params: ConnectorParams) -> Self {
        Self { params }
    }
}

impl ConnectorCommon for Liqpay {
    fn id(&self) -> &'static str {
        "liqpay"
    }

    fn connector(&self) -> Connector {
        Connector::Liqpay
    }

    fn params(&self) -> &ConnectorParams {
        &self.params
    }
}

#[async_trait::async_trait]
impl PaymentFormBuilder for Liqpay {
    #[tracing::instrument(skip_all, fields(connector = "liqpay", order_id = %order.order_id))]
    async fn build_payment_form(
        &self,
        order: &PaymentOrder,
        auth: &ConnectorAuthType,
        _transport: &dyn ConnectorTransport,
    ) -> CustomResult<RedirectForm, errors::ConnectorError> {
        let auth = LiqpayAuthType::try_from(auth)?;
        let endpoint = utils::get_endpoint(&self.params)?;
        transformers::build_payment_form(endpoint, order, &auth)
    }
}

impl SourceVerification for Liqpay {
    fn get_secrets(
        &self,
        auth: &ConnectorAuthType,
        _record: &NotificationRecord,
    ) -> CustomResult<Secret<String>, errors::ConnectorError> {
        Ok(LiqpayAuthType::try_from(auth)?.signature_key)
    }

    /// Signed over the decoded XML kept in `raw_payload`.
    fn get_signature_context(
        &self,
        record: &NotificationRecord,
    ) -> CustomResult<Option<SignatureContext>, errors::ConnectorError> {
        Ok(Some(transformers::signature_context(
            &String::from_utf8_lossy(&record.raw_payload),
        )))
    }
}

#[async_trait::async_trait]
impl IncomingNotification for Liqpay {
    fn parse_notification(
        &self,
        request: &RequestDetails,
    ) -> CustomResult<NotificationRecord, errors::ConnectorError> {
        let form = decode::form_payload(request)?;
        transformers::notification_from_form(&form)
    }
}

// result_url and server_url receive the same signed envelope
impl RedirectReturn for Liqpay {}
