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

use self::transformers::PayuInAuthType;
use crate::utils;

#[derive(Clone, Debug)]
pub struct PayuIn {
    params: ConnectorParams,
}

impl PayuIn {
    pub fn new(params: ConnectorParams) -> Self {
        Self { params }
    }
}

impl ConnectorCommon for PayuIn {
    fn id(&self) -> &'static str {
        "payu_in"
    }

    fn connector(&self) -> Connector {
        Connector::PayuIn
    }

    fn params(&self) -> &ConnectorParams {
        &self.params
    }
}

#[async_trait::async_trait]
impl PaymentFormBuilder for PayuIn {
    #[tracing::instrument(skip_all, fields(connector = "payu_in", order_id = %order.order_id))]
    async fn build_payment_form(
        &self,
        order: &PaymentOrder,
        auth: &ConnectorAuthType,
        _transport: &dyn ConnectorTransport,
    ) -> CustomResult<RedirectForm, errors::ConnectorError> {
        let auth = PayuInAuthType::try_from(auth)?;
        let endpoint = utils::get_endpoint(&self.params)?;
        transformers::build_payment_form(endpoint, order, &auth)
    }
}

impl SourceVerification for PayuIn {
    fn get_secrets(
        &self,
        auth: &ConnectorAuthType,
        _record: &NotificationRecord,
    ) -> CustomResult<Secret<String>, errors::ConnectorError> {
        Ok(PayuInAuthType::try_from(auth)?.salt)
    }

    fn get_signature_context(
        &self,
        record: &NotificationRecord,
    ) -> CustomResult<Option<SignatureContext>, errors::ConnectorError> {
        Ok(Some(transformers::response_hash_context(&record.fields)))
    }
}

#[async_trait::async_trait]
impl IncomingNotification for PayuIn {
    fn parse_notification(
        &self,
        request: &RequestDetails,
    ) -> CustomResult<NotificationRecord, errors::ConnectorError> {
        let fields = decode::form_payload(request)?;
        Ok(transformers::notification_from_fields(fields, request))
    }
}

// the browser is posted back with the same fields as the server callback
impl RedirectReturn for PayuIn {}
