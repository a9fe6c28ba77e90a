pub mod constants;
pub mod transformers;

mod test;

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

use self::transformers::InterkassaAuthType;
use crate::utils;

#[derive(Clone, Debug)]
pub struct Interkassa {
    params: ConnectorParams,
}

impl Interkassa {
    pub fn new(params: ConnectorParams) -> Self {
        Self { params }
    }
}

impl ConnectorCommon for Interkassa {
    fn id(&self) -> &'static str {
        "interkassa"
    }

    fn connector(&self) -> Connector {
        Connector::Interkassa
    }

    fn params(&self) -> &ConnectorParams {
        &self.params
    }
}

#[async_trait::async_trait]
impl PaymentFormBuilder for Interkassa {
    #[tracing::instrument(skip_all, fields(connector = "interkassa", order_id = %order.order_id))]
    async fn build_payment_form(
        &self,
        order: &PaymentOrder,
        auth: &ConnectorAuthType,
        _transport: &dyn ConnectorTransport,
    ) -> CustomResult<RedirectForm, errors::ConnectorError> {
        let auth = InterkassaAuthType::try_from(auth)?;
        let endpoint = utils::get_endpoint(&self.params)?;
        transformers::build_payment_form(endpoint, order, &auth)
    }
}

impl SourceVerification for Interkassa {
    fn get_secrets(
        &self,
        auth: &ConnectorAuthType,
        record: &NotificationRecord,
    ) -> CustomResult<Secret<String>, errors::ConnectorError> {
        Ok(InterkassaAuthType::try_from(auth)?.key_for(&record.fields))
    }

    fn get_signature_context(
        &self,
        record: &NotificationRecord,
    ) -> CustomResult<Option<SignatureContext>, errors::ConnectorError> {
        Ok(Some(transformers::signature_context(&record.fields)))
    }
}

#[async_trait::async_trait]
impl IncomingNotification for Interkassa {
    fn parse_notification(
        &self,
        request: &RequestDetails,
    ) -> CustomResult<NotificationRecord, errors::ConnectorError> {
        let fields = decode::form_payload(request)?;
        Ok(transformers::notification_from_fields(fields, request))
    }
}

// success, fail and pending URLs receive the signed interaction fields too
impl RedirectReturn for Interkassa {}
