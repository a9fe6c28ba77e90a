pub mod constants;
pub mod transformers;

mod test;

use common_enums::Connector;
use common_utils::{
    request::{Method, RequestBuilder},
    CustomResult,
};
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

use self::transformers::Ipay88AuthType;
use crate::utils;

#[derive(Clone, Debug)]
pub struct Ipay88 {
    params: ConnectorParams,
}

impl Ipay88 {
    pub fn new(params: ConnectorParams) -> Self {
        Self { params }
    }
}

impl ConnectorCommon for Ipay88 {
    fn id(&self) -> &'static str {
        "ipay88"
    }

    fn connector(&self) -> Connector {
        Connector::Ipay88
    }

    fn params(&self) -> &ConnectorParams {
        &self.params
    }
}

#[async_trait::async_trait]
impl PaymentFormBuilder for Ipay88 {
    #[tracing::instrument(skip_all, fields(connector = "ipay88", order_id = %order.order_id))]
    async fn build_payment_form(
        &self,
        order: &PaymentOrder,
        auth: &ConnectorAuthType,
        _transport: &dyn ConnectorTransport,
    ) -> CustomResult<RedirectForm, errors::ConnectorError> {
        let auth = Ipay88AuthType::try_from(auth)?;
        let endpoint = utils::get_endpoint(&self.params)?;
        transformers::build_payment_form(endpoint, order, &auth)
    }
}

impl SourceVerification for Ipay88 {
    fn get_secrets(
        &self,
        auth: &ConnectorAuthType,
        _record: &NotificationRecord,
    ) -> CustomResult<Secret<String>, errors::ConnectorError> {
        Ok(Ipay88AuthType::try_from(auth)?.merchant_key)
    }

    fn get_signature_context(
        &self,
        record: &NotificationRecord,
    ) -> CustomResult<Option<SignatureContext>, errors::ConnectorError> {
        Ok(Some(transformers::response_signature_context(&record.fields)))
    }
}

#[async_trait::async_trait]
impl IncomingNotification for Ipay88 {
    fn parse_notification(
        &self,
        request: &RequestDetails,
    ) -> CustomResult<NotificationRecord, errors::ConnectorError> {
        let fields = decode::form_payload(request)?;
        Ok(transformers::notification_from_fields(fields, request))
    }

    /// Re-queries the payment; only the literal `00` confirms it.
    async fn confirm_with_provider(
        &self,
        record: &NotificationRecord,
        auth: &ConnectorAuthType,
        transport: &dyn ConnectorTransport,
    ) -> CustomResult<bool, errors::ConnectorError> {
        if !record.is_completed() {
            return Ok(true);
        }
        let auth = Ipay88AuthType::try_from(auth)?;
        let request = RequestBuilder::new()
            .method(Method::Post)
            .url(utils::get_secondary_endpoint(&self.params)?)
            .attach_default_headers()
            .set_body(transformers::requery_fields(&record.fields, &auth))
            .build();

        let response = transport.send(request).await?;
        if !response.is_success() {
            return Err(errors::ConnectorError::UnexpectedResponseError(response.response).into());
        }

        let answer = response.text();
        let confirmed = answer.trim() == constants::REQUERY_SUCCESS;
        if !confirmed {
            tracing::warn!(
                connector = self.id(),
                answer = answer.trim(),
                "payment requery did not confirm the notification"
            );
        }
        Ok(confirmed)
    }

    fn acknowledgement_body(&self, _record: &NotificationRecord) -> Option<String> {
        Some(constants::ACKNOWLEDGEMENT.to_string())
    }
}

// the ResponseURL post mirrors the BackendURL one
impl RedirectReturn for Ipay88 {}
