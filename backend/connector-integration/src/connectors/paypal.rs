pub mod constants;
pub mod transformers;

mod test;

use common_enums::Connector;
use common_utils::{
    request::{ContentType, Method, RequestBuilder, RequestContent},
    CustomResult,
};
use domain_types::{
    connector_types::{NotificationRecord, PaymentOrder, RedirectForm, RequestDetails},
    errors,
    router_data::ConnectorAuthType,
    types::ConnectorParams,
};
use interfaces::{
    api::ConnectorTransport,
    connector_types::{ConnectorCommon, IncomingNotification, PaymentFormBuilder, RedirectReturn},
    decode,
    verification::SourceVerification,
};

use self::transformers::PaypalAuthType;
use crate::utils;

pub(crate) mod headers {
    pub(crate) const CONTENT_TYPE: &str = "Content-Type";
}

#[derive(Clone, Debug)]
pub struct Paypal {
    params: ConnectorParams,
}

impl Paypal {
    pub fn new(params: ConnectorParams) -> Self {
        Self { params }
    }
}

impl ConnectorCommon for Paypal {
    fn id(&self) -> &'static str {
        "paypal"
    }

    fn connector(&self) -> Connector {
        Connector::Paypal
    }

    fn params(&self) -> &ConnectorParams {
        &self.params
    }
}

#[async_trait::async_trait]
impl PaymentFormBuilder for Paypal {
    #[tracing::instrument(skip_all, fields(connector = "paypal", order_id = %order.order_id))]
    async fn build_payment_form(
        &self,
        order: &PaymentOrder,
        auth: &ConnectorAuthType,
        _transport: &dyn ConnectorTransport,
    ) -> CustomResult<RedirectForm, errors::ConnectorError> {
        let auth = PaypalAuthType::try_from(auth)?;
        let endpoint = utils::get_endpoint(&self.params)?;
        transformers::build_payment_form(endpoint, order, &auth)
    }
}

/// IPN messages are not signed; they are confirmed by posting them back instead.
impl SourceVerification for Paypal {}

#[async_trait::async_trait]
impl IncomingNotification for Paypal {
    fn parse_notification(
        &self,
        request: &RequestDetails,
    ) -> CustomResult<NotificationRecord, errors::ConnectorError> {
        let fields = decode::form_payload(request)?;
        Ok(transformers::notification_from_fields(fields, request))
    }

    /// Echoes the raw IPN back prefixed with `cmd=_notify-validate`.
    async fn confirm_with_provider(
        &self,
        record: &NotificationRecord,
        _auth: &ConnectorAuthType,
        transport: &dyn ConnectorTransport,
    ) -> CustomResult<bool, errors::ConnectorError> {
        let mut body = constants::NOTIFY_VALIDATE_PREFIX.as_bytes().to_vec();
        body.extend_from_slice(&record.raw_payload);

        let request = RequestBuilder::new()
            .method(Method::Post)
            .url(utils::get_secondary_endpoint(&self.params)?)
            .attach_default_headers()
            .header(headers::CONTENT_TYPE, ContentType::FormUrlEncoded.mime())
            .set_body(RequestContent::RawBytes(body))
            .build();

        let response = transport.send(request).await?;
        if !response.is_success() {
            return Err(errors::ConnectorError::UnexpectedResponseError(response.response).into());
        }

        match response.text().trim() {
            constants::VERIFIED => Ok(true),
            constants::INVALID => Ok(false),
            _ => Err(errors::ConnectorError::UnexpectedResponseError(response.response).into()),
        }
    }
}

// the return is an unsigned echo of the order; the IPN is authoritative
impl RedirectReturn for Paypal {}
