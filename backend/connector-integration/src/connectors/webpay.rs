pub mod constants;
pub mod transformers;

mod test;

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

use self::transformers::WebpayAuthType;
use crate::utils;

#[derive(Clone, Debug)]
pub struct Webpay {
    params: ConnectorParams,
}

impl Webpay {
    pub fn new(params: ConnectorParams) -> Self {
        Self { params }
    }
}

impl ConnectorCommon for Webpay {
    fn id(&self) -> &'static str {
        "webpay"
    }

    fn connector(&self) -> Connector {
        Connector::Webpay
    }

    fn params(&self) -> &ConnectorParams {
        &self.params
    }
}

#[async_trait::async_trait]
impl PaymentFormBuilder for Webpay {
    #[tracing::instrument(skip_all, fields(connector = "webpay", order_id = %order.order_id))]
    async fn build_payment_form(
        &self,
        order: &PaymentOrder,
        auth: &ConnectorAuthType,
        _transport: &dyn ConnectorTransport,
    ) -> CustomResult<RedirectForm, errors::ConnectorError> {
        let auth = WebpayAuthType::try_from(auth)?;
        let endpoint = utils::get_endpoint(&self.params)?;
        transformers::build_payment_form(endpoint, order, &auth)
    }
}

impl SourceVerification for Webpay {
    fn get_secrets(
        &self,
        auth: &ConnectorAuthType,
        _record: &NotificationRecord,
    ) -> CustomResult<Secret<String>, errors::ConnectorError> {
        Ok(WebpayAuthType::try_from(auth)?.secret_key)
    }

    fn get_signature_context(
        &self,
        record: &NotificationRecord,
    ) -> CustomResult<Option<SignatureContext>, errors::ConnectorError> {
        Ok(Some(transformers::notify_signature_context(&record.fields)))
    }
}

#[async_trait::async_trait]
impl IncomingNotification for Webpay {
    fn parse_notification(
        &self,
        request: &RequestDetails,
    ) -> CustomResult<NotificationRecord, errors::ConnectorError> {
        let fields = decode::form_payload(request)?;
        Ok(transformers::notification_from_fields(fields, request))
    }
}

impl RedirectReturn for Webpay {
    /// `wsb_order_num` and `wsb_tid` only; the notify URL carries the outcome.
    fn parse_return(
        &self,
        request: &RequestDetails,
        _auth: &ConnectorAuthType,
    ) -> CustomResult<ReturnRecord, errors::ConnectorError> {
        let fields = decode::form_payload(request)?;
        Ok(ReturnRecord {
            status: PaymentStatus::Pending,
            order_id: utils::get_optional_field(&fields, "wsb_order_num"),
            gross: None,
            message: None,
            fields,
            signature_check: SignatureCheck::NotSigned,
        })
    }
}
