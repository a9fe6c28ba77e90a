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

use self::transformers::SkrillAuthType;
use crate::utils;

#[derive(Clone, Debug)]
pub struct Skrill {
    params: ConnectorParams,
}

impl Skrill {
    pub fn new(params: ConnectorParams) -> Self {
        Self { params }
    }
}

impl ConnectorCommon for Skrill {
    fn id(&self) -> &'static str {
        "skrill"
    }

    fn connector(&self) -> Connector {
        Connector::Skrill
    }

    fn params(&self) -> &ConnectorParams {
        &self.params
    }
}

#[async_trait::async_trait]
impl PaymentFormBuilder for Skrill {
    #[tracing::instrument(skip_all, fields(connector = "skrill", order_id = %order.order_id))]
    async fn build_payment_form(
        &self,
        order: &PaymentOrder,
        auth: &ConnectorAuthType,
        _transport: &dyn ConnectorTransport,
    ) -> CustomResult<RedirectForm, errors::ConnectorError> {
        let auth = SkrillAuthType::try_from(auth)?;
        let endpoint = utils::get_endpoint(&self.params)?;
        transformers::build_payment_form(endpoint, order, &auth)
    }
}

impl SourceVerification for Skrill {
    /// The status report is keyed with the upper-case MD5 of the secret word, not the word itself.
    fn get_secrets(
        &self,
        auth: &ConnectorAuthType,
        _record: &NotificationRecord,
    ) -> CustomResult<Secret<String>, errors::ConnectorError> {
        let auth = SkrillAuthType::try_from(auth)?;
        transformers::secret_word_digest(&auth.secret_word).map(Secret::new)
    }

    fn get_signature_context(
        &self,
        record: &NotificationRecord,
    ) -> CustomResult<Option<SignatureContext>, errors::ConnectorError> {
        Ok(Some(transformers::status_signature_context(&record.fields)))
    }
}

#[async_trait::async_trait]
impl IncomingNotification for Skrill {
    fn parse_notification(
        &self,
        request: &RequestDetails,
    ) -> CustomResult<NotificationRecord, errors::ConnectorError> {
        let fields = decode::form_payload(request)?;
        Ok(transformers::notification_from_fields(fields, request))
    }
}

impl RedirectReturn for Skrill {
    /// The return URL only echoes `transaction_id`; the outcome arrives on the status URL.
    fn parse_return(
        &self,
        request: &RequestDetails,
        _auth: &ConnectorAuthType,
    ) -> CustomResult<ReturnRecord, errors::ConnectorError> {
        let fields = decode::form_payload(request)?;
        Ok(ReturnRecord {
            status: PaymentStatus::Pending,
            order_id: utils::get_optional_field(&fields, "transaction_id"),
            gross: None,
            message: None,
            fields,
            signature_check: SignatureCheck::NotSigned,
        })
    }
}
