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

use self::transformers::PaydollarAuthType;
use crate::utils;

#[derive(Clone, Debug)]
pub struct Paydollar {
    params: ConnectorParams,
}

impl Paydollar {
    pub fn new(params: ConnectorParams) -> Self {
        Self { params }
    }
}

impl ConnectorCommon for Paydollar {
    fn id(&self) -> &'static str {
        "paydollar"
    }

    fn connector(&self) -> Connector {
        Connector::Paydollar
    }

    fn params(&self) -> &ConnectorParams {
        &self.params
    }
}

#[async_trait::async_trait]
impl PaymentFormBuilder for Paydollar {
    #[tracing::instrument(skip_all, fields(connector = "paydollar", order_id = %order.order_id))]
    async fn build_payment_form(
        &self,
        order: &PaymentOrder,
        auth: &ConnectorAuthType,
        _transport: &dyn ConnectorTransport,
    ) -> CustomResult<RedirectForm, errors::ConnectorError> {
        let auth = PaydollarAuthType::try_from(auth)?;
        let endpoint = utils::get_endpoint(&self.params)?;
        transformers::build_payment_form(endpoint, order, &auth)
    }
}

impl SourceVerification for Paydollar {
    fn get_secrets(
        &self,
        auth: &ConnectorAuthType,
        _record: &NotificationRecord,
    ) -> CustomResult<Secret<String>, errors::ConnectorError> {
        Ok(PaydollarAuthType::try_from(auth)?.secure_hash_secret)
    }

    fn get_signature_context(
        &self,
        record: &NotificationRecord,
    ) -> CustomResult<Option<SignatureContext>, errors::ConnectorError> {
        Ok(Some(transformers::datafeed_signature_context(&record.fields)))
    }

    /// During secret rotation the datafeed carries one hash per active secret, comma separated.
    fn check_signature(
        &self,
        auth: &ConnectorAuthType,
        record: &NotificationRecord,
    ) -> CustomResult<SignatureCheck, errors::ConnectorError> {
        let Some(context) = self.get_signature_context(record)? else {
            return Ok(SignatureCheck::NotSigned);
        };
        let secret = self.get_secrets(auth, record)?;
        let Ok(received) = self.get_signature(record) else {
            return Ok(SignatureCheck::Mismatch);
        };

        for candidate in received.split(',').map(str::trim) {
            if context.verify(&secret, candidate)? {
                return Ok(SignatureCheck::Verified);
            }
        }
        Ok(SignatureCheck::Mismatch)
    }
}

#[async_trait::async_trait]
impl IncomingNotification for Paydollar {
    fn parse_notification(
        &self,
        request: &RequestDetails,
    ) -> CustomResult<NotificationRecord, errors::ConnectorError> {
        let fields = decode::form_payload(request)?;
        Ok(transformers::notification_from_fields(fields, request))
    }

    fn acknowledgement_body(&self, _record: &NotificationRecord) -> Option<String> {
        Some(constants::ACKNOWLEDGEMENT.to_string())
    }
}

impl RedirectReturn for Paydollar {
    /// Success and fail URLs only echo `Ref`; the datafeed carries the outcome.
    fn parse_return(
        &self,
        request: &RequestDetails,
        _auth: &ConnectorAuthType,
    ) -> CustomResult<ReturnRecord, errors::ConnectorError> {
        let fields = decode::form_payload(request)?;
        Ok(ReturnRecord {
            status: PaymentStatus::Pending,
            order_id: utils::get_optional_field(&fields, "Ref"),
            gross: None,
            message: None,
            fields,
            signature_check: SignatureCheck::NotSigned,
        })
    }
}
