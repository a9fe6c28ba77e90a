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

use self::transformers::RobokassaAuthType;
use crate::utils;

#[derive(Clone, Debug)]
pub struct Robokassa {
    params: ConnectorParams,
}

impl Robokassa {
    pub fn new(params: ConnectorParams) -> Self {
        Self { params }
    }
}

impl ConnectorCommon for Robokassa {
    fn id(&self) -> &'static str {
        "robokassa"
    }

    fn connector(&self) -> Connector {
        Connector::Robokassa
    }

    fn params(&self) -> &ConnectorParams {
        &self.params
    }
}

#[async_trait::async_trait]
impl PaymentFormBuilder for Robokassa {
    #[tracing::instrument(skip_all, fields(connector = "robokassa", order_id = %order.order_id))]
    async fn build_payment_form(
        &self,
        order: &PaymentOrder,
        auth: &ConnectorAuthType,
        _transport: &dyn ConnectorTransport,
    ) -> CustomResult<RedirectForm, errors::ConnectorError> {
        let auth = RobokassaAuthType::try_from(auth)?;
        let endpoint = utils::get_endpoint(&self.params)?;
        transformers::build_payment_form(endpoint, order, &auth)
    }
}

/// Result URL callbacks are signed with password #2.
impl SourceVerification for Robokassa {
    fn get_secrets(
        &self,
        auth: &ConnectorAuthType,
        _record: &NotificationRecord,
    ) -> CustomResult<Secret<String>, errors::ConnectorError> {
        Ok(RobokassaAuthType::try_from(auth)?.password2)
    }

    fn get_signature_context(
        &self,
        record: &NotificationRecord,
    ) -> CustomResult<Option<SignatureContext>, errors::ConnectorError> {
        Ok(Some(transformers::result_signature_context(&record.fields)))
    }
}

#[async_trait::async_trait]
impl IncomingNotification for Robokassa {
    fn parse_notification(
        &self,
        request: &RequestDetails,
    ) -> CustomResult<NotificationRecord, errors::ConnectorError> {
        let fields = decode::form_payload(request)?;
        Ok(transformers::notification_from_fields(fields, request))
    }

    fn acknowledgement_body(&self, record: &NotificationRecord) -> Option<String> {
        record
            .order_id
            .as_deref()
            .map(|inv_id| format!("{}{inv_id}", constants::ACKNOWLEDGEMENT_PREFIX))
    }
}

impl RedirectReturn for Robokassa {
    /// Success URL redirects are signed with password #1; the Fail URL is not signed at all.
    fn parse_return(
        &self,
        request: &RequestDetails,
        auth: &ConnectorAuthType,
    ) -> CustomResult<ReturnRecord, errors::ConnectorError> {
        let record = self.parse_notification(request)?;
        let (status, signature_check) = match record.signature.as_deref() {
            Some(signature) if !signature.is_empty() => {
                let password1 = RobokassaAuthType::try_from(auth)?.password1;
                let check = if transformers::result_signature_context(&record.fields)
                    .verify(&password1, signature)?
                {
                    SignatureCheck::Verified
                } else {
                    SignatureCheck::Mismatch
                };
                (PaymentStatus::Completed, check)
            }
            _ => (PaymentStatus::Failed, SignatureCheck::NotSigned),
        };

        Ok(ReturnRecord {
            status,
            order_id: record.order_id,
            gross: record.gross,
            message: None,
            fields: record.fields,
            signature_check,
        })
    }
}
