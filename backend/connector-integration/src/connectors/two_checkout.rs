pub mod constants;
pub mod transformers;


use common_enums::Connector;
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

use self::transformers::TwoCheckoutAuthType;
use crate::utils;

#[derive(Clone, Debug)]
pub struct TwoCheckout {
    params: ConnectorParams,
}

impl TwoCheckout {
    pub fn new(params: ConnectorParams) -> Self {
        Self { params }
    }
}

impl ConnectorCommon for TwoCheckout {
    fn id(&self) -> &'static str {
        "two_checkout"
    }

    fn connector(&self) -> Connector {
        Connector::TwoCheckout
    }

    fn params(&self) -> &ConnectorParams {
        &self.params
    }
}

#[async_trait::async_trait]
impl PaymentFormBuilder for TwoCheckout {
    #[tracing::instrument(skip_all, fields(connector = "two_checkout", order_id = %order.order_id))]
    async fn build_payment_form(
        &self,
        order: &PaymentOrder,
        auth: &ConnectorAuthType,
        _transport: &dyn ConnectorTransport,
    ) -> CustomResult<RedirectForm, errors::ConnectorError> {
        let auth = TwoCheckoutAuthType::try_from(auth)?;
        let endpoint = utils::get_endpoint(&self.params)?;
        transformers::build_payment_form(endpoint, order, &auth)
    }
}

/// Instant Notification Service messages.
impl SourceVerification for TwoCheckout {
    fn get_secrets(
        &self,
        auth: &ConnectorAuthType,
        _record: &NotificationRecord,
    ) -> CustomResult<Secret<String>, errors::ConnectorError> {
        Ok(TwoCheckoutAuthType::try_from(auth)?.secret_word)
    }

    fn get_signature_context(
        &self,
        record: &NotificationRecord,
    ) -> CustomResult<Option<SignatureContext>, errors::ConnectorError> {
        Ok(Some(transformers::ins_signature_context(&record.fields)))
    }
}

#[async_trait::async_trait]
impl IncomingNotification for TwoCheckout {
    fn parse_notification(
        &self,
        request: &RequestDetails,
    ) -> CustomResult<NotificationRecord, errors::ConnectorError> {
        let fields = decode::form_payload(request)?;
        Ok(transformers::notification_from_fields(fields, request))
    }
}

impl RedirectReturn for TwoCheckout {
    /// The return carries its own `key`, unrelated to the INS hash.
    fn parse_return(
        &self,
        request: &RequestDetails,
        auth: &ConnectorAuthType,
    ) -> CustomResult<ReturnRecord, errors::ConnectorError> {
        let auth = TwoCheckoutAuthType::try_from(auth)?;
        let fields = decode::form_payload(request)?;

        let signature_check = match fields.get_non_empty(constants::RETURN_KEY_FIELD) {
            Some(key) => {
                let context = transformers::return_signature_context(&fields, &auth);
                if context.verify(&auth.secret_word, key)? {
                    SignatureCheck::Verified
                } else {
                    SignatureCheck::Mismatch
                }
            }
            None => SignatureCheck::Mismatch,
        };

        Ok(ReturnRecord {
            status: transformers::return_status(fields.get_or_empty("credit_card_processed")),
            order_id: utils::get_optional_field(&fields, "merchant_order_id"),
            gross: utils::get_optional_amount(&fields, "total"),
            message: None,
            fields,
            signature_check,
        })
    }
}
