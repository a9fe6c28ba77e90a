use common_enums::Connector;
use common_utils::CustomResult;
use domain_types::{
    connector_types::{
        NotificationRecord, PaymentOrder, RedirectForm, RejectionReason, RequestDetails,
        ReturnRecord, Verdict,
    },
    errors::ConnectorError,
    router_data::ConnectorAuthType,
    types::ConnectorParams,
};
use hyperswitch_masking::Maskable;

use crate::{
    api::{ConnectorTransport, Response},
    verification::SourceVerification,
};

pub trait ConnectorCommon {
    /// Name of the connector (in lowercase).
    fn id(&self) -> &'static str;

    fn connector(&self) -> Connector;

    /// Endpoints this instance was built with.
    fn params(&self) -> &ConnectorParams;

    /// The base URL for interacting with the connector's API.
    fn base_url(&self) -> &str {
        &self.params().base_url
    }

    /// HTTP header used for authorization.
    fn get_auth_header(
        &self,
        _auth_type: &ConnectorAuthType,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
        Ok(Vec::new())
    }

    /// common error response for a connector if it is same in all case
    fn build_error_response(&self, res: Response) -> error_stack::Report<ConnectorError> {
        error_stack::Report::new(ConnectorError::FailedAtConnector {
            message: res.text(),
            code: res.status_code.to_string(),
        })
    }
}

/// Helper role: turns an order into the provider's signed redirect.
#[async_trait::async_trait]
pub trait PaymentFormBuilder: ConnectorCommon + Send + Sync {
    /// `transport` is only used by providers that create the payment server-to-server first.
    async fn build_payment_form(
        &self,
        order: &PaymentOrder,
        auth: &ConnectorAuthType,
        transport: &dyn ConnectorTransport,
    ) -> CustomResult<RedirectForm, ConnectorError>;
}

/// Notification role: parse, verify and optionally confirm an inbound IPN.
#[async_trait::async_trait]
pub trait IncomingNotification: ConnectorCommon + SourceVerification + Send + Sync {
    fn parse_notification(
        &self,
        request: &RequestDetails,
    ) -> CustomResult<NotificationRecord, ConnectorError>;

    /// Extra "did you really send this" round-trip; providers without one accept.
    async fn confirm_with_provider(
        &self,
        _record: &NotificationRecord,
        _auth: &ConnectorAuthType,
        _transport: &dyn ConnectorTransport,
    ) -> CustomResult<bool, ConnectorError> {
        Ok(true)
    }

    /// Fixed body some providers expect in the HTTP answer to their notification.
    fn acknowledgement_body(&self, _record: &NotificationRecord) -> Option<String> {
        None
    }

    async fn acknowledge(
        &self,
        record: &NotificationRecord,
        auth: &ConnectorAuthType,
        transport: &dyn ConnectorTransport,
    ) -> CustomResult<Verdict, ConnectorError> {
        let order_id = record.order_id.as_deref().unwrap_or_default();

        if !self.verify(auth, record)? {
            tracing::warn!(
                connector = self.id(),
                order_id,
                "notification signature mismatch"
            );
            return Ok(Verdict::Rejected(RejectionReason::SignatureMismatch));
        }

        if !self.confirm_with_provider(record, auth, transport).await? {
            tracing::warn!(
                connector = self.id(),
                order_id,
                "provider did not confirm notification"
            );
            return Ok(Verdict::Rejected(RejectionReason::ConfirmationDenied));
        }

        tracing::info!(
            connector = self.id(),
            order_id,
            status = %record.status,
            "notification accepted"
        );
        Ok(Verdict::Accepted)
    }
}

/// Return role: the payer's browser coming back from the hosted page.
pub trait RedirectReturn: IncomingNotification {
    /// Defaults to the notification parser and signature check, for providers
    /// whose return carries the same fields as their notification.
    fn parse_return(
        &self,
        request: &RequestDetails,
        auth: &ConnectorAuthType,
    ) -> CustomResult<ReturnRecord, ConnectorError> {
        let record = self.parse_notification(request)?;
        let signature_check = self.check_signature(auth, &record)?;
        Ok(ReturnRecord {
            status: record.status,
            order_id: record.order_id,
            gross: record.gross,
            message: record.message,
            fields: record.fields,
            signature_check,
        })
    }
}

/// Every role, as handed out by the connector registry.
pub trait ConnectorServiceTrait: PaymentFormBuilder + IncomingNotification + RedirectReturn {}

impl<T> ConnectorServiceTrait for T where T: PaymentFormBuilder + IncomingNotification + RedirectReturn {}

pub type BoxedConnector = Box<dyn ConnectorServiceTrait>;
