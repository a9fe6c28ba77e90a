pub mod constants;
pub mod transformers;

mod test;

use common_enums::Connector;
use common_utils::{
    ext_traits::ByteSliceExt,
    request::{Method, RequestBuilder, RequestContent},
    CustomResult,
};
use domain_types::{
    connector_types::{
        NotificationRecord, PaymentOrder, RedirectForm, RequestDetails, ResponseRecord,
        ReturnRecord, SignatureCheck,
    },
    errors,
    router_data::ConnectorAuthType,
    types::ConnectorParams,
    FieldMap,
};
use error_stack::ResultExt;
use hyperswitch_masking::{Maskable, PeekInterface};
use interfaces::{
    api::{ConnectorTransport, Response},
    connector_types::{ConnectorCommon, IncomingNotification, PaymentFormBuilder, RedirectReturn},
    decode,
    verification::SourceVerification,
};

use self::transformers::{
    MollieAuthType, MollieErrorResponse, MolliePaymentResponse, MolliePaymentsRequest,
};
use crate::utils;

pub(crate) mod headers {
    pub(crate) const CONTENT_TYPE: &str = "Content-Type";
    pub(crate) const AUTHORIZATION: &str = "Authorization";
}

#[derive(Clone, Debug)]
pub struct Mollie {
    params: ConnectorParams,
}

impl Mollie {
    pub fn new(params: ConnectorParams) -> Self {
        Self { params }
    }

    fn payment_url(&self, payment_id: Option<&str>) -> CustomResult<String, errors::ConnectorError> {
        let base_url = utils::get_endpoint(&self.params)?;
        Ok(match payment_id {
            Some(id) => format!("{base_url}{}/{id}", constants::PAYMENTS_PATH),
            None => format!("{base_url}{}", constants::PAYMENTS_PATH),
        })
    }

    async fn get_payment(
        &self,
        payment_id: &str,
        auth: &ConnectorAuthType,
        transport: &dyn ConnectorTransport,
    ) -> CustomResult<Response, errors::ConnectorError> {
        let request = RequestBuilder::new()
            .method(Method::Get)
            .url(&self.payment_url(Some(payment_id))?)
            .attach_default_headers()
            .headers(self.get_auth_header(auth)?)
            .build();
        transport.send(request).await
    }

    /// Current state of a payment, straight from the API.
    #[tracing::instrument(skip_all, fields(connector = "mollie", payment_id = %payment_id))]
    pub async fn check_payment_status(
        &self,
        payment_id: &str,
        auth: &ConnectorAuthType,
        transport: &dyn ConnectorTransport,
    ) -> CustomResult<(NotificationRecord, ResponseRecord), errors::ConnectorError> {
        let response = self.get_payment(payment_id, auth, transport).await?;
        if !response.is_success() {
            return Err(self.build_error_response(response));
        }
        let payment: MolliePaymentResponse = response
            .response
            .parse_struct("MolliePaymentResponse")
            .change_context(errors::ConnectorError::ResponseDeserializationFailed)?;
        Ok((
            payment.to_record(&response.response),
            payment.to_response_record(&response.response),
        ))
    }
}

impl ConnectorCommon for Mollie {
    fn id(&self) -> &'static str {
        "mollie"
    }

    fn connector(&self) -> Connector {
        Connector::Mollie
    }

    fn params(&self) -> &ConnectorParams {
        &self.params
    }

    fn get_auth_header(
        &self,
        auth_type: &ConnectorAuthType,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        let auth = MollieAuthType::try_from(auth_type)?;
        Ok(vec![(
            headers::AUTHORIZATION.to_string(),
            Maskable::new_masked(format!("Bearer {}", auth.api_key.peek()).into()),
        )])
    }

    fn build_error_response(&self, res: Response) -> error_stack::Report<errors::ConnectorError> {
        let parsed: Result<MollieErrorResponse, _> = res.response.parse_struct("MollieErrorResponse");
        match parsed {
            Ok(response) => error_stack::report!(errors::ConnectorError::FailedAtConnector {
                message: response.detail,
                code: response.title,
            })
            .attach_printable(format!("status {}", response.status)),
            Err(_) => error_stack::report!(errors::ConnectorError::FailedAtConnector {
                message: res.text(),
                code: res.status_code.to_string(),
            }),
        }
    }
}

#[async_trait::async_trait]
impl PaymentFormBuilder for Mollie {
    /// Creates the payment, then redirects to its hosted checkout.
    #[tracing::instrument(skip_all, fields(connector = "mollie", order_id = %order.order_id))]
    async fn build_payment_form(
        &self,
        order: &PaymentOrder,
        auth: &ConnectorAuthType,
        transport: &dyn ConnectorTransport,
    ) -> CustomResult<RedirectForm, errors::ConnectorError> {
        let body = MolliePaymentsRequest::try_from(order)?;
        let body = serde_json::to_value(&body)
            .change_context(errors::ConnectorError::RequestEncodingFailed)?;

        let request = RequestBuilder::new()
            .method(Method::Post)
            .url(&self.payment_url(None)?)
            .attach_default_headers()
            .headers(self.get_auth_header(auth)?)
            .set_body(RequestContent::Json(body))
            .build();

        let response = transport.send(request).await?;
        if !response.is_success() {
            tracing::warn!(status_code = response.status_code, "payment creation declined");
            return Err(self.build_error_response(response));
        }

        let payment: MolliePaymentResponse = response
            .response
            .parse_struct("MolliePaymentResponse")
            .change_context(errors::ConnectorError::ResponseDeserializationFailed)?;
        let endpoint = payment
            .checkout_url()
            .ok_or(errors::ConnectorError::MissingRequiredField {
                field_name: "_links.checkout.href",
            })?;
        tracing::debug!(payment_id = %payment.id, "payment created");

        Ok(RedirectForm {
            endpoint: endpoint.to_string(),
            method: Method::Get,
            form_fields: FieldMap::new(),
        })
    }
}

/// Webhooks are unsigned; authenticity comes from re-fetching the payment.
impl SourceVerification for Mollie {}

#[async_trait::async_trait]
impl IncomingNotification for Mollie {
    fn parse_notification(
        &self,
        request: &RequestDetails,
    ) -> CustomResult<NotificationRecord, errors::ConnectorError> {
        let fields = decode::form_payload(request)?;
        transformers::notification_from_form(fields)
    }

    async fn confirm_with_provider(
        &self,
        record: &NotificationRecord,
        auth: &ConnectorAuthType,
        transport: &dyn ConnectorTransport,
    ) -> CustomResult<bool, errors::ConnectorError> {
        let payment_id = record
            .transaction_id
            .as_deref()
            .ok_or(errors::ConnectorError::WebhookReferenceIdNotFound)?;

        let response = self.get_payment(payment_id, auth, transport).await?;
        match response.status_code {
            404 => Ok(false),
            _ if response.is_success() => Ok(true),
            _ => Err(self.build_error_response(response)),
        }
    }
}

impl RedirectReturn for Mollie {
    /// The redirect carries nothing but what the shop put in `redirectUrl`.
    fn parse_return(
        &self,
        request: &RequestDetails,
        _auth: &ConnectorAuthType,
    ) -> CustomResult<ReturnRecord, errors::ConnectorError> {
        let fields = decode::form_payload(request)?;
        Ok(ReturnRecord {
            order_id: utils::get_optional_field(&fields, constants::METADATA_ORDER_ID),
            fields,
            signature_check: SignatureCheck::NotSigned,
            ..Default::default()
        })
    }
}
