#[cfg(test)]
mod test {
    #![allow(clippy::unwrap_used)]
    use common_enums::{Currency, PaymentStatus};
    use common_utils::{request::Method, MinorUnit};
    use domain_types::{
        connector_types::{PaymentOrder, RejectionReason, SignatureCheck, Verdict},
        errors::{ConnectorError, ErrorKind},
        router_data::ConnectorAuthType,
        types::Connectors,
    };
    use interfaces::connector_types::{IncomingNotification, PaymentFormBuilder, RedirectReturn};

    use crate::{
        connectors::Mollie,
        utils::test_utils::{form_post, query_get, secret, MockTransport},
    };

    const PAYMENT: &str = r#"{
        "resource": "payment",
        "id": "tr_WDqYK6vllg",
        "mode": "test",
        "status": "open",
        "amount": {"value": "10.00", "currency": "EUR"},
        "description": "Order 12345",
        "metadata": {"order_id": "12345"},
        "_links": {
            "self": {"href": "https://api.mollie.com/v2/payments/tr_WDqYK6vllg", "type": "application/hal+json"},
            "checkout": {"href": "https://www.mollie.com/checkout/select-method/WDqYK6vllg", "type": "text/html"}
        }
    }"#;

    const PAID_PAYMENT: &str = r#"{
        "id": "tr_WDqYK6vllg",
        "mode": "test",
        "status": "paid",
        "amount": {"value": "10.00", "currency": "EUR"},
        "metadata": {"order_id": "12345"},
        "_links": {}
    }"#;

    fn connector() -> Mollie {
        Mollie::new(Connectors::default().mollie)
    }

    fn auth() -> ConnectorAuthType {
        ConnectorAuthType::HeaderKey {
            api_key: secret("test_dHar4XY7LxsDOtmnkVtjNVWXLSlXsM"),
        }
    }

    fn order() -> PaymentOrder {
        PaymentOrder {
            description: Some("Order 12345".to_string()),
            return_url: Some("https://shop.example.com/mollie/return?order_id=12345".to_string()),
            notify_url: Some("https://shop.example.com/mollie/webhook".to_string()),
            ..PaymentOrder::new("12345", MinorUnit::new(1000), Currency::EUR)
        }
    }

    #[tokio::test]
    async fn test_payment_form_creates_payment_first() {
        let transport = MockTransport::new().with_response(201, PAYMENT);
        let form = connector()
            .build_payment_form(&order(), &auth(), &transport)
            .await
            .unwrap();

        assert_eq!(form.method, Method::Get);
        assert_eq!(
            form.endpoint,
            "https://www.mollie.com/checkout/select-method/WDqYK6vllg"
        );
        assert!(form.form_fields.is_empty());

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].url, "https://api.mollie.com/v2/payments");
        assert_eq!(
            requests[0].headers.get("Authorization").map(String::as_str),
            Some("Bearer test_dHar4XY7LxsDOtmnkVtjNVWXLSlXsM")
        );

        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["amount"]["value"], "10.00");
        assert_eq!(body["amount"]["currency"], "EUR");
        assert_eq!(
            body["redirectUrl"],
            "https://shop.example.com/mollie/return?order_id=12345"
        );
        assert_eq!(body["webhookUrl"], "https://shop.example.com/mollie/webhook");
        assert_eq!(body["metadata"]["order_id"], "12345");
        assert!(body.get("method").is_none());
    }

    #[tokio::test]
    async fn test_declined_payment_creation_keeps_provider_message() {
        let transport = MockTransport::new().with_response(
            422,
            r#"{"status":422,"title":"Unprocessable Entity","detail":"The amount is higher than the maximum","field":"amount"}"#,
        );
        let error = connector()
            .build_payment_form(&order(), &auth(), &transport)
            .await
            .unwrap_err();

        assert_eq!(error.current_context().kind(), ErrorKind::ProviderDeclined);
        assert_eq!(
            error.current_context(),
            &ConnectorError::FailedAtConnector {
                message: "The amount is higher than the maximum".to_string(),
                code: "Unprocessable Entity".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_missing_return_url() {
        let order = PaymentOrder {
            return_url: None,
            ..order()
        };
        let transport = MockTransport::new();
        let error = connector()
            .build_payment_form(&order, &auth(), &transport)
            .await
            .unwrap_err();
        assert_eq!(
            error.current_context(),
            &ConnectorError::MissingRequiredField {
                field_name: "return_url"
            }
        );
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_webhook_is_confirmed_by_fetching_payment() {
        let connector = connector();
        let record = connector
            .parse_notification(&form_post("id=tr_WDqYK6vllg"))
            .unwrap();
        assert_eq!(record.transaction_id.as_deref(), Some("tr_WDqYK6vllg"));
        assert_eq!(record.status, PaymentStatus::Pending);

        let transport = MockTransport::new().with_response(200, PAID_PAYMENT);
        let verdict = connector.acknowledge(&record, &auth(), &transport).await.unwrap();
        assert_eq!(verdict, Verdict::Accepted);
        assert_eq!(
            transport.requests()[0].url,
            "https://api.mollie.com/v2/payments/tr_WDqYK6vllg"
        );

        let transport = MockTransport::new().with_response(404, r#"{"status":404,"title":"Not Found","detail":"No payment exists with token tr_WDqYK6vllg."}"#);
        let verdict = connector.acknowledge(&record, &auth(), &transport).await.unwrap();
        assert_eq!(
            verdict,
            Verdict::Rejected(RejectionReason::ConfirmationDenied)
        );
    }

    #[tokio::test]
    async fn test_check_payment_status() {
        let transport = MockTransport::new().with_response(200, PAID_PAYMENT);
        let (record, response) = connector()
            .check_payment_status("tr_WDqYK6vllg", &auth(), &transport)
            .await
            .unwrap();
        assert_eq!(record.status, PaymentStatus::Completed);
        assert_eq!(record.order_id.as_deref(), Some("12345"));
        assert_eq!(record.gross_amount(), Some(MinorUnit::new(1000)));
        assert!(record.test);
        assert!(response.success);
        assert_eq!(response.authorization.as_deref(), Some("tr_WDqYK6vllg"));
    }

    #[test]
    fn test_webhook_without_id() {
        let error = connector().parse_notification(&form_post("")).unwrap_err();
        assert_eq!(
            error.current_context(),
            &ConnectorError::WebhookReferenceIdNotFound
        );
    }

    #[test]
    fn test_return_is_unsigned() {
        let record = connector()
            .parse_return(&query_get("order_id=12345"), &auth())
            .unwrap();
        assert_eq!(record.order_id.as_deref(), Some("12345"));
        assert_eq!(record.status, PaymentStatus::Pending);
        assert_eq!(record.signature_check, SignatureCheck::NotSigned);
    }
}
