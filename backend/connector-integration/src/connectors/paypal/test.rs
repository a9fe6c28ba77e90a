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
        connectors::Paypal,
        utils::test_utils::{form_post, query_get, secret, MockTransport},
    };

    const IPN: &str = "mc_gross=19.95&invoice=A100&payment_status=Completed\
        &txn_id=61E67681CH3238416&mc_currency=USD&test_ipn=1&payer_email=buyer%40example.com";

    fn connector() -> Paypal {
        Paypal::new(Connectors::default().paypal)
    }

    fn auth() -> ConnectorAuthType {
        ConnectorAuthType::HeaderKey {
            api_key: secret("seller@example.com"),
        }
    }

    #[tokio::test]
    async fn test_payment_form() {
        let order = PaymentOrder {
            description: Some("Book".to_string()),
            notify_url: Some("https://shop.example.com/paypal/ipn".to_string()),
            ..PaymentOrder::new("A100", MinorUnit::new(1995), Currency::USD)
        };
        let form = connector()
            .build_payment_form(&order, &auth(), &MockTransport::new())
            .await
            .unwrap();

        assert_eq!(form.method, Method::Post);
        assert_eq!(
            form.endpoint,
            "https://www.sandbox.paypal.com/cgi-bin/webscr"
        );
        assert_eq!(form.form_fields.get("business"), Some("seller@example.com"));
        assert_eq!(form.form_fields.get("amount"), Some("19.95"));
        assert_eq!(
            form.form_fields.get("notify_url"),
            Some("https://shop.example.com/paypal/ipn")
        );
    }

    #[tokio::test]
    async fn test_verified_ipn_is_accepted() {
        let connector = connector();
        let record = connector.parse_notification(&form_post(IPN)).unwrap();
        assert_eq!(record.status, PaymentStatus::Completed);
        assert_eq!(record.gross_amount(), Some(MinorUnit::new(1995)));
        assert!(record.test);

        let transport = MockTransport::new().with_response(200, "VERIFIED");
        assert_eq!(
            connector.acknowledge(&record, &auth(), &transport).await.unwrap(),
            Verdict::Accepted
        );

        let requests = transport.requests();
        assert_eq!(
            requests[0].url,
            "https://ipnpb.sandbox.paypal.com/cgi-bin/webscr"
        );
        assert_eq!(
            requests[0].body.as_deref(),
            Some(format!("cmd=_notify-validate&{IPN}").as_str())
        );
        assert_eq!(
            requests[0].headers.get("Content-Type").map(String::as_str),
            Some("application/x-www-form-urlencoded")
        );
    }

    #[tokio::test]
    async fn test_invalid_ipn_is_rejected() {
        let connector = connector();
        let record = connector.parse_notification(&form_post(IPN)).unwrap();
        let transport = MockTransport::new().with_response(200, "INVALID");
        assert_eq!(
            connector.acknowledge(&record, &auth(), &transport).await.unwrap(),
            Verdict::Rejected(RejectionReason::ConfirmationDenied)
        );
    }

    #[tokio::test]
    async fn test_unexpected_confirmation_answer_is_a_transport_error() {
        let connector = connector();
        let record = connector.parse_notification(&form_post(IPN)).unwrap();

        let transport = MockTransport::new().with_response(200, "<html>maintenance</html>");
        let error = connector
            .acknowledge(&record, &auth(), &transport)
            .await
            .unwrap_err();
        assert!(matches!(
            error.current_context(),
            ConnectorError::UnexpectedResponseError(_)
        ));
        assert_eq!(error.current_context().kind(), ErrorKind::Transport);

        let transport = MockTransport::new().with_response(503, "");
        assert!(connector.acknowledge(&record, &auth(), &transport).await.is_err());
    }

    #[test]
    fn test_pending_and_refused_statuses() {
        let connector = connector();
        let status = |payment_status: &str| {
            connector
                .parse_notification(&form_post(&format!("payment_status={payment_status}")))
                .unwrap()
                .status
        };
        assert_eq!(status("Pending"), PaymentStatus::Pending);
        assert_eq!(status("Denied"), PaymentStatus::Failed);
        assert_eq!(status("Refunded"), PaymentStatus::Failed);
    }

    #[test]
    fn test_return_is_unsigned() {
        let record = connector()
            .parse_return(
                &query_get("invoice=A100&payment_status=Completed&mc_gross=19.95"),
                &auth(),
            )
            .unwrap();
        assert_eq!(record.signature_check, SignatureCheck::NotSigned);
        assert!(record.is_success());
    }
}
