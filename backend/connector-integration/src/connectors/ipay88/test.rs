#[cfg(test)]
mod test {
    #![allow(clippy::unwrap_used)]
    use common_enums::{Currency, PaymentStatus};
    use common_utils::{request::Method, MinorUnit};
    use domain_types::{
        connector_types::{PaymentOrder, RejectionReason, Verdict},
        errors::{ConnectorError, ErrorKind},
        router_data::ConnectorAuthType,
        types::Connectors,
    };
    use interfaces::connector_types::{IncomingNotification, PaymentFormBuilder};

    use crate::{
        connectors::Ipay88,
        utils::test_utils::{form_post, secret, MockTransport},
    };

    const NOTIFICATION: &str = "MerchantCode=M00003&PaymentId=2&RefNo=A00000001\
        &Amount=1%2C278.99&Currency=MYR&TransId=T0045&AuthCode=1234&Status=1\
        &Signature=fFpIiF44tXQbB8ybPKz3KzjAkg8%3D";

    fn connector() -> Ipay88 {
        Ipay88::new(Connectors::default().ipay88)
    }

    fn auth() -> ConnectorAuthType {
        ConnectorAuthType::BodyKey {
            api_key: secret("M00003"),
            key1: secret("apple"),
        }
    }

    #[tokio::test]
    async fn test_payment_form_signature() {
        let order = PaymentOrder {
            description: Some("Photo print".to_string()),
            return_url: Some("https://shop.example.com/ipay88/return".to_string()),
            ..PaymentOrder::new("A00000001", MinorUnit::new(127899), Currency::MYR)
        };
        let form = connector()
            .build_payment_form(&order, &auth(), &MockTransport::new())
            .await
            .unwrap();

        assert_eq!(form.method, Method::Post);
        assert_eq!(form.form_fields.get("Amount"), Some("1,278.99"));
        assert_eq!(
            form.form_fields.get("Signature"),
            Some("ob1WfWatMPl8YoJbYYQeXYLqEE4=")
        );
    }

    #[tokio::test]
    async fn test_notification_is_signed_and_requeried() {
        let connector = connector();
        let record = connector.parse_notification(&form_post(NOTIFICATION)).unwrap();
        assert_eq!(record.status, PaymentStatus::Completed);
        assert_eq!(record.gross_amount(), Some(MinorUnit::new(127899)));

        let transport = MockTransport::new().with_response(200, "00");
        let verdict = connector.acknowledge(&record, &auth(), &transport).await.unwrap();
        assert_eq!(verdict, Verdict::Accepted);
        assert_eq!(
            connector.acknowledgement_body(&record).as_deref(),
            Some("RECEIVEOK")
        );

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url,
            "https://payment.ipay88.com.my/epayment/enquiry.asp"
        );
        assert_eq!(
            requests[0].body.as_deref(),
            Some("MerchantCode=M00003&RefNo=A00000001&Amount=1%2C278.99")
        );
    }

    #[tokio::test]
    async fn test_requery_denial() {
        let connector = connector();
        let record = connector.parse_notification(&form_post(NOTIFICATION)).unwrap();
        let transport = MockTransport::new().with_response(200, "Record not found");
        assert_eq!(
            connector.acknowledge(&record, &auth(), &transport).await.unwrap(),
            Verdict::Rejected(RejectionReason::ConfirmationDenied)
        );
    }

    #[tokio::test]
    async fn test_requery_transport_failure() {
        let connector = connector();
        let record = connector.parse_notification(&form_post(NOTIFICATION)).unwrap();
        let error = connector
            .acknowledge(&record, &auth(), &MockTransport::new())
            .await
            .unwrap_err();
        assert_eq!(error.current_context().kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_forged_notification_never_reaches_requery() {
        let connector = connector();
        let body = NOTIFICATION.replace("Status=1", "Status=0");
        let record = connector.parse_notification(&form_post(&body)).unwrap();
        let transport = MockTransport::new();
        assert_eq!(
            connector.acknowledge(&record, &auth(), &transport).await.unwrap(),
            Verdict::Rejected(RejectionReason::SignatureMismatch)
        );
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_notification_with_another_merchant_key_is_rejected() {
        let connector = connector();
        let record = connector.parse_notification(&form_post(NOTIFICATION)).unwrap();
        let auth = ConnectorAuthType::BodyKey {
            api_key: secret("M00003"),
            key1: secret("banana"),
        };
        let transport = MockTransport::new();
        assert_eq!(
            connector.acknowledge(&record, &auth, &transport).await.unwrap(),
            Verdict::Rejected(RejectionReason::SignatureMismatch)
        );
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_other_currencies_are_rejected() {
        let order = PaymentOrder::new("A1", MinorUnit::new(100), Currency::USD);
        let error = connector()
            .build_payment_form(&order, &auth(), &MockTransport::new())
            .await
            .unwrap_err();
        assert!(matches!(
            error.current_context(),
            ConnectorError::CurrencyNotSupported { .. }
        ));
    }
}
