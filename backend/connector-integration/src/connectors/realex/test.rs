#[cfg(test)]
mod test {
    #![allow(clippy::unwrap_used)]
    use common_enums::{Currency, PaymentStatus};
    use common_utils::MinorUnit;
    use domain_types::{
        connector_types::{PaymentOrder, RejectionReason, SignatureCheck, Verdict},
        router_data::ConnectorAuthType,
        types::Connectors,
    };
    use interfaces::connector_types::{IncomingNotification, PaymentFormBuilder, RedirectReturn};

    use crate::{
        connectors::Realex,
        utils::test_utils::{form_post, secret, MockTransport},
    };

    const RESPONSE: &str = "RESULT=00&AUTHCODE=79347&MESSAGE=%5B+test+system+%5D+Authorised\
        &PASREF=3737468273643&AVSPOSTCODERESULT=M&TIMESTAMP=20130814122239\
        &MERCHANT_ID=thestore&ACCOUNT=internet&ORDER_ID=ORD453-11&AMOUNT=29900\
        &CURRENCY=EUR&SHA1HASH=59ab4c1101d123bbe663f4d20f1f6ff994cb4c66";

    fn connector() -> Realex {
        Realex::new(Connectors::default().realex)
    }

    fn auth() -> ConnectorAuthType {
        ConnectorAuthType::SignatureKey {
            api_key: secret("thestore"),
            key1: secret("Po8lRRT67a"),
            api_secret: secret("internet"),
        }
    }

    #[tokio::test]
    async fn test_payment_form_nested_hash() {
        let order = PaymentOrder {
            nonce: Some("20130814122239".to_string()),
            return_url: Some("https://shop.example.com/realex/response".to_string()),
            ..PaymentOrder::new("ORD453-11", MinorUnit::new(29900), Currency::EUR)
        };
        let form = connector()
            .build_payment_form(&order, &auth(), &MockTransport::new())
            .await
            .unwrap();

        assert_eq!(form.form_fields.get("AMOUNT"), Some("29900"));
        assert_eq!(form.form_fields.get("ACCOUNT"), Some("internet"));
        assert_eq!(
            form.form_fields.get("SHA1HASH"),
            Some("5392a93fadba0546e00fe961779d259b09a9d143")
        );
    }

    #[tokio::test]
    async fn test_pinned_timestamp_gives_a_stable_hash() {
        let order = PaymentOrder {
            nonce: Some("20130814122239".to_string()),
            ..PaymentOrder::new("ORD453-11", MinorUnit::new(29900), Currency::EUR)
        };
        let connector = connector();
        let first = connector
            .build_payment_form(&order, &auth(), &MockTransport::new())
            .await
            .unwrap();
        let second = connector
            .build_payment_form(&order, &auth(), &MockTransport::new())
            .await
            .unwrap();

        assert_eq!(first.form_fields.get("TIMESTAMP"), Some("20130814122239"));
        assert!(first.form_fields.get("SHA1HASH").is_some());
        assert_eq!(
            first.form_fields.get("SHA1HASH"),
            second.form_fields.get("SHA1HASH")
        );
    }

    #[tokio::test]
    async fn test_generated_timestamp() {
        let order = PaymentOrder::new("ORD453-12", MinorUnit::new(100), Currency::GBP);
        let form = connector()
            .build_payment_form(&order, &auth(), &MockTransport::new())
            .await
            .unwrap();
        let timestamp = form.form_fields.get("TIMESTAMP").unwrap();
        assert_eq!(timestamp.len(), 14);
        assert!(timestamp.starts_with("20"));
    }

    #[tokio::test]
    async fn test_response() {
        let connector = connector();
        let record = connector.parse_notification(&form_post(RESPONSE)).unwrap();
        assert_eq!(record.status, PaymentStatus::Completed);
        assert_eq!(record.transaction_id.as_deref(), Some("3737468273643"));
        assert_eq!(record.gross_amount(), Some(MinorUnit::new(29900)));
        assert_eq!(
            connector
                .acknowledge(&record, &auth(), &MockTransport::new())
                .await
                .unwrap(),
            Verdict::Accepted
        );

        let declined = RESPONSE.replace("RESULT=00", "RESULT=101");
        let record = connector.parse_notification(&form_post(&declined)).unwrap();
        assert_eq!(record.status, PaymentStatus::Failed);
        assert_eq!(
            connector
                .acknowledge(&record, &auth(), &MockTransport::new())
                .await
                .unwrap(),
            Verdict::Rejected(RejectionReason::SignatureMismatch)
        );
    }

    #[tokio::test]
    async fn test_response_with_another_shared_secret_is_rejected() {
        let connector = connector();
        let record = connector.parse_notification(&form_post(RESPONSE)).unwrap();
        let auth = ConnectorAuthType::SignatureKey {
            api_key: secret("thestore"),
            key1: secret("secret-of-another-store"),
            api_secret: secret("internet"),
        };
        assert_eq!(
            connector
                .acknowledge(&record, &auth, &MockTransport::new())
                .await
                .unwrap(),
            Verdict::Rejected(RejectionReason::SignatureMismatch)
        );
    }

    #[test]
    fn test_return_accepts_upper_case_hash() {
        let upper = RESPONSE.replace(
            "59ab4c1101d123bbe663f4d20f1f6ff994cb4c66",
            "59AB4C1101D123BBE663F4D20F1F6FF994CB4C66",
        );
        let record = connector().parse_return(&form_post(&upper), &auth()).unwrap();
        assert_eq!(record.signature_check, SignatureCheck::Verified);
        assert!(record.is_success());
    }
}
