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
    use interfaces::{
        connector_types::{IncomingNotification, PaymentFormBuilder, RedirectReturn},
        verification::SourceVerification,
    };

    use crate::{
        connectors::Paydollar,
        utils::test_utils::{form_post, query_get, secret, MockTransport},
    };

    const DATAFEED: &str = "src=0&prc=0&successcode=0&Ref=000000000014&PayRef=1000017\
        &Cur=344&Amt=10.00&payerAuth=Y&Ord=6697090&Holder=Test+Card\
        &secureHash=5097963e4280aa64b9a8cdb8b5539e3cd0ddf31c";

    fn connector() -> Paydollar {
        Paydollar::new(Connectors::default().paydollar)
    }

    fn auth() -> ConnectorAuthType {
        ConnectorAuthType::BodyKey {
            api_key: secret("1"),
            key1: secret("gMAVIEGVpqHmNiyrJE6a3Yb9BGjPjm2D"),
        }
    }

    #[tokio::test]
    async fn test_payment_form_uses_numeric_currency() {
        let order = PaymentOrder {
            return_url: Some("https://shop.example.com/paydollar/success".to_string()),
            cancel_return_url: Some("https://shop.example.com/paydollar/fail".to_string()),
            ..PaymentOrder::new("000000000014", MinorUnit::new(1000), Currency::HKD)
        };
        let form = connector()
            .build_payment_form(&order, &auth(), &MockTransport::new())
            .await
            .unwrap();

        assert_eq!(form.form_fields.get("currCode"), Some("344"));
        assert_eq!(form.form_fields.get("payType"), Some("N"));
        assert_eq!(
            form.form_fields.get("secureHash"),
            Some("68218bf2831eafffd888d64adc1bda36973d4797")
        );
    }

    #[tokio::test]
    async fn test_datafeed() {
        let connector = connector();
        let record = connector.parse_notification(&form_post(DATAFEED)).unwrap();
        assert_eq!(record.status, PaymentStatus::Completed);
        assert_eq!(record.currency, Some(Currency::HKD));
        assert_eq!(record.gross_amount(), Some(MinorUnit::new(1000)));
        assert_eq!(record.transaction_id.as_deref(), Some("1000017"));

        let verdict = connector
            .acknowledge(&record, &auth(), &MockTransport::new())
            .await
            .unwrap();
        assert_eq!(verdict, Verdict::Accepted);
        assert_eq!(connector.acknowledgement_body(&record).as_deref(), Some("OK"));
    }

    #[tokio::test]
    async fn test_datafeed_with_another_secret_is_rejected() {
        let connector = connector();
        let record = connector.parse_notification(&form_post(DATAFEED)).unwrap();
        let auth = ConnectorAuthType::BodyKey {
            api_key: secret("1"),
            key1: secret("not-the-merchant-secret"),
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
    fn test_datafeed_with_rotated_secrets() {
        let connector = connector();
        let rotated = DATAFEED.replace(
            "secureHash=",
            "secureHash=91471dec5d8b9eeb0c27249262345f952564a311%2C",
        );
        let record = connector.parse_notification(&form_post(&rotated)).unwrap();
        assert_eq!(
            connector.check_signature(&auth(), &record).unwrap(),
            SignatureCheck::Verified
        );

        let stale = DATAFEED.replace(
            "5097963e4280aa64b9a8cdb8b5539e3cd0ddf31c",
            "91471dec5d8b9eeb0c27249262345f952564a311",
        );
        let record = connector.parse_notification(&form_post(&stale)).unwrap();
        assert_eq!(
            connector.check_signature(&auth(), &record).unwrap(),
            SignatureCheck::Mismatch
        );
    }

    #[tokio::test]
    async fn test_failed_datafeed_without_hash() {
        let connector = connector();
        let body = "src=1&prc=1&successcode=1&Ref=000000000014&PayRef=1000018&Cur=344&Amt=10.00";
        let record = connector.parse_notification(&form_post(body)).unwrap();
        assert_eq!(record.status, PaymentStatus::Failed);
        assert_eq!(
            connector
                .acknowledge(&record, &auth(), &MockTransport::new())
                .await
                .unwrap(),
            Verdict::Rejected(RejectionReason::SignatureMismatch)
        );
    }

    #[test]
    fn test_return() {
        let record = connector()
            .parse_return(&query_get("Ref=000000000014"), &auth())
            .unwrap();
        assert_eq!(record.order_id.as_deref(), Some("000000000014"));
        assert_eq!(record.signature_check, SignatureCheck::NotSigned);
    }
}
