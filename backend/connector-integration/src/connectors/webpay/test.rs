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
        connectors::Webpay,
        utils::test_utils::{form_post, query_get, secret, MockTransport},
    };

    const NOTIFICATION: &str = "batch_timestamp=1375951765&currency_id=BYN&amount=21.90\
        &payment_method=cc&order_id=987654&site_order_id=ORDER-12345678\
        &transaction_id=554433&payment_type=1&rrn=123456789012\
        &wsb_signature=af8debfdaf410a10c5b760707ed403da";

    fn connector() -> Webpay {
        Webpay::new(Connectors::default().webpay)
    }

    fn auth() -> ConnectorAuthType {
        ConnectorAuthType::BodyKey {
            api_key: secret("11111111"),
            key1: secret("12345678901234567890"),
        }
    }

    fn order() -> PaymentOrder {
        PaymentOrder {
            description: Some("Coffee beans".to_string()),
            return_url: Some("https://shop.example.com/webpay/return".to_string()),
            notify_url: Some("https://shop.example.com/webpay/notify".to_string()),
            test_mode: true,
            nonce: Some("1242649174".to_string()),
            ..PaymentOrder::new("ORDER-12345678", MinorUnit::new(2190), Currency::BYN)
        }
    }

    #[tokio::test]
    async fn test_payment_form_with_pinned_seed() {
        let form = connector()
            .build_payment_form(&order(), &auth(), &MockTransport::new())
            .await
            .unwrap();

        assert_eq!(form.form_fields.keys().next(), Some("*scart"));
        assert_eq!(form.form_fields.get("wsb_seed"), Some("1242649174"));
        assert_eq!(form.form_fields.get("wsb_test"), Some("1"));
        assert_eq!(form.form_fields.get("wsb_total"), Some("21.90"));
        assert_eq!(
            form.form_fields.get("wsb_invoice_item_name[0]"),
            Some("Coffee beans")
        );
        assert_eq!(
            form.form_fields.get("wsb_signature"),
            Some("338d1647833079f9353907ad266ec0bb5264c0d9")
        );
    }

    #[tokio::test]
    async fn test_pinned_seed_gives_a_stable_signature() {
        let connector = connector();
        let first = connector
            .build_payment_form(&order(), &auth(), &MockTransport::new())
            .await
            .unwrap();
        let second = connector
            .build_payment_form(&order(), &auth(), &MockTransport::new())
            .await
            .unwrap();

        assert!(first.form_fields.get("wsb_signature").is_some());
        assert_eq!(
            first.form_fields.get("wsb_signature"),
            second.form_fields.get("wsb_signature")
        );
        assert_eq!(first.form_fields, second.form_fields);
    }

    #[tokio::test]
    async fn test_random_seed() {
        let order = PaymentOrder {
            nonce: None,
            ..order()
        };
        let connector = connector();
        let form = connector
            .build_payment_form(&order, &auth(), &MockTransport::new())
            .await
            .unwrap();
        let seed = form.form_fields.get("wsb_seed").unwrap();
        assert_eq!(seed.len(), 10);
        assert!(seed.chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_notification() {
        let connector = connector();
        let record = connector.parse_notification(&form_post(NOTIFICATION)).unwrap();
        assert_eq!(record.status, PaymentStatus::Completed);
        assert_eq!(record.order_id.as_deref(), Some("ORDER-12345678"));
        assert_eq!(record.gross_amount(), Some(MinorUnit::new(2190)));
        assert_eq!(
            connector
                .acknowledge(&record, &auth(), &MockTransport::new())
                .await
                .unwrap(),
            Verdict::Accepted
        );

        let tampered = NOTIFICATION.replace("amount=21.90", "amount=2.19");
        let record = connector.parse_notification(&form_post(&tampered)).unwrap();
        assert_eq!(
            connector
                .acknowledge(&record, &auth(), &MockTransport::new())
                .await
                .unwrap(),
            Verdict::Rejected(RejectionReason::SignatureMismatch)
        );
    }

    #[tokio::test]
    async fn test_notification_with_another_secret_key_is_rejected() {
        let connector = connector();
        let record = connector.parse_notification(&form_post(NOTIFICATION)).unwrap();
        let auth = ConnectorAuthType::BodyKey {
            api_key: secret("11111111"),
            key1: secret("09876543210987654321"),
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
    fn test_return() {
        let record = connector()
            .parse_return(
                &query_get("wsb_order_num=ORDER-12345678&wsb_tid=554433"),
                &auth(),
            )
            .unwrap();
        assert_eq!(record.order_id.as_deref(), Some("ORDER-12345678"));
        assert_eq!(record.status, PaymentStatus::Pending);
        assert_eq!(record.signature_check, SignatureCheck::NotSigned);
    }
}
