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
        connectors::Interkassa,
        utils::test_utils::{form_post, query_get, secret, MockTransport},
    };

    const INTERACTION: &str = "ik_co_id=51237daa8f2a2d8413000000&ik_co_prs_id=409354180523\
        &ik_inv_id=50712321&ik_inv_st=success&ik_inv_crt=2024-03-01+10%3A00%3A00\
        &ik_inv_prc=2024-03-01+10%3A01%3A00&ik_trn_id=&ik_pm_no=ID_4233\
        &ik_pw_via=visa_cpaytrz_merchant_uah&ik_am=100.00&ik_co_rfn=97.5000\
        &ik_ps_price=103.00&ik_cur=UAH&ik_desc=Event+description\
        &ik_sign=wEeZfdwUTZt8nHci9nlVnQ%3D%3D";

    const TEST_INTERACTION: &str = "ik_co_id=51237daa8f2a2d8413000000&ik_co_prs_id=409354180523\
        &ik_inv_id=50712321&ik_inv_st=success&ik_inv_crt=2024-03-01+10%3A00%3A00\
        &ik_inv_prc=2024-03-01+10%3A01%3A00&ik_trn_id=&ik_pm_no=ID_4233\
        &ik_pw_via=test_interkassa_test_xts&ik_am=100.00&ik_co_rfn=97.5000\
        &ik_ps_price=103.00&ik_cur=UAH&ik_desc=Event+description\
        &ik_sign=TM%2BwwiOzOnmk7UaFAbKepw%3D%3D";

    fn connector() -> Interkassa {
        Interkassa::new(Connectors::default().interkassa)
    }

    fn auth() -> ConnectorAuthType {
        ConnectorAuthType::SignatureKey {
            api_key: secret("51237daa8f2a2d8413000000"),
            key1: secret("SecretKey1"),
            api_secret: secret("TestKey1"),
        }
    }

    #[tokio::test]
    async fn test_payment_form_signature() {
        let order = PaymentOrder {
            description: Some("Event description".to_string()),
            return_url: Some("https://shop.example.com/interkassa/success".to_string()),
            cancel_return_url: Some("https://shop.example.com/interkassa/fail".to_string()),
            notify_url: Some("https://shop.example.com/interkassa/interaction".to_string()),
            ..PaymentOrder::new("ID_4233", MinorUnit::new(10000), Currency::UAH)
        };
        let form = connector()
            .build_payment_form(&order, &auth(), &MockTransport::new())
            .await
            .unwrap();

        assert_eq!(form.form_fields.get("ik_ia_m"), Some("POST"));
        assert_eq!(
            form.form_fields.get("ik_sign"),
            Some("UhsTpBINaCq/dYzMZ3EhfA==")
        );
    }

    #[tokio::test]
    async fn test_extra_fields_are_signed() {
        let mut order = PaymentOrder::new("ID_4233", MinorUnit::new(10000), Currency::UAH);
        let connector = connector();
        let plain = connector
            .build_payment_form(&order, &auth(), &MockTransport::new())
            .await
            .unwrap();

        order
            .extra_fields
            .add_field("ik_x_customer", "42")
            .add_field("other", "ignored");
        let extended = connector
            .build_payment_form(&order, &auth(), &MockTransport::new())
            .await
            .unwrap();

        assert_eq!(extended.form_fields.get("ik_x_customer"), Some("42"));
        assert!(!extended.form_fields.contains("other"));
        assert_ne!(
            plain.form_fields.get("ik_sign"),
            extended.form_fields.get("ik_sign")
        );
    }

    #[tokio::test]
    async fn test_interaction() {
        let connector = connector();
        let record = connector.parse_notification(&form_post(INTERACTION)).unwrap();
        assert_eq!(record.status, PaymentStatus::Completed);
        assert_eq!(record.order_id.as_deref(), Some("ID_4233"));
        assert!(!record.test);
        assert_eq!(
            connector
                .acknowledge(&record, &auth(), &MockTransport::new())
                .await
                .unwrap(),
            Verdict::Accepted
        );
    }

    #[tokio::test]
    async fn test_sandbox_interaction_uses_test_key() {
        let connector = connector();
        let record = connector
            .parse_notification(&form_post(TEST_INTERACTION))
            .unwrap();
        assert!(record.test);
        assert_eq!(
            connector
                .acknowledge(&record, &auth(), &MockTransport::new())
                .await
                .unwrap(),
            Verdict::Accepted
        );

        let swapped_keys = ConnectorAuthType::SignatureKey {
            api_key: secret("51237daa8f2a2d8413000000"),
            key1: secret("TestKey1"),
            api_secret: secret("SecretKey1"),
        };
        assert_eq!(
            connector
                .acknowledge(&record, &swapped_keys, &MockTransport::new())
                .await
                .unwrap(),
            Verdict::Rejected(RejectionReason::SignatureMismatch)
        );
    }

    #[test]
    fn test_return_reuses_interaction_check() {
        let record = connector()
            .parse_return(&query_get(INTERACTION), &auth())
            .unwrap();
        assert_eq!(record.signature_check, SignatureCheck::Verified);
        assert!(record.is_success());

        let tampered = INTERACTION.replace("ik_am=100.00", "ik_am=1.00");
        let record = connector()
            .parse_return(&query_get(&tampered), &auth())
            .unwrap();
        assert_eq!(record.signature_check, SignatureCheck::Mismatch);
    }
}
