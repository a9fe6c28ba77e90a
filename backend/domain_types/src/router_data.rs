use hyperswitch_masking::Secret;

/// Credentials handed to an adapter per call.
///
/// Each adapter documents which variant it accepts and what every key means;
/// anything else is rejected with `FailedToObtainAuthType`.
#[derive(Default, Debug, Clone, serde::Deserialize)]
#[serde(tag = "auth_type")]
pub enum ConnectorAuthType {
    HeaderKey {
        api_key: Secret<String>,
    },
    BodyKey {
        api_key: Secret<String>,
        key1: Secret<String>,
    },
    SignatureKey {
        api_key: Secret<String>,
        key1: Secret<String>,
        api_secret: Secret<String>,
    },
    MultiAuthKey {
        api_key: Secret<String>,
        key1: Secret<String>,
        api_secret: Secret<String>,
        key2: Secret<String>,
    },
    #[default]
    NoKey,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use hyperswitch_masking::PeekInterface;

    use super::ConnectorAuthType;

    #[test]
    fn test_auth_type_deserialization() {
        let auth: ConnectorAuthType = serde_json::from_str(
            r#"{"auth_type":"BodyKey","api_key":"merchant_key","key1":"salt"}"#,
        )
        .unwrap();
        match auth {
            ConnectorAuthType::BodyKey { api_key, key1 } => {
                assert_eq!(api_key.peek(), "merchant_key");
                assert_eq!(key1.peek(), "salt");
            }
            other => panic!("unexpected auth type {other:?}"),
        }

        let auth: ConnectorAuthType = serde_json::from_str(r#"{"auth_type":"NoKey"}"#).unwrap();
        assert!(matches!(auth, ConnectorAuthType::NoKey));
    }
}
