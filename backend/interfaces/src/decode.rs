//! Decoding of inbound provider payloads.

use base64::Engine;
use common_utils::{ext_traits::ByteSliceExt, CustomResult};
use domain_types::{connector_types::RequestDetails, errors::ConnectorError, FieldMap};
use error_stack::ResultExt;

fn form_source(request: &RequestDetails) -> &[u8] {
    if request.body.is_empty() {
        request.query_params.as_deref().unwrap_or_default().as_bytes()
    } else {
        request.body.as_slice()
    }
}

/// Form fields of a notification or return: the body when present, the query string otherwise.
pub fn form_payload(request: &RequestDetails) -> CustomResult<FieldMap, ConnectorError> {
    FieldMap::from_urlencoded(form_source(request))
        .change_context(ConnectorError::WebhookBodyDecodingFailed)
}

/// The bytes [`form_payload`] decoded, kept verbatim on the record.
pub fn raw_form_payload(request: &RequestDetails) -> Vec<u8> {
    form_source(request).to_vec()
}

pub fn json_payload<T>(
    request: &RequestDetails,
    type_name: &'static str,
) -> CustomResult<T, ConnectorError>
where
    T: serde::de::DeserializeOwned,
{
    request
        .body
        .as_slice()
        .parse_struct(type_name)
        .change_context(ConnectorError::WebhookBodyDecodingFailed)
}

/// Standard base64 text to UTF-8.
pub fn base64_text(encoded: &str) -> CustomResult<String, ConnectorError> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .change_context(ConnectorError::WebhookBodyDecodingFailed)
        .attach_printable("payload is not valid base64")?;
    String::from_utf8(bytes).change_context(ConnectorError::WebhookBodyDecodingFailed)
}

pub fn xml_payload<T>(xml: &str) -> CustomResult<T, ConnectorError>
where
    T: serde::de::DeserializeOwned,
{
    quick_xml::de::from_str(xml)
        .change_context(ConnectorError::WebhookBodyDecodingFailed)
        .attach_printable("payload is not the expected xml document")
}

/// Flat string view of a JSON object's scalar members.
pub fn json_scalar_fields(value: &serde_json::Value) -> FieldMap {
    value
        .as_object()
        .map(|object| {
            object
                .iter()
                .filter_map(|(key, value)| {
                    let value = match value {
                        serde_json::Value::String(text) => text.clone(),
                        serde_json::Value::Number(number) => number.to_string(),
                        serde_json::Value::Bool(flag) => flag.to_string(),
                        _ => return None,
                    };
                    Some((key.clone(), value))
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use domain_types::{connector_types::RequestDetails, errors::ConnectorError};

    use super::*;

    #[test]
    fn test_form_payload_prefers_body() {
        let request = RequestDetails {
            query_params: Some("a=query".to_string()),
            body: b"a=body&b=2".to_vec(),
            ..Default::default()
        };
        let fields = form_payload(&request).unwrap();
        assert_eq!(fields.get("a"), Some("body"));

        let request = RequestDetails {
            query_params: Some("a=query".to_string()),
            ..Default::default()
        };
        assert_eq!(form_payload(&request).unwrap().get("a"), Some("query"));
        assert_eq!(raw_form_payload(&request), b"a=query".to_vec());
    }

    #[test]
    fn test_raw_form_payload_prefers_body() {
        let request = RequestDetails {
            query_params: Some("a=query".to_string()),
            body: b"a=body".to_vec(),
            ..Default::default()
        };
        assert_eq!(raw_form_payload(&request), b"a=body".to_vec());
        assert!(raw_form_payload(&RequestDetails::default()).is_empty());
    }

    #[test]
    fn test_base64_text() {
        assert_eq!(base64_text("PHI+MTwvcj4=").unwrap(), "<r>1</r>");
        let error = base64_text("%%%").unwrap_err();
        assert_eq!(
            error.current_context(),
            &ConnectorError::WebhookBodyDecodingFailed
        );
    }

    #[test]
    fn test_json_scalar_fields() {
        let value = serde_json::json!({
            "id": 42,
            "order_id": "A100",
            "accepted": true,
            "operations": [{"type": "capture"}]
        });
        let fields = json_scalar_fields(&value);
        assert_eq!(fields.get("id"), Some("42"));
        assert_eq!(fields.get("accepted"), Some("true"));
        assert!(!fields.contains("operations"));
    }
}
