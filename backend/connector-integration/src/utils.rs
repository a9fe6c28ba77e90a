#[cfg(test)]
pub(crate) mod test_utils;

use common_enums::Currency;
use common_utils::{AmountConvertor, MinorUnit, StringMajorUnit};
use domain_types::{errors, types::ConnectorParams, FieldMap};
use error_stack::{Report, ResultExt};
use serde::Serialize;

type Error = Report<errors::ConnectorError>;

pub fn convert_amount<T>(
    amount_convertor: &dyn AmountConvertor<Output = T>,
    amount: MinorUnit,
    currency: Currency,
) -> Result<T, Error> {
    amount_convertor
        .convert(amount, currency)
        .change_context(errors::ConnectorError::AmountConversionFailed)
}

pub fn serialize_to_xml_string_with_root<T: Serialize>(
    root_name: &str,
    data: &T,
) -> Result<String, Error> {
    let xml_content = quick_xml::se::to_string_with_root(root_name, data)
        .change_context(errors::ConnectorError::RequestEncodingFailed)
        .attach_printable("Failed to serialize XML with root")?;

    let full_xml = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>{xml_content}");
    Ok(full_xml)
}

/// Hosted page endpoint; an empty URL is a deployment mistake, not a provider answer.
pub fn get_endpoint(params: &ConnectorParams) -> Result<&str, Error> {
    Some(params.base_url.as_str())
        .filter(|base_url| !base_url.trim().is_empty())
        .ok_or_else(|| {
            errors::ConnectorError::InvalidConnectorConfig { config: "base_url" }.into()
        })
}

/// Server-to-server endpoint, falling back to the hosted page one.
pub fn get_secondary_endpoint(params: &ConnectorParams) -> Result<&str, Error> {
    match params.secondary_base_url.as_deref() {
        Some(url) if !url.trim().is_empty() => Ok(url),
        _ => get_endpoint(params),
    }
}

pub fn get_optional_amount(fields: &FieldMap, name: &str) -> Option<StringMajorUnit> {
    fields
        .get_non_empty(name)
        .map(|amount| StringMajorUnit::new(amount.trim().to_string()))
}

pub fn get_optional_field(fields: &FieldMap, name: &str) -> Option<String> {
    fields.get_non_empty(name).map(ToString::to_string)
}

/// Copies the caller's extra fields whose names start with `prefix`.
pub fn merge_prefixed_fields(form_fields: &mut FieldMap, extra_fields: &FieldMap, prefix: &str) {
    form_fields.extend(extra_fields.filter_prefix(prefix));
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use common_utils::StringMajorUnitForConnector;
    use domain_types::errors::ConnectorError;

    use super::*;

    #[test]
    fn test_convert_amount() {
        let amount =
            convert_amount(&StringMajorUnitForConnector, MinorUnit::new(1050), Currency::EUR)
                .unwrap();
        assert_eq!(amount.get_amount_as_string(), "10.50");
    }

    #[test]
    fn test_serialize_xml_with_root() {
        #[derive(Serialize)]
        struct Order {
            order_id: String,
            amount: String,
        }
        let xml = serialize_to_xml_string_with_root(
            "request",
            &Order {
                order_id: "A&B".to_string(),
                amount: "1.00".to_string(),
            },
        )
        .unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><request><order_id>A&amp;B</order_id><amount>1.00</amount></request>"
        );
    }

    #[test]
    fn test_endpoints() {
        let params = ConnectorParams::new("", None);
        let error = get_endpoint(&params).unwrap_err();
        assert_eq!(
            error.current_context(),
            &ConnectorError::InvalidConnectorConfig { config: "base_url" }
        );

        let params = ConnectorParams::new("https://pay.example.com", None);
        assert_eq!(
            get_secondary_endpoint(&params).unwrap(),
            "https://pay.example.com"
        );
        let params = ConnectorParams::new(
            "https://pay.example.com",
            Some("https://api.example.com".to_string()),
        );
        assert_eq!(
            get_secondary_endpoint(&params).unwrap(),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_merge_prefixed_fields() {
        let extra: FieldMap = [("shp_item", "1"), ("other", "x"), ("shp_user", "u")]
            .into_iter()
            .collect();
        let mut form = FieldMap::new();
        form.add_field("MrchLogin", "demo");
        merge_prefixed_fields(&mut form, &extra, "shp_");
        assert_eq!(
            form.keys().collect::<Vec<_>>(),
            vec!["MrchLogin", "shp_item", "shp_user"]
        );
    }
}
