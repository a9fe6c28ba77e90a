use hyperswitch_masking::{Maskable, Secret};
use serde::{Deserialize, Serialize};

pub type Headers = std::collections::HashSet<(String, Maskable<String>)>;

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum ContentType {
    Json,
    FormUrlEncoded,
    Xml,
    Plain,
}

impl ContentType {
    pub fn mime(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
            Self::Xml => "application/xml",
            Self::Plain => "text/plain",
        }
    }
}

fn default_request_headers() -> [(String, Maskable<String>); 1] {
    use http::header;

    [(header::VIA.to_string(), "ConnectorToolkit".to_string().into())]
}

#[derive(Debug)]
pub struct Request {
    pub url: String,
    pub headers: Headers,
    pub method: Method,
    pub body: Option<RequestContent>,
}

#[derive(Clone, PartialEq)]
pub enum RequestContent {
    Json(serde_json::Value),
    FormUrlEncoded(Vec<(String, String)>),
    Xml(String),
    RawBytes(Vec<u8>),
}

impl std::fmt::Debug for RequestContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Json(_) => "JsonRequestBody",
            Self::FormUrlEncoded(_) => "FormUrlEncodedRequestBody",
            Self::Xml(_) => "XmlRequestBody",
            Self::RawBytes(_) => "RawBytesRequestBody",
        })
    }
}

impl RequestContent {
    pub fn content_type(&self) -> ContentType {
        match self {
            Self::Json(_) => ContentType::Json,
            Self::FormUrlEncoded(_) => ContentType::FormUrlEncoded,
            Self::Xml(_) => ContentType::Xml,
            Self::RawBytes(_) => ContentType::Plain,
        }
    }

    pub fn get_inner_value(&self) -> Secret<String> {
        match self {
            Self::Json(i) => serde_json::to_string(i).unwrap_or_default().into(),
            Self::FormUrlEncoded(i) => serde_urlencoded::to_string(i).unwrap_or_default().into(),
            Self::Xml(i) => i.clone().into(),
            Self::RawBytes(bytes) => String::from_utf8_lossy(bytes).into_owned().into(),
        }
    }

    pub fn get_body_bytes(&self) -> Vec<u8> {
        use hyperswitch_masking::ExposeInterface;
        match self {
            Self::RawBytes(bytes) => bytes.clone(),
            Self::Json(_) | Self::FormUrlEncoded(_) | Self::Xml(_) => {
                self.get_inner_value().expose().into_bytes()
            }
        }
    }
}

impl Request {
    pub fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: String::from(url),
            headers: std::collections::HashSet::new(),
            body: None,
        }
    }

    pub fn get_headers_map(&self) -> std::collections::HashMap<String, String> {
        use hyperswitch_masking::PeekInterface;
        self.headers
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    Maskable::Masked(secret) => secret.peek().to_string(),
                    Maskable::Normal(value) => value.to_string(),
                };
                (key.clone(), value)
            })
            .collect()
    }

    pub fn set_body<T: Into<RequestContent>>(&mut self, body: T) {
        self.body.replace(body.into());
    }

    pub fn add_default_headers(&mut self) {
        self.headers.extend(default_request_headers());
    }

    pub fn add_header(&mut self, header: &str, value: Maskable<String>) {
        self.headers.insert((String::from(header), value));
    }
}

#[derive(Debug)]
pub struct RequestBuilder {
    pub url: String,
    pub headers: Headers,
    pub method: Method,
    pub body: Option<RequestContent>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: Method::Get,
            url: String::with_capacity(1024),
            headers: std::collections::HashSet::new(),
            body: None,
        }
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = url.into();
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn attach_default_headers(mut self) -> Self {
        self.headers.extend(default_request_headers());
        self
    }

    pub fn header(mut self, header: &str, value: &str) -> Self {
        self.headers.insert((header.into(), value.into()));
        self
    }

    pub fn headers(mut self, headers: Vec<(String, Maskable<String>)>) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn set_optional_body<T: Into<RequestContent>>(mut self, body: Option<T>) -> Self {
        body.map(|body| self.body.replace(body.into()));
        self
    }

    pub fn set_body<T: Into<RequestContent>>(mut self, body: T) -> Self {
        self.body.replace(body.into());
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use hyperswitch_masking::Maskable;

    use super::{Method, RequestBuilder, RequestContent};

    #[test]
    fn test_request_builder() {
        let request = RequestBuilder::new()
            .method(Method::Post)
            .url("https://example.com/ipn")
            .attach_default_headers()
            .header("Accept", "text/plain")
            .headers(vec![(
                "Authorization".to_string(),
                Maskable::new_masked("Bearer test_key".to_string().into()),
            )])
            .set_body(RequestContent::FormUrlEncoded(vec![
                ("cmd".to_string(), "_notify-validate".to_string()),
                ("item name".to_string(), "a&b".to_string()),
            ]))
            .build();

        assert_eq!(request.method.to_string(), "POST");
        assert_eq!(request.url, "https://example.com/ipn");

        let headers = request.get_headers_map();
        assert_eq!(headers.get("Accept").map(String::as_str), Some("text/plain"));
        assert_eq!(
            headers.get("Authorization").map(String::as_str),
            Some("Bearer test_key")
        );
        assert!(headers.contains_key("via"));

        let body = request.body.as_ref().map(RequestContent::get_body_bytes);
        assert_eq!(
            body.as_deref(),
            Some(b"cmd=_notify-validate&item+name=a%26b".as_slice())
        );
    }

    #[test]
    fn test_request_content_debug_hides_body() {
        let content = RequestContent::Xml("<secret/>".to_string());
        assert_eq!(format!("{content:?}"), "XmlRequestBody");
    }
}
