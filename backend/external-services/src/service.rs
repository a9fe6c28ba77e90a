use std::{str::FromStr, time::Duration};

use common_utils::{
    consts,
    request::{Headers, Method, Request},
    CustomResult,
};
use domain_types::{
    errors::{ApiClientError, ConnectorError},
    types::Proxy,
};
use error_stack::{report, ResultExt};
use interfaces::api::{ConnectorTransport, Response};
use reqwest::Client;

/// `ConnectorTransport` over a pooled reqwest client.
///
/// Redirects are never followed: a provider answering with a redirect is
/// returned as is, status and body intact.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    bypass_proxy_urls: Vec<String>,
    direct_client: Option<Client>,
}

impl HttpTransport {
    pub fn new(proxy: &Proxy) -> CustomResult<Self, ApiClientError> {
        let client = get_client_builder(proxy, false)?
            .build()
            .change_context(ApiClientError::ClientConstructionFailed)?;

        let direct_client = if proxy.is_proxy_configured(false) && !proxy.bypass_proxy_urls.is_empty()
        {
            Some(
                get_client_builder(proxy, true)?
                    .build()
                    .change_context(ApiClientError::ClientConstructionFailed)?,
            )
        } else {
            None
        };

        Ok(Self {
            client,
            bypass_proxy_urls: proxy.bypass_proxy_urls.clone(),
            direct_client,
        })
    }

    fn client_for(&self, url: &reqwest::Url) -> &Client {
        match &self.direct_client {
            Some(direct) if self.bypass_proxy_urls.iter().any(|bypass| bypass == url.as_str()) => {
                direct
            }
            _ => &self.client,
        }
    }

    #[tracing::instrument(skip_all, fields(method = %request.method, url = %request.url))]
    pub async fn call_connector_api(&self, request: Request) -> CustomResult<Response, ApiClientError> {
        let url =
            reqwest::Url::parse(&request.url).change_context(ApiClientError::UrlEncodingFailed)?;
        let client = self.client_for(&url);

        let mut headers = request.headers.construct_header_map()?;
        let builder = match request.method {
            Method::Get => client.get(url),
            Method::Post => client.post(url),
            Method::Put => client.put(url),
            Method::Delete => client.delete(url),
            Method::Patch => client.patch(url),
        };

        let builder = match request.body {
            Some(body) => {
                // an explicit Content-Type from the connector wins over the body's own
                if !headers.contains_key(reqwest::header::CONTENT_TYPE) {
                    headers.insert(
                        reqwest::header::CONTENT_TYPE,
                        reqwest::header::HeaderValue::from_static(body.content_type().mime()),
                    );
                }
                builder.body(body.get_body_bytes())
            }
            None => builder,
        };

        let started = std::time::Instant::now();
        let response = builder.headers(headers).send().await.map_err(|error| {
            let api_error = if error.is_timeout() {
                ApiClientError::RequestTimeoutReceived
            } else {
                ApiClientError::RequestNotSent(error.to_string())
            };
            tracing::warn!(error = %api_error, "unable to send request to connector");
            report!(api_error)
        })?;

        let status_code = response.status().as_u16();
        let headers = Some(response.headers().to_owned());
        let body = response
            .bytes()
            .await
            .change_context(ApiClientError::ResponseDecodingFailed)?;

        tracing::info!(
            status_code,
            latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "connector responded"
        );

        Ok(Response {
            headers,
            response: body,
            status_code,
        })
    }
}

#[async_trait::async_trait]
impl ConnectorTransport for HttpTransport {
    async fn send(&self, request: Request) -> CustomResult<Response, ConnectorError> {
        self.call_connector_api(request).await.map_err(|error| {
            let context = ConnectorError::from(error.current_context());
            error.change_context(context)
        })
    }
}

fn get_client_builder(
    proxy_config: &Proxy,
    should_bypass_proxy: bool,
) -> CustomResult<reqwest::ClientBuilder, ApiClientError> {
    let mut client_builder = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_idle_timeout(Duration::from_secs(
            proxy_config
                .idle_pool_connection_timeout
                .unwrap_or(consts::DEFAULT_IDLE_POOL_CONNECTION_TIMEOUT),
        ))
        .timeout(Duration::from_secs(
            proxy_config
                .request_timeout
                .unwrap_or(consts::DEFAULT_REQUEST_TIMEOUT),
        ));

    if should_bypass_proxy {
        return Ok(client_builder);
    }

    // Proxy all HTTPS traffic through the configured HTTPS proxy
    if let Some(url) = proxy_config.https_url.as_ref() {
        client_builder = client_builder.proxy(
            reqwest::Proxy::https(url)
                .change_context(ApiClientError::InvalidProxyConfiguration)
                .attach_printable("HTTPS proxy configuration error")?,
        );
    }

    // Proxy all HTTP traffic through the configured HTTP proxy
    if let Some(url) = proxy_config.http_url.as_ref() {
        client_builder = client_builder.proxy(
            reqwest::Proxy::http(url)
                .change_context(ApiClientError::InvalidProxyConfiguration)
                .attach_printable("HTTP proxy configuration error")?,
        );
    }

    Ok(client_builder)
}

pub(super) trait HeaderExt {
    fn construct_header_map(self) -> CustomResult<reqwest::header::HeaderMap, ApiClientError>;
}

impl HeaderExt for Headers {
    fn construct_header_map(self) -> CustomResult<reqwest::header::HeaderMap, ApiClientError> {
        use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

        self.into_iter().try_fold(
            HeaderMap::new(),
            |mut header_map, (header_name, header_value)| {
                let header_name = HeaderName::from_str(&header_name)
                    .change_context(ApiClientError::HeaderMapConstructionFailed)?;
                let header_value = header_value.into_inner();
                let header_value = HeaderValue::from_str(&header_value)
                    .change_context(ApiClientError::HeaderMapConstructionFailed)?;
                header_map.append(header_name, header_value);
                Ok(header_map)
            },
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use common_utils::request::{ContentType, RequestBuilder, RequestContent};
    use domain_types::errors::ErrorKind;
    use wiremock::{
        matchers::{body_string, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    fn transport() -> HttpTransport {
        HttpTransport::new(&Proxy::default()).unwrap()
    }

    #[tokio::test]
    async fn test_form_body_gets_its_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/enquiry"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string("MerchantCode=M00003&RefNo=A1&Amount=1%2C278.99"))
            .respond_with(ResponseTemplate::new(200).set_body_string("00"))
            .expect(1)
            .mount(&server)
            .await;

        let request = RequestBuilder::new()
            .method(Method::Post)
            .url(&format!("{}/enquiry", server.uri()))
            .attach_default_headers()
            .set_body(RequestContent::FormUrlEncoded(vec![
                ("MerchantCode".to_string(), "M00003".to_string()),
                ("RefNo".to_string(), "A1".to_string()),
                ("Amount".to_string(), "1,278.99".to_string()),
            ]))
            .build();

        let response = transport().send(request).await.unwrap();
        assert!(response.is_success());
        assert_eq!(response.text(), "00");
    }

    #[tokio::test]
    async fn test_explicit_content_type_is_kept_for_raw_bodies() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string("cmd=_notify-validate&txn_id=61E67681CH3238416"))
            .respond_with(ResponseTemplate::new(200).set_body_string("VERIFIED"))
            .expect(1)
            .mount(&server)
            .await;

        let request = RequestBuilder::new()
            .method(Method::Post)
            .url(&server.uri())
            .header("Content-Type", ContentType::FormUrlEncoded.mime())
            .set_body(RequestContent::RawBytes(
                b"cmd=_notify-validate&txn_id=61E67681CH3238416".to_vec(),
            ))
            .build();

        let response = transport().send(request).await.unwrap();
        assert_eq!(response.text(), "VERIFIED");
    }

    #[tokio::test]
    async fn test_error_status_and_redirects_are_returned() {
        let server = MockServer::start().await;
        Mock::given(path("/moved"))
            .respond_with(
                ResponseTemplate::new(302).insert_header("Location", "https://elsewhere.example.com/"),
            )
            .mount(&server)
            .await;
        Mock::given(path("/broken"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let transport = transport();
        let moved = transport
            .send(Request::new(Method::Get, &format!("{}/moved", server.uri())))
            .await
            .unwrap();
        assert_eq!(moved.status_code, 302);

        let broken = transport
            .send(Request::new(Method::Get, &format!("{}/broken", server.uri())))
            .await
            .unwrap();
        assert_eq!(broken.status_code, 503);
        assert!(!broken.is_success());
        assert_eq!(broken.text(), "maintenance");
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&Proxy {
            request_timeout: Some(1),
            ..Default::default()
        })
        .unwrap();
        let error = transport
            .send(Request::new(Method::Get, &server.uri()))
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &ConnectorError::RequestTimeoutReceived);
        assert_eq!(error.current_context().kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        let error = transport()
            .send(Request::new(Method::Get, "http://127.0.0.1:1/"))
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &ConnectorError::ProcessingStepFailed(None));
    }

    #[test]
    fn test_invalid_proxy() {
        let error = HttpTransport::new(&Proxy {
            https_url: Some("not a url".to_string()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(
            error.current_context(),
            &ApiClientError::InvalidProxyConfiguration
        );
    }
}
