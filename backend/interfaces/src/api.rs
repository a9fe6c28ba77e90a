use common_utils::{request::Request, CustomResult};
use domain_types::errors::ConnectorError;

/// Raw answer of a provider endpoint.
#[derive(Clone, Debug)]
pub struct Response {
    pub headers: Option<http::HeaderMap>,
    pub response: bytes::Bytes,
    pub status_code: u16,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Body as text, for providers that answer with a bare keyword.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.response).into_owned()
    }
}

/// The one outbound HTTP seam. Implementations own pooling, TLS and timeouts.
#[async_trait::async_trait]
pub trait ConnectorTransport: Send + Sync {
    /// Network failures surface as `ConnectorError::ProcessingStepFailed` or
    /// `RequestTimeoutReceived`; any HTTP status is returned as a `Response`.
    async fn send(&self, request: Request) -> CustomResult<Response, ConnectorError>;
}
