//! In-memory transport and request builders shared by the connector tests.
#![allow(clippy::unwrap_used)]

use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

use common_utils::{request::Request, CustomResult, Method};
use domain_types::{connector_types::RequestDetails, errors::ConnectorError};
use hyperswitch_masking::Secret;
use interfaces::api::{ConnectorTransport, Response};

#[derive(Clone, Debug)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

/// Answers with queued responses in order and records every request it sees.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Response>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, status_code: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Response {
            headers: None,
            response: bytes::Bytes::from(body.to_string()),
            status_code,
        });
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ConnectorTransport for MockTransport {
    async fn send(&self, request: Request) -> CustomResult<Response, ConnectorError> {
        let recorded = RecordedRequest {
            method: request.method,
            headers: request.get_headers_map(),
            body: request
                .body
                .as_ref()
                .map(|body| String::from_utf8_lossy(&body.get_body_bytes()).into_owned()),
            url: request.url,
        };
        self.requests.lock().unwrap().push(recorded);

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ConnectorError::ProcessingStepFailed(None).into())
    }
}

pub(crate) fn secret(value: &str) -> Secret<String> {
    Secret::new(value.to_string())
}

pub(crate) fn form_post(body: &str) -> RequestDetails {
    RequestDetails {
        method: Method::Post,
        headers: [(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        )]
        .into_iter()
        .collect(),
        query_params: None,
        body: body.as_bytes().to_vec(),
    }
}

pub(crate) fn query_get(query: &str) -> RequestDetails {
    RequestDetails {
        method: Method::Get,
        query_params: Some(query.to_string()),
        ..Default::default()
    }
}
