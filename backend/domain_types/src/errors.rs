/// Broad classes every connector failure falls into.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Missing or malformed credentials, settings or order data.
    Configuration,
    /// Network failure or a provider answer that could not be understood.
    Transport,
    /// The provider refused a server-to-server request.
    ProviderDeclined,
    /// An inbound payload that cannot be authenticated.
    SignatureInvalid,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConnectorError {
    #[error("Failed to obtain authentication type")]
    FailedToObtainAuthType,
    #[error("Signature secret `{secret_name}` is missing or empty")]
    MissingSignatureSecret { secret_name: &'static str },
    #[error("Invalid connector configuration: {config}")]
    InvalidConnectorConfig { config: &'static str },
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("Currency {currency} is not supported by {connector}")]
    CurrencyNotSupported {
        currency: String,
        connector: &'static str,
    },
    #[error("Failed to convert amount to the required format")]
    AmountConversionFailed,
    #[error("Failed to encode connector request")]
    RequestEncodingFailed,
    #[error("Failed to compute the request signature")]
    SignatureGenerationFailed,

    #[error("Request to the connector timed out")]
    RequestTimeoutReceived,
    #[error("Failed to reach the connector")]
    ProcessingStepFailed(Option<bytes::Bytes>),
    #[error("Failed to deserialize connector response")]
    ResponseDeserializationFailed,
    #[error("Received an unexpected response from the connector")]
    UnexpectedResponseError(bytes::Bytes),

    #[error("Connector declined the request: {message}")]
    FailedAtConnector { message: String, code: String },

    #[error("Failed to decode webhook payload")]
    WebhookBodyDecodingFailed,
    #[error("Signature not found in webhook payload")]
    WebhookSignatureNotFound,
    #[error("Reference id not found in webhook payload")]
    WebhookReferenceIdNotFound,
}

impl ConnectorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FailedToObtainAuthType
            | Self::MissingSignatureSecret { .. }
            | Self::InvalidConnectorConfig { .. }
            | Self::MissingRequiredField { .. }
            | Self::CurrencyNotSupported { .. }
            | Self::AmountConversionFailed
            | Self::RequestEncodingFailed
            | Self::SignatureGenerationFailed => ErrorKind::Configuration,
            Self::RequestTimeoutReceived
            | Self::ProcessingStepFailed(_)
            | Self::ResponseDeserializationFailed
            | Self::UnexpectedResponseError(_) => ErrorKind::Transport,
            Self::FailedAtConnector { .. } => ErrorKind::ProviderDeclined,
            Self::WebhookBodyDecodingFailed
            | Self::WebhookSignatureNotFound
            | Self::WebhookReferenceIdNotFound => ErrorKind::SignatureInvalid,
        }
    }
}

/// Failures of the outbound HTTP client itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ApiClientError {
    #[error("Failed to construct the HTTP client")]
    ClientConstructionFailed,
    #[error("Proxy configuration is invalid")]
    InvalidProxyConfiguration,
    #[error("Failed to encode the request URL")]
    UrlEncodingFailed,
    #[error("Failed to construct the request headers")]
    HeaderMapConstructionFailed,
    #[error("Failed to send the request: {0}")]
    RequestNotSent(String),
    #[error("Request timed out")]
    RequestTimeoutReceived,
    #[error("Failed to read the response body")]
    ResponseDecodingFailed,
}

impl From<&ApiClientError> for ConnectorError {
    fn from(error: &ApiClientError) -> Self {
        match error {
            ApiClientError::RequestTimeoutReceived => Self::RequestTimeoutReceived,
            ApiClientError::ClientConstructionFailed | ApiClientError::InvalidProxyConfiguration => {
                Self::InvalidConnectorConfig { config: "proxy" }
            }
            ApiClientError::UrlEncodingFailed | ApiClientError::HeaderMapConstructionFailed => {
                Self::RequestEncodingFailed
            }
            ApiClientError::RequestNotSent(_) | ApiClientError::ResponseDecodingFailed => {
                Self::ProcessingStepFailed(None)
            }
        }
    }
}
