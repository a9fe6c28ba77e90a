//! Provider signature construction and verification.
//!
//! A [`SignatureContext`] is an ordered list of values with the merchant secret
//! placed at fixed positions, joined by a separator, run through a digest and
//! encoded. Adapters build the same context on the outbound and the inbound side.

use base64::Engine;
use common_utils::{
    crypto::{self, GenerateDigest, SignMessage},
    errors::CryptoError,
    CustomResult,
};
use error_stack::ResultExt;
use hyperswitch_masking::{PeekInterface, Secret};

use crate::errors::ConnectorError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DigestAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
    HmacSha1,
    HmacSha256,
    HmacSha512,
}

impl DigestAlgorithm {
    /// Keyed algorithms take the secret as the HMAC key instead of as a segment.
    pub fn is_keyed(self) -> bool {
        matches!(self, Self::HmacSha1 | Self::HmacSha256 | Self::HmacSha512)
    }

    fn compute(self, key: &[u8], message: &[u8]) -> CustomResult<Vec<u8>, CryptoError> {
        match self {
            Self::Md5 => crypto::Md5.generate_digest(message),
            Self::Sha1 => crypto::Sha1.generate_digest(message),
            Self::Sha256 => crypto::Sha256.generate_digest(message),
            Self::Sha512 => crypto::Sha512.generate_digest(message),
            Self::HmacSha1 => crypto::HmacSha1.sign_message(key, message),
            Self::HmacSha256 => crypto::HmacSha256.sign_message(key, message),
            Self::HmacSha512 => crypto::HmacSha512.sign_message(key, message),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DigestEncoding {
    LowerHex,
    UpperHex,
    Base64,
    UrlSafeBase64,
}

impl DigestEncoding {
    pub fn encode(self, digest: &[u8]) -> String {
        match self {
            Self::LowerHex => hex::encode(digest),
            Self::UpperHex => hex::encode_upper(digest),
            Self::Base64 => base64::engine::general_purpose::STANDARD.encode(digest),
            Self::UrlSafeBase64 => base64::engine::general_purpose::URL_SAFE.encode(digest),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SignatureComparison {
    Exact,
    /// ASCII case-insensitive, for providers that send hex digests in either case.
    CaseInsensitive,
}

/// How one provider turns a concatenation into a signature.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SignatureRule {
    pub algorithm: DigestAlgorithm,
    pub separator: &'static str,
    pub encoding: DigestEncoding,
    pub comparison: SignatureComparison,
}

impl SignatureRule {
    pub const fn new(
        algorithm: DigestAlgorithm,
        separator: &'static str,
        encoding: DigestEncoding,
    ) -> Self {
        Self {
            algorithm,
            separator,
            encoding,
            comparison: SignatureComparison::Exact,
        }
    }

    pub const fn case_insensitive(mut self) -> Self {
        self.comparison = SignatureComparison::CaseInsensitive;
        self
    }
}

#[derive(Clone, Debug)]
enum Segment {
    Value(String),
    Secret,
}

#[derive(Clone, Debug)]
pub struct SignatureContext {
    rule: SignatureRule,
    segments: Vec<Segment>,
}

impl SignatureContext {
    pub fn new(rule: SignatureRule) -> Self {
        Self {
            rule,
            segments: Vec::new(),
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.segments.push(Segment::Value(value.into()));
        self
    }

    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.segments
            .extend(values.into_iter().map(|value| Segment::Value(value.into())));
        self
    }

    /// Places the merchant secret at the current position of the concatenation.
    pub fn secret(mut self) -> Self {
        self.segments.push(Segment::Secret);
        self
    }

    fn has_secret_segment(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Secret))
    }

    fn concatenate(&self, secret: &str) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Value(value) => value.as_str(),
                Segment::Secret => secret,
            })
            .collect::<Vec<_>>()
            .join(self.rule.separator)
    }

    pub fn sign(&self, secret: &Secret<String>) -> CustomResult<String, ConnectorError> {
        let secret = secret.peek();
        if secret.is_empty() {
            return Err(ConnectorError::MissingSignatureSecret {
                secret_name: "signature secret",
            }
            .into());
        }

        let digest = if self.rule.algorithm.is_keyed() {
            if self.has_secret_segment() {
                return Err(ConnectorError::InvalidConnectorConfig {
                    config: "keyed signature rule must not place the secret in the message",
                }
                .into());
            }
            self.rule
                .algorithm
                .compute(secret.as_bytes(), self.concatenate("").as_bytes())
        } else {
            if !self.has_secret_segment() {
                return Err(ConnectorError::InvalidConnectorConfig {
                    config: "unkeyed signature rule never consumes the secret",
                }
                .into());
            }
            self.rule
                .algorithm
                .compute(&[], self.concatenate(secret).as_bytes())
        }
        .change_context(ConnectorError::SignatureGenerationFailed)?;

        Ok(self.rule.encoding.encode(&digest))
    }

    /// Unkeyed digest of the values alone, used as the inner half of nested schemes.
    pub fn fingerprint(&self) -> CustomResult<String, ConnectorError> {
        if self.rule.algorithm.is_keyed() || self.has_secret_segment() {
            return Err(ConnectorError::InvalidConnectorConfig {
                config: "fingerprint is only defined for unkeyed rules without a secret",
            }
            .into());
        }
        let digest = self
            .rule
            .algorithm
            .compute(&[], self.concatenate("").as_bytes())
            .change_context(ConnectorError::SignatureGenerationFailed)?;
        Ok(self.rule.encoding.encode(&digest))
    }

    /// Recomputes the signature and compares it with `received`.
    ///
    /// A mismatch is `Ok(false)`; only missing secret material or a broken rule is an error.
    pub fn verify(
        &self,
        secret: &Secret<String>,
        received: &str,
    ) -> CustomResult<bool, ConnectorError> {
        let expected = self.sign(secret)?;
        Ok(compare_signatures(&expected, received, self.rule.comparison))
    }
}

pub fn compare_signatures(
    expected: &str,
    received: &str,
    comparison: SignatureComparison,
) -> bool {
    match comparison {
        SignatureComparison::Exact => {
            crypto::constant_time_eq(expected.as_bytes(), received.as_bytes())
        }
        SignatureComparison::CaseInsensitive => crypto::constant_time_eq(
            expected.to_ascii_lowercase().as_bytes(),
            received.to_ascii_lowercase().as_bytes(),
        ),
    }
}
