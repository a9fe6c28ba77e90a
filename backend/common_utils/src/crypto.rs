//! Utilities for cryptographic algorithms
use ring::{digest, hmac};

use crate::errors::{self, CustomResult};

/// Trait for cryptographically signing messages
pub trait SignMessage {
    /// Takes in a secret and a message and returns the calculated signature as bytes
    fn sign_message(
        &self,
        _secret: &[u8],
        _msg: &[u8],
    ) -> CustomResult<Vec<u8>, errors::CryptoError>;
}

/// Trait for generating an unkeyed digest
pub trait GenerateDigest {
    /// takes a message and creates a digest for it
    fn generate_digest(&self, message: &[u8]) -> CustomResult<Vec<u8>, errors::CryptoError>;
}

/// Compares two byte strings without short-circuiting on the first difference.
pub fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    ring::constant_time::verify_slices_are_equal(left, right).is_ok()
}

macro_rules! impl_hmac {
    ($name: ident, $algorithm: expr, $doc: literal) => {
        #[doc = $doc]
        #[derive(Debug)]
        pub struct $name;

        impl SignMessage for $name {
            fn sign_message(
                &self,
                secret: &[u8],
                msg: &[u8],
            ) -> CustomResult<Vec<u8>, errors::CryptoError> {
                let key = hmac::Key::new($algorithm, secret);
                Ok(hmac::sign(&key, msg).as_ref().to_vec())
            }
        }

    };
}

impl_hmac!(
    HmacSha1,
    hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
    "Represents the HMAC-SHA-1 algorithm"
);
impl_hmac!(HmacSha256, hmac::HMAC_SHA256, "Represents the HMAC-SHA-256 algorithm");
impl_hmac!(HmacSha512, hmac::HMAC_SHA512, "Represents the HMAC-SHA-512 algorithm");

/// MD5 hash function
#[derive(Debug)]
pub struct Md5;

impl GenerateDigest for Md5 {
    fn generate_digest(&self, message: &[u8]) -> CustomResult<Vec<u8>, errors::CryptoError> {
        let digest = md5::compute(message);
        Ok(digest.as_ref().to_vec())
    }
}

/// Secure Hash Algorithm 1
#[derive(Debug)]
pub struct Sha1;

impl GenerateDigest for Sha1 {
    fn generate_digest(&self, message: &[u8]) -> CustomResult<Vec<u8>, errors::CryptoError> {
        let digest = digest::digest(&digest::SHA1_FOR_LEGACY_USE_ONLY, message);
        Ok(digest.as_ref().to_vec())
    }
}

/// Secure Hash Algorithm 256
#[derive(Debug)]
pub struct Sha256;

impl GenerateDigest for Sha256 {
    fn generate_digest(&self, message: &[u8]) -> CustomResult<Vec<u8>, errors::CryptoError> {
        let digest = digest::digest(&digest::SHA256, message);
        Ok(digest.as_ref().to_vec())
    }
}

/// Secure Hash Algorithm 512
#[derive(Debug)]
pub struct Sha512;

impl GenerateDigest for Sha512 {
    fn generate_digest(&self, message: &[u8]) -> CustomResult<Vec<u8>, errors::CryptoError> {
        let digest = digest::digest(&digest::SHA512, message);
        Ok(digest.as_ref().to_vec())
    }
}
