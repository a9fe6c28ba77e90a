use common_utils::CustomResult;
use domain_types::{
    connector_types::{NotificationRecord, SignatureCheck},
    errors::ConnectorError,
    router_data::ConnectorAuthType,
    signature::SignatureContext,
};
use hyperswitch_masking::Secret;

/// Core trait for source verification of inbound provider payloads
pub trait SourceVerification {
    /// Secret the provider signed the payload with.
    fn get_secrets(
        &self,
        _auth: &ConnectorAuthType,
        _record: &NotificationRecord,
    ) -> CustomResult<Secret<String>, ConnectorError> {
        Err(ConnectorError::FailedToObtainAuthType.into())
    }

    /// The signature construction the payload must satisfy; `None` for unsigned providers.
    fn get_signature_context(
        &self,
        _record: &NotificationRecord,
    ) -> CustomResult<Option<SignatureContext>, ConnectorError> {
        Ok(None)
    }

    /// Get the signature value from the payload for verification
    fn get_signature(&self, record: &NotificationRecord) -> CustomResult<String, ConnectorError> {
        record.get_signature().map(ToString::to_string)
    }

    fn check_signature(
        &self,
        auth: &ConnectorAuthType,
        record: &NotificationRecord,
    ) -> CustomResult<SignatureCheck, ConnectorError> {
        let Some(context) = self.get_signature_context(record)? else {
            return Ok(SignatureCheck::NotSigned);
        };
        let secret = self.get_secrets(auth, record)?;

        // an absent signature on a signed scheme is a mismatch, not a parse failure
        let Ok(signature) = self.get_signature(record) else {
            return Ok(SignatureCheck::Mismatch);
        };

        Ok(if context.verify(&secret, &signature)? {
            SignatureCheck::Verified
        } else {
            SignatureCheck::Mismatch
        })
    }

    /// Perform the verification
    fn verify(
        &self,
        auth: &ConnectorAuthType,
        record: &NotificationRecord,
    ) -> CustomResult<bool, ConnectorError> {
        Ok(self.check_signature(auth, record)? != SignatureCheck::Mismatch)
    }
}
