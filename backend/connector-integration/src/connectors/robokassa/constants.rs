pub const SIGNATURE_FIELD: &str = "SignatureValue";

/// Custom merchant parameters are echoed back and signed when named `shp_*`.
pub const CUSTOM_FIELD_PREFIX: &str = "shp_";

/// Result URL answer Robokassa waits for, followed by the InvId.
pub const ACKNOWLEDGEMENT_PREFIX: &str = "OK";
