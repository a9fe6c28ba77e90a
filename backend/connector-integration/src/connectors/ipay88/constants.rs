pub const SIGNATURE_FIELD: &str = "Signature";

pub const STATUS_SUCCESS: &str = "1";

/// Requery answer for a payment that went through.
pub const REQUERY_SUCCESS: &str = "00";

/// Body the BackendURL must answer with, or iPay88 keeps retrying.
pub const ACKNOWLEDGEMENT: &str = "RECEIVEOK";

pub const LANGUAGE: &str = "UTF-8";
