pub const API_VERSION: &str = "1.2";

pub const REQUEST_ROOT: &str = "request";

pub const OPERATION_XML_FIELD: &str = "operation_xml";
pub const SIGNATURE_FIELD: &str = "signature";

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_WAIT_SECURE: &str = "wait_secure";
/// Sandbox merchants get this instead of `success`.
pub const STATUS_SANDBOX: &str = "sandbox";
