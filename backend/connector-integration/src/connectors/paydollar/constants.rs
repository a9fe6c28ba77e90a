pub const SIGNATURE_FIELD: &str = "secureHash";

/// Normal sale; `H` would hold the authorization.
pub const PAY_TYPE_NORMAL: &str = "N";
pub const PAY_METHOD_ALL: &str = "ALL";
pub const MPS_MODE_NONE: &str = "NIL";
pub const LANGUAGE: &str = "E";

// successcode values
pub const SUCCESS_CODE_SUCCEEDED: &str = "0";
pub const SUCCESS_CODE_FAILED: &str = "1";

pub const ACKNOWLEDGEMENT: &str = "OK";
