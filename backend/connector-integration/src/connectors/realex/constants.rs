pub const SIGNATURE_FIELD: &str = "SHA1HASH";

pub const AUTO_SETTLE: &str = "1";

pub const RESULT_SUCCESS: &str = "00";
