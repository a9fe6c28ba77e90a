pub const SIGNATURE_FIELD: &str = "md5sig";

pub const STATUS_PROCESSED: &str = "2";
pub const STATUS_PENDING: &str = "0";

pub const LANGUAGE: &str = "EN";
