pub const API_VERSION: &str = "v10";

pub const CHECKSUM_FIELD: &str = "checksum";
pub const CHECKSUM_HEADER: &str = "QuickPay-Checksum-Sha256";

/// `qp_status_code` of an approved operation.
pub const STATUS_CODE_APPROVED: &str = "20000";

pub const LANGUAGE: &str = "en";
