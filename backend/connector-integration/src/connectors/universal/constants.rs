pub const FIELD_PREFIX: &str = "x_";
pub const SIGNATURE_FIELD: &str = "x_signature";

pub const TRANSACTION_TYPE_SALE: &str = "sale";

pub const RESULT_COMPLETED: &str = "completed";
pub const RESULT_FAILED: &str = "failed";
