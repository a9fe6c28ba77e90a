pub const RETURN_KEY_FIELD: &str = "key";
pub const INS_HASH_FIELD: &str = "md5_hash";

/// Demo sales are hashed with this order number instead of the real one.
pub const DEMO_ORDER_NUMBER: &str = "1";

pub const MESSAGE_TYPE_FRAUD_STATUS_CHANGED: &str = "FRAUD_STATUS_CHANGED";
