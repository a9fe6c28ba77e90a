pub const FIELD_PREFIX: &str = "ik_";
pub const SIGNATURE_FIELD: &str = "ik_sign";

/// `ik_pw_via` of payments made through the sandbox payment system.
pub const TEST_PAYMENT_SYSTEM: &str = "test_interkassa_test_xts";

pub const INTERACTION_METHOD: &str = "POST";

// ik_inv_st values
pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_FAIL: &str = "fail";
pub const STATUS_CANCELED: &str = "canceled";
