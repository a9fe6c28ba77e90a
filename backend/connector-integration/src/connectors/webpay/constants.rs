pub const API_VERSION: &str = "2";
pub const SIGNATURE_FIELD: &str = "wsb_signature";

/// Empty marker field WebPay requires first in the checkout form.
pub const CART_MARKER: &str = "*scart";

// payment_type values
pub const PAYMENT_COMPLETED: &str = "1";
pub const PAYMENT_DECLINED: &str = "2";
pub const PAYMENT_PENDING: &str = "3";
pub const PAYMENT_AUTHORIZED: &str = "4";
pub const PAYMENT_SYSTEM: &str = "6";
