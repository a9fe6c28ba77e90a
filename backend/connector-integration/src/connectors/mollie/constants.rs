pub const PAYMENTS_PATH: &str = "v2/payments";

/// Webhook body field carrying the payment id.
pub const WEBHOOK_ID_FIELD: &str = "id";

// Payment statuses
pub const STATUS_PAID: &str = "paid";
pub const STATUS_OPEN: &str = "open";
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_AUTHORIZED: &str = "authorized";

pub const METADATA_ORDER_ID: &str = "order_id";
