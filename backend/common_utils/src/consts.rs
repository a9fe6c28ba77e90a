/// Default idle timeout of pooled HTTP connections, in seconds
pub const DEFAULT_IDLE_POOL_CONNECTION_TIMEOUT: u64 = 90;

/// Default timeout of a single outbound request, in seconds
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 30;
