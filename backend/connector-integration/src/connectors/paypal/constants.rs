pub const NOTIFY_VALIDATE_PREFIX: &str = "cmd=_notify-validate&";

pub const VERIFIED: &str = "VERIFIED";
pub const INVALID: &str = "INVALID";

pub const COMMAND: &str = "_xclick";
pub const CHARSET: &str = "utf-8";
