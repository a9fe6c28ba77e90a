pub const DEFAULT_PRODUCT_INFO: &str = "Payment";

/// User defined fields, in hash order.
pub const UDF_FIELDS: [&str; 10] = [
    "udf1", "udf2", "udf3", "udf4", "udf5", "udf6", "udf7", "udf8", "udf9", "udf10",
];

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_FAILURE: &str = "failure";
