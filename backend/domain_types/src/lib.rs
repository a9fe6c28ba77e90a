pub mod connector_types;
pub mod errors;
pub mod field_map;
pub mod router_data;
pub mod signature;
pub mod types;
pub mod utils;

pub use field_map::FieldMap;
